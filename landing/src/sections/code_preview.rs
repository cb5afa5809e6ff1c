use crate::content::{CODE_SAMPLES, CodeSample};
use crate::observer::use_fade_in;
use crate::state::CodeTabs;
use leptos::prelude::*;

/// Sample shown for the current selection.
fn active_sample(tabs: &CodeTabs) -> Option<&'static CodeSample> {
    CODE_SAMPLES.get(tabs.active())
}

#[component]
pub fn CodePreview() -> impl IntoView {
    let tabs = RwSignal::new(CodeTabs::new(CODE_SAMPLES.len()));
    let left = use_fade_in();
    let right = use_fade_in();

    view! {
        <section class="pl2-code-section">
            <div class="pl2-container">
                <div class="pl2-code-inner">
                    <div class="pl2-code-left pl2-fade-up" node_ref=left>
                        <div class="pl2-label">"API Preview"</div>
                        <h2 class="pl2-h2">"Integrate in Under 5 Minutes"</h2>
                        <p class="pl2-section-sub">
                            "Clean, RESTful endpoints. Comprehensive docs. SDKs for Node.js and Python. "
                            "You'll be processing your first split payment before lunch."
                        </p>
                        <a href="#" class="pl2-btn-primary" style="display: inline-block; margin-top: 1.5rem">
                            "View Full API Docs →"
                        </a>
                    </div>
                    <div class="pl2-code-right pl2-fade-up" node_ref=right>
                        <div class="pl2-code-tabs" role="tablist">
                            {CODE_SAMPLES
                                .iter()
                                .enumerate()
                                .map(|(index, sample)| {
                                    view! {
                                        <button
                                            class="pl2-code-tab"
                                            class:pl2-code-tab-active=move || tabs.get().is_active(index)
                                            role="tab"
                                            aria-selected=move || tabs.get().is_active(index).to_string()
                                            on:click=move |_| {
                                                tabs.update(|t| {
                                                    t.select(index);
                                                })
                                            }
                                        >
                                            {sample.label}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="pl2-code-block" role="tabpanel">
                            <pre>
                                <code class=move || {
                                    active_sample(&tabs.get())
                                        .map(|s| format!("language-{}", s.lang))
                                        .unwrap_or_default()
                                }>
                                    {move || active_sample(&tabs.get()).map(|s| s.code).unwrap_or_default()}
                                </code>
                            </pre>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown(tabs: &CodeTabs) -> &'static str {
        active_sample(tabs).map(|s| s.code).unwrap_or_default()
    }

    #[test]
    fn first_sample_is_shown_initially() {
        let tabs = CodeTabs::new(CODE_SAMPLES.len());
        assert!(shown(&tabs).contains("paylloom.wallets.topup"));
    }

    #[test]
    fn each_tab_shows_its_own_sample() {
        let mut tabs = CodeTabs::new(CODE_SAMPLES.len());
        for (index, sample) in CODE_SAMPLES.iter().enumerate() {
            assert!(tabs.select(index));
            assert_eq!(shown(&tabs), sample.code);
        }
    }

    #[test]
    fn top_up_then_split_payment_shows_only_split() {
        let mut tabs = CodeTabs::new(CODE_SAMPLES.len());
        tabs.select(0);
        tabs.select(1);

        let code = shown(&tabs);
        assert!(code.contains("Split payment between platform & seller"));
        assert!(!code.contains("Initiate buyer wallet top-up"));
        assert!(!code.contains("Seller requests withdrawal"));
    }

    #[test]
    fn rejected_selection_keeps_current_sample() {
        let mut tabs = CodeTabs::new(CODE_SAMPLES.len());
        tabs.select(2);
        assert!(!tabs.select(CODE_SAMPLES.len()));
        assert_eq!(shown(&tabs), CODE_SAMPLES[2].code);
    }
}
