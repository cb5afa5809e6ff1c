use super::SectionHead;
use crate::content::FAQS;
use crate::observer::use_fade_in;
use crate::state::FaqAccordion;
use leptos::prelude::*;

fn chevron(open: bool) -> &'static str {
    if open { "−" } else { "+" }
}

#[component]
pub fn Faq() -> impl IntoView {
    let accordion = RwSignal::new(FaqAccordion::default());

    view! {
        <section class="pl2-faq" id="faq">
            <div class="pl2-container">
                <SectionHead label="FAQ" title="Common Questions" />
                <div class="pl2-faq-list">
                    {FAQS
                        .iter()
                        .enumerate()
                        .map(|(index, faq)| {
                            let item = use_fade_in();
                            let is_open = move || accordion.get().is_open(index);
                            // class: keeps the fade-in class the observer adds
                            view! {
                                <div class="pl2-faq-item pl2-fade-up" class:pl2-faq-open=is_open node_ref=item>
                                    <button
                                        class="pl2-faq-q"
                                        aria-expanded=move || is_open().to_string()
                                        on:click=move |_| accordion.update(|a| a.toggle(index))
                                    >
                                        <span>{faq.question}</span>
                                        <span class="pl2-faq-chevron">{move || chevron(is_open())}</span>
                                    </button>
                                    <Show when=is_open>
                                        <div class="pl2-faq-a">{faq.answer}</div>
                                    </Show>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chevron_reflects_state() {
        assert_eq!(chevron(true), "−");
        assert_eq!(chevron(false), "+");
    }

    #[test]
    fn opening_second_then_fourth_item() {
        let mut accordion = FaqAccordion::default();
        accordion.toggle(1);
        accordion.toggle(3);

        let open: Vec<_> = (0..FAQS.len()).filter(|&i| accordion.is_open(i)).collect();
        assert_eq!(open, vec![3]);
        assert_eq!(FAQS[open[0]].question, "Can I customize the fee split?");
    }
}
