use super::SectionHead;
use crate::content::COMPARISON_ROWS;
use crate::observer::use_fade_in;
use leptos::prelude::*;

#[component]
pub fn Comparison() -> impl IntoView {
    let table = use_fade_in();

    view! {
        <section class="pl2-compare">
            <div class="pl2-container">
                <SectionHead
                    label="Why Paylloom"
                    title="Paylloom vs. Building In-House"
                    subtitle="The math is clear. Every day you spend building payments is a day not spent on your product."
                />
                <div class="pl2-compare-table pl2-fade-up" node_ref=table>
                    <div class="pl2-compare-header">
                        <div class="pl2-compare-feat">"Feature"</div>
                        <div class="pl2-compare-diy">"Build Yourself"</div>
                        <div class="pl2-compare-pl">"Use Paylloom ✓"</div>
                    </div>
                    {COMPARISON_ROWS
                        .iter()
                        .map(|row| {
                            view! {
                                <div class="pl2-compare-row">
                                    <div class="pl2-compare-feat">{row.feature}</div>
                                    <div class="pl2-compare-diy pl2-compare-bad">{row.diy}</div>
                                    <div class="pl2-compare-pl pl2-compare-good">{row.paylloom}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
