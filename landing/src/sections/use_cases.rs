use super::SectionHead;
use crate::content::USE_CASES;
use crate::observer::use_fade_in;
use leptos::prelude::*;

#[component]
pub fn UseCases() -> impl IntoView {
    view! {
        <section class="pl2-usecases">
            <div class="pl2-container">
                <SectionHead
                    label="Use Cases"
                    title="Who Uses Paylloom"
                    subtitle="Built for any two-sided marketplace that moves money between buyers and sellers."
                />
                <div class="pl2-usecases-grid">
                    {USE_CASES
                        .iter()
                        .map(|case| {
                            let card = use_fade_in();
                            view! {
                                <div class="pl2-usecase-card pl2-fade-up" node_ref=card>
                                    <div class="pl2-usecase-icon">{case.icon}</div>
                                    <h3 class="pl2-usecase-type">{case.kind}</h3>
                                    <p class="pl2-usecase-scenario">{case.scenario}</p>
                                    <div class="pl2-usecase-benefit">{format!("✓ {}", case.benefit)}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
