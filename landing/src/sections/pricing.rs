use super::SectionHead;
use crate::config::routes;
use crate::content::{CALCULATOR_ROWS, PRICING};
use crate::observer::use_fade_in;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Pricing() -> impl IntoView {
    let card = use_fade_in();
    let tier = &PRICING;

    view! {
        <section class="pl2-pricing" id="pricing">
            <div class="pl2-container">
                <SectionHead
                    label="Pricing"
                    title="Simple, Transparent Pricing"
                    subtitle="No monthly fees. Pay only for what you process. Scale with confidence."
                />
                <div class="pl2-pricing-card pl2-fade-up" node_ref=card>
                    <div class="pl2-pricing-main">
                        <div class="pl2-pricing-badge">{tier.badge}</div>
                        <div class="pl2-pricing-name">{tier.name}</div>
                        <div class="pl2-pricing-rate">
                            <span class="pl2-pricing-pct">{tier.percent}</span>
                            <span class="pl2-pricing-plus">{tier.fixed}</span>
                        </div>
                        <div class="pl2-pricing-per">{tier.per}</div>
                        <ul class="pl2-pricing-features">
                            {tier
                                .inclusions
                                .iter()
                                .map(|item| view! { <li><span class="pl2-check">"✓"</span>{*item}</li> })
                                .collect_view()}
                        </ul>
                        <A href=routes::SIGNUP attr:class="pl2-btn-primary pl2-btn-full">
                            "Get Started Free"
                        </A>
                        <div class="pl2-pricing-note">{tier.note}</div>
                    </div>
                    <div class="pl2-pricing-calc">
                        <div class="pl2-calc-title">"💡 Example Calculator"</div>
                        {CALCULATOR_ROWS
                            .iter()
                            .map(|row| {
                                view! {
                                    <div class="pl2-calc-row">
                                        <div class="pl2-calc-gmv">{row.gmv}</div>
                                        <div class="pl2-calc-fee">{format!("→ {}", row.fee)}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                        <p class="pl2-calc-note">
                            "* Payment processor fees (IntaSend) are separate. "
                            "Volume discounts available for GMV > KES 5M/month."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}
