use super::SectionHead;
use crate::content::{HOW_STEPS, StepVisual};
use crate::observer::use_fade_in;
use leptos::prelude::*;

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section class="pl2-how" id="how">
            <div class="pl2-container">
                <SectionHead
                    label="How It Works"
                    title="Three Steps to Your First Split Payment"
                    subtitle="Paylloom handles the complexity. You focus on your marketplace."
                    dark=true
                />
                <div class="pl2-how-steps">
                    {HOW_STEPS
                        .iter()
                        .map(|step| {
                            let row = use_fade_in();
                            view! {
                                <div class="pl2-how-step pl2-fade-up" node_ref=row>
                                    <div class="pl2-how-step-content">
                                        <div class="pl2-how-num">{step.num}</div>
                                        <h3 class="pl2-how-title">{step.title}</h3>
                                        <p class="pl2-how-desc">{step.desc}</p>
                                        <div class="pl2-how-note">{step.note}</div>
                                    </div>
                                    <StepMockup visual=step.visual />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn StepMockup(visual: StepVisual) -> impl IntoView {
    let mockup = match visual {
        StepVisual::MpesaTopUp => view! {
            <div class="pl2-mpesa-card">
                <div class="pl2-mpesa-logo">"M-PESA"</div>
                <div class="pl2-mpesa-amount">"KES 5,000"</div>
                <div class="pl2-mpesa-status">"STK Push Sent ✓"</div>
            </div>
        }
        .into_any(),
        StepVisual::FeeSplit => view! {
            <div class="pl2-split-diagram">
                <div class="pl2-split-total">"KES 1,000"</div>
                <div class="pl2-split-arrow">"↓"</div>
                <div class="pl2-split-row">
                    <div class="pl2-split-item pl2-split-fee">
                        <div class="pl2-split-pct">"10%"</div>
                        <div class="pl2-split-lbl">"Platform Fee"</div>
                        <div class="pl2-split-amt">"KES 100"</div>
                    </div>
                    <div class="pl2-split-item pl2-split-earn">
                        <div class="pl2-split-pct">"90%"</div>
                        <div class="pl2-split-lbl">"Seller Earns"</div>
                        <div class="pl2-split-amt">"KES 900"</div>
                    </div>
                </div>
            </div>
        }
        .into_any(),
        StepVisual::Payout => view! {
            <div class="pl2-payout-card">
                <div class="pl2-payout-row">
                    <span>"Available Balance"</span>
                    <strong>"KES 900"</strong>
                </div>
                // Illustration only, not wired to anything
                <button class="pl2-payout-btn" tabindex="-1">"Withdraw to M-Pesa"</button>
                <div class="pl2-payout-success">"✓ Sent in 47 seconds"</div>
            </div>
        }
        .into_any(),
    };

    view! { <div class="pl2-step-visual">{mockup}</div> }
}
