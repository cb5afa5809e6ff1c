use crate::config::{LandingConfig, routes};
use crate::observer::use_fade_in;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn FinalCta() -> impl IntoView {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    let inner = use_fade_in();

    view! {
        <section class="pl2-final-cta">
            <div class="pl2-container">
                <div class="pl2-final-inner pl2-fade-up" node_ref=inner>
                    <h2 class="pl2-final-h2">"Ready to Launch Your Marketplace?"</h2>
                    <p class="pl2-final-sub">
                        "Join 50+ African marketplaces using Paylloom to process payments "
                        "without the engineering headache."
                    </p>
                    <div class="pl2-final-btns">
                        <A href=routes::SIGNUP attr:class="pl2-btn-primary pl2-btn-lg">
                            "Get API Keys (It's Free)"
                        </A>
                        <a href=config.mailto() class="pl2-btn-secondary pl2-btn-lg pl2-btn-light">
                            "Schedule a Demo"
                        </a>
                    </div>
                    <div class="pl2-final-trust">
                        <span>"✓ No credit card required"</span>
                        <span>"✓ 5-minute setup"</span>
                        <span>"✓ Cancel anytime"</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
