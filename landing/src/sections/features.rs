use super::SectionHead;
use crate::content::{FEATURES, Feature};
use crate::observer::use_fade_in;
use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="pl2-features" id="features">
            <div class="pl2-container">
                <SectionHead
                    label="Features"
                    title="Everything You Need to Power a Marketplace"
                    subtitle="One API. Every payment primitive your marketplace needs."
                />
                <div class="pl2-features-grid">
                    {FEATURES.iter().map(|feature| view! { <FeatureCard feature=feature /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: &'static Feature) -> impl IntoView {
    let card = use_fade_in();
    let icon_style = format!("background: {}; color: {}", feature.bg, feature.color);

    view! {
        <div class="pl2-feature-card pl2-fade-up" node_ref=card>
            <div class="pl2-feature-icon" style=icon_style>{feature.icon}</div>
            <h3 class="pl2-feature-title">{feature.title}</h3>
            <p class="pl2-feature-desc">{feature.desc}</p>
        </div>
    }
}
