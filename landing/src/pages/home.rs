// Home page - the whole marketing landing
use crate::config::LandingConfig;
use crate::observer::FadeIn;
use crate::sections::{
    CodePreview, Comparison, Faq, Features, FinalCta, Footer, Hero, HowItWorks, Metrics, Nav,
    Pricing, Problem, UseCases,
};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let config = use_context::<LandingConfig>().unwrap_or_default();
    // Must exist before any section registers its blocks
    FadeIn::install(&config);

    view! {
        <div class="pl2-wrap">
            <Nav />
            <Hero />
            <Metrics />
            <Problem />
            <HowItWorks />
            <Features />
            <CodePreview />
            <Pricing />
            <Comparison />
            <UseCases />
            <Faq />
            <FinalCta />
            <Footer />
        </div>
    }
}
