// Landing page sections, in render order
// Paylloom landing, Leptos 0.8 CSR

mod code_preview;
mod comparison;
mod faq;
mod features;
mod final_cta;
mod footer;
mod hero;
mod how_it_works;
mod metrics;
mod nav;
mod pricing;
mod problem;
mod section_head;
mod use_cases;

pub use code_preview::CodePreview;
pub use comparison::Comparison;
pub use faq::Faq;
pub use features::Features;
pub use final_cta::FinalCta;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use metrics::Metrics;
pub use nav::Nav;
pub use pricing::Pricing;
pub use problem::Problem;
pub use section_head::SectionHead;
pub use use_cases::UseCases;
