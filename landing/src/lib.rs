//! # paylloom-landing
//!
//! Marketing landing page for Paylloom, rendered client-side with
//! [Leptos](https://leptos.dev/) 0.8 and compiled to WASM with Trunk.
//!
//! The page is static copy plus four pieces of transient UI state, each a
//! plain type in [`state`]:
//!
//! - the mobile navigation drawer ([`state::MobileMenu`])
//! - the code-sample tab selector ([`state::CodeTabs`])
//! - the single-select FAQ accordion ([`state::FaqAccordion`])
//! - the set of sections already scrolled into view ([`state::VisibleSet`]),
//!   driven by the browser `IntersectionObserver` wrapper in [`observer`]
//!
//! ## Layout
//!
//! - [`config`] - build-time configuration and route constants
//! - [`content`] - immutable copy arrays
//! - [`sections`] - one component per page section
//! - [`pages`] - routed pages

pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod observer;
pub mod pages;
pub mod sections;
pub mod state;

use config::LandingConfig;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pages::{HomePage, NotFound};

#[component]
pub fn App(config: LandingConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// Entry point for the WASM binary: logging, config, then mount.
pub fn run() {
    console_error_panic_hook::set_once();

    let (config, config_err) = match LandingConfig::from_env() {
        Ok(config) => (config, None),
        Err(err) => (LandingConfig::default(), Some(err)),
    };

    if let Err(err) = logging::init(config.log_level) {
        web_sys::console::warn_1(&err.to_string().into());
    }
    if let Some(err) = config_err {
        log::warn!("{err}; using default configuration");
    }
    log::info!("{}", logging::banner());

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
