use crate::config::LandingConfig;
use crate::content::{FOOTER_COLUMNS, FooterLink};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_context::<LandingConfig>().unwrap_or_default();

    view! {
        <footer class="pl2-footer">
            <div class="pl2-container">
                <div class="pl2-footer-top">
                    <div class="pl2-footer-brand">
                        <div class="pl2-footer-logo">"Pay"<span>"lloom"</span></div>
                        <p class="pl2-footer-tagline">"Payment Infrastructure for Modern Marketplaces"</p>
                        <div class="pl2-footer-badges">
                            <span class="pl2-footer-badge">"Powered by IntaSend"</span>
                            <span class="pl2-footer-badge">"PCI-DSS"</span>
                            <span class="pl2-footer-badge">"SOC 2"</span>
                        </div>
                    </div>
                    <div class="pl2-footer-links">
                        {FOOTER_COLUMNS
                            .iter()
                            .map(|column| {
                                view! {
                                    <div class="pl2-footer-col">
                                        <div class="pl2-footer-col-title">{column.title}</div>
                                        {column.links.iter().map(footer_link).collect_view()}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="pl2-footer-bottom">
                    <div class="pl2-footer-copy">"© 2025 Paylloom Instants. All rights reserved."</div>
                    <div class="pl2-footer-social">
                        <a href="https://twitter.com/paylloom" target="_blank" rel="noreferrer">"Twitter / X"</a>
                        <a href="https://github.com/paylloom" target="_blank" rel="noreferrer">"GitHub"</a>
                        <a href=config.mailto()>{config.contact_email}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}

fn footer_link(link: &'static FooterLink) -> AnyView {
    match *link {
        FooterLink::Route(label, path) => view! { <A href=path>{label}</A> }.into_any(),
        FooterLink::Href(label, href) => view! { <a href=href>{label}</a> }.into_any(),
    }
}
