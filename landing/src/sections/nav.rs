use crate::config::routes;
use crate::content::NAV_ANCHORS;
use crate::state::MobileMenu;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Nav() -> impl IntoView {
    let menu = RwSignal::new(MobileMenu::default());
    let close_menu = move |_| menu.update(MobileMenu::close);

    view! {
        <nav class="pl2-nav">
            <div class="pl2-nav-inner">
                <A href=routes::HOME attr:class="pl2-logo">
                    "Pay"<span>"lloom"</span>
                </A>
                <div class="pl2-nav-links">
                    {NAV_ANCHORS
                        .iter()
                        .map(|(label, href)| view! { <a href=*href>{*label}</a> })
                        .collect_view()}
                </div>
                <div class="pl2-nav-actions">
                    <A href=routes::LOGIN attr:class="pl2-ghost">"Log in"</A>
                    <A href=routes::SIGNUP attr:class="pl2-cta-btn">"Get API Access"</A>
                </div>
                <button
                    class="pl2-hamburger"
                    aria-label="Menu"
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| menu.update(MobileMenu::toggle)
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            // Every link in the drawer dismisses it
            <Show when=move || menu.get().is_open()>
                <div class="pl2-mobile-menu">
                    {NAV_ANCHORS
                        .iter()
                        .map(|(label, href)| view! { <a href=*href on:click=close_menu>{*label}</a> })
                        .collect_view()}
                    <a href=routes::LOGIN on:click=close_menu>"Log in"</a>
                    <a href=routes::SIGNUP class="pl2-cta-btn" on:click=close_menu>
                        "Get API Access"
                    </a>
                </div>
            </Show>
        </nav>
    }
}
