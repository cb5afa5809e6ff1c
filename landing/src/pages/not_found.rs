use crate::config::routes;
use leptos::prelude::*;
use leptos_router::components::A;

/// Router fallback. Login, signup and legal pages live outside this app.
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="pl2-not-found">
            <div class="pl2-container">
                <h1 class="pl2-h2">"Page not available"</h1>
                <p class="pl2-section-sub">"This page isn't part of the Paylloom landing site."</p>
                <A href=routes::HOME attr:class="pl2-btn-primary">"← Back to home"</A>
            </div>
        </section>
    }
}
