use crate::observer::use_fade_in;
use leptos::prelude::*;

/// Eyebrow label, heading and optional subtitle shared by most sections.
#[component]
pub fn SectionHead(
    label: &'static str,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    /// Light text for sections on a dark background.
    #[prop(optional)]
    dark: bool,
) -> impl IntoView {
    let head = use_fade_in();
    let (label_style, title_style, sub_style) = if dark {
        ("color: #06d6a0", "color: #fff", "color: rgba(255,255,255,0.55)")
    } else {
        ("", "", "")
    };

    view! {
        <div class="pl2-section-head pl2-fade-up" node_ref=head>
            <div class="pl2-label" style=label_style>{label}</div>
            <h2 class="pl2-h2" style=title_style>{title}</h2>
            {subtitle.map(|text| view! { <p class="pl2-section-sub" style=sub_style>{text}</p> })}
        </div>
    }
}
