use crate::content::METRICS;
use crate::observer::use_fade_in;
use leptos::prelude::*;

#[component]
pub fn Metrics() -> impl IntoView {
    let grid = use_fade_in();

    view! {
        <section class="pl2-metrics">
            <div class="pl2-container">
                <div class="pl2-metrics-grid" node_ref=grid>
                    {METRICS
                        .iter()
                        .map(|metric| {
                            view! {
                                <div class="pl2-metric-item pl2-fade-up">
                                    <div class="pl2-metric-val">{metric.value}</div>
                                    <div class="pl2-metric-label">{metric.label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
