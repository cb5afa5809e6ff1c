use super::SectionHead;
use crate::content::PROBLEMS;
use crate::observer::use_fade_in;
use leptos::prelude::*;

#[component]
pub fn Problem() -> impl IntoView {
    view! {
        <section class="pl2-problem">
            <div class="pl2-container">
                <SectionHead
                    label="The Problem"
                    title="The Marketplace Payment Problem"
                    subtitle="Every marketplace founder eventually hits these walls. Sound familiar?"
                />
                <div class="pl2-problem-grid">
                    {PROBLEMS
                        .iter()
                        .map(|problem| {
                            let card = use_fade_in();
                            view! {
                                <div class="pl2-problem-card pl2-fade-up" node_ref=card>
                                    // 15 = ~8% alpha on the accent colour
                                    <div
                                        class="pl2-problem-icon"
                                        style=format!("background: {}15", problem.color)
                                    >
                                        {problem.icon}
                                    </div>
                                    <h3 class="pl2-problem-title" style=format!("color: {}", problem.color)>
                                        {problem.title}
                                    </h3>
                                    <p class="pl2-problem-desc">{problem.desc}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
