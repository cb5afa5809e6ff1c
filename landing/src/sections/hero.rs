use crate::config::routes;
use crate::content::{DASH_STATS, DASH_TRANSACTIONS};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="pl2-hero">
            <div class="pl2-hero-glow"></div>
            <div class="pl2-hero-glow2"></div>
            <div class="pl2-container">
                <div class="pl2-hero-inner">
                    <div class="pl2-hero-content">
                        <div class="pl2-badge">
                            <span class="pl2-badge-dot"></span>
                            "Powered by IntaSend · SOC 2 Compliant"
                        </div>
                        <h1 class="pl2-h1">
                            "Stop Building Payment Logic."
                            <br />
                            <span class="pl2-grad">"Start Building Your Marketplace."</span>
                        </h1>
                        <p class="pl2-hero-sub">
                            "Paylloom handles payment splitting, seller payouts, and M-Pesa integration "
                            "so you can focus on your core product. Integrate in 5 minutes, scale to millions."
                        </p>
                        <div class="pl2-hero-btns">
                            <A href=routes::SIGNUP attr:class="pl2-btn-primary">
                                "Get API Access (It's Free)"
                            </A>
                            <a href="#how" class="pl2-btn-secondary">"See How It Works →"</a>
                        </div>
                        <div class="pl2-trust-row">
                            <span>"✓ No credit card required"</span>
                            <span>"✓ 5-minute setup"</span>
                            <span>"✓ Free sandbox"</span>
                        </div>
                    </div>

                    <div class="pl2-hero-visual">
                        <Dashboard />
                        <div class="pl2-fc pl2-fc1">
                            <div class="pl2-fc-icon">"⚡"</div>
                            <div>
                                <div class="pl2-fc-label">"M-Pesa STK Push"</div>
                                <div class="pl2-fc-val">"Confirmed in 4s"</div>
                            </div>
                        </div>
                        <div class="pl2-fc pl2-fc2">
                            <div class="pl2-fc-icon">"💸"</div>
                            <div>
                                <div class="pl2-fc-label">"Seller payout sent"</div>
                                <div class="pl2-fc-val">"KES 900 → M-Pesa"</div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Static dashboard mockup shown beside the headline.
#[component]
fn Dashboard() -> impl IntoView {
    view! {
        <div class="pl2-dashboard">
            <div class="pl2-dash-header">
                <div class="pl2-dash-logo">"PL"</div>
                <div class="pl2-dash-title">"Paylloom Dashboard"</div>
                <div class="pl2-dash-dot"></div>
            </div>
            <div class="pl2-dash-stats">
                {DASH_STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <div class="pl2-dash-stat">
                                <div class="pl2-dash-stat-label">{stat.label}</div>
                                <div class="pl2-dash-stat-val">{stat.value}</div>
                                <div class="pl2-dash-stat-delta" style=format!("color: {}", stat.color)>
                                    {stat.delta}
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="pl2-dash-section-label">"Recent Transactions"</div>
            {DASH_TRANSACTIONS
                .iter()
                .map(|tx| {
                    view! {
                        <div class="pl2-dash-tx">
                            <div class="pl2-dash-tx-avatar">{tx.initial()}</div>
                            <div class="pl2-dash-tx-info">
                                <div class="pl2-dash-tx-name">{tx.name}</div>
                                <div class="pl2-dash-tx-fee">{format!("Fee: KES {}", tx.fee)}</div>
                            </div>
                            <div class="pl2-dash-tx-right">
                                <div class="pl2-dash-tx-amount">{tx.amount}</div>
                                <div class=tx.status_class()>{tx.status}</div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
