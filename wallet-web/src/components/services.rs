//! Marketing cards below the hero section

use leptos::prelude::*;

struct ServiceCard {
    title: &'static str,
    subtitle: &'static str,
    color: &'static str,
}

const SERVICE_CARDS: [ServiceCard; 3] = [
    ServiceCard {
        title: "Security Guaranteed",
        subtitle: "Security is guaranteed. We always maintain privacy and the quality of our products.",
        color: "#2952e3",
    },
    ServiceCard {
        title: "Best exchange rates",
        subtitle: "Transfers settle on-chain with only the network fee on top.",
        color: "#8945f8",
    },
    ServiceCard {
        title: "Fastest transactions",
        subtitle: "Every transfer is confirmed and recorded in a single flow.",
        color: "#f84550",
    },
];

#[component]
pub fn Services() -> impl IntoView {
    view! {
        <section class="services">
            <h2 class="section-title">"Services that we"<br/>"continue to improve"</h2>
            <div class="services-list">
                {SERVICE_CARDS
                    .iter()
                    .map(|card| {
                        view! {
                            <div class="service-card">
                                <div class="service-icon" style:background-color=card.color></div>
                                <div>
                                    <h3>{card.title}</h3>
                                    <p class="muted">{card.subtitle}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
