//! Features grid

use leptos::prelude::*;
use lib_core::view::FeatureCard;

const CARD_CLASS: &str = "p-6 md:p-8 backdrop-blur-xl bg-dark-card/50 rounded-2xl border border-gray-800/50 hover:border-accent-primary/20 transition-colors";

#[component]
pub fn Features(cards: &'static [FeatureCard]) -> impl IntoView {
    view! {
        <section class="py-20">
            <h2 class="font-grotesk text-3xl font-bold text-center mb-12 gradient-heading">"Features"</h2>
            <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                {cards
                    .iter()
                    .map(|card| {
                        view! {
                            <div class=CARD_CLASS>
                                <h3 class="text-gray-300 text-xl font-bold mb-4">{card.title}</h3>
                                <p class="text-gray-400">{card.description}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
