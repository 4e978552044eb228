//! Starfield Background Component
//!
//! Floating red and green stars at fixed, seeded positions. The layout comes
//! from `lib_core::layout`, so it is the same on every render and reload.

use leptos::prelude::*;
use lib_core::layout::{star_field, STAR_COUNT, STAR_SEED};

#[component]
pub fn Starfield() -> impl IntoView {
    let stars = star_field(STAR_SEED, STAR_COUNT);

    view! {
        <div class="fixed inset-0 pointer-events-none" aria-hidden="true">
            {stars
                .into_iter()
                .map(|star| view! { <div class=star.class_name() style=star.style()></div> })
                .collect::<Vec<_>>()}
        </div>
    }
}
