//! Hero Section

use leptos::prelude::*;
use lib_core::view::HeroView;

#[component]
pub fn Hero(hero: HeroView) -> impl IntoView {
    view! {
        <section class="min-h-screen pt-24 md:pt-0 flex items-center relative">
            <div class="grid grid-cols-1 lg:grid-cols-[70%,30%] items-center gap-12 max-w-7xl mx-auto px-4">
                <div>
                    <h1 class="tracking-tight text-4xl md:text-5xl lg:text-6xl mb-12 text-gray-300/90 font-semibold font-outfit">
                        {hero.title}
                    </h1>
                    <p class="font-open font-medium text-xl md:text-[1.35rem] text-gray-300 mb-12 md:mb-24">
                        {hero.lead} " "
                        <span class="text-accent-primary font-semibold">{hero.anti_symbol}</span>
                        " and "
                        <span class="text-accent-secondary font-semibold">{hero.pro_symbol}</span>
                        " tokens."
                    </p>
                </div>
                <div class="flex justify-center relative">
                    <div class="absolute w-72 h-72 rounded-full bg-gradient-to-r from-accent-primary/20 to-accent-secondary/20 blur-[50px]"></div>
                    <img
                        src=hero.logo_src
                        alt=hero.logo_alt
                        class="w-72 h-72 rounded-full object-cover border-4 border-gray-800/50 relative z-10"
                    />
                </div>
            </div>
        </section>
    }
}
