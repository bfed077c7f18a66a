use crate::{
    components::common::{Button, ButtonSize, ButtonVariant},
    utils::location,
};
use leptos::*;

pub const PRODUCTS_SECTION: &str = "products";
pub const SIGNUP_SECTION: &str = "signup";

fn scroll_to(id: &'static str) {
    if let Err(err) = location::scroll_to_section(id) {
        log::warn!("{}", err);
    }
}

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center px-4 py-20">
            <div class="absolute inset-0 bg-black/40"></div>
            <div class="relative z-10 text-center max-w-4xl mx-auto">
                <div class="flex items-center justify-center mb-6">
                    <span class="text-6xl mr-4" aria-hidden="true">"🔥"</span>
                    <h1 class="text-4xl md:text-7xl font-bold bg-gradient-to-r from-red-400 via-orange-500 to-red-600 bg-clip-text text-transparent">
                        "Fire Condom"
                    </h1>
                </div>
                <h2 class="text-3xl md:text-6xl font-extrabold mb-6 text-white">
                    "Wet Days & Wild Nights"
                </h2>
                <p class="text-xl md:text-2xl mb-12 text-gray-300 font-medium">
                    "Your pleasure shouldn't be boring. Get Fire Condoms for the experience you deserve."
                </p>
                <div class="flex flex-col sm:flex-row gap-6 justify-center items-center">
                    <Button size=ButtonSize::Large on:click=move |_| scroll_to(PRODUCTS_SECTION)>
                        "Explore the Heat 🔥"
                    </Button>
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Large
                        on:click=move |_| scroll_to(SIGNUP_SECTION)
                    >
                        "Join the Fire Club 🔥"
                    </Button>
                </div>
            </div>
        </section>
    }
}
