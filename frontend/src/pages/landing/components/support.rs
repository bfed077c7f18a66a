use crate::{
    components::common::{Button, ButtonSize},
    utils::location::{self, INSTAGRAM_HANDLE},
};
use leptos::*;

#[component]
pub fn SupportSection() -> impl IntoView {
    view! {
        <section id="support" class="py-20 px-4 bg-gradient-to-r from-black/80 to-red-900/20">
            <div class="max-w-2xl mx-auto text-center">
                <h2 class="text-4xl md:text-5xl font-bold mb-6">
                    "Got " <span class="text-red-400">"Questions?"</span>
                </h2>
                <p class="text-xl text-gray-300 mb-12">
                    "We're here to help with any questions about Fire Condoms"
                </p>
                <div class="flex flex-col sm:flex-row gap-6 justify-center">
                    <Button size=ButtonSize::Large on:click=move |_| location::open_instagram()>
                        "DM Us on Instagram"
                    </Button>
                </div>
                <p class="text-sm text-gray-400 mt-8">
                    {INSTAGRAM_HANDLE} " • Available 24/7 for your questions"
                </p>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 px-4 bg-black/80 border-t border-red-500/30">
            <div class="max-w-4xl mx-auto text-center">
                <div class="flex items-center justify-center mb-6">
                    <span class="text-3xl mr-2" aria-hidden="true">"🔥"</span>
                    <span class="text-2xl font-bold text-white">"Fire Condom"</span>
                </div>
                <p class="text-gray-400 mb-4">"Ignite Your Passion • Available Nationwide"</p>
                <div class="flex justify-center space-x-6 text-gray-400 text-sm">
                    <span>"Safe • Tested • Certified"</span>
                    <span>"•"</span>
                    <span>"Made for Nigerian Adults"</span>
                </div>
            </div>
        </footer>
    }
}
