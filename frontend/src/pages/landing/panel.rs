use crate::pages::landing::{
    components::{
        hero::HeroSection,
        products::ProductShowcase,
        signup_form::SignupForm,
        store_locator::StoreLocator,
        support::{Footer, SupportSection},
    },
    view_model::use_landing_view_model,
};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn LandingPanel() -> impl IntoView {
    let vm = use_landing_view_model();

    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });
    let handle_lookup = Callback::new(move |_: ()| vm.lookup());

    let products = Signal::derive(move || vm.displayed_products());
    let stores = Signal::derive(move || vm.displayed_store_locations());
    let lookup_pending = vm.lookup_action.pending();

    view! {
        <div class="min-h-screen bg-gradient-to-b from-gray-900 via-red-900 to-black text-white">
            <HeroSection />
            <ProductShowcase products=products />
            <SignupForm
                form=vm.form
                is_loading=vm.is_loading
                states=vm.states()
                on_submit=handle_submit
            />
            <StoreLocator
                stores=stores
                states=vm.states()
                lookup_state=vm.lookup_state
                lookup_result=vm.lookup_result
                lookup_pending=lookup_pending
                on_lookup=handle_lookup
            />
            <SupportSection />
            <Footer />
        </div>
    }
}
