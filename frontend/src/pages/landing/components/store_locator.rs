use crate::{
    api::StoreMap,
    components::common::{Button, ButtonVariant},
    pages::landing::utils::outlet_summary,
    utils::location,
};
use leptos::*;
use web_sys::HtmlSelectElement;

#[component]
pub fn MajorCities(#[prop(into)] stores: Signal<StoreMap>) -> impl IntoView {
    view! {
        <div class="rounded-xl bg-black/50 border border-red-500/30 p-8">
            <div class="text-5xl mb-4" aria-hidden="true">"📍"</div>
            <h3 class="text-2xl font-bold mb-4 text-white">"Major Cities"</h3>
            <ul class="text-gray-300 space-y-2 text-left">
                {move || {
                    stores
                        .get()
                        .into_iter()
                        .map(|(city, outlets)| {
                            view! {
                                <li>
                                    <span class="font-semibold text-white">{city}</span>
                                    " - "
                                    {outlet_summary(&outlets)}
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[component]
pub fn StateLookup(
    states: &'static [&'static str],
    selected: RwSignal<String>,
    #[prop(into)] result: Signal<Option<Vec<String>>>,
    #[prop(into)] pending: Signal<bool>,
    on_lookup: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="rounded-xl bg-black/50 border border-red-500/30 p-8 space-y-4">
            <div class="text-5xl" aria-hidden="true">"💬"</div>
            <h3 class="text-2xl font-bold text-white">"Need Help Finding?"</h3>
            <p class="text-gray-300">
                "Can't find Fire Condoms in your area? Let us help you locate the nearest store."
            </p>
            <div class="flex flex-col sm:flex-row gap-3">
                <select
                    id="lookup-state"
                    class="flex-1 p-3 rounded-md bg-black/50 border border-red-500/50 text-white"
                    prop:value=selected
                    on:change=move |ev| {
                        let target = event_target::<HtmlSelectElement>(&ev);
                        selected.set(target.value());
                    }
                >
                    <option value="">"Choose a state"</option>
                    {states
                        .iter()
                        .map(|state| {
                            let value = *state;
                            view! { <option value=value>{value}</option> }
                        })
                        .collect_view()}
                </select>
                <Button
                    variant=ButtonVariant::Outline
                    disabled=Signal::derive(move || selected.get().is_empty())
                    loading=pending
                    on:click=move |_| on_lookup.call(())
                >
                    "Check"
                </Button>
            </div>
            {move || {
                result
                    .get()
                    .map(|outlets| {
                        view! {
                            <ul class="text-left text-gray-300 space-y-1" data-lookup-result="">
                                {outlets
                                    .into_iter()
                                    .map(|outlet| view! { <li>"• "{outlet}</li> })
                                    .collect_view()}
                            </ul>
                        }
                    })
            }}
            <Button class="w-full" on:click=move |_| location::open_instagram()>
                "Get Store Locations"
            </Button>
        </div>
    }
}

#[component]
pub fn StoreLocator(
    #[prop(into)] stores: Signal<StoreMap>,
    states: &'static [&'static str],
    lookup_state: RwSignal<String>,
    #[prop(into)] lookup_result: Signal<Option<Vec<String>>>,
    #[prop(into)] lookup_pending: Signal<bool>,
    on_lookup: Callback<()>,
) -> impl IntoView {
    view! {
        <section id="store-locator" class="py-20 px-4">
            <div class="max-w-4xl mx-auto text-center">
                <h2 class="text-4xl md:text-5xl font-bold mb-6">
                    "Where to Buy " <span class="text-red-400">"Fire"</span>
                </h2>
                <p class="text-xl text-gray-300 mb-12">
                    "Available nationwide at major pharmacies and convenience stores"
                </p>
                <div class="grid md:grid-cols-2 gap-8">
                    <MajorCities stores=stores />
                    <StateLookup
                        states=states
                        selected=lookup_state
                        result=lookup_result
                        pending=lookup_pending
                        on_lookup=on_lookup
                    />
                </div>
            </div>
        </section>
    }
}
