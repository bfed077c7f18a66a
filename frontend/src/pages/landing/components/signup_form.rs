use crate::{
    components::common::{Button, ButtonSize},
    pages::landing::view_model::SignupFormState,
};
use leptos::{ev::SubmitEvent, *};
use web_sys::{HtmlInputElement, HtmlSelectElement};

const INPUT_CLASSES: &str = "w-full p-4 text-lg rounded-md bg-black/50 border border-red-500/50 focus:border-red-400 text-white placeholder-gray-400 disabled:opacity-60";

#[component]
pub fn SignupForm(
    form: SignupFormState,
    #[prop(into)] is_loading: Signal<bool>,
    states: &'static [&'static str],
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <section
            id=super::hero::SIGNUP_SECTION
            class="py-20 px-4 bg-gradient-to-r from-red-900/30 to-orange-900/30"
        >
            <div class="max-w-2xl mx-auto text-center">
                <h2 class="text-4xl md:text-5xl font-bold mb-6">
                    "Get Exclusive Fire Tips & " <span class="text-red-400">"Offers"</span>
                </h2>
                <p class="text-xl text-gray-300 mb-12">
                    "Join thousands who've already ignited their passion"
                </p>
                <form class="space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <div>
                        <label for="nickname" class="sr-only">"Nickname"</label>
                        <input
                            id="nickname"
                            name="nickname"
                            type="text"
                            class=INPUT_CLASSES
                            placeholder="Your nickname"
                            prop:value=form.nickname
                            disabled=move || is_loading.get()
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                form.nickname.set(target.value());
                            }
                        />
                    </div>
                    <div>
                        <label for="email" class="sr-only">"Email"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            class=INPUT_CLASSES
                            placeholder="Your email address"
                            prop:value=form.email
                            disabled=move || is_loading.get()
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                form.email.set(target.value());
                            }
                        />
                    </div>
                    <div>
                        <label for="state" class="sr-only">"State"</label>
                        <select
                            id="state"
                            name="state"
                            class=INPUT_CLASSES
                            prop:value=form.state
                            disabled=move || is_loading.get()
                            on:change=move |ev| {
                                let target = event_target::<HtmlSelectElement>(&ev);
                                form.state.set(target.value());
                            }
                        >
                            <option value="" disabled=true selected=move || form.state.get().is_empty()>
                                "Select your state"
                            </option>
                            {states
                                .iter()
                                .map(|state| {
                                    let value = *state;
                                    view! {
                                        <option value=value selected=move || form.state.get() == value>
                                            {value}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <Button
                        size=ButtonSize::Large
                        class="w-full"
                        loading=is_loading
                        attr:type="submit"
                    >
                        {move || if is_loading.get() { "Joining..." } else { "I'm In 🔥" }}
                    </Button>
                </form>
            </div>
        </section>
    }
}
