use crate::state::toast::{use_toasts, Toast};
use leptos::*;

/// Fixed-position stack of the active notifications.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div
            class="fixed bottom-4 right-4 z-50 flex w-full max-w-sm flex-col gap-3"
            role="status"
            aria-live="polite"
        >
            <For
                each=move || toasts.toasts.get()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!(
                            "rounded-lg border px-4 py-3 shadow-lg flex items-start justify-between gap-4 {}",
                            toast.variant.classes(),
                        )>
                            <div class="space-y-1">
                                <div class="font-semibold">{toast.title.clone()}</div>
                                {toast
                                    .description
                                    .clone()
                                    .map(|description| {
                                        view! { <div class="text-sm opacity-90">{description}</div> }
                                    })}
                            </div>
                            <button
                                type="button"
                                class="text-sm opacity-70 hover:opacity-100"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
