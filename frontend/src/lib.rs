use leptos::*;
use leptos_meta::{provide_meta_context, Title};

pub mod api;
pub mod components;
pub mod config;
pub mod content;
pub mod pages;
pub mod state;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

use api::ApiClient;
use components::toaster::Toaster;
use content::SiteContent;
use pages::landing::LandingPage;

pub const PAGE_TITLE: &str = "Fire Condom | Wet Days & Wild Nights";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    if use_context::<ApiClient>().is_none() {
        provide_context(ApiClient::new());
    }
    if use_context::<SiteContent>().is_none() {
        provide_context(SiteContent::defaults());
    }
    state::toast::provide_toasts();

    view! {
        <Title text=PAGE_TITLE />
        <main>
            <LandingPage />
        </main>
        <Toaster />
    }
}

/// Browser entry point: logging, panic hook, runtime config, then mount.
#[cfg(target_arch = "wasm32")]
pub fn mount() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"Logger already initialized".into());
    }
    log::info!("Starting Fire landing page (wasm)");

    // Resolve the backend URL early; requests await it if they race ahead.
    spawn_local(async move {
        config::init().await;
    });

    mount_to_body(|| view! { <App /> });
}
