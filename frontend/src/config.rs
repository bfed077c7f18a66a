use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Shape of the optional `config.json` served next to the bundle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub backend_url: Option<String>,
}

const API_PATH: &str = "/api";

#[cfg(not(target_arch = "wasm32"))]
const NATIVE_DEFAULT_BACKEND: &str = "http://localhost:8000";

static API_BASE_URL: OnceLock<String> = OnceLock::new();

pub fn api_base_from_backend(backend_url: &str) -> String {
    format!("{}{}", backend_url.trim_end_matches('/'), API_PATH)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

// First writer wins when two requests resolve concurrently.
fn cache_base_url(value: String) -> String {
    API_BASE_URL.get_or_init(|| value).clone()
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;
    use anyhow::{bail, Context};
    use wasm_bindgen::JsValue;

    fn read_global(global: &str, keys: &[&str]) -> Option<String> {
        // Expect optional global object: window.<global> = { BACKEND_URL: "..." }
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        keys.iter().find_map(|key| {
            js_sys::Reflect::get(&obj, &(*key).into())
                .ok()
                .filter(|v| !v.is_undefined() && !v.is_null())
                .and_then(|v| v.as_string())
        })
    }

    pub fn snapshot_from_globals() -> Option<String> {
        read_global("__FIRE_ENV", &["BACKEND_URL", "backend_url"])
            .or_else(|| read_global("__FIRE_CONFIG", &["backend_url", "BACKEND_URL"]))
    }

    pub fn write_window_config(cfg: &RuntimeConfig) {
        let (Some(url), Some(w)) = (&cfg.backend_url, web_sys::window()) else {
            return;
        };
        let obj = js_sys::Object::new();
        let written = js_sys::Reflect::set(&obj, &"backend_url".into(), &JsValue::from_str(url))
            .and_then(|_| js_sys::Reflect::set(&w, &"__FIRE_CONFIG".into(), &obj));
        if let Err(err) = written {
            log::debug!("could not publish window.__FIRE_CONFIG: {:?}", err);
        }
    }

    pub fn page_origin() -> Option<String> {
        web_sys::window()?.location().origin().ok()
    }

    pub async fn fetch_runtime_config(origin: &str) -> anyhow::Result<RuntimeConfig> {
        let resp = reqwest::get(format!("{}/config.json", origin))
            .await
            .context("fetching config.json")?;
        if !resp.status().is_success() {
            bail!("config.json returned {}", resp.status());
        }
        resp.json::<RuntimeConfig>()
            .await
            .context("parsing config.json")
    }
}

#[cfg(target_arch = "wasm32")]
async fn resolve_backend_url() -> String {
    if let Some(url) = non_empty(browser::snapshot_from_globals()) {
        return url;
    }
    let origin = browser::page_origin().unwrap_or_default();
    match browser::fetch_runtime_config(&origin).await {
        Ok(cfg) => {
            browser::write_window_config(&cfg);
            if let Some(url) = non_empty(cfg.backend_url) {
                return url;
            }
        }
        Err(err) => log::debug!("runtime config unavailable: {:#}", err),
    }
    log::warn!(
        "BACKEND_URL is not configured; using page origin {}",
        origin
    );
    origin
}

#[cfg(not(target_arch = "wasm32"))]
async fn resolve_backend_url() -> String {
    backend_url_or_default(std::env::var("BACKEND_URL").ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn backend_url_or_default(value: Option<String>) -> String {
    non_empty(value).unwrap_or_else(|| {
        log::warn!(
            "BACKEND_URL is not configured; using {}",
            NATIVE_DEFAULT_BACKEND
        );
        NATIVE_DEFAULT_BACKEND.to_string()
    })
}

/// Resolves `<BACKEND_URL>/api` once and caches it for the lifetime of the page.
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    let backend = resolve_backend_url().await;
    cache_base_url(api_base_from_backend(&backend))
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("API base URL: {}", base);
}
