//! Thin wrappers over `window.location` and friends. On host builds there is
//! no browser, so every accessor reports absence and every action is a no-op.

pub const INSTAGRAM_URL: &str = "https://instagram.com/firecondomng";
pub const INSTAGRAM_HANDLE: &str = "@firecondomng";

#[cfg(target_arch = "wasm32")]
mod browser {
    use web_sys::Window;

    pub fn window() -> Result<Window, String> {
        web_sys::window().ok_or_else(|| "No window object".to_string())
    }

    pub fn current_search() -> Option<String> {
        window().ok()?.location().search().ok()
    }

    pub fn open_in_new_tab(url: &str) -> Result<(), String> {
        window()?
            .open_with_url_and_target(url, "_blank")
            .map(|_| ())
            .map_err(|_| format!("Failed to open {}", url))
    }

    pub fn scroll_to_section(id: &str) -> Result<(), String> {
        let element = window()?
            .document()
            .ok_or_else(|| "No document".to_string())?
            .get_element_by_id(id)
            .ok_or_else(|| format!("No section #{}", id))?;
        element.scroll_into_view();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::{current_search, open_in_new_tab, scroll_to_section};

#[cfg(not(target_arch = "wasm32"))]
pub fn current_search() -> Option<String> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_in_new_tab(_url: &str) -> Result<(), String> {
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_section(_id: &str) -> Result<(), String> {
    Ok(())
}

pub fn open_instagram() {
    if let Err(err) = open_in_new_tab(INSTAGRAM_URL) {
        log::warn!("{}", err);
    }
}
