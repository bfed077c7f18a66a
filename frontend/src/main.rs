fn main() {
    #[cfg(target_arch = "wasm32")]
    fire_landing_frontend::mount();

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("fire-landing-frontend runs in the browser; build it for wasm32-unknown-unknown");
}
