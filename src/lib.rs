pub mod app;
pub mod components;
pub mod contact;
pub mod nav;
pub mod particles;
pub mod portfolio;
pub mod theme;

#[cfg(feature = "ssr")]
pub mod config;

#[cfg(feature = "ssr")]
pub mod error;

#[cfg(feature = "ssr")]
pub mod health;

#[cfg(feature = "ssr")]
pub mod security_headers;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
