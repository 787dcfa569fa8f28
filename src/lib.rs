//! Portfolio - single-page developer portfolio
//!
//! Server-rendered and hydrated with Leptos. Page behaviour (section
//! tracking, reveal-on-scroll, theme persistence and the contact form) lives
//! in [`core`] and is bound to the browser in [`ui`].

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
