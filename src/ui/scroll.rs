//! Scroll listener driving the active navbar link

use leptos::prelude::*;

use crate::ui::page_state::PortfolioState;

#[cfg(not(feature = "ssr"))]
use wasm_bindgen::JsCast;

/// Keep the active section in sync with the scroll position.
///
/// Registers a passive `scroll` listener on the window for the lifetime of
/// the calling scope.
pub fn use_active_section_tracking(state: PortfolioState) {
    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };

            let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
                state.sync_active_section();
            });

            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(true);
            if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                handler.as_ref().unchecked_ref(),
                &options,
            ) {
                leptos::logging::warn!("Failed to register scroll listener: {:?}", err);
                return;
            }

            let handler = StoredValue::new_local(handler);
            on_cleanup(move || {
                handler.try_with_value(|handler| {
                    if let Some(window) = web_sys::window() {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            handler.as_ref().unchecked_ref(),
                        );
                    }
                });
            });
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = state;
    }
}
