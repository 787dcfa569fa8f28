//! Fade-in trigger for animated sections
//!
//! Binds a section's slot in the [`VisibilityArena`](crate::core::VisibilityArena)
//! to an `IntersectionObserver` watching the section's root element.

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::{SectionId, VisibilityThreshold};
use crate::ui::page_state::PortfolioState;

#[cfg(not(feature = "ssr"))]
use wasm_bindgen::JsCast;

/// Track when the element behind `node_ref` first enters the viewport.
///
/// The observer is created once the element mounts and disconnected when the
/// flag flips or the owning scope is cleaned up. If the element never mounts
/// the returned flag stays `false`.
pub fn use_section_visibility(
    state: PortfolioState,
    section: SectionId,
    node_ref: NodeRef<Div>,
    threshold: VisibilityThreshold,
) -> Memo<bool> {
    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::closure::Closure;

        let arena = state.visibility;

        Effect::new(move |_| {
            let Some(element) = node_ref.get() else {
                return;
            };
            let Some(handle) = arena.try_update(|a| a.attach(section, threshold)) else {
                return;
            };

            let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                        let ratio = entry.intersection_ratio();
                        let mut flipped = false;
                        arena.maybe_update(|a| {
                            flipped = a.observe(handle, ratio);
                            flipped
                        });
                        if flipped {
                            // Nothing left to watch for
                            observer.disconnect();
                            break;
                        }
                    }
                },
            );

            let init = web_sys::IntersectionObserverInit::new();
            init.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold.value()));

            let observer = match web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &init,
            ) {
                Ok(observer) => observer,
                Err(err) => {
                    leptos::logging::warn!(
                        "IntersectionObserver unavailable for #{}: {:?}",
                        section.anchor(),
                        err
                    );
                    arena.update(|a| a.detach(handle));
                    return;
                }
            };
            observer.observe(&element);

            // The closure must outlive the observer; both are released together
            let observer = StoredValue::new_local((observer, callback));
            on_cleanup(move || {
                observer.try_with_value(|(observer, _)| observer.disconnect());
                arena.update(|a| a.detach(handle));
            });
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (node_ref, threshold);
    }

    state.is_visible(section)
}
