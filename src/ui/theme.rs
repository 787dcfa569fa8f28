//! Theme context module for the dark/light toggle
//!
//! Provides:
//! - ThemeContext for reactive theme state
//! - LocalStorage persistence through [`ThemePreferenceStore`]
//! - The `data-theme` marker on the document root

use leptos::prelude::*;

use crate::core::theme::ThemePreference;
#[cfg(not(feature = "ssr"))]
use crate::core::theme::ThemePreferenceStore;
#[cfg(not(feature = "ssr"))]
use crate::ui::dom::{BrowserStorage, DocumentRoot};

#[cfg(not(feature = "ssr"))]
type BrowserThemeStore = ThemePreferenceStore<BrowserStorage, DocumentRoot>;

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme preference
    pub preference: RwSignal<ThemePreference>,
    /// Owner of the persisted preference (browser only)
    #[cfg(not(feature = "ssr"))]
    store: StoredValue<BrowserThemeStore, LocalStorage>,
}

impl ThemeContext {
    pub fn is_dark(&self) -> bool {
        self.preference.get().is_dark()
    }

    /// Flip dark/light, apply to the document and persist
    pub fn toggle(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            let next = self.store.try_update_value(|store| {
                if let Err(err) = store.toggle() {
                    leptos::logging::warn!("Failed to persist theme: {}", err);
                }
                store.current()
            });
            if let Some(next) = next {
                self.preference.set(next);
            }
        }
        #[cfg(feature = "ssr")]
        {
            self.preference.update(|p| *p = p.toggled());
        }
    }
}

/// Provide theme context to the application
pub fn provide_theme_context() -> ThemeContext {
    #[cfg(not(feature = "ssr"))]
    let ctx = {
        let (store, committed) = ThemePreferenceStore::load(BrowserStorage, DocumentRoot);
        if let Err(err) = committed {
            leptos::logging::warn!("Failed to persist theme: {}", err);
        }
        let store = StoredValue::new_local(store);
        // Server renders the default; pick up the stored value after hydration
        let preference = RwSignal::new(ThemePreference::default());
        Effect::new(move |_| {
            if let Some(current) = store.try_with_value(|s| s.current()) {
                preference.set(current);
            }
        });
        ThemeContext { preference, store }
    };

    #[cfg(feature = "ssr")]
    let ctx = ThemeContext {
        preference: RwSignal::new(ThemePreference::default()),
    };

    provide_context(ctx);

    ctx
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

/// Navbar button switching between dark and light
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme_context();

    view! {
        <button
            class="theme-toggle-nav"
            on:click=move |_| theme.toggle()
            aria-label=move || theme.preference.get().toggle_label()
            title=move || if theme.is_dark() { "Light mode" } else { "Dark mode" }
        >
            {move || theme.preference.get().toggle_icon()}
        </button>
    }
}
