//! Thin wrappers over the browser APIs the page depends on
//!
//! On the server every helper is a no-op so components can call them
//! unconditionally.

use crate::core::theme::{PreferenceStorage, StorageError, THEME_ATTRIBUTE, ThemePreference, ThemeTarget};
use crate::core::{SectionBounds, SectionId};

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Bounding box of a section element, `None` when it is not in the document
pub fn measure_section(section: SectionId) -> Option<SectionBounds> {
    #[cfg(not(feature = "ssr"))]
    {
        let document = web_sys::window()?.document()?;
        let element = document.get_element_by_id(section.anchor())?;
        let rect = element.get_bounding_client_rect();
        Some(SectionBounds::new(rect.top(), rect.bottom()))
    }
    #[cfg(feature = "ssr")]
    {
        let _ = section;
        None
    }
}

/// Smoothly scroll a section into view. Returns `false` when it is missing.
pub fn scroll_to_section(section: SectionId) -> bool {
    #[cfg(not(feature = "ssr"))]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(section.anchor()))
        else {
            return false;
        };

        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
    #[cfg(feature = "ssr")]
    {
        let _ = section;
        false
    }
}

/// `window.localStorage`
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl PreferenceStorage for BrowserStorage {
    fn load(&self, key: &str) -> Option<String> {
        #[cfg(not(feature = "ssr"))]
        {
            let storage = web_sys::window()?.local_storage().ok()??;
            storage.get_item(key).ok()?
        }
        #[cfg(feature = "ssr")]
        {
            let _ = key;
            None
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(not(feature = "ssr"))]
        {
            let storage = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Write {
                    key: key.to_string(),
                    reason: format!("{:?}", e),
                })
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }
}

/// `document.documentElement`, carrying the theme marker attribute
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentRoot;

impl ThemeTarget for DocumentRoot {
    fn apply(&self, theme: ThemePreference) {
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (theme, THEME_ATTRIBUTE);
        }
    }
}
