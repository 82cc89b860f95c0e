use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::shared::logging;
use crate::shared::services::preferences::{system_prefers_dark, BrowserStorage, PreferenceStore};

/// Light/dark preference
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggle(&self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Get the appropriate default theme based on system preference
    pub fn system_default(is_dark_preferred: bool) -> Theme {
        if is_dark_preferred {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Value written to storage ("true" means dark)
    pub fn stored_value(&self) -> &'static str {
        if self.is_dark() { "true" } else { "false" }
    }

    /// Anything other than "true" reads as light
    pub fn from_stored(value: &str) -> Theme {
        Theme::system_default(value == "true")
    }

    /// Label of the toggle, describing what a click will do
    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Dark => "Switch to light mode",
            Theme::Light => "Switch to dark mode",
        }
    }
}

/// Stored preference first, then the OS colour scheme
pub fn initial_theme(
    store: &impl PreferenceStore,
    key: &str,
    prefers_dark: impl FnOnce() -> bool,
) -> Theme {
    match store.get(key) {
        Ok(Some(saved)) => Theme::from_stored(&saved),
        Ok(None) => Theme::system_default(prefers_dark()),
        Err(e) => {
            logging::log_theme_persist_error(key, &e);
            Theme::system_default(prefers_dark())
        }
    }
}

/// Persist the theme; storage failures are logged and otherwise ignored
pub fn save_theme(store: &impl PreferenceStore, key: &str, theme: Theme) {
    if let Err(e) = store.set(key, theme.stored_value()) {
        logging::log_theme_persist_error(key, &e);
    }
}

/// Apply theme CSS class to the document element
#[cfg(target_arch = "wasm32")]
pub fn apply_theme_class(theme: Theme) {
    use crate::shared::constants::DARK_CLASS;

    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };

    if let Err(e) = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark()) {
        tracing::warn!("Failed to apply theme class: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_theme_class(_theme: Theme) {
    // No document outside the browser
}

/// Theme hook: initialized synchronously, persisted and applied on every change
pub fn use_theme() -> Signal<Theme> {
    let config = use_context::<AppConfig>();
    let key = config.theme_storage_key.clone();

    let theme = use_signal({
        let key = key.clone();
        move || initial_theme(&BrowserStorage, &key, system_prefers_dark)
    });

    use_effect(move || {
        let current = theme();
        apply_theme_class(current);
        save_theme(&BrowserStorage, &key, current);
    });

    theme
}
