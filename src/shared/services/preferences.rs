//! Client-local preference storage
//!
//! `BrowserStorage` wraps `window.localStorage`. Outside the browser it stores
//! nothing, so the app still starts natively with default preferences.

use crate::shared::errors::Result;

/// Durable string key/value store
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage> {
        use crate::shared::errors::AppError;

        let window =
            web_sys::window().ok_or_else(|| AppError::Storage("no window".to_string()))?;
        window
            .local_storage()?
            .ok_or_else(|| AppError::Storage("localStorage unavailable".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(Self::storage()?.get_item(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        Ok(Self::storage()?.set_item(key, value)?)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for BrowserStorage {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        // No-op outside the browser
        Ok(())
    }
}

/// Whether the OS reports a dark colour scheme
#[cfg(target_arch = "wasm32")]
pub fn system_prefers_dark() -> bool {
    use crate::shared::constants::PREFERS_DARK_QUERY;

    web_sys::window()
        .and_then(|window| window.match_media(PREFERS_DARK_QUERY).ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn system_prefers_dark() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_browser_storage_is_empty() {
        let store = BrowserStorage;
        store.set("darkMode", "true").unwrap();
        assert_eq!(store.get("darkMode").unwrap(), None);
    }

    #[test]
    fn test_native_has_no_dark_preference() {
        assert!(!system_prefers_dark());
    }
}
