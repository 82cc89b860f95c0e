//! Compile-time defaults for the client.
//!
//! `AppConfig` starts from these values; nothing here is read at runtime.

use std::time::Duration;

/// Backend serving `/collections` and `/query`
pub const API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Collection that is never offered for selection
pub const RESERVED_COLLECTION: &str = "slack";

/// Number of source passages requested per query
pub const DEFAULT_TOP_K: usize = 5;

/// localStorage key holding the dark mode flag ("true" / "false")
pub const THEME_STORAGE_KEY: &str = "darkMode";

/// Upper bound on a single backend call
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Answer shown when a query fails for any reason
pub const QUERY_ERROR_MESSAGE: &str = "Error retrieving response. Please try again.";

/// Media query used to detect the OS colour scheme
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Class toggled on `<html>` when dark mode is active
pub const DARK_CLASS: &str = "dark";

/// Syntect theme used for highlighted code blocks
pub const CODE_THEME: &str = "base16-ocean.dark";

pub const BRAND_TAGLINE: &str = "Ask questions to interact with your knowledge base";
pub const FOOTER_CREDITS: &str = "Powered by Qdrant and OpenAI";
