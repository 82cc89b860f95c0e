// Public API exports
pub mod config;
pub mod domain;
pub mod shared;

// UI components
pub mod app;
