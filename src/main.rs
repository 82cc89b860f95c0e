//! babysteps.ai knowledge base client - Main Entry Point
//!
//! Launches the Dioxus app in the browser (WASM) or in a desktop webview.

use babysteps_web::app::App;

// WASM entry point (browser)
#[cfg(target_arch = "wasm32")]
fn main() {
    // Route tracing records to the browser console
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        web_sys::console::error_1(&format!("Failed to initialize logger: {}", e).into());
    }
    dioxus::launch(App);
}

// Native client (desktop)
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting babysteps.ai client...");
    dioxus::launch(App);
}
