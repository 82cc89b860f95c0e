use dioxus::prelude::*;
use dioxus::document;

use crate::app::components::{AnswerView, QueryForm};
use crate::app::layouts::{AppFooter, AppHeader};
use crate::config::AppConfig;
use crate::shared::hooks::{use_query_state, use_theme};

/// Root component: provides the configuration and lays out the page
#[component]
pub fn App() -> Element {
    use_context_provider(AppConfig::from_build_env);
    let theme = use_theme();

    use_effect(|| {
        tracing::info!("Knowledge base client initialized");
    });

    // Use asset!() macro to ensure CSS is bundled and served correctly
    const BUNDLE_CSS: Asset = asset!("/assets/dist/bundle.css");

    rsx! {
        document::Link { rel: "stylesheet", href: BUNDLE_CSS }
        div { class: "c-layout",
            AppHeader { theme }
            main { class: "c-layout__main",
                QueryPage {}
            }
            AppFooter {}
        }
    }
}

/// Query card: form on top, answer below once available
#[component]
pub fn QueryPage() -> Element {
    let controller = use_query_state();
    let result = controller.state.read().result().cloned();

    rsx! {
        div { class: "c-card",
            h2 { class: "c-card__title", "Query Knowledge Base" }
            QueryForm { controller: controller.clone() }

            if let Some(result) = result {
                AnswerView { result }
            }
        }
    }
}
