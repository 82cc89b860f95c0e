use dioxus::prelude::*;

// Reusable Loading Component (BEM: c-loading)
#[component]
pub fn LoadingText(message: String) -> Element {
    rsx! {
        span { class: "c-loading",
            span { class: "c-loading__spinner" }
            span { class: "c-loading__text", "{message}" }
        }
    }
}
