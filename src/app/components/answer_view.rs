//! Answer rendering component

use dioxus::prelude::*;

use crate::domain::models::QueryResult;
use crate::shared::utils::render_markdown;

/// Renders the markdown answer of a query; sources are not displayed
#[component]
pub fn AnswerView(result: QueryResult) -> Element {
    let html_content = render_markdown(&result.answer);

    rsx! {
        section { class: "c-answer animate-fade-in",
            h3 { class: "c-answer__title", "Answer:" }
            div { class: "c-answer__body",
                div {
                    class: "c-prose",
                    dangerous_inner_html: "{html_content}"
                }
            }
        }
    }
}
