use dioxus::prelude::*;

use crate::shared::constants::FOOTER_CREDITS;

#[component]
pub fn AppFooter() -> Element {
    rsx! {
        footer { class: "c-footer",
            div { class: "c-footer__inner",
                h3 { class: "c-footer__brand",
                    span { class: "c-footer__brand-accent", "baby" }
                    "steps"
                    span { class: "c-footer__brand-accent", ".ai" }
                }
                p { class: "c-footer__credits", "{FOOTER_CREDITS}" }
            }
        }
    }
}
