use dioxus::prelude::*;

use crate::app::components::ThemeToggle;
use crate::shared::constants::BRAND_TAGLINE;
use crate::shared::hooks::Theme;

/// Brand header with the theme toggle
#[component]
pub fn AppHeader(theme: Signal<Theme>) -> Element {
    rsx! {
        header { class: "c-header",
            div { class: "c-header__inner",
                div {
                    h1 { class: "c-header__brand",
                        span { class: "c-header__brand-accent", "baby" }
                        "steps"
                        span { class: "c-header__brand-accent", ".ai" }
                    }
                    p { class: "c-header__tagline", "{BRAND_TAGLINE}" }
                }
                ThemeToggle { theme }
            }
        }
    }
}
