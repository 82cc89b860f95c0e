use dioxus::prelude::*;
use crate::shared::hooks::Theme;

/// Theme toggle button for switching between light and dark mode.
/// Shows a sun while dark (click for light) and a moon while light.
/// Persistence and the `dark` root class are handled by `use_theme`.
#[component]
pub fn ThemeToggle(mut theme: Signal<Theme>) -> Element {
    let current = theme();

    let toggle_theme = move |_| {
        let next = theme().toggle();
        theme.set(next);
    };

    let toggle_class = if current.is_dark() {
        "c-theme-toggle"
    } else {
        "c-theme-toggle c-theme-toggle--light"
    };

    rsx! {
        button {
            class: "{toggle_class}",
            r#type: "button",
            aria_label: "{current.toggle_label()}",
            title: "{current.toggle_label()}",
            onclick: toggle_theme,

            if current.is_dark() {
                // Sun
                svg {
                    class: "c-theme-toggle__icon",
                    fill: "none",
                    view_box: "0 0 24 24",
                    stroke: "currentColor",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: "M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z",
                    }
                }
            } else {
                // Moon
                svg {
                    class: "c-theme-toggle__icon",
                    fill: "none",
                    view_box: "0 0 24 24",
                    stroke: "currentColor",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: "M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z",
                    }
                }
            }
        }
    }
}
