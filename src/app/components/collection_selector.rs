use dioxus::prelude::*;
use crate::domain::models::{collection_badge_modifier, collection_label};
use crate::shared::hooks::QueryController;

/// Filter buttons: "All Collections" plus one per selectable collection
#[component]
pub fn CollectionSelector(controller: QueryController) -> Element {
    let state = controller.state.read();
    let selected = state.selected().map(str::to_string);
    let collections = state.collections().to_vec();
    drop(state);

    let all_controller = controller.clone();

    rsx! {
        div { class: "c-collection-selector",
            label { class: "c-field__label", "Select Knowledge Source:" }
            div { class: "c-collection-selector__options",
                button {
                    r#type: "button",
                    class: chip_class(selected.is_none()),
                    onclick: move |_| all_controller.select(None),
                    "All Collections"
                }

                for name in collections {
                    CollectionChip {
                        key: "{name}",
                        is_active: selected.as_deref() == Some(name.as_str()),
                        name: name.clone(),
                        controller: controller.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn CollectionChip(name: String, is_active: bool, controller: QueryController) -> Element {
    let badge = format!(
        "c-collection-badge c-collection-badge--{}",
        collection_badge_modifier(&name)
    );
    let label = collection_label(&name);

    rsx! {
        button {
            r#type: "button",
            class: chip_class(is_active),
            onclick: move |_| controller.select(Some(name.clone())),
            span { class: "{badge}" }
            "{label}"
        }
    }
}

fn chip_class(is_active: bool) -> &'static str {
    if is_active {
        "c-collection-chip is-active"
    } else {
        "c-collection-chip"
    }
}
