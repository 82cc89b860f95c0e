//! Question form: collection filter, textarea and submit button

use dioxus::prelude::*;

use crate::app::components::{CollectionSelector, LoadingText};
use crate::shared::hooks::QueryController;

#[component]
pub fn QueryForm(controller: QueryController) -> Element {
    let state = controller.state.read();
    let input = state.input().to_string();
    let is_loading = state.is_loading();
    let can_submit = state.can_submit();
    drop(state);

    let submit_controller = controller.clone();
    let handle_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        submit_controller.submit();
    };

    let input_controller = controller.clone();
    let handle_input = move |evt: Event<FormData>| {
        input_controller.set_input(evt.value());
    };

    rsx! {
        form { class: "c-query-form", onsubmit: handle_submit,
            CollectionSelector { controller: controller.clone() }

            div { class: "c-field",
                label { class: "c-field__label", r#for: "query-input", "Your Question:" }
                textarea {
                    id: "query-input",
                    class: "c-query-form__input",
                    rows: "4",
                    placeholder: "What would you like to know?",
                    value: "{input}",
                    oninput: handle_input,
                }
            }

            button {
                r#type: "submit",
                class: "c-btn c-btn--primary",
                disabled: !can_submit,
                if is_loading {
                    LoadingText { message: "Processing..." }
                } else {
                    "Submit Question"
                }
            }
        }
    }
}
