use dioxus::prelude::*;

use super::ClapSpinner;

/// Full-width submit button. Disabled with a spinner while `loading`.
#[component]
pub fn SubmitButton(label: String, loading: bool) -> Element {
    rsx! {
        button {
            r#type: "submit",
            class: "btn-submit",
            disabled: loading,
            if loading {
                div { class: "btn-spinner",
                    ClapSpinner { size: 20 }
                }
            }
            "{label}"
        }
    }
}
