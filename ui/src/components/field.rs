use dioxus::prelude::*;

/// A labelled input with its inline validation message.
#[component]
pub fn FormField(
    id: String,
    label: String,
    #[props(default = "text".to_string())] input_type: String,
    value: String,
    error: Option<String>,
    #[props(default)] disabled: bool,
    oninput: EventHandler<String>,
) -> Element {
    let has_error = error.is_some();

    rsx! {
        div { class: if has_error { "form-group has-error" } else { "form-group" },
            label { class: "form-label", r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                name: "{id}",
                class: "form-input",
                r#type: "{input_type}",
                autocomplete: "off",
                disabled: disabled,
                value: "{value}",
                oninput: move |e| oninput.call(e.value()),
            }
            if let Some(message) = error {
                div { class: "form-error", role: "alert", "{message}" }
            }
        }
    }
}
