use dioxus::prelude::*;
use types::Locale;

#[component]
pub fn LanguageSelect(current: Locale, label: String, onchange: EventHandler<String>) -> Element {
    rsx! {
        select {
            class: "language-select",
            aria_label: "{label}",
            value: "{current}",
            onchange: move |e| onchange.call(e.value()),
            for locale in Locale::ALL {
                option {
                    key: "{locale}",
                    value: "{locale}",
                    selected: locale == current,
                    "{locale.flag()} {locale.label()}"
                }
            }
        }
    }
}
