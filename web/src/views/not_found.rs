use dioxus::prelude::*;
use types::{
    Locale,
    i18n::{Namespace, Translate, Translator},
};

#[component]
pub fn NotFound(locale: Locale) -> Element {
    let translator = Translator::new(locale);
    let title = translator.t("Page not found", Namespace::Common);
    let back = translator.t("Back to home", Namespace::Common);

    rsx! {
        div { class: "home-page",
            div { class: "home-card",
                h1 { class: "home-title", "{title}" }
                Link { to: locale.localize("/"), class: "btn-submit", "{back}" }
            }
        }
    }
}
