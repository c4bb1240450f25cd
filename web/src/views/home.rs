use dioxus::prelude::*;
use types::{
    Locale,
    i18n::{Namespace, Translate, Translator},
};

/// Landing page and the target of a successful sign-in.
#[component]
pub fn Home(locale: Locale) -> Element {
    let translator = Translator::new(locale);
    let title = translator.t("Welcome back", Namespace::Common);
    let subtitle = translator.t("Your memories are waiting for you.", Namespace::Common);
    let sign_in = translator.t("Sign in", Namespace::Common);

    rsx! {
        div { class: "home-page",
            div { class: "home-card",
                h1 { class: "home-title", "{title}" }
                p { class: "home-subtitle", "{subtitle}" }
                Link {
                    to: locale.localize("/login"),
                    class: "btn-submit home-sign-in",
                    "{sign_in}"
                }
            }
        }
    }
}
