use std::rc::Rc;

use dioxus::prelude::*;
use types::{
    Credentials, FormErrors, Locale, LoginForm,
    i18n::{Namespace, Translate, Translator},
};
use ui::{
    FormField, LanguageSelect, LoginHandler, RouterNavigator, ServerAuth, SocialLinks,
    SubmitButton, Timer, ViewScope, switch_locale,
};

/// Validate `form`, handing the credentials to `start` only when every field
/// passes. Returns the errors to show inline.
pub(crate) fn submit_form(form: &LoginForm, start: impl FnOnce(Credentials)) -> FormErrors {
    match form.validate() {
        Ok(credentials) => {
            start(credentials);
            FormErrors::default()
        }
        Err(errors) => errors,
    }
}

#[component]
pub fn LoginPage(locale: Locale) -> Element {
    let translator = Translator::new(locale);
    let t = move |key: &str| translator.t(key, Namespace::Login);

    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(FormErrors::default);
    let mut submitted = use_signal(|| false);
    let loading = use_signal(|| false);

    // Pending sign-in work dies with the page.
    let scope = use_hook(ViewScope::new);
    use_drop({
        let scope = scope.clone();
        move || scope.discard()
    });

    let handler = use_hook(|| {
        Rc::new(LoginHandler::new(
            ServerAuth,
            RouterNavigator::new(navigator, locale),
            Timer,
            scope.clone(),
        ))
    });

    let form = move || LoginForm {
        email: email(),
        password: password(),
    };

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        submitted.set(true);

        errors.set(submit_form(&form(), |credentials| {
            let handler = handler.clone();
            let mut loading = loading;
            spawn(async move {
                let outcome = handler.submit(credentials, &mut loading).await;
                tracing::debug!(?outcome, "sign-in finished");
            });
        }));
    };

    // The history entry, not the matched route, so the query survives.
    let on_language = move |selected: String| {
        switch_locale(
            &RouterNavigator::new(navigator, locale),
            &router().full_route_string(),
            &selected,
        );
    };

    let email_error = errors.read().email_message().map(t);
    let password_error = errors.read().password_message().map(t);

    rsx! {
        section { class: "login-page",
            div { class: "login-hero",
                div { class: "login-overlay" }
                div { class: "login-hero-text",
                    h1 { class: "login-hero-title", {t("Keep it special")} }
                    p { class: "login-hero-tagline",
                        {t("Capture your personal memory in unique way, anywhere.")}
                    }
                }
                SocialLinks { class: "social-links-hero" }
            }

            div { class: "login-panel",
                div { class: "login-panel-backdrop",
                    div { class: "login-overlay" }
                }
                div { class: "login-language",
                    LanguageSelect {
                        current: locale,
                        label: t("Language"),
                        onchange: on_language,
                    }
                }
                div { class: "login-form-wrapper",
                    form {
                        name: "loginForm",
                        class: "login-form",
                        novalidate: true,
                        onsubmit: onsubmit,

                        FormField {
                            id: "email",
                            label: t("Email"),
                            value: email(),
                            error: email_error,
                            oninput: move |value: String| {
                                email.set(value);
                                if submitted() {
                                    errors.set(form().errors());
                                }
                            },
                        }
                        FormField {
                            id: "password",
                            label: t("Password"),
                            input_type: "password",
                            value: password(),
                            error: password_error,
                            oninput: move |value: String| {
                                password.set(value);
                                if submitted() {
                                    errors.set(form().errors());
                                }
                            },
                        }

                        div { class: "login-forgot",
                            Link { to: locale.localize("/"), class: "login-forgot-link",
                                {t("Forgot your password?")}
                            }
                        }
                        div { class: "login-actions",
                            SubmitButton { label: t("Sign in"), loading: loading() }
                        }
                        SocialLinks {
                            class: "social-links-mobile",
                            href: locale.localize("/"),
                        }
                    }
                }
            }
        }
    }
}
