use dioxus::prelude::*;
use types::Locale;

mod views;

use views::{Home, LoginPage, NotFound};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/:locale")]
    LocalizedRoot { locale: Locale },
    #[route("/:locale/login")]
    LocalizedLogin { locale: Locale },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

impl Route {
    pub fn locale(&self) -> Locale {
        match self {
            Route::Root {} | Route::Login {} => Locale::default(),
            Route::LocalizedRoot { locale } | Route::LocalizedLogin { locale } => *locale,
            Route::PageNotFound { segments } => segments
                .first()
                .and_then(|segment| segment.parse().ok())
                .unwrap_or_default(),
        }
    }
}

#[component]
fn Root() -> Element {
    rsx! { Home { locale: Locale::default() } }
}

#[component]
fn Login() -> Element {
    rsx! { LoginPage { locale: Locale::default() } }
}

#[component]
fn LocalizedRoot(locale: Locale) -> Element {
    rsx! { Home { locale } }
}

#[component]
fn LocalizedLogin(locale: Locale) -> Element {
    rsx! { LoginPage { locale } }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let locale = Route::PageNotFound { segments }.locale();
    rsx! { NotFound { locale } }
}

fn main() {
    #[cfg(feature = "server")]
    {
        server::init_tracing();
        dioxus::serve(|| async move {
            server::init()?;

            Ok(dioxus::server::router(App))
        });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Keepsake" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}
