use dioxus::prelude::*;
use dioxus::router::Navigator;
use types::{Error, Locale, Result, SignInRequest, SignInResponse};

use crate::{AuthProvider, LoadingFlag, Navigate};

/// Signs in through the `api::sign_in` server function.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerAuth;

impl AuthProvider for ServerAuth {
    async fn sign_in(&self, request: SignInRequest) -> Result<SignInResponse> {
        api::sign_in(request)
            .await
            .map_err(|error| Error::from_server_error(&error))
    }
}

/// Replaces history entries through the Dioxus router.
#[derive(Clone, Copy)]
pub struct RouterNavigator {
    navigator: Navigator,
    locale: Locale,
}

impl RouterNavigator {
    pub fn new(navigator: Navigator, locale: Locale) -> Self {
        Self { navigator, locale }
    }
}

impl Navigate for RouterNavigator {
    fn replace(&self, path: &str, locale: Option<Locale>) {
        let target = locale.unwrap_or(self.locale).localize(path);
        tracing::debug!(%target, "replacing route");
        if let Some(failure) = self.navigator.replace(target) {
            tracing::warn!(?failure, "navigation failed");
        }
    }
}

impl LoadingFlag for Signal<bool> {
    fn is_loading(&self) -> bool {
        *self.peek()
    }

    fn set_loading(&mut self, loading: bool) {
        self.set(loading);
    }
}
