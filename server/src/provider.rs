use reqwest::{Client, StatusCode, header::LOCATION, redirect::Policy};
use secrecy::ExposeSecret;
use serde_json::json;
use types::{CREDENTIALS_SIGNIN, Result, SignInRequest, SignInResponse};
use url::Url;

use crate::Config;

/// Client for the external provider's credentials callback.
#[derive(Clone)]
pub struct ProviderClient {
    client: Client,
    callback_url: Url,
}

impl ProviderClient {
    pub fn new(base_url: &Url, provider_id: &str) -> Result<Self> {
        let mut base_url = base_url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        // Redirects carry the outcome, so they must not be followed.
        let client = Client::builder().redirect(Policy::none()).build()?;

        Ok(Self {
            client,
            callback_url: base_url.join(&format!("callback/{provider_id}"))?,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.provider_url, &config.provider_id)
    }

    pub fn callback_url(&self) -> &Url {
        &self.callback_url
    }

    /// Forward a credential pair to the provider.
    ///
    /// 401/403, or a redirect carrying an `error` parameter, is a rejection.
    /// Any other failure status is an error.
    pub async fn sign_in(&self, request: SignInRequest) -> Result<SignInResponse> {
        let response = self
            .client
            .post(self.callback_url.clone())
            .json(&json!({
                "username": request.identifier,
                "password": request.secret.expose_secret(),
                "redirect": request.redirect,
            }))
            .send()
            .await?;

        let status = response.status();
        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            tracing::info!(%status, "provider rejected credentials");
            return Ok(SignInResponse::rejected(status.as_u16(), CREDENTIALS_SIGNIN));
        }

        if status.is_redirection() {
            let error = response
                .headers()
                .get(LOCATION)
                .and_then(|location| location.to_str().ok())
                .and_then(|location| self.callback_url.join(location).ok())
                .and_then(|location| {
                    location
                        .query_pairs()
                        .find(|(key, _)| key == "error")
                        .map(|(_, value)| value.into_owned())
                });

            if let Some(error) = error {
                tracing::info!(%status, %error, "provider redirected with an error");
                return Ok(SignInResponse::rejected(status.as_u16(), error));
            }
            return Ok(SignInResponse::accepted(status.as_u16()));
        }

        response.error_for_status()?;
        tracing::debug!(%status, "provider accepted credentials");
        Ok(SignInResponse::accepted(status.as_u16()))
    }
}
