mod config;
mod provider;

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;
use types::{Result, SignInRequest, SignInResponse, err};

pub use crate::config::Config;
pub use crate::provider::ProviderClient;

static PROVIDER: OnceLock<ProviderClient> = OnceLock::new();

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // The dev server may have installed a subscriber already.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Load configuration and build the provider client. Call once before serving.
pub fn init() -> Result<()> {
    let config = Config::load()?.install();
    let provider = ProviderClient::from_config(config)?;
    tracing::info!(callback = %provider.callback_url(), "using external auth provider");
    let _ = PROVIDER.set(provider);
    Ok(())
}

fn provider() -> Result<&'static ProviderClient> {
    PROVIDER
        .get()
        .ok_or_else(|| err!("auth provider is not configured"))
}

/// Forward a sign-in attempt to the external provider.
pub async fn sign_in(request: SignInRequest) -> Result<SignInResponse> {
    provider()?.sign_in(request).await
}
