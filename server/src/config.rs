use std::sync::OnceLock;

use serde::Deserialize;
use types::{Result, err};
use url::Url;

static CONFIG: OnceLock<Config> = OnceLock::new();

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the external auth provider, e.g. `https://id.example.com/api/auth/`.
    pub provider_url: Url,
    /// Name of the credentials provider in the callback path.
    #[serde(default = "default_provider_id")]
    pub provider_id: String,
}

fn default_provider_id() -> String {
    "credentials".into()
}

impl Config {
    /// Layer `keepsake.toml` (optional) under `KEEPSAKE_*` environment variables.
    pub fn load() -> Result<Self> {
        Ok(config::Config::builder()
            .add_source(config::File::with_name("keepsake").required(false))
            .add_source(
                config::Environment::with_prefix("KEEPSAKE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?)
    }

    /// Store the process-wide configuration. Later calls keep the first value.
    pub fn install(self) -> &'static Config {
        CONFIG.get_or_init(|| self)
    }

    pub fn get() -> Result<&'static Config> {
        CONFIG
            .get()
            .ok_or_else(|| err!("configuration has not been loaded"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(source: &str) -> Result<Config> {
        Ok(config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?)
    }

    #[test]
    fn provider_id_defaults_to_credentials() {
        let config = from_toml(r#"provider_url = "https://id.example.com/api/auth/""#).unwrap();
        assert_eq!(config.provider_url.as_str(), "https://id.example.com/api/auth/");
        assert_eq!(config.provider_id, "credentials");
    }

    #[test]
    fn provider_url_is_required() {
        assert!(from_toml(r#"provider_id = "ldap""#).is_err());
    }

    #[test]
    fn rejects_malformed_urls() {
        assert!(from_toml(r#"provider_url = "not a url""#).is_err());
    }
}
