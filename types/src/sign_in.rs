use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::Credentials;

/// Error code the provider reports for a wrong identifier/secret pair.
pub const CREDENTIALS_SIGNIN: &str = "CredentialsSignin";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub identifier: String,
    #[serde(with = "secret_string")]
    pub secret: SecretString,
    /// Whether the provider should answer with a redirect instead of a result.
    pub redirect: bool,
}

impl From<Credentials> for SignInRequest {
    fn from(credentials: Credentials) -> Self {
        let (identifier, secret) = credentials.into_parts();
        Self {
            identifier,
            secret,
            redirect: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInResponse {
    pub ok: bool,
    pub status: u16,
    pub error: Option<String>,
}

impl SignInResponse {
    pub fn accepted(status: u16) -> Self {
        Self {
            ok: true,
            status,
            error: None,
        }
    }

    pub fn rejected(status: u16, error: impl Into<String>) -> Self {
        Self {
            ok: false,
            status,
            error: Some(error.into()),
        }
    }
}

mod secret_string {
    use secrecy::SecretString;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use secrecy::ExposeSecret;
        serializer.serialize_str(secret.expose_secret())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.into())
    }
}
