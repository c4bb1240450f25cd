mod credentials;
mod error;
pub mod i18n;
mod locale;
mod sign_in;

pub use credentials::{Credentials, FieldError, FormErrors, LoginForm, is_email};
pub use error::{Error, Result};
pub use locale::Locale;
pub use sign_in::{CREDENTIALS_SIGNIN, SignInRequest, SignInResponse};

// FIXME: We can do this better I think.
#[doc(hidden)]
pub use anyhow::anyhow as internal_anyhow_dont_use;
