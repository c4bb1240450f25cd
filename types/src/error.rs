use std::{backtrace::BacktraceStatus, fmt};

use dioxus::prelude::ServerFnError;
use serde_json::json;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The error type shared by the client and server halves of the app.
///
/// Any `std::error::Error` converts into it with `?`. Use [`err!`](crate::err)
/// for ad-hoc messages.
pub struct Error(anyhow::Error);

impl Error {
    #[doc(hidden)]
    pub fn from_anyhow(inner: anyhow::Error) -> Self {
        Self(inner)
    }

    /// Messages from the outermost error down to the root cause.
    pub fn chain(&self) -> Vec<String> {
        self.0.chain().map(ToString::to_string).collect()
    }

    /// Convert for a server function response.
    ///
    /// `details` carries the chain and any captured backtrace. The client
    /// rebuilds the chain with [`Error::from_server_error`].
    pub fn into_server_error(self) -> ServerFnError {
        ServerFnError::ServerError {
            message: self.to_string(),
            code: 500,
            details: Some(json!({
                "chain": self.chain(),
                "backtrace": self.backtrace(),
            })),
        }
    }

    /// Rebuild an error returned by a server function.
    ///
    /// The server's backtrace stays in its own logs; only the chain comes back.
    pub fn from_server_error(error: &ServerFnError) -> Self {
        let ServerFnError::ServerError {
            message, details, ..
        } = error
        else {
            return Self(anyhow::anyhow!("{error}"));
        };

        let chain: Vec<String> = details
            .as_ref()
            .and_then(|details| details.get("chain"))
            .and_then(|chain| chain.as_array())
            .map(|chain| {
                chain
                    .iter()
                    .filter_map(|link| link.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default();

        // Innermost cause first, then wrap outward.
        let mut links = chain.into_iter().rev();
        let Some(root) = links.next() else {
            return Self(anyhow::anyhow!("{message}"));
        };
        Self(links.fold(anyhow::anyhow!(root), |error, link| error.context(link)))
    }

    fn backtrace(&self) -> Option<String> {
        let backtrace = self.0.backtrace();
        (backtrace.status() == BacktraceStatus::Captured).then(|| backtrace.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<E> From<E> for Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self(anyhow::Error::new(error))
    }
}

impl From<Error> for anyhow::Error {
    fn from(error: Error) -> Self {
        error.0
    }
}

#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_anyhow($crate::internal_anyhow_dont_use!($($arg)*))
    };
}
