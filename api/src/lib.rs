use dioxus::prelude::*;
use types::{SignInRequest, SignInResponse};

/// Check a credential pair with the external provider.
///
/// A wrong password comes back as `ok: false`; only transport and provider
/// failures are errors.
#[post("/api/auth/sign-in")]
pub async fn sign_in(request: SignInRequest) -> ServerFnResult<SignInResponse> {
    server::sign_in(request)
        .await
        .map_err(types::Error::into_server_error)
}
