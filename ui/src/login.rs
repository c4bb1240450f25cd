//! Sign-in flow, kept apart from rendering so it runs without a DOM.
//!
//! [`LoginHandler`] talks to the outside world only through [`AuthProvider`],
//! [`Navigate`], [`Delay`] and a [`ViewScope`]. In the app these are
//! [`ServerAuth`](crate::ServerAuth), [`RouterNavigator`](crate::RouterNavigator)
//! and [`Timer`](crate::Timer).

use std::time::Duration;

use types::{Credentials, Locale, Result, SignInResponse, SignInRequest};

use crate::{Delay, ViewScope};

/// Pause between a successful sign-in and leaving the page.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(1500);

pub trait AuthProvider {
    async fn sign_in(&self, request: SignInRequest) -> Result<SignInResponse>;
}

pub trait Navigate {
    /// Replace the current history entry with `path`. `None` keeps the active locale.
    fn replace(&self, path: &str, locale: Option<Locale>);
}

impl<N: Navigate + ?Sized> Navigate for &N {
    fn replace(&self, path: &str, locale: Option<Locale>) {
        (**self).replace(path, locale);
    }
}

pub trait LoadingFlag {
    fn is_loading(&self) -> bool;
    fn set_loading(&mut self, loading: bool);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A sign-in was already in flight.
    Ignored,
    Redirected,
    Rejected { status: u16, error: Option<String> },
    Failed(String),
    /// The view went away before the flow finished.
    Abandoned,
}

pub struct LoginHandler<A, N, D> {
    auth: A,
    navigator: N,
    delay: D,
    scope: ViewScope,
}

impl<A, N, D> LoginHandler<A, N, D>
where
    A: AuthProvider,
    N: Navigate,
    D: Delay,
{
    pub fn new(auth: A, navigator: N, delay: D, scope: ViewScope) -> Self {
        Self {
            auth,
            navigator,
            delay,
            scope,
        }
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub async fn submit(
        &self,
        credentials: Credentials,
        loading: &mut impl LoadingFlag,
    ) -> SubmitOutcome {
        if loading.is_loading() {
            tracing::debug!("sign-in already in flight");
            return SubmitOutcome::Ignored;
        }
        loading.set_loading(true);

        let request = SignInRequest::from(credentials);
        let Some(result) = self.scope.run(self.auth.sign_in(request)).await else {
            return SubmitOutcome::Abandoned;
        };

        match result {
            Ok(response) if response.ok => self.redirect_home(loading).await,
            Ok(response) => {
                tracing::warn!(
                    status = response.status,
                    error = ?response.error,
                    "sign-in rejected"
                );
                loading.set_loading(false);
                SubmitOutcome::Rejected {
                    status: response.status,
                    error: response.error,
                }
            }
            Err(error) => {
                tracing::error!(%error, "login error");
                loading.set_loading(false);
                SubmitOutcome::Failed(error.to_string())
            }
        }
    }

    async fn redirect_home(&self, loading: &mut impl LoadingFlag) -> SubmitOutcome {
        if self.scope.run(self.delay.delay(REDIRECT_DELAY)).await.is_none() {
            return SubmitOutcome::Abandoned;
        }

        self.navigator.replace("/", None);
        loading.set_loading(false);
        SubmitOutcome::Redirected
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use tokio::time::{Instant, sleep};
    use types::{CREDENTIALS_SIGNIN, LoginForm, err};

    use super::*;
    use crate::{Timer, testing::RecordingNavigator};

    #[derive(Clone, Default)]
    struct Flag(Rc<Cell<bool>>);

    impl LoadingFlag for Flag {
        fn is_loading(&self) -> bool {
            self.0.get()
        }

        fn set_loading(&mut self, loading: bool) {
            self.0.set(loading);
        }
    }

    enum Reply {
        Ok(SignInResponse),
        Fail(&'static str),
    }

    struct FakeAuth {
        reply: Reply,
        calls: Cell<usize>,
        observed: Flag,
        loading_during_call: Cell<bool>,
    }

    impl FakeAuth {
        fn new(reply: Reply, observed: &Flag) -> Self {
            Self {
                reply,
                calls: Cell::new(0),
                observed: observed.clone(),
                loading_during_call: Cell::new(false),
            }
        }
    }

    impl AuthProvider for &FakeAuth {
        async fn sign_in(&self, request: SignInRequest) -> Result<SignInResponse> {
            assert!(!request.redirect);
            self.calls.set(self.calls.get() + 1);
            self.loading_during_call.set(self.observed.is_loading());
            tokio::task::yield_now().await;

            match &self.reply {
                Reply::Ok(response) => Ok(response.clone()),
                Reply::Fail(message) => Err(err!("{message}")),
            }
        }
    }

    fn credentials() -> Credentials {
        LoginForm {
            email: "jane@example.com".into(),
            password: "hunter2".into(),
        }
        .validate()
        .unwrap()
    }

    fn handler<'a>(
        auth: &'a FakeAuth,
        navigator: &'a RecordingNavigator,
    ) -> LoginHandler<&'a FakeAuth, &'a RecordingNavigator, Timer> {
        LoginHandler::new(auth, navigator, Timer, ViewScope::new())
    }

    #[tokio::test(start_paused = true)]
    async fn success_redirects_home_after_the_delay() {
        let mut flag = Flag::default();
        let auth = FakeAuth::new(Reply::Ok(SignInResponse::accepted(200)), &flag);
        let navigator = RecordingNavigator::default();
        let handler = handler(&auth, &navigator);

        let started = Instant::now();
        let outcome = handler.submit(credentials(), &mut flag).await;

        assert_eq!(outcome, SubmitOutcome::Redirected);
        assert!(started.elapsed() >= REDIRECT_DELAY);
        assert!(auth.loading_during_call.get());
        assert!(!flag.is_loading());
        assert_eq!(navigator.calls(), vec![("/".to_string(), None)]);
    }

    #[tokio::test(start_paused = true)]
    async fn no_navigation_before_the_delay_elapses() {
        let flag = Flag::default();
        let auth = FakeAuth::new(Reply::Ok(SignInResponse::accepted(200)), &flag);
        let navigator = RecordingNavigator::default();
        let handler = handler(&auth, &navigator);

        let mut submitting = flag.clone();
        let check = async {
            sleep(REDIRECT_DELAY - Duration::from_millis(100)).await;
            (navigator.calls().len(), flag.is_loading())
        };
        let (outcome, (calls_before, loading_before)) =
            tokio::join!(handler.submit(credentials(), &mut submitting), check);

        assert_eq!(outcome, SubmitOutcome::Redirected);
        assert_eq!(calls_before, 0);
        assert!(loading_before);
        assert_eq!(navigator.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn raised_failure_clears_loading_without_navigating() {
        let mut flag = Flag::default();
        let auth = FakeAuth::new(Reply::Fail("provider unreachable"), &flag);
        let navigator = RecordingNavigator::default();
        let handler = handler(&auth, &navigator);

        let outcome = handler.submit(credentials(), &mut flag).await;

        assert_eq!(outcome, SubmitOutcome::Failed("provider unreachable".into()));
        assert!(!flag.is_loading());
        assert!(navigator.calls().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn rejection_clears_loading_without_navigating() {
        let mut flag = Flag::default();
        let auth = FakeAuth::new(
            Reply::Ok(SignInResponse::rejected(401, CREDENTIALS_SIGNIN)),
            &flag,
        );
        let navigator = RecordingNavigator::default();
        let handler = handler(&auth, &navigator);

        let outcome = handler.submit(credentials(), &mut flag).await;

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                status: 401,
                error: Some(CREDENTIALS_SIGNIN.into()),
            }
        );
        assert!(!flag.is_loading());
        assert!(navigator.calls().is_empty());
    }

    #[tokio::test]
    async fn submit_while_loading_makes_no_call() {
        let mut flag = Flag::default();
        flag.set_loading(true);
        let auth = FakeAuth::new(Reply::Ok(SignInResponse::accepted(200)), &flag);
        let navigator = RecordingNavigator::default();
        let handler = handler(&auth, &navigator);

        let outcome = handler.submit(credentials(), &mut flag).await;

        assert_eq!(outcome, SubmitOutcome::Ignored);
        assert_eq!(auth.calls.get(), 0);
        assert!(flag.is_loading());
    }

    #[tokio::test(start_paused = true)]
    async fn overlapping_submits_call_the_provider_once() {
        let flag = Flag::default();
        let auth = FakeAuth::new(Reply::Ok(SignInResponse::accepted(200)), &flag);
        let navigator = RecordingNavigator::default();
        let handler = handler(&auth, &navigator);

        let (mut first_flag, mut second_flag) = (flag.clone(), flag.clone());
        let (first, second) = tokio::join!(
            handler.submit(credentials(), &mut first_flag),
            handler.submit(credentials(), &mut second_flag),
        );

        assert_eq!(first, SubmitOutcome::Redirected);
        assert_eq!(second, SubmitOutcome::Ignored);
        assert_eq!(auth.calls.get(), 1);
        assert_eq!(navigator.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_during_delay_abandons_the_redirect() {
        let mut flag = Flag::default();
        let auth = FakeAuth::new(Reply::Ok(SignInResponse::accepted(200)), &flag);
        let navigator = RecordingNavigator::default();
        let handler = handler(&auth, &navigator);

        let teardown = async {
            sleep(Duration::from_millis(500)).await;
            handler.scope().discard();
        };
        let (outcome, ()) = tokio::join!(handler.submit(credentials(), &mut flag), teardown);

        assert_eq!(outcome, SubmitOutcome::Abandoned);
        assert!(navigator.calls().is_empty());

        // Nothing fires later either.
        sleep(REDIRECT_DELAY * 2).await;
        assert!(navigator.calls().is_empty());
    }

    #[tokio::test]
    async fn discarded_view_never_calls_the_provider() {
        let mut flag = Flag::default();
        let auth = FakeAuth::new(Reply::Ok(SignInResponse::accepted(200)), &flag);
        let navigator = RecordingNavigator::default();
        let handler = handler(&auth, &navigator);
        handler.scope().discard();

        let outcome = handler.submit(credentials(), &mut flag).await;

        assert_eq!(outcome, SubmitOutcome::Abandoned);
        assert_eq!(auth.calls.get(), 0);
    }
}
