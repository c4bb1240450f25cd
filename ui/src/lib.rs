//! Shared components and the framework-independent login flow.

mod adapters;
mod components;
mod locale;
pub mod login;
mod scope;
mod timer;

#[cfg(test)]
mod testing;

pub use adapters::{RouterNavigator, ServerAuth};
pub use components::{ClapSpinner, FormField, LanguageSelect, SocialLinks, SubmitButton};
pub use locale::switch_locale;
pub use login::{
    AuthProvider, LoadingFlag, LoginHandler, Navigate, REDIRECT_DELAY, SubmitOutcome,
};
pub use scope::ViewScope;
pub use timer::{Delay, Timer};
