use std::sync::LazyLock;

use regex::Regex;
use secrecy::SecretString;

// Quoted or dot-atom local part; bracketed IPv4 or dotted domain with a
// two-letter-or-longer top-level label.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]+\.)+[a-zA-Z\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}]{2,}))$"#,
    )
    .expect("email pattern is valid")
});

pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// A validated identifier/secret pair, ready to hand to the provider.
#[derive(Debug, Clone)]
pub struct Credentials {
    identifier: String,
    secret: SecretString,
}

impl Credentials {
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn secret(&self) -> &SecretString {
        &self.secret
    }

    pub fn into_parts(self) -> (String, SecretString) {
        (self.identifier, self.secret)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
}

/// Inline errors for the login form, one slot per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }

    /// Translation key for the email field's message, if any.
    pub fn email_message(&self) -> Option<&'static str> {
        self.email.map(|error| match error {
            FieldError::Required => "Please input your email",
            FieldError::InvalidEmail => "Email is invalid",
        })
    }

    /// Translation key for the password field's message, if any.
    pub fn password_message(&self) -> Option<&'static str> {
        self.password.map(|_| "Please input your password!")
    }
}

/// Raw values from the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn email_error(&self) -> Option<FieldError> {
        if self.email.is_empty() {
            Some(FieldError::Required)
        } else if !is_email(&self.email) {
            Some(FieldError::InvalidEmail)
        } else {
            None
        }
    }

    pub fn password_error(&self) -> Option<FieldError> {
        self.password.is_empty().then_some(FieldError::Required)
    }

    pub fn errors(&self) -> FormErrors {
        FormErrors {
            email: self.email_error(),
            password: self.password_error(),
        }
    }

    pub fn validate(&self) -> Result<Credentials, FormErrors> {
        let errors = self.errors();
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Credentials {
            identifier: self.email.clone(),
            secret: self.password.clone().into(),
        })
    }
}
