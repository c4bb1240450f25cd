use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, err};

/// Languages the app ships translations for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Vi,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Vi];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Vi => "vi",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Vi => "Vietnamese",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Locale::En => "🇺🇸",
            Locale::Vi => "🇻🇳",
        }
    }

    pub fn is_default(self) -> bool {
        self == Locale::default()
    }

    /// Split a route into its locale prefix (if any) and the rest.
    ///
    /// The rest always starts with `/` and keeps any query string.
    pub fn split_path(path: &str) -> (Option<Locale>, String) {
        let trimmed = path.strip_prefix('/').unwrap_or(path);
        let end = trimmed.find(['/', '?', '#']).unwrap_or(trimmed.len());

        let Ok(locale) = trimmed[..end].parse::<Locale>() else {
            return (None, path.to_string());
        };

        let rest = &trimmed[end..];
        if rest.starts_with('/') {
            (Some(locale), rest.to_string())
        } else {
            (Some(locale), format!("/{rest}"))
        }
    }

    /// Prefix an unlocalized path with this locale. The default locale has no prefix.
    pub fn localize(self, path: &str) -> String {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        if self.is_default() {
            return path;
        }

        if path == "/" {
            format!("/{}", self.code())
        } else if path.starts_with("/?") || path.starts_with("/#") {
            format!("/{}{}", self.code(), &path[1..])
        } else {
            format!("/{}{}", self.code(), path)
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code() == s)
            .ok_or_else(|| err!("unsupported locale: {s:?}"))
    }
}
