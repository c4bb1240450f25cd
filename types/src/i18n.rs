//! Translation lookup keyed by `(key, namespace)`.
//!
//! Catalogs live under `locales/<code>/<namespace>.json` and are compiled in.
//! A key with no translation renders as itself.

use std::{collections::HashMap, sync::LazyLock};

use crate::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Common,
    Login,
}

impl Namespace {
    pub fn name(self) -> &'static str {
        match self {
            Namespace::Common => "common",
            Namespace::Login => "login",
        }
    }
}

type Catalog = HashMap<String, String>;

const SOURCES: [(Locale, Namespace, &str); 4] = [
    (Locale::En, Namespace::Common, include_str!("../locales/en/common.json")),
    (Locale::En, Namespace::Login, include_str!("../locales/en/login.json")),
    (Locale::Vi, Namespace::Common, include_str!("../locales/vi/common.json")),
    (Locale::Vi, Namespace::Login, include_str!("../locales/vi/login.json")),
];

static CATALOGS: LazyLock<HashMap<(Locale, Namespace), Catalog>> = LazyLock::new(|| {
    SOURCES
        .into_iter()
        .map(|(locale, ns, source)| {
            let catalog = serde_json::from_str(source).unwrap_or_default();
            ((locale, ns), catalog)
        })
        .collect()
});

/// Anything that can turn a key into display text.
pub trait Translate {
    fn t(&self, key: &str, ns: Namespace) -> String;
}

/// Looks keys up in the compiled-in catalog for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}

impl Translate for Translator {
    fn t(&self, key: &str, ns: Namespace) -> String {
        CATALOGS
            .get(&(self.locale, ns))
            .and_then(|catalog| catalog.get(key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(locale: Locale, ns: Namespace) -> Catalog {
        let (_, _, source) = SOURCES
            .into_iter()
            .find(|(l, n, _)| *l == locale && *n == ns)
            .unwrap();
        serde_json::from_str(source).unwrap()
    }

    #[test]
    fn every_catalog_parses() {
        for (locale, ns, _) in SOURCES {
            assert!(!parsed(locale, ns).is_empty(), "{locale}/{}", ns.name());
        }
    }

    #[test]
    fn vietnamese_covers_every_english_key() {
        for ns in [Namespace::Common, Namespace::Login] {
            let en = parsed(Locale::En, ns);
            let vi = parsed(Locale::Vi, ns);
            for key in en.keys() {
                assert!(vi.contains_key(key), "vi/{} is missing {key:?}", ns.name());
            }
        }
    }

    #[test]
    fn looks_up_by_locale_and_namespace() {
        let vi = Translator::new(Locale::Vi);
        assert_eq!(vi.t("Sign in", Namespace::Login), "Đăng nhập");
        assert_eq!(vi.t("Password", Namespace::Login), "Mật khẩu");

        let en = Translator::new(Locale::En);
        assert_eq!(en.t("Forgot your password?", Namespace::Login), "Forgot your password?");
    }

    #[test]
    fn unknown_keys_fall_back_to_the_key() {
        let vi = Translator::new(Locale::Vi);
        assert_eq!(vi.t("Not translated yet", Namespace::Login), "Not translated yet");
        assert_eq!(vi.t("Keep it special", Namespace::Common), "Keep it special");
    }
}
