use types::Locale;

use crate::Navigate;

/// Re-open the current route under the locale picked in the language select.
///
/// `current_route` is the full route including any locale prefix and query.
/// Values that are not a supported locale code are ignored.
pub fn switch_locale(navigator: &impl Navigate, current_route: &str, selected: &str) -> Option<Locale> {
    let locale = match selected.parse::<Locale>() {
        Ok(locale) => locale,
        Err(error) => {
            tracing::debug!(%error, "ignoring language selection");
            return None;
        }
    };

    let (_, path) = Locale::split_path(current_route);
    navigator.replace(&path, Some(locale));
    Some(locale)
}
