use std::cell::RefCell;

use types::Locale;

use crate::Navigate;

/// Records every `replace` call instead of touching a router.
#[derive(Default)]
pub struct RecordingNavigator {
    calls: RefCell<Vec<(String, Option<Locale>)>>,
}

impl RecordingNavigator {
    pub fn calls(&self) -> Vec<(String, Option<Locale>)> {
        self.calls.borrow().clone()
    }
}

impl Navigate for RecordingNavigator {
    fn replace(&self, path: &str, locale: Option<Locale>) {
        self.calls.borrow_mut().push((path.to_string(), locale));
    }
}
