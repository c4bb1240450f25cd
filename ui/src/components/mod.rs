mod field;
pub use field::FormField;

mod language_select;
pub use language_select::LanguageSelect;

mod social;
pub use social::SocialLinks;

mod spinner;
pub use spinner::ClapSpinner;

mod submit;
pub use submit::SubmitButton;
