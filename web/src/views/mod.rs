mod home;
pub use home::Home;

mod login;
pub use login::LoginPage;

mod not_found;
pub use not_found::NotFound;
