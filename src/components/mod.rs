pub mod app;
pub mod button_test_screen;
pub mod home;
pub mod link;
pub mod login_screen;
pub mod toast;

pub use app::App;
pub use button_test_screen::ButtonTestScreen;
pub use home::{Home, NotFound};
pub use link::Link;
pub use login_screen::LoginScreen;
pub use toast::ToastProvider;
