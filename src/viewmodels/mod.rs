pub mod button_test_viewmodel;
pub mod login_viewmodel;

pub use button_test_viewmodel::activate_button;
pub use login_viewmodel::LoginViewModel;
