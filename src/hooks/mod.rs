pub mod use_login;
pub mod use_toast;

pub use use_login::{use_login, UseLoginHandle};
pub use use_toast::{use_toast, ToastHandle};
