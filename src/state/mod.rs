pub mod login_state;
pub mod toast_state;

pub use login_state::{LoginAction, LoginFormState, LoginStatus, ERROR_PREFIX};
pub use toast_state::{ToastAction, ToastState, MAX_VISIBLE_TOASTS};
