pub mod auth;
pub mod button;
pub mod route;
pub mod toast;

pub use auth::{Credentials, LoginRequest, LoginResponse};
pub use button::ButtonVariant;
pub use route::Route;
pub use toast::Toast;
