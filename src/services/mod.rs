pub mod api_client;
pub mod delay;
pub mod navigation;
pub mod storage;
pub mod traits;

pub use api_client::ApiClient;
pub use delay::GlooDelay;
pub use navigation::{current_path, push_route, BrowserNavigator};
pub use storage::LocalStore;
pub use traits::{Delay, KeyValueStore, LoginApi, Navigator, Notifier};
