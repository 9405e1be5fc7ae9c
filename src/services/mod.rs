pub mod transport;
pub mod credentials;
pub mod navigation;
pub mod api_client;
pub mod telegram;

#[cfg(test)]
pub mod testing;

pub use api_client::{ApiClient, ApiError};
pub use credentials::CredentialStore;
pub use navigation::{current_route, BrowserNavigator, Navigator, ROUTE_CHANGE_EVENT};
