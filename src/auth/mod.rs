mod api_key;
mod auth_manager;

pub use api_key::ApiKeyProvider;
pub use auth_manager::AuthManager;
