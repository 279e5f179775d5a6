pub mod config;
pub mod credential;
pub mod error;
pub mod identity;
pub mod request;
pub mod storage;
pub mod transport;

// Re-export common error type
pub use error::HearthError;

pub use config::ApiConfig;
pub use credential::CredentialManager;
pub use identity::IdentityProvider;
pub use request::{ApiRequest, HttpMethod};
pub use storage::{AUTH_TOKEN_KEY, KeyValueStorage};
pub use transport::{HttpTransport, TransportError, TransportResponse};
