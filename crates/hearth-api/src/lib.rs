pub mod auth;
pub mod client;
pub mod http_transport;

pub use auth::AuthService;
pub use client::ApiClient;
pub use http_transport::ReqwestTransport;
