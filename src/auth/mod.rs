pub mod http;
pub mod service;

pub use http::HttpAuthService;
pub use service::{AuthError, AuthService};
