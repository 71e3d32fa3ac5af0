//! Medika Auth — password authentication, HS256 token
//! issuance/verification, and the request-boundary authentication
//! gate.

pub mod config;
pub mod error;
pub mod password;
pub mod service;
pub mod token;

pub use config::AuthConfig;
pub use error::AuthError;
pub use service::{AuthContext, AuthService, RegisterStaffInput};
pub use token::AccessTokenClaims;
