//! Request-boundary authentication extractor.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use medika_auth::AuthContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Axum extractor that runs the full authentication gate:
/// bearer extraction, token verification, hospital resolution.
///
/// Handlers taking this extractor cannot run for unauthenticated
/// requests; the hospital scope they receive is the caller's own,
/// never a value from the request payload.
pub struct Authenticated(pub AuthContext);

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        let context = state.auth.authenticate(header).await?;
        Ok(Self(context))
    }
}
