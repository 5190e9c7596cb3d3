//! Axum extractor for admin attribution

use crate::api::error::ApiError;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// The administrator identity attached to mutating operations.
///
/// Identity itself is an external collaborator; this subsystem only
/// requires the opaque `X-Admin-User` value for audit attribution and
/// rejects mutations that arrive without it.
pub struct AdminUser(pub String);

impl<S: Send + Sync> FromRequestParts<S> for AdminUser {
    type Rejection = ApiError;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let header = parts
            .headers
            .get("X-Admin-User")
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        async move {
            header
                .map(AdminUser)
                .ok_or_else(|| ApiError::bad_request("X-Admin-User header required"))
        }
    }
}
