// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Request authentication glue.
//!
//! Session handling itself lives in front of this server; by the time a
//! request arrives here the session layer has resolved it to a user id in
//! the `x-user-id` header. This extractor turns that id into the acting
//! principal, or rejects with 401.

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::HeaderName;
use axum::http::request::Parts;

use crate::error::ApiError;
use crate::state::AppState;

pub static USER_ID_HEADER: HeaderName = HeaderName::from_static("x-user-id");

/// The authenticated principal of the current request.
pub struct CurrentUser(pub hearth_core::User);

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let id = parts
            .headers
            .get(&USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|id| !id.is_empty())
            .ok_or(ApiError::Unauthenticated)?;

        match state.organizer.get_user(id).await {
            Ok(user) => Ok(CurrentUser(user)),
            // An id the session layer no longer knows is not a principal.
            Err(hearth_core::Error::NotFound) => Err(ApiError::Unauthenticated),
            Err(e) => Err(ApiError::Core(e)),
        }
    }
}
