// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error(transparent)]
    Core(#[from] hearth_core::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        use hearth_core::Error as Core;

        let (status, message) = match &self {
            ApiError::Unauthenticated => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiError::MalformedRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Core(Core::NotFound) => (StatusCode::NOT_FOUND, "Not found".to_string()),
            ApiError::Core(Core::Validation(_)) => (StatusCode::BAD_REQUEST, self.to_string()),
            // Store internals never reach the client.
            ApiError::Core(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
