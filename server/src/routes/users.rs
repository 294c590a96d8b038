// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use axum::extract::{Json, State};

use hearth_core::{User, UserPatch};

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn current(CurrentUser(user): CurrentUser) -> Json<User> {
    Json(user)
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(patch): Json<UserPatch>,
) -> Result<Json<User>, ApiError> {
    let updated = state.organizer.update_user(&user.id, patch).await?;
    Ok(Json(updated))
}
