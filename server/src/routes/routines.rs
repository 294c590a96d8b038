// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};

use hearth_core::{Routine, RoutineDraft, RoutinePatch};

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<Routine>>, ApiError> {
    let routines = state.organizer.list_routines(&user.id).await?;
    Ok(Json(routines))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(draft): Json<RoutineDraft>,
) -> Result<(StatusCode, Json<Routine>), ApiError> {
    let routine = state.organizer.new_routine(&user.id, draft).await?;
    Ok((StatusCode::CREATED, Json(routine)))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    Json(patch): Json<RoutinePatch>,
) -> Result<Json<Routine>, ApiError> {
    let routine = state.organizer.update_routine(&user.id, &id, patch).await?;
    Ok(Json(routine))
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.organizer.delete_routine(&user.id, &id).await?;
    Ok(Json(json!({ "message": "Routine deleted successfully" })))
}
