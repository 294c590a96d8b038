// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use serde_json::{Value, json};

use hearth_core::{Todo, TodoDraft, TodoPatch};

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.organizer.list_todos(&user.id).await?;
    Ok(Json(todos))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Json(draft): Json<TodoDraft>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = state.organizer.new_todo(&user.id, draft).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    Json(patch): Json<TodoPatch>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.organizer.update_todo(&user.id, &id, patch).await?;
    Ok(Json(todo))
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.organizer.delete_todo(&user.id, &id).await?;
    Ok(Json(json!({ "message": "Todo deleted successfully" })))
}
