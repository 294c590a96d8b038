// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

mod calendar;
mod routines;
mod todos;
mod users;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

/// All API routes. Every handler resolves the acting principal through the
/// [`crate::auth::CurrentUser`] extractor and scopes its work to it.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/routines", get(routines::list).post(routines::create))
        .route(
            "/api/routines/{id}",
            put(routines::update).delete(routines::remove),
        )
        .route("/api/todos", get(todos::list).post(todos::create))
        .route("/api/todos/{id}", put(todos::update).delete(todos::remove))
        .route("/api/users/current", get(users::current))
        .route("/api/users/update", put(users::update))
        .route("/api/calendar", get(calendar::occurrences))
        .with_state(state)
}
