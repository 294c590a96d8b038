// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use axum::extract::{Json, Query, State};
use jiff::civil::Date;

use hearth_core::{Occurrence, Window};

use crate::auth::CurrentUser;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, serde::Deserialize)]
pub struct CalendarQuery {
    /// First day of the display window, `YYYY-MM-DD`.
    from: String,

    /// First day after the display window, `YYYY-MM-DD` (exclusive).
    to: String,
}

/// Occurrences of the principal's routines within the display window, in
/// chronological order, ready for calendar rendering.
pub async fn occurrences(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<Vec<Occurrence>>, ApiError> {
    let window = Window::new(parse_day(&query.from)?, parse_day(&query.to)?);
    let occurrences = state.organizer.calendar(&user.id, window).await?;
    Ok(Json(occurrences))
}

fn parse_day(s: &str) -> Result<Date, ApiError> {
    Date::strptime("%Y-%m-%d", s)
        .map_err(|_| ApiError::MalformedRequest(format!("invalid date: {s:?}")))
}
