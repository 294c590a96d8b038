// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Hearth core: the family organizer's domain model, storage port, and the
//! occurrence expander that turns recurring routines into calendar
//! instants.

mod datetime;
mod error;
mod localdb;
mod occurrence;
mod organizer;
mod routine;
mod store;
mod todo;
mod types;
mod user;

pub use crate::datetime::parse_time_of_day;
pub use crate::error::Error;
pub use crate::localdb::LocalDb;
pub use crate::occurrence::{CustomRule, Occurrence, Window, expand, expand_all, expand_with};
pub use crate::organizer::Organizer;
pub use crate::routine::{Frequency, Routine, RoutineDraft, RoutinePatch};
pub use crate::store::{RoutineStore, Store, TodoStore, UserStore};
pub use crate::todo::{Todo, TodoDraft, TodoPatch};
pub use crate::types::{Priority, Weekday};
pub use crate::user::{User, UserPatch};
