// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.

mod fixtures;

#[allow(unused_imports)]
pub use fixtures::{
    setup_organizer, test_routine_draft, test_todo_draft, test_user, weekly_routine_draft,
};
