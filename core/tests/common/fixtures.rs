// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use hearth_core::{
    Frequency, LocalDb, Organizer, RoutineDraft, TodoDraft, User, UserStore, Weekday,
};
use jiff::civil::date;

/// Creates an organizer over an in-memory database with a fixed "today"
/// (2024-01-15) and two seeded family members, `u-alex` and `u-blake`.
pub async fn setup_organizer() -> Organizer<LocalDb> {
    let db = LocalDb::open(None)
        .await
        .expect("Failed to create test database");

    let organizer = Organizer::with_today(db, date(2024, 1, 15));
    for user in [test_user("u-alex", "Alex"), test_user("u-blake", "Blake")] {
        organizer
            .store()
            .upsert(&user)
            .await
            .expect("Failed to seed user");
    }
    organizer
}

pub fn test_user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        avatar: String::new(),
        calendar_connected: false,
    }
}

/// A daily routine draft with the given name and time.
pub fn test_routine_draft(name: &str, time: &str) -> RoutineDraft {
    RoutineDraft {
        name: name.to_string(),
        frequency: Frequency::Daily,
        time: time.to_string(),
        days_of_week: vec![],
        assigned_to: vec![],
        description: None,
        reminders: vec![],
        anchor_day: None,
    }
}

/// A weekly routine draft on the given days.
pub fn weekly_routine_draft(name: &str, time: &str, days: &[Weekday]) -> RoutineDraft {
    RoutineDraft {
        frequency: Frequency::Weekly,
        days_of_week: days.to_vec(),
        ..test_routine_draft(name, time)
    }
}

pub fn test_todo_draft(content: &str) -> TodoDraft {
    TodoDraft {
        content: content.to_string(),
        completed: false,
        priority: Default::default(),
        due_date: None,
        assigned_to: None,
        tags: vec![],
    }
}
