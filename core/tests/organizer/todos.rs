// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

//! To-do CRUD through the facade, including the ownership invariant.

use hearth_core::{Error, Priority, TodoPatch};
use jiff::civil::date;

use crate::common::{setup_organizer, test_todo_draft};

#[tokio::test]
async fn create_stamps_identity_and_defaults() {
    // Arrange
    let organizer = setup_organizer().await;

    // Act
    let todo = organizer
        .new_todo("u-alex", test_todo_draft("Buy groceries"))
        .await
        .unwrap();

    // Assert
    assert!(!todo.id.is_empty());
    assert_eq!(todo.created_by, "u-alex");
    assert_eq!(todo.priority, Priority::Medium);
    assert!(!todo.completed);
}

#[tokio::test]
async fn create_rejects_empty_content() {
    let organizer = setup_organizer().await;
    assert!(matches!(
        organizer.new_todo("u-alex", test_todo_draft("   ")).await,
        Err(Error::Validation(_))
    ));
}

#[tokio::test]
async fn list_returns_only_the_owners_todos() {
    // Arrange
    let organizer = setup_organizer().await;
    organizer
        .new_todo("u-alex", test_todo_draft("Buy groceries"))
        .await
        .unwrap();
    organizer
        .new_todo("u-blake", test_todo_draft("Homework"))
        .await
        .unwrap();

    // Act
    let alexs = organizer.list_todos("u-alex").await.unwrap();

    // Assert
    assert_eq!(alexs.len(), 1);
    assert_eq!(alexs[0].content, "Buy groceries");
}

#[tokio::test]
async fn update_completes_and_schedules() {
    // Arrange
    let organizer = setup_organizer().await;
    let todo = organizer
        .new_todo("u-alex", test_todo_draft("Buy groceries"))
        .await
        .unwrap();

    // Act
    let patch = TodoPatch {
        completed: Some(true),
        due_date: Some(date(2024, 3, 5).at(17, 0, 0, 0)),
        priority: Some(Priority::High),
        ..Default::default()
    };
    let updated = organizer.update_todo("u-alex", &todo.id, patch).await.unwrap();

    // Assert
    assert!(updated.completed);
    assert_eq!(updated.due_date, Some(date(2024, 3, 5).at(17, 0, 0, 0)));
    assert_eq!(updated.priority, Priority::High);
    assert_eq!(updated.content, "Buy groceries");
}

#[tokio::test]
async fn update_against_anothers_todo_reports_not_found() {
    // Arrange
    let organizer = setup_organizer().await;
    let todo = organizer
        .new_todo("u-alex", test_todo_draft("Buy groceries"))
        .await
        .unwrap();

    // Act
    let patch = TodoPatch {
        completed: Some(true),
        ..Default::default()
    };
    let result = organizer.update_todo("u-blake", &todo.id, patch).await;

    // Assert
    assert!(matches!(result, Err(Error::NotFound)));
}

#[tokio::test]
async fn delete_is_owner_scoped() {
    // Arrange
    let organizer = setup_organizer().await;
    let todo = organizer
        .new_todo("u-alex", test_todo_draft("Buy groceries"))
        .await
        .unwrap();

    // Act & Assert
    assert!(matches!(
        organizer.delete_todo("u-blake", &todo.id).await,
        Err(Error::NotFound)
    ));
    organizer.delete_todo("u-alex", &todo.id).await.unwrap();
    assert!(organizer.list_todos("u-alex").await.unwrap().is_empty());
}
