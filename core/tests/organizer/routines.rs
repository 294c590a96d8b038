// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Routine CRUD through the facade, including the ownership invariant.

use hearth_core::{Error, Frequency, RoutinePatch, Weekday};
use jiff::civil::date;

use crate::common::{setup_organizer, test_routine_draft, weekly_routine_draft};

#[tokio::test]
async fn create_stamps_identity_and_ownership() {
    // Arrange
    let organizer = setup_organizer().await;

    // Act
    let routine = organizer
        .new_routine("u-alex", test_routine_draft("Morning jog", "07:00"))
        .await
        .unwrap();

    // Assert
    assert!(!routine.id.is_empty());
    assert_eq!(routine.created_by, "u-alex");
    assert_eq!(routine.created_at, date(2024, 1, 15));
}

#[tokio::test]
async fn create_rejects_invalid_drafts() {
    let organizer = setup_organizer().await;

    let unnamed = test_routine_draft("  ", "07:00");
    assert!(matches!(
        organizer.new_routine("u-alex", unnamed).await,
        Err(Error::Validation(_))
    ));

    let bad_time = test_routine_draft("Morning jog", "late-ish");
    assert!(matches!(
        organizer.new_routine("u-alex", bad_time).await,
        Err(Error::Validation(_))
    ));
}

#[tokio::test]
async fn list_returns_only_the_owners_routines() {
    // Arrange
    let organizer = setup_organizer().await;
    organizer
        .new_routine("u-alex", test_routine_draft("Morning jog", "07:00"))
        .await
        .unwrap();
    organizer
        .new_routine("u-blake", test_routine_draft("Piano practice", "16:00"))
        .await
        .unwrap();

    // Act
    let alexs = organizer.list_routines("u-alex").await.unwrap();
    let blakes = organizer.list_routines("u-blake").await.unwrap();

    // Assert
    assert_eq!(alexs.len(), 1);
    assert_eq!(alexs[0].name, "Morning jog");
    assert_eq!(blakes.len(), 1);
    assert_eq!(blakes[0].name, "Piano practice");
}

#[tokio::test]
async fn update_applies_patch_and_preserves_ownership() {
    // Arrange
    let organizer = setup_organizer().await;
    let routine = organizer
        .new_routine(
            "u-alex",
            weekly_routine_draft("School run", "08:15", &[Weekday::Mon]),
        )
        .await
        .unwrap();

    // Act
    let patch = RoutinePatch {
        days_of_week: Some(vec![Weekday::Mon, Weekday::Fri]),
        time: Some("08:00".to_string()),
        ..Default::default()
    };
    let updated = organizer
        .update_routine("u-alex", &routine.id, patch)
        .await
        .unwrap();

    // Assert
    assert_eq!(updated.days_of_week, vec![Weekday::Mon, Weekday::Fri]);
    assert_eq!(updated.time, "08:00");
    assert_eq!(updated.created_by, "u-alex");
    assert_eq!(updated.created_at, routine.created_at);
}

#[tokio::test]
async fn update_against_anothers_routine_reports_not_found() {
    // Arrange
    let organizer = setup_organizer().await;
    let routine = organizer
        .new_routine("u-alex", test_routine_draft("Morning jog", "07:00"))
        .await
        .unwrap();

    // Act
    let patch = RoutinePatch {
        name: Some("Hijacked".to_string()),
        ..Default::default()
    };
    let result = organizer.update_routine("u-blake", &routine.id, patch).await;

    // Assert: not-found, never "forbidden", so existence does not leak.
    assert!(matches!(result, Err(Error::NotFound)));
    let kept = organizer.list_routines("u-alex").await.unwrap();
    assert_eq!(kept[0].name, "Morning jog");
}

#[tokio::test]
async fn update_rejects_invalid_patches() {
    let organizer = setup_organizer().await;
    let routine = organizer
        .new_routine("u-alex", test_routine_draft("Morning jog", "07:00"))
        .await
        .unwrap();

    let patch = RoutinePatch {
        time: Some("25:99".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        organizer.update_routine("u-alex", &routine.id, patch).await,
        Err(Error::Validation(_))
    ));
}

#[tokio::test]
async fn delete_is_owner_scoped_and_irreversible() {
    // Arrange
    let organizer = setup_organizer().await;
    let routine = organizer
        .new_routine("u-alex", test_routine_draft("Morning jog", "07:00"))
        .await
        .unwrap();

    // Act & Assert
    assert!(matches!(
        organizer.delete_routine("u-blake", &routine.id).await,
        Err(Error::NotFound)
    ));
    organizer.delete_routine("u-alex", &routine.id).await.unwrap();
    assert!(matches!(
        organizer.delete_routine("u-alex", &routine.id).await,
        Err(Error::NotFound)
    ));
    assert!(organizer.list_routines("u-alex").await.unwrap().is_empty());
}

#[tokio::test]
async fn frequency_can_be_switched_via_patch() {
    // Arrange
    let organizer = setup_organizer().await;
    let routine = organizer
        .new_routine("u-alex", test_routine_draft("Allowance", "09:00"))
        .await
        .unwrap();

    // Act
    let patch = RoutinePatch {
        frequency: Some(Frequency::Monthly),
        anchor_day: Some(1),
        ..Default::default()
    };
    let updated = organizer
        .update_routine("u-alex", &routine.id, patch)
        .await
        .unwrap();

    // Assert
    assert_eq!(updated.frequency, Frequency::Monthly);
    assert_eq!(updated.monthly_anchor(), 1);
}
