// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Calendar expansion through the facade: merging, ownership scoping, and
//! the skip-malformed policy.

use hearth_core::{Frequency, Routine, RoutineStore, Weekday, Window};
use jiff::civil::date;

use crate::common::{setup_organizer, test_routine_draft, weekly_routine_draft};

#[tokio::test]
async fn merges_routines_chronologically() {
    // Arrange
    let organizer = setup_organizer().await;
    organizer
        .new_routine("u-alex", test_routine_draft("Breakfast", "08:00"))
        .await
        .unwrap();
    organizer
        .new_routine(
            "u-alex",
            weekly_routine_draft("Trash night", "20:00", &[Weekday::Mon]),
        )
        .await
        .unwrap();

    // Act: 2024-03-04 is a Monday.
    let window = Window::new(date(2024, 3, 4), date(2024, 3, 6));
    let occurrences = organizer.calendar("u-alex", window).await.unwrap();

    // Assert
    let labels: Vec<_> = occurrences
        .iter()
        .map(|o| (o.name.as_str(), o.at))
        .collect();
    assert_eq!(
        labels,
        vec![
            ("Breakfast", date(2024, 3, 4).at(8, 0, 0, 0)),
            ("Trash night", date(2024, 3, 4).at(20, 0, 0, 0)),
            ("Breakfast", date(2024, 3, 5).at(8, 0, 0, 0)),
        ]
    );
}

#[tokio::test]
async fn only_expands_the_owners_routines() {
    // Arrange
    let organizer = setup_organizer().await;
    organizer
        .new_routine("u-alex", test_routine_draft("Breakfast", "08:00"))
        .await
        .unwrap();
    organizer
        .new_routine("u-blake", test_routine_draft("Piano", "16:00"))
        .await
        .unwrap();

    // Act
    let window = Window::new(date(2024, 3, 4), date(2024, 3, 5));
    let occurrences = organizer.calendar("u-alex", window).await.unwrap();

    // Assert
    assert_eq!(occurrences.len(), 1);
    assert_eq!(occurrences[0].name, "Breakfast");
}

#[tokio::test]
async fn skips_malformed_routines_instead_of_failing() {
    // Arrange: write a routine with a malformed time straight through the
    // store, as a legacy record would look.
    let organizer = setup_organizer().await;
    organizer
        .new_routine("u-alex", test_routine_draft("Breakfast", "08:00"))
        .await
        .unwrap();
    let malformed = Routine {
        id: "r-legacy".to_string(),
        name: "Mystery".to_string(),
        frequency: Frequency::Daily,
        time: "whenever".to_string(),
        days_of_week: vec![],
        assigned_to: vec![],
        description: None,
        reminders: vec![],
        anchor_day: None,
        created_by: "u-alex".to_string(),
        created_at: date(2024, 1, 1),
    };
    RoutineStore::insert(organizer.store(), &malformed)
        .await
        .unwrap();

    // Act
    let window = Window::new(date(2024, 3, 4), date(2024, 3, 6));
    let occurrences = organizer.calendar("u-alex", window).await.unwrap();

    // Assert: the malformed routine is absent, the healthy one intact.
    assert_eq!(occurrences.len(), 2);
    assert!(occurrences.iter().all(|o| o.name == "Breakfast"));
}

#[tokio::test]
async fn empty_window_yields_empty_calendar() {
    let organizer = setup_organizer().await;
    organizer
        .new_routine("u-alex", test_routine_draft("Breakfast", "08:00"))
        .await
        .unwrap();

    let window = Window::new(date(2024, 3, 6), date(2024, 3, 4));
    assert!(organizer.calendar("u-alex", window).await.unwrap().is_empty());
}

#[tokio::test]
async fn monthly_anchor_31_clamps_in_february() {
    // Arrange: the fixture's "today" is 2024-01-15, so the anchor comes
    // from the draft's override rather than the creation date.
    let organizer = setup_organizer().await;
    let mut draft = test_routine_draft("Rent", "09:00");
    draft.frequency = Frequency::Monthly;
    draft.anchor_day = Some(31);
    organizer.new_routine("u-alex", draft).await.unwrap();

    // Act
    let window = Window::new(date(2024, 2, 1), date(2024, 3, 1));
    let occurrences = organizer.calendar("u-alex", window).await.unwrap();

    // Assert
    assert_eq!(occurrences.len(), 1);
    assert_eq!(occurrences[0].at, date(2024, 2, 29).at(9, 0, 0, 0));
}
