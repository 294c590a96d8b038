// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Display;
use std::str::FromStr;

use jiff::civil::Date;

use crate::datetime::parse_time_of_day;
use crate::{Error, Weekday};

/// How often a routine repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Every calendar day.
    Daily,
    /// On the weekdays listed in `days_of_week`.
    Weekly,
    /// Once a month, on the anchor day.
    Monthly,
    /// No built-in rule; occurrences are supplied by the caller.
    Custom,
}

const FREQ_DAILY: &str = "daily";
const FREQ_WEEKLY: &str = "weekly";
const FREQ_MONTHLY: &str = "monthly";
const FREQ_CUSTOM: &str = "custom";

impl AsRef<str> for Frequency {
    fn as_ref(&self) -> &str {
        match self {
            Frequency::Daily => FREQ_DAILY,
            Frequency::Weekly => FREQ_WEEKLY,
            Frequency::Monthly => FREQ_MONTHLY,
            Frequency::Custom => FREQ_CUSTOM,
        }
    }
}

impl Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for Frequency {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            FREQ_DAILY => Ok(Frequency::Daily),
            FREQ_WEEKLY => Ok(Frequency::Weekly),
            FREQ_MONTHLY => Ok(Frequency::Monthly),
            FREQ_CUSTOM => Ok(Frequency::Custom),
            _ => Err(()),
        }
    }
}

/// A recurring family routine.
///
/// `time` is kept as the raw `"HH:MM"` string the client sent; it is parsed
/// (and rejected if malformed) wherever occurrences are derived from it.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    /// Unique identifier, assigned at creation.
    pub id: String,

    /// Display label.
    pub name: String,

    /// Recurrence kind.
    pub frequency: Frequency,

    /// Time of day, `"HH:MM"`.
    pub time: String,

    /// Weekdays the routine falls on; meaningful only for [`Frequency::Weekly`].
    #[serde(default)]
    pub days_of_week: Vec<Weekday>,

    /// Family members the routine is assigned to. Display only.
    #[serde(default)]
    pub assigned_to: Vec<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub reminders: Vec<String>,

    /// Day-of-month override for monthly recurrence. When absent, the
    /// day-of-month of `created_at` is the anchor.
    #[serde(default)]
    pub anchor_day: Option<i8>,

    /// Owning user. Set once at creation, never changed; the sole
    /// authorization predicate for reads, writes, and deletes.
    pub created_by: String,

    /// Creation date; source of the default monthly anchor.
    pub created_at: Date,
}

impl Routine {
    /// The day-of-month used for monthly recurrence.
    pub fn monthly_anchor(&self) -> i8 {
        self.anchor_day.unwrap_or_else(|| self.created_at.day())
    }
}

/// Input for creating a routine. `id`, `created_by`, and `created_at` are
/// stamped by the organizer, not taken from the client.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineDraft {
    pub name: String,
    pub frequency: Frequency,
    pub time: String,

    #[serde(default)]
    pub days_of_week: Vec<Weekday>,

    #[serde(default)]
    pub assigned_to: Vec<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub reminders: Vec<String>,

    #[serde(default)]
    pub anchor_day: Option<i8>,
}

impl RoutineDraft {
    /// Rejects drafts that would produce an unusable routine.
    pub fn validate(&self) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(Error::validation("routine name must not be empty"));
        }
        parse_time_of_day(&self.time)?;
        validate_anchor_day(self.anchor_day)
    }
}

/// Partial update for a routine. Absent fields are left unchanged;
/// `created_by` and `created_at` are not patchable.
#[derive(Debug, Default, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutinePatch {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub frequency: Option<Frequency>,

    #[serde(default)]
    pub time: Option<String>,

    #[serde(default)]
    pub days_of_week: Option<Vec<Weekday>>,

    #[serde(default)]
    pub assigned_to: Option<Vec<String>>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub reminders: Option<Vec<String>>,

    #[serde(default)]
    pub anchor_day: Option<i8>,
}

impl RoutinePatch {
    /// Is this patch empty, meaning no fields are set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.frequency.is_none()
            && self.time.is_none()
            && self.days_of_week.is_none()
            && self.assigned_to.is_none()
            && self.description.is_none()
            && self.reminders.is_none()
            && self.anchor_day.is_none()
    }

    /// Rejects patches that would leave the routine unusable.
    pub fn validate(&self) -> Result<(), Error> {
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err(Error::validation("routine name must not be empty"));
        }
        if let Some(time) = &self.time {
            parse_time_of_day(time)?;
        }
        validate_anchor_day(self.anchor_day)
    }

    /// Applies the patch to a routine, modifying it in place.
    pub fn apply_to(&self, routine: &mut Routine) {
        if let Some(name) = &self.name {
            routine.name = name.clone();
        }
        if let Some(frequency) = self.frequency {
            routine.frequency = frequency;
        }
        if let Some(time) = &self.time {
            routine.time = time.clone();
        }
        if let Some(days) = &self.days_of_week {
            routine.days_of_week = days.clone();
        }
        if let Some(assigned) = &self.assigned_to {
            routine.assigned_to = assigned.clone();
        }
        if let Some(description) = &self.description {
            routine.description = Some(description.clone());
        }
        if let Some(reminders) = &self.reminders {
            routine.reminders = reminders.clone();
        }
        if let Some(anchor) = self.anchor_day {
            routine.anchor_day = Some(anchor);
        }
    }
}

fn validate_anchor_day(anchor: Option<i8>) -> Result<(), Error> {
    match anchor {
        Some(day) if !(1..=31).contains(&day) => Err(Error::validation(format!(
            "anchor day must be within 1..=31, got {day}"
        ))),
        _ => Ok(()),
    }
}
