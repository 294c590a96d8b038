// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

use jiff::ToSpan;
use jiff::civil::{Date, DateTime};

use crate::datetime::parse_time_of_day;
use crate::{Error, Frequency, Routine};

/// A half-open display window `[from, to)` in calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub from: Date,
    pub to: Date,
}

impl Window {
    pub fn new(from: Date, to: Date) -> Self {
        Self { from, to }
    }

    /// A window is empty when `from >= to`; expansion over it yields
    /// nothing rather than erroring.
    pub fn is_empty(&self) -> bool {
        self.from >= self.to
    }

    pub fn contains(&self, date: Date) -> bool {
        self.from <= date && date < self.to
    }

    /// Every date in the window, in order.
    fn days(&self) -> impl Iterator<Item = Date> + '_ {
        self.from.series(1.day()).take_while(|d| *d < self.to)
    }
}

/// A single concrete instant at which a routine appears on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    /// Identity of the routine this instant belongs to.
    pub routine_id: String,

    /// Display label, copied from the routine.
    pub name: String,

    /// The instant itself (civil, no timezone).
    pub at: DateTime,
}

/// Caller-supplied rule for [`Frequency::Custom`] routines.
///
/// The data model carries no structured custom-recurrence fields, so custom
/// routines cannot be expanded from `days_of_week`/`time` alone; the caller
/// provides either the instants directly or a date predicate.
pub enum CustomRule<'a> {
    /// Explicit instants; anything outside the window is dropped.
    Instants(&'a [DateTime]),

    /// Dates for which the predicate holds produce an occurrence at the
    /// routine's time of day.
    Predicate(&'a dyn Fn(Date) -> bool),
}

/// Expands a routine into its occurrences within `window`, chronologically.
///
/// `custom` routines have no built-in rule and expand to nothing here; use
/// [`expand_with`] to supply one.
pub fn expand(routine: &Routine, window: Window) -> Result<Vec<Occurrence>, Error> {
    expand_with(routine, window, None)
}

/// Expands a routine into its occurrences within `window`, chronologically,
/// with an optional rule for `custom` routines.
///
/// A malformed routine (unparseable `time`, out-of-range anchor day) fails
/// fast with [`Error::Validation`] and produces no partial output. An empty
/// window yields an empty sequence.
pub fn expand_with(
    routine: &Routine,
    window: Window,
    custom: Option<CustomRule<'_>>,
) -> Result<Vec<Occurrence>, Error> {
    // Validate before looking at the window: a malformed routine is an
    // error even when there is nothing to render.
    let time = parse_time_of_day(&routine.time)?;
    let anchor = routine.monthly_anchor();
    if !(1..=31).contains(&anchor) {
        return Err(Error::validation(format!(
            "anchor day must be within 1..=31, got {anchor}"
        )));
    }

    if window.is_empty() {
        return Ok(Vec::new());
    }

    let at = |date: Date| Occurrence {
        routine_id: routine.id.clone(),
        name: routine.name.clone(),
        at: date.to_datetime(time),
    };

    let occurrences = match routine.frequency {
        Frequency::Daily => window.days().map(at).collect(),

        // An empty day set means no occurrences, not "every day".
        Frequency::Weekly => window
            .days()
            .filter(|d| {
                let day = d.weekday();
                routine.days_of_week.iter().any(|w| jiff::civil::Weekday::from(*w) == day)
            })
            .map(at)
            .collect(),

        Frequency::Monthly => {
            let mut occurrences = Vec::new();
            let mut first = window.from.first_of_month();
            while first < window.to {
                // Clamp to the month's last day so an anchor of 31 lands on
                // Feb 28/29 instead of skipping the month.
                let day = anchor.min(first.days_in_month());
                let date = first.saturating_add((i32::from(day) - 1).days());
                if window.contains(date) {
                    occurrences.push(at(date));
                }
                first = first.saturating_add(1.month());
            }
            occurrences
        }

        Frequency::Custom => match custom {
            Some(CustomRule::Instants(instants)) => {
                let mut occurrences: Vec<_> = instants
                    .iter()
                    .filter(|dt| window.contains(dt.date()))
                    .map(|dt| Occurrence {
                        routine_id: routine.id.clone(),
                        name: routine.name.clone(),
                        at: *dt,
                    })
                    .collect();
                occurrences.sort_by_key(|o| o.at);
                occurrences
            }
            Some(CustomRule::Predicate(matches)) => {
                window.days().filter(|d| matches(*d)).map(at).collect()
            }
            None => Vec::new(),
        },
    };

    Ok(occurrences)
}

/// Expands several routines over the same window and merges the results
/// chronologically. Routines producing the same instant keep the order of
/// the input list (the sort is stable).
///
/// The first malformed routine aborts the whole expansion; callers that
/// would rather skip bad records filter before calling, or expand one
/// routine at a time.
pub fn expand_all<'a, I>(routines: I, window: Window) -> Result<Vec<Occurrence>, Error>
where
    I: IntoIterator<Item = &'a Routine>,
{
    let mut merged = Vec::new();
    for routine in routines {
        merged.extend(expand(routine, window)?);
    }
    merged.sort_by_key(|o| o.at);
    Ok(merged)
}
