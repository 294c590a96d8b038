// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::{Date, DateTime, Time};

use crate::Error;

/// NOTE: Used for storing in the database, so it should be stable across different runs.
pub(crate) const STABLE_FORMAT_DATEONLY: &str = "%Y-%m-%d";
pub(crate) const STABLE_FORMAT_DATETIME: &str = "%Y-%m-%dT%H:%M:%S";

/// Parses a time-of-day as sent by clients, `"HH:MM"` with an optional
/// seconds component.
///
/// This is the single gate for routine `time` fields: malformed input is a
/// validation error, never a guessed default.
pub fn parse_time_of_day(s: &str) -> Result<Time, Error> {
    Time::strptime("%H:%M", s)
        .or_else(|_| Time::strptime("%H:%M:%S", s))
        .map_err(|_| Error::validation(format!("invalid time of day: {s:?}")))
}

pub(crate) fn format_date(date: Date) -> String {
    date.strftime(STABLE_FORMAT_DATEONLY).to_string()
}

pub(crate) fn parse_date(s: &str) -> Result<Date, Error> {
    Date::strptime(STABLE_FORMAT_DATEONLY, s)
        .map_err(|_| Error::corrupt(format!("invalid date: {s:?}")))
}

pub(crate) fn format_datetime(dt: DateTime) -> String {
    dt.strftime(STABLE_FORMAT_DATETIME).to_string()
}

pub(crate) fn parse_datetime(s: &str) -> Result<DateTime, Error> {
    DateTime::strptime(STABLE_FORMAT_DATETIME, s)
        .map_err(|_| Error::corrupt(format!("invalid datetime: {s:?}")))
}
