// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::SqlitePool;

use crate::datetime::{format_date, parse_date};
use crate::{Error, Frequency, Routine, Weekday};

#[derive(Debug, Clone)]
pub(crate) struct Routines {
    pool: SqlitePool,
}

impl Routines {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_owned(&self, owner: &str) -> Result<Vec<Routine>, Error> {
        const SQL: &str = "\
SELECT id, name, frequency, time, days_of_week, assigned_to, description, reminders, anchor_day, created_by, created_at
FROM routines
WHERE created_by = ?
ORDER BY rowid;
";

        let rows: Vec<RoutineRow> = sqlx::query_as(SQL).bind(owner).fetch_all(&self.pool).await?;
        rows.into_iter().map(RoutineRow::into_routine).collect()
    }

    pub async fn insert(&self, routine: &Routine) -> Result<(), Error> {
        const SQL: &str = "\
INSERT INTO routines (id, name, frequency, time, days_of_week, assigned_to, description, reminders, anchor_day, created_by, created_at)
VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?);
";

        let row = RoutineRow::from_routine(routine)?;
        sqlx::query(SQL)
            .bind(&row.id)
            .bind(&row.name)
            .bind(&row.frequency)
            .bind(&row.time)
            .bind(&row.days_of_week)
            .bind(&row.assigned_to)
            .bind(&row.description)
            .bind(&row.reminders)
            .bind(row.anchor_day)
            .bind(&row.created_by)
            .bind(&row.created_at)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn get_owned(&self, id: &str, owner: &str) -> Result<Option<Routine>, Error> {
        const SQL: &str = "\
SELECT id, name, frequency, time, days_of_week, assigned_to, description, reminders, anchor_day, created_by, created_at
FROM routines
WHERE id = ? AND created_by = ?;
";

        let row: Option<RoutineRow> = sqlx::query_as(SQL)
            .bind(id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await?;
        row.map(RoutineRow::into_routine).transpose()
    }

    pub async fn update_owned(&self, routine: &Routine) -> Result<bool, Error> {
        const SQL: &str = "\
UPDATE routines SET
    name         = ?,
    frequency    = ?,
    time         = ?,
    days_of_week = ?,
    assigned_to  = ?,
    description  = ?,
    reminders    = ?,
    anchor_day   = ?
WHERE id = ? AND created_by = ?;
";

        let row = RoutineRow::from_routine(routine)?;
        let result = sqlx::query(SQL)
            .bind(&row.name)
            .bind(&row.frequency)
            .bind(&row.time)
            .bind(&row.days_of_week)
            .bind(&row.assigned_to)
            .bind(&row.description)
            .bind(&row.reminders)
            .bind(row.anchor_day)
            .bind(&row.id)
            .bind(&row.created_by)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_owned(&self, id: &str, owner: &str) -> Result<bool, Error> {
        const SQL: &str = "DELETE FROM routines WHERE id = ? AND created_by = ?;";

        let result = sqlx::query(SQL)
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Stable string-typed row; list-valued columns are JSON encoded.
#[derive(Debug, sqlx::FromRow)]
struct RoutineRow {
    id: String,
    name: String,
    frequency: String,
    time: String,
    days_of_week: String,
    assigned_to: String,
    description: String,
    reminders: String,
    anchor_day: Option<i8>,
    created_by: String,
    created_at: String,
}

impl RoutineRow {
    fn from_routine(routine: &Routine) -> Result<Self, Error> {
        Ok(Self {
            id: routine.id.clone(),
            name: routine.name.clone(),
            frequency: routine.frequency.to_string(),
            time: routine.time.clone(),
            days_of_week: encode_json(&routine.days_of_week)?,
            assigned_to: encode_json(&routine.assigned_to)?,
            description: routine.description.clone().unwrap_or_default(),
            reminders: encode_json(&routine.reminders)?,
            anchor_day: routine.anchor_day,
            created_by: routine.created_by.clone(),
            created_at: format_date(routine.created_at),
        })
    }

    fn into_routine(self) -> Result<Routine, Error> {
        let frequency: Frequency = self
            .frequency
            .parse()
            .map_err(|()| Error::corrupt(format!("unknown frequency: {:?}", self.frequency)))?;
        let days_of_week: Vec<Weekday> = decode_json(&self.days_of_week)?;

        Ok(Routine {
            id: self.id,
            name: self.name,
            frequency,
            time: self.time,
            days_of_week,
            assigned_to: decode_json(&self.assigned_to)?,
            description: (!self.description.is_empty()).then_some(self.description),
            reminders: decode_json(&self.reminders)?,
            anchor_day: self.anchor_day,
            created_by: self.created_by,
            created_at: parse_date(&self.created_at)?,
        })
    }
}

fn encode_json<T: serde::Serialize>(value: &T) -> Result<String, Error> {
    serde_json::to_string(value).map_err(|e| Error::corrupt(e.to_string()))
}

fn decode_json<T: serde::de::DeserializeOwned>(s: &str) -> Result<T, Error> {
    serde_json::from_str(s).map_err(|e| Error::corrupt(e.to_string()))
}
