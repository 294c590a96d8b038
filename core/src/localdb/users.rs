// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::SqlitePool;

use crate::{Error, User};

#[derive(Debug, Clone)]
pub(crate) struct Users {
    pool: SqlitePool,
}

impl Users {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get(&self, id: &str) -> Result<Option<User>, Error> {
        const SQL: &str = "\
SELECT id, name, email, avatar, calendar_connected
FROM users
WHERE id = ?;
";

        let row: Option<UserRow> = sqlx::query_as(SQL)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(UserRow::into_user))
    }

    pub async fn upsert(&self, user: &User) -> Result<(), Error> {
        const SQL: &str = "\
INSERT INTO users (id, name, email, avatar, calendar_connected)
VALUES (?, ?, ?, ?, ?)
ON CONFLICT(id) DO UPDATE SET
    name               = excluded.name,
    email              = excluded.email,
    avatar             = excluded.avatar,
    calendar_connected = excluded.calendar_connected;
";

        sqlx::query(SQL)
            .bind(&user.id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.avatar)
            .bind(user.calendar_connected)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: String,
    name: String,
    email: String,
    avatar: String,
    calendar_connected: bool,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            avatar: self.avatar,
            calendar_connected: self.calendar_connected,
        }
    }
}
