// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

use sqlx::SqlitePool;

use crate::datetime::{format_datetime, parse_datetime};
use crate::{Error, Priority, Todo};

#[derive(Debug, Clone)]
pub(crate) struct Todos {
    pool: SqlitePool,
}

impl Todos {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_owned(&self, owner: &str) -> Result<Vec<Todo>, Error> {
        const SQL: &str = "\
SELECT id, content, completed, priority, due_date, assigned_to, tags, created_by
FROM todos
WHERE created_by = ?
ORDER BY rowid;
";

        let rows: Vec<TodoRow> = sqlx::query_as(SQL).bind(owner).fetch_all(&self.pool).await?;
        rows.into_iter().map(TodoRow::into_todo).collect()
    }

    pub async fn insert(&self, todo: &Todo) -> Result<(), Error> {
        const SQL: &str = "\
INSERT INTO todos (id, content, completed, priority, due_date, assigned_to, tags, created_by)
VALUES (?, ?, ?, ?, ?, ?, ?, ?);
";

        let row = TodoRow::from_todo(todo)?;
        sqlx::query(SQL)
            .bind(&row.id)
            .bind(&row.content)
            .bind(row.completed)
            .bind(&row.priority)
            .bind(&row.due_date)
            .bind(&row.assigned_to)
            .bind(&row.tags)
            .bind(&row.created_by)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn get_owned(&self, id: &str, owner: &str) -> Result<Option<Todo>, Error> {
        const SQL: &str = "\
SELECT id, content, completed, priority, due_date, assigned_to, tags, created_by
FROM todos
WHERE id = ? AND created_by = ?;
";

        let row: Option<TodoRow> = sqlx::query_as(SQL)
            .bind(id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await?;
        row.map(TodoRow::into_todo).transpose()
    }

    pub async fn update_owned(&self, todo: &Todo) -> Result<bool, Error> {
        const SQL: &str = "\
UPDATE todos SET
    content     = ?,
    completed   = ?,
    priority    = ?,
    due_date    = ?,
    assigned_to = ?,
    tags        = ?
WHERE id = ? AND created_by = ?;
";

        let row = TodoRow::from_todo(todo)?;
        let result = sqlx::query(SQL)
            .bind(&row.content)
            .bind(row.completed)
            .bind(&row.priority)
            .bind(&row.due_date)
            .bind(&row.assigned_to)
            .bind(&row.tags)
            .bind(&row.id)
            .bind(&row.created_by)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete_owned(&self, id: &str, owner: &str) -> Result<bool, Error> {
        const SQL: &str = "DELETE FROM todos WHERE id = ? AND created_by = ?;";

        let result = sqlx::query(SQL)
            .bind(id)
            .bind(owner)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Stable string-typed row; empty strings stand in for absent optionals,
/// `tags` is JSON encoded.
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
    id: String,
    content: String,
    completed: bool,
    priority: String,
    due_date: String,
    assigned_to: String,
    tags: String,
    created_by: String,
}

impl TodoRow {
    fn from_todo(todo: &Todo) -> Result<Self, Error> {
        Ok(Self {
            id: todo.id.clone(),
            content: todo.content.clone(),
            completed: todo.completed,
            priority: todo.priority.to_string(),
            due_date: todo.due_date.map(format_datetime).unwrap_or_default(),
            assigned_to: todo.assigned_to.clone().unwrap_or_default(),
            tags: serde_json::to_string(&todo.tags).map_err(|e| Error::corrupt(e.to_string()))?,
            created_by: todo.created_by.clone(),
        })
    }

    fn into_todo(self) -> Result<Todo, Error> {
        let priority: Priority = self
            .priority
            .parse()
            .map_err(|()| Error::corrupt(format!("unknown priority: {:?}", self.priority)))?;
        let due_date = (!self.due_date.is_empty())
            .then(|| parse_datetime(&self.due_date))
            .transpose()?;

        Ok(Todo {
            id: self.id,
            content: self.content,
            completed: self.completed,
            priority,
            due_date,
            assigned_to: (!self.assigned_to.is_empty()).then_some(self.assigned_to),
            tags: serde_json::from_str(&self.tags).map_err(|e| Error::corrupt(e.to_string()))?,
            created_by: self.created_by,
        })
    }
}
