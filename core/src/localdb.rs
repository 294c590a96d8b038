// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

mod routines;
mod todos;
mod users;

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Distinguishes in-memory databases so each `open(None)` gets its own,
/// using a shared-cache named database so every pooled connection sees the
/// same tables (a plain `:memory:` database is isolated per connection).
static IN_MEMORY_DB_COUNTER: AtomicU64 = AtomicU64::new(0);

use crate::localdb::routines::Routines;
use crate::localdb::todos::Todos;
use crate::localdb::users::Users;
use crate::store::{RoutineStore, TodoStore, UserStore};
use crate::{Error, Routine, Todo, User};

/// SQLite-backed implementation of the storage port.
#[derive(Debug, Clone)]
pub struct LocalDb {
    pool: SqlitePool,

    pub(crate) routines: Routines,
    pub(crate) todos: Todos,
    pub(crate) users: Users,
}

impl LocalDb {
    /// Opens a sqlite database connection.
    /// If `filename` is `None`, it opens an in-memory database.
    pub async fn open(filename: Option<&Path>) -> Result<Self, Error> {
        let options = if let Some(filename) = filename {
            tracing::info!(path = %filename.display(), "connecting to SQLite database");
            SqliteConnectOptions::new()
                .filename(filename)
                .create_if_missing(true)
        } else {
            tracing::info!("connecting to in-memory SQLite database");
            let db_id = IN_MEMORY_DB_COUNTER.fetch_add(1, Ordering::SeqCst);
            let db_name = format!("file:hearth_memdb_{db_id}:?mode=memory&cache=shared");
            SqliteConnectOptions::new()
                .filename(&db_name)
                .in_memory(true)
                .create_if_missing(true)
        };

        let pool = SqlitePoolOptions::new().connect_with(options).await?;

        sqlx::migrate!("src/localdb/migrations") // relative path from the crate root
            .run(&pool)
            .await
            .map_err(|e| Error::corrupt(format!("failed to run migrations: {e}")))?;

        let routines = Routines::new(pool.clone());
        let todos = Todos::new(pool.clone());
        let users = Users::new(pool.clone());
        Ok(LocalDb {
            pool,
            routines,
            todos,
            users,
        })
    }

    pub async fn close(self) {
        tracing::debug!("closing database connection");
        self.pool.close().await;
    }
}

#[async_trait]
impl RoutineStore for LocalDb {
    async fn list_owned(&self, owner: &str) -> Result<Vec<Routine>, Error> {
        self.routines.list_owned(owner).await
    }

    async fn insert(&self, routine: &Routine) -> Result<(), Error> {
        self.routines.insert(routine).await
    }

    async fn get_owned(&self, id: &str, owner: &str) -> Result<Option<Routine>, Error> {
        self.routines.get_owned(id, owner).await
    }

    async fn update_owned(&self, routine: &Routine) -> Result<bool, Error> {
        self.routines.update_owned(routine).await
    }

    async fn delete_owned(&self, id: &str, owner: &str) -> Result<bool, Error> {
        self.routines.delete_owned(id, owner).await
    }
}

#[async_trait]
impl TodoStore for LocalDb {
    async fn list_owned(&self, owner: &str) -> Result<Vec<Todo>, Error> {
        self.todos.list_owned(owner).await
    }

    async fn insert(&self, todo: &Todo) -> Result<(), Error> {
        self.todos.insert(todo).await
    }

    async fn get_owned(&self, id: &str, owner: &str) -> Result<Option<Todo>, Error> {
        self.todos.get_owned(id, owner).await
    }

    async fn update_owned(&self, todo: &Todo) -> Result<bool, Error> {
        self.todos.update_owned(todo).await
    }

    async fn delete_owned(&self, id: &str, owner: &str) -> Result<bool, Error> {
        self.todos.delete_owned(id, owner).await
    }
}

#[async_trait]
impl UserStore for LocalDb {
    async fn get(&self, id: &str) -> Result<Option<User>, Error> {
        self.users.get(id).await
    }

    async fn upsert(&self, user: &User) -> Result<(), Error> {
        self.users.upsert(user).await
    }
}
