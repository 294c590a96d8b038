// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The storage port.
//!
//! Every operation on owned records is scoped by the owner id; there is no
//! way to reach another user's records through this interface. The
//! production implementation is [`crate::LocalDb`]; tests are free to
//! substitute their own.

use async_trait::async_trait;

use crate::{Error, Routine, Todo, User};

#[async_trait]
pub trait RoutineStore {
    /// All routines created by `owner`, in insertion order.
    async fn list_owned(&self, owner: &str) -> Result<Vec<Routine>, Error>;

    async fn insert(&self, routine: &Routine) -> Result<(), Error>;

    /// The routine with `id`, or `None` when it is absent or owned by
    /// someone else.
    async fn get_owned(&self, id: &str, owner: &str) -> Result<Option<Routine>, Error>;

    /// Writes the full record back, scoped by id and owner. Returns `false`
    /// when nothing matched.
    async fn update_owned(&self, routine: &Routine) -> Result<bool, Error>;

    /// Returns `false` when nothing matched.
    async fn delete_owned(&self, id: &str, owner: &str) -> Result<bool, Error>;
}

#[async_trait]
pub trait TodoStore {
    /// All to-dos created by `owner`, in insertion order.
    async fn list_owned(&self, owner: &str) -> Result<Vec<Todo>, Error>;

    async fn insert(&self, todo: &Todo) -> Result<(), Error>;

    /// The to-do with `id`, or `None` when it is absent or owned by
    /// someone else.
    async fn get_owned(&self, id: &str, owner: &str) -> Result<Option<Todo>, Error>;

    /// Writes the full record back, scoped by id and owner. Returns `false`
    /// when nothing matched.
    async fn update_owned(&self, todo: &Todo) -> Result<bool, Error>;

    /// Returns `false` when nothing matched.
    async fn delete_owned(&self, id: &str, owner: &str) -> Result<bool, Error>;
}

#[async_trait]
pub trait UserStore {
    async fn get(&self, id: &str) -> Result<Option<User>, Error>;

    /// Inserts or replaces the user record. Called by the authentication
    /// layer when a session is established for a new user.
    async fn upsert(&self, user: &User) -> Result<(), Error>;
}

/// The full storage surface the organizer needs.
pub trait Store: RoutineStore + TodoStore + UserStore + Send + Sync {}

impl<S> Store for S where S: RoutineStore + TodoStore + UserStore + Send + Sync {}
