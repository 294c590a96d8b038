// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

use jiff::Zoned;
use jiff::civil::Date;
use uuid::Uuid;

use crate::occurrence::{Occurrence, Window, expand};
use crate::store::{RoutineStore, Store, TodoStore, UserStore};
use crate::{
    Error, Routine, RoutineDraft, RoutinePatch, Todo, TodoDraft, TodoPatch, User, UserPatch,
};

/// Family organizer application core.
///
/// Every operation takes the acting principal explicitly; nothing is read
/// from ambient state. Records are only ever visible to, mutable by, or
/// deletable by their `created_by` user, and a record that exists under a
/// different owner answers exactly like a missing one.
#[derive(Debug, Clone)]
pub struct Organizer<S> {
    store: S,
    today: Date,
}

impl<S: Store> Organizer<S> {
    /// Creates an organizer on top of the given store.
    pub fn new(store: S) -> Self {
        Self::with_today(store, Zoned::now().date())
    }

    /// Creates an organizer with a fixed notion of "today", which stamps
    /// `created_at` on new routines (and thereby the default monthly
    /// anchor).
    pub fn with_today(store: S, today: Date) -> Self {
        Self { store, today }
    }

    /// The date new records are stamped with.
    pub fn today(&self) -> Date {
        self.today
    }

    /// Direct access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// List the routines owned by `owner`.
    pub async fn list_routines(&self, owner: &str) -> Result<Vec<Routine>, Error> {
        RoutineStore::list_owned(&self.store, owner).await
    }

    /// Create a new routine owned by `owner` from the given draft.
    pub async fn new_routine(&self, owner: &str, draft: RoutineDraft) -> Result<Routine, Error> {
        draft.validate()?;

        let routine = Routine {
            id: generate_id(),
            name: draft.name,
            frequency: draft.frequency,
            time: draft.time,
            days_of_week: draft.days_of_week,
            assigned_to: draft.assigned_to,
            description: draft.description,
            reminders: draft.reminders,
            anchor_day: draft.anchor_day,
            created_by: owner.to_string(),
            created_at: self.today,
        };
        RoutineStore::insert(&self.store, &routine).await?;

        tracing::debug!(id = %routine.id, "created routine");
        Ok(routine)
    }

    /// Apply a partial update to an owned routine.
    pub async fn update_routine(
        &self,
        owner: &str,
        id: &str,
        patch: RoutinePatch,
    ) -> Result<Routine, Error> {
        patch.validate()?;

        let mut routine = RoutineStore::get_owned(&self.store, id, owner)
            .await?
            .ok_or(Error::NotFound)?;
        patch.apply_to(&mut routine);

        if !RoutineStore::update_owned(&self.store, &routine).await? {
            return Err(Error::NotFound);
        }
        Ok(routine)
    }

    /// Delete an owned routine. Deletion is immediate and irreversible.
    pub async fn delete_routine(&self, owner: &str, id: &str) -> Result<(), Error> {
        match RoutineStore::delete_owned(&self.store, id, owner).await? {
            true => Ok(()),
            false => Err(Error::NotFound),
        }
    }

    /// List the to-dos owned by `owner`.
    pub async fn list_todos(&self, owner: &str) -> Result<Vec<Todo>, Error> {
        TodoStore::list_owned(&self.store, owner).await
    }

    /// Create a new to-do owned by `owner` from the given draft.
    pub async fn new_todo(&self, owner: &str, draft: TodoDraft) -> Result<Todo, Error> {
        draft.validate()?;

        let todo = Todo {
            id: generate_id(),
            content: draft.content,
            completed: draft.completed,
            priority: draft.priority,
            due_date: draft.due_date,
            assigned_to: draft.assigned_to,
            tags: draft.tags,
            created_by: owner.to_string(),
        };
        TodoStore::insert(&self.store, &todo).await?;

        tracing::debug!(id = %todo.id, "created todo");
        Ok(todo)
    }

    /// Apply a partial update to an owned to-do.
    pub async fn update_todo(&self, owner: &str, id: &str, patch: TodoPatch) -> Result<Todo, Error> {
        patch.validate()?;

        let mut todo = TodoStore::get_owned(&self.store, id, owner)
            .await?
            .ok_or(Error::NotFound)?;
        patch.apply_to(&mut todo);

        if !TodoStore::update_owned(&self.store, &todo).await? {
            return Err(Error::NotFound);
        }
        Ok(todo)
    }

    /// Delete an owned to-do. Deletion is immediate and irreversible.
    pub async fn delete_todo(&self, owner: &str, id: &str) -> Result<(), Error> {
        match TodoStore::delete_owned(&self.store, id, owner).await? {
            true => Ok(()),
            false => Err(Error::NotFound),
        }
    }

    /// Fetch a user record by id.
    pub async fn get_user(&self, id: &str) -> Result<User, Error> {
        UserStore::get(&self.store, id)
            .await?
            .ok_or(Error::NotFound)
    }

    /// Update-self: the only mutation users receive.
    pub async fn update_user(&self, id: &str, patch: UserPatch) -> Result<User, Error> {
        let mut user = self.get_user(id).await?;
        patch.apply_to(&mut user);
        UserStore::upsert(&self.store, &user).await?;
        Ok(user)
    }

    /// Expand all of `owner`'s routines over the window for calendar
    /// display, merged chronologically (ties keep the list order).
    ///
    /// Routines that fail validation (e.g. a legacy record with a malformed
    /// time) are skipped with a warning rather than blanking the whole
    /// calendar; store failures still abort.
    #[tracing::instrument(skip(self))]
    pub async fn calendar(&self, owner: &str, window: Window) -> Result<Vec<Occurrence>, Error> {
        let routines = self.list_routines(owner).await?;

        let mut merged = Vec::new();
        for routine in &routines {
            match expand(routine, window) {
                Ok(occurrences) => merged.extend(occurrences),
                Err(Error::Validation(reason)) => {
                    tracing::warn!(id = %routine.id, %reason, "skipping malformed routine");
                }
                Err(e) => return Err(e),
            }
        }
        merged.sort_by_key(|o| o.at);
        Ok(merged)
    }
}

fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
