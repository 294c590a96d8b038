// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::DateTime;

use crate::{Error, Priority};

/// A to-do item on the family list.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Unique identifier, assigned at creation.
    pub id: String,

    /// What needs doing.
    pub content: String,

    pub completed: bool,

    pub priority: Priority,

    /// Optional due date and time (civil, no timezone).
    #[serde(default)]
    pub due_date: Option<DateTime>,

    /// Family member the item is assigned to. Display only.
    #[serde(default)]
    pub assigned_to: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Owning user. Set once at creation, never changed; the sole
    /// authorization predicate for reads, writes, and deletes.
    pub created_by: String,
}

/// Input for creating a to-do. `id` and `created_by` are stamped by the
/// organizer, not taken from the client.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoDraft {
    pub content: String,

    #[serde(default)]
    pub completed: bool,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default)]
    pub due_date: Option<DateTime>,

    #[serde(default)]
    pub assigned_to: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}

impl TodoDraft {
    pub fn validate(&self) -> Result<(), Error> {
        if self.content.trim().is_empty() {
            return Err(Error::validation("todo content must not be empty"));
        }
        Ok(())
    }
}

/// Partial update for a to-do. Absent fields are left unchanged;
/// `created_by` is not patchable.
#[derive(Debug, Default, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch {
    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub completed: Option<bool>,

    #[serde(default)]
    pub priority: Option<Priority>,

    #[serde(default)]
    pub due_date: Option<DateTime>,

    #[serde(default)]
    pub assigned_to: Option<String>,

    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl TodoPatch {
    /// Is this patch empty, meaning no fields are set.
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
            && self.completed.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.assigned_to.is_none()
            && self.tags.is_none()
    }

    pub fn validate(&self) -> Result<(), Error> {
        if let Some(content) = &self.content
            && content.trim().is_empty()
        {
            return Err(Error::validation("todo content must not be empty"));
        }
        Ok(())
    }

    /// Applies the patch to a to-do, modifying it in place.
    pub fn apply_to(&self, todo: &mut Todo) {
        if let Some(content) = &self.content {
            todo.content = content.clone();
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
        if let Some(priority) = self.priority {
            todo.priority = priority;
        }
        if let Some(due) = self.due_date {
            todo.due_date = Some(due);
        }
        if let Some(assigned) = &self.assigned_to {
            todo.assigned_to = Some(assigned.clone());
        }
        if let Some(tags) = &self.tags {
            todo.tags = tags.clone();
        }
    }
}
