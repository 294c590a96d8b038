// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Errors produced by the organizer core.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    /// The record does not exist under the caller's ownership. Covers both
    /// "absent" and "owned by someone else" so callers cannot probe for
    /// records they do not own.
    #[error("record not found")]
    NotFound,

    /// The input is malformed, e.g. a routine without a parseable time.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Opaque failure of the underlying store. The message stays generic;
    /// the source is attached for logs only.
    #[error("storage failure")]
    Store(#[from] sqlx::Error),

    /// A stored value could not be decoded back into a domain type.
    #[error("corrupt record: {0}")]
    Corrupt(String),
}

impl Error {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    pub(crate) fn corrupt(msg: impl Into<String>) -> Self {
        Error::Corrupt(msg.into())
    }
}
