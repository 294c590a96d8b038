// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use hearth_core::{LocalDb, Organizer};

use super::config::Config;

pub struct AppState {
    pub organizer: Organizer<LocalDb>,
    pub config: Config,
}

impl AppState {
    pub async fn new() -> Arc<Self> {
        let config = Config::load();

        let db = LocalDb::open(config.database.as_deref())
            .await
            .expect("Failed to open database");
        let organizer = Organizer::new(db);

        Arc::new(Self { organizer, config })
    }

    /// Assembles state from pre-built parts; used by tests that bring
    /// their own database and configuration.
    pub fn from_parts(organizer: Organizer<LocalDb>, config: Config) -> Arc<Self> {
        Arc::new(Self { organizer, config })
    }
}
