// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,

    /// Path of the sqlite database file; `None` runs on an in-memory
    /// database (useful for local experiments, nothing survives a restart).
    pub database: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("HEARTH_PORT", "4000"),
            database: env::var("HEARTH_DB").ok().map(PathBuf::from),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
