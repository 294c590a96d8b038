// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Hearth - a family organizer: shared to-dos, routines, and a calendar.

#[tokio::main]
async fn main() {
    hearth_server::start_server().await;
}
