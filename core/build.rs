// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

fn main() {
    // trigger recompilation when a new migration is added
    println!("cargo:rerun-if-changed=src/localdb/migrations");
}
