// SPDX-FileCopyrightText: 2026 Hearth contributors
//
// SPDX-License-Identifier: Apache-2.0

/// A family member's identity record.
///
/// Users are not owned by anyone and are mutated only by themselves through
/// the update-self operation. Provisioning happens in the external
/// authentication layer, which upserts the record on first sign-in.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,

    pub name: String,

    pub email: String,

    /// Avatar image URL.
    #[serde(default)]
    pub avatar: String,

    /// Whether an external calendar account is linked.
    #[serde(default)]
    pub calendar_connected: bool,
}

/// Partial update for the self-update operation. Absent fields are left
/// unchanged; `id` and `email` are managed by the authentication layer.
#[derive(Debug, Default, Clone, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub avatar: Option<String>,

    #[serde(default)]
    pub calendar_connected: Option<bool>,
}

impl UserPatch {
    /// Is this patch empty, meaning no fields are set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.avatar.is_none() && self.calendar_connected.is_none()
    }

    /// Applies the patch to a user, modifying it in place.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(avatar) = &self.avatar {
            user.avatar = avatar.clone();
        }
        if let Some(connected) = self.calendar_connected {
            user.calendar_connected = connected;
        }
    }
}
