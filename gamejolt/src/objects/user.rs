// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use super::de;
use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// The type of a user account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UserKind {
    /// The service sent a type this client doesn't know.
    #[default]
    Undefined,
    /// A regular user.
    User,
    /// A game developer.
    Developer,
    /// A site moderator.
    Moderator,
    /// A site administrator.
    Admin,
}

impl From<&str> for UserKind {
    fn from(s: &str) -> Self {
        match s {
            "User" => UserKind::User,
            "Developer" => UserKind::Developer,
            "Moderator" => UserKind::Moderator,
            "Admin" | "Administrator" => UserKind::Admin,
            _ => UserKind::Undefined,
        }
    }
}

/// Whether a user account is still active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum UserStatus {
    /// The service sent a status this client doesn't know.
    #[default]
    Undefined,
    /// Still a member of the site.
    Active,
    /// Banned from the site.
    Banned,
}

impl From<&str> for UserStatus {
    fn from(s: &str) -> Self {
        match s {
            "Active" => UserStatus::Active,
            "Banned" => UserStatus::Banned,
            _ => UserStatus::Undefined,
        }
    }
}

/// A Game Jolt user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct User {
    /// The id of the user.
    #[serde(default, deserialize_with = "de::number")]
    pub id: u32,
    /// The user's username.
    #[serde(rename = "username", default, deserialize_with = "de::text")]
    pub name: String,
    /// The type of the account.
    #[serde(rename = "type", default, deserialize_with = "de::name")]
    pub kind: UserKind,
    /// The URL of the user's avatar.
    #[serde(default, deserialize_with = "de::text")]
    pub avatar_url: String,
    /// How long ago the user signed up, e.g. `1 year ago`.
    #[serde(default, deserialize_with = "de::text")]
    pub signed_up: String,
    /// When the user signed up, in seconds since epoch.
    #[serde(default, deserialize_with = "de::number")]
    pub signed_up_timestamp: i64,
    /// How long ago the user was last logged in, `Online Now` while online.
    #[serde(default, deserialize_with = "de::text")]
    pub last_logged_in: String,
    /// When the user was last logged in, in seconds since epoch.
    #[serde(default, deserialize_with = "de::number")]
    pub last_logged_in_timestamp: i64,
    /// Whether the account is active or banned.
    #[serde(default, deserialize_with = "de::name")]
    pub status: UserStatus,
    /// The user's display name.
    #[serde(default, deserialize_with = "de::text")]
    pub developer_name: String,
    /// The user's website, empty if not specified.
    #[serde(default, deserialize_with = "de::text")]
    pub developer_website: String,
    /// The user's profile description without markup.
    #[serde(default, deserialize_with = "de::text")]
    pub developer_description: String,
}

impl Display for User {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
