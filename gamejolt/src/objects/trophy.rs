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

/// Image the service shows in place of a secret trophy.
pub const SECRET_TROPHY_IMAGE: &str = "https://s.gjcdn.net/img/trophy-secret-1.jpg";

/// How hard a trophy is to achieve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TrophyDifficulty {
    /// The service sent a difficulty this client doesn't know.
    #[default]
    Undefined,
    #[allow(missing_docs)]
    Bronze,
    #[allow(missing_docs)]
    Silver,
    #[allow(missing_docs)]
    Gold,
    #[allow(missing_docs)]
    Platinum,
}

impl From<&str> for TrophyDifficulty {
    fn from(s: &str) -> Self {
        match s {
            "Bronze" => TrophyDifficulty::Bronze,
            "Silver" => TrophyDifficulty::Silver,
            "Gold" => TrophyDifficulty::Gold,
            "Platinum" => TrophyDifficulty::Platinum,
            _ => TrophyDifficulty::Undefined,
        }
    }
}

/// A trophy of the game, as seen by one user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Trophy {
    /// The id of the trophy.
    #[serde(default, deserialize_with = "de::number")]
    pub id: u32,
    /// The title of the trophy.
    #[serde(default, deserialize_with = "de::text")]
    pub title: String,
    /// The trophy description.
    #[serde(default, deserialize_with = "de::text")]
    pub description: String,
    /// The difficulty of the trophy.
    #[serde(default, deserialize_with = "de::name")]
    pub difficulty: TrophyDifficulty,
    /// The URL of the trophy's thumbnail.
    #[serde(default, deserialize_with = "de::text")]
    pub image_url: String,
    /// Whether the user achieved the trophy.
    ///
    /// The service sends when it was achieved, or `false`.
    #[serde(default, deserialize_with = "de::flag")]
    pub achieved: bool,
}

impl Trophy {
    /// Whether this is a secret trophy the user has not achieved yet.
    pub fn is_secret(&self) -> bool {
        self.description.is_empty() && self.image_url == SECRET_TROPHY_IMAGE
    }
}
