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

/// A single scoreboard entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Score {
    /// The numerical sort value, e.g. `100`.
    #[serde(rename = "sort", default, deserialize_with = "de::number")]
    pub value: i64,
    /// The displayed score, e.g. `100 Coins`.
    #[serde(rename = "score", default, deserialize_with = "de::text")]
    pub text: String,
    /// Extra data stored with the score, e.g. `Level 2`.
    #[serde(rename = "extra_data", default, deserialize_with = "de::text")]
    pub extra: String,
    /// Display name of the user for user scores.
    #[serde(rename = "user", default, deserialize_with = "de::text")]
    pub user_name: String,
    /// Id of the user for user scores.
    #[serde(default, deserialize_with = "de::number")]
    pub user_id: u32,
    /// Submitted name for guest scores.
    #[serde(rename = "guest", default, deserialize_with = "de::text")]
    pub guest_name: String,
    /// When the score was stored, e.g. `1 week ago`.
    #[serde(default, deserialize_with = "de::text")]
    pub stored: String,
    /// When the score was stored, in seconds since epoch.
    #[serde(default, deserialize_with = "de::number")]
    pub stored_timestamp: i64,
}

impl Score {
    /// Whether a guest achieved this score.
    pub fn is_guest_score(&self) -> bool {
        !self.guest_name.is_empty()
    }

    /// The guest name for guest scores, the user name otherwise.
    pub fn name(&self) -> &str {
        if self.is_guest_score() {
            &self.guest_name
        } else {
            &self.user_name
        }
    }
}
