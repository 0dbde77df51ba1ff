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

/// A score table of the game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Table {
    /// The id of the table.
    #[serde(default, deserialize_with = "de::number")]
    pub id: u32,
    /// The developer-defined name.
    #[serde(default, deserialize_with = "de::text")]
    pub name: String,
    /// The developer-defined description.
    #[serde(default, deserialize_with = "de::text")]
    pub description: String,
    /// Whether scores go to this table by default.
    #[serde(default, deserialize_with = "de::flag")]
    pub primary: bool,
}
