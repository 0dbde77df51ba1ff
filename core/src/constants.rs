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

//! Env names and service defaults.

// Env values used to configure the client.
/// Env name of the game id.
pub const GAMEJOLT_GAME_ID: &str = "GAMEJOLT_GAME_ID";
/// Env name of the game's private key.
pub const GAMEJOLT_PRIVATE_KEY: &str = "GAMEJOLT_PRIVATE_KEY";
/// Env name of the request timeout, in seconds.
pub const GAMEJOLT_TIMEOUT: &str = "GAMEJOLT_TIMEOUT";
/// Env name of the API endpoint.
pub const GAMEJOLT_ENDPOINT: &str = "GAMEJOLT_ENDPOINT";

// Service defaults.
/// Versioned endpoint of the public service.
pub const DEFAULT_ENDPOINT: &str = "https://api.gamejolt.com/api/game/v1_2";
/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
