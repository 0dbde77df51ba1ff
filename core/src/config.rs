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

use crate::constants::*;
use crate::utils::Redact;
use crate::{Context, Error, Result};
use log::warn;
use std::fmt::{Debug, Formatter};
use std::time::Duration;

/// Config for the game API client.
#[derive(Clone, Default)]
pub struct Config {
    /// The id of the game.
    pub game_id: Option<u32>,
    /// The private key of the game, used to sign every request.
    pub private_key: Option<String>,
    /// Timeout applied to every request, 10 seconds by default.
    pub timeout: Option<Duration>,
    /// Versioned API endpoint, `https://api.gamejolt.com/api/game/v1_2` by default.
    pub endpoint: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("game_id", &self.game_id)
            .field("private_key", &Redact::from(&self.private_key))
            .field("timeout", &self.timeout)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl Config {
    /// Fill unset fields from environment variables.
    ///
    /// - `GAMEJOLT_GAME_ID`
    /// - `GAMEJOLT_PRIVATE_KEY`
    /// - `GAMEJOLT_TIMEOUT` in seconds
    /// - `GAMEJOLT_ENDPOINT`
    ///
    /// Values that are already set win over the environment. Unparsable
    /// values are ignored with a warning.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if self.game_id.is_none() {
            self.game_id = ctx.env_var(GAMEJOLT_GAME_ID).and_then(|v| {
                v.trim()
                    .parse()
                    .inspect_err(|e| warn!("ignore invalid {GAMEJOLT_GAME_ID} {v:?}: {e}"))
                    .ok()
            });
        }
        if self.private_key.is_none() {
            self.private_key = ctx.env_var(GAMEJOLT_PRIVATE_KEY);
        }
        if self.timeout.is_none() {
            self.timeout = ctx.env_var(GAMEJOLT_TIMEOUT).and_then(|v| {
                v.trim()
                    .parse()
                    .map(Duration::from_secs)
                    .inspect_err(|e| warn!("ignore invalid {GAMEJOLT_TIMEOUT} {v:?}: {e}"))
                    .ok()
            });
        }
        if self.endpoint.is_none() {
            self.endpoint = ctx.env_var(GAMEJOLT_ENDPOINT);
        }

        self
    }

    /// The configured game id.
    pub fn game_id(&self) -> Result<u32> {
        self.game_id
            .ok_or_else(|| Error::config_invalid("game id is not configured"))
    }

    /// The configured private key.
    pub fn private_key(&self) -> Result<&str> {
        match self.private_key.as_deref() {
            None => Err(Error::config_invalid("private key is not configured")),
            Some("") => Err(Error::config_invalid("private key must not be empty")),
            Some(key) => Ok(key),
        }
    }

    /// The configured timeout or the default one.
    pub fn timeout(&self) -> Duration {
        self.timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// The configured endpoint or the default one, without trailing `/`.
    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .unwrap_or(DEFAULT_ENDPOINT)
            .trim_end_matches('/')
    }
}
