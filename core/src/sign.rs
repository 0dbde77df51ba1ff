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

use crate::hash;
use crate::utils::Redact;
use crate::{ApiRequest, Error, Result};
use log::debug;
use std::fmt::{Debug, Formatter};

/// RequestSigner signs API requests with the game's private key.
///
/// The signature is `MD5(string_to_sign || private_key)` and is appended as the
/// last query parameter: `...&signature=<32 lowercase hex chars>`.
#[derive(Clone)]
pub struct RequestSigner {
    game_id: u32,
    private_key: String,
}

impl Debug for RequestSigner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("game_id", &self.game_id)
            .field("private_key", &Redact::from(&self.private_key))
            .finish()
    }
}

impl RequestSigner {
    /// Create a new signer for a game.
    ///
    /// The private key must not be empty.
    pub fn new(game_id: u32, private_key: impl Into<String>) -> Result<Self> {
        let private_key = private_key.into();
        if private_key.is_empty() {
            return Err(Error::config_invalid("private key must not be empty"));
        }

        Ok(Self {
            game_id,
            private_key,
        })
    }

    /// The game this signer signs for.
    pub fn game_id(&self) -> u32 {
        self.game_id
    }

    /// Compute the signature for `req` sent to `endpoint`.
    pub fn signature(&self, endpoint: &str, req: &ApiRequest) -> String {
        let url = req.url(endpoint, self.game_id);
        hash::sign(&req.string_to_sign(&url), &self.private_key)
    }

    /// Build the signed URL for `req` sent to `endpoint`.
    pub fn signed_url(&self, endpoint: &str, req: &ApiRequest) -> String {
        let mut url = req.url(endpoint, self.game_id);
        let signature = hash::sign(&req.string_to_sign(&url), &self.private_key);
        debug!("signed {} {} for game {}", req.method, req.path, self.game_id);

        url.push_str("&signature=");
        url.push_str(&signature);
        url
    }
}
