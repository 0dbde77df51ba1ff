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

use gamejolt_core::utils::Redact;
use gamejolt_core::ApiRequest;
use std::fmt::{Debug, Formatter};

/// A verified user name and game token.
///
/// Credentials can only be obtained from [`Users::auth`](crate::Users::auth),
/// so holding one means the service accepted the pair.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    name: String,
    token: String,
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("token", &Redact::from(&self.token))
            .finish()
    }
}

impl Credentials {
    pub(crate) fn new(name: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            token: token.into(),
        }
    }

    /// The user name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The user's game token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Append `username` and `user_token` to the query.
    pub(crate) fn apply(&self, req: ApiRequest) -> ApiRequest {
        req.query("username", &self.name)
            .query("user_token", &self.token)
    }
}
