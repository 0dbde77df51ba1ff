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

use crate::Credentials;
use gamejolt_core::{ApiRequest, Client, Outcome, Result};

/// Open, keep alive and close play sessions.
///
/// A session stays open while it's pinged at least every 120 seconds.
#[derive(Debug, Clone)]
pub struct Sessions {
    client: Client,
}

impl Sessions {
    /// Create the sessions façade over `client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Open a session for the user, closing any session still open.
    pub async fn open(&self, creds: &Credentials) -> Result<Outcome<()>> {
        self.call("/sessions/open", creds, None).await
    }

    /// Keep the session alive, reporting whether the user is active or idle.
    pub async fn ping(&self, creds: &Credentials, active: bool) -> Result<Outcome<()>> {
        let status = if active { "active" } else { "idle" };
        self.call("/sessions/ping", creds, Some(status)).await
    }

    /// Check whether the user has an open session.
    ///
    /// Without an open session the call fails with an empty message.
    pub async fn check(&self, creds: &Credentials) -> Result<Outcome<()>> {
        self.call("/sessions/check", creds, None).await
    }

    /// Close the session.
    pub async fn close(&self, creds: &Credentials) -> Result<Outcome<()>> {
        self.call("/sessions/close", creds, None).await
    }

    async fn call(
        &self,
        path: &str,
        creds: &Credentials,
        status: Option<&str>,
    ) -> Result<Outcome<()>> {
        let mut req = creds.apply(ApiRequest::get(path));
        if let Some(status) = status {
            req = req.query("status", status);
        }
        Ok(self.client.json(req).await?.discard())
    }

    callback_api! {
        /// Callback twin of [`Sessions::open`].
        pub fn open_with(creds: Credentials) -> () => |this| this.open(&creds);
        /// Callback twin of [`Sessions::ping`].
        pub fn ping_with(creds: Credentials, active: bool) -> ()
            => |this| this.ping(&creds, active);
        /// Callback twin of [`Sessions::check`].
        pub fn check_with(creds: Credentials) -> () => |this| this.check(&creds);
        /// Callback twin of [`Sessions::close`].
        pub fn close_with(creds: Credentials) -> () => |this| this.close(&creds);
    }
}
