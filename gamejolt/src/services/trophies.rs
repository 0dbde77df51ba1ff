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

use super::join_ids;
use crate::{Credentials, Trophy};
use gamejolt_core::response::field;
use gamejolt_core::{ApiRequest, Client, Outcome, Result};

/// Read and award trophies.
#[derive(Debug, Clone)]
pub struct Trophies {
    client: Client,
}

impl Trophies {
    /// Create the trophies façade over `client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch the game's trophies as seen by the user.
    ///
    /// - `achieved` restricts the result to trophies the user did or did not
    ///   achieve yet, all trophies when unset.
    /// - `ids` restricts the result to the given trophies, all trophies when
    ///   empty.
    pub async fn fetch(
        &self,
        creds: &Credentials,
        achieved: Option<bool>,
        ids: &[u32],
    ) -> Result<Outcome<Vec<Trophy>>> {
        let mut req = creds.apply(ApiRequest::get("/trophies"));
        if let Some(achieved) = achieved {
            req = req.query("achieved", achieved.to_string());
        }
        if !ids.is_empty() {
            req = req.query("trophy_id", join_ids(ids));
        }

        self.client
            .json(req)
            .await?
            .try_map(|v| field(&v, "trophies"))
    }

    /// Award a trophy to the user.
    pub async fn set_achieved(&self, creds: &Credentials, id: u32) -> Result<Outcome<()>> {
        self.call("/trophies/add-achieved", creds, id).await
    }

    /// Take a trophy back from the user.
    pub async fn remove_achieved(&self, creds: &Credentials, id: u32) -> Result<Outcome<()>> {
        self.call("/trophies/remove-achieved", creds, id).await
    }

    async fn call(&self, path: &str, creds: &Credentials, id: u32) -> Result<Outcome<()>> {
        let req = creds
            .apply(ApiRequest::get(path))
            .query("trophy_id", id.to_string());
        Ok(self.client.json(req).await?.discard())
    }

    callback_api! {
        /// Callback twin of [`Trophies::fetch`].
        pub fn fetch_with(creds: Credentials, achieved: Option<bool>, ids: Vec<u32>) -> Vec<Trophy>
            => |this| this.fetch(&creds, achieved, &ids);
        /// Callback twin of [`Trophies::set_achieved`].
        pub fn set_achieved_with(creds: Credentials, id: u32) -> ()
            => |this| this.set_achieved(&creds, id);
        /// Callback twin of [`Trophies::remove_achieved`].
        pub fn remove_achieved_with(creds: Credentials, id: u32) -> ()
            => |this| this.remove_achieved(&creds, id);
    }
}
