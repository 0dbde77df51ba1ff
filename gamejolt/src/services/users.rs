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

use super::{join_ids, require};
use crate::{Credentials, User};
use gamejolt_core::response::field;
use gamejolt_core::{ApiRequest, Client, Error, Outcome, Result};
use serde_json::Value;

/// Authenticate and look up users.
#[derive(Debug, Clone)]
pub struct Users {
    client: Client,
}

impl Users {
    /// Create the users façade over `client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Verify a user name and game token.
    ///
    /// On success the returned [`Credentials`] can be used with every call
    /// that acts for a user.
    pub async fn auth(&self, name: &str, token: &str) -> Result<Outcome<Credentials>> {
        require(name, "username")?;
        require(token, "user token")?;

        let req = ApiRequest::get("/users/auth")
            .query("username", name)
            .query("user_token", token);
        Ok(self
            .client
            .json(req)
            .await?
            .map(|_| Credentials::new(name, token)))
    }

    /// Fetch a user by name.
    pub async fn fetch_by_name(&self, name: &str) -> Result<Outcome<User>> {
        require(name, "username")?;

        let req = ApiRequest::get("/users").query("username", name);
        self.client.json(req).await?.try_map(first_user)
    }

    /// Fetch a user by id.
    pub async fn fetch_by_id(&self, id: u32) -> Result<Outcome<User>> {
        let req = ApiRequest::get("/users").query("user_id", id.to_string());
        self.client.json(req).await?.try_map(first_user)
    }

    /// Fetch several users by id in one call.
    pub async fn fetch_by_ids(&self, ids: &[u32]) -> Result<Outcome<Vec<User>>> {
        if ids.is_empty() {
            return Err(Error::request_invalid("user ids must not be empty"));
        }

        let req = ApiRequest::get("/users").query("user_id", join_ids(ids));
        self.client
            .json(req)
            .await?
            .try_map(|v| field(&v, "users"))
    }

    callback_api! {
        /// Callback twin of [`Users::auth`].
        pub fn auth_with(name: String, token: String) -> Credentials
            => |this| this.auth(&name, &token);
        /// Callback twin of [`Users::fetch_by_name`].
        pub fn fetch_by_name_with(name: String) -> User => |this| this.fetch_by_name(&name);
        /// Callback twin of [`Users::fetch_by_id`].
        pub fn fetch_by_id_with(id: u32) -> User => |this| this.fetch_by_id(id);
        /// Callback twin of [`Users::fetch_by_ids`].
        pub fn fetch_by_ids_with(ids: Vec<u32>) -> Vec<User> => |this| this.fetch_by_ids(&ids);
    }
}

fn first_user(v: Value) -> Result<User> {
    field::<Vec<User>>(&v, "users")?
        .into_iter()
        .next()
        .ok_or_else(|| Error::protocol("no user in response"))
}
