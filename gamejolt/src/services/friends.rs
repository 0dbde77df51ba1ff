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

use crate::objects::de;
use crate::Credentials;
use gamejolt_core::response::field;
use gamejolt_core::{ApiRequest, Client, Outcome, Result};
use serde::Deserialize;

#[derive(Deserialize)]
struct Friend {
    #[serde(default, deserialize_with = "de::number")]
    friend_id: u32,
}

/// Look up a user's friends.
#[derive(Debug, Clone)]
pub struct Friends {
    client: Client,
}

impl Friends {
    /// Create the friends façade over `client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch the ids of the user's friends.
    pub async fn fetch(&self, creds: &Credentials) -> Result<Outcome<Vec<u32>>> {
        let req = creds.apply(ApiRequest::get("/friends"));
        self.client.json(req).await?.try_map(|v| {
            Ok(field::<Vec<Friend>>(&v, "friends")?
                .into_iter()
                .map(|f| f.friend_id)
                .collect())
        })
    }

    callback_api! {
        /// Callback twin of [`Friends::fetch`].
        pub fn fetch_with(creds: Credentials) -> Vec<u32> => |this| this.fetch(&creds);
    }
}
