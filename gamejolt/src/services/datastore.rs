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

use super::require;
use crate::objects::de;
use crate::Credentials;
use gamejolt_core::response::field;
use gamejolt_core::{ApiRequest, Client, Outcome, Result};
use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// How [`Datastore::update`] combines the stored value with the given one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatastoreOperation {
    /// Numeric addition.
    Add,
    /// Numeric subtraction.
    Subtract,
    /// Numeric multiplication.
    Multiply,
    /// Numeric division.
    Divide,
    /// Append to the stored string.
    Append,
    /// Prepend to the stored string.
    Prepend,
}

impl DatastoreOperation {
    /// The wire name of the operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DatastoreOperation::Add => "add",
            DatastoreOperation::Subtract => "subtract",
            DatastoreOperation::Multiply => "multiply",
            DatastoreOperation::Divide => "divide",
            DatastoreOperation::Append => "append",
            DatastoreOperation::Prepend => "prepend",
        }
    }
}

impl Display for DatastoreOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Deserialize)]
struct Key {
    #[serde(default, deserialize_with = "de::text")]
    key: String,
}

/// Cloud key/value storage.
///
/// Every call works on the user's storage when credentials are given and on
/// the game's global storage otherwise. Values travel as raw text, so they
/// are read and written with `format=dump`.
#[derive(Debug, Clone)]
pub struct Datastore {
    client: Client,
}

impl Datastore {
    /// Create the datastore façade over `client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch the value stored under `key`.
    pub async fn fetch(&self, key: &str, creds: Option<&Credentials>) -> Result<Outcome<String>> {
        require(key, "key")?;

        let req = scoped(ApiRequest::post("/data-store"), creds).payload("key", key);
        self.client.dump(req).await
    }

    /// List the stored keys, optionally matching `pattern` (`*` is a wildcard).
    pub async fn get_keys(
        &self,
        creds: Option<&Credentials>,
        pattern: Option<&str>,
    ) -> Result<Outcome<Vec<String>>> {
        let mut req = scoped(ApiRequest::get("/data-store/get-keys"), creds);
        if let Some(pattern) = pattern {
            req = req.query("pattern", pattern);
        }

        self.client.json(req).await?.try_map(|v| {
            // A missing `keys` list means nothing is stored.
            if v.get("keys").is_none() {
                return Ok(Vec::new());
            }
            Ok(field::<Vec<Key>>(&v, "keys")?
                .into_iter()
                .map(|k| k.key)
                .collect())
        })
    }

    /// Store `data` under `key`.
    pub async fn set(
        &self,
        key: &str,
        data: &str,
        creds: Option<&Credentials>,
    ) -> Result<Outcome<()>> {
        require(key, "key")?;

        let req = scoped(ApiRequest::post("/data-store/set"), creds)
            .payload("key", key)
            .payload("data", data);
        Ok(self.client.dump(req).await?.discard())
    }

    /// Remove `key`.
    pub async fn remove(&self, key: &str, creds: Option<&Credentials>) -> Result<Outcome<()>> {
        require(key, "key")?;

        let req = scoped(ApiRequest::post("/data-store/remove"), creds).payload("key", key);
        Ok(self.client.dump(req).await?.discard())
    }

    /// Combine the value under `key` with `value` and return the new value.
    pub async fn update(
        &self,
        key: &str,
        value: &str,
        operation: DatastoreOperation,
        creds: Option<&Credentials>,
    ) -> Result<Outcome<String>> {
        require(key, "key")?;

        let req = ApiRequest::post("/data-store/update").query("operation", operation.as_str());
        let req = scoped(req, creds)
            .payload("key", key)
            .payload("value", value);
        self.client.dump(req).await
    }

    callback_api! {
        /// Callback twin of [`Datastore::fetch`].
        pub fn fetch_with(key: String, creds: Option<Credentials>) -> String
            => |this| this.fetch(&key, creds.as_ref());
        /// Callback twin of [`Datastore::get_keys`].
        pub fn get_keys_with(creds: Option<Credentials>, pattern: Option<String>) -> Vec<String>
            => |this| this.get_keys(creds.as_ref(), pattern.as_deref());
        /// Callback twin of [`Datastore::set`].
        pub fn set_with(key: String, data: String, creds: Option<Credentials>) -> ()
            => |this| this.set(&key, &data, creds.as_ref());
        /// Callback twin of [`Datastore::remove`].
        pub fn remove_with(key: String, creds: Option<Credentials>) -> ()
            => |this| this.remove(&key, creds.as_ref());
        /// Callback twin of [`Datastore::update`].
        pub fn update_with(
            key: String,
            value: String,
            operation: DatastoreOperation,
            creds: Option<Credentials>,
        ) -> String => |this| this.update(&key, &value, operation, creds.as_ref());
    }
}

fn scoped(req: ApiRequest, creds: Option<&Credentials>) -> ApiRequest {
    match creds {
        Some(creds) => creds.apply(req),
        None => req,
    }
}
