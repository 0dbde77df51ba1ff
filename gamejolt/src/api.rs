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

use crate::{Datastore, Friends, Scores, Sessions, Time, Trophies, Users};
use gamejolt_core::Client;
#[cfg(feature = "default-context")]
use gamejolt_core::{Config, Result};

/// Entry point to every resource of the game API.
///
/// All façades share the one [`Client`], so they can be created freely.
///
/// ```no_run
/// # async fn example() -> gamejolt::Result<()> {
/// use gamejolt::{GameJolt, Outcome};
///
/// let api = GameJolt::from_env()?;
/// if let Outcome::Success(creds) = api.users().auth("cros", "token").await? {
///     api.sessions().open(&creds).await?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GameJolt {
    client: Client,
}

impl GameJolt {
    /// Create the API over `client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create the API from `GAMEJOLT_*` environment variables with the
    /// default context.
    #[cfg(feature = "default-context")]
    pub fn from_env() -> Result<Self> {
        let ctx = crate::default_context();
        let config = Config::default().from_env(&ctx);
        Ok(Self::new(Client::from_config(ctx, &config)?))
    }

    /// The underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Authenticate and look up users.
    pub fn users(&self) -> Users {
        Users::new(self.client.clone())
    }

    /// Manage play sessions.
    pub fn sessions(&self) -> Sessions {
        Sessions::new(self.client.clone())
    }

    /// Read and submit scores.
    pub fn scores(&self) -> Scores {
        Scores::new(self.client.clone())
    }

    /// Read and award trophies.
    pub fn trophies(&self) -> Trophies {
        Trophies::new(self.client.clone())
    }

    /// Look up friends.
    pub fn friends(&self) -> Friends {
        Friends::new(self.client.clone())
    }

    /// Cloud key/value storage.
    pub fn datastore(&self) -> Datastore {
        Datastore::new(self.client.clone())
    }

    /// Read the server's clock.
    pub fn time(&self) -> Time {
        Time::new(self.client.clone())
    }
}
