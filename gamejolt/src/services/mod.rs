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

//! Resource façades over [`Client`](crate::Client).

use gamejolt_core::{Error, Result};

mod datastore;
pub use datastore::{Datastore, DatastoreOperation};
mod friends;
pub use friends::Friends;
mod scores;
pub use scores::{ScoreBound, ScoreEntry, ScoreOwner, ScoreQuery, Scores};
mod sessions;
pub use sessions::Sessions;
mod time;
pub use time::{timezone, Time};
mod trophies;
pub use trophies::Trophies;
mod users;
pub use users::Users;

/// Reject an empty required argument before anything is sent.
fn require(value: &str, name: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::request_invalid(format!("{name} must not be empty")));
    }
    Ok(())
}

/// Join ids the way the service expects lists: `1,2,3`.
fn join_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
