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
use crate::{Credentials, Score, Table};
use gamejolt_core::response::field;
use gamejolt_core::{ApiRequest, Client, Outcome, Result};
use serde_json::Value;

/// Limit used when a query doesn't set one.
const DEFAULT_LIMIT: u32 = 10;

/// Who a score belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreOwner {
    /// A signed in user.
    User(Credentials),
    /// A guest with a free-form name.
    Guest(String),
}

impl ScoreOwner {
    fn apply(&self, req: ApiRequest) -> Result<ApiRequest> {
        match self {
            ScoreOwner::User(creds) => Ok(creds.apply(req)),
            ScoreOwner::Guest(name) => {
                require(name, "guest name")?;
                Ok(req.query("guest", name))
            }
        }
    }
}

/// Restrict fetched scores relative to a sort value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBound {
    /// Only scores better than the value.
    BetterThan(i64),
    /// Only scores worse than the value.
    WorseThan(i64),
}

/// Which scores to fetch.
///
/// ```
/// use gamejolt::ScoreQuery;
///
/// let query = ScoreQuery::new().table(2).limit(50).better_than(100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreQuery {
    /// Only scores of this owner, all scores when unset.
    pub owner: Option<ScoreOwner>,
    /// The table to read, the primary table when unset.
    pub table_id: Option<u32>,
    /// How many scores to return at most.
    pub limit: u32,
    /// Only scores better or worse than a value.
    pub bound: Option<ScoreBound>,
}

impl Default for ScoreQuery {
    fn default() -> Self {
        Self {
            owner: None,
            table_id: None,
            limit: DEFAULT_LIMIT,
            bound: None,
        }
    }
}

impl ScoreQuery {
    /// Query the top scores of the primary table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Only scores of the user.
    pub fn user(mut self, creds: Credentials) -> Self {
        self.owner = Some(ScoreOwner::User(creds));
        self
    }

    /// Only scores of the guest.
    pub fn guest(mut self, name: impl Into<String>) -> Self {
        self.owner = Some(ScoreOwner::Guest(name.into()));
        self
    }

    /// Read `table_id` instead of the primary table.
    pub fn table(mut self, table_id: u32) -> Self {
        self.table_id = Some(table_id);
        self
    }

    /// Return at most `limit` scores.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Only scores better than `value`.
    pub fn better_than(mut self, value: i64) -> Self {
        self.bound = Some(ScoreBound::BetterThan(value));
        self
    }

    /// Only scores worse than `value`.
    pub fn worse_than(mut self, value: i64) -> Self {
        self.bound = Some(ScoreBound::WorseThan(value));
        self
    }

    fn to_request(&self) -> Result<ApiRequest> {
        let mut req = ApiRequest::get("/scores").query("limit", self.limit.to_string());
        if let Some(owner) = &self.owner {
            req = owner.apply(req)?;
        }
        if let Some(table_id) = self.table_id {
            req = req.query("table_id", table_id.to_string());
        }
        match self.bound {
            Some(ScoreBound::BetterThan(v)) => req = req.query("better_than", v.to_string()),
            Some(ScoreBound::WorseThan(v)) => req = req.query("worse_than", v.to_string()),
            None => {}
        }
        Ok(req)
    }
}

/// A score to submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    /// Who achieved the score.
    pub owner: ScoreOwner,
    /// The numerical sort value.
    pub value: i64,
    /// The displayed score, e.g. `100 Coins`.
    pub text: String,
    /// Extra data stored with the score.
    pub extra: String,
    /// The table to submit to, the primary table when unset.
    pub table_id: Option<u32>,
}

impl ScoreEntry {
    /// A score achieved by a signed in user.
    pub fn user(creds: Credentials, value: i64, text: impl Into<String>) -> Self {
        Self::new(ScoreOwner::User(creds), value, text)
    }

    /// A score achieved by a guest.
    pub fn guest(name: impl Into<String>, value: i64, text: impl Into<String>) -> Self {
        Self::new(ScoreOwner::Guest(name.into()), value, text)
    }

    fn new(owner: ScoreOwner, value: i64, text: impl Into<String>) -> Self {
        Self {
            owner,
            value,
            text: text.into(),
            extra: String::new(),
            table_id: None,
        }
    }

    /// Store extra data with the score.
    pub fn extra(mut self, extra: impl Into<String>) -> Self {
        self.extra = extra.into();
        self
    }

    /// Submit to `table_id` instead of the primary table.
    pub fn table(mut self, table_id: u32) -> Self {
        self.table_id = Some(table_id);
        self
    }

    fn to_request(&self) -> Result<ApiRequest> {
        require(&self.text, "score text")?;

        let mut req = self
            .owner
            .apply(ApiRequest::get("/scores/add"))?
            .query("sort", self.value.to_string())
            .query("score", &self.text)
            .query("extra_data", &self.extra);
        if let Some(table_id) = self.table_id {
            req = req.query("table_id", table_id.to_string());
        }
        Ok(req)
    }
}

/// Read and submit scores.
#[derive(Debug, Clone)]
pub struct Scores {
    client: Client,
}

impl Scores {
    /// Create the scores façade over `client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetch scores.
    pub async fn fetch(&self, query: &ScoreQuery) -> Result<Outcome<Vec<Score>>> {
        let req = query.to_request()?;
        self.client
            .json(req)
            .await?
            .try_map(|v| field(&v, "scores"))
    }

    /// Fetch the score tables of the game.
    pub async fn fetch_tables(&self) -> Result<Outcome<Vec<Table>>> {
        self.client
            .json(ApiRequest::get("/scores/tables"))
            .await?
            .try_map(|v| field(&v, "tables"))
    }

    /// Submit a score.
    pub async fn add(&self, entry: &ScoreEntry) -> Result<Outcome<()>> {
        let req = entry.to_request()?;
        Ok(self.client.json(req).await?.discard())
    }

    /// The rank `value` would have in a table.
    pub async fn get_rank(&self, value: i64, table_id: Option<u32>) -> Result<Outcome<u32>> {
        let mut req = ApiRequest::get("/scores/get-rank").query("sort", value.to_string());
        if let Some(table_id) = table_id {
            req = req.query("table_id", table_id.to_string());
        }
        self.client.json(req).await?.try_map(|v| rank(&v))
    }

    callback_api! {
        /// Callback twin of [`Scores::fetch`].
        pub fn fetch_with(query: ScoreQuery) -> Vec<Score> => |this| this.fetch(&query);
        /// Callback twin of [`Scores::fetch_tables`].
        pub fn fetch_tables_with() -> Vec<Table> => |this| this.fetch_tables();
        /// Callback twin of [`Scores::add`].
        pub fn add_with(entry: ScoreEntry) -> () => |this| this.add(&entry);
        /// Callback twin of [`Scores::get_rank`].
        pub fn get_rank_with(value: i64, table_id: Option<u32>) -> u32
            => |this| this.get_rank(value, table_id);
    }
}

/// The service sends the rank as number or as string.
fn rank(v: &Value) -> Result<u32> {
    #[derive(serde::Deserialize)]
    struct Rank {
        #[serde(deserialize_with = "crate::objects::de::number")]
        rank: u32,
    }

    Ok(serde_json::from_value::<Rank>(v.clone())?.rank)
}
