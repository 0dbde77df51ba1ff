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
use chrono::{DateTime, NaiveDate, TimeZone};
use chrono_tz::{Tz, TZ_VARIANTS};
use gamejolt_core::{ApiRequest, Client, Error, Outcome, Result};
use log::debug;
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// IANA zone names the server may report, resolved once.
static TIMEZONES: Lazy<HashMap<&'static str, Tz>> =
    Lazy::new(|| TZ_VARIANTS.iter().map(|tz| (tz.name(), *tz)).collect());

/// Resolve an IANA zone name such as `America/New_York`.
pub fn timezone(name: &str) -> Option<Tz> {
    TIMEZONES.get(name).copied()
}

#[derive(Deserialize)]
struct ServerTime {
    #[serde(default, deserialize_with = "de::number")]
    year: i32,
    #[serde(default, deserialize_with = "de::number")]
    month: u32,
    #[serde(default, deserialize_with = "de::number")]
    day: u32,
    #[serde(default, deserialize_with = "de::number")]
    hour: u32,
    #[serde(default, deserialize_with = "de::number")]
    minute: u32,
    #[serde(default, deserialize_with = "de::number")]
    second: u32,
    #[serde(default, deserialize_with = "de::text")]
    timezone: String,
}

impl ServerTime {
    fn into_datetime(self) -> Result<DateTime<Tz>> {
        let tz = timezone(&self.timezone).ok_or_else(|| {
            Error::protocol(format!("unknown timezone in response: {}", self.timezone))
        })?;
        let naive = NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|d| d.and_hms_opt(self.hour, self.minute, self.second))
            .ok_or_else(|| Error::protocol("invalid date in response"))?;

        tz.from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| Error::protocol(format!("{naive} does not exist in {tz}")))
    }
}

/// Read the server's clock.
#[derive(Debug, Clone)]
pub struct Time {
    client: Client,
}

impl Time {
    /// Create the time façade over `client`.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// The current time of the server, in the server's zone.
    pub async fn get(&self) -> Result<Outcome<DateTime<Tz>>> {
        self.client
            .json(ApiRequest::get("/time"))
            .await?
            .try_map(parse_time)
    }

    callback_api! {
        /// Callback twin of [`Time::get`].
        pub fn get_with() -> DateTime<Tz> => |this| this.get();
    }
}

fn parse_time(v: Value) -> Result<DateTime<Tz>> {
    let time: ServerTime = serde_json::from_value(v)?;
    debug!("server time in zone {}", time.timezone);
    time.into_datetime()
}
