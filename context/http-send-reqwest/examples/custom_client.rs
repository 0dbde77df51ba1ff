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

use bytes::Bytes;
use gamejolt_core::{Context, OsEnv, Result};
use gamejolt_http_send_reqwest::ReqwestHttpSend;
use reqwest::Client;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    // Create a custom reqwest client with specific configuration
    let client = Client::builder()
        .timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(4)
        .user_agent("gamejolt-rs/0.1")
        .build()
        .map_err(|e| gamejolt_core::Error::config_invalid("bad client").with_source(e))?;

    let ctx = Context::new()
        .with_env(OsEnv)
        .with_http_send(ReqwestHttpSend::new(client));

    // An unsigned call is rejected by the service, but still shows the
    // shape of its answers.
    let req = http::Request::get("https://api.gamejolt.com/api/game/v1_2/time?format=dump")
        .body(Bytes::new())?;

    match ctx.http_send_as_string(req).await {
        Ok(resp) => {
            println!("Response status: {}", resp.status());
            println!("Response body:\n{}", resp.body());
        }
        Err(e) => {
            eprintln!("Request failed: {e}");
        }
    }

    Ok(())
}
