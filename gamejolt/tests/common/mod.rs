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

use async_trait::async_trait;
use bytes::Bytes;
use gamejolt::{Client, Context, Credentials, Error, GameJolt, HttpSend, Result};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub const ENDPOINT: &str = "https://api.gamejolt.com/api/game/v1_2";
pub const GAME_ID: u32 = 1234;
pub const PRIVATE_KEY: &str = "private";

pub const OK: &str = r#"{"response":{"success":"true"}}"#;

/// A sent request, taken apart for assertions.
#[derive(Debug)]
pub struct Recorded {
    pub method: http::Method,
    pub path: String,
    pub format: String,
    /// Query parameters without `game_id`, `format` and `signature`.
    pub query: Vec<(String, String)>,
    pub content_type: Option<String>,
    pub body: String,
}

impl Recorded {
    pub fn query(&self) -> Vec<(&str, &str)> {
        self.query
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}

#[derive(Default)]
struct State {
    replies: VecDeque<String>,
    requests: Vec<Recorded>,
}

/// Answers requests with queued bodies and records them.
#[derive(Clone, Default)]
pub struct MockHttpSend {
    state: Arc<Mutex<State>>,
}

impl std::fmt::Debug for MockHttpSend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockHttpSend").finish_non_exhaustive()
    }
}

impl MockHttpSend {
    pub fn reply(&self, body: &str) -> &Self {
        self.state
            .lock()
            .unwrap()
            .replies
            .push_back(body.to_string());
        self
    }

    pub fn take_requests(&self) -> Vec<Recorded> {
        std::mem::take(&mut self.state.lock().unwrap().requests)
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let recorded = record(req);
        let mut state = self.state.lock().unwrap();
        state.requests.push(recorded);
        match state.replies.pop_front() {
            Some(body) => Ok(http::Response::new(Bytes::from(body))),
            None => Err(Error::transport("no reply queued")),
        }
    }
}

fn record(req: http::Request<Bytes>) -> Recorded {
    let uri = req.uri();
    let path = uri
        .path()
        .strip_prefix("/api/game/v1_2")
        .unwrap_or(uri.path())
        .to_string();

    let mut format = String::new();
    let mut query = Vec::new();
    for pair in uri.query().unwrap_or_default().split('&') {
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        match k {
            "game_id" => assert_eq!(v, GAME_ID.to_string()),
            "format" => format = v.to_string(),
            "signature" => assert_eq!(v.len(), 32),
            _ => query.push((k.to_string(), v.replace("%20", " "))),
        }
    }

    Recorded {
        method: req.method().clone(),
        path,
        format,
        query,
        content_type: req
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(req.body()).to_string(),
    }
}

pub fn init() -> (GameJolt, MockHttpSend) {
    let _ = env_logger::builder().is_test(true).try_init();

    let mock = MockHttpSend::default();
    let ctx = Context::new().with_http_send(mock.clone());
    let client = Client::new(ctx, GAME_ID, PRIVATE_KEY)
        .expect("client must be created")
        .with_endpoint(ENDPOINT);
    (GameJolt::new(client), mock)
}

/// Authenticate `cros` and forget the auth request.
pub async fn login(api: &GameJolt, mock: &MockHttpSend) -> Credentials {
    mock.reply(OK);
    let creds = api
        .users()
        .auth("cros", "tok")
        .await
        .expect("auth must not error")
        .into_data()
        .expect("auth must succeed");
    mock.take_requests();
    creds
}
