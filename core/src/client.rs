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

use crate::request::encode_uri;
use crate::response::{parse_dump, parse_json};
use crate::{ApiRequest, Config, Context, Error, Format, Outcome, RequestSigner, Result};
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::Method;
use log::debug;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Content type of POST bodies.
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// The decoded body of a successful call.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The inner `response` object of a `format=json` call.
    Json(Value),
    /// Everything after the status line of a `format=dump` call.
    Dump(String),
}

impl Payload {
    /// Take the json value out of the payload.
    pub fn into_json(self) -> Result<Value> {
        match self {
            Payload::Json(v) => Ok(v),
            Payload::Dump(_) => Err(Error::unexpected("expected json payload, got dump")),
        }
    }

    /// Take the dump text out of the payload.
    pub fn into_dump(self) -> Result<String> {
        match self {
            Payload::Dump(s) => Ok(s),
            Payload::Json(_) => Err(Error::unexpected("expected dump payload, got json")),
        }
    }
}

/// Client signs, sends and normalizes game API calls.
///
/// Cloning a client is cheap: all clones share the same context and
/// configuration.
#[derive(Clone, Debug)]
pub struct Client {
    inner: Arc<Inner>,
}

#[derive(Clone, Debug)]
struct Inner {
    ctx: Context,
    signer: RequestSigner,
    endpoint: String,
    timeout: Duration,
}

impl Client {
    /// Create a new client for a game with the default endpoint and timeout.
    pub fn new(ctx: Context, game_id: u32, private_key: impl Into<String>) -> Result<Self> {
        let config = Config::default();
        Ok(Self {
            inner: Arc::new(Inner {
                ctx,
                signer: RequestSigner::new(game_id, private_key)?,
                endpoint: config.endpoint().to_string(),
                timeout: config.timeout(),
            }),
        })
    }

    /// Create a new client from config.
    pub fn from_config(ctx: Context, config: &Config) -> Result<Self> {
        let signer = RequestSigner::new(config.game_id()?, config.private_key()?)?;
        Ok(Self {
            inner: Arc::new(Inner {
                ctx,
                signer,
                endpoint: config.endpoint().to_string(),
                timeout: config.timeout(),
            }),
        })
    }

    /// Set the timeout applied to every call.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        Arc::make_mut(&mut self.inner).timeout = timeout;
        self
    }

    /// Set the API endpoint, a trailing `/` is dropped.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        Arc::make_mut(&mut self.inner).endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    /// The game this client talks for.
    pub fn game_id(&self) -> u32 {
        self.inner.signer.game_id()
    }

    /// The endpoint calls are sent to.
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// The timeout applied to every call.
    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    /// Sign, send and normalize one call.
    ///
    /// - Invalid requests and unparsable responses are returned as `Err`.
    /// - Transport errors and timeouts become a failed outcome with the
    ///   error as cause.
    /// - Rejected calls become a failed outcome with the server's message.
    pub async fn invoke(&self, req: ApiRequest) -> Result<Outcome<Payload>> {
        req.validate()?;

        let url = self.inner.signer.signed_url(&self.inner.endpoint, &req);
        let uri = encode_uri(&url)?;

        let mut builder = http::Request::builder().method(req.method.clone()).uri(uri);
        let body = if req.method == Method::POST {
            builder = builder.header(CONTENT_TYPE, FORM_CONTENT_TYPE);
            req.form_body()
        } else {
            Bytes::new()
        };
        let http_req = builder.body(body)?;

        let timeout = self.inner.timeout;
        let resp = match tokio::time::timeout(
            timeout,
            self.inner.ctx.http_send_as_string(http_req),
        )
        .await
        {
            Ok(Ok(resp)) => resp,
            Ok(Err(err)) => {
                debug!("{} {} failed: {err}", req.method, req.path);
                return Ok(Outcome::from_error(err));
            }
            Err(_) => {
                debug!("{} {} timed out after {timeout:?}", req.method, req.path);
                return Ok(Outcome::from_error(Error::timeout(format!(
                    "request timed out after {timeout:?}"
                ))));
            }
        };

        // The service reports errors in the body, the status code carries no meaning.
        debug!("{} {} got response status {}", req.method, req.path, resp.status());
        let body = resp.into_body();
        match req.format {
            Format::Json => Ok(parse_json(&body)?.map(Payload::Json)),
            Format::Dump => Ok(parse_dump(&body).map(Payload::Dump)),
        }
    }

    /// Invoke `req` as a `format=json` call.
    pub async fn json(&self, req: ApiRequest) -> Result<Outcome<Value>> {
        self.invoke(req.format(Format::Json))
            .await?
            .try_map(Payload::into_json)
    }

    /// Invoke `req` as a `format=dump` call.
    pub async fn dump(&self, req: ApiRequest) -> Result<Outcome<String>> {
        self.invoke(req.format(Format::Dump))
            .await?
            .try_map(Payload::into_dump)
    }

    /// GET `path` with `query` and read the json response.
    pub async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Outcome<Value>> {
        self.json(build(ApiRequest::get(path), query, &[])).await
    }

    /// GET `path` with `query` and read the dump response.
    pub async fn get_dump(&self, path: &str, query: &[(&str, &str)]) -> Result<Outcome<String>> {
        self.dump(build(ApiRequest::get(path), query, &[])).await
    }

    /// POST `payload` to `path` with `query` and read the json response.
    pub async fn post_json(
        &self,
        path: &str,
        query: &[(&str, &str)],
        payload: &[(&str, &str)],
    ) -> Result<Outcome<Value>> {
        self.json(build(ApiRequest::post(path), query, payload))
            .await
    }

    /// POST `payload` to `path` with `query` and read the dump response.
    pub async fn post_dump(
        &self,
        path: &str,
        query: &[(&str, &str)],
        payload: &[(&str, &str)],
    ) -> Result<Outcome<String>> {
        self.dump(build(ApiRequest::post(path), query, payload))
            .await
    }
}

fn build(req: ApiRequest, query: &[(&str, &str)], payload: &[(&str, &str)]) -> ApiRequest {
    let req = query.iter().fold(req, |req, (k, v)| req.query(*k, *v));
    payload.iter().fold(req, |req, (k, v)| req.payload(*k, *v))
}
