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

//! Production [`HttpSend`] for the game API client, built on a pooled
//! [`reqwest::Client`].

use async_trait::async_trait;
use bytes::Bytes;
use gamejolt_core::{Error, HttpSend, Result};
use http_body_util::BodyExt;
use log::debug;
use reqwest::{Client, Request};
use std::time::Duration;

/// ReqwestHttpSend sends requests through a shared [`reqwest::Client`].
///
/// The client pools connections, so one instance should be shared by every
/// in-flight request.
#[derive(Debug, Default, Clone)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Create a new ReqwestHttpSend whose client gives up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::config_invalid("failed to build http client").with_source(e))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req)
            .map_err(|e| Error::request_invalid("request can't be sent").with_source(e))?;
        debug!("sending {} {}", req.method(), req.url().path());

        let resp: http::Response<_> = self.client.execute(req).await.map_err(from_reqwest)?.into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(from_reqwest)?;
        Ok(http::Response::from_parts(parts, bs))
    }
}

fn from_reqwest(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::timeout("http request timed out").with_source(err)
    } else {
        Error::transport("http request failed").with_source(err)
    }
}
