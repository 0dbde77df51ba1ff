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

use crate::{Error, Result};
use bytes::Bytes;
use http::Method;
use http::Uri;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Characters that can't travel inside a URI and have to be escaped on the wire.
///
/// The signed URL keeps them raw; `%`, `+`, `&` and `=` are never touched.
const URI_UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Response encoding requested from the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// `format=json`: a `{"response": {...}}` envelope.
    #[default]
    Json,
    /// `format=dump`: a status line followed by raw text.
    Dump,
}

impl Format {
    /// The value sent as the `format` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Dump => "dump",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logical API call.
///
/// Query parameters are kept in the order they were added because that order
/// ends up in the signed URL. Payload parameters are kept sorted by key because
/// the service signs them in ascending key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: Method,
    /// Method path below the versioned endpoint, e.g. `/users/auth`.
    pub path: String,
    /// Endpoint specific query parameters.
    pub query: Vec<(String, String)>,
    /// Form-encoded POST payload.
    pub payload: Option<BTreeMap<String, String>>,
    /// Requested response format.
    pub format: Format,
}

impl ApiRequest {
    /// Create a request for `path`.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            payload: None,
            format: Format::default(),
        }
    }

    /// Create a GET request for `path`.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Create a POST request for `path`.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Append a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Insert a payload parameter.
    pub fn payload(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.payload
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Set the response format.
    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Check the request before anything is sent.
    pub fn validate(&self) -> Result<()> {
        if self.path.is_empty() {
            return Err(Error::request_invalid("method path must not be empty"));
        }
        if !self.path.starts_with('/') {
            return Err(Error::request_invalid(format!(
                "method path must start with '/': {}",
                self.path
            )));
        }
        if self.payload.is_some() && self.method != Method::POST {
            return Err(Error::request_invalid(format!(
                "payload is only allowed on POST requests, got {}",
                self.method
            )));
        }
        Ok(())
    }

    /// Build the unsigned request URL.
    ///
    /// ```shell
    /// {endpoint}{path}?game_id={id}&format={json|dump}&k1=v1&k2=v2
    /// ```
    ///
    /// Query values only get their spaces replaced by `%20`; every other
    /// character is passed through as is. That matches what the service
    /// verifies the signature against.
    pub fn url(&self, endpoint: &str, game_id: u32) -> String {
        let mut s =
            String::with_capacity(endpoint.len() + self.path.len() + self.query_size() + 32);
        s.push_str(endpoint);
        s.push_str(&self.path);
        s.push_str(&format!("?game_id={game_id}&format={}", self.format));

        for (k, v) in &self.query {
            s.push('&');
            s.push_str(k);
            s.push('=');
            s.push_str(&v.replace(' ', "%20"));
        }

        s
    }

    /// Build the string that gets signed for `url`.
    ///
    /// ```shell
    /// {url}{key_a}{value_a}{key_b}{value_b}
    /// ```
    ///
    /// Payload pairs are appended in ascending key order with raw values and
    /// no separators.
    pub fn string_to_sign(&self, url: &str) -> String {
        let mut s = String::with_capacity(url.len() + self.payload_size());
        s.push_str(url);

        if let Some(payload) = &self.payload {
            for (k, v) in payload {
                s.push_str(k);
                s.push_str(v);
            }
        }

        s
    }

    /// Encode the payload as an `application/x-www-form-urlencoded` body.
    ///
    /// An absent payload yields an empty body.
    pub fn form_body(&self) -> Bytes {
        let Some(payload) = &self.payload else {
            return Bytes::new();
        };

        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(payload.iter())
            .finish()
            .into()
    }

    /// Get query size.
    #[inline]
    pub fn query_size(&self) -> usize {
        self.query
            .iter()
            .map(|(k, v)| k.len() + v.len() + 2)
            .sum::<usize>()
    }

    #[inline]
    fn payload_size(&self) -> usize {
        self.payload
            .iter()
            .flatten()
            .map(|(k, v)| k.len() + v.len())
            .sum::<usize>()
    }
}

/// Turn a signed URL into an [`Uri`] that can be sent.
///
/// Only characters a URI can't carry are escaped, see [`URI_UNSAFE`].
pub fn encode_uri(url: &str) -> Result<Uri> {
    let encoded = utf8_percent_encode(url, URI_UNSAFE).to_string();
    Ok(Uri::from_str(&encoded)?)
}
