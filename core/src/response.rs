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

//! Normalize the two response encodings into [`Outcome`].
//!
//! - `format=json`: `{"response": {"success": true, "message": "...", ...}}`
//! - `format=dump`: `SUCCESS\n<payload>` or `<anything else>\n<message>`

use crate::{Error, Outcome, Result};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Status token that marks a successful dump response.
pub const DUMP_SUCCESS: &str = "SUCCESS";

/// Parse a `format=dump` body.
///
/// The call succeeded iff the body starts with `SUCCESS`; any other leading
/// token counts as failure. Everything up to and including the first newline
/// is stripped. The rest is the payload on success, or the message on
/// failure. Without a newline nothing remains.
pub fn parse_dump(body: &str) -> Outcome<String> {
    let success = body.starts_with(DUMP_SUCCESS);
    let rest = match body.split_once('\n') {
        Some((_, rest)) => rest,
        None => "",
    };

    debug!("dump response success: {success}");
    if success {
        Outcome::success(rest.to_string())
    } else {
        Outcome::failure(rest)
    }
}

/// Parse a `format=json` body.
///
/// On success the inner `response` object is returned. On failure its
/// `message` becomes the failure message, or an empty string when absent.
///
/// A body that is not JSON, or that has no `response` object, is a protocol
/// error and returned as `Err`.
pub fn parse_json(body: &str) -> Result<Outcome<Value>> {
    let mut doc: Value = serde_json::from_str(body)
        .map_err(|e| Error::protocol("response body is not valid json").with_source(e))?;

    let response = match doc.get_mut("response") {
        Some(v) if v.is_object() => v.take(),
        _ => return Err(Error::protocol("response body has no `response` object")),
    };

    let success = is_true(response.get("success"));
    debug!("json response success: {success}");
    if success {
        Ok(Outcome::success(response))
    } else {
        let message = response.get("message").map(text).unwrap_or_default();
        Ok(Outcome::failure(message))
    }
}

/// Project the field `name` of a response object into `T`.
pub fn field<T: DeserializeOwned>(value: &Value, name: &str) -> Result<T> {
    let Some(v) = value.get(name) else {
        return Err(Error::protocol(format!(
            "missing field `{name}` in response"
        )));
    };

    <T as Deserialize>::deserialize(v).map_err(|e| {
        Error::protocol(format!("invalid field `{name}` in response")).with_source(e)
    })
}

/// Render a json scalar the way the service means it.
///
/// The service sends most numbers and flags as strings, so callers compare
/// on text. `null` renders as an empty string.
pub fn text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        v => v.to_string(),
    }
}

fn is_true(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}
