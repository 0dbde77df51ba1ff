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

//! Lenient field decoders.
//!
//! The service encodes most numbers and flags as strings and leaves fields
//! out freely. Every record field goes through one of these together with
//! `#[serde(default)]`.

use gamejolt_core::response::text as render;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// Any scalar as text, `null` as empty.
pub(crate) fn text<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(render(&Value::deserialize(d)?))
}

/// A number sent either as json number or as string. Unparsable values
/// become the default.
pub(crate) fn number<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
{
    Ok(render(&Value::deserialize(d)?)
        .trim()
        .parse()
        .unwrap_or_default())
}

/// A flag that is false for `false`, `"false"`, `"0"`, empty or `null`, and
/// true for anything else.
pub(crate) fn flag<'de, D>(d: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::Bool(b) => b,
        v => !matches!(render(&v).trim(), "" | "false" | "0"),
    })
}

/// An enum identified by its name.
pub(crate) fn name<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: for<'a> From<&'a str>,
{
    Ok(T::from(render(&Value::deserialize(d)?).trim()))
}
