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

//! Core components for calling the Game Jolt game API.
//!
//! This crate provides the pieces every call goes through:
//!
//! - [`ApiRequest`]: describe a call and build its canonical URL
//! - [`RequestSigner`]: sign the URL with the game's private key
//! - [`Client`]: send the signed call and normalize the answer into [`Outcome`]
//!
//! ## Overview
//!
//! Every call is an HTTP GET or POST to `{endpoint}{path}` carrying `game_id`,
//! `format` and the call's own query parameters, plus a `signature` computed
//! as `md5(url || sorted payload pairs || private_key)`. The service answers
//! either with a json document (`format=json`) or a plain text dump
//! (`format=dump`); both are normalized into [`Outcome`].
//!
//! ## Example
//!
//! ```no_run
//! use gamejolt_core::{Client, Context, Outcome, Result};
//!
//! # async fn example(ctx: Context) -> Result<()> {
//! let client = Client::new(ctx, 1234, "private-key")?;
//!
//! match client.get_json("/time", &[]).await? {
//!     Outcome::Success(v) => println!("server time: {}", v["timestamp"]),
//!     Outcome::Failure(f) => println!("call failed: {}", f.message()),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Traits
//!
//! - [`HttpSend`]: For sending HTTP requests
//! - [`Env`]: For environment variable access
//!
//! Both are plugged into a [`Context`]. This crate ships no HTTP client, see
//! `gamejolt-http-send-reqwest`.
//!
//! ## Utilities
//!
//! - [`hash`]: MD5 signing helpers
//! - [`response`]: Response normalization and field projection
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod constants;
pub mod hash;
pub mod response;
pub mod utils;

mod context;
pub use context::{Context, NoopHttpSend};
mod http;
pub use http::HttpSend;
mod env;
pub use env::{Env, NoopEnv, OsEnv, StaticEnv};
mod error;
pub use error::{Error, ErrorKind, Result};

mod request;
pub use request::{encode_uri, ApiRequest, Format};
mod sign;
pub use sign::RequestSigner;
mod outcome;
pub use outcome::{Failure, Outcome};
mod config;
pub use config::Config;
mod client;
pub use client::{Client, Payload};
mod callback;
pub use callback::spawn_callback;
