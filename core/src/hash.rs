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

//! Hash related utils.

use md5::Digest;
use md5::Md5;

/// Length of a rendered request signature.
pub const SIGNATURE_LEN: usize = 32;

/// Hex encoded MD5 hash.
///
/// Use this function instead of `hex::encode(md5(content))` can reduce
/// extra copy.
pub fn hex_md5(content: &[u8]) -> String {
    hex::encode(Md5::digest(content).as_slice())
}

/// Sign `input` with the game's private key.
///
/// The service expects `MD5(input || private_key)` rendered as lowercase hex.
/// This is a secret-suffix construction, not an HMAC, and must stay that way
/// for the server to accept the request.
pub fn sign(input: &str, private_key: &str) -> String {
    let mut h = Md5::new();
    h.update(input.as_bytes());
    h.update(private_key.as_bytes());

    pad_signature(hex::encode(h.finalize().as_slice()))
}

/// Left-pad a hex digest with `0` up to [`SIGNATURE_LEN`].
fn pad_signature(hex: String) -> String {
    if hex.len() >= SIGNATURE_LEN {
        return hex;
    }
    format!("{:0>width$}", hex, width = SIGNATURE_LEN)
}
