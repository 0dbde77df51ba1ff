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

use crate::{Error, Outcome, Result};
use log::warn;
use std::future::Future;
use tokio::task::AbortHandle;

/// Run an API call in the background and hand its outcome to `callback`.
///
/// The callback is invoked exactly once, from a tokio worker, with:
///
/// - the call's outcome when it completed,
/// - a failure carrying the error as cause when the call returned `Err`,
/// - a failure with an [`ErrorKind::Timeout`](crate::ErrorKind::Timeout) cause
///   when the call was cancelled,
/// - a failure with an [`ErrorKind::Unexpected`](crate::ErrorKind::Unexpected)
///   cause when the call panicked.
///
/// The returned handle aborts the call itself, which still reaches the
/// callback as a timeout failure.
///
/// Must be called within a tokio runtime.
pub fn spawn_callback<T, Fut, F>(fut: Fut, callback: F) -> AbortHandle
where
    T: Send + 'static,
    Fut: Future<Output = Result<Outcome<T>>> + Send + 'static,
    F: FnOnce(Outcome<T>) + Send + 'static,
{
    let call = tokio::spawn(fut);
    let handle = call.abort_handle();

    tokio::spawn(async move {
        let outcome = match call.await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(err)) => Outcome::from_error(err),
            Err(err) if err.is_cancelled() => {
                warn!("api call got cancelled before completion");
                Outcome::from_error(Error::timeout("api call cancelled before completion"))
            }
            Err(err) => {
                warn!("api call panicked: {err}");
                Outcome::from_error(Error::unexpected("api call panicked").with_source(err))
            }
        };

        callback(outcome)
    });

    handle
}
