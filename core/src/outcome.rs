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
use thiserror::Error;

/// The result of one API call.
///
/// A call either succeeds with typed data or fails with a message. Failures
/// carry the server's message for rejected calls (which may be empty), or
/// the transport error as `cause` when the call never got an answer.
///
/// Protocol violations and invalid arguments are not represented here: they
/// are returned as `Err` by the calling function instead.
#[derive(Debug)]
pub enum Outcome<T> {
    /// The call succeeded.
    Success(T),
    /// The call failed.
    Failure(Failure),
}

/// Why a call failed.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Failure {
    message: String,
    #[source]
    cause: Option<Error>,
}

impl Failure {
    /// The failure message.
    ///
    /// For rejected calls this is the server's message and may be empty.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error that prevented the call from completing, if any.
    pub fn cause(&self) -> Option<&Error> {
        self.cause.as_ref()
    }

    /// Consume the failure and return its cause.
    pub fn into_cause(self) -> Option<Error> {
        self.cause
    }
}

impl<T> Outcome<T> {
    /// Create a successful outcome.
    pub fn success(data: T) -> Self {
        Outcome::Success(data)
    }

    /// Create a failed outcome with a server message.
    pub fn failure(message: impl Into<String>) -> Self {
        Outcome::Failure(Failure {
            message: message.into(),
            cause: None,
        })
    }

    /// Create a failed outcome from an error, keeping it as cause.
    pub fn from_error(err: Error) -> Self {
        Outcome::Failure(Failure {
            message: err.to_string(),
            cause: Some(err),
        })
    }

    /// Check if the call succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Borrow the data of a successful call.
    pub fn data(&self) -> Option<&T> {
        match self {
            Outcome::Success(data) => Some(data),
            Outcome::Failure(_) => None,
        }
    }

    /// Take the data of a successful call.
    pub fn into_data(self) -> Option<T> {
        match self {
            Outcome::Success(data) => Some(data),
            Outcome::Failure(_) => None,
        }
    }

    /// The failure message, `None` on success.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => Some(failure.message()),
        }
    }

    /// The failure cause, `None` on success or when the server rejected the call.
    pub fn cause(&self) -> Option<&Error> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(failure) => failure.cause(),
        }
    }

    /// Map the data of a successful call.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(data) => Outcome::Success(f(data)),
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }

    /// Map the data of a successful call with a fallible projection.
    ///
    /// Projection errors are returned as `Err`; failures pass through untouched.
    pub fn try_map<U>(self, f: impl FnOnce(T) -> Result<U>) -> Result<Outcome<U>> {
        match self {
            Outcome::Success(data) => Ok(Outcome::Success(f(data)?)),
            Outcome::Failure(failure) => Ok(Outcome::Failure(failure)),
        }
    }

    /// Drop the data, keeping only success or failure.
    pub fn discard(self) -> Outcome<()> {
        self.map(|_| ())
    }

    /// Convert into a standard result.
    pub fn into_result(self) -> std::result::Result<T, Failure> {
        match self {
            Outcome::Success(data) => Ok(data),
            Outcome::Failure(failure) => Err(failure),
        }
    }
}

impl<T> From<Error> for Outcome<T> {
    fn from(err: Error) -> Self {
        Outcome::from_error(err)
    }
}
