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

//! Records returned by the game API.

pub(crate) mod de;

mod credentials;
pub use credentials::Credentials;
mod score;
pub use score::Score;
mod table;
pub use table::Table;
mod trophy;
pub use trophy::{Trophy, TrophyDifficulty, SECRET_TROPHY_IMAGE};
mod user;
pub use user::{User, UserKind, UserStatus};
