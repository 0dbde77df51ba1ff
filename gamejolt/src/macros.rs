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

/// Generate callback twins of async service methods.
///
/// ```ignore
/// callback_api! {
///     /// Docs of the generated method.
///     pub fn fetch_with(id: u32) -> Vec<u32> => |this| this.fetch(id);
/// }
/// ```
///
/// expands to a method taking the same (owned) arguments plus a callback,
/// which runs the call on the tokio runtime and hands its outcome to the
/// callback exactly once. The returned handle cancels the call, see
/// [`spawn_callback`](crate::spawn_callback).
macro_rules! callback_api {
    ($(
        $(#[$meta:meta])*
        pub fn $name:ident($($arg:ident: $ty:ty),* $(,)?) -> $out:ty => |$this:ident| $call:expr;
    )*) => {$(
        $(#[$meta])*
        pub fn $name<F>(&self, $($arg: $ty,)* callback: F) -> ::tokio::task::AbortHandle
        where
            F: FnOnce($crate::Outcome<$out>) + Send + 'static,
        {
            let $this = self.clone();
            $crate::spawn_callback(async move { $call.await }, callback)
        }
    )*};
}
