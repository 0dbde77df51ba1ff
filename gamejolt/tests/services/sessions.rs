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

use crate::common::{init, login, OK};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_session_lifecycle() {
    let (api, mock) = init();
    let creds = login(&api, &mock).await;
    let sessions = api.sessions();

    mock.reply(OK).reply(OK).reply(OK).reply(OK);
    assert!(sessions.open(&creds).await.unwrap().is_success());
    assert!(sessions.ping(&creds, true).await.unwrap().is_success());
    assert!(sessions.ping(&creds, false).await.unwrap().is_success());
    assert!(sessions.close(&creds).await.unwrap().is_success());

    let requests = mock.take_requests();
    assert_eq!(
        requests.iter().map(|r| r.path.as_str()).collect::<Vec<_>>(),
        vec![
            "/sessions/open",
            "/sessions/ping",
            "/sessions/ping",
            "/sessions/close"
        ]
    );
    assert_eq!(
        requests[0].query(),
        vec![("username", "cros"), ("user_token", "tok")]
    );
    assert_eq!(
        requests[1].query(),
        vec![("username", "cros"), ("user_token", "tok"), ("status", "active")]
    );
    assert_eq!(requests[2].query()[2], ("status", "idle"));
}

#[tokio::test]
async fn test_check_closed_session() {
    let (api, mock) = init();
    let creds = login(&api, &mock).await;

    mock.reply(r#"{"response":{"success":"false"}}"#);
    let outcome = api.sessions().check(&creds).await.unwrap();
    assert!(!outcome.is_success());
    assert_eq!(outcome.message(), Some(""));
    assert!(outcome.cause().is_none());

    let requests = mock.take_requests();
    assert_eq!(requests[0].path, "/sessions/check");
}
