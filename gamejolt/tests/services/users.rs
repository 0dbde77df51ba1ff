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
use gamejolt::{ErrorKind, Outcome, UserKind};
use pretty_assertions::assert_eq;

const USERS: &str = r#"{"response":{"success":"true","users":[
    {"id":"1","type":"Administrator","username":"CROS","status":"Active"},
    {"id":"2","type":"Developer","username":"Jolter","status":"Active"}
]}}"#;

#[tokio::test]
async fn test_auth() {
    let (api, mock) = init();
    mock.reply(OK);

    let creds = api
        .users()
        .auth("cros", "tok")
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(creds.name(), "cros");
    assert_eq!(creds.token(), "tok");

    let requests = mock.take_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, http::Method::GET);
    assert_eq!(requests[0].path, "/users/auth");
    assert_eq!(requests[0].format, "json");
    assert_eq!(
        requests[0].query(),
        vec![("username", "cros"), ("user_token", "tok")]
    );
}

#[tokio::test]
async fn test_auth_rejected() {
    let (api, mock) = init();
    mock.reply(r#"{"response":{"success":"false","message":"No such user with the credentials passed in could be found."}}"#);

    let outcome = api.users().auth("cros", "wrong").await.unwrap();
    assert!(!outcome.is_success());
    assert_eq!(
        outcome.message(),
        Some("No such user with the credentials passed in could be found.")
    );
}

#[tokio::test]
async fn test_auth_requires_name_and_token() {
    let (api, mock) = init();

    let err = api.users().auth("", "tok").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    let err = api.users().auth("cros", "").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(mock.take_requests().is_empty());
}

#[tokio::test]
async fn test_fetch_by_name() {
    let (api, mock) = init();
    mock.reply(USERS);

    let user = api
        .users()
        .fetch_by_name("CROS")
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.kind, UserKind::Admin);

    let requests = mock.take_requests();
    assert_eq!(requests[0].path, "/users");
    assert_eq!(requests[0].query(), vec![("username", "CROS")]);
}

#[tokio::test]
async fn test_fetch_by_ids() {
    let (api, mock) = init();
    mock.reply(USERS);

    let users = api
        .users()
        .fetch_by_ids(&[1, 2])
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(
        users.iter().map(|u| u.name.as_str()).collect::<Vec<_>>(),
        vec!["CROS", "Jolter"]
    );

    let requests = mock.take_requests();
    assert_eq!(requests[0].query(), vec![("user_id", "1,2")]);
}

#[tokio::test]
async fn test_fetch_by_ids_requires_ids() {
    let (api, mock) = init();

    let err = api.users().fetch_by_ids(&[]).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(mock.take_requests().is_empty());
}

#[tokio::test]
async fn test_missing_users_is_protocol_error() {
    let (api, mock) = init();
    mock.reply(r#"{"response":{"success":"true","users":[]}}"#);

    let err = api.users().fetch_by_id(7).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Protocol);
}

#[tokio::test]
async fn test_fetch_with_callback() {
    let (api, mock) = init();
    let creds = login(&api, &mock).await;
    assert_eq!(creds.name(), "cros");

    mock.reply(USERS);
    let (tx, rx) = tokio::sync::oneshot::channel();
    api.users().fetch_by_id_with(1, move |outcome| {
        let _ = tx.send(outcome);
    });

    match rx.await.unwrap() {
        Outcome::Success(user) => assert_eq!(user.name, "CROS"),
        Outcome::Failure(f) => panic!("fetch must succeed: {f}"),
    }
}

#[tokio::test]
async fn test_transport_error_reaches_callback() {
    let (api, _mock) = init();

    let (tx, rx) = tokio::sync::oneshot::channel();
    api.users()
        .auth_with("cros".to_string(), "tok".to_string(), move |outcome| {
            let _ = tx.send(outcome);
        });

    let outcome = rx.await.unwrap();
    assert!(!outcome.is_success());
    assert_eq!(
        outcome.cause().map(|e| e.kind()),
        Some(ErrorKind::Transport)
    );
}
