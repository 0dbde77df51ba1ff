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

use crate::common::{init, login};
use gamejolt::{DatastoreOperation, ErrorKind};
use pretty_assertions::assert_eq;

const FORM: &str = "application/x-www-form-urlencoded";

#[tokio::test]
async fn test_fetch_global_value() {
    let (api, mock) = init();
    mock.reply("SUCCESS\nline one\nline two");

    let value = api
        .datastore()
        .fetch("level-1", None)
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(value, "line one\nline two");

    let requests = mock.take_requests();
    assert_eq!(requests[0].method, http::Method::POST);
    assert_eq!(requests[0].path, "/data-store");
    assert_eq!(requests[0].format, "dump");
    assert!(requests[0].query.is_empty());
    assert_eq!(requests[0].content_type.as_deref(), Some(FORM));
    assert_eq!(requests[0].body, "key=level-1");
}

#[tokio::test]
async fn test_fetch_missing_key() {
    let (api, mock) = init();
    mock.reply("FAILURE\nThere is no item with the key passed in: missing");

    let outcome = api.datastore().fetch("missing", None).await.unwrap();
    assert!(!outcome.is_success());
    assert_eq!(
        outcome.message(),
        Some("There is no item with the key passed in: missing")
    );
}

#[tokio::test]
async fn test_set_user_value() {
    let (api, mock) = init();
    let creds = login(&api, &mock).await;

    mock.reply("SUCCESS\n");
    let outcome = api
        .datastore()
        .set("save", "hp=3&lives=2", Some(&creds))
        .await
        .unwrap();
    assert!(outcome.is_success());

    let requests = mock.take_requests();
    assert_eq!(requests[0].path, "/data-store/set");
    assert_eq!(
        requests[0].query(),
        vec![("username", "cros"), ("user_token", "tok")]
    );
    assert_eq!(requests[0].body, "data=hp%3D3%26lives%3D2&key=save");
}

#[tokio::test]
async fn test_update() {
    let (api, mock) = init();
    let creds = login(&api, &mock).await;

    mock.reply("SUCCESS\n15");
    let value = api
        .datastore()
        .update("coins", "5", DatastoreOperation::Add, Some(&creds))
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(value, "15");

    let requests = mock.take_requests();
    assert_eq!(requests[0].path, "/data-store/update");
    assert_eq!(
        requests[0].query(),
        vec![("operation", "add"), ("username", "cros"), ("user_token", "tok")]
    );
    assert_eq!(requests[0].body, "key=coins&value=5");
}

#[tokio::test]
async fn test_remove() {
    let (api, mock) = init();
    mock.reply("SUCCESS");

    assert!(api
        .datastore()
        .remove("level-1", None)
        .await
        .unwrap()
        .is_success());
    assert_eq!(mock.take_requests()[0].path, "/data-store/remove");
}

#[tokio::test]
async fn test_get_keys() {
    let (api, mock) = init();
    mock.reply(r#"{"response":{"success":"true","keys":[{"key":"level-1"},{"key":"level-2"}]}}"#);

    let keys = api
        .datastore()
        .get_keys(None, Some("level-*"))
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(keys, vec!["level-1", "level-2"]);

    let requests = mock.take_requests();
    assert_eq!(requests[0].method, http::Method::GET);
    assert_eq!(requests[0].format, "json");
    assert_eq!(requests[0].query(), vec![("pattern", "level-*")]);
}

#[tokio::test]
async fn test_empty_key_is_rejected() {
    let (api, mock) = init();

    let err = api.datastore().fetch("", None).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    let err = api.datastore().set("", "x", None).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(mock.take_requests().is_empty());
}
