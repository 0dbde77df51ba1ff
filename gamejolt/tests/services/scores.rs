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
use gamejolt::{ErrorKind, ScoreEntry, ScoreQuery};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_fetch_scores() {
    let (api, mock) = init();
    mock.reply(
        r#"{"response":{"success":"true","scores":[
            {"score":"234 Jumps","sort":"234","extra_data":"","user":"CROS","user_id":"1","guest":"","stored":"3 hours ago","stored_timestamp":"1578948022"},
            {"score":"12 Jumps","sort":"12","extra_data":"","user":"","user_id":"","guest":"Jolter","stored":"1 day ago","stored_timestamp":"1578861622"}
        ]}}"#,
    );

    let scores = api
        .scores()
        .fetch(&ScoreQuery::new().table(2).better_than(10))
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(scores.len(), 2);
    assert_eq!(scores[0].value, 234);
    assert_eq!(scores[0].name(), "CROS");
    assert!(scores[1].is_guest_score());
    assert_eq!(scores[1].name(), "Jolter");

    let requests = mock.take_requests();
    assert_eq!(requests[0].path, "/scores");
    assert_eq!(
        requests[0].query(),
        vec![("limit", "10"), ("table_id", "2"), ("better_than", "10")]
    );
}

#[tokio::test]
async fn test_fetch_user_scores() {
    let (api, mock) = init();
    let creds = login(&api, &mock).await;

    mock.reply(r#"{"response":{"success":"true","scores":[]}}"#);
    let scores = api
        .scores()
        .fetch(&ScoreQuery::new().user(creds).limit(3))
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert!(scores.is_empty());

    let requests = mock.take_requests();
    assert_eq!(
        requests[0].query(),
        vec![("limit", "3"), ("username", "cros"), ("user_token", "tok")]
    );
}

#[tokio::test]
async fn test_fetch_tables() {
    let (api, mock) = init();
    mock.reply(
        r#"{"response":{"success":"true","tables":[
            {"id":"1","name":"Jumps","description":"Most jumps","primary":"1"},
            {"id":"2","name":"Time","description":"Fastest run","primary":"0"}
        ]}}"#,
    );

    let tables = api
        .scores()
        .fetch_tables()
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert!(tables[0].primary);
    assert!(!tables[1].primary);
    assert_eq!(mock.take_requests()[0].path, "/scores/tables");
}

#[tokio::test]
async fn test_add_score() {
    let (api, mock) = init();
    let creds = login(&api, &mock).await;

    mock.reply(OK);
    let entry = ScoreEntry::user(creds, 234, "234 Jumps").table(2);
    assert!(api.scores().add(&entry).await.unwrap().is_success());

    let requests = mock.take_requests();
    assert_eq!(requests[0].method, http::Method::GET);
    assert_eq!(requests[0].path, "/scores/add");
    assert_eq!(
        requests[0].query(),
        vec![
            ("username", "cros"),
            ("user_token", "tok"),
            ("sort", "234"),
            ("score", "234 Jumps"),
            ("extra_data", ""),
            ("table_id", "2"),
        ]
    );
}

#[tokio::test]
async fn test_add_guest_score_requires_text() {
    let (api, mock) = init();

    let err = api
        .scores()
        .add(&ScoreEntry::guest("Jolter", 1, ""))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(mock.take_requests().is_empty());
}

#[tokio::test]
async fn test_get_rank() {
    let (api, mock) = init();
    mock.reply(r#"{"response":{"success":"true","rank":"3"}}"#);

    let rank = api
        .scores()
        .get_rank(100, None)
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert_eq!(rank, 3);

    let requests = mock.take_requests();
    assert_eq!(requests[0].path, "/scores/get-rank");
    assert_eq!(requests[0].query(), vec![("sort", "100")]);
}
