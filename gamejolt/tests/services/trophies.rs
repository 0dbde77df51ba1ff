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
use gamejolt::TrophyDifficulty;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_fetch_trophies() {
    let (api, mock) = init();
    let creds = login(&api, &mock).await;

    mock.reply(
        r#"{"response":{"success":"true","trophies":[
            {"id":"5","title":"First Jump","description":"Jump once.","difficulty":"Bronze","image_url":"https://m.gjcdn.net/trophy-thumbnail/5.png","achieved":"2 days ago"},
            {"id":"6","title":"???","description":"","difficulty":"Gold","image_url":"https://s.gjcdn.net/img/trophy-secret-1.jpg","achieved":"false"}
        ]}}"#,
    );

    let trophies = api
        .trophies()
        .fetch(&creds, Some(false), &[5, 6])
        .await
        .unwrap()
        .into_data()
        .unwrap();
    assert!(trophies[0].achieved);
    assert_eq!(trophies[1].difficulty, TrophyDifficulty::Gold);
    assert!(trophies[1].is_secret());

    let requests = mock.take_requests();
    assert_eq!(requests[0].path, "/trophies");
    assert_eq!(
        requests[0].query(),
        vec![
            ("username", "cros"),
            ("user_token", "tok"),
            ("achieved", "false"),
            ("trophy_id", "5,6"),
        ]
    );
}

#[tokio::test]
async fn test_fetch_all_trophies() {
    let (api, mock) = init();
    let creds = login(&api, &mock).await;

    mock.reply(r#"{"response":{"success":"true","trophies":[]}}"#);
    api.trophies().fetch(&creds, None, &[]).await.unwrap();

    let requests = mock.take_requests();
    assert_eq!(
        requests[0].query(),
        vec![("username", "cros"), ("user_token", "tok")]
    );
}

#[tokio::test]
async fn test_set_and_remove_achieved() {
    let (api, mock) = init();
    let creds = login(&api, &mock).await;

    mock.reply(OK)
        .reply(r#"{"response":{"success":"false","message":"The user does not have this trophy."}}"#);
    assert!(api
        .trophies()
        .set_achieved(&creds, 5)
        .await
        .unwrap()
        .is_success());
    let outcome = api.trophies().remove_achieved(&creds, 6).await.unwrap();
    assert_eq!(outcome.message(), Some("The user does not have this trophy."));

    let requests = mock.take_requests();
    assert_eq!(requests[0].path, "/trophies/add-achieved");
    assert_eq!(requests[1].path, "/trophies/remove-achieved");
    assert_eq!(
        requests[1].query(),
        vec![("username", "cros"), ("user_token", "tok"), ("trophy_id", "6")]
    );
}
