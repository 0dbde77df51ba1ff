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

use crate::common::init;
use chrono::{Datelike, Timelike};
use chrono_tz::Tz;
use gamejolt::ErrorKind;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_get_time() {
    let (api, mock) = init();
    mock.reply(
        r#"{"response":{"success":"true","timestamp":1578948022,"timezone":"America/New_York",
            "year":"2020","month":"1","day":"13","hour":"15","minute":"40","second":"22"}}"#,
    );

    let time = api.time().get().await.unwrap().into_data().unwrap();
    assert_eq!(time.timezone(), Tz::America__New_York);
    assert_eq!((time.year(), time.month(), time.day()), (2020, 1, 13));
    assert_eq!(time.hour(), 15);
    assert_eq!(time.timestamp(), 1578948022);

    let requests = mock.take_requests();
    assert_eq!(requests[0].path, "/time");
    assert!(requests[0].query.is_empty());
}

#[tokio::test]
async fn test_unknown_timezone() {
    let (api, mock) = init();
    mock.reply(
        r#"{"response":{"success":"true","timezone":"Mars/Olympus_Mons",
            "year":"2020","month":"1","day":"13","hour":"15","minute":"40","second":"22"}}"#,
    );

    let err = api.time().get().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Protocol);
}

#[tokio::test]
async fn test_get_with_callback() {
    let (api, mock) = init();
    mock.reply(r#"{"response":{"success":"false","message":"Maintenance."}}"#);

    let (tx, rx) = tokio::sync::oneshot::channel();
    api.time().get_with(move |outcome| {
        let _ = tx.send(outcome.message().map(str::to_string));
    });
    assert_eq!(rx.await.unwrap().as_deref(), Some("Maintenance."));
}
