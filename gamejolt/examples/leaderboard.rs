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

use gamejolt::{GameJolt, Outcome, Result, ScoreQuery};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    // Reads GAMEJOLT_GAME_ID and GAMEJOLT_PRIVATE_KEY.
    let api = GameJolt::from_env()?;

    let tables = match api.scores().fetch_tables().await? {
        Outcome::Success(tables) => tables,
        Outcome::Failure(f) => {
            eprintln!("Failed to fetch tables: {f}");
            return Ok(());
        }
    };

    for table in tables {
        println!("{} ({}){}", table.name, table.id, if table.primary { " *" } else { "" });

        let query = ScoreQuery::new().table(table.id).limit(5);
        match api.scores().fetch(&query).await? {
            Outcome::Success(scores) => {
                for (rank, score) in scores.iter().enumerate() {
                    println!("  {:>2}. {:<20} {}", rank + 1, score.name(), score.text);
                }
            }
            Outcome::Failure(f) => eprintln!("  failed: {f}"),
        }
    }

    Ok(())
}
