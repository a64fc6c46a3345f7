// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use tokio::signal::ctrl_c;

use crate::clock::NowTicker;
use crate::collection::Collection;
use crate::error::Fallible;
use crate::store::BlobStore;
use crate::study::Study;
use crate::types::timestamp::Timestamp;

/// Print the number of cards due. With `watch`, keep printing it every
/// refresh period until interrupted.
pub async fn print_due(
    directory: Option<String>,
    book_id: &str,
    watch: bool,
    list: bool,
) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let study = coll.open_book(book_id)?;
    print!("{}", due_report(&study, Timestamp::now(), list));
    if !watch {
        return Ok(());
    }
    let ticker = NowTicker::start(coll.config.refresh_period())?;
    watch_due(&study, ticker, list, ctrl_c()).await?;
    Ok(())
}

/// Reprint the due count on every tick until `stop` resolves. Returns the
/// number of reports printed.
async fn watch_due<S, F>(
    study: &Study<S>,
    mut ticker: NowTicker,
    list: bool,
    stop: F,
) -> Fallible<usize>
where
    S: BlobStore,
    F: Future<Output = std::io::Result<()>>,
{
    tokio::pin!(stop);
    let mut reports = 0;
    loop {
        tokio::select! {
            now = ticker.tick() => {
                print!("{}", due_report(study, now?, list));
                reports += 1;
            }
            result = &mut stop => {
                result?;
                break;
            }
        }
    }
    // Dropping the ticker stops it.
    drop(ticker);
    Ok(reports)
}

fn due_report<S: BlobStore>(study: &Study<S>, now: Timestamp, list: bool) -> String {
    let due = study.due_cards(now);
    let mut report = format!("{}: {} due\n", now, due.len());
    if list {
        for card in due {
            report.push_str(&format!("  {}\t{}\n", card.id(), card.front()));
        }
    }
    report
}
