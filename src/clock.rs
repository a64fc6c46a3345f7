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

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio::time::interval;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::timestamp::Timestamp;

/// Republishes the current time at a fixed period, so that views of the
/// due set can be recomputed as time passes.
///
/// The ticker owns its background task. Dropping the ticker aborts the task
/// and closes the channel, so no tick outlives the view that asked for it.
pub struct NowTicker {
    rx: watch::Receiver<Timestamp>,
    handle: JoinHandle<()>,
}

impl NowTicker {
    /// Start ticking. Must be called from within a Tokio runtime.
    pub fn start(period: Duration) -> Fallible<Self> {
        if period.is_zero() {
            return fail("refresh period must be positive.");
        }
        let (tx, rx) = watch::channel(Timestamp::now());
        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately; the channel already
            // holds the start time.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if tx.send(Timestamp::now()).is_err() {
                    break;
                }
            }
        });
        Ok(Self { rx, handle })
    }

    /// Wait for the next tick.
    pub async fn tick(&mut self) -> Fallible<Timestamp> {
        if self.rx.changed().await.is_err() {
            return fail("clock stopped.");
        }
        Ok(*self.rx.borrow_and_update())
    }

    /// A separate handle on the published time.
    pub fn subscribe(&self) -> watch::Receiver<Timestamp> {
        self.rx.clone()
    }
}

impl Drop for NowTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
