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

use std::fs::read_to_string;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::session::SessionConfig;

/// Name of the optional configuration file in a collection directory.
pub const CONFIG_FILE: &str = "tcmstudy.toml";

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Default item counts for new sessions.
    pub session: SessionConfig,
    pub clock: ClockConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClockConfig {
    /// How often the due count is refreshed, in seconds.
    pub refresh_seconds: u64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            refresh_seconds: 60,
        }
    }
}

impl Config {
    /// Read the configuration file in `directory`, falling back to defaults
    /// if there is none.
    pub fn load(directory: &Path) -> Fallible<Self> {
        let path = directory.join(CONFIG_FILE);
        if !path.exists() {
            log::debug!("No {CONFIG_FILE}, using defaults.");
            return Ok(Self::default());
        }
        Self::parse(&read_to_string(path)?)
    }

    pub fn parse(content: &str) -> Fallible<Self> {
        let config: Config = toml::from_str(content)?;
        if config.clock.refresh_seconds == 0 {
            return fail("clock.refresh_seconds must be positive.");
        }
        Ok(config)
    }

    pub fn refresh_period(&self) -> Duration {
        Duration::from_secs(self.clock.refresh_seconds)
    }
}
