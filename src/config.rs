//
// Copyright 2020, Gobsmacked Labs, LLC.
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

//! Options supplied at construction. `ConfigOverrides` holds what a caller
//! wants changed and is merged onto the defaults with `Config::merge`.

use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

/// Prefix for generated marker ids and classes.
pub const DEFAULT_PREFIX: &str = "intersectable__";

/// Resolved options.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Prepended to marker ids and marker classes.
    pub prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl Config {
    /// Defaults with `overrides` applied on top.
    #[must_use]
    pub fn merge(overrides: ConfigOverrides) -> Self {
        let defaults = Config::default();
        Config {
            prefix: overrides.prefix.unwrap_or(defaults.prefix),
        }
    }

    /// `name` with the configured prefix.
    #[must_use]
    pub fn prefixed(&self, name: &str) -> String {
        let mut s = String::with_capacity(self.prefix.len() + name.len());
        s.push_str(&self.prefix);
        s.push_str(name);
        s
    }
}

/// Caller-specified options. Unset fields fall back to `Config::default()`.
#[derive(Debug, Default, PartialEq, Eq, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    /// Replacement for `DEFAULT_PREFIX`.
    pub prefix: Option<String>,
}

/// A bare string is taken as the prefix.
impl From<&str> for ConfigOverrides {
    fn from(prefix: &str) -> Self {
        ConfigOverrides {
            prefix: Some(prefix.to_string()),
        }
    }
}

impl From<String> for ConfigOverrides {
    fn from(prefix: String) -> Self {
        ConfigOverrides {
            prefix: Some(prefix),
        }
    }
}

impl From<Config> for ConfigOverrides {
    fn from(config: Config) -> Self {
        ConfigOverrides {
            prefix: Some(config.prefix),
        }
    }
}
