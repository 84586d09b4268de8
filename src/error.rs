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

//! Error type for the crate.

use alloc::string::{String, ToString};

/// Errors surfaced synchronously to the caller. Nothing is retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Malformed call-site input.
    #[error("Invalid Argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the input.
        reason: String,
    },

    /// The host could not resolve an element to a live, attached node.
    #[error("Could not measure element '{element}'")]
    Measurement {
        /// Debug rendering of the element reference.
        element: String,
    },
}

impl Error {
    /// Creates a new invalid argument error.
    pub fn invalid_argument(reason: impl ToString) -> Self {
        Self::InvalidArgument {
            reason: reason.to_string(),
        }
    }

    /// Creates a new measurement error.
    pub fn measurement(element: impl Into<String>) -> Self {
        Self::Measurement {
            element: element.into(),
        }
    }
}

/// Result alias defaulting to the crate `Error`.
pub type Result<T, E = Error> = core::result::Result<T, E>;
