//
// Copyright 2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Pickler error types.

use thiserror::Error;

/// Errors raised when a tagged dictionary cannot be turned back into its
/// protocol object.
///
/// The error always names the class being restored, the offending field and
/// the shape that was expected, so a malformed payload can be diagnosed from
/// the message alone.
///
/// # Examples
///
/// ```rust
/// use pyrowire::pickle::PickleError;
///
/// let error = PickleError::MissingField { class: "Pyro5.core.URI", field: "state" };
/// assert_eq!(error.to_string(), "Pyro5.core.URI: missing field 'state'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickleError {
    /// A required field is absent.
    #[error("{class}: missing field '{field}'")]
    MissingField {
        /// The class being restored
        class: &'static str,
        /// The missing field
        field: &'static str,
    },

    /// A field is present but has the wrong shape.
    #[error("{class}: field '{field}' must be {expected}, found {found}")]
    InvalidField {
        /// The class being restored
        class: &'static str,
        /// The offending field
        field: &'static str,
        /// Description of the expected shape
        expected: &'static str,
        /// Description of what was found
        found: String,
    },
}

impl PickleError {
    /// The name of the field the error is about.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field, .. } | Self::InvalidField { field, .. } => field,
        }
    }
}
