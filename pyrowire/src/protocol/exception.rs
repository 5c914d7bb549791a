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

//! The universal remote exception.

use crate::value::{Dict, Value};
use std::fmt;

/// An exception raised on the remote side.
///
/// Every remote exception collapses into this one shape when it crosses the
/// wire, whatever its native class was. The original class name is kept for
/// diagnostics only.
///
/// # Examples
///
/// ```rust
/// use pyrowire::protocol::RemoteException;
///
/// let error = RemoteException::new("builtins.ValueError", "invalid literal")
///     .with_traceback("Traceback (most recent call last):\n  ...\n");
/// assert_eq!(error.class_name(), "builtins.ValueError");
/// assert_eq!(error.to_string(), "builtins.ValueError: invalid literal");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RemoteException {
    class_name: String,
    message: String,
    attributes: Dict,
    traceback: Option<String>,
}

impl RemoteException {
    /// Creates an exception with a class name and message.
    pub fn new(class_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            message: message.into(),
            attributes: Dict::new(),
            traceback: None,
        }
    }

    /// Adds an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Replaces all attributes.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Dict) -> Self {
        self.attributes = attributes;
        self
    }

    /// Sets the remote traceback text.
    #[must_use]
    pub fn with_traceback(mut self, traceback: impl Into<String>) -> Self {
        self.traceback = Some(traceback.into());
        self
    }

    /// The fully qualified class name of the original exception.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// The exception message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extra attributes carried by the original exception.
    #[must_use]
    pub fn attributes(&self) -> &Dict {
        &self.attributes
    }

    /// The formatted remote traceback, if the remote side sent one.
    #[must_use]
    pub fn traceback(&self) -> Option<&str> {
        self.traceback.as_deref()
    }
}

impl fmt::Display for RemoteException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            f.write_str(&self.class_name)
        } else {
            write!(f, "{}: {}", self.class_name, self.message)
        }
    }
}

impl std::error::Error for RemoteException {}
