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

//! Serialization error types.
//!
//! [`SerializationError`] and [`DeserializationError`] are the errors returned
//! at the [`Serializer`](super::Serializer) boundary. Both carry a message and
//! keep the lower-level cause reachable through
//! [`std::error::Error::source`].

use crate::codec::LiteralError;
use crate::pickle::PickleError;
use std::fmt;

/// Error that occurs while serializing a call or a value.
///
/// Common causes include:
/// - A protocol-native value with no registered class converter
/// - A value the wire format cannot represent (e.g. a non-finite float in JSON)
/// - Nesting deeper than the codec allows
///
/// # Examples
///
/// ```rust
/// use pyrowire::serialization::SerializationError;
///
/// let error = SerializationError::new("value cannot be represented");
/// assert_eq!(error.to_string(), "Serialization error: value cannot be represented");
/// ```
#[derive(Debug)]
pub struct SerializationError {
    /// The underlying error message
    message: String,
    /// Optional source error
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SerializationError {
    /// Creates a new serialization error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new serialization error with a message and source.
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns the error message, without the cause.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SerializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Serialization error: {}", self.message)?;
        if let Some(source) = &self.source {
            write!(f, " (caused by: {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for SerializationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Error that occurs while deserializing a payload.
///
/// Common causes include:
/// - Malformed or truncated payloads
/// - A reference or proxy dictionary with a missing or mistyped field
/// - A call payload that is not a call envelope
///
/// Unrecognized class tags are not errors; such dictionaries are returned
/// unchanged.
///
/// # Examples
///
/// ```rust
/// use pyrowire::serialization::{Serializer, SerpentSerializer};
///
/// let serializer = SerpentSerializer::default();
/// let result = serializer.deserialize_data(b"[1, 2");
/// assert!(result.is_err());
/// ```
#[derive(Debug)]
pub struct DeserializationError {
    /// The underlying error message
    message: String,
    /// Optional source error
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl DeserializationError {
    /// Creates a new deserialization error with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new deserialization error with a message and source.
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns the error message, without the cause.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for DeserializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deserialization error: {}", self.message)?;
        if let Some(source) = &self.source {
            write!(f, " (caused by: {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for DeserializationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<LiteralError> for SerializationError {
    fn from(err: LiteralError) -> Self {
        Self::with_source("failed to encode value", err)
    }
}

impl From<LiteralError> for DeserializationError {
    fn from(err: LiteralError) -> Self {
        Self::with_source("failed to parse payload", err)
    }
}

impl From<PickleError> for DeserializationError {
    fn from(err: PickleError) -> Self {
        Self::with_source("failed to restore object", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_serialization_error_new() {
        let error = SerializationError::new("test error");
        assert_eq!(error.to_string(), "Serialization error: test error");
        assert_eq!(error.message(), "test error");
        assert!(error.source().is_none());
    }

    #[test]
    fn test_serialization_error_from_literal_error() {
        let error = SerializationError::from(LiteralError::TooDeep { limit: 4 });
        assert!(error.to_string().contains("nesting exceeds the limit of 4"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_deserialization_error_new() {
        let error = DeserializationError::new("test error");
        assert_eq!(error.to_string(), "Deserialization error: test error");
        assert!(error.source().is_none());
    }

    #[test]
    fn test_deserialization_error_keeps_pickle_error() {
        let error = DeserializationError::from(PickleError::MissingField {
            class: "Pyro5.core.URI",
            field: "state",
        });
        let source = error.source().unwrap();
        let pickle = source.downcast_ref::<PickleError>().unwrap();
        assert_eq!(pickle.field(), "state");
    }
}
