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

//! Top-level error type for pyrowire.
//!
//! Each layer of the crate has its own error type. [`Error`] composes them
//! for callers that want a single error type:
//!
//! 1. **Registry**: Resolving a protocol tag to a serializer ([`RegistryError`])
//! 2. **Codec**: Binding a literal codec to a serializer ([`CodecError`])
//! 3. **Serialization**: Encoding calls and values ([`SerializationError`])
//! 4. **Deserialization**: Decoding payloads ([`DeserializationError`])
//!
//! # Examples
//!
//! ```rust
//! use pyrowire::Error;
//! use pyrowire::serialization::{get_for, RegistryError};
//!
//! fn resolve(tag: u16) -> Result<(), Error> {
//!     let serializer = get_for(tag)?;
//!     serializer.deserialize_data(b"None")?;
//!     Ok(())
//! }
//!
//! let error = resolve(9999).unwrap_err();
//! assert!(error.is_registry_error());
//! assert!(error.to_string().contains("9999"));
//! ```

use crate::codec::CodecError;
use crate::serialization::{DeserializationError, RegistryError, SerializationError};
use std::error::Error as StdError;
use std::fmt;

/// Top-level error type for pyrowire operations.
#[derive(Debug)]
pub enum Error {
    /// No serializer could be provided for a protocol tag.
    Registry(RegistryError),

    /// A literal codec could not be bound to a serializer.
    Codec(CodecError),

    /// A call or value could not be encoded.
    Serialization(SerializationError),

    /// A payload could not be decoded.
    ///
    /// The connection that delivered the payload is still usable; only the
    /// message is lost.
    Deserialization(DeserializationError),
}

impl Error {
    /// Returns `true` if this is a registry error.
    #[must_use]
    pub const fn is_registry_error(&self) -> bool {
        matches!(self, Self::Registry(_))
    }

    /// Returns `true` if this is a codec error.
    #[must_use]
    pub const fn is_codec_error(&self) -> bool {
        matches!(self, Self::Codec(_))
    }

    /// Returns `true` if this is a serialization error.
    #[must_use]
    pub const fn is_serialization_error(&self) -> bool {
        matches!(self, Self::Serialization(_))
    }

    /// Returns `true` if this is a deserialization error.
    #[must_use]
    pub const fn is_deserialization_error(&self) -> bool {
        matches!(self, Self::Deserialization(_))
    }

    /// Returns `true` if retrying the operation may succeed.
    ///
    /// Only failed serializer construction qualifies: the registry publishes
    /// nothing on failure, so the next request runs the factory again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pyrowire::Error;
    /// use pyrowire::serialization::RegistryError;
    ///
    /// let error = Error::from(RegistryError::UnsupportedSerializerId { serializer_id: 2 });
    /// assert!(!error.is_recoverable());
    /// ```
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Registry(RegistryError::Initialization { .. }))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Registry(e) => write!(f, "registry error: {}", e),
            Self::Codec(e) => write!(f, "codec error: {}", e),
            Self::Serialization(e) => write!(f, "{}", e),
            Self::Deserialization(e) => write!(f, "{}", e),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Registry(e) => Some(e),
            Self::Codec(e) => Some(e),
            Self::Serialization(e) => Some(e),
            Self::Deserialization(e) => Some(e),
        }
    }
}

impl From<RegistryError> for Error {
    fn from(error: RegistryError) -> Self {
        Self::Registry(error)
    }
}

impl From<CodecError> for Error {
    fn from(error: CodecError) -> Self {
        Self::Codec(error)
    }
}

impl From<SerializationError> for Error {
    fn from(error: SerializationError) -> Self {
        Self::Serialization(error)
    }
}

impl From<DeserializationError> for Error {
    fn from(error: DeserializationError) -> Self {
        Self::Deserialization(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::CodecVersion;

    #[test]
    fn test_is_registry_error() {
        let error = Error::from(RegistryError::UnsupportedSerializerId { serializer_id: 4 });
        assert!(error.is_registry_error());
        assert!(!error.is_codec_error());
        assert!(!error.is_serialization_error());
        assert!(!error.is_deserialization_error());
        assert_eq!(error.to_string(), "registry error: unsupported serializer id 4");
    }

    #[test]
    fn test_is_codec_error() {
        let error = Error::from(CodecError::VersionTooOld {
            codec: "serpent",
            found: CodecVersion::new(1, 0, 0),
            required: CodecVersion::new(1, 40, 0),
        });
        assert!(error.is_codec_error());
        assert!(error.to_string().contains("1.40.0"));
    }

    #[test]
    fn test_is_deserialization_error() {
        let error = Error::from(DeserializationError::new("bad payload"));
        assert!(error.is_deserialization_error());
        assert_eq!(error.to_string(), "Deserialization error: bad payload");
        assert!(error.source().is_some());
    }

    #[test]
    fn test_is_recoverable() {
        let failed = Error::from(RegistryError::Initialization {
            serializer_id: 1,
            source: CodecError::Unavailable {
                codec: "serpent".to_string(),
                reason: "missing".to_string(),
            },
        });
        assert!(failed.is_recoverable());

        let mismatch = Error::from(RegistryError::IdMismatch {
            requested: 1,
            actual: 3,
        });
        assert!(!mismatch.is_recoverable());
        assert!(!Error::from(SerializationError::new("x")).is_recoverable());
    }
}
