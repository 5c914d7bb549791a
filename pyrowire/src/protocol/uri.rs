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

//! Remote object references.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The default protocol prefix of a direct object reference.
pub const DEFAULT_PROTOCOL: &str = "PYRO";

/// The address and identity of an object living in a remote runtime.
///
/// References are immutable values with structural identity: two references
/// with equal fields address the same remote object. Every reference that can
/// be built can also be written as `PROTOCOL:object@host:port` text and parsed
/// back to an equal reference.
///
/// # Examples
///
/// ```rust
/// use pyrowire::protocol::RemoteObjectReference;
///
/// let uri: RemoteObjectReference = "PYRO:obj_4f3a@localhost:9090".parse()?;
/// assert_eq!(uri.object_id(), "obj_4f3a");
/// assert_eq!(uri.host(), "localhost");
/// assert_eq!(uri.port(), 9090);
/// assert_eq!(uri.to_string(), "PYRO:obj_4f3a@localhost:9090");
///
/// assert!(RemoteObjectReference::new("HTTP", "obj", "localhost", 80).is_err());
/// # Ok::<(), pyrowire::protocol::UriParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct RemoteObjectReference {
    protocol: String,
    object_id: String,
    host: String,
    port: u16,
}

impl RemoteObjectReference {
    /// Creates a reference from its four fields.
    ///
    /// The protocol is upper-cased and must be `PYRO` optionally followed by
    /// letters (`PYRONAME`, `PYROMETA`). The object id must be non-empty and
    /// free of whitespace. The host must be non-empty and may not contain
    /// whitespace, `@`, `[` or `]`.
    pub fn new(
        protocol: impl Into<String>,
        object_id: impl Into<String>,
        host: impl Into<String>,
        port: u16,
    ) -> Result<Self, UriParseError> {
        let protocol = protocol.into().to_ascii_uppercase();
        let valid_protocol = protocol.starts_with(DEFAULT_PROTOCOL)
            && protocol.chars().all(|c| c.is_ascii_alphabetic());
        if !valid_protocol {
            return Err(UriParseError::UnsupportedProtocol { protocol });
        }

        let object_id = object_id.into();
        if object_id.is_empty() || object_id.contains(char::is_whitespace) {
            return Err(UriParseError::InvalidObjectId { object_id });
        }

        let host = host.into();
        if host.is_empty()
            || host.contains(|c: char| c.is_whitespace() || matches!(c, '@' | '[' | ']'))
        {
            return Err(UriParseError::InvalidHost { host });
        }

        Ok(Self {
            protocol,
            object_id,
            host,
            port,
        })
    }

    /// The protocol prefix, e.g. `PYRO`.
    #[must_use]
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    /// The object identifier registered with the remote daemon.
    #[must_use]
    pub fn object_id(&self) -> &str {
        &self.object_id
    }

    /// The host name or address of the remote daemon.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// The TCP port of the remote daemon.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for RemoteObjectReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(
                f,
                "{}:{}@[{}]:{}",
                self.protocol, self.object_id, self.host, self.port
            )
        } else {
            write!(
                f,
                "{}:{}@{}:{}",
                self.protocol, self.object_id, self.host, self.port
            )
        }
    }
}

/// Error returned when a reference cannot be built or parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UriParseError {
    /// The text has no `PROTOCOL:` prefix.
    #[error("missing protocol prefix in {text:?}")]
    MissingProtocol {
        /// The offending text
        text: String,
    },

    /// The protocol is not `PYRO` optionally followed by letters.
    #[error("unsupported protocol {protocol:?}")]
    UnsupportedProtocol {
        /// The protocol that was found
        protocol: String,
    },

    /// The text has no `@host:port` location.
    #[error("missing location in {text:?}")]
    MissingLocation {
        /// The offending text
        text: String,
    },

    /// The object id is empty or contains whitespace.
    #[error("invalid object id {object_id:?}")]
    InvalidObjectId {
        /// The offending object id
        object_id: String,
    },

    /// The host is empty or contains a reserved character.
    #[error("invalid host {host:?}")]
    InvalidHost {
        /// The offending host
        host: String,
    },

    /// The location is not of the form `host:port`.
    #[error("invalid location {location:?}")]
    InvalidLocation {
        /// The offending location
        location: String,
    },
}

impl FromStr for RemoteObjectReference {
    type Err = UriParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        let (protocol, rest) = text
            .split_once(':')
            .ok_or_else(|| UriParseError::MissingProtocol {
                text: text.to_string(),
            })?;

        let (object_id, location) =
            rest.rsplit_once('@')
                .ok_or_else(|| UriParseError::MissingLocation {
                    text: text.to_string(),
                })?;

        let invalid = || UriParseError::InvalidLocation {
            location: location.to_string(),
        };
        let (host, port) = if let Some(bracketed) = location.strip_prefix('[') {
            bracketed.split_once("]:").ok_or_else(invalid)?
        } else {
            location.rsplit_once(':').ok_or_else(invalid)?
        };
        if !port.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let port = port.parse::<u16>().map_err(|_| invalid())?;

        Self::new(protocol, object_id, host, port)
    }
}

impl TryFrom<String> for RemoteObjectReference {
    type Error = UriParseError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<RemoteObjectReference> for String {
    fn from(reference: RemoteObjectReference) -> Self {
        reference.to_string()
    }
}
