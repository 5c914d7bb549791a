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

//! Local proxy handles for remote objects.

use super::RemoteObjectReference;
use std::collections::BTreeSet;

/// Metadata a proxy learns from the remote daemon when it connects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyMetadata {
    /// Methods exposed by the remote object.
    pub methods: BTreeSet<String>,
    /// Attributes exposed by the remote object.
    pub attributes: BTreeSet<String>,
    /// Methods that are invoked without waiting for a response.
    pub oneway: BTreeSet<String>,
}

/// Connection state of a proxy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConnectionState {
    /// No connection has been made yet (or it was dropped).
    #[default]
    Disconnected,
    /// Connected, with the metadata returned by the handshake.
    Connected(ProxyMetadata),
}

/// A local stand-in for a remote object.
///
/// Only the wrapped [`RemoteObjectReference`] crosses the wire. The connection
/// state is local; a proxy that has been deserialized always starts out
/// [`ConnectionState::Disconnected`] and connects again on first use.
///
/// # Examples
///
/// ```rust
/// use pyrowire::protocol::{ProxyMetadata, RemoteObjectReference, RemoteProxyHandle};
///
/// let mut proxy = RemoteProxyHandle::new(RemoteObjectReference::new("PYRO", "obj", "localhost", 9090)?);
/// assert!(!proxy.is_connected());
///
/// proxy.mark_connected(ProxyMetadata::default());
/// assert!(proxy.is_connected());
/// # Ok::<(), pyrowire::protocol::UriParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteProxyHandle {
    reference: RemoteObjectReference,
    state: ConnectionState,
}

impl RemoteProxyHandle {
    /// Creates a disconnected proxy for `reference`.
    #[must_use]
    pub fn new(reference: RemoteObjectReference) -> Self {
        Self {
            reference,
            state: ConnectionState::Disconnected,
        }
    }

    /// The reference this proxy addresses.
    #[must_use]
    pub fn reference(&self) -> &RemoteObjectReference {
        &self.reference
    }

    /// The current connection state.
    #[must_use]
    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    /// Returns `true` once [`mark_connected`](Self::mark_connected) has been called.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        matches!(self.state, ConnectionState::Connected(_))
    }

    /// Records a successful connection and the metadata it returned.
    pub fn mark_connected(&mut self, metadata: ProxyMetadata) {
        self.state = ConnectionState::Connected(metadata);
    }

    /// Drops the connection state.
    pub fn disconnect(&mut self) {
        self.state = ConnectionState::Disconnected;
    }
}

impl From<RemoteObjectReference> for RemoteProxyHandle {
    fn from(reference: RemoteObjectReference) -> Self {
        Self::new(reference)
    }
}
