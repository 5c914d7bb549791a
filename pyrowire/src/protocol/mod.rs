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

//! Protocol-native objects.
//!
//! These are the values whose identity must survive a trip through the wire
//! format: object references, proxies, and exceptions raised remotely. Each of
//! them has a matching pickler in [`crate::pickle`].

mod envelope;
mod exception;
mod proxy;
mod uri;

pub use envelope::CallEnvelope;
pub use exception::RemoteException;
pub use proxy::{ConnectionState, ProxyMetadata, RemoteProxyHandle};
pub use uri::{DEFAULT_PROTOCOL, RemoteObjectReference, UriParseError};
