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

#![doc = include_str!("../../README.md")]
#![allow(clippy::module_inception)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

//! # pyrowire - Pyro5 wire serialization
//!
//! pyrowire implements the payload layer of the Pyro5 remote-object
//! protocol:
//!
//! - **Pluggable wire formats**: serpent (tag 1) and JSON (tag 3) behind one
//!   [`Serializer`](serialization::Serializer) trait
//! - **Lazy serializer registry**: one shared instance per protocol tag
//! - **Protocol objects on the wire**: remote references, proxies and remote
//!   exceptions survive a round trip through tagged dictionaries
//! - **Dynamic values**: a [`Value`] tree mirroring the Python data model
//!
//! ## Architecture
//!
//! pyrowire is organized into several layers:
//!
//! - **[`value`]**: The dynamically typed value tree
//! - **[`protocol`]**: Remote references, proxies, exceptions and call envelopes
//! - **[`pickle`]**: Class picklers and the class resolver
//! - **[`codec`]**: Literal codecs that turn value trees into bytes
//! - **[`serialization`]**: Serializers, configuration and the registry
//!
//! ## Quick Start
//!
//! ```rust
//! use pyrowire::protocol::RemoteObjectReference;
//! use pyrowire::serialization::get_for;
//! use pyrowire::value::{Dict, Value};
//!
//! let serializer = get_for(1)?;
//!
//! let target: RemoteObjectReference = "PYRO:inventory@10.0.0.5:9090".parse().unwrap();
//! let bytes = serializer.serialize_call("inventory", "lookup", &[Value::from(target)], &Dict::new())?;
//!
//! let call = serializer.deserialize_call(&bytes)?;
//! assert!(matches!(call.args()[0], Value::Reference(_)));
//! # Ok::<(), pyrowire::Error>(())
//! ```

pub mod codec;
pub mod error;
pub mod pickle;
pub mod protocol;
pub mod serialization;
pub mod value;

pub use error::Error;
pub use protocol::{CallEnvelope, RemoteException, RemoteObjectReference, RemoteProxyHandle};
pub use serialization::{Serializer, SerializerConfig, SerializerRegistry, get_for};
pub use value::{Dict, Value};
