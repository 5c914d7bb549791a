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

//! Serialization layer for pyrowire.
//!
//! This module turns calls and values into Pyro5 wire payloads and back.
//!
//! # Overview
//!
//! The serialization layer consists of several key components:
//!
//! - **[`Serializer`] trait**: Pluggable abstraction for the wire formats
//! - **Wire formats**: [`SerpentSerializer`] (tag 1, default) and
//!   [`JsonSerializer`] (tag 3, feature `json`)
//! - **[`SerializerRegistry`]**: Lazily constructed, shared serializer per tag
//! - **[`SerializerConfig`]**: Output layout options
//! - **Error types**: [`SerializationError`], [`DeserializationError`] and
//!   [`RegistryError`]
//!
//! # Wire Formats
//!
//! A Pyro5 message header announces the payload format with a numeric tag.
//! The receiving side resolves the tag through the registry:
//!
//! | Tag | Format  | Serializer            |
//! |-----|---------|-----------------------|
//! | 1   | serpent | [`SerpentSerializer`] |
//! | 2   | marshal | unsupported           |
//! | 3   | json    | [`JsonSerializer`]    |
//! | 4   | msgpack | unsupported           |
//!
//! # Protocol Objects
//!
//! Remote object references, proxies and remote exceptions are written as
//! dictionaries tagged with a `__class__` key and restored on read. Tags
//! nobody recognizes are left as plain dictionaries.
//!
//! # Examples
//!
//! ## Resolving a serializer by tag
//!
//! ```rust
//! use pyrowire::serialization::get_for;
//! use pyrowire::value::{Dict, Value};
//!
//! let serializer = get_for(1)?;
//!
//! let bytes = serializer.serialize_call("obj-123", "greet", &[Value::from("world")], &Dict::new())?;
//! let call = serializer.deserialize_call(&bytes)?;
//! assert_eq!(call.object_id(), "obj-123");
//! assert_eq!(call.args(), &[Value::from("world")]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Unrecognized classes pass through
//!
//! ```rust
//! use pyrowire::serialization::{Serializer, SerpentSerializer};
//!
//! let serializer = SerpentSerializer::default();
//! let value = serializer.deserialize_data(b"{'__class__': 'completely.unknown.Type', 'x': 1}")?;
//! assert_eq!(value.as_dict().map(|d| d.len()), Some(2));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod error;
mod natives;
mod registry;
mod serpent;
mod traits;

#[cfg(feature = "json")]
mod json;

pub use config::SerializerConfig;
pub use error::{DeserializationError, SerializationError};
pub use registry::{RegistryError, SerializerFactory, SerializerRegistry, get_for};
pub use serpent::SerpentSerializer;
pub use traits::Serializer;

#[cfg(feature = "json")]
pub use self::json::JsonSerializer;
