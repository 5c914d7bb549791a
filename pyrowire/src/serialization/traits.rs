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

//! Serialization trait definitions.
//!
//! This module defines the core [`Serializer`] trait that every wire format
//! implements.

use crate::protocol::CallEnvelope;
use crate::serialization::{DeserializationError, SerializationError};
use crate::value::{Dict, Value};

/// Trait for encoding calls and values into a Pyro5 wire format.
///
/// Each implementation is identified by the numeric tag the protocol uses to
/// announce the payload format (see [`serializer_id`](Self::serializer_id)).
/// The trait is object safe; the [`SerializerRegistry`](super::SerializerRegistry)
/// hands out serializers as `Arc<dyn Serializer>`.
///
/// # Thread Safety
///
/// All serializers must be `Send + Sync + 'static`. A serializer carries no
/// mutable state once constructed and is shared by every caller.
///
/// # Examples
///
/// ```rust
/// use pyrowire::serialization::{Serializer, SerpentSerializer};
/// use pyrowire::value::{Dict, Value};
///
/// let serializer = SerpentSerializer::default();
///
/// let bytes = serializer.serialize_call("obj-123", "greet", &[Value::from("world")], &Dict::new())?;
/// let call = serializer.deserialize_call(&bytes)?;
/// assert_eq!(call.method(), "greet");
///
/// let bytes = serializer.serialize_data(&Value::from(42))?;
/// assert_eq!(serializer.deserialize_data(&bytes)?, Value::from(42));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Serializer: Send + Sync + 'static {
    /// Returns the protocol tag of this wire format.
    fn serializer_id(&self) -> u16;

    /// Returns the name of this serializer.
    ///
    /// A stable, human-readable identifier used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Encodes a method invocation.
    ///
    /// The four components are written in the order the protocol expects:
    /// object id, method name, positional arguments, keyword arguments.
    /// Protocol-native values inside `args` or `kwargs` are written through
    /// the class picklers.
    ///
    /// # Errors
    ///
    /// Returns a [`SerializationError`] if an argument cannot be represented.
    fn serialize_call(
        &self,
        object_id: &str,
        method: &str,
        args: &[Value],
        kwargs: &Dict,
    ) -> Result<Vec<u8>, SerializationError>;

    /// Encodes a prepared [`CallEnvelope`].
    ///
    /// # Errors
    ///
    /// Same as [`serialize_call`](Self::serialize_call).
    fn serialize_envelope(&self, envelope: &CallEnvelope) -> Result<Vec<u8>, SerializationError> {
        self.serialize_call(
            envelope.object_id(),
            envelope.method(),
            envelope.args(),
            envelope.kwargs(),
        )
    }

    /// Encodes an arbitrary value, typically a call result.
    ///
    /// # Errors
    ///
    /// Returns a [`SerializationError`] if the value cannot be represented.
    fn serialize_data(&self, value: &Value) -> Result<Vec<u8>, SerializationError>;

    /// Decodes a payload into a value, restoring protocol objects in place.
    ///
    /// Dictionaries tagged with a class nobody recognizes are returned as
    /// plain [`Value::Dict`]s; this is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`DeserializationError`] if the payload is malformed or a
    /// recognized protocol object has missing or mistyped fields.
    fn deserialize_data(&self, bytes: &[u8]) -> Result<Value, DeserializationError>;

    /// Decodes a payload produced by [`serialize_call`](Self::serialize_call).
    ///
    /// # Errors
    ///
    /// Returns a [`DeserializationError`] if the payload is malformed or is
    /// not a call.
    fn deserialize_call(&self, bytes: &[u8]) -> Result<CallEnvelope, DeserializationError>;
}
