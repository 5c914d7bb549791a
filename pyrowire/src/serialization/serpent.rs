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

//! Serpent serializer implementation.
//!
//! This is the default Pyro5 wire format: payloads are Python literal
//! expressions, written and parsed by a pluggable [`LiteralCodec`].

use crate::codec::{CodecError, CodecVersion, EncodeOptions, LiteralCodec, SerpentCodec};
use crate::protocol::CallEnvelope;
use crate::serialization::natives::{decode, register_class_converters};
use crate::serialization::{DeserializationError, SerializationError, Serializer, SerializerConfig};
use crate::value::{Dict, Value};
use tracing::{instrument, trace};

/// Serpent serializer.
///
/// `SerpentSerializer` wires a [`LiteralCodec`] to the class picklers. On
/// construction it checks the codec against [`MIN_CODEC_VERSION`] and
/// registers one class converter per protocol-native kind, so remote
/// references, proxies and exceptions can appear anywhere in a payload.
///
/// [`MIN_CODEC_VERSION`]: Self::MIN_CODEC_VERSION
///
/// # Examples
///
/// ## Basic usage
///
/// ```rust
/// use pyrowire::protocol::RemoteObjectReference;
/// use pyrowire::serialization::{Serializer, SerpentSerializer};
/// use pyrowire::value::Value;
///
/// let serializer = SerpentSerializer::default();
/// let reference: RemoteObjectReference = "PYRO:greeter@localhost:9090".parse()?;
///
/// let bytes = serializer.serialize_data(&Value::from(reference.clone()))?;
/// assert_eq!(serializer.deserialize_data(&bytes)?, Value::Reference(reference));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// ## Custom codec
///
/// ```rust
/// use pyrowire::codec::SerpentCodec;
/// use pyrowire::serialization::{SerializerConfig, SerpentSerializer};
///
/// let config = SerializerConfig::new().with_indent_output(true);
/// let serializer = SerpentSerializer::with_codec(SerpentCodec::new(), config)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct SerpentSerializer<C: LiteralCodec = SerpentCodec> {
    codec: C,
    options: EncodeOptions,
}

impl SerpentSerializer {
    /// The Pyro5 protocol tag of the serpent format.
    pub const SERIALIZER_ID: u16 = 1;

    /// Oldest codec release with the literal grammar this serializer emits.
    pub const MIN_CODEC_VERSION: CodecVersion = CodecVersion::new(1, 40, 0);

    /// Creates a serializer using the built-in [`SerpentCodec`].
    #[must_use]
    pub fn new(config: SerializerConfig) -> Self {
        Self::bind(SerpentCodec::new(), config)
    }
}

impl Default for SerpentSerializer {
    fn default() -> Self {
        Self::new(SerializerConfig::default())
    }
}

impl<C: LiteralCodec> SerpentSerializer<C> {
    /// Creates a serializer around `codec`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::VersionTooOld`] if `codec` reports a version
    /// older than [`SerpentSerializer::MIN_CODEC_VERSION`].
    pub fn with_codec(codec: C, config: SerializerConfig) -> Result<Self, CodecError> {
        let found = codec.version();
        let required = <SerpentSerializer>::MIN_CODEC_VERSION;
        if found < required {
            return Err(CodecError::VersionTooOld {
                codec: codec.name(),
                found,
                required,
            });
        }
        Ok(Self::bind(codec, config))
    }

    fn bind(mut codec: C, config: SerializerConfig) -> Self {
        register_class_converters(&mut codec);
        Self {
            codec,
            options: config.encode_options(),
        }
    }

    /// Returns the codec this serializer writes with.
    pub fn codec(&self) -> &C {
        &self.codec
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>, SerializationError> {
        let bytes = self.codec.encode(value, &self.options)?;
        trace!(bytes = bytes.len(), codec = self.codec.name(), "encoded payload");
        Ok(bytes)
    }
}

impl<C: LiteralCodec> Serializer for SerpentSerializer<C> {
    fn serializer_id(&self) -> u16 {
        <SerpentSerializer>::SERIALIZER_ID
    }

    fn name(&self) -> &'static str {
        "serpent"
    }

    fn serialize_call(
        &self,
        object_id: &str,
        method: &str,
        args: &[Value],
        kwargs: &Dict,
    ) -> Result<Vec<u8>, SerializationError> {
        let call = Value::Tuple(vec![
            Value::from(object_id),
            Value::from(method),
            Value::Tuple(args.to_vec()),
            Value::Dict(kwargs.clone()),
        ]);
        self.encode(&call)
    }

    fn serialize_data(&self, value: &Value) -> Result<Vec<u8>, SerializationError> {
        self.encode(value)
    }

    #[instrument(skip_all, fields(serializer = "serpent", bytes = bytes.len()))]
    fn deserialize_data(&self, bytes: &[u8]) -> Result<Value, DeserializationError> {
        let value = decode(&self.codec, bytes)?;
        trace!(kind = value.type_name(), "decoded payload");
        Ok(value)
    }

    #[instrument(skip_all, fields(serializer = "serpent", bytes = bytes.len()))]
    fn deserialize_call(&self, bytes: &[u8]) -> Result<CallEnvelope, DeserializationError> {
        let parts = decode(&self.codec, bytes)?
            .into_sequence()
            .map_err(|other| {
                DeserializationError::new(format!(
                    "call must be a 4-tuple, found {}",
                    other.type_name()
                ))
            })?;
        let [object_id, method, args, kwargs]: [Value; 4] =
            parts.try_into().map_err(|parts: Vec<Value>| {
                DeserializationError::new(format!(
                    "call must be a 4-tuple, found {} elements",
                    parts.len()
                ))
            })?;

        let (Value::Str(object_id), Value::Str(method)) = (object_id, method) else {
            return Err(DeserializationError::new(
                "call object id and method must be strings",
            ));
        };
        let args = match args {
            Value::List(items) | Value::Tuple(items) => items,
            other => {
                return Err(DeserializationError::new(format!(
                    "call arguments must be a tuple, found {}",
                    other.type_name()
                )));
            }
        };
        let kwargs = kwargs.into_dict().map_err(|other| {
            DeserializationError::new(format!(
                "call keyword arguments must be a dict, found {}",
                other.type_name()
            ))
        })?;
        Ok(CallEnvelope::new(object_id, method, args, kwargs))
    }
}
