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

//! JSON serializer implementation.
//!
//! This module provides the Pyro5 JSON wire format, which is human-readable
//! and useful for debugging and for peers without a serpent parser.

use crate::codec::{EncodeOptions, JsonCodec, LiteralCodec};
use crate::protocol::CallEnvelope;
use crate::serialization::natives::{decode, register_class_converters};
use crate::serialization::{DeserializationError, SerializationError, Serializer, SerializerConfig};
use crate::value::{Dict, Value};
use tracing::{instrument, trace};

/// JSON serializer.
///
/// `JsonSerializer` writes the Pyro5 JSON wire format. It shares the class
/// picklers with [`SerpentSerializer`](super::SerpentSerializer), so remote
/// references, proxies and exceptions travel as the same tagged dictionaries.
///
/// # Trade-offs
///
/// - Tuples and sets are written as arrays and come back as lists
/// - Byte blobs are base64 encoded
/// - Non-finite floats cannot be written
///
/// # Examples
///
/// ## Basic usage
///
/// ```rust
/// use pyrowire::serialization::{JsonSerializer, Serializer};
/// use pyrowire::value::{Dict, Value};
///
/// let serializer = JsonSerializer::default();
///
/// let bytes = serializer.serialize_call("obj-123", "greet", &[Value::from("world")], &Dict::new())?;
/// assert_eq!(
///     String::from_utf8(bytes)?,
///     r#"{"object":"obj-123","method":"greet","params":["world"],"kwargs":{}}"#
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// ## Pretty-printed JSON
///
/// ```rust
/// use pyrowire::serialization::{JsonSerializer, Serializer};
/// use pyrowire::value::Value;
///
/// let serializer = JsonSerializer::new().with_pretty_print();
/// let bytes = serializer.serialize_data(&Value::List(vec![Value::from(1)]))?;
/// println!("{}", String::from_utf8_lossy(&bytes));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct JsonSerializer {
    codec: JsonCodec,
    options: EncodeOptions,
}

impl Default for JsonSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonSerializer {
    /// The Pyro5 protocol tag of the JSON format.
    pub const SERIALIZER_ID: u16 = 3;

    /// Creates a new JSON serializer with default configuration.
    ///
    /// The default configuration produces compact JSON without whitespace.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SerializerConfig::default())
    }

    /// Creates a JSON serializer from a [`SerializerConfig`].
    ///
    /// `use_set_literals` has no effect; JSON has no set syntax.
    #[must_use]
    pub fn with_config(config: SerializerConfig) -> Self {
        let mut codec = JsonCodec::new();
        register_class_converters(&mut codec);
        Self {
            codec,
            options: config.encode_options(),
        }
    }

    /// Configures the serializer to produce pretty-printed JSON.
    #[must_use]
    pub fn with_pretty_print(mut self) -> Self {
        self.options.indent = true;
        self
    }

    /// Configures the serializer to produce compact JSON.
    ///
    /// This is the default behavior.
    #[must_use]
    pub fn with_compact(mut self) -> Self {
        self.options.indent = false;
        self
    }

    fn encode(&self, value: &Value) -> Result<Vec<u8>, SerializationError> {
        let bytes = self.codec.encode(value, &self.options)?;
        trace!(bytes = bytes.len(), codec = "json", "encoded payload");
        Ok(bytes)
    }
}

impl Serializer for JsonSerializer {
    fn serializer_id(&self) -> u16 {
        Self::SERIALIZER_ID
    }

    fn name(&self) -> &'static str {
        "json"
    }

    fn serialize_call(
        &self,
        object_id: &str,
        method: &str,
        args: &[Value],
        kwargs: &Dict,
    ) -> Result<Vec<u8>, SerializationError> {
        let mut call = Dict::with_capacity(4);
        call.insert("object".to_string(), Value::from(object_id));
        call.insert("method".to_string(), Value::from(method));
        call.insert("params".to_string(), Value::List(args.to_vec()));
        call.insert("kwargs".to_string(), Value::Dict(kwargs.clone()));
        self.encode(&Value::Dict(call))
    }

    fn serialize_data(&self, value: &Value) -> Result<Vec<u8>, SerializationError> {
        self.encode(value)
    }

    #[instrument(skip_all, fields(serializer = "json", bytes = bytes.len()))]
    fn deserialize_data(&self, bytes: &[u8]) -> Result<Value, DeserializationError> {
        let value = decode(&self.codec, bytes)?;
        trace!(kind = value.type_name(), "decoded payload");
        Ok(value)
    }

    #[instrument(skip_all, fields(serializer = "json", bytes = bytes.len()))]
    fn deserialize_call(&self, bytes: &[u8]) -> Result<CallEnvelope, DeserializationError> {
        let mut call = decode(&self.codec, bytes)?.into_dict().map_err(|other| {
            DeserializationError::new(format!("call must be an object, found {}", other.type_name()))
        })?;
        let mut field = |name: &str| {
            call.shift_remove(name)
                .ok_or_else(|| DeserializationError::new(format!("call is missing '{name}'")))
        };
        let object_id = field("object")?;
        let method = field("method")?;
        let params = field("params")?;
        let kwargs = field("kwargs")?;

        let (Value::Str(object_id), Value::Str(method)) = (object_id, method) else {
            return Err(DeserializationError::new(
                "call object id and method must be strings",
            ));
        };
        let Value::List(args) = params else {
            return Err(DeserializationError::new("call params must be an array"));
        };
        let kwargs = kwargs
            .into_dict()
            .map_err(|_| DeserializationError::new("call kwargs must be an object"))?;
        Ok(CallEnvelope::new(object_id, method, args, kwargs))
    }
}
