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

//! JSON engine built on `serde_json`.

use super::materialize::bytes_to_dict;
use super::{ClassConverter, ClassConverters, CodecVersion, EncodeOptions, LiteralCodec, LiteralError};
use crate::value::{Dict, NativeKind, Value};
use serde_json::{Map, Number, Value as JsonValue};

/// A [`LiteralCodec`] writing plain JSON.
///
/// JSON has no tuple, set or byte types: tuples and sets are written as
/// arrays and byte blobs as base64 dictionaries. Numbers parse as
/// [`Value::Int`] when they fit in an `i64` and as [`Value::Float`]
/// otherwise.
///
/// # Examples
///
/// ```rust
/// use pyrowire::codec::{EncodeOptions, JsonCodec, LiteralCodec};
/// use pyrowire::value::Value;
///
/// let codec = JsonCodec::new();
/// let bytes = codec.encode(&Value::Tuple(vec![Value::from(1), Value::from("a")]), &EncodeOptions::default())?;
/// assert_eq!(bytes, br#"[1,"a"]"#);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
    converters: ClassConverters,
}

impl JsonCodec {
    /// Creates a codec with no class converters registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn to_json(&self, value: &Value) -> Result<JsonValue, LiteralError> {
        Ok(match value {
            Value::None => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Int(i) => JsonValue::Number(Number::from(*i)),
            Value::Float(f) => Number::from_f64(*f)
                .map(JsonValue::Number)
                .ok_or_else(|| LiteralError::Unsupported {
                    reason: format!("non-finite float {f} in JSON"),
                })?,
            Value::Str(s) => JsonValue::String(s.clone()),
            Value::Bytes(bytes) => self.dict_to_json(&bytes_to_dict(bytes))?,
            Value::List(items) | Value::Tuple(items) | Value::Set(items) => JsonValue::Array(
                items
                    .iter()
                    .map(|item| self.to_json(item))
                    .collect::<Result<_, _>>()?,
            ),
            Value::Dict(dict) => self.dict_to_json(dict)?,
            native => {
                let kind = native
                    .native_kind()
                    .ok_or_else(|| LiteralError::Unsupported {
                        reason: format!("{} values", native.type_name()),
                    })?;
                self.dict_to_json(&self.converters.convert(kind, native)?)?
            }
        })
    }

    fn dict_to_json(&self, dict: &Dict) -> Result<JsonValue, LiteralError> {
        let mut map = Map::with_capacity(dict.len());
        for (key, value) in dict {
            map.insert(key.clone(), self.to_json(value)?);
        }
        Ok(JsonValue::Object(map))
    }
}

fn from_json(value: JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::None,
        JsonValue::Bool(b) => Value::Bool(b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        JsonValue::String(s) => Value::Str(s),
        JsonValue::Array(items) => Value::List(items.into_iter().map(from_json).collect()),
        JsonValue::Object(map) => Value::Dict(
            map.into_iter()
                .map(|(key, value)| (key, from_json(value)))
                .collect(),
        ),
    }
}

impl LiteralCodec for JsonCodec {
    fn name(&self) -> &'static str {
        "json"
    }

    fn version(&self) -> CodecVersion {
        CodecVersion::new(1, 0, 0)
    }

    fn register_class_converter(&mut self, kind: NativeKind, converter: ClassConverter) {
        self.converters.register(kind, converter);
    }

    fn encode(&self, value: &Value, options: &EncodeOptions) -> Result<Vec<u8>, LiteralError> {
        let json = self.to_json(value)?;
        if options.indent {
            serde_json::to_vec_pretty(&json).map_err(Into::into)
        } else {
            serde_json::to_vec(&json).map_err(Into::into)
        }
    }

    fn parse(&self, bytes: &[u8]) -> Result<Value, LiteralError> {
        let json: JsonValue = serde_json::from_slice(bytes)?;
        Ok(from_json(json))
    }
}
