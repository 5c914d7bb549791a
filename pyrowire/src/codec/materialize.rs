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

//! Materialization of parsed value trees.

use crate::pickle::{CLASS_KEY, PickleError, Resolution};
use crate::value::{Dict, Value};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

/// Rebuilds native values inside a freshly parsed tree.
///
/// The tree is walked bottom-up, so a dictionary's contents are materialized
/// before the dictionary itself. Every dictionary is first checked for the
/// built-in shapes shared by the wire formats (base64 byte blobs and
/// non-finite floats); dictionaries carrying a class tag are then offered to
/// `resolve`. Unrecognized dictionaries stay plain mappings.
///
/// # Errors
///
/// Returns the first [`PickleError`] reported by `resolve`.
///
/// # Examples
///
/// ```rust
/// use pyrowire::codec::materialize;
/// use pyrowire::pickle::ClassResolver;
/// use pyrowire::value::{Dict, Value};
///
/// let mut blob = Dict::new();
/// blob.insert("data".to_string(), Value::from("aGVsbG8="));
/// blob.insert("encoding".to_string(), Value::from("base64"));
///
/// let value = materialize(Value::List(vec![Value::Dict(blob)]), &|d| ClassResolver.resolve(d))?;
/// assert_eq!(value, Value::List(vec![Value::Bytes(b"hello".to_vec())]));
/// # Ok::<(), pyrowire::pickle::PickleError>(())
/// ```
pub fn materialize<F>(value: Value, resolve: &F) -> Result<Value, PickleError>
where
    F: Fn(Dict) -> Result<Resolution, PickleError>,
{
    match value {
        Value::List(items) => Ok(Value::List(materialize_all(items, resolve)?)),
        Value::Tuple(items) => Ok(Value::Tuple(materialize_all(items, resolve)?)),
        Value::Set(items) => Ok(Value::Set(materialize_all(items, resolve)?)),
        Value::Dict(dict) => {
            let dict = dict
                .into_iter()
                .map(|(key, value)| Ok((key, materialize(value, resolve)?)))
                .collect::<Result<Dict, PickleError>>()?;
            match decode_builtin(dict) {
                Ok(value) => Ok(value),
                Err(dict) if dict.contains_key(CLASS_KEY) => Ok(resolve(dict)?.into_value()),
                Err(dict) => Ok(Value::Dict(dict)),
            }
        }
        other => Ok(other),
    }
}

fn materialize_all<F>(items: Vec<Value>, resolve: &F) -> Result<Vec<Value>, PickleError>
where
    F: Fn(Dict) -> Result<Resolution, PickleError>,
{
    items
        .into_iter()
        .map(|item| materialize(item, resolve))
        .collect()
}

/// Builds the dictionary used on the wire for a byte blob.
pub(crate) fn bytes_to_dict(bytes: &[u8]) -> Dict {
    let mut dict = Dict::new();
    dict.insert("data".to_string(), Value::Str(BASE64.encode(bytes)));
    dict.insert("encoding".to_string(), Value::from("base64"));
    dict
}

/// Builds the dictionary used on the wire for a NaN.
pub(crate) fn nan_to_dict() -> Dict {
    let mut dict = Dict::new();
    dict.insert(CLASS_KEY.to_string(), Value::from("float"));
    dict.insert("value".to_string(), Value::from("nan"));
    dict
}

/// Recognizes the built-in dictionary shapes, handing the dictionary back
/// when it is not one of them.
fn decode_builtin(dict: Dict) -> Result<Value, Dict> {
    if dict.len() != 2 {
        return Err(dict);
    }

    if let (Some(Value::Str(data)), Some(Value::Str(encoding))) =
        (dict.get("data"), dict.get("encoding"))
    {
        if encoding == "base64" {
            return match BASE64.decode(data) {
                Ok(bytes) => Ok(Value::Bytes(bytes)),
                Err(_) => Err(dict),
            };
        }
    }

    if let (Some(Value::Str(class)), Some(Value::Str(text))) =
        (dict.get(CLASS_KEY), dict.get("value"))
    {
        if class == "float" {
            let value = match text.as_str() {
                "nan" => f64::NAN,
                "inf" => f64::INFINITY,
                "-inf" => f64::NEG_INFINITY,
                _ => return Err(dict),
            };
            return Ok(Value::Float(value));
        }
    }

    Err(dict)
}
