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

//! Generic literal codecs.
//!
//! A [`LiteralCodec`] turns a [`Value`] tree into bytes and back. It knows
//! nothing about the RPC protocol: protocol-native values are written through
//! class converters that the owning serializer registers once, at
//! construction, and tagged dictionaries are turned back into native values
//! by [`materialize`] with a resolver callback.
//!
//! Two engines ship with the crate:
//!
//! - [`SerpentCodec`]: the Python-literal format used by Pyro5 (default)
//! - [`JsonCodec`]: plain JSON via `serde_json` (feature `json`)
//!
//! # Examples
//!
//! ```rust
//! use pyrowire::codec::{EncodeOptions, LiteralCodec, SerpentCodec};
//! use pyrowire::value::Value;
//!
//! let codec = SerpentCodec::new();
//! let value = Value::Tuple(vec![Value::from(1), Value::from("two")]);
//!
//! let bytes = codec.encode(&value, &EncodeOptions::default())?;
//! assert_eq!(codec.parse(&bytes)?, value);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
#[cfg(feature = "json")]
mod json;
mod materialize;
pub mod serpent;
mod version;

pub use error::{CodecError, LiteralError};
#[cfg(feature = "json")]
pub use json::JsonCodec;
pub use materialize::materialize;
pub use serpent::SerpentCodec;
pub use version::CodecVersion;

use crate::value::{Dict, NativeKind, Value};
use std::collections::HashMap;

/// Layout knobs honored by codecs when encoding.
///
/// Both are cosmetic or compatibility choices; neither changes what a payload
/// means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Pretty-print the output.
    pub indent: bool,
    /// Write native set syntax instead of falling back to a tuple.
    pub set_literals: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            indent: false,
            set_literals: true,
        }
    }
}

/// Converts a protocol-native value into its tagged dictionary.
///
/// Returns `None` when handed a value of another kind.
pub type ClassConverter = fn(&Value) -> Option<Dict>;

/// The class converters registered with a codec, one per [`NativeKind`].
#[derive(Clone, Default)]
pub struct ClassConverters {
    converters: HashMap<NativeKind, ClassConverter>,
}

impl std::fmt::Debug for ClassConverters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.converters.keys()).finish()
    }
}

impl ClassConverters {
    /// Creates an empty set of converters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `converter` for `kind`, replacing any earlier one.
    pub fn register(&mut self, kind: NativeKind, converter: ClassConverter) {
        self.converters.insert(kind, converter);
    }

    /// Returns `true` if a converter is registered for `kind`.
    #[must_use]
    pub fn contains(&self, kind: NativeKind) -> bool {
        self.converters.contains_key(&kind)
    }

    /// Converts a protocol-native value into its tagged dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`LiteralError::NoConverter`] if nothing is registered for the
    /// value's kind, or if the registered converter declines the value.
    pub fn convert(&self, kind: NativeKind, value: &Value) -> Result<Dict, LiteralError> {
        self.converters
            .get(&kind)
            .and_then(|convert| convert(value))
            .ok_or(LiteralError::NoConverter { kind })
    }
}

/// A pluggable engine for the generic literal format.
///
/// Implementations must be thread-safe; a constructed codec is shared by
/// every caller of the serializer that owns it.
pub trait LiteralCodec: Send + Sync + 'static {
    /// A stable name for the engine, used in diagnostics.
    fn name(&self) -> &'static str;

    /// The version of the engine, checked against the serializer's minimum.
    fn version(&self) -> CodecVersion;

    /// Registers the converter used to write values of `kind`.
    ///
    /// Called once per protocol-native kind while the owning serializer is
    /// being constructed.
    fn register_class_converter(&mut self, kind: NativeKind, converter: ClassConverter);

    /// Encodes `value`.
    ///
    /// # Errors
    ///
    /// Returns a [`LiteralError`] if the value cannot be represented.
    fn encode(&self, value: &Value, options: &EncodeOptions) -> Result<Vec<u8>, LiteralError>;

    /// Parses `bytes` into a plain value tree.
    ///
    /// The result contains no protocol-native values; tagged dictionaries are
    /// left as dictionaries for [`materialize`].
    ///
    /// # Errors
    ///
    /// Returns a [`LiteralError`] if the input is malformed.
    fn parse(&self, bytes: &[u8]) -> Result<Value, LiteralError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pickle::{ClassPickler, ReferencePickler};
    use crate::protocol::RemoteObjectReference;

    fn reference_to_dict(value: &Value) -> Option<Dict> {
        match value {
            Value::Reference(r) => Some(ReferencePickler.to_dict(r)),
            _ => None,
        }
    }

    #[test]
    fn test_converters_dispatch_by_kind() {
        let mut converters = ClassConverters::new();
        converters.register(NativeKind::Reference, reference_to_dict);
        assert!(converters.contains(NativeKind::Reference));
        assert!(!converters.contains(NativeKind::Proxy));

        let value = Value::Reference(RemoteObjectReference::new("PYRO", "o", "h", 1).unwrap());
        assert!(converters.convert(NativeKind::Reference, &value).is_ok());
        assert!(matches!(
            converters.convert(NativeKind::Proxy, &value),
            Err(LiteralError::NoConverter {
                kind: NativeKind::Proxy
            })
        ));
    }

    #[test]
    fn test_converter_declining_value() {
        let mut converters = ClassConverters::new();
        converters.register(NativeKind::Reference, reference_to_dict);
        assert!(
            converters
                .convert(NativeKind::Reference, &Value::None)
                .is_err()
        );
    }
}
