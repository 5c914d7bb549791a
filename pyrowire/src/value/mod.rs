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

//! The generic value tree carried on the wire.
//!
//! [`Value`] plays two roles. Freshly parsed payloads only ever contain the
//! plain literal variants (`None` through `Dict`); after materialization the
//! protocol-native variants ([`Value::Reference`], [`Value::Proxy`] and
//! [`Value::Exception`]) appear wherever a tagged dictionary was recognized.
//!
//! # Examples
//!
//! ```rust
//! use pyrowire::value::{Dict, Value};
//!
//! let mut kwargs = Dict::new();
//! kwargs.insert("greeting".to_string(), Value::from("hello"));
//!
//! let args = Value::Tuple(vec![Value::from(42), Value::from(true)]);
//! assert_eq!(args.as_sequence().map(<[Value]>::len), Some(2));
//! assert_eq!(kwargs["greeting"].as_str(), Some("hello"));
//! ```

pub(crate) mod display;

use crate::protocol::{RemoteException, RemoteObjectReference, RemoteProxyHandle};

/// Insertion-ordered string-keyed mapping.
pub type Dict = indexmap::IndexMap<String, Value>;

/// A nestable, dynamically-typed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The null value.
    #[default]
    None,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A double precision float.
    Float(f64),
    /// A UTF-8 string.
    Str(String),
    /// An opaque byte blob.
    Bytes(Vec<u8>),
    /// A mutable sequence.
    List(Vec<Value>),
    /// An immutable sequence.
    Tuple(Vec<Value>),
    /// An unordered collection. Element order is preserved as given.
    Set(Vec<Value>),
    /// A string-keyed mapping, possibly tagged with a class name.
    Dict(Dict),
    /// A remote object reference.
    Reference(RemoteObjectReference),
    /// A proxy for a remote object.
    Proxy(RemoteProxyHandle),
    /// An exception raised on the remote side.
    Exception(RemoteException),
}

/// The protocol-native value kinds that need a class converter to be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeKind {
    /// [`Value::Reference`]
    Reference,
    /// [`Value::Proxy`]
    Proxy,
    /// [`Value::Exception`]
    Exception,
}

impl NativeKind {
    /// All native kinds, in registration order.
    pub const ALL: [NativeKind; 3] = [Self::Reference, Self::Proxy, Self::Exception];
}

impl Value {
    /// Returns the native kind of this value, if it is a protocol-native object.
    #[must_use]
    pub fn native_kind(&self) -> Option<NativeKind> {
        match self {
            Self::Reference(_) => Some(NativeKind::Reference),
            Self::Proxy(_) => Some(NativeKind::Proxy),
            Self::Exception(_) => Some(NativeKind::Exception),
            _ => None,
        }
    }

    /// Returns a short name for the variant, used in error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::Bytes(_) => "bytes",
            Self::List(_) => "list",
            Self::Tuple(_) => "tuple",
            Self::Set(_) => "set",
            Self::Dict(_) => "dict",
            Self::Reference(_) => "reference",
            Self::Proxy(_) => "proxy",
            Self::Exception(_) => "exception",
        }
    }

    /// Returns `true` for [`Value::None`].
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the boolean, if this is a [`Value::Bool`].
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer, if this is a [`Value::Int`].
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a [`Value::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the bytes, if this is a [`Value::Bytes`].
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the elements of a list, tuple or set.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) | Self::Tuple(items) | Self::Set(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the mapping, if this is a [`Value::Dict`].
    #[must_use]
    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Self::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Consumes the value and returns the mapping, if this is a [`Value::Dict`].
    pub fn into_dict(self) -> Result<Dict, Self> {
        match self {
            Self::Dict(d) => Ok(d),
            other => Err(other),
        }
    }

    /// Consumes the value and returns the elements of a list, tuple or set.
    pub fn into_sequence(self) -> Result<Vec<Value>, Self> {
        match self {
            Self::List(items) | Self::Tuple(items) | Self::Set(items) => Ok(items),
            other => Err(other),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl From<Dict> for Value {
    fn from(value: Dict) -> Self {
        Self::Dict(value)
    }
}

impl From<RemoteObjectReference> for Value {
    fn from(value: RemoteObjectReference) -> Self {
        Self::Reference(value)
    }
}

impl From<RemoteProxyHandle> for Value {
    fn from(value: RemoteProxyHandle) -> Self {
        Self::Proxy(value)
    }
}

impl From<RemoteException> for Value {
    fn from(value: RemoteException) -> Self {
        Self::Exception(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}
