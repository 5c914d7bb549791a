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

//! Class picklers and the class resolver.
//!
//! A pickler converts one protocol-native type to and from its *tagged
//! dictionary* wire form: an ordinary mapping that carries the reserved
//! [`CLASS_KEY`] (and, for exceptions, [`EXCEPTION_KEY`]). Because the wire
//! format only knows maps, sequences and primitives, this is how class identity
//! survives the trip between two unrelated type systems.
//!
//! | Pickler              | Class tag              | Restores                 |
//! |----------------------|------------------------|--------------------------|
//! | [`ReferencePickler`] | `Pyro5.core.URI`       | [`RemoteObjectReference`]|
//! | [`ProxyPickler`]     | `Pyro5.client.Proxy`   | [`RemoteProxyHandle`]    |
//! | [`ExceptionPickler`] | any, with the flag set | [`RemoteException`]      |
//!
//! [`ClassResolver`] picks the pickler for an incoming tagged dictionary.
//!
//! # Examples
//!
//! ```rust
//! use pyrowire::pickle::{ClassPickler, ReferencePickler};
//! use pyrowire::protocol::RemoteObjectReference;
//!
//! let uri = RemoteObjectReference::new("PYRO", "obj", "localhost", 9090)?;
//! let dict = ReferencePickler.to_dict(&uri);
//! assert_eq!(ReferencePickler.from_dict(dict)?, uri);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [`RemoteObjectReference`]: crate::protocol::RemoteObjectReference
//! [`RemoteProxyHandle`]: crate::protocol::RemoteProxyHandle
//! [`RemoteException`]: crate::protocol::RemoteException

mod error;
mod exception;
mod proxy;
mod reference;
mod resolver;

pub use error::PickleError;
pub use exception::ExceptionPickler;
pub use proxy::ProxyPickler;
pub use reference::ReferencePickler;
pub use resolver::{ClassResolver, Resolution};

use crate::value::{Dict, Value};

/// Reserved key holding the fully qualified class name.
pub const CLASS_KEY: &str = "__class__";

/// Reserved key holding the exception flag.
pub const EXCEPTION_KEY: &str = "__exception__";

/// Key holding the pickled state of references and proxies.
pub const STATE_KEY: &str = "state";

/// A bidirectional converter between a protocol-native type and its tagged
/// dictionary form.
///
/// Picklers hold no state and may be shared freely between threads.
pub trait ClassPickler: Send + Sync {
    /// The protocol-native type this pickler handles.
    type Target;

    /// Erases `target` into a tagged dictionary.
    fn to_dict(&self, target: &Self::Target) -> Dict;

    /// Restores the native value from a tagged dictionary.
    ///
    /// # Errors
    ///
    /// Returns a [`PickleError`] naming the field when a required field is
    /// absent or has the wrong shape.
    fn from_dict(&self, dict: Dict) -> Result<Self::Target, PickleError>;
}

/// Creates a dictionary holding only the class tag.
pub(crate) fn tagged(class_name: &str) -> Dict {
    let mut dict = Dict::new();
    dict.insert(CLASS_KEY.to_string(), Value::from(class_name));
    dict
}

/// Takes the `state` sequence out of a tagged dictionary.
pub(crate) fn take_state(
    class: &'static str,
    dict: &mut Dict,
    min_len: usize,
) -> Result<Vec<Value>, PickleError> {
    let state = dict
        .shift_remove(STATE_KEY)
        .ok_or(PickleError::MissingField {
            class,
            field: STATE_KEY,
        })?;
    let items = state.into_sequence().map_err(|other| PickleError::InvalidField {
        class,
        field: STATE_KEY,
        expected: "a tuple or list",
        found: other.type_name().to_string(),
    })?;
    if items.len() < min_len {
        return Err(PickleError::InvalidField {
            class,
            field: STATE_KEY,
            expected: "a sequence with enough elements",
            found: format!("{} elements", items.len()),
        });
    }
    Ok(items)
}

/// Requires `value` to be a string.
pub(crate) fn expect_str(
    class: &'static str,
    field: &'static str,
    value: Value,
) -> Result<String, PickleError> {
    match value {
        Value::Str(s) => Ok(s),
        other => Err(PickleError::InvalidField {
            class,
            field,
            expected: "a string",
            found: other.type_name().to_string(),
        }),
    }
}
