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

//! Dispatch of tagged dictionaries to picklers.

use super::{
    CLASS_KEY, ClassPickler, EXCEPTION_KEY, ExceptionPickler, PickleError, ProxyPickler,
    ReferencePickler,
};
use crate::value::{Dict, Value};
use tracing::debug;

/// Outcome of resolving a tagged dictionary.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A pickler recognized the dictionary and restored this value.
    Resolved(Value),
    /// No pickler claims the dictionary; it is handed back untouched.
    Unrecognized(Dict),
}

impl Resolution {
    /// Returns the restored value, or the original dictionary as a plain value.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Resolved(value) => value,
            Self::Unrecognized(dict) => Value::Dict(dict),
        }
    }

    /// Returns `true` if a pickler restored the value.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

/// Picks the pickler for a tagged dictionary.
///
/// Resolution order:
///
/// 1. `__exception__` set to `True` always goes to the [`ExceptionPickler`],
///    whatever the class tag says.
/// 2. Otherwise the `__class__` tag is matched against the recognized
///    protocol classes ([`ReferencePickler::CLASS_NAME`],
///    [`ProxyPickler::CLASS_NAME`]).
/// 3. Anything else is [`Resolution::Unrecognized`].
///
/// The resolver is a pure decision table and keeps no state between calls.
///
/// # Examples
///
/// ```rust
/// use pyrowire::pickle::{ClassResolver, Resolution, CLASS_KEY};
/// use pyrowire::value::{Dict, Value};
///
/// let mut dict = Dict::new();
/// dict.insert(CLASS_KEY.to_string(), Value::from("completely.unknown.Type"));
///
/// let resolution = ClassResolver.resolve(dict.clone())?;
/// assert_eq!(resolution, Resolution::Unrecognized(dict));
/// # Ok::<(), pyrowire::pickle::PickleError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassResolver;

impl ClassResolver {
    /// Resolves `dict` into a protocol-native value.
    ///
    /// # Errors
    ///
    /// Returns a [`PickleError`] when the dictionary names a recognized class
    /// but its fields are missing or malformed. Unknown class tags are not an
    /// error.
    pub fn resolve(&self, dict: Dict) -> Result<Resolution, PickleError> {
        if matches!(dict.get(EXCEPTION_KEY), Some(Value::Bool(true))) {
            let exception = ExceptionPickler.from_dict(dict)?;
            return Ok(Resolution::Resolved(Value::Exception(exception)));
        }

        let class_name = match dict.get(CLASS_KEY) {
            Some(Value::Str(name)) => name.as_str(),
            _ => return Ok(Resolution::Unrecognized(dict)),
        };

        match class_name {
            ReferencePickler::CLASS_NAME => {
                let reference = ReferencePickler.from_dict(dict)?;
                Ok(Resolution::Resolved(Value::Reference(reference)))
            }
            ProxyPickler::CLASS_NAME => {
                let proxy = ProxyPickler.from_dict(dict)?;
                Ok(Resolution::Resolved(Value::Proxy(proxy)))
            }
            _ => {
                debug!(class = %class_name, "unrecognized class tag, passing mapping through");
                Ok(Resolution::Unrecognized(dict))
            }
        }
    }
}
