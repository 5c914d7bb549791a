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

//! Call envelopes.

use crate::value::{Dict, Value};

/// The four fields identifying a remote method invocation.
///
/// Envelopes are immutable once built. The field order
/// `(object_id, method, args, kwargs)` is part of the wire contract.
///
/// # Examples
///
/// ```rust
/// use pyrowire::protocol::CallEnvelope;
/// use pyrowire::value::{Dict, Value};
///
/// let call = CallEnvelope::new("obj-123", "greet", vec![Value::from("world")], Dict::new());
/// assert_eq!(call.object_id(), "obj-123");
/// assert_eq!(call.method(), "greet");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CallEnvelope {
    object_id: String,
    method: String,
    args: Vec<Value>,
    kwargs: Dict,
}

impl CallEnvelope {
    /// Builds an envelope.
    pub fn new(
        object_id: impl Into<String>,
        method: impl Into<String>,
        args: Vec<Value>,
        kwargs: Dict,
    ) -> Self {
        Self {
            object_id: object_id.into(),
            method: method.into(),
            args,
            kwargs,
        }
    }

    /// The id of the object the call is addressed to.
    #[must_use]
    pub fn object_id(&self) -> &str {
        &self.object_id
    }

    /// The method name.
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Positional arguments, in order.
    #[must_use]
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Keyword arguments.
    #[must_use]
    pub fn kwargs(&self) -> &Dict {
        &self.kwargs
    }
}
