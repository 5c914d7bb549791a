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

//! Pickler for remote object references.

use super::{ClassPickler, PickleError, STATE_KEY, expect_str, tagged, take_state};
use crate::protocol::{RemoteObjectReference, UriParseError};
use crate::value::{Dict, Value};

/// Converts [`RemoteObjectReference`] to and from `Pyro5.core.URI` dictionaries.
///
/// The wire form is the Pyro5 URI state tuple
/// `(protocol, object_id, sockname, host, port)`. The unix socket slot is
/// always written as `None`; references carrying a socket name are rejected
/// on read.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferencePickler;

impl ReferencePickler {
    /// The class tag of a pickled reference.
    pub const CLASS_NAME: &'static str = "Pyro5.core.URI";
}

impl ClassPickler for ReferencePickler {
    type Target = RemoteObjectReference;

    fn to_dict(&self, target: &RemoteObjectReference) -> Dict {
        let mut dict = tagged(Self::CLASS_NAME);
        dict.insert(
            STATE_KEY.to_string(),
            Value::Tuple(vec![
                Value::from(target.protocol()),
                Value::from(target.object_id()),
                Value::None,
                Value::from(target.host()),
                Value::from(target.port()),
            ]),
        );
        dict
    }

    fn from_dict(&self, mut dict: Dict) -> Result<RemoteObjectReference, PickleError> {
        const CLASS: &str = ReferencePickler::CLASS_NAME;

        let mut state = take_state(CLASS, &mut dict, 5)?.into_iter();
        let mut next = || state.next().unwrap_or_default();

        let protocol = expect_str(CLASS, "state.protocol", next())?;
        let object_id = expect_str(CLASS, "state.object", next())?;
        match next() {
            Value::None => {}
            other => {
                return Err(PickleError::InvalidField {
                    class: CLASS,
                    field: "state.sockname",
                    expected: "None",
                    found: other.to_string(),
                });
            }
        }
        let host = expect_str(CLASS, "state.host", next())?;
        let port = match next() {
            Value::Int(port) => u16::try_from(port).map_err(|_| PickleError::InvalidField {
                class: CLASS,
                field: "state.port",
                expected: "an integer in 0..=65535",
                found: port.to_string(),
            })?,
            other => {
                return Err(PickleError::InvalidField {
                    class: CLASS,
                    field: "state.port",
                    expected: "an integer in 0..=65535",
                    found: other.type_name().to_string(),
                });
            }
        };

        RemoteObjectReference::new(protocol, object_id, host, port).map_err(field_error)
    }
}

fn field_error(error: UriParseError) -> PickleError {
    let (field, expected) = match &error {
        UriParseError::UnsupportedProtocol { .. } => {
            ("state.protocol", "PYRO optionally followed by letters")
        }
        UriParseError::InvalidObjectId { .. } => {
            ("state.object", "a non-empty id without whitespace")
        }
        _ => (
            "state.host",
            "a non-empty host without whitespace, '@', '[' or ']'",
        ),
    };
    PickleError::InvalidField {
        class: ReferencePickler::CLASS_NAME,
        field,
        expected,
        found: error.to_string(),
    }
}
