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

//! Pickler for proxies.

use super::{ClassPickler, PickleError, STATE_KEY, expect_str, tagged, take_state};
use crate::protocol::{RemoteObjectReference, RemoteProxyHandle};
use crate::value::{Dict, Value};

/// Converts [`RemoteProxyHandle`] to and from `Pyro5.client.Proxy` dictionaries.
///
/// The wire form is the Pyro5 proxy state tuple
/// `(uri, oneway, methods, attrs, handshake, serializer)`. Only the URI is
/// taken from the handle; every slot derived from a live connection is written
/// empty, and a restored proxy always starts disconnected.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProxyPickler;

impl ProxyPickler {
    /// The class tag of a pickled proxy.
    pub const CLASS_NAME: &'static str = "Pyro5.client.Proxy";
}

impl ClassPickler for ProxyPickler {
    type Target = RemoteProxyHandle;

    fn to_dict(&self, target: &RemoteProxyHandle) -> Dict {
        let mut dict = tagged(Self::CLASS_NAME);
        dict.insert(
            STATE_KEY.to_string(),
            Value::Tuple(vec![
                Value::from(target.reference().to_string()),
                Value::Tuple(Vec::new()),
                Value::Tuple(Vec::new()),
                Value::Tuple(Vec::new()),
                Value::None,
                Value::None,
            ]),
        );
        dict
    }

    fn from_dict(&self, mut dict: Dict) -> Result<RemoteProxyHandle, PickleError> {
        const CLASS: &str = ProxyPickler::CLASS_NAME;

        let state = take_state(CLASS, &mut dict, 1)?;
        let uri_text = expect_str(CLASS, "state.uri", state.into_iter().next().unwrap_or_default())?;
        let reference = uri_text
            .parse::<RemoteObjectReference>()
            .map_err(|e| PickleError::InvalidField {
                class: CLASS,
                field: "state.uri",
                expected: "a PYRO:object@host:port uri",
                found: e.to_string(),
            })?;

        Ok(RemoteProxyHandle::new(reference))
    }
}
