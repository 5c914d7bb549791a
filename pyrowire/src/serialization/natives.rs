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

//! Wiring between the literal codecs and the class picklers.

use crate::codec::{ClassConverter, LiteralCodec, materialize};
use crate::pickle::{ClassPickler, ClassResolver, ExceptionPickler, ProxyPickler, ReferencePickler};
use crate::serialization::DeserializationError;
use crate::value::{Dict, NativeKind, Value};

fn reference_to_dict(value: &Value) -> Option<Dict> {
    match value {
        Value::Reference(reference) => Some(ReferencePickler.to_dict(reference)),
        _ => None,
    }
}

fn proxy_to_dict(value: &Value) -> Option<Dict> {
    match value {
        Value::Proxy(proxy) => Some(ProxyPickler.to_dict(proxy)),
        _ => None,
    }
}

fn exception_to_dict(value: &Value) -> Option<Dict> {
    match value {
        Value::Exception(exception) => Some(ExceptionPickler.to_dict(exception)),
        _ => None,
    }
}

/// Registers a class converter for every protocol-native kind.
pub(crate) fn register_class_converters<C: LiteralCodec>(codec: &mut C) {
    for kind in NativeKind::ALL {
        let converter: ClassConverter = match kind {
            NativeKind::Reference => reference_to_dict,
            NativeKind::Proxy => proxy_to_dict,
            NativeKind::Exception => exception_to_dict,
        };
        codec.register_class_converter(kind, converter);
    }
}

/// Parses `bytes` with `codec` and restores protocol objects in the result.
pub(crate) fn decode<C: LiteralCodec>(codec: &C, bytes: &[u8]) -> Result<Value, DeserializationError> {
    let tree = codec.parse(bytes)?;
    let resolver = ClassResolver;
    Ok(materialize(tree, &|dict| resolver.resolve(dict))?)
}
