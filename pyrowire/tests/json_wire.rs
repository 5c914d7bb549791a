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

//! Integration tests for the JSON wire format.

#![cfg(feature = "json")]

use pyrowire::protocol::{RemoteException, RemoteObjectReference};
use pyrowire::serialization::{JsonSerializer, Serializer, get_for};
use pyrowire::value::{Dict, Value};

/// Test the Pyro5 JSON call shape.
#[test]
fn test_call_shape() {
    let serializer = get_for(3).ok().expect("json");
    let mut kwargs = Dict::new();
    kwargs.insert("lang".into(), Value::from("en"));

    let bytes = serializer
        .serialize_call("obj-123", "greet", &[Value::from("world")], &kwargs)
        .unwrap();
    assert_eq!(
        std::str::from_utf8(&bytes).unwrap(),
        r#"{"object":"obj-123","method":"greet","params":["world"],"kwargs":{"lang":"en"}}"#
    );
}

/// Test that a reference is written as the Pyro5 URI state.
#[test]
fn test_reference_wire_form() {
    let serializer = JsonSerializer::default();
    let reference = RemoteObjectReference::new("PYRO", "obj", "localhost", 9090).unwrap();

    let bytes = serializer.serialize_data(&Value::from(reference)).unwrap();
    assert_eq!(
        std::str::from_utf8(&bytes).unwrap(),
        r#"{"__class__":"Pyro5.core.URI","state":["PYRO","obj",null,"localhost",9090]}"#
    );
}

/// Test that an exception sent by a Pyro5 peer is reconstructed.
#[test]
fn test_peer_exception() {
    let payload = br#"{"__class__":"SomeUnknownRemoteError","__exception__":true,"args":["boom"],"attributes":{}}"#;

    let value = JsonSerializer::default().deserialize_data(payload).unwrap();
    assert_eq!(
        value,
        Value::Exception(RemoteException::new("SomeUnknownRemoteError", "boom"))
    );
}

/// Test that an exception flag other than `true` does not trigger reconstruction.
#[test]
fn test_false_exception_flag_is_plain_data() {
    let payload = br#"{"__class__":"x.Y","__exception__":false}"#;

    let value = JsonSerializer::default().deserialize_data(payload).unwrap();
    assert!(matches!(value, Value::Dict(ref d) if d.len() == 2));
}

/// Test that serpent and JSON agree on decoded values.
#[test]
fn test_formats_agree() {
    let serpent = get_for(1).ok().expect("serpent");
    let json = get_for(3).ok().expect("json");

    let mut dict = Dict::new();
    dict.insert("blob".into(), Value::from(b"\xff\x00".to_vec()));
    dict.insert("items".into(), Value::List(vec![Value::from(1.5), Value::None]));
    let value = Value::Dict(dict);

    let from_serpent = serpent
        .deserialize_data(&serpent.serialize_data(&value).unwrap())
        .unwrap();
    let from_json = json
        .deserialize_data(&json.serialize_data(&value).unwrap())
        .unwrap();
    assert_eq!(from_serpent, value);
    assert_eq!(from_json, value);
}
