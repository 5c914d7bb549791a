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

//! Integration tests for the serpent wire format.
//!
//! These tests drive the public serializer API end to end: calls and results
//! are encoded, decoded and compared, and hand-written payloads stand in for
//! what a Pyro5 peer sends.

use pyrowire::protocol::{
    CallEnvelope, RemoteException, RemoteObjectReference, RemoteProxyHandle,
};
use pyrowire::serialization::{Serializer, SerializerConfig, SerpentSerializer};
use pyrowire::value::{Dict, Value};

fn serializer() -> SerpentSerializer {
    SerpentSerializer::new(SerializerConfig::default())
}

/// Test that a call envelope keeps its order through a round trip.
#[test]
fn test_call_envelope_roundtrip() {
    let serializer = serializer();
    let bytes = serializer
        .serialize_call("obj-123", "greet", &[Value::from("world")], &Dict::new())
        .unwrap();

    let call = serializer.deserialize_call(&bytes).unwrap();
    assert_eq!(call.object_id(), "obj-123");
    assert_eq!(call.method(), "greet");
    assert_eq!(call.args(), &[Value::from("world")]);
    assert!(call.kwargs().is_empty());
}

/// Test that the call is written as a positional tuple.
#[test]
fn test_call_decodes_as_plain_tuple() {
    let serializer = serializer();
    let bytes = serializer
        .serialize_call("obj-123", "greet", &[Value::from("world")], &Dict::new())
        .unwrap();

    let value = serializer.deserialize_data(&bytes).unwrap();
    assert_eq!(
        value,
        Value::Tuple(vec![
            Value::from("obj-123"),
            Value::from("greet"),
            Value::Tuple(vec![Value::from("world")]),
            Value::Dict(Dict::new()),
        ])
    );
}

/// Test that an exception with an unknown class is still reconstructed.
#[test]
fn test_unknown_remote_exception() {
    let payload = b"# serpent utf-8 python3.2\n\
        {'__class__':'SomeUnknownRemoteError','__exception__':True,'args':('boom',),'attributes':{}}";

    let value = serializer().deserialize_data(payload).unwrap();
    let Value::Exception(exception) = value else {
        panic!("expected an exception, got {value:?}");
    };
    assert_eq!(exception.class_name(), "SomeUnknownRemoteError");
    assert_eq!(exception.message(), "boom");
    assert!(exception.attributes().is_empty());
    assert_eq!(exception.to_string(), "SomeUnknownRemoteError: boom");
}

/// Test that the exception flag wins over a recognized class tag.
#[test]
fn test_exception_flag_wins_over_class_tag() {
    let payload = b"{'__class__':'Pyro5.core.URI','__exception__':True,'args':('odd',)}";

    let value = serializer().deserialize_data(payload).unwrap();
    assert!(matches!(value, Value::Exception(ref e) if e.class_name() == "Pyro5.core.URI"));
}

/// Test that a traceback sent by the peer is kept separately from the attributes.
#[test]
fn test_remote_traceback() {
    let payload = b"{'__class__':'builtins.ZeroDivisionError','__exception__':True,\
        'args':('division by zero',),\
        'attributes':{'_pyroTraceback':['Traceback (most recent call last):\\n','ZeroDivisionError\\n'],'code':7}}";

    let Value::Exception(exception) = serializer().deserialize_data(payload).unwrap() else {
        panic!("expected an exception");
    };
    assert_eq!(
        exception.traceback(),
        Some("Traceback (most recent call last):\nZeroDivisionError\n")
    );
    assert_eq!(exception.attributes().len(), 1);
    assert_eq!(exception.attributes()["code"], Value::from(7));
}

/// Test that an unrecognized class tag passes through as a plain mapping.
#[test]
fn test_unknown_class_passes_through() {
    let payload = b"{'__class__':'completely.unknown.Type','field':[1,2]}";

    let value = serializer().deserialize_data(payload).unwrap();
    let dict = value.as_dict().expect("plain dict");
    assert_eq!(dict["__class__"], Value::from("completely.unknown.Type"));
    assert_eq!(dict["field"], Value::List(vec![Value::from(1), Value::from(2)]));
}

/// Test that protocol objects nested in containers are restored in place.
#[test]
fn test_nested_protocol_objects() {
    let serializer = serializer();
    let reference: RemoteObjectReference = "PYRO:inventory@[::1]:9090".parse().unwrap();

    let mut attributes = Dict::new();
    attributes.insert("retry".into(), Value::from(false));
    let exception = RemoteException::new("app.errors.OutOfStock", "sku 42")
        .with_attributes(attributes);

    let mut result = Dict::new();
    result.insert("owner".into(), Value::from(RemoteProxyHandle::new(reference.clone())));
    result.insert(
        "history".into(),
        Value::List(vec![Value::from(reference), Value::from(exception)]),
    );
    let value = Value::Dict(result);

    let bytes = serializer.serialize_data(&value).unwrap();
    assert_eq!(serializer.deserialize_data(&bytes).unwrap(), value);
}

/// Test that a connected proxy is sent without its connection state.
#[test]
fn test_proxy_arrives_disconnected() {
    let serializer = serializer();
    let mut proxy = RemoteProxyHandle::new(RemoteObjectReference::new(
        "PYRO", "greeter", "localhost", 9090,
    ).unwrap());
    proxy.mark_connected(Default::default());
    assert!(proxy.is_connected());

    let bytes = serializer.serialize_data(&Value::from(proxy.clone())).unwrap();
    let Value::Proxy(restored) = serializer.deserialize_data(&bytes).unwrap() else {
        panic!("expected a proxy");
    };
    assert_eq!(restored.reference(), proxy.reference());
    assert!(!restored.is_connected());
}

/// Test that a proxy sent by a Pyro5 peer restores from its six-slot state.
#[test]
fn test_proxy_from_peer_state() {
    let payload = b"{'__class__':'Pyro5.client.Proxy','state':('PYRONAME:inventory@[::1]:9090',('ping',),('get',),(),None,'serpent')}";

    let Value::Proxy(proxy) = serializer().deserialize_data(payload).unwrap() else {
        panic!("expected a proxy");
    };
    assert_eq!(proxy.reference().protocol(), "PYRONAME");
    assert_eq!(proxy.reference().host(), "::1");
    assert!(!proxy.is_connected());
}

/// Test that every buildable reference survives a proxy round trip unchanged.
#[test]
fn test_proxy_keeps_normalized_reference() {
    let serializer = serializer();
    for (protocol, host) in [("pyro", "Host.Example"), ("PyroMeta", "fe80::1%eth0")] {
        let reference = RemoteObjectReference::new(protocol, "obj@ns", host, 0).unwrap();
        let bytes = serializer
            .serialize_data(&Value::from(RemoteProxyHandle::new(reference.clone())))
            .unwrap();
        let Value::Proxy(restored) = serializer.deserialize_data(&bytes).unwrap() else {
            panic!("expected a proxy");
        };
        assert_eq!(restored.reference(), &reference);
    }
    assert!(RemoteObjectReference::new("tcp", "obj", "host", 1).is_err());
    assert!(RemoteObjectReference::new("PYRO", "obj", "", 1).is_err());
}

/// Test that malformed reference state is reported with the field name.
#[test]
fn test_malformed_reference_names_field() {
    let payload = b"{'__class__':'Pyro5.core.URI','state':('PYRO','obj',None,'host','not-a-port')}";

    let error = serializer().deserialize_data(payload).unwrap_err();
    assert!(error.to_string().contains("state.port"), "{error}");
}

/// Test that byte blobs and special floats survive a round trip.
#[test]
fn test_builtin_shapes() {
    let serializer = serializer();
    let value = Value::Tuple(vec![
        Value::from(vec![0u8, 159, 146, 150]),
        Value::from(f64::INFINITY),
        Value::from(f64::NEG_INFINITY),
    ]);
    let bytes = serializer.serialize_data(&value).unwrap();
    assert_eq!(serializer.deserialize_data(&bytes).unwrap(), value);

    let bytes = serializer.serialize_data(&Value::from(f64::NAN)).unwrap();
    match serializer.deserialize_data(&bytes).unwrap() {
        Value::Float(f) => assert!(f.is_nan()),
        other => panic!("expected NaN, got {other:?}"),
    }
}

/// Test that indented output decodes to the same value.
#[test]
fn test_indented_output_decodes() {
    let serializer = SerpentSerializer::new(SerializerConfig::new().with_indent_output(true));
    let mut kwargs = Dict::new();
    kwargs.insert("tags".into(), Value::Set(vec![Value::from("a"), Value::from("b")]));
    let envelope = CallEnvelope::new("obj", "tag", vec![Value::from(1), Value::None], kwargs);

    let bytes = serializer.serialize_envelope(&envelope).unwrap();
    assert!(bytes.contains(&b'\n'));
    assert_eq!(serializer.deserialize_call(&bytes).unwrap(), envelope);
}

/// Test that payloads written by hand in Python style are accepted.
#[test]
fn test_python_style_payload() {
    let payload = br#"# serpent utf-8 python3.2
('obj-9', "lookup", ('sku-1', 3,), {'exact': True, 'limit': None,})
"#;
    let call = serializer().deserialize_call(payload).unwrap();
    assert_eq!(call.method(), "lookup");
    assert_eq!(call.args(), &[Value::from("sku-1"), Value::from(3)]);
    assert_eq!(call.kwargs()["exact"], Value::from(true));
}
