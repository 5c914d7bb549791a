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

//! Integration tests for the serializer registry.
//!
//! These tests cover lazy construction under contention, retry after a
//! failed construction, and the process-wide registry.

use pyrowire::codec::{CodecError, CodecVersion, EncodeOptions, LiteralCodec, SerpentCodec};
use pyrowire::serialization::{
    RegistryError, Serializer, SerializerConfig, SerializerRegistry, SerpentSerializer, get_for,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Test that concurrent first requests construct exactly one instance.
#[test]
fn test_concurrent_get_for_constructs_once() {
    const THREADS: usize = 16;
    init_tracing();

    let built = Arc::new(AtomicUsize::new(0));
    let registry = Arc::new(SerializerRegistry::new());
    let counter = Arc::clone(&built);
    registry.register_factory(1, move || {
        counter.fetch_add(1, Ordering::SeqCst);
        // Widen the window for racing threads.
        thread::sleep(Duration::from_millis(20));
        Ok(Arc::new(SerpentSerializer::default()))
    });

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry.get_for(1).ok().expect("serializer")
            })
        })
        .collect();

    let serializers: Vec<Arc<dyn Serializer>> =
        handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(built.load(Ordering::SeqCst), 1);
    for serializer in &serializers[1..] {
        assert!(Arc::ptr_eq(&serializers[0], serializer));
    }
}

/// Test that the global registry serves the built-in tags.
#[test]
fn test_global_registry_builtin_tags() {
    let serpent = get_for(1).ok().expect("serpent");
    assert_eq!(serpent.serializer_id(), 1);
    assert!(Arc::ptr_eq(&serpent, &get_for(1).ok().expect("serpent")));
    assert!(SerializerRegistry::global().is_initialized(1));

    #[cfg(feature = "json")]
    assert_eq!(get_for(3).ok().expect("json").serializer_id(), 3);
}

/// Test that an unknown tag is reported by number.
#[test]
fn test_unknown_tag() {
    let error = get_for(9999).err().expect("unsupported");
    assert_eq!(
        error,
        RegistryError::UnsupportedSerializerId { serializer_id: 9999 }
    );
    assert!(error.to_string().contains("9999"));

    // marshal and msgpack are reserved but unsupported
    assert!(get_for(2).is_err());
    assert!(get_for(4).is_err());
}

struct AncientCodec(SerpentCodec);

impl LiteralCodec for AncientCodec {
    fn name(&self) -> &'static str {
        "serpent"
    }

    fn version(&self) -> CodecVersion {
        CodecVersion::new(1, 22, 0)
    }

    fn register_class_converter(
        &mut self,
        kind: pyrowire::value::NativeKind,
        converter: pyrowire::codec::ClassConverter,
    ) {
        self.0.register_class_converter(kind, converter);
    }

    fn encode(
        &self,
        value: &pyrowire::Value,
        options: &EncodeOptions,
    ) -> Result<Vec<u8>, pyrowire::codec::LiteralError> {
        self.0.encode(value, options)
    }

    fn parse(&self, bytes: &[u8]) -> Result<pyrowire::Value, pyrowire::codec::LiteralError> {
        self.0.parse(bytes)
    }
}

/// Test that an outdated codec fails construction and leaves the slot empty.
#[test]
fn test_codec_version_gate() {
    init_tracing();
    let registry = SerializerRegistry::new();
    registry.register_factory(1, || {
        let serializer =
            SerpentSerializer::with_codec(AncientCodec(SerpentCodec::new()), SerializerConfig::default())?;
        Ok(Arc::new(serializer))
    });

    let error = registry.get_for(1).err().expect("version gate");
    match &error {
        RegistryError::Initialization { serializer_id, source } => {
            assert_eq!(*serializer_id, 1);
            assert!(matches!(source, CodecError::VersionTooOld { .. }));
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(std::error::Error::source(&error).is_some());
    assert!(!registry.is_initialized(1));
}

/// Test that a failed construction is retried by the next request.
#[test]
fn test_retry_after_failure() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let registry = SerializerRegistry::new();
    let counter = Arc::clone(&attempts);
    registry.register_factory(1, move || {
        if counter.fetch_add(1, Ordering::SeqCst) < 2 {
            return Err(CodecError::Unavailable {
                codec: "serpent".into(),
                reason: "warming up".into(),
            });
        }
        Ok(Arc::new(SerpentSerializer::default()))
    });

    assert!(registry.get_for(1).is_err());
    assert!(registry.get_for(1).is_err());
    assert!(registry.get_for(1).is_ok());
    assert!(registry.get_for(1).is_ok());
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

/// Test that a custom factory can install a configured serializer.
#[test]
fn test_custom_factory_config() {
    let registry = SerializerRegistry::new();
    registry.register_factory(1, || {
        Ok(Arc::new(SerpentSerializer::new(
            SerializerConfig::new().with_indent_output(true),
        )))
    });

    let serializer = registry.get_for(1).ok().expect("serializer");
    let bytes = serializer
        .serialize_data(&pyrowire::Value::List(vec![pyrowire::Value::from(1)]))
        .unwrap();
    assert!(bytes.ends_with(b"[\n  1\n]"));
}
