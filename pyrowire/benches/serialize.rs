//! Serialization benchmarks for pyrowire
//!
//! Measures encode and decode cost for:
//! - A typical method call
//! - Results of growing size
//! - Results carrying protocol objects

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use pyrowire::protocol::{RemoteException, RemoteObjectReference, RemoteProxyHandle};
use pyrowire::serialization::{Serializer, get_for};
use pyrowire::value::{Dict, Value};
use std::sync::Arc;

/// Builds a list of `n` records, each a small dict.
fn records(n: usize) -> Value {
    let items = (0..n)
        .map(|i| {
            let mut record = Dict::new();
            record.insert("id".to_string(), Value::from(i as i64));
            record.insert("name".to_string(), Value::from(format!("item-{i}")));
            record.insert("price".to_string(), Value::from(i as f64 * 1.25));
            record.insert("tags".to_string(), Value::Tuple(vec![Value::from("a"), Value::from("b")]));
            Value::Dict(record)
        })
        .collect();
    Value::List(items)
}

fn serializers() -> Vec<Arc<dyn Serializer>> {
    [1u16, 3]
        .into_iter()
        .filter_map(|tag| get_for(tag).ok())
        .collect()
}

/// Benchmark encoding and decoding a method call
fn bench_call(c: &mut Criterion) {
    let mut group = c.benchmark_group("call");
    group.throughput(Throughput::Elements(1));

    let mut kwargs = Dict::new();
    kwargs.insert("timeout".to_string(), Value::from(2.5));
    let args = [Value::from("world"), Value::from(42)];

    for serializer in serializers() {
        group.bench_function(BenchmarkId::new("serialize", serializer.name()), |b| {
            b.iter(|| {
                let bytes = serializer
                    .serialize_call(black_box("obj-123"), "greet", &args, &kwargs)
                    .unwrap();
                black_box(bytes);
            });
        });

        let bytes = serializer
            .serialize_call("obj-123", "greet", &args, &kwargs)
            .unwrap();
        group.bench_function(BenchmarkId::new("deserialize", serializer.name()), |b| {
            b.iter(|| black_box(serializer.deserialize_call(black_box(&bytes)).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark results of growing size
fn bench_result_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("result_size");

    for serializer in serializers() {
        for count in [10usize, 100, 1000] {
            let value = records(count);
            let bytes = serializer.serialize_data(&value).unwrap();
            group.throughput(Throughput::Bytes(bytes.len() as u64));

            group.bench_with_input(
                BenchmarkId::new(format!("{}/serialize", serializer.name()), count),
                &value,
                |b, value| b.iter(|| black_box(serializer.serialize_data(value).unwrap())),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("{}/deserialize", serializer.name()), count),
                &bytes,
                |b, bytes| b.iter(|| black_box(serializer.deserialize_data(bytes).unwrap())),
            );
        }
    }

    group.finish();
}

/// Benchmark results that carry protocol objects
fn bench_protocol_objects(c: &mut Criterion) {
    let mut group = c.benchmark_group("protocol_objects");
    group.throughput(Throughput::Elements(1));

    let reference = RemoteObjectReference::new("PYRO", "inventory", "10.0.0.5", 9090).unwrap();
    let value = Value::List(vec![
        Value::from(reference.clone()),
        Value::from(RemoteProxyHandle::new(reference)),
        Value::from(
            RemoteException::new("builtins.KeyError", "sku-42")
                .with_traceback("Traceback (most recent call last):\n"),
        ),
    ]);

    for serializer in serializers() {
        let bytes = serializer.serialize_data(&value).unwrap();
        group.bench_function(BenchmarkId::new("roundtrip", serializer.name()), |b| {
            b.iter(|| {
                let bytes = serializer.serialize_data(black_box(&value)).unwrap();
                black_box(serializer.deserialize_data(&bytes).unwrap())
            });
        });
        group.bench_function(BenchmarkId::new("deserialize", serializer.name()), |b| {
            b.iter(|| black_box(serializer.deserialize_data(black_box(&bytes)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_call,
    bench_result_size,
    bench_protocol_objects
);
criterion_main!(benches);
