use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numeric_json::{decode_str, from_str, to_string, to_value, IntRange, NdArray};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
struct Layer {
    name: String,
    weights: NdArray,
    bias: NdArray,
    rows: IntRange,
}

fn square_matrix(n: usize) -> NdArray {
    let data: Vec<f64> = (0..n * n).map(|i| i as f64 * 0.25).collect();
    NdArray::new(vec![n, n], data).unwrap()
}

fn layer(n: usize) -> Layer {
    Layer {
        name: format!("dense_{}", n),
        weights: square_matrix(n),
        bias: NdArray::from_vec(vec![0.5f64; n]),
        rows: IntRange::new(0, n as i64),
    }
}

fn benchmark_encode_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_matrix");

    for size in [8, 32, 128, 512].iter() {
        let matrix = square_matrix(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &matrix, |b, m| {
            b.iter(|| to_string(black_box(m)))
        });
    }
    group.finish();
}

fn benchmark_decode_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_matrix");

    for size in [8, 32, 128, 512].iter() {
        let json = to_string(&square_matrix(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &json, |b, json| {
            b.iter(|| decode_str(black_box(json)))
        });
    }
    group.finish();
}

fn benchmark_integer_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("integer_array");

    let array = NdArray::new(vec![100, 100], (0..10_000).collect::<Vec<i64>>()).unwrap();
    let plain: Vec<Vec<i64>> = (0..100)
        .map(|row| (0..100).map(|col| row * 100 + col).collect())
        .collect();

    group.bench_function("encode_ndarray", |b| {
        b.iter(|| to_string(black_box(&array)))
    });

    group.bench_function("encode_nested_vec", |b| {
        b.iter(|| to_string(black_box(&plain)))
    });

    let array_json = to_string(&array).unwrap();
    let plain_json = to_string(&plain).unwrap();

    group.bench_function("decode_ndarray", |b| {
        b.iter(|| from_str::<NdArray>(black_box(&array_json)))
    });

    group.bench_function("decode_nested_vec", |b| {
        b.iter(|| from_str::<Vec<Vec<i64>>>(black_box(&plain_json)))
    });

    group.finish();
}

fn benchmark_struct(c: &mut Criterion) {
    let layer = layer(64);
    let json = to_string(&layer).unwrap();

    c.bench_function("encode_struct", |b| b.iter(|| to_string(black_box(&layer))));

    c.bench_function("decode_struct", |b| {
        b.iter(|| from_str::<Layer>(black_box(&json)))
    });

    c.bench_function("to_value_struct", |b| b.iter(|| to_value(black_box(&layer))));
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let data: Vec<f64> = (0..4096).map(|i| i as f64 * 0.5).collect();
    let array = NdArray::from_vec(data.clone());

    let mut group = c.benchmark_group("comparison");

    group.bench_function("ndarray_encode", |b| {
        b.iter(|| to_string(black_box(&array)))
    });

    group.bench_function("json_encode", |b| {
        b.iter(|| serde_json::to_string(black_box(&data)))
    });

    let array_str = to_string(&array).unwrap();
    let json_str = serde_json::to_string(&data).unwrap();

    group.bench_function("ndarray_decode", |b| {
        b.iter(|| from_str::<NdArray>(black_box(&array_str)))
    });

    group.bench_function("json_decode", |b| {
        b.iter(|| serde_json::from_str::<Vec<f64>>(black_box(&json_str)))
    });

    group.finish();
}

fn benchmark_roundtrip(c: &mut Criterion) {
    let layer = layer(16);

    c.bench_function("roundtrip_layer", |b| {
        b.iter(|| {
            let serialized = to_string(black_box(&layer)).unwrap();
            let _deserialized: Layer = from_str(black_box(&serialized)).unwrap();
        })
    });
}

criterion_group!(
    benches,
    benchmark_encode_matrix,
    benchmark_decode_matrix,
    benchmark_integer_array,
    benchmark_struct,
    benchmark_comparison_with_json,
    benchmark_roundtrip
);
criterion_main!(benches);
