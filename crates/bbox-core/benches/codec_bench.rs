//! Criterion benchmarks for the GeoJSON rectangle codec.
//!
//! Every committed drag encodes once and every bind decodes once, so both
//! directions should stay well below a frame budget.
//!
//! Run with:
//! ```bash
//! cargo bench --package bbox-core --bench codec_bench
//! ```

use bbox_core::{decode, encode, Rectangle};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample() -> Rectangle {
    Rectangle::new(-0.6680291327536106, 51.33129296535873, 0.1234567, 52.0987654)
        .expect("sample rectangle is valid")
}

fn bench_encode(c: &mut Criterion) {
    let rect = sample();
    c.bench_function("encode_rectangle", |b| b.iter(|| encode(black_box(&rect))));
}

fn bench_decode(c: &mut Criterion) {
    let text = encode(&sample()).into_string();
    c.bench_function("decode_rectangle", |b| b.iter(|| decode(black_box(&text))));

    let double_encoded = serde_json::to_string(&text).expect("string serializes");
    c.bench_function("decode_double_encoded_rectangle", |b| {
        b.iter(|| decode(black_box(&double_encoded)))
    });
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
