use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use shelter_db::mongo::ConnectionParams;

fn uri_benchmark(c: &mut Criterion) {
    let params = ConnectionParams {
        user: "aac user".to_string(),
        password: "p@ss w0rd with $pecial chars".to_string(),
        ..Default::default()
    };

    c.bench_function("connection_uri", |b| b.iter(|| black_box(&params).uri()));
}

criterion_group!(benches, uri_benchmark);
criterion_main!(benches);
