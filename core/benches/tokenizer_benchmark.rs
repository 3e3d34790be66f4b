use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use detour_di::api::*;
use serde_json::json;
use std::hint::black_box;
use std::time::Duration;

fn parameter_source(count: usize) -> String {
    let params: Vec<String> = (0..count)
        .map(|i| format!("param{} /* slot {} */", i, i))
        .collect();
    format!("function ({}) {{}}", params.join(",\n    "))
}

fn benchmark_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenizer");
    group.measurement_time(Duration::from_secs(5));

    for count in [1, 4, 16, 64].iter() {
        let source = parameter_source(*count);
        group.bench_with_input(
            BenchmarkId::new("extract_from_source", count),
            &source,
            |b, source| {
                b.iter(|| black_box(extract_from_source(black_box(source))));
            },
        );
    }

    group.finish();
}

fn benchmark_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolution");

    let mut injector = Injector::new();
    injector
        .register(
            "bench",
            [
                Producer::singleton("config", Callable::native(|_| Ok(Value::from(json!({"k": 1}))))),
                Producer::new("counter", Callable::native(|_| Ok(Value::from(json!(0))))),
            ],
        )
        .unwrap();
    let container = injector.registry().container("bench").unwrap();

    group.bench_function("singleton", |b| {
        b.iter(|| black_box(container.resolve(black_box("config"))))
    });

    group.bench_function("transient", |b| {
        b.iter(|| black_box(container.resolve(black_box("counter"))))
    });

    let consumer = Callable::new("function (config, counter, request) {}", |args| {
        Ok(args[2].clone())
    });
    let detour = create_detour(&container, &consumer);
    let args = [Value::from(json!("GET /"))];
    group.bench_function("detour_call", |b| {
        b.iter(|| black_box(detour.call(black_box(&args))))
    });

    group.finish();
}

criterion_group!(benches, benchmark_extraction, benchmark_resolution);
criterion_main!(benches);
