use criterion::{criterion_group, criterion_main, Criterion};
use dcflake::{decompose, parse_sequence, GeneratorConfig, IdGenerator};
use std::hint::black_box;
use std::sync::Arc;

pub fn generation_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Generation");

    // 0 is a tight spin on sequence exhaustion; others yield every N clock reads
    for &yield_every in &[0u32, 16, 64] {
        let config = GeneratorConfig::builder()
            .data_center_id(1)
            .machine_id(1)
            .spin_yield_every(yield_every)
            .build();
        let generator = IdGenerator::with_config(config).unwrap();

        group.bench_function(format!("next_id/yield_every_{}", yield_every), |b| {
            b.iter(|| {
                black_box(generator.next_id().unwrap());
            });
        });
    }

    group.finish();
}

pub fn concurrent_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Concurrent");

    for &thread_count in &[2, 4, 8] {
        group.bench_function(format!("threads/{}", thread_count), |b| {
            let generator = Arc::new(IdGenerator::new(1, 1).unwrap());
            b.iter(|| {
                let mut handles = Vec::with_capacity(thread_count);

                for _ in 0..thread_count {
                    let generator = Arc::clone(&generator);
                    handles.push(std::thread::spawn(move || {
                        for _ in 0..100 {
                            black_box(generator.next_id().unwrap());
                        }
                    }));
                }

                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

pub fn decoding_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Decoding");
    let generator = IdGenerator::new(1, 1).unwrap();
    let id = generator.next_id().unwrap();

    group.bench_function("decompose", |b| {
        b.iter(|| {
            black_box(decompose(black_box(id)));
        });
    });

    group.bench_function("parse_sequence", |b| {
        b.iter(|| {
            black_box(parse_sequence(black_box(id)));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    generation_benchmarks,
    concurrent_benchmarks,
    decoding_benchmarks
);
criterion_main!(benches);
