use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mulberry::prelude::*;

// Raw stepping compared to the transforms built on top of it
pub fn draws(c: &mut Criterion) {
    let mut rng = Engine::new(12345);
    c.bench_function("next_u32", |b| {
        b.iter(|| {
            for _ in 0..44100 {
                black_box(rng.next_u32());
            }
        })
    });
    c.bench_function("next_f64", |b| {
        b.iter(|| {
            for _ in 0..44100 {
                black_box(rng.next_f64());
            }
        })
    });
    c.bench_function("next_int", |b| {
        b.iter(|| {
            for _ in 0..44100 {
                black_box(rng.next_int(0, 100, false));
            }
        })
    });
    c.bench_function("next_normal", |b| {
        b.iter(|| {
            for _ in 0..44100 {
                black_box(rng.next_normal(0.0, 1.0, 0.0));
            }
        })
    });
    c.bench_function("next_normal skewed", |b| {
        b.iter(|| {
            for _ in 0..44100 {
                black_box(rng.next_normal(0.0, 1.0, 2.0));
            }
        })
    });
}

pub fn seeding(c: &mut Criterion) {
    let text = "a reasonably long piece of text to derive a seed from";
    c.bench_function("hash text", |b| {
        b.iter(|| black_box(mulberry::hash::hash(black_box(text))))
    });
    c.bench_function("seed from entropy", |b| {
        b.iter(|| black_box(Engine::from_entropy()))
    });
}

criterion_group!(benches, draws, seeding);
criterion_main!(benches);
