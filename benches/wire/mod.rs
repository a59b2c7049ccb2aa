//! Codec benchmarks.

use std::hint::black_box;

use criterion::Criterion;
use synthwire::wire::{
    consts::Wave, encode, Coef, CoefSpec, ControlCoefficients, Message, Value,
};

pub fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("wire/encode");

    group.bench_function("note_on", |b| {
        b.iter(|| {
            Message::builder()
                .voices(&[black_box(3)])
                .note(black_box(60.0))
                .vel(black_box(0.8))
                .time(Some(black_box(12_345)))
                .build()
        })
    });

    group.bench_function("named_pairs", |b| {
        b.iter(|| {
            encode([
                ("wave", Value::from(Wave::SawDown)),
                ("filter_freq", Value::from("100,0,0,5")),
                ("resonance", Value::from(black_box(2.5))),
                ("osc", Value::from(0)),
                ("bp0", Value::from("0,1,1000,0,100,0")),
            ])
        })
    });

    let body = "v0w1Zv1w0a0.5f0.25Z".repeat(8);
    group.bench_function("store_patch", |b| {
        b.iter(|| {
            Message::builder()
                .store_patch(format!("1024,{}", black_box(&body)))
                .build()
        })
    });

    group.finish();
}

pub fn bench_coefs(c: &mut Criterion) {
    let mut group = c.benchmark_group("wire/coefs");

    group.bench_function("wire_string", |b| {
        b.iter(|| CoefSpec::from(black_box("261.63,1,,0,0,1")).normalize())
    });

    group.bench_function("named", |b| {
        b.iter(|| {
            CoefSpec::named([("const", black_box(440.0)), ("note", 1.0), ("bend", 1.0)])
                .normalize()
        })
    });

    group.bench_function("structured", |b| {
        b.iter(|| {
            ControlCoefficients::new()
                .set(Coef::Const, black_box(100.0))
                .set(Coef::Eg0, 5.0)
                .to_wire()
        })
    });

    group.finish();
}
