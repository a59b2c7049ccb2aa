//! Voice pool benchmarks, run against a transport that drops everything.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use synthwire::{engine::NullTransport, Context, Schedule, VoicePool};

use crate::POOL_SIZES;

const CHORD: [u8; 6] = [48, 55, 60, 64, 67, 72];

fn pool(voices: usize) -> (Context, VoicePool) {
    let mut ctx = Context::new(NullTransport);
    let pool = VoicePool::new(&mut ctx, voices, 1u32).unwrap();
    (ctx, pool)
}

pub fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool/churn");

    for &size in POOL_SIZES {
        // Six notes through `size` voices: small pools steal on most notes.
        let (mut ctx, mut pool) = pool(size);
        group.bench_with_input(BenchmarkId::new("chord", size), &size, |b, _| {
            b.iter(|| {
                for &note in &CHORD {
                    pool.note_on(&mut ctx, black_box(note), 1.0, &Schedule::now())
                        .unwrap();
                }
                for &note in &CHORD {
                    pool.note_off(&mut ctx, black_box(note), &Schedule::now())
                        .unwrap();
                }
            })
        });
    }

    group.finish();
}

pub fn bench_sustain(c: &mut Criterion) {
    let mut group = c.benchmark_group("pool/sustain");

    for &size in POOL_SIZES {
        let (mut ctx, mut pool) = pool(size);
        group.bench_with_input(BenchmarkId::new("flush", size), &size, |b, _| {
            b.iter(|| {
                pool.sustain(&mut ctx, true).unwrap();
                for &note in &CHORD {
                    pool.note_on(&mut ctx, note, 1.0, &Schedule::now()).unwrap();
                    pool.note_off(&mut ctx, note, &Schedule::now()).unwrap();
                }
                pool.sustain(&mut ctx, false).unwrap();
            })
        });
    }

    group.finish();
}
