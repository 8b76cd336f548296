//! Performance benchmarks for the function cache.
//!
//! Measures the hot paths the engine hits on every call:
//! - Lookup by id and by name against caches of growing size
//! - Insert/delete churn
//! - Pin/unpin against rings of growing size
//!
//! ## Profiling with Puffin
//!
//! ```bash
//! cargo bench --features profile-with-puffin
//! ```

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use funccache::prelude::*;
use std::hint::black_box;
use std::rc::Rc;

#[cfg(feature = "profile-with-puffin")]
fn setup_profiler() {
    puffin::set_scopes_on(true);
}

#[cfg(not(feature = "profile-with-puffin"))]
fn setup_profiler() {}

/// Call at the end of each benchmark iteration to flush profiling data.
#[cfg(feature = "profile-with-puffin")]
fn end_profiling_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}

#[cfg(not(feature = "profile-with-puffin"))]
fn end_profiling_frame() {}

fn populated(count: u32) -> (FuncCache, Vec<Rc<Func>>) {
    let mut cache = FuncCache::with_config(FuncCacheConfig::new().with_capacity(count as usize));
    let funcs: Vec<Rc<Func>> = (0..count)
        .map(|i| Rc::new(Func::new(FuncDef::new(i, format!("function_{i}")))))
        .collect();
    for f in &funcs {
        cache.insert(f.clone()).unwrap();
    }
    (cache, funcs)
}

fn lookup_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("func_cache/lookup");

    for count in [16u32, 1_024, 65_536] {
        let (cache, funcs) = populated(count);
        let target = &funcs[funcs.len() / 2];

        group.bench_with_input(BenchmarkId::new("by_id", count), &target.fid(), |b, &fid| {
            b.iter(|| black_box(cache.lookup_by_id(black_box(fid)).is_some()));
        });
        group.bench_with_input(
            BenchmarkId::new("by_name", count),
            target.name_bytes(),
            |b, name| {
                b.iter(|| black_box(cache.lookup_by_name(black_box(name)).is_some()));
            },
        );
    }

    group.finish();
}

fn churn_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("func_cache/churn");
    let (mut cache, _) = populated(1_024);
    let extra = Rc::new(Func::new(FuncDef::new(u32::MAX, "extra")));

    group.bench_function("insert_delete", |b| {
        b.iter(|| {
            cache.insert(black_box(extra.clone())).unwrap();
            black_box(cache.delete(extra.fid()).unwrap());
            end_profiling_frame();
        });
    });

    group.finish();
}

fn pin_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("func_cache/pin");

    for ring_size in [1usize, 16, 256] {
        let (mut cache, funcs) = populated(16);
        let target = funcs[0].clone();
        let mut resident: Vec<Holder> = (0..ring_size - 1).map(|_| Holder::new()).collect();
        for holder in &mut resident {
            cache.pin(&target, holder, HolderKind::Constraint).unwrap();
        }
        let mut holder = Holder::new();

        group.bench_function(BenchmarkId::new("pin_unpin", ring_size), |b| {
            b.iter(|| {
                cache
                    .pin(&target, &mut holder, HolderKind::Constraint)
                    .unwrap();
                cache.unpin(&target, &holder).unwrap();
                let _ = black_box(cache.is_pinned(&target));
            });
        });
    }

    group.finish();
}

fn benches(c: &mut Criterion) {
    setup_profiler();
    lookup_benchmarks(c);
    churn_benchmarks(c);
    pin_benchmarks(c);
}

criterion_group!(func_cache, benches);
criterion_main!(func_cache);
