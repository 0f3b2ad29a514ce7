use criterion::{black_box, criterion_group, criterion_main, Criterion};
use halo_try::{make_try_with, make_try_with_result, unwrap_try_tuple, ExceptionWrapper, Panicked, Try};

fn bench_capture(c: &mut Criterion) {
    // Captured panics would otherwise flood the output through the default hook.
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(|_| {}));

    let mut group = c.benchmark_group("capture");

    group.bench_function("make_try_with_value", |b| {
        b.iter(|| make_try_with(|| black_box(42_u64)));
    });

    group.bench_function("make_try_with_result_ok", |b| {
        b.iter(|| make_try_with_result(|| Ok::<_, std::io::Error>(black_box(42_u64))));
    });

    group.bench_function("make_try_with_panic", |b| {
        b.iter(|| make_try_with(|| -> u64 { panic!("{}", black_box("boom")) }));
    });

    group.bench_function("make_try_with_resignal", |b| {
        let failed: Try<u64> = Try::from_exception(ExceptionWrapper::new(Panicked::new("boom")));
        b.iter(|| make_try_with(|| *black_box(&failed).get()));
    });

    group.finish();
    std::panic::set_hook(previous_hook);
}

fn bench_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("access");

    let value = Try::from_value(7_u64);
    let failed: Try<u64> = Try::from_exception(ExceptionWrapper::new(Panicked::new("boom")));

    group.bench_function("value_ok", |b| {
        b.iter(|| black_box(&value).value().copied());
    });

    group.bench_function("value_failed", |b| {
        b.iter(|| black_box(&failed).value().is_err());
    });

    group.bench_function("clone_value_vec_64", |b| {
        let t = Try::from_value(vec![0_u8; 64]);
        b.iter(|| black_box(&t).clone());
    });

    group.bench_function("unwrap_tuple_3", |b| {
        let tuple = (Try::from_value(1_u32), Try::from_value("a"), Try::from_value(true));
        b.iter(|| unwrap_try_tuple(black_box(&tuple)).map(|(a, _, c)| (*a, *c)));
    });

    group.finish();
}

criterion_group!(benches, bench_capture, bench_access);
criterion_main!(benches);
