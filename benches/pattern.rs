use chrono::NaiveTime;
use criterion::{Criterion, criterion_group, criterion_main};
use patlog::{CompiledPattern, Level, LogConfig, Logger, MemoryOutput, Profile};
use std::hint::black_box;

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("CompiledPattern::compile");

    group.bench_function("verbose", |b| {
        b.iter(|| CompiledPattern::compile(black_box("&pid&sep&tim&sep&lev&sep&msg&end")));
    });
    group.bench_function("substitutions", |b| {
        b.iter(|| CompiledPattern::compile(black_box("&us0&us12&lev&us3&msg&end")));
    });
    group.bench_function("rejected", |b| {
        b.iter(|| CompiledPattern::compile(black_box("&tim&xyz&msg")));
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("CompiledPattern::render");
    let time = NaiveTime::from_hms_opt(14, 30, 0).unwrap_or_default();

    for profile in [Profile::None, Profile::Default, Profile::Verbose] {
        let text = profile.pattern().unwrap_or("&msg&end");
        let pattern = CompiledPattern::compile(text).unwrap();
        let config = LogConfig::default();
        group.bench_function(profile.as_str(), |b| {
            b.iter(|| {
                pattern.render_at(
                    &config,
                    black_box(Level::Info),
                    black_box("Application started successfully"),
                    time,
                )
            });
        });
    }

    let mut config = LogConfig::default();
    config.add_substitution(0, "[svc] ");
    config.add_substitution(1, " <<");
    let pattern = CompiledPattern::compile("&us0&lev&sep&msg&us1&end").unwrap();
    group.bench_function("substitutions", |b| {
        b.iter(|| pattern.render_at(&config, black_box(Level::Warning), black_box("disk"), time));
    });

    group.finish();
}

fn bench_logger(c: &mut Criterion) {
    let mut group = c.benchmark_group("Logger::log");

    let out = MemoryOutput::new();
    let mut logger = Logger::builder()
        .level(Level::Info)
        .profile(Profile::Default)
        .output(out.clone())
        .build();

    group.bench_function("admitted", |b| {
        b.iter(|| {
            logger.info(black_box("request served"));
            out.clear();
        });
    });
    group.bench_function("filtered", |b| {
        b.iter(|| logger.debug(black_box("never rendered")));
    });

    group.finish();
}

criterion_group!(benches, bench_compile, bench_render, bench_logger);
criterion_main!(benches);
