#![deny(unsafe_code)]
#![warn(clippy::all)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::hint::black_box;
use unicode_confusables::{
    Sanitizer, contains_confusables, detect_confusables, normalize_confusables, skeleton,
};

static CLEAN_WORDS: &[&str] = &[
    "hello", "world", "paypal", "google", "account", "verify", "security", "password",
    "café", "naïve", "straße", "日本語", "한국어",
];

static SPOOFED_WORDS: &[&str] = &[
    "pаypаl", "gооgle", "Ηello", "Wοrld", "ассоunt", "ｖｅｒｉｆｙ", "𝐬𝐞𝐜𝐮𝐫𝐢𝐭𝐲", "ﬁle",
    "pass\u{200B}word",
];

fn corpus(seed: u64, size_kb: usize, spoof_ratio: f64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = String::with_capacity(size_kb * 1024);
    while out.len() < size_kb * 1024 {
        let pool = if rng.random_bool(spoof_ratio) { SPOOFED_WORDS } else { CLEAN_WORDS };
        out.push_str(pool[rng.random_range(0..pool.len())]);
        out.push(' ');
    }
    out
}

fn bench_confusables(c: &mut Criterion) {
    let mut group = c.benchmark_group("Confusables");

    let scenarios = [
        ("clean", corpus(0x5eed0001, 64, 0.0)),
        ("1% spoofed", corpus(0x5eed0002, 64, 0.01)),
        ("25% spoofed", corpus(0x5eed0003, 64, 0.25)),
    ];
    let identifier = Sanitizer::identifier();

    for (scenario, text) in &scenarios {
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::new("contains", scenario), text, |b, t| {
            b.iter(|| contains_confusables(black_box(t)))
        });
        group.bench_with_input(BenchmarkId::new("detect", scenario), text, |b, t| {
            b.iter(|| detect_confusables(black_box(t)))
        });
        group.bench_with_input(BenchmarkId::new("normalize", scenario), text, |b, t| {
            b.iter(|| normalize_confusables(black_box(t)))
        });
        group.bench_with_input(BenchmarkId::new("skeleton", scenario), text, |b, t| {
            b.iter(|| skeleton(black_box(t)))
        });
        group.bench_with_input(BenchmarkId::new("identifier policy", scenario), text, |b, t| {
            b.iter(|| identifier.process(black_box(t)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_confusables);
criterion_main!(benches);
