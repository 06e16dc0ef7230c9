#![deny(unsafe_code)]
#![warn(clippy::all)]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use icu_normalizer::{ComposingNormalizerBorrowed, DecomposingNormalizerBorrowed};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::borrow::Cow;
use std::{hint::black_box, sync::LazyLock};
use unicode_confusables::{Form, normalize_unicode};
use unicode_normalization::UnicodeNormalization;

// ── Stress samples ──
static STRESS_POOL_NFC_NFD: &[&str] = &[
    "Tiếng Việt Quốc ngữ Phở Hà Nội",
    "Sœur naïve à l'œuf ŒUF déjà-vu",
    "Fußball Straße Maßstab GRÜNE STRAẞE",
    "¡España mañana José Peña!",
    "Łódź żółć ŻÓŁĆ Żubrówka",
    "Ștefan Țară România",
    "Ἀρχιμήδης Ἑλλάς σοφός",
    "Ёлки-палки всё А́нна",
    "हिन्दी ज़िंदगी क़िला",
    "한글 ＫＯＲＥＡ 한국어",
];

static STRESS_POOL_NFKC_NFKD: &[&str] = &[
    "ﬀ ﬁ ﬂ ﬃ ﬄ ﬆ ﬁﬀﬃﬃ",
    "½ ⅓ ¼ ⅕ ⅙ ⅛ ⅔ ¾",
    "①②③④⑤ ⑩ ⑴⑵⑶ ⒈⒉⒊",
    "Ｈｅｌｌｏ　Ｗｏｒｌｄ　＆　＜＞",
    "㈱ ㈲ ㎏ ㎞ ㎡",
    "№ ℡ ™ © ®",
];

fn realistic_corpus(seed: u64, size_kb: usize) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out = String::with_capacity(size_kb * 1024);
    let pools = [STRESS_POOL_NFC_NFD, STRESS_POOL_NFKC_NFKD];

    while out.len() < size_kb * 1024 {
        let pool = pools[rng.random_range(0..pools.len())];
        let text = pool[rng.random_range(0..pool.len())];
        for _ in 0..rng.random_range(1..=5) {
            out.push_str(text);
            out.push(' ');
        }
        if rng.random_bool(0.1) {
            let word: String = (0..rng.random_range(5..20))
                .map(|_| (b'a' + rng.random_range(0..26u8)) as char)
                .collect();
            out.push_str(&word);
            out.push(' ');
        }
    }

    // Truncate at a valid UTF-8 boundary
    let mut truncate_at = (size_kb * 1024).min(out.len());
    while truncate_at > 0 && !out.is_char_boundary(truncate_at) {
        truncate_at -= 1;
    }
    out.truncate(truncate_at);
    out
}

fn corpus_needs(form: Form, seed: u64, size_kb: usize) -> String {
    let base = realistic_corpus(seed, size_kb);
    match form {
        Form::Nfc => base.nfd().collect(),
        Form::Nfd => base.nfc().collect(),
        Form::Nfkc | Form::Nfkd => format!("{} ﬁ ﬂ ﬃ ① ½ ＆ Ｈｅｌｌｏ", base.nfc().collect::<String>()),
    }
}

fn corpus_already(form: Form, seed: u64, size_kb: usize) -> String {
    let base = realistic_corpus(seed, size_kb);
    match form {
        Form::Nfc => base.nfc().collect(),
        Form::Nfd => base.nfd().collect(),
        Form::Nfkc => base.nfkc().collect(),
        Form::Nfkd => base.nfkd().collect(),
    }
}

// ── ICU4X ──
static ICU4X_NFC: LazyLock<ComposingNormalizerBorrowed<'static>> =
    LazyLock::new(ComposingNormalizerBorrowed::new_nfc);
static ICU4X_NFKC: LazyLock<ComposingNormalizerBorrowed<'static>> =
    LazyLock::new(ComposingNormalizerBorrowed::new_nfkc);
static ICU4X_NFD: LazyLock<DecomposingNormalizerBorrowed<'static>> =
    LazyLock::new(DecomposingNormalizerBorrowed::new_nfd);
static ICU4X_NFKD: LazyLock<DecomposingNormalizerBorrowed<'static>> =
    LazyLock::new(DecomposingNormalizerBorrowed::new_nfkd);

fn icu4x(form: Form, s: &str) -> Cow<'_, str> {
    match form {
        Form::Nfc => ICU4X_NFC.normalize(s),
        Form::Nfd => ICU4X_NFD.normalize(s),
        Form::Nfkc => ICU4X_NFKC.normalize(s),
        Form::Nfkd => ICU4X_NFKD.normalize(s),
    }
}

fn reference_normalize(form: Form, s: &str) -> String {
    match form {
        Form::Nfc => s.nfc().collect(),
        Form::Nfd => s.nfd().collect(),
        Form::Nfkc => s.nfkc().collect(),
        Form::Nfkd => s.nfkd().collect(),
    }
}

fn benches_normalization_forms(c: &mut Criterion) {
    let mut group = c.benchmark_group("Normalization Forms");
    group.measurement_time(std::time::Duration::from_secs(10));

    let seeds = [
        (Form::Nfc, 0x517ea41e, 0x1a71c0fe),
        (Form::Nfd, 0xdeadbeef, 0xb1a9c3d4),
        (Form::Nfkc, 0x1337c0de, 0x76543210),
        (Form::Nfkd, 0xcafef00d, 0xabcdef01),
    ];

    for (form, needs_seed, already_seed) in seeds {
        let scenarios = [
            (format!("Needs {form}"), corpus_needs(form, needs_seed, 128)),
            (format!("Already {form}"), corpus_already(form, already_seed, 128)),
        ];

        for (scenario, corpus) in &scenarios {
            group.throughput(Throughput::Bytes(corpus.len() as u64));

            bench_with_cow("unicode-confusables", form, scenario, &mut group, corpus, |s| {
                normalize_unicode(s, form, false)
            });
            bench_with_cow("ICU4X", form, scenario, &mut group, corpus, |s| icu4x(form, s));
            bench_no_cow("unicode-normalization", form, scenario, &mut group, corpus, |s| {
                reference_normalize(form, s)
            });
        }
    }

    group.finish();
}

fn bench_with_cow<F>(
    lib: &str,
    form: Form,
    scenario: &str,
    group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>,
    corpus: &str,
    mut func: F,
) where
    F: FnMut(&str) -> Cow<'_, str>,
{
    let mut zero_copy_count = 0;
    let mut total_count = 0;

    group.bench_function(BenchmarkId::new(format!("{lib} {form}"), scenario), |b| {
        b.iter(|| {
            let result = func(black_box(corpus));
            total_count += 1;
            if matches!(result, Cow::Borrowed(s) if s.as_ptr() == corpus.as_ptr() && s.len() == corpus.len())
            {
                zero_copy_count += 1;
            }
            result
        })
    });

    let zero_copy_pct = if total_count > 0 {
        (zero_copy_count as f64 / total_count as f64) * 100.0
    } else {
        0.0
    };
    println!(
        "  {lib} {form} - {scenario}: Zero-Copy {zero_copy_pct:.1}% ({zero_copy_count}/{total_count})"
    );
}

fn bench_no_cow<F>(
    lib: &str,
    form: Form,
    scenario: &str,
    group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>,
    corpus: &str,
    func: F,
) where
    F: Fn(&str) -> String,
{
    group.bench_function(BenchmarkId::new(format!("{lib} {form}"), scenario), |b| {
        b.iter(|| func(black_box(corpus)))
    });
    println!("  {lib} {form} - {scenario}: Always allocates (0.0% Zero-Copy)");
}

criterion_group!(benches, benches_normalization_forms);
criterion_main!(benches);
