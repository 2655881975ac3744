use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sentiment_dashboard::analyze;
use sentiment_dashboard::pipeline::{normalize, parse_records};
use sentiment_dashboard::test_support::keyword_classifier;

const SAMPLES: [&str; 4] = [
    "I love this phone, it is great! http://t.co/abc #happy",
    "@support terrible battery life, I hate it",
    "meh, nothing to report today",
    "Great game last night @team #win http://example.com/recap",
];

fn make_input(n_lines: usize) -> String {
    (0..n_lines)
        .map(|i| format!("user{i}, {}", SAMPLES[i % SAMPLES.len()]))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for (i, sample) in SAMPLES.iter().enumerate() {
        group.bench_with_input(BenchmarkId::new("tweet", i), sample, |b, text| {
            b.iter(|| normalize(black_box(text)));
        });
    }

    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let classifier = keyword_classifier();

    for size in [10, 100, 1_000] {
        let input = make_input(size);

        group.bench_with_input(BenchmarkId::new("parse", size), &input, |b, input| {
            b.iter(|| parse_records(black_box(input)));
        });

        group.bench_with_input(BenchmarkId::new("end_to_end", size), &input, |b, input| {
            b.iter(|| analyze(black_box(input), &classifier));
        });

        let result = analyze(&input, &classifier).unwrap();
        group.bench_with_input(BenchmarkId::new("csv", size), &result, |b, result| {
            b.iter(|| result.to_csv_bytes());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_analyze);
criterion_main!(benches);
