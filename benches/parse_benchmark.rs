//! Benchmarks for unprose parsing performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks run the pipeline over synthetic analysis text.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic analysis with the given number of product sections.
fn create_test_analysis(section_count: usize) -> String {
    let mut content = String::new();

    content.push_str("Here is my analysis of the products you asked about.\n\n");

    for i in 0..section_count {
        content.push_str(&format!(
            "{}. **Option {}:** A **solid** choice for most buyers.\n",
            i + 1,
            i + 1
        ));
        content.push_str(&format!(
            "* **Phone {}** has a bright display and long battery life.\n",
            i
        ));
        content.push_str("- Fast charging\n- Good camera in daylight\n");
        content.push_str(&format!("{}. Consider the price history before buying.\n", i + 2));
        content.push_str("Scores: [4, 5, 3]\n\n\n");
    }

    content.push_str("\n**JSON Output:**\n```json\n{\"recommended_products\": [0, 1]}\n```\n");
    content
}

/// Benchmark the cleaner alone.
fn bench_cleaning(c: &mut Criterion) {
    let text = create_test_analysis(10);

    c.bench_function("clean_10_sections", |b| {
        b.iter(|| unprose::clean(black_box(&text)));
    });
}

/// Benchmark the full pipeline at various sizes.
fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for section_count in [1, 10, 100].iter() {
        let text = create_test_analysis(*section_count);

        group.bench_function(format!("{}_sections", section_count), |b| {
            b.iter(|| unprose::parse(black_box(&text)));
        });
    }

    group.finish();
}

/// Benchmark batch parsing, parallel against sequential.
fn bench_batch(c: &mut Criterion) {
    let inputs: Vec<String> = (0..64).map(|_| create_test_analysis(10)).collect();
    let parallel = unprose::ParseOptions::new();
    let sequential = unprose::ParseOptions::new().sequential();

    c.bench_function("batch_64_parallel", |b| {
        b.iter(|| unprose::parse_batch(black_box(&inputs), &parallel));
    });

    c.bench_function("batch_64_sequential", |b| {
        b.iter(|| unprose::parse_batch(black_box(&inputs), &sequential));
    });
}

/// Benchmark HTML rendering.
fn bench_html_rendering(c: &mut Criterion) {
    let analysis = unprose::parse(&create_test_analysis(10));
    let options = unprose::RenderOptions::default();

    c.bench_function("html_10_sections", |b| {
        b.iter(|| unprose::render::to_html(black_box(&analysis), &options));
    });
}

criterion_group!(
    benches,
    bench_cleaning,
    bench_parsing,
    bench_batch,
    bench_html_rendering,
);
criterion_main!(benches);
