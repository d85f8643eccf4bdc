use agrivision_format::{Dialect, Formatter, parsing::parse_document};
use criterion::{Criterion, criterion_group, criterion_main};

fn generate_recommendation(sections: usize) -> String {
    let mut content = String::from("# Fertilizer Recommendation\n\n");
    for section in 0..sections {
        content.push_str(&format!("## Stage {section}\n\n"));
        content.push_str("Soil shows **low nitrogen** and *moderate* potassium <check> & retest.\n");
        content.push_str("Apply in the morning.\n\n");
        for i in 1..=4 {
            content.push_str(&format!("{i}. Apply {} kg/ha of **NPK 10-26-26**\n", i * 25));
        }
        content.push_str("- Irrigate 2 * 3 times a week\n\n---\n\n");
    }
    content
}

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.sample_size(20);

    let content = generate_recommendation(100);
    let formatter = Formatter::with_dialect(Dialect::Recommendation);

    group.bench_function("parse_only", |b| {
        b.iter(|| {
            let doc = parse_document(std::hint::black_box(&content));
            std::hint::black_box(doc);
        });
    });

    group.bench_function("format_recommendation", |b| {
        b.iter(|| {
            let html = formatter.format(Some(std::hint::black_box(&content)));
            std::hint::black_box(html);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_format);
criterion_main!(benches);
