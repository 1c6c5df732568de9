use bibtex_entries::{BibtexParser, EntryTable};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// Include the test fixtures module
include!("../src/fixtures.rs");

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    for size in [10, 100, 1000].iter() {
        let input = generate_realistic_bibtex(*size);
        group.throughput(Throughput::Bytes(input.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| {
                let table = BibtexParser::new().parse(black_box(input)).unwrap();
                black_box(table);
            });
        });
    }

    group.finish();
}

fn bench_templates(c: &mut Criterion) {
    let mut group = c.benchmark_group("templates");

    for template in VENUE_ENTRIES {
        let input = format!("{COMMON_STRINGS}\n{}", template.content);
        group.bench_with_input(
            BenchmarkId::from_parameter(template.name),
            &input,
            |b, input| {
                b.iter(|| {
                    let table = BibtexParser::new().parse(black_box(input)).unwrap();
                    black_box(table);
                });
            },
        );
    }

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let input = generate_realistic_bibtex(1000);
    let table: EntryTable = BibtexParser::new().parse(&input).unwrap();

    c.bench_function("get", |b| {
        b.iter(|| {
            let entry = table.get(black_box("entry500"));
            black_box(entry);
        });
    });

    c.bench_function("find_by_type", |b| {
        b.iter(|| {
            let entries = table.find_by_type(black_box("article"));
            black_box(entries);
        });
    });

    c.bench_function("sorted_by", |b| {
        b.iter(|| {
            let entries = table.sorted_by(black_box("year"));
            black_box(entries);
        });
    });
}

criterion_group!(benches, bench_parsing, bench_templates, bench_queries);
criterion_main!(benches);
