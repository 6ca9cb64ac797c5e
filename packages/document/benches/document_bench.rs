use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tablexml_document::{parse, serialize};

fn table_source(rows: usize) -> String {
    let mut source = String::from("<database>\n  <table name=\"Users\">\n");
    for i in 0..rows {
        source.push_str(&format!(
            "    <row><cell name=\"ID\">{i}</cell><cell name=\"Name\">user-{i}</cell><cell name=\"Email\">user{i}@example.com</cell></row>\n"
        ));
    }
    source.push_str("  </table>\n</database>\n");
    source
}

fn parse_small_table(c: &mut Criterion) {
    let source = table_source(10);

    c.bench_function("parse_small_table", |b| {
        b.iter(|| parse(black_box(&source)))
    });
}

fn parse_large_table(c: &mut Criterion) {
    let source = table_source(5_000);

    c.bench_function("parse_large_table", |b| {
        b.iter(|| parse(black_box(&source)))
    });
}

fn serialize_large_table(c: &mut Criterion) {
    let doc = parse(&table_source(5_000)).expect("bench fixture parses");

    c.bench_function("serialize_large_table", |b| {
        b.iter(|| serialize(black_box(&doc)))
    });
}

criterion_group!(benches, parse_small_table, parse_large_table, serialize_large_table);
criterion_main!(benches);
