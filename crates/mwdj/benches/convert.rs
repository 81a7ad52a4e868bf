use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mwdj::{Converter, ConverterConfig};

const WORDS: &[&str] = &[
    "ˈfər-t͟hər",
    "ˈē-zē",
    "ˈbä-tᵊl",
    "ˈvi-zhən",
    "ˈnā-chər",
    "di-ˈstrȯi",
    "ˈhəm-ˌdrəm",
];

fn bench_convert(c: &mut Criterion) {
    let converter = Converter::new(ConverterConfig::default());

    c.bench_function("convert_word", |b| {
        b.iter(|| converter.convert(black_box("ˈfər-t͟hər")))
    });

    c.bench_function("convert_many", |b| {
        b.iter(|| converter.convert_many(black_box(WORDS)))
    });
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
