use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use purge_lib::{purge, PurgeConfig, StringRecord};

fn ledgers(size: usize) -> (Vec<StringRecord>, Vec<StringRecord>) {
    let row = |i: usize, day: usize| {
        StringRecord::from(vec![
            format!("{:02}/{:02}/20", day % 28 + 1, day % 12 + 1),
            format!("transfer {:012}", i / 2),
            format!("{}.{:02}", i % 977, i % 100),
        ])
    };
    let debit = (0..size).map(|i| row(i, i)).collect();
    let credit = (0..size).map(|i| row(i + size % 3, i * 7)).collect();
    (debit, credit)
}

pub fn execution_bench(c: &mut Criterion) {
    let cases = &[10_000, 100_000];

    let mut group = c.benchmark_group("purge");
    for size in cases {
        group.throughput(Throughput::Elements(2 * *size as u64));

        let (debit, credit) = ledgers(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| purge(debit.clone(), credit.clone(), PurgeConfig::default()));
        });
    }
}

criterion_group!(benches, execution_bench);
criterion_main!(benches);
