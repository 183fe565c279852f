use nagell_lutz::{Curve, Point};

use criterion::{criterion_group, criterion_main, Criterion};

fn bench_torsion(c: &mut Criterion) {
    let mut group = c.benchmark_group("torsion");

    let curve = Curve::new(-1451, 21274).unwrap();
    let base = Point::integral(21, 8);

    group.bench_function("torsion_subgroup", |b| b.iter(|| curve.torsion_subgroup()));
    group.bench_function("order_of_base_point", |b| b.iter(|| curve.order_of(&base)));

    group.finish();
}

criterion_group!(benches, bench_torsion);
criterion_main!(benches);
