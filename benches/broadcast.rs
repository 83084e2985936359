use criterion::{criterion_group, criterion_main, Criterion};
use geoshape::algorithm::geos::{ops, Buffer, Contains};
use geoshape::{Dispatcher, Geometry, GeometryArray};

fn generate_points(n: usize) -> GeometryArray {
    (0..n)
        .map(|i| {
            let x = (i % 1000) as f64 / 500.0;
            let y = (i / 1000) as f64 / 50.0;
            Some(Geometry::point(x, y).unwrap())
        })
        .collect()
}

fn generate_regions(n: usize) -> GeometryArray {
    let regions = (0..n)
        .map(|i| {
            let o = i as f64 * 0.1;
            Some(
                Geometry::polygon(
                    &[(o, o), (o + 1., o), (o + 1., o + 1.), (o, o + 1.), (o, o)],
                    &[],
                )
                .unwrap(),
            )
        })
        .collect();
    GeometryArray::from_shape_vec(&[n, 1], regions).unwrap()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let points = generate_points(100_000);
    let region =
        Geometry::polygon(&[(0., 0.), (1., 0.), (1., 1.), (0., 1.), (0., 0.)], &[]).unwrap();

    c.bench_function("contains scalar region", |b| {
        b.iter(|| region.contains(&points).unwrap())
    });

    let row = generate_points(1_000).into_shape(&[1, 1_000]).unwrap();
    let column = generate_regions(100);
    c.bench_function("contains column x row", |b| {
        b.iter(|| column.contains(&row).unwrap())
    });

    let small = generate_points(10_000);
    c.bench_function("buffer", |b| b.iter(|| small.buffer(1.0, 8).unwrap()));

    let widths: Vec<f64> = (0..10_000).map(|i| (i % 10) as f64 * 0.1).collect();
    c.bench_function("buffer per-element width", |b| {
        b.iter(|| {
            Dispatcher::default()
                .apply_with_param(&ops::Buffer::default(), &small, widths.clone())
                .unwrap()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
