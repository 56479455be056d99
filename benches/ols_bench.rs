use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use multifit::traits::Fit;
use multifit::{Dataset, LeastSquares};
use ndarray::Array;
use ndarray_rand::rand::{rngs::SmallRng, SeedableRng};
use ndarray_rand::rand_distr::{Normal, Uniform};
use ndarray_rand::RandomExt;

fn make_dataset(num_rows: usize, num_feats: usize) -> Dataset<f64> {
    let mut rng = SmallRng::seed_from_u64(42);
    let records = Array::random_using((num_rows, num_feats), Uniform::new(-5., 5.), &mut rng);
    let noise = Array::random_using(num_rows, Normal::new(0., 0.1).unwrap(), &mut rng);
    let coefficients = Array::linspace(1., 2., num_feats);
    let targets = records.dot(&coefficients) + noise;

    Dataset::new(records, targets)
}

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("Multifit");
    let sizes: [usize; 3] = [1_000, 10_000, 100_000];
    for size in sizes {
        let dataset = make_dataset(size, 5);
        group.bench_with_input(BenchmarkId::new("OLS", size), &dataset, |b, dataset| {
            b.iter(|| LeastSquares::params().fit(dataset).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
