//! Criterion comparison of the two multiply conventions on a fixed batch.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use matconv::harness::trial::random_mat4;
use matconv::math::Mat4;
use matconv::{mat4_mul_out, mat4_mul_value};
use rand::SeedableRng;
use rand::distributions::Uniform;
use rand::rngs::StdRng;

fn bench_conventions(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat4_mul");
    let range = Uniform::new_inclusive(-10.0, 10.0);

    for &count in &[1usize, 1024, 65536] {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let left: Vec<Mat4> = (0..count).map(|_| random_mat4(&mut rng, &range)).collect();
        let right: Vec<Mat4> = (0..count).map(|_| random_mat4(&mut rng, &range)).collect();
        let mut out = vec![Mat4::ZERO; count];

        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("out_param", count), &count, |bench, _| {
            bench.iter(|| {
                for ((o, a), b) in out.iter_mut().zip(&left).zip(&right) {
                    mat4_mul_out(o, black_box(a), black_box(b));
                }
                black_box(&out);
            })
        });

        group.bench_with_input(BenchmarkId::new("by_value", count), &count, |bench, _| {
            bench.iter(|| {
                for ((o, a), b) in out.iter_mut().zip(&left).zip(&right) {
                    *o = mat4_mul_value(black_box(a), black_box(b));
                }
                black_box(&out);
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_conventions);
criterion_main!(benches);
