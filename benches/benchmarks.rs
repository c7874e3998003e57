criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        sampling_arbitrary_draw,
        testing_point_absorption,
        streaming_points_small_capacity,
        streaming_points_large_capacity,
        streaming_points_merge_policy,
        merging_cheapest_pair,
        reducing_to_single_cluster,
}

const STREAM: usize = 1024;

fn sampling_arbitrary_draw(c: &mut criterion::Criterion) {
    c.bench_function("sample an arbitrary weighted point", |b| {
        b.iter(|| Draw::random())
    });
}

fn testing_point_absorption(c: &mut criterion::Criterion) {
    let ref space = Draw::space();
    let mut cluster = Cluster::<Vec<f64>, ()>::new(space);
    Draw::stream(0, 64)
        .iter()
        .for_each(|d| cluster.add_point(space, d.mass, &d.point));
    let ref draw = Draw::random();
    c.bench_function("test absorbing a point into a cluster", |b| {
        b.iter(|| cluster.test_add_point(space, draw.mass, &draw.point))
    });
}

fn streaming_points_small_capacity(c: &mut criterion::Criterion) {
    let ref draws = Draw::stream(1, STREAM);
    c.bench_function("stream 1024 points into 16 clusters", |b| {
        b.iter(|| stream(draws, Config::new(16)))
    });
}

fn streaming_points_large_capacity(c: &mut criterion::Criterion) {
    let ref draws = Draw::stream(2, STREAM);
    c.bench_function("stream 1024 points into 128 clusters", |b| {
        b.iter(|| stream(draws, Config::new(128)))
    });
}

fn streaming_points_merge_policy(c: &mut criterion::Criterion) {
    let ref draws = Draw::stream(3, STREAM);
    c.bench_function("stream 1024 points into 16 clusters (merge policy)", |b| {
        b.iter(|| stream(draws, Config::new(16).policy(Policy::Merge)))
    });
}

fn merging_cheapest_pair(c: &mut criterion::Criterion) {
    let ref set = stream(&Draw::stream(4, STREAM), Config::new(64));
    c.bench_function("merge the cheapest of 64 clusters", |b| {
        b.iter_batched(
            || set.clone(),
            |mut set| set.merge_cheapest_pair(),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn reducing_to_single_cluster(c: &mut criterion::Criterion) {
    let ref set = stream(&Draw::stream(5, STREAM), Config::new(64));
    c.bench_function("reduce 64 clusters to one", |b| {
        b.iter_batched(
            || set.clone(),
            |mut set| set.reduce(None, 1),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn stream(draws: &[Draw], config: Config) -> ClusterSet<Vector, usize> {
    let mut set = ClusterSet::with_config(Draw::space(), config).expect("positive capacity");
    for draw in draws {
        set.add_point(draw.mass, &draw.point, None)
            .expect("valid point");
    }
    set
}

use gvm::Arbitrary;
use gvm::clustering::Cluster;
use gvm::clustering::ClusterSet;
use gvm::clustering::Config;
use gvm::clustering::Draw;
use gvm::clustering::Policy;
use gvm::space::Vector;
