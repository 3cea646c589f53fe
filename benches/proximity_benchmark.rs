use criterion::{criterion_group, criterion_main, Criterion};
use infravision::models::{DemandCenter, RenewableSource};
use infravision::services::proximity::{nearby_demand, nearby_renewables, DEFAULT_NEARBY_LIMIT};
use std::hint::black_box;

/// Spread `n` rows on a grid covering western India.
fn grid(n: usize) -> Vec<(f64, f64)> {
    let side = (n as f64).sqrt().ceil() as usize;
    (0..n)
        .map(|i| {
            let lat = 8.0 + 20.0 * (i / side) as f64 / side as f64;
            let lon = 68.0 + 20.0 * (i % side) as f64 / side as f64;
            (lat, lon)
        })
        .collect()
}

fn benchmark_nearby(c: &mut Criterion) {
    let sources: Vec<RenewableSource> = grid(10_000)
        .into_iter()
        .enumerate()
        .map(|(i, (latitude, longitude))| RenewableSource {
            id: i as i32,
            name: format!("Plant {i}"),
            source_type: if i % 2 == 0 { "solar" } else { "wind" }.to_string(),
            latitude,
            longitude,
            capacity: 50.0 + (i % 400) as f64,
        })
        .collect();

    let centers: Vec<DemandCenter> = grid(2_000)
        .into_iter()
        .enumerate()
        .map(|(i, (latitude, longitude))| DemandCenter {
            id: i as i32,
            name: format!("Center {i}"),
            center_type: "industrial".to_string(),
            latitude,
            longitude,
            demand_level: "High".to_string(),
        })
        .collect();

    let mut group = c.benchmark_group("nearby_infrastructure");

    // Surat: dense neighborhood
    group.bench_function("renewables_10k_inland", |b| {
        b.iter(|| {
            nearby_renewables(
                black_box(21.17),
                black_box(72.83),
                &sources,
                150.0,
                DEFAULT_NEARBY_LIMIT,
            )
        })
    });

    // Far offshore: nothing in range
    group.bench_function("renewables_10k_offshore", |b| {
        b.iter(|| {
            nearby_renewables(
                black_box(0.0),
                black_box(60.0),
                &sources,
                150.0,
                DEFAULT_NEARBY_LIMIT,
            )
        })
    });

    group.bench_function("demand_2k", |b| {
        b.iter(|| {
            nearby_demand(
                black_box(21.17),
                black_box(72.83),
                &centers,
                150.0,
                DEFAULT_NEARBY_LIMIT,
            )
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_nearby);
criterion_main!(benches);
