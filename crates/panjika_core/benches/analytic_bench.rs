use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panjika_core::{AnalyticEphemeris, EphemerisPort, GeoLocation};
use panjika_time::{CivilDate, Instant};

fn longitudes_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::default();
    let t = Instant::from_utc(2024, 4, 14, 4, 30, 0.0);

    let mut group = c.benchmark_group("analytic");
    group.bench_function("longitudes", |b| {
        b.iter(|| eph.longitudes(black_box(t)).expect("in range"))
    });
    group.finish();
}

fn sunrise_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::default();
    let date = CivilDate::new(2024, 4, 14).expect("valid date");
    let location = GeoLocation::sea_level(22.5726, 88.3639);

    let mut group = c.benchmark_group("analytic");
    group.sample_size(50);
    group.bench_function("sunrise_sunset", |b| {
        b.iter(|| {
            eph.sunrise_sunset(black_box(date), black_box(&location))
                .expect("in range")
        })
    });
    group.finish();
}

criterion_group!(benches, longitudes_bench, sunrise_bench);
criterion_main!(benches);
