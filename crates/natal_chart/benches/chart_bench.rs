use criterion::{Criterion, black_box, criterion_group, criterion_main};
use natal_chart::{
    BirthRecord, ChartConfig, GeoLocation, LocalFrame, calculate_all_planets,
    calculate_horoscope, house_cusps, sign_info,
};
use natal_time::{CivilDate, CivilDateTime};

fn chart_bench(c: &mut Criterion) {
    let config = ChartConfig::default();
    let loc = GeoLocation::new(35.6762, 139.6503);
    let dt = CivilDateTime::new(1990, 1, 1, 12.0);
    let record = BirthRecord::new(CivilDate::new(1990, 1, 1), Some("12:00"), Some(loc));

    let mut group = c.benchmark_group("chart");
    group.bench_function("sign_info", |b| b.iter(|| sign_info(black_box(245.5))));
    group.bench_function("house_cusps", |b| b.iter(|| house_cusps(black_box(335.6))));
    group.bench_function("local_frame", |b| {
        b.iter(|| LocalFrame::compute(black_box(2_447_893.0), &loc))
    });
    group.bench_function("all_planets", |b| {
        b.iter(|| calculate_all_planets(black_box(&dt), Some(&loc), &config))
    });
    group.bench_function("horoscope", |b| {
        b.iter(|| calculate_horoscope(black_box(&record), &config))
    });
    group.finish();
}

criterion_group!(benches, chart_bench);
criterion_main!(benches);
