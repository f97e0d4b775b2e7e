use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use gridlink::protocol::{self, POWER_DATA_LEN, REGISTRATION_REQUEST_LEN, ProductionCoefficients};
use gridlink::{RoundType, Scenario};

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    group.throughput(Throughput::Bytes(POWER_DATA_LEN as u64));
    group.bench_function("encode_power_data", |b| {
        b.iter(|| {
            black_box(protocol::pack_power_data(black_box(812.5), black_box(800.0)));
        });
    });

    group.throughput(Throughput::Bytes(REGISTRATION_REQUEST_LEN as u64));
    group.bench_function("encode_registration_request", |b| {
        b.iter(|| {
            black_box(protocol::pack_registration_request(
                black_box(42),
                "Roof Array",
                "esp32",
            ));
        });
    });

    // Full demo profile: 8 sources + 17 buildings
    let scenario = Scenario::demo();
    let production: ProductionCoefficients = scenario
        .production_ranges()
        .iter()
        .map(|(source, (_, max))| (*source, *max))
        .collect();
    let consumption = scenario.consumption_coefficients(RoundType::Day);
    group.bench_function("encode_coefficients_response", |b| {
        b.iter(|| {
            black_box(protocol::pack_coefficients_response(
                black_box(&production),
                black_box(&consumption),
            ));
        });
    });

    let table = scenario.building_table();
    group.bench_function("encode_building_table", |b| {
        b.iter(|| {
            black_box(table.encode());
        });
    });

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    let power = protocol::pack_power_data(812.5, 800.0);
    group.throughput(Throughput::Bytes(POWER_DATA_LEN as u64));
    group.bench_function("decode_power_values", |b| {
        b.iter(|| {
            black_box(protocol::unpack_power_values(black_box(&power)).unwrap());
        });
    });

    let registration = protocol::pack_registration_request(42, "Roof Array", "esp32");
    group.throughput(Throughput::Bytes(REGISTRATION_REQUEST_LEN as u64));
    group.bench_function("decode_registration_request", |b| {
        b.iter(|| {
            black_box(protocol::unpack_registration_request(black_box(&registration)).unwrap());
        });
    });

    let table = Scenario::demo().building_table().encode();
    group.bench_function("decode_building_table", |b| {
        b.iter(|| {
            black_box(protocol::unpack_building_table(black_box(&table)).unwrap());
        });
    });

    let status = protocol::pack_game_status(3, 10, "night", true);
    group.bench_function("decode_game_status", |b| {
        b.iter(|| {
            black_box(protocol::unpack_game_status(black_box(&status)).unwrap());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
