use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ndn_l3_trace::{Category, FaceId, StatsTable};

const PACKET_SIZE: u64 = 0x4D2;

fn record(c: &mut Criterion) {
    let mut table = StatsTable::new();
    let face = FaceId::ONE;

    c.bench_function("record_known_face", |b| {
        b.iter(|| table.record(black_box(face), Category::InInterests, black_box(PACKET_SIZE)))
    });

    c.bench_function("record_rotating_faces", |b| {
        let mut next = 0u64;
        b.iter(|| {
            next = (next + 1) % 64;
            table.record(
                black_box(FaceId::new(next)),
                Category::OutData,
                black_box(PACKET_SIZE),
            )
        })
    });

    c.bench_function("reset", |b| b.iter(|| table.reset()));
}

criterion_group!(benches, record);
criterion_main!(benches);
