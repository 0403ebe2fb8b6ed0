use criterion::{Criterion, black_box, criterion_group, criterion_main};
use saju_base::{
    Branch, Direction, Pillar, PillarLabel, Stem, StemBranch, Symbol, decade_pillars,
    monthly_pillars, ten_god, twelve_stage,
};

fn attribute_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("attributes");
    group.bench_function("ten_god", |b| {
        b.iter(|| ten_god(black_box(Stem::Gap), black_box(Symbol::Branch(Branch::Yu))))
    });
    group.bench_function("twelve_stage", |b| {
        b.iter(|| twelve_stage(black_box(Stem::Eul), black_box(Branch::Hae)))
    });
    group.bench_function("pillar_resolve", |b| {
        let sb = StemBranch::from_index(37);
        b.iter(|| Pillar::resolve(PillarLabel::Month, black_box(sb), black_box(Stem::Mu)))
    });
    group.finish();
}

fn luck_bench(c: &mut Criterion) {
    let month = StemBranch::from_index(14);

    let mut group = c.benchmark_group("luck");
    group.bench_function("decade_pillars", |b| {
        b.iter(|| decade_pillars(black_box(month), Direction::Forward, 4, Stem::Gap))
    });
    group.bench_function("monthly_pillars", |b| {
        b.iter(|| monthly_pillars(black_box(2026), Stem::Gap))
    });
    group.finish();
}

criterion_group!(benches, attribute_bench, luck_bench);
criterion_main!(benches);
