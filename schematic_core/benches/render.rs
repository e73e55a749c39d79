use criterion::{criterion_group, criterion_main, Criterion};
use schematic_core::geometry::{lattice, zigzag, LatticeParams, ZigzagParams};
use schematic_core::loader::json;
use schematic_core::types::Vec2;
use std::path::Path;

fn bench_generate(c: &mut Criterion) {
    let params = LatticeParams::annulus(0.05, 0.09, 0.002, 0.004);
    c.bench_function("lattice_full_annulus", |b| {
        b.iter(|| lattice(&params).unwrap());
    });
    let zz = ZigzagParams {
        pitch: 0.001,
        ..Default::default()
    };
    c.bench_function("zigzag_fine_pitch", |b| {
        b.iter(|| zigzag(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.3), &zz).unwrap());
    });
}

fn bench_render(c: &mut Criterion) {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../tests/data/mixed.json");
    let data = std::fs::read(path).unwrap();
    let fig = json::from_slice(&data).unwrap();
    let width = 640usize;
    let height = 480usize;
    let mut buf = vec![0u8; width * height * 4];
    c.bench_function("render_mixed_figure", |b| {
        b.iter(|| fig.render_sync(&mut buf, width, height, width * 4).unwrap());
    });
}

criterion_group!(benches, bench_generate, bench_render);
criterion_main!(benches);
