use criterion::{black_box, criterion_group, criterion_main, Criterion};
use snake_game_types::board::Board;
use snake_game_types::compressed_representation::{compress_board, decompress_board_str};

fn bench_decompress_default(c: &mut Criterion) {
    let compressed = include_str!("../fixtures/default_board.txt").trim();
    c.bench_function("decompress default board", |b| {
        b.iter(|| decompress_board_str(black_box(compressed)).unwrap())
    });
}

fn bench_decompress_arena(c: &mut Criterion) {
    let compressed = include_str!("../fixtures/arena_24x80.txt").trim();
    c.bench_function("decompress 24x80 arena", |b| {
        b.iter(|| decompress_board_str(black_box(compressed)).unwrap())
    });
}

fn bench_compress_default(c: &mut Criterion) {
    let board = Board::default_board();
    c.bench_function("compress default board", |b| {
        b.iter(|| compress_board(black_box(&board)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_decompress_default,
    bench_decompress_arena,
    bench_compress_default
);
criterion_main!(benches);
