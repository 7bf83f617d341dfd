use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_core::{Board, Mark, select_move};

fn bench_empty_board(c: &mut Criterion) {
    let board = Board::new();
    let mut group = c.benchmark_group("select_move");
    group.sample_size(10);
    group.bench_function("empty_board", |b| {
        b.iter(|| select_move(black_box(&board), Mark::O))
    });
    group.finish();
}

fn bench_mid_game(c: &mut Criterion) {
    let board: Board = "X...O...X".parse().unwrap_or_default();
    c.bench_function("select_move/mid_game", |b| {
        b.iter(|| select_move(black_box(&board), Mark::O))
    });
}

fn bench_self_play(c: &mut Criterion) {
    let mut group = c.benchmark_group("self_play");
    group.sample_size(10);
    group.bench_function("from_empty", |b| {
        b.iter(|| {
            let mut board = Board::new();
            let mut to_move = Mark::X;
            while let Some(chosen) = select_move(&board, to_move) {
                board
                    .place(chosen.index, to_move)
                    .expect("engine only picks empty cells");
                to_move = to_move.opponent();
            }
            board
        })
    });
    group.finish();
}

criterion_group!(benches, bench_empty_board, bench_mid_game, bench_self_play);
criterion_main!(benches);
