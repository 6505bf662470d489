use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use tui_2048::core::{Board, GameState};
use tui_2048::term::{FrameBuffer, GameView, Viewport};
use tui_2048::types::Direction;

fn bench_update_cycle(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("update_four_directions", |b| {
        b.iter(|| {
            for dir in Direction::ALL {
                black_box(state.update(black_box(dir)));
            }
            if state.game_over() {
                state.restart();
            }
        })
    });
}

fn bench_merge_full_board(c: &mut Criterion) {
    let board = Board::from_rows([[2, 2, 4, 4], [8, 8, 16, 16], [2, 2, 4, 4], [8, 8, 16, 16]]);

    c.bench_function("merge_full_board_left", |b| {
        b.iter(|| {
            let mut state = GameState::from_board(board, 0, StdRng::seed_from_u64(1));
            black_box(state.update(Direction::Left));
        })
    });
}

fn bench_game_over_check(c: &mut Criterion) {
    let stuck = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);

    c.bench_function("is_stuck_full_board", |b| {
        b.iter(|| black_box(black_box(&stuck).is_stuck()))
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(12345);
    let snap = state.snapshot();
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| view.render_into(black_box(&snap), viewport, &mut fb))
    });
}

criterion_group!(
    benches,
    bench_update_cycle,
    bench_merge_full_board,
    bench_game_over_check,
    bench_render
);
criterion_main!(benches);
