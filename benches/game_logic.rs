use criterion::{black_box, criterion_group, criterion_main, Criterion};
use web_tetris::core::{clear_lines, project_drop, Board, GameState, PieceGenerator};
use web_tetris::types::{PieceKind, TICK_MS};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.is_game_over() {
                state.reset_game();
                state.start();
            }
            state.tick(black_box(TICK_MS));
            state.drain_events();
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set_cell(x, y, PieceKind::I);
                }
            }
            clear_lines(black_box(&mut board))
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut generator = PieceGenerator::new(12345);

    c.bench_function("spawn_piece", |b| b.iter(|| generator.next_piece()));
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if state.is_game_over() {
                state.reset_game();
                state.start();
            }
            state.hard_drop();
            state.drain_events();
        })
    });
}

fn bench_project_drop(c: &mut Criterion) {
    let board = Board::new();
    let mut generator = PieceGenerator::new(7);
    let piece = generator.next_piece();

    c.bench_function("project_drop", |b| {
        b.iter(|| project_drop(black_box(&piece), black_box(&board)))
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut dx = 1;

    c.bench_function("move_piece", |b| {
        b.iter(|| {
            if !state.move_piece(dx) {
                dx = -dx;
            }
            state.drain_events();
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    state.soft_drop();
    state.soft_drop();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            state.rotate(true);
            state.drain_events();
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut snapshot = state.snapshot();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| state.snapshot_into(black_box(&mut snapshot)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_hard_drop,
    bench_project_drop,
    bench_move,
    bench_rotate,
    bench_snapshot
);
criterion_main!(benches);
