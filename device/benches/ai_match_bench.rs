use criterion::{Criterion, criterion_group, criterion_main};

use common::game::{
    Board, GameMode, GameSession, Mark, SessionRng, calculate_random_move, check_win,
};

fn play_random_match(seed: u64) -> usize {
    let mut session = GameSession::new(GameMode::AiVsAi);
    let mut rng = SessionRng::new(seed);
    let mut moves = 0;

    while !session.is_over() {
        let Some((row, col)) = calculate_random_move(&session.board, &mut rng) else {
            break;
        };
        if session.place_mark(row as i32, col as i32).is_err() {
            break;
        }
        moves += 1;
    }

    moves
}

fn bench_random_full_match(c: &mut Criterion) {
    c.bench_function("random_ai_full_match", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            play_random_match(seed)
        });
    });
}

fn bench_win_scan_near_full_board(c: &mut Criterion) {
    let mut board = Board::new();
    let marks = [
        (0, 0, Mark::X),
        (0, 1, Mark::O),
        (0, 2, Mark::X),
        (1, 0, Mark::O),
        (1, 1, Mark::X),
        (1, 2, Mark::O),
        (2, 0, Mark::O),
        (2, 1, Mark::X),
    ];
    for (row, col, mark) in marks {
        board.set(row, col, mark);
    }

    c.bench_function("win_scan_near_full_board", |b| {
        b.iter(|| check_win(&board))
    });
}

criterion_group!(benches, bench_random_full_match, bench_win_scan_near_full_board);
criterion_main!(benches);
