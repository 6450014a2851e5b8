use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tenpin::core::Game;
use tenpin::term::ScoreboardView;

/// Strikes, spares and open frames, ending with a tenth-frame strike.
const MIXED_GAME: [u8; 17] = [10, 7, 3, 9, 0, 10, 0, 8, 8, 2, 0, 6, 10, 10, 10, 8, 1];

fn finished_game() -> Game {
    let mut game = Game::new();
    for pins in MIXED_GAME {
        game.roll(pins);
    }
    game
}

fn bench_roll_full_game(c: &mut Criterion) {
    c.bench_function("roll_full_game", |b| {
        b.iter(|| {
            let mut game = Game::new();
            for pins in MIXED_GAME {
                game.roll(black_box(pins));
            }
            game
        })
    });
}

fn bench_score(c: &mut Criterion) {
    let game = finished_game();

    c.bench_function("score_finished_game", |b| {
        b.iter(|| black_box(&game).score())
    });
}

fn bench_running_totals(c: &mut Criterion) {
    let game = finished_game();

    c.bench_function("running_totals", |b| {
        b.iter(|| black_box(&game).running_totals())
    });
}

fn bench_render_scoreboard(c: &mut Criterion) {
    let snap = finished_game().snapshot();

    c.bench_function("render_scoreboard", |b| {
        b.iter(|| ScoreboardView.render(black_box(&snap)))
    });
}

criterion_group!(
    benches,
    bench_roll_full_game,
    bench_score,
    bench_running_totals,
    bench_render_scoreboard
);
criterion_main!(benches);
