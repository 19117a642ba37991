use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tui_flappy::core::Game;
use tui_flappy::term::{GameView, Viewport};

fn bench_step(c: &mut Criterion) {
    let mut game = Game::new(ChaCha8Rng::seed_from_u64(12345), 0);
    let mut now: u64 = 0;

    c.bench_function("game_step_16ms", |b| {
        b.iter(|| {
            now += 16;
            // Keep the bird airborne often enough to exercise the full
            // frame path rather than the reset path every iteration.
            if now % 600 == 0 {
                game.swing(now);
            }
            game.step(black_box(now));
        })
    });
}

fn bench_collision_query(c: &mut Criterion) {
    let mut game = Game::new(ChaCha8Rng::seed_from_u64(12345), 0);
    // Populate the queue a bit.
    for t in 0..200u64 {
        let now = t * 16;
        if now % 600 == 0 {
            game.swing(now);
        }
        game.step(now);
    }

    c.bench_function("is_fail", |b| {
        b.iter(|| game.is_fail(black_box(3_200)))
    });
}

fn bench_render(c: &mut Criterion) {
    let game = Game::new(ChaCha8Rng::seed_from_u64(12345), 0);
    let view = GameView;
    let viewport = Viewport::new(80, 24);

    c.bench_function("render_80x24", |b| {
        b.iter(|| view.render(&game, black_box(viewport), black_box(100)))
    });
}

criterion_group!(benches, bench_step, bench_collision_query, bench_render);
criterion_main!(benches);
