use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use planetwar_core::render::{Background, Frame};
use planetwar_core::setup::generate_planets;
use planetwar_core::{new_rng, Game, GameConfig};

/// A game ten seconds in, with fleets in flight.
fn warmed_game(config: GameConfig) -> Game {
    let mut game = Game::new(config).expect("bench config is valid");
    for _ in 0..600 {
        game.step();
    }
    game
}

fn bench_game_step(c: &mut Criterion) {
    c.bench_function("game_step_one_second", |b| {
        b.iter_batched(
            || warmed_game(GameConfig::with_seed(42)),
            |mut game| {
                for _ in 0..60 {
                    game.step();
                }
                game
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_game_step_crowded(c: &mut Criterion) {
    // Aggressive AI on a larger map keeps many fleets airborne
    let config = GameConfig {
        width: 2000,
        height: 1400,
        planet_count: 60,
        ai_interval: 5,
        ai_attack_probability: 1.0,
        ..GameConfig::with_seed(7)
    };

    c.bench_function("game_step_crowded", |b| {
        b.iter_batched(
            || warmed_game(config.clone()),
            |mut game| {
                for _ in 0..60 {
                    game.step();
                }
                game
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_frame_build(c: &mut Criterion) {
    let game = warmed_game(GameConfig::with_seed(42));
    let background = Background::default();

    c.bench_function("frame_build", |b| {
        b.iter(|| black_box(Frame::build(&game, &background)))
    });
}

fn bench_generate_planets(c: &mut Criterion) {
    let config = GameConfig::default();
    let mut rng = new_rng(3);

    c.bench_function("generate_planets", |b| {
        b.iter(|| black_box(generate_planets(&config, &mut rng)))
    });
}

criterion_group!(
    benches,
    bench_game_step,
    bench_game_step_crowded,
    bench_frame_build,
    bench_generate_planets
);
criterion_main!(benches);
