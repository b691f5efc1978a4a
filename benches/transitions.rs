use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ninety_nine::ai::{decide_computer_action, ComputerPolicy, UniformPolicy};
use ninety_nine::core::{Action, GameRng, SessionConfig};
use ninety_nine::rules::{NinetyNine, RulesEngine};
use ninety_nine::sim::play_out;

fn bench_new_game(c: &mut Criterion) {
    let config = SessionConfig::default().with_player_count(4);
    let engine = NinetyNine::from_config(&config);

    c.bench_function("new_game_4p", |b| {
        let mut rng = GameRng::new(1);
        b.iter(|| black_box(engine.new_game(&config, &mut rng)));
    });
}

fn bench_play_and_draw(c: &mut Criterion) {
    let config = SessionConfig::default().with_player_count(4);
    let engine = NinetyNine::from_config(&config);
    let state = engine.new_game(&config, &mut GameRng::new(7));
    let player = state.players[0].id;
    let card = state.players[0].hand[0].id;

    c.bench_function("apply_play", |b| {
        b.iter(|| black_box(engine.apply_action(black_box(&state), player, &Action::play(card))));
    });

    c.bench_function("apply_draw", |b| {
        b.iter(|| black_box(engine.apply_draw(black_box(&state), player)));
    });
}

fn bench_decisions(c: &mut Criterion) {
    let config = SessionConfig::default().with_player_count(4);
    let engine = NinetyNine::from_config(&config);
    let state = engine.new_game(&config, &mut GameRng::new(3));
    let player = state.players[0].clone();

    c.bench_function("heuristic_decide", |b| {
        let mut rng = GameRng::new(0);
        b.iter(|| black_box(decide_computer_action(&engine, &player, black_box(&state), &mut rng)));
    });

    c.bench_function("uniform_decide", |b| {
        let mut rng = GameRng::new(0);
        b.iter(|| black_box(UniformPolicy.decide(&engine, &player, black_box(&state), &mut rng)));
    });
}

fn bench_full_game(c: &mut Criterion) {
    let config = SessionConfig::default().with_player_count(4);

    c.bench_function("play_out_4p", |b| {
        b.iter(|| black_box(play_out(&config, 1_000)));
    });
}

criterion_group!(
    benches,
    bench_new_game,
    bench_play_and_draw,
    bench_decisions,
    bench_full_game
);
criterion_main!(benches);
