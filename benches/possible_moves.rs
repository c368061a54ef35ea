use rust_president::{FirstAvailable, GameConfig, GameEngine, Hand, NullObserver, UniformRandom};

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .sample_size(20)
        .measurement_time(std::time::Duration::from_secs(2));
    targets =
        enumerating_dealt_hand,
        enumerating_quad_heavy_hand,
        collecting_opening_actions,
        playing_full_game_first,
        playing_full_game_random,
}

fn enumerating_dealt_hand(c: &mut criterion::Criterion) {
    let hand = Hand::parse("3S 3H 5D 7C 8S 8H 9D JS JH JD QC KS AS").unwrap();
    c.bench_function("enumerate a 13-card hand", |b| b.iter(|| hand.possible_moves()));
}

fn enumerating_quad_heavy_hand(c: &mut criterion::Criterion) {
    let hand = Hand::parse("4S 4H 4D 4C 9S 9H 9D 9C KS KH KD KC 2S").unwrap();
    c.bench_function("enumerate a hand of three quads", |b| {
        b.iter(|| hand.possible_moves())
    });
}

fn collecting_opening_actions(c: &mut criterion::Criterion) {
    let engine = GameEngine::new(&GameConfig::new(4).with_seed(1), FirstAvailable, NullObserver)
        .unwrap();
    c.bench_function("collect the opening action union", |b| {
        b.iter(|| engine.legal_actions())
    });
}

fn playing_full_game_first(c: &mut criterion::Criterion) {
    let config = GameConfig::new(4).with_seed(1);
    c.bench_function("play a 4-player game (first available)", |b| {
        b.iter(|| {
            GameEngine::new(&config, FirstAvailable, NullObserver)
                .and_then(|mut engine| engine.run())
                .unwrap()
        })
    });
}

fn playing_full_game_random(c: &mut criterion::Criterion) {
    let config = GameConfig::new(6).with_seed(2);
    c.bench_function("play a 6-player game (uniform random)", |b| {
        b.iter(|| {
            GameEngine::new(&config, UniformRandom::from_seed(2), NullObserver)
                .and_then(|mut engine| engine.run())
                .unwrap()
        })
    });
}
