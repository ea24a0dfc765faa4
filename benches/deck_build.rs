use criterion::{black_box, criterion_group, criterion_main, Criterion};

use memory_match::core::{CardId, GameConfig, GameRng};
use memory_match::notify::CollectingSink;
use memory_match::{DeckBuilder, MemoryGame, TokenType};

fn bench_build(c: &mut Criterion) {
    let mut rng = GameRng::new(42);
    c.bench_function("build_full_deck", |b| {
        b.iter(|| DeckBuilder::build(black_box(TokenType::COUNT), &mut rng))
    });
}

fn bench_turn(c: &mut Criterion) {
    c.bench_function("click_pair_and_resolve", |b| {
        let mut game = MemoryGame::new(GameConfig::default(), CollectingSink::new())
            .expect("default config is valid");
        let mut now = 0u64;
        b.iter(|| {
            game.click(CardId(0), now);
            game.click(CardId(1), now);
            now += 1_000;
            game.advance(now);
            if game.session().is_won() {
                let _ = game.new_game();
            }
        })
    });
}

criterion_group!(benches, bench_build, bench_turn);
criterion_main!(benches);
