use std::time::Duration;

use backgammon_engine::board::Board;
use backgammon_engine::core::PlayerId;
use backgammon_engine::game::{FirstOption, GameService};
use backgammon_engine::MatchConfig;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;

fn bench_opening(c: &mut Criterion) {
    let board = Board::new();
    let mut group = c.benchmark_group("Legal Moves");
    group
        .sample_size(50)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    group.bench_function("opening 3-1", |b| {
        b.iter(|| black_box(board.legal_moves(PlayerId::ONE, black_box(&[3, 1]))))
    });
    group.bench_function("opening double 4s", |b| {
        b.iter(|| black_box(board.legal_moves(PlayerId::TWO, black_box(&[4, 4, 4, 4]))))
    });
    group.finish();
}

fn bench_playout(c: &mut Criterion) {
    let mut group = c.benchmark_group("Playout");
    group
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    group.bench_function("first-option game", |b| {
        b.iter(|| {
            let mut game = GameService::new(MatchConfig::new(1).with_seed(7), ["A", "B"])
                .expect("valid config");
            game.start_game().expect("fresh match");
            while !game.is_game_over() {
                if game.play_turn(&mut FirstOption).is_err() {
                    break;
                }
            }
            black_box(game.last_result())
        })
    });
    group.finish();
}

criterion_group!(benches, bench_opening, bench_playout);
criterion_main!(benches);
