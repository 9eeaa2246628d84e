//! Benchmarks for the turn pipeline.
//!
//! Measures state cloning, single turns, and full scripted attempts on a
//! 20x20 level.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_grid_puzzle::core::{Action, Direction, HazardKind, Position, TileKind};
use rust_grid_puzzle::history::History;
use rust_grid_puzzle::level::{to_game_state, LevelData};
use rust_grid_puzzle::rules::process_turn;
use rust_grid_puzzle::session::Session;
use rust_grid_puzzle::EngineConfig;

fn large_level() -> LevelData {
    let mut level = LevelData::new("bench", 20, 20, Position::new(0, 0), Position::new(19, 19), 500)
        .with_key("k", 0, 10, "red")
        .with_door("d", 10, 10, "red");
    for y in 2..18 {
        level = level.with_tile(5, y, TileKind::Wall);
    }
    for x in 12..18 {
        level = level.with_hazard(format!("h{x}"), x, 3, HazardKind::Fire);
    }
    level
}

/// Walk right, then down, then back, `steps` times.
fn script(steps: usize) -> Vec<Action> {
    [Direction::Right, Direction::Down, Direction::Left, Direction::Up]
        .into_iter()
        .cycle()
        .take(steps)
        .map(Action::Move)
        .collect()
}

// =============================================================================
// State Clone Benchmark
// =============================================================================

fn benchmark_state_clone(criterion: &mut Criterion) {
    let state = to_game_state(&large_level());

    criterion.bench_function("state_clone", |bencher| {
        bencher.iter(|| black_box(state.clone()));
    });
}

// =============================================================================
// Single Turn Benchmark
// =============================================================================

fn benchmark_single_turn(criterion: &mut Criterion) {
    let state = Arc::new(to_game_state(&large_level()));
    let history = History::default();
    let mut group = criterion.benchmark_group("single_turn");

    for (name, action) in [
        ("move", Action::Move(Direction::Right)),
        ("wait", Action::Wait),
        ("rejected", Action::Move(Direction::Left)),
    ] {
        group.bench_function(name, |bencher| {
            bencher.iter(|| black_box(process_turn(&state, &history, black_box(action))));
        });
    }

    group.finish();
}

// =============================================================================
// Scripted Attempt Benchmark
// =============================================================================

fn benchmark_session(criterion: &mut Criterion) {
    let level = Arc::new(large_level());
    let mut group = criterion.benchmark_group("session");

    for steps in [16, 128, 400] {
        let actions = script(steps);
        group.bench_with_input(BenchmarkId::new("submit", steps), &actions, |bencher, actions| {
            bencher.iter(|| {
                let mut session = Session::new(Arc::clone(&level), EngineConfig::default());
                for &action in actions {
                    session.submit(action);
                }
                black_box(session)
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_state_clone,
    benchmark_single_turn,
    benchmark_session
);
criterion_main!(benches);
