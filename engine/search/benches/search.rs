//! Search benchmarks for performance profiling.
//!
//! Run with: `cargo bench -p uttt-search`
//!
//! These benchmarks measure:
//! - Rules-engine primitives (move generation, apply-move)
//! - MCTS throughput under different time budgets
//! - Minimax at different depth bounds, opening vs midgame

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use games_uttt::{GameState, Move};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use uttt_search::{minimax, MctsSearch, SearchConfig};

/// Play `count` random moves from the opening, deterministically.
fn midgame_state(seed: u64, count: usize) -> GameState {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut state = GameState::new();
    for _ in 0..count {
        let moves = state.available_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[rng.gen_range(0..moves.len())];
        state = state.apply_move(mv).expect("random move is legal");
    }
    state
}

fn bench_rules_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("rules_engine");

    let opening = GameState::new();
    let midgame = midgame_state(42, 20);

    group.bench_function("available_moves_opening", |b| {
        b.iter(|| black_box(opening.available_moves()))
    });
    group.bench_function("available_moves_midgame", |b| {
        b.iter(|| black_box(midgame.available_moves()))
    });
    group.bench_function("apply_move", |b| {
        b.iter(|| black_box(opening.apply_move(Move::new(4, 4)).unwrap()))
    });

    group.finish();
}

fn bench_mcts_budgets(c: &mut Criterion) {
    let mut group = c.benchmark_group("mcts_time_budget");
    group.sample_size(10);

    for budget_ms in [5u64, 10, 25] {
        group.throughput(Throughput::Elements(budget_ms));
        group.bench_with_input(
            BenchmarkId::from_parameter(budget_ms),
            &budget_ms,
            |b, &budget_ms| {
                let state = midgame_state(42, 12);
                let config = SearchConfig::default().with_time_budget_ms(budget_ms);

                b.iter(|| {
                    let mut rng = ChaCha20Rng::seed_from_u64(42);
                    let mut search = MctsSearch::new(state, config.clone());
                    black_box(search.run(&mut rng).unwrap())
                });
            },
        );
    }

    group.finish();
}

fn bench_minimax_depths(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax_depth");
    group.sample_size(10);

    let midgame = midgame_state(42, 12);
    for depth in [2u32, 3, 4] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| black_box(minimax::best_move(&midgame, depth).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_rules_engine,
    bench_mcts_budgets,
    bench_minimax_depths
);
criterion_main!(benches);
