use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use neongrid::board::{GameState, Phase, PlayerId, TileState, BOARD_SIZE};
use neongrid::resolve::{apply_action, compute_rent, Action, Outcome, RngSource};

/// A fully built-out board: every tile owned, zones at alternating levels.
fn developed_board() -> Vec<TileState> {
    let owners = [PlayerId::from("p1"), PlayerId::from("p2")];
    (0..BOARD_SIZE)
        .map(|i| TileState {
            owner_id: Some(owners[i % 2].clone()),
            level: (i % 5) as u8,
        })
        .collect()
}

/// Plays a four-player game with a simple always-buy policy, bounded at
/// 500 actions so a long-running game cannot stall the bench.
fn simulate(seed: u64) -> usize {
    let seating = vec![
        PlayerId::from("p1"),
        PlayerId::from("p2"),
        PlayerId::from("p3"),
        PlayerId::from("p4"),
    ];
    let mut random = RngSource(SmallRng::seed_from_u64(seed));
    let mut state = GameState::new(seating).expect("valid seating");
    let mut applied = 0;

    for _ in 0..500 {
        let caller = state.turn_player_id.clone();
        let action = match state.phase {
            Phase::Roll => Action::RollDice,
            Phase::BuyOrPass => Action::BuyProperty,
            Phase::End => Action::EndTurn,
        };
        match apply_action(&state, &caller, action, &mut random) {
            Ok(Outcome::State(next)) => {
                state = next;
                applied += 1;
            }
            Ok(Outcome::GameOver(_)) | Err(_) => break,
        }
    }
    applied
}

fn bench_compute_rent(c: &mut Criterion) {
    let board = developed_board();
    c.bench_function("compute_rent_full_board", |b| {
        b.iter(|| {
            let mut total = 0;
            for index in 0..BOARD_SIZE {
                total += compute_rent(black_box(index), black_box(&board), black_box(7));
            }
            total
        })
    });
}

fn bench_simulate_game(c: &mut Criterion) {
    c.bench_function("simulate_four_player_game", |b| {
        b.iter(|| simulate(black_box(0xC0FFEE)))
    });
}

criterion_group!(benches, bench_compute_rent, bench_simulate_game);
criterion_main!(benches);
