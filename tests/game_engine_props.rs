use battleship_engine::{GameEngine, GameError, GameStatus, Point, SetupStatus, ShotResult};
use proptest::prelude::*;
use rand::seq::SliceRandom;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_engine(seed: u64) -> GameEngine {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new();
    engine.set_game_status(SetupStatus::Configuring).unwrap();
    engine.auto_place(0, &mut rng).unwrap();
    engine.auto_place(1, &mut rng).unwrap();
    engine.start_game().unwrap();
    engine
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// A ship sinks exactly on the last of its cells, whatever the order.
    #[test]
    fn sink_order_independent(seed in any::<u64>(), ship_idx in 0..5usize) {
        let mut engine = random_engine(seed);
        let ship = engine.players()[1].ships[ship_idx].clone();
        let mut cells = ship.cells.clone();
        cells.shuffle(&mut SmallRng::seed_from_u64(seed ^ 0x5eed));

        let (last, rest) = cells.split_last().unwrap();
        for &p in rest {
            let outcome = engine.shoot(p).unwrap();
            prop_assert_eq!(outcome.result, ShotResult::Hit { ship_id: ship.id });
            prop_assert!(!engine.players()[1].ships[ship_idx].is_sunk());
        }
        let outcome = engine.shoot(*last).unwrap();
        prop_assert_eq!(outcome.result, ShotResult::Sink { ship_id: ship.id });
        prop_assert!(engine.players()[1].ships[ship_idx].is_sunk());
        prop_assert_eq!(&engine.players()[0].enemy_sunk_ships, &vec![ship.id]);
    }

    /// Score never goes down, whatever gets shot.
    #[test]
    fn score_monotonic(seed in any::<u64>(), shots in 1..150usize) {
        let mut engine = random_engine(seed);
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
        let mut scores = [0u32; 2];
        for _ in 0..shots {
            if engine.status() == GameStatus::Finished {
                break;
            }
            let p = Point::new(rng.random_range(0..10), rng.random_range(0..10));
            match engine.shoot(p) {
                Ok(outcome) => {
                    if !outcome.result.is_hit() && rng.random_bool(0.5) {
                        engine.finish_player_turn().unwrap();
                    }
                }
                Err(GameError::AlreadyResolvedCell(_)) => {}
                Err(e) => return Err(TestCaseError::fail(format!("unexpected error: {}", e))),
            }
            for (i, state) in engine.players().iter().enumerate() {
                prop_assert!(state.score >= scores[i]);
                scores[i] = state.score;
            }
        }
    }

    /// A resolved cell cannot be shot again and the failed shot changes nothing.
    #[test]
    fn no_reshooting(seed in any::<u64>(), x in 0..10i32, y in 0..10i32) {
        let mut engine = random_engine(seed);
        let p = Point::new(x, y);
        engine.shoot(p).unwrap();
        let after = engine.clone();
        prop_assert_eq!(engine.shoot(p), Err(GameError::AlreadyResolvedCell(p)));
        prop_assert_eq!(engine, after);
    }
}

#[test]
fn test_auto_place_fills_fleet_without_touching() {
    let engine = random_engine(12345);
    for state in engine.players() {
        assert_eq!(state.ships.len(), engine.config().ship_count_for_player());
        for (i, a) in state.ships.iter().enumerate() {
            for b in state.ships.iter().skip(i + 1) {
                for pa in &a.cells {
                    for pb in &b.cells {
                        assert!((pa.x - pb.x).abs() > 1 || (pa.y - pb.y).abs() > 1);
                    }
                }
            }
        }
    }
}

#[test]
fn test_auto_place_reproducible() {
    assert_eq!(random_engine(42), random_engine(42));
}
