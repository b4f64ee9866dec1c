use battleship_engine::{GameEngine, Point, SetupStatus};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

proptest! {
    #[test]
    fn game_snapshot_roundtrip(seed in any::<u64>(), shots in 0..40usize) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut engine = GameEngine::new();
        engine.set_game_status(SetupStatus::Configuring).unwrap();
        engine.auto_place(0, &mut rng).unwrap();
        engine.auto_place(1, &mut rng).unwrap();
        engine.start_game().unwrap();
        for _ in 0..shots {
            let _ = engine.shoot(Point::new(rng.random_range(0..10), rng.random_range(0..10)));
        }
        let bytes = engine.snapshot().unwrap();
        let restored = GameEngine::restore(&bytes).unwrap();
        prop_assert_eq!(engine, restored);
    }
}

#[test]
fn test_snapshot_of_configuring_game() {
    let mut engine = GameEngine::new();
    engine.set_game_status(SetupStatus::Starting).unwrap();
    engine.set_game_status(SetupStatus::Configuring).unwrap();
    let restored = GameEngine::restore(&engine.snapshot().unwrap()).unwrap();
    assert_eq!(restored.game_id(), 1);
    assert_eq!(restored.status(), engine.status());
    assert!(GameEngine::restore(&[1, 2, 3]).is_err());
}
