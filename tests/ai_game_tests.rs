use rand::rngs::SmallRng;
use rand::SeedableRng;
use tictactoe::{Driver, GameConfig, GameStatus, RandomPlayer, ScriptedPlayer, Side};

#[test]
fn test_ai_vs_ai_game() {
    let mut rng = SmallRng::seed_from_u64(123);
    let mut driver = Driver::new(
        GameConfig::default(),
        Box::new(RandomPlayer::new()),
        Box::new(RandomPlayer::new()),
        &mut rng,
    )
    .unwrap()
    .quiet();
    let summary = driver.run().unwrap();

    assert!(matches!(driver.game().status(), GameStatus::Over(_)));
    assert_eq!(summary.dimension, 3);
    assert_eq!(summary.turns, summary.moves);
    assert!(summary.turns >= 5 && summary.turns <= 9);
    match summary.winning_side {
        Some(Side::Player1) => assert_eq!(summary.winner.as_deref(), Some("x")),
        Some(Side::Player2) => assert_eq!(summary.winner.as_deref(), Some("o")),
        None => {
            assert_eq!(summary.winner, None);
            assert_eq!(summary.turns, 9);
        }
    }
    assert_eq!(summary.board, driver.game().board().to_string());
}

#[test]
fn test_seeded_games_are_reproducible() {
    for seed in 0..20 {
        let play = |seed: u64| {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut driver = Driver::new(
                GameConfig::new('x', 'o', 4),
                Box::new(RandomPlayer::new()),
                Box::new(RandomPlayer::new()),
                &mut rng,
            )
            .unwrap()
            .quiet();
            driver.run().unwrap()
        };
        assert_eq!(play(seed), play(seed));
    }
}

#[test]
fn test_scripted_driver_scenario() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut driver = Driver::new(
        GameConfig::default(),
        Box::new(ScriptedPlayer::new([0, 1, 2])),
        Box::new(ScriptedPlayer::new([4, 5])),
        &mut rng,
    )
    .unwrap()
    .quiet();
    let summary = driver.run().unwrap();

    assert_eq!(summary.winner.as_deref(), Some("x"));
    assert_eq!(summary.winning_side, Some(Side::Player1));
    assert_eq!(summary.turns, 5);
    assert_eq!(summary.board, "xxx\n.oo\n...\n");
}

#[test]
fn test_driver_rejects_bad_config() {
    let mut rng = SmallRng::seed_from_u64(0);
    let result = Driver::new(
        GameConfig::new('x', 'x', 3),
        Box::new(RandomPlayer::new()),
        Box::new(RandomPlayer::new()),
        &mut rng,
    );
    assert!(result.is_err());
}
