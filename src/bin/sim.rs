use log::LevelFilter;
use rand::{rngs::SmallRng, SeedableRng};
use tictactoe::{
    init_logging_with, Driver, GameConfig, RandomPlayer, DEFAULT_DIMENSION, PLAYER1_TOKEN,
    PLAYER2_TOKEN,
};

fn main() -> anyhow::Result<()> {
    init_logging_with(LevelFilter::Warn);
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [dimension]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let dimension: usize = match args.get(2) {
        Some(dim) => dim.parse()?,
        None => DEFAULT_DIMENSION,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let config = GameConfig::new(PLAYER1_TOKEN, PLAYER2_TOKEN, dimension);
    let mut driver = Driver::new(
        config,
        Box::new(RandomPlayer::new()),
        Box::new(RandomPlayer::new()),
        &mut rng,
    )?
    .quiet();
    let summary = driver.run()?;

    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
