use tictactoe::{
    init_logging, CliPlayer, Driver, Game, GameConfig, Player, RandomPlayer, Variant,
    DEFAULT_DIMENSION, PLAYER1_TOKEN, PLAYER2_TOKEN,
};

use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PlayerType {
    Human,
    Ai,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game on the local machine.
    Play {
        #[arg(long, default_value_t = DEFAULT_DIMENSION)]
        dimension: usize,
        #[arg(long, value_enum, default_value_t = PlayerType::Human)]
        player1: PlayerType,
        #[arg(long, value_enum, default_value_t = PlayerType::Ai)]
        player2: PlayerType,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Allow moves onto occupied cells")]
        lenient: bool,
    },
    /// Print every winning line for a board size.
    Patterns {
        #[arg(long, default_value_t = DEFAULT_DIMENSION)]
        dimension: usize,
    },
}

fn make_player(kind: PlayerType) -> Box<dyn Player<char>> {
    match kind {
        PlayerType::Human => Box::new(CliPlayer::new()),
        PlayerType::Ai => Box::new(RandomPlayer::new()),
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            dimension,
            player1,
            player2,
            seed,
            lenient,
        } => {
            println!(
                "Starting {}x{} game: {} ({:?}) vs {} ({:?})",
                dimension, dimension, PLAYER1_TOKEN, player1, PLAYER2_TOKEN, player2
            );
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let variant = if lenient {
                Variant::Lenient
            } else {
                Variant::Strict
            };
            let config = GameConfig::new(PLAYER1_TOKEN, PLAYER2_TOKEN, dimension).with_variant(variant);

            let mut driver = Driver::new(config, make_player(player1), make_player(player2), &mut rng)?;
            let summary = driver.run()?;
            log::debug!("{:?}", summary);
        }
        Commands::Patterns { dimension } => {
            let game = Game::new(PLAYER1_TOKEN, PLAYER2_TOKEN, dimension)?;
            for pattern in game.board().win_patterns() {
                println!("{:?}", pattern);
            }
        }
    }
    Ok(())
}
