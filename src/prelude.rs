//! Commonly used types and utilities for ease of import.

pub use crate::{
    Board, Game, GameConfig, GameError, GameStatus, Handlers, Player, RandomPlayer,
    ScriptedPlayer, Seat, Side, Variant,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_board, CliPlayer, Driver, MatchSummary};
