//! Common types for tic-tac-toe: player tokens, turn sides and errors.

use core::fmt;

/// A value that marks a player's cells on the board.
///
/// Tokens are compared by equality only; `char`, `&'static str` and small
/// integers all qualify.
pub trait Token: Copy + Eq + fmt::Debug + fmt::Display {}

impl<T> Token for T where T: Copy + Eq + fmt::Debug + fmt::Display {}

/// The player whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player1,
    Player2,
}

impl Side {
    /// The side that moves after this one.
    pub fn other(self) -> Self {
        match self {
            Side::Player1 => Side::Player2,
            Side::Player2 => Side::Player1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player1 => write!(f, "player 1"),
            Side::Player2 => write!(f, "player 2"),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Cell index is outside `[0, len)`.
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::IndexOutOfRange { index, len } => {
                write!(f, "Cell index {} is out of range [0, {})", index, len)
            }
        }
    }
}

impl core::error::Error for BoardError {}

/// Errors returned by Game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Underlying board error (e.g., index out of range).
    Board(BoardError),
    /// A move was played before `start()`.
    NotStarted,
    /// `start()` was called on a game that already ran.
    AlreadyStarted,
    /// A move was played after the game ended.
    GameOver,
    /// The targeted cell already holds a token.
    CellUnavailable { index: usize },
    /// Board dimension must be at least 1.
    InvalidDimension(usize),
    /// Tokens must differ from each other and from the empty cell marker.
    InvalidTokens,
    /// Two consecutive turns ended without a move being played.
    Stalled { turns: usize },
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "Board error: {}", e),
            GameError::NotStarted => write!(f, "Game needs to be started first"),
            GameError::AlreadyStarted => write!(f, "Game already started"),
            GameError::GameOver => write!(f, "Game is already over"),
            GameError::CellUnavailable { index } => write!(f, "Cell {} is already occupied", index),
            GameError::InvalidDimension(dim) => {
                write!(f, "Board dimension must be at least 1, got {}", dim)
            }
            GameError::InvalidTokens => write!(
                f,
                "Player tokens must differ from each other and from the empty cell"
            ),
            GameError::Stalled { turns } => {
                write!(f, "No move was played in two consecutive turns (turn {})", turns)
            }
        }
    }
}

impl core::error::Error for GameError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            GameError::Board(e) => Some(e),
            _ => None,
        }
    }
}
