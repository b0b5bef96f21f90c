use crate::common::Token;

pub const DEFAULT_DIMENSION: usize = 3;
pub const EMPTY_CELL: char = '.';
pub const PLAYER1_TOKEN: char = 'x';
pub const PLAYER2_TOKEN: char = 'o';

/// Which validation rules a game enforces when moves are played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// Rejects moves onto occupied cells.
    #[default]
    Strict,
    /// Overwrites whatever the target cell holds.
    Lenient,
}

/// Runtime settings for a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig<T: Token> {
    pub dimension: usize,
    pub player1_token: T,
    pub player2_token: T,
    pub variant: Variant,
}

impl<T: Token> GameConfig<T> {
    pub fn new(player1_token: T, player2_token: T, dimension: usize) -> Self {
        Self {
            dimension,
            player1_token,
            player2_token,
            variant: Variant::Strict,
        }
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }
}

impl Default for GameConfig<char> {
    fn default() -> Self {
        Self::new(PLAYER1_TOKEN, PLAYER2_TOKEN, DEFAULT_DIMENSION)
    }
}
