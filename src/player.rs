use alloc::boxed::Box;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{GameError, Side, Token},
    game::{Game, TurnHandler},
};

/// Interface implemented by different move sources.
pub trait Player<T: Token> {
    /// Choose one of the `available` cell indices. Only called while at least
    /// one cell is available.
    fn select_cell(&mut self, rng: &mut SmallRng, board: &Board<T>, available: &[usize]) -> usize;

    /// Inform the player of the move it just made.
    fn handle_move(&mut self, _cell: usize, _token: T) {}

    /// Inform the player that the game ended.
    fn handle_game_over(&mut self, _winner: Option<T>, _own_token: T) {}
}

/// Binds a [`Player`] to one side of a game so it can act as a turn handler.
pub struct Seat<'a, T: Token> {
    side: Side,
    player: Box<dyn Player<T> + 'a>,
    rng: SmallRng,
}

impl<'a, T: Token> Seat<'a, T> {
    pub fn new(side: Side, player: Box<dyn Player<T> + 'a>, rng: SmallRng) -> Self {
        Self { side, player, rng }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn player_mut(&mut self) -> &mut (dyn Player<T> + 'a) {
        self.player.as_mut()
    }
}

impl<T: Token> TurnHandler<T> for Seat<'_, T> {
    fn on_turn(&mut self, game: &mut Game<T>, available: &[usize]) -> Result<(), GameError> {
        let cell = self
            .player
            .select_cell(&mut self.rng, game.board(), available);
        game.play_turn(self.side, cell)?;
        self.player.handle_move(cell, game.token(self.side));
        Ok(())
    }
}
