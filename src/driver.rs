#![cfg(feature = "std")]

//! Reference driver: wires two players and console output into a game.

use alloc::boxed::Box;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::{
    board::Board,
    common::{Side, Token},
    config::GameConfig,
    game::{Game, Handlers},
    player::{Player, Seat},
};

/// Result of a finished game, ready for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub dimension: usize,
    /// Winning token rendered as text; `None` for a draw.
    pub winner: Option<String>,
    pub winning_side: Option<Side>,
    pub turns: usize,
    pub moves: usize,
    /// Final board in its textual form.
    pub board: String,
}

pub struct Driver<'a, T: Token> {
    game: Game<T>,
    seat1: Seat<'a, T>,
    seat2: Seat<'a, T>,
    verbose: bool,
}

impl<'a, T: Token> Driver<'a, T> {
    /// Each seat gets its own generator seeded from `rng`.
    pub fn new(
        config: GameConfig<T>,
        player1: Box<dyn Player<T> + 'a>,
        player2: Box<dyn Player<T> + 'a>,
        rng: &mut SmallRng,
    ) -> anyhow::Result<Self> {
        let game = Game::with_config(config).map_err(|e| anyhow::anyhow!(e))?;
        Ok(Self {
            game,
            seat1: Seat::new(Side::Player1, player1, SmallRng::from_rng(&mut *rng)),
            seat2: Seat::new(Side::Player2, player2, SmallRng::from_rng(&mut *rng)),
            verbose: true,
        })
    }

    /// Suppress printing the board after every turn and the final result.
    pub fn quiet(mut self) -> Self {
        self.verbose = false;
        self
    }

    pub fn game(&self) -> &Game<T> {
        &self.game
    }

    /// Play the game to the end and report the outcome.
    pub fn run(&mut self) -> anyhow::Result<MatchSummary> {
        let verbose = self.verbose;
        let mut on_update = |board: &Board<T>| {
            if verbose {
                std::println!("{}", board);
            }
        };
        let mut result: Option<Option<T>> = None;
        let mut on_game_over = |winner: Option<T>| {
            if verbose {
                match winner {
                    Some(token) => std::println!("{} wins", token),
                    None => std::println!("draw"),
                }
            }
            result = Some(winner);
        };

        self.game
            .start(Handlers::new(
                &mut self.seat1,
                &mut self.seat2,
                &mut on_update,
                &mut on_game_over,
            ))
            .map_err(|e| anyhow::anyhow!("game aborted: {}", e))?;

        let winner = result.ok_or_else(|| anyhow::anyhow!("game ended without a result"))?;
        let token1 = self.game.token(self.seat1.side());
        let token2 = self.game.token(self.seat2.side());
        self.seat1.player_mut().handle_game_over(winner, token1);
        self.seat2.player_mut().handle_game_over(winner, token2);

        let winning_side = winner.map(|token| {
            if token == token1 {
                Side::Player1
            } else {
                Side::Player2
            }
        });
        Ok(MatchSummary {
            dimension: self.game.board().dimension(),
            winner: winner.map(|token| token.to_string()),
            winning_side,
            turns: self.game.turns(),
            moves: self.game.moves(),
            board: self.game.board().to_string(),
        })
    }
}
