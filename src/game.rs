use alloc::string::ToString;
use alloc::vec::Vec;

use crate::{
    board::Board,
    common::{GameError, Side, Token},
    config::{GameConfig, Variant, EMPTY_CELL},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus<T: Token> {
    NotStarted,
    /// Carries the side that moves next.
    InProgress(Side),
    /// Carries the winning token, or `None` for a draw.
    Over(Option<T>),
}

/// Asked to play a move whenever its side is next.
///
/// Implementations are expected to call [`Game::play_player1_turn`] or
/// [`Game::play_player2_turn`] with one of the `available` indices.
pub trait TurnHandler<T: Token> {
    fn on_turn(&mut self, game: &mut Game<T>, available: &[usize]) -> Result<(), GameError>;
}

/// Notified after every completed turn.
pub trait UpdateHandler<T: Token> {
    fn on_game_update(&mut self, board: &Board<T>);
}

/// Notified exactly once when the game ends.
pub trait GameOverHandler<T: Token> {
    fn on_game_over(&mut self, winner: Option<T>);
}

impl<T, F> TurnHandler<T> for F
where
    T: Token,
    F: FnMut(&mut Game<T>, &[usize]) -> Result<(), GameError>,
{
    fn on_turn(&mut self, game: &mut Game<T>, available: &[usize]) -> Result<(), GameError> {
        self(game, available)
    }
}

impl<T, F> UpdateHandler<T> for F
where
    T: Token,
    F: FnMut(&Board<T>),
{
    fn on_game_update(&mut self, board: &Board<T>) {
        self(board)
    }
}

impl<T, F> GameOverHandler<T> for F
where
    T: Token,
    F: FnMut(Option<T>),
{
    fn on_game_over(&mut self, winner: Option<T>) {
        self(winner)
    }
}

/// The four handlers a game needs to run, supplied together to [`Game::start`].
pub struct Handlers<'a, T: Token> {
    pub player1: &'a mut dyn TurnHandler<T>,
    pub player2: &'a mut dyn TurnHandler<T>,
    pub on_update: &'a mut dyn UpdateHandler<T>,
    pub on_game_over: &'a mut dyn GameOverHandler<T>,
}

impl<'a, T: Token> Handlers<'a, T> {
    pub fn new(
        player1: &'a mut dyn TurnHandler<T>,
        player2: &'a mut dyn TurnHandler<T>,
        on_update: &'a mut dyn UpdateHandler<T>,
        on_game_over: &'a mut dyn GameOverHandler<T>,
    ) -> Self {
        Self {
            player1,
            player2,
            on_update,
            on_game_over,
        }
    }
}

/// Core game logic: owns the board, enforces turn order and detects the end.
#[derive(Debug, Clone)]
pub struct Game<T: Token> {
    player1_token: T,
    player2_token: T,
    variant: Variant,
    board: Board<T>,
    status: GameStatus<T>,
    turns: usize,
    moves: usize,
}

impl<T: Token> Game<T> {
    /// Create a strict-variant game on an empty `dimension`×`dimension` board.
    pub fn new(player1_token: T, player2_token: T, dimension: usize) -> Result<Self, GameError> {
        Self::with_config(GameConfig::new(player1_token, player2_token, dimension))
    }

    pub fn with_config(config: GameConfig<T>) -> Result<Self, GameError> {
        if config.dimension == 0 {
            return Err(GameError::InvalidDimension(config.dimension));
        }
        if config.player1_token == config.player2_token
            || renders_as_empty(&config.player1_token)
            || renders_as_empty(&config.player2_token)
        {
            return Err(GameError::InvalidTokens);
        }
        Ok(Self {
            player1_token: config.player1_token,
            player2_token: config.player2_token,
            variant: config.variant,
            board: Board::new(config.dimension),
            status: GameStatus::NotStarted,
            turns: 0,
            moves: 0,
        })
    }

    pub fn board(&self) -> &Board<T> {
        &self.board
    }

    pub fn status(&self) -> GameStatus<T> {
        self.status
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn player1_token(&self) -> T {
        self.player1_token
    }

    pub fn player2_token(&self) -> T {
        self.player2_token
    }

    /// Token belonging to `side`.
    pub fn token(&self, side: Side) -> T {
        match side {
            Side::Player1 => self.player1_token,
            Side::Player2 => self.player2_token,
        }
    }

    /// Side to move next; `None` before the game starts or after it ends.
    pub fn next_player(&self) -> Option<Side> {
        match self.status {
            GameStatus::InProgress(side) => Some(side),
            _ => None,
        }
    }

    /// Winning token once the game is over; `None` otherwise or on a draw.
    pub fn winner(&self) -> Option<T> {
        match self.status {
            GameStatus::Over(winner) => winner,
            _ => None,
        }
    }

    /// Number of completed turns.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Number of moves applied to the board.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Run the game loop to completion.
    ///
    /// Player 1 moves first and sides alternate after every turn. `on_update`
    /// fires after each turn and `on_game_over` fires once at the end.
    ///
    /// Fails with [`GameError::AlreadyStarted`] unless the game is fresh. Once
    /// the loop is running it stops at the first error a turn handler returns,
    /// and fails with [`GameError::Stalled`] when two turns in a row end
    /// without a move. In both cases `on_game_over` is not called.
    pub fn start(&mut self, handlers: Handlers<'_, T>) -> Result<(), GameError> {
        if self.status != GameStatus::NotStarted {
            return Err(GameError::AlreadyStarted);
        }
        let Handlers {
            player1,
            player2,
            on_update,
            on_game_over,
        } = handlers;

        log::debug!(
            "starting {}x{} game: {} vs {}",
            self.board.dimension(),
            self.board.dimension(),
            self.player1_token,
            self.player2_token
        );
        self.status = GameStatus::InProgress(Side::Player1);
        let mut idle_turns = 0;
        while !self.is_game_over() {
            let side = match self.status {
                GameStatus::InProgress(side) => side,
                _ => break,
            };
            let available = self.board.available_cells();
            let moves_before = self.moves;
            match side {
                Side::Player1 => player1.on_turn(self, &available)?,
                Side::Player2 => player2.on_turn(self, &available)?,
            }
            self.turns += 1;

            if self.moves == moves_before {
                idle_turns += 1;
                log::warn!("{} ended turn {} without a move", side, self.turns);
                if idle_turns >= 2 {
                    return Err(GameError::Stalled { turns: self.turns });
                }
            } else {
                idle_turns = 0;
            }

            self.status = GameStatus::InProgress(side.other());
            log::trace!("turn {} complete, {} to move", self.turns, side.other());
            on_update.on_game_update(&self.board);
        }

        let winner = self.check_winner();
        self.status = GameStatus::Over(winner);
        match winner {
            Some(token) => log::info!("game over after {} turns: {} wins", self.turns, token),
            None => log::info!("game over after {} turns: draw", self.turns),
        }
        on_game_over.on_game_over(winner);
        Ok(())
    }

    /// Place player 1's token at `cell`.
    pub fn play_player1_turn(&mut self, cell: usize) -> Result<(), GameError> {
        self.play_turn(Side::Player1, cell)
    }

    /// Place player 2's token at `cell`.
    pub fn play_player2_turn(&mut self, cell: usize) -> Result<(), GameError> {
        self.play_turn(Side::Player2, cell)
    }

    /// Place `side`'s token at `cell`.
    ///
    /// The strict variant rejects occupied cells; the lenient one overwrites.
    pub fn play_turn(&mut self, side: Side, cell: usize) -> Result<(), GameError> {
        match self.status {
            GameStatus::NotStarted => return Err(GameError::NotStarted),
            GameStatus::Over(_) => return Err(GameError::GameOver),
            GameStatus::InProgress(_) => {}
        }
        if self.variant == Variant::Strict && !self.board.is_cell_available(cell)? {
            return Err(GameError::CellUnavailable { index: cell });
        }
        let token = self.token(side);
        self.board.set_cell(cell, token)?;
        self.moves += 1;
        log::debug!("{} plays {} at cell {}", side, token, cell);
        Ok(())
    }

    /// First token that fills a whole win pattern, scanning patterns in order
    /// and player 1 before player 2 within each pattern.
    pub fn check_winner(&self) -> Option<T> {
        let cells = self.board.cells();
        let owns_line = |pattern: &Vec<usize>, token: T| {
            pattern.iter().all(|&idx| cells[idx] == Some(token))
        };
        for pattern in self.board.win_patterns() {
            if owns_line(&pattern, self.player1_token) {
                log::trace!("{} completes {:?}", self.player1_token, pattern);
                return Some(self.player1_token);
            }
            if owns_line(&pattern, self.player2_token) {
                log::trace!("{} completes {:?}", self.player2_token, pattern);
                return Some(self.player2_token);
            }
        }
        None
    }

    /// A game is over once someone owns a line or the board is full.
    pub fn is_game_over(&self) -> bool {
        self.check_winner().is_some() || self.board.is_full()
    }
}

fn renders_as_empty<T: Token>(token: &T) -> bool {
    let mut buf = [0u8; 4];
    token.to_string() == *EMPTY_CELL.encode_utf8(&mut buf)
}
