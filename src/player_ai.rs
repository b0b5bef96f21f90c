use alloc::collections::VecDeque;
use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::{board::Board, common::Token, player::Player};

/// AI player that picks uniformly among the available cells.
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Token> Player<T> for RandomPlayer {
    fn select_cell(&mut self, rng: &mut SmallRng, _board: &Board<T>, available: &[usize]) -> usize {
        available[rng.random_range(0..available.len())]
    }
}

/// Plays a fixed sequence of cells.
///
/// Scripted cells that are no longer available are skipped; once the script
/// runs out the lowest available cell is played.
pub struct ScriptedPlayer {
    script: VecDeque<usize>,
}

impl ScriptedPlayer {
    pub fn new<I: IntoIterator<Item = usize>>(cells: I) -> Self {
        Self {
            script: cells.into_iter().collect(),
        }
    }

    /// Scripted cells not yet played.
    pub fn remaining(&self) -> Vec<usize> {
        self.script.iter().copied().collect()
    }
}

impl<T: Token> Player<T> for ScriptedPlayer {
    fn select_cell(&mut self, _rng: &mut SmallRng, _board: &Board<T>, available: &[usize]) -> usize {
        while let Some(cell) = self.script.pop_front() {
            if available.contains(&cell) {
                return cell;
            }
            log::debug!("scripted cell {} is taken, skipping", cell);
        }
        available[0]
    }
}
