//! Move-choosing agents.
//!
//! The `Agent` trait lets the front-end and tests swap who picks moves:
//! - `MinimaxAgent` plays the computer's side perfectly
//! - `RandomAgent` picks uniformly among empty cells

use crate::minimax::best_move;
use rand::Rng;
use std::cell::RefCell;
use tictactoe_core::{Board, Result, TicTacToeError};

/// Trait for anything that picks a cell to mark.
pub trait Agent {
    /// Choose an empty cell on `board`.
    ///
    /// # Errors
    /// Returns an error if there is no move to make on `board`.
    fn choose(&self, board: &Board) -> Result<usize>;
}

/// Perfect-play agent for the computer's side (`Mark::Opponent`).
#[derive(Clone, Copy, Debug, Default)]
pub struct MinimaxAgent;

impl Agent for MinimaxAgent {
    fn choose(&self, board: &Board) -> Result<usize> {
        let mut scratch = *board;
        best_move(&mut scratch)
    }
}

/// Agent picking uniformly among empty cells.
pub struct RandomAgent<R: Rng> {
    /// Random number generator (wrapped in RefCell for interior mutability).
    rng: RefCell<R>,
}

impl<R: Rng> RandomAgent<R> {
    /// Create a new random agent.
    pub fn new(rng: R) -> Self {
        Self {
            rng: RefCell::new(rng),
        }
    }
}

impl<R: Rng> Agent for RandomAgent<R> {
    fn choose(&self, board: &Board) -> Result<usize> {
        let empties: Vec<usize> = board.empty_cells().collect();
        if empties.is_empty() {
            return Err(TicTacToeError::NoLegalMoves);
        }

        let idx = self.rng.borrow_mut().gen_range(0..empties.len());
        Ok(empties[idx])
    }
}
