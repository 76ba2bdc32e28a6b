//! Minimax move search for tic-tac-toe.
//!
//! This crate walks the complete game tree from a position to pick the
//! computer's move. The computer never loses: it wins when the human errs
//! and draws otherwise.
//!
//! # Features
//!
//! - **Exhaustive**: No pruning and no depth limit; every continuation is scored
//! - **In-place**: Moves are explored on the caller's board and undone by a
//!   drop guard, so the board is unchanged afterwards
//! - **Deterministic**: Ties go to the lowest cell index
//! - **Agents**: `MinimaxAgent` and `RandomAgent` behind a common `Agent` trait
//!
//! # Example
//!
//! ```
//! use tictactoe_core::Board;
//! use tictactoe_search::best_move;
//!
//! // X threatens the top row; O must block at cell 2.
//! let mut board: Board = "XX. .O. ...".parse().unwrap();
//! assert_eq!(best_move(&mut board).unwrap(), 2);
//! ```

pub mod agent;
pub mod minimax;

pub use agent::{Agent, MinimaxAgent, RandomAgent};
pub use minimax::{analyze, best_move, minimax, Analysis, MoveScore, SearchStats};
