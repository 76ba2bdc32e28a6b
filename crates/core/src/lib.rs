//! Tic-tac-toe core - board, winning lines and outcome evaluation
//!
//! This crate holds the game rules shared by the search engine and the
//! front-end. Everything here is pure: evaluating a board never mutates it
//! and never fails.
//!
//! # Types
//!
//! - [`Board`] - Nine cells in row-major order
//! - [`Mark`] - `Player` (human, `X`) or `Opponent` (computer, `O`)
//! - [`Outcome`] - Won, drawn or ongoing, derived on demand by [`evaluate`]
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{evaluate, Board, Outcome};
//!
//! let board: Board = "XXX OO. ...".parse().unwrap();
//! assert_eq!(evaluate(&board), Outcome::PlayerWins);
//! ```

mod board;
mod error;
mod outcome;

pub use board::{Board, Line, Mark, CELL_COUNT, LINES};
pub use error::{Result, TicTacToeError};
pub use outcome::{evaluate, Outcome, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
