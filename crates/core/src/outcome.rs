//! Terminal-state detection.

use crate::{Board, Mark};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Score of a position won by the computer.
pub const WIN_SCORE: i32 = 1;

/// Score of a position won by the human.
pub const LOSS_SCORE: i32 = -1;

/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// State of a game, derived from a board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The human completed a line.
    PlayerWins,
    /// The computer completed a line.
    OpponentWins,
    /// The board is full with no completed line.
    Draw,
    /// At least one empty cell and no completed line.
    Ongoing,
}

impl Outcome {
    /// Outcome for a game won by `mark`.
    pub fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::Player => Outcome::PlayerWins,
            Mark::Opponent => Outcome::OpponentWins,
        }
    }

    /// Returns true if the game has ended.
    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }

    /// The winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::PlayerWins => Some(Mark::Player),
            Outcome::OpponentWins => Some(Mark::Opponent),
            Outcome::Draw | Outcome::Ongoing => None,
        }
    }

    /// Minimax score with the computer as maximizer:
    /// - `Some(1)` if the computer won
    /// - `Some(-1)` if the human won
    /// - `Some(0)` for a draw
    /// - `None` if the game is not over
    pub fn score(self) -> Option<i32> {
        match self {
            Outcome::OpponentWins => Some(WIN_SCORE),
            Outcome::PlayerWins => Some(LOSS_SCORE),
            Outcome::Draw => Some(DRAW_SCORE),
            Outcome::Ongoing => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::PlayerWins => write!(f, "{} wins", Mark::Player),
            Outcome::OpponentWins => write!(f, "{} wins", Mark::Opponent),
            Outcome::Draw => write!(f, "draw"),
            Outcome::Ongoing => write!(f, "ongoing"),
        }
    }
}

/// Decide whether `board` is won, drawn, or still in play.
///
/// Lines are checked in [`LINES`](crate::LINES) order and the first
/// completed one decides the winner. A full board without a completed line
/// is a draw.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = board.winner() {
        Outcome::won_by(mark)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
