//! Exhaustive minimax search without pruning.
//!
//! The computer (`Mark::Opponent`) is always the maximizer and the human
//! (`Mark::Player`) the minimizer. Terminal positions score +1, -1 or 0
//! regardless of depth, so a quick win and a slow win look the same to the
//! search. Ties between moves go to the lowest cell index.

use log::debug;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use tictactoe_core::{evaluate, Board, Mark, Outcome, Result, TicTacToeError, CELL_COUNT};

/// Counters collected while walking the game tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, terminal ones included.
    pub nodes: u64,

    /// Positions that ended the game.
    pub leaves: u64,
}

/// Minimax score of a single candidate move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScore {
    /// Cell the computer would mark.
    pub cell: usize,

    /// Score with perfect play afterwards: +1 computer wins, -1 human wins,
    /// 0 draw.
    pub score: i32,
}

/// Scores of every legal computer move from one position.
#[derive(Clone, Debug)]
pub struct Analysis {
    /// One entry per empty cell, ascending by cell.
    pub moves: Vec<MoveScore>,

    /// Work done to produce the scores.
    pub stats: SearchStats,
}

impl Analysis {
    /// The first move with the strictly highest score.
    pub fn best(&self) -> Option<MoveScore> {
        let mut best: Option<MoveScore> = None;
        for &candidate in &self.moves {
            if best.map_or(true, |b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }
        best
    }
}

/// A mark placed for exploration, cleared again when dropped.
///
/// Dereferences to the board so recursion can run on the tentative
/// position. The cell is emptied on every exit path.
struct Placement<'a> {
    board: &'a mut Board,
    cell: usize,
}

impl<'a> Placement<'a> {
    fn new(board: &'a mut Board, cell: usize, mark: Mark) -> Self {
        debug_assert!(board.is_empty_cell(cell), "cell {} is not empty", cell);
        board.set_cell(cell, Some(mark));
        Self { board, cell }
    }
}

impl Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.set_cell(self.cell, None);
    }
}

/// Score `board` with perfect play from both sides.
///
/// `is_maximizing` selects the side to move: the computer when true, the
/// human when false. The board is explored in place and restored before
/// returning.
pub fn minimax(board: &mut Board, is_maximizing: bool) -> i32 {
    let mut stats = SearchStats::default();
    search(board, is_maximizing, &mut stats)
}

fn search(board: &mut Board, is_maximizing: bool, stats: &mut SearchStats) -> i32 {
    stats.nodes += 1;

    if let Some(score) = evaluate(board).score() {
        stats.leaves += 1;
        return score;
    }

    let mark = if is_maximizing {
        Mark::Opponent
    } else {
        Mark::Player
    };
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for cell in 0..CELL_COUNT {
        if !board.is_empty_cell(cell) {
            continue;
        }

        let mut placed = Placement::new(board, cell, mark);
        let score = search(&mut placed, !is_maximizing, stats);

        best = if is_maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Check that the computer has a move to make on `board`.
///
/// # Errors
/// - `NoLegalMoves` if every cell is marked
/// - `GameOver` if a line is already complete
fn check_playable(board: &Board) -> Result<()> {
    if board.is_full() {
        return Err(TicTacToeError::NoLegalMoves);
    }

    match evaluate(board) {
        Outcome::Ongoing => Ok(()),
        decided => Err(TicTacToeError::GameOver(decided)),
    }
}

/// Score every legal computer move on `board`.
///
/// Each empty cell is tried in ascending order: the computer's mark is
/// placed, the rest of the game is searched with the human to move, and the
/// cell is cleared again. `board` is unchanged when this returns.
///
/// # Errors
/// - `NoLegalMoves` if every cell is marked
/// - `GameOver` if a line is already complete
pub fn analyze(board: &mut Board) -> Result<Analysis> {
    check_playable(board)?;

    let mut stats = SearchStats::default();
    let mut moves = Vec::with_capacity(CELL_COUNT);

    for cell in 0..CELL_COUNT {
        if !board.is_empty_cell(cell) {
            continue;
        }

        let mut placed = Placement::new(board, cell, Mark::Opponent);
        let score = search(&mut placed, false, &mut stats);
        moves.push(MoveScore { cell, score });
    }

    Ok(Analysis { moves, stats })
}

/// Pick the computer's move on `board`.
///
/// Returns the lowest-indexed cell among those with the highest minimax
/// score. `board` is unchanged when this returns.
///
/// # Errors
/// - `NoLegalMoves` if every cell is marked
/// - `GameOver` if a line is already complete
pub fn best_move(board: &mut Board) -> Result<usize> {
    let analysis = analyze(board)?;
    let best = analysis.best().ok_or(TicTacToeError::NoLegalMoves)?;

    debug!(
        "best move {} (score {}) on {} after {} nodes, {} leaves",
        best.cell,
        best.score,
        board.to_compact(),
        analysis.stats.nodes,
        analysis.stats.leaves
    );

    Ok(best.cell)
}
