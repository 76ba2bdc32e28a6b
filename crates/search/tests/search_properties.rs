//! Property-based tests for the minimax search.
//!
//! These tests verify invariants that must hold on any reachable position:
//! - The chosen cell is empty
//! - The board is left exactly as it was
//! - The top-level choice agrees with the recursive score
//! - Unplayable positions are rejected, never answered with a sentinel

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tictactoe_core::{evaluate, Board, Mark, Outcome, TicTacToeError};
use tictactoe_search::{analyze, best_move, minimax};

// =============================================================================
// Strategies for generating test inputs
// =============================================================================

/// Generate a random seed
fn arb_seed() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Generate a number of moves already played (1-9)
fn arb_move_number() -> impl Strategy<Value = usize> {
    1usize..=9
}

/// Generate a tic-tac-toe position by making random alternating moves.
///
/// Play stops early if the game ends.
fn arb_position() -> impl Strategy<Value = Board> {
    (arb_move_number(), arb_seed(), any::<bool>()).prop_map(|(num_moves, seed, player_first)| {
        let mut board = Board::new();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut to_move = if player_first {
            Mark::Player
        } else {
            Mark::Opponent
        };

        for _ in 0..num_moves {
            if evaluate(&board).is_terminal() {
                break;
            }
            let empties: Vec<usize> = board.empty_cells().collect();
            let idx = rand::Rng::gen_range(&mut rng, 0..empties.len());
            board.place(empties[idx], to_move).unwrap();
            to_move = to_move.opposite();
        }

        board
    })
}

/// Cell where the computer would complete a line right away, if any.
fn immediate_win(board: &Board) -> Option<usize> {
    board.empty_cells().find(|&cell| {
        let mut next = *board;
        next.set_cell(cell, Some(Mark::Opponent));
        evaluate(&next) == Outcome::OpponentWins
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The chosen cell is always empty.
    #[test]
    fn prop_best_move_is_empty_cell(mut board in arb_position()) {
        if evaluate(&board).is_terminal() {
            return Ok(());
        }

        let cell = best_move(&mut board).unwrap();
        prop_assert!(cell < 9);
        prop_assert!(board.is_empty_cell(cell), "cell {} is marked on\n{}", cell, board);
    }

    /// Searching leaves the board unchanged.
    #[test]
    fn prop_best_move_restores_board(mut board in arb_position()) {
        let before = board;
        let _ = best_move(&mut board);
        prop_assert_eq!(board, before);

        let _ = minimax(&mut board, false);
        prop_assert_eq!(board, before);
    }

    /// The best top-level score equals the recursive score of the position
    /// with the computer to move.
    #[test]
    fn prop_best_score_matches_minimax(mut board in arb_position()) {
        if evaluate(&board).is_terminal() {
            return Ok(());
        }

        let analysis = analyze(&mut board).unwrap();
        let best = analysis.best().unwrap();
        prop_assert_eq!(best.score, minimax(&mut board, true));

        // First-seen index wins ties.
        for m in &analysis.moves {
            prop_assert!(m.score <= best.score);
            if m.cell < best.cell {
                prop_assert!(m.score < best.score);
            }
        }
    }

    /// A position with an immediate win is always scored as won.
    #[test]
    fn prop_sees_immediate_win(mut board in arb_position()) {
        if evaluate(&board).is_terminal() || immediate_win(&board).is_none() {
            return Ok(());
        }

        let analysis = analyze(&mut board).unwrap();
        prop_assert_eq!(analysis.best().map(|m| m.score), Some(1));
    }

    /// Finished games are rejected with a typed error.
    #[test]
    fn prop_terminal_positions_rejected(mut board in arb_position()) {
        let outcome = evaluate(&board);
        let result = best_move(&mut board);

        match outcome {
            Outcome::Ongoing => prop_assert!(result.is_ok()),
            Outcome::Draw => prop_assert_eq!(result, Err(TicTacToeError::NoLegalMoves)),
            won if board.is_full() => prop_assert_eq!(result, Err(TicTacToeError::NoLegalMoves), "{}", won),
            won => prop_assert_eq!(result, Err(TicTacToeError::GameOver(won))),
        }
    }
}
