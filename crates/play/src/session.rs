//! Game session: the live board, side to move and game status.
//!
//! A session is an explicit value owned by the front-end. The engine only
//! ever sees the board it is handed.

use log::{debug, info};
use tictactoe_core::{evaluate, Board, Mark, Outcome, Result, TicTacToeError};
use tictactoe_search::best_move;

/// One game of human versus computer.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    to_move: Mark,
    first: Mark,
    outcome: Outcome,
}

impl GameSession {
    /// Start a game with `first` to move.
    pub fn new(first: Mark) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
            first,
            outcome: Outcome::Ongoing,
        }
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Outcome as of the last move.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true while moves are accepted.
    pub fn is_active(&self) -> bool {
        !self.outcome.is_terminal()
    }

    /// Mark `cell` for the human.
    ///
    /// # Errors
    /// - `GameOver` if the game has ended
    /// - `NotYourTurn` if the computer is to move
    /// - `InvalidCell` / `CellOccupied` if `cell` cannot be marked
    pub fn human_move(&mut self, cell: usize) -> Result<Outcome> {
        self.check_turn(Mark::Player)?;
        self.board.place(cell, Mark::Player)?;
        debug!("human marked cell {}", cell);
        Ok(self.finish_turn())
    }

    /// Let the engine pick and mark a cell for the computer.
    ///
    /// Returns the chosen cell.
    ///
    /// # Errors
    /// - `GameOver` if the game has ended
    /// - `NotYourTurn` if the human is to move
    pub fn computer_move(&mut self) -> Result<usize> {
        self.check_turn(Mark::Opponent)?;
        let cell = best_move(&mut self.board)?;
        self.board.place(cell, Mark::Opponent)?;
        debug!("computer marked cell {}", cell);
        self.finish_turn();
        Ok(cell)
    }

    /// Clear the board and start over with the original first mover.
    pub fn reset(&mut self) {
        self.board.clear();
        self.to_move = self.first;
        self.outcome = Outcome::Ongoing;
        debug!("session reset, {} to move", self.first);
    }

    /// Status line for display.
    pub fn status(&self) -> String {
        match self.outcome {
            Outcome::PlayerWins => format!("Player {} wins!", Mark::Player),
            Outcome::OpponentWins => "AI wins!".to_string(),
            Outcome::Draw => "It's a tie!".to_string(),
            Outcome::Ongoing => match self.to_move {
                Mark::Player => format!("Player {}'s turn", Mark::Player),
                Mark::Opponent => "AI is thinking...".to_string(),
            },
        }
    }

    fn check_turn(&self, mark: Mark) -> Result<()> {
        if self.outcome.is_terminal() {
            return Err(TicTacToeError::GameOver(self.outcome));
        }
        if self.to_move != mark {
            return Err(TicTacToeError::NotYourTurn(mark));
        }
        Ok(())
    }

    fn finish_turn(&mut self) -> Outcome {
        self.outcome = evaluate(&self.board);
        if self.outcome.is_terminal() {
            info!("game over: {} on {}", self.outcome, self.board.to_compact());
        } else {
            self.to_move = self.to_move.opposite();
        }
        self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let session = GameSession::new(Mark::Player);
        assert!(session.is_active());
        assert_eq!(session.to_move(), Mark::Player);
        assert!(session.board().is_empty());
        assert_eq!(session.status(), "Player X's turn");
    }

    #[test]
    fn test_turns_alternate() {
        let mut session = GameSession::new(Mark::Player);

        assert_eq!(session.human_move(0), Ok(Outcome::Ongoing));
        assert_eq!(session.to_move(), Mark::Opponent);
        assert_eq!(session.status(), "AI is thinking...");

        let cell = session.computer_move().unwrap();
        assert_eq!(cell, 4);
        assert_eq!(session.board().get(4), Some(Mark::Opponent));
        assert_eq!(session.to_move(), Mark::Player);
    }

    #[test]
    fn test_wrong_turn_rejected() {
        let mut session = GameSession::new(Mark::Player);
        assert_eq!(
            session.computer_move(),
            Err(TicTacToeError::NotYourTurn(Mark::Opponent))
        );

        session.human_move(0).unwrap();
        assert_eq!(
            session.human_move(1),
            Err(TicTacToeError::NotYourTurn(Mark::Player))
        );
    }

    #[test]
    fn test_occupied_and_invalid_cells() {
        let mut session = GameSession::new(Mark::Opponent);
        let cell = session.computer_move().unwrap();

        assert_eq!(
            session.human_move(cell),
            Err(TicTacToeError::CellOccupied(cell))
        );
        assert_eq!(session.human_move(9), Err(TicTacToeError::InvalidCell(9)));
        assert_eq!(session.to_move(), Mark::Player);
    }

    #[test]
    fn test_computer_wins_after_mistake() {
        let mut session = GameSession::new(Mark::Player);

        // X: 0, O: 4 (center), X: 1, O must block at 2, X: 3 leaves 6 open.
        session.human_move(0).unwrap();
        assert_eq!(session.computer_move(), Ok(4));
        session.human_move(1).unwrap();
        assert_eq!(session.computer_move(), Ok(2));
        session.human_move(3).unwrap();
        assert_eq!(session.computer_move(), Ok(6));

        assert_eq!(session.outcome(), Outcome::OpponentWins);
        assert!(!session.is_active());
        assert_eq!(session.status(), "AI wins!");
        assert_eq!(
            session.human_move(5),
            Err(TicTacToeError::GameOver(Outcome::OpponentWins))
        );
    }

    #[test]
    fn test_reset() {
        let mut session = GameSession::new(Mark::Opponent);
        session.computer_move().unwrap();
        session.human_move(8).unwrap();

        session.reset();
        assert!(session.board().is_empty());
        assert_eq!(session.to_move(), Mark::Opponent);
        assert!(session.is_active());
    }

    #[test]
    fn test_status_messages() {
        let mut session = GameSession::new(Mark::Player);
        session.outcome = Outcome::PlayerWins;
        assert_eq!(session.status(), "Player X wins!");
        session.outcome = Outcome::Draw;
        assert_eq!(session.status(), "It's a tie!");
    }
}
