//! Batch matches: the minimax engine against a seeded random opponent.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;
use tictactoe_core::{evaluate, Board, Mark, Outcome, Result};
use tictactoe_search::{Agent, MinimaxAgent, RandomAgent};

/// Match results.
#[derive(Serialize, Debug, Default, PartialEq, Eq)]
pub struct MatchSummary {
    pub engine_wins: usize,
    pub random_wins: usize,
    pub draws: usize,
    pub total_games: usize,
}

impl MatchSummary {
    /// Fraction of games the engine did not lose.
    pub fn unbeaten_rate(&self) -> f32 {
        if self.total_games == 0 {
            return 0.0;
        }
        (self.engine_wins + self.draws) as f32 / self.total_games as f32
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::OpponentWins => self.engine_wins += 1,
            Outcome::PlayerWins => self.random_wins += 1,
            Outcome::Draw | Outcome::Ongoing => self.draws += 1,
        }
        self.total_games += 1;
    }
}

/// Play one game: the engine holds `O`, the random agent holds `X`.
pub fn play_match_game(engine_first: bool, seed: u64) -> Result<Outcome> {
    let engine = MinimaxAgent;
    let random = RandomAgent::new(ChaCha8Rng::seed_from_u64(seed));

    let mut board = Board::new();
    let mut to_move = if engine_first {
        Mark::Opponent
    } else {
        Mark::Player
    };

    while !evaluate(&board).is_terminal() {
        let cell = match to_move {
            Mark::Opponent => engine.choose(&board)?,
            Mark::Player => random.choose(&board)?,
        };
        board.place(cell, to_move)?;
        to_move = to_move.opposite();
    }

    Ok(evaluate(&board))
}

/// Play `games` independent games in parallel.
///
/// Game `i` uses seed `seed + i * 1000` for the random agent.
pub fn run_match(games: usize, seed: u64, engine_first: bool) -> Result<MatchSummary> {
    let outcomes: Vec<Outcome> = (0..games)
        .into_par_iter()
        .map(|i| play_match_game(engine_first, seed.wrapping_add(i as u64 * 1000)))
        .collect::<Result<_>>()?;

    let mut summary = MatchSummary::default();
    for outcome in outcomes {
        summary.record(outcome);
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_match_game_finishes() {
        let outcome = play_match_game(false, 42).unwrap();
        assert!(outcome.is_terminal());
        assert_ne!(outcome, Outcome::PlayerWins);
    }

    #[test]
    fn test_run_match_engine_unbeaten() {
        let summary = run_match(12, 7, true).unwrap();

        assert_eq!(summary.total_games, 12);
        assert_eq!(summary.random_wins, 0);
        assert_eq!(summary.engine_wins + summary.draws, 12);
        assert!((summary.unbeaten_rate() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_run_match_deterministic() {
        assert_eq!(run_match(6, 3, false).unwrap(), run_match(6, 3, false).unwrap());
    }

    #[test]
    fn test_summary_json() {
        let mut summary = MatchSummary::default();
        summary.record(Outcome::OpponentWins);
        summary.record(Outcome::Draw);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["engine_wins"], 1);
        assert_eq!(json["draws"], 1);
        assert_eq!(json["total_games"], 2);
    }

    #[test]
    fn test_empty_summary_rate() {
        assert_eq!(MatchSummary::default().unbeaten_rate(), 0.0);
    }
}
