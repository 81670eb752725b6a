//! High score leaderboard
//!
//! Local top-10 of completed runs, fed by the session's score submissions.

use std::cmp::Reverse;

use serde::{Deserialize, Serialize};

use crate::session::ScoreSubmission;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighScoreEntry {
    pub player: String,
    pub score: u32,
    /// Run that produced the score
    pub run_id: u32,
}

/// High score leaderboard (sorted by score, best first)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScoreEntry {
    /// Sort key: higher score first, then the earlier run
    fn rank_key(&self) -> (Reverse<u32>, u32) {
        (Reverse(self.score), self.run_id)
    }
}

impl HighScores {
    /// Create empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// 0-based slot a `(score, run_id)` pair would take
    fn slot(&self, score: u32, run_id: u32) -> usize {
        let key = (Reverse(score), run_id);
        self.entries.partition_point(|e| e.rank_key() < key)
    }

    /// Check if a score from a new run would make the board
    pub fn qualifies(&self, score: u32) -> bool {
        self.potential_rank(score).is_some()
    }

    /// Rank (1-indexed) a score from a new run would take
    ///
    /// A new run is later than every recorded one, so it loses ties.
    pub fn potential_rank(&self, score: u32) -> Option<usize> {
        if score == 0 {
            return None;
        }
        let slot = self.slot(score, u32::MAX);
        (slot < MAX_HIGH_SCORES).then_some(slot + 1)
    }

    /// Insert a score; returns its rank (1-indexed) or None if it missed the board
    pub fn add_score(&mut self, player: &str, score: u32, run_id: u32) -> Option<usize> {
        if score == 0 {
            return None;
        }
        let slot = self.slot(score, run_id);
        if slot >= MAX_HIGH_SCORES {
            return None;
        }

        self.entries.insert(
            slot,
            HighScoreEntry {
                player: player.to_string(),
                score,
                run_id,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(slot + 1)
    }

    /// Record a session submission
    pub fn record(&mut self, submission: &ScoreSubmission) -> Option<usize> {
        let rank = self.add_score(&submission.player, submission.score, submission.run_id);
        if let Some(rank) = rank {
            log::info!(
                "{} placed #{} with {} (run {})",
                submission.player,
                rank,
                submission.score,
                submission.run_id
            );
        }
        rank
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut scores: Self = serde_json::from_str(json)?;
        // Foreign input may be unsorted or oversized
        scores.entries.retain(|e| e.score > 0);
        scores.entries.sort_by_key(HighScoreEntry::rank_key);
        scores.entries.truncate(MAX_HIGH_SCORES);
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_never_qualifies() {
        let mut scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert_eq!(scores.add_score("Guest", 0, 1), None);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_sorted_descending() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score("a", 3, 1), Some(1));
        assert_eq!(scores.add_score("b", 7, 2), Some(1));
        assert_eq!(scores.add_score("c", 5, 3), Some(2));
        assert_eq!(scores.top_score(), Some(7));
        let order: Vec<u32> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(order, vec![7, 5, 3]);
    }

    #[test]
    fn test_ties_rank_after_existing() {
        let mut scores = HighScores::new();
        scores.add_score("first", 4, 1);
        assert_eq!(scores.potential_rank(4), Some(2));
        assert_eq!(scores.add_score("second", 4, 2), Some(2));
        assert_eq!(scores.entries[0].player, "first");
    }

    #[test]
    fn test_ties_ordered_by_run() {
        let mut scores = HighScores::new();
        scores.add_score("late", 6, 9);
        scores.add_score("mid", 6, 5);
        assert_eq!(scores.add_score("early", 6, 2), Some(1));
        let runs: Vec<u32> = scores.entries.iter().map(|e| e.run_id).collect();
        assert_eq!(runs, vec![2, 5, 9]);
    }

    #[test]
    fn test_full_board_keeps_older_tie() {
        let mut scores = HighScores::new();
        for run in 1..=10 {
            scores.add_score("p", 5, run);
        }
        assert!(!scores.qualifies(5));
        assert_eq!(scores.add_score("p", 5, 11), None);
        assert_eq!(scores.add_score("p", 6, 12), Some(1));
        assert_eq!(scores.entries.last().map(|e| e.run_id), Some(9));
    }

    #[test]
    fn test_truncates_to_ten() {
        let mut scores = HighScores::new();
        for run in 1..=12 {
            scores.add_score("p", run, run);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().map(|e| e.score), Some(3));
        assert!(!scores.qualifies(3));
        assert_eq!(scores.potential_rank(2), None);
        assert_eq!(scores.potential_rank(13), Some(1));
    }

    #[test]
    fn test_record_submission() {
        let mut scores = HighScores::new();
        let submission = ScoreSubmission {
            run_id: 4,
            player: "Guest".to_string(),
            score: 9,
        };
        assert_eq!(scores.record(&submission), Some(1));
        assert_eq!(scores.entries[0].run_id, 4);
    }

    #[test]
    fn test_json_normalizes_foreign_input() {
        let json = r#"{ "entries": [
            { "player": "x", "score": 1, "runId": 1 },
            { "player": "y", "score": 0, "runId": 2 },
            { "player": "z", "score": 8, "runId": 3 }
        ] }"#;
        let scores = HighScores::from_json(json).unwrap();
        let players: Vec<&str> = scores.entries.iter().map(|e| e.player.as_str()).collect();
        assert_eq!(players, vec!["z", "x"]);

        let back = HighScores::from_json(&scores.to_json().unwrap()).unwrap();
        assert_eq!(back, scores);
    }
}
