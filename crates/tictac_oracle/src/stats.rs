//! Summary counts over a classification table.

use crate::classifier::StateClassifier;
use crate::types::{GameStatus, LeadingPlayer};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::instrument;

/// How many encodings fall into each status and leader bucket.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TableStats {
    /// Entries per status.
    by_status: BTreeMap<GameStatus, usize>,
    /// Game-point entries per leader.
    game_point_leaders: BTreeMap<String, usize>,
    /// Won entries per winner.
    winners: BTreeMap<String, usize>,
    /// Total entries.
    total: usize,
}

impl TableStats {
    /// Tallies the whole table.
    #[instrument(skip(classifier))]
    pub fn collect(classifier: &StateClassifier) -> Self {
        let mut by_status: BTreeMap<GameStatus, usize> =
            <GameStatus as strum::IntoEnumIterator>::iter()
                .map(|status| (status, 0))
                .collect();
        let mut game_point_leaders = BTreeMap::new();
        let mut winners = BTreeMap::new();

        for (_, info) in classifier.iter() {
            *by_status.entry(info.status()).or_default() += 1;
            let leader = info.leading_player();
            match info.status() {
                GameStatus::GamePoint => {
                    *game_point_leaders.entry(leader.to_string()).or_default() += 1;
                }
                GameStatus::GameOver => {
                    *winners.entry(leader.to_string()).or_default() += 1;
                }
                GameStatus::Normal | GameStatus::Draw => {
                    debug_assert_eq!(leader, LeadingPlayer::None);
                }
            }
        }

        Self {
            by_status,
            game_point_leaders,
            winners,
            total: classifier.len(),
        }
    }

    /// Entries with the given status.
    pub fn count(&self, status: GameStatus) -> usize {
        self.by_status.get(&status).copied().unwrap_or_default()
    }
}

impl std::fmt::Display for TableStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "total states: {}", self.total)?;
        for (status, count) in &self.by_status {
            writeln!(f, "  {status}: {count}")?;
        }
        writeln!(f, "game point leaders:")?;
        for (leader, count) in &self.game_point_leaders {
            writeln!(f, "  {leader}: {count}")?;
        }
        writeln!(f, "winners:")?;
        for (winner, count) in &self.winners {
            writeln!(f, "  {winner}: {count}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_sum_to_total() {
        let stats = TableStats::collect(StateClassifier::shared());
        let sum: usize = stats.by_status().values().sum();
        assert_eq!(sum, *stats.total());
        assert_eq!(*stats.total(), 19683);
    }

    #[test]
    fn test_every_status_is_present() {
        let stats = TableStats::collect(StateClassifier::shared());
        for status in <GameStatus as strum::IntoEnumIterator>::iter() {
            assert!(stats.count(status) > 0, "no entries for {status}");
        }
        assert!(stats.game_point_leaders().contains_key("Either"));
    }
}
