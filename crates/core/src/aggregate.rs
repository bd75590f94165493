// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand settlement across all the players at the table.
use log::info;
use std::{fmt, ops::RangeInclusive};

use crate::{
    board::PlayerBoard,
    error::{Error, Result},
    format::Points,
    settlement::PairwiseOutcome,
};

/// How players are settled against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregationMode {
    /// Exactly two players.
    HeadsUp,
    /// Every pair of players is settled and each player collects the sum of
    /// its pairwise results.
    Pairwise {
        /// The largest supported number of players.
        max_players: usize,
    },
}

impl AggregationMode {
    /// The default maximum number of players for pairwise settlement.
    pub const DEFAULT_MAX_PLAYERS: usize = 4;

    /// The range of supported players.
    pub fn players(&self) -> RangeInclusive<usize> {
        match self {
            AggregationMode::HeadsUp => 2..=2,
            AggregationMode::Pairwise { max_players } => 2..=*max_players,
        }
    }

    /// Checks if this mode can settle the given number of players.
    pub fn supports(&self, count: usize) -> bool {
        self.players().contains(&count)
    }
}

impl Default for AggregationMode {
    fn default() -> Self {
        AggregationMode::Pairwise {
            max_players: Self::DEFAULT_MAX_PLAYERS,
        }
    }
}

impl fmt::Display for AggregationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AggregationMode::HeadsUp => write!(f, "heads-up"),
            AggregationMode::Pairwise { max_players } => {
                write!(f, "pairwise (2 to {max_players} players)")
            }
        }
    }
}

/// Settlement configuration.
#[derive(Debug, Clone, Default)]
pub struct SettlementConfig {
    /// The aggregation mode.
    pub mode: AggregationMode,
}

/// A player settlement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSettlement {
    /// The player name.
    pub name: String,
    /// The sum of the pairwise nets.
    pub total: Points,
    /// The outcome against each opponent, in seat order.
    pub outcomes: Vec<PairwiseOutcome>,
}

/// The settlement of a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettlementResult {
    /// The players in display order.
    pub players: Vec<PlayerSettlement>,
}

impl SettlementResult {
    /// Gets a player settlement by name.
    pub fn player(&self, name: &str) -> Option<&PlayerSettlement> {
        self.players.iter().find(|p| p.name == name)
    }

    /// The sum of all players totals, always zero.
    pub fn balance(&self) -> Points {
        // Partial sums may not fit even if the balance does.
        let balance = self
            .players
            .iter()
            .map(|p| i128::from(p.total.amount()))
            .sum::<i128>();
        Points::new(i64::try_from(balance).unwrap_or(i64::MAX))
    }
}

/// Settles a hand.
///
/// Each distinct pair is settled once, the second player gets the reversed
/// outcome so that all the totals sum to zero.
pub fn settle(boards: &[PlayerBoard], config: &SettlementConfig) -> Result<SettlementResult> {
    if !config.mode.supports(boards.len()) {
        return Err(Error::UnsupportedPlayerCount {
            mode: config.mode,
            count: boards.len(),
        });
    }

    let mut players = boards
        .iter()
        .map(|board| PlayerSettlement {
            name: board.name().to_string(),
            total: Points::ZERO,
            outcomes: Vec::with_capacity(boards.len() - 1),
        })
        .collect::<Vec<_>>();

    for (i, player) in boards.iter().enumerate() {
        for (j, opponent) in boards.iter().enumerate().skip(i + 1) {
            let outcome = PairwiseOutcome::settle(i, player, j, opponent)?;
            players[j].outcomes.push(outcome.reversed());
            players[i].outcomes.push(outcome);
        }
    }

    for player in players.iter_mut() {
        player.outcomes.sort_by_key(|o| o.opponent);
        player.total = player
            .outcomes
            .iter()
            .try_fold(Points::ZERO, |acc, o| acc.checked_add(o.net))
            .ok_or_else(|| Error::ScoreOverflow {
                player: player.name.clone(),
            })?;
    }

    let result = SettlementResult { players };

    info!(
        "Settled {} players: {}",
        result.players.len(),
        result
            .players
            .iter()
            .map(|p| format!("{} {}", p.name, p.total))
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::test_boards::board;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn heads_up() -> SettlementConfig {
        SettlementConfig {
            mode: AggregationMode::HeadsUp,
        }
    }

    fn random_board(rng: &mut StdRng, name: &str) -> PlayerBoard {
        let strengths = [
            rng.random_range(0..8),
            rng.random_range(0..8),
            rng.random_range(0..8),
        ];
        board(name, strengths, rng.random_range(0..30))
            .with_foul(rng.random_bool(0.2))
            .with_multiplier(Some(rng.random_range(-1..4)))
    }

    fn totals(result: &SettlementResult) -> Vec<i64> {
        result.players.iter().map(|p| p.total.amount()).collect()
    }

    #[test]
    fn heads_up_scenarios() {
        let config = heads_up();

        // 2-1 with royalties.
        let a = board("A", [20, 50, 60], 5);
        let b = board("B", [10, 40, 70], 0);
        let result = settle(&[a.clone(), b.clone()], &config).unwrap();
        assert_eq!(totals(&result), [6, -6]);

        // Scoop.
        let result = settle(
            &[board("A", [20, 50, 80], 0), board("B", [10, 40, 70], 0)],
            &config,
        )
        .unwrap();
        assert_eq!(totals(&result), [6, -6]);

        // Foul against royalties.
        let result = settle(
            &[
                board("A", [20, 50, 80], 0).with_foul(true),
                board("B", [10, 40, 70], 4),
            ],
            &config,
        )
        .unwrap();
        assert_eq!(totals(&result), [-10, 10]);

        // Double foul.
        let result = settle(
            &[
                board("A", [20, 50, 80], 3).with_foul(true),
                board("B", [10, 40, 70], 4).with_foul(true),
            ],
            &config,
        )
        .unwrap();
        assert_eq!(totals(&result), [0, 0]);

        // All rows tie.
        let result = settle(
            &[board("A", [10, 40, 70], 0), board("B", [10, 40, 70], 0)],
            &config,
        )
        .unwrap();
        assert_eq!(totals(&result), [0, 0]);

        // Multiplier.
        let result = settle(&[a.with_multiplier(Some(2)), b], &config).unwrap();
        assert_eq!(totals(&result), [12, -12]);
    }

    #[test]
    fn heads_up_rejects_other_counts() {
        let config = heads_up();

        for count in [0, 1, 3] {
            let boards = (0..count)
                .map(|i| board(&format!("P{i}"), [1, 2, 3], 0))
                .collect::<Vec<_>>();
            let err = settle(&boards, &config).unwrap_err();
            assert!(matches!(
                err,
                Error::UnsupportedPlayerCount {
                    mode: AggregationMode::HeadsUp,
                    count: c
                } if c == count
            ));
        }
    }

    #[test]
    fn pairwise_limits() {
        let config = SettlementConfig {
            mode: AggregationMode::Pairwise { max_players: 3 },
        };

        let boards = (0..4)
            .map(|i| board(&format!("P{i}"), [1, 2, 3], 0))
            .collect::<Vec<_>>();

        assert!(settle(&boards[..1], &config).is_err());
        assert!(settle(&boards[..2], &config).is_ok());
        assert!(settle(&boards[..3], &config).is_ok());
        assert!(matches!(
            settle(&boards, &config),
            Err(Error::UnsupportedPlayerCount { count: 4, .. })
        ));

        assert!(AggregationMode::default().supports(4));
        assert!(!AggregationMode::default().supports(5));
    }

    #[test]
    fn three_players() {
        let boards = [
            board("A", [20, 50, 80], 2),
            board("B", [10, 40, 70], 0),
            board("C", [30, 30, 90], 0).with_foul(true),
        ];
        let result = settle(&boards, &SettlementConfig::default()).unwrap();

        // A scoops B (+6 +2), and C fouls (+6 +2).
        // B is scooped by A (-6 -2), and C fouls (+6).
        // C fouls against both (-6 -2, -6).
        assert_eq!(totals(&result), [16, -2, -14]);
        assert_eq!(result.balance(), Points::ZERO);

        let a = result.player("A").unwrap();
        let opponents = a.outcomes.iter().map(|o| o.opponent).collect::<Vec<_>>();
        assert_eq!(opponents, [1, 2]);

        let c = result.player("C").unwrap();
        let opponents = c.outcomes.iter().map(|o| o.opponent).collect::<Vec<_>>();
        assert_eq!(opponents, [0, 1]);
        assert!(c.outcomes.iter().all(|o| o.player == 2));
    }

    #[test]
    fn random_hands_are_zero_sum() {
        let mut rng = StdRng::seed_from_u64(13);
        let config = SettlementConfig {
            mode: AggregationMode::Pairwise { max_players: 6 },
        };

        for _ in 0..500 {
            let n = rng.random_range(2..=6);
            let boards = (0..n)
                .map(|i| random_board(&mut rng, &format!("P{i}")))
                .collect::<Vec<_>>();

            let result = settle(&boards, &config).unwrap();
            assert_eq!(result.balance(), Points::ZERO);

            // Pairwise antisymmetry.
            for player in &result.players {
                for outcome in &player.outcomes {
                    let other = result.players[outcome.opponent]
                        .outcomes
                        .iter()
                        .find(|o| o.opponent == outcome.player)
                        .unwrap();
                    assert_eq!(outcome.net, -other.net);
                }
            }

            // Settling twice gives the same result.
            assert_eq!(settle(&boards, &config).unwrap(), result);
        }
    }

    #[test]
    fn random_hands_scoop_threshold() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let a = random_board(&mut rng, "A").with_foul(false);
            let b = random_board(&mut rng, "B").with_foul(false);
            let result = settle(&[a, b], &heads_up()).unwrap();
            let outcome = &result.players[0].outcomes[0];

            let swept = outcome.rows.wins == 3 || outcome.rows.losses == 3;
            assert_eq!(outcome.scoop != crate::Scoop::None, swept);
            assert_eq!(
                outcome.head_to_head.amount().abs() == 6,
                swept,
                "{outcome:?}"
            );
        }
    }

    #[test]
    fn random_hands_multiplier_scaling() {
        let mut rng = StdRng::seed_from_u64(21);

        for _ in 0..200 {
            let a = random_board(&mut rng, "A").with_multiplier(None);
            let b = random_board(&mut rng, "B").with_multiplier(None);
            let base = settle(&[a.clone(), b.clone()], &heads_up()).unwrap();

            let m = rng.random_range(1..6);
            let scaled = settle(&[a.with_multiplier(Some(m)), b], &heads_up()).unwrap();

            assert_eq!(
                scaled.players[0].total.amount(),
                base.players[0].total.amount() * m
            );
            assert_eq!(
                scaled.players[1].total.amount(),
                -m * base.players[0].total.amount()
            );
        }
    }

    #[test]
    fn foul_dominance() {
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..200 {
            let fouled = random_board(&mut rng, "A")
                .with_foul(true)
                .with_multiplier(None);
            let clean = random_board(&mut rng, "B")
                .with_foul(false)
                .with_multiplier(None);
            let result = settle(&[fouled, clean], &heads_up()).unwrap();

            assert_eq!(result.players[0].outcomes[0].head_to_head, Points::new(-6));
            assert_eq!(result.players[1].outcomes[0].head_to_head, Points::new(6));
        }
    }

    #[test]
    fn pair_overflow_is_an_error() {
        let a = board("A", [20, 50, 80], u32::MAX)
            .with_multiplier(Some(i64::from(u32::MAX)));
        let b = board("B", [10, 40, 70], 0);

        let err = settle(&[a, b], &heads_up()).unwrap_err();
        assert!(matches!(
            err,
            Error::ScoreOverflow { ref player } if player == "A vs B"
        ));
    }

    #[test]
    fn total_overflow_is_an_error() {
        // Each pair fits but the sum of A pairs does not.
        let m = 1 << 31;
        let boards = [
            board("A", [20, 50, 80], 2_800_000_000).with_multiplier(Some(m)),
            board("B", [10, 40, 70], 0),
            board("C", [10, 40, 70], 0),
        ];

        let a = PairwiseOutcome::settle(0, &boards[0], 1, &boards[1]).unwrap();
        assert_eq!(a.net, Points::new(2_800_000_006 * m));

        let err = settle(&boards, &SettlementConfig::default()).unwrap_err();
        assert!(matches!(err, Error::ScoreOverflow { ref player } if player == "A"));
    }
}
