// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Settlement errors.
use thiserror::Error;

use ofc_ledger_cards::{Card, CardParseError};

use crate::{aggregate::AggregationMode, board::Row};

/// Result type for hand records and settlement.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors loading or settling a hand.
///
/// All errors are derived from the input and settling the same input again
/// always gives the same error.
#[derive(Debug, Error)]
pub enum Error {
    /// A player board is incomplete or inconsistent.
    #[error("player {player}: {issue}")]
    DataIntegrity {
        /// The player name, or its seat when the name is missing.
        player: String,
        /// What is wrong with the board.
        issue: IntegrityIssue,
    },
    /// The number of players is not supported by the aggregation mode.
    #[error("{mode} settlement does not support {count} players")]
    UnsupportedPlayerCount {
        /// The configured aggregation mode.
        mode: AggregationMode,
        /// The number of players in the hand.
        count: usize,
    },
    /// A score does not fit in the points range.
    #[error("score overflow settling {player}")]
    ScoreOverflow {
        /// The player, or the pair of players, being settled.
        player: String,
    },
    /// The hand record is not valid JSON for a record.
    #[error("malformed hand record: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Creates a data integrity error for a player.
    pub fn integrity(player: impl Into<String>, issue: IntegrityIssue) -> Self {
        Error::DataIntegrity {
            player: player.into(),
            issue,
        }
    }
}

/// A problem with a player board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityIssue {
    /// The player has no name.
    #[error("missing player name")]
    MissingName,
    /// A row is missing.
    #[error("missing {0} row")]
    MissingRow(Row),
    /// A row was placed in another row slot.
    #[error("{found} row placed in the {expected} slot")]
    MisplacedRow {
        /// The slot being filled.
        expected: Row,
        /// The row that was given.
        found: Row,
    },
    /// A row has the wrong number of cards.
    #[error("{row} row has {found} cards, expected {expected}")]
    CardCount {
        /// The row.
        row: Row,
        /// The row capacity.
        expected: usize,
        /// The cards in the row.
        found: usize,
    },
    /// A row has no royalty value.
    #[error("missing royalty for {0} row")]
    MissingRoyalty(Row),
    /// A row has no strength value.
    #[error("missing strength for {0} row")]
    MissingStrength(Row),
    /// A row contains an invalid card code.
    #[error("{row} row: {source}")]
    BadCard {
        /// The row.
        row: Row,
        /// The parse error.
        source: CardParseError,
    },
    /// The same card is placed more than once in the hand.
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    /// The rows royalties do not fit in a royalties total.
    #[error("rows royalties overflow the royalties total")]
    RoyaltyOverflow,
    /// The multiplier is larger than any supported multiplier.
    #[error("multiplier {0} is out of range")]
    MultiplierOutOfRange(i64),
    /// The stated royalties total differs from the rows royalties.
    #[error("stated royalties {stated} differ from rows royalties {rows}")]
    RoyaltyMismatch {
        /// The total in the record.
        stated: u32,
        /// The sum of the rows royalties.
        rows: u32,
    },
}
