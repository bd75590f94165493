// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand records as produced by the hand evaluator.
//!
//! A record is the wire form of a finished hand. Loading the boards out of a
//! record validates every player and parses the cards codes once, a record
//! that is missing any value needed for settlement is rejected as a whole.
use ahash::AHashSet;
use log::warn;
use serde::{Deserialize, Serialize};

use ofc_ledger_cards::Card;

use crate::{
    board::{PlayerBoard, Row, RowResult},
    error::{Error, IntegrityIssue, Result},
};

/// A finished hand record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HandRecord {
    /// The hand identifier.
    #[serde(default)]
    pub id: Option<String>,
    /// The players in display order.
    #[serde(default)]
    pub players: Vec<PlayerRecord>,
}

/// A player record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// The player name.
    #[serde(default)]
    pub name: Option<String>,
    /// The top row.
    #[serde(default)]
    pub top: Option<RowRecord>,
    /// The middle row.
    #[serde(default)]
    pub middle: Option<RowRecord>,
    /// The bottom row.
    #[serde(default)]
    pub bottom: Option<RowRecord>,
    /// The player fouled.
    #[serde(default)]
    pub fouled: bool,
    /// The royalties total, defaults to the sum of the rows royalties.
    #[serde(default)]
    pub royalties: Option<u32>,
    /// The active multiplier.
    #[serde(default)]
    pub multiplier: Option<i64>,
    /// The bonus label.
    #[serde(default)]
    pub bonus: Option<String>,
    /// The player is in Fantasy Land.
    #[serde(default)]
    pub fantasy_land: bool,
    /// The player is playing The Choice.
    #[serde(default)]
    pub the_choice: bool,
}

/// A row record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RowRecord {
    /// The cards codes.
    #[serde(default)]
    pub cards: Vec<String>,
    /// The hand name.
    #[serde(default)]
    pub hand: String,
    /// The royalty points.
    #[serde(default)]
    pub royalty: Option<u32>,
    /// The row strength.
    #[serde(default)]
    pub rank_value: Option<u32>,
}

impl HandRecord {
    /// Parses a record from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validates the record and returns the players boards in display order.
    pub fn boards(&self) -> Result<Vec<PlayerBoard>> {
        let mut seen = AHashSet::new();

        self.players
            .iter()
            .enumerate()
            .map(|(seat, player)| {
                let label = player
                    .name
                    .as_deref()
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .map_or_else(|| format!("seat {}", seat + 1), str::to_string);

                let board = player
                    .board()
                    .map_err(|issue| Error::integrity(label.as_str(), issue))?;

                // A card from the deck can only be placed once in a hand.
                for card in board.rows().iter().flat_map(|r| r.cards()) {
                    if !card.is_joker() && !seen.insert(*card) {
                        return Err(Error::integrity(
                            label.as_str(),
                            IntegrityIssue::DuplicateCard(*card),
                        ));
                    }
                }

                Ok(board)
            })
            .collect()
    }
}

impl PlayerRecord {
    /// Builds a validated board for this player.
    pub fn board(&self) -> std::result::Result<PlayerBoard, IntegrityIssue> {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(IntegrityIssue::MissingName)?;

        let top = row_result(Row::Top, self.top.as_ref())?;
        let middle = row_result(Row::Middle, self.middle.as_ref())?;
        let bottom = row_result(Row::Bottom, self.bottom.as_ref())?;

        let mut board = PlayerBoard::new(name, top, middle, bottom)?;

        if let Some(stated) = self.royalties {
            let rows = board.royalties();
            if stated != rows {
                if !self.fouled {
                    return Err(IntegrityIssue::RoyaltyMismatch { stated, rows });
                }

                warn!("Player {name} fouled with {stated} royalties");
            }

            board = board.with_royalties(stated);
        }

        match self.multiplier {
            Some(m) if m > i64::from(u32::MAX) => {
                return Err(IntegrityIssue::MultiplierOutOfRange(m));
            }
            Some(m) if m <= 0 => warn!("Player {name} multiplier {m} defaults to 1"),
            _ => {}
        }

        Ok(board
            .with_foul(self.fouled)
            .with_multiplier(self.multiplier)
            .with_bonus(self.bonus.clone().filter(|b| !b.trim().is_empty()))
            .with_fantasy_land(self.fantasy_land)
            .with_the_choice(self.the_choice))
    }
}

fn row_result(row: Row, record: Option<&RowRecord>) -> std::result::Result<RowResult, IntegrityIssue> {
    let record = record.ok_or(IntegrityIssue::MissingRow(row))?;
    let royalty = record.royalty.ok_or(IntegrityIssue::MissingRoyalty(row))?;
    let rank_value = record
        .rank_value
        .ok_or(IntegrityIssue::MissingStrength(row))?;

    let cards = record
        .cards
        .iter()
        .map(|code| code.parse::<Card>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|source| IntegrityIssue::BadCard { row, source })?;

    RowResult::new(row, cards, record.hand.as_str(), royalty, rank_value)
}
