// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Finished player boards.
use std::fmt;

use ofc_ledger_cards::Card;

use crate::error::IntegrityIssue;

/// A board row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Row {
    /// The 3 cards top row.
    Top,
    /// The 5 cards middle row.
    Middle,
    /// The 5 cards bottom row.
    Bottom,
}

impl Row {
    /// All rows from top to bottom.
    pub const ALL: [Row; 3] = [Row::Top, Row::Middle, Row::Bottom];

    /// The number of cards in a complete row.
    pub fn capacity(&self) -> usize {
        match self {
            Row::Top => 3,
            Row::Middle | Row::Bottom => 5,
        }
    }

    /// The row label.
    pub fn label(&self) -> &'static str {
        match self {
            Row::Top => "Top",
            Row::Middle => "Middle",
            Row::Bottom => "Bottom",
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = match self {
            Row::Top => "top",
            Row::Middle => "middle",
            Row::Bottom => "bottom",
        };

        write!(f, "{row}")
    }
}

/// A completed row with its evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowResult {
    row: Row,
    cards: Vec<Card>,
    hand: String,
    royalty: u32,
    rank_value: u32,
}

impl RowResult {
    /// Creates a row result, the number of cards must match the row capacity.
    pub fn new(
        row: Row,
        cards: Vec<Card>,
        hand: impl Into<String>,
        royalty: u32,
        rank_value: u32,
    ) -> Result<Self, IntegrityIssue> {
        if cards.len() != row.capacity() {
            return Err(IntegrityIssue::CardCount {
                row,
                expected: row.capacity(),
                found: cards.len(),
            });
        }

        Ok(Self {
            row,
            cards,
            hand: hand.into(),
            royalty,
            rank_value,
        })
    }

    /// The row this result belongs to.
    pub fn row(&self) -> Row {
        self.row
    }

    /// The cards in the row.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The hand name.
    pub fn hand(&self) -> &str {
        &self.hand
    }

    /// The royalty points for this row.
    pub fn royalty(&self) -> u32 {
        self.royalty
    }

    /// The row strength, a higher value beats a lower one.
    pub fn rank_value(&self) -> u32 {
        self.rank_value
    }
}

/// A player finished board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerBoard {
    name: String,
    rows: [RowResult; 3],
    fouled: bool,
    royalties: u32,
    multiplier: Option<i64>,
    bonus: Option<String>,
    fantasy_land: bool,
    the_choice: bool,
}

impl PlayerBoard {
    /// Creates a board from its three rows.
    ///
    /// The royalties total defaults to the sum of the rows royalties, the
    /// board is not fouled and has no multiplier.
    pub fn new(
        name: impl Into<String>,
        top: RowResult,
        middle: RowResult,
        bottom: RowResult,
    ) -> Result<Self, IntegrityIssue> {
        let rows = [top, middle, bottom];
        for (expected, result) in Row::ALL.into_iter().zip(&rows) {
            if result.row != expected {
                return Err(IntegrityIssue::MisplacedRow {
                    expected,
                    found: result.row,
                });
            }
        }

        let royalties = rows
            .iter()
            .try_fold(0u32, |acc, r| acc.checked_add(r.royalty))
            .ok_or(IntegrityIssue::RoyaltyOverflow)?;

        Ok(Self {
            name: name.into(),
            rows,
            fouled: false,
            royalties,
            multiplier: None,
            bonus: None,
            fantasy_land: false,
            the_choice: false,
        })
    }

    /// Sets the foul flag.
    pub fn with_foul(mut self, fouled: bool) -> Self {
        self.fouled = fouled;
        self
    }

    /// Overrides the royalties total.
    pub fn with_royalties(mut self, royalties: u32) -> Self {
        self.royalties = royalties;
        self
    }

    /// Sets the multiplier as given by the house rules.
    pub fn with_multiplier(mut self, multiplier: Option<i64>) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Sets the bonus label.
    pub fn with_bonus(mut self, bonus: Option<String>) -> Self {
        self.bonus = bonus;
        self
    }

    /// Sets the Fantasy Land flag.
    pub fn with_fantasy_land(mut self, active: bool) -> Self {
        self.fantasy_land = active;
        self
    }

    /// Sets the Choice flag.
    pub fn with_the_choice(mut self, active: bool) -> Self {
        self.the_choice = active;
        self
    }

    /// The player name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets a row.
    pub fn row(&self, row: Row) -> &RowResult {
        &self.rows[row as usize]
    }

    /// The rows from top to bottom.
    pub fn rows(&self) -> &[RowResult; 3] {
        &self.rows
    }

    /// Checks if the board is fouled.
    pub fn is_fouled(&self) -> bool {
        self.fouled
    }

    /// The royalties total as stated for this board.
    pub fn royalties(&self) -> u32 {
        self.royalties
    }

    /// The royalties this board can collect, a fouled board collects nothing.
    pub fn creditable_royalties(&self) -> u32 {
        if self.fouled { 0 } else { self.royalties }
    }

    /// The multiplier as given, it may be missing or non positive.
    pub fn multiplier(&self) -> Option<i64> {
        self.multiplier
    }

    /// The bonus label.
    pub fn bonus(&self) -> Option<&str> {
        self.bonus.as_deref()
    }

    /// Checks if the player is in Fantasy Land.
    pub fn is_fantasy_land(&self) -> bool {
        self.fantasy_land
    }

    /// Checks if the player is playing The Choice.
    pub fn is_the_choice(&self) -> bool {
        self.the_choice
    }
}

#[cfg(test)]
pub(crate) mod test_boards {
    //! Boards built from row strengths for engine tests.
    use super::*;
    use ofc_ledger_cards::{Rank, Suit};

    fn cards(n: usize) -> Vec<Card> {
        Rank::ranks()
            .take(n)
            .map(|r| Card::new(r, Suit::Spades))
            .collect()
    }

    /// A board with the given row strengths and royalties.
    pub fn board(name: &str, strengths: [u32; 3], royalties: u32) -> PlayerBoard {
        let rows = Row::ALL.map(|row| {
            RowResult::new(row, cards(row.capacity()), "", 0, strengths[row as usize]).unwrap()
        });
        let [top, middle, bottom] = rows;
        PlayerBoard::new(name, top, middle, bottom)
            .unwrap()
            .with_royalties(royalties)
    }
}
