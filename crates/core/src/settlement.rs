// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pairwise settlement between two finished boards.
//!
//! Settling a player against an opponent goes through these steps:
//!
//! 1. fouls are resolved first, a single foul pays [FOUL_PENALTY] to the other
//!    side and a double foul pays nothing;
//! 2. otherwise rows are compared by strength and a sweep of all three rows
//!    adds [SCOOP_BONUS];
//! 3. the royalties difference is added to the head-to-head points, a fouled
//!    board has no royalties;
//! 4. the sum is scaled by the larger of the two multipliers.
//!
//! The opponent side is always the [PairwiseOutcome::reversed] outcome, so the
//! two nets cancel out.
use log::debug;

use crate::{
    board::{PlayerBoard, Row},
    error::{Error, Result},
    format::{OutcomeLabel, Points},
};

/// Points paid by a fouled board to a board that did not foul.
pub const FOUL_PENALTY: i64 = 6;

/// Bonus points for winning all three rows.
pub const SCOOP_BONUS: i64 = 3;

/// The foul state of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoulState {
    /// No board fouled.
    Neither,
    /// Only the player fouled.
    Player,
    /// Only the opponent fouled.
    Opponent,
    /// Both boards fouled.
    Both,
}

impl FoulState {
    /// Resolves the foul state from the two foul flags.
    pub fn resolve(player: bool, opponent: bool) -> Self {
        match (player, opponent) {
            (false, false) => FoulState::Neither,
            (true, false) => FoulState::Player,
            (false, true) => FoulState::Opponent,
            (true, true) => FoulState::Both,
        }
    }

    /// The fixed head-to-head points when a foul is involved, `None` when rows
    /// must be compared.
    pub fn head_to_head(&self) -> Option<Points> {
        match self {
            FoulState::Neither => None,
            FoulState::Player => Some(Points::new(-FOUL_PENALTY)),
            FoulState::Opponent => Some(Points::new(FOUL_PENALTY)),
            FoulState::Both => Some(Points::ZERO),
        }
    }

    /// The same state seen from the opponent.
    pub fn reversed(&self) -> Self {
        match self {
            FoulState::Player => FoulState::Opponent,
            FoulState::Opponent => FoulState::Player,
            s => *s,
        }
    }
}

/// A scoop result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scoop {
    /// No side won all rows.
    None,
    /// The player won all rows.
    Won,
    /// The opponent won all rows.
    Lost,
}

impl Scoop {
    /// The bonus points for the player.
    pub fn bonus(&self) -> Points {
        match self {
            Scoop::None => Points::ZERO,
            Scoop::Won => Points::new(SCOOP_BONUS),
            Scoop::Lost => Points::new(-SCOOP_BONUS),
        }
    }

    /// The same result seen from the opponent.
    pub fn reversed(&self) -> Self {
        match self {
            Scoop::None => Scoop::None,
            Scoop::Won => Scoop::Lost,
            Scoop::Lost => Scoop::Won,
        }
    }
}

/// Rows won and lost by a player against an opponent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowWins {
    /// Rows where the player is stronger.
    pub wins: u8,
    /// Rows where the opponent is stronger.
    pub losses: u8,
}

impl RowWins {
    /// Compares the three rows by strength, equal strengths are ties.
    pub fn compare(player: &PlayerBoard, opponent: &PlayerBoard) -> Self {
        Row::ALL
            .into_iter()
            .fold(RowWins::default(), |mut acc, row| {
                let ours = player.row(row).rank_value();
                let theirs = opponent.row(row).rank_value();
                if ours > theirs {
                    acc.wins += 1;
                } else if theirs > ours {
                    acc.losses += 1;
                }
                acc
            })
    }

    /// Rows where neither side won.
    pub fn ties(&self) -> u8 {
        Row::ALL.len() as u8 - self.wins - self.losses
    }

    /// The scoop result, only a sweep of all rows is a scoop.
    pub fn scoop(&self) -> Scoop {
        let rows = Row::ALL.len() as u8;
        if self.wins == rows {
            Scoop::Won
        } else if self.losses == rows {
            Scoop::Lost
        } else {
            Scoop::None
        }
    }

    /// The head-to-head points including the scoop bonus.
    pub fn head_to_head(&self) -> Points {
        Points::new(i64::from(self.wins) - i64::from(self.losses)) + self.scoop().bonus()
    }

    /// The same rows seen from the opponent.
    pub fn reversed(&self) -> Self {
        Self {
            wins: self.losses,
            losses: self.wins,
        }
    }
}

/// The royalties difference from the player side, fouled boards count zero.
pub fn royalty_delta(player: &PlayerBoard, opponent: &PlayerBoard) -> Points {
    Points::new(i64::from(player.creditable_royalties()))
        - Points::new(i64::from(opponent.creditable_royalties()))
}

/// Normalizes a multiplier, a missing or non positive multiplier is 1.
pub fn normalize_multiplier(multiplier: Option<i64>) -> u32 {
    match multiplier {
        Some(m) if m > 0 => u32::try_from(m).unwrap_or(u32::MAX),
        _ => 1,
    }
}

/// The multiplier for a pair, the larger one applies and they never stack.
pub fn effective_multiplier(player: &PlayerBoard, opponent: &PlayerBoard) -> u32 {
    [player, opponent]
        .into_iter()
        .map(|board| normalize_multiplier(board.multiplier()))
        .max()
        .unwrap_or(1)
}

/// The settlement of a player against one opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairwiseOutcome {
    /// The player index in the hand.
    pub player: usize,
    /// The opponent index in the hand.
    pub opponent: usize,
    /// The foul state.
    pub foul: FoulState,
    /// Rows won and lost, zero when a foul is involved.
    pub rows: RowWins,
    /// The scoop result.
    pub scoop: Scoop,
    /// Rows and scoop points, or the foul penalty.
    pub head_to_head: Points,
    /// The royalties difference.
    pub royalties: Points,
    /// The multiplier applied to this pair.
    pub multiplier: u32,
    /// The points won or lost against the opponent.
    pub net: Points,
}

impl PairwiseOutcome {
    /// Settles a player against an opponent.
    ///
    /// Fails when the scaled net does not fit in the points range.
    pub fn settle(
        player_idx: usize,
        player: &PlayerBoard,
        opponent_idx: usize,
        opponent: &PlayerBoard,
    ) -> Result<Self> {
        let foul = FoulState::resolve(player.is_fouled(), opponent.is_fouled());

        let (rows, head_to_head) = match foul.head_to_head() {
            Some(points) => (RowWins::default(), points),
            None => {
                let rows = RowWins::compare(player, opponent);
                (rows, rows.head_to_head())
            }
        };

        let royalties = royalty_delta(player, opponent);
        let multiplier = effective_multiplier(player, opponent);
        // The net is negated for the opponent, so i64::MIN is out of range too.
        let net = (head_to_head + royalties)
            .checked_mul(multiplier)
            .filter(|net| net.amount() != i64::MIN)
            .ok_or_else(|| Error::ScoreOverflow {
                player: format!("{} vs {}", player.name(), opponent.name()),
            })?;

        let outcome = Self {
            player: player_idx,
            opponent: opponent_idx,
            foul,
            rows,
            scoop: rows.scoop(),
            head_to_head,
            royalties,
            multiplier,
            net,
        };

        debug!(
            "{} vs {}: {} h2h {} royalties {} x{} net {}",
            player.name(),
            opponent.name(),
            outcome.label(),
            outcome.head_to_head,
            outcome.royalties,
            outcome.multiplier,
            outcome.net
        );

        Ok(outcome)
    }

    /// The same outcome seen from the opponent.
    pub fn reversed(&self) -> Self {
        Self {
            player: self.opponent,
            opponent: self.player,
            foul: self.foul.reversed(),
            rows: self.rows.reversed(),
            scoop: self.scoop.reversed(),
            head_to_head: -self.head_to_head,
            royalties: -self.royalties,
            multiplier: self.multiplier,
            net: -self.net,
        }
    }

    /// The label for this outcome.
    pub fn label(&self) -> OutcomeLabel {
        match (self.foul, self.scoop) {
            (FoulState::Neither, Scoop::Won) => OutcomeLabel::Scoop { won: true },
            (FoulState::Neither, Scoop::Lost) => OutcomeLabel::Scoop { won: false },
            (FoulState::Neither, Scoop::None) => OutcomeLabel::Record {
                wins: self.rows.wins,
                losses: self.rows.losses,
            },
            _ => OutcomeLabel::Foul,
        }
    }
}
