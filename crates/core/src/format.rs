// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Points and outcome labels formatting.
use serde::{Deserialize, Serialize};
use std::{fmt, iter, ops};

/// The minus sign used for negative scores (U+2212).
pub const MINUS_SIGN: char = '\u{2212}';

/// The default unit suffix for points.
pub const POINTS_SUFFIX: &str = "p";

/// Formats a signed value with an explicit sign and a unit suffix.
///
/// ```
/// # use ofc_ledger_core::format_signed;
/// assert_eq!(format_signed(6, "p"), "+6p");
/// assert_eq!(format_signed(-6, "p"), "\u{2212}6p");
/// assert_eq!(format_signed(0, ""), "0");
/// ```
pub fn format_signed(value: i64, suffix: &str) -> String {
    match value {
        v if v > 0 => format!("+{v}{suffix}"),
        v if v < 0 => format!("{MINUS_SIGN}{}{suffix}", v.unsigned_abs()),
        _ => format!("0{suffix}"),
    }
}

/// A signed points amount.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Points(i64);

impl Points {
    /// The zero points.
    pub const ZERO: Points = Points(0);

    /// Creates points with the given value.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// The integer amount.
    pub fn amount(&self) -> i64 {
        self.0
    }

    /// Adds points, `None` on overflow.
    pub fn checked_add(self, rhs: Points) -> Option<Points> {
        self.0.checked_add(rhs.0).map(Points)
    }

    /// Scales points by a multiplier, `None` on overflow.
    pub fn checked_mul(self, rhs: u32) -> Option<Points> {
        self.0.checked_mul(i64::from(rhs)).map(Points)
    }

    /// Formats these points with a custom unit suffix.
    pub fn with_suffix(&self, suffix: &str) -> String {
        format_signed(self.0, suffix)
    }
}

impl From<i64> for Points {
    fn from(val: i64) -> Self {
        Points(val)
    }
}

impl From<Points> for i64 {
    fn from(val: Points) -> Self {
        val.0
    }
}

impl ops::Add for Points {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Points(self.0 + rhs.0)
    }
}

impl ops::AddAssign for Points {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl ops::Sub for Points {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Points(self.0 - rhs.0)
    }
}

impl ops::Neg for Points {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Points(-self.0)
    }
}

impl iter::Sum for Points {
    fn sum<I: Iterator<Item = Points>>(iter: I) -> Self {
        iter.fold(Points::ZERO, |acc, p| acc + p)
    }
}

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_signed(self.0, POINTS_SUFFIX))
    }
}

/// The label shown for a result against one opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeLabel {
    /// One or both players fouled.
    Foul,
    /// One side won all three rows.
    Scoop {
        /// The player scooped the opponent.
        won: bool,
    },
    /// Rows won and lost, ties are not counted.
    Record {
        /// Rows won.
        wins: u8,
        /// Rows lost.
        losses: u8,
    },
}

impl fmt::Display for OutcomeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeLabel::Foul => write!(f, "FOUL"),
            OutcomeLabel::Scoop { won: true } => write!(f, "SCOOP!"),
            OutcomeLabel::Scoop { won: false } => write!(f, "SCOOP"),
            OutcomeLabel::Record { wins, losses } => write!(f, "{wins}\u{2013}{losses}"),
        }
    }
}
