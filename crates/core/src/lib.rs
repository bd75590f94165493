// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! OFC Ledger hand records and settlement engine.
//!
//! A finished Open-Face Chinese Poker hand is loaded from its [record] into
//! validated [PlayerBoard]s, and [settle] turns the boards into a zero-sum
//! [SettlementResult]:
//!
//! ```
//! # use ofc_ledger_core::*;
//! let json = r#"{
//!   "players": [
//!     {
//!       "name": "Alice",
//!       "top":    { "cards": ["Qh", "Qd", "2c"], "hand": "Pair of Queens", "royalty": 7, "rank_value": 300 },
//!       "middle": { "cards": ["5s", "6s", "7d", "8c", "9c"], "hand": "Straight", "royalty": 4, "rank_value": 600 },
//!       "bottom": { "cards": ["2h", "7h", "9h", "Jh", "Kh"], "hand": "Flush", "royalty": 4, "rank_value": 700 }
//!     },
//!     {
//!       "name": "Bob",
//!       "top":    { "cards": ["As", "Kc", "3d"], "hand": "Ace High", "royalty": 0, "rank_value": 100 },
//!       "middle": { "cards": ["Ac", "Ad", "4c", "5c", "6c"], "hand": "Pair of Aces", "royalty": 0, "rank_value": 400 },
//!       "bottom": { "cards": ["2d", "2s", "3c", "3h", "8d"], "hand": "Two Pair", "royalty": 0, "rank_value": 500 }
//!     }
//!   ]
//! }"#;
//!
//! let boards = HandRecord::from_json(json)?.boards()?;
//! let result = settle(&boards, &SettlementConfig::default())?;
//!
//! // Alice scoops (3 + 3) and collects 15 in royalties.
//! assert_eq!(result.players[0].total, Points::new(21));
//! assert_eq!(result.players[1].total, Points::new(-21));
//! assert_eq!(result.players[0].total.to_string(), "+21p");
//! # Ok::<(), ofc_ledger_core::Error>(())
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod aggregate;
pub mod board;
pub mod error;
pub mod format;
pub mod record;
pub mod settlement;

pub use aggregate::{AggregationMode, PlayerSettlement, SettlementConfig, SettlementResult, settle};
pub use board::{PlayerBoard, Row, RowResult};
pub use error::{Error, IntegrityIssue, Result};
pub use format::{OutcomeLabel, Points, format_signed};
pub use record::HandRecord;
pub use settlement::{FoulState, PairwiseOutcome, RowWins, Scoop};

// Reexport cards types.
pub use ofc_ledger_cards::{Card, Color, Rank, Suit};
