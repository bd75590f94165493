// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! OFC Ledger cards types.
//!
//! This crate defines the card types used on an Open-Face Chinese Poker board:
//!
//! ```
//! # use ofc_ledger_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! Cards are parsed once from their compact wire codes and never re-parsed:
//!
//! ```
//! # use ofc_ledger_cards::{Card, Color, Rank, Suit};
//! let card: Card = "Th".parse().unwrap();
//! assert_eq!(card, Card::new(Rank::Ten, Suit::Hearts));
//! assert_eq!(card.color(), Color::Red);
//!
//! // A joker standing in for an ace, without a suit.
//! let joker: Card = "*A".parse().unwrap();
//! assert!(joker.is_joker());
//! assert_eq!(joker.suit(), None);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
pub use card::{Card, CardParseError, Color, Rank, Suit};
