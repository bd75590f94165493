// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Card definitions and wire codes parsing.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A card placed on a board.
///
/// A regular card always has a suit, a joker stands in for a rank and may have
/// no suit when it is only displayed. The wire code of a card is the rank
/// followed by the suit letter, jokers have a `*` prefix:
///
/// ```text
///   Ah   ace of hearts
///   Td   ten of diamonds (also 10d)
///   *Qs  joker played as the queen of spades
///   *A   joker played as an ace, no suit
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card {
    rank: Rank,
    suit: Option<Suit>,
    joker: bool,
}

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card {
            rank,
            suit: Some(suit),
            joker: false,
        }
    }

    /// Create a joker that plays as the given rank and optional suit.
    pub const fn joker(rank: Rank, suit: Option<Suit>) -> Card {
        Card {
            rank,
            suit,
            joker: true,
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit, `None` for a joker without a suit.
    pub fn suit(&self) -> Option<Suit> {
        self.suit
    }

    /// Checks if this card is a joker.
    pub fn is_joker(&self) -> bool {
        self.joker
    }

    /// Returns the display color for this card.
    pub fn color(&self) -> Color {
        match (self.joker, self.suit) {
            (true, _) | (false, None) => Color::Joker,
            (false, Some(suit)) => suit.color(),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.joker {
            write!(f, "*")?;
        }

        write!(f, "{}", self.rank)?;

        if let Some(suit) = self.suit {
            write!(f, "{suit}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({self})")
    }
}

/// Errors parsing a card wire code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardParseError {
    /// The code is empty.
    #[error("empty card code")]
    Empty,
    /// The rank is not one of 2-9, T, 10, J, Q, K, A.
    #[error("invalid rank in card code {0:?}")]
    InvalidRank(String),
    /// The suit is not one of c, d, h, s or their symbols.
    #[error("invalid suit in card code {0:?}")]
    InvalidSuit(String),
    /// Only jokers can omit the suit.
    #[error("missing suit in card code {0:?}")]
    MissingSuit(String),
    /// Characters left after the suit.
    #[error("unexpected characters in card code {0:?}")]
    TrailingInput(String),
}

impl FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        let (joker, code) = match code.strip_prefix('*') {
            Some(rest) => (true, rest),
            None => (false, code),
        };

        let (rank, rest) = if let Some(rest) = code.strip_prefix("10") {
            (Rank::Ten, rest)
        } else {
            let mut chars = code.chars();
            let c = chars.next().ok_or(CardParseError::Empty)?;
            let rank = Rank::from_char(c).ok_or_else(|| CardParseError::InvalidRank(s.into()))?;
            (rank, chars.as_str())
        };

        let mut chars = rest.chars();
        let suit = match chars.next() {
            Some(c) => Some(Suit::from_char(c).ok_or_else(|| CardParseError::InvalidSuit(s.into()))?),
            None => None,
        };

        if !chars.as_str().is_empty() {
            return Err(CardParseError::TrailingInput(s.into()));
        }

        match (joker, suit) {
            (false, Some(suit)) => Ok(Card::new(rank, suit)),
            (false, None) => Err(CardParseError::MissingSuit(s.into())),
            (true, suit) => Ok(Card::joker(rank, suit)),
        }
    }
}

impl TryFrom<String> for Card {
    type Error = CardParseError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// Parses a rank from its one character code.
    pub fn from_char(c: char) -> Option<Rank> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// Parses a suit from its letter or symbol.
    pub fn from_char(c: char) -> Option<Suit> {
        let suit = match c {
            'c' | 'C' | '♣' | '♧' => Suit::Clubs,
            'd' | 'D' | '♦' | '♢' => Suit::Diamonds,
            'h' | 'H' | '♥' | '♡' => Suit::Hearts,
            's' | 'S' | '♠' | '♤' => Suit::Spades,
            _ => return None,
        };

        Some(suit)
    }

    /// The suit symbol.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    /// The suit display color.
    pub fn color(&self) -> Color {
        match self {
            Suit::Diamonds | Suit::Hearts => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };

        write!(f, "{suit}")
    }
}

/// The color class used to paint a card.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Color {
    /// Diamonds and hearts.
    Red,
    /// Clubs and spades.
    Black,
    /// Jokers.
    Joker,
}
