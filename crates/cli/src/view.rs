// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering of a settled hand.
use anyhow::Result;
use crossterm::{
    queue,
    style::{self, Stylize},
};
use std::io;

use ofc_ledger_core::{
    Card, Color, PairwiseOutcome, PlayerBoard, PlayerSettlement, Points, RowResult,
    SettlementResult, format_signed,
};

/// The glyph shown for a joker.
const JOKER: &str = "🃏";

/// Prints the boards and their settlement.
pub fn print_hand(
    w: &mut impl io::Write,
    id: Option<&str>,
    boards: &[PlayerBoard],
    result: &SettlementResult,
) -> Result<()> {
    let title = match id {
        Some(id) => format!("Hand #{id}"),
        None => "Hand".to_string(),
    };
    queue!(w, style::PrintStyledContent(title.as_str().bold()), style::Print("\n"))?;

    for (board, settlement) in boards.iter().zip(&result.players) {
        queue!(w, style::Print("\n"))?;
        print_board(w, board, settlement)?;

        for outcome in &settlement.outcomes {
            let opponent = &result.players[outcome.opponent].name;
            queue!(
                w,
                style::Print("  "),
                style::Print(outcome_line(opponent, outcome)),
                style::Print("\n")
            )?;
        }
    }

    w.flush()?;

    Ok(())
}

/// Prints the fallback shown when a hand cannot be settled.
pub fn print_unavailable(w: &mut impl io::Write, err: &ofc_ledger_core::Error) -> Result<()> {
    let text = format!("Hand not available: {err}");
    queue!(w, style::PrintStyledContent(text.as_str().dark_yellow()), style::Print("\n"))?;
    w.flush()?;
    Ok(())
}

fn print_board(
    w: &mut impl io::Write,
    board: &PlayerBoard,
    settlement: &PlayerSettlement,
) -> Result<()> {
    queue!(w, style::PrintStyledContent(board.name().bold()))?;

    for pill in pills(board) {
        queue!(
            w,
            style::Print(" "),
            style::PrintStyledContent(format!("[{pill}]").dark_cyan())
        )?;
    }

    queue!(
        w,
        style::Print("  "),
        style::PrintStyledContent(styled_points(settlement.total)),
        style::Print("\n")
    )?;

    for row in board.rows() {
        print_row(w, row)?;
    }

    Ok(())
}

fn print_row(w: &mut impl io::Write, row: &RowResult) -> Result<()> {
    queue!(w, style::Print(format!("  {:<7}", row.row().label())))?;

    for card in row.cards() {
        let label = format!("{:<3}", card_label(card));
        let styled = match card.color() {
            Color::Red => label.red(),
            Color::Black => label.reset(),
            Color::Joker => label.magenta(),
        };
        queue!(w, style::PrintStyledContent(styled))?;
    }

    // Pad the 3 cards top row to line up with the 5 cards rows.
    let padding = (5 - row.cards().len().min(5)) * 3;
    queue!(
        w,
        style::Print(" ".repeat(padding)),
        style::Print(format!(
            " {:<16} {}\n",
            row.hand(),
            format_signed(i64::from(row.royalty()), "p")
        ))
    )?;

    Ok(())
}

/// The label for a card, jokers show the joker glyph.
pub fn card_label(card: &Card) -> String {
    match card.suit() {
        _ if card.is_joker() => JOKER.to_string(),
        Some(suit) => format!("{}{}", card.rank(), suit.symbol()),
        None => card.rank().to_string(),
    }
}

/// The pills shown next to a player name.
pub fn pills(board: &PlayerBoard) -> Vec<String> {
    let mut pills = Vec::new();

    if board.is_fouled() {
        pills.push("FOUL".to_string());
    }

    if let Some(bonus) = board.bonus() {
        pills.push(bonus.to_string());
    }

    if board.is_fantasy_land() {
        pills.push("FANTASY LAND".to_string());
    }

    if board.is_the_choice() {
        pills.push("THE CHOICE".to_string());
    }

    pills
}

/// One line with the result against an opponent.
pub fn outcome_line(opponent: &str, outcome: &PairwiseOutcome) -> String {
    format!(
        "vs {opponent:<12.12} {:<7} h2h {:>5}  royalties {:>5}  x{}  net {}",
        outcome.label().to_string(),
        outcome.head_to_head.to_string(),
        outcome.royalties.to_string(),
        outcome.multiplier,
        outcome.net
    )
}

fn styled_points(points: Points) -> style::StyledContent<String> {
    let text = points.to_string();
    match points.amount() {
        a if a > 0 => text.green(),
        a if a < 0 => text.red(),
        _ => text.reset(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ofc_ledger_core::{
        AggregationMode, HandRecord, Rank, SettlementConfig, Suit, settle,
    };

    const RECORD: &str = r#"{
      "id": "42",
      "players": [
        {
          "name": "Alice",
          "top":    { "cards": ["Qh", "Qd", "*A"], "hand": "Trips", "royalty": 15, "rank_value": 300 },
          "middle": { "cards": ["5s", "6s", "7d", "8c", "9c"], "hand": "Straight", "royalty": 4, "rank_value": 600 },
          "bottom": { "cards": ["2h", "7h", "9h", "Jh", "Kh"], "hand": "Flush", "royalty": 4, "rank_value": 700 },
          "bonus": "x2",
          "fantasy_land": true
        },
        {
          "name": "Bob",
          "top":    { "cards": ["As", "Kc", "3d"], "hand": "Ace High", "royalty": 0, "rank_value": 100 },
          "middle": { "cards": ["Ac", "Ad", "4c", "5c", "6c"], "hand": "Pair", "royalty": 0, "rank_value": 400 },
          "bottom": { "cards": ["2d", "2s", "3c", "3h", "8d"], "hand": "Two Pair", "royalty": 0, "rank_value": 500 },
          "fouled": true,
          "the_choice": true
        }
      ]
    }"#;

    fn settled() -> (Vec<PlayerBoard>, SettlementResult) {
        let boards = HandRecord::from_json(RECORD).unwrap().boards().unwrap();
        let config = SettlementConfig {
            mode: AggregationMode::HeadsUp,
        };
        let result = settle(&boards, &config).unwrap();
        (boards, result)
    }

    #[test]
    fn card_labels() {
        assert_eq!(card_label(&Card::new(Rank::Ace, Suit::Hearts)), "A♥");
        assert_eq!(card_label(&Card::new(Rank::Ten, Suit::Clubs)), "T♣");
        assert_eq!(card_label(&Card::joker(Rank::Ace, None)), "🃏");
        assert_eq!(
            card_label(&Card::joker(Rank::Queen, Some(Suit::Spades))),
            "🃏"
        );
    }

    #[test]
    fn board_pills() {
        let (boards, _) = settled();
        assert_eq!(pills(&boards[0]), ["x2", "FANTASY LAND"]);
        assert_eq!(pills(&boards[1]), ["FOUL", "THE CHOICE"]);
    }

    #[test]
    fn outcome_lines() {
        let (_, result) = settled();

        // Bob fouls: 6 plus 23 royalties.
        let line = outcome_line("Bob", &result.players[0].outcomes[0]);
        assert!(line.starts_with("vs Bob"), "{line}");
        assert!(line.contains("FOUL"), "{line}");
        assert!(line.contains("+6p"), "{line}");
        assert!(line.contains("+23p"), "{line}");
        assert!(line.ends_with("net +29p"), "{line}");

        let line = outcome_line("Alice", &result.players[1].outcomes[0]);
        assert!(line.ends_with("net −29p"), "{line}");
    }

    #[test]
    fn print_settled_hand() {
        let (boards, result) = settled();
        let mut out = Vec::new();
        print_hand(&mut out, Some("42"), &boards, &result).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Hand #42"));
        assert!(text.contains("Alice"));
        assert!(text.contains("Straight"));
        assert!(text.contains("🃏"));
        assert!(text.contains("THE CHOICE"));
    }

    #[test]
    fn print_unavailable_hand() {
        let err = HandRecord::from_json(r#"{ "players": [{ "name": "Alice" }] }"#)
            .unwrap()
            .boards()
            .unwrap_err();

        let mut out = Vec::new();
        print_unavailable(&mut out, &err).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Hand not available: player Alice: missing top row"));
    }
}
