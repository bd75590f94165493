// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! OFC Ledger hand viewer.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};

use ofc_ledger_core::{
    AggregationMode, HandRecord, PlayerBoard, SettlementConfig, SettlementResult, settle,
};

pub mod view;

/// The aggregation mode flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Exactly two players.
    HeadsUp,
    /// Every pair of players is settled.
    Pairwise,
}

#[derive(Debug, Parser)]
struct Cli {
    /// The hand record JSON file, use - to read from stdin.
    record: PathBuf,
    /// How players are settled against each other.
    #[clap(long, short, value_enum, default_value_t = Mode::Pairwise)]
    mode: Mode,
    /// The maximum number of players for pairwise settlement.
    #[clap(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=8))]
    max_players: u8,
    /// Log settlement details.
    #[clap(long, short)]
    verbose: bool,
}

impl Cli {
    fn config(&self) -> SettlementConfig {
        let mode = match self.mode {
            Mode::HeadsUp => AggregationMode::HeadsUp,
            Mode::Pairwise => AggregationMode::Pairwise {
                max_players: self.max_players as usize,
            },
        };

        SettlementConfig { mode }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let json = read_record(&cli.record)?;
    let mut stdout = io::stdout();

    match load(&json, &cli.config()) {
        Ok((record, boards, result)) => {
            view::print_hand(&mut stdout, record.id.as_deref(), &boards, &result)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            view::print_unavailable(&mut stdout, &e)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn read_record(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut json = String::new();
        io::stdin()
            .read_to_string(&mut json)
            .context("Failed to read hand record from stdin")?;
        Ok(json)
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read hand record {}", path.display()))
    }
}

fn load(
    json: &str,
    config: &SettlementConfig,
) -> ofc_ledger_core::Result<(HandRecord, Vec<PlayerBoard>, SettlementResult)> {
    let record = HandRecord::from_json(json)?;
    let boards = record.boards()?;
    let result = settle(&boards, config)?;
    Ok((record, boards, result))
}
