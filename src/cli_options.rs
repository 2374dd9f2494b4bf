/*
cli_options.rs

Copyright 2025 Hervé Quatremain

This file is part of Hexsum.

Hexsum is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Hexsum is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Hexsum. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! Without developer options, Hexsum starts a game in the terminal.
//!
//! # Examples
//!
//! List the combinations of the hexagon:
//!
//! ```
//! $ hexsum --combinations
//! abc
//! adh
//! aej
//! ...
//! ```
//!
//! Show the sums and the rarity for a given seed and range:
//!
//! ```
//! $ hexsum --analyze --seed 42 --max 9
//! ```

use clap::Parser;
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;
use std::env;

use hexsum::config::{
    COPYRIGHT_NOTICE, DEFAULT_MAX, DEFAULT_MEMORIZATION_TIME, DEFAULT_MIN, GameConfig,
};
use hexsum::generator::analyzer::Analysis;
use hexsum::generator::hexagon::{Hexagon, Label};
use hexsum::generator::randomizer::Randomizer;

/// Find all the lines of three cells that add up to the target.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Lowest number in the cells
    #[arg(long, default_value_t = DEFAULT_MIN, allow_hyphen_values = true)]
    min: i32,

    /// Highest number in the cells
    #[arg(long, default_value_t = DEFAULT_MAX, allow_hyphen_values = true)]
    max: i32,

    /// Time in seconds to memorize the numbers
    #[arg(short = 't', long, default_value_t = DEFAULT_MEMORIZATION_TIME)]
    memo_time: u32,

    /// Two players mode (keyboard against pointer)
    #[arg(short = 'p', long, default_value_t = false)]
    two_players: bool,

    /// Seed for the random numbers
    #[arg(short, long)]
    seed: Option<u64>,

    /// List the combinations of the hexagon and exit
    #[arg(short, long, default_value_t = false)]
    combinations: bool,

    /// Fill the hexagon once and print the sums and their rarity in JSON format
    #[arg(short, long, default_value_t = false)]
    analyze: bool,

    /// Print the game settings in JSON format and exit
    #[arg(long, default_value_t = false)]
    print_config: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// What to do after the command line is processed.
pub enum Action {
    /// Exit with the given code.
    Exit(u8),

    /// Play in the terminal.
    Play {
        config: GameConfig,
        seed: Option<u64>,
    },
}

/// Result of the `--analyze` option.
#[derive(Serialize)]
struct AnalyzeReport<'a> {
    seed: u64,
    config: GameConfig,
    values: BTreeMap<Label, i32>,
    analysis: &'a Analysis,
}

/// Parse and process command-line options.
pub fn parse() -> Action {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let config: GameConfig = GameConfig {
        min: args.min,
        max: args.max,
        memorization_time: args.memo_time,
        two_players: args.two_players,
    };
    if let Err(error) = config.validate() {
        eprintln!("Error: {error}");
        return Action::Exit(2);
    }
    debug!("Settings: {config:?}");

    //
    // Print the settings
    //
    if args.print_config {
        return match serde_json::to_string_pretty(&config) {
            Ok(s) => {
                println!("{s}");
                Action::Exit(0)
            }
            Err(error) => {
                eprintln!("Error: {error}");
                Action::Exit(1)
            }
        };
    }

    //
    // List the combinations
    //
    if args.combinations {
        let hexagon: Hexagon = Hexagon::build();
        for c in hexagon.combinations() {
            println!("{c}");
        }
        return Action::Exit(0);
    }

    //
    // Fill the hexagon once and print the analysis
    //
    if args.analyze {
        let mut hexagon: Hexagon = Hexagon::build();
        let mut randomizer: Randomizer = Randomizer::new(args.seed);
        randomizer.randomize(&mut hexagon, config.min, config.max);

        let report: AnalyzeReport = AnalyzeReport {
            seed: randomizer.seed(),
            config,
            values: hexagon
                .labels()
                .into_iter()
                .map(|l| (l, hexagon.value(l)))
                .collect(),
            analysis: hexagon.analysis(),
        };
        return match serde_json::to_string_pretty(&report) {
            Ok(s) => {
                println!("{s}");
                Action::Exit(0)
            }
            Err(error) => {
                eprintln!("Error: {error}");
                Action::Exit(1)
            }
        };
    }

    Action::Play {
        config,
        seed: args.seed,
    }
}
