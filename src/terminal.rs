/*
terminal.rs

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

//! Play Hexsum in the terminal.
//!
//! A single thread owns the [`Round`] object. The other threads (standard input reader,
//! one-second ticker, and feedback timers) only send [`Event`] objects through a channel.
//!
//! Lowercase letters are keyboard selections, uppercase letters are pointer selections. In two
//! players mode each input channel has its own points counter.

use log::{debug, info};
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use async_channel::{Receiver, Sender};

use hexsum::config::GameConfig;
use hexsum::generator::hexagon::{Cell, Label};
use hexsum::generator::randomizer::Randomizer;
use hexsum::round::{Feedback, Phase, Round};
use hexsum::scores::Actor;
use hexsum::selection::Selection;

/// Period of the round timer.
const TICK: Duration = Duration::from_secs(1);

/// Width of the widest row, in cells.
const MAX_ROW_LEN: usize = 5;

const HELP: &str = "Commands: /start /giveup /reset /two /quit. \
Type cell letters to select them (lowercase: keyboard, uppercase: pointer).";

/// Messages sent to the thread that owns the round.
#[derive(Debug)]
enum Event {
    /// A line typed by the player.
    Line(String),

    /// One second elapsed.
    Tick,

    /// The delay of the feedback with the given epoch expired.
    Revert(u64),

    /// The standard input is closed.
    Quit,
}

/// Outcome of a player command.
enum Outcome {
    Refresh,
    Unchanged,
    Quit,
}

/// Run the game until the player quits.
pub fn run(config: GameConfig, seed: Option<u64>) -> Result<(), Box<dyn Error>> {
    let (sender, receiver): (Sender<Event>, Receiver<Event>) = async_channel::unbounded();
    let randomizer: Randomizer = Randomizer::new(seed);
    info!("Starting a game, seed = {}", randomizer.seed());

    spawn_ticker(sender.clone());
    spawn_reader(sender.clone());

    let mut round: Round = Round::new(config, randomizer);
    let mut out = io::stdout();
    render(&round, &mut out)?;

    while let Ok(event) = receiver.recv_blocking() {
        let refresh: bool = match event {
            Event::Tick => round.tick(),
            Event::Revert(epoch) => round.revert_feedback(epoch),
            Event::Quit => break,
            Event::Line(line) => match handle_line(&mut round, line.trim(), &sender) {
                Outcome::Refresh => true,
                Outcome::Unchanged => false,
                Outcome::Quit => break,
            },
        };
        if refresh {
            render(&round, &mut out)?;
        }
    }
    debug!("Leaving the game");
    Ok(())
}

/// Send a tick every second.
fn spawn_ticker(sender: Sender<Event>) {
    thread::spawn(move || {
        loop {
            thread::sleep(TICK);
            if sender.send_blocking(Event::Tick).is_err() {
                break;
            }
        }
    });
}

/// Forward the standard input lines.
fn spawn_reader(sender: Sender<Event>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if sender.send_blocking(Event::Line(line)).is_err() {
                return;
            }
        }
        let _ = sender.send_blocking(Event::Quit);
    });
}

/// Send the feedback epoch back to the round when the feedback delay expires.
fn schedule(feedback: Feedback, sender: &Sender<Event>) {
    debug!(
        "Scheduling the end of {} in {:?} (epoch {})",
        feedback.phase, feedback.delay, feedback.epoch
    );
    let sender: Sender<Event> = sender.clone();
    thread::spawn(move || {
        thread::sleep(feedback.delay);
        let _ = sender.send_blocking(Event::Revert(feedback.epoch));
    });
}

/// Process a line typed by the player.
fn handle_line(round: &mut Round, line: &str, sender: &Sender<Event>) -> Outcome {
    match line {
        "" => Outcome::Unchanged,
        "/quit" | "/q" => Outcome::Quit,
        "/start" | "/s" => {
            round.start_game();
            Outcome::Refresh
        }
        "/giveup" | "/g" => {
            if round.give_up() {
                Outcome::Refresh
            } else {
                Outcome::Unchanged
            }
        }
        "/reset" | "/r" => {
            round.reset_points();
            Outcome::Refresh
        }
        "/two" | "/2" => {
            let mut config: GameConfig = *round.config();
            config.two_players = !config.two_players;
            round.set_config(config);
            println!(
                "Two players mode {} from the next round.",
                if config.two_players { "enabled" } else { "disabled" }
            );
            Outcome::Unchanged
        }
        _ if line.starts_with('/') => {
            println!("{HELP}");
            Outcome::Unchanged
        }
        _ => {
            let before: (Selection, Phase) = (round.selection().clone(), round.phase());
            for c in line.chars().filter(|c| !c.is_whitespace()) {
                if round.phase() != Phase::PickingCombinations {
                    break;
                }
                let feedback: Option<Feedback> = if c.is_uppercase() {
                    let label: Label = c.to_ascii_lowercase();
                    if !round.hexagon().contains(label) {
                        continue;
                    }
                    round.submit_cell_selection(label, Actor::Pointer)
                } else {
                    round.key_press(c, Actor::Keyboard)
                };
                if let Some(f) = feedback {
                    schedule(f, sender);
                }
            }
            if (round.selection(), round.phase()) != (&before.0, before.1) {
                Outcome::Refresh
            } else {
                Outcome::Unchanged
            }
        }
    }
}

/// Text of a cell: its number when it can be shown, otherwise its label.
/// Selected (or revealed) cells are surrounded with brackets.
fn cell_text(round: &Round, cell: &Cell) -> String {
    let text: String = if round.shows_value(cell.label) {
        cell.value.to_string()
    } else {
        cell.label.to_string()
    };
    let highlighted: bool = round.selection().contains(cell.label)
        || round
            .revealed_combination()
            .is_some_and(|c| c.contains(cell.label));
    if highlighted {
        format!("[{text:^2}]")
    } else {
        format!(" {text:^2} ")
    }
}

/// Display the round.
fn render(round: &Round, out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    if round.phase() != Phase::TitleScreen {
        if round.two_players() {
            writeln!(
                out,
                "Pointer: {}  Keyboard: {}",
                round.points(Actor::Pointer),
                round.points(Actor::Keyboard)
            )?;
        } else {
            writeln!(out, "Points: {}", round.points(Actor::Pointer))?;
        }
        writeln!(out, "Time: {}", round.remaining_time())?;
        match round.target() {
            Some(t) => writeln!(out, "Target: {t}")?,
            None => writeln!(out, "Target: ???")?,
        }
    }

    for row in round.hexagon().rows() {
        let indent: String = " ".repeat((MAX_ROW_LEN - row.len()) * 2);
        let cells: Vec<String> = row.iter().map(|c| cell_text(round, c)).collect();
        writeln!(out, "{indent}{}", cells.join(""))?;
    }

    match round.phase() {
        Phase::TitleScreen => writeln!(
            out,
            "Game \"Hexagon\" from the Devil's Plan show. Type /start to play.\n{HELP}"
        )?,
        Phase::Memorization => writeln!(
            out,
            "Try to memorize the numbers on the hexagon within {} seconds.",
            round.memorization_time()
        )?,
        Phase::PickingCombinations => writeln!(
            out,
            "Find all the lines of 3 cells (horizontal or diagonal) that add up to {}, or type /giveup.",
            round.target().unwrap_or_default()
        )?,
        Phase::Wrong => writeln!(out, "Wrong")?,
        Phase::AlreadyCalled => writeln!(out, "Already called")?,
        Phase::Correct => writeln!(out, "Correct! +1 point")?,
        Phase::AllDone => writeln!(out, "All done! Type /start for a new round.")?,
        Phase::GiveUp => {
            let found: Vec<String> = round
                .called_combinations()
                .iter()
                .map(|c| c.to_string())
                .collect();
            writeln!(out, "{} combinations: {}", found.len(), found.join(" "))?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picking_round() -> Round {
        let mut round: Round = Round::new(
            GameConfig {
                memorization_time: 0,
                ..GameConfig::default()
            },
            Randomizer::new(Some(9)),
        );
        round.start_game();
        round.tick();
        round
    }

    fn rendered(round: &Round) -> String {
        let mut buf: Vec<u8> = Vec::new();
        render(round, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn title_screen() {
        let round: Round = Round::new(GameConfig::default(), Randomizer::new(Some(9)));
        let s: String = rendered(&round);
        assert!(s.contains("/start"));
        assert!(!s.contains("Points"));
        assert!(s.contains(" a "));
    }

    #[test]
    fn memorization_hides_target() {
        let mut round: Round = Round::new(GameConfig::default(), Randomizer::new(Some(9)));
        round.start_game();
        let s: String = rendered(&round);
        assert!(s.contains("Target: ???"));
        assert!(s.contains("Time: 30"));
    }

    #[test]
    fn selection_from_lines() {
        let (sender, receiver) = async_channel::unbounded::<Event>();
        let mut round: Round = picking_round();
        assert!(matches!(handle_line(&mut round, "a", &sender), Outcome::Refresh));
        assert!(matches!(handle_line(&mut round, "B", &sender), Outcome::Refresh));
        assert_eq!(round.selection().labels(), &['a', 'b']);
        assert!(rendered(&round).contains("[a ]"));

        // Not a cell
        assert!(matches!(handle_line(&mut round, "Z", &sender), Outcome::Unchanged));

        handle_line(&mut round, "c", &sender);
        assert!(round.phase().is_feedback() || round.phase() == Phase::AllDone);
        if round.phase().is_feedback() {
            match receiver.recv_blocking() {
                Ok(Event::Revert(epoch)) => assert!(round.revert_feedback(epoch)),
                other => panic!("unexpected event {other:?}"),
            }
            assert_eq!(round.phase(), Phase::PickingCombinations);
        }
    }

    #[test]
    fn unknown_keys_do_not_refresh() {
        let (sender, _receiver) = async_channel::unbounded::<Event>();
        let mut round: Round = picking_round();
        assert!(matches!(handle_line(&mut round, "z1?", &sender), Outcome::Unchanged));
        assert!(round.selection().is_empty());

        // Selecting and deselecting the same cell leaves the round unchanged
        assert!(matches!(handle_line(&mut round, "aa", &sender), Outcome::Unchanged));
        assert!(matches!(handle_line(&mut round, "za", &sender), Outcome::Refresh));
        assert_eq!(round.selection().labels(), &['a']);
    }

    #[test]
    fn commands() {
        let (sender, _receiver) = async_channel::unbounded::<Event>();
        let mut round: Round = picking_round();
        assert!(matches!(handle_line(&mut round, "/giveup", &sender), Outcome::Refresh));
        assert_eq!(round.phase(), Phase::GiveUp);
        assert!(rendered(&round).contains("combinations:"));

        assert!(matches!(handle_line(&mut round, "/two", &sender), Outcome::Unchanged));
        assert!(round.config().two_players);
        assert!(matches!(handle_line(&mut round, "/start", &sender), Outcome::Refresh));
        assert!(round.two_players());
        assert!(matches!(handle_line(&mut round, "/quit", &sender), Outcome::Quit));
        assert!(matches!(handle_line(&mut round, "/what", &sender), Outcome::Unchanged));
    }
}
