/*
round.rs

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

//! Manage the status of a round.
//!
//! A round goes through the following phases:
//!
//! 1. [`Phase::Memorization`]: the numbers are visible and the countdown runs.
//! 2. [`Phase::PickingCombinations`]: the numbers are hidden and the target is revealed. The
//!    player selects cells three by three.
//!    Every verified selection leads to a short feedback phase ([`Phase::Wrong`],
//!    [`Phase::AlreadyCalled`], or [`Phase::Correct`]) which reverts to
//!    [`Phase::PickingCombinations`].
//! 3. [`Phase::AllDone`] when all the combinations are found, or [`Phase::GiveUp`] when the
//!    player asks for the solution.
//!
//! The [`Round`] object does not own any timer. The caller sends a tick every second with
//! [`Round::tick`], and schedules the [`Feedback`] objects that the submit methods return. When
//! the feedback delay expires, the caller gives the feedback epoch back to
//! [`Round::revert_feedback`]. A feedback that is not the last one issued is ignored.

use log::{debug, info};
use std::time::Duration;
use strum_macros::Display;

use crate::config::GameConfig;
use crate::generator::combination::Combination;
use crate::generator::hexagon::{Hexagon, Label};
use crate::generator::randomizer::Randomizer;
use crate::scores::{Actor, Scores};
use crate::selection::Selection;

/// How long the wrong and already called messages are displayed.
pub const WRONG_DELAY: Duration = Duration::from_millis(1000);

/// How long the correct message is displayed.
pub const CORRECT_DELAY: Duration = Duration::from_millis(2000);

/// The target is chosen among that many most frequent sums.
const TARGET_CANDIDATES: usize = 3;

/// Phases of a round.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Display)]
pub enum Phase {
    #[default]
    TitleScreen,
    Memorization,
    PickingCombinations,
    Wrong,
    AlreadyCalled,
    Correct,
    AllDone,
    GiveUp,
}

impl Phase {
    /// Whether the phase is a short feedback that reverts to [`Phase::PickingCombinations`].
    pub fn is_feedback(self) -> bool {
        matches!(self, Phase::Wrong | Phase::AlreadyCalled | Phase::Correct)
    }

    /// Delay before a feedback phase reverts.
    pub fn feedback_delay(self) -> Option<Duration> {
        match self {
            Phase::Wrong | Phase::AlreadyCalled => Some(WRONG_DELAY),
            Phase::Correct => Some(CORRECT_DELAY),
            _ => None,
        }
    }
}

/// Feedback to schedule after a selection has been verified.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// The feedback phase that the round entered.
    pub phase: Phase,

    /// When to call [`Round::revert_feedback`].
    pub delay: Duration,

    /// Value to give back to [`Round::revert_feedback`].
    pub epoch: u64,
}

/// Status of the round in progress.
#[derive(Debug)]
pub struct Round {
    /// Settings used by the next round.
    config: GameConfig,

    /// Settings of the current round.
    round_config: GameConfig,

    hexagon: Hexagon,
    randomizer: Randomizer,
    phase: Phase,

    /// Sum that the player must find. Set when the round starts.
    target: Option<i64>,

    /// Combinations found by the player, in the order they were found.
    called: Vec<Combination>,

    /// Cells that the player is selecting.
    selection: Selection,

    scores: Scores,

    /// Remaining memorization time in seconds.
    remaining_time: u32,

    /// Combination displayed after the player gave up. It rotates at each tick.
    reveal_index: usize,

    /// Incremented for each feedback, so that older feedbacks can be recognized.
    epoch: u64,
}

impl Round {
    /// Create a [`Round`] object in the [`Phase::TitleScreen`] phase.
    pub fn new(config: GameConfig, randomizer: Randomizer) -> Self {
        Self {
            config,
            round_config: config,
            hexagon: Hexagon::build(),
            randomizer,
            phase: Phase::TitleScreen,
            target: None,
            called: Vec::new(),
            selection: Selection::new(),
            scores: Scores::new(config.two_players),
            remaining_time: config.memorization_time,
            reveal_index: 0,
            epoch: 0,
        }
    }

    /// Return the settings for the next round.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Change the settings. They are used when the next round starts.
    pub fn set_config(&mut self, config: GameConfig) {
        debug!("New settings: {config:?}");
        self.config = config;
    }

    /// Start a new round.
    ///
    /// # Panics
    ///
    /// The settings must have a valid range (see [`GameConfig::validate`]).
    pub fn start_game(&mut self) {
        self.phase = Phase::Memorization;
        self.selection.clear();
        self.called.clear();
        self.reveal_index = 0;
        self.epoch += 1;

        // Points are reset if the two players mode changes
        self.scores.set_two_players(self.config.two_players);
        self.round_config = self.config;

        self.randomizer
            .randomize(&mut self.hexagon, self.config.min, self.config.max);

        let sorted: &[i64] = self.hexagon.analysis().sorted_by_rarity();
        let candidates: usize = sorted.len().min(TARGET_CANDIDATES);
        self.target = match candidates {
            0 => None,
            n => Some(sorted[self.randomizer.pick_index(n)]),
        };
        self.remaining_time = self.config.memorization_time;

        info!(
            "New round: target = {:?}, {} combinations to find, {}s to memorize",
            self.target,
            self.solutions_len(),
            self.remaining_time
        );
    }

    /// Process the one-second timer.
    ///
    /// Return `true` if the round status changed and needs to be displayed again.
    pub fn tick(&mut self) -> bool {
        match self.phase {
            Phase::Memorization => {
                if self.remaining_time > 0 {
                    self.remaining_time -= 1;
                } else {
                    self.set_phase(Phase::PickingCombinations);
                }
                true
            }
            Phase::GiveUp => {
                if self.called.is_empty() {
                    return false;
                }
                self.reveal_index = if self.reveal_index + 1 >= self.called.len() {
                    0
                } else {
                    self.reveal_index + 1
                };
                true
            }
            _ => false,
        }
    }

    /// Select or deselect a cell.
    ///
    /// When the selection reaches three cells, the combination is verified and the points of
    /// the actor are updated. The method returns the [`Feedback`] to schedule, if any.
    ///
    /// Outside of the [`Phase::PickingCombinations`] phase the method does nothing.
    ///
    /// # Panics
    ///
    /// The label must be a cell of the hexagon.
    pub fn submit_cell_selection(&mut self, label: Label, actor: Actor) -> Option<Feedback> {
        if self.phase != Phase::PickingCombinations {
            return None;
        }
        assert!(self.hexagon.contains(label), "Unknown cell label {label:?}");

        if !self.selection.toggle(label) {
            debug!("{actor} deselected {label}: {}", self.selection);
            return None;
        }
        debug!("{actor} selected {label}: {}", self.selection);

        let combination: Combination = self.selection.as_combination()?;
        let target: i64 = self.target?;

        if self.called.contains(&combination) {
            self.scores.penalize(actor);
            return Some(self.show_feedback(Phase::AlreadyCalled));
        }

        if self.hexagon.analysis().sum(&combination) == Some(target) {
            self.scores.reward(actor);
            self.called.push(combination);
            if self.called.len() == self.solutions_len() {
                self.set_phase(Phase::AllDone);
                return None;
            }
            return Some(self.show_feedback(Phase::Correct));
        }

        self.scores.penalize(actor);
        Some(self.show_feedback(Phase::Wrong))
    }

    /// Process a key press. Keys that are not a cell label are ignored.
    pub fn key_press(&mut self, key: char, actor: Actor) -> Option<Feedback> {
        if !self.hexagon.contains(key) {
            debug!("Ignoring key {key:?}");
            return None;
        }
        self.submit_cell_selection(key, actor)
    }

    /// Leave the feedback phase that the given epoch identifies.
    ///
    /// Return `false` when the feedback is outdated: another feedback followed, a new round
    /// started, or the round ended.
    pub fn revert_feedback(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || !self.phase.is_feedback() {
            debug!("Ignoring outdated feedback {epoch} (current {})", self.epoch);
            return false;
        }
        self.selection.clear();
        self.set_phase(Phase::PickingCombinations);
        true
    }

    /// Give up and reveal all the combinations that add up to the target.
    ///
    /// Return `false` if the round is not in the [`Phase::PickingCombinations`] phase.
    pub fn give_up(&mut self) -> bool {
        if self.phase != Phase::PickingCombinations {
            return false;
        }
        self.called = match self.target {
            Some(t) => self.hexagon.analysis().combinations_with_sum(t),
            None => Vec::new(),
        };
        self.reveal_index = 0;
        self.set_phase(Phase::GiveUp);
        true
    }

    /// Set the points of both players to zero.
    pub fn reset_points(&mut self) {
        self.scores.reset();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn hexagon(&self) -> &Hexagon {
        &self.hexagon
    }

    /// Return the points of the given actor.
    pub fn points(&self, actor: Actor) -> i32 {
        self.scores.get(actor)
    }

    /// Whether the current round is played in two players mode.
    pub fn two_players(&self) -> bool {
        self.scores.two_players()
    }

    /// Return the remaining memorization time in seconds.
    pub fn remaining_time(&self) -> u32 {
        self.remaining_time
    }

    /// Return the memorization time of the current round.
    pub fn memorization_time(&self) -> u32 {
        self.round_config.memorization_time
    }

    /// Return the target sum, which stays hidden until the memorization ends.
    pub fn target(&self) -> Option<i64> {
        match self.phase {
            Phase::TitleScreen | Phase::Memorization => None,
            _ => self.target,
        }
    }

    /// Return the number of combinations that add up to the target.
    pub fn solutions_len(&self) -> usize {
        match self.target {
            Some(t) => self.hexagon.analysis().rarity_of(t),
            None => 0,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Return the combinations found so far, or all the solutions after giving up.
    pub fn called_combinations(&self) -> &[Combination] {
        &self.called
    }

    /// Return the combination to highlight after the player gave up.
    pub fn revealed_combination(&self) -> Option<&Combination> {
        match self.phase {
            Phase::GiveUp => self.called.get(self.reveal_index),
            _ => None,
        }
    }

    /// Whether the number of the given cell can be displayed.
    pub fn shows_value(&self, label: Label) -> bool {
        match self.phase {
            Phase::Memorization | Phase::GiveUp => true,
            Phase::Correct => self.selection.contains(label),
            _ => false,
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        debug!("Phase {} -> {phase}", self.phase);
        self.phase = phase;
    }

    /// Enter a feedback phase and return the [`Feedback`] object to schedule.
    fn show_feedback(&mut self, phase: Phase) -> Feedback {
        self.epoch += 1;
        self.set_phase(phase);
        Feedback {
            phase,
            delay: phase.feedback_delay().unwrap_or(WRONG_DELAY),
            epoch: self.epoch,
        }
    }
}
