/*
scores.rs

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

//! Manage the players' points.
//!
//! In single player mode, both input channels (pointer and keyboard) share one counter.
//! In two players mode, the pointer player uses the first counter and the keyboard player uses
//! the second one.

use log::debug;
use strum_macros::Display;

/// Input channel that submitted a cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum Actor {
    Pointer,
    Keyboard,
}

/// Points of the players.
#[derive(Debug, Clone, Default)]
pub struct Scores {
    player1: i32,
    player2: i32,

    /// Whether the keyboard player has its own counter.
    two_players: bool,
}

impl Scores {
    /// Create a [`Scores`] object.
    pub fn new(two_players: bool) -> Self {
        Self {
            player1: 0,
            player2: 0,
            two_players,
        }
    }

    /// Set both counters to zero.
    pub fn reset(&mut self) {
        self.player1 = 0;
        self.player2 = 0;
        debug!("Points reset");
    }

    pub fn two_players(&self) -> bool {
        self.two_players
    }

    /// Switch the two players mode. When the mode changes, the counters are reset.
    pub fn set_two_players(&mut self, two_players: bool) {
        if self.two_players != two_players {
            self.reset();
            self.two_players = two_players;
            debug!("Two players mode = {two_players}");
        }
    }

    /// Return the points of the given actor.
    pub fn get(&self, actor: Actor) -> i32 {
        match actor {
            Actor::Keyboard if self.two_players => self.player2,
            _ => self.player1,
        }
    }

    fn counter_mut(&mut self, actor: Actor) -> &mut i32 {
        match actor {
            Actor::Keyboard if self.two_players => &mut self.player2,
            _ => &mut self.player1,
        }
    }

    /// Add one point to the given actor.
    pub fn reward(&mut self, actor: Actor) {
        let c: &mut i32 = self.counter_mut(actor);
        *c += 1;
        debug!("{actor}: points + 1 = {c}");
    }

    /// Remove one point from the given actor. Points can be negative.
    pub fn penalize(&mut self, actor: Actor) {
        let c: &mut i32 = self.counter_mut(actor);
        *c -= 1;
        debug!("{actor}: points - 1 = {c}");
    }
}
