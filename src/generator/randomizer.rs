/*
randomizer.rs

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

//! Assign random numbers to the hexagon cells.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::hexagon::{Hexagon, Label};

/// Seedable source of random numbers for the rounds.
///
/// With the same seed and the same sequence of calls, the generated rounds are the same.
#[derive(Debug, Clone)]
pub struct Randomizer {
    rng: StdRng,
    seed: u64,
}

impl Randomizer {
    /// Create a [`Randomizer`] object. Without a seed, a random one is selected.
    pub fn new(seed: Option<u64>) -> Self {
        let seed: u64 = seed.unwrap_or_else(|| rand::rng().random());
        debug!("Random seed = {seed}");
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Return the seed in use.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Assign a number between `min` and `max` (inclusive) to every cell, and then refresh the
    /// sums and the rarity of the combinations.
    ///
    /// # Panics
    ///
    /// `min` must not be greater than `max`.
    pub fn randomize(&mut self, hexagon: &mut Hexagon, min: i32, max: i32) {
        assert!(min <= max, "Invalid range: min ({min}) > max ({max})");

        let labels: Vec<Label> = hexagon.labels();
        for label in labels {
            hexagon.set_value(label, self.rng.random_range(min..=max));
        }
        hexagon.reanalyze();
        debug!("Randomized the hexagon with values in [{min}, {max}]");
    }

    /// Return a random index in `0..len`.
    ///
    /// # Panics
    ///
    /// `len` must not be zero.
    pub fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}
