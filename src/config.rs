/*
config.rs

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

//! Package constants and game settings.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

pub const COPYRIGHT_NOTICE: &str = "
Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Default lowest cell value.
pub const DEFAULT_MIN: i32 = 1;

/// Default highest cell value.
pub const DEFAULT_MAX: i32 = 6;

/// Default time in seconds given to the player to memorize the numbers.
pub const DEFAULT_MEMORIZATION_TIME: u32 = 30;

/// Invalid settings.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The lowest cell value is greater than the highest cell value.
    EmptyRange { min: i32, max: i32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::EmptyRange { min, max } => {
                write!(f, "the minimum value ({min}) is greater than the maximum value ({max})")
            }
        }
    }
}

impl Error for ConfigError {}

/// Game settings.
///
/// The engine reads the settings when a round starts. Changing them during a round has no effect
/// on that round.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Lowest value for a cell.
    pub min: i32,

    /// Highest value for a cell.
    pub max: i32,

    /// Memorization time in seconds.
    pub memorization_time: u32,

    /// Two players mode: the keyboard player against the pointer player.
    pub two_players: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            memorization_time: DEFAULT_MEMORIZATION_TIME,
            two_players: false,
        }
    }
}

impl GameConfig {
    /// Verify that the settings can be used for a round.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::EmptyRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}
