/*
lib.rs

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

//! Hexsum: find the lines of three cells that add up to the target.
//!
//! A hexagon of 19 cells is filled with random numbers. The player memorizes them, the numbers
//! are hidden, and the player must find every straight line of three cells whose numbers add up
//! to a target value.
//!
//! The [`generator`] module builds the hexagon, assigns the random numbers, and analyzes the
//! combinations. The [`round::Round`] object drives a round from the memorization phase to the
//! end, and verifies the player selections.

pub mod config;
pub mod generator;
pub mod round;
pub mod scores;
pub mod selection;
