/*
generator.rs

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

//! Build the hexagon and analyze its combinations.
//!
//! The [`hexagon::Hexagon`] object is built once with [`hexagon::Hexagon::build`].
//! Its shape never changes: five rows of 3, 4, 5, 4, and 3 cells, each cell identified by a
//! letter.
//! While building the shape, the list of the [`combination::Combination`] objects is computed.
//! A combination is a straight line of three adjacent cells.
//!
//! For each round, a [`randomizer::Randomizer`] object assigns a random number to every cell
//! with [`randomizer::Randomizer::randomize`].
//! That method also refreshes the [`analyzer::Analysis`] object of the hexagon, which stores the
//! sum of every combination and how many combinations share the same sum (the rarity).

pub mod analyzer;
pub mod combination;
pub mod hexagon;
pub mod randomizer;
