/*
hexagon.rs

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

//! Shape of the hexagon and adjacency between its cells.

use log::{Level, debug, log_enabled};
use std::collections::BTreeMap;
use strum_macros::Display;

use super::analyzer::Analysis;
use super::combination::Combination;

/// Cell identifier.
pub type Label = char;

/// Hexagon rows, from top to bottom. Rows are separated by `|`.
///
/// ```text
///    a b c
///   d e f g
///  h i j k l
///   m n o p
///    q r s
/// ```
const LAYOUT: &str = "abc|defg|hijkl|mnop|qrs";

/// Number of cells in the hexagon.
pub const NUM_CELLS: usize = 19;

/// Number of straight lines of three cells in the hexagon: 9 in each of the three directions.
pub const NUM_COMBINATIONS: usize = 27;

/// Directions used to walk the hexagon.
///
/// Only the three "forward" directions are required: every line of three cells can be walked
/// from its top (or leftmost) cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display)]
#[repr(usize)]
pub enum Direction {
    DownLeft,
    DownRight,
    Right,
}

impl Direction {
    /// All the directions.
    pub const ALL: [Direction; 3] = [Direction::DownLeft, Direction::DownRight, Direction::Right];
}

/// A cell of the hexagon.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Cell identifier.
    pub label: Label,

    /// Number assigned to the cell for the current round.
    pub value: i32,

    /// Adjacent cells, indexed by [`Direction`]. [`None`] at the edge of the hexagon.
    connection: [Option<Label>; 3],
}

impl Cell {
    /// Return the label of the adjacent cell in the given direction.
    pub fn neighbor(&self, direction: Direction) -> Option<Label> {
        self.connection[direction as usize]
    }
}

/// The hexagon: its cells, its rows, and its combinations.
#[derive(Debug, Clone)]
pub struct Hexagon {
    /// Cells indexed by their label.
    cells: BTreeMap<Label, Cell>,

    /// Labels grouped by row, for display.
    rows: Vec<Vec<Label>>,

    /// All the straight lines of three cells. The list only depends on the shape.
    combinations: Vec<Combination>,

    /// Sums and rarity for the current cell values.
    analysis: Analysis,
}

impl Hexagon {
    /// Build the hexagon and compute its combinations. All cell values are zero.
    pub fn build() -> Self {
        let lines: Vec<Vec<Label>> = LAYOUT.split('|').map(|l| l.chars().collect()).collect();
        let mut cells: BTreeMap<Label, Cell> = BTreeMap::new();

        for (r, row) in lines.iter().enumerate() {
            let next_row: Option<&Vec<Label>> = lines.get(r + 1);

            // In the upper half the next row is wider, so the cells below are shifted by one
            let upper_half: bool = next_row.is_some_and(|n| row.len() < n.len());

            for (i, label) in row.iter().enumerate() {
                let (down_left, down_right): (Option<&Label>, Option<&Label>) = match next_row {
                    Some(next) if upper_half => (next.get(i), next.get(i + 1)),
                    Some(next) => (i.checked_sub(1).and_then(|j| next.get(j)), next.get(i)),
                    None => (None, None),
                };
                cells.insert(
                    *label,
                    Cell {
                        label: *label,
                        value: 0,
                        connection: [down_left.copied(), down_right.copied(), row.get(i + 1).copied()],
                    },
                );
            }
        }

        let combinations: Vec<Combination> = Self::find_combinations(&cells);
        debug!(
            "Hexagon: {} cells, {} rows, {} combinations",
            cells.len(),
            lines.len(),
            combinations.len()
        );

        let mut hexagon: Hexagon = Self {
            cells,
            rows: lines,
            combinations,
            analysis: Analysis::default(),
        };
        hexagon.reanalyze();
        hexagon.debug();
        hexagon
    }

    /// Walk two steps from every cell in every direction. When both steps land on a cell, the
    /// three cells form a combination.
    ///
    /// Each line is found only once, from its first cell.
    fn find_combinations(cells: &BTreeMap<Label, Cell>) -> Vec<Combination> {
        let mut combinations: Vec<Combination> = Vec::new();

        for cell in cells.values() {
            for direction in Direction::ALL {
                let Some(second) = cell.neighbor(direction) else {
                    continue;
                };
                let Some(third) = cells.get(&second).and_then(|c| c.neighbor(direction)) else {
                    continue;
                };
                combinations.push(Combination::new([cell.label, second, third]));
            }
        }
        combinations
    }

    /// Return the cell with the given label.
    pub fn get(&self, label: Label) -> Option<&Cell> {
        self.cells.get(&label)
    }

    /// Whether the hexagon has a cell with the given label.
    pub fn contains(&self, label: Label) -> bool {
        self.cells.contains_key(&label)
    }

    /// Return the value of the given cell.
    ///
    /// # Panics
    ///
    /// The label must be a label of the hexagon.
    pub fn value(&self, label: Label) -> i32 {
        match self.cells.get(&label) {
            Some(c) => c.value,
            None => panic!("Unknown cell label {label:?}"),
        }
    }

    /// Set the value of the given cell.
    ///
    /// The [`Analysis`] object is not refreshed. Use [`Hexagon::reanalyze`] after changing values.
    ///
    /// # Panics
    ///
    /// The label must be a label of the hexagon.
    pub fn set_value(&mut self, label: Label, value: i32) {
        match self.cells.get_mut(&label) {
            Some(c) => c.value = value,
            None => panic!("Unknown cell label {label:?}"),
        }
    }

    /// Return all the labels, in alphabetical order.
    pub fn labels(&self) -> Vec<Label> {
        self.cells.keys().copied().collect()
    }

    /// Return the cells grouped by row, from top to bottom.
    pub fn rows(&self) -> Vec<Vec<&Cell>> {
        self.rows
            .iter()
            .map(|row| row.iter().filter_map(|l| self.cells.get(l)).collect())
            .collect()
    }

    /// Return all the combinations of the hexagon.
    pub fn combinations(&self) -> &[Combination] {
        &self.combinations
    }

    /// Return the sums and rarity for the current cell values.
    pub fn analysis(&self) -> &Analysis {
        &self.analysis
    }

    /// Recompute the sums and rarity from the current cell values.
    pub fn reanalyze(&mut self) {
        self.analysis = Analysis::compute(self);
    }

    /// Print the adjacency of each cell.
    fn debug(&self) {
        if !log_enabled!(Level::Debug) {
            return;
        }
        let mut s: String = String::new();
        for cell in self.cells.values() {
            s.clear();
            s.push_str(&format!("{} -->", cell.label));
            for direction in Direction::ALL {
                if let Some(n) = cell.neighbor(direction) {
                    s.push_str(&format!(" {direction}:{n}"));
                }
            }
            debug!("{s}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape() {
        let h: Hexagon = Hexagon::build();
        let lengths: Vec<usize> = h.rows().iter().map(|r| r.len()).collect();
        assert_eq!(lengths, vec![3, 4, 5, 4, 3]);
        assert_eq!(h.labels().len(), NUM_CELLS);
        assert!(h.contains('a') && h.contains('s'));
        assert!(!h.contains('t'));
    }

    #[test]
    fn adjacency_upper_half() {
        let h: Hexagon = Hexagon::build();
        let a: &Cell = h.get('a').unwrap();
        assert_eq!(a.neighbor(Direction::Right), Some('b'));
        assert_eq!(a.neighbor(Direction::DownLeft), Some('d'));
        assert_eq!(a.neighbor(Direction::DownRight), Some('e'));

        let g: &Cell = h.get('g').unwrap();
        assert_eq!(g.neighbor(Direction::Right), None);
        assert_eq!(g.neighbor(Direction::DownLeft), Some('k'));
        assert_eq!(g.neighbor(Direction::DownRight), Some('l'));
    }

    #[test]
    fn adjacency_lower_half() {
        let h: Hexagon = Hexagon::build();
        let cell_h: &Cell = h.get('h').unwrap();
        assert_eq!(cell_h.neighbor(Direction::DownLeft), None);
        assert_eq!(cell_h.neighbor(Direction::DownRight), Some('m'));

        let l: &Cell = h.get('l').unwrap();
        assert_eq!(l.neighbor(Direction::DownLeft), Some('p'));
        assert_eq!(l.neighbor(Direction::DownRight), None);

        let n: &Cell = h.get('n').unwrap();
        assert_eq!(n.neighbor(Direction::DownLeft), Some('q'));
        assert_eq!(n.neighbor(Direction::DownRight), Some('r'));

        for label in ['q', 'r', 's'] {
            let c: &Cell = h.get(label).unwrap();
            assert_eq!(c.neighbor(Direction::DownLeft), None);
            assert_eq!(c.neighbor(Direction::DownRight), None);
        }
    }

    #[test]
    fn combinations() {
        let h: Hexagon = Hexagon::build();
        let names: Vec<String> = h.combinations().iter().map(|c| c.to_string()).collect();
        assert_eq!(names.len(), NUM_COMBINATIONS);
        for expected in ["abc", "adh", "aej", "hij", "jkl", "hmq", "lps", "qrs", "cgl", "jnq"] {
            assert!(names.contains(&expected.to_string()), "missing {expected}");
        }
        // Not a straight line
        assert!(!names.contains(&"abe".to_string()));

        let mut dedup: Vec<Combination> = h.combinations().to_vec();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), NUM_COMBINATIONS);
    }

    #[test]
    fn every_direction_has_nine_lines() {
        let h: Hexagon = Hexagon::build();
        let right: usize = h
            .combinations()
            .iter()
            .filter(|c| {
                let [x, y, _] = *c.labels();
                h.get(x).unwrap().neighbor(Direction::Right) == Some(y)
            })
            .count();
        assert_eq!(right, 9);
    }

    #[test]
    fn set_value() {
        let mut h: Hexagon = Hexagon::build();
        h.set_value('k', 5);
        assert_eq!(h.value('k'), 5);
    }

    #[test]
    #[should_panic]
    fn unknown_label() {
        let h: Hexagon = Hexagon::build();
        h.value('z');
    }
}
