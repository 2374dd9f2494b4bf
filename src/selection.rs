/*
selection.rs

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

//! Manage the cells that the player is selecting.
//!
//! The player selects cells one by one. Selecting a selected cell deselects it.
//! When three cells are selected, they form a [`Combination`] that the round verifies.

use std::fmt;

use crate::generator::combination::Combination;
use crate::generator::hexagon::Label;

/// Cells selected by the player, kept sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    labels: Vec<Label>,
}

impl Selection {
    /// Create an empty [`Selection`] object.
    pub fn new() -> Self {
        Self {
            labels: Vec::with_capacity(3),
        }
    }

    /// Deselect all the cells.
    pub fn clear(&mut self) {
        self.labels.clear();
    }

    /// Select the cell, or deselect it if it is already selected.
    ///
    /// Return `true` if the cell has been added to the selection.
    pub fn toggle(&mut self, label: Label) -> bool {
        match self.labels.binary_search(&label) {
            Ok(i) => {
                self.labels.remove(i);
                false
            }
            Err(i) => {
                self.labels.insert(i, label);
                true
            }
        }
    }

    /// Whether the cell is selected.
    pub fn contains(&self, label: Label) -> bool {
        self.labels.binary_search(&label).is_ok()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Return the selected labels, sorted.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Return the [`Combination`] when exactly three cells are selected.
    pub fn as_combination(&self) -> Option<Combination> {
        match self.labels[..] {
            [a, b, c] => Some(Combination::new([a, b, c])),
            _ => None,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for l in &self.labels {
            write!(f, "{l}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle() {
        let mut s: Selection = Selection::new();
        assert!(s.toggle('e'));
        assert!(s.toggle('a'));
        assert_eq!(s.labels(), &['a', 'e']);
        assert!(!s.toggle('e'));
        assert_eq!(s.labels(), &['a']);
        assert!(!s.contains('e'));
        assert!(s.contains('a'));
    }

    #[test]
    fn combination_needs_three_cells() {
        let mut s: Selection = Selection::new();
        s.toggle('j');
        s.toggle('a');
        assert_eq!(s.as_combination(), None);
        s.toggle('e');
        assert_eq!(s.as_combination(), Some(Combination::new(['a', 'e', 'j'])));
        assert_eq!(s.to_string(), "aej");
        s.clear();
        assert!(s.is_empty());
    }
}
