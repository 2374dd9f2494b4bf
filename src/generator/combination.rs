/*
combination.rs

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

//! Identifier of a straight line of three cells.

use serde::{Serialize, Serializer};
use std::fmt;

use super::hexagon::Label;

/// A combination of three cells.
///
/// The three labels are always stored sorted, so that a combination built while walking the
/// hexagon and a combination built from the cells that the player selected in any order compare
/// equal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Combination([Label; 3]);

impl Combination {
    /// Create a [`Combination`] object from three labels given in any order.
    pub fn new(mut labels: [Label; 3]) -> Self {
        labels.sort_unstable();
        Self(labels)
    }

    /// Return the three labels, sorted.
    pub fn labels(&self) -> &[Label; 3] {
        &self.0
    }

    /// Whether the given cell is part of the combination.
    pub fn contains(&self, label: Label) -> bool {
        self.0.contains(&label)
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.0[0], self.0[1], self.0[2])
    }
}

/// Serialize a [`Combination`] as its three-letter string, so it can be used as a JSON map key.
impl Serialize for Combination {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_sorted() {
        let c: Combination = Combination::new(['j', 'a', 'e']);
        assert_eq!(c.labels(), &['a', 'e', 'j']);
        assert_eq!(c, Combination::new(['e', 'j', 'a']));
        assert_eq!(c.to_string(), "aej");
    }

    #[test]
    fn contains_label() {
        let c: Combination = Combination::new(['q', 'r', 's']);
        assert!(c.contains('r'));
        assert!(!c.contains('a'));
    }

    #[test]
    fn serialized_as_string() {
        let c: Combination = Combination::new(['c', 'b', 'a']);
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"abc\"");
    }
}
