/*
analyzer.rs

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

//! Sums and rarity of the hexagon combinations.

use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

use super::combination::Combination;
use super::hexagon::Hexagon;

/// Sums of the combinations for the current cell values.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Analysis {
    /// Sum of each combination.
    sums: BTreeMap<Combination, i64>,

    /// Number of combinations for each sum.
    rarity: BTreeMap<i64, usize>,

    /// Sums ordered from the most frequent to the least frequent. Sums with the same frequency
    /// are ordered by increasing value.
    sorted_by_rarity: Vec<i64>,
}

impl Analysis {
    /// Compute the sums and the rarity of all the combinations of the given hexagon.
    pub fn compute(hexagon: &Hexagon) -> Self {
        let mut sums: BTreeMap<Combination, i64> = BTreeMap::new();
        let mut rarity: BTreeMap<i64, usize> = BTreeMap::new();

        for combination in hexagon.combinations() {
            // Three i32 values always fit in an i64
            let sum: i64 = combination
                .labels()
                .iter()
                .map(|l| i64::from(hexagon.value(*l)))
                .sum();
            sums.insert(*combination, sum);
            *rarity.entry(sum).or_insert(0) += 1;
        }

        // The rarity map iterates by increasing sum and the sort is stable, which breaks ties
        let mut sorted_by_rarity: Vec<i64> = rarity.keys().copied().collect();
        sorted_by_rarity.sort_by(|a, b| rarity[b].cmp(&rarity[a]));

        debug!("Rarity: {rarity:?}");
        debug!("Sorted by rarity: {sorted_by_rarity:?}");
        Self {
            sums,
            rarity,
            sorted_by_rarity,
        }
    }

    /// Return the sum of the given combination, or None if the three cells do not form a line.
    pub fn sum(&self, combination: &Combination) -> Option<i64> {
        self.sums.get(combination).copied()
    }

    /// Return the sums indexed by combination.
    pub fn sums(&self) -> &BTreeMap<Combination, i64> {
        &self.sums
    }

    /// Return the number of combinations for each sum.
    pub fn rarity(&self) -> &BTreeMap<i64, usize> {
        &self.rarity
    }

    /// Return the number of combinations that add up to the given sum.
    pub fn rarity_of(&self, sum: i64) -> usize {
        self.rarity.get(&sum).copied().unwrap_or(0)
    }

    /// Return the sums, most frequent first.
    pub fn sorted_by_rarity(&self) -> &[i64] {
        &self.sorted_by_rarity
    }

    /// Return all the combinations that add up to the given sum.
    pub fn combinations_with_sum(&self, sum: i64) -> Vec<Combination> {
        self.sums
            .iter()
            .filter(|(_, s)| **s == sum)
            .map(|(c, _)| *c)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::hexagon::NUM_COMBINATIONS;

    /// Hexagon with the values 1 to 19 in label order.
    fn counting_hexagon() -> Hexagon {
        let mut h: Hexagon = Hexagon::build();
        for (i, label) in h.labels().into_iter().enumerate() {
            h.set_value(label, i as i32 + 1);
        }
        h.reanalyze();
        h
    }

    #[test]
    fn sums_match_cell_values() {
        let h: Hexagon = counting_hexagon();
        let a: &Analysis = h.analysis();
        assert_eq!(a.sums().len(), NUM_COMBINATIONS);
        for (c, s) in a.sums() {
            let expected: i64 = c.labels().iter().map(|l| i64::from(h.value(*l))).sum();
            assert_eq!(*s, expected);
        }
        // a=1 b=2 c=3
        assert_eq!(a.sum(&Combination::new(['a', 'b', 'c'])), Some(6));
        assert_eq!(a.sum(&Combination::new(['a', 'b', 'd'])), None);
    }

    #[test]
    fn rarity_counts_combinations() {
        let h: Hexagon = counting_hexagon();
        let a: &Analysis = h.analysis();
        assert_eq!(a.rarity().values().sum::<usize>(), NUM_COMBINATIONS);
        for (sum, count) in a.rarity() {
            assert_eq!(a.combinations_with_sum(*sum).len(), *count);
            assert_eq!(a.rarity_of(*sum), *count);
        }
        assert_eq!(a.rarity_of(1000), 0);
    }

    #[test]
    fn sorted_by_rarity_is_non_increasing() {
        let h: Hexagon = counting_hexagon();
        let sorted: &[i64] = h.analysis().sorted_by_rarity();
        assert_eq!(sorted.len(), h.analysis().rarity().len());
        for w in sorted.windows(2) {
            let (r0, r1) = (h.analysis().rarity_of(w[0]), h.analysis().rarity_of(w[1]));
            assert!(r0 >= r1);
            if r0 == r1 {
                assert!(w[0] < w[1]);
            }
        }
    }

    #[test]
    fn constant_values() {
        let mut h: Hexagon = Hexagon::build();
        for label in h.labels() {
            h.set_value(label, 4);
        }
        h.reanalyze();
        assert_eq!(h.analysis().sorted_by_rarity(), &[12]);
        assert_eq!(h.analysis().rarity_of(12), NUM_COMBINATIONS);
    }

    #[test]
    fn extreme_values() {
        let mut h: Hexagon = Hexagon::build();
        for label in h.labels() {
            h.set_value(label, i32::MAX);
        }
        h.set_value('a', i32::MIN);
        h.reanalyze();
        let max: i64 = 3 * i64::from(i32::MAX);
        assert_eq!(h.analysis().sorted_by_rarity()[0], max);
        assert_eq!(
            h.analysis().sum(&Combination::new(['a', 'b', 'c'])),
            Some(i64::from(i32::MIN) + 2 * i64::from(i32::MAX))
        );
    }

    #[test]
    fn idempotent() {
        let h: Hexagon = counting_hexagon();
        assert_eq!(Analysis::compute(&h), Analysis::compute(&h));
        assert_eq!(&Analysis::compute(&h), h.analysis());
    }
}
