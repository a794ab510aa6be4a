// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::document::NGram;
use crate::store::CountStore;
use crate::store::WeightStore;
use crate::table::ClassLayout;
use crate::table::CountValue;
use crate::table::FeatureHashTable;
use crate::table::TableValue;
use crate::table::WeightValue;

/// Count-Min sketch made of independently seeded hashed rows.
///
/// See [`crate::countmin`] for the aggregation rules.
#[derive(Debug, Clone, PartialEq)]
pub struct CountMinSketch<V> {
    seed: u64,
    rows: Vec<FeatureHashTable<V>>,
}

impl<V: TableValue> CountMinSketch<V> {
    /// Creates a sketch with `num_rows` rows of `2^lg_num_buckets` buckets each.
    ///
    /// Row seeds are drawn from a random generator seeded with `seed` and are pairwise distinct.
    ///
    /// # Panics
    ///
    /// Panics if `num_rows` is zero or `lg_num_buckets` is out of range.
    pub fn new(
        num_rows: usize,
        lg_num_buckets: u8,
        layout: ClassLayout,
        seed: u64,
        initial: V,
    ) -> Self {
        assert!(num_rows >= 1, "num_rows must be at least 1");
        let rows = row_seeds(num_rows, seed)
            .into_iter()
            .map(|row_seed| FeatureHashTable::new(lg_num_buckets, layout, row_seed, initial))
            .collect();
        Self { seed, rows }
    }

    /// Suggests `lg_num_buckets` for the given relative error.
    ///
    /// The sketch error is bounded by `e / num_buckets` times the total weight, so this returns
    /// the smallest power of two with `e / 2^lg <= relative_error`.
    pub fn suggest_lg_num_buckets(relative_error: f64) -> u8 {
        assert!(
            relative_error > 0.0,
            "relative_error must be greater than 0.0"
        );
        let buckets = (std::f64::consts::E / relative_error).ceil();
        (buckets.log2().ceil() as u8).max(crate::table::MIN_LG_NUM_BUCKETS)
    }

    /// Suggests the number of rows for the given confidence.
    ///
    /// Returns `ceil(ln(1 / (1 - confidence)))`, at least one.
    pub fn suggest_num_rows(confidence: f64) -> usize {
        assert!(
            (0.0..1.0).contains(&confidence),
            "confidence must be in [0.0, 1.0)"
        );
        let rows = (1.0 / (1.0 - confidence)).ln().ceil();
        (rows as usize).max(1)
    }

    /// Returns the number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns log2 of the number of buckets per row.
    pub fn lg_num_buckets(&self) -> u8 {
        self.rows[0].lg_num_buckets()
    }

    /// Returns the number of buckets per row.
    pub fn num_buckets(&self) -> usize {
        self.rows[0].num_buckets()
    }

    /// Returns the seed the row seeds were derived from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the relative error of a count estimate, `e / num_buckets`.
    pub fn relative_error(&self) -> f64 {
        std::f64::consts::E / self.num_buckets() as f64
    }

    /// Returns the rows.
    pub fn rows(&self) -> &[FeatureHashTable<V>] {
        &self.rows
    }
}

impl<V: CountValue> CountMinSketch<V> {
    /// Creates a per-class count sketch with every slot set to the prior of one.
    pub fn counts(num_rows: usize, lg_num_buckets: u8, seed: u64) -> Self {
        Self::new(num_rows, lg_num_buckets, ClassLayout::PerClass, seed, V::ONE)
    }

    /// Records one occurrence of `ngram` for `class_bit` in every row.
    pub fn increment(&mut self, ngram: &NGram<'_>, class_bit: usize) {
        for row in self.rows.iter_mut() {
            let index = row.bucket(ngram, class_bit);
            row.increment(index);
        }
    }

    /// Returns the minimum across rows of the slot of `ngram` for `class_bit`.
    pub fn estimate_count(&self, ngram: &NGram<'_>, class_bit: usize) -> V {
        self.rows
            .iter()
            .map(|row| row.get(row.bucket(ngram, class_bit)))
            .min()
            .expect("sketch has at least one row")
    }
}

impl<V: WeightValue> CountMinSketch<V> {
    /// Creates a shared weight sketch with every slot set to zero.
    pub fn weights(num_rows: usize, lg_num_buckets: u8, seed: u64) -> Self {
        Self::new(num_rows, lg_num_buckets, ClassLayout::Shared, seed, V::ZERO)
    }

    /// Returns the mean across rows of the weight of `ngram`.
    pub fn estimate_weight(&self, ngram: &NGram<'_>) -> f64 {
        let sum: f64 = self
            .rows
            .iter()
            .map(|row| row.get(row.bucket(ngram, 0)).to_f64())
            .sum();
        sum / self.rows.len() as f64
    }

    /// Adds `delta` to the weight of `ngram` in every row.
    pub fn add_weight(&mut self, ngram: &NGram<'_>, delta: f64) {
        for row in self.rows.iter_mut() {
            let index = row.bucket(ngram, 0);
            row.add(index, V::from_f64(delta));
        }
    }
}

impl<V: CountValue> CountStore for CountMinSketch<V> {
    type Count = V;

    fn num_rows(&self) -> usize {
        self.rows.len()
    }

    fn count(&self, ngram: &NGram<'_>, class_bit: usize) -> V {
        self.estimate_count(ngram, class_bit)
    }

    fn class_counts(&self, ngram: &NGram<'_>) -> (V, V) {
        self.rows
            .iter()
            .map(|row| {
                let hash = ngram.hash(row.seed());
                (
                    row.get(row.bucket_of_hash(hash, 0)),
                    row.get(row.bucket_of_hash(hash, 1)),
                )
            })
            .reduce(|(ham, spam), (row_ham, row_spam)| (ham.min(row_ham), spam.min(row_spam)))
            .expect("sketch has at least one row")
    }

    fn increment_count(&mut self, ngram: &NGram<'_>, class_bit: usize) {
        self.increment(ngram, class_bit);
    }
}

impl<V: WeightValue> WeightStore for CountMinSketch<V> {
    fn num_rows(&self) -> usize {
        self.rows.len()
    }

    fn row_bucket(&self, row: usize, ngram: &NGram<'_>) -> usize {
        self.rows[row].bucket(ngram, 0)
    }

    fn row_weight(&self, row: usize, index: usize) -> f64 {
        self.rows[row].get(index).to_f64()
    }

    fn add_to_row(&mut self, row: usize, index: usize, delta: f64) {
        self.rows[row].add(index, V::from_f64(delta));
    }

    fn weight(&self, ngram: &NGram<'_>) -> f64 {
        self.estimate_weight(ngram)
    }
}

fn row_seeds(num_rows: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut seeds = Vec::with_capacity(num_rows);
    while seeds.len() < num_rows {
        let candidate: u64 = rng.random();
        if !seeds.contains(&candidate) {
            seeds.push(candidate);
        }
    }
    seeds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_seeds_are_distinct_and_reproducible() {
        let seeds = row_seeds(16, 5);
        let mut sorted = seeds.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 16);
        assert_eq!(seeds, row_seeds(16, 5));
        assert_ne!(seeds, row_seeds(16, 6));
    }
}
