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

//! Storage capabilities shared by the plain table and the Count-Min sketch.
//!
//! Models are written against these traits so that the same learning rule runs on a single
//! [`FeatureHashTable`](crate::table::FeatureHashTable) or on the rows of a
//! [`CountMinSketch`](crate::countmin::CountMinSketch).

use crate::document::NGram;
use crate::table::CountValue;

/// Per-(n-gram, class) occurrence counts.
pub trait CountStore {
    /// Counter type held in each slot.
    type Count: CountValue;

    /// Returns the number of independent hashed rows.
    fn num_rows(&self) -> usize;

    /// Returns the estimated count of `ngram` in the class given by `class_bit`.
    ///
    /// Slots start at one, so the estimate is at least the true count plus one.
    fn count(&self, ngram: &NGram<'_>, class_bit: usize) -> Self::Count;

    /// Returns the `(ham, spam)` estimates of `ngram`, hashing it once per row.
    fn class_counts(&self, ngram: &NGram<'_>) -> (Self::Count, Self::Count) {
        (self.count(ngram, 0), self.count(ngram, 1))
    }

    /// Records one occurrence of `ngram` in the class given by `class_bit`, in every row.
    fn increment_count(&mut self, ngram: &NGram<'_>, class_bit: usize);
}

/// Real-valued hashed weights organized in one or more independent rows.
pub trait WeightStore {
    /// Returns the number of independent hashed rows.
    fn num_rows(&self) -> usize;

    /// Returns the slot index of `ngram` within `row`.
    fn row_bucket(&self, row: usize, ngram: &NGram<'_>) -> usize;

    /// Returns the weight stored at `index` of `row`.
    fn row_weight(&self, row: usize, index: usize) -> f64;

    /// Adds `delta` to the weight stored at `index` of `row`.
    fn add_to_row(&mut self, row: usize, index: usize, delta: f64);

    /// Returns the weight estimate of `ngram`: the mean of its weights across rows.
    fn weight(&self, ngram: &NGram<'_>) -> f64 {
        let rows = self.num_rows();
        let sum: f64 = (0..rows)
            .map(|row| self.row_weight(row, self.row_bucket(row, ngram)))
            .sum();
        sum / rows as f64
    }
}
