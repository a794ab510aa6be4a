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

use crate::document::NGram;
use crate::store::CountStore;
use crate::store::WeightStore;
use crate::table::CountValue;
use crate::table::TableValue;
use crate::table::WeightValue;

/// Smallest accepted `lg_num_buckets`.
pub const MIN_LG_NUM_BUCKETS: u8 = 1;
/// Largest accepted `lg_num_buckets`.
pub const MAX_LG_NUM_BUCKETS: u8 = 30;

/// How a table lays out its slots with respect to the document class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassLayout {
    /// One slot per bucket, shared by both classes.
    Shared,
    /// Two adjacent slots per bucket: `bucket * 2` for ham and `bucket * 2 + 1` for spam.
    PerClass,
}

impl ClassLayout {
    fn slots_per_bucket(self) -> usize {
        match self {
            ClassLayout::Shared => 1,
            ClassLayout::PerClass => 2,
        }
    }
}

/// A fixed-size table indexed by the masked seeded hash of an n-gram.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureHashTable<V> {
    seed: u64,
    lg_num_buckets: u8,
    layout: ClassLayout,
    slots: Box<[V]>,
}

impl<V: TableValue> FeatureHashTable<V> {
    /// Creates a table with `2^lg_num_buckets` buckets, every slot set to `initial`.
    ///
    /// # Panics
    ///
    /// Panics if `lg_num_buckets` is outside
    /// `[MIN_LG_NUM_BUCKETS, MAX_LG_NUM_BUCKETS]`.
    pub fn new(lg_num_buckets: u8, layout: ClassLayout, seed: u64, initial: V) -> Self {
        assert!(
            (MIN_LG_NUM_BUCKETS..=MAX_LG_NUM_BUCKETS).contains(&lg_num_buckets),
            "lg_num_buckets must be in [{MIN_LG_NUM_BUCKETS}, {MAX_LG_NUM_BUCKETS}], got {lg_num_buckets}"
        );
        let len = (1usize << lg_num_buckets) * layout.slots_per_bucket();
        Self {
            seed,
            lg_num_buckets,
            layout,
            slots: vec![initial; len].into_boxed_slice(),
        }
    }

    /// Returns the hash seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns log2 of the number of buckets.
    pub fn lg_num_buckets(&self) -> u8 {
        self.lg_num_buckets
    }

    /// Returns the number of buckets.
    pub fn num_buckets(&self) -> usize {
        1 << self.lg_num_buckets
    }

    /// Returns the slot layout.
    pub fn layout(&self) -> ClassLayout {
        self.layout
    }

    /// Returns the number of slots, which is the number of buckets times the slots per bucket.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the table has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the slot index of `ngram` for the given class bit.
    ///
    /// With [`ClassLayout::Shared`] the class bit must be zero.
    #[inline]
    pub fn bucket(&self, ngram: &NGram<'_>, class_bit: usize) -> usize {
        self.bucket_of_hash(ngram.hash(self.seed), class_bit)
    }

    /// Returns the slot index for an already computed hash.
    #[inline]
    pub fn bucket_of_hash(&self, hash: u64, class_bit: usize) -> usize {
        debug_assert!(class_bit <= 1, "class bit must be 0 or 1");
        let masked = (hash & ((1u64 << self.lg_num_buckets) - 1)) as usize;
        match self.layout {
            ClassLayout::Shared => {
                debug_assert_eq!(class_bit, 0, "shared layout has no class slots");
                masked
            }
            ClassLayout::PerClass => masked * 2 + class_bit,
        }
    }

    /// Returns the value at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> V {
        self.slots[index]
    }

    /// Adds one to the value at `index`.
    #[inline]
    pub fn increment(&mut self, index: usize) {
        self.add(index, V::ONE);
    }

    /// Adds `delta` to the value at `index`.
    #[inline]
    pub fn add(&mut self, index: usize, delta: V) {
        self.slots[index] = self.slots[index].add(delta);
    }

    /// Overwrites the value at `index`.
    #[inline]
    pub fn set(&mut self, index: usize, value: V) {
        self.slots[index] = value;
    }

    /// Returns all slots.
    pub fn values(&self) -> &[V] {
        &self.slots
    }
}

impl<V: CountValue> FeatureHashTable<V> {
    /// Creates a per-class count table with every slot set to the prior of one.
    pub fn counts(lg_num_buckets: u8, seed: u64) -> Self {
        Self::new(lg_num_buckets, ClassLayout::PerClass, seed, V::ONE)
    }
}

impl<V: WeightValue> FeatureHashTable<V> {
    /// Creates a shared weight table with every slot set to zero.
    pub fn weights(lg_num_buckets: u8, seed: u64) -> Self {
        Self::new(lg_num_buckets, ClassLayout::Shared, seed, V::ZERO)
    }
}

impl<V: CountValue> CountStore for FeatureHashTable<V> {
    type Count = V;

    fn num_rows(&self) -> usize {
        1
    }

    fn count(&self, ngram: &NGram<'_>, class_bit: usize) -> V {
        self.get(self.bucket(ngram, class_bit))
    }

    fn class_counts(&self, ngram: &NGram<'_>) -> (V, V) {
        let hash = ngram.hash(self.seed);
        (
            self.get(self.bucket_of_hash(hash, 0)),
            self.get(self.bucket_of_hash(hash, 1)),
        )
    }

    fn increment_count(&mut self, ngram: &NGram<'_>, class_bit: usize) {
        let index = self.bucket(ngram, class_bit);
        self.increment(index);
    }
}

impl<V: WeightValue> WeightStore for FeatureHashTable<V> {
    fn num_rows(&self) -> usize {
        1
    }

    fn row_bucket(&self, row: usize, ngram: &NGram<'_>) -> usize {
        debug_assert_eq!(row, 0, "a feature hash table has a single row");
        self.bucket(ngram, 0)
    }

    fn row_weight(&self, row: usize, index: usize) -> f64 {
        debug_assert_eq!(row, 0, "a feature hash table has a single row");
        self.get(index).to_f64()
    }

    fn add_to_row(&mut self, row: usize, index: usize, delta: f64) {
        debug_assert_eq!(row, 0, "a feature hash table has a single row");
        self.add(index, V::from_f64(delta));
    }

    fn weight(&self, ngram: &NGram<'_>) -> f64 {
        self.get(self.bucket(ngram, 0)).to_f64()
    }
}
