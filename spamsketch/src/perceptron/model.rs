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

use crate::classifier::Classifier;
use crate::config::ClassifierConfig;
use crate::countmin::CountMinSketch;
use crate::document::Document;
use crate::store::WeightStore;
use crate::table::FeatureHashTable;

/// Default decision threshold: the `tanh` midpoint.
pub const DEFAULT_THRESHOLD: f64 = 0.0;

// tanh(15) is still strictly below 1.0 in f64.
const MAX_MARGIN: f64 = 15.0;

/// Bound on the magnitude of any stored weight.
pub const MAX_WEIGHT: f64 = 1e6;

/// Perceptron classifier over a hashed weight store.
#[derive(Debug, Clone)]
pub struct Perceptron<S> {
    ngram_size: usize,
    learning_rate: f64,
    threshold: f64,
    num_updates: u64,
    store: S,
}

/// Perceptron over a single feature-hashing weight table.
pub type PerceptronFeatureHashing = Perceptron<FeatureHashTable<f64>>;

/// Perceptron over a Count-Min sketch of weights.
pub type PerceptronCountMin = Perceptron<CountMinSketch<f64>>;

impl Perceptron<FeatureHashTable<f64>> {
    /// Creates an untrained model with all weights at zero.
    pub fn new(config: &ClassifierConfig) -> Self {
        let store = FeatureHashTable::weights(config.lg_num_buckets(), config.seed());
        Self::with_store(store, config)
    }
}

impl Perceptron<CountMinSketch<f64>> {
    /// Creates an untrained model with all weights in all rows at zero.
    pub fn new(config: &ClassifierConfig) -> Self {
        let store = CountMinSketch::weights(
            config.num_hash_rows(),
            config.lg_num_buckets(),
            config.seed(),
        );
        Self::with_store(store, config)
    }
}

impl<S: WeightStore> Perceptron<S> {
    /// Creates an untrained model over `store`.
    pub fn with_store(store: S, config: &ClassifierConfig) -> Self {
        Self {
            ngram_size: config.ngram_size(),
            learning_rate: config.learning_rate(),
            threshold: config.threshold().unwrap_or(DEFAULT_THRESHOLD),
            num_updates: 0,
            store,
        }
    }

    /// Returns the n-gram size.
    pub fn ngram_size(&self) -> usize {
        self.ngram_size
    }

    /// Returns the learning rate.
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Returns the number of documents trained on.
    pub fn num_updates(&self) -> u64 {
        self.num_updates
    }

    /// Returns the underlying weight store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the unsquashed margin: the sum over n-grams of their row-averaged weights.
    pub fn margin(&self, document: &Document) -> f64 {
        document
            .ngrams(self.ngram_size)
            .map(|ngram| self.store.weight(&ngram))
            .sum()
    }
}

impl<S: WeightStore> Classifier for Perceptron<S> {
    fn update(&mut self, document: &Document) {
        let target = if document.is_spam() { 1.0 } else { -1.0 };
        let mut buckets = Vec::with_capacity(document.num_ngrams(self.ngram_size));

        for row in 0..self.store.num_rows() {
            buckets.clear();
            let mut margin = 0.0;
            for ngram in document.ngrams(self.ngram_size) {
                let bucket = self.store.row_bucket(row, &ngram);
                margin += self.store.row_weight(row, bucket);
                buckets.push(bucket);
            }

            let output = squash(margin);
            let gradient = self.learning_rate * (target - output) * (1.0 - output * output);
            if !gradient.is_finite() || gradient == 0.0 {
                continue;
            }

            // equal buckets are adjacent after sorting; each run is one multiplicity
            buckets.sort_unstable();
            for run in buckets.chunk_by(|a, b| a == b) {
                let current = self.store.row_weight(row, run[0]);
                // the step may overflow to infinity; clamping keeps the weight finite
                let next = (current + gradient * run.len() as f64).clamp(-MAX_WEIGHT, MAX_WEIGHT);
                self.store.add_to_row(row, run[0], next - current);
            }
        }
        self.num_updates += 1;
    }

    fn predict(&self, document: &Document) -> f64 {
        squash(self.margin(document))
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }
}

fn squash(margin: f64) -> f64 {
    if margin.is_nan() {
        return 0.0;
    }
    margin.clamp(-MAX_MARGIN, MAX_MARGIN).tanh()
}
