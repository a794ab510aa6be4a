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
use crate::store::CountStore;
use crate::table::FeatureHashTable;
use crate::table::TableValue;

/// Default decision threshold: the logistic midpoint.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

// Beyond this the logistic function rounds to exactly 1.0 in f64.
const MAX_LOG_ODDS: f64 = 30.0;

/// Denominator used for the class-conditional n-gram probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    /// Divide by the number of documents seen per class.
    Documents,
    /// Divide by the number of n-gram occurrences seen per class.
    NGrams,
}

/// Naive Bayes classifier over a hashed count store.
#[derive(Debug, Clone)]
pub struct NaiveBayes<S> {
    ngram_size: usize,
    threshold: f64,
    normalization: Normalization,
    num_spam: u64,
    num_ham: u64,
    num_spam_grams: u64,
    num_ham_grams: u64,
    store: S,
}

/// Naive Bayes over a single per-class feature-hashing table.
pub type NaiveBayesFeatureHashing = NaiveBayes<FeatureHashTable<u32>>;

/// Naive Bayes over a per-class Count-Min sketch.
pub type NaiveBayesCountMin = NaiveBayes<CountMinSketch<u32>>;

impl NaiveBayes<FeatureHashTable<u32>> {
    /// Creates an untrained model normalizing by document counts.
    pub fn new(config: &ClassifierConfig) -> Self {
        let store = FeatureHashTable::counts(config.lg_num_buckets(), config.seed());
        Self::with_store(store, config, Normalization::Documents)
    }
}

impl NaiveBayes<CountMinSketch<u32>> {
    /// Creates an untrained model normalizing by n-gram totals.
    pub fn new(config: &ClassifierConfig) -> Self {
        let store = CountMinSketch::counts(
            config.num_hash_rows(),
            config.lg_num_buckets(),
            config.seed(),
        );
        Self::with_store(store, config, Normalization::NGrams)
    }
}

impl<S: CountStore> NaiveBayes<S> {
    /// Creates an untrained model over `store`.
    ///
    /// The store is expected to be freshly constructed, with every slot at the prior of one.
    pub fn with_store(store: S, config: &ClassifierConfig, normalization: Normalization) -> Self {
        Self {
            ngram_size: config.ngram_size(),
            threshold: config.threshold().unwrap_or(DEFAULT_THRESHOLD),
            normalization,
            num_spam: 1,
            num_ham: 1,
            num_spam_grams: 1,
            num_ham_grams: 1,
            store,
        }
    }

    /// Returns the n-gram size.
    pub fn ngram_size(&self) -> usize {
        self.ngram_size
    }

    /// Returns the normalization rule.
    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    /// Returns the number of spam documents seen, plus the prior of one.
    pub fn num_spam(&self) -> u64 {
        self.num_spam
    }

    /// Returns the number of ham documents seen, plus the prior of one.
    pub fn num_ham(&self) -> u64 {
        self.num_ham
    }

    /// Returns the number of n-gram occurrences seen in spam, plus the prior of one.
    pub fn num_spam_grams(&self) -> u64 {
        self.num_spam_grams
    }

    /// Returns the number of n-gram occurrences seen in ham, plus the prior of one.
    pub fn num_ham_grams(&self) -> u64 {
        self.num_ham_grams
    }

    /// Returns the underlying count store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the clamped spam-versus-ham log-odds of a document.
    pub fn log_odds(&self, document: &Document) -> f64 {
        let (spam_norm, ham_norm) = match self.normalization {
            Normalization::Documents => (self.num_spam as f64, self.num_ham as f64),
            Normalization::NGrams => (self.num_spam_grams as f64, self.num_ham_grams as f64),
        };
        let norm_ratio = ham_norm.ln() - spam_norm.ln();

        let mut log_odds = (self.num_spam as f64).ln() - (self.num_ham as f64).ln();
        for ngram in document.ngrams(self.ngram_size) {
            let (ham, spam) = self.store.class_counts(&ngram);
            log_odds += spam.to_f64().ln() - ham.to_f64().ln() + norm_ratio;
        }
        clamp_log_odds(log_odds)
    }
}

impl<S: CountStore> Classifier for NaiveBayes<S> {
    fn update(&mut self, document: &Document) {
        let class_bit = document.class_bit();
        let mut grams = 0u64;
        for ngram in document.ngrams(self.ngram_size) {
            self.store.increment_count(&ngram, class_bit);
            grams += 1;
        }
        if document.is_spam() {
            self.num_spam = self.num_spam.saturating_add(1);
            self.num_spam_grams = self.num_spam_grams.saturating_add(grams);
        } else {
            self.num_ham = self.num_ham.saturating_add(1);
            self.num_ham_grams = self.num_ham_grams.saturating_add(grams);
        }
    }

    fn predict(&self, document: &Document) -> f64 {
        logistic(self.log_odds(document))
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }
}

fn clamp_log_odds(log_odds: f64) -> f64 {
    if log_odds.is_nan() {
        return 0.0;
    }
    log_odds.clamp(-MAX_LOG_ODDS, MAX_LOG_ODDS)
}

/// `1 / (1 + e^-r)`, which cannot overflow for the clamped range.
fn logistic(log_odds: f64) -> f64 {
    1.0 / (1.0 + (-log_odds).exp())
}
