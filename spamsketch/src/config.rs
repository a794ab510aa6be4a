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

//! Construction-time configuration shared by all classifiers.

use std::collections::Bound;
use std::fmt::Display;
use std::ops::RangeBounds;

use crate::error::Error;
use crate::hash::DEFAULT_UPDATE_SEED;
use crate::table::MAX_LG_NUM_BUCKETS;
use crate::table::MIN_LG_NUM_BUCKETS;

/// Default n-gram size.
pub const DEFAULT_NGRAM_SIZE: usize = 1;
/// Default log2 of the number of buckets per table or sketch row.
pub const DEFAULT_LG_NUM_BUCKETS: u8 = 16;
/// Default number of Count-Min rows.
pub const DEFAULT_NUM_HASH_ROWS: usize = 4;
/// Default perceptron learning rate.
pub const DEFAULT_LEARNING_RATE: f64 = 0.01;

/// Validated classifier configuration.
///
/// Built once through [`ClassifierConfig::builder`] and never mutated afterwards.
///
/// ```
/// # use spamsketch::ClassifierConfig;
/// let config = ClassifierConfig::builder()
///     .ngram_size(2)
///     .lg_num_buckets(12)
///     .num_hash_rows(3)
///     .build()
///     .unwrap();
/// assert_eq!(config.ngram_size(), 2);
/// assert!(ClassifierConfig::builder().ngram_size(0).build().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierConfig {
    ngram_size: usize,
    lg_num_buckets: u8,
    num_hash_rows: usize,
    learning_rate: f64,
    threshold: Option<f64>,
    seed: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            ngram_size: DEFAULT_NGRAM_SIZE,
            lg_num_buckets: DEFAULT_LG_NUM_BUCKETS,
            num_hash_rows: DEFAULT_NUM_HASH_ROWS,
            learning_rate: DEFAULT_LEARNING_RATE,
            threshold: None,
            seed: DEFAULT_UPDATE_SEED,
        }
    }
}

impl ClassifierConfig {
    /// Creates a new builder starting from the defaults.
    pub fn builder() -> ClassifierConfigBuilder {
        ClassifierConfigBuilder::default()
    }

    /// Returns the number of consecutive tokens per feature.
    pub fn ngram_size(&self) -> usize {
        self.ngram_size
    }

    /// Returns log2 of the number of buckets per table or sketch row.
    pub fn lg_num_buckets(&self) -> u8 {
        self.lg_num_buckets
    }

    /// Returns the number of Count-Min rows; ignored by plain-table variants.
    pub fn num_hash_rows(&self) -> usize {
        self.num_hash_rows
    }

    /// Returns the perceptron learning rate; ignored by Naive Bayes.
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Returns the classification threshold override, if any.
    ///
    /// When unset each model uses its own neutral point.
    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }

    /// Returns the hash seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

/// Builder for [`ClassifierConfig`].
#[derive(Debug, Clone)]
pub struct ClassifierConfigBuilder {
    config: ClassifierConfig,
}

impl Default for ClassifierConfigBuilder {
    fn default() -> Self {
        Self {
            config: ClassifierConfig::default(),
        }
    }
}

impl ClassifierConfigBuilder {
    /// Set the n-gram size. Must be at least 1.
    pub fn ngram_size(mut self, ngram_size: usize) -> Self {
        self.config.ngram_size = ngram_size;
        self
    }

    /// Set log2 of the number of buckets.
    ///
    /// Must be in `[MIN_LG_NUM_BUCKETS, MAX_LG_NUM_BUCKETS]`. Memory per table row is
    /// `2^lg_num_buckets` slots (twice that for per-class counts).
    pub fn lg_num_buckets(mut self, lg_num_buckets: u8) -> Self {
        self.config.lg_num_buckets = lg_num_buckets;
        self
    }

    /// Set the number of Count-Min rows. Must be at least 1.
    pub fn num_hash_rows(mut self, num_hash_rows: usize) -> Self {
        self.config.num_hash_rows = num_hash_rows;
        self
    }

    /// Set the perceptron learning rate. Must be finite and greater than 0.
    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.config.learning_rate = learning_rate;
        self
    }

    /// Set the classification threshold. Must be finite.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.config.threshold = Some(threshold);
        self
    }

    /// Set the hash seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Validates and returns the configuration.
    pub fn build(self) -> Result<ClassifierConfig, Error> {
        let config = self.config;
        ensure_in_range("ngram_size", 1.., config.ngram_size)?;
        ensure_in_range(
            "lg_num_buckets",
            MIN_LG_NUM_BUCKETS..=MAX_LG_NUM_BUCKETS,
            config.lg_num_buckets,
        )?;
        ensure_in_range("num_hash_rows", 1.., config.num_hash_rows)?;
        if !(config.learning_rate.is_finite() && config.learning_rate > 0.0) {
            return Err(Error::invalid_argument(format!(
                "learning_rate must be finite and greater than 0, got {}",
                config.learning_rate
            ))
            .with_context("option", "learning_rate"));
        }
        if let Some(threshold) = config.threshold {
            if !threshold.is_finite() {
                return Err(Error::invalid_argument(format!(
                    "threshold must be finite, got {threshold}"
                ))
                .with_context("option", "threshold"));
            }
        }
        Ok(config)
    }
}

pub(crate) fn ensure_in_range<T>(
    name: &'static str,
    expected: impl RangeBounds<T>,
    actual: T,
) -> Result<(), Error>
where
    T: PartialOrd + Display,
{
    if expected.contains(&actual) {
        return Ok(());
    }
    let start = expected.start_bound();
    let end = expected.end_bound();
    Err(Error::invalid_argument(format!(
        "{name} must be {}, got {actual}",
        match (start, end) {
            (Bound::Included(a), Bound::Included(b)) => format!("in [{a}, {b}]"),
            (Bound::Included(a), Bound::Excluded(b)) => format!("in [{a}, {b})"),
            (Bound::Excluded(a), Bound::Included(b)) => format!("in ({a}, {b}]"),
            (Bound::Excluded(a), Bound::Excluded(b)) => format!("in ({a}, {b})"),
            (Bound::Unbounded, Bound::Included(b)) => format!("at most {b}"),
            (Bound::Unbounded, Bound::Excluded(b)) => format!("less than {b}"),
            (Bound::Included(a), Bound::Unbounded) => format!("at least {a}"),
            (Bound::Excluded(a), Bound::Unbounded) => format!("greater than {a}"),
            (Bound::Unbounded, Bound::Unbounded) => unreachable!("unbounded range"),
        }
    ))
    .with_context("option", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_range_messages() {
        let err = ensure_in_range("window_size", 1.., 0usize).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(err.message(), "window_size must be at least 1, got 0");

        let err = ensure_in_range("lg_num_buckets", 1u8..=30, 31).unwrap_err();
        assert_eq!(err.message(), "lg_num_buckets must be in [1, 30], got 31");
    }
}
