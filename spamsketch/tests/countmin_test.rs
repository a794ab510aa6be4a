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

mod common;

use common::doc;
use common::synthetic_corpus;
use common::true_counts;
use googletest::prelude::*;
use spamsketch::CountStore;
use spamsketch::WeightStore;
use spamsketch::countmin::CountMinSketch;
use spamsketch::table::ClassLayout;

#[test]
fn test_init_defaults() {
    let sketch = CountMinSketch::<u32>::counts(3, 5, 9001);
    assert_eq!(sketch.num_rows(), 3);
    assert_eq!(sketch.num_buckets(), 32);
    assert_eq!(sketch.lg_num_buckets(), 5);
    assert_eq!(sketch.seed(), 9001);
    for row in sketch.rows() {
        assert_eq!(row.layout(), ClassLayout::PerClass);
        assert_eq!(row.len(), 64);
        assert!(row.values().iter().all(|&value| value == 1));
    }

    let missing = doc(false, "missing");
    let ngram = missing.ngrams(1).next().unwrap();
    assert_eq!(sketch.estimate_count(&ngram, 0), 1);
    assert_eq!(sketch.estimate_count(&ngram, 1), 1);
}

#[test]
fn test_parameter_suggestions() {
    assert_eq!(CountMinSketch::<u32>::suggest_lg_num_buckets(0.2), 4);
    assert_eq!(CountMinSketch::<u32>::suggest_lg_num_buckets(0.1), 5);
    assert_eq!(CountMinSketch::<u32>::suggest_lg_num_buckets(0.01), 9);

    assert_eq!(CountMinSketch::<u32>::suggest_num_rows(0.682689492), 2);
    assert_eq!(CountMinSketch::<u32>::suggest_num_rows(0.954499736), 4);
    assert_eq!(CountMinSketch::<u32>::suggest_num_rows(0.997300204), 6);

    let lg_buckets = CountMinSketch::<u32>::suggest_lg_num_buckets(0.1);
    let sketch = CountMinSketch::<u32>::counts(3, lg_buckets, 9001);
    assert!(sketch.relative_error() <= 0.1);
}

#[test]
fn test_row_seeds_are_distinct() {
    let sketch = CountMinSketch::<u32>::counts(8, 4, 123);
    let mut seeds: Vec<u64> = sketch.rows().iter().map(|row| row.seed()).collect();
    seeds.sort_unstable();
    seeds.dedup();
    assert_eq!(seeds.len(), 8);
}

#[test]
fn test_increment_single_key() {
    let mut sketch = CountMinSketch::<u32>::counts(4, 16, 7);
    let key = doc(true, "key");
    let ngram = key.ngrams(1).next().unwrap();
    for _ in 0..300 {
        sketch.increment(&ngram, 1);
    }
    // the prior of one is part of every slot
    assert_eq!(sketch.estimate_count(&ngram, 1), 301);
    assert_eq!(sketch.estimate_count(&ngram, 0), 1);
}

#[test]
fn test_estimates_never_undercount() {
    let documents = synthetic_corpus(500, 3);
    for n in 1..=3 {
        // 16 buckets per row forces plenty of collisions
        let mut sketch = CountMinSketch::<u32>::counts(3, 4, 42);
        for document in &documents {
            for ngram in document.ngrams(n) {
                sketch.increment(&ngram, document.class_bit());
            }
        }

        let counts = true_counts(&documents, n);
        for document in &documents {
            for ngram in document.ngrams(n) {
                for class_bit in 0..=1 {
                    let truth = counts
                        .get(&(ngram.to_string(), class_bit))
                        .copied()
                        .unwrap_or(0);
                    let estimate = sketch.estimate_count(&ngram, class_bit) as u64;
                    assert!(
                        estimate > truth,
                        "{ngram} class {class_bit}: estimate {estimate}, truth {truth}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_more_rows_never_hurt_the_estimate() {
    let documents = synthetic_corpus(300, 11);
    let mut narrow = CountMinSketch::<u32>::counts(1, 3, 5);
    let mut wide = CountMinSketch::<u32>::counts(6, 3, 5);
    for document in &documents {
        for ngram in document.ngrams(1) {
            narrow.increment(&ngram, document.class_bit());
            wide.increment(&ngram, document.class_bit());
        }
    }
    // the first row of `wide` uses the same seed as the only row of `narrow`
    assert_eq!(narrow.rows()[0].seed(), wide.rows()[0].seed());
    for document in &documents {
        for ngram in document.ngrams(1) {
            assert_that!(
                wide.estimate_count(&ngram, document.class_bit()),
                le(narrow.estimate_count(&ngram, document.class_bit()))
            );
        }
    }
}

#[test]
fn test_weights_use_the_row_mean() {
    let mut sketch = CountMinSketch::<f64>::weights(3, 8, 1);
    let words = doc(true, "alpha beta");
    let alpha = words.ngrams(1).next().unwrap();
    assert_eq!(sketch.estimate_weight(&alpha), 0.0);

    sketch.add_weight(&alpha, -1.5);
    assert_eq!(sketch.estimate_weight(&alpha), -1.5);

    // push a single row away from the others
    let index = sketch.row_bucket(0, &alpha);
    sketch.add_to_row(0, index, 3.0);
    assert_that!(sketch.estimate_weight(&alpha), near(-0.5, 1e-12));
    assert_that!(sketch.weight(&alpha), near(-0.5, 1e-12));
}

#[test]
fn test_count_store_matches_inherent_api() {
    let mut sketch = CountMinSketch::<u32>::counts(2, 6, 99);
    let words = doc(false, "hello world hello");
    for ngram in words.ngrams(1) {
        sketch.increment_count(&ngram, 0);
    }
    let hello = words.ngrams(1).next().unwrap();
    assert_eq!(sketch.count(&hello, 0), sketch.estimate_count(&hello, 0));
    assert_that!(sketch.count(&hello, 0), ge(3));
    assert_eq!(CountStore::num_rows(&sketch), 2);
}

#[test]
#[should_panic(expected = "num_rows must be at least 1")]
fn test_invalid_rows() {
    CountMinSketch::<u32>::counts(0, 5, 1);
}

#[test]
#[should_panic(expected = "lg_num_buckets must be in [1, 30], got 0")]
fn test_invalid_buckets() {
    CountMinSketch::<u32>::counts(1, 0, 1);
}

#[test]
fn test_class_counts_match_single_class_estimates() {
    let documents = synthetic_corpus(200, 17);
    // 8 buckets per row, so rows disagree and the per-class minimum matters
    let mut sketch = CountMinSketch::<u32>::counts(4, 3, 8);
    for document in &documents {
        for ngram in document.ngrams(1) {
            sketch.increment(&ngram, document.class_bit());
        }
    }
    for document in &documents {
        for ngram in document.ngrams(1) {
            assert_eq!(
                sketch.class_counts(&ngram),
                (sketch.estimate_count(&ngram, 0), sketch.estimate_count(&ngram, 1)),
                "{ngram}"
            );
        }
    }
}
