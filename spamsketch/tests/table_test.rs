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
use spamsketch::CountStore;
use spamsketch::WeightStore;
use spamsketch::hash::hash_str;
use spamsketch::table::ClassLayout;
use spamsketch::table::FeatureHashTable;

#[test]
fn test_per_class_buckets_are_adjacent() {
    let table = FeatureHashTable::<u32>::counts(10, 9001);
    assert_eq!(table.len(), 2048);
    for document in synthetic_corpus(50, 1) {
        for ngram in document.ngrams(2) {
            let ham = table.bucket(&ngram, 0);
            let spam = table.bucket(&ngram, 1);
            assert_eq!(ham % 2, 0);
            assert_eq!(spam, ham + 1);
            assert!(spam < table.len());
        }
    }
}

#[test]
fn test_shared_buckets_stay_in_range() {
    let table = FeatureHashTable::<f64>::weights(6, 9001);
    assert_eq!(table.layout(), ClassLayout::Shared);
    assert_eq!(table.len(), 64);
    for document in synthetic_corpus(50, 2) {
        for ngram in document.ngrams(1) {
            assert!(table.bucket(&ngram, 0) < 64);
        }
    }
}

#[test]
fn test_bucket_masks_the_hash() {
    let table = FeatureHashTable::<u32>::counts(12, 77);
    let document = doc(true, "cheap pills");
    let ngram = document.ngrams(2).next().unwrap();
    let expected = (hash_str("cheap pills", 77) & 0xfff) as usize * 2 + 1;
    assert_eq!(table.bucket(&ngram, 1), expected);
    assert_eq!(table.bucket_of_hash(hash_str("cheap pills", 77), 1), expected);
}

#[test]
fn test_buckets_depend_on_the_seed() {
    let document = doc(false, "the quarterly budget review is on friday");
    let a = FeatureHashTable::<f64>::weights(20, 1);
    let b = FeatureHashTable::<f64>::weights(20, 1);
    let c = FeatureHashTable::<f64>::weights(20, 2);

    let buckets = |table: &FeatureHashTable<f64>| -> Vec<usize> {
        document.ngrams(1).map(|ngram| table.bucket(&ngram, 0)).collect()
    };
    assert_eq!(buckets(&a), buckets(&b));
    assert_ne!(buckets(&a), buckets(&c));
}

#[test]
fn test_slot_access() {
    let mut table = FeatureHashTable::<u32>::counts(3, 0);
    assert!(table.values().iter().all(|&value| value == 1));

    table.increment(5);
    table.increment(5);
    table.add(2, 10);
    table.set(0, 7);
    assert_eq!(table.get(5), 3);
    assert_eq!(table.get(2), 11);
    assert_eq!(table.get(0), 7);
    assert_eq!(table.get(1), 1);
    assert_eq!(table.values().iter().sum::<u32>(), 3 + 11 + 7 + 13);
}

#[test]
fn test_counts_saturate() {
    let mut table = FeatureHashTable::<u16>::counts(1, 0);
    table.set(0, u16::MAX - 1);
    table.increment(0);
    table.increment(0);
    assert_eq!(table.get(0), u16::MAX);
}

#[test]
fn test_tiny_table_collides() {
    // two buckets per class: the n-grams of a document pile up on them
    let mut table = FeatureHashTable::<u32>::counts(1, 9001);
    let document = synthetic_corpus(1, 5).remove(0);
    let class_bit = document.class_bit();
    for ngram in document.ngrams(1) {
        table.increment_count(&ngram, class_bit);
    }
    let total: u32 = table
        .values()
        .iter()
        .skip(class_bit)
        .step_by(2)
        .map(|&value| value - 1)
        .sum();
    assert_eq!(total as usize, document.num_ngrams(1));
    for ngram in document.ngrams(1) {
        assert!(table.count(&ngram, class_bit) >= 2);
        assert_eq!(table.count(&ngram, 1 - class_bit), 1);
        assert_eq!(
            table.class_counts(&ngram),
            (table.count(&ngram, 0), table.count(&ngram, 1))
        );
    }
}

#[test]
fn test_weight_store_has_one_row() {
    let mut table = FeatureHashTable::<f64>::weights(4, 3);
    assert_eq!(WeightStore::num_rows(&table), 1);
    let document = doc(true, "prize");
    let ngram = document.ngrams(1).next().unwrap();
    let index = table.row_bucket(0, &ngram);
    table.add_to_row(0, index, 0.25);
    assert_eq!(table.row_weight(0, index), 0.25);
    assert_eq!(table.weight(&ngram), 0.25);
}

#[test]
#[should_panic(expected = "lg_num_buckets must be in [1, 30], got 31")]
fn test_oversized_table() {
    FeatureHashTable::<u32>::counts(31, 0);
}
