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

#![allow(dead_code)]

use std::collections::HashMap;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use spamsketch::Classifier;
use spamsketch::Document;

const SPAM_WORDS: [&str; 10] = [
    "free", "money", "winner", "cheap", "pills", "offer", "click", "now", "prize", "cash",
];
const HAM_WORDS: [&str; 10] = [
    "meeting", "project", "report", "schedule", "lunch", "review", "team", "notes", "budget",
    "draft",
];
const SHARED_WORDS: [&str; 5] = ["the", "a", "to", "and", "you"];

pub fn doc(is_spam: bool, text: &str) -> Document {
    Document::from_text(is_spam, text)
}

/// Generates a reproducible two-class corpus with about 40% spam.
pub fn synthetic_corpus(num_documents: usize, seed: u64) -> Vec<Document> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..num_documents)
        .map(|_| {
            let is_spam = rng.random_bool(0.4);
            let vocabulary: &[&str] = if is_spam { &SPAM_WORDS } else { &HAM_WORDS };
            let len = rng.random_range(8..16);
            let tokens = (0..len)
                .map(|_| {
                    if rng.random_bool(0.7) {
                        vocabulary[rng.random_range(0..vocabulary.len())].to_string()
                    } else {
                        SHARED_WORDS[rng.random_range(0..SHARED_WORDS.len())].to_string()
                    }
                })
                .collect();
            Document::new(is_spam, tokens)
        })
        .collect()
}

/// Exact occurrence counts keyed by (n-gram text, class bit).
pub fn true_counts(documents: &[Document], n: usize) -> HashMap<(String, usize), u64> {
    let mut counts = HashMap::new();
    for document in documents {
        for ngram in document.ngrams(n) {
            *counts
                .entry((ngram.to_string(), document.class_bit()))
                .or_insert(0) += 1;
        }
    }
    counts
}

/// Predicts the majority class among the documents trained on so far; ties predict ham.
#[derive(Debug, Default)]
pub struct MajorityClassifier {
    spam: u64,
    ham: u64,
}

impl Classifier for MajorityClassifier {
    fn update(&mut self, document: &Document) {
        if document.is_spam() {
            self.spam += 1;
        } else {
            self.ham += 1;
        }
    }

    fn predict(&self, _document: &Document) -> f64 {
        match self.spam.cmp(&self.ham) {
            std::cmp::Ordering::Greater => 1.0,
            std::cmp::Ordering::Less => 0.0,
            std::cmp::Ordering::Equal => 0.5,
        }
    }

    fn threshold(&self) -> f64 {
        0.5
    }
}

/// Always returns the same score.
#[derive(Debug)]
pub struct ConstantClassifier(pub f64);

impl Classifier for ConstantClassifier {
    fn update(&mut self, _document: &Document) {}

    fn predict(&self, _document: &Document) -> f64 {
        self.0
    }

    fn threshold(&self) -> f64 {
        0.5
    }
}
