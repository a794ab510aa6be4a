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

//! # spamsketch
//!
//! Online spam classifiers that learn from a single pass over a stream of emails while using a
//! fixed amount of memory, regardless of how many distinct words or phrases they see.
//!
//! Features are the n-grams of each document (runs of `n` consecutive tokens). Instead of a
//! dictionary, every n-gram is hashed onto a fixed number of buckets, either in a single
//! [`FeatureHashTable`](table::FeatureHashTable) or in the rows of a
//! [`CountMinSketch`](countmin::CountMinSketch), which trades more memory and hashing for less
//! collision bias.
//!
//! Two learners are built on top of those stores:
//!
//! * [`naive_bayes`]: class-conditional n-gram frequencies scored by log-odds.
//! * [`perceptron`]: hashed weights trained by online gradient descent through `tanh`.
//!
//! The [`eval`] module measures them with the test-then-train protocol: each window of
//! documents is scored before the model is trained on it.
//!
//! ```
//! use spamsketch::eval::{Accuracy, StreamingEvaluator};
//! use spamsketch::{ClassifierConfig, ClassifierKind, Document};
//!
//! let mut documents = Vec::new();
//! for _ in 0..50 {
//!     documents.push(Document::from_text(true, "cheap meds no prescription"));
//!     documents.push(Document::from_text(false, "agenda for the weekly sync"));
//! }
//!
//! let config = ClassifierConfig::builder().ngram_size(2).build().unwrap();
//! let mut model = ClassifierKind::PerceptronCountMin.build(&config);
//! let mut accuracy = Accuracy::default();
//! let curve = StreamingEvaluator::new(10)
//!     .unwrap()
//!     .run(&documents, model.as_mut(), &mut accuracy);
//! assert_eq!(curve.len(), 10);
//! assert!(curve.final_score().unwrap() > 0.8);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod corpus;
pub mod countmin;
pub mod error;
pub mod eval;
pub mod hash;
pub mod naive_bayes;
pub mod perceptron;
pub mod table;

mod classifier;
mod config;
mod document;
mod store;

pub use self::classifier::Classifier;
pub use self::classifier::ClassifierKind;
pub use self::config::ClassifierConfig;
pub use self::config::ClassifierConfigBuilder;
pub use self::config::DEFAULT_LEARNING_RATE;
pub use self::config::DEFAULT_LG_NUM_BUCKETS;
pub use self::config::DEFAULT_NGRAM_SIZE;
pub use self::config::DEFAULT_NUM_HASH_ROWS;
pub use self::document::Document;
pub use self::document::NGRAM_SEPARATOR;
pub use self::document::NGram;
pub use self::document::NGrams;
pub use self::store::CountStore;
pub use self::store::WeightStore;
