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

//! Online perceptron over hashed n-gram weights.
//!
//! # Overview
//!
//! The model keeps one real-valued weight per hashed bucket (one set per row for the Count-Min
//! variant). A document's margin is the sum of the weights of its n-grams, averaged across rows,
//! and its score is `tanh(margin)`, which lies in `(-1, 1)` with `0` as the neutral point.
//!
//! Training is a stochastic gradient step on the squared error through `tanh`. With `y = +1`
//! for spam and `-1` for ham, and `h` the current output of a row:
//!
//! ```text
//! g = learning_rate * (y - h) * (1 - h^2)
//! w[b] += g * multiplicity(b)   for every bucket b hit by the document
//! ```
//!
//! A spam document the model under-scores (`y - h > 0`) therefore raises the weights of its
//! n-grams. Each Count-Min row computes its own `h` from its own buckets and is updated
//! independently of the others.
//!
//! Margins are clamped before `tanh` so that scores never round to exactly `±1`. A non-finite
//! gradient is dropped, and every stored weight is kept within `±MAX_WEIGHT`, so one oversized
//! step cannot leave an infinite weight behind.
//!
//! # Examples
//!
//! ```
//! # use spamsketch::{Classifier, ClassifierConfig, Document};
//! # use spamsketch::perceptron::PerceptronFeatureHashing;
//! let config = ClassifierConfig::builder().learning_rate(0.1).build().unwrap();
//! let mut model = PerceptronFeatureHashing::new(&config);
//! let spam = Document::from_text(true, "claim your prize");
//! assert_eq!(model.predict(&spam), 0.0);
//! model.update(&spam);
//! assert!(model.predict(&spam) > 0.0);
//! ```

mod model;

pub use self::model::DEFAULT_THRESHOLD;
pub use self::model::MAX_WEIGHT;
pub use self::model::Perceptron;
pub use self::model::PerceptronCountMin;
pub use self::model::PerceptronFeatureHashing;
