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

//! Multinomial Naive Bayes over hashed n-gram counts.
//!
//! # Overview
//!
//! The model keeps, for every n-gram and class, an occurrence count in a hashed store, plus
//! document and n-gram totals per class. A document is scored by summing class log-odds:
//!
//! ```text
//! r = ln(num_spam / num_ham) + sum over n-grams g of ln(P(g | spam) / P(g | ham))
//! P(g | c) = count(g, c) / normalizer(c)
//! ```
//!
//! and squashing `r` with the logistic function, so scores lie in `(0, 1)` and `0.5` is neutral.
//!
//! Every counter and every slot starts at one (Laplace prior), so no ratio ever divides by zero
//! and no logarithm ever sees zero.
//!
//! # Normalization
//!
//! [`Normalization::NGrams`] divides by the number of n-gram occurrences seen per class, which is
//! the textbook estimate and what [`NaiveBayesCountMin`] uses. [`NaiveBayesFeatureHashing`]
//! defaults to [`Normalization::Documents`], dividing by the number of documents per class
//! instead. That variant does not otherwise need n-gram totals, and the document counts act as a
//! surrogate normalizer. Either variant can be built with the other rule through
//! [`NaiveBayes::with_store`].
//!
//! # Examples
//!
//! ```
//! # use spamsketch::{Classifier, ClassifierConfig, Document};
//! # use spamsketch::naive_bayes::NaiveBayesCountMin;
//! let config = ClassifierConfig::builder().lg_num_buckets(10).build().unwrap();
//! let mut model = NaiveBayesCountMin::new(&config);
//! for _ in 0..5 {
//!     model.update(&Document::from_text(true, "cheap pills online"));
//!     model.update(&Document::from_text(false, "meeting notes attached"));
//! }
//! let score = model.predict(&Document::from_text(true, "cheap pills"));
//! assert!(model.classify(score));
//! ```

mod model;

pub use self::model::DEFAULT_THRESHOLD;
pub use self::model::NaiveBayes;
pub use self::model::NaiveBayesCountMin;
pub use self::model::NaiveBayesFeatureHashing;
pub use self::model::Normalization;
