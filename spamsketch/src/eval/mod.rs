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

//! Test-then-train evaluation of online classifiers.
//!
//! # Protocol
//!
//! The stream is cut into windows of `window_size` documents. For each window:
//!
//! 1. every document is evaluated by the [`Metric`] against the current model, which is only
//!    reachable through a shared reference at that point;
//! 2. the metric score is recorded as one [`Sample`] of the learning curve;
//! 3. the model is trained on the same documents, in order.
//!
//! Each document is therefore scored before the model has seen it. The last window may be
//! shorter than `window_size`; it is evaluated and trained like any other.
//!
//! # Examples
//!
//! ```
//! # use spamsketch::{ClassifierConfig, ClassifierKind, Document};
//! # use spamsketch::eval::{Accuracy, StreamingEvaluator};
//! let documents = vec![
//!     Document::from_text(true, "win cash now"),
//!     Document::from_text(false, "lunch at noon"),
//!     Document::from_text(true, "win a free cruise"),
//! ];
//! let config = ClassifierConfig::default();
//! let mut model = ClassifierKind::NaiveBayesCountMin.build(&config);
//! let mut metric = Accuracy::default();
//! let curve = StreamingEvaluator::new(2)
//!     .unwrap()
//!     .run(&documents, model.as_mut(), &mut metric);
//! assert_eq!(curve.len(), 2);
//! ```

mod metric;
pub use self::metric::Accuracy;
pub use self::metric::ConfusionMatrix;
pub use self::metric::Metric;
pub use self::metric::MetricKind;
pub use self::metric::Precision;
pub use self::metric::Recall;

mod report;
pub use self::report::ResultHeader;
pub use self::report::write_results;

mod stream;
pub use self::stream::LearningCurve;
pub use self::stream::Sample;
pub use self::stream::StreamingEvaluator;
