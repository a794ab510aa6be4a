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

use std::fmt;

use crate::classifier::Classifier;
use crate::document::Document;

/// A pluggable score accumulated over evaluated documents.
///
/// `evaluate` only receives a shared reference to the classifier and so cannot train it.
pub trait Metric {
    /// Scores one document against the classifier's current state.
    fn evaluate(&mut self, classifier: &dyn Classifier, document: &Document);

    /// Returns the score accumulated so far, or `NaN` while it is undefined.
    fn score(&self) -> f64;

    /// Evaluates every document in order.
    fn evaluate_all(&mut self, classifier: &dyn Classifier, documents: &[Document]) {
        for document in documents {
            self.evaluate(classifier, document);
        }
    }
}

/// Fraction of correctly classified documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accuracy {
    n: u64,
    correct: u64,
}

impl Accuracy {
    /// Returns the number of evaluated documents.
    pub fn num_evaluated(&self) -> u64 {
        self.n
    }

    /// Returns the number of correctly classified documents.
    pub fn num_correct(&self) -> u64 {
        self.correct
    }

    /// Returns `correct / n`, or `None` before any document was evaluated.
    pub fn accuracy(&self) -> Option<f64> {
        ratio(self.correct, self.n)
    }

    /// Returns `1 - accuracy`, or `None` before any document was evaluated.
    pub fn error(&self) -> Option<f64> {
        self.accuracy().map(|accuracy| 1.0 - accuracy)
    }
}

impl Metric for Accuracy {
    fn evaluate(&mut self, classifier: &dyn Classifier, document: &Document) {
        let predicted = classifier.classify_document(document);
        self.n += 1;
        self.correct += (predicted == document.is_spam()) as u64;
    }

    fn score(&self) -> f64 {
        self.accuracy().unwrap_or(f64::NAN)
    }
}

/// Fraction of spam predictions that are actually spam.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Precision {
    predicted_positive: u64,
    true_positive: u64,
}

impl Precision {
    /// Returns `true_positive / predicted_positive`, or `None` while nothing was predicted spam.
    pub fn precision(&self) -> Option<f64> {
        ratio(self.true_positive, self.predicted_positive)
    }
}

impl Metric for Precision {
    fn evaluate(&mut self, classifier: &dyn Classifier, document: &Document) {
        if classifier.classify_document(document) {
            self.predicted_positive += 1;
            self.true_positive += document.is_spam() as u64;
        }
    }

    fn score(&self) -> f64 {
        self.precision().unwrap_or(f64::NAN)
    }
}

/// Fraction of actual spam that is predicted spam.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Recall {
    actual_positive: u64,
    true_positive: u64,
}

impl Recall {
    /// Returns `true_positive / actual_positive`, or `None` while no spam was evaluated.
    pub fn recall(&self) -> Option<f64> {
        ratio(self.true_positive, self.actual_positive)
    }
}

impl Metric for Recall {
    fn evaluate(&mut self, classifier: &dyn Classifier, document: &Document) {
        if document.is_spam() {
            self.actual_positive += 1;
            self.true_positive += classifier.classify_document(document) as u64;
        }
    }

    fn score(&self) -> f64 {
        self.recall().unwrap_or(f64::NAN)
    }
}

/// All four outcome counts. As a [`Metric`] it scores the F1 measure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfusionMatrix {
    true_positive: u64,
    false_positive: u64,
    true_negative: u64,
    false_negative: u64,
}

impl ConfusionMatrix {
    /// Spam classified as spam.
    pub fn true_positive(&self) -> u64 {
        self.true_positive
    }

    /// Ham classified as spam.
    pub fn false_positive(&self) -> u64 {
        self.false_positive
    }

    /// Ham classified as ham.
    pub fn true_negative(&self) -> u64 {
        self.true_negative
    }

    /// Spam classified as ham.
    pub fn false_negative(&self) -> u64 {
        self.false_negative
    }

    /// Returns the number of evaluated documents.
    pub fn total(&self) -> u64 {
        self.true_positive + self.false_positive + self.true_negative + self.false_negative
    }

    pub fn accuracy(&self) -> Option<f64> {
        ratio(self.true_positive + self.true_negative, self.total())
    }

    pub fn precision(&self) -> Option<f64> {
        ratio(self.true_positive, self.true_positive + self.false_positive)
    }

    pub fn recall(&self) -> Option<f64> {
        ratio(self.true_positive, self.true_positive + self.false_negative)
    }

    /// Harmonic mean of precision and recall; `None` when either is undefined or both are zero.
    pub fn f1(&self) -> Option<f64> {
        let precision = self.precision()?;
        let recall = self.recall()?;
        if precision + recall == 0.0 {
            return None;
        }
        Some(2.0 * precision * recall / (precision + recall))
    }
}

impl Metric for ConfusionMatrix {
    fn evaluate(&mut self, classifier: &dyn Classifier, document: &Document) {
        let cell = match (document.is_spam(), classifier.classify_document(document)) {
            (true, true) => &mut self.true_positive,
            (false, true) => &mut self.false_positive,
            (false, false) => &mut self.true_negative,
            (true, false) => &mut self.false_negative,
        };
        *cell += 1;
    }

    fn score(&self) -> f64 {
        self.f1().unwrap_or(f64::NAN)
    }
}

/// Selects one of the built-in metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    /// [`Accuracy`].
    Accuracy,
    /// [`Precision`].
    Precision,
    /// [`Recall`].
    Recall,
    /// F1 through [`ConfusionMatrix`].
    F1,
}

impl MetricKind {
    /// Builds a fresh metric of this kind.
    pub fn build(self) -> Box<dyn Metric> {
        match self {
            MetricKind::Accuracy => Box::new(Accuracy::default()),
            MetricKind::Precision => Box::new(Precision::default()),
            MetricKind::Recall => Box::new(Recall::default()),
            MetricKind::F1 => Box::new(ConfusionMatrix::default()),
        }
    }

    /// Returns a short lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::Accuracy => "accuracy",
            MetricKind::Precision => "precision",
            MetricKind::Recall => "recall",
            MetricKind::F1 => "f1",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn ratio(numerator: u64, denominator: u64) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}
