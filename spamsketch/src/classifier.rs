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

//! The classifier interface shared by all model variants.

use std::fmt;

use crate::config::ClassifierConfig;
use crate::document::Document;
use crate::naive_bayes::NaiveBayesCountMin;
use crate::naive_bayes::NaiveBayesFeatureHashing;
use crate::perceptron::PerceptronCountMin;
use crate::perceptron::PerceptronFeatureHashing;

/// An online binary spam classifier.
///
/// `predict` must be a pure read of the model state; only `update` mutates it.
pub trait Classifier {
    /// Trains the model on one labeled document.
    fn update(&mut self, document: &Document);

    /// Returns the soft score of a document. Larger means more likely spam.
    fn predict(&self, document: &Document) -> f64;

    /// Returns the fixed decision threshold.
    fn threshold(&self) -> f64;

    /// Turns a soft score into a hard label: spam if `score > threshold`.
    fn classify(&self, score: f64) -> bool {
        score > self.threshold()
    }

    /// Predicts and classifies a document in one call.
    fn classify_document(&self, document: &Document) -> bool {
        self.classify(self.predict(document))
    }
}

/// The four concrete model variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassifierKind {
    /// Naive Bayes over a single feature-hashing table.
    NaiveBayesFeatureHashing,
    /// Naive Bayes over a Count-Min sketch.
    NaiveBayesCountMin,
    /// Perceptron over a single feature-hashing table.
    PerceptronFeatureHashing,
    /// Perceptron over a Count-Min sketch.
    PerceptronCountMin,
}

impl ClassifierKind {
    /// All variants, in declaration order.
    pub const ALL: [ClassifierKind; 4] = [
        ClassifierKind::NaiveBayesFeatureHashing,
        ClassifierKind::NaiveBayesCountMin,
        ClassifierKind::PerceptronFeatureHashing,
        ClassifierKind::PerceptronCountMin,
    ];

    /// Builds an untrained classifier of this kind.
    pub fn build(self, config: &ClassifierConfig) -> Box<dyn Classifier> {
        match self {
            ClassifierKind::NaiveBayesFeatureHashing => {
                Box::new(NaiveBayesFeatureHashing::new(config))
            }
            ClassifierKind::NaiveBayesCountMin => Box::new(NaiveBayesCountMin::new(config)),
            ClassifierKind::PerceptronFeatureHashing => {
                Box::new(PerceptronFeatureHashing::new(config))
            }
            ClassifierKind::PerceptronCountMin => Box::new(PerceptronCountMin::new(config)),
        }
    }

    /// Returns a short kebab-case name.
    pub fn name(&self) -> &'static str {
        match self {
            ClassifierKind::NaiveBayesFeatureHashing => "naive-bayes-feature-hashing",
            ClassifierKind::NaiveBayesCountMin => "naive-bayes-count-min",
            ClassifierKind::PerceptronFeatureHashing => "perceptron-feature-hashing",
            ClassifierKind::PerceptronCountMin => "perceptron-count-min",
        }
    }
}

impl fmt::Display for ClassifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<C: Classifier + ?Sized> Classifier for Box<C> {
    fn update(&mut self, document: &Document) {
        (**self).update(document)
    }

    fn predict(&self, document: &Document) -> f64 {
        (**self).predict(document)
    }

    fn threshold(&self) -> f64 {
        (**self).threshold()
    }

    fn classify(&self, score: f64) -> bool {
        (**self).classify(score)
    }
}
