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

use crate::classifier::Classifier;
use crate::config::ensure_in_range;
use crate::document::Document;
use crate::error::Error;
use crate::eval::Metric;

/// One point of a learning curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    window: usize,
    num_documents: usize,
    score: f64,
}

impl Sample {
    /// Returns the zero-based window index.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Returns the number of documents in this window.
    pub fn num_documents(&self) -> usize {
        self.num_documents
    }

    /// Returns the metric score recorded after evaluating this window.
    pub fn score(&self) -> f64 {
        self.score
    }
}

/// The ordered samples recorded by a [`StreamingEvaluator`] run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LearningCurve {
    samples: Vec<Sample>,
}

impl LearningCurve {
    /// Returns the samples in window order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Returns the scores in window order.
    pub fn scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(Sample::score)
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if no window was processed.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the last recorded score.
    pub fn final_score(&self) -> Option<f64> {
        self.samples.last().map(Sample::score)
    }
}

/// Drives the test-then-train loop described in [`crate::eval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamingEvaluator {
    window_size: usize,
}

impl StreamingEvaluator {
    /// Creates an evaluator with the given window size.
    ///
    /// Returns an error if `window_size` is zero.
    pub fn new(window_size: usize) -> Result<Self, Error> {
        ensure_in_range("window_size", 1.., window_size)?;
        Ok(Self { window_size })
    }

    /// Returns the window size.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Runs the protocol over an in-memory document sequence.
    ///
    /// Produces `ceil(documents.len() / window_size)` samples.
    pub fn run(
        &self,
        documents: &[Document],
        classifier: &mut dyn Classifier,
        metric: &mut dyn Metric,
    ) -> LearningCurve {
        let mut curve = LearningCurve::default();
        for (index, window) in documents.chunks(self.window_size).enumerate() {
            let sample = process_window(index, window, classifier, metric);
            curve.samples.push(sample);
        }
        tracing::info!(
            windows = curve.len(),
            documents = documents.len(),
            final_score = curve.final_score().unwrap_or(f64::NAN),
            "stream evaluation finished"
        );
        curve
    }

    /// Runs the protocol over a possibly unbounded stream.
    ///
    /// Only one window of documents is buffered at a time. Each sample is handed to `sink` as
    /// soon as it is recorded. Returns the number of windows processed.
    pub fn run_stream<I, F>(
        &self,
        documents: I,
        classifier: &mut dyn Classifier,
        metric: &mut dyn Metric,
        mut sink: F,
    ) -> usize
    where
        I: IntoIterator<Item = Document>,
        F: FnMut(Sample),
    {
        let mut documents = documents.into_iter();
        let mut window = Vec::with_capacity(self.window_size);
        let mut index = 0;
        loop {
            window.clear();
            window.extend(documents.by_ref().take(self.window_size));
            if window.is_empty() {
                break;
            }
            sink(process_window(index, &window, classifier, metric));
            index += 1;
        }
        index
    }
}

fn process_window(
    index: usize,
    window: &[Document],
    classifier: &mut dyn Classifier,
    metric: &mut dyn Metric,
) -> Sample {
    metric.evaluate_all(&*classifier, window);
    let sample = Sample {
        window: index,
        num_documents: window.len(),
        score: metric.score(),
    };
    tracing::debug!(
        window = sample.window,
        documents = sample.num_documents,
        score = sample.score,
        "window evaluated"
    );

    for document in window {
        classifier.update(document);
    }
    sample
}
