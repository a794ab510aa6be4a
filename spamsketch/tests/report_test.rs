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

use common::MajorityClassifier;
use common::doc;
use spamsketch::ClassifierConfig;
use spamsketch::eval::Accuracy;
use spamsketch::eval::ResultHeader;
use spamsketch::eval::StreamingEvaluator;
use spamsketch::eval::write_results;

#[test]
fn test_result_file_layout() {
    let documents = [
        doc(true, "a"),
        doc(false, "b"),
        doc(true, "c"),
        doc(false, "d"),
        doc(true, "e"),
    ];
    let evaluator = StreamingEvaluator::new(2).unwrap();
    let curve = evaluator.run(
        &documents,
        &mut MajorityClassifier::default(),
        &mut Accuracy::default(),
    );
    let header = ResultHeader {
        window_size: evaluator.window_size(),
        ngram_size: 1,
        num_documents: documents.len(),
    };

    let mut out = Vec::new();
    write_results(&mut out, &header, &curve).unwrap();
    insta::assert_snapshot!(String::from_utf8(out).unwrap(), @r"
    window=2
    ngram=1
    #emails=5
    0.5
    0.5
    0.4
    ");
}

#[test]
fn test_config_error_display() {
    let err = ClassifierConfig::builder().ngram_size(0).build().unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"InvalidArgument, context: { option: ngram_size } => ngram_size must be at least 1, got 0"
    );

    let err = ClassifierConfig::builder()
        .learning_rate(f64::NAN)
        .build()
        .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"InvalidArgument, context: { option: learning_rate } => learning_rate must be finite and greater than 0, got NaN"
    );
}
