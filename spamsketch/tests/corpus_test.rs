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

use std::fs;
use std::path::PathBuf;

use spamsketch::Document;
use spamsketch::corpus::DocumentReader;
use spamsketch::corpus::load_documents;
use spamsketch::corpus::read_documents;
use spamsketch::corpus::shuffle;
use spamsketch::error::ErrorKind;

fn write_corpus(name: &str, contents: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("corpus_test");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_read_records() {
    let text = "\
EMAIL> label=1
win a free cruise

EMAIL> label=0
minutes from the   standup
EMAIL> label=1

EMAIL> label=0
";
    // a blank body is an empty document, but the trailing header has no body at all
    let err = read_documents(text.as_bytes()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);

    let text = "EMAIL> label=1\nwin a free cruise\n\nEMAIL> label=0\nminutes from the   standup\n";
    let documents = read_documents(text.as_bytes()).unwrap();
    assert_eq!(
        documents,
        [
            Document::from_text(true, "win a free cruise"),
            Document::from_text(false, "minutes from the standup"),
        ]
    );
}

#[test]
fn test_errors_carry_the_line() {
    let text = "EMAIL> label=1\nhello\nEMAIL> label=7\nbody\n";
    let mut reader = DocumentReader::new(text.as_bytes());
    assert!(reader.next().unwrap().is_ok());
    let err = reader.next().unwrap().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
    assert_eq!(
        err.to_string(),
        "InvalidData, context: { line: 3 } => label must be 0 or 1, got `7`"
    );

    let err = read_documents("EMAIL> label=0\nEMAIL> label=1\nbody\n".as_bytes()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "InvalidData, context: { line: 1 } => missing body after header"
    );

    let err = read_documents("EMAIL> label=0".as_bytes()).unwrap_err();
    assert_eq!(err.message(), "missing body after header");
}

#[test]
fn test_load_skips_missing_files() {
    let spam = write_corpus(
        "spam.txt",
        "EMAIL> label=1\ncheap pills\nEMAIL> label=1\nwinner winner\n",
    );
    let ham = write_corpus("ham.txt", "EMAIL> label=0\nteam lunch\n");
    let missing = spam.with_file_name("does_not_exist.txt");

    let documents = load_documents(&[spam, missing, ham], 12).unwrap();
    assert_eq!(documents.len(), 3);
    assert_eq!(documents.iter().filter(|d| d.is_spam()).count(), 2);
}

#[test]
fn test_load_reports_malformed_files() {
    let broken = write_corpus("broken.txt", "label=1\nno header\n");
    let err = load_documents(&[broken], 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidData);
    assert!(err.to_string().contains("broken.txt"), "{err}");
}

#[test]
fn test_shuffle_is_deterministic() {
    let documents: Vec<Document> = (0..50)
        .map(|i| Document::from_text(i % 3 == 0, &format!("token{i}")))
        .collect();

    let mut a = documents.clone();
    let mut b = documents.clone();
    let mut c = documents.clone();
    shuffle(&mut a, 12);
    shuffle(&mut b, 12);
    shuffle(&mut c, 13);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, documents);

    let mut sorted = a.clone();
    sorted.sort_by(|x, y| x.tokens().cmp(y.tokens()));
    let mut expected = documents;
    expected.sort_by(|x, y| x.tokens().cmp(y.tokens()));
    assert_eq!(sorted, expected);
}
