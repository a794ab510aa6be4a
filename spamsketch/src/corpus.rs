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

//! Reading labeled email corpora.
//!
//! A corpus file holds one record per two lines: a header `EMAIL> label=1` (spam) or
//! `EMAIL> label=0` (ham), followed by the body as space-separated tokens. Blank lines between
//! records are ignored.
//!
//! ```
//! # use spamsketch::corpus::read_documents;
//! let text = "EMAIL> label=1\nfree money\n\nEMAIL> label=0\nsee you at lunch\n";
//! let documents = read_documents(text.as_bytes()).unwrap();
//! assert_eq!(documents.len(), 2);
//! assert!(documents[0].is_spam());
//! assert_eq!(documents[1].tokens().len(), 4);
//! ```

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::Lines;
use std::path::Path;
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::document::Document;
use crate::error::Error;

const HEADER_PREFIX: &str = "EMAIL>";
const LABEL_PREFIX: &str = "label=";

/// Iterator over the documents of a corpus, yielding one record at a time.
#[derive(Debug)]
pub struct DocumentReader<R> {
    lines: Lines<R>,
    line_number: usize,
}

impl<R: BufRead> DocumentReader<R> {
    /// Creates a reader over a buffered source.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }

    fn next_line(&mut self) -> Option<Result<String, Error>> {
        let line = self.lines.next()?;
        self.line_number += 1;
        Some(line.map_err(|err| {
            Error::io("failed to read corpus line", err).with_context("line", self.line_number)
        }))
    }
}

impl<R: BufRead> Iterator for DocumentReader<R> {
    type Item = Result<Document, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let header = loop {
            match self.next_line()? {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => break line,
                Err(err) => return Some(Err(err)),
            }
        };
        let header_line = self.line_number;
        let is_spam = match parse_header(&header) {
            Ok(is_spam) => is_spam,
            Err(err) => return Some(Err(err.with_context("line", header_line))),
        };
        match self.next_line() {
            None => Some(Err(Error::invalid_data("missing body after header")
                .with_context("line", header_line))),
            Some(Err(err)) => Some(Err(err)),
            Some(Ok(body)) if body.starts_with(HEADER_PREFIX) => Some(Err(Error::invalid_data(
                "missing body after header",
            )
            .with_context("line", header_line))),
            Some(Ok(body)) => Some(Ok(Document::from_text(is_spam, &body))),
        }
    }
}

/// Parses a record header, returning true for spam.
pub fn parse_header(line: &str) -> Result<bool, Error> {
    let rest = line
        .trim()
        .strip_prefix(HEADER_PREFIX)
        .ok_or_else(|| Error::invalid_data(format!("expected `{HEADER_PREFIX}` header")))?;
    let label = rest
        .split_whitespace()
        .find_map(|field| field.strip_prefix(LABEL_PREFIX))
        .ok_or_else(|| Error::invalid_data("header has no label field"))?;
    match label {
        "1" => Ok(true),
        "0" => Ok(false),
        other => Err(Error::invalid_data(format!(
            "label must be 0 or 1, got `{other}`"
        ))),
    }
}

/// Reads every document from a buffered source.
pub fn read_documents<R: BufRead>(reader: R) -> Result<Vec<Document>, Error> {
    DocumentReader::new(reader).collect()
}

/// Reads the documents of several corpus files and shuffles them with `seed`.
///
/// Files that cannot be opened are skipped with a warning; malformed files are an error.
pub fn load_documents<P: AsRef<Path>>(paths: &[P], seed: u64) -> Result<Vec<Document>, Error> {
    let mut documents = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to open corpus, skipping");
                continue;
            }
        };
        let begin = Instant::now();
        let before = documents.len();
        for document in DocumentReader::new(BufReader::new(file)) {
            documents.push(document.map_err(|err| err.with_context("path", path.display()))?);
        }
        tracing::info!(
            path = %path.display(),
            documents = documents.len() - before,
            elapsed_ms = begin.elapsed().as_millis() as u64,
            "read corpus"
        );
    }
    shuffle(&mut documents, seed);
    Ok(documents)
}

/// Shuffles documents deterministically for the given seed.
pub fn shuffle(documents: &mut [Document], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    documents.shuffle(&mut rng);
}
