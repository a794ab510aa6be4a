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

//! Labeled documents and their n-gram views.

use std::fmt;
use std::slice::Windows;

use crate::hash::MurmurHash3X64128;

/// Separator placed between tokens of an n-gram.
pub const NGRAM_SEPARATOR: u8 = b' ';

/// An immutable labeled document: a spam/ham label and its ordered tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    is_spam: bool,
    tokens: Vec<String>,
}

impl Document {
    /// Creates a document from already tokenized text.
    pub fn new(is_spam: bool, tokens: Vec<String>) -> Self {
        Self { is_spam, tokens }
    }

    /// Creates a document by splitting `text` on whitespace.
    ///
    /// ```
    /// # use spamsketch::Document;
    /// let doc = Document::from_text(true, "free  money\tnow");
    /// assert_eq!(doc.tokens(), ["free", "money", "now"]);
    /// ```
    pub fn from_text(is_spam: bool, text: &str) -> Self {
        Self::new(is_spam, text.split_whitespace().map(str::to_owned).collect())
    }

    /// Returns true if the document is labeled spam.
    pub fn is_spam(&self) -> bool {
        self.is_spam
    }

    /// Returns the label as a class bit: 1 for spam, 0 for ham.
    pub fn class_bit(&self) -> usize {
        self.is_spam as usize
    }

    /// Returns the tokens in order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Returns the number of n-grams of size `n` in this document.
    pub fn num_ngrams(&self, n: usize) -> usize {
        assert!(n >= 1, "ngram size must be at least 1");
        (self.tokens.len() + 1).saturating_sub(n)
    }

    /// Returns a lazy iterator over the n-grams of size `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn ngrams(&self, n: usize) -> NGrams<'_> {
        NGrams::new(&self.tokens, n)
    }
}

/// A view over `n` consecutive tokens of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NGram<'a> {
    tokens: &'a [String],
}

impl<'a> NGram<'a> {
    /// Returns the tokens covered by this n-gram.
    pub fn tokens(&self) -> &'a [String] {
        self.tokens
    }

    /// Hashes the n-gram as if its tokens were joined by [`NGRAM_SEPARATOR`].
    ///
    /// The joined string is never materialized.
    pub fn hash(&self, seed: u64) -> u64 {
        let mut hasher = MurmurHash3X64128::with_seed(seed);
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                hasher.write_bytes(&[NGRAM_SEPARATOR]);
            }
            hasher.write_bytes(token.as_bytes());
        }
        hasher.finish128().0
    }
}

impl fmt::Display for NGram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", NGRAM_SEPARATOR as char)?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

/// Iterator over the n-grams of a token sequence, one per start offset.
///
/// The iterator is `Clone`, so a pass can be replayed from any position.
#[derive(Debug, Clone)]
pub struct NGrams<'a> {
    windows: Windows<'a, String>,
}

impl<'a> NGrams<'a> {
    /// Creates an iterator over n-grams of size `n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn new(tokens: &'a [String], n: usize) -> Self {
        assert!(n >= 1, "ngram size must be at least 1");
        Self {
            windows: tokens.windows(n),
        }
    }
}

impl<'a> Iterator for NGrams<'a> {
    type Item = NGram<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.windows.next().map(|tokens| NGram { tokens })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.windows.size_hint()
    }
}

impl ExactSizeIterator for NGrams<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::hash_str;

    #[test]
    fn test_hash_matches_joined_string() {
        let doc = Document::from_text(false, "pass multipl mix argument");
        for n in 1..=4 {
            for ngram in doc.ngrams(n) {
                assert_eq!(ngram.hash(17), hash_str(&ngram.to_string(), 17));
            }
        }
    }
}
