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

//! Count-Min sketch over hashed n-gram features.
//!
//! The sketch keeps `num_rows` independent [`FeatureHashTable`](crate::table::FeatureHashTable)
//! rows, each hashed with its own seed. Every update touches one slot per row.
//!
//! Two aggregation rules are used, depending on what the slots hold:
//!
//! * counts are combined with the **minimum** across rows. Collisions can only add to a slot, so
//!   the minimum never falls below the true count (plus the prior of one every slot starts with).
//! * weights are combined with the **mean** across rows. Weights can be negative, so the minimum
//!   has no meaning for them, while the mean keeps the estimator linear.
//!
//! # Usage
//!
//! ```rust
//! # use spamsketch::Document;
//! # use spamsketch::countmin::CountMinSketch;
//! let doc = Document::from_text(true, "cheap pills cheap");
//! let mut sketch = CountMinSketch::<u32>::counts(4, 10, 7);
//! for ngram in doc.ngrams(1) {
//!     sketch.increment(&ngram, 1);
//! }
//! let cheap = doc.ngrams(1).next().unwrap();
//! assert!(sketch.estimate_count(&cheap, 1) >= 3);
//! ```
//!
//! # Configuration Helpers
//!
//! ```rust
//! # use spamsketch::countmin::CountMinSketch;
//! let lg_buckets = CountMinSketch::<u32>::suggest_lg_num_buckets(0.01);
//! let rows = CountMinSketch::<u32>::suggest_num_rows(0.99);
//! let _sketch = CountMinSketch::<u32>::counts(rows, lg_buckets, 9001);
//! ```

mod sketch;
pub use self::sketch::CountMinSketch;
