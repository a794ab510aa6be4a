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

//! Fixed-size hashed tables of counts or weights.
//!
//! A [`FeatureHashTable`] maps every n-gram onto one of `2^lg_num_buckets` slots (or
//! `2^(lg_num_buckets + 1)` slots when each bucket is split per class) using a seeded hash and a
//! bit mask. The table never grows: unrelated n-grams that land on the same slot simply share it.
//!
//! # Usage
//!
//! ```rust
//! # use spamsketch::Document;
//! # use spamsketch::table::FeatureHashTable;
//! let doc = Document::from_text(true, "win money now");
//! let mut table = FeatureHashTable::<u32>::counts(8, 42);
//! for ngram in doc.ngrams(1) {
//!     let bucket = table.bucket(&ngram, doc.class_bit());
//!     table.increment(bucket);
//! }
//! let first = doc.ngrams(1).next().unwrap();
//! assert!(table.get(table.bucket(&first, 1)) >= 2);
//! ```

mod feature_hash;
pub use self::feature_hash::ClassLayout;
pub use self::feature_hash::FeatureHashTable;
pub use self::feature_hash::MAX_LG_NUM_BUCKETS;
pub use self::feature_hash::MIN_LG_NUM_BUCKETS;

mod value;
pub use self::value::CountValue;
pub use self::value::TableValue;
pub use self::value::WeightValue;
