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

//! Seeded hashing used to map n-grams onto buckets.
//!
//! All hashing goes through MurmurHash3 (x64, 128-bit variant), keeping the lower 64 bits.
//! The function is fixed and seeded explicitly, so bucket assignments are stable across runs,
//! processes and platforms. Different seeds behave as independent hash functions, which is what
//! the rows of a Count-Min sketch rely on.

mod murmurhash;

pub use self::murmurhash::MurmurHash3X64128;

/// Default seed for hashing n-grams.
pub const DEFAULT_UPDATE_SEED: u64 = 9001;

/// Hashes `bytes` with the given seed, returning the lower 64 bits of MurmurHash3 x64/128.
#[inline]
pub fn hash_bytes(bytes: &[u8], seed: u64) -> u64 {
    let mut hasher = MurmurHash3X64128::with_seed(seed);
    hasher.write_bytes(bytes);
    hasher.finish128().0
}

/// Hashes a string with the given seed.
///
/// ```
/// # use spamsketch::hash::hash_str;
/// assert_eq!(hash_str("free money", 7), hash_str("free money", 7));
/// assert_ne!(hash_str("free money", 7), hash_str("free money", 8));
/// ```
#[inline]
pub fn hash_str(value: &str, seed: u64) -> u64 {
    hash_bytes(value.as_bytes(), seed)
}
