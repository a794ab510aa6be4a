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

use std::fmt::Debug;

mod private {
    // Sealed trait to prevent external implementations of TableValue.
    pub trait Sealed {}
}

/// Value type stored in a hashed table slot.
pub trait TableValue: private::Sealed + Copy + PartialOrd + Debug {
    /// Zero value for weights.
    const ZERO: Self;

    /// One value for unit updates and the additive count prior.
    const ONE: Self;

    /// Performs the + operation. Integer counters saturate instead of wrapping.
    fn add(self, other: Self) -> Self;

    /// Converts into `f64`.
    fn to_f64(self) -> f64;
}

/// Integer counter type, aggregated conservatively with `min`.
pub trait CountValue: TableValue + Ord {}

/// Real-valued weight type, aggregated linearly with the mean.
pub trait WeightValue: TableValue {
    /// Converts from `f64`, rounding to the nearest representable value.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_count {
    ($name:ty) => {
        impl private::Sealed for $name {}

        impl TableValue for $name {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline(always)]
            fn add(self, other: Self) -> Self {
                self.saturating_add(other)
            }

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }

        impl CountValue for $name {}
    };
}

impl_count!(u16);
impl_count!(u32);
impl_count!(u64);

macro_rules! impl_weight {
    ($name:ty) => {
        impl private::Sealed for $name {}

        impl TableValue for $name {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline(always)]
            fn add(self, other: Self) -> Self {
                self + other
            }

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }

        impl WeightValue for $name {
            #[inline(always)]
            fn from_f64(value: f64) -> Self {
                value as $name
            }
        }
    };
}

impl_weight!(f32);
impl_weight!(f64);
