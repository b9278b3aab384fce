// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Per-field helpers for the code generated by `value_object!`.

use crate::Timestamp;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::hash::{Hash, Hasher};

/// Feeds a field value into a [Hasher].
///
/// Value objects contain `f64` fields, which do not implement [Hash]. This
/// trait fills that gap while keeping the hash consistent with `PartialEq`.
pub trait FieldHash {
    fn hash_field<H: Hasher>(&self, state: &mut H);
}

macro_rules! hash_via_std {
    ($($t:ty),*) => {
        $(
            impl FieldHash for $t {
                fn hash_field<H: Hasher>(&self, state: &mut H) {
                    self.hash(state);
                }
            }
        )*
    };
}

hash_via_std!(bool, i32, i64, String);

impl FieldHash for f64 {
    fn hash_field<H: Hasher>(&self, state: &mut H) {
        // `0.0 == -0.0`, so both must hash to the same value.
        let normalized = if *self == 0.0 { 0.0_f64 } else { *self };
        state.write_u64(normalized.to_bits());
    }
}

impl FieldHash for Timestamp {
    fn hash_field<H: Hasher>(&self, state: &mut H) {
        self.seconds().hash(state);
        self.nanos().hash(state);
    }
}

impl<T: FieldHash> FieldHash for Option<T> {
    fn hash_field<H: Hasher>(&self, state: &mut H) {
        match self {
            None => state.write_u8(0),
            Some(v) => {
                state.write_u8(1);
                v.hash_field(state);
            }
        }
    }
}

impl<T: FieldHash> FieldHash for Vec<T> {
    fn hash_field<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|v| v.hash_field(state));
    }
}

impl<V: FieldHash> FieldHash for BTreeMap<String, V> {
    fn hash_field<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for (k, v) in self {
            k.hash(state);
            v.hash_field(state);
        }
    }
}

/// Formats a field value inside the text representation of a value object.
pub trait FieldDisplay {
    fn fmt_field(&self, f: &mut Formatter<'_>) -> FmtResult;
}

macro_rules! display_via_std {
    ($($t:ty),*) => {
        $(
            impl FieldDisplay for $t {
                fn fmt_field(&self, f: &mut Formatter<'_>) -> FmtResult {
                    Display::fmt(self, f)
                }
            }
        )*
    };
}

display_via_std!(bool, i32, i64, String, Timestamp);

impl FieldDisplay for f64 {
    fn fmt_field(&self, f: &mut Formatter<'_>) -> FmtResult {
        // `Debug` keeps the fractional part, `1.0` rather than `1`.
        write!(f, "{self:?}")
    }
}

impl<T: FieldDisplay> FieldDisplay for Vec<T> {
    fn fmt_field(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("[")?;
        for (i, v) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            v.fmt_field(f)?;
        }
        f.write_str("]")
    }
}

impl<V: FieldDisplay> FieldDisplay for BTreeMap<String, V> {
    fn fmt_field(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k}=")?;
            v.fmt_field(f)?;
        }
        f.write_str("}")
    }
}

/// Writes the `{Name: value, Name: value}` representation of a value object.
pub struct FieldWriter<'a, 'b> {
    f: &'a mut Formatter<'b>,
    empty: bool,
}

impl<'a, 'b> FieldWriter<'a, 'b> {
    pub fn new(f: &'a mut Formatter<'b>) -> Self {
        Self { f, empty: true }
    }

    pub fn field<T: FieldDisplay + ?Sized>(&mut self, name: &str, value: &T) -> FmtResult {
        let separator = if self.empty { "{" } else { ", " };
        self.empty = false;
        write!(self.f, "{separator}{name}: ")?;
        value.fmt_field(self.f)
    }

    pub fn finish(self) -> FmtResult {
        if self.empty {
            self.f.write_str("{")?;
        }
        self.f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use test_case::test_case;

    struct Shown<'a, T: FieldDisplay>(&'a T);
    impl<T: FieldDisplay> Display for Shown<'_, T> {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            self.0.fmt_field(f)
        }
    }

    fn hash_of<T: FieldHash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash_field(&mut hasher);
        hasher.finish()
    }

    #[test_case(1.0, "1.0")]
    #[test_case(-123.115, "-123.115")]
    #[test_case(0.5, "0.5")]
    fn display_f64(input: f64, want: &str) {
        assert_eq!(Shown(&input).to_string(), want);
    }

    #[test]
    fn display_collections() {
        let list = vec![vec![-123.115, 49.285], vec![1.0, 2.0]];
        assert_eq!(
            Shown(&list).to_string(),
            "[[-123.115, 49.285], [1.0, 2.0]]"
        );
        let empty: Vec<String> = Vec::new();
        assert_eq!(Shown(&empty).to_string(), "[]");

        let map = BTreeMap::from([
            ("b".to_string(), "2".to_string()),
            ("a".to_string(), "1".to_string()),
        ]);
        assert_eq!(Shown(&map).to_string(), "{a=1, b=2}");
    }

    #[test]
    fn hash_signed_zero() {
        assert_eq!(hash_of(&0.0_f64), hash_of(&-0.0_f64));
        assert_ne!(hash_of(&1.0_f64), hash_of(&-1.0_f64));
    }

    #[test]
    fn hash_unset_differs_from_default() {
        assert_ne!(hash_of(&None::<String>), hash_of(&Some(String::new())));
        assert_ne!(hash_of(&None::<Vec<f64>>), hash_of(&Some(Vec::<f64>::new())));
    }

    #[test]
    fn hash_list_boundaries() {
        let a = vec![vec![1_i32], vec![2, 3]];
        let b = vec![vec![1_i32, 2], vec![3]];
        assert_ne!(hash_of(&a), hash_of(&b));
    }
}
