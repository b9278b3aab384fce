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

use regex::Regex;
use std::fmt::Display;

/// Implemented by requests (and their nested messages) with field
/// constraints.
///
/// # Example
/// ```
/// # use geosdk_gax::validation::{Validate, Validator};
/// struct Rename {
///     name: Option<String>,
/// }
/// impl Validate for Rename {
///     fn validate_fields(&self, v: &mut Validator) {
///         v.required("Name", self.name.as_ref())
///             .length("Name", self.name.as_deref(), 1, 100);
///     }
/// }
/// let err = Rename { name: None }.validate().unwrap_err();
/// assert_eq!(err.violations()[0].field(), "Name");
/// assert!(Rename { name: Some("ok".into()) }.validate().is_ok());
/// ```
pub trait Validate {
    /// Records a violation in `v` for each field that fails its constraints.
    fn validate_fields(&self, v: &mut Validator);

    /// Checks all the fields, returning every violation found.
    fn validate(&self) -> Result<(), ValidationError> {
        let mut validator = Validator::new();
        self.validate_fields(&mut validator);
        validator.finish()
    }
}

/// Accumulates the violations found while checking a request.
///
/// Each check is a no-op when the value is unset, use [Validator::required] for
/// fields that must be present. Field names are the wire names, nested
/// messages and list elements produce dotted paths such as
/// `Updates[0].Position`.
#[derive(Debug, Default)]
pub struct Validator {
    prefix: Vec<String>,
    violations: Vec<FieldViolation>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a violation unconditionally.
    pub fn violation<D: Into<String>>(&mut self, field: &str, description: D) -> &mut Self {
        let field = self.path(field);
        self.violations.push(FieldViolation {
            field,
            description: description.into(),
        });
        self
    }

    /// The field must be set.
    pub fn required<T>(&mut self, field: &str, value: Option<T>) -> &mut Self {
        if value.is_none() {
            self.violation(field, "is required");
        }
        self
    }

    /// The field must have between `min` and `max` characters.
    pub fn length(
        &mut self,
        field: &str,
        value: Option<&str>,
        min: usize,
        max: usize,
    ) -> &mut Self {
        if let Some(v) = value {
            let len = v.chars().count();
            if len < min || len > max {
                self.violation(
                    field,
                    format!("length must be between {min} and {max} characters, got {len}"),
                );
            }
        }
        self
    }

    /// The field must match `re`, `description` is used in the error message.
    pub fn pattern(
        &mut self,
        field: &str,
        value: Option<&str>,
        re: &Regex,
        description: &str,
    ) -> &mut Self {
        if let Some(v) = value {
            if !re.is_match(v) {
                self.violation(field, format!("must match {description}"));
            }
        }
        self
    }

    /// The field must be in the `[min, max]` range.
    pub fn range<T>(&mut self, field: &str, value: Option<T>, min: T, max: T) -> &mut Self
    where
        T: PartialOrd + Display,
    {
        if let Some(v) = value {
            let in_range = v >= min && v <= max;
            if !in_range {
                self.violation(field, format!("must be between {min} and {max}, got {v}"));
            }
        }
        self
    }

    /// The field must be greater than or equal to `min`.
    pub fn minimum<T>(&mut self, field: &str, value: Option<T>, min: T) -> &mut Self
    where
        T: PartialOrd + Display,
    {
        if let Some(v) = value {
            let in_range = v >= min;
            if !in_range {
                self.violation(field, format!("must be at least {min}, got {v}"));
            }
        }
        self
    }

    /// The collection must have between `min` and `max` elements.
    pub fn count(&mut self, field: &str, len: Option<usize>, min: usize, max: usize) -> &mut Self {
        if let Some(len) = len {
            if len < min || len > max {
                self.violation(
                    field,
                    format!("must have between {min} and {max} elements, got {len}"),
                );
            }
        }
        self
    }

    /// The field must be a `[longitude, latitude]` pair.
    pub fn position(&mut self, field: &str, value: Option<&[f64]>) -> &mut Self {
        let Some(v) = value else {
            return self;
        };
        match v {
            [lon, lat] => {
                self.coordinates(field, *lon, *lat);
            }
            _ => {
                self.violation(
                    field,
                    format!("must have exactly 2 values [longitude, latitude], got {}", v.len()),
                );
            }
        }
        self
    }

    /// Each element must be a `[longitude, latitude]` pair.
    pub fn positions(&mut self, field: &str, value: Option<&[Vec<f64>]>) -> &mut Self {
        for (i, p) in value.into_iter().flatten().enumerate() {
            self.position(&format!("{field}[{i}]"), Some(p.as_slice()));
        }
        self
    }

    /// The field must be a `[min longitude, min latitude, max longitude, max latitude]`
    /// bounding box.
    pub fn bounding_box(&mut self, field: &str, value: Option<&[f64]>) -> &mut Self {
        let Some(v) = value else {
            return self;
        };
        match v {
            [west, south, east, north] => {
                self.coordinates(field, *west, *south);
                self.coordinates(field, *east, *north);
                if south > north {
                    self.violation(field, "the southern latitude exceeds the northern latitude");
                }
            }
            _ => {
                self.violation(field, format!("must have exactly 4 values, got {}", v.len()));
            }
        }
        self
    }

    /// Checks a nested message, prefixing its violations with `field`.
    pub fn nested<T: Validate>(&mut self, field: &str, value: Option<&T>) -> &mut Self {
        if let Some(v) = value {
            self.prefix.push(field.to_string());
            v.validate_fields(self);
            self.prefix.pop();
        }
        self
    }

    /// Checks each element of a list of messages.
    pub fn each<T: Validate>(&mut self, field: &str, value: Option<&[T]>) -> &mut Self {
        for (i, v) in value.into_iter().flatten().enumerate() {
            self.nested(&format!("{field}[{i}]"), Some(v));
        }
        self
    }

    /// Returns an error if any check failed.
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.violations.is_empty() {
            return Ok(());
        }
        Err(ValidationError {
            violations: self.violations,
        })
    }

    fn coordinates(&mut self, field: &str, lon: f64, lat: f64) {
        if !(-180.0..=180.0).contains(&lon) {
            self.violation(
                field,
                format!("longitude must be between -180 and 180, got {lon}"),
            );
        }
        if !(-90.0..=90.0).contains(&lat) {
            self.violation(field, format!("latitude must be between -90 and 90, got {lat}"));
        }
    }

    fn path(&self, field: &str) -> String {
        self.prefix
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(field))
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// A single field that failed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldViolation {
    field: String,
    description: String,
}

impl FieldViolation {
    /// The path of the field, using wire names.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Why the field is invalid.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.description)
    }
}

/// The request failed the client-side validation.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[error("{} field(s) failed validation: {}", .violations.len(), join(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// All the fields that failed validation, in the order they were checked.
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }
}

fn join(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(FieldViolation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
