// Copyright 2024 Google LLC
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

//! Well-known types for the geolocation service client libraries.
//!
//! Every request and result exchanged with the service is a *value object*: a
//! record of named, optional fields with structural equality and a
//! deterministic text representation. This crate provides the machinery to
//! declare such records once, via [value_object!], instead of repeating the
//! accessors, `Display`, `Hash`, and `PartialEq` implementations for each
//! message.
//!
//! The crate also provides the open string enumerations used by the service
//! ([enumeration!]) and the [Timestamp] type used for date and time fields.

mod enumerations;
mod timestamp;
pub use crate::timestamp::*;
mod value_object;
pub use crate::value_object::*;

#[doc(hidden)]
pub mod internal;

// Used by the macros, not part of the public API.
#[doc(hidden)]
pub mod __private {
    pub use crate::internal::enums::{EnumVisitor, UnknownEnumValue};
    pub use crate::internal::fields::{FieldDisplay, FieldHash, FieldWriter};
    pub use pastey::paste;
}
