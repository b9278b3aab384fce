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

//! Geolocation service client libraries for Rust - Client-side helpers.
//!
//! This crate contains a number of types and functions used in the
//! implementation of the geolocation client libraries:
//!
//! - The [Error][error::Error] type returned by all client operations.
//! - The [validation] traits used to check requests before they are sent.
//! - The [client_builder] used to configure clients.
//! - The [options] passed to each request.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping service operations.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by generated clients.
pub mod error;

pub mod client_builder;
pub mod options;

/// Client-side validation of requests.
///
/// The service documents length, pattern, and range constraints for many
/// request fields. The client libraries check these constraints before
/// sending a request, and return an error without contacting the service if
/// any of them fail.
pub mod validation;
