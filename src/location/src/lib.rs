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

//! Geolocation Service Client Libraries for Rust - Location Service
//!
//! This crate contains traits, types, and functions to interact with the
//! Location Service. The service calculates routes, tracks device positions,
//! evaluates geofences, and searches for places.
//!
//! Most applications will use the structs defined in the [client] module.
//! More specifically:
//!
//! * [Location](client/struct.Location.html)
//!
//! The crate does not include a transport. Applications (or the transport
//! crates) implement the [stub::Location] trait and hand the implementation
//! to the client. The client validates each request and forwards it to the
//! stub.

pub use gax::Result;
pub use gax::error::Error;

/// The messages and enums that are part of this client library.
pub mod model;

pub mod builder;
pub mod client;
pub mod stub;

pub(crate) mod tracing;
