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

mod core_error;
pub use core_error::*;

/// Errors and error details returned by the service.
///
/// The client libraries distinguish between requests rejected locally (see
/// [crate::validation]), errors detected while trying to send a request, and
/// errors returned by the service itself.
///
/// # Examples
///
/// ```
/// # use geosdk_gax::error;
/// use error::Error;
/// use error::service::Code;
/// fn handle_error(e: Error) {
///     match e.status() {
///         Some(s) if s.code() == &Code::ThrottlingException => println!("slow down"),
///         Some(s) => println!("the service reported {s:?}"),
///         None => println!("some other problem {e}"),
///     }
/// }
/// ```
pub mod service;
