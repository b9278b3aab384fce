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

//! Every message in this module starts with all its fields unset. Use the
//! `with_*` functions to initialize a request:
//!
//! ```
//! # use geosdk_location::model::*;
//! let request = CalculateRouteMatrixRequest::new()
//!     .with_calculator_name("my-calculator")
//!     .with_departure_positions([vec![-123.115, 49.285]])
//!     .with_destination_positions([vec![-122.339, 47.615]])
//!     .with_travel_mode(TravelMode::Car);
//! assert_eq!(request.travel_mode(), Some(&TravelMode::Car));
//! ```
//!
//! All the request types implement [Validate][gax::validation::Validate].
//! The client checks each request before sending it, applications may also
//! check requests directly.

mod calculators;
mod enums;
mod geofences;
mod maps;
mod place_indexes;
mod places;
mod positions;
mod routes;
mod tags;
mod trackers;
mod validation;

pub use calculators::*;
pub use enums::*;
pub use geofences::*;
pub use maps::*;
pub use place_indexes::*;
pub use places::*;
pub use positions::*;
pub use routes::*;
pub use tags::*;
pub use trackers::*;
