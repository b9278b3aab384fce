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

use super::validation::required_name;
use super::{DimensionUnit, DistanceUnit, RouteMatrixErrorCode, TravelMode, VehicleWeightUnit};
use gax::validation::{Validate, Validator};

const MAX_WAYPOINTS: usize = 23;
const MAX_MATRIX_POSITIONS: usize = 350;

wkt::value_object! {
    /// Route preferences when traveling by `Car`.
    pub struct CalculateRouteCarModeOptions {
        /// Avoid routes that use ferries.
        avoid_ferries: scalar(bool),
        /// Avoid routes that use toll roads.
        avoid_tolls: scalar(bool),
    }
}

wkt::value_object! {
    /// The dimensions of a truck.
    ///
    /// The service avoids roads with restrictions the truck cannot meet.
    pub struct TruckDimensions {
        height: scalar(f64),
        length: scalar(f64),
        /// The unit for all the dimensions, `Meters` when unset.
        unit: enumeration(DimensionUnit),
        width: scalar(f64),
    }
}

wkt::value_object! {
    /// The weight of a truck.
    pub struct TruckWeight {
        /// The total weight of the truck.
        total: scalar(f64),
        /// The unit for the total weight, `Kilograms` when unset.
        unit: enumeration(VehicleWeightUnit),
    }
}

wkt::value_object! {
    /// Route preferences when traveling by `Truck`.
    pub struct CalculateRouteTruckModeOptions {
        avoid_ferries: scalar(bool),
        avoid_tolls: scalar(bool),
        dimensions: message(TruckDimensions),
        weight: message(TruckWeight),
    }
}

wkt::value_object! {
    /// The request message for [calculate_route][crate::client::Location::calculate_route].
    pub struct CalculateRouteRequest {
        /// The name of the route calculator resource.
        calculator_name: string,
        /// Requires `travel_mode` to be unset or `Car`.
        car_mode_options: message(CalculateRouteCarModeOptions),
        /// Use the current time as the departure time.
        ///
        /// Cannot be combined with `departure_time`.
        depart_now: scalar(bool),
        /// The start position as `[longitude, latitude]`.
        departure_position: list(f64),
        /// Cannot be combined with `depart_now`.
        departure_time: timestamp,
        /// The end position as `[longitude, latitude]`.
        destination_position: list(f64),
        distance_unit: enumeration(DistanceUnit),
        /// Include the geometry of each leg in the result.
        include_leg_geometry: scalar(bool),
        travel_mode: enumeration(TravelMode),
        /// Requires `travel_mode` to be `Truck`.
        truck_mode_options: message(CalculateRouteTruckModeOptions),
        /// Up to 23 intermediate positions, visited in order.
        waypoint_positions: list(Vec<f64>),
    }
}

wkt::value_object! {
    /// A route between two positions, part of a larger route.
    pub struct LegGeometry {
        /// The route as a sequence of `[longitude, latitude]` positions.
        line_string: list(Vec<f64>),
    }
}

wkt::value_object! {
    /// A single instruction within a leg.
    pub struct Step {
        distance: scalar(f64),
        duration_seconds: scalar(f64),
        end_position: list(f64),
        /// The index of the step start in the leg `line_string`.
        geometry_offset: scalar(i32),
        start_position: list(f64),
    }
}

wkt::value_object! {
    /// The portion of a route between two consecutive stops.
    pub struct Leg {
        distance: scalar(f64),
        duration_seconds: scalar(f64),
        end_position: list(f64),
        /// Only present if the request set `include_leg_geometry`.
        geometry: message(LegGeometry),
        start_position: list(f64),
        steps: list(Step),
    }
}

wkt::value_object! {
    /// A summary of a calculated route.
    pub struct CalculateRouteSummary {
        data_source: string,
        distance: scalar(f64),
        distance_unit: enumeration(DistanceUnit),
        duration_seconds: scalar(f64),
        /// The bounding box of the route, as
        /// `[min longitude, min latitude, max longitude, max latitude]`.
        route_b_box: list(f64),
    }
}

wkt::value_object! {
    /// The response message for [calculate_route][crate::client::Location::calculate_route].
    pub struct CalculateRouteResult {
        /// One leg per pair of consecutive stops.
        legs: list(Leg),
        summary: message(CalculateRouteSummary),
    }
}

wkt::value_object! {
    /// The request message for
    /// [calculate_route_matrix][crate::client::Location::calculate_route_matrix].
    ///
    /// # Example
    /// ```
    /// # use geosdk_location::model::CalculateRouteMatrixRequest;
    /// let request = CalculateRouteMatrixRequest::new()
    ///     .with_departure_positions([vec![-123.115, 49.285]])
    ///     .with_destination_positions([vec![-122.339, 47.615]]);
    /// assert_eq!(
    ///     request.to_string(),
    ///     "{DeparturePositions: [[-123.115, 49.285]], DestinationPositions: [[-122.339, 47.615]]}"
    /// );
    /// ```
    pub struct CalculateRouteMatrixRequest {
        calculator_name: string,
        car_mode_options: message(CalculateRouteCarModeOptions),
        depart_now: scalar(bool),
        /// The origins, each one as `[longitude, latitude]`.
        departure_positions: list(Vec<f64>),
        departure_time: timestamp,
        /// The destinations, each one as `[longitude, latitude]`.
        destination_positions: list(Vec<f64>),
        distance_unit: enumeration(DistanceUnit),
        travel_mode: enumeration(TravelMode),
        truck_mode_options: message(CalculateRouteTruckModeOptions),
    }
}

wkt::value_object! {
    /// Why a route in the matrix is missing.
    pub struct RouteMatrixEntryError {
        code: enumeration(RouteMatrixErrorCode),
        message: string,
    }
}

wkt::value_object! {
    /// The route between one departure and one destination.
    pub struct RouteMatrixEntry {
        distance: scalar(f64),
        duration_seconds: scalar(f64),
        /// Set if the route could not be calculated.
        error: message(RouteMatrixEntryError),
    }
}

wkt::value_object! {
    pub struct CalculateRouteMatrixSummary {
        data_source: string,
        distance_unit: enumeration(DistanceUnit),
        error_count: scalar(i32),
        route_count: scalar(i32),
    }
}

wkt::value_object! {
    /// The response message for
    /// [calculate_route_matrix][crate::client::Location::calculate_route_matrix].
    pub struct CalculateRouteMatrixResult {
        /// One row per departure position, one column per destination.
        route_matrix: list(Vec<RouteMatrixEntry>),
        /// The departure positions, moved to the nearest road.
        snapped_departure_positions: list(Vec<f64>),
        /// The destination positions, moved to the nearest road.
        snapped_destination_positions: list(Vec<f64>),
        summary: message(CalculateRouteMatrixSummary),
    }
}

impl Validate for TruckDimensions {
    fn validate_fields(&self, v: &mut Validator) {
        v.minimum("Height", self.height(), 0.0)
            .minimum("Length", self.length(), 0.0)
            .minimum("Width", self.width(), 0.0);
    }
}

impl Validate for TruckWeight {
    fn validate_fields(&self, v: &mut Validator) {
        v.minimum("Total", self.total(), 0.0);
    }
}

impl Validate for CalculateRouteTruckModeOptions {
    fn validate_fields(&self, v: &mut Validator) {
        v.nested("Dimensions", self.dimensions())
            .nested("Weight", self.weight());
    }
}

// The departure time and travel mode options common to both route requests.
struct Preferences<'a> {
    depart_now: Option<bool>,
    departure_time: Option<wkt::Timestamp>,
    travel_mode: Option<&'a TravelMode>,
    car: Option<&'a CalculateRouteCarModeOptions>,
    truck: Option<&'a CalculateRouteTruckModeOptions>,
}

impl Preferences<'_> {
    fn validate_fields(&self, v: &mut Validator) {
        if self.depart_now.is_some() && self.departure_time.is_some() {
            v.violation("DepartNow", "cannot be set together with DepartureTime");
        }
        if self.car.is_some() && !matches!(self.travel_mode, None | Some(TravelMode::Car)) {
            v.violation("CarModeOptions", "requires TravelMode to be Car");
        }
        if self.truck.is_some() && !matches!(self.travel_mode, Some(TravelMode::Truck)) {
            v.violation("TruckModeOptions", "requires TravelMode to be Truck");
        }
        v.nested("TruckModeOptions", self.truck);
    }
}

impl Validate for CalculateRouteRequest {
    fn validate_fields(&self, v: &mut Validator) {
        required_name(v, "CalculatorName", self.calculator_name());
        v.required("DeparturePosition", self.departure_position())
            .position("DeparturePosition", self.departure_position())
            .required("DestinationPosition", self.destination_position())
            .position("DestinationPosition", self.destination_position())
            .count(
                "WaypointPositions",
                self.waypoint_positions().map(<[_]>::len),
                0,
                MAX_WAYPOINTS,
            )
            .positions("WaypointPositions", self.waypoint_positions());
        Preferences {
            depart_now: self.depart_now(),
            departure_time: self.departure_time(),
            travel_mode: self.travel_mode(),
            car: self.car_mode_options(),
            truck: self.truck_mode_options(),
        }
        .validate_fields(v);
    }
}

impl Validate for CalculateRouteMatrixRequest {
    fn validate_fields(&self, v: &mut Validator) {
        required_name(v, "CalculatorName", self.calculator_name());
        v.required("DeparturePositions", self.departure_positions())
            .count(
                "DeparturePositions",
                self.departure_positions().map(<[_]>::len),
                1,
                MAX_MATRIX_POSITIONS,
            )
            .positions("DeparturePositions", self.departure_positions())
            .required("DestinationPositions", self.destination_positions())
            .count(
                "DestinationPositions",
                self.destination_positions().map(<[_]>::len),
                1,
                MAX_MATRIX_POSITIONS,
            )
            .positions("DestinationPositions", self.destination_positions());
        Preferences {
            depart_now: self.depart_now(),
            departure_time: self.departure_time(),
            travel_mode: self.travel_mode(),
            car: self.car_mode_options(),
            truck: self.truck_mode_options(),
        }
        .validate_fields(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn violations<T: Validate>(input: &T) -> Vec<String> {
        match input.validate() {
            Ok(()) => Vec::new(),
            Err(e) => e
                .violations()
                .iter()
                .map(|v| v.field().to_string())
                .collect(),
        }
    }

    fn route() -> CalculateRouteRequest {
        CalculateRouteRequest::new()
            .with_calculator_name("my-calculator")
            .with_departure_position([-123.115, 49.285])
            .with_destination_position([-122.339, 47.615])
    }

    #[test]
    fn route_ok() {
        assert_eq!(violations(&route()), Vec::<String>::new());
        let input = route()
            .with_waypoint_positions([vec![-122.757, 49.0021], vec![-122.349, 47.620]])
            .with_depart_now(true)
            .with_travel_mode(TravelMode::Truck)
            .with_truck_mode_options(
                CalculateRouteTruckModeOptions::new()
                    .with_avoid_tolls(true)
                    .with_dimensions(TruckDimensions::new().with_height(4.5))
                    .with_weight(TruckWeight::new().with_total(12000.0)),
            );
        assert_eq!(violations(&input), Vec::<String>::new());
    }

    #[test]
    fn route_required() {
        let got = violations(&CalculateRouteRequest::new());
        assert_eq!(
            got,
            vec!["CalculatorName", "DeparturePosition", "DestinationPosition"]
        );
    }

    #[test]
    fn route_positions() {
        let input = route()
            .with_departure_position([-200.0, 49.285])
            .with_waypoint_positions((0..24).map(|_| vec![0.0, 0.0]));
        let got = violations(&input);
        assert_eq!(got, vec!["DeparturePosition", "WaypointPositions"]);
    }

    #[test_case(None, true; "unset")]
    #[test_case(Some(TravelMode::Car), true; "car")]
    #[test_case(Some(TravelMode::Truck), false; "truck")]
    #[test_case(Some(TravelMode::Walking), false; "walking")]
    fn car_options(mode: Option<TravelMode>, ok: bool) {
        let mut input =
            route().with_car_mode_options(CalculateRouteCarModeOptions::new().with_avoid_ferries(true));
        input.set_or_clear_travel_mode(mode);
        assert_eq!(violations(&input).is_empty(), ok, "{input}");
    }

    #[test_case(None, false; "unset")]
    #[test_case(Some(TravelMode::Car), false; "car")]
    #[test_case(Some(TravelMode::Truck), true; "truck")]
    fn truck_options(mode: Option<TravelMode>, ok: bool) {
        let mut input = route().with_truck_mode_options(CalculateRouteTruckModeOptions::new());
        input.set_or_clear_travel_mode(mode);
        assert_eq!(violations(&input).is_empty(), ok, "{input}");
    }

    #[test]
    fn truck_negative_values() {
        let input = route().with_travel_mode(TravelMode::Truck).with_truck_mode_options(
            CalculateRouteTruckModeOptions::new()
                .with_dimensions(TruckDimensions::new().with_width(-1.0).with_length(2.0))
                .with_weight(TruckWeight::new().with_total(-5.0)),
        );
        let got = violations(&input);
        assert_eq!(
            got,
            vec![
                "TruckModeOptions.Dimensions.Width",
                "TruckModeOptions.Weight.Total"
            ]
        );
    }

    #[test]
    fn departure_exclusive() -> anyhow::Result<()> {
        let input = route()
            .with_depart_now(false)
            .with_departure_time(wkt::Timestamp::try_from("2025-05-16T09:46:12Z")?);
        assert_eq!(violations(&input), vec!["DepartNow"]);
        Ok(())
    }

    #[test]
    fn matrix() {
        let input = CalculateRouteMatrixRequest::new()
            .with_calculator_name("my-calculator")
            .with_departure_positions([vec![-123.115, 49.285]])
            .with_destination_positions([vec![-122.339, 47.615], vec![-122.339]]);
        assert_eq!(violations(&input), vec!["DestinationPositions[1]"]);

        let input = CalculateRouteMatrixRequest::new()
            .with_calculator_name("my-calculator")
            .with_departure_positions(Vec::<Vec<f64>>::new())
            .with_destination_positions([vec![-122.339, 47.615]]);
        assert_eq!(violations(&input), vec!["DeparturePositions"]);
    }

    #[test]
    fn matrix_result_display() {
        let input = CalculateRouteMatrixResult::new()
            .with_route_matrix([vec![
                RouteMatrixEntry::new()
                    .with_distance(2.5)
                    .with_duration_seconds(301.0),
                RouteMatrixEntry::new().with_error(
                    RouteMatrixEntryError::new().with_code(RouteMatrixErrorCode::RouteTooLong),
                ),
            ]])
            .with_summary(CalculateRouteMatrixSummary::new().with_route_count(2));
        assert_eq!(
            input.to_string(),
            concat!(
                "{RouteMatrix: [[{Distance: 2.5, DurationSeconds: 301.0}, ",
                "{Error: {Code: RouteTooLong}}]], Summary: {RouteCount: 2}}"
            )
        );
    }
}
