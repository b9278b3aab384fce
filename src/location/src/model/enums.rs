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

wkt::enumeration! {
    /// The unit system used for distances.
    ///
    /// The service uses `Kilometers` when unset.
    pub enum DistanceUnit {
        Kilometers,
        Miles,
    }
}

wkt::enumeration! {
    /// The mode of transport used to calculate a route.
    ///
    /// The service uses `Car` when unset.
    pub enum TravelMode {
        Car,
        Truck,
        Walking,
    }
}

wkt::enumeration! {
    /// The unit for truck dimensions.
    pub enum DimensionUnit {
        Meters,
        Feet,
    }
}

wkt::enumeration! {
    /// The unit for truck weights.
    pub enum VehicleWeightUnit {
        Kilograms,
        Pounds,
    }
}

wkt::enumeration! {
    /// Why a route in a route matrix could not be calculated.
    pub enum RouteMatrixErrorCode {
        /// No route exists between the positions.
        RouteNotFound,
        /// The route is longer than the data provider supports.
        RouteTooLong,
        /// Neither position is close enough to a road.
        PositionsNotFound,
        /// The destination is not close enough to a road.
        DestinationPositionNotFound,
        /// The departure is not close enough to a road.
        DeparturePositionNotFound,
        OtherValidationError,
    }
}

wkt::enumeration! {
    /// How a tracker filters device position updates.
    pub enum PositionFiltering {
        /// Stores at most one update per device every 30 seconds.
        TimeBased,
        /// Ignores updates less than 30 meters away from the previous one.
        DistanceBased,
        /// Ignores updates within the accuracy of the previous one.
        AccuracyBased,
    }
}

wkt::enumeration! {
    /// The pricing plan for a resource.
    ///
    /// Pricing plans are deprecated in the service, but are still reported.
    pub enum PricingPlan {
        RequestBasedUsage,
        MobileAssetTracking,
        MobileAssetManagement,
    }
}

wkt::enumeration! {
    /// How an application uses the results of a place search.
    pub enum IntendedUse {
        /// The results are displayed and then discarded.
        SingleUse,
        /// The application keeps the results.
        Storage,
    }
}

wkt::enumeration! {
    /// The error code for a single item in a batch operation.
    pub enum BatchItemErrorCode {
        AccessDeniedError,
        ConflictError,
        InternalServerError,
        ResourceNotFoundError,
        ThrottlingError,
        ValidationError,
    }
}
