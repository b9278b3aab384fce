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

#[cfg(test)]
mod tests {
    use geosdk_location::model::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    fn matrix_request() -> CalculateRouteMatrixRequest {
        CalculateRouteMatrixRequest::new()
            .with_departure_positions([vec![-123.115, 49.285]])
            .with_destination_positions([vec![-122.339, 47.615]])
    }

    #[test]
    fn route_matrix_request() {
        let a = matrix_request();
        assert_eq!(
            a.to_string(),
            "{DeparturePositions: [[-123.115, 49.285]], DestinationPositions: [[-122.339, 47.615]]}"
        );

        let b = matrix_request();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let c = matrix_request().with_travel_mode(TravelMode::Car);
        assert_ne!(a, c);
        assert_eq!(
            c.to_string(),
            "{DeparturePositions: [[-123.115, 49.285]], DestinationPositions: [[-122.339, 47.615]], TravelMode: Car}"
        );
    }

    #[test]
    fn route_matrix_wire_format() -> anyhow::Result<()> {
        let got = serde_json::to_value(matrix_request().with_travel_mode(TravelMode::Car))?;
        let want = json!({
            "DeparturePositions": [[-123.115, 49.285]],
            "DestinationPositions": [[-122.339, 47.615]],
            "TravelMode": "Car",
        });
        assert_eq!(got, want);

        let roundtrip = serde_json::from_value::<CalculateRouteMatrixRequest>(want)?;
        assert_eq!(roundtrip, matrix_request().with_travel_mode(TravelMode::Car));
        Ok(())
    }

    #[test]
    fn unset_objects() {
        let a = CreateTrackerRequest::new();
        let b = CreateTrackerRequest::default();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(a.to_string(), "{}");
    }

    #[test]
    fn unset_differs_from_empty() -> anyhow::Result<()> {
        let unset = SearchPlaceIndexForTextRequest::new();
        let empty = SearchPlaceIndexForTextRequest::new().with_filter_countries(Vec::<String>::new());
        assert_ne!(unset, empty);
        assert_eq!(unset.to_string(), "{}");
        assert_eq!(empty.to_string(), "{FilterCountries: []}");
        assert_eq!(serde_json::to_value(&unset)?, json!({}));
        assert_eq!(serde_json::to_value(&empty)?, json!({"FilterCountries": []}));
        Ok(())
    }

    #[test]
    fn copies_are_independent() {
        let mut countries = vec!["USA".to_string()];
        let mut request = SearchPlaceIndexForTextRequest::new().with_filter_countries(countries.clone());
        countries.push("CAN".to_string());
        assert_eq!(request.filter_countries(), Some(&["USA".to_string()][..]));

        if let Some(stored) = request.filter_countries_mut() {
            stored.push("MEX".to_string());
        }
        assert_eq!(countries, vec!["USA", "CAN"]);
        assert_eq!(
            request.filter_countries(),
            Some(&["USA".to_string(), "MEX".to_string()][..])
        );

        let copy = request.clone();
        request.clear_filter_countries();
        assert_eq!(copy.filter_countries().map(<[_]>::len), Some(2));
    }

    #[test]
    fn extend_appends() {
        let request = CalculateRouteRequest::new()
            .extend_waypoint_positions([vec![1.0, 2.0]])
            .extend_waypoint_positions([vec![3.0, 4.0]]);
        assert_eq!(
            request.waypoint_positions(),
            Some(&[vec![1.0, 2.0], vec![3.0, 4.0]][..])
        );

        let request = request.with_waypoint_positions([vec![5.0, 6.0]]);
        assert_eq!(request.waypoint_positions(), Some(&[vec![5.0, 6.0]][..]));
    }

    #[test]
    fn duplicate_tag() -> anyhow::Result<()> {
        let mut request = CreateMapRequest::new();
        request.add_tags_entry("k", "v1")?;
        let err = request.add_tags_entry("k", "v2").unwrap_err();
        assert_eq!(err.field(), "Tags");
        assert_eq!(err.key(), "k");
        assert_eq!(
            request.tags().and_then(|t| t.get("k")).map(String::as_str),
            Some("v1")
        );

        request.clear_tags_entries();
        assert_eq!(request.tags(), None);
        Ok(())
    }

    #[test]
    fn nested_messages() -> anyhow::Result<()> {
        let request = CalculateRouteRequest::new()
            .with_travel_mode(TravelMode::Truck)
            .with_truck_mode_options(
                CalculateRouteTruckModeOptions::new()
                    .with_avoid_ferries(true)
                    .with_weight(
                        TruckWeight::new()
                            .with_total(3500.0)
                            .with_unit(VehicleWeightUnit::Kilograms),
                    ),
            );
        assert_eq!(
            request.to_string(),
            "{TravelMode: Truck, TruckModeOptions: {AvoidFerries: true, Weight: {Total: 3500.0, Unit: Kilograms}}}"
        );
        assert_eq!(
            serde_json::to_value(&request)?,
            json!({
                "TravelMode": "Truck",
                "TruckModeOptions": {
                    "AvoidFerries": true,
                    "Weight": {"Total": 3500.0, "Unit": "Kilograms"},
                },
            })
        );
        Ok(())
    }

    #[test]
    fn response_from_wire() -> anyhow::Result<()> {
        let got = serde_json::from_value::<DescribeTrackerResult>(json!({
            "CreateTime": "2025-05-16T09:46:12Z",
            "PositionFiltering": "AccuracyBased",
            "Tags": {"env": "prod"},
            "TrackerName": "my-tracker",
        }))?;
        assert_eq!(got.tracker_name(), Some("my-tracker"));
        assert_eq!(got.position_filtering(), Some(&PositionFiltering::AccuracyBased));
        assert_eq!(got.create_time(), Some(wkt::Timestamp::try_from("2025-05-16T09:46:12Z")?));
        assert_eq!(got.update_time(), None);
        assert_eq!(got.tags().map(|t| t.len()), Some(1));
        Ok(())
    }
}
