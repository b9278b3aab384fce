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
    use geosdk_location::client::Location;
    use geosdk_location::model::*;
    use gax::error::service::{Code, ServiceError};
    use gax::options::RequestOptions;
    use pretty_assertions::assert_eq;

    mockall::mock! {
        #[derive(Debug)]
        Location {}
        impl geosdk_location::stub::Location for Location {
            async fn describe_tracker(&self, req: DescribeTrackerRequest, _options: RequestOptions) -> gax::Result<DescribeTrackerResult>;
            async fn calculate_route_matrix(&self, req: CalculateRouteMatrixRequest, _options: RequestOptions) -> gax::Result<CalculateRouteMatrixResult>;
            async fn tag_resource(&self, req: TagResourceRequest, _options: RequestOptions) -> gax::Result<TagResourceResult>;
            async fn batch_put_geofence(&self, req: BatchPutGeofenceRequest, _options: RequestOptions) -> gax::Result<BatchPutGeofenceResult>;
            async fn get_device_position_history(&self, req: GetDevicePositionHistoryRequest, _options: RequestOptions) -> gax::Result<GetDevicePositionHistoryResult>;
        }
    }

    fn matrix_request() -> CalculateRouteMatrixRequest {
        CalculateRouteMatrixRequest::new()
            .with_calculator_name("my-calculator")
            .with_departure_positions([vec![-123.115, 49.285]])
            .with_destination_positions([vec![-122.339, 47.615], vec![-122.201, 47.61]])
    }

    #[tokio::test]
    async fn from_stub() -> anyhow::Result<()> {
        let mut mock = MockLocation::new();
        mock.expect_describe_tracker()
            .withf(|req, options| {
                req.tracker_name() == Some("my-tracker")
                    && options.region() == "us-east-1"
                    && options.endpoint() == "https://geo.us-east-1.amazonaws.com/"
            })
            .return_once(|req, _| {
                Ok(DescribeTrackerResult::new()
                    .with_tracker_name(req.tracker_name().unwrap_or_default())
                    .with_tracker_arn("arn:aws:geo:us-east-1:123456789012:tracker/my-tracker"))
            });

        let client = Location::from_stub(mock);
        let got = client
            .describe_tracker(DescribeTrackerRequest::new().with_tracker_name("my-tracker"))
            .await?;
        assert_eq!(got.tracker_name(), Some("my-tracker"));
        assert_eq!(
            got.tracker_arn(),
            Some("arn:aws:geo:us-east-1:123456789012:tracker/my-tracker")
        );
        Ok(())
    }

    #[tokio::test]
    async fn invalid_request_is_not_sent() -> anyhow::Result<()> {
        let mut mock = MockLocation::new();
        mock.expect_calculate_route_matrix().never();

        let client = Location::from_stub(mock);
        let request = matrix_request().with_departure_positions([vec![-200.0, 49.285]]);
        let err = client.calculate_route_matrix(request).await.unwrap_err();
        assert!(err.is_validation(), "{err:?}");
        let fields = err
            .validation_error()
            .map(|e| e.violations().iter().map(|v| v.field().to_string()).collect::<Vec<_>>())
            .unwrap_or_default();
        assert_eq!(fields, vec!["DeparturePositions[0]"]);
        Ok(())
    }

    #[tokio::test]
    async fn without_validation() -> anyhow::Result<()> {
        let mut mock = MockLocation::new();
        mock.expect_describe_tracker()
            .times(1)
            .returning(|_, _| Ok(DescribeTrackerResult::new()));

        let client = Location::builder(mock).without_validation().build().await?;
        let got = client.describe_tracker(DescribeTrackerRequest::new()).await?;
        assert_eq!(got, DescribeTrackerResult::new());
        Ok(())
    }

    #[tokio::test]
    async fn builder_region() -> anyhow::Result<()> {
        let mut mock = MockLocation::new();
        mock.expect_tag_resource()
            .withf(|_, options| {
                options.region() == "eu-central-1"
                    && options.endpoint() == "https://geo.eu-central-1.amazonaws.com/"
            })
            .return_once(|_, _| Ok(TagResourceResult::new()));

        let client = Location::builder(mock)
            .with_region("eu-central-1")
            .build()
            .await?;
        let request = TagResourceRequest::new()
            .with_resource_arn("arn:aws:geo:eu-central-1:123456789012:map/my-map")
            .with_tags([("env", "prod")]);
        client.tag_resource(request).await?;
        Ok(())
    }

    #[tokio::test]
    async fn builder_endpoint() -> anyhow::Result<()> {
        let mut mock = MockLocation::new();
        mock.expect_describe_tracker()
            .withf(|_, options| options.endpoint() == "http://localhost:8080/")
            .return_once(|_, _| Ok(DescribeTrackerResult::new()));

        let client = Location::builder(mock)
            .with_endpoint("http://localhost:8080")
            .build()
            .await?;
        client
            .describe_tracker(DescribeTrackerRequest::new().with_tracker_name("my-tracker"))
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn builder_errors() {
        let err = Location::builder(MockLocation::new())
            .with_region("Not A Region")
            .build()
            .await
            .unwrap_err();
        assert!(err.is_region(), "{err:?}");

        let err = Location::builder(MockLocation::new())
            .with_endpoint("https://")
            .build()
            .await
            .unwrap_err();
        assert!(err.is_endpoint(), "{err:?}");
    }

    #[tokio::test]
    async fn service_error() -> anyhow::Result<()> {
        let mut mock = MockLocation::new();
        mock.expect_describe_tracker().return_once(|_, _| {
            Err(gax::error::Error::service(
                ServiceError::new(Code::ResourceNotFoundException)
                    .set_message("tracker my-tracker not found")
                    .set_http_status_code(404),
            ))
        });

        let client = Location::from_stub(mock);
        let err = client
            .describe_tracker(DescribeTrackerRequest::new().with_tracker_name("my-tracker"))
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404));
        let status = err.status().cloned();
        assert_eq!(status.as_ref().map(ServiceError::code), Some(&Code::ResourceNotFoundException));
        assert_eq!(
            status.as_ref().map(ServiceError::message),
            Some("tracker my-tracker not found")
        );
        Ok(())
    }

    #[tokio::test]
    async fn matrix_result() -> anyhow::Result<()> {
        let mut mock = MockLocation::new();
        mock.expect_calculate_route_matrix().return_once(|req, _| {
            let departures = req.departure_positions().map_or(0, <[_]>::len);
            let destinations = req.destination_positions().map_or(0, <[_]>::len);
            let row = (0..destinations).map(|_| {
                RouteMatrixEntry::new()
                    .with_distance(1.5)
                    .with_duration_seconds(120.0)
            });
            Ok(CalculateRouteMatrixResult::new()
                .with_route_matrix((0..departures).map(|_| row.clone().collect::<Vec<_>>()))
                .with_summary(
                    CalculateRouteMatrixSummary::new()
                        .with_route_count((departures * destinations) as i32),
                ))
        });

        let client = Location::from_stub(mock);
        let got = client.calculate_route_matrix(matrix_request()).await?;
        assert_eq!(got.route_matrix().map(<[_]>::len), Some(1));
        assert_eq!(
            got.route_matrix().and_then(|m| m.first()).map(Vec::len),
            Some(2)
        );
        assert_eq!(got.summary().and_then(|s| s.route_count()), Some(2));
        Ok(())
    }

    fn square(west: f64, south: f64) -> Vec<Vec<f64>> {
        vec![
            vec![west, south],
            vec![west + 0.01, south],
            vec![west + 0.01, south + 0.01],
            vec![west, south + 0.01],
            vec![west, south],
        ]
    }

    #[tokio::test]
    async fn batch_put_geofence() -> anyhow::Result<()> {
        let mut mock = MockLocation::new();
        mock.expect_batch_put_geofence()
            .withf(|req, _| req.collection_name() == Some("warehouses"))
            .return_once(|req, _| {
                let entries = req.entries().unwrap_or_default();
                let error = BatchPutGeofenceError::new()
                    .with_geofence_id(entries[1].geofence_id().unwrap_or_default())
                    .with_error(
                        BatchItemError::new()
                            .with_code(BatchItemErrorCode::ConflictError)
                            .with_message("geofence is being deleted"),
                    );
                let success = BatchPutGeofenceSuccess::new()
                    .with_geofence_id(entries[0].geofence_id().unwrap_or_default());
                Ok(BatchPutGeofenceResult::new()
                    .with_errors([error])
                    .with_successes([success]))
            });

        let client = Location::from_stub(mock);
        let entry = |id: &str, west: f64| {
            BatchPutGeofenceRequestEntry::new()
                .with_geofence_id(id)
                .with_geometry(GeofenceGeometry::new().with_polygon([square(west, 47.6)]))
        };
        let got = client
            .batch_put_geofence(
                BatchPutGeofenceRequest::new()
                    .with_collection_name("warehouses")
                    .with_entries([entry("north", -122.35), entry("south", -122.30)]),
            )
            .await?;
        let successes = got
            .successes()
            .unwrap_or_default()
            .iter()
            .filter_map(BatchPutGeofenceSuccess::geofence_id)
            .collect::<Vec<_>>();
        assert_eq!(successes, vec!["north"]);
        let errors = got
            .errors()
            .unwrap_or_default()
            .iter()
            .filter_map(BatchPutGeofenceError::geofence_id)
            .collect::<Vec<_>>();
        assert_eq!(errors, vec!["south"]);
        Ok(())
    }

    #[tokio::test]
    async fn open_polygon_is_not_sent() -> anyhow::Result<()> {
        let mut mock = MockLocation::new();
        mock.expect_batch_put_geofence().never();

        let client = Location::from_stub(mock);
        let mut ring = square(-122.35, 47.6);
        ring.pop();
        let request = BatchPutGeofenceRequest::new()
            .with_collection_name("warehouses")
            .with_entries([BatchPutGeofenceRequestEntry::new()
                .with_geofence_id("north")
                .with_geometry(GeofenceGeometry::new().with_polygon([ring]))]);
        let err = client.batch_put_geofence(request).await.unwrap_err();
        let fields = err
            .validation_error()
            .map(|e| e.violations().iter().map(|v| v.field().to_string()).collect::<Vec<_>>())
            .unwrap_or_default();
        assert_eq!(fields, vec!["Entries[0].Geometry.Polygon[0]"]);
        Ok(())
    }

    #[tokio::test]
    async fn position_history_pages() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockLocation::new();
        mock.expect_get_device_position_history()
            .withf(|req, _| req.next_token().is_none())
            .times(1)
            .in_sequence(&mut seq)
            .returning(|req, _| {
                Ok(GetDevicePositionHistoryResult::new()
                    .with_device_positions([DevicePosition::new()
                        .with_device_id(req.device_id().unwrap_or_default())
                        .with_position([-123.115, 49.285])])
                    .with_next_token("page-2"))
            });
        mock.expect_get_device_position_history()
            .withf(|req, _| req.next_token() == Some("page-2"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|req, _| {
                Ok(GetDevicePositionHistoryResult::new().with_device_positions([
                    DevicePosition::new()
                        .with_device_id(req.device_id().unwrap_or_default())
                        .with_position([-122.339, 47.615]),
                ]))
            });

        let client = Location::from_stub(mock);
        let mut request = GetDevicePositionHistoryRequest::new()
            .with_tracker_name("my-tracker")
            .with_device_id("thing-1");
        let mut positions = Vec::new();
        loop {
            let response = client.get_device_position_history(request.clone()).await?;
            positions.extend(response.device_positions().unwrap_or_default().iter().cloned());
            match response.next_token() {
                Some(token) => request.set_next_token(token),
                None => break,
            }
        }
        assert_eq!(positions.len(), 2);
        assert!(
            positions.iter().all(|p| p.device_id() == Some("thing-1")),
            "{positions:?}"
        );
        Ok(())
    }
}
