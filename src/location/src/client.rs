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

use crate::Result;
use crate::model;
use gax::client_builder::internal::ClientConfig;
use gax::options::RequestOptions;
use gax::validation::Validate;
use std::sync::Arc;

/// Implements a client for the Location Service.
///
/// # Example
/// ```
/// # use geosdk_location::client::Location;
/// # use geosdk_location::model::DescribeTrackerRequest;
/// async fn sample<T>(stub: T) -> anyhow::Result<()>
/// where
///     T: geosdk_location::stub::Location + 'static,
/// {
///     let client = Location::builder(stub).with_region("us-west-2").build().await?;
///     let tracker = client
///         .describe_tracker(DescribeTrackerRequest::new().with_tracker_name("my-tracker"))
///         .await?;
///     println!("{tracker}");
///     Ok(())
/// }
/// ```
///
/// # Service Description
///
/// The Location Service calculates routes and route matrices, stores the
/// positions reported by devices in trackers, and evaluates those positions
/// against geofences. It also manages the map, place index, and route
/// calculator resources, and searches place indexes for text or positions.
///
/// # Configuration
///
/// To configure `Location` use the `with_*` methods in the type returned
/// by [builder()][Location::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_region()]: by default the client uses the `us-east-1` region.
/// * [with_endpoint()]: send requests to a different endpoint, for example
///   a local emulator.
/// * [without_validation()]: send requests without checking them first.
///
/// [with_region()]: gax::client_builder::ClientBuilder::with_region
/// [with_endpoint()]: gax::client_builder::ClientBuilder::with_endpoint
/// [without_validation()]: gax::client_builder::ClientBuilder::without_validation
///
/// # Cloning
///
/// `Location` keeps its stub in an [Arc], cloning the client is cheap and all
/// the clones share the same stub. You do not need to wrap `Location` in an
/// [Rc](std::rc::Rc) or [Arc] to reuse it.
#[derive(Clone, Debug)]
pub struct Location {
    inner: Arc<dyn crate::stub::dynamic::Location>,
    options: RequestOptions,
    validation: bool,
}

impl Location {
    /// Returns a builder for [Location].
    ///
    /// The stub sends the requests to the service, see [crate::stub::Location].
    pub fn builder<T>(stub: T) -> crate::builder::location::ClientBuilder<T>
    where
        T: crate::stub::Location + 'static,
    {
        gax::client_builder::internal::new_builder(crate::builder::location::client::Factory(stub))
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior. The client uses the default options, and validates
    /// each request.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: crate::stub::Location + 'static,
    {
        Self {
            inner: Arc::new(stub),
            options: RequestOptions::default(),
            validation: true,
        }
    }

    pub(crate) fn new<T>(config: ClientConfig, stub: T) -> gax::client_builder::Result<Self>
    where
        T: crate::stub::Location + 'static,
    {
        let options = RequestOptions::new(&config)?;
        let inner: Arc<dyn crate::stub::dynamic::Location> =
            if gax::options::tracing_enabled(&config) {
                Arc::new(crate::tracing::Location::new(stub))
            } else {
                Arc::new(stub)
            };
        Ok(Self {
            inner,
            options,
            validation: config.validation,
        })
    }

    fn check<R>(&self, req: &R) -> Result<()>
    where
        R: Validate + std::fmt::Debug,
    {
        if !self.validation {
            return Ok(());
        }
        req.validate().map_err(|e| {
            tracing::debug!(error = %e, request = ?req, "rejecting invalid request");
            crate::Error::validation(e)
        })
    }

    /// Calculates a route between a departure and a destination position.
    ///
    /// # Example
    /// ```
    /// # use geosdk_location::client::Location;
    /// use geosdk_location::model::{CalculateRouteRequest, TravelMode};
    /// async fn sample(client: &Location) -> anyhow::Result<()> {
    ///     let response = client
    ///         .calculate_route(
    ///             CalculateRouteRequest::new()
    ///                 .with_calculator_name("my-calculator")
    ///                 .with_departure_position([-123.115, 49.285])
    ///                 .with_destination_position([-122.339, 47.615])
    ///                 .with_travel_mode(TravelMode::Car),
    ///         )
    ///         .await?;
    ///     println!("{:?}", response.summary().and_then(|s| s.distance()));
    ///     Ok(())
    /// }
    /// ```
    pub async fn calculate_route(
        &self,
        req: model::CalculateRouteRequest,
    ) -> Result<model::CalculateRouteResult> {
        self.check(&req)?;
        self.inner.calculate_route(req, self.options.clone()).await
    }

    /// Calculates the routes between each departure and each destination.
    pub async fn calculate_route_matrix(
        &self,
        req: model::CalculateRouteMatrixRequest,
    ) -> Result<model::CalculateRouteMatrixResult> {
        self.check(&req)?;
        self.inner.calculate_route_matrix(req, self.options.clone()).await
    }

    /// Creates a route calculator resource.
    pub async fn create_route_calculator(
        &self,
        req: model::CreateRouteCalculatorRequest,
    ) -> Result<model::CreateRouteCalculatorResult> {
        self.check(&req)?;
        self.inner.create_route_calculator(req, self.options.clone()).await
    }

    /// Retrieves the details of a route calculator resource.
    pub async fn describe_route_calculator(
        &self,
        req: model::DescribeRouteCalculatorRequest,
    ) -> Result<model::DescribeRouteCalculatorResult> {
        self.check(&req)?;
        self.inner.describe_route_calculator(req, self.options.clone()).await
    }

    /// Updates the properties of a route calculator resource.
    pub async fn update_route_calculator(
        &self,
        req: model::UpdateRouteCalculatorRequest,
    ) -> Result<model::UpdateRouteCalculatorResult> {
        self.check(&req)?;
        self.inner.update_route_calculator(req, self.options.clone()).await
    }

    /// Deletes a route calculator resource.
    pub async fn delete_route_calculator(
        &self,
        req: model::DeleteRouteCalculatorRequest,
    ) -> Result<model::DeleteRouteCalculatorResult> {
        self.check(&req)?;
        self.inner.delete_route_calculator(req, self.options.clone()).await
    }

    /// Lists the route calculator resources in the account.
    pub async fn list_route_calculators(
        &self,
        req: model::ListRouteCalculatorsRequest,
    ) -> Result<model::ListRouteCalculatorsResult> {
        self.check(&req)?;
        self.inner.list_route_calculators(req, self.options.clone()).await
    }

    /// Creates a tracker resource to store device positions.
    pub async fn create_tracker(
        &self,
        req: model::CreateTrackerRequest,
    ) -> Result<model::CreateTrackerResult> {
        self.check(&req)?;
        self.inner.create_tracker(req, self.options.clone()).await
    }

    /// Retrieves the details of a tracker resource.
    pub async fn describe_tracker(
        &self,
        req: model::DescribeTrackerRequest,
    ) -> Result<model::DescribeTrackerResult> {
        self.check(&req)?;
        self.inner.describe_tracker(req, self.options.clone()).await
    }

    /// Updates the properties of a tracker resource.
    pub async fn update_tracker(
        &self,
        req: model::UpdateTrackerRequest,
    ) -> Result<model::UpdateTrackerResult> {
        self.check(&req)?;
        self.inner.update_tracker(req, self.options.clone()).await
    }

    /// Deletes a tracker resource and its position history.
    ///
    /// The operation cannot be undone.
    pub async fn delete_tracker(
        &self,
        req: model::DeleteTrackerRequest,
    ) -> Result<model::DeleteTrackerResult> {
        self.check(&req)?;
        self.inner.delete_tracker(req, self.options.clone()).await
    }

    /// Lists the tracker resources in the account.
    ///
    /// Use the `next_token` in the result to fetch the next page.
    pub async fn list_trackers(
        &self,
        req: model::ListTrackersRequest,
    ) -> Result<model::ListTrackersResult> {
        self.check(&req)?;
        self.inner.list_trackers(req, self.options.clone()).await
    }

    /// Uploads position updates for one or more devices.
    ///
    /// The service may reject some of the updates, those are reported in
    /// [errors][crate::model::BatchUpdateDevicePositionResult::errors].
    ///
    /// # Example
    /// ```
    /// # use geosdk_location::client::Location;
    /// use geosdk_location::model::{BatchUpdateDevicePositionRequest, DevicePositionUpdate};
    /// use wkt::Timestamp;
    /// async fn sample(client: &Location) -> anyhow::Result<()> {
    ///     let update = DevicePositionUpdate::new()
    ///         .with_device_id("thing-123")
    ///         .with_position([-123.115, 49.285])
    ///         .with_sample_time(Timestamp::try_from("2025-05-16T09:46:12Z")?);
    ///     let response = client
    ///         .batch_update_device_position(
    ///             BatchUpdateDevicePositionRequest::new()
    ///                 .with_tracker_name("my-tracker")
    ///                 .with_updates([update]),
    ///         )
    ///         .await?;
    ///     for e in response.errors().into_iter().flatten() {
    ///         println!("rejected update: {e}");
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn batch_update_device_position(
        &self,
        req: model::BatchUpdateDevicePositionRequest,
    ) -> Result<model::BatchUpdateDevicePositionResult> {
        self.check(&req)?;
        self.inner.batch_update_device_position(req, self.options.clone()).await
    }

    /// Retrieves the latest position of a device.
    pub async fn get_device_position(
        &self,
        req: model::GetDevicePositionRequest,
    ) -> Result<model::GetDevicePositionResult> {
        self.check(&req)?;
        self.inner.get_device_position(req, self.options.clone()).await
    }

    /// Retrieves the latest position of up to 10 devices.
    pub async fn batch_get_device_position(
        &self,
        req: model::BatchGetDevicePositionRequest,
    ) -> Result<model::BatchGetDevicePositionResult> {
        self.check(&req)?;
        self.inner.batch_get_device_position(req, self.options.clone()).await
    }

    /// Retrieves the position history of a device.
    ///
    /// The service keeps the history for 30 days. Use the `next_token` in the
    /// result to fetch the next page.
    ///
    /// # Example
    /// ```
    /// # use geosdk_location::client::Location;
    /// use geosdk_location::model::GetDevicePositionHistoryRequest;
    /// async fn sample(client: &Location) -> anyhow::Result<()> {
    ///     let mut request = GetDevicePositionHistoryRequest::new()
    ///         .with_tracker_name("my-tracker")
    ///         .with_device_id("thing-123");
    ///     loop {
    ///         let response = client.get_device_position_history(request.clone()).await?;
    ///         for p in response.device_positions().into_iter().flatten() {
    ///             println!("{p}");
    ///         }
    ///         match response.next_token() {
    ///             Some(token) => request.set_next_token(token),
    ///             None => break,
    ///         }
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_device_position_history(
        &self,
        req: model::GetDevicePositionHistoryRequest,
    ) -> Result<model::GetDevicePositionHistoryResult> {
        self.check(&req)?;
        self.inner.get_device_position_history(req, self.options.clone()).await
    }

    /// Lists the latest position of each device in a tracker.
    pub async fn list_device_positions(
        &self,
        req: model::ListDevicePositionsRequest,
    ) -> Result<model::ListDevicePositionsResult> {
        self.check(&req)?;
        self.inner.list_device_positions(req, self.options.clone()).await
    }

    /// Deletes the position history of one or more devices.
    pub async fn batch_delete_device_position_history(
        &self,
        req: model::BatchDeleteDevicePositionHistoryRequest,
    ) -> Result<model::BatchDeleteDevicePositionHistoryResult> {
        self.check(&req)?;
        self.inner.batch_delete_device_position_history(req, self.options.clone()).await
    }

    /// Evaluates the positions sent to a tracker against a geofence collection.
    ///
    /// A tracker supports up to 5 consumers.
    pub async fn associate_tracker_consumer(
        &self,
        req: model::AssociateTrackerConsumerRequest,
    ) -> Result<model::AssociateTrackerConsumerResult> {
        self.check(&req)?;
        self.inner.associate_tracker_consumer(req, self.options.clone()).await
    }

    /// Stops evaluating a tracker against a geofence collection.
    pub async fn disassociate_tracker_consumer(
        &self,
        req: model::DisassociateTrackerConsumerRequest,
    ) -> Result<model::DisassociateTrackerConsumerResult> {
        self.check(&req)?;
        self.inner.disassociate_tracker_consumer(req, self.options.clone()).await
    }

    /// Lists the geofence collections associated with a tracker.
    pub async fn list_tracker_consumers(
        &self,
        req: model::ListTrackerConsumersRequest,
    ) -> Result<model::ListTrackerConsumersResult> {
        self.check(&req)?;
        self.inner.list_tracker_consumers(req, self.options.clone()).await
    }

    /// Creates a geofence collection.
    pub async fn create_geofence_collection(
        &self,
        req: model::CreateGeofenceCollectionRequest,
    ) -> Result<model::CreateGeofenceCollectionResult> {
        self.check(&req)?;
        self.inner.create_geofence_collection(req, self.options.clone()).await
    }

    /// Retrieves the details of a geofence collection.
    pub async fn describe_geofence_collection(
        &self,
        req: model::DescribeGeofenceCollectionRequest,
    ) -> Result<model::DescribeGeofenceCollectionResult> {
        self.check(&req)?;
        self.inner.describe_geofence_collection(req, self.options.clone()).await
    }

    /// Updates the properties of a geofence collection.
    pub async fn update_geofence_collection(
        &self,
        req: model::UpdateGeofenceCollectionRequest,
    ) -> Result<model::UpdateGeofenceCollectionResult> {
        self.check(&req)?;
        self.inner.update_geofence_collection(req, self.options.clone()).await
    }

    /// Deletes a geofence collection and all its geofences.
    ///
    /// The operation cannot be undone.
    pub async fn delete_geofence_collection(
        &self,
        req: model::DeleteGeofenceCollectionRequest,
    ) -> Result<model::DeleteGeofenceCollectionResult> {
        self.check(&req)?;
        self.inner.delete_geofence_collection(req, self.options.clone()).await
    }

    /// Lists the geofence collections in the account.
    pub async fn list_geofence_collections(
        &self,
        req: model::ListGeofenceCollectionsRequest,
    ) -> Result<model::ListGeofenceCollectionsResult> {
        self.check(&req)?;
        self.inner.list_geofence_collections(req, self.options.clone()).await
    }

    /// Stores a geofence, replacing any geofence with the same id.
    ///
    /// # Example
    /// ```
    /// # use geosdk_location::client::Location;
    /// use geosdk_location::model::{Circle, GeofenceGeometry, PutGeofenceRequest};
    /// async fn sample(client: &Location) -> anyhow::Result<()> {
    ///     let geometry = GeofenceGeometry::new().with_circle(
    ///         Circle::new()
    ///             .with_center([-122.342, 47.609])
    ///             .with_radius(250.0),
    ///     );
    ///     let response = client
    ///         .put_geofence(
    ///             PutGeofenceRequest::new()
    ///                 .with_collection_name("warehouses")
    ///                 .with_geofence_id("pike-place")
    ///                 .with_geometry(geometry),
    ///         )
    ///         .await?;
    ///     println!("{response}");
    ///     Ok(())
    /// }
    /// ```
    pub async fn put_geofence(
        &self,
        req: model::PutGeofenceRequest,
    ) -> Result<model::PutGeofenceResult> {
        self.check(&req)?;
        self.inner.put_geofence(req, self.options.clone()).await
    }

    /// Stores up to 10 geofences in a collection.
    ///
    /// The geofences the service rejects are reported in
    /// [errors][crate::model::BatchPutGeofenceResult::errors].
    pub async fn batch_put_geofence(
        &self,
        req: model::BatchPutGeofenceRequest,
    ) -> Result<model::BatchPutGeofenceResult> {
        self.check(&req)?;
        self.inner.batch_put_geofence(req, self.options.clone()).await
    }

    /// Retrieves a geofence.
    pub async fn get_geofence(
        &self,
        req: model::GetGeofenceRequest,
    ) -> Result<model::GetGeofenceResult> {
        self.check(&req)?;
        self.inner.get_geofence(req, self.options.clone()).await
    }

    /// Lists the geofences in a collection.
    pub async fn list_geofences(
        &self,
        req: model::ListGeofencesRequest,
    ) -> Result<model::ListGeofencesResult> {
        self.check(&req)?;
        self.inner.list_geofences(req, self.options.clone()).await
    }

    /// Deletes up to 10 geofences from a collection.
    pub async fn batch_delete_geofence(
        &self,
        req: model::BatchDeleteGeofenceRequest,
    ) -> Result<model::BatchDeleteGeofenceResult> {
        self.check(&req)?;
        self.inner.batch_delete_geofence(req, self.options.clone()).await
    }

    /// Evaluates device positions against the geofences in a collection.
    ///
    /// The service emits an event for each device entering or leaving a geofence.
    /// Unlike [batch_update_device_position][Location::batch_update_device_position]
    /// the positions are not stored.
    pub async fn batch_evaluate_geofences(
        &self,
        req: model::BatchEvaluateGeofencesRequest,
    ) -> Result<model::BatchEvaluateGeofencesResult> {
        self.check(&req)?;
        self.inner.batch_evaluate_geofences(req, self.options.clone()).await
    }

    /// Creates a map resource.
    pub async fn create_map(&self, req: model::CreateMapRequest) -> Result<model::CreateMapResult> {
        self.check(&req)?;
        self.inner.create_map(req, self.options.clone()).await
    }

    /// Retrieves the details of a map resource.
    pub async fn describe_map(
        &self,
        req: model::DescribeMapRequest,
    ) -> Result<model::DescribeMapResult> {
        self.check(&req)?;
        self.inner.describe_map(req, self.options.clone()).await
    }

    /// Updates the properties of a map resource.
    pub async fn update_map(&self, req: model::UpdateMapRequest) -> Result<model::UpdateMapResult> {
        self.check(&req)?;
        self.inner.update_map(req, self.options.clone()).await
    }

    /// Deletes a map resource.
    pub async fn delete_map(&self, req: model::DeleteMapRequest) -> Result<model::DeleteMapResult> {
        self.check(&req)?;
        self.inner.delete_map(req, self.options.clone()).await
    }

    /// Lists the map resources in the account.
    pub async fn list_maps(&self, req: model::ListMapsRequest) -> Result<model::ListMapsResult> {
        self.check(&req)?;
        self.inner.list_maps(req, self.options.clone()).await
    }

    /// Creates a place index resource.
    pub async fn create_place_index(
        &self,
        req: model::CreatePlaceIndexRequest,
    ) -> Result<model::CreatePlaceIndexResult> {
        self.check(&req)?;
        self.inner.create_place_index(req, self.options.clone()).await
    }

    /// Retrieves the details of a place index resource.
    pub async fn describe_place_index(
        &self,
        req: model::DescribePlaceIndexRequest,
    ) -> Result<model::DescribePlaceIndexResult> {
        self.check(&req)?;
        self.inner.describe_place_index(req, self.options.clone()).await
    }

    /// Updates the properties of a place index resource.
    pub async fn update_place_index(
        &self,
        req: model::UpdatePlaceIndexRequest,
    ) -> Result<model::UpdatePlaceIndexResult> {
        self.check(&req)?;
        self.inner.update_place_index(req, self.options.clone()).await
    }

    /// Deletes a place index resource.
    pub async fn delete_place_index(
        &self,
        req: model::DeletePlaceIndexRequest,
    ) -> Result<model::DeletePlaceIndexResult> {
        self.check(&req)?;
        self.inner.delete_place_index(req, self.options.clone()).await
    }

    /// Lists the place index resources in the account.
    pub async fn list_place_indexes(
        &self,
        req: model::ListPlaceIndexesRequest,
    ) -> Result<model::ListPlaceIndexesResult> {
        self.check(&req)?;
        self.inner.list_place_indexes(req, self.options.clone()).await
    }

    /// Geocodes free-form text, such as an address or a point of interest.
    ///
    /// # Example
    /// ```
    /// # use geosdk_location::client::Location;
    /// use geosdk_location::model::SearchPlaceIndexForTextRequest;
    /// async fn sample(client: &Location) -> anyhow::Result<()> {
    ///     let response = client
    ///         .search_place_index_for_text(
    ///             SearchPlaceIndexForTextRequest::new()
    ///                 .with_index_name("my-index")
    ///                 .with_text("Pike Place Market")
    ///                 .with_max_results(5),
    ///         )
    ///         .await?;
    ///     for r in response.results().into_iter().flatten() {
    ///         println!("{:?}", r.place().and_then(|p| p.label()));
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn search_place_index_for_text(
        &self,
        req: model::SearchPlaceIndexForTextRequest,
    ) -> Result<model::SearchPlaceIndexForTextResult> {
        self.check(&req)?;
        self.inner.search_place_index_for_text(req, self.options.clone()).await
    }

    /// Reverse geocodes a position into nearby places.
    pub async fn search_place_index_for_position(
        &self,
        req: model::SearchPlaceIndexForPositionRequest,
    ) -> Result<model::SearchPlaceIndexForPositionResult> {
        self.check(&req)?;
        self.inner.search_place_index_for_position(req, self.options.clone()).await
    }

    /// Assigns tags to a resource.
    pub async fn tag_resource(
        &self,
        req: model::TagResourceRequest,
    ) -> Result<model::TagResourceResult> {
        self.check(&req)?;
        self.inner.tag_resource(req, self.options.clone()).await
    }

    /// Removes tags from a resource.
    pub async fn untag_resource(
        &self,
        req: model::UntagResourceRequest,
    ) -> Result<model::UntagResourceResult> {
        self.check(&req)?;
        self.inner.untag_resource(req, self.options.clone()).await
    }

    /// Lists the tags of a resource.
    pub async fn list_tags_for_resource(
        &self,
        req: model::ListTagsForResourceRequest,
    ) -> Result<model::ListTagsForResourceResult> {
        self.check(&req)?;
        self.inner.list_tags_for_resource(req, self.options.clone()).await
    }
}
