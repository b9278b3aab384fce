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
use gax::options::RequestOptions;

/// Implements a [Location](super::stub::Location) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct Location<T>
where
    T: super::stub::Location + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> Location<T>
where
    T: super::stub::Location + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

impl<T> super::stub::Location for Location<T>
where
    T: super::stub::Location + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn calculate_route(
        &self,
        req: model::CalculateRouteRequest,
        options: RequestOptions,
    ) -> Result<model::CalculateRouteResult> {
        self.inner.calculate_route(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn calculate_route_matrix(
        &self,
        req: model::CalculateRouteMatrixRequest,
        options: RequestOptions,
    ) -> Result<model::CalculateRouteMatrixResult> {
        self.inner.calculate_route_matrix(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_route_calculator(
        &self,
        req: model::CreateRouteCalculatorRequest,
        options: RequestOptions,
    ) -> Result<model::CreateRouteCalculatorResult> {
        self.inner.create_route_calculator(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn describe_route_calculator(
        &self,
        req: model::DescribeRouteCalculatorRequest,
        options: RequestOptions,
    ) -> Result<model::DescribeRouteCalculatorResult> {
        self.inner.describe_route_calculator(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_route_calculator(
        &self,
        req: model::UpdateRouteCalculatorRequest,
        options: RequestOptions,
    ) -> Result<model::UpdateRouteCalculatorResult> {
        self.inner.update_route_calculator(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_route_calculator(
        &self,
        req: model::DeleteRouteCalculatorRequest,
        options: RequestOptions,
    ) -> Result<model::DeleteRouteCalculatorResult> {
        self.inner.delete_route_calculator(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_route_calculators(
        &self,
        req: model::ListRouteCalculatorsRequest,
        options: RequestOptions,
    ) -> Result<model::ListRouteCalculatorsResult> {
        self.inner.list_route_calculators(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_tracker(
        &self,
        req: model::CreateTrackerRequest,
        options: RequestOptions,
    ) -> Result<model::CreateTrackerResult> {
        self.inner.create_tracker(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn describe_tracker(
        &self,
        req: model::DescribeTrackerRequest,
        options: RequestOptions,
    ) -> Result<model::DescribeTrackerResult> {
        self.inner.describe_tracker(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_tracker(
        &self,
        req: model::UpdateTrackerRequest,
        options: RequestOptions,
    ) -> Result<model::UpdateTrackerResult> {
        self.inner.update_tracker(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_tracker(
        &self,
        req: model::DeleteTrackerRequest,
        options: RequestOptions,
    ) -> Result<model::DeleteTrackerResult> {
        self.inner.delete_tracker(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_trackers(
        &self,
        req: model::ListTrackersRequest,
        options: RequestOptions,
    ) -> Result<model::ListTrackersResult> {
        self.inner.list_trackers(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn batch_update_device_position(
        &self,
        req: model::BatchUpdateDevicePositionRequest,
        options: RequestOptions,
    ) -> Result<model::BatchUpdateDevicePositionResult> {
        self.inner.batch_update_device_position(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_device_position(
        &self,
        req: model::GetDevicePositionRequest,
        options: RequestOptions,
    ) -> Result<model::GetDevicePositionResult> {
        self.inner.get_device_position(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn batch_get_device_position(
        &self,
        req: model::BatchGetDevicePositionRequest,
        options: RequestOptions,
    ) -> Result<model::BatchGetDevicePositionResult> {
        self.inner.batch_get_device_position(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_device_position_history(
        &self,
        req: model::GetDevicePositionHistoryRequest,
        options: RequestOptions,
    ) -> Result<model::GetDevicePositionHistoryResult> {
        self.inner.get_device_position_history(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_device_positions(
        &self,
        req: model::ListDevicePositionsRequest,
        options: RequestOptions,
    ) -> Result<model::ListDevicePositionsResult> {
        self.inner.list_device_positions(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn batch_delete_device_position_history(
        &self,
        req: model::BatchDeleteDevicePositionHistoryRequest,
        options: RequestOptions,
    ) -> Result<model::BatchDeleteDevicePositionHistoryResult> {
        self.inner.batch_delete_device_position_history(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn associate_tracker_consumer(
        &self,
        req: model::AssociateTrackerConsumerRequest,
        options: RequestOptions,
    ) -> Result<model::AssociateTrackerConsumerResult> {
        self.inner.associate_tracker_consumer(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn disassociate_tracker_consumer(
        &self,
        req: model::DisassociateTrackerConsumerRequest,
        options: RequestOptions,
    ) -> Result<model::DisassociateTrackerConsumerResult> {
        self.inner.disassociate_tracker_consumer(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_tracker_consumers(
        &self,
        req: model::ListTrackerConsumersRequest,
        options: RequestOptions,
    ) -> Result<model::ListTrackerConsumersResult> {
        self.inner.list_tracker_consumers(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_geofence_collection(
        &self,
        req: model::CreateGeofenceCollectionRequest,
        options: RequestOptions,
    ) -> Result<model::CreateGeofenceCollectionResult> {
        self.inner.create_geofence_collection(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn describe_geofence_collection(
        &self,
        req: model::DescribeGeofenceCollectionRequest,
        options: RequestOptions,
    ) -> Result<model::DescribeGeofenceCollectionResult> {
        self.inner.describe_geofence_collection(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_geofence_collection(
        &self,
        req: model::UpdateGeofenceCollectionRequest,
        options: RequestOptions,
    ) -> Result<model::UpdateGeofenceCollectionResult> {
        self.inner.update_geofence_collection(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_geofence_collection(
        &self,
        req: model::DeleteGeofenceCollectionRequest,
        options: RequestOptions,
    ) -> Result<model::DeleteGeofenceCollectionResult> {
        self.inner.delete_geofence_collection(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_geofence_collections(
        &self,
        req: model::ListGeofenceCollectionsRequest,
        options: RequestOptions,
    ) -> Result<model::ListGeofenceCollectionsResult> {
        self.inner.list_geofence_collections(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn put_geofence(
        &self,
        req: model::PutGeofenceRequest,
        options: RequestOptions,
    ) -> Result<model::PutGeofenceResult> {
        self.inner.put_geofence(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn batch_put_geofence(
        &self,
        req: model::BatchPutGeofenceRequest,
        options: RequestOptions,
    ) -> Result<model::BatchPutGeofenceResult> {
        self.inner.batch_put_geofence(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_geofence(
        &self,
        req: model::GetGeofenceRequest,
        options: RequestOptions,
    ) -> Result<model::GetGeofenceResult> {
        self.inner.get_geofence(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_geofences(
        &self,
        req: model::ListGeofencesRequest,
        options: RequestOptions,
    ) -> Result<model::ListGeofencesResult> {
        self.inner.list_geofences(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn batch_delete_geofence(
        &self,
        req: model::BatchDeleteGeofenceRequest,
        options: RequestOptions,
    ) -> Result<model::BatchDeleteGeofenceResult> {
        self.inner.batch_delete_geofence(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn batch_evaluate_geofences(
        &self,
        req: model::BatchEvaluateGeofencesRequest,
        options: RequestOptions,
    ) -> Result<model::BatchEvaluateGeofencesResult> {
        self.inner.batch_evaluate_geofences(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_map(
        &self,
        req: model::CreateMapRequest,
        options: RequestOptions,
    ) -> Result<model::CreateMapResult> {
        self.inner.create_map(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn describe_map(
        &self,
        req: model::DescribeMapRequest,
        options: RequestOptions,
    ) -> Result<model::DescribeMapResult> {
        self.inner.describe_map(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_map(
        &self,
        req: model::UpdateMapRequest,
        options: RequestOptions,
    ) -> Result<model::UpdateMapResult> {
        self.inner.update_map(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_map(
        &self,
        req: model::DeleteMapRequest,
        options: RequestOptions,
    ) -> Result<model::DeleteMapResult> {
        self.inner.delete_map(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_maps(
        &self,
        req: model::ListMapsRequest,
        options: RequestOptions,
    ) -> Result<model::ListMapsResult> {
        self.inner.list_maps(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_place_index(
        &self,
        req: model::CreatePlaceIndexRequest,
        options: RequestOptions,
    ) -> Result<model::CreatePlaceIndexResult> {
        self.inner.create_place_index(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn describe_place_index(
        &self,
        req: model::DescribePlaceIndexRequest,
        options: RequestOptions,
    ) -> Result<model::DescribePlaceIndexResult> {
        self.inner.describe_place_index(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_place_index(
        &self,
        req: model::UpdatePlaceIndexRequest,
        options: RequestOptions,
    ) -> Result<model::UpdatePlaceIndexResult> {
        self.inner.update_place_index(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_place_index(
        &self,
        req: model::DeletePlaceIndexRequest,
        options: RequestOptions,
    ) -> Result<model::DeletePlaceIndexResult> {
        self.inner.delete_place_index(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_place_indexes(
        &self,
        req: model::ListPlaceIndexesRequest,
        options: RequestOptions,
    ) -> Result<model::ListPlaceIndexesResult> {
        self.inner.list_place_indexes(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn search_place_index_for_text(
        &self,
        req: model::SearchPlaceIndexForTextRequest,
        options: RequestOptions,
    ) -> Result<model::SearchPlaceIndexForTextResult> {
        self.inner.search_place_index_for_text(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn search_place_index_for_position(
        &self,
        req: model::SearchPlaceIndexForPositionRequest,
        options: RequestOptions,
    ) -> Result<model::SearchPlaceIndexForPositionResult> {
        self.inner.search_place_index_for_position(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn tag_resource(
        &self,
        req: model::TagResourceRequest,
        options: RequestOptions,
    ) -> Result<model::TagResourceResult> {
        self.inner.tag_resource(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn untag_resource(
        &self,
        req: model::UntagResourceRequest,
        options: RequestOptions,
    ) -> Result<model::UntagResourceResult> {
        self.inner.untag_resource(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_tags_for_resource(
        &self,
        req: model::ListTagsForResourceRequest,
        options: RequestOptions,
    ) -> Result<model::ListTagsForResourceResult> {
        self.inner.list_tags_for_resource(req, options).await
    }
}
