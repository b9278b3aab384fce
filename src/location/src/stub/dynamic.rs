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

/// A dyn-compatible, crate-private version of [super::Location].
#[async_trait::async_trait]
pub trait Location: std::fmt::Debug + Send + Sync {
    async fn calculate_route(
        &self,
        req: model::CalculateRouteRequest,
        options: RequestOptions,
    ) -> Result<model::CalculateRouteResult>;

    async fn calculate_route_matrix(
        &self,
        req: model::CalculateRouteMatrixRequest,
        options: RequestOptions,
    ) -> Result<model::CalculateRouteMatrixResult>;

    async fn create_route_calculator(
        &self,
        req: model::CreateRouteCalculatorRequest,
        options: RequestOptions,
    ) -> Result<model::CreateRouteCalculatorResult>;

    async fn describe_route_calculator(
        &self,
        req: model::DescribeRouteCalculatorRequest,
        options: RequestOptions,
    ) -> Result<model::DescribeRouteCalculatorResult>;

    async fn update_route_calculator(
        &self,
        req: model::UpdateRouteCalculatorRequest,
        options: RequestOptions,
    ) -> Result<model::UpdateRouteCalculatorResult>;

    async fn delete_route_calculator(
        &self,
        req: model::DeleteRouteCalculatorRequest,
        options: RequestOptions,
    ) -> Result<model::DeleteRouteCalculatorResult>;

    async fn list_route_calculators(
        &self,
        req: model::ListRouteCalculatorsRequest,
        options: RequestOptions,
    ) -> Result<model::ListRouteCalculatorsResult>;

    async fn create_tracker(
        &self,
        req: model::CreateTrackerRequest,
        options: RequestOptions,
    ) -> Result<model::CreateTrackerResult>;

    async fn describe_tracker(
        &self,
        req: model::DescribeTrackerRequest,
        options: RequestOptions,
    ) -> Result<model::DescribeTrackerResult>;

    async fn update_tracker(
        &self,
        req: model::UpdateTrackerRequest,
        options: RequestOptions,
    ) -> Result<model::UpdateTrackerResult>;

    async fn delete_tracker(
        &self,
        req: model::DeleteTrackerRequest,
        options: RequestOptions,
    ) -> Result<model::DeleteTrackerResult>;

    async fn list_trackers(
        &self,
        req: model::ListTrackersRequest,
        options: RequestOptions,
    ) -> Result<model::ListTrackersResult>;

    async fn batch_update_device_position(
        &self,
        req: model::BatchUpdateDevicePositionRequest,
        options: RequestOptions,
    ) -> Result<model::BatchUpdateDevicePositionResult>;

    async fn get_device_position(
        &self,
        req: model::GetDevicePositionRequest,
        options: RequestOptions,
    ) -> Result<model::GetDevicePositionResult>;

    async fn batch_get_device_position(
        &self,
        req: model::BatchGetDevicePositionRequest,
        options: RequestOptions,
    ) -> Result<model::BatchGetDevicePositionResult>;

    async fn get_device_position_history(
        &self,
        req: model::GetDevicePositionHistoryRequest,
        options: RequestOptions,
    ) -> Result<model::GetDevicePositionHistoryResult>;

    async fn list_device_positions(
        &self,
        req: model::ListDevicePositionsRequest,
        options: RequestOptions,
    ) -> Result<model::ListDevicePositionsResult>;

    async fn batch_delete_device_position_history(
        &self,
        req: model::BatchDeleteDevicePositionHistoryRequest,
        options: RequestOptions,
    ) -> Result<model::BatchDeleteDevicePositionHistoryResult>;

    async fn associate_tracker_consumer(
        &self,
        req: model::AssociateTrackerConsumerRequest,
        options: RequestOptions,
    ) -> Result<model::AssociateTrackerConsumerResult>;

    async fn disassociate_tracker_consumer(
        &self,
        req: model::DisassociateTrackerConsumerRequest,
        options: RequestOptions,
    ) -> Result<model::DisassociateTrackerConsumerResult>;

    async fn list_tracker_consumers(
        &self,
        req: model::ListTrackerConsumersRequest,
        options: RequestOptions,
    ) -> Result<model::ListTrackerConsumersResult>;

    async fn create_geofence_collection(
        &self,
        req: model::CreateGeofenceCollectionRequest,
        options: RequestOptions,
    ) -> Result<model::CreateGeofenceCollectionResult>;

    async fn describe_geofence_collection(
        &self,
        req: model::DescribeGeofenceCollectionRequest,
        options: RequestOptions,
    ) -> Result<model::DescribeGeofenceCollectionResult>;

    async fn update_geofence_collection(
        &self,
        req: model::UpdateGeofenceCollectionRequest,
        options: RequestOptions,
    ) -> Result<model::UpdateGeofenceCollectionResult>;

    async fn delete_geofence_collection(
        &self,
        req: model::DeleteGeofenceCollectionRequest,
        options: RequestOptions,
    ) -> Result<model::DeleteGeofenceCollectionResult>;

    async fn list_geofence_collections(
        &self,
        req: model::ListGeofenceCollectionsRequest,
        options: RequestOptions,
    ) -> Result<model::ListGeofenceCollectionsResult>;

    async fn put_geofence(
        &self,
        req: model::PutGeofenceRequest,
        options: RequestOptions,
    ) -> Result<model::PutGeofenceResult>;

    async fn batch_put_geofence(
        &self,
        req: model::BatchPutGeofenceRequest,
        options: RequestOptions,
    ) -> Result<model::BatchPutGeofenceResult>;

    async fn get_geofence(
        &self,
        req: model::GetGeofenceRequest,
        options: RequestOptions,
    ) -> Result<model::GetGeofenceResult>;

    async fn list_geofences(
        &self,
        req: model::ListGeofencesRequest,
        options: RequestOptions,
    ) -> Result<model::ListGeofencesResult>;

    async fn batch_delete_geofence(
        &self,
        req: model::BatchDeleteGeofenceRequest,
        options: RequestOptions,
    ) -> Result<model::BatchDeleteGeofenceResult>;

    async fn batch_evaluate_geofences(
        &self,
        req: model::BatchEvaluateGeofencesRequest,
        options: RequestOptions,
    ) -> Result<model::BatchEvaluateGeofencesResult>;

    async fn create_map(
        &self,
        req: model::CreateMapRequest,
        options: RequestOptions,
    ) -> Result<model::CreateMapResult>;

    async fn describe_map(
        &self,
        req: model::DescribeMapRequest,
        options: RequestOptions,
    ) -> Result<model::DescribeMapResult>;

    async fn update_map(
        &self,
        req: model::UpdateMapRequest,
        options: RequestOptions,
    ) -> Result<model::UpdateMapResult>;

    async fn delete_map(
        &self,
        req: model::DeleteMapRequest,
        options: RequestOptions,
    ) -> Result<model::DeleteMapResult>;

    async fn list_maps(
        &self,
        req: model::ListMapsRequest,
        options: RequestOptions,
    ) -> Result<model::ListMapsResult>;

    async fn create_place_index(
        &self,
        req: model::CreatePlaceIndexRequest,
        options: RequestOptions,
    ) -> Result<model::CreatePlaceIndexResult>;

    async fn describe_place_index(
        &self,
        req: model::DescribePlaceIndexRequest,
        options: RequestOptions,
    ) -> Result<model::DescribePlaceIndexResult>;

    async fn update_place_index(
        &self,
        req: model::UpdatePlaceIndexRequest,
        options: RequestOptions,
    ) -> Result<model::UpdatePlaceIndexResult>;

    async fn delete_place_index(
        &self,
        req: model::DeletePlaceIndexRequest,
        options: RequestOptions,
    ) -> Result<model::DeletePlaceIndexResult>;

    async fn list_place_indexes(
        &self,
        req: model::ListPlaceIndexesRequest,
        options: RequestOptions,
    ) -> Result<model::ListPlaceIndexesResult>;

    async fn search_place_index_for_text(
        &self,
        req: model::SearchPlaceIndexForTextRequest,
        options: RequestOptions,
    ) -> Result<model::SearchPlaceIndexForTextResult>;

    async fn search_place_index_for_position(
        &self,
        req: model::SearchPlaceIndexForPositionRequest,
        options: RequestOptions,
    ) -> Result<model::SearchPlaceIndexForPositionResult>;

    async fn tag_resource(
        &self,
        req: model::TagResourceRequest,
        options: RequestOptions,
    ) -> Result<model::TagResourceResult>;

    async fn untag_resource(
        &self,
        req: model::UntagResourceRequest,
        options: RequestOptions,
    ) -> Result<model::UntagResourceResult>;

    async fn list_tags_for_resource(
        &self,
        req: model::ListTagsForResourceRequest,
        options: RequestOptions,
    ) -> Result<model::ListTagsForResourceResult>;
}

/// All implementations of [super::Location] also implement [Location].
#[async_trait::async_trait]
impl<T: super::Location> Location for T {
    async fn calculate_route(
        &self,
        req: model::CalculateRouteRequest,
        options: RequestOptions,
    ) -> Result<model::CalculateRouteResult> {
        T::calculate_route(self, req, options).await
    }

    async fn calculate_route_matrix(
        &self,
        req: model::CalculateRouteMatrixRequest,
        options: RequestOptions,
    ) -> Result<model::CalculateRouteMatrixResult> {
        T::calculate_route_matrix(self, req, options).await
    }

    async fn create_route_calculator(
        &self,
        req: model::CreateRouteCalculatorRequest,
        options: RequestOptions,
    ) -> Result<model::CreateRouteCalculatorResult> {
        T::create_route_calculator(self, req, options).await
    }

    async fn describe_route_calculator(
        &self,
        req: model::DescribeRouteCalculatorRequest,
        options: RequestOptions,
    ) -> Result<model::DescribeRouteCalculatorResult> {
        T::describe_route_calculator(self, req, options).await
    }

    async fn update_route_calculator(
        &self,
        req: model::UpdateRouteCalculatorRequest,
        options: RequestOptions,
    ) -> Result<model::UpdateRouteCalculatorResult> {
        T::update_route_calculator(self, req, options).await
    }

    async fn delete_route_calculator(
        &self,
        req: model::DeleteRouteCalculatorRequest,
        options: RequestOptions,
    ) -> Result<model::DeleteRouteCalculatorResult> {
        T::delete_route_calculator(self, req, options).await
    }

    async fn list_route_calculators(
        &self,
        req: model::ListRouteCalculatorsRequest,
        options: RequestOptions,
    ) -> Result<model::ListRouteCalculatorsResult> {
        T::list_route_calculators(self, req, options).await
    }

    async fn create_tracker(
        &self,
        req: model::CreateTrackerRequest,
        options: RequestOptions,
    ) -> Result<model::CreateTrackerResult> {
        T::create_tracker(self, req, options).await
    }

    async fn describe_tracker(
        &self,
        req: model::DescribeTrackerRequest,
        options: RequestOptions,
    ) -> Result<model::DescribeTrackerResult> {
        T::describe_tracker(self, req, options).await
    }

    async fn update_tracker(
        &self,
        req: model::UpdateTrackerRequest,
        options: RequestOptions,
    ) -> Result<model::UpdateTrackerResult> {
        T::update_tracker(self, req, options).await
    }

    async fn delete_tracker(
        &self,
        req: model::DeleteTrackerRequest,
        options: RequestOptions,
    ) -> Result<model::DeleteTrackerResult> {
        T::delete_tracker(self, req, options).await
    }

    async fn list_trackers(
        &self,
        req: model::ListTrackersRequest,
        options: RequestOptions,
    ) -> Result<model::ListTrackersResult> {
        T::list_trackers(self, req, options).await
    }

    async fn batch_update_device_position(
        &self,
        req: model::BatchUpdateDevicePositionRequest,
        options: RequestOptions,
    ) -> Result<model::BatchUpdateDevicePositionResult> {
        T::batch_update_device_position(self, req, options).await
    }

    async fn get_device_position(
        &self,
        req: model::GetDevicePositionRequest,
        options: RequestOptions,
    ) -> Result<model::GetDevicePositionResult> {
        T::get_device_position(self, req, options).await
    }

    async fn batch_get_device_position(
        &self,
        req: model::BatchGetDevicePositionRequest,
        options: RequestOptions,
    ) -> Result<model::BatchGetDevicePositionResult> {
        T::batch_get_device_position(self, req, options).await
    }

    async fn get_device_position_history(
        &self,
        req: model::GetDevicePositionHistoryRequest,
        options: RequestOptions,
    ) -> Result<model::GetDevicePositionHistoryResult> {
        T::get_device_position_history(self, req, options).await
    }

    async fn list_device_positions(
        &self,
        req: model::ListDevicePositionsRequest,
        options: RequestOptions,
    ) -> Result<model::ListDevicePositionsResult> {
        T::list_device_positions(self, req, options).await
    }

    async fn batch_delete_device_position_history(
        &self,
        req: model::BatchDeleteDevicePositionHistoryRequest,
        options: RequestOptions,
    ) -> Result<model::BatchDeleteDevicePositionHistoryResult> {
        T::batch_delete_device_position_history(self, req, options).await
    }

    async fn associate_tracker_consumer(
        &self,
        req: model::AssociateTrackerConsumerRequest,
        options: RequestOptions,
    ) -> Result<model::AssociateTrackerConsumerResult> {
        T::associate_tracker_consumer(self, req, options).await
    }

    async fn disassociate_tracker_consumer(
        &self,
        req: model::DisassociateTrackerConsumerRequest,
        options: RequestOptions,
    ) -> Result<model::DisassociateTrackerConsumerResult> {
        T::disassociate_tracker_consumer(self, req, options).await
    }

    async fn list_tracker_consumers(
        &self,
        req: model::ListTrackerConsumersRequest,
        options: RequestOptions,
    ) -> Result<model::ListTrackerConsumersResult> {
        T::list_tracker_consumers(self, req, options).await
    }

    async fn create_geofence_collection(
        &self,
        req: model::CreateGeofenceCollectionRequest,
        options: RequestOptions,
    ) -> Result<model::CreateGeofenceCollectionResult> {
        T::create_geofence_collection(self, req, options).await
    }

    async fn describe_geofence_collection(
        &self,
        req: model::DescribeGeofenceCollectionRequest,
        options: RequestOptions,
    ) -> Result<model::DescribeGeofenceCollectionResult> {
        T::describe_geofence_collection(self, req, options).await
    }

    async fn update_geofence_collection(
        &self,
        req: model::UpdateGeofenceCollectionRequest,
        options: RequestOptions,
    ) -> Result<model::UpdateGeofenceCollectionResult> {
        T::update_geofence_collection(self, req, options).await
    }

    async fn delete_geofence_collection(
        &self,
        req: model::DeleteGeofenceCollectionRequest,
        options: RequestOptions,
    ) -> Result<model::DeleteGeofenceCollectionResult> {
        T::delete_geofence_collection(self, req, options).await
    }

    async fn list_geofence_collections(
        &self,
        req: model::ListGeofenceCollectionsRequest,
        options: RequestOptions,
    ) -> Result<model::ListGeofenceCollectionsResult> {
        T::list_geofence_collections(self, req, options).await
    }

    async fn put_geofence(
        &self,
        req: model::PutGeofenceRequest,
        options: RequestOptions,
    ) -> Result<model::PutGeofenceResult> {
        T::put_geofence(self, req, options).await
    }

    async fn batch_put_geofence(
        &self,
        req: model::BatchPutGeofenceRequest,
        options: RequestOptions,
    ) -> Result<model::BatchPutGeofenceResult> {
        T::batch_put_geofence(self, req, options).await
    }

    async fn get_geofence(
        &self,
        req: model::GetGeofenceRequest,
        options: RequestOptions,
    ) -> Result<model::GetGeofenceResult> {
        T::get_geofence(self, req, options).await
    }

    async fn list_geofences(
        &self,
        req: model::ListGeofencesRequest,
        options: RequestOptions,
    ) -> Result<model::ListGeofencesResult> {
        T::list_geofences(self, req, options).await
    }

    async fn batch_delete_geofence(
        &self,
        req: model::BatchDeleteGeofenceRequest,
        options: RequestOptions,
    ) -> Result<model::BatchDeleteGeofenceResult> {
        T::batch_delete_geofence(self, req, options).await
    }

    async fn batch_evaluate_geofences(
        &self,
        req: model::BatchEvaluateGeofencesRequest,
        options: RequestOptions,
    ) -> Result<model::BatchEvaluateGeofencesResult> {
        T::batch_evaluate_geofences(self, req, options).await
    }

    async fn create_map(
        &self,
        req: model::CreateMapRequest,
        options: RequestOptions,
    ) -> Result<model::CreateMapResult> {
        T::create_map(self, req, options).await
    }

    async fn describe_map(
        &self,
        req: model::DescribeMapRequest,
        options: RequestOptions,
    ) -> Result<model::DescribeMapResult> {
        T::describe_map(self, req, options).await
    }

    async fn update_map(
        &self,
        req: model::UpdateMapRequest,
        options: RequestOptions,
    ) -> Result<model::UpdateMapResult> {
        T::update_map(self, req, options).await
    }

    async fn delete_map(
        &self,
        req: model::DeleteMapRequest,
        options: RequestOptions,
    ) -> Result<model::DeleteMapResult> {
        T::delete_map(self, req, options).await
    }

    async fn list_maps(
        &self,
        req: model::ListMapsRequest,
        options: RequestOptions,
    ) -> Result<model::ListMapsResult> {
        T::list_maps(self, req, options).await
    }

    async fn create_place_index(
        &self,
        req: model::CreatePlaceIndexRequest,
        options: RequestOptions,
    ) -> Result<model::CreatePlaceIndexResult> {
        T::create_place_index(self, req, options).await
    }

    async fn describe_place_index(
        &self,
        req: model::DescribePlaceIndexRequest,
        options: RequestOptions,
    ) -> Result<model::DescribePlaceIndexResult> {
        T::describe_place_index(self, req, options).await
    }

    async fn update_place_index(
        &self,
        req: model::UpdatePlaceIndexRequest,
        options: RequestOptions,
    ) -> Result<model::UpdatePlaceIndexResult> {
        T::update_place_index(self, req, options).await
    }

    async fn delete_place_index(
        &self,
        req: model::DeletePlaceIndexRequest,
        options: RequestOptions,
    ) -> Result<model::DeletePlaceIndexResult> {
        T::delete_place_index(self, req, options).await
    }

    async fn list_place_indexes(
        &self,
        req: model::ListPlaceIndexesRequest,
        options: RequestOptions,
    ) -> Result<model::ListPlaceIndexesResult> {
        T::list_place_indexes(self, req, options).await
    }

    async fn search_place_index_for_text(
        &self,
        req: model::SearchPlaceIndexForTextRequest,
        options: RequestOptions,
    ) -> Result<model::SearchPlaceIndexForTextResult> {
        T::search_place_index_for_text(self, req, options).await
    }

    async fn search_place_index_for_position(
        &self,
        req: model::SearchPlaceIndexForPositionRequest,
        options: RequestOptions,
    ) -> Result<model::SearchPlaceIndexForPositionResult> {
        T::search_place_index_for_position(self, req, options).await
    }

    async fn tag_resource(
        &self,
        req: model::TagResourceRequest,
        options: RequestOptions,
    ) -> Result<model::TagResourceResult> {
        T::tag_resource(self, req, options).await
    }

    async fn untag_resource(
        &self,
        req: model::UntagResourceRequest,
        options: RequestOptions,
    ) -> Result<model::UntagResourceResult> {
        T::untag_resource(self, req, options).await
    }

    async fn list_tags_for_resource(
        &self,
        req: model::ListTagsForResourceRequest,
        options: RequestOptions,
    ) -> Result<model::ListTagsForResourceResult> {
        T::list_tags_for_resource(self, req, options).await
    }
}
