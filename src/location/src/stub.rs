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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

use crate::Result;
use crate::model;
use gax::options::RequestOptions;
use std::future::Future;

pub(crate) mod dynamic;

/// Defines the trait used to implement [crate::client::Location].
///
/// Application developers may need to implement this trait to mock
/// `client::Location`. In other use-cases, application developers only
/// use `client::Location` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. These implementations panic.
pub trait Location: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::Location::calculate_route].
    fn calculate_route(
        &self,
        _req: model::CalculateRouteRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::CalculateRouteResult>> + Send {
        unimplemented_stub::<model::CalculateRouteResult>()
    }

    /// Implements [crate::client::Location::calculate_route_matrix].
    fn calculate_route_matrix(
        &self,
        _req: model::CalculateRouteMatrixRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::CalculateRouteMatrixResult>> + Send {
        unimplemented_stub::<model::CalculateRouteMatrixResult>()
    }

    /// Implements [crate::client::Location::create_route_calculator].
    fn create_route_calculator(
        &self,
        _req: model::CreateRouteCalculatorRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::CreateRouteCalculatorResult>> + Send {
        unimplemented_stub::<model::CreateRouteCalculatorResult>()
    }

    /// Implements [crate::client::Location::describe_route_calculator].
    fn describe_route_calculator(
        &self,
        _req: model::DescribeRouteCalculatorRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::DescribeRouteCalculatorResult>> + Send {
        unimplemented_stub::<model::DescribeRouteCalculatorResult>()
    }

    /// Implements [crate::client::Location::update_route_calculator].
    fn update_route_calculator(
        &self,
        _req: model::UpdateRouteCalculatorRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::UpdateRouteCalculatorResult>> + Send {
        unimplemented_stub::<model::UpdateRouteCalculatorResult>()
    }

    /// Implements [crate::client::Location::delete_route_calculator].
    fn delete_route_calculator(
        &self,
        _req: model::DeleteRouteCalculatorRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::DeleteRouteCalculatorResult>> + Send {
        unimplemented_stub::<model::DeleteRouteCalculatorResult>()
    }

    /// Implements [crate::client::Location::list_route_calculators].
    fn list_route_calculators(
        &self,
        _req: model::ListRouteCalculatorsRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::ListRouteCalculatorsResult>> + Send {
        unimplemented_stub::<model::ListRouteCalculatorsResult>()
    }

    /// Implements [crate::client::Location::create_tracker].
    fn create_tracker(
        &self,
        _req: model::CreateTrackerRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::CreateTrackerResult>> + Send {
        unimplemented_stub::<model::CreateTrackerResult>()
    }

    /// Implements [crate::client::Location::describe_tracker].
    fn describe_tracker(
        &self,
        _req: model::DescribeTrackerRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::DescribeTrackerResult>> + Send {
        unimplemented_stub::<model::DescribeTrackerResult>()
    }

    /// Implements [crate::client::Location::update_tracker].
    fn update_tracker(
        &self,
        _req: model::UpdateTrackerRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::UpdateTrackerResult>> + Send {
        unimplemented_stub::<model::UpdateTrackerResult>()
    }

    /// Implements [crate::client::Location::delete_tracker].
    fn delete_tracker(
        &self,
        _req: model::DeleteTrackerRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::DeleteTrackerResult>> + Send {
        unimplemented_stub::<model::DeleteTrackerResult>()
    }

    /// Implements [crate::client::Location::list_trackers].
    fn list_trackers(
        &self,
        _req: model::ListTrackersRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::ListTrackersResult>> + Send {
        unimplemented_stub::<model::ListTrackersResult>()
    }

    /// Implements [crate::client::Location::batch_update_device_position].
    fn batch_update_device_position(
        &self,
        _req: model::BatchUpdateDevicePositionRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::BatchUpdateDevicePositionResult>> + Send {
        unimplemented_stub::<model::BatchUpdateDevicePositionResult>()
    }

    /// Implements [crate::client::Location::get_device_position].
    fn get_device_position(
        &self,
        _req: model::GetDevicePositionRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::GetDevicePositionResult>> + Send {
        unimplemented_stub::<model::GetDevicePositionResult>()
    }

    /// Implements [crate::client::Location::batch_get_device_position].
    fn batch_get_device_position(
        &self,
        _req: model::BatchGetDevicePositionRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::BatchGetDevicePositionResult>> + Send {
        unimplemented_stub::<model::BatchGetDevicePositionResult>()
    }

    /// Implements [crate::client::Location::get_device_position_history].
    fn get_device_position_history(
        &self,
        _req: model::GetDevicePositionHistoryRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::GetDevicePositionHistoryResult>> + Send {
        unimplemented_stub::<model::GetDevicePositionHistoryResult>()
    }

    /// Implements [crate::client::Location::list_device_positions].
    fn list_device_positions(
        &self,
        _req: model::ListDevicePositionsRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::ListDevicePositionsResult>> + Send {
        unimplemented_stub::<model::ListDevicePositionsResult>()
    }

    /// Implements [crate::client::Location::batch_delete_device_position_history].
    fn batch_delete_device_position_history(
        &self,
        _req: model::BatchDeleteDevicePositionHistoryRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::BatchDeleteDevicePositionHistoryResult>> + Send {
        unimplemented_stub::<model::BatchDeleteDevicePositionHistoryResult>()
    }

    /// Implements [crate::client::Location::associate_tracker_consumer].
    fn associate_tracker_consumer(
        &self,
        _req: model::AssociateTrackerConsumerRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::AssociateTrackerConsumerResult>> + Send {
        unimplemented_stub::<model::AssociateTrackerConsumerResult>()
    }

    /// Implements [crate::client::Location::disassociate_tracker_consumer].
    fn disassociate_tracker_consumer(
        &self,
        _req: model::DisassociateTrackerConsumerRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::DisassociateTrackerConsumerResult>> + Send {
        unimplemented_stub::<model::DisassociateTrackerConsumerResult>()
    }

    /// Implements [crate::client::Location::list_tracker_consumers].
    fn list_tracker_consumers(
        &self,
        _req: model::ListTrackerConsumersRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::ListTrackerConsumersResult>> + Send {
        unimplemented_stub::<model::ListTrackerConsumersResult>()
    }

    /// Implements [crate::client::Location::create_geofence_collection].
    fn create_geofence_collection(
        &self,
        _req: model::CreateGeofenceCollectionRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::CreateGeofenceCollectionResult>> + Send {
        unimplemented_stub::<model::CreateGeofenceCollectionResult>()
    }

    /// Implements [crate::client::Location::describe_geofence_collection].
    fn describe_geofence_collection(
        &self,
        _req: model::DescribeGeofenceCollectionRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::DescribeGeofenceCollectionResult>> + Send {
        unimplemented_stub::<model::DescribeGeofenceCollectionResult>()
    }

    /// Implements [crate::client::Location::update_geofence_collection].
    fn update_geofence_collection(
        &self,
        _req: model::UpdateGeofenceCollectionRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::UpdateGeofenceCollectionResult>> + Send {
        unimplemented_stub::<model::UpdateGeofenceCollectionResult>()
    }

    /// Implements [crate::client::Location::delete_geofence_collection].
    fn delete_geofence_collection(
        &self,
        _req: model::DeleteGeofenceCollectionRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::DeleteGeofenceCollectionResult>> + Send {
        unimplemented_stub::<model::DeleteGeofenceCollectionResult>()
    }

    /// Implements [crate::client::Location::list_geofence_collections].
    fn list_geofence_collections(
        &self,
        _req: model::ListGeofenceCollectionsRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::ListGeofenceCollectionsResult>> + Send {
        unimplemented_stub::<model::ListGeofenceCollectionsResult>()
    }

    /// Implements [crate::client::Location::put_geofence].
    fn put_geofence(
        &self,
        _req: model::PutGeofenceRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::PutGeofenceResult>> + Send {
        unimplemented_stub::<model::PutGeofenceResult>()
    }

    /// Implements [crate::client::Location::batch_put_geofence].
    fn batch_put_geofence(
        &self,
        _req: model::BatchPutGeofenceRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::BatchPutGeofenceResult>> + Send {
        unimplemented_stub::<model::BatchPutGeofenceResult>()
    }

    /// Implements [crate::client::Location::get_geofence].
    fn get_geofence(
        &self,
        _req: model::GetGeofenceRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::GetGeofenceResult>> + Send {
        unimplemented_stub::<model::GetGeofenceResult>()
    }

    /// Implements [crate::client::Location::list_geofences].
    fn list_geofences(
        &self,
        _req: model::ListGeofencesRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::ListGeofencesResult>> + Send {
        unimplemented_stub::<model::ListGeofencesResult>()
    }

    /// Implements [crate::client::Location::batch_delete_geofence].
    fn batch_delete_geofence(
        &self,
        _req: model::BatchDeleteGeofenceRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::BatchDeleteGeofenceResult>> + Send {
        unimplemented_stub::<model::BatchDeleteGeofenceResult>()
    }

    /// Implements [crate::client::Location::batch_evaluate_geofences].
    fn batch_evaluate_geofences(
        &self,
        _req: model::BatchEvaluateGeofencesRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::BatchEvaluateGeofencesResult>> + Send {
        unimplemented_stub::<model::BatchEvaluateGeofencesResult>()
    }

    /// Implements [crate::client::Location::create_map].
    fn create_map(
        &self,
        _req: model::CreateMapRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::CreateMapResult>> + Send {
        unimplemented_stub::<model::CreateMapResult>()
    }

    /// Implements [crate::client::Location::describe_map].
    fn describe_map(
        &self,
        _req: model::DescribeMapRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::DescribeMapResult>> + Send {
        unimplemented_stub::<model::DescribeMapResult>()
    }

    /// Implements [crate::client::Location::update_map].
    fn update_map(
        &self,
        _req: model::UpdateMapRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::UpdateMapResult>> + Send {
        unimplemented_stub::<model::UpdateMapResult>()
    }

    /// Implements [crate::client::Location::delete_map].
    fn delete_map(
        &self,
        _req: model::DeleteMapRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::DeleteMapResult>> + Send {
        unimplemented_stub::<model::DeleteMapResult>()
    }

    /// Implements [crate::client::Location::list_maps].
    fn list_maps(
        &self,
        _req: model::ListMapsRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::ListMapsResult>> + Send {
        unimplemented_stub::<model::ListMapsResult>()
    }

    /// Implements [crate::client::Location::create_place_index].
    fn create_place_index(
        &self,
        _req: model::CreatePlaceIndexRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::CreatePlaceIndexResult>> + Send {
        unimplemented_stub::<model::CreatePlaceIndexResult>()
    }

    /// Implements [crate::client::Location::describe_place_index].
    fn describe_place_index(
        &self,
        _req: model::DescribePlaceIndexRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::DescribePlaceIndexResult>> + Send {
        unimplemented_stub::<model::DescribePlaceIndexResult>()
    }

    /// Implements [crate::client::Location::update_place_index].
    fn update_place_index(
        &self,
        _req: model::UpdatePlaceIndexRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::UpdatePlaceIndexResult>> + Send {
        unimplemented_stub::<model::UpdatePlaceIndexResult>()
    }

    /// Implements [crate::client::Location::delete_place_index].
    fn delete_place_index(
        &self,
        _req: model::DeletePlaceIndexRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::DeletePlaceIndexResult>> + Send {
        unimplemented_stub::<model::DeletePlaceIndexResult>()
    }

    /// Implements [crate::client::Location::list_place_indexes].
    fn list_place_indexes(
        &self,
        _req: model::ListPlaceIndexesRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::ListPlaceIndexesResult>> + Send {
        unimplemented_stub::<model::ListPlaceIndexesResult>()
    }

    /// Implements [crate::client::Location::search_place_index_for_text].
    fn search_place_index_for_text(
        &self,
        _req: model::SearchPlaceIndexForTextRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::SearchPlaceIndexForTextResult>> + Send {
        unimplemented_stub::<model::SearchPlaceIndexForTextResult>()
    }

    /// Implements [crate::client::Location::search_place_index_for_position].
    fn search_place_index_for_position(
        &self,
        _req: model::SearchPlaceIndexForPositionRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::SearchPlaceIndexForPositionResult>> + Send {
        unimplemented_stub::<model::SearchPlaceIndexForPositionResult>()
    }

    /// Implements [crate::client::Location::tag_resource].
    fn tag_resource(
        &self,
        _req: model::TagResourceRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::TagResourceResult>> + Send {
        unimplemented_stub::<model::TagResourceResult>()
    }

    /// Implements [crate::client::Location::untag_resource].
    fn untag_resource(
        &self,
        _req: model::UntagResourceRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::UntagResourceResult>> + Send {
        unimplemented_stub::<model::UntagResourceResult>()
    }

    /// Implements [crate::client::Location::list_tags_for_resource].
    fn list_tags_for_resource(
        &self,
        _req: model::ListTagsForResourceRequest,
        _options: RequestOptions,
    ) -> impl Future<Output = Result<model::ListTagsForResourceResult>> + Send {
        unimplemented_stub::<model::ListTagsForResourceResult>()
    }
}

async fn unimplemented_stub<T: Send>() -> gax::Result<T> {
    unimplemented!(concat!(
        "to prevent breaking changes as the service gains new operations, the ",
        "stub traits provide default implementations of each method. The ",
        "client library overrides all of them, so this panic should only ",
        "appear in test code mocking the client. If that is how you got here, ",
        "verify that you have mocked all the methods used in your test."
    ));
}
