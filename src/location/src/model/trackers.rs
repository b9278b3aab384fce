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

use super::validation::{
    description, list_max_results, next_token, properties, required_identifier, required_name,
    resource_arn, tags,
};
use super::{BatchItemErrorCode, PositionFiltering, PricingPlan};
use gax::validation::{Validate, Validator};

const MAX_UPDATES: usize = 10;

wkt::value_object! {
    /// The request message for [create_tracker][crate::client::Location::create_tracker].
    pub struct CreateTrackerRequest {
        /// An optional description, up to 1000 characters.
        description: string,
        /// A customer managed key to encrypt the tracker data.
        kms_key_id: string,
        position_filtering: enumeration(PositionFiltering),
        pricing_plan: enumeration(PricingPlan),
        pricing_plan_data_source: string,
        /// Up to 50 tags for the new tracker.
        tags: map(String),
        /// The name of the new tracker.
        ///
        /// Between 1 and 100 characters, using letters, numbers, `-`, `.`,
        /// and `_`.
        tracker_name: string,
    }
}

wkt::value_object! {
    /// The response message for [create_tracker][crate::client::Location::create_tracker].
    pub struct CreateTrackerResult {
        create_time: timestamp,
        tracker_arn: string,
        tracker_name: string,
    }
}

wkt::value_object! {
    /// The request message for [describe_tracker][crate::client::Location::describe_tracker].
    pub struct DescribeTrackerRequest {
        tracker_name: string,
    }
}

wkt::value_object! {
    /// The response message for [describe_tracker][crate::client::Location::describe_tracker].
    pub struct DescribeTrackerResult {
        create_time: timestamp,
        description: string,
        kms_key_id: string,
        position_filtering: enumeration(PositionFiltering),
        pricing_plan: enumeration(PricingPlan),
        pricing_plan_data_source: string,
        tags: map(String),
        tracker_arn: string,
        tracker_name: string,
        update_time: timestamp,
    }
}

wkt::value_object! {
    /// The request message for [update_tracker][crate::client::Location::update_tracker].
    ///
    /// Only the fields that are set change.
    pub struct UpdateTrackerRequest {
        description: string,
        position_filtering: enumeration(PositionFiltering),
        pricing_plan: enumeration(PricingPlan),
        pricing_plan_data_source: string,
        tracker_name: string,
    }
}

wkt::value_object! {
    /// The response message for [update_tracker][crate::client::Location::update_tracker].
    pub struct UpdateTrackerResult {
        tracker_arn: string,
        tracker_name: string,
        update_time: timestamp,
    }
}

wkt::value_object! {
    /// The request message for [delete_tracker][crate::client::Location::delete_tracker].
    pub struct DeleteTrackerRequest {
        tracker_name: string,
    }
}

wkt::value_object! {
    /// The response message for [delete_tracker][crate::client::Location::delete_tracker].
    pub struct DeleteTrackerResult {}
}

wkt::value_object! {
    /// The request message for [list_trackers][crate::client::Location::list_trackers].
    pub struct ListTrackersRequest {
        /// The maximum number of entries in the response, between 1 and 100.
        max_results: scalar(i32),
        /// The `next_token` from a previous response.
        next_token: string,
    }
}

wkt::value_object! {
    pub struct ListTrackersResponseEntry {
        create_time: timestamp,
        description: string,
        pricing_plan: enumeration(PricingPlan),
        pricing_plan_data_source: string,
        tracker_name: string,
        update_time: timestamp,
    }
}

wkt::value_object! {
    /// The response message for [list_trackers][crate::client::Location::list_trackers].
    pub struct ListTrackersResult {
        entries: list(ListTrackersResponseEntry),
        /// Set if there are more entries to list.
        next_token: string,
    }
}

wkt::value_object! {
    /// The accuracy of a device position.
    pub struct PositionalAccuracy {
        /// The horizontal accuracy in meters.
        horizontal: scalar(f64),
    }
}

wkt::value_object! {
    /// A single device position reported to a tracker.
    pub struct DevicePositionUpdate {
        accuracy: message(PositionalAccuracy),
        /// The device that reported the position.
        device_id: string,
        /// The position as `[longitude, latitude]`.
        position: list(f64),
        /// Up to 3 application defined properties.
        position_properties: map(String),
        /// When the device measured the position.
        sample_time: timestamp,
    }
}

wkt::value_object! {
    /// The request message for
    /// [batch_update_device_position][crate::client::Location::batch_update_device_position].
    pub struct BatchUpdateDevicePositionRequest {
        tracker_name: string,
        /// Between 1 and 10 position updates.
        updates: list(DevicePositionUpdate),
    }
}

wkt::value_object! {
    /// The error for a single item in a batch operation.
    pub struct BatchItemError {
        code: enumeration(BatchItemErrorCode),
        message: string,
    }
}

wkt::value_object! {
    /// A position update rejected by the service.
    pub struct BatchUpdateDevicePositionError {
        device_id: string,
        error: message(BatchItemError),
        sample_time: timestamp,
    }
}

wkt::value_object! {
    /// The response message for
    /// [batch_update_device_position][crate::client::Location::batch_update_device_position].
    ///
    /// The service accepts the updates not listed in `errors`.
    pub struct BatchUpdateDevicePositionResult {
        errors: list(BatchUpdateDevicePositionError),
    }
}

wkt::value_object! {
    /// The request message for [get_device_position][crate::client::Location::get_device_position].
    pub struct GetDevicePositionRequest {
        device_id: string,
        tracker_name: string,
    }
}

wkt::value_object! {
    /// The response message for [get_device_position][crate::client::Location::get_device_position].
    pub struct GetDevicePositionResult {
        accuracy: message(PositionalAccuracy),
        device_id: string,
        position: list(f64),
        position_properties: map(String),
        /// When the service received the position.
        received_time: timestamp,
        sample_time: timestamp,
    }
}

wkt::value_object! {
    /// The request message for
    /// [associate_tracker_consumer][crate::client::Location::associate_tracker_consumer].
    ///
    /// Position updates to the tracker are evaluated against the geofences in
    /// the consumer collection.
    pub struct AssociateTrackerConsumerRequest {
        /// The geofence collection that consumes the tracker updates.
        consumer_arn: string,
        tracker_name: string,
    }
}

wkt::value_object! {
    /// The response message for
    /// [associate_tracker_consumer][crate::client::Location::associate_tracker_consumer].
    pub struct AssociateTrackerConsumerResult {}
}

wkt::value_object! {
    /// The request message for
    /// [disassociate_tracker_consumer][crate::client::Location::disassociate_tracker_consumer].
    pub struct DisassociateTrackerConsumerRequest {
        consumer_arn: string,
        tracker_name: string,
    }
}

wkt::value_object! {
    /// The response message for
    /// [disassociate_tracker_consumer][crate::client::Location::disassociate_tracker_consumer].
    pub struct DisassociateTrackerConsumerResult {}
}

wkt::value_object! {
    /// The request message for
    /// [list_tracker_consumers][crate::client::Location::list_tracker_consumers].
    pub struct ListTrackerConsumersRequest {
        max_results: scalar(i32),
        next_token: string,
        tracker_name: string,
    }
}

wkt::value_object! {
    /// The response message for
    /// [list_tracker_consumers][crate::client::Location::list_tracker_consumers].
    pub struct ListTrackerConsumersResult {
        consumer_arns: list(String),
        next_token: string,
    }
}

impl Validate for CreateTrackerRequest {
    fn validate_fields(&self, v: &mut Validator) {
        required_name(v, "TrackerName", self.tracker_name());
        description(v, self.description());
        v.length("KmsKeyId", self.kms_key_id(), 1, 2048);
        tags(v, "Tags", self.tags());
    }
}

impl Validate for DescribeTrackerRequest {
    fn validate_fields(&self, v: &mut Validator) {
        required_name(v, "TrackerName", self.tracker_name());
    }
}

impl Validate for UpdateTrackerRequest {
    fn validate_fields(&self, v: &mut Validator) {
        required_name(v, "TrackerName", self.tracker_name());
        description(v, self.description());
    }
}

impl Validate for DeleteTrackerRequest {
    fn validate_fields(&self, v: &mut Validator) {
        required_name(v, "TrackerName", self.tracker_name());
    }
}

impl Validate for ListTrackersRequest {
    fn validate_fields(&self, v: &mut Validator) {
        list_max_results(v, self.max_results());
        next_token(v, self.next_token());
    }
}

impl Validate for PositionalAccuracy {
    fn validate_fields(&self, v: &mut Validator) {
        v.required("Horizontal", self.horizontal())
            .range("Horizontal", self.horizontal(), 0.0, 10_000_000.0);
    }
}

impl Validate for DevicePositionUpdate {
    fn validate_fields(&self, v: &mut Validator) {
        required_identifier(v, "DeviceId", self.device_id());
        v.required("Position", self.position())
            .position("Position", self.position())
            .required("SampleTime", self.sample_time())
            .nested("Accuracy", self.accuracy());
        properties(v, "PositionProperties", self.position_properties());
    }
}

impl Validate for BatchUpdateDevicePositionRequest {
    fn validate_fields(&self, v: &mut Validator) {
        required_name(v, "TrackerName", self.tracker_name());
        v.required("Updates", self.updates())
            .count("Updates", self.updates().map(<[_]>::len), 1, MAX_UPDATES)
            .each("Updates", self.updates());
    }
}

impl Validate for GetDevicePositionRequest {
    fn validate_fields(&self, v: &mut Validator) {
        required_identifier(v, "DeviceId", self.device_id());
        required_name(v, "TrackerName", self.tracker_name());
    }
}

impl Validate for AssociateTrackerConsumerRequest {
    fn validate_fields(&self, v: &mut Validator) {
        resource_arn(v, "ConsumerArn", self.consumer_arn());
        required_name(v, "TrackerName", self.tracker_name());
    }
}

impl Validate for DisassociateTrackerConsumerRequest {
    fn validate_fields(&self, v: &mut Validator) {
        resource_arn(v, "ConsumerArn", self.consumer_arn());
        required_name(v, "TrackerName", self.tracker_name());
    }
}

impl Validate for ListTrackerConsumersRequest {
    fn validate_fields(&self, v: &mut Validator) {
        list_max_results(v, self.max_results());
        next_token(v, self.next_token());
        required_name(v, "TrackerName", self.tracker_name());
    }
}
