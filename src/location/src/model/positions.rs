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
    identifiers, list_max_results, next_token, required_identifier, required_name,
};
use super::{BatchItemError, PositionalAccuracy};
use gax::validation::{Validate, Validator};

const MAX_BATCH_GET: usize = 10;
const MAX_BATCH_DELETE: usize = 100;

wkt::value_object! {
    /// A device position stored by a tracker.
    pub struct DevicePosition {
        accuracy: message(PositionalAccuracy),
        device_id: string,
        /// The position as `[longitude, latitude]`.
        position: list(f64),
        position_properties: map(String),
        received_time: timestamp,
        sample_time: timestamp,
    }
}

wkt::value_object! {
    /// The request message for
    /// [batch_get_device_position][crate::client::Location::batch_get_device_position].
    pub struct BatchGetDevicePositionRequest {
        /// Between 1 and 10 devices.
        device_ids: list(String),
        tracker_name: string,
    }
}

wkt::value_object! {
    pub struct BatchGetDevicePositionError {
        device_id: string,
        error: message(BatchItemError),
    }
}

wkt::value_object! {
    /// The response message for
    /// [batch_get_device_position][crate::client::Location::batch_get_device_position].
    pub struct BatchGetDevicePositionResult {
        /// The latest position of each device found.
        device_positions: list(DevicePosition),
        errors: list(BatchGetDevicePositionError),
    }
}

wkt::value_object! {
    /// The request message for
    /// [get_device_position_history][crate::client::Location::get_device_position_history].
    ///
    /// # Example
    /// ```
    /// # use geosdk_location::model::GetDevicePositionHistoryRequest;
    /// # use wkt::Timestamp;
    /// let request = GetDevicePositionHistoryRequest::new()
    ///     .with_tracker_name("my-tracker")
    ///     .with_device_id("thing-1")
    ///     .with_start_time_inclusive(Timestamp::try_from("2025-05-16T00:00:00Z")?)
    ///     .with_end_time_exclusive(Timestamp::try_from("2025-05-17T00:00:00Z")?);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub struct GetDevicePositionHistoryRequest {
        device_id: string,
        /// Must be after `start_time_inclusive`. The service uses the current
        /// time when unset.
        end_time_exclusive: timestamp,
        max_results: scalar(i32),
        next_token: string,
        /// The service returns positions from the last 24 hours when unset.
        start_time_inclusive: timestamp,
        tracker_name: string,
    }
}

wkt::value_object! {
    /// The response message for
    /// [get_device_position_history][crate::client::Location::get_device_position_history].
    pub struct GetDevicePositionHistoryResult {
        /// The positions, oldest first.
        device_positions: list(DevicePosition),
        next_token: string,
    }
}

wkt::value_object! {
    /// The request message for
    /// [list_device_positions][crate::client::Location::list_device_positions].
    pub struct ListDevicePositionsRequest {
        max_results: scalar(i32),
        next_token: string,
        tracker_name: string,
    }
}

wkt::value_object! {
    pub struct ListDevicePositionsResponseEntry {
        accuracy: message(PositionalAccuracy),
        device_id: string,
        position: list(f64),
        position_properties: map(String),
        sample_time: timestamp,
    }
}

wkt::value_object! {
    /// The response message for
    /// [list_device_positions][crate::client::Location::list_device_positions].
    pub struct ListDevicePositionsResult {
        /// The latest position of each device in the tracker.
        entries: list(ListDevicePositionsResponseEntry),
        next_token: string,
    }
}

wkt::value_object! {
    /// The request message for
    /// [batch_delete_device_position_history][crate::client::Location::batch_delete_device_position_history].
    pub struct BatchDeleteDevicePositionHistoryRequest {
        /// Between 1 and 100 devices.
        device_ids: list(String),
        tracker_name: string,
    }
}

wkt::value_object! {
    pub struct BatchDeleteDevicePositionHistoryError {
        device_id: string,
        error: message(BatchItemError),
    }
}

wkt::value_object! {
    /// The response message for
    /// [batch_delete_device_position_history][crate::client::Location::batch_delete_device_position_history].
    pub struct BatchDeleteDevicePositionHistoryResult {
        errors: list(BatchDeleteDevicePositionHistoryError),
    }
}

impl Validate for BatchGetDevicePositionRequest {
    fn validate_fields(&self, v: &mut Validator) {
        identifiers(v, "DeviceIds", self.device_ids(), MAX_BATCH_GET);
        required_name(v, "TrackerName", self.tracker_name());
    }
}

impl Validate for GetDevicePositionHistoryRequest {
    fn validate_fields(&self, v: &mut Validator) {
        required_identifier(v, "DeviceId", self.device_id());
        let start = self.start_time_inclusive();
        let end = self.end_time_exclusive();
        if start.is_some() && end.is_some() && start >= end {
            v.violation("EndTimeExclusive", "must be after StartTimeInclusive");
        }
        list_max_results(v, self.max_results());
        next_token(v, self.next_token());
        required_name(v, "TrackerName", self.tracker_name());
    }
}

impl Validate for ListDevicePositionsRequest {
    fn validate_fields(&self, v: &mut Validator) {
        list_max_results(v, self.max_results());
        next_token(v, self.next_token());
        required_name(v, "TrackerName", self.tracker_name());
    }
}

impl Validate for BatchDeleteDevicePositionHistoryRequest {
    fn validate_fields(&self, v: &mut Validator) {
        identifiers(v, "DeviceIds", self.device_ids(), MAX_BATCH_DELETE);
        required_name(v, "TrackerName", self.tracker_name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;
    use wkt::Timestamp;

    fn violations<T: Validate>(input: &T) -> Vec<String> {
        input
            .validate()
            .err()
            .map(|e| {
                e.violations()
                    .iter()
                    .map(|v| v.field().to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn history() -> GetDevicePositionHistoryRequest {
        GetDevicePositionHistoryRequest::new()
            .with_tracker_name("my-tracker")
            .with_device_id("thing-1")
    }

    #[test]
    fn batch_get() {
        let input = BatchGetDevicePositionRequest::new()
            .with_tracker_name("my-tracker")
            .with_device_ids(["thing-1", "thing-2"]);
        assert_eq!(violations(&input), Vec::<String>::new());
        assert_eq!(
            violations(&BatchGetDevicePositionRequest::new()),
            vec!["DeviceIds", "TrackerName"]
        );

        let ids = (0..11).map(|i| format!("thing-{i}"));
        let input = BatchGetDevicePositionRequest::new()
            .with_tracker_name("my-tracker")
            .with_device_ids(ids);
        assert_eq!(violations(&input), vec!["DeviceIds"]);
    }

    #[test]
    fn batch_delete() {
        let ids = (0..100).map(|i| format!("thing-{i}"));
        let input = BatchDeleteDevicePositionHistoryRequest::new()
            .with_tracker_name("my-tracker")
            .with_device_ids(ids);
        assert_eq!(violations(&input), Vec::<String>::new());

        let input = BatchDeleteDevicePositionHistoryRequest::new()
            .with_tracker_name("my-tracker")
            .with_device_ids(["thing-1", "bad id"]);
        assert_eq!(violations(&input), vec!["DeviceIds[1]"]);
    }

    #[test_case("2025-05-16T00:00:00Z", "2025-05-17T00:00:00Z", true; "ordered")]
    #[test_case("2025-05-17T00:00:00Z", "2025-05-17T00:00:00Z", false; "empty range")]
    #[test_case("2025-05-18T00:00:00Z", "2025-05-17T00:00:00Z", false; "reversed")]
    fn history_time_range(start: &str, end: &str, ok: bool) -> anyhow::Result<()> {
        let input = history()
            .with_start_time_inclusive(Timestamp::try_from(start)?)
            .with_end_time_exclusive(Timestamp::try_from(end)?);
        let got = violations(&input);
        assert_eq!(got.is_empty(), ok, "{got:?}");
        if !ok {
            assert_eq!(got, vec!["EndTimeExclusive"]);
        }
        Ok(())
    }

    #[test]
    fn history_required() {
        assert_eq!(violations(&history()), Vec::<String>::new());
        assert_eq!(
            violations(&GetDevicePositionHistoryRequest::new().with_max_results(0)),
            vec!["DeviceId", "MaxResults", "TrackerName"]
        );
    }

    #[test]
    fn list() {
        let input = ListDevicePositionsRequest::new().with_tracker_name("my-tracker");
        assert_eq!(violations(&input), Vec::<String>::new());
        let input = ListDevicePositionsRequest::new()
            .with_max_results(101)
            .with_tracker_name("my tracker");
        assert_eq!(violations(&input), vec!["MaxResults", "TrackerName"]);
    }

    #[test]
    fn history_from_wire() -> anyhow::Result<()> {
        let got = serde_json::from_value::<GetDevicePositionHistoryResult>(serde_json::json!({
            "DevicePositions": [{
                "DeviceId": "thing-1",
                "Position": [-123.115, 49.285],
                "ReceivedTime": "2025-05-16T09:46:13Z",
                "SampleTime": "2025-05-16T09:46:12Z"
            }],
            "NextToken": "page-2"
        }))?;
        assert_eq!(got.next_token(), Some("page-2"));
        let positions = got.device_positions().unwrap_or_default();
        assert_eq!(positions.len(), 1);
        assert_eq!(positions[0].position(), Some(&[-123.115, 49.285][..]));
        assert_eq!(
            positions[0].sample_time(),
            Some(Timestamp::try_from("2025-05-16T09:46:12Z")?)
        );
        Ok(())
    }
}
