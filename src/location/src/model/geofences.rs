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
    description, identifiers, list_max_results, next_token, properties, required_identifier,
    required_name, tags,
};
use super::{BatchItemError, DevicePositionUpdate, PricingPlan};
use gax::validation::{Validate, Validator};

const MAX_BATCH_ENTRIES: usize = 10;
const MIN_RING_VERTICES: usize = 4;
const MAX_VERTICES: usize = 1000;

wkt::value_object! {
    /// The request message for
    /// [create_geofence_collection][crate::client::Location::create_geofence_collection].
    pub struct CreateGeofenceCollectionRequest {
        collection_name: string,
        description: string,
        kms_key_id: string,
        pricing_plan: enumeration(PricingPlan),
        pricing_plan_data_source: string,
        tags: map(String),
    }
}

wkt::value_object! {
    /// The response message for
    /// [create_geofence_collection][crate::client::Location::create_geofence_collection].
    pub struct CreateGeofenceCollectionResult {
        collection_arn: string,
        collection_name: string,
        create_time: timestamp,
    }
}

wkt::value_object! {
    /// The request message for
    /// [describe_geofence_collection][crate::client::Location::describe_geofence_collection].
    pub struct DescribeGeofenceCollectionRequest {
        collection_name: string,
    }
}

wkt::value_object! {
    /// The response message for
    /// [describe_geofence_collection][crate::client::Location::describe_geofence_collection].
    pub struct DescribeGeofenceCollectionResult {
        collection_arn: string,
        collection_name: string,
        create_time: timestamp,
        description: string,
        kms_key_id: string,
        pricing_plan: enumeration(PricingPlan),
        pricing_plan_data_source: string,
        tags: map(String),
        update_time: timestamp,
    }
}

wkt::value_object! {
    /// The request message for
    /// [update_geofence_collection][crate::client::Location::update_geofence_collection].
    pub struct UpdateGeofenceCollectionRequest {
        collection_name: string,
        description: string,
        pricing_plan: enumeration(PricingPlan),
        pricing_plan_data_source: string,
    }
}

wkt::value_object! {
    /// The response message for
    /// [update_geofence_collection][crate::client::Location::update_geofence_collection].
    pub struct UpdateGeofenceCollectionResult {
        collection_arn: string,
        collection_name: string,
        update_time: timestamp,
    }
}

wkt::value_object! {
    /// The request message for
    /// [delete_geofence_collection][crate::client::Location::delete_geofence_collection].
    ///
    /// Deleting a collection also deletes all its geofences.
    pub struct DeleteGeofenceCollectionRequest {
        collection_name: string,
    }
}

wkt::value_object! {
    /// The response message for
    /// [delete_geofence_collection][crate::client::Location::delete_geofence_collection].
    pub struct DeleteGeofenceCollectionResult {}
}

wkt::value_object! {
    /// The request message for
    /// [list_geofence_collections][crate::client::Location::list_geofence_collections].
    pub struct ListGeofenceCollectionsRequest {
        max_results: scalar(i32),
        next_token: string,
    }
}

wkt::value_object! {
    pub struct ListGeofenceCollectionsResponseEntry {
        collection_name: string,
        create_time: timestamp,
        description: string,
        pricing_plan: enumeration(PricingPlan),
        pricing_plan_data_source: string,
        update_time: timestamp,
    }
}

wkt::value_object! {
    /// The response message for
    /// [list_geofence_collections][crate::client::Location::list_geofence_collections].
    pub struct ListGeofenceCollectionsResult {
        entries: list(ListGeofenceCollectionsResponseEntry),
        next_token: string,
    }
}

wkt::value_object! {
    /// A circular geofence.
    pub struct Circle {
        /// The `[longitude, latitude]` of the center.
        center: list(f64),
        /// The radius in meters.
        radius: scalar(f64),
    }
}

wkt::value_object! {
    /// The shape of a geofence, either a circle or a polygon.
    ///
    /// # Example
    /// ```
    /// # use geosdk_location::model::GeofenceGeometry;
    /// use gax::validation::Validate;
    /// let triangle = GeofenceGeometry::new().with_polygon([vec![
    ///     vec![-5.716667, -15.933333],
    ///     vec![-14.416667, -7.933333],
    ///     vec![-12.316667, -37.066667],
    ///     vec![-5.716667, -15.933333],
    /// ]]);
    /// assert!(triangle.validate().is_ok());
    /// ```
    pub struct GeofenceGeometry {
        circle: message(Circle),
        /// A list of linear rings. The first ring is the exterior of the
        /// polygon, any other rings are holes.
        ///
        /// Each ring is a list of `[longitude, latitude]` vertices, where the
        /// last vertex repeats the first one.
        polygon: list(Vec<Vec<f64>>),
    }
}

wkt::value_object! {
    /// The request message for [put_geofence][crate::client::Location::put_geofence].
    ///
    /// Replaces the geofence if it already exists.
    pub struct PutGeofenceRequest {
        collection_name: string,
        geofence_id: string,
        /// Up to 3 application defined properties.
        geofence_properties: map(String),
        geometry: message(GeofenceGeometry),
    }
}

wkt::value_object! {
    /// The response message for [put_geofence][crate::client::Location::put_geofence].
    pub struct PutGeofenceResult {
        create_time: timestamp,
        geofence_id: string,
        update_time: timestamp,
    }
}

wkt::value_object! {
    pub struct BatchPutGeofenceRequestEntry {
        geofence_id: string,
        geofence_properties: map(String),
        geometry: message(GeofenceGeometry),
    }
}

wkt::value_object! {
    /// The request message for [batch_put_geofence][crate::client::Location::batch_put_geofence].
    pub struct BatchPutGeofenceRequest {
        collection_name: string,
        /// Between 1 and 10 geofences.
        entries: list(BatchPutGeofenceRequestEntry),
    }
}

wkt::value_object! {
    pub struct BatchPutGeofenceError {
        error: message(BatchItemError),
        geofence_id: string,
    }
}

wkt::value_object! {
    pub struct BatchPutGeofenceSuccess {
        create_time: timestamp,
        geofence_id: string,
        update_time: timestamp,
    }
}

wkt::value_object! {
    /// The response message for [batch_put_geofence][crate::client::Location::batch_put_geofence].
    pub struct BatchPutGeofenceResult {
        errors: list(BatchPutGeofenceError),
        successes: list(BatchPutGeofenceSuccess),
    }
}

wkt::value_object! {
    /// The request message for [get_geofence][crate::client::Location::get_geofence].
    pub struct GetGeofenceRequest {
        collection_name: string,
        geofence_id: string,
    }
}

wkt::value_object! {
    /// The response message for [get_geofence][crate::client::Location::get_geofence].
    pub struct GetGeofenceResult {
        create_time: timestamp,
        geofence_id: string,
        geofence_properties: map(String),
        geometry: message(GeofenceGeometry),
        /// One of `ACTIVE`, `PENDING`, `FAILED`, `DELETED`, or `DELETING`.
        status: string,
        update_time: timestamp,
    }
}

wkt::value_object! {
    /// The request message for [list_geofences][crate::client::Location::list_geofences].
    pub struct ListGeofencesRequest {
        collection_name: string,
        max_results: scalar(i32),
        next_token: string,
    }
}

wkt::value_object! {
    pub struct ListGeofenceResponseEntry {
        create_time: timestamp,
        geofence_id: string,
        geofence_properties: map(String),
        geometry: message(GeofenceGeometry),
        status: string,
        update_time: timestamp,
    }
}

wkt::value_object! {
    /// The response message for [list_geofences][crate::client::Location::list_geofences].
    pub struct ListGeofencesResult {
        entries: list(ListGeofenceResponseEntry),
        next_token: string,
    }
}

wkt::value_object! {
    /// The request message for
    /// [batch_delete_geofence][crate::client::Location::batch_delete_geofence].
    pub struct BatchDeleteGeofenceRequest {
        collection_name: string,
        /// Between 1 and 10 geofences.
        geofence_ids: list(String),
    }
}

wkt::value_object! {
    pub struct BatchDeleteGeofenceError {
        error: message(BatchItemError),
        geofence_id: string,
    }
}

wkt::value_object! {
    /// The response message for
    /// [batch_delete_geofence][crate::client::Location::batch_delete_geofence].
    pub struct BatchDeleteGeofenceResult {
        errors: list(BatchDeleteGeofenceError),
    }
}

wkt::value_object! {
    /// The request message for
    /// [batch_evaluate_geofences][crate::client::Location::batch_evaluate_geofences].
    ///
    /// The service compares each position with the geofences in the
    /// collection and emits enter and exit events.
    pub struct BatchEvaluateGeofencesRequest {
        collection_name: string,
        /// Between 1 and 10 position updates.
        device_position_updates: list(DevicePositionUpdate),
    }
}

wkt::value_object! {
    pub struct BatchEvaluateGeofencesError {
        device_id: string,
        error: message(BatchItemError),
        sample_time: timestamp,
    }
}

wkt::value_object! {
    /// The response message for
    /// [batch_evaluate_geofences][crate::client::Location::batch_evaluate_geofences].
    pub struct BatchEvaluateGeofencesResult {
        errors: list(BatchEvaluateGeofencesError),
    }
}

impl Validate for CreateGeofenceCollectionRequest {
    fn validate_fields(&self, v: &mut Validator) {
        required_name(v, "CollectionName", self.collection_name());
        description(v, self.description());
        v.length("KmsKeyId", self.kms_key_id(), 1, 2048);
        tags(v, "Tags", self.tags());
    }
}

impl Validate for DescribeGeofenceCollectionRequest {
    fn validate_fields(&self, v: &mut Validator) {
        required_name(v, "CollectionName", self.collection_name());
    }
}

impl Validate for UpdateGeofenceCollectionRequest {
    fn validate_fields(&self, v: &mut Validator) {
        required_name(v, "CollectionName", self.collection_name());
        description(v, self.description());
    }
}

impl Validate for DeleteGeofenceCollectionRequest {
    fn validate_fields(&self, v: &mut Validator) {
        required_name(v, "CollectionName", self.collection_name());
    }
}

impl Validate for ListGeofenceCollectionsRequest {
    fn validate_fields(&self, v: &mut Validator) {
        list_max_results(v, self.max_results());
        next_token(v, self.next_token());
    }
}

impl Validate for Circle {
    fn validate_fields(&self, v: &mut Validator) {
        v.required("Center", self.center())
            .position("Center", self.center())
            .required("Radius", self.radius())
            .minimum("Radius", self.radius(), 0.0);
    }
}

impl Validate for GeofenceGeometry {
    fn validate_fields(&self, v: &mut Validator) {
        match (self.circle(), self.polygon()) {
            (Some(_), Some(_)) => {
                v.violation("Circle", "cannot be combined with Polygon");
            }
            (None, None) => {
                v.violation("Polygon", "either Circle or Polygon is required");
            }
            _ => {}
        }
        v.nested("Circle", self.circle());
        let Some(rings) = self.polygon() else {
            return;
        };
        let vertices = rings.iter().map(Vec::len).sum();
        v.minimum("Polygon", Some(rings.len()), 1)
            .count("Polygon", Some(vertices), 0, MAX_VERTICES);
        for (i, ring) in rings.iter().enumerate() {
            let path = format!("Polygon[{i}]");
            v.minimum(&path, Some(ring.len()), MIN_RING_VERTICES)
                .positions(&path, Some(ring.as_slice()));
            if ring.len() >= MIN_RING_VERTICES && ring.first() != ring.last() {
                v.violation(&path, "the last vertex must repeat the first one");
            }
        }
    }
}

impl Validate for PutGeofenceRequest {
    fn validate_fields(&self, v: &mut Validator) {
        required_name(v, "CollectionName", self.collection_name());
        required_identifier(v, "GeofenceId", self.geofence_id());
        properties(v, "GeofenceProperties", self.geofence_properties());
        v.required("Geometry", self.geometry())
            .nested("Geometry", self.geometry());
    }
}

impl Validate for BatchPutGeofenceRequestEntry {
    fn validate_fields(&self, v: &mut Validator) {
        required_identifier(v, "GeofenceId", self.geofence_id());
        properties(v, "GeofenceProperties", self.geofence_properties());
        v.required("Geometry", self.geometry())
            .nested("Geometry", self.geometry());
    }
}

impl Validate for BatchPutGeofenceRequest {
    fn validate_fields(&self, v: &mut Validator) {
        required_name(v, "CollectionName", self.collection_name());
        v.required("Entries", self.entries())
            .count(
                "Entries",
                self.entries().map(<[_]>::len),
                1,
                MAX_BATCH_ENTRIES,
            )
            .each("Entries", self.entries());
    }
}

impl Validate for GetGeofenceRequest {
    fn validate_fields(&self, v: &mut Validator) {
        required_name(v, "CollectionName", self.collection_name());
        required_identifier(v, "GeofenceId", self.geofence_id());
    }
}

impl Validate for ListGeofencesRequest {
    fn validate_fields(&self, v: &mut Validator) {
        required_name(v, "CollectionName", self.collection_name());
        list_max_results(v, self.max_results());
        next_token(v, self.next_token());
    }
}

impl Validate for BatchDeleteGeofenceRequest {
    fn validate_fields(&self, v: &mut Validator) {
        required_name(v, "CollectionName", self.collection_name());
        identifiers(v, "GeofenceIds", self.geofence_ids(), MAX_BATCH_ENTRIES);
    }
}

impl Validate for BatchEvaluateGeofencesRequest {
    fn validate_fields(&self, v: &mut Validator) {
        let updates = self.device_position_updates();
        required_name(v, "CollectionName", self.collection_name());
        v.required("DevicePositionUpdates", updates)
            .count(
                "DevicePositionUpdates",
                updates.map(<[_]>::len),
                1,
                MAX_BATCH_ENTRIES,
            )
            .each("DevicePositionUpdates", updates);
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

    fn ring() -> Vec<Vec<f64>> {
        vec![
            vec![-122.35, 47.60],
            vec![-122.33, 47.60],
            vec![-122.33, 47.62],
            vec![-122.35, 47.62],
            vec![-122.35, 47.60],
        ]
    }

    fn circle() -> GeofenceGeometry {
        GeofenceGeometry::new().with_circle(
            Circle::new()
                .with_center([-122.342, 47.609])
                .with_radius(250.0),
        )
    }

    #[test]
    fn collection() {
        let input = CreateGeofenceCollectionRequest::new()
            .with_collection_name("warehouses")
            .with_kms_key_id("arn:aws:kms:us-east-1:123456789012:key/1234");
        assert_eq!(violations(&input), Vec::<String>::new());
        assert_eq!(
            violations(&CreateGeofenceCollectionRequest::new().with_kms_key_id("")),
            vec!["CollectionName", "KmsKeyId"]
        );
        assert_eq!(
            violations(&DescribeGeofenceCollectionRequest::new()),
            vec!["CollectionName"]
        );
        let input = UpdateGeofenceCollectionRequest::new().with_collection_name("Lagerhäuser");
        assert_eq!(violations(&input), vec!["CollectionName"]);
        assert_eq!(
            violations(&DeleteGeofenceCollectionRequest::new().with_collection_name("warehouses")),
            Vec::<String>::new()
        );
        assert_eq!(
            violations(&ListGeofenceCollectionsRequest::new().with_max_results(101)),
            vec!["MaxResults"]
        );
    }

    #[test]
    fn geometry_polygon() {
        let input = GeofenceGeometry::new().with_polygon([ring()]);
        assert_eq!(violations(&input), Vec::<String>::new());

        let mut hole = ring();
        hole.truncate(3);
        let input = GeofenceGeometry::new().with_polygon([ring(), hole]);
        assert_eq!(violations(&input), vec!["Polygon[1]"]);
    }

    #[test]
    fn geometry_open_ring() {
        let mut open = ring();
        open.pop();
        open.push(vec![-122.34, 47.61]);
        let input = GeofenceGeometry::new().with_polygon([open]);
        assert_eq!(violations(&input), vec!["Polygon[0]"]);
    }

    #[test]
    fn geometry_vertices() {
        let mut bad = ring();
        bad[2] = vec![-122.33, 97.0];
        let input = GeofenceGeometry::new().with_polygon([bad]);
        assert_eq!(violations(&input), vec!["Polygon[0][2]"]);

        let input = GeofenceGeometry::new().with_polygon(Vec::<Vec<Vec<f64>>>::new());
        assert_eq!(violations(&input), vec!["Polygon"]);

        let large = (0..1001_i32)
            .map(|i| vec![-122.0 - f64::from(i) / 10_000.0, 47.0])
            .collect::<Vec<_>>();
        let input = GeofenceGeometry::new().with_polygon([large]);
        assert!(violations(&input).contains(&"Polygon".to_string()));
    }

    #[test_case(circle(), vec![]; "circle")]
    #[test_case(GeofenceGeometry::new(), vec!["Polygon"]; "empty")]
    #[test_case(circle().with_polygon([ring()]), vec!["Circle"]; "both")]
    #[test_case(GeofenceGeometry::new().with_circle(Circle::new()), vec!["Circle.Center", "Circle.Radius"]; "empty circle")]
    #[test_case(GeofenceGeometry::new().with_circle(Circle::new().with_center([0.0, 0.0]).with_radius(-1.0)), vec!["Circle.Radius"]; "negative radius")]
    fn geometry(input: GeofenceGeometry, want: Vec<&str>) {
        assert_eq!(violations(&input), want);
    }

    #[test]
    fn put() {
        let input = PutGeofenceRequest::new()
            .with_collection_name("warehouses")
            .with_geofence_id("pike-place")
            .with_geofence_properties([("zone", "downtown")])
            .with_geometry(circle());
        assert_eq!(violations(&input), Vec::<String>::new());
        assert_eq!(
            violations(&PutGeofenceRequest::new()),
            vec!["CollectionName", "GeofenceId", "Geometry"]
        );
        let input = PutGeofenceRequest::new()
            .with_collection_name("warehouses")
            .with_geofence_id("pike place")
            .with_geometry(GeofenceGeometry::new());
        assert_eq!(violations(&input), vec!["GeofenceId", "Geometry.Polygon"]);
    }

    #[test]
    fn batch_put() {
        let entry = |id: &str| {
            BatchPutGeofenceRequestEntry::new()
                .with_geofence_id(id)
                .with_geometry(circle())
        };
        let input = BatchPutGeofenceRequest::new()
            .with_collection_name("warehouses")
            .with_entries([entry("a"), entry("b")]);
        assert_eq!(violations(&input), Vec::<String>::new());

        let input = BatchPutGeofenceRequest::new()
            .with_collection_name("warehouses")
            .with_entries([entry("a"), BatchPutGeofenceRequestEntry::new().with_geofence_id("b")]);
        assert_eq!(violations(&input), vec!["Entries[1].Geometry"]);

        let input = BatchPutGeofenceRequest::new()
            .with_collection_name("warehouses")
            .with_entries((0..11).map(|i| entry(&format!("g{i}"))));
        assert_eq!(violations(&input), vec!["Entries"]);
    }

    #[test]
    fn get_and_list() {
        assert_eq!(
            violations(&GetGeofenceRequest::new()),
            vec!["CollectionName", "GeofenceId"]
        );
        let input = ListGeofencesRequest::new()
            .with_collection_name("warehouses")
            .with_next_token("page-2");
        assert_eq!(violations(&input), Vec::<String>::new());
    }

    #[test]
    fn batch_delete() {
        let input = BatchDeleteGeofenceRequest::new()
            .with_collection_name("warehouses")
            .with_geofence_ids(["a", "b"]);
        assert_eq!(violations(&input), Vec::<String>::new());
        let input = BatchDeleteGeofenceRequest::new().with_collection_name("warehouses");
        assert_eq!(violations(&input), vec!["GeofenceIds"]);
    }

    #[test]
    fn batch_evaluate() -> anyhow::Result<()> {
        let update = DevicePositionUpdate::new()
            .with_device_id("thing-1")
            .with_position([-122.342, 47.609])
            .with_sample_time(Timestamp::try_from("2025-05-16T09:46:12Z")?);
        let input = BatchEvaluateGeofencesRequest::new()
            .with_collection_name("warehouses")
            .with_device_position_updates([update.clone()]);
        assert_eq!(violations(&input), Vec::<String>::new());

        let input = BatchEvaluateGeofencesRequest::new()
            .with_collection_name("warehouses")
            .with_device_position_updates([update, DevicePositionUpdate::new()]);
        assert_eq!(
            violations(&input),
            vec![
                "DevicePositionUpdates[1].DeviceId",
                "DevicePositionUpdates[1].Position",
                "DevicePositionUpdates[1].SampleTime",
            ]
        );
        Ok(())
    }

    #[test]
    fn get_from_wire() -> anyhow::Result<()> {
        let got = serde_json::from_value::<GetGeofenceResult>(serde_json::json!({
            "GeofenceId": "pike-place",
            "Geometry": {"Polygon": [ring()]},
            "Status": "ACTIVE"
        }))?;
        assert_eq!(got.status(), Some("ACTIVE"));
        let polygon = got.geometry().and_then(GeofenceGeometry::polygon);
        assert_eq!(polygon, Some(&[ring()][..]));
        Ok(())
    }
}
