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

use super::validation::{description, list_max_results, next_token, required_name, tags};
use super::{IntendedUse, PricingPlan};
use gax::validation::{Validate, Validator};

wkt::value_object! {
    /// How the results of a place index are used.
    pub struct DataSourceConfiguration {
        /// The service uses `SingleUse` when unset.
        intended_use: enumeration(IntendedUse),
    }
}

wkt::value_object! {
    /// The request message for [create_place_index][crate::client::Location::create_place_index].
    ///
    /// # Example
    /// ```
    /// # use geosdk_location::model::*;
    /// let request = CreatePlaceIndexRequest::new()
    ///     .with_index_name("my-index")
    ///     .with_data_source("Here")
    ///     .with_data_source_configuration(
    ///         DataSourceConfiguration::new().with_intended_use(IntendedUse::Storage),
    ///     );
    /// ```
    pub struct CreatePlaceIndexRequest {
        /// The geospatial data provider, such as `Esri`, `Grab`, or `Here`.
        data_source: string,
        data_source_configuration: message(DataSourceConfiguration),
        description: string,
        index_name: string,
        pricing_plan: enumeration(PricingPlan),
        tags: map(String),
    }
}

wkt::value_object! {
    /// The response message for [create_place_index][crate::client::Location::create_place_index].
    pub struct CreatePlaceIndexResult {
        create_time: timestamp,
        index_arn: string,
        index_name: string,
    }
}

wkt::value_object! {
    /// The request message for
    /// [describe_place_index][crate::client::Location::describe_place_index].
    pub struct DescribePlaceIndexRequest {
        index_name: string,
    }
}

wkt::value_object! {
    /// The response message for
    /// [describe_place_index][crate::client::Location::describe_place_index].
    pub struct DescribePlaceIndexResult {
        create_time: timestamp,
        data_source: string,
        data_source_configuration: message(DataSourceConfiguration),
        description: string,
        index_arn: string,
        index_name: string,
        pricing_plan: enumeration(PricingPlan),
        tags: map(String),
        update_time: timestamp,
    }
}

wkt::value_object! {
    /// The request message for [update_place_index][crate::client::Location::update_place_index].
    ///
    /// The data provider cannot change after creation.
    pub struct UpdatePlaceIndexRequest {
        data_source_configuration: message(DataSourceConfiguration),
        description: string,
        index_name: string,
        pricing_plan: enumeration(PricingPlan),
    }
}

wkt::value_object! {
    /// The response message for [update_place_index][crate::client::Location::update_place_index].
    pub struct UpdatePlaceIndexResult {
        index_arn: string,
        index_name: string,
        update_time: timestamp,
    }
}

wkt::value_object! {
    /// The request message for [delete_place_index][crate::client::Location::delete_place_index].
    pub struct DeletePlaceIndexRequest {
        index_name: string,
    }
}

wkt::value_object! {
    /// The response message for [delete_place_index][crate::client::Location::delete_place_index].
    pub struct DeletePlaceIndexResult {}
}

wkt::value_object! {
    /// The request message for [list_place_indexes][crate::client::Location::list_place_indexes].
    pub struct ListPlaceIndexesRequest {
        max_results: scalar(i32),
        next_token: string,
    }
}

wkt::value_object! {
    pub struct ListPlaceIndexesResponseEntry {
        create_time: timestamp,
        data_source: string,
        description: string,
        index_name: string,
        pricing_plan: enumeration(PricingPlan),
        update_time: timestamp,
    }
}

wkt::value_object! {
    /// The response message for [list_place_indexes][crate::client::Location::list_place_indexes].
    pub struct ListPlaceIndexesResult {
        entries: list(ListPlaceIndexesResponseEntry),
        next_token: string,
    }
}

impl Validate for CreatePlaceIndexRequest {
    fn validate_fields(&self, v: &mut Validator) {
        v.required("DataSource", self.data_source());
        description(v, self.description());
        required_name(v, "IndexName", self.index_name());
        tags(v, "Tags", self.tags());
    }
}

impl Validate for DescribePlaceIndexRequest {
    fn validate_fields(&self, v: &mut Validator) {
        required_name(v, "IndexName", self.index_name());
    }
}

impl Validate for UpdatePlaceIndexRequest {
    fn validate_fields(&self, v: &mut Validator) {
        description(v, self.description());
        required_name(v, "IndexName", self.index_name());
    }
}

impl Validate for DeletePlaceIndexRequest {
    fn validate_fields(&self, v: &mut Validator) {
        required_name(v, "IndexName", self.index_name());
    }
}

impl Validate for ListPlaceIndexesRequest {
    fn validate_fields(&self, v: &mut Validator) {
        list_max_results(v, self.max_results());
        next_token(v, self.next_token());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

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

    #[test]
    fn create() {
        let input = CreatePlaceIndexRequest::new()
            .with_index_name("my-index")
            .with_data_source("Esri")
            .with_tags([("env", "prod")]);
        assert_eq!(violations(&input), Vec::<String>::new());

        let input = CreatePlaceIndexRequest::new()
            .with_index_name("my index")
            .with_description("d".repeat(1001));
        assert_eq!(
            violations(&input),
            vec!["DataSource", "Description", "IndexName"]
        );
    }

    #[test]
    fn index_name_required() {
        assert_eq!(violations(&DescribePlaceIndexRequest::new()), vec!["IndexName"]);
        assert_eq!(violations(&UpdatePlaceIndexRequest::new()), vec!["IndexName"]);
        assert_eq!(violations(&DeletePlaceIndexRequest::new()), vec!["IndexName"]);
        assert_eq!(
            violations(&DeletePlaceIndexRequest::new().with_index_name("my-index")),
            Vec::<String>::new()
        );
    }

    #[test]
    fn update() -> anyhow::Result<()> {
        let input = UpdatePlaceIndexRequest::new()
            .with_index_name("my-index")
            .with_data_source_configuration(
                DataSourceConfiguration::new().with_intended_use(IntendedUse::SingleUse),
            );
        assert_eq!(violations(&input), Vec::<String>::new());
        assert_eq!(
            serde_json::to_value(&input)?,
            serde_json::json!({
                "DataSourceConfiguration": {"IntendedUse": "SingleUse"},
                "IndexName": "my-index"
            })
        );
        Ok(())
    }

    #[test]
    fn list() {
        assert_eq!(
            violations(&ListPlaceIndexesRequest::new().with_max_results(0)),
            vec!["MaxResults"]
        );
    }
}
