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

use super::PricingPlan;
use super::validation::{
    country, description, list_max_results, next_token, required_name, resource_name, tags,
};
use gax::validation::{Validate, Validator};

wkt::value_object! {
    /// The style and political view of a map resource.
    pub struct MapConfiguration {
        /// Shows disputed borders from the point of view of this country.
        ///
        /// A three letter ISO 3166-1 alpha-3 code, such as `IND`.
        political_view: string,
        /// The map style, for example `VectorEsriStreets`.
        style: string,
    }
}

wkt::value_object! {
    /// The map configuration fields that can change after creation.
    pub struct MapConfigurationUpdate {
        political_view: string,
    }
}

wkt::value_object! {
    /// The request message for [create_map][crate::client::Location::create_map].
    pub struct CreateMapRequest {
        configuration: message(MapConfiguration),
        description: string,
        map_name: string,
        pricing_plan: enumeration(PricingPlan),
        tags: map(String),
    }
}

wkt::value_object! {
    /// The response message for [create_map][crate::client::Location::create_map].
    pub struct CreateMapResult {
        create_time: timestamp,
        map_arn: string,
        map_name: string,
    }
}

wkt::value_object! {
    /// The request message for [describe_map][crate::client::Location::describe_map].
    pub struct DescribeMapRequest {
        map_name: string,
    }
}

wkt::value_object! {
    /// The response message for [describe_map][crate::client::Location::describe_map].
    pub struct DescribeMapResult {
        configuration: message(MapConfiguration),
        create_time: timestamp,
        /// The data provider for the map tiles.
        data_source: string,
        description: string,
        map_arn: string,
        map_name: string,
        pricing_plan: enumeration(PricingPlan),
        tags: map(String),
        update_time: timestamp,
    }
}

wkt::value_object! {
    /// The request message for [update_map][crate::client::Location::update_map].
    pub struct UpdateMapRequest {
        configuration_update: message(MapConfigurationUpdate),
        description: string,
        map_name: string,
        pricing_plan: enumeration(PricingPlan),
    }
}

wkt::value_object! {
    /// The response message for [update_map][crate::client::Location::update_map].
    pub struct UpdateMapResult {
        map_arn: string,
        map_name: string,
        update_time: timestamp,
    }
}

wkt::value_object! {
    /// The request message for [delete_map][crate::client::Location::delete_map].
    pub struct DeleteMapRequest {
        map_name: string,
    }
}

wkt::value_object! {
    /// The response message for [delete_map][crate::client::Location::delete_map].
    pub struct DeleteMapResult {}
}

wkt::value_object! {
    /// The request message for [list_maps][crate::client::Location::list_maps].
    pub struct ListMapsRequest {
        max_results: scalar(i32),
        next_token: string,
    }
}

wkt::value_object! {
    pub struct ListMapsResponseEntry {
        create_time: timestamp,
        data_source: string,
        description: string,
        map_name: string,
        pricing_plan: enumeration(PricingPlan),
        update_time: timestamp,
    }
}

wkt::value_object! {
    /// The response message for [list_maps][crate::client::Location::list_maps].
    pub struct ListMapsResult {
        entries: list(ListMapsResponseEntry),
        next_token: string,
    }
}

impl Validate for MapConfiguration {
    fn validate_fields(&self, v: &mut Validator) {
        v.required("Style", self.style());
        resource_name(v, "Style", self.style());
        country(v, "PoliticalView", self.political_view());
    }
}

impl Validate for MapConfigurationUpdate {
    fn validate_fields(&self, v: &mut Validator) {
        country(v, "PoliticalView", self.political_view());
    }
}

impl Validate for CreateMapRequest {
    fn validate_fields(&self, v: &mut Validator) {
        v.required("Configuration", self.configuration())
            .nested("Configuration", self.configuration());
        description(v, self.description());
        required_name(v, "MapName", self.map_name());
        tags(v, "Tags", self.tags());
    }
}

impl Validate for DescribeMapRequest {
    fn validate_fields(&self, v: &mut Validator) {
        required_name(v, "MapName", self.map_name());
    }
}

impl Validate for UpdateMapRequest {
    fn validate_fields(&self, v: &mut Validator) {
        v.nested("ConfigurationUpdate", self.configuration_update());
        description(v, self.description());
        required_name(v, "MapName", self.map_name());
    }
}

impl Validate for DeleteMapRequest {
    fn validate_fields(&self, v: &mut Validator) {
        required_name(v, "MapName", self.map_name());
    }
}

impl Validate for ListMapsRequest {
    fn validate_fields(&self, v: &mut Validator) {
        list_max_results(v, self.max_results());
        next_token(v, self.next_token());
    }
}
