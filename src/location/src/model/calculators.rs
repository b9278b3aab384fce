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
use super::validation::{description, list_max_results, next_token, required_name, tags};
use gax::validation::{Validate, Validator};

wkt::value_object! {
    /// The request message for
    /// [create_route_calculator][crate::client::Location::create_route_calculator].
    pub struct CreateRouteCalculatorRequest {
        calculator_name: string,
        /// The road network provider, such as `Esri`, `Grab`, or `Here`.
        data_source: string,
        description: string,
        pricing_plan: enumeration(PricingPlan),
        tags: map(String),
    }
}

wkt::value_object! {
    /// The response message for
    /// [create_route_calculator][crate::client::Location::create_route_calculator].
    pub struct CreateRouteCalculatorResult {
        calculator_arn: string,
        calculator_name: string,
        create_time: timestamp,
    }
}

wkt::value_object! {
    /// The request message for
    /// [describe_route_calculator][crate::client::Location::describe_route_calculator].
    pub struct DescribeRouteCalculatorRequest {
        calculator_name: string,
    }
}

wkt::value_object! {
    /// The response message for
    /// [describe_route_calculator][crate::client::Location::describe_route_calculator].
    pub struct DescribeRouteCalculatorResult {
        calculator_arn: string,
        calculator_name: string,
        create_time: timestamp,
        data_source: string,
        description: string,
        pricing_plan: enumeration(PricingPlan),
        tags: map(String),
        update_time: timestamp,
    }
}

wkt::value_object! {
    /// The request message for
    /// [update_route_calculator][crate::client::Location::update_route_calculator].
    pub struct UpdateRouteCalculatorRequest {
        calculator_name: string,
        description: string,
        pricing_plan: enumeration(PricingPlan),
    }
}

wkt::value_object! {
    /// The response message for
    /// [update_route_calculator][crate::client::Location::update_route_calculator].
    pub struct UpdateRouteCalculatorResult {
        calculator_arn: string,
        calculator_name: string,
        update_time: timestamp,
    }
}

wkt::value_object! {
    /// The request message for
    /// [delete_route_calculator][crate::client::Location::delete_route_calculator].
    pub struct DeleteRouteCalculatorRequest {
        calculator_name: string,
    }
}

wkt::value_object! {
    /// The response message for
    /// [delete_route_calculator][crate::client::Location::delete_route_calculator].
    pub struct DeleteRouteCalculatorResult {}
}

wkt::value_object! {
    /// The request message for
    /// [list_route_calculators][crate::client::Location::list_route_calculators].
    pub struct ListRouteCalculatorsRequest {
        max_results: scalar(i32),
        next_token: string,
    }
}

wkt::value_object! {
    pub struct ListRouteCalculatorsResponseEntry {
        calculator_name: string,
        create_time: timestamp,
        data_source: string,
        description: string,
        pricing_plan: enumeration(PricingPlan),
        update_time: timestamp,
    }
}

wkt::value_object! {
    /// The response message for
    /// [list_route_calculators][crate::client::Location::list_route_calculators].
    pub struct ListRouteCalculatorsResult {
        entries: list(ListRouteCalculatorsResponseEntry),
        next_token: string,
    }
}

impl Validate for CreateRouteCalculatorRequest {
    fn validate_fields(&self, v: &mut Validator) {
        required_name(v, "CalculatorName", self.calculator_name());
        v.required("DataSource", self.data_source());
        description(v, self.description());
        tags(v, "Tags", self.tags());
    }
}

impl Validate for DescribeRouteCalculatorRequest {
    fn validate_fields(&self, v: &mut Validator) {
        required_name(v, "CalculatorName", self.calculator_name());
    }
}

impl Validate for UpdateRouteCalculatorRequest {
    fn validate_fields(&self, v: &mut Validator) {
        required_name(v, "CalculatorName", self.calculator_name());
        description(v, self.description());
    }
}

impl Validate for DeleteRouteCalculatorRequest {
    fn validate_fields(&self, v: &mut Validator) {
        required_name(v, "CalculatorName", self.calculator_name());
    }
}

impl Validate for ListRouteCalculatorsRequest {
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
        let input = CreateRouteCalculatorRequest::new()
            .with_calculator_name("my-calculator")
            .with_data_source("Here");
        assert_eq!(violations(&input), Vec::<String>::new());
        assert_eq!(
            violations(&CreateRouteCalculatorRequest::new()),
            vec!["CalculatorName", "DataSource"]
        );
        let input = CreateRouteCalculatorRequest::new()
            .with_calculator_name("my-calculator")
            .with_data_source("Here")
            .with_tags([("bad|key", "v")]);
        assert_eq!(violations(&input), vec!["Tags[bad|key]"]);
    }

    #[test]
    fn calculator_name_required() {
        assert_eq!(
            violations(&DescribeRouteCalculatorRequest::new()),
            vec!["CalculatorName"]
        );
        assert_eq!(
            violations(&DeleteRouteCalculatorRequest::new().with_calculator_name("calculadora-é")),
            vec!["CalculatorName"]
        );
        let input = UpdateRouteCalculatorRequest::new()
            .with_calculator_name("my-calculator")
            .with_pricing_plan(PricingPlan::RequestBasedUsage);
        assert_eq!(violations(&input), Vec::<String>::new());
    }

    #[test]
    fn list_from_wire() -> anyhow::Result<()> {
        let got = serde_json::from_value::<ListRouteCalculatorsResult>(serde_json::json!({
            "Entries": [{
                "CalculatorName": "my-calculator",
                "DataSource": "Esri",
                "PricingPlan": "RequestBasedUsage"
            }]
        }))?;
        let entries = got.entries().unwrap_or_default();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].data_source(), Some("Esri"));
        assert_eq!(entries[0].pricing_plan(), Some(&PricingPlan::RequestBasedUsage));
        assert_eq!(got.next_token(), None);
        Ok(())
    }
}
