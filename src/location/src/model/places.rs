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

use super::validation::{country, language, required_name, search_max_results};
use gax::validation::{Validate, Validator};

const MAX_FILTER_COUNTRIES: usize = 100;

wkt::value_object! {
    /// The request message for
    /// [search_place_index_for_text][crate::client::Location::search_place_index_for_text].
    ///
    /// # Example
    /// ```
    /// # use geosdk_location::model::SearchPlaceIndexForTextRequest;
    /// let request = SearchPlaceIndexForTextRequest::new()
    ///     .with_index_name("my-index")
    ///     .with_text("Pike Place Market")
    ///     .with_filter_countries(["USA"]);
    /// assert_eq!(request.filter_countries(), Some(&["USA".to_string()][..]));
    /// ```
    pub struct SearchPlaceIndexForTextRequest {
        /// Prefer results close to this `[longitude, latitude]` position.
        ///
        /// Cannot be combined with `filter_b_box`.
        bias_position: list(f64),
        /// Only return results inside this `[west, south, east, north]` box.
        filter_b_box: list(f64),
        /// Only return results in these countries.
        filter_countries: list(String),
        index_name: string,
        /// A BCP 47 language tag for the results, such as `en` or `pt-BR`.
        language: string,
        max_results: scalar(i32),
        /// The free-form text to search for.
        text: string,
    }
}

wkt::value_object! {
    pub struct PlaceGeometry {
        /// The `[longitude, latitude]` of the place.
        point: list(f64),
    }
}

wkt::value_object! {
    /// A time zone in the IANA database.
    pub struct TimeZone {
        /// The name, such as `America/Los_Angeles`.
        name: string,
        /// The offset from UTC in seconds.
        offset: scalar(i32),
    }
}

wkt::value_object! {
    /// A place returned by a search.
    pub struct Place {
        address_number: string,
        categories: list(String),
        country: string,
        geometry: message(PlaceGeometry),
        /// True if the position was interpolated from an address range.
        interpolated: scalar(bool),
        /// The full name and address of the place.
        label: string,
        municipality: string,
        neighborhood: string,
        postal_code: string,
        region: string,
        street: string,
        sub_region: string,
        supplemental_categories: list(String),
        time_zone: message(TimeZone),
        unit_number: string,
        unit_type: string,
    }
}

wkt::value_object! {
    pub struct SearchForTextResult {
        /// The distance in meters to the bias position, if any.
        distance: scalar(f64),
        place: message(Place),
        place_id: string,
        /// How well the place matches the text, between 0 and 1.
        relevance: scalar(f64),
    }
}

wkt::value_object! {
    pub struct SearchForPositionResult {
        /// The distance in meters to the search position.
        distance: scalar(f64),
        place: message(Place),
        place_id: string,
    }
}

wkt::value_object! {
    /// Echoes the parameters of a text search.
    pub struct SearchPlaceIndexForTextSummary {
        bias_position: list(f64),
        data_source: string,
        filter_b_box: list(f64),
        filter_countries: list(String),
        language: string,
        max_results: scalar(i32),
        /// The bounding box of all the results.
        result_b_box: list(f64),
        text: string,
    }
}

wkt::value_object! {
    /// The response message for
    /// [search_place_index_for_text][crate::client::Location::search_place_index_for_text].
    pub struct SearchPlaceIndexForTextResult {
        results: list(SearchForTextResult),
        summary: message(SearchPlaceIndexForTextSummary),
    }
}

wkt::value_object! {
    /// The request message for
    /// [search_place_index_for_position][crate::client::Location::search_place_index_for_position].
    pub struct SearchPlaceIndexForPositionRequest {
        index_name: string,
        language: string,
        max_results: scalar(i32),
        /// The `[longitude, latitude]` to search around.
        position: list(f64),
    }
}

wkt::value_object! {
    pub struct SearchPlaceIndexForPositionSummary {
        data_source: string,
        language: string,
        max_results: scalar(i32),
        position: list(f64),
    }
}

wkt::value_object! {
    /// The response message for
    /// [search_place_index_for_position][crate::client::Location::search_place_index_for_position].
    pub struct SearchPlaceIndexForPositionResult {
        results: list(SearchForPositionResult),
        summary: message(SearchPlaceIndexForPositionSummary),
    }
}

impl Validate for SearchPlaceIndexForTextRequest {
    fn validate_fields(&self, v: &mut Validator) {
        v.position("BiasPosition", self.bias_position())
            .bounding_box("FilterBBox", self.filter_b_box());
        if self.bias_position().is_some() && self.filter_b_box().is_some() {
            v.violation("BiasPosition", "cannot be combined with FilterBBox");
        }
        let countries = self.filter_countries();
        v.count(
            "FilterCountries",
            countries.map(<[_]>::len),
            1,
            MAX_FILTER_COUNTRIES,
        );
        for (i, code) in countries.into_iter().flatten().enumerate() {
            country(v, &format!("FilterCountries[{i}]"), Some(code.as_str()));
        }
        required_name(v, "IndexName", self.index_name());
        language(v, self.language());
        search_max_results(v, self.max_results());
        v.required("Text", self.text())
            .length("Text", self.text(), 1, 200);
    }
}

impl Validate for SearchPlaceIndexForPositionRequest {
    fn validate_fields(&self, v: &mut Validator) {
        required_name(v, "IndexName", self.index_name());
        language(v, self.language());
        search_max_results(v, self.max_results());
        v.required("Position", self.position())
            .position("Position", self.position());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

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

    fn text_request() -> SearchPlaceIndexForTextRequest {
        SearchPlaceIndexForTextRequest::new()
            .with_index_name("my-index")
            .with_text("Pike Place Market")
    }

    #[test]
    fn text_ok() {
        assert_eq!(violations(&text_request()), Vec::<String>::new());
        let input = text_request()
            .with_bias_position([-122.342, 47.609])
            .with_language("en")
            .with_max_results(50)
            .with_filter_countries(["USA", "CAN"]);
        assert_eq!(violations(&input), Vec::<String>::new());
    }

    #[test]
    fn text_required() {
        assert_eq!(
            violations(&SearchPlaceIndexForTextRequest::new()),
            vec!["IndexName", "Text"]
        );
        assert_eq!(violations(&text_request().with_text("")), vec!["Text"]);
        assert_eq!(
            violations(&text_request().with_text("x".repeat(201))),
            vec!["Text"]
        );
    }

    #[test]
    fn bias_and_filter_exclusive() {
        let input = text_request()
            .with_bias_position([-122.342, 47.609])
            .with_filter_b_box([-123.0, 47.0, -122.0, 48.0]);
        assert_eq!(violations(&input), vec!["BiasPosition"]);
    }

    #[test_case(vec![-123.0, 47.0, -122.0, 48.0], true; "valid")]
    #[test_case(vec![-123.0, 48.0, -122.0, 47.0], false; "south above north")]
    #[test_case(vec![-123.0, 47.0, -122.0], false; "too short")]
    fn filter_b_box(input: Vec<f64>, ok: bool) {
        let got = violations(&text_request().with_filter_b_box(input));
        assert_eq!(got.is_empty(), ok, "{got:?}");
    }

    #[test]
    fn filter_countries() {
        let input = text_request().with_filter_countries(["USA", "us"]);
        assert_eq!(violations(&input), vec!["FilterCountries[1]"]);
        let input = text_request().with_filter_countries(Vec::<String>::new());
        assert_eq!(violations(&input), vec!["FilterCountries"]);
    }

    #[test_case(0, false)]
    #[test_case(1, true)]
    #[test_case(50, true)]
    #[test_case(51, false)]
    fn max_results(input: i32, ok: bool) {
        let got = violations(&text_request().with_max_results(input));
        assert_eq!(got.is_empty(), ok, "{got:?}");
    }

    #[test]
    fn position() {
        let input = SearchPlaceIndexForPositionRequest::new()
            .with_index_name("my-index")
            .with_position([-122.342, 47.609])
            .with_language("pt-BR");
        assert_eq!(violations(&input), Vec::<String>::new());

        let input = SearchPlaceIndexForPositionRequest::new()
            .with_index_name("my-index")
            .with_position([-122.342, 95.0])
            .with_language("x");
        assert_eq!(violations(&input), vec!["Language", "Position"]);

        assert_eq!(
            violations(&SearchPlaceIndexForPositionRequest::new()),
            vec!["IndexName", "Position"]
        );
    }

    #[test]
    fn result_display() {
        let result = SearchPlaceIndexForPositionResult::new().with_results([
            SearchForPositionResult::new()
                .with_distance(12.5)
                .with_place(Place::new().with_label("Pike Place").with_interpolated(false)),
        ]);
        assert_eq!(
            result.to_string(),
            "{Results: [{Distance: 12.5, Place: {Interpolated: false, Label: Pike Place}}]}"
        );
    }
}
