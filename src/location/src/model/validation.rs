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

//! Field constraints shared by many messages in the service.

use gax::validation::Validator;
use regex::Regex;
use std::collections::BTreeMap;

lazy_static::lazy_static! {
    static ref RESOURCE_NAME: Regex = Regex::new(r"^[-._A-Za-z0-9]+$").unwrap();
    static ref IDENTIFIER: Regex = Regex::new(r"^[-._\p{L}\p{N}]+$").unwrap();
    static ref TAG: Regex = Regex::new(r"^([\p{L}\p{Z}\p{N}_.,:/=+\-@]*)$").unwrap();
    static ref COUNTRY: Regex = Regex::new(r"^[A-Z]{3}$").unwrap();
    static ref ARN: Regex = Regex::new(
        r"^arn(:[a-z0-9]+([.-][a-z0-9]+)*){2}(:([a-z0-9]+([.-][a-z0-9]+)*)?){2}:([^/].*)?$"
    )
    .unwrap();
}

const MAX_TAGS: usize = 50;
const MAX_PROPERTIES: usize = 3;

/// Tracker, map, calculator, collection, and place index names.
///
/// The service only accepts ASCII letters and digits, plus `-`, `.`, and `_`.
pub(crate) fn resource_name(v: &mut Validator, field: &str, value: Option<&str>) {
    v.length(field, value, 1, 100)
        .pattern(field, value, &RESOURCE_NAME, r"^[-._A-Za-z0-9]+$");
}

pub(crate) fn required_name(v: &mut Validator, field: &str, value: Option<&str>) {
    v.required(field, value);
    resource_name(v, field, value);
}

pub(crate) fn description(v: &mut Validator, value: Option<&str>) {
    v.length("Description", value, 0, 1000);
}

/// Device and geofence ids, these may use any Unicode letter or digit.
pub(crate) fn identifier(v: &mut Validator, field: &str, value: Option<&str>) {
    v.length(field, value, 1, 100)
        .pattern(field, value, &IDENTIFIER, r"^[-._\p{L}\p{N}]+$");
}

pub(crate) fn required_identifier(v: &mut Validator, field: &str, value: Option<&str>) {
    v.required(field, value);
    identifier(v, field, value);
}

/// A list of 1 to `max` device or geofence ids.
pub(crate) fn identifiers(v: &mut Validator, field: &str, value: Option<&[String]>, max: usize) {
    v.required(field, value)
        .count(field, value.map(<[String]>::len), 1, max);
    for (i, id) in value.into_iter().flatten().enumerate() {
        identifier(v, &format!("{field}[{i}]"), Some(id.as_str()));
    }
}

pub(crate) fn resource_arn(v: &mut Validator, field: &str, value: Option<&str>) {
    v.required(field, value)
        .length(field, value, 0, 1600)
        .pattern(field, value, &ARN, "an Amazon Resource Name");
}

pub(crate) fn country(v: &mut Validator, field: &str, value: Option<&str>) {
    v.pattern(field, value, &COUNTRY, "a three letter ISO 3166-1 alpha-3 country code");
}

pub(crate) fn tag_key(v: &mut Validator, field: &str, key: &str) {
    v.length(field, Some(key), 1, 128)
        .pattern(field, Some(key), &TAG, "a tag key");
}

/// Resource tags, at most 50 of them.
pub(crate) fn tags(v: &mut Validator, field: &str, value: Option<&BTreeMap<String, String>>) {
    let Some(tags) = value else {
        return;
    };
    v.count(field, Some(tags.len()), 0, MAX_TAGS);
    for (key, value) in tags {
        let path = format!("{field}[{key}]");
        tag_key(v, &path, key);
        v.length(&path, Some(value.as_str()), 0, 256)
            .pattern(&path, Some(value.as_str()), &TAG, "a tag value");
    }
}

pub(crate) fn tag_keys(v: &mut Validator, field: &str, value: Option<&[String]>) {
    v.required(field, value)
        .count(field, value.map(<[String]>::len), 1, MAX_TAGS);
    for (i, key) in value.into_iter().flatten().enumerate() {
        tag_key(v, &format!("{field}[{i}]"), key);
    }
}

/// Application defined properties on device positions and geofences.
pub(crate) fn properties(
    v: &mut Validator,
    field: &str,
    value: Option<&BTreeMap<String, String>>,
) {
    let Some(properties) = value else {
        return;
    };
    v.count(field, Some(properties.len()), 0, MAX_PROPERTIES);
    for (key, value) in properties {
        let path = format!("{field}[{key}]");
        v.length(&path, Some(key.as_str()), 1, 20)
            .length(&path, Some(value.as_str()), 1, 40);
    }
}

/// The page size in `List*` requests.
pub(crate) fn list_max_results(v: &mut Validator, value: Option<i32>) {
    v.range("MaxResults", value, 1, 100);
}

/// The result limit in `Search*` requests.
pub(crate) fn search_max_results(v: &mut Validator, value: Option<i32>) {
    v.range("MaxResults", value, 1, 50);
}

pub(crate) fn language(v: &mut Validator, value: Option<&str>) {
    v.length("Language", value, 2, 35);
}

pub(crate) fn next_token(v: &mut Validator, value: Option<&str>) {
    v.length("NextToken", value, 1, 60000);
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn check<F: FnOnce(&mut Validator)>(f: F) -> Vec<String> {
        let mut v = Validator::new();
        f(&mut v);
        match v.finish() {
            Ok(()) => Vec::new(),
            Err(e) => e
                .violations()
                .iter()
                .map(|v| v.field().to_string())
                .collect(),
        }
    }

    #[test_case("my-tracker", true)]
    #[test_case("my_tracker.v2", true)]
    #[test_case("", false)]
    #[test_case("has space", false)]
    #[test_case("slash/name", false)]
    #[test_case("café", false)]
    #[test_case("地図", false)]
    #[test_case("Straße", false)]
    fn names(input: &str, ok: bool) {
        let got = check(|v| resource_name(v, "TrackerName", Some(input)));
        assert_eq!(got.is_empty(), ok, "{input} {got:?}");
    }

    #[test]
    fn name_length() {
        let input = "a".repeat(101);
        let got = check(|v| resource_name(v, "MapName", Some(input.as_str())));
        assert_eq!(got, vec!["MapName"]);
        let input = "a".repeat(100);
        assert!(check(|v| resource_name(v, "MapName", Some(input.as_str()))).is_empty());
    }

    #[test_case("thing-123", true)]
    #[test_case("Gerät.7", true)]
    #[test_case("bad id", false)]
    #[test_case("", false)]
    fn device_ids(input: &str, ok: bool) {
        let got = check(|v| identifier(v, "DeviceId", Some(input)));
        assert_eq!(got.is_empty(), ok, "{input} {got:?}");
    }

    #[test_case("arn:aws:geo:us-east-1:123456789012:tracker/my-tracker", true)]
    #[test_case("arn:aws:geo:us-east-1:123456789012:map/my-map", true)]
    #[test_case("not-an-arn", false)]
    fn arns(input: &str, ok: bool) {
        let got = check(|v| resource_arn(v, "ResourceArn", Some(input)));
        assert_eq!(got.is_empty(), ok, "{input} {got:?}");
    }

    #[test]
    fn tag_maps() {
        let input = BTreeMap::from([
            ("env".to_string(), "prod".to_string()),
            ("".to_string(), "empty key".to_string()),
            ("team".to_string(), "x".repeat(257)),
        ]);
        let got = check(|v| tags(v, "Tags", Some(&input)));
        assert_eq!(got, vec!["Tags[]", "Tags[team]"]);

        let input = (0..51)
            .map(|i| (format!("k{i}"), "v".to_string()))
            .collect::<BTreeMap<_, _>>();
        let got = check(|v| tags(v, "Tags", Some(&input)));
        assert_eq!(got, vec!["Tags"]);
    }

    #[test]
    fn tag_key_lists() {
        let got = check(|v| tag_keys(v, "TagKeys", None));
        assert_eq!(got, vec!["TagKeys"]);
        let got = check(|v| tag_keys(v, "TagKeys", Some(&[][..])));
        assert_eq!(got, vec!["TagKeys"]);
        let input = ["env".to_string(), "bad|key".to_string()];
        let got = check(|v| tag_keys(v, "TagKeys", Some(input.as_slice())));
        assert_eq!(got, vec!["TagKeys[1]"]);
    }

    #[test]
    fn property_maps() {
        let input = BTreeMap::from([
            ("a".to_string(), "1".to_string()),
            ("b".to_string(), "".to_string()),
        ]);
        let got = check(|v| properties(v, "GeofenceProperties", Some(&input)));
        assert_eq!(got, vec!["GeofenceProperties[b]"]);

        let input = (0..4)
            .map(|i| (format!("k{i}"), "v".to_string()))
            .collect::<BTreeMap<_, _>>();
        let got = check(|v| properties(v, "GeofenceProperties", Some(&input)));
        assert_eq!(got, vec!["GeofenceProperties"]);
    }

    #[test]
    fn identifier_lists() {
        let got = check(|v| identifiers(v, "DeviceIds", None, 10));
        assert_eq!(got, vec!["DeviceIds"]);
        let input = ["thing-1".to_string(), "bad id".to_string()];
        let got = check(|v| identifiers(v, "DeviceIds", Some(input.as_slice()), 10));
        assert_eq!(got, vec!["DeviceIds[1]"]);
        let input = (0..11).map(|i| format!("thing-{i}")).collect::<Vec<_>>();
        let got = check(|v| identifiers(v, "DeviceIds", Some(input.as_slice()), 10));
        assert_eq!(got, vec!["DeviceIds"]);
    }

    #[test_case("USA", true)]
    #[test_case("usa", false)]
    #[test_case("US", false)]
    fn countries(input: &str, ok: bool) {
        let got = check(|v| country(v, "FilterCountries[0]", Some(input)));
        assert_eq!(got.is_empty(), ok, "{input} {got:?}");
    }
}
