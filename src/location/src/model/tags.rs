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

use super::validation::{resource_arn, tag_keys, tags};
use gax::validation::{Validate, Validator};

wkt::value_object! {
    /// The request message for [tag_resource][crate::client::Location::tag_resource].
    ///
    /// Existing tags with the same keys are overwritten.
    pub struct TagResourceRequest {
        /// The resource to tag.
        resource_arn: string,
        tags: map(String),
    }
}

wkt::value_object! {
    /// The response message for [tag_resource][crate::client::Location::tag_resource].
    pub struct TagResourceResult {}
}

wkt::value_object! {
    /// The request message for [untag_resource][crate::client::Location::untag_resource].
    pub struct UntagResourceRequest {
        resource_arn: string,
        /// The keys of the tags to remove.
        tag_keys: list(String),
    }
}

wkt::value_object! {
    /// The response message for [untag_resource][crate::client::Location::untag_resource].
    pub struct UntagResourceResult {}
}

wkt::value_object! {
    /// The request message for
    /// [list_tags_for_resource][crate::client::Location::list_tags_for_resource].
    pub struct ListTagsForResourceRequest {
        resource_arn: string,
    }
}

wkt::value_object! {
    /// The response message for
    /// [list_tags_for_resource][crate::client::Location::list_tags_for_resource].
    pub struct ListTagsForResourceResult {
        tags: map(String),
    }
}

impl Validate for TagResourceRequest {
    fn validate_fields(&self, v: &mut Validator) {
        resource_arn(v, "ResourceArn", self.resource_arn());
        v.required("Tags", self.tags());
        tags(v, "Tags", self.tags());
    }
}

impl Validate for UntagResourceRequest {
    fn validate_fields(&self, v: &mut Validator) {
        resource_arn(v, "ResourceArn", self.resource_arn());
        tag_keys(v, "TagKeys", self.tag_keys());
    }
}

impl Validate for ListTagsForResourceRequest {
    fn validate_fields(&self, v: &mut Validator) {
        resource_arn(v, "ResourceArn", self.resource_arn());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ARN: &str = "arn:aws:geo:us-east-1:123456789012:tracker/my-tracker";

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
    fn tag() {
        let input = TagResourceRequest::new()
            .with_resource_arn(ARN)
            .with_tags([("env", "prod")]);
        assert_eq!(violations(&input), Vec::<String>::new());

        assert_eq!(
            violations(&TagResourceRequest::new()),
            vec!["ResourceArn", "Tags"]
        );
        let input = TagResourceRequest::new()
            .with_resource_arn("my-tracker")
            .with_tags([("env", "prod|dev")]);
        assert_eq!(violations(&input), vec!["ResourceArn", "Tags[env]"]);
    }

    #[test]
    fn add_tags() -> anyhow::Result<()> {
        let mut input = TagResourceRequest::new().with_resource_arn(ARN);
        input.add_tags_entry("env", "prod")?.add_tags_entry("team", "maps")?;
        let err = input.add_tags_entry("env", "dev").unwrap_err();
        assert_eq!(err.key(), "env");
        assert_eq!(input.tags().and_then(|t| t.get("env")).map(String::as_str), Some("prod"));
        assert_eq!(violations(&input), Vec::<String>::new());
        Ok(())
    }

    #[test]
    fn untag() {
        let input = UntagResourceRequest::new()
            .with_resource_arn(ARN)
            .with_tag_keys(["env", "team"]);
        assert_eq!(violations(&input), Vec::<String>::new());
        assert_eq!(
            violations(&UntagResourceRequest::new().with_resource_arn(ARN)),
            vec!["TagKeys"]
        );
    }

    #[test]
    fn list() {
        assert_eq!(
            violations(&ListTagsForResourceRequest::new()),
            vec!["ResourceArn"]
        );
        assert_eq!(
            violations(&ListTagsForResourceRequest::new().with_resource_arn(ARN)),
            Vec::<String>::new()
        );
    }
}
