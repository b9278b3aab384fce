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

use std::marker::PhantomData;

/// Holds an enumeration value that is not known to this version of the library.
///
/// The service adds new values to its enumerations over time. Such values are
/// preserved so they can be inspected and sent back to the service.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UnknownEnumValue(String);

impl UnknownEnumValue {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        self.0.as_str()
    }
}

impl serde::ser::Serialize for UnknownEnumValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnumVisitor<'lf, T> {
    name: &'lf str,
    _unused: PhantomData<T>,
}

impl<'lf, T> EnumVisitor<'lf, T> {
    pub fn new(name: &'lf str) -> Self {
        Self {
            name,
            _unused: Default::default(),
        }
    }
}

impl<T> serde::de::Visitor<'_> for EnumVisitor<'_, T>
where
    T: for<'a> From<&'a str>,
{
    type Value = T;
    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(T::from(value))
    }
    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(formatter, "a {} enum value in string format", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn unknown_accessors() -> anyhow::Result<()> {
        let u = UnknownEnumValue::new("Hovercraft");
        assert_eq!(u.name(), "Hovercraft");
        let got = serde_json::to_value(&u)?;
        assert_eq!(got, json!("Hovercraft"));
        Ok(())
    }

    // This type is here to drive the `EnumVisitor` and test its functionality.
    #[derive(Clone, Debug, PartialEq)]
    enum FakeEnum {
        Red,
        Green,
        UnknownValue(UnknownEnumValue),
    }
    impl From<&str> for FakeEnum {
        fn from(value: &str) -> Self {
            match value {
                "Red" => Self::Red,
                "Green" => Self::Green,
                x => Self::UnknownValue(UnknownEnumValue::new(x)),
            }
        }
    }
    impl<'de> serde::de::Deserialize<'de> for FakeEnum {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            deserializer.deserialize_str(EnumVisitor::new("FakeEnum"))
        }
    }

    #[test_case(json!("Red"), FakeEnum::Red)]
    #[test_case(json!("Green"), FakeEnum::Green)]
    #[test_case(json!("Blue"), FakeEnum::UnknownValue(UnknownEnumValue::new("Blue")))]
    fn visitor(input: serde_json::Value, want: FakeEnum) -> anyhow::Result<()> {
        let got = serde_json::from_value::<FakeEnum>(input)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn visitor_rejects_numbers() {
        let got = serde_json::from_value::<FakeEnum>(json!(42));
        let err = got.unwrap_err();
        assert!(err.to_string().contains("FakeEnum"), "{err}");
    }
}
