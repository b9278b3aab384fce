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

/// Declares an open enumeration with string values.
///
/// The service sends enumerations as strings, and it may add new values at any
/// time. The generated type has one variant per known value, plus an
/// `UnknownValue` variant that preserves any other string.
///
/// The wire name of each known variant is the variant name.
///
/// # Example
/// ```
/// # use geosdk_wkt::enumeration;
/// enumeration! {
///     /// The unit system for distances.
///     pub enum DistanceUnit {
///         Kilometers,
///         Miles,
///     }
/// }
///
/// assert_eq!(DistanceUnit::Miles.name(), "Miles");
/// assert_eq!(DistanceUnit::from("Kilometers"), DistanceUnit::Kilometers);
/// let leagues = DistanceUnit::from("Leagues");
/// assert_eq!(leagues.name(), "Leagues");
/// assert!(matches!(leagues, DistanceUnit::UnknownValue(_)));
/// ```
#[macro_export]
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )*
            /// If set, the enum was initialized with an unknown value.
            ///
            /// Applications can examine the value using the `name()` method.
            UnknownValue($crate::__private::UnknownEnumValue),
        }

        impl $name {
            /// Gets the wire name of the enum value.
            pub fn name(&self) -> &str {
                match self {
                    $( Self::$variant => stringify!($variant), )*
                    Self::UnknownValue(u) => u.name(),
                }
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                $(
                    if value == stringify!($variant) {
                        return Self::$variant;
                    }
                )*
                Self::UnknownValue($crate::__private::UnknownEnumValue::new(value))
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(value: ::std::string::String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl ::std::convert::From<&::std::string::String> for $name {
            fn from(value: &::std::string::String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl ::serde::ser::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> ::serde::de::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                deserializer.deserialize_str($crate::__private::EnumVisitor::<$name>::new(
                    stringify!($name),
                ))
            }
        }

        impl $crate::__private::FieldHash for $name {
            fn hash_field<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(self.name(), state);
            }
        }

        impl $crate::__private::FieldDisplay for $name {
            fn fmt_field(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use test_case::test_case;

    crate::enumeration! {
        /// A test enumeration.
        pub enum Vehicle {
            /// Four wheels.
            Car,
            Truck,
            Walking,
        }
    }

    #[test_case(Vehicle::Car, "Car")]
    #[test_case(Vehicle::Truck, "Truck")]
    #[test_case(Vehicle::Walking, "Walking")]
    fn known(input: Vehicle, want: &str) -> anyhow::Result<()> {
        assert_eq!(input.name(), want);
        assert_eq!(input.to_string(), want);
        assert_eq!(Vehicle::from(want), input);
        assert_eq!(serde_json::to_value(&input)?, json!(want));
        assert_eq!(serde_json::from_value::<Vehicle>(json!(want))?, input);
        Ok(())
    }

    #[test]
    fn unknown_roundtrip() -> anyhow::Result<()> {
        let got = serde_json::from_value::<Vehicle>(json!("Bicycle"))?;
        assert!(matches!(got, Vehicle::UnknownValue(_)), "{got:?}");
        assert_eq!(got.name(), "Bicycle");
        assert_eq!(serde_json::to_value(&got)?, json!("Bicycle"));
        Ok(())
    }

    #[test]
    fn case_sensitive() {
        let got = Vehicle::from("car");
        assert!(matches!(got, Vehicle::UnknownValue(_)), "{got:?}");
    }
}
