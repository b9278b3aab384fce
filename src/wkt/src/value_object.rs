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

/// Inserting a map entry failed because the key is already present.
///
/// The map is left unmodified.
///
/// # Example
/// ```
/// # use geosdk_wkt::DuplicateKeyError;
/// let err = DuplicateKeyError::new("Tags", "env");
/// assert_eq!(err.field(), "Tags");
/// assert_eq!(err.key(), "env");
/// ```
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
#[error("duplicated keys ({key}) are provided for the {field} map")]
pub struct DuplicateKeyError {
    field: &'static str,
    key: String,
}

impl DuplicateKeyError {
    pub fn new<K: Into<String>>(field: &'static str, key: K) -> Self {
        Self {
            field,
            key: key.into(),
        }
    }

    /// The wire name of the map field.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// The rejected key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Declares a value object: a record of optional, named fields.
///
/// Each field is declared with its name and kind:
///
/// | Kind              | Stored as                      | Getter returns             |
/// |-------------------|--------------------------------|----------------------------|
/// | `scalar(T)`       | `T` (`bool`, `i32`, `i64`, `f64`) | `Option<T>`             |
/// | `string`          | `String`                       | `Option<&str>`             |
/// | `enumeration(E)`  | `E`                            | `Option<&E>`               |
/// | `timestamp`       | [Timestamp][crate::Timestamp]  | `Option<Timestamp>`        |
/// | `message(T)`      | `T`                            | `Option<&T>`               |
/// | `list(T)`         | `Vec<T>`                       | `Option<&[T]>`             |
/// | `map(V)`          | `BTreeMap<String, V>`          | `Option<&BTreeMap<String, V>>` |
///
/// All fields start unset. An unset field is distinct from a field set to the
/// default or empty value, it is omitted on the wire and in the text
/// representation.
///
/// For each field `foo` the macro generates:
/// - `foo()`: returns the value, if set.
/// - `set_foo(v)`: replaces the value. Collections are copied into a new,
///   owned container.
/// - `set_or_clear_foo(Option<v>)`: sets the value or resets it to unset.
/// - `clear_foo()`: resets the field to unset.
/// - `with_foo(v)`: like `set_foo()`, consuming and returning `self`.
///
/// Fields of `list` kind also get `extend_foo(items)`, which appends to the
/// existing list (or starts a new one when unset), and `foo_mut()`. Fields of
/// `map` kind also get `add_foo_entry(key, value)` and `clear_foo_entries()`.
///
/// The type implements `Display` as `{Name: value, Name: value}`, listing only
/// the fields that are set, in declaration order. `Name` is the wire name,
/// the field name in `PascalCase`. The type also implements `Hash` and
/// `PartialEq` over all the fields, in declaration order.
///
/// The crate invoking this macro must depend on `serde`.
///
/// # Example
/// ```
/// # use geosdk_wkt::value_object;
/// value_object! {
///     /// Options for a truck.
///     pub struct TruckOptions {
///         /// Avoid toll roads.
///         avoid_tolls: scalar(bool),
///         label: string,
///         positions: list(Vec<f64>),
///     }
/// }
///
/// let options = TruckOptions::new()
///     .with_avoid_tolls(true)
///     .extend_positions([vec![-123.115, 49.285]]);
/// assert_eq!(options.avoid_tolls(), Some(true));
/// assert_eq!(options.label(), None);
/// assert_eq!(
///     options.to_string(),
///     "{AvoidTolls: true, Positions: [[-123.115, 49.285]]}"
/// );
/// ```
#[macro_export]
macro_rules! value_object {
    // All the fields are normalized, emit the type.
    (@munch [$(#[$meta:meta])*] [$vis:vis] $name:ident [$(
        [[$(#[$fmeta:meta])*] $field:ident $kind:ident [$store:ty] [$elem:ty]]
    )*]) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "PascalCase")]
        #[non_exhaustive]
        $vis struct $name {
            $(
                $(#[$fmeta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                $field: ::std::option::Option<$store>,
            )*
        }

        impl $name {
            /// Creates a new instance with all the fields unset.
            pub fn new() -> Self {
                Self::default()
            }

            $( $crate::__value_object_field!{ $kind $name $field [$elem] } )*
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                #[allow(unused_mut)]
                let mut writer = $crate::__private::FieldWriter::new(f);
                $(
                    if let ::std::option::Option::Some(v) = &self.$field {
                        writer.field($crate::__private::paste!(stringify!([<$field:camel>])), v)?;
                    }
                )*
                writer.finish()
            }
        }

        impl ::std::hash::Hash for $name {
            #[allow(unused_variables)]
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                $( $crate::__private::FieldHash::hash_field(&self.$field, state); )*
            }
        }

        impl $crate::__private::FieldHash for $name {
            fn hash_field<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(self, state);
            }
        }

        impl $crate::__private::FieldDisplay for $name {
            fn fmt_field(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }
    };

    (@munch $meta:tt $vis:tt $name:ident [$($acc:tt)*]
        $(#[$fmeta:meta])* $field:ident : scalar($t:ty) $(, $($rest:tt)*)?
    ) => {
        $crate::value_object!{@munch $meta $vis $name
            [$($acc)* [[$(#[$fmeta])*] $field scalar [$t] [$t]]] $($($rest)*)?}
    };
    (@munch $meta:tt $vis:tt $name:ident [$($acc:tt)*]
        $(#[$fmeta:meta])* $field:ident : string $(, $($rest:tt)*)?
    ) => {
        $crate::value_object!{@munch $meta $vis $name
            [$($acc)* [[$(#[$fmeta])*] $field string [::std::string::String] [::std::string::String]]]
            $($($rest)*)?}
    };
    (@munch $meta:tt $vis:tt $name:ident [$($acc:tt)*]
        $(#[$fmeta:meta])* $field:ident : enumeration($t:ty) $(, $($rest:tt)*)?
    ) => {
        $crate::value_object!{@munch $meta $vis $name
            [$($acc)* [[$(#[$fmeta])*] $field enumeration [$t] [$t]]] $($($rest)*)?}
    };
    (@munch $meta:tt $vis:tt $name:ident [$($acc:tt)*]
        $(#[$fmeta:meta])* $field:ident : timestamp $(, $($rest:tt)*)?
    ) => {
        $crate::value_object!{@munch $meta $vis $name
            [$($acc)* [[$(#[$fmeta])*] $field timestamp [$crate::Timestamp] [$crate::Timestamp]]]
            $($($rest)*)?}
    };
    (@munch $meta:tt $vis:tt $name:ident [$($acc:tt)*]
        $(#[$fmeta:meta])* $field:ident : message($t:ty) $(, $($rest:tt)*)?
    ) => {
        $crate::value_object!{@munch $meta $vis $name
            [$($acc)* [[$(#[$fmeta])*] $field message [$t] [$t]]] $($($rest)*)?}
    };
    (@munch $meta:tt $vis:tt $name:ident [$($acc:tt)*]
        $(#[$fmeta:meta])* $field:ident : list($t:ty) $(, $($rest:tt)*)?
    ) => {
        $crate::value_object!{@munch $meta $vis $name
            [$($acc)* [[$(#[$fmeta])*] $field list [::std::vec::Vec<$t>] [$t]]] $($($rest)*)?}
    };
    (@munch $meta:tt $vis:tt $name:ident [$($acc:tt)*]
        $(#[$fmeta:meta])* $field:ident : map($t:ty) $(, $($rest:tt)*)?
    ) => {
        $crate::value_object!{@munch $meta $vis $name
            [$($acc)* [[$(#[$fmeta])*] $field map
                [::std::collections::BTreeMap<::std::string::String, $t>] [$t]]]
            $($($rest)*)?}
    };

    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $($body:tt)*
        }
    ) => {
        $crate::value_object!{@munch [$(#[$meta])*] [$vis] $name [] $($body)*}
    };
}

// Generates the accessors for one field of a value object.
#[doc(hidden)]
#[macro_export]
macro_rules! __value_object_field {
    (scalar $name:ident $field:ident [$elem:ty]) => {
        #[doc = concat!("Returns the value of `", stringify!($field), "`, if set.")]
        pub fn $field(&self) -> ::std::option::Option<$elem> {
            self.$field
        }
        $crate::__value_object_field!{@single $name $field [$elem]}
    };
    (string $name:ident $field:ident [$elem:ty]) => {
        #[doc = concat!("Returns the value of `", stringify!($field), "`, if set.")]
        pub fn $field(&self) -> ::std::option::Option<&str> {
            self.$field.as_deref()
        }
        $crate::__value_object_field!{@single $name $field [$elem]}
    };
    (enumeration $name:ident $field:ident [$elem:ty]) => {
        #[doc = concat!("Returns the value of `", stringify!($field), "`, if set.")]
        pub fn $field(&self) -> ::std::option::Option<&$elem> {
            self.$field.as_ref()
        }
        $crate::__value_object_field!{@single $name $field [$elem]}
    };
    (timestamp $name:ident $field:ident [$elem:ty]) => {
        #[doc = concat!("Returns the value of `", stringify!($field), "`, if set.")]
        pub fn $field(&self) -> ::std::option::Option<$elem> {
            self.$field
        }
        $crate::__value_object_field!{@single $name $field [$elem]}
    };
    (message $name:ident $field:ident [$elem:ty]) => {
        #[doc = concat!("Returns the value of `", stringify!($field), "`, if set.")]
        pub fn $field(&self) -> ::std::option::Option<&$elem> {
            self.$field.as_ref()
        }
        $crate::__value_object_field!{@single $name $field [$elem]}
    };

    (@single $name:ident $field:ident [$elem:ty]) => {
        $crate::__private::paste! {
            #[doc = concat!("Sets the value of `", stringify!($field), "`.")]
            pub fn [<set_ $field>]<T>(&mut self, v: T)
            where
                T: ::std::convert::Into<$elem>,
            {
                self.$field = ::std::option::Option::Some(v.into());
            }

            #[doc = concat!("Sets or clears the value of `", stringify!($field), "`.")]
            pub fn [<set_or_clear_ $field>]<T>(&mut self, v: ::std::option::Option<T>)
            where
                T: ::std::convert::Into<$elem>,
            {
                self.$field = v.map(::std::convert::Into::<$elem>::into);
            }

            #[doc = concat!("Resets `", stringify!($field), "` to unset.")]
            pub fn [<clear_ $field>](&mut self) {
                self.$field = ::std::option::Option::None;
            }

            #[doc = concat!("Sets the value of `", stringify!($field), "` and returns `self`.")]
            pub fn [<with_ $field>]<T>(mut self, v: T) -> Self
            where
                T: ::std::convert::Into<$elem>,
            {
                self.[<set_ $field>](v);
                self
            }
        }
    };

    (list $name:ident $field:ident [$elem:ty]) => {
        $crate::__private::paste! {
            #[doc = concat!("Returns the value of `", stringify!($field), "`, if set.")]
            pub fn $field(&self) -> ::std::option::Option<&[$elem]> {
                self.$field.as_deref()
            }

            #[doc = concat!("Returns a mutable reference to `", stringify!($field), "`, if set.")]
            pub fn [<$field _mut>](&mut self) -> ::std::option::Option<&mut ::std::vec::Vec<$elem>> {
                self.$field.as_mut()
            }

            #[doc = concat!("Replaces `", stringify!($field), "` with a copy of the elements in `v`.")]
            pub fn [<set_ $field>]<I, V>(&mut self, v: I)
            where
                I: ::std::iter::IntoIterator<Item = V>,
                V: ::std::convert::Into<$elem>,
            {
                self.$field = ::std::option::Option::Some(
                    v.into_iter().map(::std::convert::Into::<$elem>::into).collect(),
                );
            }

            #[doc = concat!("Sets or clears the value of `", stringify!($field), "`.")]
            pub fn [<set_or_clear_ $field>]<I, V>(&mut self, v: ::std::option::Option<I>)
            where
                I: ::std::iter::IntoIterator<Item = V>,
                V: ::std::convert::Into<$elem>,
            {
                self.$field = v.map(|v| v.into_iter().map(::std::convert::Into::<$elem>::into).collect());
            }

            #[doc = concat!("Resets `", stringify!($field), "` to unset.")]
            pub fn [<clear_ $field>](&mut self) {
                self.$field = ::std::option::Option::None;
            }

            #[doc = concat!("Replaces `", stringify!($field), "` and returns `self`.")]
            ///
            /// Any previous elements are discarded.
            pub fn [<with_ $field>]<I, V>(mut self, v: I) -> Self
            where
                I: ::std::iter::IntoIterator<Item = V>,
                V: ::std::convert::Into<$elem>,
            {
                self.[<set_ $field>](v);
                self
            }

            #[doc = concat!("Appends the elements in `v` to `", stringify!($field), "` and returns `self`.")]
            ///
            /// Starts a new list if the field is unset, otherwise the elements
            /// are appended to the existing list. Calling this function twice
            /// concatenates both sets of elements.
            pub fn [<extend_ $field>]<I, V>(mut self, v: I) -> Self
            where
                I: ::std::iter::IntoIterator<Item = V>,
                V: ::std::convert::Into<$elem>,
            {
                self.$field
                    .get_or_insert_with(::std::vec::Vec::new)
                    .extend(v.into_iter().map(::std::convert::Into::<$elem>::into));
                self
            }
        }
    };

    (map $name:ident $field:ident [$elem:ty]) => {
        $crate::__private::paste! {
            #[doc = concat!("Returns the value of `", stringify!($field), "`, if set.")]
            pub fn $field(
                &self,
            ) -> ::std::option::Option<&::std::collections::BTreeMap<::std::string::String, $elem>> {
                self.$field.as_ref()
            }

            #[doc = concat!("Replaces `", stringify!($field), "` with a copy of the entries in `v`.")]
            pub fn [<set_ $field>]<I, K, V>(&mut self, v: I)
            where
                I: ::std::iter::IntoIterator<Item = (K, V)>,
                K: ::std::convert::Into<::std::string::String>,
                V: ::std::convert::Into<$elem>,
            {
                self.$field = ::std::option::Option::Some(
                    v.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
                );
            }

            #[doc = concat!("Sets or clears the value of `", stringify!($field), "`.")]
            pub fn [<set_or_clear_ $field>]<I, K, V>(&mut self, v: ::std::option::Option<I>)
            where
                I: ::std::iter::IntoIterator<Item = (K, V)>,
                K: ::std::convert::Into<::std::string::String>,
                V: ::std::convert::Into<$elem>,
            {
                self.$field = v.map(|v| v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
            }

            #[doc = concat!("Resets `", stringify!($field), "` to unset.")]
            pub fn [<clear_ $field>](&mut self) {
                self.$field = ::std::option::Option::None;
            }

            #[doc = concat!("Replaces `", stringify!($field), "` and returns `self`.")]
            pub fn [<with_ $field>]<I, K, V>(mut self, v: I) -> Self
            where
                I: ::std::iter::IntoIterator<Item = (K, V)>,
                K: ::std::convert::Into<::std::string::String>,
                V: ::std::convert::Into<$elem>,
            {
                self.[<set_ $field>](v);
                self
            }

            #[doc = concat!("Adds a single entry to `", stringify!($field), "`.")]
            ///
            /// Fails if the key is already present, leaving the map unmodified.
            pub fn [<add_ $field _entry>]<K, V>(
                &mut self,
                key: K,
                value: V,
            ) -> ::std::result::Result<&mut Self, $crate::DuplicateKeyError>
            where
                K: ::std::convert::Into<::std::string::String>,
                V: ::std::convert::Into<$elem>,
            {
                let key = key.into();
                let map = self.$field.get_or_insert_with(::std::collections::BTreeMap::new);
                if map.contains_key(&key) {
                    return ::std::result::Result::Err($crate::DuplicateKeyError::new(
                        stringify!([<$field:camel>]),
                        key,
                    ));
                }
                map.insert(key, value.into());
                ::std::result::Result::Ok(self)
            }

            #[doc = concat!("Removes all the entries in `", stringify!($field), "`, resetting it to unset.")]
            pub fn [<clear_ $field _entries>](&mut self) -> &mut Self {
                self.$field = ::std::option::Option::None;
                self
            }
        }
    };
}
