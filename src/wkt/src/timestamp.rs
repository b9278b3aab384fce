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

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

const NANOS_PER_SECOND: i32 = 1_000_000_000;

/// An instant in UTC, such as the time a device sampled its position or the
/// time a route departs.
///
/// The service sends and receives these values as RFC 3339 strings, for
/// example `2025-05-16T09:46:12.5Z`. Any UTC offset is accepted on input, the
/// output always uses `Z`.
///
/// ```
/// # use geosdk_wkt::{Timestamp, TimestampError};
/// let sampled = Timestamp::try_from("2025-05-16T11:46:12.5+02:00")?;
/// assert_eq!(sampled.to_string(), "2025-05-16T09:46:12.5Z");
/// assert_eq!((sampled.seconds(), sampled.nanos()), (1747388772, 500_000_000));
/// # Ok::<(), TimestampError>(())
/// ```
///
/// Values are limited to the years 0001 through 9999, the range RFC 3339 can
/// represent. Timestamps order chronologically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub struct Timestamp {
    // Field order matters for the derived `Ord`.
    seconds: i64,
    // Always in `0..NANOS_PER_SECOND`.
    nanos: i32,
}

/// The error returned when a [Timestamp] cannot be built.
///
/// ```
/// # use geosdk_wkt::{Timestamp, TimestampError};
/// let err = Timestamp::try_from("16/05/2025 09:46").unwrap_err();
/// assert!(matches!(err, TimestampError::Parse(_)));
///
/// let err = Timestamp::new(0, -1).unwrap_err();
/// assert!(matches!(err, TimestampError::OutOfRange));
/// ```
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum TimestampError {
    /// The value is before year 0001, after year 9999, or has an invalid
    /// fraction of a second.
    #[error("the timestamp is outside the supported range")]
    OutOfRange,

    /// The string is not an RFC 3339 date and time.
    #[error("the timestamp is not a valid RFC 3339 string: {0}")]
    Parse(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Timestamp {
    /// `0001-01-01T00:00:00Z` as seconds since the Unix epoch.
    pub const MIN_SECONDS: i64 = -62_135_596_800;

    /// `9999-12-31T23:59:59Z` as seconds since the Unix epoch.
    pub const MAX_SECONDS: i64 = 253_402_300_799;

    pub const MIN_NANOS: i32 = 0;

    pub const MAX_NANOS: i32 = NANOS_PER_SECOND - 1;

    /// Returns the timestamp `seconds` and `nanos` after the Unix epoch.
    ///
    /// ```
    /// # use geosdk_wkt::{Timestamp, TimestampError};
    /// let departure = Timestamp::new(1747388772, 0)?;
    /// assert_eq!(departure.to_string(), "2025-05-16T09:46:12Z");
    /// assert!(Timestamp::new(1747388772, 1_000_000_000).is_err());
    /// # Ok::<(), TimestampError>(())
    /// ```
    pub fn new(seconds: i64, nanos: i32) -> Result<Self, TimestampError> {
        let seconds_ok = (Self::MIN_SECONDS..=Self::MAX_SECONDS).contains(&seconds);
        let nanos_ok = (Self::MIN_NANOS..=Self::MAX_NANOS).contains(&nanos);
        match (seconds_ok, nanos_ok) {
            (true, true) => Ok(Self { seconds, nanos }),
            _ => Err(TimestampError::OutOfRange),
        }
    }

    /// Like [new()][Timestamp::new], but never fails.
    ///
    /// Whole seconds in `nanos` (positive or negative) move into `seconds`,
    /// and results outside the supported years saturate at the first or last
    /// second.
    ///
    /// ```
    /// # use geosdk_wkt::Timestamp;
    /// let ts = Timestamp::clamp(1747388772, -500_000_000);
    /// assert_eq!(ts.to_string(), "2025-05-16T09:46:11.5Z");
    /// assert_eq!(Timestamp::clamp(i64::MAX, 0).seconds(), Timestamp::MAX_SECONDS);
    /// ```
    pub fn clamp(seconds: i64, nanos: i32) -> Self {
        let carry = i64::from(nanos.div_euclid(NANOS_PER_SECOND));
        let nanos = nanos.rem_euclid(NANOS_PER_SECOND);
        match seconds.saturating_add(carry) {
            s if s < Self::MIN_SECONDS => Self {
                seconds: Self::MIN_SECONDS,
                nanos: 0,
            },
            s if s > Self::MAX_SECONDS => Self {
                seconds: Self::MAX_SECONDS,
                nanos: 0,
            },
            seconds => Self { seconds, nanos },
        }
    }

    /// Whole seconds since `1970-01-01T00:00:00Z`, negative for earlier times.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// The fraction of the second, in nanoseconds. Never negative.
    pub fn nanos(&self) -> i32 {
        self.nanos
    }

    fn unix_nanos(self) -> i128 {
        i128::from(self.seconds) * i128::from(NANOS_PER_SECOND) + i128::from(self.nanos)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let utc = OffsetDateTime::try_from(*self).map_err(|_| std::fmt::Error)?;
        let text = utc.format(&Rfc3339).map_err(|_| std::fmt::Error)?;
        f.write_str(&text)
    }
}

impl std::str::FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed =
            OffsetDateTime::parse(s, &Rfc3339).map_err(|e| TimestampError::Parse(e.into()))?;
        Self::try_from(parsed)
    }
}

impl TryFrom<&str> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&String> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: &String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl serde::Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Fails for dates before year 0001 or after year 9999.
///
/// ```
/// # use geosdk_wkt::Timestamp;
/// use time::macros::datetime;
/// let ts = Timestamp::try_from(datetime!(2025-05-16 11:46:12 +2))?;
/// assert_eq!(ts.to_string(), "2025-05-16T09:46:12Z");
/// # Ok::<(), anyhow::Error>(())
/// ```
impl TryFrom<OffsetDateTime> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: OffsetDateTime) -> Result<Self, Self::Error> {
        let total = value.unix_timestamp_nanos();
        let per_second = i128::from(NANOS_PER_SECOND);
        let seconds =
            i64::try_from(total.div_euclid(per_second)).map_err(|_| TimestampError::OutOfRange)?;
        let nanos =
            i32::try_from(total.rem_euclid(per_second)).map_err(|_| TimestampError::OutOfRange)?;
        Self::new(seconds, nanos)
    }
}

/// The result is always in UTC.
impl TryFrom<Timestamp> for OffsetDateTime {
    type Error = time::error::ComponentRange;

    fn try_from(value: Timestamp) -> Result<Self, Self::Error> {
        OffsetDateTime::from_unix_timestamp_nanos(value.unix_nanos())
    }
}

/// Fails for dates before year 0001 or after year 9999.
#[cfg(feature = "chrono")]
#[cfg_attr(docsrs, doc(cfg(feature = "chrono")))]
impl TryFrom<chrono::DateTime<chrono::Utc>> for Timestamp {
    type Error = TimestampError;

    fn try_from(value: chrono::DateTime<chrono::Utc>) -> Result<Self, Self::Error> {
        // chrono reports leap seconds with at least one billion nanos.
        let nanos = i32::try_from(value.timestamp_subsec_nanos())
            .map_err(|_| TimestampError::OutOfRange)?;
        Self::new(value.timestamp(), nanos)
    }
}

#[cfg(feature = "chrono")]
#[cfg_attr(docsrs, doc(cfg(feature = "chrono")))]
impl TryFrom<Timestamp> for chrono::DateTime<chrono::Utc> {
    type Error = TimestampError;

    fn try_from(value: Timestamp) -> Result<Self, Self::Error> {
        let nanos = u32::try_from(value.nanos).map_err(|_| TimestampError::OutOfRange)?;
        chrono::DateTime::from_timestamp(value.seconds, nanos).ok_or(TimestampError::OutOfRange)
    }
}
