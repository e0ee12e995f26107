// Copyright 2024 Google LLC
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

//! Parse and format the RFC 3339 timestamps used in resources.
//!
//! Fields such as `createTime` or `expireTime` are plain strings in the
//! messages. Use these functions to convert them.

use crate::{Error, Result};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Parses an RFC 3339 timestamp, e.g., `"2025-01-02T03:04:05.678Z"`.
///
/// # Example
/// ```
/// # use google_cloud_apicore::timestamp;
/// let ts = timestamp::parse("2025-01-02T03:04:05Z")?;
/// assert_eq!(ts.unix_timestamp(), 1735787045);
/// # Ok::<(), google_cloud_apicore::Error>(())
/// ```
pub fn parse(value: &str) -> Result<OffsetDateTime> {
    OffsetDateTime::parse(value, &Rfc3339).map_err(|e| Error::Timestamp(e.into()))
}

/// Formats a timestamp in UTC, using the RFC 3339 format.
pub fn format(value: OffsetDateTime) -> Result<String> {
    value
        .to_offset(time::UtcOffset::UTC)
        .format(&Rfc3339)
        .map_err(|e| Error::Timestamp(e.into()))
}

/// Parses an RFC 3339 timestamp into a [chrono::DateTime].
#[cfg(feature = "chrono")]
pub fn parse_chrono(value: &str) -> Result<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&chrono::Utc))
        .map_err(|e| Error::Timestamp(e.into()))
}

/// Formats a [chrono::DateTime] using the RFC 3339 format.
#[cfg(feature = "chrono")]
pub fn format_chrono(value: chrono::DateTime<chrono::Utc>) -> String {
    value.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    use time::macros::{datetime, offset};
    type TestResult = anyhow::Result<()>;

    #[test_case("2025-01-02T03:04:05Z", datetime!(2025-01-02 03:04:05 UTC))]
    #[test_case("2025-01-02T03:04:05.5Z", datetime!(2025-01-02 03:04:05.5 UTC))]
    #[test_case("2025-01-02T05:04:05+02:00", datetime!(2025-01-02 03:04:05 UTC); "with offset")]
    fn parse_valid(input: &str, want: OffsetDateTime) -> TestResult {
        let got = parse(input)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case("")]
    #[test_case("2025-01-02")]
    #[test_case("not a timestamp")]
    fn parse_invalid(input: &str) {
        let got = parse(input);
        assert!(matches!(got, Err(Error::Timestamp(_))), "{got:?}");
    }

    #[test]
    fn format_utc() -> TestResult {
        let input = datetime!(2025-01-02 03:04:05.25 UTC).to_offset(offset!(+2));
        let got = format(input)?;
        assert_eq!(got, "2025-01-02T03:04:05.25Z");
        Ok(())
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn chrono_roundtrip() -> TestResult {
        let got = parse_chrono("2025-01-02T03:04:05.678Z")?;
        assert_eq!(got.timestamp(), 1735787045);
        assert_eq!(format_chrono(got), "2025-01-02T03:04:05.678Z");
        Ok(())
    }
}
