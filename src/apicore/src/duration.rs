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

//! Parse and format the duration strings used in resources.
//!
//! Durations, such as `Consent.ttl`, are sent as decimal seconds with an `s`
//! suffix, e.g. `"3.5s"`.

use crate::{Error, Result};
use std::time::Duration;

const NANOS_DIGITS: usize = 9;

/// Parses a duration string, e.g., `"86400s"` or `"0.000001s"`.
///
/// Negative durations are rejected, they cannot be represented as a
/// [std::time::Duration].
///
/// # Example
/// ```
/// # use google_cloud_apicore::duration;
/// let d = duration::parse("12.34s")?;
/// assert_eq!(d, std::time::Duration::from_millis(12_340));
/// # Ok::<(), google_cloud_apicore::Error>(())
/// ```
pub fn parse(value: &str) -> Result<Duration> {
    let digits = value
        .strip_suffix('s')
        .ok_or_else(|| Error::Duration("missing trailing 's'".into()))?;
    if digits.starts_with('-') {
        return Err(Error::Duration("negative durations are not supported".into()));
    }
    let (seconds, nanos) = match digits.split_once('.') {
        Some((s, n)) => (s, Some(n)),
        None => (digits, None),
    };
    if seconds.is_empty() || !seconds.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Duration(format!("invalid seconds in {value:?}").into()));
    }
    let seconds = seconds
        .parse::<u64>()
        .map_err(|e| Error::Duration(e.into()))?;
    let nanos = match nanos {
        None => 0,
        Some(n) if n.is_empty() || n.len() > NANOS_DIGITS => {
            return Err(Error::Duration(format!("invalid fraction in {value:?}").into()));
        }
        Some(n) if !n.bytes().all(|b| b.is_ascii_digit()) => {
            return Err(Error::Duration(format!("invalid fraction in {value:?}").into()));
        }
        Some(n) => format!("{n:0<width$}", width = NANOS_DIGITS)
            .parse::<u32>()
            .map_err(|e| Error::Duration(e.into()))?,
    };
    Ok(Duration::new(seconds, nanos))
}

/// Formats a duration in the shortest form that preserves its value.
///
/// # Example
/// ```
/// # use google_cloud_apicore::duration;
/// assert_eq!(duration::format(std::time::Duration::from_millis(3_500)), "3.5s");
/// assert_eq!(duration::format(std::time::Duration::from_secs(60)), "60s");
/// ```
pub fn format(value: Duration) -> String {
    if value.subsec_nanos() == 0 {
        return format!("{}s", value.as_secs());
    }
    let nanos = format!("{:09}", value.subsec_nanos());
    format!("{}.{}s", value.as_secs(), nanos.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    #[test_case("0s", Duration::ZERO)]
    #[test_case("86400s", Duration::from_secs(86_400))]
    #[test_case("3.5s", Duration::from_millis(3_500))]
    #[test_case("0.000000001s", Duration::from_nanos(1))]
    #[test_case("12.340s", Duration::from_millis(12_340); "trailing zero")]
    fn parse_valid(input: &str, want: Duration) -> TestResult {
        let got = parse(input)?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case(""; "empty")]
    #[test_case("s"; "only suffix")]
    #[test_case("10"; "missing suffix")]
    #[test_case("-1s"; "negative")]
    #[test_case("+1s"; "explicit sign")]
    #[test_case("1.s"; "empty fraction")]
    #[test_case(".5s"; "empty seconds")]
    #[test_case("1.0000000001s"; "too many fraction digits")]
    #[test_case("1.2e3s"; "exponent")]
    fn parse_invalid(input: &str) {
        let got = parse(input);
        assert!(matches!(got, Err(Error::Duration(_))), "{got:?}");
    }

    #[test_case(Duration::ZERO, "0s")]
    #[test_case(Duration::from_millis(3_500), "3.5s")]
    #[test_case(Duration::from_nanos(1_000_000_001), "1.000000001s")]
    fn format_values(input: Duration, want: &str) {
        assert_eq!(format(input), want);
    }

    #[test]
    fn roundtrip() -> TestResult {
        let input = Duration::new(1_234, 567_000_000);
        assert_eq!(parse(&format(input))?, input);
        Ok(())
    }
}
