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

//! Implementation details used by the generated model crates.
//!
//! These types are intended for the message definitions in this workspace.
//! They are undocumented and may change at any time.

use serde::de::Unexpected::Other;

/// Encodes `int64` properties.
///
/// The services send 64-bit integers as decimal strings, because JSON
/// numbers cannot represent all `i64` values. Both strings and numbers are
/// accepted on input.
pub struct I64;

impl<'de> serde_with::DeserializeAs<'de, i64> for I64 {
    fn deserialize_as<D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        deserializer.deserialize_any(I64Visitor)
    }
}

impl serde_with::SerializeAs<i64> for I64 {
    fn serialize_as<S>(source: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(source)
    }
}

const EXPECTING: &str = "a 64-bit signed integer";

struct I64Visitor;

impl serde::de::Visitor<'_> for I64Visitor {
    type Value = i64;

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        // Parsing as `f64` first would round integers just outside the
        // range and accept them.
        if let Ok(v) = value.parse::<i128>() {
            return self.visit_i128(v);
        }
        let number = value.parse::<f64>().map_err(E::custom)?;
        self.visit_f64(number)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(value)
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        i64::try_from(value).map_err(|_| value_error(value))
    }

    fn visit_i128<E>(self, value: i128) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        i64::try_from(value).map_err(|_| value_error(value))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        match value {
            _ if value < i64::MIN as f64 => Err(value_error(value)),
            // `i64::MAX as f64` rounds up to 2^63, an exclusive bound.
            _ if value >= i64::MAX as f64 => Err(value_error(value)),
            _ if value.fract() != 0.0 => Err(value_error(value)),
            // In range with no fractional part, the conversion is exact.
            _ => Ok(value as i64),
        }
    }

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str(EXPECTING)
    }
}

fn value_error<T, E>(value: T) -> E
where
    T: std::fmt::Display,
    E: serde::de::Error,
{
    E::invalid_value(Other(&format!("{value}")), &EXPECTING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::{Value, json};
    use serde_with::{DeserializeAs, SerializeAs};
    use test_case::test_case;

    #[test_case(0, 0)]
    #[test_case("0", 0; "zero string")]
    #[test_case("2.0", 2)]
    #[test_case(3e5, 300_000)]
    #[test_case("-7", -7)]
    #[test_case(84, 84)]
    #[test_case("1152921504606846976", 1_i64 << 60; "beyond f64 mantissa")]
    #[test_case(i64::MAX, i64::MAX; "max")]
    #[test_case(format!("{}", i64::MAX), i64::MAX; "max as string")]
    #[test_case(i64::MIN, i64::MIN; "min")]
    #[test_case(-9223372036854775808.0_f64, i64::MIN; "min as float")]
    #[test_case(9223372036854774784.0_f64, 9223372036854774784; "largest float below 2^63")]
    #[test_case(format!("{}", i64::MIN), i64::MIN; "min as string")]
    fn deser_and_ser<T: serde::Serialize>(input: T, want: i64) -> Result<()> {
        let got = I64::deserialize_as(json!(input))?;
        assert_eq!(got, want);

        let serialized = I64::serialize_as(&got, serde_json::value::Serializer)?;
        assert_eq!(serialized, json!(got.to_string()));
        Ok(())
    }

    #[test_case(json!(i64::MAX as f64 * 2.0))]
    #[test_case(json!(format!("{}", i64::MAX as i128 + 1)); "MAX+1 as string")]
    #[test_case(json!(u64::MAX); "u64 max")]
    #[test_case(json!(9223372036854775808.0_f64); "2^63 as float")]
    #[test_case(json!("9223372036854775808.0"); "2^63 as float string")]
    #[test_case(json!(-9223372036854777856.0_f64); "below min as float")]
    #[test_case(json!("abc"))]
    #[test_case(json!(123.4))]
    #[test_case(json!("-345.6"))]
    #[test_case(json!({}))]
    fn deser_error(input: Value) {
        let got = I64::deserialize_as(input).unwrap_err();
        assert!(got.is_data(), "{got:?}");
    }

    #[serde_with::serde_as]
    #[serde_with::skip_serializing_none]
    #[derive(Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    struct Counter {
        #[serde_as(as = "Option<I64>")]
        success: Option<i64>,
        #[serde(flatten)]
        _unknown_fields: serde_json::Map<String, Value>,
    }

    #[test]
    fn in_message() -> Result<()> {
        let counter = Counter {
            success: Some(42),
            ..Default::default()
        };
        let got = serde_json::to_value(&counter)?;
        assert_eq!(got, json!({"success": "42"}));
        let roundtrip = serde_json::from_value::<Counter>(json!({"success": 42}))?;
        assert_eq!(roundtrip, counter);
        let empty = serde_json::to_value(Counter::default())?;
        assert_eq!(empty, json!({}));
        Ok(())
    }
}
