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

//! Define traits required of all messages.

use crate::{Error, Map, Result};

/// A trait that must be implemented by all messages.
///
/// Messages embedded in free-form fields, such as the `metadata` and
/// `response` fields of an operation, carry a `@type` field with this name.
/// The decoding functions in [lro][crate::lro] validate against it.
pub trait Message: serde::ser::Serialize + serde::de::DeserializeOwned {
    /// The typename of this message.
    fn typename() -> &'static str;
}

/// Serializes `message` into a JSON object keyed by the wire names.
pub fn to_json_object<T>(message: &T) -> Result<Map>
where
    T: Message,
{
    use serde_json::Value;

    match serde_json::to_value(message).map_err(Error::ser)? {
        Value::Object(map) => Ok(map),
        _ => Err(Error::UnexpectedJsonType),
    }
}

/// Creates a message from a JSON object keyed by the wire names.
///
/// This is the analog of constructing a message from a bag of keyword
/// arguments: each key present sets the corresponding field. Any `@type`
/// key is ignored.
pub fn from_json_object<T>(map: &Map) -> Result<T>
where
    T: Message,
{
    let map = map
        .iter()
        .filter(|(k, _)| k.as_str() != "@type")
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    serde_json::from_value::<T>(serde_json::Value::Object(map)).map_err(Error::deser)
}

/// Partial updates for all messages.
pub trait MessageExt: Message + Sized {
    /// Overwrites the fields named in `args`.
    ///
    /// Keys are the JSON property names of the message. Every key present
    /// replaces the corresponding field, a `null` value clears the field,
    /// and fields with no key in `args` keep their current value. Nested
    /// messages are replaced, not merged.
    ///
    /// On error `self` is not modified.
    ///
    /// The merge goes through the JSON representation of `self`. JSON has no
    /// encoding for non-finite floating point values, so any `NaN` or
    /// infinite `f64` field is cleared by an update, even if `args` does not
    /// name it.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_apicore::message::{Message, MessageExt};
    /// # #[derive(Default, serde::Serialize, serde::Deserialize)]
    /// # #[serde(rename_all = "camelCase")]
    /// # struct Dataset {
    /// #     #[serde(skip_serializing_if = "Option::is_none")]
    /// #     name: Option<String>,
    /// #     #[serde(skip_serializing_if = "Option::is_none")]
    /// #     time_zone: Option<String>,
    /// # }
    /// # impl Message for Dataset {
    /// #     fn typename() -> &'static str { "test.Dataset" }
    /// # }
    /// let mut dataset = Dataset { name: Some("d1".into()), ..Default::default() };
    /// let args = serde_json::json!({"timeZone": "America/New_York"});
    /// dataset.update(args.as_object().cloned().unwrap_or_default())?;
    /// assert_eq!(dataset.name.as_deref(), Some("d1"));
    /// assert_eq!(dataset.time_zone.as_deref(), Some("America/New_York"));
    /// # Ok::<(), google_cloud_apicore::Error>(())
    /// ```
    fn update(&mut self, args: Map) -> Result<()> {
        let mut current = to_json_object(self)?;
        tracing::debug!(
            typename = Self::typename(),
            fields = ?args.keys().collect::<Vec<_>>(),
            "partial update"
        );
        for (key, value) in args {
            if key == "@type" {
                continue;
            }
            if value.is_null() {
                current.remove(&key);
            } else {
                current.insert(key, value);
            }
        }
        *self = from_json_object(&current)?;
        Ok(())
    }

    /// Overwrites the fields of `self` that are set in `other`.
    ///
    /// Fields unset in `other` keep their current value.
    fn merge_from(&mut self, other: &Self) -> Result<()> {
        let args = to_json_object(other)?;
        self.update(args)
    }
}

impl<T> MessageExt for T where T: Message {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    type TestResult = anyhow::Result<()>;

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    struct Store {
        name: Option<String>,
        labels: Option<std::collections::HashMap<String, String>>,
        version: Option<i32>,
        ratio: Option<f64>,
        config: Option<Config>,
        #[serde(flatten)]
        _unknown_fields: Map,
    }

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    struct Config {
        enabled: Option<bool>,
        topic: Option<String>,
    }

    impl Message for Store {
        fn typename() -> &'static str {
            "type.googleapis.com/test.Store"
        }
    }

    fn args(value: serde_json::Value) -> Map {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn object_roundtrip() -> TestResult {
        let input = args(json!({"name": "s1", "version": 7, "config": {"enabled": true}}));
        let store = from_json_object::<Store>(&input)?;
        assert_eq!(store.name.as_deref(), Some("s1"));
        assert_eq!(store.version, Some(7));
        let got = to_json_object(&store)?;
        assert_eq!(got, input);
        Ok(())
    }

    #[test]
    fn from_object_ignores_type() -> TestResult {
        let input = args(json!({"@type": "type.googleapis.com/test.Store", "name": "s1"}));
        let store = from_json_object::<Store>(&input)?;
        assert_eq!(store.name.as_deref(), Some("s1"));
        assert!(store._unknown_fields.is_empty(), "{store:?}");
        Ok(())
    }

    #[test]
    fn from_object_bad_type() {
        let input = args(json!({"version": "not-a-number"}));
        let got = from_json_object::<Store>(&input);
        assert!(matches!(got, Err(ref e) if e.is_deserialization()), "{got:?}");
    }

    #[test]
    fn update_preserves_absent() -> TestResult {
        let mut store = Store {
            name: Some("s1".into()),
            version: Some(1),
            config: Some(Config {
                enabled: Some(true),
                topic: Some("t1".into()),
            }),
            ..Default::default()
        };
        store.update(args(json!({"version": 2})))?;
        assert_eq!(store.name.as_deref(), Some("s1"));
        assert_eq!(store.version, Some(2));
        assert_eq!(store.config.as_ref().and_then(|c| c.topic.as_deref()), Some("t1"));
        Ok(())
    }

    #[test]
    fn update_null_clears() -> TestResult {
        let mut store = Store {
            name: Some("s1".into()),
            version: Some(1),
            ..Default::default()
        };
        store.update(args(json!({"version": null})))?;
        assert_eq!(store.name.as_deref(), Some("s1"));
        assert_eq!(store.version, None);
        Ok(())
    }

    #[test]
    fn update_replaces_nested() -> TestResult {
        let mut store = Store {
            config: Some(Config {
                enabled: Some(true),
                topic: Some("t1".into()),
            }),
            ..Default::default()
        };
        store.update(args(json!({"config": {"topic": "t2"}})))?;
        let want = Config {
            enabled: None,
            topic: Some("t2".into()),
        };
        assert_eq!(store.config, Some(want));
        Ok(())
    }

    #[test]
    fn update_keeps_unknown() -> TestResult {
        let mut store = Store::default();
        store.update(args(json!({"name": "s1", "futureField": [1, 2]})))?;
        let got = to_json_object(&store)?;
        assert_eq!(got, args(json!({"name": "s1", "futureField": [1, 2]})));
        Ok(())
    }

    #[test]
    fn update_error_leaves_unchanged() {
        let mut store = Store {
            name: Some("s1".into()),
            ..Default::default()
        };
        let before = store.clone();
        let got = store.update(args(json!({"name": "s2", "version": {"nested": true}})));
        assert!(got.is_err(), "{got:?}");
        assert_eq!(store, before);
    }

    #[test]
    fn update_keeps_finite_floats() -> TestResult {
        let mut store = Store {
            name: Some("s1".into()),
            ratio: Some(0.25),
            ..Default::default()
        };
        store.update(args(json!({"name": "s2"})))?;
        assert_eq!(store.name.as_deref(), Some("s2"));
        assert_eq!(store.ratio, Some(0.25));
        Ok(())
    }

    #[test]
    fn update_clears_non_finite_floats() -> TestResult {
        for ratio in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let mut store = Store {
                name: Some("s1".into()),
                ratio: Some(ratio),
                ..Default::default()
            };
            store.update(args(json!({"name": "s2"})))?;
            assert_eq!(store.name.as_deref(), Some("s2"));
            assert_eq!(store.ratio, None, "{ratio}");
        }
        Ok(())
    }

    #[test]
    fn merge_from() -> TestResult {
        let mut store = Store {
            name: Some("s1".into()),
            version: Some(1),
            ..Default::default()
        };
        let other = Store {
            labels: Some([("env", "test")].map(|(k, v)| (k.to_string(), v.to_string())).into()),
            version: Some(3),
            ..Default::default()
        };
        store.merge_from(&other)?;
        assert_eq!(store.name.as_deref(), Some("s1"));
        assert_eq!(store.version, Some(3));
        assert_eq!(
            store.labels.as_ref().and_then(|l| l.get("env")).map(String::as_str),
            Some("test")
        );
        Ok(())
    }
}
