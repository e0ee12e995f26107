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

//! Decode the results of long-running operations.
//!
//! Long-running operations return an envelope with `name`, `done`, `error`,
//! `metadata`, and `response` fields. The `metadata` and `response` fields
//! are free-form JSON objects, tagged with a `@type` field. The functions in
//! this module decode them into typed messages.

use crate::message::{Message, from_json_object};
use crate::{Error, Map, Result};

/// The error carried by a completed, failed operation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OperationError {
    /// The `google.rpc.Code` value.
    pub code: i32,
    /// A developer-facing error message, in English.
    pub message: String,
    /// Additional error information, each tagged with a `@type`.
    pub details: Vec<Map>,
}

impl From<OperationError> for Error {
    fn from(value: OperationError) -> Self {
        Error::Operation {
            code: value.code,
            message: value.message,
        }
    }
}

/// Implemented by the `Operation` message of each service.
pub trait LongRunningOperation {
    /// The server-assigned name of the operation, if any.
    fn name(&self) -> Option<&str>;

    /// Returns true if the operation has completed.
    ///
    /// A missing `done` field means the operation is in progress.
    fn done(&self) -> bool;

    /// The error result, if the operation failed.
    fn error(&self) -> Option<OperationError>;

    /// The service-specific metadata, if any.
    fn metadata(&self) -> Option<&Map>;

    /// The normal response, if the operation succeeded.
    fn response(&self) -> Option<&Map>;
}

/// Decodes the metadata of `op` as `M`.
///
/// Returns `Ok(None)` if the operation has no metadata.
pub fn decode_metadata<M, O>(op: &O) -> Result<Option<M>>
where
    M: Message,
    O: LongRunningOperation + ?Sized,
{
    op.metadata().map(decode::<M>).transpose()
}

/// Decodes the response of `op` as `R`.
///
/// Returns `Ok(None)` if the operation has no response.
pub fn decode_response<R, O>(op: &O) -> Result<Option<R>>
where
    R: Message,
    O: LongRunningOperation + ?Sized,
{
    op.response().map(decode::<R>).transpose()
}

/// Converts a polled operation into its final result.
///
/// * `Ok(None)` while the operation is in progress.
/// * `Err(Error::Operation{..})` if the operation completed with an error.
/// * `Ok(Some(r))` if the operation completed successfully.
///
/// Operations returning `Empty` may omit the response, in that case the
/// result is the default value of `R`.
pub fn into_result<R, O>(op: &O) -> Result<Option<R>>
where
    R: Message + Default,
    O: LongRunningOperation + ?Sized,
{
    if !op.done() {
        tracing::debug!(name = op.name(), "operation in progress");
        return Ok(None);
    }
    tracing::debug!(name = op.name(), "operation completed");
    match (op.response(), op.error()) {
        (_, Some(e)) => Err(e.into()),
        (Some(r), None) => decode::<R>(r).map(Some),
        (None, None) if is_empty_message::<R>() => Ok(Some(R::default())),
        (None, None) => Err(Error::deser(
            "neither response nor error set in a completed operation",
        )),
    }
}

fn is_empty_message<R>() -> bool
where
    R: Message + Default,
{
    serde_json::to_value(R::default())
        .map(|v| v.as_object().is_some_and(Map::is_empty))
        .unwrap_or(false)
        && simple_name(R::typename()) == "Empty"
}

fn decode<T>(map: &Map) -> Result<T>
where
    T: Message,
{
    // Discovery documents do not record the proto package of each schema,
    // only the simple names can be compared.
    if let Some(got) = map.get("@type").and_then(serde_json::Value::as_str) {
        let want = T::typename();
        if simple_name(got) != simple_name(want) {
            tracing::warn!(want, got, "mismatched @type in operation");
            return Err(Error::TypeMismatch {
                want: want.to_string(),
                got: got.to_string(),
            });
        }
    }
    from_json_object::<T>(map)
}

fn simple_name(type_url: &str) -> &str {
    type_url.rsplit(['/', '.']).next().unwrap_or(type_url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    #[derive(Debug, Default)]
    struct FakeOperation {
        name: Option<String>,
        done: Option<bool>,
        error: Option<OperationError>,
        metadata: Option<Map>,
        response: Option<Map>,
    }

    impl LongRunningOperation for FakeOperation {
        fn name(&self) -> Option<&str> {
            self.name.as_deref()
        }
        fn done(&self) -> bool {
            self.done.unwrap_or(false)
        }
        fn error(&self) -> Option<OperationError> {
            self.error.clone()
        }
        fn metadata(&self) -> Option<&Map> {
            self.metadata.as_ref()
        }
        fn response(&self) -> Option<&Map> {
            self.response.as_ref()
        }
    }

    #[serde_with::skip_serializing_none]
    #[derive(Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    struct Summary {
        success_count: Option<i32>,
    }

    impl Message for Summary {
        fn typename() -> &'static str {
            "type.googleapis.com/google.cloud.test.v1.Summary"
        }
    }

    #[derive(Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    struct Empty {}

    impl Message for Empty {
        fn typename() -> &'static str {
            "type.googleapis.com/google.protobuf.Empty"
        }
    }

    fn object(value: serde_json::Value) -> Option<Map> {
        value.as_object().cloned()
    }

    #[test]
    fn in_progress() -> TestResult {
        let op = FakeOperation {
            name: Some("operations/123".into()),
            metadata: object(json!({"@type": "type.googleapis.com/google.cloud.test.v1.Summary", "successCount": 3})),
            ..Default::default()
        };
        assert_eq!(into_result::<Summary, _>(&op)?, None);
        let metadata = decode_metadata::<Summary, _>(&op)?;
        assert_eq!(metadata.and_then(|m| m.success_count), Some(3));
        Ok(())
    }

    #[test]
    fn completed_with_response() -> TestResult {
        let op = FakeOperation {
            done: Some(true),
            response: object(json!({"@type": "type.googleapis.com/google.cloud.test.v1.Summary", "successCount": 7})),
            ..Default::default()
        };
        let got = into_result::<Summary, _>(&op)?;
        assert_eq!(got, Some(Summary { success_count: Some(7) }));
        Ok(())
    }

    #[test]
    fn completed_with_error() {
        let op = FakeOperation {
            done: Some(true),
            error: Some(OperationError {
                code: 9,
                message: "store is busy".into(),
                details: Vec::new(),
            }),
            ..Default::default()
        };
        let got = into_result::<Summary, _>(&op);
        assert!(
            matches!(got, Err(Error::Operation { code: 9, ref message }) if message == "store is busy"),
            "{got:?}"
        );
    }

    #[test]
    fn completed_with_empty() -> TestResult {
        let op = FakeOperation {
            done: Some(true),
            ..Default::default()
        };
        assert_eq!(into_result::<Empty, _>(&op)?, Some(Empty {}));
        Ok(())
    }

    #[test]
    fn completed_without_result() {
        let op = FakeOperation {
            done: Some(true),
            ..Default::default()
        };
        let got = into_result::<Summary, _>(&op);
        assert!(matches!(got, Err(ref e) if e.is_deserialization()), "{got:?}");
    }

    #[test]
    fn type_mismatch() {
        let op = FakeOperation {
            done: Some(true),
            response: object(json!({"@type": "type.googleapis.com/google.cloud.test.v1.Other"})),
            ..Default::default()
        };
        let got = decode_response::<Summary, _>(&op);
        assert!(matches!(got, Err(Error::TypeMismatch { .. })), "{got:?}");
    }

    #[test]
    fn untagged_response() -> TestResult {
        let op = FakeOperation {
            done: Some(true),
            response: object(json!({"successCount": 1})),
            ..Default::default()
        };
        let got = decode_response::<Summary, _>(&op)?;
        assert_eq!(got, Some(Summary { success_count: Some(1) }));
        Ok(())
    }

    #[test_case("type.googleapis.com/google.cloud.healthcare.v1.OperationMetadata", "OperationMetadata")]
    #[test_case("type.googleapis.com/google.cloud.healthcare.v1.fhir.ImportResourcesResponse", "ImportResourcesResponse")]
    #[test_case("Empty", "Empty")]
    fn simple_names(input: &str, want: &str) {
        assert_eq!(simple_name(input), want);
    }
}
