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

use crate::model::{Operation, Status};
use apicore::lro::{LongRunningOperation, OperationError};

impl LongRunningOperation for Operation {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    fn done(&self) -> bool {
        self.done.unwrap_or(false)
    }
    fn error(&self) -> Option<OperationError> {
        self.error.as_ref().map(OperationError::from)
    }
    fn metadata(&self) -> Option<&apicore::Map> {
        self.metadata.as_ref()
    }
    fn response(&self) -> Option<&apicore::Map> {
        self.response.as_ref()
    }
}

#[doc(hidden)]
impl From<&Status> for OperationError {
    fn from(value: &Status) -> Self {
        Self {
            code: value.code.unwrap_or_default(),
            message: value.message.clone().unwrap_or_default(),
            details: value.details.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ImportResourcesResponse, OperationMetadata, ProgressCounter};
    use apicore::lro::{decode_metadata, into_result};
    use serde_json::json;
    type TestResult = anyhow::Result<()>;

    #[test]
    fn long_running_operation() {
        let operation = Operation::new();
        assert!(operation.name().is_none(), "{operation:?}");
        assert!(!operation.done(), "{operation:?}");
        assert!(operation.error().is_none(), "{operation:?}");

        let operation = Operation::new()
            .set_name("projects/p/locations/l/datasets/d/operations/123")
            .set_done(true);
        assert_eq!(
            operation.name(),
            Some("projects/p/locations/l/datasets/d/operations/123")
        );
        assert!(operation.done(), "{operation:?}");
    }

    #[test]
    fn status_to_error() {
        let detail = json!({"@type": "type.googleapis.com/google.rpc.ErrorInfo", "reason": "BUSY"});
        let status = Status::new()
            .set_code(10)
            .set_message("concurrent modification")
            .set_details(detail.as_object().cloned());
        let got = OperationError::from(&status);
        assert_eq!(got.code, 10);
        assert_eq!(got.message, "concurrent modification");
        assert_eq!(got.details.len(), 1, "{got:?}");

        let got = OperationError::from(&Status::new());
        assert_eq!(got, OperationError::default());
    }

    #[test]
    fn import_in_progress() -> TestResult {
        let operation = serde_json::from_value::<Operation>(json!({
            "name": "projects/p/locations/l/datasets/d/operations/123",
            "metadata": {
                "@type": "type.googleapis.com/google.cloud.healthcare.v1.OperationMetadata",
                "apiMethodName": "google.cloud.healthcare.v1.fhir.FhirStoreService.ImportResources",
                "createTime": "2025-01-02T03:04:05Z",
                "counter": {"success": "12", "pending": "3"}
            }
        }))?;
        assert_eq!(into_result::<ImportResourcesResponse, _>(&operation)?, None);

        let metadata = decode_metadata::<OperationMetadata, _>(&operation)?;
        let counter = metadata.and_then(|m| m.counter);
        assert_eq!(
            counter,
            Some(ProgressCounter::new().set_success(12).set_pending(3))
        );
        Ok(())
    }

    #[test]
    fn import_failed() -> TestResult {
        let operation = serde_json::from_value::<Operation>(json!({
            "name": "projects/p/locations/l/datasets/d/operations/123",
            "done": true,
            "error": {"code": 3, "message": "invalid resource"}
        }))?;
        let got = into_result::<ImportResourcesResponse, _>(&operation);
        let err = got.err();
        assert_eq!(err.as_ref().and_then(|e| e.operation_code()), Some(3), "{err:?}");
        Ok(())
    }

    #[test]
    fn import_succeeded() -> TestResult {
        let operation = serde_json::from_value::<Operation>(json!({
            "name": "projects/p/locations/l/datasets/d/operations/123",
            "done": true,
            "response": {
                "@type": "type.googleapis.com/google.cloud.healthcare.v1.fhir.ImportResourcesResponse"
            }
        }))?;
        let got = into_result::<ImportResourcesResponse, _>(&operation)?;
        assert_eq!(got, Some(ImportResourcesResponse::new()));
        Ok(())
    }
}
