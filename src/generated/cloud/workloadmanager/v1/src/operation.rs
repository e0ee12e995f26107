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
    use crate::model::{Empty, Evaluation, OperationMetadata};
    use apicore::lro::{decode_metadata, into_result};
    use serde_json::json;
    type TestResult = anyhow::Result<()>;

    #[test]
    fn create_evaluation() -> TestResult {
        let operation = serde_json::from_value::<Operation>(json!({
            "name": "projects/p/locations/us-central1/operations/op-1",
            "metadata": {
                "@type": "type.googleapis.com/google.cloud.workloadmanager.v1.OperationMetadata",
                "verb": "create",
                "target": "projects/p/locations/us-central1/evaluations/e1",
                "requestedCancellation": false
            }
        }))?;
        assert!(!operation.done(), "{operation:?}");
        assert_eq!(into_result::<Evaluation, _>(&operation)?, None);
        let metadata = decode_metadata::<OperationMetadata, _>(&operation)?;
        assert_eq!(metadata.as_ref().and_then(|m| m.verb.as_deref()), Some("create"));
        assert_eq!(metadata.and_then(|m| m.requested_cancellation), Some(false));

        let operation = operation.set_done(true).set_response(
            json!({
                "@type": "type.googleapis.com/google.cloud.workloadmanager.v1.Evaluation",
                "name": "projects/p/locations/us-central1/evaluations/e1",
                "ruleNames": ["sap-hana-backup"]
            })
            .as_object()
            .cloned()
            .unwrap_or_default(),
        );
        let got = into_result::<Evaluation, _>(&operation)?;
        let want = Evaluation::new()
            .set_name("projects/p/locations/us-central1/evaluations/e1")
            .set_rule_names(["sap-hana-backup"]);
        assert_eq!(got, Some(want));
        Ok(())
    }

    #[test]
    fn delete_evaluation() -> TestResult {
        let operation = Operation::new().set_name("operations/op-2").set_done(true);
        assert_eq!(into_result::<Empty, _>(&operation)?, Some(Empty::new()));
        Ok(())
    }

    #[test]
    fn cancelled() {
        let operation = Operation::new().set_done(true).set_error(
            Status::new()
                .set_code(1)
                .set_message("operation cancelled by the caller"),
        );
        let err = operation.error();
        assert_eq!(err.as_ref().map(|e| e.code), Some(1), "{err:?}");
        let got = into_result::<Evaluation, _>(&operation);
        assert!(
            matches!(got, Err(ref e) if e.operation_code() == Some(1)),
            "{got:?}"
        );
    }
}
