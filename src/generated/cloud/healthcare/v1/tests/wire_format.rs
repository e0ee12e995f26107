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

//! Verify the JSON representation of the Healthcare messages.

#[cfg(test)]
mod test {
    use google_cloud_healthcare_v1::model::{
        Attribute, Consent, Dataset, Empty, EntityMentionRelationship, ExportResourcesRequest, Expr,
        FhirStore, FhirStoreMetric, GoogleCloudHealthcareV1ConsentPolicy,
        GoogleCloudHealthcareV1FhirGcsDestination, HttpBody, Message, NotificationConfig, Operation,
        Policy, ProgressCounter, TimePartitioning,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    #[test]
    fn fhir_store_roundtrip() -> TestResult {
        let input = json!({
            "name": "projects/p/locations/us/datasets/d/fhirStores/f",
            "version": "R4",
            "enableUpdateCreate": true,
            "disableReferentialIntegrity": false,
            "complexDataTypeReferenceParsing": "ENABLED",
            "labels": {"env": "test", "team": "clinical"},
            "notificationConfig": {
                "pubsubTopic": "projects/p/topics/t",
                "sendForBulkImport": true
            },
            "streamConfigs": [
                {"resourceTypes": ["Patient", "Observation"]}
            ],
            "validationConfig": {
                "disableProfileValidation": true,
                "enabledImplementationGuides": ["http://hl7.org/fhir/us/core/ImplementationGuide/hl7.fhir.us.core"]
            }
        });
        let store = serde_json::from_value::<FhirStore>(input.clone())?;
        assert_eq!(store.version.as_deref(), Some("R4"));
        assert_eq!(store.enable_update_create, Some(true));
        assert_eq!(store.disable_referential_integrity, Some(false));
        assert_eq!(
            store.labels.as_ref().and_then(|l| l.get("team")).map(String::as_str),
            Some("clinical")
        );
        assert_eq!(store.stream_configs.as_ref().map(Vec::len), Some(1));
        let got = serde_json::to_value(&store)?;
        assert_eq!(got, input);
        Ok(())
    }

    #[test]
    fn builders() -> TestResult {
        let store = FhirStore::new()
            .set_name("projects/p/locations/us/datasets/d/fhirStores/f")
            .set_version("R4")
            .set_labels([("env", "test")])
            .set_notification_config(
                NotificationConfig::new().set_pubsub_topic("projects/p/topics/t"),
            )
            .set_or_clear_default_search_handling_strict(None::<bool>);
        let got = serde_json::to_value(&store)?;
        let want = json!({
            "name": "projects/p/locations/us/datasets/d/fhirStores/f",
            "version": "R4",
            "labels": {"env": "test"},
            "notificationConfig": {"pubsubTopic": "projects/p/topics/t"}
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn empty_serializes_to_empty_object() -> TestResult {
        assert_eq!(serde_json::to_value(FhirStore::new())?, json!({}));
        assert_eq!(serde_json::to_value(Empty::new())?, json!({}));
        let store = serde_json::from_value::<FhirStore>(json!({}))?;
        assert_eq!(store, FhirStore::default());
        Ok(())
    }

    #[test]
    fn consent() -> TestResult {
        let input = json!({
            "name": "projects/p/locations/us/datasets/d/consentStores/c/consents/c1",
            "userId": "user-1",
            "state": "ACTIVE",
            "ttl": "86400s",
            "metadata": {"channel": "web"},
            "policies": [{
                "resourceAttributes": [
                    {"attributeDefinitionId": "data_identifiable", "values": ["identifiable"]}
                ],
                "authorizationRule": {
                    "expression": "requesterIdentity == 'clinical-admin'",
                    "title": "admins"
                }
            }]
        });
        let consent = serde_json::from_value::<Consent>(input.clone())?;
        let policy = consent.policies.as_ref().and_then(|p| p.first()).cloned();
        let want = GoogleCloudHealthcareV1ConsentPolicy::new()
            .set_resource_attributes([Attribute::new()
                .set_attribute_definition_id("data_identifiable")
                .set_values(["identifiable"])])
            .set_authorization_rule(
                Expr::new()
                    .set_expression("requesterIdentity == 'clinical-admin'")
                    .set_title("admins"),
            );
        assert_eq!(policy, Some(want));
        let ttl = consent.ttl.as_deref().map(apicore::duration::parse).transpose()?;
        assert_eq!(ttl, Some(std::time::Duration::from_secs(86400)));
        assert_eq!(serde_json::to_value(&consent)?, input);
        Ok(())
    }

    #[test_case(json!({"count": "42"}), 42; "string")]
    #[test_case(json!({"count": 42}), 42; "number")]
    #[test_case(json!({"count": "-7"}), -7; "negative")]
    #[test_case(json!({"count": 1e3}), 1000; "float")]
    #[test_case(json!({"count": "9223372036854775807"}), i64::MAX; "max")]
    fn int64_from_json(input: serde_json::Value, want: i64) -> TestResult {
        let metric = serde_json::from_value::<FhirStoreMetric>(input)?;
        assert_eq!(metric.count, Some(want));
        Ok(())
    }

    #[test]
    fn int64_to_json() -> TestResult {
        let metric = FhirStoreMetric::new()
            .set_resource_type("Patient")
            .set_count(1234567890123_i64)
            .set_structured_storage_size_bytes(2048);
        let got = serde_json::to_value(&metric)?;
        let want = json!({
            "resourceType": "Patient",
            "count": "1234567890123",
            "structuredStorageSizeBytes": "2048"
        });
        assert_eq!(got, want);

        let counter = ProgressCounter::new().set_success(10).set_failure(0);
        let got = serde_json::to_value(&counter)?;
        assert_eq!(got, json!({"success": "10", "failure": "0"}));
        Ok(())
    }

    #[test_case(json!({"count": "abc"}); "not a number")]
    #[test_case(json!({"count": 1.5}); "fractional")]
    #[test_case(json!({"count": "9223372036854775808"}); "overflow")]
    #[test_case(json!({"count": 9223372036854775808.0_f64}); "overflow as float")]
    #[test_case(json!({"count": "9223372036854775808.0"}); "overflow as float string")]
    #[test_case(json!({"count": true}); "bool")]
    fn int64_invalid(input: serde_json::Value) {
        let got = serde_json::from_value::<FhirStoreMetric>(input);
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn int32_fields_are_numbers() -> TestResult {
        let policy = Policy::new().set_version(3);
        assert_eq!(serde_json::to_value(&policy)?, json!({"version": 3}));
        Ok(())
    }

    #[test]
    fn bytes() -> TestResult {
        let message = Message::new()
            .set_message_type("ADT")
            .set_data(bytes::Bytes::from_static(b"MSH|^~\\&|FROM_APP"));
        let got = serde_json::to_value(&message)?;
        let want = json!({
            "messageType": "ADT",
            "data": "TVNIfF5+XCZ8RlJPTV9BUFA="
        });
        assert_eq!(got, want);

        let roundtrip = serde_json::from_value::<Message>(got)?;
        assert_eq!(roundtrip, message);
        Ok(())
    }

    #[test]
    fn bytes_invalid() {
        let got = serde_json::from_value::<Policy>(json!({"etag": "not base64!"}));
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn policy() -> TestResult {
        let input = json!({
            "version": 3,
            "etag": "BwWWja0YfJA=",
            "bindings": [{
                "role": "roles/healthcare.fhirResourceReader",
                "members": ["user:alice@example.com", "group:clinicians@example.com"],
                "condition": {
                    "title": "expirable access",
                    "expression": "request.time < timestamp('2026-01-01T00:00:00Z')"
                }
            }]
        });
        let policy = serde_json::from_value::<Policy>(input.clone())?;
        assert_eq!(
            policy.etag,
            Some(bytes::Bytes::from_static(&[0x07, 0x05, 0x96, 0x8d, 0xad, 0x18, 0x7c, 0x90]))
        );
        let members = policy
            .bindings
            .as_ref()
            .and_then(|b| b.first())
            .and_then(|b| b.members.clone());
        assert_eq!(
            members,
            Some(vec![
                "user:alice@example.com".to_string(),
                "group:clinicians@example.com".to_string()
            ])
        );
        assert_eq!(serde_json::to_value(&policy)?, input);
        Ok(())
    }

    #[test]
    fn field_name_overrides() -> TestResult {
        let request = ExportResourcesRequest::new()
            .set_since("2025-01-01T00:00:00Z")
            .set_type("Patient,Encounter")
            .set_gcs_destination(
                GoogleCloudHealthcareV1FhirGcsDestination::new().set_uri_prefix("gs://bucket/export"),
            );
        let got = serde_json::to_value(&request)?;
        let want = json!({
            "_since": "2025-01-01T00:00:00Z",
            "_type": "Patient,Encounter",
            "gcsDestination": {"uriPrefix": "gs://bucket/export"}
        });
        assert_eq!(got, want);

        let relationship = EntityMentionRelationship::new()
            .set_subject_id("1")
            .set_object_id("2")
            .set_confidence(0.75);
        let got = serde_json::to_value(&relationship)?;
        assert_eq!(got, json!({"subjectId": "1", "objectId": "2", "confidence": 0.75}));
        Ok(())
    }

    #[test]
    fn free_form_objects() -> TestResult {
        let input = json!({
            "contentType": "application/fhir+json",
            "data": "e30=",
            "extensions": [
                {"@type": "type.googleapis.com/google.rpc.DebugInfo", "detail": "none"}
            ]
        });
        let body = serde_json::from_value::<HttpBody>(input.clone())?;
        assert_eq!(body.data, Some(bytes::Bytes::from_static(b"{}")));
        let extension = body.extensions.as_ref().and_then(|e| e.first());
        assert_eq!(
            extension.and_then(|e| e.get("detail")),
            Some(&json!("none"))
        );
        assert_eq!(serde_json::to_value(&body)?, input);
        Ok(())
    }

    #[test]
    fn unknown_fields() -> TestResult {
        let input = json!({
            "name": "projects/p/locations/us/datasets/d",
            "timeZone": "America/New_York",
            "encryptionSpec": {"kmsKeyName": "projects/p/locations/us/keyRings/r/cryptoKeys/k"},
            "satisfiesPzs": true
        });
        let dataset = serde_json::from_value::<Dataset>(input.clone())?;
        assert_eq!(dataset.time_zone.as_deref(), Some("America/New_York"));
        let known = Dataset::new()
            .set_name("projects/p/locations/us/datasets/d")
            .set_time_zone("America/New_York");
        assert_ne!(dataset, known);
        assert_eq!(serde_json::to_value(&dataset)?, input);
        Ok(())
    }

    #[test]
    fn raw_identifiers() -> TestResult {
        let partitioning = TimePartitioning::new()
            .set_type("DAY")
            .set_expiration_ms(86_400_000);
        let got = serde_json::to_value(&partitioning)?;
        assert_eq!(got, json!({"type": "DAY", "expirationMs": "86400000"}));
        let roundtrip = serde_json::from_value::<TimePartitioning>(got)?;
        assert_eq!(roundtrip.r#type.as_deref(), Some("DAY"));
        Ok(())
    }

    #[test]
    fn typenames() {
        use apicore::message::Message as _;
        assert_eq!(
            FhirStore::typename(),
            "type.googleapis.com/google.cloud.healthcare.v1.FhirStore"
        );
        assert_eq!(
            Operation::typename(),
            "type.googleapis.com/google.cloud.healthcare.v1.Operation"
        );
    }
}
