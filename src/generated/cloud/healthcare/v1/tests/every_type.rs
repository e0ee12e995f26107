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

//! Round trip every Healthcare message through its JSON representation.
//!
//! The fixtures in `testdata/every_type.json` set every field of each message,
//! two levels deep.

#[cfg(test)]
mod test {
    use apicore::message::Message;
    use google_cloud_healthcare_v1::model;
    use pretty_assertions::assert_eq;
    use serde_json::{Map, Value, json};
    type TestResult = anyhow::Result<()>;

    const FIXTURES: &str = include_str!("testdata/every_type.json");

    fn fixtures() -> anyhow::Result<Map<String, Value>> {
        Ok(serde_json::from_str(FIXTURES)?)
    }

    fn roundtrip<T>(name: &str) -> TestResult
    where
        T: Message + std::fmt::Debug + Default + PartialEq,
    {
        let Some(Value::Object(mut input)) = fixtures()?.remove(name) else {
            anyhow::bail!("missing fixture for {name}");
        };
        input.insert("futureProperty".to_string(), json!({"nested": [1, "two"]}));
        let input = Value::Object(input);

        let message = serde_json::from_value::<T>(input.clone())?;
        assert_ne!(message, T::default(), "{name}");
        let got = serde_json::to_value(&message)?;
        assert_eq!(got, input, "{name}");
        let again = serde_json::from_value::<T>(got)?;
        assert_eq!(again, message, "{name}");

        let typename = T::typename();
        assert!(typename.ends_with(&format!(".{name}")), "{name}: {typename}");
        assert_eq!(serde_json::to_value(T::default())?, json!({}), "{name}");
        Ok(())
    }

    macro_rules! every_type {
        ($($test:ident => $name:ident),* $(,)?) => {
            const NAMES: &[&str] = &[$(stringify!($name)),*];
            $(
                #[test]
                fn $test() -> TestResult {
                    roundtrip::<model::$name>(stringify!($name))
                }
            )*
        };
    }

    every_type!(
        roundtrip_activate_consent_request => ActivateConsentRequest,
        roundtrip_analyze_entities_request => AnalyzeEntitiesRequest,
        roundtrip_analyze_entities_response => AnalyzeEntitiesResponse,
        roundtrip_archive_user_data_mapping_request => ArchiveUserDataMappingRequest,
        roundtrip_archive_user_data_mapping_response => ArchiveUserDataMappingResponse,
        roundtrip_attribute => Attribute,
        roundtrip_attribute_definition => AttributeDefinition,
        roundtrip_audit_config => AuditConfig,
        roundtrip_audit_log_config => AuditLogConfig,
        roundtrip_binding => Binding,
        roundtrip_cancel_operation_request => CancelOperationRequest,
        roundtrip_character_mask_config => CharacterMaskConfig,
        roundtrip_check_data_access_request => CheckDataAccessRequest,
        roundtrip_check_data_access_response => CheckDataAccessResponse,
        roundtrip_consent => Consent,
        roundtrip_consent_artifact => ConsentArtifact,
        roundtrip_consent_evaluation => ConsentEvaluation,
        roundtrip_consent_list => ConsentList,
        roundtrip_consent_store => ConsentStore,
        roundtrip_create_message_request => CreateMessageRequest,
        roundtrip_crypto_hash_config => CryptoHashConfig,
        roundtrip_dataset => Dataset,
        roundtrip_date_shift_config => DateShiftConfig,
        roundtrip_deidentified_store_destination => DeidentifiedStoreDestination,
        roundtrip_deidentify_config => DeidentifyConfig,
        roundtrip_deidentify_dataset_request => DeidentifyDatasetRequest,
        roundtrip_deidentify_dicom_store_request => DeidentifyDicomStoreRequest,
        roundtrip_deidentify_fhir_store_request => DeidentifyFhirStoreRequest,
        roundtrip_deidentify_summary => DeidentifySummary,
        roundtrip_dicom_config => DicomConfig,
        roundtrip_dicom_filter_config => DicomFilterConfig,
        roundtrip_dicom_store => DicomStore,
        roundtrip_empty => Empty,
        roundtrip_entity => Entity,
        roundtrip_entity_mention => EntityMention,
        roundtrip_entity_mention_relationship => EntityMentionRelationship,
        roundtrip_evaluate_user_consents_request => EvaluateUserConsentsRequest,
        roundtrip_evaluate_user_consents_response => EvaluateUserConsentsResponse,
        roundtrip_export_dicom_data_request => ExportDicomDataRequest,
        roundtrip_export_dicom_data_response => ExportDicomDataResponse,
        roundtrip_export_messages_request => ExportMessagesRequest,
        roundtrip_export_messages_response => ExportMessagesResponse,
        roundtrip_export_resources_request => ExportResourcesRequest,
        roundtrip_export_resources_response => ExportResourcesResponse,
        roundtrip_expr => Expr,
        roundtrip_feature => Feature,
        roundtrip_fhir_config => FhirConfig,
        roundtrip_fhir_filter => FhirFilter,
        roundtrip_fhir_notification_config => FhirNotificationConfig,
        roundtrip_fhir_store => FhirStore,
        roundtrip_fhir_store_metric => FhirStoreMetric,
        roundtrip_fhir_store_metrics => FhirStoreMetrics,
        roundtrip_field => Field,
        roundtrip_field_metadata => FieldMetadata,
        roundtrip_gcs_destination => GcsDestination,
        roundtrip_gcs_source => GcsSource,
        roundtrip_google_cloud_healthcare_v1_consent_gcs_destination => GoogleCloudHealthcareV1ConsentGcsDestination,
        roundtrip_google_cloud_healthcare_v1_consent_policy => GoogleCloudHealthcareV1ConsentPolicy,
        roundtrip_google_cloud_healthcare_v1_deidentify_deidentify_dicom_store_summary => GoogleCloudHealthcareV1DeidentifyDeidentifyDicomStoreSummary,
        roundtrip_google_cloud_healthcare_v1_deidentify_deidentify_fhir_store_summary => GoogleCloudHealthcareV1DeidentifyDeidentifyFhirStoreSummary,
        roundtrip_google_cloud_healthcare_v1_dicom_big_query_destination => GoogleCloudHealthcareV1DicomBigQueryDestination,
        roundtrip_google_cloud_healthcare_v1_dicom_gcs_destination => GoogleCloudHealthcareV1DicomGcsDestination,
        roundtrip_google_cloud_healthcare_v1_dicom_gcs_source => GoogleCloudHealthcareV1DicomGcsSource,
        roundtrip_google_cloud_healthcare_v1_dicom_stream_config => GoogleCloudHealthcareV1DicomStreamConfig,
        roundtrip_google_cloud_healthcare_v1_fhir_big_query_destination => GoogleCloudHealthcareV1FhirBigQueryDestination,
        roundtrip_google_cloud_healthcare_v1_fhir_gcs_destination => GoogleCloudHealthcareV1FhirGcsDestination,
        roundtrip_google_cloud_healthcare_v1_fhir_gcs_source => GoogleCloudHealthcareV1FhirGcsSource,
        roundtrip_group_or_segment => GroupOrSegment,
        roundtrip_hl7_schema_config => Hl7SchemaConfig,
        roundtrip_hl7_types_config => Hl7TypesConfig,
        roundtrip_hl7_v2_notification_config => Hl7V2NotificationConfig,
        roundtrip_hl7_v2_store => Hl7V2Store,
        roundtrip_http_body => HttpBody,
        roundtrip_image => Image,
        roundtrip_image_config => ImageConfig,
        roundtrip_import_dicom_data_request => ImportDicomDataRequest,
        roundtrip_import_dicom_data_response => ImportDicomDataResponse,
        roundtrip_import_messages_request => ImportMessagesRequest,
        roundtrip_import_messages_response => ImportMessagesResponse,
        roundtrip_import_resources_request => ImportResourcesRequest,
        roundtrip_import_resources_response => ImportResourcesResponse,
        roundtrip_info_type_transformation => InfoTypeTransformation,
        roundtrip_ingest_message_request => IngestMessageRequest,
        roundtrip_ingest_message_response => IngestMessageResponse,
        roundtrip_kms_wrapped_crypto_key => KmsWrappedCryptoKey,
        roundtrip_linked_entity => LinkedEntity,
        roundtrip_list_attribute_definitions_response => ListAttributeDefinitionsResponse,
        roundtrip_list_consent_artifacts_response => ListConsentArtifactsResponse,
        roundtrip_list_consent_revisions_response => ListConsentRevisionsResponse,
        roundtrip_list_consent_stores_response => ListConsentStoresResponse,
        roundtrip_list_consents_response => ListConsentsResponse,
        roundtrip_list_datasets_response => ListDatasetsResponse,
        roundtrip_list_dicom_stores_response => ListDicomStoresResponse,
        roundtrip_list_fhir_stores_response => ListFhirStoresResponse,
        roundtrip_list_hl7_v2_stores_response => ListHl7V2StoresResponse,
        roundtrip_list_locations_response => ListLocationsResponse,
        roundtrip_list_messages_response => ListMessagesResponse,
        roundtrip_list_operations_response => ListOperationsResponse,
        roundtrip_list_user_data_mappings_response => ListUserDataMappingsResponse,
        roundtrip_location => Location,
        roundtrip_message => Message,
        roundtrip_notification_config => NotificationConfig,
        roundtrip_operation => Operation,
        roundtrip_operation_metadata => OperationMetadata,
        roundtrip_parsed_data => ParsedData,
        roundtrip_parser_config => ParserConfig,
        roundtrip_patient_id => PatientId,
        roundtrip_policy => Policy,
        roundtrip_progress_counter => ProgressCounter,
        roundtrip_pubsub_destination => PubsubDestination,
        roundtrip_query_accessible_data_request => QueryAccessibleDataRequest,
        roundtrip_query_accessible_data_response => QueryAccessibleDataResponse,
        roundtrip_redact_config => RedactConfig,
        roundtrip_reject_consent_request => RejectConsentRequest,
        roundtrip_replace_with_info_type_config => ReplaceWithInfoTypeConfig,
        roundtrip_resources => Resources,
        roundtrip_result => Result,
        roundtrip_revoke_consent_request => RevokeConsentRequest,
        roundtrip_schema_config => SchemaConfig,
        roundtrip_schema_group => SchemaGroup,
        roundtrip_schema_package => SchemaPackage,
        roundtrip_schema_segment => SchemaSegment,
        roundtrip_schematized_data => SchematizedData,
        roundtrip_search_resources_request => SearchResourcesRequest,
        roundtrip_segment => Segment,
        roundtrip_set_iam_policy_request => SetIamPolicyRequest,
        roundtrip_signature => Signature,
        roundtrip_status => Status,
        roundtrip_stream_config => StreamConfig,
        roundtrip_tag_filter_list => TagFilterList,
        roundtrip_test_iam_permissions_request => TestIamPermissionsRequest,
        roundtrip_test_iam_permissions_response => TestIamPermissionsResponse,
        roundtrip_text_config => TextConfig,
        roundtrip_text_span => TextSpan,
        roundtrip_time_partitioning => TimePartitioning,
        roundtrip_type => Type,
        roundtrip_user_data_mapping => UserDataMapping,
        roundtrip_validation_config => ValidationConfig,
        roundtrip_version_source => VersionSource,
    );

    #[test]
    fn fixtures_cover_every_type() -> TestResult {
        let fixtures = fixtures()?;
        let mut got: Vec<&str> = fixtures.keys().map(String::as_str).collect();
        got.sort_unstable();
        let mut want = NAMES.to_vec();
        want.sort_unstable();
        assert_eq!(got, want);
        Ok(())
    }
}
