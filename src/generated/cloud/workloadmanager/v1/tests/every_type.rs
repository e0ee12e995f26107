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

//! Round trip every Workload Manager message through its JSON representation.
//!
//! The fixtures in `testdata/every_type.json` set every field of each message,
//! two levels deep.

#[cfg(test)]
mod test {
    use apicore::message::Message;
    use google_cloud_workloadmanager_v1::model;
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
        roundtrip_agent_command => AgentCommand,
        roundtrip_asset_location => AssetLocation,
        roundtrip_big_query_destination => BigQueryDestination,
        roundtrip_blobstore_location => BlobstoreLocation,
        roundtrip_cancel_operation_request => CancelOperationRequest,
        roundtrip_cloud_asset => CloudAsset,
        roundtrip_cloud_asset_composition => CloudAssetComposition,
        roundtrip_command => Command,
        roundtrip_direct_location_assignment => DirectLocationAssignment,
        roundtrip_empty => Empty,
        roundtrip_evaluation => Evaluation,
        roundtrip_execution => Execution,
        roundtrip_execution_result => ExecutionResult,
        roundtrip_external_data_sources => ExternalDataSources,
        roundtrip_extra_parameter => ExtraParameter,
        roundtrip_gce_instance_filter => GceInstanceFilter,
        roundtrip_insight => Insight,
        roundtrip_isolation_expectations => IsolationExpectations,
        roundtrip_list_evaluations_response => ListEvaluationsResponse,
        roundtrip_list_execution_results_response => ListExecutionResultsResponse,
        roundtrip_list_executions_response => ListExecutionsResponse,
        roundtrip_list_locations_response => ListLocationsResponse,
        roundtrip_list_operations_response => ListOperationsResponse,
        roundtrip_list_rules_response => ListRulesResponse,
        roundtrip_list_scanned_resources_response => ListScannedResourcesResponse,
        roundtrip_location => Location,
        roundtrip_location_assignment => LocationAssignment,
        roundtrip_location_data => LocationData,
        roundtrip_operation => Operation,
        roundtrip_operation_metadata => OperationMetadata,
        roundtrip_placer_location => PlacerLocation,
        roundtrip_regional_mig_distribution_policy => RegionalMigDistributionPolicy,
        roundtrip_resource => Resource,
        roundtrip_resource_filter => ResourceFilter,
        roundtrip_resource_status => ResourceStatus,
        roundtrip_rule => Rule,
        roundtrip_run_evaluation_request => RunEvaluationRequest,
        roundtrip_sap_discovery => SapDiscovery,
        roundtrip_sap_discovery_component => SapDiscoveryComponent,
        roundtrip_sap_discovery_component_application_properties => SapDiscoveryComponentApplicationProperties,
        roundtrip_sap_discovery_component_database_properties => SapDiscoveryComponentDatabaseProperties,
        roundtrip_sap_discovery_metadata => SapDiscoveryMetadata,
        roundtrip_sap_discovery_resource => SapDiscoveryResource,
        roundtrip_sap_discovery_resource_instance_properties => SapDiscoveryResourceInstanceProperties,
        roundtrip_sap_discovery_resource_instance_properties_app_instance => SapDiscoveryResourceInstancePropertiesAppInstance,
        roundtrip_sap_discovery_workload_properties => SapDiscoveryWorkloadProperties,
        roundtrip_sap_discovery_workload_properties_product_version => SapDiscoveryWorkloadPropertiesProductVersion,
        roundtrip_sap_discovery_workload_properties_software_component_properties => SapDiscoveryWorkloadPropertiesSoftwareComponentProperties,
        roundtrip_sap_validation => SapValidation,
        roundtrip_sap_validation_validation_detail => SapValidationValidationDetail,
        roundtrip_scanned_resource => ScannedResource,
        roundtrip_shell_command => ShellCommand,
        roundtrip_spanner_location => SpannerLocation,
        roundtrip_sqlserver_validation => SqlserverValidation,
        roundtrip_sqlserver_validation_details => SqlserverValidationDetails,
        roundtrip_sqlserver_validation_validation_detail => SqlserverValidationValidationDetail,
        roundtrip_status => Status,
        roundtrip_tenant_project_proxy => TenantProjectProxy,
        roundtrip_violation_details => ViolationDetails,
        roundtrip_write_insight_request => WriteInsightRequest,
        roundtrip_write_insight_response => WriteInsightResponse,
        roundtrip_zone_configuration => ZoneConfiguration,
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
