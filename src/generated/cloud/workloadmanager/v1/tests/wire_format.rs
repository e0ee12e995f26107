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

//! Verify the JSON representation of the Workload Manager messages.

#[cfg(test)]
mod test {
    use google_cloud_workloadmanager_v1::model::{
        BigQueryDestination, Evaluation, ExecutionResult, Insight, Location, ResourceFilter,
        SapDiscovery, SapDiscoveryComponent, SapDiscoveryResource,
        SapDiscoveryResourceInstanceProperties, ShellCommand, Status, WriteInsightRequest,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    #[test]
    fn evaluation_roundtrip() -> TestResult {
        let input = json!({
            "name": "projects/p/locations/us-central1/evaluations/e1",
            "description": "SAP best practices",
            "labels": {"owner": "sre"},
            "schedule": "0 */6 * * *",
            "ruleNames": ["projects/p/locations/us-central1/rules/sap-hana-backup"],
            "customRulesBucket": "custom-rules",
            "createTime": "2025-03-01T10:00:00Z",
            "bigQueryDestination": {
                "createNewResultsTable": true,
                "destinationDataset": "projects/p/datasets/results"
            },
            "resourceFilter": {
                "scopes": ["projects/p"],
                "inclusionLabels": {"sap": "true"},
                "resourceIdPatterns": ["hana-.*"],
                "gceInstanceFilter": {"serviceAccounts": ["sa@p.iam.gserviceaccount.com"]}
            },
            "resourceStatus": {"state": "ACTIVE"}
        });
        let evaluation = serde_json::from_value::<Evaluation>(input.clone())?;
        assert_eq!(
            evaluation.big_query_destination,
            Some(
                BigQueryDestination::new()
                    .set_create_new_results_table(true)
                    .set_destination_dataset("projects/p/datasets/results")
            )
        );
        let filter = evaluation.resource_filter.clone().unwrap_or_default();
        assert_eq!(
            filter.inclusion_labels.as_ref().and_then(|l| l.get("sap")).map(String::as_str),
            Some("true")
        );
        assert_eq!(serde_json::to_value(&evaluation)?, input);
        Ok(())
    }

    #[test]
    fn builders() -> TestResult {
        let evaluation = Evaluation::new()
            .set_name("projects/p/locations/us-central1/evaluations/e1")
            .set_rule_names(["r1", "r2"])
            .set_resource_filter(ResourceFilter::new().set_scopes(["projects/p"]))
            .set_or_clear_schedule(None::<String>);
        let got = serde_json::to_value(&evaluation)?;
        let want = json!({
            "name": "projects/p/locations/us-central1/evaluations/e1",
            "ruleNames": ["r1", "r2"],
            "resourceFilter": {"scopes": ["projects/p"]}
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn execution_result() -> TestResult {
        let input = json!({
            "rule": "projects/p/locations/us-central1/rules/r1",
            "severity": "HIGH",
            "violationMessage": "backup is not configured",
            "documentationUrl": "https://cloud.google.com/workload-manager/docs",
            "resource": {"name": "hana-1", "type": "compute.googleapis.com/Instance"},
            "violationDetails": {
                "asset": "//compute.googleapis.com/projects/p/zones/z/instances/hana-1",
                "observed": {"backupEnabled": "false"}
            },
            "commands": [
                {"shellCommand": {"command": "systemctl", "args": "status backup", "timeoutSeconds": 30}},
                {"agentCommand": {"command": "checkbackup", "parameters": {"mode": "full"}}}
            ]
        });
        let result = serde_json::from_value::<ExecutionResult>(input.clone())?;
        let shell = result
            .commands
            .as_ref()
            .and_then(|c| c.first())
            .and_then(|c| c.shell_command.clone());
        assert_eq!(
            shell,
            Some(
                ShellCommand::new()
                    .set_command("systemctl")
                    .set_args("status backup")
                    .set_timeout_seconds(30)
            )
        );
        let resource_type = result.resource.as_ref().and_then(|r| r.r#type.as_deref());
        assert_eq!(resource_type, Some("compute.googleapis.com/Instance"));
        assert_eq!(serde_json::to_value(&result)?, input);
        Ok(())
    }

    #[test]
    fn sap_discovery() -> TestResult {
        let input = json!({
            "systemId": "HDB-1",
            "projectNumber": "123456789",
            "updateTime": "2025-03-01T10:00:00Z",
            "databaseLayer": {
                "sid": "HDB",
                "hostProject": "p",
                "haHosts": ["hana-1", "hana-2"],
                "databaseProperties": {"databaseType": "HANA", "primaryInstanceUri": "hana-1"},
                "replicationSites": [
                    {"sid": "HDB", "hostProject": "dr-project", "topologyType": "TOPOLOGY_SCALE_UP"}
                ],
                "resources": [{
                    "resourceKind": "RESOURCE_KIND_INSTANCE",
                    "resourceType": "RESOURCE_TYPE_COMPUTE",
                    "resourceUri": "//compute.googleapis.com/projects/p/zones/z/instances/hana-1",
                    "relatedResources": ["//compute.googleapis.com/projects/p/zones/z/disks/d1"],
                    "instanceProperties": {
                        "instanceNumber": "1",
                        "virtualHostname": "vhana",
                        "appInstances": [{"name": "ASCS", "number": "00"}]
                    }
                }]
            },
            "metadata": {"customerRegion": "us-central1", "sapProduct": "S/4HANA"}
        });
        let discovery = serde_json::from_value::<SapDiscovery>(input.clone())?;
        let database = discovery.database_layer.clone().unwrap_or_default();
        let replica = database
            .replication_sites
            .as_ref()
            .and_then(|s| s.first())
            .cloned();
        assert_eq!(
            replica,
            Some(
                SapDiscoveryComponent::new()
                    .set_sid("HDB")
                    .set_host_project("dr-project")
                    .set_topology_type("TOPOLOGY_SCALE_UP")
            )
        );
        let instance_number = database
            .resources
            .as_ref()
            .and_then(|r| r.first())
            .and_then(|r| r.instance_properties.as_ref())
            .and_then(|p| p.instance_number);
        assert_eq!(instance_number, Some(1));
        assert_eq!(serde_json::to_value(&discovery)?, input);
        Ok(())
    }

    #[test_case(json!({"instanceNumber": "42"}), 42; "string")]
    #[test_case(json!({"instanceNumber": 42}), 42; "number")]
    fn instance_number(input: serde_json::Value, want: i64) -> TestResult {
        let properties = serde_json::from_value::<SapDiscoveryResourceInstanceProperties>(input)?;
        assert_eq!(properties.instance_number, Some(want));
        let got = serde_json::to_value(&properties)?;
        assert_eq!(got, json!({"instanceNumber": want.to_string()}));
        Ok(())
    }

    #[test]
    fn write_insight() -> TestResult {
        let request = WriteInsightRequest::new()
            .set_agent_version("3.6")
            .set_request_id("b2a1d3f0-0000-4000-8000-000000000000")
            .set_insight(
                Insight::new()
                    .set_instance_id("1234567890")
                    .set_sap_discovery(
                        SapDiscovery::new().set_system_id("HDB-1").set_database_layer(
                            SapDiscoveryComponent::new().set_sid("HDB").set_resources([
                                SapDiscoveryResource::new()
                                    .set_resource_kind("RESOURCE_KIND_INSTANCE"),
                            ]),
                        ),
                    ),
            );
        let got = serde_json::to_value(&request)?;
        let want = json!({
            "agentVersion": "3.6",
            "requestId": "b2a1d3f0-0000-4000-8000-000000000000",
            "insight": {
                "instanceId": "1234567890",
                "sapDiscovery": {
                    "systemId": "HDB-1",
                    "databaseLayer": {
                        "sid": "HDB",
                        "resources": [{"resourceKind": "RESOURCE_KIND_INSTANCE"}]
                    }
                }
            }
        });
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn location_metadata() -> TestResult {
        let input = json!({
            "name": "projects/p/locations/us-central1",
            "locationId": "us-central1",
            "labels": {"cloud.googleapis.com/region": "us-central1"},
            "metadata": {"@type": "type.googleapis.com/google.cloud.location.LocationMetadata", "capacity": 3}
        });
        let location = serde_json::from_value::<Location>(input.clone())?;
        let capacity = location.metadata.as_ref().and_then(|m| m.get("capacity"));
        assert_eq!(capacity, Some(&json!(3)));
        assert_eq!(serde_json::to_value(&location)?, input);
        Ok(())
    }

    #[test]
    fn status_details() -> TestResult {
        let input = json!({
            "code": 5,
            "message": "evaluation not found",
            "details": [{
                "@type": "type.googleapis.com/google.rpc.ResourceInfo",
                "resourceName": "projects/p/locations/us-central1/evaluations/missing"
            }]
        });
        let status = serde_json::from_value::<Status>(input.clone())?;
        assert_eq!(status.code, Some(5));
        assert_eq!(status.details.as_ref().map(Vec::len), Some(1));
        assert_eq!(serde_json::to_value(&status)?, input);
        Ok(())
    }

    #[test]
    fn unknown_fields() -> TestResult {
        let input = json!({
            "name": "projects/p/locations/us-central1/evaluations/e1",
            "evaluationType": "SAP",
            "kmsKey": "projects/p/locations/us-central1/keyRings/r/cryptoKeys/k"
        });
        let evaluation = serde_json::from_value::<Evaluation>(input.clone())?;
        assert_eq!(serde_json::to_value(&evaluation)?, input);
        Ok(())
    }

    #[test]
    fn type_mismatch() {
        let got = serde_json::from_value::<ShellCommand>(json!({"timeoutSeconds": "thirty"}));
        assert!(got.is_err(), "{got:?}");
    }
}
