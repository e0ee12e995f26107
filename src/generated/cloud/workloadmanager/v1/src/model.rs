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

//! The messages of the Workload Manager API v1.
//!
//! Evaluations, their [Execution]s and [ExecutionResult]s, the rule catalog,
//! the [Insight] payloads written by the agent, and the [Operation] envelope
//! returned by long-running RPCs.

#![allow(rustdoc::bare_urls)]
#![allow(rustdoc::invalid_html_tags)]
#![allow(rustdoc::broken_intra_doc_links)]

/// An AgentCommand specifies a one-time executable program for the agent to
/// run.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AgentCommand {
    /// command is the name of the agent one-time executable that will be
    /// invoked.
    pub command: Option<String>,

    /// parameters is a map of key/value pairs that can be used to specify
    /// additional one-time executable settings.
    pub parameters: Option<std::collections::HashMap<String, String>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl AgentCommand {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [command][crate::model::AgentCommand::command].
    pub fn set_command<T: Into<String>>(mut self, v: T) -> Self {
        self.command = Some(v.into());
        self
    }

    /// Sets or clears the value of [command][crate::model::AgentCommand::command].
    pub fn set_or_clear_command<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.command = v.map(|x| x.into());
        self
    }

    /// Sets the value of [parameters][crate::model::AgentCommand::parameters].
    pub fn set_parameters<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.parameters = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }
}

impl apicore::message::Message for AgentCommand {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.AgentCommand"
    }
}

/// Provides the mapping of a cloud asset to a direct physical location or to a
/// proxy that defines the location on its behalf.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AssetLocation {
    pub expected: Option<crate::model::IsolationExpectations>,

    pub extra_parameters: Option<Vec<crate::model::ExtraParameter>>,

    pub location_data: Option<Vec<crate::model::LocationData>>,

    pub parent_asset: Option<Vec<crate::model::CloudAsset>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl AssetLocation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [expected][crate::model::AssetLocation::expected].
    pub fn set_expected<T: Into<crate::model::IsolationExpectations>>(mut self, v: T) -> Self {
        self.expected = Some(v.into());
        self
    }

    /// Sets or clears the value of [expected][crate::model::AssetLocation::expected].
    pub fn set_or_clear_expected<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::IsolationExpectations>,
    {
        self.expected = v.map(|x| x.into());
        self
    }

    /// Sets the value of [extra_parameters][crate::model::AssetLocation::extra_parameters].
    pub fn set_extra_parameters<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::ExtraParameter>,
    {
        self.extra_parameters = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [location_data][crate::model::AssetLocation::location_data].
    pub fn set_location_data<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::LocationData>,
    {
        self.location_data = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [parent_asset][crate::model::AssetLocation::parent_asset].
    pub fn set_parent_asset<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::CloudAsset>,
    {
        self.parent_asset = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for AssetLocation {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.AssetLocation"
    }
}

/// Message describing big query destination
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BigQueryDestination {
    /// Optional. determine if results will be saved in a new table
    pub create_new_results_table: Option<bool>,

    /// Optional. destination dataset to save evaluation results
    pub destination_dataset: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl BigQueryDestination {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [create_new_results_table][crate::model::BigQueryDestination::create_new_results_table].
    pub fn set_create_new_results_table<T: Into<bool>>(mut self, v: T) -> Self {
        self.create_new_results_table = Some(v.into());
        self
    }

    /// Sets or clears the value of [create_new_results_table][crate::model::BigQueryDestination::create_new_results_table].
    pub fn set_or_clear_create_new_results_table<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.create_new_results_table = v.map(|x| x.into());
        self
    }

    /// Sets the value of [destination_dataset][crate::model::BigQueryDestination::destination_dataset].
    pub fn set_destination_dataset<T: Into<String>>(mut self, v: T) -> Self {
        self.destination_dataset = Some(v.into());
        self
    }

    /// Sets or clears the value of [destination_dataset][crate::model::BigQueryDestination::destination_dataset].
    pub fn set_or_clear_destination_dataset<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.destination_dataset = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for BigQueryDestination {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.BigQueryDestination"
    }
}

/// Policy ID that identified data placement in Blobstore as per
/// go/blobstore-user-guide#data-metadata-placement-and-failure-domains
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BlobstoreLocation {
    pub policy_id: Option<Vec<String>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl BlobstoreLocation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [policy_id][crate::model::BlobstoreLocation::policy_id].
    pub fn set_policy_id<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.policy_id = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for BlobstoreLocation {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.BlobstoreLocation"
    }
}

/// The request message for Operations.CancelOperation.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CancelOperationRequest {
    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl CancelOperationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

impl apicore::message::Message for CancelOperationRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.CancelOperationRequest"
    }
}

#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CloudAsset {
    pub asset_name: Option<String>,

    pub asset_type: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl CloudAsset {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [asset_name][crate::model::CloudAsset::asset_name].
    pub fn set_asset_name<T: Into<String>>(mut self, v: T) -> Self {
        self.asset_name = Some(v.into());
        self
    }

    /// Sets or clears the value of [asset_name][crate::model::CloudAsset::asset_name].
    pub fn set_or_clear_asset_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.asset_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [asset_type][crate::model::CloudAsset::asset_type].
    pub fn set_asset_type<T: Into<String>>(mut self, v: T) -> Self {
        self.asset_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [asset_type][crate::model::CloudAsset::asset_type].
    pub fn set_or_clear_asset_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.asset_type = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for CloudAsset {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.CloudAsset"
    }
}

#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CloudAssetComposition {
    pub child_asset: Option<Vec<crate::model::CloudAsset>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl CloudAssetComposition {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [child_asset][crate::model::CloudAssetComposition::child_asset].
    pub fn set_child_asset<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::CloudAsset>,
    {
        self.child_asset = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for CloudAssetComposition {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.CloudAssetComposition"
    }
}

/// Command specifies the type of command to execute.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Command {
    /// AgentCommand specifies a one-time executable program for the agent to
    /// run.
    pub agent_command: Option<crate::model::AgentCommand>,

    /// ShellCommand is invoked via the agent's command line executor.
    pub shell_command: Option<crate::model::ShellCommand>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Command {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [agent_command][crate::model::Command::agent_command].
    pub fn set_agent_command<T: Into<crate::model::AgentCommand>>(mut self, v: T) -> Self {
        self.agent_command = Some(v.into());
        self
    }

    /// Sets or clears the value of [agent_command][crate::model::Command::agent_command].
    pub fn set_or_clear_agent_command<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::AgentCommand>,
    {
        self.agent_command = v.map(|x| x.into());
        self
    }

    /// Sets the value of [shell_command][crate::model::Command::shell_command].
    pub fn set_shell_command<T: Into<crate::model::ShellCommand>>(mut self, v: T) -> Self {
        self.shell_command = Some(v.into());
        self
    }

    /// Sets or clears the value of [shell_command][crate::model::Command::shell_command].
    pub fn set_or_clear_shell_command<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::ShellCommand>,
    {
        self.shell_command = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for Command {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.Command"
    }
}

#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DirectLocationAssignment {
    pub location: Option<Vec<crate::model::LocationAssignment>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DirectLocationAssignment {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [location][crate::model::DirectLocationAssignment::location].
    pub fn set_location<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::LocationAssignment>,
    {
        self.location = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for DirectLocationAssignment {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.DirectLocationAssignment"
    }
}

/// A generic empty message that you can re-use to avoid defining duplicated
/// empty messages in your APIs. A typical example is to use it as the request
/// or the response type of an API method.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Empty {
    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Empty {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

impl apicore::message::Message for Empty {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.Empty"
    }
}

/// Message describing Evaluation object
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Evaluation {
    pub big_query_destination: Option<crate::model::BigQueryDestination>,

    /// Output only. [Output only] Create time stamp
    pub create_time: Option<String>,

    /// The Cloud Storage bucket name for custom rules.
    pub custom_rules_bucket: Option<String>,

    /// Description of the Evaluation
    pub description: Option<String>,

    /// Labels as key value pairs
    pub labels: Option<std::collections::HashMap<String, String>>,

    /// name of resource names have the form
    /// 'projects/{project_id}/locations/{location_id}/evaluations/{evaluation_id}'
    pub name: Option<String>,

    pub resource_filter: Option<crate::model::ResourceFilter>,

    pub resource_status: Option<crate::model::ResourceStatus>,

    /// the name of the rule
    pub rule_names: Option<Vec<String>>,

    /// Output only. [Output only] The updated rule ids if exist.
    pub rule_versions: Option<Vec<String>>,

    /// crontab format schedule for scheduled evaluation, currently only support
    /// the following schedule: "0 */1 * * *", "0 */6 * * *", "0 */12 * * *", "0
    /// 0 */1 * *", "0 0 */7 * *",
    pub schedule: Option<String>,

    /// Output only. [Output only] Update time stamp
    pub update_time: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Evaluation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [big_query_destination][crate::model::Evaluation::big_query_destination].
    pub fn set_big_query_destination<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::BigQueryDestination>,
    {
        self.big_query_destination = Some(v.into());
        self
    }

    /// Sets or clears the value of [big_query_destination][crate::model::Evaluation::big_query_destination].
    pub fn set_or_clear_big_query_destination<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::BigQueryDestination>,
    {
        self.big_query_destination = v.map(|x| x.into());
        self
    }

    /// Sets the value of [create_time][crate::model::Evaluation::create_time].
    pub fn set_create_time<T: Into<String>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets or clears the value of [create_time][crate::model::Evaluation::create_time].
    pub fn set_or_clear_create_time<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.create_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [custom_rules_bucket][crate::model::Evaluation::custom_rules_bucket].
    pub fn set_custom_rules_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.custom_rules_bucket = Some(v.into());
        self
    }

    /// Sets or clears the value of [custom_rules_bucket][crate::model::Evaluation::custom_rules_bucket].
    pub fn set_or_clear_custom_rules_bucket<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.custom_rules_bucket = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::Evaluation::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::Evaluation::description].
    pub fn set_or_clear_description<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [labels][crate::model::Evaluation::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [name][crate::model::Evaluation::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::Evaluation::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_filter][crate::model::Evaluation::resource_filter].
    pub fn set_resource_filter<T: Into<crate::model::ResourceFilter>>(mut self, v: T) -> Self {
        self.resource_filter = Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_filter][crate::model::Evaluation::resource_filter].
    pub fn set_or_clear_resource_filter<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::ResourceFilter>,
    {
        self.resource_filter = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_status][crate::model::Evaluation::resource_status].
    pub fn set_resource_status<T: Into<crate::model::ResourceStatus>>(mut self, v: T) -> Self {
        self.resource_status = Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_status][crate::model::Evaluation::resource_status].
    pub fn set_or_clear_resource_status<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::ResourceStatus>,
    {
        self.resource_status = v.map(|x| x.into());
        self
    }

    /// Sets the value of [rule_names][crate::model::Evaluation::rule_names].
    pub fn set_rule_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.rule_names = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [rule_versions][crate::model::Evaluation::rule_versions].
    pub fn set_rule_versions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.rule_versions = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [schedule][crate::model::Evaluation::schedule].
    pub fn set_schedule<T: Into<String>>(mut self, v: T) -> Self {
        self.schedule = Some(v.into());
        self
    }

    /// Sets or clears the value of [schedule][crate::model::Evaluation::schedule].
    pub fn set_or_clear_schedule<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.schedule = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_time][crate::model::Evaluation::update_time].
    pub fn set_update_time<T: Into<String>>(mut self, v: T) -> Self {
        self.update_time = Some(v.into());
        self
    }

    /// Sets or clears the value of [update_time][crate::model::Evaluation::update_time].
    pub fn set_or_clear_update_time<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.update_time = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for Evaluation {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.Evaluation"
    }
}

/// Message describing Execution object
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Execution {
    /// Output only. [Output only] End time stamp
    pub end_time: Option<String>,

    /// Output only. [Output only] Evaluation ID
    pub evaluation_id: Option<String>,

    /// Optional. External data sources
    pub external_data_sources: Option<Vec<crate::model::ExternalDataSources>>,

    /// Output only. [Output only] Inventory time stamp
    pub inventory_time: Option<String>,

    /// Labels as key value pairs
    pub labels: Option<std::collections::HashMap<String, String>>,

    /// The name of execution resource. The format is
    /// projects/{project}/locations/{location}/evaluations/{evaluation}/executions/{execution}
    pub name: Option<String>,

    /// type represent whether the execution executed directly by user or
    /// scheduled according evaluation.schedule field.
    pub run_type: Option<String>,

    /// Output only. [Output only] Start time stamp
    pub start_time: Option<String>,

    /// Output only. [Output only] State
    pub state: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Execution {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [end_time][crate::model::Execution::end_time].
    pub fn set_end_time<T: Into<String>>(mut self, v: T) -> Self {
        self.end_time = Some(v.into());
        self
    }

    /// Sets or clears the value of [end_time][crate::model::Execution::end_time].
    pub fn set_or_clear_end_time<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.end_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [evaluation_id][crate::model::Execution::evaluation_id].
    pub fn set_evaluation_id<T: Into<String>>(mut self, v: T) -> Self {
        self.evaluation_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [evaluation_id][crate::model::Execution::evaluation_id].
    pub fn set_or_clear_evaluation_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.evaluation_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [external_data_sources][crate::model::Execution::external_data_sources].
    pub fn set_external_data_sources<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::ExternalDataSources>,
    {
        self.external_data_sources = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [inventory_time][crate::model::Execution::inventory_time].
    pub fn set_inventory_time<T: Into<String>>(mut self, v: T) -> Self {
        self.inventory_time = Some(v.into());
        self
    }

    /// Sets or clears the value of [inventory_time][crate::model::Execution::inventory_time].
    pub fn set_or_clear_inventory_time<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.inventory_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [labels][crate::model::Execution::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [name][crate::model::Execution::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::Execution::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [run_type][crate::model::Execution::run_type].
    pub fn set_run_type<T: Into<String>>(mut self, v: T) -> Self {
        self.run_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [run_type][crate::model::Execution::run_type].
    pub fn set_or_clear_run_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.run_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [start_time][crate::model::Execution::start_time].
    pub fn set_start_time<T: Into<String>>(mut self, v: T) -> Self {
        self.start_time = Some(v.into());
        self
    }

    /// Sets or clears the value of [start_time][crate::model::Execution::start_time].
    pub fn set_or_clear_start_time<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.start_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [state][crate::model::Execution::state].
    pub fn set_state<T: Into<String>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }

    /// Sets or clears the value of [state][crate::model::Execution::state].
    pub fn set_or_clear_state<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.state = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for Execution {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.Execution"
    }
}

/// Message describing the result of an execution
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExecutionResult {
    /// The commands to remediate the violation.
    pub commands: Option<Vec<crate::model::Command>>,

    /// The URL for the documentation of the rule.
    pub documentation_url: Option<String>,

    /// The resource that violates the rule.
    pub resource: Option<crate::model::Resource>,

    /// The rule that is violated in an evaluation.
    pub rule: Option<String>,

    /// The severity of violation.
    pub severity: Option<String>,

    /// The details of violation in an evaluation result.
    pub violation_details: Option<crate::model::ViolationDetails>,

    /// The violation message of an execution.
    pub violation_message: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ExecutionResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [commands][crate::model::ExecutionResult::commands].
    pub fn set_commands<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Command>,
    {
        self.commands = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [documentation_url][crate::model::ExecutionResult::documentation_url].
    pub fn set_documentation_url<T: Into<String>>(mut self, v: T) -> Self {
        self.documentation_url = Some(v.into());
        self
    }

    /// Sets or clears the value of [documentation_url][crate::model::ExecutionResult::documentation_url].
    pub fn set_or_clear_documentation_url<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.documentation_url = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource][crate::model::ExecutionResult::resource].
    pub fn set_resource<T: Into<crate::model::Resource>>(mut self, v: T) -> Self {
        self.resource = Some(v.into());
        self
    }

    /// Sets or clears the value of [resource][crate::model::ExecutionResult::resource].
    pub fn set_or_clear_resource<T: Into<crate::model::Resource>>(mut self, v: Option<T>) -> Self {
        self.resource = v.map(|x| x.into());
        self
    }

    /// Sets the value of [rule][crate::model::ExecutionResult::rule].
    pub fn set_rule<T: Into<String>>(mut self, v: T) -> Self {
        self.rule = Some(v.into());
        self
    }

    /// Sets or clears the value of [rule][crate::model::ExecutionResult::rule].
    pub fn set_or_clear_rule<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.rule = v.map(|x| x.into());
        self
    }

    /// Sets the value of [severity][crate::model::ExecutionResult::severity].
    pub fn set_severity<T: Into<String>>(mut self, v: T) -> Self {
        self.severity = Some(v.into());
        self
    }

    /// Sets or clears the value of [severity][crate::model::ExecutionResult::severity].
    pub fn set_or_clear_severity<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.severity = v.map(|x| x.into());
        self
    }

    /// Sets the value of [violation_details][crate::model::ExecutionResult::violation_details].
    pub fn set_violation_details<T: Into<crate::model::ViolationDetails>>(mut self, v: T) -> Self {
        self.violation_details = Some(v.into());
        self
    }

    /// Sets or clears the value of [violation_details][crate::model::ExecutionResult::violation_details].
    pub fn set_or_clear_violation_details<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::ViolationDetails>,
    {
        self.violation_details = v.map(|x| x.into());
        self
    }

    /// Sets the value of [violation_message][crate::model::ExecutionResult::violation_message].
    pub fn set_violation_message<T: Into<String>>(mut self, v: T) -> Self {
        self.violation_message = Some(v.into());
        self
    }

    /// Sets or clears the value of [violation_message][crate::model::ExecutionResult::violation_message].
    pub fn set_or_clear_violation_message<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.violation_message = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ExecutionResult {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.ExecutionResult"
    }
}

/// Message for external data sources
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExternalDataSources {
    /// Required. The asset type of the external data source this can be one of
    /// go/cai-asset-types to override the default asset type or it can be a
    /// custom type defined by the user custom type must match the asset type in
    /// the rule
    pub asset_type: Option<String>,

    /// Optional. Name of external data source. The name will be used inside the
    /// rego/sql to refer the external data
    pub name: Option<String>,

    /// Required. Type of external data source
    pub r#type: Option<String>,

    /// Required. URI of external data source. example of bq table
    /// {project_ID}.{dataset_ID}.{table_ID}
    pub uri: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ExternalDataSources {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [asset_type][crate::model::ExternalDataSources::asset_type].
    pub fn set_asset_type<T: Into<String>>(mut self, v: T) -> Self {
        self.asset_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [asset_type][crate::model::ExternalDataSources::asset_type].
    pub fn set_or_clear_asset_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.asset_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::ExternalDataSources::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::ExternalDataSources::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [type][crate::model::ExternalDataSources::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets or clears the value of [type][crate::model::ExternalDataSources::r#type].
    pub fn set_or_clear_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.r#type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [uri][crate::model::ExternalDataSources::uri].
    pub fn set_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.uri = Some(v.into());
        self
    }

    /// Sets or clears the value of [uri][crate::model::ExternalDataSources::uri].
    pub fn set_or_clear_uri<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.uri = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ExternalDataSources {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.ExternalDataSources"
    }
}

/// Defines parameters that should only be used for specific asset types.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExtraParameter {
    pub regional_mig_distribution_policy: Option<crate::model::RegionalMigDistributionPolicy>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ExtraParameter {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [regional_mig_distribution_policy][crate::model::ExtraParameter::regional_mig_distribution_policy].
    pub fn set_regional_mig_distribution_policy<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::RegionalMigDistributionPolicy>,
    {
        self.regional_mig_distribution_policy = Some(v.into());
        self
    }

    /// Sets or clears the value of [regional_mig_distribution_policy][crate::model::ExtraParameter::regional_mig_distribution_policy].
    pub fn set_or_clear_regional_mig_distribution_policy<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::RegionalMigDistributionPolicy>,
    {
        self.regional_mig_distribution_policy = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ExtraParameter {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.ExtraParameter"
    }
}

/// Message describing compute engine instance filter
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GceInstanceFilter {
    /// Service account of compute engine
    pub service_accounts: Option<Vec<String>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl GceInstanceFilter {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [service_accounts][crate::model::GceInstanceFilter::service_accounts].
    pub fn set_service_accounts<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.service_accounts = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for GceInstanceFilter {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.GceInstanceFilter"
    }
}

/// A presentation of host resource usage where the workload runs.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Insight {
    /// Required. The instance id where the insight is generated from
    pub instance_id: Option<String>,

    /// The insights data for SAP system discovery. This is a copy of SAP System
    /// proto and should get updated whenever that one changes.
    pub sap_discovery: Option<crate::model::SapDiscovery>,

    /// The insights data for the SAP workload validation.
    pub sap_validation: Option<crate::model::SapValidation>,

    /// Output only. [Output only] Create time stamp
    pub sent_time: Option<String>,

    /// The insights data for the sqlserver workload validation.
    pub sqlserver_validation: Option<crate::model::SqlserverValidation>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Insight {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [instance_id][crate::model::Insight::instance_id].
    pub fn set_instance_id<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [instance_id][crate::model::Insight::instance_id].
    pub fn set_or_clear_instance_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.instance_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sap_discovery][crate::model::Insight::sap_discovery].
    pub fn set_sap_discovery<T: Into<crate::model::SapDiscovery>>(mut self, v: T) -> Self {
        self.sap_discovery = Some(v.into());
        self
    }

    /// Sets or clears the value of [sap_discovery][crate::model::Insight::sap_discovery].
    pub fn set_or_clear_sap_discovery<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::SapDiscovery>,
    {
        self.sap_discovery = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sap_validation][crate::model::Insight::sap_validation].
    pub fn set_sap_validation<T: Into<crate::model::SapValidation>>(mut self, v: T) -> Self {
        self.sap_validation = Some(v.into());
        self
    }

    /// Sets or clears the value of [sap_validation][crate::model::Insight::sap_validation].
    pub fn set_or_clear_sap_validation<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::SapValidation>,
    {
        self.sap_validation = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sent_time][crate::model::Insight::sent_time].
    pub fn set_sent_time<T: Into<String>>(mut self, v: T) -> Self {
        self.sent_time = Some(v.into());
        self
    }

    /// Sets or clears the value of [sent_time][crate::model::Insight::sent_time].
    pub fn set_or_clear_sent_time<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.sent_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sqlserver_validation][crate::model::Insight::sqlserver_validation].
    pub fn set_sqlserver_validation<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::SqlserverValidation>,
    {
        self.sqlserver_validation = Some(v.into());
        self
    }

    /// Sets or clears the value of [sqlserver_validation][crate::model::Insight::sqlserver_validation].
    pub fn set_or_clear_sqlserver_validation<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::SqlserverValidation>,
    {
        self.sqlserver_validation = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for Insight {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.Insight"
    }
}

#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct IsolationExpectations {
    pub zi_org_policy: Option<String>,

    pub zi_region_policy: Option<String>,

    pub zi_region_state: Option<String>,

    pub zone_isolation: Option<String>,

    pub zone_separation: Option<String>,

    pub zs_org_policy: Option<String>,

    pub zs_region_state: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl IsolationExpectations {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [zi_org_policy][crate::model::IsolationExpectations::zi_org_policy].
    pub fn set_zi_org_policy<T: Into<String>>(mut self, v: T) -> Self {
        self.zi_org_policy = Some(v.into());
        self
    }

    /// Sets or clears the value of [zi_org_policy][crate::model::IsolationExpectations::zi_org_policy].
    pub fn set_or_clear_zi_org_policy<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.zi_org_policy = v.map(|x| x.into());
        self
    }

    /// Sets the value of [zi_region_policy][crate::model::IsolationExpectations::zi_region_policy].
    pub fn set_zi_region_policy<T: Into<String>>(mut self, v: T) -> Self {
        self.zi_region_policy = Some(v.into());
        self
    }

    /// Sets or clears the value of [zi_region_policy][crate::model::IsolationExpectations::zi_region_policy].
    pub fn set_or_clear_zi_region_policy<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.zi_region_policy = v.map(|x| x.into());
        self
    }

    /// Sets the value of [zi_region_state][crate::model::IsolationExpectations::zi_region_state].
    pub fn set_zi_region_state<T: Into<String>>(mut self, v: T) -> Self {
        self.zi_region_state = Some(v.into());
        self
    }

    /// Sets or clears the value of [zi_region_state][crate::model::IsolationExpectations::zi_region_state].
    pub fn set_or_clear_zi_region_state<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.zi_region_state = v.map(|x| x.into());
        self
    }

    /// Sets the value of [zone_isolation][crate::model::IsolationExpectations::zone_isolation].
    pub fn set_zone_isolation<T: Into<String>>(mut self, v: T) -> Self {
        self.zone_isolation = Some(v.into());
        self
    }

    /// Sets or clears the value of [zone_isolation][crate::model::IsolationExpectations::zone_isolation].
    pub fn set_or_clear_zone_isolation<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.zone_isolation = v.map(|x| x.into());
        self
    }

    /// Sets the value of [zone_separation][crate::model::IsolationExpectations::zone_separation].
    pub fn set_zone_separation<T: Into<String>>(mut self, v: T) -> Self {
        self.zone_separation = Some(v.into());
        self
    }

    /// Sets or clears the value of [zone_separation][crate::model::IsolationExpectations::zone_separation].
    pub fn set_or_clear_zone_separation<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.zone_separation = v.map(|x| x.into());
        self
    }

    /// Sets the value of [zs_org_policy][crate::model::IsolationExpectations::zs_org_policy].
    pub fn set_zs_org_policy<T: Into<String>>(mut self, v: T) -> Self {
        self.zs_org_policy = Some(v.into());
        self
    }

    /// Sets or clears the value of [zs_org_policy][crate::model::IsolationExpectations::zs_org_policy].
    pub fn set_or_clear_zs_org_policy<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.zs_org_policy = v.map(|x| x.into());
        self
    }

    /// Sets the value of [zs_region_state][crate::model::IsolationExpectations::zs_region_state].
    pub fn set_zs_region_state<T: Into<String>>(mut self, v: T) -> Self {
        self.zs_region_state = Some(v.into());
        self
    }

    /// Sets or clears the value of [zs_region_state][crate::model::IsolationExpectations::zs_region_state].
    pub fn set_or_clear_zs_region_state<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.zs_region_state = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for IsolationExpectations {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.IsolationExpectations"
    }
}

/// Message for response to listing Evaluations
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListEvaluationsResponse {
    /// The list of Evaluation
    pub evaluations: Option<Vec<crate::model::Evaluation>>,

    /// A token identifying a page of results the server should return.
    pub next_page_token: Option<String>,

    /// Locations that could not be reached.
    pub unreachable: Option<Vec<String>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListEvaluationsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [evaluations][crate::model::ListEvaluationsResponse::evaluations].
    pub fn set_evaluations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Evaluation>,
    {
        self.evaluations = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListEvaluationsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::ListEvaluationsResponse::next_page_token].
    pub fn set_or_clear_next_page_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [unreachable][crate::model::ListEvaluationsResponse::unreachable].
    pub fn set_unreachable<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.unreachable = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for ListEvaluationsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.ListEvaluationsResponse"
    }
}

impl apicore::paginator::PageableResponse for ListEvaluationsResponse {
    type PageItem = crate::model::Evaluation;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }

    fn items(self) -> Vec<Self::PageItem> {
        self.evaluations.unwrap_or_default()
    }
}

/// Message for response of list execution results
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListExecutionResultsResponse {
    /// The versions from the specified publisher.
    pub execution_results: Option<Vec<crate::model::ExecutionResult>>,

    /// A token, which can be sent as `page_token` to retrieve the next page. If
    /// this field is omitted, there are no subsequent pages.
    pub next_page_token: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListExecutionResultsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [execution_results][crate::model::ListExecutionResultsResponse::execution_results].
    pub fn set_execution_results<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::ExecutionResult>,
    {
        self.execution_results = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListExecutionResultsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::ListExecutionResultsResponse::next_page_token].
    pub fn set_or_clear_next_page_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.next_page_token = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ListExecutionResultsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.ListExecutionResultsResponse"
    }
}

impl apicore::paginator::PageableResponse for ListExecutionResultsResponse {
    type PageItem = crate::model::ExecutionResult;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }

    fn items(self) -> Vec<Self::PageItem> {
        self.execution_results.unwrap_or_default()
    }
}

/// Message for response to listing Executions
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListExecutionsResponse {
    /// The list of Execution
    pub executions: Option<Vec<crate::model::Execution>>,

    /// A token identifying a page of results the server should return.
    pub next_page_token: Option<String>,

    /// Locations that could not be reached.
    pub unreachable: Option<Vec<String>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListExecutionsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [executions][crate::model::ListExecutionsResponse::executions].
    pub fn set_executions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Execution>,
    {
        self.executions = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListExecutionsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::ListExecutionsResponse::next_page_token].
    pub fn set_or_clear_next_page_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [unreachable][crate::model::ListExecutionsResponse::unreachable].
    pub fn set_unreachable<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.unreachable = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for ListExecutionsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.ListExecutionsResponse"
    }
}

impl apicore::paginator::PageableResponse for ListExecutionsResponse {
    type PageItem = crate::model::Execution;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }

    fn items(self) -> Vec<Self::PageItem> {
        self.executions.unwrap_or_default()
    }
}

/// The response message for Locations.ListLocations.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListLocationsResponse {
    /// A list of locations that matches the specified filter in the request.
    pub locations: Option<Vec<crate::model::Location>>,

    /// The standard List next-page token.
    pub next_page_token: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListLocationsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [locations][crate::model::ListLocationsResponse::locations].
    pub fn set_locations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Location>,
    {
        self.locations = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListLocationsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::ListLocationsResponse::next_page_token].
    pub fn set_or_clear_next_page_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.next_page_token = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ListLocationsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.ListLocationsResponse"
    }
}

impl apicore::paginator::PageableResponse for ListLocationsResponse {
    type PageItem = crate::model::Location;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }

    fn items(self) -> Vec<Self::PageItem> {
        self.locations.unwrap_or_default()
    }
}

/// The response message for Operations.ListOperations.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListOperationsResponse {
    /// The standard List next-page token.
    pub next_page_token: Option<String>,

    /// A list of operations that matches the specified filter in the request.
    pub operations: Option<Vec<crate::model::Operation>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListOperationsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [next_page_token][crate::model::ListOperationsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::ListOperationsResponse::next_page_token].
    pub fn set_or_clear_next_page_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [operations][crate::model::ListOperationsResponse::operations].
    pub fn set_operations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Operation>,
    {
        self.operations = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for ListOperationsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.ListOperationsResponse"
    }
}

impl apicore::paginator::PageableResponse for ListOperationsResponse {
    type PageItem = crate::model::Operation;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }

    fn items(self) -> Vec<Self::PageItem> {
        self.operations.unwrap_or_default()
    }
}

/// Mesesage of response of list rules
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListRulesResponse {
    /// A token identifying a page of results the server should return.
    pub next_page_token: Option<String>,

    /// all rules in response
    pub rules: Option<Vec<crate::model::Rule>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListRulesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [next_page_token][crate::model::ListRulesResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::ListRulesResponse::next_page_token].
    pub fn set_or_clear_next_page_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [rules][crate::model::ListRulesResponse::rules].
    pub fn set_rules<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Rule>,
    {
        self.rules = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for ListRulesResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.ListRulesResponse"
    }
}

impl apicore::paginator::PageableResponse for ListRulesResponse {
    type PageItem = crate::model::Rule;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }

    fn items(self) -> Vec<Self::PageItem> {
        self.rules.unwrap_or_default()
    }
}

/// Message for response to list scanned resources
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListScannedResourcesResponse {
    /// A token identifying a page of results the server should return.
    pub next_page_token: Option<String>,

    /// All scanned resources in response
    pub scanned_resources: Option<Vec<crate::model::ScannedResource>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListScannedResourcesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [next_page_token][crate::model::ListScannedResourcesResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::ListScannedResourcesResponse::next_page_token].
    pub fn set_or_clear_next_page_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [scanned_resources][crate::model::ListScannedResourcesResponse::scanned_resources].
    pub fn set_scanned_resources<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::ScannedResource>,
    {
        self.scanned_resources = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for ListScannedResourcesResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.ListScannedResourcesResponse"
    }
}

impl apicore::paginator::PageableResponse for ListScannedResourcesResponse {
    type PageItem = crate::model::ScannedResource;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }

    fn items(self) -> Vec<Self::PageItem> {
        self.scanned_resources.unwrap_or_default()
    }
}

/// A resource that represents a Google Cloud location.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Location {
    /// The friendly name for this location, typically a nearby city name. For
    /// example, "Tokyo".
    pub display_name: Option<String>,

    /// Cross-service attributes for the location. For example
    /// {"cloud.googleapis.com/region": "us-east1"}
    pub labels: Option<std::collections::HashMap<String, String>>,

    /// The canonical id for this location. For example: `"us-east1"`.
    pub location_id: Option<String>,

    /// Service-specific metadata. For example the available capacity at the
    /// given location.
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,

    /// Resource name for the location, which may vary between implementations.
    /// For example: `"projects/example-project/locations/us-east1"`
    pub name: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Location {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [display_name][crate::model::Location::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets or clears the value of [display_name][crate::model::Location::display_name].
    pub fn set_or_clear_display_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.display_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [labels][crate::model::Location::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [location_id][crate::model::Location::location_id].
    pub fn set_location_id<T: Into<String>>(mut self, v: T) -> Self {
        self.location_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [location_id][crate::model::Location::location_id].
    pub fn set_or_clear_location_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.location_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [metadata][crate::model::Location::metadata].
    pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.metadata = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [name][crate::model::Location::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::Location::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for Location {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.Location"
    }
}

#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LocationAssignment {
    pub location: Option<String>,

    pub location_type: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl LocationAssignment {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [location][crate::model::LocationAssignment::location].
    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][crate::model::LocationAssignment::location].
    pub fn set_or_clear_location<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [location_type][crate::model::LocationAssignment::location_type].
    pub fn set_location_type<T: Into<String>>(mut self, v: T) -> Self {
        self.location_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [location_type][crate::model::LocationAssignment::location_type].
    pub fn set_or_clear_location_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.location_type = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for LocationAssignment {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.LocationAssignment"
    }
}

#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LocationData {
    pub blobstore_location: Option<crate::model::BlobstoreLocation>,

    pub child_asset_location: Option<crate::model::CloudAssetComposition>,

    pub direct_location: Option<crate::model::DirectLocationAssignment>,

    pub gcp_project_proxy: Option<crate::model::TenantProjectProxy>,

    pub placer_location: Option<crate::model::PlacerLocation>,

    pub spanner_location: Option<crate::model::SpannerLocation>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl LocationData {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [blobstore_location][crate::model::LocationData::blobstore_location].
    pub fn set_blobstore_location<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::BlobstoreLocation>,
    {
        self.blobstore_location = Some(v.into());
        self
    }

    /// Sets or clears the value of [blobstore_location][crate::model::LocationData::blobstore_location].
    pub fn set_or_clear_blobstore_location<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::BlobstoreLocation>,
    {
        self.blobstore_location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [child_asset_location][crate::model::LocationData::child_asset_location].
    pub fn set_child_asset_location<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::CloudAssetComposition>,
    {
        self.child_asset_location = Some(v.into());
        self
    }

    /// Sets or clears the value of [child_asset_location][crate::model::LocationData::child_asset_location].
    pub fn set_or_clear_child_asset_location<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::CloudAssetComposition>,
    {
        self.child_asset_location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [direct_location][crate::model::LocationData::direct_location].
    pub fn set_direct_location<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::DirectLocationAssignment>,
    {
        self.direct_location = Some(v.into());
        self
    }

    /// Sets or clears the value of [direct_location][crate::model::LocationData::direct_location].
    pub fn set_or_clear_direct_location<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::DirectLocationAssignment>,
    {
        self.direct_location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gcp_project_proxy][crate::model::LocationData::gcp_project_proxy].
    pub fn set_gcp_project_proxy<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::TenantProjectProxy>,
    {
        self.gcp_project_proxy = Some(v.into());
        self
    }

    /// Sets or clears the value of [gcp_project_proxy][crate::model::LocationData::gcp_project_proxy].
    pub fn set_or_clear_gcp_project_proxy<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::TenantProjectProxy>,
    {
        self.gcp_project_proxy = v.map(|x| x.into());
        self
    }

    /// Sets the value of [placer_location][crate::model::LocationData::placer_location].
    pub fn set_placer_location<T: Into<crate::model::PlacerLocation>>(mut self, v: T) -> Self {
        self.placer_location = Some(v.into());
        self
    }

    /// Sets or clears the value of [placer_location][crate::model::LocationData::placer_location].
    pub fn set_or_clear_placer_location<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::PlacerLocation>,
    {
        self.placer_location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [spanner_location][crate::model::LocationData::spanner_location].
    pub fn set_spanner_location<T: Into<crate::model::SpannerLocation>>(mut self, v: T) -> Self {
        self.spanner_location = Some(v.into());
        self
    }

    /// Sets or clears the value of [spanner_location][crate::model::LocationData::spanner_location].
    pub fn set_or_clear_spanner_location<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::SpannerLocation>,
    {
        self.spanner_location = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for LocationData {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.LocationData"
    }
}

/// This resource represents a long-running operation that is the result of a
/// network API call.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Operation {
    /// If the value is `false`, it means the operation is still in progress. If
    /// `true`, the operation is completed, and either `error` or `response` is
    /// available.
    pub done: Option<bool>,

    /// The error result of the operation in case of failure or cancellation.
    pub error: Option<crate::model::Status>,

    /// Service-specific metadata associated with the operation. It typically
    /// contains progress information and common metadata such as create time.
    /// Some services might not provide such metadata. Any method that returns a
    /// long-running operation should document the metadata type, if any.
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,

    /// The server-assigned name, which is only unique within the same service
    /// that originally returns it. If you use the default HTTP mapping, the
    /// `name` should be a resource name ending with `operations/{unique_id}`.
    pub name: Option<String>,

    /// The normal, successful response of the operation. If the original method
    /// returns no data on success, such as `Delete`, the response is
    /// `google.protobuf.Empty`. If the original method is standard
    /// `Get`/{Create}/{Update}, the response should be the resource. For other
    /// methods, the response should have the type `XxxResponse`, where `Xxx` is
    /// the original method name. For example, if the original method name is
    /// `TakeSnapshot()`, the inferred response type is `TakeSnapshotResponse`.
    pub response: Option<serde_json::Map<String, serde_json::Value>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Operation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [done][crate::model::Operation::done].
    pub fn set_done<T: Into<bool>>(mut self, v: T) -> Self {
        self.done = Some(v.into());
        self
    }

    /// Sets or clears the value of [done][crate::model::Operation::done].
    pub fn set_or_clear_done<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.done = v.map(|x| x.into());
        self
    }

    /// Sets the value of [error][crate::model::Operation::error].
    pub fn set_error<T: Into<crate::model::Status>>(mut self, v: T) -> Self {
        self.error = Some(v.into());
        self
    }

    /// Sets or clears the value of [error][crate::model::Operation::error].
    pub fn set_or_clear_error<T: Into<crate::model::Status>>(mut self, v: Option<T>) -> Self {
        self.error = v.map(|x| x.into());
        self
    }

    /// Sets the value of [metadata][crate::model::Operation::metadata].
    pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.metadata = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [name][crate::model::Operation::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::Operation::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [response][crate::model::Operation::response].
    pub fn set_response<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.response = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }
}

impl apicore::message::Message for Operation {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.Operation"
    }
}

/// Represents the metadata of the long-running operation.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OperationMetadata {
    /// Output only. API version used to start the operation.
    pub api_version: Option<String>,

    /// Output only. The time the operation was created.
    pub create_time: Option<String>,

    /// Output only. The time the operation finished running.
    pub end_time: Option<String>,

    /// Output only. Identifies whether the user has requested cancellation of
    /// the operation. Operations that have been cancelled successfully have
    /// Operation.error value with a google.rpc.Status.code of 1, corresponding
    /// to `Code.CANCELLED`.
    pub requested_cancellation: Option<bool>,

    /// Output only. Human-readable status of the operation, if any.
    pub status_message: Option<String>,

    /// Output only. Server-defined resource path for the target of the
    /// operation.
    pub target: Option<String>,

    /// Output only. Name of the verb executed by the operation.
    pub verb: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl OperationMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [api_version][crate::model::OperationMetadata::api_version].
    pub fn set_api_version<T: Into<String>>(mut self, v: T) -> Self {
        self.api_version = Some(v.into());
        self
    }

    /// Sets or clears the value of [api_version][crate::model::OperationMetadata::api_version].
    pub fn set_or_clear_api_version<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.api_version = v.map(|x| x.into());
        self
    }

    /// Sets the value of [create_time][crate::model::OperationMetadata::create_time].
    pub fn set_create_time<T: Into<String>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets or clears the value of [create_time][crate::model::OperationMetadata::create_time].
    pub fn set_or_clear_create_time<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.create_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [end_time][crate::model::OperationMetadata::end_time].
    pub fn set_end_time<T: Into<String>>(mut self, v: T) -> Self {
        self.end_time = Some(v.into());
        self
    }

    /// Sets or clears the value of [end_time][crate::model::OperationMetadata::end_time].
    pub fn set_or_clear_end_time<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.end_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [requested_cancellation][crate::model::OperationMetadata::requested_cancellation].
    pub fn set_requested_cancellation<T: Into<bool>>(mut self, v: T) -> Self {
        self.requested_cancellation = Some(v.into());
        self
    }

    /// Sets or clears the value of [requested_cancellation][crate::model::OperationMetadata::requested_cancellation].
    pub fn set_or_clear_requested_cancellation<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.requested_cancellation = v.map(|x| x.into());
        self
    }

    /// Sets the value of [status_message][crate::model::OperationMetadata::status_message].
    pub fn set_status_message<T: Into<String>>(mut self, v: T) -> Self {
        self.status_message = Some(v.into());
        self
    }

    /// Sets or clears the value of [status_message][crate::model::OperationMetadata::status_message].
    pub fn set_or_clear_status_message<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.status_message = v.map(|x| x.into());
        self
    }

    /// Sets the value of [target][crate::model::OperationMetadata::target].
    pub fn set_target<T: Into<String>>(mut self, v: T) -> Self {
        self.target = Some(v.into());
        self
    }

    /// Sets or clears the value of [target][crate::model::OperationMetadata::target].
    pub fn set_or_clear_target<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.target = v.map(|x| x.into());
        self
    }

    /// Sets the value of [verb][crate::model::OperationMetadata::verb].
    pub fn set_verb<T: Into<String>>(mut self, v: T) -> Self {
        self.verb = Some(v.into());
        self
    }

    /// Sets or clears the value of [verb][crate::model::OperationMetadata::verb].
    pub fn set_or_clear_verb<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.verb = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for OperationMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.OperationMetadata"
    }
}

/// Message describing that the location of the customer resource is tied to
/// placer allocations
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PlacerLocation {
    pub placer_config: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl PlacerLocation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [placer_config][crate::model::PlacerLocation::placer_config].
    pub fn set_placer_config<T: Into<String>>(mut self, v: T) -> Self {
        self.placer_config = Some(v.into());
        self
    }

    /// Sets or clears the value of [placer_config][crate::model::PlacerLocation::placer_config].
    pub fn set_or_clear_placer_config<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.placer_config = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for PlacerLocation {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.PlacerLocation"
    }
}

/// To be used for specifying the intended distribution of regional
/// compute.googleapis.com/InstanceGroupManager instances
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RegionalMigDistributionPolicy {
    /// The shape in which the group converges around distribution of resources.
    /// Instance of proto2 enum
    pub target_shape: Option<i32>,

    /// Cloud zones used by regional MIG to create instances.
    pub zones: Option<Vec<crate::model::ZoneConfiguration>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl RegionalMigDistributionPolicy {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [target_shape][crate::model::RegionalMigDistributionPolicy::target_shape].
    pub fn set_target_shape<T: Into<i32>>(mut self, v: T) -> Self {
        self.target_shape = Some(v.into());
        self
    }

    /// Sets or clears the value of [target_shape][crate::model::RegionalMigDistributionPolicy::target_shape].
    pub fn set_or_clear_target_shape<T: Into<i32>>(mut self, v: Option<T>) -> Self {
        self.target_shape = v.map(|x| x.into());
        self
    }

    /// Sets the value of [zones][crate::model::RegionalMigDistributionPolicy::zones].
    pub fn set_zones<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::ZoneConfiguration>,
    {
        self.zones = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for RegionalMigDistributionPolicy {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.RegionalMigDistributionPolicy"
    }
}

/// Message represent resource in execution result
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Resource {
    /// the name of the resource
    pub name: Option<String>,

    /// the service account accosiate with resource
    pub service_account: Option<String>,

    /// the type of reresource
    pub r#type: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Resource {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Resource::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::Resource::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [service_account][crate::model::Resource::service_account].
    pub fn set_service_account<T: Into<String>>(mut self, v: T) -> Self {
        self.service_account = Some(v.into());
        self
    }

    /// Sets or clears the value of [service_account][crate::model::Resource::service_account].
    pub fn set_or_clear_service_account<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.service_account = v.map(|x| x.into());
        self
    }

    /// Sets the value of [type][crate::model::Resource::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets or clears the value of [type][crate::model::Resource::r#type].
    pub fn set_or_clear_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.r#type = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for Resource {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.Resource"
    }
}

/// Message describing resource filters
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ResourceFilter {
    /// Filter compute engine resource
    pub gce_instance_filter: Option<crate::model::GceInstanceFilter>,

    /// The label used for filter resource
    pub inclusion_labels: Option<std::collections::HashMap<String, String>>,

    /// The id pattern for filter resource
    pub resource_id_patterns: Option<Vec<String>>,

    /// The scopes of evaluation resource
    pub scopes: Option<Vec<String>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ResourceFilter {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gce_instance_filter][crate::model::ResourceFilter::gce_instance_filter].
    pub fn set_gce_instance_filter<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::GceInstanceFilter>,
    {
        self.gce_instance_filter = Some(v.into());
        self
    }

    /// Sets or clears the value of [gce_instance_filter][crate::model::ResourceFilter::gce_instance_filter].
    pub fn set_or_clear_gce_instance_filter<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::GceInstanceFilter>,
    {
        self.gce_instance_filter = v.map(|x| x.into());
        self
    }

    /// Sets the value of [inclusion_labels][crate::model::ResourceFilter::inclusion_labels].
    pub fn set_inclusion_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.inclusion_labels = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [resource_id_patterns][crate::model::ResourceFilter::resource_id_patterns].
    pub fn set_resource_id_patterns<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.resource_id_patterns = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [scopes][crate::model::ResourceFilter::scopes].
    pub fn set_scopes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.scopes = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for ResourceFilter {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.ResourceFilter"
    }
}

/// Message describing resource status
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ResourceStatus {
    /// Historical: Used before 2023-05-22 the new version of rule id if exists
    pub rules_newer_versions: Option<Vec<String>>,

    /// State of the resource
    pub state: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ResourceStatus {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [rules_newer_versions][crate::model::ResourceStatus::rules_newer_versions].
    pub fn set_rules_newer_versions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.rules_newer_versions = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [state][crate::model::ResourceStatus::state].
    pub fn set_state<T: Into<String>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }

    /// Sets or clears the value of [state][crate::model::ResourceStatus::state].
    pub fn set_or_clear_state<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.state = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ResourceStatus {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.ResourceStatus"
    }
}

/// Message represent a rule
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Rule {
    /// descrite rule in plain language
    pub description: Option<String>,

    /// the name display in UI
    pub display_name: Option<String>,

    /// the message template for rule
    pub error_message: Option<String>,

    /// rule name
    pub name: Option<String>,

    /// the primary category
    pub primary_category: Option<String>,

    /// the remediation for the rule
    pub remediation: Option<String>,

    /// Output only. the version of the rule
    pub revision_id: Option<String>,

    /// the secondary category
    pub secondary_category: Option<String>,

    /// the severity of the rule
    pub severity: Option<String>,

    /// List of user-defined tags
    pub tags: Option<Vec<String>>,

    /// the docuement url for the rule
    pub uri: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Rule {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [description][crate::model::Rule::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::Rule::description].
    pub fn set_or_clear_description<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [display_name][crate::model::Rule::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = Some(v.into());
        self
    }

    /// Sets or clears the value of [display_name][crate::model::Rule::display_name].
    pub fn set_or_clear_display_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.display_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [error_message][crate::model::Rule::error_message].
    pub fn set_error_message<T: Into<String>>(mut self, v: T) -> Self {
        self.error_message = Some(v.into());
        self
    }

    /// Sets or clears the value of [error_message][crate::model::Rule::error_message].
    pub fn set_or_clear_error_message<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.error_message = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::Rule::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::Rule::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [primary_category][crate::model::Rule::primary_category].
    pub fn set_primary_category<T: Into<String>>(mut self, v: T) -> Self {
        self.primary_category = Some(v.into());
        self
    }

    /// Sets or clears the value of [primary_category][crate::model::Rule::primary_category].
    pub fn set_or_clear_primary_category<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.primary_category = v.map(|x| x.into());
        self
    }

    /// Sets the value of [remediation][crate::model::Rule::remediation].
    pub fn set_remediation<T: Into<String>>(mut self, v: T) -> Self {
        self.remediation = Some(v.into());
        self
    }

    /// Sets or clears the value of [remediation][crate::model::Rule::remediation].
    pub fn set_or_clear_remediation<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.remediation = v.map(|x| x.into());
        self
    }

    /// Sets the value of [revision_id][crate::model::Rule::revision_id].
    pub fn set_revision_id<T: Into<String>>(mut self, v: T) -> Self {
        self.revision_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [revision_id][crate::model::Rule::revision_id].
    pub fn set_or_clear_revision_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.revision_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [secondary_category][crate::model::Rule::secondary_category].
    pub fn set_secondary_category<T: Into<String>>(mut self, v: T) -> Self {
        self.secondary_category = Some(v.into());
        self
    }

    /// Sets or clears the value of [secondary_category][crate::model::Rule::secondary_category].
    pub fn set_or_clear_secondary_category<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.secondary_category = v.map(|x| x.into());
        self
    }

    /// Sets the value of [severity][crate::model::Rule::severity].
    pub fn set_severity<T: Into<String>>(mut self, v: T) -> Self {
        self.severity = Some(v.into());
        self
    }

    /// Sets or clears the value of [severity][crate::model::Rule::severity].
    pub fn set_or_clear_severity<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.severity = v.map(|x| x.into());
        self
    }

    /// Sets the value of [tags][crate::model::Rule::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.tags = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [uri][crate::model::Rule::uri].
    pub fn set_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.uri = Some(v.into());
        self
    }

    /// Sets or clears the value of [uri][crate::model::Rule::uri].
    pub fn set_or_clear_uri<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.uri = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for Rule {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.Rule"
    }
}

/// Message for creating a Execution
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RunEvaluationRequest {
    /// Required. The resource being created
    pub execution: Option<crate::model::Execution>,

    /// Required. Id of the requesting object If auto-generating Id server-side,
    /// remove this field and execution_id from the method_signature of Create
    /// RPC
    pub execution_id: Option<String>,

    /// Optional. An optional request ID to identify requests. Specify a unique
    /// request ID so that if you must retry your request, the server will know
    /// to ignore the request if it has already been completed.
    pub request_id: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl RunEvaluationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [execution][crate::model::RunEvaluationRequest::execution].
    pub fn set_execution<T: Into<crate::model::Execution>>(mut self, v: T) -> Self {
        self.execution = Some(v.into());
        self
    }

    /// Sets or clears the value of [execution][crate::model::RunEvaluationRequest::execution].
    pub fn set_or_clear_execution<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::Execution>,
    {
        self.execution = v.map(|x| x.into());
        self
    }

    /// Sets the value of [execution_id][crate::model::RunEvaluationRequest::execution_id].
    pub fn set_execution_id<T: Into<String>>(mut self, v: T) -> Self {
        self.execution_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [execution_id][crate::model::RunEvaluationRequest::execution_id].
    pub fn set_or_clear_execution_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.execution_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [request_id][crate::model::RunEvaluationRequest::request_id].
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][crate::model::RunEvaluationRequest::request_id].
    pub fn set_or_clear_request_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for RunEvaluationRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.RunEvaluationRequest"
    }
}

/// The schema of SAP system discovery data.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SapDiscovery {
    /// Optional. An SAP system may run without an application layer.
    pub application_layer: Option<crate::model::SapDiscoveryComponent>,

    /// Required. An SAP system must have a database.
    pub database_layer: Option<crate::model::SapDiscoveryComponent>,

    /// Optional. The metadata for SAP system discovery data.
    pub metadata: Option<crate::model::SapDiscoveryMetadata>,

    /// Optional. The GCP project number that this SapSystem belongs to.
    pub project_number: Option<String>,

    /// Output only. A combination of database SID, database instance URI and
    /// tenant DB name to make a unique identifier per-system.
    pub system_id: Option<String>,

    /// Required. Unix timestamp this system has been updated last.
    pub update_time: Option<String>,

    /// Optional. The properties of the workload.
    pub workload_properties: Option<crate::model::SapDiscoveryWorkloadProperties>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SapDiscovery {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [application_layer][crate::model::SapDiscovery::application_layer].
    pub fn set_application_layer<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::SapDiscoveryComponent>,
    {
        self.application_layer = Some(v.into());
        self
    }

    /// Sets or clears the value of [application_layer][crate::model::SapDiscovery::application_layer].
    pub fn set_or_clear_application_layer<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::SapDiscoveryComponent>,
    {
        self.application_layer = v.map(|x| x.into());
        self
    }

    /// Sets the value of [database_layer][crate::model::SapDiscovery::database_layer].
    pub fn set_database_layer<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::SapDiscoveryComponent>,
    {
        self.database_layer = Some(v.into());
        self
    }

    /// Sets or clears the value of [database_layer][crate::model::SapDiscovery::database_layer].
    pub fn set_or_clear_database_layer<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::SapDiscoveryComponent>,
    {
        self.database_layer = v.map(|x| x.into());
        self
    }

    /// Sets the value of [metadata][crate::model::SapDiscovery::metadata].
    pub fn set_metadata<T: Into<crate::model::SapDiscoveryMetadata>>(mut self, v: T) -> Self {
        self.metadata = Some(v.into());
        self
    }

    /// Sets or clears the value of [metadata][crate::model::SapDiscovery::metadata].
    pub fn set_or_clear_metadata<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::SapDiscoveryMetadata>,
    {
        self.metadata = v.map(|x| x.into());
        self
    }

    /// Sets the value of [project_number][crate::model::SapDiscovery::project_number].
    pub fn set_project_number<T: Into<String>>(mut self, v: T) -> Self {
        self.project_number = Some(v.into());
        self
    }

    /// Sets or clears the value of [project_number][crate::model::SapDiscovery::project_number].
    pub fn set_or_clear_project_number<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.project_number = v.map(|x| x.into());
        self
    }

    /// Sets the value of [system_id][crate::model::SapDiscovery::system_id].
    pub fn set_system_id<T: Into<String>>(mut self, v: T) -> Self {
        self.system_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [system_id][crate::model::SapDiscovery::system_id].
    pub fn set_or_clear_system_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.system_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_time][crate::model::SapDiscovery::update_time].
    pub fn set_update_time<T: Into<String>>(mut self, v: T) -> Self {
        self.update_time = Some(v.into());
        self
    }

    /// Sets or clears the value of [update_time][crate::model::SapDiscovery::update_time].
    pub fn set_or_clear_update_time<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.update_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [workload_properties][crate::model::SapDiscovery::workload_properties].
    pub fn set_workload_properties<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::SapDiscoveryWorkloadProperties>,
    {
        self.workload_properties = Some(v.into());
        self
    }

    /// Sets or clears the value of [workload_properties][crate::model::SapDiscovery::workload_properties].
    pub fn set_or_clear_workload_properties<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::SapDiscoveryWorkloadProperties>,
    {
        self.workload_properties = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for SapDiscovery {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.SapDiscovery"
    }
}

/// Message describing the system component.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SapDiscoveryComponent {
    pub application_properties: Option<crate::model::SapDiscoveryComponentApplicationProperties>,

    pub database_properties: Option<crate::model::SapDiscoveryComponentDatabaseProperties>,

    /// Optional. A list of host URIs that are part of the HA configuration if
    /// present. An empty list indicates the component is not configured for HA.
    pub ha_hosts: Option<Vec<String>>,

    /// Required. Pantheon Project in which the resources reside.
    pub host_project: Option<String>,

    /// Optional. A list of replication sites used in Disaster Recovery (DR)
    /// configurations.
    pub replication_sites: Option<Vec<crate::model::SapDiscoveryComponent>>,

    /// Optional. The resources in a component.
    pub resources: Option<Vec<crate::model::SapDiscoveryResource>>,

    /// Optional. The SAP identifier, used by the SAP software and helps
    /// differentiate systems for customers.
    pub sid: Option<String>,

    /// Optional. The detected topology of the component.
    pub topology_type: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SapDiscoveryComponent {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [application_properties][crate::model::SapDiscoveryComponent::application_properties].
    pub fn set_application_properties<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::SapDiscoveryComponentApplicationProperties>,
    {
        self.application_properties = Some(v.into());
        self
    }

    /// Sets or clears the value of [application_properties][crate::model::SapDiscoveryComponent::application_properties].
    pub fn set_or_clear_application_properties<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::SapDiscoveryComponentApplicationProperties>,
    {
        self.application_properties = v.map(|x| x.into());
        self
    }

    /// Sets the value of [database_properties][crate::model::SapDiscoveryComponent::database_properties].
    pub fn set_database_properties<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::SapDiscoveryComponentDatabaseProperties>,
    {
        self.database_properties = Some(v.into());
        self
    }

    /// Sets or clears the value of [database_properties][crate::model::SapDiscoveryComponent::database_properties].
    pub fn set_or_clear_database_properties<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::SapDiscoveryComponentDatabaseProperties>,
    {
        self.database_properties = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ha_hosts][crate::model::SapDiscoveryComponent::ha_hosts].
    pub fn set_ha_hosts<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.ha_hosts = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [host_project][crate::model::SapDiscoveryComponent::host_project].
    pub fn set_host_project<T: Into<String>>(mut self, v: T) -> Self {
        self.host_project = Some(v.into());
        self
    }

    /// Sets or clears the value of [host_project][crate::model::SapDiscoveryComponent::host_project].
    pub fn set_or_clear_host_project<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.host_project = v.map(|x| x.into());
        self
    }

    /// Sets the value of [replication_sites][crate::model::SapDiscoveryComponent::replication_sites].
    pub fn set_replication_sites<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::SapDiscoveryComponent>,
    {
        self.replication_sites = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [resources][crate::model::SapDiscoveryComponent::resources].
    pub fn set_resources<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::SapDiscoveryResource>,
    {
        self.resources = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [sid][crate::model::SapDiscoveryComponent::sid].
    pub fn set_sid<T: Into<String>>(mut self, v: T) -> Self {
        self.sid = Some(v.into());
        self
    }

    /// Sets or clears the value of [sid][crate::model::SapDiscoveryComponent::sid].
    pub fn set_or_clear_sid<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.sid = v.map(|x| x.into());
        self
    }

    /// Sets the value of [topology_type][crate::model::SapDiscoveryComponent::topology_type].
    pub fn set_topology_type<T: Into<String>>(mut self, v: T) -> Self {
        self.topology_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [topology_type][crate::model::SapDiscoveryComponent::topology_type].
    pub fn set_or_clear_topology_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.topology_type = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for SapDiscoveryComponent {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.SapDiscoveryComponent"
    }
}

/// A set of properties describing an SAP Application layer.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SapDiscoveryComponentApplicationProperties {
    /// Optional. Deprecated: ApplicationType now tells you whether this is ABAP
    /// or Java.
    pub abap: Option<bool>,

    pub app_instance_number: Option<String>,

    pub application_type: Option<String>,

    pub ascs_instance_number: Option<String>,

    pub ascs_uri: Option<String>,

    pub ers_instance_number: Option<String>,

    pub kernel_version: Option<String>,

    pub nfs_uri: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SapDiscoveryComponentApplicationProperties {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [abap][crate::model::SapDiscoveryComponentApplicationProperties::abap].
    pub fn set_abap<T: Into<bool>>(mut self, v: T) -> Self {
        self.abap = Some(v.into());
        self
    }

    /// Sets or clears the value of [abap][crate::model::SapDiscoveryComponentApplicationProperties::abap].
    pub fn set_or_clear_abap<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.abap = v.map(|x| x.into());
        self
    }

    /// Sets the value of [app_instance_number][crate::model::SapDiscoveryComponentApplicationProperties::app_instance_number].
    pub fn set_app_instance_number<T: Into<String>>(mut self, v: T) -> Self {
        self.app_instance_number = Some(v.into());
        self
    }

    /// Sets or clears the value of [app_instance_number][crate::model::SapDiscoveryComponentApplicationProperties::app_instance_number].
    pub fn set_or_clear_app_instance_number<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.app_instance_number = v.map(|x| x.into());
        self
    }

    /// Sets the value of [application_type][crate::model::SapDiscoveryComponentApplicationProperties::application_type].
    pub fn set_application_type<T: Into<String>>(mut self, v: T) -> Self {
        self.application_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [application_type][crate::model::SapDiscoveryComponentApplicationProperties::application_type].
    pub fn set_or_clear_application_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.application_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ascs_instance_number][crate::model::SapDiscoveryComponentApplicationProperties::ascs_instance_number].
    pub fn set_ascs_instance_number<T: Into<String>>(mut self, v: T) -> Self {
        self.ascs_instance_number = Some(v.into());
        self
    }

    /// Sets or clears the value of [ascs_instance_number][crate::model::SapDiscoveryComponentApplicationProperties::ascs_instance_number].
    pub fn set_or_clear_ascs_instance_number<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.ascs_instance_number = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ascs_uri][crate::model::SapDiscoveryComponentApplicationProperties::ascs_uri].
    pub fn set_ascs_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.ascs_uri = Some(v.into());
        self
    }

    /// Sets or clears the value of [ascs_uri][crate::model::SapDiscoveryComponentApplicationProperties::ascs_uri].
    pub fn set_or_clear_ascs_uri<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.ascs_uri = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ers_instance_number][crate::model::SapDiscoveryComponentApplicationProperties::ers_instance_number].
    pub fn set_ers_instance_number<T: Into<String>>(mut self, v: T) -> Self {
        self.ers_instance_number = Some(v.into());
        self
    }

    /// Sets or clears the value of [ers_instance_number][crate::model::SapDiscoveryComponentApplicationProperties::ers_instance_number].
    pub fn set_or_clear_ers_instance_number<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.ers_instance_number = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kernel_version][crate::model::SapDiscoveryComponentApplicationProperties::kernel_version].
    pub fn set_kernel_version<T: Into<String>>(mut self, v: T) -> Self {
        self.kernel_version = Some(v.into());
        self
    }

    /// Sets or clears the value of [kernel_version][crate::model::SapDiscoveryComponentApplicationProperties::kernel_version].
    pub fn set_or_clear_kernel_version<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.kernel_version = v.map(|x| x.into());
        self
    }

    /// Sets the value of [nfs_uri][crate::model::SapDiscoveryComponentApplicationProperties::nfs_uri].
    pub fn set_nfs_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.nfs_uri = Some(v.into());
        self
    }

    /// Sets or clears the value of [nfs_uri][crate::model::SapDiscoveryComponentApplicationProperties::nfs_uri].
    pub fn set_or_clear_nfs_uri<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.nfs_uri = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for SapDiscoveryComponentApplicationProperties {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.SapDiscoveryComponentApplicationProperties"
    }
}

/// A set of properties describing an SAP Database layer.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SapDiscoveryComponentDatabaseProperties {
    pub database_sid: Option<String>,

    pub database_type: Option<String>,

    pub database_version: Option<String>,

    pub instance_number: Option<String>,

    pub primary_instance_uri: Option<String>,

    pub shared_nfs_uri: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SapDiscoveryComponentDatabaseProperties {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [database_sid][crate::model::SapDiscoveryComponentDatabaseProperties::database_sid].
    pub fn set_database_sid<T: Into<String>>(mut self, v: T) -> Self {
        self.database_sid = Some(v.into());
        self
    }

    /// Sets or clears the value of [database_sid][crate::model::SapDiscoveryComponentDatabaseProperties::database_sid].
    pub fn set_or_clear_database_sid<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.database_sid = v.map(|x| x.into());
        self
    }

    /// Sets the value of [database_type][crate::model::SapDiscoveryComponentDatabaseProperties::database_type].
    pub fn set_database_type<T: Into<String>>(mut self, v: T) -> Self {
        self.database_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [database_type][crate::model::SapDiscoveryComponentDatabaseProperties::database_type].
    pub fn set_or_clear_database_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.database_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [database_version][crate::model::SapDiscoveryComponentDatabaseProperties::database_version].
    pub fn set_database_version<T: Into<String>>(mut self, v: T) -> Self {
        self.database_version = Some(v.into());
        self
    }

    /// Sets or clears the value of [database_version][crate::model::SapDiscoveryComponentDatabaseProperties::database_version].
    pub fn set_or_clear_database_version<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.database_version = v.map(|x| x.into());
        self
    }

    /// Sets the value of [instance_number][crate::model::SapDiscoveryComponentDatabaseProperties::instance_number].
    pub fn set_instance_number<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_number = Some(v.into());
        self
    }

    /// Sets or clears the value of [instance_number][crate::model::SapDiscoveryComponentDatabaseProperties::instance_number].
    pub fn set_or_clear_instance_number<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.instance_number = v.map(|x| x.into());
        self
    }

    /// Sets the value of [primary_instance_uri][crate::model::SapDiscoveryComponentDatabaseProperties::primary_instance_uri].
    pub fn set_primary_instance_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.primary_instance_uri = Some(v.into());
        self
    }

    /// Sets or clears the value of [primary_instance_uri][crate::model::SapDiscoveryComponentDatabaseProperties::primary_instance_uri].
    pub fn set_or_clear_primary_instance_uri<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.primary_instance_uri = v.map(|x| x.into());
        self
    }

    /// Sets the value of [shared_nfs_uri][crate::model::SapDiscoveryComponentDatabaseProperties::shared_nfs_uri].
    pub fn set_shared_nfs_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.shared_nfs_uri = Some(v.into());
        self
    }

    /// Sets or clears the value of [shared_nfs_uri][crate::model::SapDiscoveryComponentDatabaseProperties::shared_nfs_uri].
    pub fn set_or_clear_shared_nfs_uri<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.shared_nfs_uri = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for SapDiscoveryComponentDatabaseProperties {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.SapDiscoveryComponentDatabaseProperties"
    }
}

/// Message describing SAP discovery system metadata
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SapDiscoveryMetadata {
    pub customer_region: Option<String>,

    pub defined_system: Option<String>,

    pub environment_type: Option<String>,

    pub sap_product: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SapDiscoveryMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [customer_region][crate::model::SapDiscoveryMetadata::customer_region].
    pub fn set_customer_region<T: Into<String>>(mut self, v: T) -> Self {
        self.customer_region = Some(v.into());
        self
    }

    /// Sets or clears the value of [customer_region][crate::model::SapDiscoveryMetadata::customer_region].
    pub fn set_or_clear_customer_region<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.customer_region = v.map(|x| x.into());
        self
    }

    /// Sets the value of [defined_system][crate::model::SapDiscoveryMetadata::defined_system].
    pub fn set_defined_system<T: Into<String>>(mut self, v: T) -> Self {
        self.defined_system = Some(v.into());
        self
    }

    /// Sets or clears the value of [defined_system][crate::model::SapDiscoveryMetadata::defined_system].
    pub fn set_or_clear_defined_system<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.defined_system = v.map(|x| x.into());
        self
    }

    /// Sets the value of [environment_type][crate::model::SapDiscoveryMetadata::environment_type].
    pub fn set_environment_type<T: Into<String>>(mut self, v: T) -> Self {
        self.environment_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [environment_type][crate::model::SapDiscoveryMetadata::environment_type].
    pub fn set_or_clear_environment_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.environment_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sap_product][crate::model::SapDiscoveryMetadata::sap_product].
    pub fn set_sap_product<T: Into<String>>(mut self, v: T) -> Self {
        self.sap_product = Some(v.into());
        self
    }

    /// Sets or clears the value of [sap_product][crate::model::SapDiscoveryMetadata::sap_product].
    pub fn set_or_clear_sap_product<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.sap_product = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for SapDiscoveryMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.SapDiscoveryMetadata"
    }
}

/// Message describing a resource.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SapDiscoveryResource {
    pub instance_properties: Option<crate::model::SapDiscoveryResourceInstanceProperties>,

    /// Optional. A list of resource URIs related to this resource.
    pub related_resources: Option<Vec<String>>,

    /// Required. ComputeInstance, ComputeDisk, VPC, Bare Metal server, etc.
    pub resource_kind: Option<String>,

    /// Required. The type of this resource.
    pub resource_type: Option<String>,

    /// Required. URI of the resource, includes project, location, and name.
    pub resource_uri: Option<String>,

    /// Required. Unix timestamp of when this resource last had its discovery
    /// data updated.
    pub update_time: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SapDiscoveryResource {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [instance_properties][crate::model::SapDiscoveryResource::instance_properties].
    pub fn set_instance_properties<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::SapDiscoveryResourceInstanceProperties>,
    {
        self.instance_properties = Some(v.into());
        self
    }

    /// Sets or clears the value of [instance_properties][crate::model::SapDiscoveryResource::instance_properties].
    pub fn set_or_clear_instance_properties<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::SapDiscoveryResourceInstanceProperties>,
    {
        self.instance_properties = v.map(|x| x.into());
        self
    }

    /// Sets the value of [related_resources][crate::model::SapDiscoveryResource::related_resources].
    pub fn set_related_resources<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.related_resources = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [resource_kind][crate::model::SapDiscoveryResource::resource_kind].
    pub fn set_resource_kind<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_kind = Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_kind][crate::model::SapDiscoveryResource::resource_kind].
    pub fn set_or_clear_resource_kind<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.resource_kind = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_type][crate::model::SapDiscoveryResource::resource_type].
    pub fn set_resource_type<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_type][crate::model::SapDiscoveryResource::resource_type].
    pub fn set_or_clear_resource_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.resource_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_uri][crate::model::SapDiscoveryResource::resource_uri].
    pub fn set_resource_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_uri = Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_uri][crate::model::SapDiscoveryResource::resource_uri].
    pub fn set_or_clear_resource_uri<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.resource_uri = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_time][crate::model::SapDiscoveryResource::update_time].
    pub fn set_update_time<T: Into<String>>(mut self, v: T) -> Self {
        self.update_time = Some(v.into());
        self
    }

    /// Sets or clears the value of [update_time][crate::model::SapDiscoveryResource::update_time].
    pub fn set_or_clear_update_time<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.update_time = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for SapDiscoveryResource {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.SapDiscoveryResource"
    }
}

/// A set of properties only present for an instance type resource
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SapDiscoveryResourceInstanceProperties {
    pub app_instances: Option<Vec<crate::model::SapDiscoveryResourceInstancePropertiesAppInstance>>,

    pub cluster_instances: Option<Vec<String>>,

    /// Optional. The VM's instance number.
    #[serde_as(as = "Option<apicore::internal::I64>")]
    pub instance_number: Option<i64>,

    pub instance_role: Option<String>,

    pub virtual_hostname: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SapDiscoveryResourceInstanceProperties {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [app_instances][crate::model::SapDiscoveryResourceInstanceProperties::app_instances].
    pub fn set_app_instances<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::SapDiscoveryResourceInstancePropertiesAppInstance>,
    {
        self.app_instances = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [cluster_instances][crate::model::SapDiscoveryResourceInstanceProperties::cluster_instances].
    pub fn set_cluster_instances<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.cluster_instances = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [instance_number][crate::model::SapDiscoveryResourceInstanceProperties::instance_number].
    pub fn set_instance_number<T: Into<i64>>(mut self, v: T) -> Self {
        self.instance_number = Some(v.into());
        self
    }

    /// Sets or clears the value of [instance_number][crate::model::SapDiscoveryResourceInstanceProperties::instance_number].
    pub fn set_or_clear_instance_number<T: Into<i64>>(mut self, v: Option<T>) -> Self {
        self.instance_number = v.map(|x| x.into());
        self
    }

    /// Sets the value of [instance_role][crate::model::SapDiscoveryResourceInstanceProperties::instance_role].
    pub fn set_instance_role<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_role = Some(v.into());
        self
    }

    /// Sets or clears the value of [instance_role][crate::model::SapDiscoveryResourceInstanceProperties::instance_role].
    pub fn set_or_clear_instance_role<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.instance_role = v.map(|x| x.into());
        self
    }

    /// Sets the value of [virtual_hostname][crate::model::SapDiscoveryResourceInstanceProperties::virtual_hostname].
    pub fn set_virtual_hostname<T: Into<String>>(mut self, v: T) -> Self {
        self.virtual_hostname = Some(v.into());
        self
    }

    /// Sets or clears the value of [virtual_hostname][crate::model::SapDiscoveryResourceInstanceProperties::virtual_hostname].
    pub fn set_or_clear_virtual_hostname<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.virtual_hostname = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for SapDiscoveryResourceInstanceProperties {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.SapDiscoveryResourceInstanceProperties"
    }
}

/// Fields to describe an SAP application server instance.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SapDiscoveryResourceInstancePropertiesAppInstance {
    pub name: Option<String>,

    pub number: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SapDiscoveryResourceInstancePropertiesAppInstance {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::SapDiscoveryResourceInstancePropertiesAppInstance::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::SapDiscoveryResourceInstancePropertiesAppInstance::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [number][crate::model::SapDiscoveryResourceInstancePropertiesAppInstance::number].
    pub fn set_number<T: Into<String>>(mut self, v: T) -> Self {
        self.number = Some(v.into());
        self
    }

    /// Sets or clears the value of [number][crate::model::SapDiscoveryResourceInstancePropertiesAppInstance::number].
    pub fn set_or_clear_number<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.number = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for SapDiscoveryResourceInstancePropertiesAppInstance {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.SapDiscoveryResourceInstancePropertiesAppInstance"
    }
}

/// A set of properties describing an SAP workload.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SapDiscoveryWorkloadProperties {
    pub product_versions: Option<Vec<crate::model::SapDiscoveryWorkloadPropertiesProductVersion>>,

    pub software_component_versions:
        Option<Vec<crate::model::SapDiscoveryWorkloadPropertiesSoftwareComponentProperties>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SapDiscoveryWorkloadProperties {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [product_versions][crate::model::SapDiscoveryWorkloadProperties::product_versions].
    pub fn set_product_versions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::SapDiscoveryWorkloadPropertiesProductVersion>,
    {
        self.product_versions = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [software_component_versions][crate::model::SapDiscoveryWorkloadProperties::software_component_versions].
    pub fn set_software_component_versions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::SapDiscoveryWorkloadPropertiesSoftwareComponentProperties>,
    {
        self.software_component_versions = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for SapDiscoveryWorkloadProperties {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.SapDiscoveryWorkloadProperties"
    }
}

/// A product name and version.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SapDiscoveryWorkloadPropertiesProductVersion {
    pub name: Option<String>,

    pub version: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SapDiscoveryWorkloadPropertiesProductVersion {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::SapDiscoveryWorkloadPropertiesProductVersion::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::SapDiscoveryWorkloadPropertiesProductVersion::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [version][crate::model::SapDiscoveryWorkloadPropertiesProductVersion::version].
    pub fn set_version<T: Into<String>>(mut self, v: T) -> Self {
        self.version = Some(v.into());
        self
    }

    /// Sets or clears the value of [version][crate::model::SapDiscoveryWorkloadPropertiesProductVersion::version].
    pub fn set_or_clear_version<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.version = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for SapDiscoveryWorkloadPropertiesProductVersion {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.SapDiscoveryWorkloadPropertiesProductVersion"
    }
}

/// A SAP software component name, version, and type.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SapDiscoveryWorkloadPropertiesSoftwareComponentProperties {
    pub ext_version: Option<String>,

    pub name: Option<String>,

    pub r#type: Option<String>,

    pub version: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SapDiscoveryWorkloadPropertiesSoftwareComponentProperties {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [ext_version][crate::model::SapDiscoveryWorkloadPropertiesSoftwareComponentProperties::ext_version].
    pub fn set_ext_version<T: Into<String>>(mut self, v: T) -> Self {
        self.ext_version = Some(v.into());
        self
    }

    /// Sets or clears the value of [ext_version][crate::model::SapDiscoveryWorkloadPropertiesSoftwareComponentProperties::ext_version].
    pub fn set_or_clear_ext_version<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.ext_version = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::SapDiscoveryWorkloadPropertiesSoftwareComponentProperties::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::SapDiscoveryWorkloadPropertiesSoftwareComponentProperties::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [type][crate::model::SapDiscoveryWorkloadPropertiesSoftwareComponentProperties::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets or clears the value of [type][crate::model::SapDiscoveryWorkloadPropertiesSoftwareComponentProperties::r#type].
    pub fn set_or_clear_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.r#type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [version][crate::model::SapDiscoveryWorkloadPropertiesSoftwareComponentProperties::version].
    pub fn set_version<T: Into<String>>(mut self, v: T) -> Self {
        self.version = Some(v.into());
        self
    }

    /// Sets or clears the value of [version][crate::model::SapDiscoveryWorkloadPropertiesSoftwareComponentProperties::version].
    pub fn set_or_clear_version<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.version = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for SapDiscoveryWorkloadPropertiesSoftwareComponentProperties {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.SapDiscoveryWorkloadPropertiesSoftwareComponentProperties"
    }
}

/// A presentation of SAP workload insight. The schema of SAP workloads
/// validation related data.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SapValidation {
    pub project_id: Option<String>,

    pub validation_details: Option<Vec<crate::model::SapValidationValidationDetail>>,

    pub zone: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SapValidation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_id][crate::model::SapValidation::project_id].
    pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [project_id][crate::model::SapValidation::project_id].
    pub fn set_or_clear_project_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.project_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [validation_details][crate::model::SapValidation::validation_details].
    pub fn set_validation_details<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::SapValidationValidationDetail>,
    {
        self.validation_details = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [zone][crate::model::SapValidation::zone].
    pub fn set_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.zone = Some(v.into());
        self
    }

    /// Sets or clears the value of [zone][crate::model::SapValidation::zone].
    pub fn set_or_clear_zone<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.zone = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for SapValidation {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.SapValidation"
    }
}

/// Message describing the SAP validation metrics.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SapValidationValidationDetail {
    /// Optional. The pairs of metrics data: field name & field value.
    pub details: Option<std::collections::HashMap<String, String>>,

    /// Optional. Was there a SAP system detected for this validation type.
    pub is_present: Option<bool>,

    /// Optional. The SAP system that the validation data is from.
    pub sap_validation_type: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SapValidationValidationDetail {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [details][crate::model::SapValidationValidationDetail::details].
    pub fn set_details<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.details = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [is_present][crate::model::SapValidationValidationDetail::is_present].
    pub fn set_is_present<T: Into<bool>>(mut self, v: T) -> Self {
        self.is_present = Some(v.into());
        self
    }

    /// Sets or clears the value of [is_present][crate::model::SapValidationValidationDetail::is_present].
    pub fn set_or_clear_is_present<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.is_present = v.map(|x| x.into());
        self
    }

    /// Sets the value of [sap_validation_type][crate::model::SapValidationValidationDetail::sap_validation_type].
    pub fn set_sap_validation_type<T: Into<String>>(mut self, v: T) -> Self {
        self.sap_validation_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [sap_validation_type][crate::model::SapValidationValidationDetail::sap_validation_type].
    pub fn set_or_clear_sap_validation_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.sap_validation_type = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for SapValidationValidationDetail {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.SapValidationValidationDetail"
    }
}

/// Message of scanned resource
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ScannedResource {
    /// resource name
    pub resource: Option<String>,

    /// resource type
    pub r#type: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ScannedResource {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resource][crate::model::ScannedResource::resource].
    pub fn set_resource<T: Into<String>>(mut self, v: T) -> Self {
        self.resource = Some(v.into());
        self
    }

    /// Sets or clears the value of [resource][crate::model::ScannedResource::resource].
    pub fn set_or_clear_resource<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.resource = v.map(|x| x.into());
        self
    }

    /// Sets the value of [type][crate::model::ScannedResource::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets or clears the value of [type][crate::model::ScannedResource::r#type].
    pub fn set_or_clear_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.r#type = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ScannedResource {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.ScannedResource"
    }
}

/// A ShellCommand is invoked via the agent's command line executor
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ShellCommand {
    /// args is a string of arguments to be passed to the command.
    pub args: Option<String>,

    /// command is the name of the command to be executed.
    pub command: Option<String>,

    /// Optional. If not specified, the default timeout is 60 seconds.
    pub timeout_seconds: Option<i32>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ShellCommand {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [args][crate::model::ShellCommand::args].
    pub fn set_args<T: Into<String>>(mut self, v: T) -> Self {
        self.args = Some(v.into());
        self
    }

    /// Sets or clears the value of [args][crate::model::ShellCommand::args].
    pub fn set_or_clear_args<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.args = v.map(|x| x.into());
        self
    }

    /// Sets the value of [command][crate::model::ShellCommand::command].
    pub fn set_command<T: Into<String>>(mut self, v: T) -> Self {
        self.command = Some(v.into());
        self
    }

    /// Sets or clears the value of [command][crate::model::ShellCommand::command].
    pub fn set_or_clear_command<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.command = v.map(|x| x.into());
        self
    }

    /// Sets the value of [timeout_seconds][crate::model::ShellCommand::timeout_seconds].
    pub fn set_timeout_seconds<T: Into<i32>>(mut self, v: T) -> Self {
        self.timeout_seconds = Some(v.into());
        self
    }

    /// Sets or clears the value of [timeout_seconds][crate::model::ShellCommand::timeout_seconds].
    pub fn set_or_clear_timeout_seconds<T: Into<i32>>(mut self, v: Option<T>) -> Self {
        self.timeout_seconds = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ShellCommand {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.ShellCommand"
    }
}

#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SpannerLocation {
    pub db_name: Option<Vec<String>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SpannerLocation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [db_name][crate::model::SpannerLocation::db_name].
    pub fn set_db_name<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.db_name = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for SpannerLocation {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.SpannerLocation"
    }
}

/// A presentation of SQLServer workload insight. The schema of SqlServer
/// workloads validation related data.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SqlserverValidation {
    pub agent_version: Option<String>,

    pub instance: Option<String>,

    pub project_id: Option<String>,

    pub validation_details: Option<Vec<crate::model::SqlserverValidationValidationDetail>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SqlserverValidation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [agent_version][crate::model::SqlserverValidation::agent_version].
    pub fn set_agent_version<T: Into<String>>(mut self, v: T) -> Self {
        self.agent_version = Some(v.into());
        self
    }

    /// Sets or clears the value of [agent_version][crate::model::SqlserverValidation::agent_version].
    pub fn set_or_clear_agent_version<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.agent_version = v.map(|x| x.into());
        self
    }

    /// Sets the value of [instance][crate::model::SqlserverValidation::instance].
    pub fn set_instance<T: Into<String>>(mut self, v: T) -> Self {
        self.instance = Some(v.into());
        self
    }

    /// Sets or clears the value of [instance][crate::model::SqlserverValidation::instance].
    pub fn set_or_clear_instance<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.instance = v.map(|x| x.into());
        self
    }

    /// Sets the value of [project_id][crate::model::SqlserverValidation::project_id].
    pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.project_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [project_id][crate::model::SqlserverValidation::project_id].
    pub fn set_or_clear_project_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.project_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [validation_details][crate::model::SqlserverValidation::validation_details].
    pub fn set_validation_details<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::SqlserverValidationValidationDetail>,
    {
        self.validation_details = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for SqlserverValidation {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.SqlserverValidation"
    }
}

/// Message containing collected data names and values.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SqlserverValidationDetails {
    /// Required. Collected data is in format.
    pub fields: Option<std::collections::HashMap<String, String>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SqlserverValidationDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [fields][crate::model::SqlserverValidationDetails::fields].
    pub fn set_fields<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.fields = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }
}

impl apicore::message::Message for SqlserverValidationDetails {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.SqlserverValidationDetails"
    }
}

/// Message describing the Sqlserver validation metrics.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SqlserverValidationValidationDetail {
    pub details: Option<Vec<crate::model::SqlserverValidationDetails>>,

    pub r#type: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SqlserverValidationValidationDetail {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [details][crate::model::SqlserverValidationValidationDetail::details].
    pub fn set_details<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::SqlserverValidationDetails>,
    {
        self.details = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [type][crate::model::SqlserverValidationValidationDetail::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets or clears the value of [type][crate::model::SqlserverValidationValidationDetail::r#type].
    pub fn set_or_clear_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.r#type = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for SqlserverValidationValidationDetail {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.SqlserverValidationValidationDetail"
    }
}

/// The `Status` type defines a logical error model that is suitable for
/// different programming environments, including REST APIs and RPC APIs. It is
/// used by [gRPC](https://github.com/grpc). Each `Status` message contains
/// three pieces of data: error code, error message, and error details.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Status {
    /// The status code, which should be an enum value of google.rpc.Code.
    pub code: Option<i32>,

    /// A list of messages that carry the error details. There is a common set
    /// of message types for APIs to use.
    pub details: Option<Vec<serde_json::Map<String, serde_json::Value>>>,

    /// A developer-facing error message, which should be in English. Any
    /// user-facing error message should be localized and sent in the
    /// google.rpc.Status.details field, or localized by the client.
    pub message: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Status {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [code][crate::model::Status::code].
    pub fn set_code<T: Into<i32>>(mut self, v: T) -> Self {
        self.code = Some(v.into());
        self
    }

    /// Sets or clears the value of [code][crate::model::Status::code].
    pub fn set_or_clear_code<T: Into<i32>>(mut self, v: Option<T>) -> Self {
        self.code = v.map(|x| x.into());
        self
    }

    /// Sets the value of [details][crate::model::Status::details].
    pub fn set_details<T>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = serde_json::Map<String, serde_json::Value>>,
    {
        self.details = Some(v.into_iter().collect());
        self
    }

    /// Sets the value of [message][crate::model::Status::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }

    /// Sets or clears the value of [message][crate::model::Status::message].
    pub fn set_or_clear_message<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.message = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for Status {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.Status"
    }
}

#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TenantProjectProxy {
    pub project_numbers: Option<Vec<String>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl TenantProjectProxy {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [project_numbers][crate::model::TenantProjectProxy::project_numbers].
    pub fn set_project_numbers<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.project_numbers = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for TenantProjectProxy {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.TenantProjectProxy"
    }
}

/// Message describing the violdation in execution result
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ViolationDetails {
    /// the name of asset
    pub asset: Option<String>,

    /// observed
    pub observed: Option<std::collections::HashMap<String, String>>,

    /// the service account associate with resource
    pub service_account: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ViolationDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [asset][crate::model::ViolationDetails::asset].
    pub fn set_asset<T: Into<String>>(mut self, v: T) -> Self {
        self.asset = Some(v.into());
        self
    }

    /// Sets or clears the value of [asset][crate::model::ViolationDetails::asset].
    pub fn set_or_clear_asset<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.asset = v.map(|x| x.into());
        self
    }

    /// Sets the value of [observed][crate::model::ViolationDetails::observed].
    pub fn set_observed<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.observed = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [service_account][crate::model::ViolationDetails::service_account].
    pub fn set_service_account<T: Into<String>>(mut self, v: T) -> Self {
        self.service_account = Some(v.into());
        self
    }

    /// Sets or clears the value of [service_account][crate::model::ViolationDetails::service_account].
    pub fn set_or_clear_service_account<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.service_account = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ViolationDetails {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.ViolationDetails"
    }
}

/// Request for sending the data insights.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WriteInsightRequest {
    /// Optional. The agent version collected this data point.
    pub agent_version: Option<String>,

    /// Required. The metrics data details.
    pub insight: Option<crate::model::Insight>,

    /// Optional. An optional request ID to identify requests. Specify a unique
    /// request ID so that if you must retry your request, the server will know
    /// to ignore the request if it has already been completed.
    pub request_id: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl WriteInsightRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [agent_version][crate::model::WriteInsightRequest::agent_version].
    pub fn set_agent_version<T: Into<String>>(mut self, v: T) -> Self {
        self.agent_version = Some(v.into());
        self
    }

    /// Sets or clears the value of [agent_version][crate::model::WriteInsightRequest::agent_version].
    pub fn set_or_clear_agent_version<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.agent_version = v.map(|x| x.into());
        self
    }

    /// Sets the value of [insight][crate::model::WriteInsightRequest::insight].
    pub fn set_insight<T: Into<crate::model::Insight>>(mut self, v: T) -> Self {
        self.insight = Some(v.into());
        self
    }

    /// Sets or clears the value of [insight][crate::model::WriteInsightRequest::insight].
    pub fn set_or_clear_insight<T: Into<crate::model::Insight>>(mut self, v: Option<T>) -> Self {
        self.insight = v.map(|x| x.into());
        self
    }

    /// Sets the value of [request_id][crate::model::WriteInsightRequest::request_id].
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][crate::model::WriteInsightRequest::request_id].
    pub fn set_or_clear_request_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.request_id = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for WriteInsightRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.WriteInsightRequest"
    }
}

/// The response for write insights request.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WriteInsightResponse {
    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl WriteInsightResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

impl apicore::message::Message for WriteInsightResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.WriteInsightResponse"
    }
}

#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ZoneConfiguration {
    pub zone: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ZoneConfiguration {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [zone][crate::model::ZoneConfiguration::zone].
    pub fn set_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.zone = Some(v.into());
        self
    }

    /// Sets or clears the value of [zone][crate::model::ZoneConfiguration::zone].
    pub fn set_or_clear_zone<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.zone = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ZoneConfiguration {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.workloadmanager.v1.ZoneConfiguration"
    }
}
