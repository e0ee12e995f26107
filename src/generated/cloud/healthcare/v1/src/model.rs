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

//! The messages of the Cloud Healthcare API v1.
//!
//! Resources such as [Dataset], [FhirStore], [Hl7V2Store], [DicomStore], and
//! [ConsentStore], the request and response messages of their RPCs, and the
//! [Operation] envelope returned by long-running RPCs.

#![allow(rustdoc::bare_urls)]
#![allow(rustdoc::invalid_html_tags)]
#![allow(rustdoc::broken_intra_doc_links)]

/// Activates the latest revision of the specified Consent by committing a new
/// revision with `state` updated to `ACTIVE`. If the latest revision of the
/// given Consent is in the `ACTIVE` state, no new revision is committed. A
/// FAILED_PRECONDITION error occurs if the latest revision of the given consent
/// is in the `REJECTED` or `REVOKED` state.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ActivateConsentRequest {
    /// Required. The resource name of the Consent artifact that contains
    /// documentation of the user's consent, of the form
    /// `projects/{project_id}/locations/{location_id}/datasets/{dataset_id}/consentStores/{consent_store_id}/consentArtifacts/{consent_artifact_id}`.
    /// If the draft Consent had a Consent artifact, this Consent artifact
    /// overwrites it.
    pub consent_artifact: Option<String>,

    /// Timestamp in UTC of when this Consent is considered expired.
    pub expire_time: Option<String>,

    /// The time to live for this Consent from when it is marked as active.
    pub ttl: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ActivateConsentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [consent_artifact][crate::model::ActivateConsentRequest::consent_artifact].
    pub fn set_consent_artifact<T: Into<String>>(mut self, v: T) -> Self {
        self.consent_artifact = Some(v.into());
        self
    }

    /// Sets or clears the value of [consent_artifact][crate::model::ActivateConsentRequest::consent_artifact].
    pub fn set_or_clear_consent_artifact<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.consent_artifact = v.map(|x| x.into());
        self
    }

    /// Sets the value of [expire_time][crate::model::ActivateConsentRequest::expire_time].
    pub fn set_expire_time<T: Into<String>>(mut self, v: T) -> Self {
        self.expire_time = Some(v.into());
        self
    }

    /// Sets or clears the value of [expire_time][crate::model::ActivateConsentRequest::expire_time].
    pub fn set_or_clear_expire_time<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.expire_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ttl][crate::model::ActivateConsentRequest::ttl].
    pub fn set_ttl<T: Into<String>>(mut self, v: T) -> Self {
        self.ttl = Some(v.into());
        self
    }

    /// Sets or clears the value of [ttl][crate::model::ActivateConsentRequest::ttl].
    pub fn set_or_clear_ttl<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.ttl = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ActivateConsentRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ActivateConsentRequest"
    }
}

/// The request to analyze healthcare entities in a document.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AnalyzeEntitiesRequest {
    /// Optional. Alternative output format to be generated based on the results
    /// of analysis.
    pub alternative_output_format: Option<String>,

    /// document_content is a document to be annotated.
    pub document_content: Option<String>,

    /// A list of licensed vocabularies to use in the request, in addition to
    /// the default unlicensed vocabularies.
    pub licensed_vocabularies: Option<Vec<String>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl AnalyzeEntitiesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [alternative_output_format][crate::model::AnalyzeEntitiesRequest::alternative_output_format].
    pub fn set_alternative_output_format<T: Into<String>>(mut self, v: T) -> Self {
        self.alternative_output_format = Some(v.into());
        self
    }

    /// Sets or clears the value of [alternative_output_format][crate::model::AnalyzeEntitiesRequest::alternative_output_format].
    pub fn set_or_clear_alternative_output_format<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.alternative_output_format = v.map(|x| x.into());
        self
    }

    /// Sets the value of [document_content][crate::model::AnalyzeEntitiesRequest::document_content].
    pub fn set_document_content<T: Into<String>>(mut self, v: T) -> Self {
        self.document_content = Some(v.into());
        self
    }

    /// Sets or clears the value of [document_content][crate::model::AnalyzeEntitiesRequest::document_content].
    pub fn set_or_clear_document_content<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.document_content = v.map(|x| x.into());
        self
    }

    /// Sets the value of [licensed_vocabularies][crate::model::AnalyzeEntitiesRequest::licensed_vocabularies].
    pub fn set_licensed_vocabularies<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.licensed_vocabularies = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for AnalyzeEntitiesRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.AnalyzeEntitiesRequest"
    }
}

/// Includes recognized entity mentions and relationships between them.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AnalyzeEntitiesResponse {
    /// The union of all the candidate entities that the entity_mentions in this
    /// response could link to. These are UMLS concepts or normalized mention
    /// content.
    pub entities: Option<Vec<crate::model::Entity>>,

    /// The `entity_mentions` field contains all the annotated medical entities
    /// that were mentioned in the provided document.
    pub entity_mentions: Option<Vec<crate::model::EntityMention>>,

    /// The FHIR bundle ([`R4`](http://hl7.org/fhir/R4/bundle.html)) that
    /// includes all the entities, the entity mentions, and the relationships in
    /// JSON format.
    pub fhir_bundle: Option<String>,

    /// relationships contains all the binary relationships that were identified
    /// between entity mentions within the provided document.
    pub relationships: Option<Vec<crate::model::EntityMentionRelationship>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl AnalyzeEntitiesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [entities][crate::model::AnalyzeEntitiesResponse::entities].
    pub fn set_entities<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Entity>,
    {
        self.entities = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [entity_mentions][crate::model::AnalyzeEntitiesResponse::entity_mentions].
    pub fn set_entity_mentions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::EntityMention>,
    {
        self.entity_mentions = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [fhir_bundle][crate::model::AnalyzeEntitiesResponse::fhir_bundle].
    pub fn set_fhir_bundle<T: Into<String>>(mut self, v: T) -> Self {
        self.fhir_bundle = Some(v.into());
        self
    }

    /// Sets or clears the value of [fhir_bundle][crate::model::AnalyzeEntitiesResponse::fhir_bundle].
    pub fn set_or_clear_fhir_bundle<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.fhir_bundle = v.map(|x| x.into());
        self
    }

    /// Sets the value of [relationships][crate::model::AnalyzeEntitiesResponse::relationships].
    pub fn set_relationships<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::EntityMentionRelationship>,
    {
        self.relationships = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for AnalyzeEntitiesResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.AnalyzeEntitiesResponse"
    }
}

/// Archives the specified User data mapping.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ArchiveUserDataMappingRequest {
    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ArchiveUserDataMappingRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

impl apicore::message::Message for ArchiveUserDataMappingRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ArchiveUserDataMappingRequest"
    }
}

/// Archives the specified User data mapping.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ArchiveUserDataMappingResponse {
    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ArchiveUserDataMappingResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

impl apicore::message::Message for ArchiveUserDataMappingResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ArchiveUserDataMappingResponse"
    }
}

/// An attribute value for a Consent or User data mapping. Each Attribute must
/// have a corresponding AttributeDefinition in the consent store that defines
/// the default and allowed values.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Attribute {
    /// Indicates the name of an attribute defined in the consent store.
    pub attribute_definition_id: Option<String>,

    /// Required. The value of the attribute. Must be an acceptable value as
    /// defined in the consent store. For example, if the consent store defines
    /// "data type" with acceptable values "questionnaire" and "step-count",
    /// when the attribute name is data type, this field must contain one of
    /// those values.
    pub values: Option<Vec<String>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Attribute {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [attribute_definition_id][crate::model::Attribute::attribute_definition_id].
    pub fn set_attribute_definition_id<T: Into<String>>(mut self, v: T) -> Self {
        self.attribute_definition_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [attribute_definition_id][crate::model::Attribute::attribute_definition_id].
    pub fn set_or_clear_attribute_definition_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.attribute_definition_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [values][crate::model::Attribute::values].
    pub fn set_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.values = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for Attribute {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.Attribute"
    }
}

/// A client-defined consent attribute.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AttributeDefinition {
    /// Required. Possible values for the attribute. The number of allowed
    /// values must not exceed 500. An empty list is invalid. The list can only
    /// be expanded after creation.
    pub allowed_values: Option<Vec<String>>,

    /// Required. The category of the attribute. The value of this field cannot
    /// be changed after creation.
    pub category: Option<String>,

    /// Optional. Default values of the attribute in Consents. If no default
    /// values are specified, it defaults to an empty value.
    pub consent_default_values: Option<Vec<String>>,

    /// Optional. Default value of the attribute in User data mappings. If no
    /// default value is specified, it defaults to an empty value. This field is
    /// only applicable to attributes of the category `RESOURCE`.
    pub data_mapping_default_value: Option<String>,

    /// Optional. A description of the attribute.
    pub description: Option<String>,

    /// Resource name of the Attribute definition, of the form
    /// `projects/{project_id}/locations/{location_id}/datasets/{dataset_id}/consentStores/{consent_store_id}/attributeDefinitions/{attribute_definition_id}`.
    /// Cannot be changed after creation.
    pub name: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl AttributeDefinition {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [allowed_values][crate::model::AttributeDefinition::allowed_values].
    pub fn set_allowed_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.allowed_values = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [category][crate::model::AttributeDefinition::category].
    pub fn set_category<T: Into<String>>(mut self, v: T) -> Self {
        self.category = Some(v.into());
        self
    }

    /// Sets or clears the value of [category][crate::model::AttributeDefinition::category].
    pub fn set_or_clear_category<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.category = v.map(|x| x.into());
        self
    }

    /// Sets the value of [consent_default_values][crate::model::AttributeDefinition::consent_default_values].
    pub fn set_consent_default_values<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.consent_default_values = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [data_mapping_default_value][crate::model::AttributeDefinition::data_mapping_default_value].
    pub fn set_data_mapping_default_value<T: Into<String>>(mut self, v: T) -> Self {
        self.data_mapping_default_value = Some(v.into());
        self
    }

    /// Sets or clears the value of [data_mapping_default_value][crate::model::AttributeDefinition::data_mapping_default_value].
    pub fn set_or_clear_data_mapping_default_value<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<String>,
    {
        self.data_mapping_default_value = v.map(|x| x.into());
        self
    }

    /// Sets the value of [description][crate::model::AttributeDefinition::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::AttributeDefinition::description].
    pub fn set_or_clear_description<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::AttributeDefinition::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::AttributeDefinition::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for AttributeDefinition {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.AttributeDefinition"
    }
}

/// Specifies the audit configuration for a service. The configuration
/// determines which permission types are logged, and what identities, if any,
/// are exempted from logging. An AuditConfig must have one or more
/// AuditLogConfigs. If there are AuditConfigs for both `allServices` and a
/// specific service, the union of the two AuditConfigs is used for that
/// service: the log_types specified in each AuditConfig are enabled, and the
/// exempted_members in each AuditLogConfig are exempted. Example Policy with
/// multiple AuditConfigs: ` "audit_configs": [ ` " service": "allServices",
/// "audit_log_configs": [ ` "log_type": "DATA_READ", " exempted_members": [
/// "user:jose@example.com" ] `, ` "log_type": "DATA_WRITE" `, ` "log_type":
/// "ADMIN_READ" ` ] `, ` "service": "sampleservice.googleapis.com",
/// "audit_log_configs": [ ` "log_type": "DATA_READ" `, ` "log_type":
/// "DATA_WRITE" , "exempted_members": [ "user:aliya@example.com" ] ` ] ` ] `
/// For sampleservice, this policy enables DATA_READ, DATA_WRITE and ADMIN_READ
/// logging. It also exempts `jose@example.com` from DATA_READ logging, and
/// `aliya@example.com` from DATA_WRITE logging.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AuditConfig {
    /// The configuration for logging of each type of permission.
    pub audit_log_configs: Option<Vec<crate::model::AuditLogConfig>>,

    /// Specifies a service that will be enabled for audit logging. For example,
    /// ` storage.googleapis.com`, `cloudsql.googleapis.com`. `allServices` is a
    /// special value that covers all services.
    pub service: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl AuditConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [audit_log_configs][crate::model::AuditConfig::audit_log_configs].
    pub fn set_audit_log_configs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::AuditLogConfig>,
    {
        self.audit_log_configs = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [service][crate::model::AuditConfig::service].
    pub fn set_service<T: Into<String>>(mut self, v: T) -> Self {
        self.service = Some(v.into());
        self
    }

    /// Sets or clears the value of [service][crate::model::AuditConfig::service].
    pub fn set_or_clear_service<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.service = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for AuditConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.AuditConfig"
    }
}

/// Provides the configuration for logging a type of permissions. Example: ` "
/// audit_log_configs": [ ` "log_type": "DATA_READ", "exempted_members": [
/// "user: jose@example.com" ] `, ` "log_type": "DATA_WRITE" ` ] ` This enables
/// ' DATA_READ' and 'DATA_WRITE' logging, while exempting jose@example.com from
/// DATA_READ logging.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AuditLogConfig {
    /// Specifies the identities that do not cause logging for this type of
    /// permission. Follows the same format of Binding.members.
    pub exempted_members: Option<Vec<String>>,

    /// The log type that this config enables.
    pub log_type: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl AuditLogConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [exempted_members][crate::model::AuditLogConfig::exempted_members].
    pub fn set_exempted_members<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.exempted_members = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [log_type][crate::model::AuditLogConfig::log_type].
    pub fn set_log_type<T: Into<String>>(mut self, v: T) -> Self {
        self.log_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [log_type][crate::model::AuditLogConfig::log_type].
    pub fn set_or_clear_log_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.log_type = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for AuditLogConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.AuditLogConfig"
    }
}

/// Associates `members`, or principals, with a `role`.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Binding {
    /// Represents a textual expression in the Common Expression Language (CEL)
    /// syntax. CEL is a C-like expression language. The syntax and semantics of
    /// CEL are documented at https://github.com/google/cel-spec. Example
    /// (Comparison): title: "Summary size limit" description: "Determines if a
    /// summary is less than 100 chars" expression: "document.summary.size() <
    /// 100" Example (Equality): title: " Requestor is owner" description:
    /// "Determines if requestor is the document owner" expression:
    /// "document.owner == request.auth.claims.email" Example ( Logic): title:
    /// "Public documents" description: "Determine whether the document should
    /// be publicly visible" expression: "document.type != 'private' &&
    /// document.type != 'internal'" Example (Data Manipulation): title:
    /// "Notification string" description: "Create a notification string with a
    /// timestamp." expression: "'New message received at ' +
    /// string(document.create_time)" The exact variables and functions that may
    /// be referenced within an expression are determined by the service that
    /// evaluates it. See the service documentation for additional information.
    pub condition: Option<crate::model::Expr>,

    /// Specifies the principals requesting access for a Google Cloud resource.
    /// ` members` can have the following values: * `allUsers`: A special
    /// identifier that represents anyone who is on the internet; with or
    /// without a Google account. * `allAuthenticatedUsers`: A special
    /// identifier that represents anyone who is authenticated with a Google
    /// account or a service account. Does not include identities that come from
    /// external identity providers (IdPs) through identity federation. *
    /// `user:`emailid``: An email address that represents a specific Google
    /// account. For example, `alice@example.com` . * `
    /// serviceAccount:`emailid``: An email address that represents a Google
    /// service account. For example,
    /// `my-other-app@appspot.gserviceaccount.com`. * `
    /// serviceAccount:`projectid`.svc.id.goog[`namespace`/{kubernetes-sa}]`: An
    /// identifier for a [Kubernetes service
    /// account](https://cloud.google.com/kubernetes-engine/docs/how-to/kubernetes-service-accounts).
    /// For example, `my-project.svc.id.goog[my-namespace/my-kubernetes-sa]`. *
    /// `group:`emailid``: An email address that represents a Google group. For
    /// example, `admins@example.com` . * `domain:`domain``: The G Suite domain
    /// (primary) that represents all the users of that domain. For example,
    /// `google.com` or `example.com`. * `deleted:
    /// user:`emailid`?uid=`uniqueid``: An email address (plus unique
    /// identifier) representing a user that has been recently deleted. For
    /// example, `alice@example.com?uid=123456789012345678901`. If the user is
    /// recovered, this value reverts to `user:`emailid`` and the recovered user
    /// retains the role in the binding. *
    /// `deleted:serviceAccount:`emailid`?uid=`uniqueid``: An email address
    /// (plus unique identifier) representing a service account that has been
    /// recently deleted. For example,
    /// `my-other-app@appspot.gserviceaccount.com?uid= 123456789012345678901`.
    /// If the service account is undeleted, this value reverts to
    /// `serviceAccount:`emailid`` and the undeleted service account retains the
    /// role in the binding. * `deleted:group:`emailid`?uid=`uniqueid``: An
    /// email address (plus unique identifier) representing a Google group that
    /// has been recently deleted. For example, `admins@example.com?uid=
    /// 123456789012345678901`. If the group is recovered, this value reverts to
    /// ` group:`emailid`` and the recovered group retains the role in the
    /// binding.
    pub members: Option<Vec<String>>,

    /// Role that is assigned to the list of `members`, or principals. For
    /// example, ` roles/viewer`, `roles/editor`, or `roles/owner`.
    pub role: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Binding {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [condition][crate::model::Binding::condition].
    pub fn set_condition<T: Into<crate::model::Expr>>(mut self, v: T) -> Self {
        self.condition = Some(v.into());
        self
    }

    /// Sets or clears the value of [condition][crate::model::Binding::condition].
    pub fn set_or_clear_condition<T: Into<crate::model::Expr>>(mut self, v: Option<T>) -> Self {
        self.condition = v.map(|x| x.into());
        self
    }

    /// Sets the value of [members][crate::model::Binding::members].
    pub fn set_members<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.members = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [role][crate::model::Binding::role].
    pub fn set_role<T: Into<String>>(mut self, v: T) -> Self {
        self.role = Some(v.into());
        self
    }

    /// Sets or clears the value of [role][crate::model::Binding::role].
    pub fn set_or_clear_role<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.role = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for Binding {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.Binding"
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
        "type.googleapis.com/google.cloud.healthcare.v1.CancelOperationRequest"
    }
}

/// Mask a string by replacing its characters with a fixed character.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CharacterMaskConfig {
    /// Character to mask the sensitive values. If not supplied, defaults to
    /// "*".
    pub masking_character: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl CharacterMaskConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [masking_character][crate::model::CharacterMaskConfig::masking_character].
    pub fn set_masking_character<T: Into<String>>(mut self, v: T) -> Self {
        self.masking_character = Some(v.into());
        self
    }

    /// Sets or clears the value of [masking_character][crate::model::CharacterMaskConfig::masking_character].
    pub fn set_or_clear_masking_character<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.masking_character = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for CharacterMaskConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.CharacterMaskConfig"
    }
}

/// Checks if a particular data_id of a User data mapping in the given consent
/// store is consented for a given use.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CheckDataAccessRequest {
    /// List of resource names of Consent resources.
    pub consent_list: Option<crate::model::ConsentList>,

    /// Required. The unique identifier of the resource to check access for.
    /// This identifier must correspond to a User data mapping in the given
    /// consent store.
    pub data_id: Option<String>,

    /// The values of request attributes associated with this access request.
    pub request_attributes: Option<std::collections::HashMap<String, String>>,

    /// Optional. The view for CheckDataAccessResponse. If unspecified, defaults
    /// to ` BASIC` and returns `consented` as `TRUE` or `FALSE`.
    pub response_view: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl CheckDataAccessRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [consent_list][crate::model::CheckDataAccessRequest::consent_list].
    pub fn set_consent_list<T: Into<crate::model::ConsentList>>(mut self, v: T) -> Self {
        self.consent_list = Some(v.into());
        self
    }

    /// Sets or clears the value of [consent_list][crate::model::CheckDataAccessRequest::consent_list].
    pub fn set_or_clear_consent_list<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::ConsentList>,
    {
        self.consent_list = v.map(|x| x.into());
        self
    }

    /// Sets the value of [data_id][crate::model::CheckDataAccessRequest::data_id].
    pub fn set_data_id<T: Into<String>>(mut self, v: T) -> Self {
        self.data_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [data_id][crate::model::CheckDataAccessRequest::data_id].
    pub fn set_or_clear_data_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.data_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [request_attributes][crate::model::CheckDataAccessRequest::request_attributes].
    pub fn set_request_attributes<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.request_attributes = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [response_view][crate::model::CheckDataAccessRequest::response_view].
    pub fn set_response_view<T: Into<String>>(mut self, v: T) -> Self {
        self.response_view = Some(v.into());
        self
    }

    /// Sets or clears the value of [response_view][crate::model::CheckDataAccessRequest::response_view].
    pub fn set_or_clear_response_view<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.response_view = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for CheckDataAccessRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.CheckDataAccessRequest"
    }
}

/// Checks if a particular data_id of a User data mapping in the given consent
/// store is consented for a given use.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CheckDataAccessResponse {
    /// The resource names of all evaluated Consents mapped to their evaluation.
    pub consent_details: Option<std::collections::HashMap<String, crate::model::ConsentEvaluation>>,

    /// Whether the requested resource is consented for the given use.
    pub consented: Option<bool>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl CheckDataAccessResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [consent_details][crate::model::CheckDataAccessResponse::consent_details].
    pub fn set_consent_details<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<crate::model::ConsentEvaluation>,
    {
        self.consent_details = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [consented][crate::model::CheckDataAccessResponse::consented].
    pub fn set_consented<T: Into<bool>>(mut self, v: T) -> Self {
        self.consented = Some(v.into());
        self
    }

    /// Sets or clears the value of [consented][crate::model::CheckDataAccessResponse::consented].
    pub fn set_or_clear_consented<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.consented = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for CheckDataAccessResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.CheckDataAccessResponse"
    }
}

/// Represents a user's consent.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Consent {
    /// Required. The resource name of the Consent artifact that contains proof
    /// of the end user's consent, of the form
    /// `projects/{project_id}/locations/{location_id}/datasets/{dataset_id}/consentStores/{consent_store_id}/consentArtifacts/`
    /// consent_artifact_id``.
    pub consent_artifact: Option<String>,

    /// Timestamp in UTC of when this Consent is considered expired.
    pub expire_time: Option<String>,

    /// Optional. User-supplied key-value pairs used to organize Consent
    /// resources. Metadata keys must: - be between 1 and 63 characters long -
    /// have a UTF-8 encoding of maximum 128 bytes - begin with a letter -
    /// consist of up to 63 characters including lowercase letters, numeric
    /// characters, underscores, and dashes Metadata values must be: - be
    /// between 1 and 63 characters long - have a UTF-8 encoding of maximum 128
    /// bytes - consist of up to 63 characters including lowercase letters,
    /// numeric characters, underscores, and dashes No more than 64 metadata
    /// entries can be associated with a given consent.
    pub metadata: Option<std::collections::HashMap<String, String>>,

    /// Resource name of the Consent, of the form
    /// `projects/{project_id}/locations/`
    /// location_id`/datasets/{dataset_id}/consentStores/{consent_store_id}/consents/`
    /// consent_id``. Cannot be changed after creation.
    pub name: Option<String>,

    /// Optional. Represents a user's consent in terms of the resources that can
    /// be accessed and under what conditions.
    pub policies: Option<Vec<crate::model::GoogleCloudHealthcareV1ConsentPolicy>>,

    /// Output only. The timestamp that the revision was created.
    pub revision_create_time: Option<String>,

    /// Output only. The revision ID of the Consent. The format is an
    /// 8-character hexadecimal string. Refer to a specific revision of a
    /// Consent by appending `@` revision_id`` to the Consent's resource name.
    pub revision_id: Option<String>,

    /// Required. Indicates the current state of this Consent.
    pub state: Option<String>,

    /// Input only. The time to live for this Consent from when it is created.
    pub ttl: Option<String>,

    /// Required. User's UUID provided by the client.
    pub user_id: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Consent {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [consent_artifact][crate::model::Consent::consent_artifact].
    pub fn set_consent_artifact<T: Into<String>>(mut self, v: T) -> Self {
        self.consent_artifact = Some(v.into());
        self
    }

    /// Sets or clears the value of [consent_artifact][crate::model::Consent::consent_artifact].
    pub fn set_or_clear_consent_artifact<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.consent_artifact = v.map(|x| x.into());
        self
    }

    /// Sets the value of [expire_time][crate::model::Consent::expire_time].
    pub fn set_expire_time<T: Into<String>>(mut self, v: T) -> Self {
        self.expire_time = Some(v.into());
        self
    }

    /// Sets or clears the value of [expire_time][crate::model::Consent::expire_time].
    pub fn set_or_clear_expire_time<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.expire_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [metadata][crate::model::Consent::metadata].
    pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [name][crate::model::Consent::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::Consent::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [policies][crate::model::Consent::policies].
    pub fn set_policies<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::GoogleCloudHealthcareV1ConsentPolicy>,
    {
        self.policies = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [revision_create_time][crate::model::Consent::revision_create_time].
    pub fn set_revision_create_time<T: Into<String>>(mut self, v: T) -> Self {
        self.revision_create_time = Some(v.into());
        self
    }

    /// Sets or clears the value of [revision_create_time][crate::model::Consent::revision_create_time].
    pub fn set_or_clear_revision_create_time<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.revision_create_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [revision_id][crate::model::Consent::revision_id].
    pub fn set_revision_id<T: Into<String>>(mut self, v: T) -> Self {
        self.revision_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [revision_id][crate::model::Consent::revision_id].
    pub fn set_or_clear_revision_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.revision_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [state][crate::model::Consent::state].
    pub fn set_state<T: Into<String>>(mut self, v: T) -> Self {
        self.state = Some(v.into());
        self
    }

    /// Sets or clears the value of [state][crate::model::Consent::state].
    pub fn set_or_clear_state<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.state = v.map(|x| x.into());
        self
    }

    /// Sets the value of [ttl][crate::model::Consent::ttl].
    pub fn set_ttl<T: Into<String>>(mut self, v: T) -> Self {
        self.ttl = Some(v.into());
        self
    }

    /// Sets or clears the value of [ttl][crate::model::Consent::ttl].
    pub fn set_or_clear_ttl<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.ttl = v.map(|x| x.into());
        self
    }

    /// Sets the value of [user_id][crate::model::Consent::user_id].
    pub fn set_user_id<T: Into<String>>(mut self, v: T) -> Self {
        self.user_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [user_id][crate::model::Consent::user_id].
    pub fn set_or_clear_user_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.user_id = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for Consent {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.Consent"
    }
}

/// Documentation of a user's consent.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ConsentArtifact {
    /// Optional. Screenshots, PDFs, or other binary information documenting the
    /// user' s consent.
    pub consent_content_screenshots: Option<Vec<crate::model::Image>>,

    /// Optional. An string indicating the version of the consent information
    /// shown to the user.
    pub consent_content_version: Option<String>,

    /// User signature.
    pub guardian_signature: Option<crate::model::Signature>,

    /// Optional. Metadata associated with the Consent artifact. For example,
    /// the consent locale or user agent version.
    pub metadata: Option<std::collections::HashMap<String, String>>,

    /// Resource name of the Consent artifact, of the form
    /// `projects/{project_id}/locations/{location_id}/datasets/{dataset_id}/consentStores/{consent_store_id}/consentArtifacts/{consent_artifact_id}`.
    /// Cannot be changed after creation.
    pub name: Option<String>,

    /// Required. User's UUID provided by the client.
    pub user_id: Option<String>,

    /// User signature.
    pub user_signature: Option<crate::model::Signature>,

    /// User signature.
    pub witness_signature: Option<crate::model::Signature>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ConsentArtifact {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [consent_content_screenshots][crate::model::ConsentArtifact::consent_content_screenshots].
    pub fn set_consent_content_screenshots<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Image>,
    {
        self.consent_content_screenshots = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [consent_content_version][crate::model::ConsentArtifact::consent_content_version].
    pub fn set_consent_content_version<T: Into<String>>(mut self, v: T) -> Self {
        self.consent_content_version = Some(v.into());
        self
    }

    /// Sets or clears the value of [consent_content_version][crate::model::ConsentArtifact::consent_content_version].
    pub fn set_or_clear_consent_content_version<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.consent_content_version = v.map(|x| x.into());
        self
    }

    /// Sets the value of [guardian_signature][crate::model::ConsentArtifact::guardian_signature].
    pub fn set_guardian_signature<T: Into<crate::model::Signature>>(mut self, v: T) -> Self {
        self.guardian_signature = Some(v.into());
        self
    }

    /// Sets or clears the value of [guardian_signature][crate::model::ConsentArtifact::guardian_signature].
    pub fn set_or_clear_guardian_signature<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::Signature>,
    {
        self.guardian_signature = v.map(|x| x.into());
        self
    }

    /// Sets the value of [metadata][crate::model::ConsentArtifact::metadata].
    pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [name][crate::model::ConsentArtifact::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::ConsentArtifact::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [user_id][crate::model::ConsentArtifact::user_id].
    pub fn set_user_id<T: Into<String>>(mut self, v: T) -> Self {
        self.user_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [user_id][crate::model::ConsentArtifact::user_id].
    pub fn set_or_clear_user_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.user_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [user_signature][crate::model::ConsentArtifact::user_signature].
    pub fn set_user_signature<T: Into<crate::model::Signature>>(mut self, v: T) -> Self {
        self.user_signature = Some(v.into());
        self
    }

    /// Sets or clears the value of [user_signature][crate::model::ConsentArtifact::user_signature].
    pub fn set_or_clear_user_signature<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::Signature>,
    {
        self.user_signature = v.map(|x| x.into());
        self
    }

    /// Sets the value of [witness_signature][crate::model::ConsentArtifact::witness_signature].
    pub fn set_witness_signature<T: Into<crate::model::Signature>>(mut self, v: T) -> Self {
        self.witness_signature = Some(v.into());
        self
    }

    /// Sets or clears the value of [witness_signature][crate::model::ConsentArtifact::witness_signature].
    pub fn set_or_clear_witness_signature<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::Signature>,
    {
        self.witness_signature = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ConsentArtifact {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ConsentArtifact"
    }
}

/// The detailed evaluation of a particular Consent.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ConsentEvaluation {
    /// The evaluation result.
    pub evaluation_result: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ConsentEvaluation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [evaluation_result][crate::model::ConsentEvaluation::evaluation_result].
    pub fn set_evaluation_result<T: Into<String>>(mut self, v: T) -> Self {
        self.evaluation_result = Some(v.into());
        self
    }

    /// Sets or clears the value of [evaluation_result][crate::model::ConsentEvaluation::evaluation_result].
    pub fn set_or_clear_evaluation_result<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.evaluation_result = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ConsentEvaluation {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ConsentEvaluation"
    }
}

/// List of resource names of Consent resources.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ConsentList {
    /// The resource names of the Consents to evaluate against, of the form
    /// `projects/`
    /// project_id`/locations/{location_id}/datasets/{dataset_id}/consentStores/`
    /// consent_store_id`/consents/{consent_id}`.
    pub consents: Option<Vec<String>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ConsentList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [consents][crate::model::ConsentList::consents].
    pub fn set_consents<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.consents = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for ConsentList {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ConsentList"
    }
}

/// Represents a consent store.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ConsentStore {
    /// Optional. Default time to live for Consents created in this store. Must
    /// be at least 24 hours. Updating this field will not affect the expiration
    /// time of existing consents.
    pub default_consent_ttl: Option<String>,

    /// Optional. If `true`, UpdateConsent creates the Consent if it does not
    /// already exist. If unspecified, defaults to `false`.
    pub enable_consent_create_on_update: Option<bool>,

    /// Optional. User-supplied key-value pairs used to organize consent stores.
    /// Label keys must be between 1 and 63 characters long, have a UTF-8
    /// encoding of maximum 128 bytes, and must conform to the following PCRE
    /// regular expression: \ p`Ll`\p`Lo``0,62`. Label values must be between 1
    /// and 63 characters long, have a UTF-8 encoding of maximum 128 bytes, and
    /// must conform to the following PCRE regular expression:
    /// [\p`Ll`\p`Lo`\p`N`_-]`0,63`. No more than 64 labels can be associated
    /// with a given store. For more information:
    /// https://cloud.google.com/healthcare/docs/how-tos/labeling-resources
    pub labels: Option<std::collections::HashMap<String, String>>,

    /// Resource name of the consent store, of the form
    /// `projects/{project_id}/locations/{location_id}/datasets/{dataset_id}/consentStores/{consent_store_id}`
    /// . Cannot be changed after creation.
    pub name: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ConsentStore {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [default_consent_ttl][crate::model::ConsentStore::default_consent_ttl].
    pub fn set_default_consent_ttl<T: Into<String>>(mut self, v: T) -> Self {
        self.default_consent_ttl = Some(v.into());
        self
    }

    /// Sets or clears the value of [default_consent_ttl][crate::model::ConsentStore::default_consent_ttl].
    pub fn set_or_clear_default_consent_ttl<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.default_consent_ttl = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enable_consent_create_on_update][crate::model::ConsentStore::enable_consent_create_on_update].
    pub fn set_enable_consent_create_on_update<T: Into<bool>>(mut self, v: T) -> Self {
        self.enable_consent_create_on_update = Some(v.into());
        self
    }

    /// Sets or clears the value of [enable_consent_create_on_update][crate::model::ConsentStore::enable_consent_create_on_update].
    pub fn set_or_clear_enable_consent_create_on_update<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<bool>,
    {
        self.enable_consent_create_on_update = v.map(|x| x.into());
        self
    }

    /// Sets the value of [labels][crate::model::ConsentStore::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [name][crate::model::ConsentStore::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::ConsentStore::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ConsentStore {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ConsentStore"
    }
}

/// Creates a new message.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateMessageRequest {
    /// A complete HL7v2 message. See [Introduction to HL7 Standards]
    /// (https://www.hl7.org/implement/standards/index.cfm?ref=common) for
    /// details on the standard.
    pub message: Option<crate::model::Message>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl CreateMessageRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [message][crate::model::CreateMessageRequest::message].
    pub fn set_message<T: Into<crate::model::Message>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }

    /// Sets or clears the value of [message][crate::model::CreateMessageRequest::message].
    pub fn set_or_clear_message<T: Into<crate::model::Message>>(mut self, v: Option<T>) -> Self {
        self.message = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for CreateMessageRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.CreateMessageRequest"
    }
}

/// Pseudonymization method that generates surrogates via cryptographic hashing.
/// Uses SHA-256. Outputs a base64-encoded representation of the hashed output (
/// for example, `L7k0BHmF1ha5U3NfGykjro4xWi1MPVQPjhMAZbSV9mM=`).
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CryptoHashConfig {
    /// An AES 128/192/256 bit key. Causes the hash to be computed based on this
    /// key. A default key is generated for each Deidentify operation and is
    /// used when neither `crypto_key` nor `kms_wrapped` is specified. Must not
    /// be set if ` kms_wrapped` is set.
    #[serde_as(as = "Option<serde_with::base64::Base64>")]
    pub crypto_key: Option<bytes::Bytes>,

    /// Include to use an existing data crypto key wrapped by KMS. The wrapped
    /// key must be a 128-, 192-, or 256-bit key. The key must grant the Cloud
    /// IAM permission `cloudkms.cryptoKeyVersions.useToDecrypt` to the
    /// project's Cloud Healthcare Service Agent service account. For more
    /// information, see [Creating a wrapped key]
    /// (https://cloud.google.com/dlp/docs/create-wrapped-key).
    pub kms_wrapped: Option<crate::model::KmsWrappedCryptoKey>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl CryptoHashConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crypto_key][crate::model::CryptoHashConfig::crypto_key].
    pub fn set_crypto_key<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.crypto_key = Some(v.into());
        self
    }

    /// Sets or clears the value of [crypto_key][crate::model::CryptoHashConfig::crypto_key].
    pub fn set_or_clear_crypto_key<T: Into<bytes::Bytes>>(mut self, v: Option<T>) -> Self {
        self.crypto_key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_wrapped][crate::model::CryptoHashConfig::kms_wrapped].
    pub fn set_kms_wrapped<T: Into<crate::model::KmsWrappedCryptoKey>>(mut self, v: T) -> Self {
        self.kms_wrapped = Some(v.into());
        self
    }

    /// Sets or clears the value of [kms_wrapped][crate::model::CryptoHashConfig::kms_wrapped].
    pub fn set_or_clear_kms_wrapped<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::KmsWrappedCryptoKey>,
    {
        self.kms_wrapped = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for CryptoHashConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.CryptoHashConfig"
    }
}

/// A message representing a health dataset. A health dataset represents a
/// collection of healthcare data pertaining to one or more patients. This may
/// include multiple modalities of healthcare data, such as electronic medical
/// records or medical imaging data.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Dataset {
    /// Resource name of the dataset, of the form
    /// `projects/{project_id}/locations/` location_id`/datasets/{dataset_id}`.
    pub name: Option<String>,

    /// The default timezone used by this dataset. Must be a either a valid IANA
    /// time zone name such as "America/New_York" or empty, which defaults to
    /// UTC. This is used for parsing times in resources, such as HL7 messages,
    /// where no explicit timezone is specified.
    pub time_zone: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Dataset {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][crate::model::Dataset::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::Dataset::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [time_zone][crate::model::Dataset::time_zone].
    pub fn set_time_zone<T: Into<String>>(mut self, v: T) -> Self {
        self.time_zone = Some(v.into());
        self
    }

    /// Sets or clears the value of [time_zone][crate::model::Dataset::time_zone].
    pub fn set_or_clear_time_zone<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.time_zone = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for Dataset {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.Dataset"
    }
}

/// Shift a date forward or backward in time by a random amount which is
/// consistent for a given patient and crypto key combination.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DateShiftConfig {
    /// An AES 128/192/256 bit key. The date shift is computed based on this key
    /// and the patient ID. If the patient ID is empty for a DICOM resource, the
    /// date shift is computed based on this key and the study instance UID. If
    /// `crypto_key` is not set, then `kms_wrapped` is used to calculate the
    /// date shift. If neither is set, a default key is generated for each
    /// de-identify operation. Must not be set if `kms_wrapped` is set.
    #[serde_as(as = "Option<serde_with::base64::Base64>")]
    pub crypto_key: Option<bytes::Bytes>,

    /// Include to use an existing data crypto key wrapped by KMS. The wrapped
    /// key must be a 128-, 192-, or 256-bit key. The key must grant the Cloud
    /// IAM permission `cloudkms.cryptoKeyVersions.useToDecrypt` to the
    /// project's Cloud Healthcare Service Agent service account. For more
    /// information, see [Creating a wrapped key]
    /// (https://cloud.google.com/dlp/docs/create-wrapped-key).
    pub kms_wrapped: Option<crate::model::KmsWrappedCryptoKey>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DateShiftConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crypto_key][crate::model::DateShiftConfig::crypto_key].
    pub fn set_crypto_key<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.crypto_key = Some(v.into());
        self
    }

    /// Sets or clears the value of [crypto_key][crate::model::DateShiftConfig::crypto_key].
    pub fn set_or_clear_crypto_key<T: Into<bytes::Bytes>>(mut self, v: Option<T>) -> Self {
        self.crypto_key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [kms_wrapped][crate::model::DateShiftConfig::kms_wrapped].
    pub fn set_kms_wrapped<T: Into<crate::model::KmsWrappedCryptoKey>>(mut self, v: T) -> Self {
        self.kms_wrapped = Some(v.into());
        self
    }

    /// Sets or clears the value of [kms_wrapped][crate::model::DateShiftConfig::kms_wrapped].
    pub fn set_or_clear_kms_wrapped<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::KmsWrappedCryptoKey>,
    {
        self.kms_wrapped = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for DateShiftConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.DateShiftConfig"
    }
}

/// Contains configuration for streaming de-identified FHIR export.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeidentifiedStoreDestination {
    /// Configures de-id options specific to different types of content. Each
    /// submessage customizes the handling of an
    /// https://tools.ietf.org/html/rfc6838 media type or subtype. Configs are
    /// applied in a nested manner at runtime.
    pub config: Option<crate::model::DeidentifyConfig>,

    /// The full resource name of a Cloud Healthcare FHIR store, for example, `
    /// projects/{project_id}/locations/{location_id}/datasets/{dataset_id}/fhirStores/{fhir_store_id}`.
    pub store: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DeidentifiedStoreDestination {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [config][crate::model::DeidentifiedStoreDestination::config].
    pub fn set_config<T: Into<crate::model::DeidentifyConfig>>(mut self, v: T) -> Self {
        self.config = Some(v.into());
        self
    }

    /// Sets or clears the value of [config][crate::model::DeidentifiedStoreDestination::config].
    pub fn set_or_clear_config<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::DeidentifyConfig>,
    {
        self.config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [store][crate::model::DeidentifiedStoreDestination::store].
    pub fn set_store<T: Into<String>>(mut self, v: T) -> Self {
        self.store = Some(v.into());
        self
    }

    /// Sets or clears the value of [store][crate::model::DeidentifiedStoreDestination::store].
    pub fn set_or_clear_store<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.store = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for DeidentifiedStoreDestination {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.DeidentifiedStoreDestination"
    }
}

/// Configures de-id options specific to different types of content. Each
/// submessage customizes the handling of an https://tools.ietf.org/html/rfc6838
/// media type or subtype. Configs are applied in a nested manner at runtime.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeidentifyConfig {
    /// Specifies the parameters needed for de-identification of DICOM stores.
    pub dicom: Option<crate::model::DicomConfig>,

    /// Specifies how to handle de-identification of a FHIR store.
    pub fhir: Option<crate::model::FhirConfig>,

    /// Specifies how to handle de-identification of image pixels.
    pub image: Option<crate::model::ImageConfig>,

    /// Configures de-identification of text wherever it is found in the
    /// source_dataset.
    pub text: Option<crate::model::TextConfig>,

    /// Ensures in-flight data remains in the region of origin during
    /// de-identification. Using this option results in a significant reduction
    /// of throughput, and is not compatible with `LOCATION` or
    /// `ORGANIZATION_NAME` infoTypes. `LOCATION` must be excluded within
    /// `TextConfig`, and must also be excluded within `ImageConfig` if image
    /// redaction is required.
    pub use_regional_data_processing: Option<bool>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DeidentifyConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [dicom][crate::model::DeidentifyConfig::dicom].
    pub fn set_dicom<T: Into<crate::model::DicomConfig>>(mut self, v: T) -> Self {
        self.dicom = Some(v.into());
        self
    }

    /// Sets or clears the value of [dicom][crate::model::DeidentifyConfig::dicom].
    pub fn set_or_clear_dicom<T: Into<crate::model::DicomConfig>>(mut self, v: Option<T>) -> Self {
        self.dicom = v.map(|x| x.into());
        self
    }

    /// Sets the value of [fhir][crate::model::DeidentifyConfig::fhir].
    pub fn set_fhir<T: Into<crate::model::FhirConfig>>(mut self, v: T) -> Self {
        self.fhir = Some(v.into());
        self
    }

    /// Sets or clears the value of [fhir][crate::model::DeidentifyConfig::fhir].
    pub fn set_or_clear_fhir<T: Into<crate::model::FhirConfig>>(mut self, v: Option<T>) -> Self {
        self.fhir = v.map(|x| x.into());
        self
    }

    /// Sets the value of [image][crate::model::DeidentifyConfig::image].
    pub fn set_image<T: Into<crate::model::ImageConfig>>(mut self, v: T) -> Self {
        self.image = Some(v.into());
        self
    }

    /// Sets or clears the value of [image][crate::model::DeidentifyConfig::image].
    pub fn set_or_clear_image<T: Into<crate::model::ImageConfig>>(mut self, v: Option<T>) -> Self {
        self.image = v.map(|x| x.into());
        self
    }

    /// Sets the value of [text][crate::model::DeidentifyConfig::text].
    pub fn set_text<T: Into<crate::model::TextConfig>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets or clears the value of [text][crate::model::DeidentifyConfig::text].
    pub fn set_or_clear_text<T: Into<crate::model::TextConfig>>(mut self, v: Option<T>) -> Self {
        self.text = v.map(|x| x.into());
        self
    }

    /// Sets the value of [use_regional_data_processing][crate::model::DeidentifyConfig::use_regional_data_processing].
    pub fn set_use_regional_data_processing<T: Into<bool>>(mut self, v: T) -> Self {
        self.use_regional_data_processing = Some(v.into());
        self
    }

    /// Sets or clears the value of [use_regional_data_processing][crate::model::DeidentifyConfig::use_regional_data_processing].
    pub fn set_or_clear_use_regional_data_processing<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<bool>,
    {
        self.use_regional_data_processing = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for DeidentifyConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.DeidentifyConfig"
    }
}

/// Redacts identifying information from the specified dataset.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeidentifyDatasetRequest {
    /// Configures de-id options specific to different types of content. Each
    /// submessage customizes the handling of an
    /// https://tools.ietf.org/html/rfc6838 media type or subtype. Configs are
    /// applied in a nested manner at runtime.
    pub config: Option<crate::model::DeidentifyConfig>,

    /// The name of the dataset resource to create and write the redacted data
    /// to. * The destination dataset must not exist. * The destination dataset
    /// must be in the same location as the source dataset. De-identifying data
    /// across multiple locations is not supported.
    pub destination_dataset: Option<String>,

    /// Cloud Storage location to read the JSON cloud.healthcare.deidentify.
    /// DeidentifyConfig from, overriding the default config. Must be of the
    /// form `gs://{bucket_id}/path/to/object`. The Cloud Storage location must
    /// grant the Cloud IAM role `roles/storage.objectViewer` to the project's
    /// Cloud Healthcare Service Agent service account. Only one of `config` and
    /// `gcs_config_uri` can be specified.
    pub gcs_config_uri: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DeidentifyDatasetRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [config][crate::model::DeidentifyDatasetRequest::config].
    pub fn set_config<T: Into<crate::model::DeidentifyConfig>>(mut self, v: T) -> Self {
        self.config = Some(v.into());
        self
    }

    /// Sets or clears the value of [config][crate::model::DeidentifyDatasetRequest::config].
    pub fn set_or_clear_config<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::DeidentifyConfig>,
    {
        self.config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [destination_dataset][crate::model::DeidentifyDatasetRequest::destination_dataset].
    pub fn set_destination_dataset<T: Into<String>>(mut self, v: T) -> Self {
        self.destination_dataset = Some(v.into());
        self
    }

    /// Sets or clears the value of [destination_dataset][crate::model::DeidentifyDatasetRequest::destination_dataset].
    pub fn set_or_clear_destination_dataset<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.destination_dataset = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gcs_config_uri][crate::model::DeidentifyDatasetRequest::gcs_config_uri].
    pub fn set_gcs_config_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.gcs_config_uri = Some(v.into());
        self
    }

    /// Sets or clears the value of [gcs_config_uri][crate::model::DeidentifyDatasetRequest::gcs_config_uri].
    pub fn set_or_clear_gcs_config_uri<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.gcs_config_uri = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for DeidentifyDatasetRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.DeidentifyDatasetRequest"
    }
}

/// Creates a new DICOM store with sensitive information de-identified.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeidentifyDicomStoreRequest {
    /// Configures de-id options specific to different types of content. Each
    /// submessage customizes the handling of an
    /// https://tools.ietf.org/html/rfc6838 media type or subtype. Configs are
    /// applied in a nested manner at runtime.
    pub config: Option<crate::model::DeidentifyConfig>,

    /// The name of the DICOM store to create and write the redacted data to.
    /// For example,
    /// `projects/{project_id}/locations/{location_id}/datasets/{dataset_id}/dicomStores/{dicom_store_id}`.
    /// * The destination dataset must exist. * The source dataset and
    /// destination dataset must both reside in the same location.
    /// De-identifying data across multiple locations is not supported. * The
    /// destination DICOM store must not exist. * The caller must have the
    /// necessary permissions to create the destination DICOM store.
    pub destination_store: Option<String>,

    /// Specifies the filter configuration for DICOM resources.
    pub filter_config: Option<crate::model::DicomFilterConfig>,

    /// Cloud Storage location to read the JSON cloud.healthcare.deidentify.
    /// DeidentifyConfig from, overriding the default config. Must be of the
    /// form `gs://{bucket_id}/path/to/object`. The Cloud Storage location must
    /// grant the Cloud IAM role `roles/storage.objectViewer` to the project's
    /// Cloud Healthcare Service Agent service account. Only one of `config` and
    /// `gcs_config_uri` can be specified.
    pub gcs_config_uri: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DeidentifyDicomStoreRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [config][crate::model::DeidentifyDicomStoreRequest::config].
    pub fn set_config<T: Into<crate::model::DeidentifyConfig>>(mut self, v: T) -> Self {
        self.config = Some(v.into());
        self
    }

    /// Sets or clears the value of [config][crate::model::DeidentifyDicomStoreRequest::config].
    pub fn set_or_clear_config<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::DeidentifyConfig>,
    {
        self.config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [destination_store][crate::model::DeidentifyDicomStoreRequest::destination_store].
    pub fn set_destination_store<T: Into<String>>(mut self, v: T) -> Self {
        self.destination_store = Some(v.into());
        self
    }

    /// Sets or clears the value of [destination_store][crate::model::DeidentifyDicomStoreRequest::destination_store].
    pub fn set_or_clear_destination_store<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.destination_store = v.map(|x| x.into());
        self
    }

    /// Sets the value of [filter_config][crate::model::DeidentifyDicomStoreRequest::filter_config].
    pub fn set_filter_config<T: Into<crate::model::DicomFilterConfig>>(mut self, v: T) -> Self {
        self.filter_config = Some(v.into());
        self
    }

    /// Sets or clears the value of [filter_config][crate::model::DeidentifyDicomStoreRequest::filter_config].
    pub fn set_or_clear_filter_config<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::DicomFilterConfig>,
    {
        self.filter_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gcs_config_uri][crate::model::DeidentifyDicomStoreRequest::gcs_config_uri].
    pub fn set_gcs_config_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.gcs_config_uri = Some(v.into());
        self
    }

    /// Sets or clears the value of [gcs_config_uri][crate::model::DeidentifyDicomStoreRequest::gcs_config_uri].
    pub fn set_or_clear_gcs_config_uri<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.gcs_config_uri = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for DeidentifyDicomStoreRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.DeidentifyDicomStoreRequest"
    }
}

/// Creates a new FHIR store with sensitive information de-identified.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeidentifyFhirStoreRequest {
    /// Configures de-id options specific to different types of content. Each
    /// submessage customizes the handling of an
    /// https://tools.ietf.org/html/rfc6838 media type or subtype. Configs are
    /// applied in a nested manner at runtime.
    pub config: Option<crate::model::DeidentifyConfig>,

    /// The name of the FHIR store to create and write the redacted data to. For
    /// example,
    /// `projects/{project_id}/locations/{location_id}/datasets/{dataset_id}/fhirStores/{fhir_store_id}`.
    /// * The destination dataset must exist. * The source dataset and
    /// destination dataset must both reside in the same location.
    /// De-identifying data across multiple locations is not supported. * The
    /// destination FHIR store must exist. * The caller must have the
    /// healthcare.fhirResources.update permission to write to the destination
    /// FHIR store.
    pub destination_store: Option<String>,

    /// Cloud Storage location to read the JSON cloud.healthcare.deidentify.
    /// DeidentifyConfig from, overriding the default config. Must be of the
    /// form `gs://{bucket_id}/path/to/object`. The Cloud Storage location must
    /// grant the Cloud IAM role `roles/storage.objectViewer` to the project's
    /// Cloud Healthcare Service Agent service account. Only one of `config` and
    /// `gcs_config_uri` can be specified.
    pub gcs_config_uri: Option<String>,

    /// Filter configuration.
    pub resource_filter: Option<crate::model::FhirFilter>,

    /// If true, skips resources that are created or modified after the
    /// de-identify operation is created.
    pub skip_modified_resources: Option<bool>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DeidentifyFhirStoreRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [config][crate::model::DeidentifyFhirStoreRequest::config].
    pub fn set_config<T: Into<crate::model::DeidentifyConfig>>(mut self, v: T) -> Self {
        self.config = Some(v.into());
        self
    }

    /// Sets or clears the value of [config][crate::model::DeidentifyFhirStoreRequest::config].
    pub fn set_or_clear_config<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::DeidentifyConfig>,
    {
        self.config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [destination_store][crate::model::DeidentifyFhirStoreRequest::destination_store].
    pub fn set_destination_store<T: Into<String>>(mut self, v: T) -> Self {
        self.destination_store = Some(v.into());
        self
    }

    /// Sets or clears the value of [destination_store][crate::model::DeidentifyFhirStoreRequest::destination_store].
    pub fn set_or_clear_destination_store<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.destination_store = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gcs_config_uri][crate::model::DeidentifyFhirStoreRequest::gcs_config_uri].
    pub fn set_gcs_config_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.gcs_config_uri = Some(v.into());
        self
    }

    /// Sets or clears the value of [gcs_config_uri][crate::model::DeidentifyFhirStoreRequest::gcs_config_uri].
    pub fn set_or_clear_gcs_config_uri<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.gcs_config_uri = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_filter][crate::model::DeidentifyFhirStoreRequest::resource_filter].
    pub fn set_resource_filter<T: Into<crate::model::FhirFilter>>(mut self, v: T) -> Self {
        self.resource_filter = Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_filter][crate::model::DeidentifyFhirStoreRequest::resource_filter].
    pub fn set_or_clear_resource_filter<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::FhirFilter>,
    {
        self.resource_filter = v.map(|x| x.into());
        self
    }

    /// Sets the value of [skip_modified_resources][crate::model::DeidentifyFhirStoreRequest::skip_modified_resources].
    pub fn set_skip_modified_resources<T: Into<bool>>(mut self, v: T) -> Self {
        self.skip_modified_resources = Some(v.into());
        self
    }

    /// Sets or clears the value of [skip_modified_resources][crate::model::DeidentifyFhirStoreRequest::skip_modified_resources].
    pub fn set_or_clear_skip_modified_resources<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.skip_modified_resources = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for DeidentifyFhirStoreRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.DeidentifyFhirStoreRequest"
    }
}

/// Contains a summary of the Deidentify operation.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeidentifySummary {
    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DeidentifySummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

impl apicore::message::Message for DeidentifySummary {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.DeidentifySummary"
    }
}

/// Specifies the parameters needed for de-identification of DICOM stores.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DicomConfig {
    /// Tag filtering profile that determines which tags to keep/remove.
    pub filter_profile: Option<String>,

    /// List of tags to be filtered.
    pub keep_list: Option<crate::model::TagFilterList>,

    /// List of tags to be filtered.
    pub remove_list: Option<crate::model::TagFilterList>,

    /// If true, skip replacing StudyInstanceUID, SeriesInstanceUID,
    /// SOPInstanceUID, and MediaStorageSOPInstanceUID and leave them untouched.
    /// The Cloud Healthcare API regenerates these UIDs by default based on the
    /// DICOM Standard's reasoning: "Whilst these UIDs cannot be mapped directly
    /// to an individual out of context, given access to the original images, or
    /// to a database of the original images containing the UIDs, it would be
    /// possible to recover the individual's identity. "
    /// http://dicom.nema.org/medical/dicom/current/output/chtml/part15/sect_E.3.9.html
    pub skip_id_redaction: Option<bool>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DicomConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [filter_profile][crate::model::DicomConfig::filter_profile].
    pub fn set_filter_profile<T: Into<String>>(mut self, v: T) -> Self {
        self.filter_profile = Some(v.into());
        self
    }

    /// Sets or clears the value of [filter_profile][crate::model::DicomConfig::filter_profile].
    pub fn set_or_clear_filter_profile<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.filter_profile = v.map(|x| x.into());
        self
    }

    /// Sets the value of [keep_list][crate::model::DicomConfig::keep_list].
    pub fn set_keep_list<T: Into<crate::model::TagFilterList>>(mut self, v: T) -> Self {
        self.keep_list = Some(v.into());
        self
    }

    /// Sets or clears the value of [keep_list][crate::model::DicomConfig::keep_list].
    pub fn set_or_clear_keep_list<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::TagFilterList>,
    {
        self.keep_list = v.map(|x| x.into());
        self
    }

    /// Sets the value of [remove_list][crate::model::DicomConfig::remove_list].
    pub fn set_remove_list<T: Into<crate::model::TagFilterList>>(mut self, v: T) -> Self {
        self.remove_list = Some(v.into());
        self
    }

    /// Sets or clears the value of [remove_list][crate::model::DicomConfig::remove_list].
    pub fn set_or_clear_remove_list<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::TagFilterList>,
    {
        self.remove_list = v.map(|x| x.into());
        self
    }

    /// Sets the value of [skip_id_redaction][crate::model::DicomConfig::skip_id_redaction].
    pub fn set_skip_id_redaction<T: Into<bool>>(mut self, v: T) -> Self {
        self.skip_id_redaction = Some(v.into());
        self
    }

    /// Sets or clears the value of [skip_id_redaction][crate::model::DicomConfig::skip_id_redaction].
    pub fn set_or_clear_skip_id_redaction<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.skip_id_redaction = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for DicomConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.DicomConfig"
    }
}

/// Specifies the filter configuration for DICOM resources.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DicomFilterConfig {
    /// The Cloud Storage location of the filter configuration file. The
    /// `gcs_uri` must be in the format `gs://bucket/path/to/object`. The filter
    /// configuration file must contain a list of resource paths separated by
    /// newline characters (\n or \r\n). Each resource path must be in the
    /// format
    /// "/studies/{studyUID}[/series/{seriesUID}[/instances/{instanceUID}]]" The
    /// Cloud Healthcare API service account must have the
    /// `roles/storage.objectViewer` Cloud IAM role for this Cloud Storage
    /// location.
    pub resource_paths_gcs_uri: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DicomFilterConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resource_paths_gcs_uri][crate::model::DicomFilterConfig::resource_paths_gcs_uri].
    pub fn set_resource_paths_gcs_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_paths_gcs_uri = Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_paths_gcs_uri][crate::model::DicomFilterConfig::resource_paths_gcs_uri].
    pub fn set_or_clear_resource_paths_gcs_uri<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.resource_paths_gcs_uri = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for DicomFilterConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.DicomFilterConfig"
    }
}

/// Represents a DICOM store.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DicomStore {
    /// User-supplied key-value pairs used to organize DICOM stores. Label keys
    /// must be between 1 and 63 characters long, have a UTF-8 encoding of
    /// maximum 128 bytes, and must conform to the following PCRE regular
    /// expression: \p`Ll`\p`Lo`` 0,62` Label values are optional, must be
    /// between 1 and 63 characters long, have a UTF-8 encoding of maximum 128
    /// bytes, and must conform to the following PCRE regular expression:
    /// [\p`Ll`\p`Lo`\p`N`_-]`0,63` No more than 64 labels can be associated
    /// with a given store.
    pub labels: Option<std::collections::HashMap<String, String>>,

    /// Resource name of the DICOM store, of the form
    /// `projects/{project_id}/locations/{location_id}/datasets/{dataset_id}/dicomStores/{dicom_store_id}`.
    pub name: Option<String>,

    /// Specifies where to send notifications upon changes to a data store.
    pub notification_config: Option<crate::model::NotificationConfig>,

    /// Optional. A list of streaming configs used to configure the destination
    /// of streaming exports for every DICOM instance insertion in this DICOM
    /// store. After a new config is added to `stream_configs`, DICOM instance
    /// insertions are streamed to the new destination. When a config is removed
    /// from `stream_configs` , the server stops streaming to that destination.
    /// Each config must contain a unique destination.
    pub stream_configs: Option<Vec<crate::model::GoogleCloudHealthcareV1DicomStreamConfig>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl DicomStore {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [labels][crate::model::DicomStore::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [name][crate::model::DicomStore::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::DicomStore::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [notification_config][crate::model::DicomStore::notification_config].
    pub fn set_notification_config<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::NotificationConfig>,
    {
        self.notification_config = Some(v.into());
        self
    }

    /// Sets or clears the value of [notification_config][crate::model::DicomStore::notification_config].
    pub fn set_or_clear_notification_config<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::NotificationConfig>,
    {
        self.notification_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [stream_configs][crate::model::DicomStore::stream_configs].
    pub fn set_stream_configs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::GoogleCloudHealthcareV1DicomStreamConfig>,
    {
        self.stream_configs = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for DicomStore {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.DicomStore"
    }
}

/// A generic empty message that you can re-use to avoid defining duplicated
/// empty messages in your APIs. A typical example is to use it as the request
/// or the response type of an API method. For instance: service Foo ` rpc
/// Bar(google.protobuf.Empty) returns (google.protobuf.Empty); `
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
        "type.googleapis.com/google.cloud.healthcare.v1.Empty"
    }
}

/// The candidate entities that an entity mention could link to.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Entity {
    /// entity_id is a first class field entity_id uniquely identifies this
    /// concept and its meta-vocabulary. For example, "UMLS/C0000970".
    pub entity_id: Option<String>,

    /// preferred_term is the preferred term for this concept. For example, "
    /// Acetaminophen". For ad hoc entities formed by normalization, this is the
    /// most popular unnormalized string.
    pub preferred_term: Option<String>,

    /// Vocabulary codes are first-class fields and differentiated from the
    /// concept unique identifier (entity_id). vocabulary_codes contains the
    /// representation of this concept in particular vocabularies, such as
    /// ICD-10, SNOMED-CT and RxNORM. These are prefixed by the name of the
    /// vocabulary, followed by the unique code within that vocabulary. For
    /// example, "RXNORM/A10334543".
    pub vocabulary_codes: Option<Vec<String>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Entity {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [entity_id][crate::model::Entity::entity_id].
    pub fn set_entity_id<T: Into<String>>(mut self, v: T) -> Self {
        self.entity_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [entity_id][crate::model::Entity::entity_id].
    pub fn set_or_clear_entity_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.entity_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [preferred_term][crate::model::Entity::preferred_term].
    pub fn set_preferred_term<T: Into<String>>(mut self, v: T) -> Self {
        self.preferred_term = Some(v.into());
        self
    }

    /// Sets or clears the value of [preferred_term][crate::model::Entity::preferred_term].
    pub fn set_or_clear_preferred_term<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.preferred_term = v.map(|x| x.into());
        self
    }

    /// Sets the value of [vocabulary_codes][crate::model::Entity::vocabulary_codes].
    pub fn set_vocabulary_codes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.vocabulary_codes = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for Entity {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.Entity"
    }
}

/// An entity mention in the document.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EntityMention {
    /// A feature of an entity mention.
    pub certainty_assessment: Option<crate::model::Feature>,

    /// The model's confidence in this entity mention annotation. A number
    /// between 0 and 1.
    pub confidence: Option<f64>,

    /// linked_entities are candidate ontological concepts that this entity
    /// mention may refer to. They are sorted by decreasing confidence.
    pub linked_entities: Option<Vec<crate::model::LinkedEntity>>,

    /// mention_id uniquely identifies each entity mention in a single response.
    pub mention_id: Option<String>,

    /// A feature of an entity mention.
    pub subject: Option<crate::model::Feature>,

    /// A feature of an entity mention.
    pub temporal_assessment: Option<crate::model::Feature>,

    /// A span of text in the provided document.
    pub text: Option<crate::model::TextSpan>,

    /// The semantic type of the entity: UNKNOWN_ENTITY_TYPE, ALONE,
    /// ANATOMICAL_STRUCTURE, ASSISTED_LIVING, BF_RESULT, BM_RESULT, BM_UNIT,
    /// BM_VALUE, BODY_FUNCTION, BODY_MEASUREMENT, COMPLIANT, DOESNOT_FOLLOWUP,
    /// FAMILY, FOLLOWSUP, LABORATORY_DATA, LAB_RESULT, LAB_UNIT, LAB_VALUE,
    /// MEDICAL_DEVICE, MEDICINE, MED_DOSE, MED_DURATION, MED_FORM,
    /// MED_FREQUENCY, MED_ROUTE, MED_STATUS, MED_STRENGTH, MED_TOTALDOSE,
    /// MED_UNIT, NON_COMPLIANT, OTHER_LIVINGSTATUS, PROBLEM, PROCEDURE,
    /// PROCEDURE_RESULT, PROC_METHOD, REASON_FOR_NONCOMPLIANCE, SEVERITY,
    /// SUBSTANCE_ABUSE, UNCLEAR_FOLLOWUP.
    pub r#type: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl EntityMention {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [certainty_assessment][crate::model::EntityMention::certainty_assessment].
    pub fn set_certainty_assessment<T: Into<crate::model::Feature>>(mut self, v: T) -> Self {
        self.certainty_assessment = Some(v.into());
        self
    }

    /// Sets or clears the value of [certainty_assessment][crate::model::EntityMention::certainty_assessment].
    pub fn set_or_clear_certainty_assessment<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::Feature>,
    {
        self.certainty_assessment = v.map(|x| x.into());
        self
    }

    /// Sets the value of [confidence][crate::model::EntityMention::confidence].
    pub fn set_confidence<T: Into<f64>>(mut self, v: T) -> Self {
        self.confidence = Some(v.into());
        self
    }

    /// Sets or clears the value of [confidence][crate::model::EntityMention::confidence].
    pub fn set_or_clear_confidence<T: Into<f64>>(mut self, v: Option<T>) -> Self {
        self.confidence = v.map(|x| x.into());
        self
    }

    /// Sets the value of [linked_entities][crate::model::EntityMention::linked_entities].
    pub fn set_linked_entities<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::LinkedEntity>,
    {
        self.linked_entities = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [mention_id][crate::model::EntityMention::mention_id].
    pub fn set_mention_id<T: Into<String>>(mut self, v: T) -> Self {
        self.mention_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [mention_id][crate::model::EntityMention::mention_id].
    pub fn set_or_clear_mention_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.mention_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [subject][crate::model::EntityMention::subject].
    pub fn set_subject<T: Into<crate::model::Feature>>(mut self, v: T) -> Self {
        self.subject = Some(v.into());
        self
    }

    /// Sets or clears the value of [subject][crate::model::EntityMention::subject].
    pub fn set_or_clear_subject<T: Into<crate::model::Feature>>(mut self, v: Option<T>) -> Self {
        self.subject = v.map(|x| x.into());
        self
    }

    /// Sets the value of [temporal_assessment][crate::model::EntityMention::temporal_assessment].
    pub fn set_temporal_assessment<T: Into<crate::model::Feature>>(mut self, v: T) -> Self {
        self.temporal_assessment = Some(v.into());
        self
    }

    /// Sets or clears the value of [temporal_assessment][crate::model::EntityMention::temporal_assessment].
    pub fn set_or_clear_temporal_assessment<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::Feature>,
    {
        self.temporal_assessment = v.map(|x| x.into());
        self
    }

    /// Sets the value of [text][crate::model::EntityMention::text].
    pub fn set_text<T: Into<crate::model::TextSpan>>(mut self, v: T) -> Self {
        self.text = Some(v.into());
        self
    }

    /// Sets or clears the value of [text][crate::model::EntityMention::text].
    pub fn set_or_clear_text<T: Into<crate::model::TextSpan>>(mut self, v: Option<T>) -> Self {
        self.text = v.map(|x| x.into());
        self
    }

    /// Sets the value of [type][crate::model::EntityMention::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets or clears the value of [type][crate::model::EntityMention::r#type].
    pub fn set_or_clear_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.r#type = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for EntityMention {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.EntityMention"
    }
}

/// Defines directed relationship from one entity mention to another.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EntityMentionRelationship {
    /// The model's confidence in this annotation. A number between 0 and 1.
    pub confidence: Option<f64>,

    /// object_id is the id of the object entity mention.
    pub object_id: Option<String>,

    /// subject_id is the id of the subject entity mention.
    pub subject_id: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl EntityMentionRelationship {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [confidence][crate::model::EntityMentionRelationship::confidence].
    pub fn set_confidence<T: Into<f64>>(mut self, v: T) -> Self {
        self.confidence = Some(v.into());
        self
    }

    /// Sets or clears the value of [confidence][crate::model::EntityMentionRelationship::confidence].
    pub fn set_or_clear_confidence<T: Into<f64>>(mut self, v: Option<T>) -> Self {
        self.confidence = v.map(|x| x.into());
        self
    }

    /// Sets the value of [object_id][crate::model::EntityMentionRelationship::object_id].
    pub fn set_object_id<T: Into<String>>(mut self, v: T) -> Self {
        self.object_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [object_id][crate::model::EntityMentionRelationship::object_id].
    pub fn set_or_clear_object_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.object_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [subject_id][crate::model::EntityMentionRelationship::subject_id].
    pub fn set_subject_id<T: Into<String>>(mut self, v: T) -> Self {
        self.subject_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [subject_id][crate::model::EntityMentionRelationship::subject_id].
    pub fn set_or_clear_subject_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.subject_id = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for EntityMentionRelationship {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.EntityMentionRelationship"
    }
}

/// Evaluate a user's Consents for all matching User data mappings. Note: User
/// data mappings are indexed asynchronously, causing slight delays between the
/// time mappings are created or updated and when they are included in
/// EvaluateUserConsents results.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EvaluateUserConsentsRequest {
    /// List of resource names of Consent resources.
    pub consent_list: Option<crate::model::ConsentList>,

    /// Optional. Limit on the number of User data mappings to return in a
    /// single response. If not specified, 100 is used. May not be larger than
    /// 1000.
    pub page_size: Option<i32>,

    /// Optional. Token to retrieve the next page of results, or empty to get
    /// the first page.
    pub page_token: Option<String>,

    /// Required. The values of request attributes associated with this access
    /// request.
    pub request_attributes: Option<std::collections::HashMap<String, String>>,

    /// Optional. The values of resource attributes associated with the
    /// resources being requested. If no values are specified, then all
    /// resources are queried.
    pub resource_attributes: Option<std::collections::HashMap<String, String>>,

    /// Optional. The view for EvaluateUserConsentsResponse. If unspecified,
    /// defaults to `BASIC` and returns `consented` as `TRUE` or `FALSE`.
    pub response_view: Option<String>,

    /// Required. User ID to evaluate consents for.
    pub user_id: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl EvaluateUserConsentsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [consent_list][crate::model::EvaluateUserConsentsRequest::consent_list].
    pub fn set_consent_list<T: Into<crate::model::ConsentList>>(mut self, v: T) -> Self {
        self.consent_list = Some(v.into());
        self
    }

    /// Sets or clears the value of [consent_list][crate::model::EvaluateUserConsentsRequest::consent_list].
    pub fn set_or_clear_consent_list<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::ConsentList>,
    {
        self.consent_list = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page_size][crate::model::EvaluateUserConsentsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = Some(v.into());
        self
    }

    /// Sets or clears the value of [page_size][crate::model::EvaluateUserConsentsRequest::page_size].
    pub fn set_or_clear_page_size<T: Into<i32>>(mut self, v: Option<T>) -> Self {
        self.page_size = v.map(|x| x.into());
        self
    }

    /// Sets the value of [page_token][crate::model::EvaluateUserConsentsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = Some(v.into());
        self
    }

    /// Sets or clears the value of [page_token][crate::model::EvaluateUserConsentsRequest::page_token].
    pub fn set_or_clear_page_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [request_attributes][crate::model::EvaluateUserConsentsRequest::request_attributes].
    pub fn set_request_attributes<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.request_attributes = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [resource_attributes][crate::model::EvaluateUserConsentsRequest::resource_attributes].
    pub fn set_resource_attributes<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.resource_attributes = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [response_view][crate::model::EvaluateUserConsentsRequest::response_view].
    pub fn set_response_view<T: Into<String>>(mut self, v: T) -> Self {
        self.response_view = Some(v.into());
        self
    }

    /// Sets or clears the value of [response_view][crate::model::EvaluateUserConsentsRequest::response_view].
    pub fn set_or_clear_response_view<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.response_view = v.map(|x| x.into());
        self
    }

    /// Sets the value of [user_id][crate::model::EvaluateUserConsentsRequest::user_id].
    pub fn set_user_id<T: Into<String>>(mut self, v: T) -> Self {
        self.user_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [user_id][crate::model::EvaluateUserConsentsRequest::user_id].
    pub fn set_or_clear_user_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.user_id = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for EvaluateUserConsentsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.EvaluateUserConsentsRequest"
    }
}

#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EvaluateUserConsentsResponse {
    /// Token to retrieve the next page of results, or empty if there are no
    /// more results in the list. This token is valid for 72 hours after it is
    /// created.
    pub next_page_token: Option<String>,

    /// The consent evaluation result for each `data_id`.
    pub results: Option<Vec<crate::model::Result>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl EvaluateUserConsentsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [next_page_token][crate::model::EvaluateUserConsentsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::EvaluateUserConsentsResponse::next_page_token].
    pub fn set_or_clear_next_page_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [results][crate::model::EvaluateUserConsentsResponse::results].
    pub fn set_results<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Result>,
    {
        self.results = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for EvaluateUserConsentsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.EvaluateUserConsentsResponse"
    }
}

/// Exports data from the specified DICOM store. If a given resource, such as a
/// DICOM object with the same SOPInstance UID, already exists in the output, it
/// is overwritten with the version in the source dataset. Exported DICOM data
/// persists when the DICOM store from which it was exported is deleted.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExportDicomDataRequest {
    /// The BigQuery table where the server writes the output.
    pub bigquery_destination: Option<crate::model::GoogleCloudHealthcareV1DicomBigQueryDestination>,

    /// The Cloud Storage location where the server writes the output and the
    /// export configuration.
    pub gcs_destination: Option<crate::model::GoogleCloudHealthcareV1DicomGcsDestination>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ExportDicomDataRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bigquery_destination][crate::model::ExportDicomDataRequest::bigquery_destination].
    pub fn set_bigquery_destination<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::GoogleCloudHealthcareV1DicomBigQueryDestination>,
    {
        self.bigquery_destination = Some(v.into());
        self
    }

    /// Sets or clears the value of [bigquery_destination][crate::model::ExportDicomDataRequest::bigquery_destination].
    pub fn set_or_clear_bigquery_destination<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::GoogleCloudHealthcareV1DicomBigQueryDestination>,
    {
        self.bigquery_destination = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gcs_destination][crate::model::ExportDicomDataRequest::gcs_destination].
    pub fn set_gcs_destination<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::GoogleCloudHealthcareV1DicomGcsDestination>,
    {
        self.gcs_destination = Some(v.into());
        self
    }

    /// Sets or clears the value of [gcs_destination][crate::model::ExportDicomDataRequest::gcs_destination].
    pub fn set_or_clear_gcs_destination<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::GoogleCloudHealthcareV1DicomGcsDestination>,
    {
        self.gcs_destination = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ExportDicomDataRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ExportDicomDataRequest"
    }
}

/// Returns additional information in regards to a completed DICOM store export.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExportDicomDataResponse {
    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ExportDicomDataResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

impl apicore::message::Message for ExportDicomDataResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ExportDicomDataResponse"
    }
}

/// Request to schedule an export.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExportMessagesRequest {
    /// The end of the range in `send_time` (MSH.7,
    /// https://www.hl7.org/documentcenter/public_temp_2E58C1F9-1C23-BA17-0C6126475344DA9D/wg/conf/HL7MSH.htm)
    /// to process. If not specified, the time when the export is scheduled is
    /// used. This value has to come after the `start_time` defined below. Only
    /// messages whose ` send_time` lies in the range `start_time` (inclusive)
    /// to `end_time` (exclusive) are exported.
    pub end_time: Option<String>,

    /// Restricts messages exported to those matching a filter, only applicable
    /// to PubsubDestination and GcsDestination. The following syntax is
    /// available: * A string field value can be written as text inside
    /// quotation marks, for example ` "query text"`. The only valid relational
    /// operation for text fields is equality (`=`), where text is searched
    /// within the field, rather than having the field be equal to the text. For
    /// example, `"Comment = great"` returns messages with ` great` in the
    /// comment field. * A number field value can be written as an integer, a
    /// decimal, or an exponential. The valid relational operators for number
    /// fields are the equality operator (`=`), along with the less than/greater
    /// than operators (`<`, `<=`, `>`, `>=`). Note that there is no inequality
    /// (`!=`) operator. You can prepend the `NOT` operator to an expression to
    /// negate it. * A date field value must be written in the `yyyy-mm-dd`
    /// format. Fields with date and time use the RFC3339 time format. Leading
    /// zeros are required for one-digit months and days. The valid relational
    /// operators for date fields are the equality operator (`=`) , along with
    /// the less than/greater than operators (`<`, `<=`, `>`, `>=`). Note that
    /// there is no inequality (`!=`) operator. You can prepend the `NOT`
    /// operator to an expression to negate it. * Multiple field query
    /// expressions can be combined in one query by adding `AND` or `OR`
    /// operators between the expressions. If a boolean operator appears within
    /// a quoted string, it is not treated as special, and is just another part
    /// of the character string to be matched. You can prepend the `NOT`
    /// operator to an expression to negate it. The following fields and
    /// functions are available for filtering: * `message_type`, from the
    /// MSH-9.1 field. For example, `NOT message_type = "ADT"`. * `send_date` or
    /// `sendDate`, the `yyyy-mm-dd` date the message was sent in the dataset's
    /// time_zone, from the MSH-7 segment. For example, `send_date <
    /// "2017-01-02"`. * `send_time`, the timestamp when the message was sent,
    /// using the RFC3339 time format for comparisons, from the MSH-7 segment.
    /// For example, `send_time < "2017-01-02T00: 00:00-05:00"`. *
    /// `create_time`, the timestamp when the message was created in the HL7v2
    /// store. Use the RFC3339 time format for comparisons. For example, `
    /// create_time < "2017-01-02T00:00:00-05:00"`. * `send_facility`, the care
    /// center that the message came from, from the MSH-4 segment. For example,
    /// ` send_facility = "ABC"`. Note: The filter will be applied to every
    /// message in the HL7v2 store whose `send_time` lies in the range defined
    /// by the `start_time` and the `end_time`. Even if the filter only matches
    /// a small set of messages, the export operation can still take a long time
    /// to finish when a lot of messages are between the specified `start_time`
    /// and `end_time` range.
    pub filter: Option<String>,

    /// The Cloud Storage output destination. The Cloud Healthcare Service Agent
    /// requires the `roles/storage.objectAdmin` Cloud IAM roles on the Cloud
    /// Storage location.
    pub gcs_destination: Option<crate::model::GcsDestination>,

    /// The Pub/Sub output destination. The Cloud Healthcare Service Agent
    /// requires the `roles/pubsub.publisher` Cloud IAM role on the Pub/Sub
    /// topic.
    pub pubsub_destination: Option<crate::model::PubsubDestination>,

    /// The start of the range in `send_time` (MSH.7,
    /// https://www.hl7.org/documentcenter/public_temp_2E58C1F9-1C23-BA17-0C6126475344DA9D/wg/conf/HL7MSH.htm)
    /// to process. If not specified, the UNIX epoch (1970-01-01T00:00:00Z) is
    /// used. This value has to come before the `end_time` defined below. Only
    /// messages whose `send_time` lies in the range `start_time` (inclusive) to
    /// ` end_time` (exclusive) are exported.
    pub start_time: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ExportMessagesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [end_time][crate::model::ExportMessagesRequest::end_time].
    pub fn set_end_time<T: Into<String>>(mut self, v: T) -> Self {
        self.end_time = Some(v.into());
        self
    }

    /// Sets or clears the value of [end_time][crate::model::ExportMessagesRequest::end_time].
    pub fn set_or_clear_end_time<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.end_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [filter][crate::model::ExportMessagesRequest::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = Some(v.into());
        self
    }

    /// Sets or clears the value of [filter][crate::model::ExportMessagesRequest::filter].
    pub fn set_or_clear_filter<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.filter = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gcs_destination][crate::model::ExportMessagesRequest::gcs_destination].
    pub fn set_gcs_destination<T: Into<crate::model::GcsDestination>>(mut self, v: T) -> Self {
        self.gcs_destination = Some(v.into());
        self
    }

    /// Sets or clears the value of [gcs_destination][crate::model::ExportMessagesRequest::gcs_destination].
    pub fn set_or_clear_gcs_destination<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::GcsDestination>,
    {
        self.gcs_destination = v.map(|x| x.into());
        self
    }

    /// Sets the value of [pubsub_destination][crate::model::ExportMessagesRequest::pubsub_destination].
    pub fn set_pubsub_destination<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::PubsubDestination>,
    {
        self.pubsub_destination = Some(v.into());
        self
    }

    /// Sets or clears the value of [pubsub_destination][crate::model::ExportMessagesRequest::pubsub_destination].
    pub fn set_or_clear_pubsub_destination<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::PubsubDestination>,
    {
        self.pubsub_destination = v.map(|x| x.into());
        self
    }

    /// Sets the value of [start_time][crate::model::ExportMessagesRequest::start_time].
    pub fn set_start_time<T: Into<String>>(mut self, v: T) -> Self {
        self.start_time = Some(v.into());
        self
    }

    /// Sets or clears the value of [start_time][crate::model::ExportMessagesRequest::start_time].
    pub fn set_or_clear_start_time<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.start_time = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ExportMessagesRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ExportMessagesRequest"
    }
}

/// Final response for the export operation. This structure is included in the
/// response to describe the detailed outcome.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExportMessagesResponse {
    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ExportMessagesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

impl apicore::message::Message for ExportMessagesResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ExportMessagesResponse"
    }
}

/// Request to export resources.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExportResourcesRequest {
    /// If provided, only resources updated after this time are exported. The
    /// time uses the format YYYY-MM-DDThh:mm:ss.sss+zz:zz. For example,
    /// `2015-02-07T13:28: 17.239+02:00` or `2017-01-01T00:00:00Z`. The time
    /// must be specified to the second and include a time zone.
    #[serde(rename = "_since")]
    pub since: Option<String>,

    /// String of comma-delimited FHIR resource types. If provided, only
    /// resources of the specified resource type(s) are exported.
    #[serde(rename = "_type")]
    pub r#type: Option<String>,

    /// The configuration for exporting to BigQuery.
    pub bigquery_destination: Option<crate::model::GoogleCloudHealthcareV1FhirBigQueryDestination>,

    /// The configuration for exporting to Cloud Storage.
    pub gcs_destination: Option<crate::model::GoogleCloudHealthcareV1FhirGcsDestination>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ExportResourcesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [since][crate::model::ExportResourcesRequest::since].
    pub fn set_since<T: Into<String>>(mut self, v: T) -> Self {
        self.since = Some(v.into());
        self
    }

    /// Sets or clears the value of [since][crate::model::ExportResourcesRequest::since].
    pub fn set_or_clear_since<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.since = v.map(|x| x.into());
        self
    }

    /// Sets the value of [type][crate::model::ExportResourcesRequest::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets or clears the value of [type][crate::model::ExportResourcesRequest::r#type].
    pub fn set_or_clear_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.r#type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [bigquery_destination][crate::model::ExportResourcesRequest::bigquery_destination].
    pub fn set_bigquery_destination<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::GoogleCloudHealthcareV1FhirBigQueryDestination>,
    {
        self.bigquery_destination = Some(v.into());
        self
    }

    /// Sets or clears the value of [bigquery_destination][crate::model::ExportResourcesRequest::bigquery_destination].
    pub fn set_or_clear_bigquery_destination<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::GoogleCloudHealthcareV1FhirBigQueryDestination>,
    {
        self.bigquery_destination = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gcs_destination][crate::model::ExportResourcesRequest::gcs_destination].
    pub fn set_gcs_destination<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::GoogleCloudHealthcareV1FhirGcsDestination>,
    {
        self.gcs_destination = Some(v.into());
        self
    }

    /// Sets or clears the value of [gcs_destination][crate::model::ExportResourcesRequest::gcs_destination].
    pub fn set_or_clear_gcs_destination<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::GoogleCloudHealthcareV1FhirGcsDestination>,
    {
        self.gcs_destination = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ExportResourcesRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ExportResourcesRequest"
    }
}

/// Response when all resources export successfully. This structure is included
/// in the response to describe the detailed outcome after the operation
/// finishes successfully.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExportResourcesResponse {
    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ExportResourcesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

impl apicore::message::Message for ExportResourcesResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ExportResourcesResponse"
    }
}

/// Represents a textual expression in the Common Expression Language (CEL)
/// syntax. CEL is a C-like expression language. The syntax and semantics of CEL
/// are documented at https://github.com/google/cel-spec. Example (Comparison):
/// title: "Summary size limit" description: "Determines if a summary is less
/// than 100 chars" expression: "document.summary.size() < 100" Example
/// (Equality): title: " Requestor is owner" description: "Determines if
/// requestor is the document owner" expression: "document.owner ==
/// request.auth.claims.email" Example ( Logic): title: "Public documents"
/// description: "Determine whether the document should be publicly visible"
/// expression: "document.type != 'private' && document.type != 'internal'"
/// Example (Data Manipulation): title: "Notification string" description:
/// "Create a notification string with a timestamp." expression: "'New message
/// received at ' + string(document.create_time)" The exact variables and
/// functions that may be referenced within an expression are determined by the
/// service that evaluates it. See the service documentation for additional
/// information.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Expr {
    /// Optional. Description of the expression. This is a longer text which
    /// describes the expression, e.g. when hovered over it in a UI.
    pub description: Option<String>,

    /// Textual representation of an expression in Common Expression Language
    /// syntax.
    pub expression: Option<String>,

    /// Optional. String indicating the location of the expression for error
    /// reporting, e.g. a file name and a position in the file.
    pub location: Option<String>,

    /// Optional. Title for the expression, i.e. a short string describing its
    /// purpose. This can be used e.g. in UIs which allow to enter the
    /// expression.
    pub title: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Expr {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [description][crate::model::Expr::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets or clears the value of [description][crate::model::Expr::description].
    pub fn set_or_clear_description<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.description = v.map(|x| x.into());
        self
    }

    /// Sets the value of [expression][crate::model::Expr::expression].
    pub fn set_expression<T: Into<String>>(mut self, v: T) -> Self {
        self.expression = Some(v.into());
        self
    }

    /// Sets or clears the value of [expression][crate::model::Expr::expression].
    pub fn set_or_clear_expression<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.expression = v.map(|x| x.into());
        self
    }

    /// Sets the value of [location][crate::model::Expr::location].
    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = Some(v.into());
        self
    }

    /// Sets or clears the value of [location][crate::model::Expr::location].
    pub fn set_or_clear_location<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.location = v.map(|x| x.into());
        self
    }

    /// Sets the value of [title][crate::model::Expr::title].
    pub fn set_title<T: Into<String>>(mut self, v: T) -> Self {
        self.title = Some(v.into());
        self
    }

    /// Sets or clears the value of [title][crate::model::Expr::title].
    pub fn set_or_clear_title<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.title = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for Expr {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.Expr"
    }
}

/// A feature of an entity mention.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Feature {
    /// The model's confidence in this feature annotation. A number between 0
    /// and 1.
    pub confidence: Option<f64>,

    /// The value of this feature annotation. Its range depends on the type of
    /// the feature.
    pub value: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Feature {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [confidence][crate::model::Feature::confidence].
    pub fn set_confidence<T: Into<f64>>(mut self, v: T) -> Self {
        self.confidence = Some(v.into());
        self
    }

    /// Sets or clears the value of [confidence][crate::model::Feature::confidence].
    pub fn set_or_clear_confidence<T: Into<f64>>(mut self, v: Option<T>) -> Self {
        self.confidence = v.map(|x| x.into());
        self
    }

    /// Sets the value of [value][crate::model::Feature::value].
    pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }

    /// Sets or clears the value of [value][crate::model::Feature::value].
    pub fn set_or_clear_value<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.value = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for Feature {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.Feature"
    }
}

/// Specifies how to handle de-identification of a FHIR store.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FhirConfig {
    /// The behaviour for handling FHIR extensions that aren't otherwise
    /// specified for de-identification. If true, all extensions are preserved
    /// during de-identification by default. If false or unspecified, all
    /// extensions are removed during de-identification by default.
    pub default_keep_extensions: Option<bool>,

    /// Specifies FHIR paths to match and how to transform them. Any field that
    /// is not matched by a FieldMetadata is passed through to the output
    /// dataset unmodified. All extensions will be processed according to
    /// `default_keep_extensions`.
    pub field_metadata_list: Option<Vec<crate::model::FieldMetadata>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl FhirConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [default_keep_extensions][crate::model::FhirConfig::default_keep_extensions].
    pub fn set_default_keep_extensions<T: Into<bool>>(mut self, v: T) -> Self {
        self.default_keep_extensions = Some(v.into());
        self
    }

    /// Sets or clears the value of [default_keep_extensions][crate::model::FhirConfig::default_keep_extensions].
    pub fn set_or_clear_default_keep_extensions<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.default_keep_extensions = v.map(|x| x.into());
        self
    }

    /// Sets the value of [field_metadata_list][crate::model::FhirConfig::field_metadata_list].
    pub fn set_field_metadata_list<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::FieldMetadata>,
    {
        self.field_metadata_list = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for FhirConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.FhirConfig"
    }
}

/// Filter configuration.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FhirFilter {
    /// A list of FHIR resources.
    pub resources: Option<crate::model::Resources>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl FhirFilter {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resources][crate::model::FhirFilter::resources].
    pub fn set_resources<T: Into<crate::model::Resources>>(mut self, v: T) -> Self {
        self.resources = Some(v.into());
        self
    }

    /// Sets or clears the value of [resources][crate::model::FhirFilter::resources].
    pub fn set_or_clear_resources<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::Resources>,
    {
        self.resources = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for FhirFilter {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.FhirFilter"
    }
}

/// Contains the configuration for FHIR notifications.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FhirNotificationConfig {
    /// The [Pub/Sub](https://cloud.google.com/pubsub/docs/) topic that
    /// notifications of changes are published on. Supplied by the client. The
    /// notification is a ` PubsubMessage` with the following fields: *
    /// `PubsubMessage.Data` contains the resource name. *
    /// `PubsubMessage.MessageId` is the ID of this notification. It is
    /// guaranteed to be unique within the topic. * `PubsubMessage.PublishTime`
    /// is the time when the message was published. Note that notifications are
    /// only sent if the topic is non-empty. [Topic
    /// names](https://cloud.google.com/pubsub/docs/overview#names) must be
    /// scoped to a project. The Cloud Healthcare API service account,
    /// service-@gcp-sa-healthcare.iam.gserviceaccount.com, must have publisher
    /// permissions on the given Pub/Sub topic. Not having adequate permissions
    /// causes the calls that send notifications to fail
    /// (https://cloud.google.com/healthcare-api/docs/permissions-healthcare-api-gcp-products#
    /// dicom_fhir_and_hl7v2_store_cloud_pubsub_permissions). If a notification
    /// can't be published to Pub/Sub, errors are logged to Cloud Logging. For
    /// more information, see [Viewing error logs in Cloud
    /// Logging](https://cloud.google.com/healthcare-api/docs/how-tos/logging).
    pub pubsub_topic: Option<String>,

    /// Whether to send full FHIR resource to this Pub/Sub topic.
    pub send_full_resource: Option<bool>,

    /// Whether to send full FHIR resource to this Pub/Sub topic for deleting
    /// FHIR resource. Note that setting this to true does not guarantee that
    /// all previous resources will be sent in the format of full FHIR resource.
    /// When a resource change is too large or during heavy traffic, only the
    /// resource name will be sent. Clients should always check the
    /// "payloadType" label from a Pub/Sub message to determine whether it needs
    /// to fetch the full previous resource as a separate operation.
    pub send_previous_resource_on_delete: Option<bool>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl FhirNotificationConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [pubsub_topic][crate::model::FhirNotificationConfig::pubsub_topic].
    pub fn set_pubsub_topic<T: Into<String>>(mut self, v: T) -> Self {
        self.pubsub_topic = Some(v.into());
        self
    }

    /// Sets or clears the value of [pubsub_topic][crate::model::FhirNotificationConfig::pubsub_topic].
    pub fn set_or_clear_pubsub_topic<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.pubsub_topic = v.map(|x| x.into());
        self
    }

    /// Sets the value of [send_full_resource][crate::model::FhirNotificationConfig::send_full_resource].
    pub fn set_send_full_resource<T: Into<bool>>(mut self, v: T) -> Self {
        self.send_full_resource = Some(v.into());
        self
    }

    /// Sets or clears the value of [send_full_resource][crate::model::FhirNotificationConfig::send_full_resource].
    pub fn set_or_clear_send_full_resource<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.send_full_resource = v.map(|x| x.into());
        self
    }

    /// Sets the value of [send_previous_resource_on_delete][crate::model::FhirNotificationConfig::send_previous_resource_on_delete].
    pub fn set_send_previous_resource_on_delete<T: Into<bool>>(mut self, v: T) -> Self {
        self.send_previous_resource_on_delete = Some(v.into());
        self
    }

    /// Sets or clears the value of [send_previous_resource_on_delete][crate::model::FhirNotificationConfig::send_previous_resource_on_delete].
    pub fn set_or_clear_send_previous_resource_on_delete<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<bool>,
    {
        self.send_previous_resource_on_delete = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for FhirNotificationConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.FhirNotificationConfig"
    }
}

/// Represents a FHIR store.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FhirStore {
    /// Enable parsing of references within complex FHIR data types such as
    /// Extensions. If this value is set to ENABLED, then features like
    /// referential integrity and Bundle reference rewriting apply to all
    /// references. If this flag has not been specified the behavior of the FHIR
    /// store will not change, references in complex data types will not be
    /// parsed. New stores will have this value set to ENABLED after a
    /// notification period. Warning: turning on this flag causes processing
    /// existing resources to fail if they contain references to non-existent
    /// resources.
    pub complex_data_type_reference_parsing: Option<String>,

    /// If true, overrides the default search behavior for this FHIR store to `
    /// handling=strict` which returns an error for unrecognized search
    /// parameters. If false, uses the FHIR specification default
    /// `handling=lenient` which ignores unrecognized search parameters. The
    /// handling can always be changed from the default on an individual API
    /// call by setting the HTTP header `Prefer: handling= strict` or `Prefer:
    /// handling=lenient`.
    pub default_search_handling_strict: Option<bool>,

    /// Immutable. Whether to disable referential integrity in this FHIR store.
    /// This field is immutable after FHIR store creation. The default value is
    /// false, meaning that the API enforces referential integrity and fails the
    /// requests that result in inconsistent state in the FHIR store. When this
    /// field is set to true, the API skips referential integrity checks.
    /// Consequently, operations that rely on references, such as
    /// GetPatientEverything, do not return all the results if broken references
    /// exist.
    pub disable_referential_integrity: Option<bool>,

    /// Immutable. Whether to disable resource versioning for this FHIR store.
    /// This field can not be changed after the creation of FHIR store. If set
    /// to false, which is the default behavior, all write operations cause
    /// historical versions to be recorded automatically. The historical
    /// versions can be fetched through the history APIs, but cannot be updated.
    /// If set to true, no historical versions are kept. The server sends errors
    /// for attempts to read the historical versions.
    pub disable_resource_versioning: Option<bool>,

    /// Whether this FHIR store has the [updateCreate
    /// capability](https://www.hl7.org/fhir/capabilitystatement-definitions.html#CapabilityStatement.rest.resource.updateCreate).
    /// This determines if the client can use an Update operation to create a
    /// new resource with a client-specified ID. If false, all IDs are
    /// server-assigned through the Create operation and attempts to update a
    /// non-existent resource return errors. It is strongly advised not to
    /// include or encode any sensitive data such as patient identifiers in
    /// client-specified resource IDs. Those IDs are part of the FHIR resource
    /// path recorded in Cloud audit logs and Pub/Sub notifications. Those IDs
    /// can also be contained in reference fields within other resources.
    pub enable_update_create: Option<bool>,

    /// User-supplied key-value pairs used to organize FHIR stores. Label keys
    /// must be between 1 and 63 characters long, have a UTF-8 encoding of
    /// maximum 128 bytes, and must conform to the following PCRE regular
    /// expression: \p`Ll`\p`Lo``0,62` Label values are optional, must be
    /// between 1 and 63 characters long, have a UTF-8 encoding of maximum 128
    /// bytes, and must conform to the following PCRE regular expression:
    /// [\p`Ll`\p`Lo`\p`N`_-]`0,63` No more than 64 labels can be associated
    /// with a given store.
    pub labels: Option<std::collections::HashMap<String, String>>,

    /// Output only. Resource name of the FHIR store, of the form `projects/`
    /// project_id`/datasets/{dataset_id}/fhirStores/{fhir_store_id}`.
    pub name: Option<String>,

    /// Specifies where to send notifications upon changes to a data store.
    pub notification_config: Option<crate::model::NotificationConfig>,

    /// Specifies where and whether to send notifications upon changes to a FHIR
    /// store.
    pub notification_configs: Option<Vec<crate::model::FhirNotificationConfig>>,

    /// A list of streaming configs that configure the destinations of streaming
    /// export for every resource mutation in this FHIR store. Each store is
    /// allowed to have up to 10 streaming configs. After a new config is added,
    /// the next resource mutation is streamed to the new location in addition
    /// to the existing ones. When a location is removed from the list, the
    /// server stops streaming to that location. Before adding a new config, you
    /// must add the required [`
    /// bigquery.dataEditor`](https://cloud.google.com/bigquery/docs/access-control#
    /// bigquery.dataEditor) role to your project's **Cloud Healthcare Service
    /// Agent** [service
    /// account](https://cloud.google.com/iam/docs/service-accounts). Some lag
    /// (typically on the order of dozens of seconds) is expected before the
    /// results show up in the streaming destination.
    pub stream_configs: Option<Vec<crate::model::StreamConfig>>,

    /// Contains the configuration for FHIR profiles and validation.
    pub validation_config: Option<crate::model::ValidationConfig>,

    /// Immutable. The FHIR specification version that this FHIR store supports
    /// natively. This field is immutable after store creation. Requests are
    /// rejected if they contain FHIR resources of a different version. Version
    /// is required for every FHIR store.
    pub version: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl FhirStore {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [complex_data_type_reference_parsing][crate::model::FhirStore::complex_data_type_reference_parsing].
    pub fn set_complex_data_type_reference_parsing<T: Into<String>>(mut self, v: T) -> Self {
        self.complex_data_type_reference_parsing = Some(v.into());
        self
    }

    /// Sets or clears the value of [complex_data_type_reference_parsing][crate::model::FhirStore::complex_data_type_reference_parsing].
    pub fn set_or_clear_complex_data_type_reference_parsing<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<String>,
    {
        self.complex_data_type_reference_parsing = v.map(|x| x.into());
        self
    }

    /// Sets the value of [default_search_handling_strict][crate::model::FhirStore::default_search_handling_strict].
    pub fn set_default_search_handling_strict<T: Into<bool>>(mut self, v: T) -> Self {
        self.default_search_handling_strict = Some(v.into());
        self
    }

    /// Sets or clears the value of [default_search_handling_strict][crate::model::FhirStore::default_search_handling_strict].
    pub fn set_or_clear_default_search_handling_strict<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<bool>,
    {
        self.default_search_handling_strict = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disable_referential_integrity][crate::model::FhirStore::disable_referential_integrity].
    pub fn set_disable_referential_integrity<T: Into<bool>>(mut self, v: T) -> Self {
        self.disable_referential_integrity = Some(v.into());
        self
    }

    /// Sets or clears the value of [disable_referential_integrity][crate::model::FhirStore::disable_referential_integrity].
    pub fn set_or_clear_disable_referential_integrity<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<bool>,
    {
        self.disable_referential_integrity = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disable_resource_versioning][crate::model::FhirStore::disable_resource_versioning].
    pub fn set_disable_resource_versioning<T: Into<bool>>(mut self, v: T) -> Self {
        self.disable_resource_versioning = Some(v.into());
        self
    }

    /// Sets or clears the value of [disable_resource_versioning][crate::model::FhirStore::disable_resource_versioning].
    pub fn set_or_clear_disable_resource_versioning<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.disable_resource_versioning = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enable_update_create][crate::model::FhirStore::enable_update_create].
    pub fn set_enable_update_create<T: Into<bool>>(mut self, v: T) -> Self {
        self.enable_update_create = Some(v.into());
        self
    }

    /// Sets or clears the value of [enable_update_create][crate::model::FhirStore::enable_update_create].
    pub fn set_or_clear_enable_update_create<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.enable_update_create = v.map(|x| x.into());
        self
    }

    /// Sets the value of [labels][crate::model::FhirStore::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [name][crate::model::FhirStore::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::FhirStore::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [notification_config][crate::model::FhirStore::notification_config].
    pub fn set_notification_config<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::NotificationConfig>,
    {
        self.notification_config = Some(v.into());
        self
    }

    /// Sets or clears the value of [notification_config][crate::model::FhirStore::notification_config].
    pub fn set_or_clear_notification_config<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::NotificationConfig>,
    {
        self.notification_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [notification_configs][crate::model::FhirStore::notification_configs].
    pub fn set_notification_configs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::FhirNotificationConfig>,
    {
        self.notification_configs = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [stream_configs][crate::model::FhirStore::stream_configs].
    pub fn set_stream_configs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::StreamConfig>,
    {
        self.stream_configs = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [validation_config][crate::model::FhirStore::validation_config].
    pub fn set_validation_config<T: Into<crate::model::ValidationConfig>>(mut self, v: T) -> Self {
        self.validation_config = Some(v.into());
        self
    }

    /// Sets or clears the value of [validation_config][crate::model::FhirStore::validation_config].
    pub fn set_or_clear_validation_config<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::ValidationConfig>,
    {
        self.validation_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [version][crate::model::FhirStore::version].
    pub fn set_version<T: Into<String>>(mut self, v: T) -> Self {
        self.version = Some(v.into());
        self
    }

    /// Sets or clears the value of [version][crate::model::FhirStore::version].
    pub fn set_or_clear_version<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.version = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for FhirStore {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.FhirStore"
    }
}

/// Count of resources and total storage size by type for a given FHIR store.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FhirStoreMetric {
    /// The total count of FHIR resources in the store of this resource type.
    #[serde_as(as = "Option<apicore::internal::I64>")]
    pub count: Option<i64>,

    /// The FHIR resource type this metric applies to.
    pub resource_type: Option<String>,

    /// The total amount of structured storage used by FHIR resources of this
    /// resource type in the store.
    #[serde_as(as = "Option<apicore::internal::I64>")]
    pub structured_storage_size_bytes: Option<i64>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl FhirStoreMetric {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [count][crate::model::FhirStoreMetric::count].
    pub fn set_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.count = Some(v.into());
        self
    }

    /// Sets or clears the value of [count][crate::model::FhirStoreMetric::count].
    pub fn set_or_clear_count<T: Into<i64>>(mut self, v: Option<T>) -> Self {
        self.count = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_type][crate::model::FhirStoreMetric::resource_type].
    pub fn set_resource_type<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_type][crate::model::FhirStoreMetric::resource_type].
    pub fn set_or_clear_resource_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.resource_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [structured_storage_size_bytes][crate::model::FhirStoreMetric::structured_storage_size_bytes].
    pub fn set_structured_storage_size_bytes<T: Into<i64>>(mut self, v: T) -> Self {
        self.structured_storage_size_bytes = Some(v.into());
        self
    }

    /// Sets or clears the value of [structured_storage_size_bytes][crate::model::FhirStoreMetric::structured_storage_size_bytes].
    pub fn set_or_clear_structured_storage_size_bytes<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<i64>,
    {
        self.structured_storage_size_bytes = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for FhirStoreMetric {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.FhirStoreMetric"
    }
}

/// List of metrics for a given FHIR store.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FhirStoreMetrics {
    /// List of FhirStoreMetric by resource type.
    pub metrics: Option<Vec<crate::model::FhirStoreMetric>>,

    /// The resource name of the FHIR store to get metrics for, in the format `
    /// projects/{project_id}/datasets/{dataset_id}/fhirStores/{fhir_store_id}`.
    pub name: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl FhirStoreMetrics {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [metrics][crate::model::FhirStoreMetrics::metrics].
    pub fn set_metrics<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::FhirStoreMetric>,
    {
        self.metrics = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [name][crate::model::FhirStoreMetrics::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::FhirStoreMetrics::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for FhirStoreMetrics {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.FhirStoreMetrics"
    }
}

/// A (sub) field of a type.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Field {
    /// The maximum number of times this field can be repeated. 0 or -1 means
    /// unbounded.
    pub max_occurs: Option<i32>,

    /// The minimum number of times this field must be present/repeated.
    pub min_occurs: Option<i32>,

    /// The name of the field. For example, "PID-1" or just "1".
    pub name: Option<String>,

    /// The HL7v2 table this field refers to. For example, PID-15 (Patient's
    /// Primary Language) usually refers to table "0296".
    pub table: Option<String>,

    /// The type of this field. A Type with this name must be defined in an
    /// Hl7TypesConfig.
    pub r#type: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Field {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [max_occurs][crate::model::Field::max_occurs].
    pub fn set_max_occurs<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_occurs = Some(v.into());
        self
    }

    /// Sets or clears the value of [max_occurs][crate::model::Field::max_occurs].
    pub fn set_or_clear_max_occurs<T: Into<i32>>(mut self, v: Option<T>) -> Self {
        self.max_occurs = v.map(|x| x.into());
        self
    }

    /// Sets the value of [min_occurs][crate::model::Field::min_occurs].
    pub fn set_min_occurs<T: Into<i32>>(mut self, v: T) -> Self {
        self.min_occurs = Some(v.into());
        self
    }

    /// Sets or clears the value of [min_occurs][crate::model::Field::min_occurs].
    pub fn set_or_clear_min_occurs<T: Into<i32>>(mut self, v: Option<T>) -> Self {
        self.min_occurs = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::Field::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::Field::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [table][crate::model::Field::table].
    pub fn set_table<T: Into<String>>(mut self, v: T) -> Self {
        self.table = Some(v.into());
        self
    }

    /// Sets or clears the value of [table][crate::model::Field::table].
    pub fn set_or_clear_table<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.table = v.map(|x| x.into());
        self
    }

    /// Sets the value of [type][crate::model::Field::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets or clears the value of [type][crate::model::Field::r#type].
    pub fn set_or_clear_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.r#type = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for Field {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.Field"
    }
}

/// Specifies FHIR paths to match, and how to handle de-identification of
/// matching fields.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FieldMetadata {
    /// Deidentify action for one field.
    pub action: Option<String>,

    /// List of paths to FHIR fields to be redacted. Each path is a
    /// period-separated list where each component is either a field name or
    /// FHIR type name, for example: Patient, HumanName. For "choice" types
    /// (those defined in the FHIR spec with the form: field[x]) we use two
    /// separate components. For example, " deceasedAge.unit" is matched by
    /// "Deceased.Age.unit". Supported types are: AdministrativeGenderCode,
    /// Base64Binary, Boolean, Code, Date, DateTime, Decimal, HumanName, Id,
    /// Instant, Integer, LanguageCode, Markdown, Oid, PositiveInt, String,
    /// UnsignedInt, Uri, Uuid, Xhtml.
    pub paths: Option<Vec<String>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl FieldMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [action][crate::model::FieldMetadata::action].
    pub fn set_action<T: Into<String>>(mut self, v: T) -> Self {
        self.action = Some(v.into());
        self
    }

    /// Sets or clears the value of [action][crate::model::FieldMetadata::action].
    pub fn set_or_clear_action<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.action = v.map(|x| x.into());
        self
    }

    /// Sets the value of [paths][crate::model::FieldMetadata::paths].
    pub fn set_paths<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.paths = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for FieldMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.FieldMetadata"
    }
}

/// The Cloud Storage output destination. The Cloud Healthcare Service Agent
/// requires the `roles/storage.objectAdmin` Cloud IAM roles on the Cloud
/// Storage location.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GcsDestination {
    /// The format of the exported HL7v2 message files.
    pub content_structure: Option<String>,

    /// Specifies the parts of the Message resource to include in the export. If
    /// not specified, FULL is used.
    pub message_view: Option<String>,

    /// URI of an existing Cloud Storage directory where the server writes
    /// result files, in the format
    /// `gs://{bucket-id}/`path/to/destination/dir``. If there is no trailing
    /// slash, the service appends one when composing the object path.
    pub uri_prefix: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl GcsDestination {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [content_structure][crate::model::GcsDestination::content_structure].
    pub fn set_content_structure<T: Into<String>>(mut self, v: T) -> Self {
        self.content_structure = Some(v.into());
        self
    }

    /// Sets or clears the value of [content_structure][crate::model::GcsDestination::content_structure].
    pub fn set_or_clear_content_structure<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.content_structure = v.map(|x| x.into());
        self
    }

    /// Sets the value of [message_view][crate::model::GcsDestination::message_view].
    pub fn set_message_view<T: Into<String>>(mut self, v: T) -> Self {
        self.message_view = Some(v.into());
        self
    }

    /// Sets or clears the value of [message_view][crate::model::GcsDestination::message_view].
    pub fn set_or_clear_message_view<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.message_view = v.map(|x| x.into());
        self
    }

    /// Sets the value of [uri_prefix][crate::model::GcsDestination::uri_prefix].
    pub fn set_uri_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.uri_prefix = Some(v.into());
        self
    }

    /// Sets or clears the value of [uri_prefix][crate::model::GcsDestination::uri_prefix].
    pub fn set_or_clear_uri_prefix<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.uri_prefix = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for GcsDestination {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.GcsDestination"
    }
}

/// Specifies the configuration for importing data from Cloud Storage.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GcsSource {
    /// Points to a Cloud Storage URI containing file(s) to import. The URI must
    /// be in the following format: `gs://{bucket_id}/{object_id}`. The URI can
    /// include wildcards in `object_id` and thus identify multiple files.
    /// Supported wildcards: * `*` to match 0 or more non-separator characters *
    /// `**` to match 0 or more characters (including separators). Must be used
    /// at the end of a path and with no other wildcards in the path. Can also
    /// be used with a file extension (such as .ndjson), which imports all files
    /// with the extension in the specified directory and its sub-directories.
    /// For example, `gs://my-bucket/my-directory/** .ndjson` imports all files
    /// with `.ndjson` extensions in `my-directory/` and its sub-directories. *
    /// `?` to match 1 character Files matching the wildcard are expected to
    /// contain content only, no metadata.
    pub uri: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl GcsSource {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [uri][crate::model::GcsSource::uri].
    pub fn set_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.uri = Some(v.into());
        self
    }

    /// Sets or clears the value of [uri][crate::model::GcsSource::uri].
    pub fn set_or_clear_uri<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.uri = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for GcsSource {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.GcsSource"
    }
}

/// The Cloud Storage location for export.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GoogleCloudHealthcareV1ConsentGcsDestination {
    /// URI for a Cloud Storage directory where the server writes result files,
    /// in the format `gs://{bucket-id}/`path/to/destination/dir``. If there is
    /// no trailing slash, the service appends one when composing the object
    /// path. The user is responsible for creating the Cloud Storage bucket and
    /// directory referenced in ` uri_prefix`.
    pub uri_prefix: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl GoogleCloudHealthcareV1ConsentGcsDestination {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [uri_prefix][crate::model::GoogleCloudHealthcareV1ConsentGcsDestination::uri_prefix].
    pub fn set_uri_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.uri_prefix = Some(v.into());
        self
    }

    /// Sets or clears the value of [uri_prefix][crate::model::GoogleCloudHealthcareV1ConsentGcsDestination::uri_prefix].
    pub fn set_or_clear_uri_prefix<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.uri_prefix = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for GoogleCloudHealthcareV1ConsentGcsDestination {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.GoogleCloudHealthcareV1ConsentGcsDestination"
    }
}

/// Represents a user's consent in terms of the resources that can be accessed
/// and under what conditions.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GoogleCloudHealthcareV1ConsentPolicy {
    /// Represents a textual expression in the Common Expression Language (CEL)
    /// syntax. CEL is a C-like expression language. The syntax and semantics of
    /// CEL are documented at https://github.com/google/cel-spec. Example
    /// (Comparison): title: "Summary size limit" description: "Determines if a
    /// summary is less than 100 chars" expression: "document.summary.size() <
    /// 100" Example (Equality): title: " Requestor is owner" description:
    /// "Determines if requestor is the document owner" expression:
    /// "document.owner == request.auth.claims.email" Example ( Logic): title:
    /// "Public documents" description: "Determine whether the document should
    /// be publicly visible" expression: "document.type != 'private' &&
    /// document.type != 'internal'" Example (Data Manipulation): title:
    /// "Notification string" description: "Create a notification string with a
    /// timestamp." expression: "'New message received at ' +
    /// string(document.create_time)" The exact variables and functions that may
    /// be referenced within an expression are determined by the service that
    /// evaluates it. See the service documentation for additional information.
    pub authorization_rule: Option<crate::model::Expr>,

    /// The resources that this policy applies to. A resource is a match if it
    /// matches all the attributes listed here. If empty, this policy applies to
    /// all User data mappings for the given user.
    pub resource_attributes: Option<Vec<crate::model::Attribute>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl GoogleCloudHealthcareV1ConsentPolicy {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [authorization_rule][crate::model::GoogleCloudHealthcareV1ConsentPolicy::authorization_rule].
    pub fn set_authorization_rule<T: Into<crate::model::Expr>>(mut self, v: T) -> Self {
        self.authorization_rule = Some(v.into());
        self
    }

    /// Sets or clears the value of [authorization_rule][crate::model::GoogleCloudHealthcareV1ConsentPolicy::authorization_rule].
    pub fn set_or_clear_authorization_rule<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::Expr>,
    {
        self.authorization_rule = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_attributes][crate::model::GoogleCloudHealthcareV1ConsentPolicy::resource_attributes].
    pub fn set_resource_attributes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Attribute>,
    {
        self.resource_attributes = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for GoogleCloudHealthcareV1ConsentPolicy {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.GoogleCloudHealthcareV1ConsentPolicy"
    }
}

/// Contains a summary of the DeidentifyDicomStore operation.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GoogleCloudHealthcareV1DeidentifyDeidentifyDicomStoreSummary {
    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl GoogleCloudHealthcareV1DeidentifyDeidentifyDicomStoreSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

impl apicore::message::Message for GoogleCloudHealthcareV1DeidentifyDeidentifyDicomStoreSummary {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.GoogleCloudHealthcareV1DeidentifyDeidentifyDicomStoreSummary"
    }
}

/// Contains a summary of the DeidentifyFhirStore operation.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GoogleCloudHealthcareV1DeidentifyDeidentifyFhirStoreSummary {
    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl GoogleCloudHealthcareV1DeidentifyDeidentifyFhirStoreSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

impl apicore::message::Message for GoogleCloudHealthcareV1DeidentifyDeidentifyFhirStoreSummary {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.GoogleCloudHealthcareV1DeidentifyDeidentifyFhirStoreSummary"
    }
}

/// The BigQuery table where the server writes the output.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GoogleCloudHealthcareV1DicomBigQueryDestination {
    /// Use `write_disposition` instead. If `write_disposition` is specified,
    /// this parameter is ignored. force=false is equivalent to
    /// write_disposition= WRITE_EMPTY and force=true is equivalent to
    /// write_disposition=WRITE_TRUNCATE.
    pub force: Option<bool>,

    /// BigQuery URI to a table, up to 2000 characters long, in the format
    /// `bq://projectId.bqDatasetId.tableId`
    pub table_uri: Option<String>,

    /// Determines whether the existing table in the destination is to be
    /// overwritten or appended to. If a write_disposition is specified, the
    /// `force` parameter is ignored.
    pub write_disposition: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl GoogleCloudHealthcareV1DicomBigQueryDestination {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [force][crate::model::GoogleCloudHealthcareV1DicomBigQueryDestination::force].
    pub fn set_force<T: Into<bool>>(mut self, v: T) -> Self {
        self.force = Some(v.into());
        self
    }

    /// Sets or clears the value of [force][crate::model::GoogleCloudHealthcareV1DicomBigQueryDestination::force].
    pub fn set_or_clear_force<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.force = v.map(|x| x.into());
        self
    }

    /// Sets the value of [table_uri][crate::model::GoogleCloudHealthcareV1DicomBigQueryDestination::table_uri].
    pub fn set_table_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.table_uri = Some(v.into());
        self
    }

    /// Sets or clears the value of [table_uri][crate::model::GoogleCloudHealthcareV1DicomBigQueryDestination::table_uri].
    pub fn set_or_clear_table_uri<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.table_uri = v.map(|x| x.into());
        self
    }

    /// Sets the value of [write_disposition][crate::model::GoogleCloudHealthcareV1DicomBigQueryDestination::write_disposition].
    pub fn set_write_disposition<T: Into<String>>(mut self, v: T) -> Self {
        self.write_disposition = Some(v.into());
        self
    }

    /// Sets or clears the value of [write_disposition][crate::model::GoogleCloudHealthcareV1DicomBigQueryDestination::write_disposition].
    pub fn set_or_clear_write_disposition<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.write_disposition = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for GoogleCloudHealthcareV1DicomBigQueryDestination {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.GoogleCloudHealthcareV1DicomBigQueryDestination"
    }
}

/// The Cloud Storage location where the server writes the output and the export
/// configuration.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GoogleCloudHealthcareV1DicomGcsDestination {
    /// MIME types supported by DICOM spec. Each file is written in the
    /// following format:
    /// `.../{study_id}/{series_id}/{instance_id}[/{frame_number}].`extension``
    /// The frame_number component exists only for multi-frame instances.
    /// Supported MIME types are consistent with supported formats in DICOMweb:
    /// https://cloud.google.com/healthcare/docs/dicom#retrieve_transaction.
    /// Specifically, the following are supported: - application/dicom;
    /// transfer-syntax=1.2.840.10008.1. 2.1 (uncompressed DICOM) -
    /// application/dicom; transfer-syntax=1.2.840.10008.1. 2.4.50 (DICOM with
    /// embedded JPEG Baseline) - application/dicom;
    /// transfer-syntax=1.2.840.10008.1.2.4.90 (DICOM with embedded JPEG 2000
    /// Lossless Only) -application/dicom;
    /// transfer-syntax=1.2.840.10008.1.2.4.91 (DICOM with embedded JPEG 2000) -
    /// application/dicom; transfer-syntax=* (DICOM with no transcoding)
    /// -application/octet-stream; transfer-syntax=1.2.840.10008.1.2.1 (raw
    /// uncompressed PixelData) - application/octet-stream; transfer-syntax=*
    /// (raw PixelData in whatever format it was uploaded in) - image/jpeg;
    /// transfer-syntax= 1.2.840.10008.1.2.4.50 (Consumer JPEG) - image/png The
    /// following extensions are used for output files: - application/dicom ->
    /// .dcm - image/jpeg -> .jpg -image/png -> .png - application/octet-stream
    /// -> no extension If unspecified, the instances are exported in the
    /// original DICOM format they were uploaded in.
    pub mime_type: Option<String>,

    /// The Cloud Storage destination to export to. URI for a Cloud Storage
    /// directory where the server writes the result files, in the format
    /// `gs://{bucket-id}/` path/to/destination/dir``). If there is no trailing
    /// slash, the service appends one when composing the object path. The user
    /// is responsible for creating the Cloud Storage bucket referenced in
    /// `uri_prefix`.
    pub uri_prefix: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl GoogleCloudHealthcareV1DicomGcsDestination {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [mime_type][crate::model::GoogleCloudHealthcareV1DicomGcsDestination::mime_type].
    pub fn set_mime_type<T: Into<String>>(mut self, v: T) -> Self {
        self.mime_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [mime_type][crate::model::GoogleCloudHealthcareV1DicomGcsDestination::mime_type].
    pub fn set_or_clear_mime_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.mime_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [uri_prefix][crate::model::GoogleCloudHealthcareV1DicomGcsDestination::uri_prefix].
    pub fn set_uri_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.uri_prefix = Some(v.into());
        self
    }

    /// Sets or clears the value of [uri_prefix][crate::model::GoogleCloudHealthcareV1DicomGcsDestination::uri_prefix].
    pub fn set_or_clear_uri_prefix<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.uri_prefix = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for GoogleCloudHealthcareV1DicomGcsDestination {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.GoogleCloudHealthcareV1DicomGcsDestination"
    }
}

/// Specifies the configuration for importing data from Cloud Storage.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GoogleCloudHealthcareV1DicomGcsSource {
    /// Points to a Cloud Storage URI containing file(s) with content only. The
    /// URI must be in the following format: `gs://{bucket_id}/{object_id}`. The
    /// URI can include wildcards in `object_id` and thus identify multiple
    /// files. Supported wildcards: * '*' to match 0 or more non-separator
    /// characters * '**' to match 0 or more characters (including separators).
    /// Must be used at the end of a path and with no other wildcards in the
    /// path. Can also be used with a file extension (such as .dcm), which
    /// imports all files with the extension in the specified directory and its
    /// sub-directories. For example, `gs://my-bucket/my-directory/**.dcm`
    /// imports all files with .dcm extensions in `my-directory/` and its
    /// sub-directories. * '?' to match 1 character. All other URI formats are
    /// invalid. Files matching the wildcard are expected to contain content
    /// only, no metadata.
    pub uri: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl GoogleCloudHealthcareV1DicomGcsSource {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [uri][crate::model::GoogleCloudHealthcareV1DicomGcsSource::uri].
    pub fn set_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.uri = Some(v.into());
        self
    }

    /// Sets or clears the value of [uri][crate::model::GoogleCloudHealthcareV1DicomGcsSource::uri].
    pub fn set_or_clear_uri<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.uri = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for GoogleCloudHealthcareV1DicomGcsSource {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.GoogleCloudHealthcareV1DicomGcsSource"
    }
}

/// StreamConfig specifies configuration for a streaming DICOM export.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GoogleCloudHealthcareV1DicomStreamConfig {
    /// The BigQuery table where the server writes the output.
    pub bigquery_destination: Option<crate::model::GoogleCloudHealthcareV1DicomBigQueryDestination>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl GoogleCloudHealthcareV1DicomStreamConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bigquery_destination][crate::model::GoogleCloudHealthcareV1DicomStreamConfig::bigquery_destination].
    pub fn set_bigquery_destination<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::GoogleCloudHealthcareV1DicomBigQueryDestination>,
    {
        self.bigquery_destination = Some(v.into());
        self
    }

    /// Sets or clears the value of [bigquery_destination][crate::model::GoogleCloudHealthcareV1DicomStreamConfig::bigquery_destination].
    pub fn set_or_clear_bigquery_destination<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::GoogleCloudHealthcareV1DicomBigQueryDestination>,
    {
        self.bigquery_destination = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for GoogleCloudHealthcareV1DicomStreamConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.GoogleCloudHealthcareV1DicomStreamConfig"
    }
}

/// The configuration for exporting to BigQuery.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GoogleCloudHealthcareV1FhirBigQueryDestination {
    /// BigQuery URI to an existing dataset, up to 2000 characters long, in the
    /// format `bq://projectId.bqDatasetId`.
    pub dataset_uri: Option<String>,

    /// If this flag is `TRUE`, all tables are deleted from the dataset before
    /// the new exported tables are written. If the flag is not set and the
    /// destination dataset contains tables, the export call returns an error.
    /// If ` write_disposition` is specified, this parameter is ignored.
    /// force=false is equivalent to write_disposition=WRITE_EMPTY and
    /// force=true is equivalent to write_disposition=WRITE_TRUNCATE.
    pub force: Option<bool>,

    /// Configuration for the FHIR BigQuery schema. Determines how the server
    /// generates the schema.
    pub schema_config: Option<crate::model::SchemaConfig>,

    /// Determines if existing data in the destination dataset is overwritten,
    /// appended to, or not written if the tables contain data. If a
    /// write_disposition is specified, the `force` parameter is ignored.
    pub write_disposition: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl GoogleCloudHealthcareV1FhirBigQueryDestination {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [dataset_uri][crate::model::GoogleCloudHealthcareV1FhirBigQueryDestination::dataset_uri].
    pub fn set_dataset_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.dataset_uri = Some(v.into());
        self
    }

    /// Sets or clears the value of [dataset_uri][crate::model::GoogleCloudHealthcareV1FhirBigQueryDestination::dataset_uri].
    pub fn set_or_clear_dataset_uri<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.dataset_uri = v.map(|x| x.into());
        self
    }

    /// Sets the value of [force][crate::model::GoogleCloudHealthcareV1FhirBigQueryDestination::force].
    pub fn set_force<T: Into<bool>>(mut self, v: T) -> Self {
        self.force = Some(v.into());
        self
    }

    /// Sets or clears the value of [force][crate::model::GoogleCloudHealthcareV1FhirBigQueryDestination::force].
    pub fn set_or_clear_force<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.force = v.map(|x| x.into());
        self
    }

    /// Sets the value of [schema_config][crate::model::GoogleCloudHealthcareV1FhirBigQueryDestination::schema_config].
    pub fn set_schema_config<T: Into<crate::model::SchemaConfig>>(mut self, v: T) -> Self {
        self.schema_config = Some(v.into());
        self
    }

    /// Sets or clears the value of [schema_config][crate::model::GoogleCloudHealthcareV1FhirBigQueryDestination::schema_config].
    pub fn set_or_clear_schema_config<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::SchemaConfig>,
    {
        self.schema_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [write_disposition][crate::model::GoogleCloudHealthcareV1FhirBigQueryDestination::write_disposition].
    pub fn set_write_disposition<T: Into<String>>(mut self, v: T) -> Self {
        self.write_disposition = Some(v.into());
        self
    }

    /// Sets or clears the value of [write_disposition][crate::model::GoogleCloudHealthcareV1FhirBigQueryDestination::write_disposition].
    pub fn set_or_clear_write_disposition<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.write_disposition = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for GoogleCloudHealthcareV1FhirBigQueryDestination {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.GoogleCloudHealthcareV1FhirBigQueryDestination"
    }
}

/// The configuration for exporting to Cloud Storage.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GoogleCloudHealthcareV1FhirGcsDestination {
    /// URI for a Cloud Storage directory where result files should be written,
    /// in the format of `gs://{bucket-id}/`path/to/destination/dir``. If there
    /// is no trailing slash, the service appends one when composing the object
    /// path. The user is responsible for creating the Cloud Storage bucket
    /// referenced in ` uri_prefix`.
    pub uri_prefix: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl GoogleCloudHealthcareV1FhirGcsDestination {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [uri_prefix][crate::model::GoogleCloudHealthcareV1FhirGcsDestination::uri_prefix].
    pub fn set_uri_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.uri_prefix = Some(v.into());
        self
    }

    /// Sets or clears the value of [uri_prefix][crate::model::GoogleCloudHealthcareV1FhirGcsDestination::uri_prefix].
    pub fn set_or_clear_uri_prefix<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.uri_prefix = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for GoogleCloudHealthcareV1FhirGcsDestination {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.GoogleCloudHealthcareV1FhirGcsDestination"
    }
}

/// Specifies the configuration for importing data from Cloud Storage.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GoogleCloudHealthcareV1FhirGcsSource {
    /// Points to a Cloud Storage URI containing file(s) to import. The URI must
    /// be in the following format: `gs://{bucket_id}/{object_id}`. The URI can
    /// include wildcards in `object_id` and thus identify multiple files.
    /// Supported wildcards: * `*` to match 0 or more non-separator characters *
    /// `**` to match 0 or more characters (including separators). Must be used
    /// at the end of a path and with no other wildcards in the path. Can also
    /// be used with a file extension (such as .ndjson), which imports all files
    /// with the extension in the specified directory and its sub-directories.
    /// For example, `gs://my-bucket/my-directory/** .ndjson` imports all files
    /// with `.ndjson` extensions in `my-directory/` and its sub-directories. *
    /// `?` to match 1 character Files matching the wildcard are expected to
    /// contain content only, no metadata.
    pub uri: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl GoogleCloudHealthcareV1FhirGcsSource {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [uri][crate::model::GoogleCloudHealthcareV1FhirGcsSource::uri].
    pub fn set_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.uri = Some(v.into());
        self
    }

    /// Sets or clears the value of [uri][crate::model::GoogleCloudHealthcareV1FhirGcsSource::uri].
    pub fn set_or_clear_uri<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.uri = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for GoogleCloudHealthcareV1FhirGcsSource {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.GoogleCloudHealthcareV1FhirGcsSource"
    }
}

/// Construct representing a logical group or a segment.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GroupOrSegment {
    /// An HL7v2 logical group construct.
    pub group: Option<crate::model::SchemaGroup>,

    /// An HL7v2 Segment.
    pub segment: Option<crate::model::SchemaSegment>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl GroupOrSegment {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [group][crate::model::GroupOrSegment::group].
    pub fn set_group<T: Into<crate::model::SchemaGroup>>(mut self, v: T) -> Self {
        self.group = Some(v.into());
        self
    }

    /// Sets or clears the value of [group][crate::model::GroupOrSegment::group].
    pub fn set_or_clear_group<T: Into<crate::model::SchemaGroup>>(mut self, v: Option<T>) -> Self {
        self.group = v.map(|x| x.into());
        self
    }

    /// Sets the value of [segment][crate::model::GroupOrSegment::segment].
    pub fn set_segment<T: Into<crate::model::SchemaSegment>>(mut self, v: T) -> Self {
        self.segment = Some(v.into());
        self
    }

    /// Sets or clears the value of [segment][crate::model::GroupOrSegment::segment].
    pub fn set_or_clear_segment<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::SchemaSegment>,
    {
        self.segment = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for GroupOrSegment {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.GroupOrSegment"
    }
}

/// Root config message for HL7v2 schema. This contains a schema structure of
/// groups and segments, and filters that determine which messages to apply the
/// schema structure to.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Hl7SchemaConfig {
    /// Map from each HL7v2 message type and trigger event pair, such as
    /// ADT_A04, to its schema configuration root group.
    pub message_schema_configs:
        Option<std::collections::HashMap<String, crate::model::SchemaGroup>>,

    /// Each VersionSource is tested and only if they all match is the schema
    /// used for the message.
    pub version: Option<Vec<crate::model::VersionSource>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Hl7SchemaConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [message_schema_configs][crate::model::Hl7SchemaConfig::message_schema_configs].
    pub fn set_message_schema_configs<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<crate::model::SchemaGroup>,
    {
        self.message_schema_configs = Some(
            v.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Sets the value of [version][crate::model::Hl7SchemaConfig::version].
    pub fn set_version<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::VersionSource>,
    {
        self.version = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for Hl7SchemaConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.Hl7SchemaConfig"
    }
}

/// Root config for HL7v2 datatype definitions for a specific HL7v2 version.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Hl7TypesConfig {
    /// The HL7v2 type definitions.
    pub r#type: Option<Vec<crate::model::Type>>,

    /// The version selectors that this config applies to. A message must match
    /// ALL version sources to apply.
    pub version: Option<Vec<crate::model::VersionSource>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Hl7TypesConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [type][crate::model::Hl7TypesConfig::r#type].
    pub fn set_type<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Type>,
    {
        self.r#type = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [version][crate::model::Hl7TypesConfig::version].
    pub fn set_version<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::VersionSource>,
    {
        self.version = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for Hl7TypesConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.Hl7TypesConfig"
    }
}

/// Specifies where and whether to send notifications upon changes to a data
/// store.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Hl7V2NotificationConfig {
    /// Restricts notifications sent for messages matching a filter. If this is
    /// empty, all messages are matched. The following syntax is available: * A
    /// string field value can be written as text inside quotation marks, for
    /// example `"query text"` . The only valid relational operation for text
    /// fields is equality (`=`), where text is searched within the field,
    /// rather than having the field be equal to the text. For example,
    /// `"Comment = great"` returns messages with `great` in the comment field.
    /// * A number field value can be written as an integer, a decimal, or an
    /// exponential. The valid relational operators for number fields are the
    /// equality operator (`=`), along with the less than/greater than operators
    /// (`<`, `<=`, `>`, `>=`). Note that there is no inequality (`!=`)
    /// operator. You can prepend the `NOT` operator to an expression to negate
    /// it. * A date field value must be written in `yyyy-mm-dd` form. Fields
    /// with date and time use the RFC3339 time format. Leading zeros are
    /// required for one-digit months and days. The valid relational operators
    /// for date fields are the equality operator (`=`) , along with the less
    /// than/greater than operators (`<`, `<=`, `>`, `>=`). Note that there is
    /// no inequality (`!=`) operator. You can prepend the `NOT` operator to an
    /// expression to negate it. * Multiple field query expressions can be
    /// combined in one query by adding `AND` or `OR` operators between the
    /// expressions. If a boolean operator appears within a quoted string, it is
    /// not treated as special, it's just another part of the character string
    /// to be matched. You can prepend the `NOT` operator to an expression to
    /// negate it. The following fields and functions are available for
    /// filtering: * `message_type`, from the MSH-9.1 field. For example, `NOT
    /// message_type = "ADT"`. * `send_date` or `sendDate`, the YYYY-MM-DD date
    /// the message was sent in the dataset's time_zone, from the MSH-7 segment.
    /// For example, `send_date < "2017-01-02"`. * `send_time`, the timestamp
    /// when the message was sent, using the RFC3339 time format for
    /// comparisons, from the MSH-7 segment. For example, `send_time <
    /// "2017-01-02T00:00:00-05:00"`. * ` create_time`, the timestamp when the
    /// message was created in the HL7v2 store. Use the RFC3339 time format for
    /// comparisons. For example, `create_time < "2017-01-02T00:00:00-05:00"`. *
    /// `send_facility`, the care center that the message came from, from the
    /// MSH-4 segment. For example, `send_facility = "ABC"`. * `
    /// PatientId(value, type)`, which matches if the message lists a patient
    /// having an ID of the given value and type in the PID-2, PID-3, or PID-4
    /// segments. For example, `PatientId("123456", "MRN")`. * `labels.x`, a
    /// string value of the label with key `x` as set using the Message.labels
    /// map. For example, `labels." priority"="high"`. The operator `:*` can be
    /// used to assert the existence of a label. For example,
    /// `labels."priority":*`.
    pub filter: Option<String>,

    /// The [Pub/Sub](https://cloud.google.com/pubsub/docs/) topic that
    /// notifications of changes are published on. Supplied by the client. The
    /// notification is a ` PubsubMessage` with the following fields: *
    /// `PubsubMessage.Data` contains the resource name. *
    /// `PubsubMessage.MessageId` is the ID of this notification. It' s
    /// guaranteed to be unique within the topic. * `PubsubMessage.PublishTime`
    /// is the time when the message was published. Note that notifications are
    /// only sent if the topic is non-empty. [Topic
    /// names](https://cloud.google.com/pubsub/docs/overview#names) must be
    /// scoped to a project. The Cloud Healthcare API service account,
    /// service-PROJECT_NUMBER@gcp-sa-healthcare.iam.gserviceaccount.com, must
    /// have publisher permissions on the given Pub/Sub topic. Not having
    /// adequate permissions causes the calls that send notifications to fail.
    /// If a notification cannot be published to Pub/Sub, errors are logged to
    /// Cloud Logging. For more information, see [Viewing error logs in Cloud
    /// Logging](https: //cloud.google.com/healthcare/docs/how-tos/logging)).
    pub pubsub_topic: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Hl7V2NotificationConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [filter][crate::model::Hl7V2NotificationConfig::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = Some(v.into());
        self
    }

    /// Sets or clears the value of [filter][crate::model::Hl7V2NotificationConfig::filter].
    pub fn set_or_clear_filter<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.filter = v.map(|x| x.into());
        self
    }

    /// Sets the value of [pubsub_topic][crate::model::Hl7V2NotificationConfig::pubsub_topic].
    pub fn set_pubsub_topic<T: Into<String>>(mut self, v: T) -> Self {
        self.pubsub_topic = Some(v.into());
        self
    }

    /// Sets or clears the value of [pubsub_topic][crate::model::Hl7V2NotificationConfig::pubsub_topic].
    pub fn set_or_clear_pubsub_topic<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.pubsub_topic = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for Hl7V2NotificationConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.Hl7V2NotificationConfig"
    }
}

/// Represents an HL7v2 store.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Hl7V2Store {
    /// User-supplied key-value pairs used to organize HL7v2 stores. Label keys
    /// must be between 1 and 63 characters long, have a UTF-8 encoding of
    /// maximum 128 bytes, and must conform to the following PCRE regular
    /// expression: \p`Ll`\p`Lo`` 0,62` Label values are optional, must be
    /// between 1 and 63 characters long, have a UTF-8 encoding of maximum 128
    /// bytes, and must conform to the following PCRE regular expression:
    /// [\p`Ll`\p`Lo`\p`N`_-]`0,63` No more than 64 labels can be associated
    /// with a given store.
    pub labels: Option<std::collections::HashMap<String, String>>,

    /// Resource name of the HL7v2 store, of the form
    /// `projects/{project_id}/locations/{location_id}/datasets/{dataset_id}/hl7V2Stores/{hl7v2_store_id}`.
    pub name: Option<String>,

    /// A list of notification configs. Each configuration uses a filter to
    /// determine whether to publish a message (both Ingest & Create) on the
    /// corresponding notification destination. Only the message name is sent as
    /// part of the notification. Supplied by the client.
    pub notification_configs: Option<Vec<crate::model::Hl7V2NotificationConfig>>,

    /// The configuration for the parser. It determines how the server parses
    /// the messages.
    pub parser_config: Option<crate::model::ParserConfig>,

    /// Determines whether to reject duplicate messages. A duplicate message is
    /// a message with the same raw bytes as a message that has already been
    /// ingested/created in this HL7v2 store. The default value is false,
    /// meaning that the store accepts the duplicate messages and it also
    /// returns the same ACK message in the IngestMessageResponse as has been
    /// returned previously. Note that only one resource is created in the
    /// store. When this field is set to true, CreateMessage/IngestMessage
    /// requests with a duplicate message will be rejected by the store, and
    /// IngestMessageErrorDetail returns a NACK message upon rejection.
    pub reject_duplicate_message: Option<bool>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Hl7V2Store {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [labels][crate::model::Hl7V2Store::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [name][crate::model::Hl7V2Store::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::Hl7V2Store::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [notification_configs][crate::model::Hl7V2Store::notification_configs].
    pub fn set_notification_configs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Hl7V2NotificationConfig>,
    {
        self.notification_configs = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [parser_config][crate::model::Hl7V2Store::parser_config].
    pub fn set_parser_config<T: Into<crate::model::ParserConfig>>(mut self, v: T) -> Self {
        self.parser_config = Some(v.into());
        self
    }

    /// Sets or clears the value of [parser_config][crate::model::Hl7V2Store::parser_config].
    pub fn set_or_clear_parser_config<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::ParserConfig>,
    {
        self.parser_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [reject_duplicate_message][crate::model::Hl7V2Store::reject_duplicate_message].
    pub fn set_reject_duplicate_message<T: Into<bool>>(mut self, v: T) -> Self {
        self.reject_duplicate_message = Some(v.into());
        self
    }

    /// Sets or clears the value of [reject_duplicate_message][crate::model::Hl7V2Store::reject_duplicate_message].
    pub fn set_or_clear_reject_duplicate_message<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.reject_duplicate_message = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for Hl7V2Store {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.Hl7V2Store"
    }
}

/// Message that represents an arbitrary HTTP body. It should only be used for
/// payload formats that can't be represented as JSON, such as raw binary or an
/// HTML page. This message can be used both in streaming and non-streaming API
/// methods in the request as well as the response. It can be used as a
/// top-level request field, which is convenient if one wants to extract
/// parameters from either the URL or HTTP template into the request fields and
/// also want access to the raw HTTP body. Example: message GetResourceRequest `
/// // A unique request id. string request_id = 1; // The raw HTTP body is bound
/// to this field.google.api.HttpBody http_body = 2; ` service ResourceService `
/// rpc GetResource(GetResourceRequest) returns (google.api.HttpBody); rpc
/// UpdateResource(google.api.HttpBody) returns (google.protobuf.Empty); `
/// Example with streaming methods: service CaldavService ` rpc
/// GetCalendar(stream google.api.HttpBody) returns (stream
/// google.api.HttpBody); rpc UpdateCalendar(stream google.api.HttpBody) returns
/// (stream google.api.HttpBody); ` Use of this type only changes how the
/// request and response bodies are handled, all other features will continue to
/// work unchanged.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct HttpBody {
    /// The HTTP Content-Type header value specifying the content type of the
    /// body.
    pub content_type: Option<String>,

    /// The HTTP request/response body as raw binary.
    #[serde_as(as = "Option<serde_with::base64::Base64>")]
    pub data: Option<bytes::Bytes>,

    /// Application specific response metadata. Must be set in the first
    /// response for streaming APIs.
    pub extensions: Option<Vec<serde_json::Map<String, serde_json::Value>>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl HttpBody {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [content_type][crate::model::HttpBody::content_type].
    pub fn set_content_type<T: Into<String>>(mut self, v: T) -> Self {
        self.content_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [content_type][crate::model::HttpBody::content_type].
    pub fn set_or_clear_content_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.content_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [data][crate::model::HttpBody::data].
    pub fn set_data<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.data = Some(v.into());
        self
    }

    /// Sets or clears the value of [data][crate::model::HttpBody::data].
    pub fn set_or_clear_data<T: Into<bytes::Bytes>>(mut self, v: Option<T>) -> Self {
        self.data = v.map(|x| x.into());
        self
    }

    /// Sets the value of [extensions][crate::model::HttpBody::extensions].
    pub fn set_extensions<T>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = serde_json::Map<String, serde_json::Value>>,
    {
        self.extensions = Some(v.into_iter().collect());
        self
    }
}

impl apicore::message::Message for HttpBody {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.HttpBody"
    }
}

/// Raw bytes representing consent artifact content.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Image {
    /// Input only. Points to a Cloud Storage URI containing the consent
    /// artifact content. The URI must be in the following format:
    /// `gs://{bucket_id}/{object_id} `. The Cloud Healthcare API service
    /// account must have the `roles/storage.objectViewer` Cloud IAM role for
    /// this Cloud Storage location. The consent artifact content at this URI is
    /// copied to a Cloud Storage location managed by the Cloud Healthcare API.
    /// Responses to fetching requests return the consent artifact content in
    /// raw_bytes.
    pub gcs_uri: Option<String>,

    /// Consent artifact content represented as a stream of bytes. This field is
    /// populated when returned in GetConsentArtifact response, but not included
    /// in CreateConsentArtifact and ListConsentArtifact response.
    #[serde_as(as = "Option<serde_with::base64::Base64>")]
    pub raw_bytes: Option<bytes::Bytes>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Image {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gcs_uri][crate::model::Image::gcs_uri].
    pub fn set_gcs_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.gcs_uri = Some(v.into());
        self
    }

    /// Sets or clears the value of [gcs_uri][crate::model::Image::gcs_uri].
    pub fn set_or_clear_gcs_uri<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.gcs_uri = v.map(|x| x.into());
        self
    }

    /// Sets the value of [raw_bytes][crate::model::Image::raw_bytes].
    pub fn set_raw_bytes<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.raw_bytes = Some(v.into());
        self
    }

    /// Sets or clears the value of [raw_bytes][crate::model::Image::raw_bytes].
    pub fn set_or_clear_raw_bytes<T: Into<bytes::Bytes>>(mut self, v: Option<T>) -> Self {
        self.raw_bytes = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for Image {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.Image"
    }
}

/// Specifies how to handle de-identification of image pixels.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImageConfig {
    /// Determines how to redact text from image.
    pub text_redaction_mode: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ImageConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [text_redaction_mode][crate::model::ImageConfig::text_redaction_mode].
    pub fn set_text_redaction_mode<T: Into<String>>(mut self, v: T) -> Self {
        self.text_redaction_mode = Some(v.into());
        self
    }

    /// Sets or clears the value of [text_redaction_mode][crate::model::ImageConfig::text_redaction_mode].
    pub fn set_or_clear_text_redaction_mode<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.text_redaction_mode = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ImageConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ImageConfig"
    }
}

/// Imports data into the specified DICOM store. Returns an error if any of the
/// files to import are not DICOM files. This API accepts duplicate DICOM
/// instances by ignoring the newly-pushed instance. It does not overwrite.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImportDicomDataRequest {
    /// Specifies the configuration for importing data from Cloud Storage.
    pub gcs_source: Option<crate::model::GoogleCloudHealthcareV1DicomGcsSource>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ImportDicomDataRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gcs_source][crate::model::ImportDicomDataRequest::gcs_source].
    pub fn set_gcs_source<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::GoogleCloudHealthcareV1DicomGcsSource>,
    {
        self.gcs_source = Some(v.into());
        self
    }

    /// Sets or clears the value of [gcs_source][crate::model::ImportDicomDataRequest::gcs_source].
    pub fn set_or_clear_gcs_source<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::GoogleCloudHealthcareV1DicomGcsSource>,
    {
        self.gcs_source = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ImportDicomDataRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ImportDicomDataRequest"
    }
}

/// Returns additional information in regards to a completed DICOM store import.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImportDicomDataResponse {
    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ImportDicomDataResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

impl apicore::message::Message for ImportDicomDataResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ImportDicomDataResponse"
    }
}

/// Request to import messages.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImportMessagesRequest {
    /// Specifies the configuration for importing data from Cloud Storage.
    pub gcs_source: Option<crate::model::GcsSource>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ImportMessagesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gcs_source][crate::model::ImportMessagesRequest::gcs_source].
    pub fn set_gcs_source<T: Into<crate::model::GcsSource>>(mut self, v: T) -> Self {
        self.gcs_source = Some(v.into());
        self
    }

    /// Sets or clears the value of [gcs_source][crate::model::ImportMessagesRequest::gcs_source].
    pub fn set_or_clear_gcs_source<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::GcsSource>,
    {
        self.gcs_source = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ImportMessagesRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ImportMessagesRequest"
    }
}

/// Final response of importing messages. This structure is included in the
/// response to describe the detailed outcome. It is only included when the
/// operation finishes successfully.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImportMessagesResponse {
    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ImportMessagesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

impl apicore::message::Message for ImportMessagesResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ImportMessagesResponse"
    }
}

/// Request to import resources.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImportResourcesRequest {
    /// The content structure in the source location. If not specified, the
    /// server treats the input source files as BUNDLE.
    pub content_structure: Option<String>,

    /// Specifies the configuration for importing data from Cloud Storage.
    pub gcs_source: Option<crate::model::GoogleCloudHealthcareV1FhirGcsSource>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ImportResourcesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [content_structure][crate::model::ImportResourcesRequest::content_structure].
    pub fn set_content_structure<T: Into<String>>(mut self, v: T) -> Self {
        self.content_structure = Some(v.into());
        self
    }

    /// Sets or clears the value of [content_structure][crate::model::ImportResourcesRequest::content_structure].
    pub fn set_or_clear_content_structure<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.content_structure = v.map(|x| x.into());
        self
    }

    /// Sets the value of [gcs_source][crate::model::ImportResourcesRequest::gcs_source].
    pub fn set_gcs_source<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::GoogleCloudHealthcareV1FhirGcsSource>,
    {
        self.gcs_source = Some(v.into());
        self
    }

    /// Sets or clears the value of [gcs_source][crate::model::ImportResourcesRequest::gcs_source].
    pub fn set_or_clear_gcs_source<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::GoogleCloudHealthcareV1FhirGcsSource>,
    {
        self.gcs_source = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ImportResourcesRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ImportResourcesRequest"
    }
}

/// Final response of importing resources. This structure is included in the
/// response to describe the detailed outcome after the operation finishes
/// successfully.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImportResourcesResponse {
    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ImportResourcesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

impl apicore::message::Message for ImportResourcesResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ImportResourcesResponse"
    }
}

/// A transformation to apply to text that is identified as a specific
/// info_type.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InfoTypeTransformation {
    /// Mask a string by replacing its characters with a fixed character.
    pub character_mask_config: Option<crate::model::CharacterMaskConfig>,

    /// Pseudonymization method that generates surrogates via cryptographic
    /// hashing. Uses SHA-256. Outputs a base64-encoded representation of the
    /// hashed output ( for example,
    /// `L7k0BHmF1ha5U3NfGykjro4xWi1MPVQPjhMAZbSV9mM=`).
    pub crypto_hash_config: Option<crate::model::CryptoHashConfig>,

    /// Shift a date forward or backward in time by a random amount which is
    /// consistent for a given patient and crypto key combination.
    pub date_shift_config: Option<crate::model::DateShiftConfig>,

    /// InfoTypes to apply this transformation to. If this is not specified, the
    /// transformation applies to any info_type.
    pub info_types: Option<Vec<String>>,

    /// Define how to redact sensitive values. Default behaviour is erase. For
    /// example, "My name is Jane." becomes "My name is ."
    pub redact_config: Option<crate::model::RedactConfig>,

    /// When using the INSPECT_AND_TRANSFORM action, each match is replaced with
    /// the name of the info_type. For example, "My name is Jane" becomes "My
    /// name is [ PERSON_NAME]." The TRANSFORM action is equivalent to
    /// redacting.
    pub replace_with_info_type_config: Option<crate::model::ReplaceWithInfoTypeConfig>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl InfoTypeTransformation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [character_mask_config][crate::model::InfoTypeTransformation::character_mask_config].
    pub fn set_character_mask_config<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::CharacterMaskConfig>,
    {
        self.character_mask_config = Some(v.into());
        self
    }

    /// Sets or clears the value of [character_mask_config][crate::model::InfoTypeTransformation::character_mask_config].
    pub fn set_or_clear_character_mask_config<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::CharacterMaskConfig>,
    {
        self.character_mask_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [crypto_hash_config][crate::model::InfoTypeTransformation::crypto_hash_config].
    pub fn set_crypto_hash_config<T: Into<crate::model::CryptoHashConfig>>(mut self, v: T) -> Self {
        self.crypto_hash_config = Some(v.into());
        self
    }

    /// Sets or clears the value of [crypto_hash_config][crate::model::InfoTypeTransformation::crypto_hash_config].
    pub fn set_or_clear_crypto_hash_config<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::CryptoHashConfig>,
    {
        self.crypto_hash_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [date_shift_config][crate::model::InfoTypeTransformation::date_shift_config].
    pub fn set_date_shift_config<T: Into<crate::model::DateShiftConfig>>(mut self, v: T) -> Self {
        self.date_shift_config = Some(v.into());
        self
    }

    /// Sets or clears the value of [date_shift_config][crate::model::InfoTypeTransformation::date_shift_config].
    pub fn set_or_clear_date_shift_config<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::DateShiftConfig>,
    {
        self.date_shift_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [info_types][crate::model::InfoTypeTransformation::info_types].
    pub fn set_info_types<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.info_types = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [redact_config][crate::model::InfoTypeTransformation::redact_config].
    pub fn set_redact_config<T: Into<crate::model::RedactConfig>>(mut self, v: T) -> Self {
        self.redact_config = Some(v.into());
        self
    }

    /// Sets or clears the value of [redact_config][crate::model::InfoTypeTransformation::redact_config].
    pub fn set_or_clear_redact_config<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::RedactConfig>,
    {
        self.redact_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [replace_with_info_type_config][crate::model::InfoTypeTransformation::replace_with_info_type_config].
    pub fn set_replace_with_info_type_config<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::ReplaceWithInfoTypeConfig>,
    {
        self.replace_with_info_type_config = Some(v.into());
        self
    }

    /// Sets or clears the value of [replace_with_info_type_config][crate::model::InfoTypeTransformation::replace_with_info_type_config].
    pub fn set_or_clear_replace_with_info_type_config<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::ReplaceWithInfoTypeConfig>,
    {
        self.replace_with_info_type_config = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for InfoTypeTransformation {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.InfoTypeTransformation"
    }
}

/// Ingests a message into the specified HL7v2 store.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct IngestMessageRequest {
    /// A complete HL7v2 message. See [Introduction to HL7 Standards]
    /// (https://www.hl7.org/implement/standards/index.cfm?ref=common) for
    /// details on the standard.
    pub message: Option<crate::model::Message>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl IngestMessageRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [message][crate::model::IngestMessageRequest::message].
    pub fn set_message<T: Into<crate::model::Message>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }

    /// Sets or clears the value of [message][crate::model::IngestMessageRequest::message].
    pub fn set_or_clear_message<T: Into<crate::model::Message>>(mut self, v: Option<T>) -> Self {
        self.message = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for IngestMessageRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.IngestMessageRequest"
    }
}

/// Acknowledges that a message has been ingested into the specified HL7v2
/// store.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct IngestMessageResponse {
    /// HL7v2 ACK message.
    #[serde_as(as = "Option<serde_with::base64::Base64>")]
    pub hl7_ack: Option<bytes::Bytes>,

    /// A complete HL7v2 message. See [Introduction to HL7 Standards]
    /// (https://www.hl7.org/implement/standards/index.cfm?ref=common) for
    /// details on the standard.
    pub message: Option<crate::model::Message>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl IngestMessageResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [hl7_ack][crate::model::IngestMessageResponse::hl7_ack].
    pub fn set_hl7_ack<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.hl7_ack = Some(v.into());
        self
    }

    /// Sets or clears the value of [hl7_ack][crate::model::IngestMessageResponse::hl7_ack].
    pub fn set_or_clear_hl7_ack<T: Into<bytes::Bytes>>(mut self, v: Option<T>) -> Self {
        self.hl7_ack = v.map(|x| x.into());
        self
    }

    /// Sets the value of [message][crate::model::IngestMessageResponse::message].
    pub fn set_message<T: Into<crate::model::Message>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }

    /// Sets or clears the value of [message][crate::model::IngestMessageResponse::message].
    pub fn set_or_clear_message<T: Into<crate::model::Message>>(mut self, v: Option<T>) -> Self {
        self.message = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for IngestMessageResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.IngestMessageResponse"
    }
}

/// Include to use an existing data crypto key wrapped by KMS. The wrapped key
/// must be a 128-, 192-, or 256-bit key. The key must grant the Cloud IAM
/// permission `cloudkms.cryptoKeyVersions.useToDecrypt` to the project's Cloud
/// Healthcare Service Agent service account. For more information, see
/// [Creating a wrapped key]
/// (https://cloud.google.com/dlp/docs/create-wrapped-key).
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct KmsWrappedCryptoKey {
    /// Required. The resource name of the KMS CryptoKey to use for unwrapping.
    /// For example,
    /// `projects/{project_id}/locations/{location_id}/keyRings/{keyring}/cryptoKeys/{key}`.
    pub crypto_key: Option<String>,

    /// Required. The wrapped data crypto key.
    #[serde_as(as = "Option<serde_with::base64::Base64>")]
    pub wrapped_key: Option<bytes::Bytes>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl KmsWrappedCryptoKey {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [crypto_key][crate::model::KmsWrappedCryptoKey::crypto_key].
    pub fn set_crypto_key<T: Into<String>>(mut self, v: T) -> Self {
        self.crypto_key = Some(v.into());
        self
    }

    /// Sets or clears the value of [crypto_key][crate::model::KmsWrappedCryptoKey::crypto_key].
    pub fn set_or_clear_crypto_key<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.crypto_key = v.map(|x| x.into());
        self
    }

    /// Sets the value of [wrapped_key][crate::model::KmsWrappedCryptoKey::wrapped_key].
    pub fn set_wrapped_key<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.wrapped_key = Some(v.into());
        self
    }

    /// Sets or clears the value of [wrapped_key][crate::model::KmsWrappedCryptoKey::wrapped_key].
    pub fn set_or_clear_wrapped_key<T: Into<bytes::Bytes>>(mut self, v: Option<T>) -> Self {
        self.wrapped_key = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for KmsWrappedCryptoKey {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.KmsWrappedCryptoKey"
    }
}

/// EntityMentions can be linked to multiple entities using a LinkedEntity
/// message lets us add other fields, e.g. confidence.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LinkedEntity {
    /// entity_id is a concept unique identifier. These are prefixed by a string
    /// that identifies the entity coding system, followed by the unique
    /// identifier within that system. For example, "UMLS/C0000970". This also
    /// supports ad hoc entities, which are formed by normalizing entity mention
    /// content.
    pub entity_id: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl LinkedEntity {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [entity_id][crate::model::LinkedEntity::entity_id].
    pub fn set_entity_id<T: Into<String>>(mut self, v: T) -> Self {
        self.entity_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [entity_id][crate::model::LinkedEntity::entity_id].
    pub fn set_or_clear_entity_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.entity_id = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for LinkedEntity {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.LinkedEntity"
    }
}

#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListAttributeDefinitionsResponse {
    /// The returned Attribute definitions. The maximum number of attributes
    /// returned is determined by the value of page_size in the
    /// ListAttributeDefinitionsRequest.
    pub attribute_definitions: Option<Vec<crate::model::AttributeDefinition>>,

    /// Token to retrieve the next page of results, or empty if there are no
    /// more results in the list.
    pub next_page_token: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListAttributeDefinitionsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [attribute_definitions][crate::model::ListAttributeDefinitionsResponse::attribute_definitions].
    pub fn set_attribute_definitions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::AttributeDefinition>,
    {
        self.attribute_definitions = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListAttributeDefinitionsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::ListAttributeDefinitionsResponse::next_page_token].
    pub fn set_or_clear_next_page_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.next_page_token = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ListAttributeDefinitionsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ListAttributeDefinitionsResponse"
    }
}

impl apicore::paginator::PageableResponse for ListAttributeDefinitionsResponse {
    type PageItem = crate::model::AttributeDefinition;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }

    fn items(self) -> Vec<Self::PageItem> {
        self.attribute_definitions.unwrap_or_default()
    }
}

#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListConsentArtifactsResponse {
    /// The returned Consent artifacts. The maximum number of artifacts returned
    /// is determined by the value of page_size in the
    /// ListConsentArtifactsRequest.
    pub consent_artifacts: Option<Vec<crate::model::ConsentArtifact>>,

    /// Token to retrieve the next page of results, or empty if there are no
    /// more results in the list.
    pub next_page_token: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListConsentArtifactsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [consent_artifacts][crate::model::ListConsentArtifactsResponse::consent_artifacts].
    pub fn set_consent_artifacts<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::ConsentArtifact>,
    {
        self.consent_artifacts = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListConsentArtifactsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::ListConsentArtifactsResponse::next_page_token].
    pub fn set_or_clear_next_page_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.next_page_token = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ListConsentArtifactsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ListConsentArtifactsResponse"
    }
}

impl apicore::paginator::PageableResponse for ListConsentArtifactsResponse {
    type PageItem = crate::model::ConsentArtifact;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }

    fn items(self) -> Vec<Self::PageItem> {
        self.consent_artifacts.unwrap_or_default()
    }
}

#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListConsentRevisionsResponse {
    /// The returned Consent revisions. The maximum number of revisions returned
    /// is determined by the value of `page_size` in the
    /// ListConsentRevisionsRequest.
    pub consents: Option<Vec<crate::model::Consent>>,

    /// Token to retrieve the next page of results, or empty if there are no
    /// more results in the list.
    pub next_page_token: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListConsentRevisionsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [consents][crate::model::ListConsentRevisionsResponse::consents].
    pub fn set_consents<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Consent>,
    {
        self.consents = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListConsentRevisionsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::ListConsentRevisionsResponse::next_page_token].
    pub fn set_or_clear_next_page_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.next_page_token = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ListConsentRevisionsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ListConsentRevisionsResponse"
    }
}

impl apicore::paginator::PageableResponse for ListConsentRevisionsResponse {
    type PageItem = crate::model::Consent;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }

    fn items(self) -> Vec<Self::PageItem> {
        self.consents.unwrap_or_default()
    }
}

#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListConsentStoresResponse {
    /// The returned consent stores. The maximum number of stores returned is
    /// determined by the value of page_size in the ListConsentStoresRequest.
    pub consent_stores: Option<Vec<crate::model::ConsentStore>>,

    /// Token to retrieve the next page of results, or empty if there are no
    /// more results in the list.
    pub next_page_token: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListConsentStoresResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [consent_stores][crate::model::ListConsentStoresResponse::consent_stores].
    pub fn set_consent_stores<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::ConsentStore>,
    {
        self.consent_stores = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListConsentStoresResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::ListConsentStoresResponse::next_page_token].
    pub fn set_or_clear_next_page_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.next_page_token = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ListConsentStoresResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ListConsentStoresResponse"
    }
}

impl apicore::paginator::PageableResponse for ListConsentStoresResponse {
    type PageItem = crate::model::ConsentStore;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }

    fn items(self) -> Vec<Self::PageItem> {
        self.consent_stores.unwrap_or_default()
    }
}

#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListConsentsResponse {
    /// The returned Consents. The maximum number of Consents returned is
    /// determined by the value of page_size in the ListConsentsRequest.
    pub consents: Option<Vec<crate::model::Consent>>,

    /// Token to retrieve the next page of results, or empty if there are no
    /// more results in the list.
    pub next_page_token: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListConsentsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [consents][crate::model::ListConsentsResponse::consents].
    pub fn set_consents<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Consent>,
    {
        self.consents = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListConsentsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::ListConsentsResponse::next_page_token].
    pub fn set_or_clear_next_page_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.next_page_token = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ListConsentsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ListConsentsResponse"
    }
}

impl apicore::paginator::PageableResponse for ListConsentsResponse {
    type PageItem = crate::model::Consent;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }

    fn items(self) -> Vec<Self::PageItem> {
        self.consents.unwrap_or_default()
    }
}

/// Lists the available datasets.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListDatasetsResponse {
    /// The first page of datasets.
    pub datasets: Option<Vec<crate::model::Dataset>>,

    /// Token to retrieve the next page of results, or empty if there are no
    /// more results in the list.
    pub next_page_token: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListDatasetsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [datasets][crate::model::ListDatasetsResponse::datasets].
    pub fn set_datasets<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Dataset>,
    {
        self.datasets = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListDatasetsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::ListDatasetsResponse::next_page_token].
    pub fn set_or_clear_next_page_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.next_page_token = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ListDatasetsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ListDatasetsResponse"
    }
}

impl apicore::paginator::PageableResponse for ListDatasetsResponse {
    type PageItem = crate::model::Dataset;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }

    fn items(self) -> Vec<Self::PageItem> {
        self.datasets.unwrap_or_default()
    }
}

/// Lists the DICOM stores in the given dataset.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListDicomStoresResponse {
    /// The returned DICOM stores. Won't be more DICOM stores than the value of
    /// page_size in the request.
    pub dicom_stores: Option<Vec<crate::model::DicomStore>>,

    /// Token to retrieve the next page of results or empty if there are no more
    /// results in the list.
    pub next_page_token: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListDicomStoresResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [dicom_stores][crate::model::ListDicomStoresResponse::dicom_stores].
    pub fn set_dicom_stores<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::DicomStore>,
    {
        self.dicom_stores = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListDicomStoresResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::ListDicomStoresResponse::next_page_token].
    pub fn set_or_clear_next_page_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.next_page_token = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ListDicomStoresResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ListDicomStoresResponse"
    }
}

impl apicore::paginator::PageableResponse for ListDicomStoresResponse {
    type PageItem = crate::model::DicomStore;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }

    fn items(self) -> Vec<Self::PageItem> {
        self.dicom_stores.unwrap_or_default()
    }
}

/// Lists the FHIR stores in the given dataset.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListFhirStoresResponse {
    /// The returned FHIR stores. Won't be more FHIR stores than the value of
    /// page_size in the request.
    pub fhir_stores: Option<Vec<crate::model::FhirStore>>,

    /// Token to retrieve the next page of results or empty if there are no more
    /// results in the list.
    pub next_page_token: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListFhirStoresResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [fhir_stores][crate::model::ListFhirStoresResponse::fhir_stores].
    pub fn set_fhir_stores<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::FhirStore>,
    {
        self.fhir_stores = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListFhirStoresResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::ListFhirStoresResponse::next_page_token].
    pub fn set_or_clear_next_page_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.next_page_token = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ListFhirStoresResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ListFhirStoresResponse"
    }
}

impl apicore::paginator::PageableResponse for ListFhirStoresResponse {
    type PageItem = crate::model::FhirStore;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }

    fn items(self) -> Vec<Self::PageItem> {
        self.fhir_stores.unwrap_or_default()
    }
}

/// Lists the HL7v2 stores in the given dataset.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListHl7V2StoresResponse {
    /// The returned HL7v2 stores. Won't be more HL7v2 stores than the value of
    /// page_size in the request.
    pub hl7_v2_stores: Option<Vec<crate::model::Hl7V2Store>>,

    /// Token to retrieve the next page of results or empty if there are no more
    /// results in the list.
    pub next_page_token: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListHl7V2StoresResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [hl7_v2_stores][crate::model::ListHl7V2StoresResponse::hl7_v2_stores].
    pub fn set_hl7_v2_stores<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Hl7V2Store>,
    {
        self.hl7_v2_stores = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListHl7V2StoresResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::ListHl7V2StoresResponse::next_page_token].
    pub fn set_or_clear_next_page_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.next_page_token = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ListHl7V2StoresResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ListHl7V2StoresResponse"
    }
}

impl apicore::paginator::PageableResponse for ListHl7V2StoresResponse {
    type PageItem = crate::model::Hl7V2Store;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }

    fn items(self) -> Vec<Self::PageItem> {
        self.hl7_v2_stores.unwrap_or_default()
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
        "type.googleapis.com/google.cloud.healthcare.v1.ListLocationsResponse"
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

/// Lists the messages in the specified HL7v2 store.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListMessagesResponse {
    /// The returned Messages. Won't be more Messages than the value of
    /// page_size in the request. See view for populated fields.
    pub hl7_v2_messages: Option<Vec<crate::model::Message>>,

    /// Token to retrieve the next page of results or empty if there are no more
    /// results in the list.
    pub next_page_token: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListMessagesResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [hl7_v2_messages][crate::model::ListMessagesResponse::hl7_v2_messages].
    pub fn set_hl7_v2_messages<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Message>,
    {
        self.hl7_v2_messages = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [next_page_token][crate::model::ListMessagesResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::ListMessagesResponse::next_page_token].
    pub fn set_or_clear_next_page_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.next_page_token = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ListMessagesResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ListMessagesResponse"
    }
}

impl apicore::paginator::PageableResponse for ListMessagesResponse {
    type PageItem = crate::model::Message;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }

    fn items(self) -> Vec<Self::PageItem> {
        self.hl7_v2_messages.unwrap_or_default()
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
        "type.googleapis.com/google.cloud.healthcare.v1.ListOperationsResponse"
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

#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListUserDataMappingsResponse {
    /// Token to retrieve the next page of results, or empty if there are no
    /// more results in the list.
    pub next_page_token: Option<String>,

    /// The returned User data mappings. The maximum number of User data
    /// mappings returned is determined by the value of page_size in the
    /// ListUserDataMappingsRequest.
    pub user_data_mappings: Option<Vec<crate::model::UserDataMapping>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ListUserDataMappingsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [next_page_token][crate::model::ListUserDataMappingsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = Some(v.into());
        self
    }

    /// Sets or clears the value of [next_page_token][crate::model::ListUserDataMappingsResponse::next_page_token].
    pub fn set_or_clear_next_page_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.next_page_token = v.map(|x| x.into());
        self
    }

    /// Sets the value of [user_data_mappings][crate::model::ListUserDataMappingsResponse::user_data_mappings].
    pub fn set_user_data_mappings<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::UserDataMapping>,
    {
        self.user_data_mappings = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for ListUserDataMappingsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ListUserDataMappingsResponse"
    }
}

impl apicore::paginator::PageableResponse for ListUserDataMappingsResponse {
    type PageItem = crate::model::UserDataMapping;

    fn next_page_token(&self) -> String {
        self.next_page_token.clone().unwrap_or_default()
    }

    fn items(self) -> Vec<Self::PageItem> {
        self.user_data_mappings.unwrap_or_default()
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
    /// `"cloud.googleapis.com/region": "us-east1"`
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
        "type.googleapis.com/google.cloud.healthcare.v1.Location"
    }
}

/// A complete HL7v2 message. See [Introduction to HL7 Standards]
/// (https://www.hl7.org/implement/standards/index.cfm?ref=common) for details
/// on the standard.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Message {
    /// Output only. The datetime when the message was created. Set by the
    /// server.
    pub create_time: Option<String>,

    /// Raw message bytes.
    #[serde_as(as = "Option<serde_with::base64::Base64>")]
    pub data: Option<bytes::Bytes>,

    /// User-supplied key-value pairs used to organize HL7v2 stores. Label keys
    /// must be between 1 and 63 characters long, have a UTF-8 encoding of
    /// maximum 128 bytes, and must conform to the following PCRE regular
    /// expression: \p`Ll`\p`Lo`` 0,62` Label values are optional, must be
    /// between 1 and 63 characters long, have a UTF-8 encoding of maximum 128
    /// bytes, and must conform to the following PCRE regular expression:
    /// [\p`Ll`\p`Lo`\p`N`_-]`0,63` No more than 64 labels can be associated
    /// with a given store.
    pub labels: Option<std::collections::HashMap<String, String>>,

    /// The message type for this message. MSH-9.1.
    pub message_type: Option<String>,

    /// Resource name of the Message, of the form
    /// `projects/{project_id}/locations/`
    /// location_id`/datasets/{dataset_id}/hl7V2Stores/{hl7_v2_store_id}/messages/`
    /// message_id``. Assigned by the server.
    pub name: Option<String>,

    /// The content of a HL7v2 message in a structured format.
    pub parsed_data: Option<crate::model::ParsedData>,

    /// All patient IDs listed in the PID-2, PID-3, and PID-4 segments of this
    /// message.
    pub patient_ids: Option<Vec<crate::model::PatientId>>,

    /// The content of an HL7v2 message in a structured format as specified by a
    /// schema.
    pub schematized_data: Option<crate::model::SchematizedData>,

    /// The hospital that this message came from. MSH-4.
    pub send_facility: Option<String>,

    /// The datetime the sending application sent this message. MSH-7.
    pub send_time: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Message {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [create_time][crate::model::Message::create_time].
    pub fn set_create_time<T: Into<String>>(mut self, v: T) -> Self {
        self.create_time = Some(v.into());
        self
    }

    /// Sets or clears the value of [create_time][crate::model::Message::create_time].
    pub fn set_or_clear_create_time<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.create_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [data][crate::model::Message::data].
    pub fn set_data<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.data = Some(v.into());
        self
    }

    /// Sets or clears the value of [data][crate::model::Message::data].
    pub fn set_or_clear_data<T: Into<bytes::Bytes>>(mut self, v: Option<T>) -> Self {
        self.data = v.map(|x| x.into());
        self
    }

    /// Sets the value of [labels][crate::model::Message::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [message_type][crate::model::Message::message_type].
    pub fn set_message_type<T: Into<String>>(mut self, v: T) -> Self {
        self.message_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [message_type][crate::model::Message::message_type].
    pub fn set_or_clear_message_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.message_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::Message::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::Message::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [parsed_data][crate::model::Message::parsed_data].
    pub fn set_parsed_data<T: Into<crate::model::ParsedData>>(mut self, v: T) -> Self {
        self.parsed_data = Some(v.into());
        self
    }

    /// Sets or clears the value of [parsed_data][crate::model::Message::parsed_data].
    pub fn set_or_clear_parsed_data<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::ParsedData>,
    {
        self.parsed_data = v.map(|x| x.into());
        self
    }

    /// Sets the value of [patient_ids][crate::model::Message::patient_ids].
    pub fn set_patient_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::PatientId>,
    {
        self.patient_ids = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [schematized_data][crate::model::Message::schematized_data].
    pub fn set_schematized_data<T: Into<crate::model::SchematizedData>>(mut self, v: T) -> Self {
        self.schematized_data = Some(v.into());
        self
    }

    /// Sets or clears the value of [schematized_data][crate::model::Message::schematized_data].
    pub fn set_or_clear_schematized_data<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::SchematizedData>,
    {
        self.schematized_data = v.map(|x| x.into());
        self
    }

    /// Sets the value of [send_facility][crate::model::Message::send_facility].
    pub fn set_send_facility<T: Into<String>>(mut self, v: T) -> Self {
        self.send_facility = Some(v.into());
        self
    }

    /// Sets or clears the value of [send_facility][crate::model::Message::send_facility].
    pub fn set_or_clear_send_facility<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.send_facility = v.map(|x| x.into());
        self
    }

    /// Sets the value of [send_time][crate::model::Message::send_time].
    pub fn set_send_time<T: Into<String>>(mut self, v: T) -> Self {
        self.send_time = Some(v.into());
        self
    }

    /// Sets or clears the value of [send_time][crate::model::Message::send_time].
    pub fn set_or_clear_send_time<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.send_time = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for Message {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.Message"
    }
}

/// Specifies where to send notifications upon changes to a data store.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NotificationConfig {
    /// The [Pub/Sub](https://cloud.google.com/pubsub/docs/) topic that
    /// notifications of changes are published on. Supplied by the client.
    /// PubsubMessage.Data contains the resource name. PubsubMessage.MessageId
    /// is the ID of this message. It is guaranteed to be unique within the
    /// topic. PubsubMessage.PublishTime is the time at which the message was
    /// published. Notifications are only sent if the topic is non-empty. [Topic
    /// names](https://cloud.google.com/pubsub/docs/overview#names) must be
    /// scoped to a project. Cloud Healthcare API service account must have
    /// publisher permissions on the given Pub/Sub topic. Not having adequate
    /// permissions causes the calls that send notifications to fail. If a
    /// notification can't be published to Pub/Sub, errors are logged to Cloud
    /// Logging (see [Viewing error logs in Cloud
    /// Logging](https://cloud.google.com/healthcare/docs/how-tos/logging)). If
    /// the number of errors exceeds a certain rate, some aren't submitted. Note
    /// that not all operations trigger notifications, see [ Configuring Pub/Sub
    /// notifications](https://cloud.google.com/healthcare/docs/how-tos/pubsub)
    /// for specific details.
    pub pubsub_topic: Option<String>,

    /// Indicates whether or not to send Pub/Sub notifications on bulk import.
    /// Only supported for DICOM imports.
    pub send_for_bulk_import: Option<bool>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl NotificationConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [pubsub_topic][crate::model::NotificationConfig::pubsub_topic].
    pub fn set_pubsub_topic<T: Into<String>>(mut self, v: T) -> Self {
        self.pubsub_topic = Some(v.into());
        self
    }

    /// Sets or clears the value of [pubsub_topic][crate::model::NotificationConfig::pubsub_topic].
    pub fn set_or_clear_pubsub_topic<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.pubsub_topic = v.map(|x| x.into());
        self
    }

    /// Sets the value of [send_for_bulk_import][crate::model::NotificationConfig::send_for_bulk_import].
    pub fn set_send_for_bulk_import<T: Into<bool>>(mut self, v: T) -> Self {
        self.send_for_bulk_import = Some(v.into());
        self
    }

    /// Sets or clears the value of [send_for_bulk_import][crate::model::NotificationConfig::send_for_bulk_import].
    pub fn set_or_clear_send_for_bulk_import<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.send_for_bulk_import = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for NotificationConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.NotificationConfig"
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
    /// `true` , the operation is completed, and either `error` or `response` is
    /// available.
    pub done: Option<bool>,

    /// The `Status` type defines a logical error model that is suitable for
    /// different programming environments, including REST APIs and RPC APIs. It
    /// is used by [ gRPC](https://github.com/grpc). Each `Status` message
    /// contains three pieces of data: error code, error message, and error
    /// details. You can find out more about this error model and how to work
    /// with it in the [API Design Guide](https:
    /// //cloud.google.com/apis/design/errors).
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
    /// `google.protobuf. Empty`. If the original method is standard
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
        "type.googleapis.com/google.cloud.healthcare.v1.Operation"
    }
}

/// OperationMetadata provides information about the operation execution.
/// Returned in the long-running operation's metadata field.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OperationMetadata {
    /// The name of the API method that initiated the operation.
    pub api_method_name: Option<String>,

    /// Specifies if cancellation was requested for the operation.
    pub cancel_requested: Option<bool>,

    /// ProgressCounter provides counters to describe an operation's progress.
    pub counter: Option<crate::model::ProgressCounter>,

    /// The time at which the operation was created by the API.
    pub create_time: Option<String>,

    /// The time at which execution was completed.
    pub end_time: Option<String>,

    /// A link to audit and error logs in the log viewer. Error logs are
    /// generated only by some operations, listed at [Viewing error logs in
    /// Cloud Logging](https:
    /// //cloud.google.com/healthcare/docs/how-tos/logging).
    pub logs_url: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl OperationMetadata {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [api_method_name][crate::model::OperationMetadata::api_method_name].
    pub fn set_api_method_name<T: Into<String>>(mut self, v: T) -> Self {
        self.api_method_name = Some(v.into());
        self
    }

    /// Sets or clears the value of [api_method_name][crate::model::OperationMetadata::api_method_name].
    pub fn set_or_clear_api_method_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.api_method_name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [cancel_requested][crate::model::OperationMetadata::cancel_requested].
    pub fn set_cancel_requested<T: Into<bool>>(mut self, v: T) -> Self {
        self.cancel_requested = Some(v.into());
        self
    }

    /// Sets or clears the value of [cancel_requested][crate::model::OperationMetadata::cancel_requested].
    pub fn set_or_clear_cancel_requested<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.cancel_requested = v.map(|x| x.into());
        self
    }

    /// Sets the value of [counter][crate::model::OperationMetadata::counter].
    pub fn set_counter<T: Into<crate::model::ProgressCounter>>(mut self, v: T) -> Self {
        self.counter = Some(v.into());
        self
    }

    /// Sets or clears the value of [counter][crate::model::OperationMetadata::counter].
    pub fn set_or_clear_counter<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::ProgressCounter>,
    {
        self.counter = v.map(|x| x.into());
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

    /// Sets the value of [logs_url][crate::model::OperationMetadata::logs_url].
    pub fn set_logs_url<T: Into<String>>(mut self, v: T) -> Self {
        self.logs_url = Some(v.into());
        self
    }

    /// Sets or clears the value of [logs_url][crate::model::OperationMetadata::logs_url].
    pub fn set_or_clear_logs_url<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.logs_url = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for OperationMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.OperationMetadata"
    }
}

/// The content of a HL7v2 message in a structured format.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ParsedData {

    pub segments: Option<Vec<crate::model::Segment>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ParsedData {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [segments][crate::model::ParsedData::segments].
    pub fn set_segments<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Segment>,
    {
        self.segments = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for ParsedData {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ParsedData"
    }
}

/// The configuration for the parser. It determines how the server parses the
/// messages.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ParserConfig {
    /// Determines whether messages with no header are allowed.
    pub allow_null_header: Option<bool>,

    /// A schema package contains a set of schemas and type definitions.
    pub schema: Option<crate::model::SchemaPackage>,

    /// Byte(s) to use as the segment terminator. If this is unset, '\r' is used
    /// as segment terminator, matching the HL7 version 2 specification.
    #[serde_as(as = "Option<serde_with::base64::Base64>")]
    pub segment_terminator: Option<bytes::Bytes>,

    /// Immutable. Determines the version of both the default parser to be used
    /// when ` schema` is not given, as well as the schematized parser used when
    /// `schema` is specified. This field is immutable after HL7v2 store
    /// creation.
    pub version: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ParserConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [allow_null_header][crate::model::ParserConfig::allow_null_header].
    pub fn set_allow_null_header<T: Into<bool>>(mut self, v: T) -> Self {
        self.allow_null_header = Some(v.into());
        self
    }

    /// Sets or clears the value of [allow_null_header][crate::model::ParserConfig::allow_null_header].
    pub fn set_or_clear_allow_null_header<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.allow_null_header = v.map(|x| x.into());
        self
    }

    /// Sets the value of [schema][crate::model::ParserConfig::schema].
    pub fn set_schema<T: Into<crate::model::SchemaPackage>>(mut self, v: T) -> Self {
        self.schema = Some(v.into());
        self
    }

    /// Sets or clears the value of [schema][crate::model::ParserConfig::schema].
    pub fn set_or_clear_schema<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::SchemaPackage>,
    {
        self.schema = v.map(|x| x.into());
        self
    }

    /// Sets the value of [segment_terminator][crate::model::ParserConfig::segment_terminator].
    pub fn set_segment_terminator<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.segment_terminator = Some(v.into());
        self
    }

    /// Sets or clears the value of [segment_terminator][crate::model::ParserConfig::segment_terminator].
    pub fn set_or_clear_segment_terminator<T: Into<bytes::Bytes>>(mut self, v: Option<T>) -> Self {
        self.segment_terminator = v.map(|x| x.into());
        self
    }

    /// Sets the value of [version][crate::model::ParserConfig::version].
    pub fn set_version<T: Into<String>>(mut self, v: T) -> Self {
        self.version = Some(v.into());
        self
    }

    /// Sets or clears the value of [version][crate::model::ParserConfig::version].
    pub fn set_or_clear_version<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.version = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ParserConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ParserConfig"
    }
}

/// A patient identifier and associated type.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PatientId {
    /// ID type. For example, MRN or NHS.
    pub r#type: Option<String>,

    /// The patient's unique identifier.
    pub value: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl PatientId {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [type][crate::model::PatientId::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets or clears the value of [type][crate::model::PatientId::r#type].
    pub fn set_or_clear_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.r#type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [value][crate::model::PatientId::value].
    pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }

    /// Sets or clears the value of [value][crate::model::PatientId::value].
    pub fn set_or_clear_value<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.value = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for PatientId {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.PatientId"
    }
}

/// An Identity and Access Management (IAM) policy, which specifies access
/// controls for Google Cloud resources. A `Policy` is a collection of
/// `bindings`. A `binding` binds one or more `members`, or principals, to a
/// single `role`. Principals can be user accounts, service accounts, Google
/// groups, and domains (such as G Suite). A `role` is a named list of
/// permissions; each `role` can be an IAM predefined role or a user-created
/// custom role. For some types of Google Cloud resources, a `binding` can also
/// specify a `condition`, which is a logical expression that allows access to a
/// resource only if the expression evaluates to `true`. A condition can add
/// constraints based on attributes of the request, the resource, or both. For a
/// description of IAM and its features, see the [IAM
/// documentation](https://cloud.google.com/iam/docs/).
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Policy {
    /// Specifies cloud audit logging configuration for this policy.
    pub audit_configs: Option<Vec<crate::model::AuditConfig>>,

    /// Associates a list of `members`, or principals, with a `role`.
    /// Optionally, may specify a `condition` that determines how and when the
    /// `bindings` are applied. Each of the `bindings` must contain at least one
    /// principal. The `bindings` in a `Policy` can refer to up to 1,500
    /// principals; up to 250 of these principals can be Google groups. Each
    /// occurrence of a principal counts towards these limits. For example, if
    /// the `bindings` grant 50 different roles to `user:alice@example.com`, and
    /// not to any other principal, then you can add another 1,450 principals to
    /// the `bindings` in the `Policy`.
    pub bindings: Option<Vec<crate::model::Binding>>,

    /// `etag` is used for optimistic concurrency control as a way to help
    /// prevent simultaneous updates of a policy from overwriting each other. It
    /// is strongly suggested that systems make use of the `etag` in the
    /// read-modify-write cycle to perform policy updates in order to avoid race
    /// conditions: An `etag` is returned in the response to `getIamPolicy`, and
    /// systems are expected to put that etag in the request to `setIamPolicy`
    /// to ensure that their change will be applied to the same version of the
    /// policy. **Important:** If you use IAM Conditions, you must include the
    /// `etag` field whenever you call `setIamPolicy`. If you omit this field,
    /// then IAM allows you to overwrite a version `3` policy with a version `1`
    /// policy, and all of the conditions in the version `3` policy are lost.
    #[serde_as(as = "Option<serde_with::base64::Base64>")]
    pub etag: Option<bytes::Bytes>,

    /// Specifies the format of the policy. Valid values are `0`, `1`, and `3`.
    /// Requests that specify an invalid value are rejected. Any operation that
    /// affects conditional role bindings must specify version `3`. This
    /// requirement applies to the following operations: * Getting a policy that
    /// includes a conditional role binding * Adding a conditional role binding
    /// to a policy * Changing a conditional role binding in a policy * Removing
    /// any role binding, with or without a condition, from a policy that
    /// includes conditions ** Important:** If you use IAM Conditions, you must
    /// include the `etag` field whenever you call `setIamPolicy`. If you omit
    /// this field, then IAM allows you to overwrite a version `3` policy with a
    /// version `1` policy, and all of the conditions in the version `3` policy
    /// are lost. If a policy does not include any conditions, operations on
    /// that policy may specify any valid version or leave the field unset. To
    /// learn which resources support conditions in their IAM policies, see the
    /// [IAM
    /// documentation](https://cloud.google.com/iam/help/conditions/resource-policies).
    pub version: Option<i32>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Policy {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [audit_configs][crate::model::Policy::audit_configs].
    pub fn set_audit_configs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::AuditConfig>,
    {
        self.audit_configs = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [bindings][crate::model::Policy::bindings].
    pub fn set_bindings<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Binding>,
    {
        self.bindings = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [etag][crate::model::Policy::etag].
    pub fn set_etag<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.etag = Some(v.into());
        self
    }

    /// Sets or clears the value of [etag][crate::model::Policy::etag].
    pub fn set_or_clear_etag<T: Into<bytes::Bytes>>(mut self, v: Option<T>) -> Self {
        self.etag = v.map(|x| x.into());
        self
    }

    /// Sets the value of [version][crate::model::Policy::version].
    pub fn set_version<T: Into<i32>>(mut self, v: T) -> Self {
        self.version = Some(v.into());
        self
    }

    /// Sets or clears the value of [version][crate::model::Policy::version].
    pub fn set_or_clear_version<T: Into<i32>>(mut self, v: Option<T>) -> Self {
        self.version = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for Policy {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.Policy"
    }
}

/// ProgressCounter provides counters to describe an operation's progress.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProgressCounter {
    /// The number of units that failed in the operation.
    #[serde_as(as = "Option<apicore::internal::I64>")]
    pub failure: Option<i64>,

    /// The number of units that are pending in the operation.
    #[serde_as(as = "Option<apicore::internal::I64>")]
    pub pending: Option<i64>,

    /// The number of units that succeeded in the operation.
    #[serde_as(as = "Option<apicore::internal::I64>")]
    pub success: Option<i64>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ProgressCounter {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [failure][crate::model::ProgressCounter::failure].
    pub fn set_failure<T: Into<i64>>(mut self, v: T) -> Self {
        self.failure = Some(v.into());
        self
    }

    /// Sets or clears the value of [failure][crate::model::ProgressCounter::failure].
    pub fn set_or_clear_failure<T: Into<i64>>(mut self, v: Option<T>) -> Self {
        self.failure = v.map(|x| x.into());
        self
    }

    /// Sets the value of [pending][crate::model::ProgressCounter::pending].
    pub fn set_pending<T: Into<i64>>(mut self, v: T) -> Self {
        self.pending = Some(v.into());
        self
    }

    /// Sets or clears the value of [pending][crate::model::ProgressCounter::pending].
    pub fn set_or_clear_pending<T: Into<i64>>(mut self, v: Option<T>) -> Self {
        self.pending = v.map(|x| x.into());
        self
    }

    /// Sets the value of [success][crate::model::ProgressCounter::success].
    pub fn set_success<T: Into<i64>>(mut self, v: T) -> Self {
        self.success = Some(v.into());
        self
    }

    /// Sets or clears the value of [success][crate::model::ProgressCounter::success].
    pub fn set_or_clear_success<T: Into<i64>>(mut self, v: Option<T>) -> Self {
        self.success = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for ProgressCounter {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ProgressCounter"
    }
}

/// The Pub/Sub output destination. The Cloud Healthcare Service Agent requires
/// the `roles/pubsub.publisher` Cloud IAM role on the Pub/Sub topic.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PubsubDestination {
    /// The [Pub/Sub](https://cloud.google.com/pubsub/docs/) topic that Pub/Sub
    /// messages are published on. Supplied by the client. The `PubsubMessage`
    /// contains the following fields: * `PubsubMessage.Data` contains the
    /// resource name. * `PubsubMessage.MessageId` is the ID of this
    /// notification. It is guaranteed to be unique within the topic. *
    /// `PubsubMessage.PublishTime` is the time when the message was published.
    /// [Topic names](https://cloud.google.com/pubsub/docs/overview#names) must
    /// be scoped to a project. The Cloud Healthcare API service account,
    /// service-PROJECT_NUMBER@gcp-sa-healthcare.iam.gserviceaccount.com, must
    /// have publisher permissions on the given Pub/Sub topic. Not having
    /// adequate permissions causes the calls that send notifications to fail.
    pub pubsub_topic: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl PubsubDestination {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [pubsub_topic][crate::model::PubsubDestination::pubsub_topic].
    pub fn set_pubsub_topic<T: Into<String>>(mut self, v: T) -> Self {
        self.pubsub_topic = Some(v.into());
        self
    }

    /// Sets or clears the value of [pubsub_topic][crate::model::PubsubDestination::pubsub_topic].
    pub fn set_or_clear_pubsub_topic<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.pubsub_topic = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for PubsubDestination {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.PubsubDestination"
    }
}

/// Queries all data_ids that are consented for a given use in the given consent
/// store and writes them to a specified destination. The returned Operation
/// includes a progress counter for the number of User data mappings processed.
/// Errors are logged to Cloud Logging (see [Viewing error logs in Cloud
/// Logging] ( https://cloud.google.com/healthcare/docs/how-tos/logging) and [
/// QueryAccessibleData] for a sample log entry).
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct QueryAccessibleDataRequest {
    /// The Cloud Storage location for export.
    pub gcs_destination: Option<crate::model::GoogleCloudHealthcareV1ConsentGcsDestination>,

    /// The values of request attributes associated with this access request.
    pub request_attributes: Option<std::collections::HashMap<String, String>>,

    /// Optional. The values of resource attributes associated with the type of
    /// resources being requested. If no values are specified, then all resource
    /// types are included in the output.
    pub resource_attributes: Option<std::collections::HashMap<String, String>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl QueryAccessibleDataRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gcs_destination][crate::model::QueryAccessibleDataRequest::gcs_destination].
    pub fn set_gcs_destination<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::GoogleCloudHealthcareV1ConsentGcsDestination>,
    {
        self.gcs_destination = Some(v.into());
        self
    }

    /// Sets or clears the value of [gcs_destination][crate::model::QueryAccessibleDataRequest::gcs_destination].
    pub fn set_or_clear_gcs_destination<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::GoogleCloudHealthcareV1ConsentGcsDestination>,
    {
        self.gcs_destination = v.map(|x| x.into());
        self
    }

    /// Sets the value of [request_attributes][crate::model::QueryAccessibleDataRequest::request_attributes].
    pub fn set_request_attributes<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.request_attributes = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [resource_attributes][crate::model::QueryAccessibleDataRequest::resource_attributes].
    pub fn set_resource_attributes<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.resource_attributes = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }
}

impl apicore::message::Message for QueryAccessibleDataRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.QueryAccessibleDataRequest"
    }
}

/// Response for successful QueryAccessibleData operations. This structure is
/// included in the response upon operation completion.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct QueryAccessibleDataResponse {
    /// List of files, each of which contains a list of data_id(s) that are
    /// consented for a specified use in the request.
    pub gcs_uris: Option<Vec<String>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl QueryAccessibleDataResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [gcs_uris][crate::model::QueryAccessibleDataResponse::gcs_uris].
    pub fn set_gcs_uris<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.gcs_uris = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for QueryAccessibleDataResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.QueryAccessibleDataResponse"
    }
}

/// Define how to redact sensitive values. Default behaviour is erase. For
/// example, "My name is Jane." becomes "My name is ."
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RedactConfig {
    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl RedactConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

impl apicore::message::Message for RedactConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.RedactConfig"
    }
}

/// Rejects the latest revision of the specified Consent by committing a new
/// revision with `state` updated to `REJECTED`. If the latest revision of the
/// given Consent is in the `REJECTED` state, no new revision is committed.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RejectConsentRequest {
    /// Optional. The resource name of the Consent artifact that contains
    /// documentation of the user's rejection of the draft Consent, of the form
    /// `
    /// projects/{project_id}/locations/{location_id}/datasets/{dataset_id}/consentStores/{consent_store_id}/consentArtifacts/{consent_artifact_id}`.
    /// If the draft Consent had a Consent artifact, this Consent artifact
    /// overwrites it.
    pub consent_artifact: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl RejectConsentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [consent_artifact][crate::model::RejectConsentRequest::consent_artifact].
    pub fn set_consent_artifact<T: Into<String>>(mut self, v: T) -> Self {
        self.consent_artifact = Some(v.into());
        self
    }

    /// Sets or clears the value of [consent_artifact][crate::model::RejectConsentRequest::consent_artifact].
    pub fn set_or_clear_consent_artifact<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.consent_artifact = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for RejectConsentRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.RejectConsentRequest"
    }
}

/// When using the INSPECT_AND_TRANSFORM action, each match is replaced with the
/// name of the info_type. For example, "My name is Jane" becomes "My name is [
/// PERSON_NAME]." The TRANSFORM action is equivalent to redacting.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ReplaceWithInfoTypeConfig {
    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ReplaceWithInfoTypeConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

impl apicore::message::Message for ReplaceWithInfoTypeConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ReplaceWithInfoTypeConfig"
    }
}

/// A list of FHIR resources.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Resources {
    /// List of resources IDs. For example, "Patient/1234".
    pub resources: Option<Vec<String>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Resources {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resources][crate::model::Resources::resources].
    pub fn set_resources<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.resources = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for Resources {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.Resources"
    }
}

/// The consent evaluation result for a single `data_id`.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Result {
    /// The resource names of all evaluated Consents mapped to their evaluation.
    pub consent_details: Option<std::collections::HashMap<String, crate::model::ConsentEvaluation>>,

    /// Whether the resource is consented for the given use.
    pub consented: Option<bool>,

    /// The unique identifier of the evaluated resource.
    pub data_id: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Result {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [consent_details][crate::model::Result::consent_details].
    pub fn set_consent_details<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<crate::model::ConsentEvaluation>,
    {
        self.consent_details = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [consented][crate::model::Result::consented].
    pub fn set_consented<T: Into<bool>>(mut self, v: T) -> Self {
        self.consented = Some(v.into());
        self
    }

    /// Sets or clears the value of [consented][crate::model::Result::consented].
    pub fn set_or_clear_consented<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.consented = v.map(|x| x.into());
        self
    }

    /// Sets the value of [data_id][crate::model::Result::data_id].
    pub fn set_data_id<T: Into<String>>(mut self, v: T) -> Self {
        self.data_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [data_id][crate::model::Result::data_id].
    pub fn set_or_clear_data_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.data_id = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for Result {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.Result"
    }
}

/// Revokes the latest revision of the specified Consent by committing a new
/// revision with `state` updated to `REVOKED`. If the latest revision of the
/// given Consent is in the `REVOKED` state, no new revision is committed.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RevokeConsentRequest {
    /// Optional. The resource name of the Consent artifact that contains proof
    /// of the user's revocation of the Consent, of the form
    /// `projects/{project_id}/locations/{location_id}/datasets/{dataset_id}/consentStores/{consent_store_id}/consentArtifacts/{consent_artifact_id}`.
    pub consent_artifact: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl RevokeConsentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [consent_artifact][crate::model::RevokeConsentRequest::consent_artifact].
    pub fn set_consent_artifact<T: Into<String>>(mut self, v: T) -> Self {
        self.consent_artifact = Some(v.into());
        self
    }

    /// Sets or clears the value of [consent_artifact][crate::model::RevokeConsentRequest::consent_artifact].
    pub fn set_or_clear_consent_artifact<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.consent_artifact = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for RevokeConsentRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.RevokeConsentRequest"
    }
}

/// Configuration for the FHIR BigQuery schema. Determines how the server
/// generates the schema.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SchemaConfig {
    /// Configuration for FHIR BigQuery time-partitioned tables.
    pub last_updated_partition_config: Option<crate::model::TimePartitioning>,

    /// The depth for all recursive structures in the output analytics schema.
    /// For example, `concept` in the CodeSystem resource is a recursive
    /// structure; when the depth is 2, the CodeSystem table will have a column
    /// called `concept.concept` but not `concept.concept.concept`. If not
    /// specified or set to 0, the server will use the default value 2. The
    /// maximum depth allowed is 5.
    #[serde_as(as = "Option<apicore::internal::I64>")]
    pub recursive_structure_depth: Option<i64>,

    /// Specifies the output schema type. Schema type is required.
    pub schema_type: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SchemaConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [last_updated_partition_config][crate::model::SchemaConfig::last_updated_partition_config].
    pub fn set_last_updated_partition_config<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::TimePartitioning>,
    {
        self.last_updated_partition_config = Some(v.into());
        self
    }

    /// Sets or clears the value of [last_updated_partition_config][crate::model::SchemaConfig::last_updated_partition_config].
    pub fn set_or_clear_last_updated_partition_config<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::TimePartitioning>,
    {
        self.last_updated_partition_config = v.map(|x| x.into());
        self
    }

    /// Sets the value of [recursive_structure_depth][crate::model::SchemaConfig::recursive_structure_depth].
    pub fn set_recursive_structure_depth<T: Into<i64>>(mut self, v: T) -> Self {
        self.recursive_structure_depth = Some(v.into());
        self
    }

    /// Sets or clears the value of [recursive_structure_depth][crate::model::SchemaConfig::recursive_structure_depth].
    pub fn set_or_clear_recursive_structure_depth<T: Into<i64>>(mut self, v: Option<T>) -> Self {
        self.recursive_structure_depth = v.map(|x| x.into());
        self
    }

    /// Sets the value of [schema_type][crate::model::SchemaConfig::schema_type].
    pub fn set_schema_type<T: Into<String>>(mut self, v: T) -> Self {
        self.schema_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [schema_type][crate::model::SchemaConfig::schema_type].
    pub fn set_or_clear_schema_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.schema_type = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for SchemaConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.SchemaConfig"
    }
}

/// An HL7v2 logical group construct.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SchemaGroup {
    /// True indicates that this is a choice group, meaning that only one of its
    /// segments can exist in a given message.
    pub choice: Option<bool>,

    /// The maximum number of times this group can be repeated. 0 or -1 means
    /// unbounded.
    pub max_occurs: Option<i32>,

    /// Nested groups and/or segments.
    pub members: Option<Vec<crate::model::GroupOrSegment>>,

    /// The minimum number of times this group must be present/repeated.
    pub min_occurs: Option<i32>,

    /// The name of this group. For example, "ORDER_DETAIL".
    pub name: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SchemaGroup {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [choice][crate::model::SchemaGroup::choice].
    pub fn set_choice<T: Into<bool>>(mut self, v: T) -> Self {
        self.choice = Some(v.into());
        self
    }

    /// Sets or clears the value of [choice][crate::model::SchemaGroup::choice].
    pub fn set_or_clear_choice<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.choice = v.map(|x| x.into());
        self
    }

    /// Sets the value of [max_occurs][crate::model::SchemaGroup::max_occurs].
    pub fn set_max_occurs<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_occurs = Some(v.into());
        self
    }

    /// Sets or clears the value of [max_occurs][crate::model::SchemaGroup::max_occurs].
    pub fn set_or_clear_max_occurs<T: Into<i32>>(mut self, v: Option<T>) -> Self {
        self.max_occurs = v.map(|x| x.into());
        self
    }

    /// Sets the value of [members][crate::model::SchemaGroup::members].
    pub fn set_members<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::GroupOrSegment>,
    {
        self.members = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [min_occurs][crate::model::SchemaGroup::min_occurs].
    pub fn set_min_occurs<T: Into<i32>>(mut self, v: T) -> Self {
        self.min_occurs = Some(v.into());
        self
    }

    /// Sets or clears the value of [min_occurs][crate::model::SchemaGroup::min_occurs].
    pub fn set_or_clear_min_occurs<T: Into<i32>>(mut self, v: Option<T>) -> Self {
        self.min_occurs = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::SchemaGroup::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::SchemaGroup::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for SchemaGroup {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.SchemaGroup"
    }
}

/// A schema package contains a set of schemas and type definitions.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SchemaPackage {
    /// Flag to ignore all min_occurs restrictions in the schema. This means
    /// that incoming messages can omit any group, segment, field, component, or
    /// subcomponent.
    pub ignore_min_occurs: Option<bool>,

    /// Schema configs that are layered based on their VersionSources that match
    /// the incoming message. Schema configs present in higher indices override
    /// those in lower indices with the same message type and trigger event if
    /// their VersionSources all match an incoming message.
    pub schemas: Option<Vec<crate::model::Hl7SchemaConfig>>,

    /// Determines how messages that fail to parse are handled.
    pub schematized_parsing_type: Option<String>,

    /// Schema type definitions that are layered based on their VersionSources
    /// that match the incoming message. Type definitions present in higher
    /// indices override those in lower indices with the same type name if their
    /// VersionSources all match an incoming message.
    pub types: Option<Vec<crate::model::Hl7TypesConfig>>,

    /// Determines how unexpected segments (segments not matched to the schema)
    /// are handled.
    pub unexpected_segment_handling: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SchemaPackage {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [ignore_min_occurs][crate::model::SchemaPackage::ignore_min_occurs].
    pub fn set_ignore_min_occurs<T: Into<bool>>(mut self, v: T) -> Self {
        self.ignore_min_occurs = Some(v.into());
        self
    }

    /// Sets or clears the value of [ignore_min_occurs][crate::model::SchemaPackage::ignore_min_occurs].
    pub fn set_or_clear_ignore_min_occurs<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.ignore_min_occurs = v.map(|x| x.into());
        self
    }

    /// Sets the value of [schemas][crate::model::SchemaPackage::schemas].
    pub fn set_schemas<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Hl7SchemaConfig>,
    {
        self.schemas = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [schematized_parsing_type][crate::model::SchemaPackage::schematized_parsing_type].
    pub fn set_schematized_parsing_type<T: Into<String>>(mut self, v: T) -> Self {
        self.schematized_parsing_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [schematized_parsing_type][crate::model::SchemaPackage::schematized_parsing_type].
    pub fn set_or_clear_schematized_parsing_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.schematized_parsing_type = v.map(|x| x.into());
        self
    }

    /// Sets the value of [types][crate::model::SchemaPackage::types].
    pub fn set_types<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Hl7TypesConfig>,
    {
        self.types = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [unexpected_segment_handling][crate::model::SchemaPackage::unexpected_segment_handling].
    pub fn set_unexpected_segment_handling<T: Into<String>>(mut self, v: T) -> Self {
        self.unexpected_segment_handling = Some(v.into());
        self
    }

    /// Sets or clears the value of [unexpected_segment_handling][crate::model::SchemaPackage::unexpected_segment_handling].
    pub fn set_or_clear_unexpected_segment_handling<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<String>,
    {
        self.unexpected_segment_handling = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for SchemaPackage {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.SchemaPackage"
    }
}

/// An HL7v2 Segment.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SchemaSegment {
    /// The maximum number of times this segment can be present in this group. 0
    /// or -1 means unbounded.
    pub max_occurs: Option<i32>,

    /// The minimum number of times this segment can be present in this group.
    pub min_occurs: Option<i32>,

    /// The Segment type. For example, "PID".
    pub r#type: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SchemaSegment {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [max_occurs][crate::model::SchemaSegment::max_occurs].
    pub fn set_max_occurs<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_occurs = Some(v.into());
        self
    }

    /// Sets or clears the value of [max_occurs][crate::model::SchemaSegment::max_occurs].
    pub fn set_or_clear_max_occurs<T: Into<i32>>(mut self, v: Option<T>) -> Self {
        self.max_occurs = v.map(|x| x.into());
        self
    }

    /// Sets the value of [min_occurs][crate::model::SchemaSegment::min_occurs].
    pub fn set_min_occurs<T: Into<i32>>(mut self, v: T) -> Self {
        self.min_occurs = Some(v.into());
        self
    }

    /// Sets or clears the value of [min_occurs][crate::model::SchemaSegment::min_occurs].
    pub fn set_or_clear_min_occurs<T: Into<i32>>(mut self, v: Option<T>) -> Self {
        self.min_occurs = v.map(|x| x.into());
        self
    }

    /// Sets the value of [type][crate::model::SchemaSegment::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets or clears the value of [type][crate::model::SchemaSegment::r#type].
    pub fn set_or_clear_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.r#type = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for SchemaSegment {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.SchemaSegment"
    }
}

/// The content of an HL7v2 message in a structured format as specified by a
/// schema.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SchematizedData {
    /// JSON output of the parser.
    pub data: Option<String>,

    /// The error output of the parser.
    pub error: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SchematizedData {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [data][crate::model::SchematizedData::data].
    pub fn set_data<T: Into<String>>(mut self, v: T) -> Self {
        self.data = Some(v.into());
        self
    }

    /// Sets or clears the value of [data][crate::model::SchematizedData::data].
    pub fn set_or_clear_data<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.data = v.map(|x| x.into());
        self
    }

    /// Sets the value of [error][crate::model::SchematizedData::error].
    pub fn set_error<T: Into<String>>(mut self, v: T) -> Self {
        self.error = Some(v.into());
        self
    }

    /// Sets or clears the value of [error][crate::model::SchematizedData::error].
    pub fn set_or_clear_error<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.error = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for SchematizedData {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.SchematizedData"
    }
}

/// Request to search the resources in the specified FHIR store.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchResourcesRequest {
    /// The FHIR resource type to search, such as Patient or Observation. For a
    /// complete list, see the FHIR Resource Index
    /// ([DSTU2](http://hl7.org/implement/standards/fhir/DSTU2/resourcelist.html),
    /// [STU3](http://hl7.org/implement/standards/fhir/STU3/resourcelist.html),
    /// [R4](http://hl7.org/implement/standards/fhir/R4/resourcelist.html)).
    pub resource_type: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SearchResourcesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resource_type][crate::model::SearchResourcesRequest::resource_type].
    pub fn set_resource_type<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_type = Some(v.into());
        self
    }

    /// Sets or clears the value of [resource_type][crate::model::SearchResourcesRequest::resource_type].
    pub fn set_or_clear_resource_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.resource_type = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for SearchResourcesRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.SearchResourcesRequest"
    }
}

/// A segment in a structured format.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Segment {
    /// A mapping from the positional location to the value. The key string uses
    /// zero-based indexes separated by dots to identify Fields, components and
    /// sub-components. A bracket notation is also used to identify different
    /// instances of a repeated field. Regex for key:
    /// (\d+)(\[\d+\])?(.\d+)?(.\d+)? Examples of ( key, value) pairs: * (0.1,
    /// "hemoglobin") denotes that the first component of Field 0 has the value
    /// "hemoglobin". * (1.1.2, "CBC") denotes that the second sub-component of
    /// the first component of Field 1 has the value "CBC". * (1[0].1, "HbA1c")
    /// denotes that the first component of the first Instance of Field 1, which
    /// is repeated, has the value "HbA1c".
    pub fields: Option<std::collections::HashMap<String, String>>,

    /// A string that indicates the type of segment. For example, EVN or PID.
    pub segment_id: Option<String>,

    /// Set ID for segments that can be in a set. This can be empty if it's
    /// missing or isn't applicable.
    pub set_id: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Segment {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [fields][crate::model::Segment::fields].
    pub fn set_fields<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.fields = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [segment_id][crate::model::Segment::segment_id].
    pub fn set_segment_id<T: Into<String>>(mut self, v: T) -> Self {
        self.segment_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [segment_id][crate::model::Segment::segment_id].
    pub fn set_or_clear_segment_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.segment_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [set_id][crate::model::Segment::set_id].
    pub fn set_set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.set_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [set_id][crate::model::Segment::set_id].
    pub fn set_or_clear_set_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.set_id = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for Segment {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.Segment"
    }
}

/// Request message for `SetIamPolicy` method.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SetIamPolicyRequest {
    /// REQUIRED: The complete policy to be applied to the `resource`. The size
    /// of the policy is limited to a few 10s of KB. An empty policy is a valid
    /// policy but certain Google Cloud services (such as Projects) might reject
    /// them.
    pub policy: Option<crate::model::Policy>,

    /// OPTIONAL: A FieldMask specifying which fields of the policy to modify.
    /// Only the fields in the mask will be modified. If no mask is provided,
    /// the following default mask is used: `paths: "bindings, etag"`
    pub update_mask: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl SetIamPolicyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [policy][crate::model::SetIamPolicyRequest::policy].
    pub fn set_policy<T: Into<crate::model::Policy>>(mut self, v: T) -> Self {
        self.policy = Some(v.into());
        self
    }

    /// Sets or clears the value of [policy][crate::model::SetIamPolicyRequest::policy].
    pub fn set_or_clear_policy<T: Into<crate::model::Policy>>(mut self, v: Option<T>) -> Self {
        self.policy = v.map(|x| x.into());
        self
    }

    /// Sets the value of [update_mask][crate::model::SetIamPolicyRequest::update_mask].
    pub fn set_update_mask<T: Into<String>>(mut self, v: T) -> Self {
        self.update_mask = Some(v.into());
        self
    }

    /// Sets or clears the value of [update_mask][crate::model::SetIamPolicyRequest::update_mask].
    pub fn set_or_clear_update_mask<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.update_mask = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for SetIamPolicyRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.SetIamPolicyRequest"
    }
}

/// User signature.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Signature {
    /// Raw bytes representing consent artifact content.
    pub image: Option<crate::model::Image>,

    /// Optional. Metadata associated with the user's signature. For example,
    /// the user' s name or the user's title.
    pub metadata: Option<std::collections::HashMap<String, String>>,

    /// Optional. Timestamp of the signature.
    pub signature_time: Option<String>,

    /// Required. User's UUID provided by the client.
    pub user_id: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Signature {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [image][crate::model::Signature::image].
    pub fn set_image<T: Into<crate::model::Image>>(mut self, v: T) -> Self {
        self.image = Some(v.into());
        self
    }

    /// Sets or clears the value of [image][crate::model::Signature::image].
    pub fn set_or_clear_image<T: Into<crate::model::Image>>(mut self, v: Option<T>) -> Self {
        self.image = v.map(|x| x.into());
        self
    }

    /// Sets the value of [metadata][crate::model::Signature::metadata].
    pub fn set_metadata<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.metadata = Some(v.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    /// Sets the value of [signature_time][crate::model::Signature::signature_time].
    pub fn set_signature_time<T: Into<String>>(mut self, v: T) -> Self {
        self.signature_time = Some(v.into());
        self
    }

    /// Sets or clears the value of [signature_time][crate::model::Signature::signature_time].
    pub fn set_or_clear_signature_time<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.signature_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [user_id][crate::model::Signature::user_id].
    pub fn set_user_id<T: Into<String>>(mut self, v: T) -> Self {
        self.user_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [user_id][crate::model::Signature::user_id].
    pub fn set_or_clear_user_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.user_id = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for Signature {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.Signature"
    }
}

/// The `Status` type defines a logical error model that is suitable for
/// different programming environments, including REST APIs and RPC APIs. It is
/// used by [ gRPC](https://github.com/grpc). Each `Status` message contains
/// three pieces of data: error code, error message, and error details. You can
/// find out more about this error model and how to work with it in the [API
/// Design Guide](https: //cloud.google.com/apis/design/errors).
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
        "type.googleapis.com/google.cloud.healthcare.v1.Status"
    }
}

/// Contains configuration for streaming FHIR export.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StreamConfig {
    /// The configuration for exporting to BigQuery.
    pub bigquery_destination: Option<crate::model::GoogleCloudHealthcareV1FhirBigQueryDestination>,

    /// Contains configuration for streaming de-identified FHIR export.
    pub deidentified_store_destination: Option<crate::model::DeidentifiedStoreDestination>,

    /// Supply a FHIR resource type (such as "Patient" or "Observation"). See
    /// https://www.hl7.org/fhir/valueset-resource-types.html for a list of all
    /// FHIR resource types. The server treats an empty list as an intent to
    /// stream all the supported resource types in this FHIR store.
    pub resource_types: Option<Vec<String>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl StreamConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [bigquery_destination][crate::model::StreamConfig::bigquery_destination].
    pub fn set_bigquery_destination<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::GoogleCloudHealthcareV1FhirBigQueryDestination>,
    {
        self.bigquery_destination = Some(v.into());
        self
    }

    /// Sets or clears the value of [bigquery_destination][crate::model::StreamConfig::bigquery_destination].
    pub fn set_or_clear_bigquery_destination<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::GoogleCloudHealthcareV1FhirBigQueryDestination>,
    {
        self.bigquery_destination = v.map(|x| x.into());
        self
    }

    /// Sets the value of [deidentified_store_destination][crate::model::StreamConfig::deidentified_store_destination].
    pub fn set_deidentified_store_destination<T>(mut self, v: T) -> Self
    where
        T: Into<crate::model::DeidentifiedStoreDestination>,
    {
        self.deidentified_store_destination = Some(v.into());
        self
    }

    /// Sets or clears the value of [deidentified_store_destination][crate::model::StreamConfig::deidentified_store_destination].
    pub fn set_or_clear_deidentified_store_destination<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<crate::model::DeidentifiedStoreDestination>,
    {
        self.deidentified_store_destination = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_types][crate::model::StreamConfig::resource_types].
    pub fn set_resource_types<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.resource_types = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for StreamConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.StreamConfig"
    }
}

/// List of tags to be filtered.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TagFilterList {
    /// Tags to be filtered. Tags must be DICOM Data Elements, File Meta
    /// Elements, or Directory Structuring Elements, as defined at:
    /// http://dicom.nema.org/medical/dicom/current/output/html/part06.html#table_6-1,.
    /// They may be provided by " Keyword" or "Tag". For example "PatientID",
    /// "00100010".
    pub tags: Option<Vec<String>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl TagFilterList {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [tags][crate::model::TagFilterList::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.tags = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for TagFilterList {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.TagFilterList"
    }
}

/// Request message for `TestIamPermissions` method.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TestIamPermissionsRequest {
    /// The set of permissions to check for the `resource`. Permissions with
    /// wildcards (such as `*` or `storage.*`) are not allowed. For more
    /// information see [IAM
    /// Overview](https://cloud.google.com/iam/docs/overview#permissions).
    pub permissions: Option<Vec<String>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl TestIamPermissionsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [permissions][crate::model::TestIamPermissionsRequest::permissions].
    pub fn set_permissions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.permissions = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for TestIamPermissionsRequest {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.TestIamPermissionsRequest"
    }
}

/// Response message for `TestIamPermissions` method.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TestIamPermissionsResponse {
    /// A subset of `TestPermissionsRequest.permissions` that the caller is
    /// allowed.
    pub permissions: Option<Vec<String>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl TestIamPermissionsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [permissions][crate::model::TestIamPermissionsResponse::permissions].
    pub fn set_permissions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.permissions = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for TestIamPermissionsResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.TestIamPermissionsResponse"
    }
}

#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TextConfig {
    /// Transformations to apply to the detected data, overridden by `
    /// exclude_info_types`.
    pub additional_transformations: Option<Vec<crate::model::InfoTypeTransformation>>,

    /// InfoTypes to skip transforming, overriding `additional_transformations`.
    pub exclude_info_types: Option<Vec<String>>,

    /// The transformations to apply to the detected data. Deprecated. Use `
    /// additional_transformations` instead.
    pub transformations: Option<Vec<crate::model::InfoTypeTransformation>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl TextConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [additional_transformations][crate::model::TextConfig::additional_transformations].
    pub fn set_additional_transformations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::InfoTypeTransformation>,
    {
        self.additional_transformations = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [exclude_info_types][crate::model::TextConfig::exclude_info_types].
    pub fn set_exclude_info_types<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.exclude_info_types = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [transformations][crate::model::TextConfig::transformations].
    pub fn set_transformations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::InfoTypeTransformation>,
    {
        self.transformations = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for TextConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.TextConfig"
    }
}

/// A span of text in the provided document.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TextSpan {
    /// The unicode codepoint index of the beginning of this span.
    pub begin_offset: Option<i32>,

    /// The original text contained in this span.
    pub content: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl TextSpan {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [begin_offset][crate::model::TextSpan::begin_offset].
    pub fn set_begin_offset<T: Into<i32>>(mut self, v: T) -> Self {
        self.begin_offset = Some(v.into());
        self
    }

    /// Sets or clears the value of [begin_offset][crate::model::TextSpan::begin_offset].
    pub fn set_or_clear_begin_offset<T: Into<i32>>(mut self, v: Option<T>) -> Self {
        self.begin_offset = v.map(|x| x.into());
        self
    }

    /// Sets the value of [content][crate::model::TextSpan::content].
    pub fn set_content<T: Into<String>>(mut self, v: T) -> Self {
        self.content = Some(v.into());
        self
    }

    /// Sets or clears the value of [content][crate::model::TextSpan::content].
    pub fn set_or_clear_content<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.content = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for TextSpan {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.TextSpan"
    }
}

/// Configuration for FHIR BigQuery time-partitioned tables.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TimePartitioning {
    /// Number of milliseconds for which to keep the storage for a partition.
    #[serde_as(as = "Option<apicore::internal::I64>")]
    pub expiration_ms: Option<i64>,

    /// Type of partitioning.
    pub r#type: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl TimePartitioning {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [expiration_ms][crate::model::TimePartitioning::expiration_ms].
    pub fn set_expiration_ms<T: Into<i64>>(mut self, v: T) -> Self {
        self.expiration_ms = Some(v.into());
        self
    }

    /// Sets or clears the value of [expiration_ms][crate::model::TimePartitioning::expiration_ms].
    pub fn set_or_clear_expiration_ms<T: Into<i64>>(mut self, v: Option<T>) -> Self {
        self.expiration_ms = v.map(|x| x.into());
        self
    }

    /// Sets the value of [type][crate::model::TimePartitioning::r#type].
    pub fn set_type<T: Into<String>>(mut self, v: T) -> Self {
        self.r#type = Some(v.into());
        self
    }

    /// Sets or clears the value of [type][crate::model::TimePartitioning::r#type].
    pub fn set_or_clear_type<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.r#type = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for TimePartitioning {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.TimePartitioning"
    }
}

/// A type definition for some HL7v2 type (incl. Segments and Datatypes).
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Type {
    /// The (sub) fields this type has (if not primitive).
    pub fields: Option<Vec<crate::model::Field>>,

    /// The name of this type. This would be the segment or datatype name. For
    /// example, "PID" or "XPN".
    pub name: Option<String>,

    /// If this is a primitive type then this field is the type of the primitive
    /// For example, STRING. Leave unspecified for composite types.
    pub primitive: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl Type {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [fields][crate::model::Type::fields].
    pub fn set_fields<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Field>,
    {
        self.fields = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [name][crate::model::Type::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::Type::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [primitive][crate::model::Type::primitive].
    pub fn set_primitive<T: Into<String>>(mut self, v: T) -> Self {
        self.primitive = Some(v.into());
        self
    }

    /// Sets or clears the value of [primitive][crate::model::Type::primitive].
    pub fn set_or_clear_primitive<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.primitive = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for Type {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.Type"
    }
}

/// Maps a resource to the associated user and Attributes.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UserDataMapping {
    /// Output only. Indicates the time when this mapping was archived.
    pub archive_time: Option<String>,

    /// Output only. Indicates whether this mapping is archived.
    pub archived: Option<bool>,

    /// Required. A unique identifier for the mapped resource.
    pub data_id: Option<String>,

    /// Resource name of the User data mapping, of the form
    /// `projects/{project_id}/locations/{location_id}/datasets/{dataset_id}/consentStores/{consent_store_id}/userDataMappings/{user_data_mapping_id}`.
    pub name: Option<String>,

    /// Attributes of the resource. Only explicitly set attributes are displayed
    /// here. Attribute definitions with defaults set implicitly apply to these
    /// User data mappings. Attributes listed here must be single valued, that
    /// is, exactly one value is specified for the field "values" in each
    /// Attribute.
    pub resource_attributes: Option<Vec<crate::model::Attribute>>,

    /// Required. User's UUID provided by the client.
    pub user_id: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl UserDataMapping {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [archive_time][crate::model::UserDataMapping::archive_time].
    pub fn set_archive_time<T: Into<String>>(mut self, v: T) -> Self {
        self.archive_time = Some(v.into());
        self
    }

    /// Sets or clears the value of [archive_time][crate::model::UserDataMapping::archive_time].
    pub fn set_or_clear_archive_time<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.archive_time = v.map(|x| x.into());
        self
    }

    /// Sets the value of [archived][crate::model::UserDataMapping::archived].
    pub fn set_archived<T: Into<bool>>(mut self, v: T) -> Self {
        self.archived = Some(v.into());
        self
    }

    /// Sets or clears the value of [archived][crate::model::UserDataMapping::archived].
    pub fn set_or_clear_archived<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.archived = v.map(|x| x.into());
        self
    }

    /// Sets the value of [data_id][crate::model::UserDataMapping::data_id].
    pub fn set_data_id<T: Into<String>>(mut self, v: T) -> Self {
        self.data_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [data_id][crate::model::UserDataMapping::data_id].
    pub fn set_or_clear_data_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.data_id = v.map(|x| x.into());
        self
    }

    /// Sets the value of [name][crate::model::UserDataMapping::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets or clears the value of [name][crate::model::UserDataMapping::name].
    pub fn set_or_clear_name<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.name = v.map(|x| x.into());
        self
    }

    /// Sets the value of [resource_attributes][crate::model::UserDataMapping::resource_attributes].
    pub fn set_resource_attributes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<crate::model::Attribute>,
    {
        self.resource_attributes = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [user_id][crate::model::UserDataMapping::user_id].
    pub fn set_user_id<T: Into<String>>(mut self, v: T) -> Self {
        self.user_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [user_id][crate::model::UserDataMapping::user_id].
    pub fn set_or_clear_user_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.user_id = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for UserDataMapping {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.UserDataMapping"
    }
}

/// Contains the configuration for FHIR profiles and validation.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ValidationConfig {
    /// Whether to disable FHIRPath validation for incoming resources. Set this
    /// to true to disable checking incoming resources for conformance against
    /// FHIRPath requirement defined in the FHIR specification. This property
    /// only affects resource types that do not have profiles configured for
    /// them, any rules in enabled implementation guides will still be enforced.
    pub disable_fhirpath_validation: Option<bool>,

    /// Whether to disable profile validation for this FHIR store. Set this to
    /// true to disable checking incoming resources for conformance against
    /// structure definitions in this FHIR store.
    pub disable_profile_validation: Option<bool>,

    /// Whether to disable reference type validation for incoming resources. Set
    /// this to true to disable checking incoming resources for conformance
    /// against reference type requirement defined in the FHIR specification.
    /// This property only affects resource types that do not have profiles
    /// configured for them, any rules in enabled implementation guides will
    /// still be enforced.
    pub disable_reference_type_validation: Option<bool>,

    /// Whether to disable required fields validation for incoming resources.
    /// Set this to true to disable checking incoming resources for conformance
    /// against required fields requirement defined in the FHIR specification.
    /// This property only affects resource types that do not have profiles
    /// configured for them, any rules in enabled implementation guides will
    /// still be enforced.
    pub disable_required_field_validation: Option<bool>,

    /// A list of implementation guide URLs in this FHIR store that are used to
    /// configure the profiles to use for validation. For example, to use the US
    /// Core profiles for validation, set `enabled_implementation_guides` to
    /// `["http://hl7.org/fhir/us/core/ImplementationGuide/ig"]`. If
    /// `enabled_implementation_guides` is empty or omitted, then incoming
    /// resources are only required to conform to the base FHIR profiles.
    /// Otherwise, a resource must conform to at least one profile listed in the
    /// `global` property of one of the enabled ImplementationGuides. The Cloud
    /// Healthcare API does not currently enforce all of the rules in a
    /// StructureDefinition. The following rules are supported: -min/max -
    /// minValue/maxValue - maxLength - type - fixed[x] - pattern[x] on simple
    /// types - slicing, when using "value" as the discriminator type When a URL
    /// cannot be resolved (for example, in a type assertion), the server does
    /// not return an error.
    pub enabled_implementation_guides: Option<Vec<String>>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl ValidationConfig {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [disable_fhirpath_validation][crate::model::ValidationConfig::disable_fhirpath_validation].
    pub fn set_disable_fhirpath_validation<T: Into<bool>>(mut self, v: T) -> Self {
        self.disable_fhirpath_validation = Some(v.into());
        self
    }

    /// Sets or clears the value of [disable_fhirpath_validation][crate::model::ValidationConfig::disable_fhirpath_validation].
    pub fn set_or_clear_disable_fhirpath_validation<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.disable_fhirpath_validation = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disable_profile_validation][crate::model::ValidationConfig::disable_profile_validation].
    pub fn set_disable_profile_validation<T: Into<bool>>(mut self, v: T) -> Self {
        self.disable_profile_validation = Some(v.into());
        self
    }

    /// Sets or clears the value of [disable_profile_validation][crate::model::ValidationConfig::disable_profile_validation].
    pub fn set_or_clear_disable_profile_validation<T: Into<bool>>(mut self, v: Option<T>) -> Self {
        self.disable_profile_validation = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disable_reference_type_validation][crate::model::ValidationConfig::disable_reference_type_validation].
    pub fn set_disable_reference_type_validation<T: Into<bool>>(mut self, v: T) -> Self {
        self.disable_reference_type_validation = Some(v.into());
        self
    }

    /// Sets or clears the value of [disable_reference_type_validation][crate::model::ValidationConfig::disable_reference_type_validation].
    pub fn set_or_clear_disable_reference_type_validation<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<bool>,
    {
        self.disable_reference_type_validation = v.map(|x| x.into());
        self
    }

    /// Sets the value of [disable_required_field_validation][crate::model::ValidationConfig::disable_required_field_validation].
    pub fn set_disable_required_field_validation<T: Into<bool>>(mut self, v: T) -> Self {
        self.disable_required_field_validation = Some(v.into());
        self
    }

    /// Sets or clears the value of [disable_required_field_validation][crate::model::ValidationConfig::disable_required_field_validation].
    pub fn set_or_clear_disable_required_field_validation<T>(mut self, v: Option<T>) -> Self
    where
        T: Into<bool>,
    {
        self.disable_required_field_validation = v.map(|x| x.into());
        self
    }

    /// Sets the value of [enabled_implementation_guides][crate::model::ValidationConfig::enabled_implementation_guides].
    pub fn set_enabled_implementation_guides<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.enabled_implementation_guides = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

impl apicore::message::Message for ValidationConfig {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.ValidationConfig"
    }
}

/// Describes a selector for extracting and matching an MSH field to a value.
#[serde_with::serde_as]
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct VersionSource {
    /// The field to extract from the MSH segment. For example, "3.1" or
    /// "18[1].1".
    pub msh_field: Option<String>,

    /// The value to match with the field. For example, "My Application Name" or
    /// "2.3".
    pub value: Option<String>,

    #[serde(flatten)]
    _unknown_fields: serde_json::Map<String, serde_json::Value>,
}

impl VersionSource {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [msh_field][crate::model::VersionSource::msh_field].
    pub fn set_msh_field<T: Into<String>>(mut self, v: T) -> Self {
        self.msh_field = Some(v.into());
        self
    }

    /// Sets or clears the value of [msh_field][crate::model::VersionSource::msh_field].
    pub fn set_or_clear_msh_field<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.msh_field = v.map(|x| x.into());
        self
    }

    /// Sets the value of [value][crate::model::VersionSource::value].
    pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }

    /// Sets or clears the value of [value][crate::model::VersionSource::value].
    pub fn set_or_clear_value<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.value = v.map(|x| x.into());
        self
    }
}

impl apicore::message::Message for VersionSource {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.healthcare.v1.VersionSource"
    }
}
