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

//! Partial updates of Healthcare resources.

#[cfg(test)]
mod test {
    use apicore::message::{MessageExt, from_json_object, to_json_object};
    use google_cloud_healthcare_v1::model::{ConsentStore, Hl7V2Store, ParserConfig};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    type TestResult = anyhow::Result<()>;

    fn args(value: serde_json::Value) -> apicore::Map {
        value.as_object().cloned().unwrap_or_default()
    }

    fn store() -> ConsentStore {
        ConsentStore::new()
            .set_name("projects/p/locations/us/datasets/d/consentStores/c")
            .set_default_consent_ttl("3600s")
            .set_enable_consent_create_on_update(true)
            .set_labels([("env", "test")])
    }

    #[test]
    fn present_keys_overwrite() -> TestResult {
        let mut store = store();
        store.update(args(json!({"defaultConsentTtl": "7200s", "labels": {"env": "prod"}})))?;
        let want = ConsentStore::new()
            .set_name("projects/p/locations/us/datasets/d/consentStores/c")
            .set_default_consent_ttl("7200s")
            .set_enable_consent_create_on_update(true)
            .set_labels([("env", "prod")]);
        assert_eq!(store, want);
        Ok(())
    }

    #[test]
    fn empty_update_is_a_no_op() -> TestResult {
        let mut store = store();
        store.update(apicore::Map::new())?;
        assert_eq!(store, self::store());
        Ok(())
    }

    #[test]
    fn null_clears() -> TestResult {
        let mut store = store();
        store.update(args(json!({"enableConsentCreateOnUpdate": null})))?;
        assert_eq!(store.enable_consent_create_on_update, None);
        assert_eq!(store.default_consent_ttl.as_deref(), Some("3600s"));
        Ok(())
    }

    #[test]
    fn invalid_update() {
        let mut store = store();
        let got = store.update(args(json!({"name": "other", "enableConsentCreateOnUpdate": "yes"})));
        assert!(matches!(got, Err(ref e) if e.is_deserialization()), "{got:?}");
        assert_eq!(store, self::store());
    }

    #[test]
    fn nested_values_are_replaced() -> TestResult {
        let mut store = Hl7V2Store::new()
            .set_name("projects/p/locations/us/datasets/d/hl7V2Stores/h")
            .set_parser_config(
                ParserConfig::new()
                    .set_allow_null_header(true)
                    .set_version("V3")
                    .set_segment_terminator(bytes::Bytes::from_static(b"\r")),
            );
        store.update(args(json!({"parserConfig": {"segmentTerminator": "Cg=="}})))?;
        let want = ParserConfig::new().set_segment_terminator(bytes::Bytes::from_static(b"\n"));
        assert_eq!(store.parser_config, Some(want));
        assert_eq!(
            store.name.as_deref(),
            Some("projects/p/locations/us/datasets/d/hl7V2Stores/h")
        );
        Ok(())
    }

    #[test]
    fn merge_from() -> TestResult {
        let mut store = store();
        let patch = ConsentStore::new().set_default_consent_ttl("60s");
        store.merge_from(&patch)?;
        assert_eq!(store.default_consent_ttl.as_deref(), Some("60s"));
        assert_eq!(store.enable_consent_create_on_update, Some(true));
        Ok(())
    }

    #[test]
    fn keyword_construction() -> TestResult {
        let input = args(json!({
            "name": "projects/p/locations/us/datasets/d/consentStores/c",
            "defaultConsentTtl": "3600s",
            "enableConsentCreateOnUpdate": true,
            "labels": {"env": "test"}
        }));
        let got = from_json_object::<ConsentStore>(&input)?;
        assert_eq!(got, store());
        assert_eq!(to_json_object(&got)?, input);
        Ok(())
    }
}
