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

//! List responses and partial updates of Workload Manager resources.

#[cfg(test)]
mod test {
    use apicore::message::MessageExt;
    use apicore::paginator::{PageableResponse, Paginator};
    use futures::TryStreamExt;
    use google_cloud_workloadmanager_v1::model::{
        Execution, ExternalDataSources, ListExecutionsResponse, ListRulesResponse, Rule,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;
    type TestResult = anyhow::Result<()>;

    async fn list_rules(token: String) -> anyhow::Result<ListRulesResponse> {
        let page = match token.as_str() {
            "" => json!({
                "rules": [
                    {"name": "r1", "severity": "HIGH", "tags": ["backup"]},
                    {"name": "r2", "severity": "LOW"}
                ],
                "nextPageToken": "next"
            }),
            "next" => json!({"rules": [{"name": "r3", "revisionId": "v2"}]}),
            _ => anyhow::bail!("unexpected token {token}"),
        };
        Ok(serde_json::from_value(page)?)
    }

    #[tokio::test]
    async fn list_rules_items() -> TestResult {
        let rules: Vec<Rule> = Paginator::new(String::new(), list_rules)
            .items()
            .try_collect()
            .await?;
        let names: Vec<_> = rules.iter().filter_map(|r| r.name.as_deref()).collect();
        assert_eq!(names, vec!["r1", "r2", "r3"]);
        assert_eq!(rules[2].revision_id.as_deref(), Some("v2"));
        Ok(())
    }

    #[test]
    fn unreachable_locations() -> TestResult {
        let page = serde_json::from_value::<ListExecutionsResponse>(json!({
            "executions": [{"name": "x1", "state": "SUCCEEDED"}],
            "unreachable": ["europe-west1"],
            "nextPageToken": ""
        }))?;
        assert_eq!(page.unreachable, Some(vec!["europe-west1".to_string()]));
        assert_eq!(page.next_page_token(), "");
        let items = page.items();
        assert_eq!(
            items,
            vec![Execution::new().set_name("x1").set_state("SUCCEEDED")]
        );
        Ok(())
    }

    #[test]
    fn update_execution() -> TestResult {
        let mut execution = Execution::new()
            .set_name("projects/p/locations/us-central1/evaluations/e1/executions/x1")
            .set_state("RUNNING")
            .set_run_type("ONE_TIME")
            .set_labels([("trigger", "manual")]);
        let args = json!({
            "state": "SUCCEEDED",
            "endTime": "2025-03-01T10:05:00Z",
            "externalDataSources": [{"name": "cmdb", "type": "BIG_QUERY_TABLE", "uri": "p.d.t"}]
        });
        execution.update(args.as_object().cloned().unwrap_or_default())?;
        let want = Execution::new()
            .set_name("projects/p/locations/us-central1/evaluations/e1/executions/x1")
            .set_state("SUCCEEDED")
            .set_run_type("ONE_TIME")
            .set_labels([("trigger", "manual")])
            .set_end_time("2025-03-01T10:05:00Z")
            .set_external_data_sources([ExternalDataSources::new()
                .set_name("cmdb")
                .set_type("BIG_QUERY_TABLE")
                .set_uri("p.d.t")]);
        assert_eq!(execution, want);

        let end_time = execution
            .end_time
            .as_deref()
            .map(apicore::timestamp::parse)
            .transpose()?;
        let start = apicore::timestamp::parse("2025-03-01T10:00:00Z")?;
        assert_eq!(end_time.map(|t| (t - start).whole_minutes()), Some(5));
        Ok(())
    }

    #[test]
    fn clear_labels() -> TestResult {
        let mut execution = Execution::new()
            .set_name("x1")
            .set_labels([("trigger", "manual")]);
        execution.update(json!({"labels": null}).as_object().cloned().unwrap_or_default())?;
        assert_eq!(execution, Execution::new().set_name("x1"));
        Ok(())
    }
}
