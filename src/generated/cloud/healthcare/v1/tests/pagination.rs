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

//! Iterate over list RPCs using the Healthcare list responses.

#[cfg(test)]
mod test {
    use apicore::paginator::{PageableResponse, Paginator};
    use futures::TryStreamExt;
    use google_cloud_healthcare_v1::model::{Dataset, ListDatasetsResponse, ListFhirStoresResponse};
    use serde_json::json;
    use std::collections::HashMap;
    type TestResult = anyhow::Result<()>;

    fn pages() -> HashMap<String, serde_json::Value> {
        HashMap::from([
            (
                String::new(),
                json!({
                    "datasets": [{"name": "d1"}, {"name": "d2"}],
                    "nextPageToken": "page-2"
                }),
            ),
            (
                "page-2".to_string(),
                json!({
                    "datasets": [{"name": "d3", "timeZone": "UTC"}],
                    "nextPageToken": "page-3"
                }),
            ),
            ("page-3".to_string(), json!({"nextPageToken": ""})),
        ])
    }

    async fn list_datasets(token: String) -> anyhow::Result<ListDatasetsResponse> {
        let page = pages()
            .remove(&token)
            .ok_or_else(|| anyhow::anyhow!("unexpected token {token}"))?;
        Ok(serde_json::from_value(page)?)
    }

    #[test]
    fn pageable_response() -> TestResult {
        let page = serde_json::from_value::<ListFhirStoresResponse>(json!({
            "fhirStores": [{"name": "f1"}],
            "nextPageToken": "abc"
        }))?;
        assert_eq!(page.next_page_token(), "abc");
        let names: Vec<_> = page.items().into_iter().filter_map(|s| s.name).collect();
        assert_eq!(names, vec!["f1".to_string()]);

        let page = ListFhirStoresResponse::new();
        assert_eq!(page.next_page_token(), "");
        assert!(page.items().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn pages_until_empty_token() -> TestResult {
        let paginator = Paginator::new(String::new(), list_datasets);
        let pages: Vec<ListDatasetsResponse> = paginator.try_collect().await?;
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[2].datasets, None);
        Ok(())
    }

    #[tokio::test]
    async fn items() -> TestResult {
        let items: Vec<Dataset> = Paginator::new(String::new(), list_datasets)
            .items()
            .try_collect()
            .await?;
        let names: Vec<_> = items.iter().filter_map(|d| d.name.as_deref()).collect();
        assert_eq!(names, vec!["d1", "d2", "d3"]);
        assert_eq!(items[2].time_zone.as_deref(), Some("UTC"));
        Ok(())
    }

    #[tokio::test]
    async fn stops_on_error() -> TestResult {
        let mut paginator = Paginator::new("bad-token".to_string(), list_datasets);
        let first = paginator.next().await;
        assert!(matches!(first, Some(Err(_))), "{first:?}");
        assert!(paginator.next().await.is_none());
        Ok(())
    }
}
