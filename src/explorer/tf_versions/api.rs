//! Terraform version API operations

use crate::error::Result;
use crate::explorer::filter::Filter;
use crate::explorer::ExplorerClient;

use super::models::{TfVersion, TfVersionField};

impl ExplorerClient {
    /// List Terraform versions in use across the organization
    pub async fn tf_versions(&self, filters: &[Filter<TfVersionField>]) -> Result<Vec<TfVersion>> {
        self.query::<TfVersion>(filters).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explorer::filter::FilterOperator;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_tf_versions_uses_underscore_type() {
        let mock_server = MockServer::start().await;
        let client = ExplorerClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/my-org/explorer"))
            .and(query_param("type", "tf_versions"))
            .and(query_param("filter[0][version][contains][0]", "1.5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{
                    "id": "tfv-1",
                    "type": "tf-versions",
                    "attributes": {
                        "version": "1.5.7",
                        "workspace-count": 4,
                        "workspaces": "a, b, c, d"
                    }
                }],
                "links": {"next": null},
                "meta": {"pagination": {"next-page": null}}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let filters = vec![Filter::new(
            TfVersionField::Version,
            FilterOperator::Contains,
            "1.5",
        )];
        let versions = client.tf_versions(&filters).await.unwrap();
        assert_eq!(versions.len(), 1);
        assert_eq!(versions[0].version, "1.5.7");
        assert_eq!(versions[0].workspace_count, 4);
    }

    #[tokio::test]
    async fn test_tf_versions_missing_field_is_decode_error() {
        let mock_server = MockServer::start().await;
        let client = ExplorerClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/my-org/explorer"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{"attributes": {"version": "1.5.7"}}],
                "links": {"next": null},
                "meta": {"pagination": {"next-page": null}}
            })))
            .mount(&mock_server)
            .await;

        let err = client.tf_versions(&[]).await.unwrap_err();
        assert!(err.to_string().contains("page 1"));
        assert!(err.to_string().contains("workspace-count"));
    }
}
