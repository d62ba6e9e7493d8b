//! Private registry API operations

use crate::config::api;
use crate::error::Result;
use crate::explorer::ExplorerClient;

use super::models::RegistryModule;

impl ExplorerClient {
    /// List every module in the organization's private registry
    ///
    /// Uses the same page walker as the Explorer queries. Only the newest
    /// version of each module is reported.
    pub async fn registry_modules(&self) -> Result<Vec<RegistryModule>> {
        let url = format!(
            "{}?page[size]={}",
            self.org_url(api::REGISTRY_MODULES),
            api::PAGE_SIZE
        );
        let error_context = format!("registry modules for organization '{}'", self.org());

        self.fetch_all_pages::<RegistryModule>(url, &error_context)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TfeError;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn registry_json(name: &str, versions: &[&str]) -> serde_json::Value {
        let statuses: Vec<serde_json::Value> = versions
            .iter()
            .map(|v| serde_json::json!({"version": v, "status": "ok"}))
            .collect();

        serde_json::json!({
            "id": format!("mod-{}", name),
            "type": "registry-modules",
            "attributes": {
                "name": name,
                "namespace": "my-org",
                "provider": "aws",
                "status": "setup_complete",
                "version-statuses": statuses,
                "created-at": "2023-05-10T14:00:00.000Z",
                "updated-at": "2024-02-20T09:00:00.000Z"
            }
        })
    }

    #[tokio::test]
    async fn test_registry_modules_two_pages() {
        let mock_server = MockServer::start().await;
        let client = ExplorerClient::test_client(&mock_server.uri());
        let next = format!(
            "{}/organizations/my-org/registry-modules?page%5Bnumber%5D=2&page%5Bsize%5D=100",
            mock_server.uri()
        );

        Mock::given(method("GET"))
            .and(path("/organizations/my-org/registry-modules"))
            .and(query_param("page[size]", "100"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [registry_json("vpc", &["2.1.0", "2.0.0"])],
                "links": {"next": next},
                "meta": {"pagination": {"current-page": 1, "next-page": 2, "total-pages": 2}}
            })))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/organizations/my-org/registry-modules"))
            .and(query_param("page[number]", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [registry_json("draft", &[])],
                "links": {"next": null},
                "meta": {"pagination": {"current-page": 2, "next-page": null, "total-pages": 2}}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let modules = client.registry_modules().await.unwrap();

        assert_eq!(modules.len(), 2);
        assert_eq!(modules[0].name, "vpc");
        assert_eq!(modules[0].latest_version.as_deref(), Some("2.1.0"));
        assert_eq!(modules[1].name, "draft");
        assert!(modules[1].latest_version.is_none());
    }

    #[tokio::test]
    async fn test_registry_modules_unauthorized() {
        let mock_server = MockServer::start().await;
        let client = ExplorerClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/organizations/my-org/registry-modules"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let err = client.registry_modules().await.unwrap_err();
        assert!(matches!(err, TfeError::UnexpectedStatus { status: 401, .. }));
        assert!(err.to_string().contains("registry modules"));
    }
}
