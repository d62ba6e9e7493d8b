//! Explorer HTTP client and the sequential page walker

use log::debug;
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::config::api;
use crate::error::{Result, TfeError};
use crate::explorer::envelope::{decode_envelope, Envelope, PageRecord};
use crate::explorer::filter::{ExplorerQuery, Filter, FilterField, ResourceKind};

/// Record type served by one Explorer collection
pub trait ExplorerResource: PageRecord {
    /// Value of the `type` query parameter
    const KIND: ResourceKind;

    /// Fields this collection can be filtered on
    type Field: FilterField;
}

/// Explorer API client bound to one organization
pub struct ExplorerClient {
    client: Client,
    token: String,
    host: String,
    org: String,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
    /// Pause between consecutive page fetches
    page_delay: Duration,
}

impl ExplorerClient {
    /// Create a new client with bounded timeouts
    pub fn new(token: String, host: String, org: String) -> Self {
        let client = Client::builder()
            .connect_timeout(api::CONNECT_TIMEOUT)
            .timeout(api::REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self::with_http_client(client, token, host, org)
    }

    /// Create a client around an already configured `reqwest::Client`
    pub fn with_http_client(client: Client, token: String, host: String, org: String) -> Self {
        Self {
            client,
            token,
            host,
            org,
            base_url_override: None,
            page_delay: api::PAGE_DELAY,
        }
    }

    /// Point the client at a different API root (mock servers, proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    /// Override the pause between page fetches
    pub fn with_page_delay(mut self, delay: Duration) -> Self {
        self.page_delay = delay;
        self
    }

    /// Organization this client queries
    pub fn org(&self) -> &str {
        &self.org
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.clone();
        }
        format!(
            "https://{}/{}",
            self.host,
            api::BASE_PATH.trim_start_matches('/')
        )
    }

    /// URL of an endpoint under the organization, e.g. `.../organizations/acme/explorer`
    pub(crate) fn org_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_url(),
            api::ORGANIZATIONS,
            urlencoding::encode(&self.org),
            endpoint
        )
    }

    /// Create a GET request builder with standard headers
    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Content-Type", "application/vnd.api+json")
    }

    /// Query an Explorer collection, following every page
    ///
    /// Returns the records of all pages concatenated in order, or the first
    /// error encountered.
    pub async fn query<R>(&self, filters: &[Filter<R::Field>]) -> Result<Vec<R>>
    where
        R: ExplorerResource,
    {
        let query = ExplorerQuery::new(R::KIND, filters);
        let url = format!(
            "{}?{}",
            self.org_url(api::EXPLORER),
            query.to_query_string()
        );

        let error_context = format!("{} for organization '{}'", R::KIND, self.org);
        self.fetch_all_pages::<R>(url, &error_context).await
    }

    /// Walk a paginated endpoint sequentially, starting at `first_url`
    ///
    /// Each follow-up request goes to the opaque `links.next` URL as-is; the
    /// original query is not re-applied. `page_delay` is observed before every
    /// follow-up request.
    pub async fn fetch_all_pages<R>(
        &self,
        first_url: String,
        error_context: &str,
    ) -> Result<Vec<R>>
    where
        R: PageRecord,
    {
        let mut records = Vec::new();
        let mut url = first_url;
        let mut page: u32 = 1;

        loop {
            debug!("Fetching page {} from: {}", page, url);

            let page_context = format!("{} (page {})", error_context, page);
            let body = self.fetch_page_body(&url, &page_context).await?;
            let envelope: Envelope<R::Attributes> = decode_envelope(&body, &page_context)?;

            let next_url = envelope.next_page_url().map(str::to_owned);
            let page_len = envelope.data.len();

            for resource in envelope.data {
                let record = R::from_resource(resource).map_err(|message| TfeError::Decode {
                    context: page_context.clone(),
                    message,
                })?;
                records.push(record);
            }

            debug!("Page {} returned {} items", page, page_len);

            match next_url {
                Some(next) => url = next,
                None => break,
            }

            if !self.page_delay.is_zero() {
                tokio::time::sleep(self.page_delay).await;
            }
            page += 1;
        }

        debug!(
            "Fetched {} total items for {} in {} page(s)",
            records.len(),
            error_context,
            page
        );
        Ok(records)
    }

    /// Issue one GET and return the body of a 2xx response
    async fn fetch_page_body(&self, url: &str, page_context: &str) -> Result<Vec<u8>> {
        let response = self.get(url).send().await?;
        check_status(&response, page_context)?;
        Ok(response.bytes().await?.to_vec())
    }
}

/// Classify a response status
///
/// 429 is reported as `RateLimited` so callers can tell it apart from other
/// failures; it is never retried here.
fn check_status(response: &reqwest::Response, context: &str) -> Result<()> {
    let status = response.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
        let limit = response
            .headers()
            .get(api::RATE_LIMIT_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        return Err(TfeError::RateLimited {
            limit,
            context: context.to_string(),
        });
    }

    if !status.is_success() {
        return Err(TfeError::UnexpectedStatus {
            status: status.as_u16(),
            context: context.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
impl ExplorerClient {
    /// Create a test client with mock base URL and no inter-page delay
    pub fn test_client(base_url: &str) -> Self {
        Self::new(
            "test-token".to_string(),
            "mock.terraform.io".to_string(),
            "my-org".to_string(),
        )
        .with_base_url(base_url)
        .with_page_delay(Duration::ZERO)
    }
}
