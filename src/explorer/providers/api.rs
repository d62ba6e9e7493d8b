//! Provider API operations

use crate::error::Result;
use crate::explorer::filter::Filter;
use crate::explorer::ExplorerClient;

use super::models::{Provider, ProviderField};

impl ExplorerClient {
    /// List providers used across all workspaces in the organization
    pub async fn providers(&self, filters: &[Filter<ProviderField>]) -> Result<Vec<Provider>> {
        self.query::<Provider>(filters).await
    }
}
