//! Module API operations

use crate::error::Result;
use crate::explorer::filter::Filter;
use crate::explorer::ExplorerClient;

use super::models::{Module, ModuleField};

impl ExplorerClient {
    /// List modules used across all workspaces in the organization
    pub async fn modules(&self, filters: &[Filter<ModuleField>]) -> Result<Vec<Module>> {
        self.query::<Module>(filters).await
    }
}
