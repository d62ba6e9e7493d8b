//! Workspace API operations

use crate::error::Result;
use crate::explorer::filter::Filter;
use crate::explorer::ExplorerClient;

use super::models::{Workspace, WorkspaceField};

impl ExplorerClient {
    /// List workspaces in the organization with their usage summary
    pub async fn workspaces(&self, filters: &[Filter<WorkspaceField>]) -> Result<Vec<Workspace>> {
        self.query::<Workspace>(filters).await
    }
}
