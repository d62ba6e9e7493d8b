//! Terraform version usage models

use serde::{Deserialize, Serialize};

use crate::explorer::client::ExplorerResource;
use crate::explorer::envelope::{PageRecord, ResourceObject};
use crate::explorer::filter::{FilterField, ResourceKind};

/// Filterable fields of the tf_versions collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TfVersionField {
    Version,
    WorkspaceCount,
    Workspaces,
}

impl FilterField for TfVersionField {
    const ALL: &'static [Self] = &[
        TfVersionField::Version,
        TfVersionField::WorkspaceCount,
        TfVersionField::Workspaces,
    ];

    fn wire_name(&self) -> &'static str {
        match self {
            TfVersionField::Version => "version",
            TfVersionField::WorkspaceCount => "workspace-count",
            TfVersionField::Workspaces => "workspaces",
        }
    }
}

/// A Terraform version and the workspaces pinned to it
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all(deserialize = "kebab-case"))]
pub struct TfVersion {
    pub version: String,
    pub workspace_count: u32,
    pub workspaces: String,
}

impl PageRecord for TfVersion {
    type Attributes = TfVersion;

    fn from_resource(resource: ResourceObject<TfVersion>) -> Result<Self, String> {
        Ok(resource.attributes)
    }
}

impl ExplorerResource for TfVersion {
    const KIND: ResourceKind = ResourceKind::TfVersions;
    type Field = TfVersionField;
}
