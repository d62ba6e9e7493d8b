//! Module data models

use serde::{Deserialize, Serialize};

use crate::explorer::client::ExplorerResource;
use crate::explorer::envelope::{PageRecord, ResourceObject};
use crate::explorer::filter::{FilterField, ResourceKind};

/// Filterable fields of the modules collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleField {
    Name,
    Source,
    Version,
    RegistryType,
    WorkspaceCount,
    Workspaces,
}

impl FilterField for ModuleField {
    const ALL: &'static [Self] = &[
        ModuleField::Name,
        ModuleField::Source,
        ModuleField::Version,
        ModuleField::RegistryType,
        ModuleField::WorkspaceCount,
        ModuleField::Workspaces,
    ];

    fn wire_name(&self) -> &'static str {
        match self {
            ModuleField::Name => "name",
            ModuleField::Source => "source",
            ModuleField::Version => "version",
            ModuleField::RegistryType => "registry-type",
            ModuleField::WorkspaceCount => "workspace-count",
            ModuleField::Workspaces => "workspaces",
        }
    }
}

/// A module version in use by one or more workspaces
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all(deserialize = "kebab-case"))]
pub struct Module {
    pub name: String,
    pub source: String,
    pub version: String,
    pub registry_type: String,
    pub workspace_count: u32,
    /// Comma-separated workspace names, as sent by the API
    pub workspaces: String,
}

impl PageRecord for Module {
    type Attributes = Module;

    fn from_resource(resource: ResourceObject<Module>) -> Result<Self, String> {
        Ok(resource.attributes)
    }
}

impl ExplorerResource for Module {
    const KIND: ResourceKind = ResourceKind::Modules;
    type Field = ModuleField;
}
