//! Provider data models

use serde::{Deserialize, Serialize};

use crate::explorer::client::ExplorerResource;
use crate::explorer::envelope::{PageRecord, ResourceObject};
use crate::explorer::filter::{FilterField, ResourceKind};

/// Filterable fields of the providers collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderField {
    Name,
    Source,
    Version,
    RegistryType,
    WorkspaceCount,
    Workspaces,
}

impl FilterField for ProviderField {
    const ALL: &'static [Self] = &[
        ProviderField::Name,
        ProviderField::Source,
        ProviderField::Version,
        ProviderField::RegistryType,
        ProviderField::WorkspaceCount,
        ProviderField::Workspaces,
    ];

    fn wire_name(&self) -> &'static str {
        match self {
            ProviderField::Name => "name",
            ProviderField::Source => "source",
            ProviderField::Version => "version",
            ProviderField::RegistryType => "registry-type",
            ProviderField::WorkspaceCount => "workspace-count",
            ProviderField::Workspaces => "workspaces",
        }
    }
}

/// A provider version in use by one or more workspaces
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all(deserialize = "kebab-case"))]
pub struct Provider {
    pub name: String,
    pub source: String,
    pub version: String,
    pub registry_type: String,
    pub workspace_count: u32,
    pub workspaces: String,
}

impl PageRecord for Provider {
    type Attributes = Provider;

    fn from_resource(resource: ResourceObject<Provider>) -> Result<Self, String> {
        Ok(resource.attributes)
    }
}

impl ExplorerResource for Provider {
    const KIND: ResourceKind = ResourceKind::Providers;
    type Field = ProviderField;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_field_wire_names_are_total() {
        for field in ProviderField::ALL {
            let name = field.wire_name();
            assert!(!name.is_empty());
            assert_eq!(name, name.to_lowercase());
            assert_eq!(ProviderField::from_wire_name(name), Some(*field));
        }
    }

    #[test]
    fn test_provider_deserialization() {
        let json = r#"{
            "name": "aws",
            "source": "hashicorp/aws",
            "version": "5.31.0",
            "registry-type": "public",
            "workspace-count": 14,
            "workspaces": "prod, staging"
        }"#;

        let provider: Provider = serde_json::from_str(json).unwrap();
        assert_eq!(provider.source, "hashicorp/aws");
        assert_eq!(provider.workspace_count, 14);
    }

    #[test]
    fn test_provider_mistyped_count_fails() {
        let json = r#"{
            "name": "aws",
            "source": "hashicorp/aws",
            "version": "5.31.0",
            "registry-type": "public",
            "workspace-count": "many",
            "workspaces": ""
        }"#;
        assert!(serde_json::from_str::<Provider>(json).is_err());
    }
}
