//! Private registry module models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::explorer::envelope::{PageRecord, ResourceObject};

/// Registry module attributes as sent by the API
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct RegistryModuleAttributes {
    pub name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub provider: String,
    pub status: String,
    #[serde(default)]
    pub version_statuses: Vec<VersionStatus>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One entry of `version-statuses`, newest first
#[derive(Deserialize, Debug, Clone)]
pub struct VersionStatus {
    pub version: String,
    #[serde(default)]
    pub status: String,
}

/// A module published to the organization's private registry
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RegistryModule {
    pub id: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub name: String,
    pub namespace: String,
    pub provider: String,
    pub status: String,
    /// First entry of `version-statuses`; `None` when nothing was published yet
    pub latest_version: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PageRecord for RegistryModule {
    type Attributes = RegistryModuleAttributes;

    fn from_resource(resource: ResourceObject<RegistryModuleAttributes>) -> Result<Self, String> {
        let attrs = resource.attributes;
        let latest_version = attrs
            .version_statuses
            .into_iter()
            .next()
            .map(|v| v.version);

        Ok(Self {
            id: resource.id,
            resource_type: resource.resource_type,
            name: attrs.name,
            namespace: attrs.namespace,
            provider: attrs.provider,
            status: attrs.status,
            latest_version,
            created_at: attrs.created_at,
            updated_at: attrs.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(version_statuses: serde_json::Value) -> ResourceObject<RegistryModuleAttributes> {
        serde_json::from_value(serde_json::json!({
            "id": "mod-abc",
            "type": "registry-modules",
            "attributes": {
                "name": "vpc",
                "namespace": "my-org",
                "provider": "aws",
                "status": "setup_complete",
                "version-statuses": version_statuses,
                "created-at": "2023-05-10T14:00:00.000Z",
                "updated-at": "2024-02-20T09:00:00.000Z",
                "registry-name": "private",
                "no-code": false
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_latest_version_is_first_entry() {
        let module = RegistryModule::from_resource(resource(serde_json::json!([
            {"version": "2.1.0", "status": "ok"},
            {"version": "2.0.0", "status": "ok"}
        ])))
        .unwrap();

        assert_eq!(module.id, "mod-abc");
        assert_eq!(module.resource_type, "registry-modules");
        assert_eq!(module.latest_version.as_deref(), Some("2.1.0"));
        assert_eq!(module.namespace, "my-org");
    }

    #[test]
    fn test_no_versions_yields_none() {
        let module = RegistryModule::from_resource(resource(serde_json::json!([]))).unwrap();
        assert!(module.latest_version.is_none());
    }

    #[test]
    fn test_serializes_type_key() {
        let module = RegistryModule::from_resource(resource(serde_json::json!([]))).unwrap();
        let json = serde_json::to_value(&module).unwrap();
        assert_eq!(json["type"], "registry-modules");
        assert!(json["latest_version"].is_null());
    }
}
