//! Workspace data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::explorer::client::ExplorerResource;
use crate::explorer::envelope::{PageRecord, ResourceObject};
use crate::explorer::filter::{FilterField, ResourceKind};

/// Filterable fields of the workspaces collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceField {
    AllChecksSucceeded,
    ChecksErrored,
    ChecksFailed,
    ChecksPassed,
    ChecksUnknown,
    CurrentRunAppliedAt,
    CurrentRunExternalId,
    CurrentRunStatus,
    Drifted,
    ExternalId,
    ModuleCount,
    Modules,
    OrganizationName,
    ProjectExternalId,
    ProjectName,
    ProviderCount,
    Providers,
    ResourcesDrifted,
    ResourcesUndrifted,
    StateVersionTerraformVersion,
    VcsRepoIdentifier,
    WorkspaceCreatedAt,
    WorkspaceName,
    WorkspaceTerraformVersion,
    WorkspaceUpdatedAt,
}

impl FilterField for WorkspaceField {
    const ALL: &'static [Self] = &[
        WorkspaceField::AllChecksSucceeded,
        WorkspaceField::ChecksErrored,
        WorkspaceField::ChecksFailed,
        WorkspaceField::ChecksPassed,
        WorkspaceField::ChecksUnknown,
        WorkspaceField::CurrentRunAppliedAt,
        WorkspaceField::CurrentRunExternalId,
        WorkspaceField::CurrentRunStatus,
        WorkspaceField::Drifted,
        WorkspaceField::ExternalId,
        WorkspaceField::ModuleCount,
        WorkspaceField::Modules,
        WorkspaceField::OrganizationName,
        WorkspaceField::ProjectExternalId,
        WorkspaceField::ProjectName,
        WorkspaceField::ProviderCount,
        WorkspaceField::Providers,
        WorkspaceField::ResourcesDrifted,
        WorkspaceField::ResourcesUndrifted,
        WorkspaceField::StateVersionTerraformVersion,
        WorkspaceField::VcsRepoIdentifier,
        WorkspaceField::WorkspaceCreatedAt,
        WorkspaceField::WorkspaceName,
        WorkspaceField::WorkspaceTerraformVersion,
        WorkspaceField::WorkspaceUpdatedAt,
    ];

    fn wire_name(&self) -> &'static str {
        match self {
            WorkspaceField::AllChecksSucceeded => "all-checks-succeeded",
            WorkspaceField::ChecksErrored => "checks-errored",
            WorkspaceField::ChecksFailed => "checks-failed",
            WorkspaceField::ChecksPassed => "checks-passed",
            WorkspaceField::ChecksUnknown => "checks-unknown",
            WorkspaceField::CurrentRunAppliedAt => "current-run-applied-at",
            WorkspaceField::CurrentRunExternalId => "current-run-external-id",
            WorkspaceField::CurrentRunStatus => "current-run-status",
            WorkspaceField::Drifted => "drifted",
            WorkspaceField::ExternalId => "external-id",
            WorkspaceField::ModuleCount => "module-count",
            WorkspaceField::Modules => "modules",
            WorkspaceField::OrganizationName => "organization-name",
            WorkspaceField::ProjectExternalId => "project-external-id",
            WorkspaceField::ProjectName => "project-name",
            WorkspaceField::ProviderCount => "provider-count",
            WorkspaceField::Providers => "providers",
            WorkspaceField::ResourcesDrifted => "resources-drifted",
            WorkspaceField::ResourcesUndrifted => "resources-undrifted",
            WorkspaceField::StateVersionTerraformVersion => "state-version-terraform-version",
            WorkspaceField::VcsRepoIdentifier => "vcs-repo-identifier",
            WorkspaceField::WorkspaceCreatedAt => "workspace-created-at",
            WorkspaceField::WorkspaceName => "workspace-name",
            WorkspaceField::WorkspaceTerraformVersion => "workspace-terraform-version",
            WorkspaceField::WorkspaceUpdatedAt => "workspace-updated-at",
        }
    }
}

/// Workspace attributes as sent by the Explorer API
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct WorkspaceAttributes {
    pub all_checks_succeeded: bool,
    pub checks_errored: u32,
    pub checks_failed: u32,
    pub checks_passed: u32,
    pub checks_unknown: u32,
    pub current_run_applied_at: Option<DateTime<Utc>>,
    pub current_run_external_id: String,
    pub current_run_status: String,
    pub drifted: bool,
    pub external_id: String,
    pub module_count: u32,
    /// `name:version` tokens joined by `", "`
    pub modules: String,
    pub organization_name: String,
    pub project_external_id: String,
    pub project_name: String,
    pub provider_count: u32,
    pub providers: String,
    pub resources_drifted: u32,
    pub resources_undrifted: u32,
    pub state_version_terraform_version: String,
    pub vcs_repo_identifier: Option<String>,
    pub workspace_created_at: DateTime<Utc>,
    pub workspace_name: String,
    pub workspace_terraform_version: String,
    pub workspace_updated_at: DateTime<Utc>,
}

/// A module call found in a workspace's configuration
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceModule {
    pub name: String,
    pub version: String,
}

/// Workspace record with its module list unpacked
#[derive(Serialize, Debug, Clone)]
pub struct Workspace {
    pub all_checks_succeeded: bool,
    pub checks_errored: u32,
    pub checks_failed: u32,
    pub checks_passed: u32,
    pub checks_unknown: u32,
    pub current_run_applied_at: Option<DateTime<Utc>>,
    pub current_run_external_id: String,
    pub current_run_status: String,
    pub drifted: bool,
    pub external_id: String,
    pub module_count: u32,
    pub modules: Vec<WorkspaceModule>,
    pub organization_name: String,
    pub project_external_id: String,
    pub project_name: String,
    pub provider_count: u32,
    pub providers: String,
    pub resources_drifted: u32,
    pub resources_undrifted: u32,
    pub state_version_terraform_version: String,
    pub vcs_repo_identifier: Option<String>,
    pub workspace_created_at: DateTime<Utc>,
    pub workspace_name: String,
    pub workspace_terraform_version: String,
    pub workspace_updated_at: DateTime<Utc>,
}

/// Split the `modules` attribute into `(name, version)` pairs
///
/// `"iam:1.2.0, s3:0.9.1"` yields two modules, `""` yields none. Every
/// token must contain exactly one `:` with a non-empty name and version.
pub fn parse_workspace_modules(raw: &str) -> Result<Vec<WorkspaceModule>, String> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    raw.split(", ")
        .map(|token| {
            let parts: Vec<&str> = token.split(':').collect();
            match parts.as_slice() {
                [name, version] if !name.is_empty() && !version.is_empty() => {
                    Ok(WorkspaceModule {
                        name: name.to_string(),
                        version: version.to_string(),
                    })
                }
                _ => Err(format!(
                    "malformed module entry '{}' (expected NAME:VERSION)",
                    token
                )),
            }
        })
        .collect()
}

impl TryFrom<WorkspaceAttributes> for Workspace {
    type Error = String;

    fn try_from(attrs: WorkspaceAttributes) -> Result<Self, Self::Error> {
        let modules = parse_workspace_modules(&attrs.modules)
            .map_err(|e| format!("workspace '{}': {}", attrs.workspace_name, e))?;

        Ok(Self {
            all_checks_succeeded: attrs.all_checks_succeeded,
            checks_errored: attrs.checks_errored,
            checks_failed: attrs.checks_failed,
            checks_passed: attrs.checks_passed,
            checks_unknown: attrs.checks_unknown,
            current_run_applied_at: attrs.current_run_applied_at,
            current_run_external_id: attrs.current_run_external_id,
            current_run_status: attrs.current_run_status,
            drifted: attrs.drifted,
            external_id: attrs.external_id,
            module_count: attrs.module_count,
            modules,
            organization_name: attrs.organization_name,
            project_external_id: attrs.project_external_id,
            project_name: attrs.project_name,
            provider_count: attrs.provider_count,
            providers: attrs.providers,
            resources_drifted: attrs.resources_drifted,
            resources_undrifted: attrs.resources_undrifted,
            state_version_terraform_version: attrs.state_version_terraform_version,
            vcs_repo_identifier: attrs.vcs_repo_identifier,
            workspace_created_at: attrs.workspace_created_at,
            workspace_name: attrs.workspace_name,
            workspace_terraform_version: attrs.workspace_terraform_version,
            workspace_updated_at: attrs.workspace_updated_at,
        })
    }
}

impl PageRecord for Workspace {
    type Attributes = WorkspaceAttributes;

    fn from_resource(resource: ResourceObject<WorkspaceAttributes>) -> Result<Self, String> {
        Workspace::try_from(resource.attributes)
    }
}

impl ExplorerResource for Workspace {
    const KIND: ResourceKind = ResourceKind::Workspaces;
    type Field = WorkspaceField;
}

impl Workspace {
    /// Module list rendered back as `name:version` tokens
    pub fn modules_display(&self) -> String {
        self.modules
            .iter()
            .map(|m| format!("{}:{}", m.name, m.version))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
