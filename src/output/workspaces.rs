//! Workspace output formatter

use super::Tabular;
use crate::explorer::Workspace;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

impl Tabular for Workspace {
    const COLUMNS: &'static [&'static str] = &[
        "Name",
        "Project",
        "TF Version",
        "Run Status",
        "Last Applied",
        "Drifted",
        "Checks Failed",
        "Modules",
        "Providers",
        "VCS Repo",
        "Updated",
    ];
    const NOUN: &'static str = "workspaces";

    fn cells(&self) -> Vec<String> {
        vec![
            self.workspace_name.clone(),
            self.project_name.clone(),
            self.workspace_terraform_version.clone(),
            self.current_run_status.clone(),
            self.current_run_applied_at
                .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
                .unwrap_or_else(|| "-".to_string()),
            self.drifted.to_string(),
            self.checks_failed.to_string(),
            self.modules_display(),
            self.providers.clone(),
            self.vcs_repo_identifier
                .clone()
                .unwrap_or_else(|| "-".to_string()),
            self.workspace_updated_at.format(TIMESTAMP_FORMAT).to_string(),
        ]
    }
}
