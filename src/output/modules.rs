//! Module and provider output formatters

use super::Tabular;
use crate::explorer::{Module, Provider};

impl Tabular for Module {
    const COLUMNS: &'static [&'static str] = &[
        "Name",
        "Source",
        "Version",
        "Registry Type",
        "Workspace Count",
        "Workspaces",
    ];
    const NOUN: &'static str = "modules";

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.source.clone(),
            self.version.clone(),
            self.registry_type.clone(),
            self.workspace_count.to_string(),
            self.workspaces.clone(),
        ]
    }
}

impl Tabular for Provider {
    const COLUMNS: &'static [&'static str] = &[
        "Name",
        "Source",
        "Version",
        "Registry Type",
        "Workspace Count",
        "Workspaces",
    ];
    const NOUN: &'static str = "providers";

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.source.clone(),
            self.version.clone(),
            self.registry_type.clone(),
            self.workspace_count.to_string(),
            self.workspaces.clone(),
        ]
    }
}
