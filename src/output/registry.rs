//! Private registry module output formatter

use super::Tabular;
use crate::explorer::RegistryModule;

impl Tabular for RegistryModule {
    const COLUMNS: &'static [&'static str] = &[
        "Name",
        "Namespace",
        "Provider",
        "ID",
        "Status",
        "Latest Version",
        "Created",
        "Updated",
    ];
    const NOUN: &'static str = "registry modules";

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.namespace.clone(),
            self.provider.clone(),
            self.id.clone(),
            self.status.clone(),
            self.latest_version
                .clone()
                .unwrap_or_else(|| "-".to_string()),
            self.created_at.format("%Y-%m-%d").to_string(),
            self.updated_at.format("%Y-%m-%d").to_string(),
        ]
    }
}
