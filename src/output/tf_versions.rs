//! Terraform version output formatter

use super::Tabular;
use crate::explorer::TfVersion;

impl Tabular for TfVersion {
    const COLUMNS: &'static [&'static str] = &["Version", "Workspace Count", "Workspaces"];
    const NOUN: &'static str = "versions";

    fn cells(&self) -> Vec<String> {
        vec![
            self.version.clone(),
            self.workspace_count.to_string(),
            self.workspaces.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::output::render;

    #[test]
    fn test_tf_version_yaml() {
        let version = TfVersion {
            version: "1.5.7".to_string(),
            workspace_count: 4,
            workspaces: "a, b, c, d".to_string(),
        };
        let out = render(&[version], OutputFormat::Yaml, false).unwrap();
        let parsed: serde_yml::Value = serde_yml::from_str(&out).unwrap();
        assert_eq!(parsed[0]["version"].as_str(), Some("1.5.7"));
        assert_eq!(parsed[0]["workspace_count"].as_u64(), Some(4));
        assert_eq!(parsed[0]["workspaces"].as_str(), Some("a, b, c, d"));
    }
}
