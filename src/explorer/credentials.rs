//! API token lookup

use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{Result, TfeError};

/// Layout of `credentials.tfrc.json` as written by `terraform login`
#[derive(Deserialize, Debug)]
struct CredentialsFile {
    credentials: HashMap<String, HostCredential>,
}

#[derive(Deserialize, Debug)]
struct HostCredential {
    token: String,
}

/// Finds the bearer token for one host
pub struct TokenResolver {
    host: String,
}

impl TokenResolver {
    pub fn new(host: &str) -> Self {
        Self {
            host: host.to_string(),
        }
    }

    /// Resolve the token, first match wins:
    /// 1. `--token` flag
    /// 2. `HCP_TOKEN`, `TFC_TOKEN`, `TFE_TOKEN`
    /// 3. Terraform credentials file entry for the host
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token {
            debug!("Using token from CLI argument");
            return Ok(token.to_string());
        }

        for env_var in credentials::TOKEN_ENV_VARS {
            if let Ok(token) = std::env::var(env_var) {
                if !token.is_empty() {
                    debug!("Using token from {} environment variable", env_var);
                    return Ok(token);
                }
            }
        }

        let path = Self::credentials_path()
            .ok_or_else(|| TfeError::TokenNotFound(self.token_not_found_message(None)))?;
        self.resolve_from_file(&path)
    }

    /// Look the host up in a credentials file at `path`
    pub fn resolve_from_file(&self, path: &Path) -> Result<String> {
        debug!("Looking for credentials file at: {}", path.display());

        let content = fs::read_to_string(path)
            .map_err(|_| TfeError::TokenNotFound(self.token_not_found_message(Some(path))))?;

        let file: CredentialsFile = serde_json::from_str(&content).map_err(|e| {
            TfeError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                path.display(),
                e
            ))
        })?;

        match file.credentials.get(&self.host) {
            Some(cred) => {
                debug!("Using token from {} for host {}", path.display(), self.host);
                Ok(cred.token.clone())
            }
            None => Err(TfeError::TokenNotFound(
                self.token_not_found_message(Some(path)),
            )),
        }
    }

    fn token_not_found_message(&self, credentials_path: Option<&Path>) -> String {
        let checked_file = credentials_path
            .map(|p| format!(" or in credentials file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No API token found for host '{}'. Provide one using:\n\
             \n\
             1. CLI argument:      tfexplorer --token <TOKEN>\n\
             2. Environment var:   export HCP_TOKEN=<TOKEN>  (also: TFC_TOKEN, TFE_TOKEN)\n\
             3. Terraform login:   terraform login {}\n\
             \n\
             Checked: env vars [{}]{}",
            self.host,
            self.host,
            credentials::TOKEN_ENV_VARS.join(", "),
            checked_file
        )
    }

    /// `%APPDATA%\terraform.d\...` on Windows, `~/.terraform.d/...` elsewhere
    fn credentials_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            dirs::config_dir().map(|p| p.join(credentials::FILE_NAME))
        }

        #[cfg(not(windows))]
        {
            dirs::home_dir().map(|p| p.join(credentials::FILE_PATH_UNIX))
        }
    }
}
