/// Configuration constants for the HCP Terraform API
pub mod api {
    use std::time::Duration;

    /// Base path for TFE API v2
    pub const BASE_PATH: &str = "/api/v2";

    /// Organizations endpoint
    pub const ORGANIZATIONS: &str = "organizations";

    /// Explorer endpoint (under an organization)
    pub const EXPLORER: &str = "explorer";

    /// Private registry modules endpoint (under an organization)
    pub const REGISTRY_MODULES: &str = "registry-modules";

    /// Page size requested on every paginated call (the API maximum)
    pub const PAGE_SIZE: u32 = 100;

    /// Documented request budget of the API, per second and per token
    pub const RATE_LIMIT_PER_SECOND: u64 = 30;

    /// Extra pause on top of the minimum gap the rate limit allows
    const PAGE_DELAY_HEADROOM_MS: u64 = 17;

    /// Fixed pause between consecutive page fetches (50 ms)
    pub const PAGE_DELAY: Duration =
        Duration::from_millis(1000 / RATE_LIMIT_PER_SECOND + PAGE_DELAY_HEADROOM_MS);

    /// TCP connect timeout
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Whole-request timeout
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Response header carrying the server's advertised rate limit
    pub const RATE_LIMIT_HEADER: &str = "x-ratelimit-limit";
}

/// Configuration constants for credentials
pub mod credentials {
    /// Credentials file name
    pub const FILE_NAME: &str = "terraform.d/credentials.tfrc.json";

    /// Path to Terraform credentials file on Unix (relative to HOME)
    pub const FILE_PATH_UNIX: &str = ".terraform.d/credentials.tfrc.json";

    /// Environment variable names for token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["HCP_TOKEN", "TFC_TOKEN", "TFE_TOKEN"];
}

/// Default values for CLI
pub mod defaults {
    /// Default TFE host
    pub const HOST: &str = "app.terraform.io";

    /// Environment variable for the host
    pub const HOST_ENV_VAR: &str = "TFE_HOSTNAME";

    /// Environment variable for the organization
    pub const ORG_ENV_VAR: &str = "TFE_ORG";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
