//! CLI argument parsing

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::defaults;

/// Query module, provider, workspace and Terraform version usage through the
/// HCP Terraform Explorer API
#[derive(Parser, Debug)]
#[command(name = "tfexplorer")]
#[command(version)]
#[command(about = "Query HCP Terraform Explorer data", long_about = None)]
#[command(after_help = "FILTERS:\n  \
    -f FIELD:OPERATOR[:VALUE], repeatable, all terms must match.\n  \
    Operators: is, is-not, contains, does-not-contain, is-empty, is-not-empty,\n             \
    gt, lt, gteq, lteq, is-before, is-after\n\n\
    EXAMPLES:\n  \
    tfexplorer --org acme modules -f name:contains:vpc\n  \
    tfexplorer --org acme workspaces -f drifted:is:true -o json\n  \
    tfexplorer --org acme tf-versions -f version:is:1.5.7")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Organization to query
    #[arg(long, env = defaults::ORG_ENV_VAR, global = true)]
    pub org: Option<String>,

    /// HCP Terraform / Terraform Enterprise hostname
    #[arg(
        short = 'H',
        long,
        env = defaults::HOST_ENV_VAR,
        default_value = defaults::HOST,
        global = true
    )]
    pub host: String,

    /// API token (overrides env vars and credentials file)
    #[arg(short = 't', long, global = true)]
    pub token: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL, global = true)]
    pub log_level: String,

    /// Batch mode, no spinner
    #[arg(short, long, global = true)]
    pub batch: bool,

    /// Omit the header row and the total line
    #[arg(long, global = true)]
    pub no_header: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Modules called from workspace configurations
    #[command(visible_alias = "mod")]
    Modules(QueryArgs),

    /// Providers required by workspace configurations
    #[command(visible_alias = "prov")]
    Providers(QueryArgs),

    /// Workspaces with their run, check and drift summary
    #[command(visible_alias = "ws")]
    Workspaces(QueryArgs),

    /// Terraform versions in use
    #[command(name = "tf-versions", visible_alias = "tfv")]
    TfVersions(QueryArgs),

    /// Modules published to the private registry (latest version only)
    #[command(name = "registry-modules", visible_alias = "reg")]
    RegistryModules(OutputArgs),
}

/// Arguments shared by the Explorer queries
#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Filter term FIELD:OPERATOR[:VALUE] (repeatable)
    #[arg(short = 'f', long = "filter", value_name = "FIELD:OPERATOR[:VALUE]")]
    pub filters: Vec<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns (default)
    Table,
    /// Comma-separated values
    Csv,
    /// JSON array
    Json,
    /// YAML sequence
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}
