//! tfexplorer - Query the HCP Terraform Explorer API
//!
//! Lists modules, providers, workspaces and Terraform versions across an
//! organization, narrowed by server-side filters, plus the modules of the
//! organization's private registry.
//!
//! # Features
//!
//! - Typed filter fields per collection and the full operator set
//! - Automatic pagination with fixed pacing under the API rate limit
//! - Distinct error for HTTP 429 so callers can back off
//! - Multiple output formats (table, CSV, JSON, YAML)
//!
//! # Example
//!
//! ```bash
//! # Modules whose name contains "vpc"
//! tfexplorer --org my-org modules -f name:contains:vpc
//!
//! # Drifted workspaces as JSON
//! tfexplorer --org my-org workspaces -f drifted:is:true -o json
//!
//! # Terraform versions older than 1.5
//! tfexplorer --org my-org tf-versions -f version:lt:1.5.0
//! ```
//!
//! As a library:
//!
//! ```no_run
//! use tfexplorer::{ExplorerClient, Filter, FilterOperator, ModuleField};
//!
//! # async fn example() -> tfexplorer::Result<()> {
//! let client = ExplorerClient::new(
//!     "token".to_string(),
//!     "app.terraform.io".to_string(),
//!     "my-org".to_string(),
//! );
//! let filters = vec![Filter::new(ModuleField::Name, FilterOperator::Contains, "vpc")];
//! for module in client.modules(&filters).await? {
//!     println!("{} {} used by {}", module.name, module.version, module.workspace_count);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod explorer;
pub mod output;
pub mod ui;

pub use cli::{Cli, Command, OutputArgs, OutputFormat, QueryArgs};
pub use error::{Result, TfeError};
pub use explorer::{
    parse_workspace_modules, run_command, ExplorerClient, ExplorerQuery, ExplorerResource, Filter,
    FilterField, FilterOperator, Module, ModuleField, PageRecord, Provider, ProviderField,
    RegistryModule, ResourceKind, TfVersion, TfVersionField, TokenResolver, Workspace,
    WorkspaceField, WorkspaceModule,
};
