//! HCP Terraform Explorer client
//!
//! The Explorer API answers "which workspaces use what" questions for one
//! organization. Each collection (`modules`, `providers`, `workspaces`,
//! `tf_versions`) is queried with ordered filter predicates and returned in
//! pages that the client walks sequentially.

mod client;
pub mod commands;
mod credentials;
pub mod envelope;
pub mod filter;
pub mod modules;
pub mod providers;
pub mod registry;
pub mod tf_versions;
pub mod workspaces;

pub use client::{ExplorerClient, ExplorerResource};
pub use commands::run_command;
pub use credentials::TokenResolver;
pub use envelope::{Envelope, Links, PageRecord, PaginationMeta, ResourceObject};
pub use filter::{ExplorerQuery, Filter, FilterField, FilterOperator, ResourceKind};
pub use modules::{Module, ModuleField};
pub use providers::{Provider, ProviderField};
pub use registry::RegistryModule;
pub use tf_versions::{TfVersion, TfVersionField};
pub use workspaces::{parse_workspace_modules, Workspace, WorkspaceField, WorkspaceModule};
