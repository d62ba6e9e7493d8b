//! Explorer view of workspaces

mod api;
mod models;

pub use models::{parse_workspace_modules, Workspace, WorkspaceField, WorkspaceModule};
