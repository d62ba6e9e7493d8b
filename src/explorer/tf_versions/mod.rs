//! Terraform version usage across an organization's workspaces

mod api;
mod models;

pub use models::{TfVersion, TfVersionField};
