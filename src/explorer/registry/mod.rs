//! Private registry modules

mod api;
mod models;

pub use models::RegistryModule;
