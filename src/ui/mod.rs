//! Terminal feedback while queries run

mod spinner;

pub use spinner::{create_spinner, finish_spinner};
