//! Configuration sources, applied in the order listed by the loader.

pub mod env_vars;
pub mod global_file;
pub mod workspace_file;
