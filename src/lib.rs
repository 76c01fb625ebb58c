//! Weaver: Ordered Narrative Contexts
//!
//! Builds narratives from an ordered list of file contexts. The core is
//! [`context::OrderedContextList`], which keeps entry orders dense and unique
//! under append, remove, move, and clear. Around it sit the narrative builder,
//! a client for the narrative backend, layered configuration, and the CLI.

pub mod cli;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod narrative;
pub mod types;
