//! # qac-cli — Headless Driver for the QA Compliance Form
//!
//! Exercises the form store without a rendering layer. Useful for checking
//! option catalogs, reviewing the question table, and replaying recorded
//! action logs to see the metrics and missing answers they produce.
//!
//! ## Subcommands
//!
//! - `options` — Print one option catalog, or all of them
//! - `schema` — Print the question table
//! - `replay` — Dispatch an action script against a fresh session
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers here return an exit code.
//! - Handlers delegate to `qac-state` for every form rule.

pub mod config;
pub mod options;
pub mod replay;
pub mod schema;
