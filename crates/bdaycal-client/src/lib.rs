//! bdaycal client library: CLI definition, run configuration, and the
//! import loop.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod importer;
