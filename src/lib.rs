//! Locgen - typed Elm translation modules from CSV tables
//!
//! Locgen is a CLI tool and library that compiles a directory of CSV
//! translation tables into a single statically-typed Elm module, so
//! application code looks up and updates strings by language without runtime
//! dictionary lookups or missing-key failures.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `config`: Configuration file loading and parsing
//! - `error`: Structural validation errors
//! - `loader`: Table Loader (CSV discovery and parsing)
//! - `model`: In-memory representation of one generation run
//! - `emitter`: Module Emitter (validation and Elm code generation)
//! - `task`: Build-tool integration (inputs, outputs, staleness)

pub mod cli;
pub mod config;
pub mod emitter;
pub mod error;
pub mod loader;
pub mod model;
pub mod task;
