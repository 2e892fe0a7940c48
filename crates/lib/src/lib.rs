//! buildinfo-lib: build provenance records and their renderings
//!
//! This crate provides:
//! - `BuildRecord`: the toolchain, main module, dependencies and settings
//!   that produced an artifact
//! - `format_text`: an indented, optionally quoted, line-prefixed report
//! - `format_json`: the same record as pretty-printed JSON
//! - `lockfile`: dependency modules linked into a binary, read from `Cargo.lock`

pub mod format;
pub mod lockfile;
pub mod record;

pub use format::{FormatError, FormatOptions, format_json, format_text, quote_if};
pub use record::{BuildRecord, ModuleRef, Setting};
