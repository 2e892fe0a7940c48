//! Rendering of [`BuildRecord`]s as indented text or JSON.
//!
//! Both renderings are pure: they borrow the record and build a fresh
//! string. Text output prefixes every line; JSON output is prefixed once.

mod json;
mod quote;
mod text;

use thiserror::Error;

use crate::record::BuildRecord;

pub use json::format_json;
pub use quote::quote_if;
pub use text::format_text;

/// Default indentation unit, shared by both renderings.
pub const DEFAULT_INDENT: &str = "  ";

/// Errors that can occur while rendering a record.
#[derive(Debug, Error)]
pub enum FormatError {
  /// The serializer could not represent the record.
  #[error("cannot convert build info to JSON: {0}")]
  Serialization(#[source] serde_json::Error),
}

/// Prefix, indentation and quoting shared by a rendering call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
  /// Quote values in text output. JSON always quotes.
  pub quote: bool,
  pub prefix: String,
  pub indent: String,
}

impl Default for FormatOptions {
  fn default() -> Self {
    Self {
      quote: true,
      prefix: String::new(),
      indent: DEFAULT_INDENT.to_string(),
    }
  }
}

impl FormatOptions {
  pub fn render_text(&self, record: &BuildRecord) -> String {
    format_text(record, self.quote, &self.prefix, &self.indent)
  }

  pub fn render_json(&self, record: &BuildRecord) -> Result<String, FormatError> {
    format_json(record, &self.prefix, &self.indent)
  }
}
