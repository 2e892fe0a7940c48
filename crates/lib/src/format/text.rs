//! Indented text rendering.
//!
//! ```text
//! Go Version: "rustc 1.85.0"
//! Path: "example"
//! Main Module:
//!   Path: "example"
//!   Version: "0.1.0"
//!   Sum: ""
//! Dependencies:
//!   Path: "serde"
//!   Version: "1.0.219"
//!   Sum: "5f0e..."
//! Settings:
//!   TARGET: "x86_64-unknown-linux-gnu"
//! ```

use tracing::debug;

use super::quote_if;
use crate::record::{BuildRecord, ModuleRef};

/// Render `record` as text, one `prefix`ed line per field.
///
/// Module fields sit one `indent` below their header and every replacement
/// adds another level. The dependency and settings sections are omitted
/// when empty. The result always ends with a newline.
pub fn format_text(record: &BuildRecord, quote: bool, prefix: &str, indent: &str) -> String {
  let mut out = String::new();

  out.push_str(&format!("{prefix}Go Version: {}\n", quote_if(&record.tool_version, quote)));
  out.push_str(&format!("{prefix}Path: {}\n", quote_if(&record.path, quote)));

  out.push_str(&format!("{prefix}Main Module:\n"));
  format_module(&mut out, &record.main, quote, prefix, indent);

  if !record.deps.is_empty() {
    out.push_str(&format!("{prefix}Dependencies:\n"));
    for dep in &record.deps {
      format_module(&mut out, dep, quote, prefix, indent);
    }
  }

  if !record.settings.is_empty() {
    out.push_str(&format!("{prefix}Settings:\n"));
    for setting in &record.settings {
      out.push_str(&format!(
        "{prefix}{indent}{}: {}\n",
        setting.key,
        quote_if(&setting.value, quote)
      ));
    }
  }

  debug!(
    deps = record.deps.len(),
    settings = record.settings.len(),
    bytes = out.len(),
    "rendered build record as text"
  );

  out
}

fn format_module(out: &mut String, module: &ModuleRef, quote: bool, prefix: &str, indent: &str) {
  out.push_str(&format!("{prefix}{indent}Path: {}\n", quote_if(&module.path, quote)));
  out.push_str(&format!("{prefix}{indent}Version: {}\n", quote_if(&module.version, quote)));
  out.push_str(&format!("{prefix}{indent}Sum: {}\n", quote_if(&module.sum, quote)));

  if let Some(replace) = &module.replace {
    out.push_str(&format!("{prefix}{indent}Replace:\n"));
    format_module(out, replace, quote, &format!("{prefix}{indent}"), indent);
  }
}
