//! JSON rendering.

use serde::Serialize;
use serde::ser::Error as _;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use super::FormatError;
use crate::record::BuildRecord;

/// Render `record` as pretty-printed JSON.
///
/// Each nesting level is indented by `indent`. `prefix` is prepended once,
/// to the start of the output; inner lines are not prefixed.
pub fn format_json(record: &BuildRecord, prefix: &str, indent: &str) -> Result<String, FormatError> {
  let mut buf = prefix.as_bytes().to_vec();

  let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
  record.serialize(&mut serializer).map_err(FormatError::Serialization)?;

  let out = String::from_utf8(buf).map_err(|e| FormatError::Serialization(serde_json::Error::custom(e)))?;

  debug!(
    deps = record.deps.len(),
    settings = record.settings.len(),
    bytes = out.len(),
    "rendered build record as JSON"
  );

  Ok(out)
}
