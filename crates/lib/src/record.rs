//! Build provenance records.
//!
//! A [`BuildRecord`] is the snapshot of how an artifact was produced: the
//! toolchain, the main module, every dependency and the build settings.
//! Records are produced once by a data source and only read afterwards.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "GoVersion": "rustc 1.85.0",
//!   "Path": "example",
//!   "Main": { "Path": "example", "Version": "0.1.0", "Sum": "", "Replace": null },
//!   "Deps": [
//!     { "Path": "serde", "Version": "1.0.219", "Sum": "5f0e...", "Replace": null }
//!   ],
//!   "Settings": [{ "Key": "TARGET", "Value": "x86_64-unknown-linux-gnu" }]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// The full build provenance of one artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRecord {
  /// Version of the toolchain that produced the artifact.
  #[serde(rename = "GoVersion")]
  pub tool_version: String,

  /// Primary artifact identifier.
  #[serde(rename = "Path")]
  pub path: String,

  /// The module the artifact was built from.
  #[serde(rename = "Main")]
  pub main: ModuleRef,

  /// Dependencies in the order the data source reported them.
  #[serde(rename = "Deps", default)]
  pub deps: Vec<ModuleRef>,

  /// Build settings in the order the data source reported them.
  #[serde(rename = "Settings", default)]
  pub settings: Vec<Setting>,
}

/// One module: the main module or a dependency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModuleRef {
  pub path: String,
  pub version: String,

  /// Content checksum, empty when unknown.
  pub sum: String,

  /// The module this one was replaced by. May itself be replaced.
  #[serde(default)]
  pub replace: Option<Box<ModuleRef>>,
}

/// A build flag or environment fact recorded at build time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Setting {
  pub key: String,
  pub value: String,
}

impl BuildRecord {
  /// Create a record with no dependencies and no settings.
  pub fn new(tool_version: &str, path: &str, main: ModuleRef) -> Self {
    Self {
      tool_version: tool_version.to_string(),
      path: path.to_string(),
      main,
      deps: Vec::new(),
      settings: Vec::new(),
    }
  }

  /// Append a dependency.
  pub fn with_dep(mut self, dep: ModuleRef) -> Self {
    self.deps.push(dep);
    self
  }

  /// Append a setting.
  pub fn with_setting(mut self, key: &str, value: &str) -> Self {
    self.settings.push(Setting::new(key, value));
    self
  }
}

impl ModuleRef {
  /// Create a module with an empty checksum and no replacement.
  pub fn new(path: &str, version: &str) -> Self {
    Self {
      path: path.to_string(),
      version: version.to_string(),
      sum: String::new(),
      replace: None,
    }
  }

  /// Set the content checksum.
  pub fn with_sum(mut self, sum: &str) -> Self {
    self.sum = sum.to_string();
    self
  }

  /// Set the replacement module.
  pub fn with_replace(mut self, replace: ModuleRef) -> Self {
    self.replace = Some(Box::new(replace));
    self
  }
}

impl Setting {
  pub fn new(key: &str, value: &str) -> Self {
    Self {
      key: key.to_string(),
      value: value.to_string(),
    }
  }
}
