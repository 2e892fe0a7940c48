//! The build record embedded in this binary by `build.rs`.

use buildinfo_lib::{BuildRecord, ModuleRef, Setting};
use tracing::{debug, warn};

#[allow(dead_code)]
mod built_info {
  include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

const DEPENDENCIES_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/dependencies.json"));

/// Read this binary's own build record.
///
/// Returns `None` when the embedded dependency list is unusable.
pub fn build_record() -> Option<BuildRecord> {
  let deps = parse_dependencies(DEPENDENCIES_JSON)?;

  let record = BuildRecord {
    tool_version: built_info::RUSTC_VERSION.to_string(),
    path: built_info::PKG_NAME.to_string(),
    main: ModuleRef::new(built_info::PKG_NAME, built_info::PKG_VERSION),
    deps,
    settings: settings(),
  };

  debug!(
    path = %record.path,
    deps = record.deps.len(),
    settings = record.settings.len(),
    "loaded embedded build record"
  );

  Some(record)
}

fn parse_dependencies(json: &str) -> Option<Vec<ModuleRef>> {
  match serde_json::from_str(json) {
    Ok(deps) => Some(deps),
    Err(e) => {
      warn!(error = %e, "embedded dependency list is unreadable");
      None
    }
  }
}

fn settings() -> Vec<Setting> {
  let mut settings = vec![
    Setting::new("-profile", built_info::PROFILE),
    Setting::new("-opt-level", built_info::OPT_LEVEL),
    Setting::new("-debug", &built_info::DEBUG.to_string()),
  ];

  let features = built_info::FEATURES_LOWERCASE.join(",");
  if !features.is_empty() {
    settings.push(Setting::new("-features", &features));
  }

  settings.extend([
    Setting::new("TARGET", built_info::TARGET),
    Setting::new("HOST", built_info::HOST),
    Setting::new("target_os", built_info::CFG_OS),
    Setting::new("target_arch", built_info::CFG_TARGET_ARCH),
    Setting::new("build.time", built_info::BUILT_TIME_UTC),
  ]);

  if let Some(revision) = built_info::GIT_COMMIT_HASH {
    let modified = built_info::GIT_DIRTY.unwrap_or(false);
    settings.extend([
      Setting::new("vcs", "git"),
      Setting::new("vcs.revision", revision),
      Setting::new("vcs.modified", &modified.to_string()),
    ]);
  }

  settings
}
