//! Dependency modules read from a workspace's `Cargo.lock`.
//!
//! Only packages linked into a binary are reported: the walk starts at the
//! binary's package and, inside the workspace, follows just the normal
//! `[dependencies]` of each member. Packages from outside the workspace
//! follow every locked edge, since the lock file only records the
//! dependencies they need to build.
//!
//! Git-sourced packages are reported as replaced by their repository at the
//! pinned revision:
//!
//! ```text
//! source = "git+https://github.com/org/repo?branch=main#0123abcd"
//!   => Replace { Path: "https://github.com/org/repo", Version: "0123abcd" }
//! ```

use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::record::ModuleRef;

/// Errors that can occur when reading lock files and manifests.
#[derive(Debug, Error)]
pub enum LockError {
  /// Failed to parse the lock file TOML.
  #[error("failed to parse lock file: {0}")]
  Lock(#[source] toml::de::Error),

  /// Failed to parse a manifest TOML.
  #[error("failed to parse manifest: {0}")]
  Manifest(#[source] toml::de::Error),
}

/// A workspace package and the names of its normal dependencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceMember {
  pub name: String,
  pub normal_deps: BTreeSet<String>,
}

#[derive(Deserialize)]
struct CargoLock {
  #[serde(default)]
  package: Vec<LockedPackage>,
}

#[derive(Deserialize)]
struct LockedPackage {
  name: String,
  version: String,
  source: Option<String>,
  checksum: Option<String>,
  #[serde(default)]
  dependencies: Vec<String>,
}

#[derive(Deserialize)]
struct Manifest {
  package: Option<ManifestPackage>,
  #[serde(default)]
  dependencies: BTreeMap<String, toml::Value>,
  workspace: Option<ManifestWorkspace>,
}

#[derive(Deserialize)]
struct ManifestPackage {
  name: String,
}

#[derive(Deserialize)]
struct ManifestWorkspace {
  #[serde(default)]
  members: Vec<String>,
}

/// Member paths listed in a workspace root manifest.
pub fn workspace_members(manifest: &str) -> Result<Vec<String>, LockError> {
  let manifest: Manifest = toml::from_str(manifest).map_err(LockError::Manifest)?;
  Ok(manifest.workspace.map(|w| w.members).unwrap_or_default())
}

/// Read a member manifest. Returns `None` for a manifest without `[package]`.
///
/// Renamed dependencies (`alias = { package = "real" }`) are recorded under
/// the real package name, which is what the lock file uses.
pub fn read_member(manifest: &str) -> Result<Option<WorkspaceMember>, LockError> {
  let manifest: Manifest = toml::from_str(manifest).map_err(LockError::Manifest)?;

  let Some(package) = manifest.package else {
    return Ok(None);
  };

  let normal_deps = manifest
    .dependencies
    .into_iter()
    .map(|(key, spec)| match spec.get("package").and_then(toml::Value::as_str) {
      Some(real) => real.to_string(),
      None => key,
    })
    .collect();

  Ok(Some(WorkspaceMember {
    name: package.name,
    normal_deps,
  }))
}

/// Modules for every sourced package linked into `root`, in lock-file order.
///
/// Workspace packages and local path packages have no `source` and are not
/// reported themselves. An unknown `root` yields no dependencies.
pub fn linked_dependencies(lock: &str, root: &str, members: &[WorkspaceMember]) -> Result<Vec<ModuleRef>, LockError> {
  let lock: CargoLock = toml::from_str(lock).map_err(LockError::Lock)?;
  let packages = &lock.package;

  let normal: BTreeMap<&str, &BTreeSet<String>> = members.iter().map(|m| (m.name.as_str(), &m.normal_deps)).collect();

  let Some(start) = packages.iter().position(|p| p.name == root && p.source.is_none()) else {
    debug!(root, "binary package not found in lock file");
    return Ok(Vec::new());
  };

  let mut linked = HashSet::from([start]);
  let mut queue = VecDeque::from([start]);

  while let Some(index) = queue.pop_front() {
    let package = &packages[index];
    let allowed = package.source.is_none().then(|| normal.get(package.name.as_str())).flatten();

    for entry in &package.dependencies {
      let mut parts = entry.split_whitespace();
      let Some(name) = parts.next() else { continue };
      if allowed.is_some_and(|deps| !deps.contains(name)) {
        continue;
      }
      if let Some(next) = resolve_entry(packages, name, parts.next()) {
        if linked.insert(next) {
          queue.push_back(next);
        }
      }
    }
  }

  let deps: Vec<_> = packages
    .iter()
    .enumerate()
    .filter(|(index, _)| linked.contains(index))
    .filter_map(|(_, package)| {
      let source = package.source.as_deref()?;
      let module = ModuleRef::new(&package.name, &package.version).with_sum(package.checksum.as_deref().unwrap_or_default());
      Some(match git_source(source) {
        Some((url, rev)) => module.with_replace(ModuleRef::new(url, rev)),
        None => module,
      })
    })
    .collect();

  debug!(root, locked = packages.len(), linked = deps.len(), "resolved linked dependencies");

  Ok(deps)
}

/// Find the package a lock `dependencies` entry (`name` or `name version ...`) refers to.
fn resolve_entry(packages: &[LockedPackage], name: &str, version: Option<&str>) -> Option<usize> {
  packages
    .iter()
    .position(|p| p.name == name && version.is_none_or(|v| p.version == v))
}

/// Split `git+https://host/repo?branch=main#rev` into `(https://host/repo, rev)`.
pub fn git_source(source: &str) -> Option<(&str, &str)> {
  let rest = source.strip_prefix("git+")?;
  let (location, rev) = rest.split_once('#')?;
  let url = location.split_once('?').map_or(location, |(url, _)| url);
  Some((url, rev))
}
