//! Embeds this binary's build provenance.
//!
//! `built` writes toolchain, profile, target and git metadata to
//! `$OUT_DIR/built.rs`. The dependencies linked into the binary are read from
//! the workspace `Cargo.lock` and written to `$OUT_DIR/dependencies.json`.
//! Both are loaded by `src/embedded.rs`.

use std::{
  env, fs, io,
  path::{Path, PathBuf},
};

use buildinfo_lib::lockfile::{self, WorkspaceMember};

fn main() -> io::Result<()> {
  println!("cargo:rerun-if-changed=build.rs");

  built::write_built_file().map_err(io::Error::other)?;

  let name = env::var("CARGO_PKG_NAME").map_err(io::Error::other)?;
  let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").map_err(io::Error::other)?);

  let deps = match find_lock_file(&manifest_dir) {
    Some(lock_path) => {
      println!("cargo:rerun-if-changed={}", lock_path.display());
      let workspace_root = lock_path.parent().unwrap_or(&manifest_dir);
      let members = workspace_members(workspace_root)?;
      let lock = fs::read_to_string(&lock_path)?;
      watch_git(workspace_root);
      lockfile::linked_dependencies(&lock, &name, &members).map_err(io::Error::other)?
    }
    None => {
      watch_git(&manifest_dir);
      Vec::new()
    }
  };

  let out_dir = PathBuf::from(env::var("OUT_DIR").map_err(io::Error::other)?);
  let json = serde_json::to_string(&deps).map_err(io::Error::other)?;
  fs::write(out_dir.join("dependencies.json"), json)?;

  Ok(())
}

/// Walk up from the package directory to the workspace's `Cargo.lock`.
fn find_lock_file(start: &Path) -> Option<PathBuf> {
  start
    .ancestors()
    .map(|dir| dir.join("Cargo.lock"))
    .find(|path| path.is_file())
}

/// Read every workspace member's manifest, rerunning when any member changes
/// so the embedded `vcs.modified` follows source edits.
fn workspace_members(root: &Path) -> io::Result<Vec<WorkspaceMember>> {
  let root_manifest = fs::read_to_string(root.join("Cargo.toml"))?;
  let mut members = Vec::new();

  if let Some(member) = lockfile::read_member(&root_manifest).map_err(io::Error::other)? {
    members.push(member);
  }

  for member_path in lockfile::workspace_members(&root_manifest).map_err(io::Error::other)? {
    let member_dir = root.join(member_path);
    let Ok(manifest) = fs::read_to_string(member_dir.join("Cargo.toml")) else {
      continue;
    };
    println!("cargo:rerun-if-changed={}", member_dir.display());
    if let Some(member) = lockfile::read_member(&manifest).map_err(io::Error::other)? {
      members.push(member);
    }
  }

  Ok(members)
}

/// Rerun when HEAD moves, the checked-out branch advances or the index changes.
fn watch_git(start: &Path) {
  let Some(git_dir) = find_git_dir(start) else {
    return;
  };

  let head = git_dir.join("HEAD");
  let mut watched = vec![head.clone(), git_dir.join("index"), git_dir.join("packed-refs")];
  if let Some(reference) = fs::read_to_string(&head)
    .ok()
    .and_then(|content| content.trim().strip_prefix("ref: ").map(str::to_string))
  {
    watched.push(git_dir.join(reference));
  }

  for path in watched.iter().filter(|path| path.exists()) {
    println!("cargo:rerun-if-changed={}", path.display());
  }
}

/// The `.git` directory of the checkout containing `start`, following
/// `gitdir:` files used by worktrees and submodules.
fn find_git_dir(start: &Path) -> Option<PathBuf> {
  start.ancestors().find_map(|dir| {
    let dot_git = dir.join(".git");
    if dot_git.is_dir() {
      return Some(dot_git);
    }
    let content = fs::read_to_string(&dot_git).ok()?;
    let target = content.trim().strip_prefix("gitdir: ")?;
    Some(dir.join(target))
  })
}
