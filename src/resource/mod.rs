//! Resource path resolution
//!
//! Games ship their sounds next to the executable or inside a bundle
//! directory. Relative paths are looked up in order:
//!
//! 1. the explicit directory from `Options::resource_dir`
//! 2. the bundle directory named by `ACCESSIBLE_GAMES_BUNDLE_DIR`
//! 3. the current working directory
//!
//! Absolute paths are returned unchanged.

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable naming a bundle directory for packaged games
pub const BUNDLE_DIR_ENV: &str = "ACCESSIBLE_GAMES_BUNDLE_DIR";

/// Resolves relative resource paths against a base directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePaths {
    base: PathBuf,
}

impl ResourcePaths {
    /// Pick the base directory from `explicit`, the bundle directory or the
    /// working directory, in that order.
    pub fn new(explicit: Option<&Path>) -> Self {
        Self {
            base: base_dir(explicit),
        }
    }

    pub fn from_base(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Join `relative` onto the base directory
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        let relative = relative.as_ref();
        if relative.is_absolute() {
            relative.to_path_buf()
        } else {
            self.base.join(relative)
        }
    }
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Base directory for resources
pub fn base_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    if let Some(dir) = bundle_dir() {
        return dir;
    }
    env::current_dir().unwrap_or_else(|err| {
        log::warn!("Working directory unavailable ({}), using '.'", err);
        PathBuf::from(".")
    })
}

/// Bundle directory from the environment, if it names an existing directory
pub fn bundle_dir() -> Option<PathBuf> {
    env::var_os(BUNDLE_DIR_ENV)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .filter(|dir| dir.is_dir())
}

/// Resolve `relative` with the default lookup order
pub fn working_path(relative: impl AsRef<Path>) -> PathBuf {
    ResourcePaths::default().resolve(relative)
}
