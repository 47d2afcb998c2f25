//! Version resolution from the state of the enclosing git working copy

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::Config;
use crate::domain::{select_version, ReleasePrefixSet};
use crate::error::{Result, VersionError};
use crate::git::{Git2Repository, Repository};

/// Outcome of resolving a version for a build descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A version was derived from HEAD
    Resolved(String),
    /// No repository or no commit; the declared version stands
    Unchanged,
    /// Git metadata could not be read; the declared version stands
    Failed(String),
}

impl Resolution {
    pub fn version(&self) -> Option<&str> {
        match self {
            Resolution::Resolved(version) => Some(version),
            Resolution::Unchanged | Resolution::Failed(_) => None,
        }
    }

    /// The version to use given the one currently declared
    pub fn apply(self, current: &str) -> String {
        match self {
            Resolution::Resolved(version) => version,
            Resolution::Unchanged | Resolution::Failed(_) => current.to_string(),
        }
    }
}

/// Derives a version string from HEAD and the tags pointing at it
#[derive(Debug, Clone)]
pub struct VersionResolver {
    prefixes: ReleasePrefixSet,
    peel_annotated_tags: bool,
}

impl VersionResolver {
    pub fn new(config: &Config) -> Self {
        VersionResolver {
            prefixes: config.prefix_set(),
            peel_annotated_tags: config.peel_annotated_tags,
        }
    }

    /// Resolve the version of an already opened repository.
    ///
    /// # Returns
    /// * `Ok(String)` - Release suffix, plain tag name, or full HEAD id
    /// * `Err(UnbornRepository)` - If HEAD has no commit
    /// * `Err` - If the ref database cannot be read
    pub fn resolve<R: Repository + ?Sized>(&self, repo: &R) -> Result<String> {
        let head = repo.head_oid()?;

        let tags: BTreeSet<String> = repo
            .tag_refs()?
            .into_iter()
            .filter(|tag| tag.target == head)
            .map(|tag| tag.name)
            .collect();
        debug!("HEAD {} carries {} tag(s): {:?}", head, tags.len(), tags);

        let version = select_version(&tags, head, &self.prefixes);
        debug!("Resolved version {}", version);
        Ok(version)
    }

    /// Resolve the version for a build descriptor file.
    ///
    /// Never fails: a missing repository or empty history yields
    /// [Resolution::Unchanged], any other error [Resolution::Failed].
    pub fn resolve_path(&self, descriptor: &Path) -> Resolution {
        match self.resolve_descriptor(descriptor) {
            Ok(version) => Resolution::Resolved(version),
            Err(e) if e.is_recoverable() => {
                debug!("Keeping declared version of {}: {}", descriptor.display(), e);
                Resolution::Unchanged
            }
            Err(e) => {
                debug!("Failed to retrieve Git metadata for {}: {}", descriptor.display(), e);
                Resolution::Failed(e.to_string())
            }
        }
    }

    fn resolve_descriptor(&self, descriptor: &Path) -> Result<String> {
        let start = discovery_root(descriptor);
        if !start.exists() {
            return Err(VersionError::NotAGitRepository(start));
        }

        // Dropped on every return path below
        let repo =
            Git2Repository::discover(&start)?.with_peel_annotated_tags(self.peel_annotated_tags);
        self.resolve(&repo)
    }
}

impl Default for VersionResolver {
    fn default() -> Self {
        VersionResolver::new(&Config::default())
    }
}

/// Directory where repository discovery starts for a descriptor path.
///
/// A directory is used as is; a file yields its parent, and a bare file
/// name the current directory.
pub fn discovery_root(descriptor: &Path) -> PathBuf {
    if descriptor.is_dir() {
        return descriptor.to_path_buf();
    }

    match descriptor.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
