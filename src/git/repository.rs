use crate::domain::TagRef;
use crate::error::{Result, VersionError};
use git2::{ErrorCode, Oid, Repository as Git2Repo, RepositoryOpenFlags};
use log::debug;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with our trait interface
///
/// The underlying handle is closed when the wrapper is dropped.
pub struct Git2Repository {
    repo: Git2Repo,
    peel_annotated_tags: bool,
}

impl Git2Repository {
    /// Discover the repository enclosing `start`, walking up parent directories
    ///
    /// Follows the git environment: `GIT_DIR` names the repository directly,
    /// and the search never enters a directory listed in
    /// `GIT_CEILING_DIRECTORIES`.
    ///
    /// # Returns
    /// * `Ok(Git2Repository)` - The enclosing repository
    /// * `Err(NotAGitRepository)` - If no `.git` was found before a ceiling or
    ///   the filesystem root
    pub fn discover<P: AsRef<Path>>(start: P) -> Result<Self> {
        let start = start.as_ref();
        let opened = match env::var_os("GIT_DIR").filter(|dir| !dir.is_empty()) {
            Some(git_dir) => Git2Repo::open(PathBuf::from(git_dir)),
            None => Git2Repo::open_ext(
                start,
                RepositoryOpenFlags::empty(),
                ceiling_dirs(env::var_os("GIT_CEILING_DIRECTORIES")),
            ),
        };
        let repo = match opened {
            Ok(repo) => repo,
            Err(e) if e.code() == ErrorCode::NotFound => {
                return Err(VersionError::NotAGitRepository(start.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };

        debug!("Discovered git repository at {}", repo.path().display());
        Ok(Git2Repository::from_git2(repo))
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository {
            repo,
            peel_annotated_tags: true,
        }
    }

    /// Whether annotated tags are matched by the commit they tag
    ///
    /// When disabled only the reference's direct target is compared, so an
    /// annotated tag (which points at a tag object) never matches HEAD.
    pub fn with_peel_annotated_tags(mut self, peel: bool) -> Self {
        self.peel_annotated_tags = peel;
        self
    }

    fn tag_target(&self, reference: &git2::Reference<'_>) -> Option<Oid> {
        if self.peel_annotated_tags {
            if let Ok(commit) = reference.peel_to_commit() {
                return Some(commit.id());
            }
        }
        reference.target()
    }
}

/// Split a `GIT_CEILING_DIRECTORIES` value into its non-empty entries
fn ceiling_dirs(value: Option<OsString>) -> Vec<PathBuf> {
    value
        .map(|dirs| {
            env::split_paths(&dirs)
                .filter(|dir| !dir.as_os_str().is_empty())
                .collect()
        })
        .unwrap_or_default()
}

impl super::Repository for Git2Repository {
    fn head_oid(&self) -> Result<Oid> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                return Err(VersionError::UnbornRepository);
            }
            Err(e) => return Err(e.into()),
        };

        head.target().ok_or(VersionError::UnbornRepository)
    }

    fn tag_refs(&self) -> Result<Vec<TagRef>> {
        let mut tags = Vec::new();

        for reference in self.repo.references()? {
            let reference = reference?;

            // Non UTF-8 names cannot become a version string
            let Some(name) = reference.name() else {
                continue;
            };
            if !name.starts_with(crate::domain::TAG_NAMESPACE) {
                continue;
            }

            match self.tag_target(&reference) {
                Some(target) => tags.extend(TagRef::from_ref_name(name, target)),
                None => debug!("Skipping symbolic tag reference {}", name),
            }
        }

        Ok(tags)
    }
}
