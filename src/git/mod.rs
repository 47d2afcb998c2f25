//! Git metadata access layer
//!
//! This module provides a trait-based abstraction over the handful of
//! read-only Git operations version resolution needs, so the resolver can be
//! driven by a real repository or by an in-memory one in tests.
//!
//! # Overview
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! Repository discovery is not part of the trait: it only exists for real
//! repositories and lives on [Git2Repository::discover].
//!
//! ```rust,no_run
//! # use git_tag_version::git::{Git2Repository, Repository};
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = Git2Repository::discover("/path/to/project")?;
//! let head = repo.head_oid()?;
//! let tags_on_head = repo
//!     .tag_refs()?
//!     .into_iter()
//!     .filter(|tag| tag.target == head)
//!     .count();
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::TagRef;
use crate::error::Result;
use git2::Oid;

/// Read-only repository operations used by the resolver
///
/// ## Error Handling
///
/// Implementations report an empty history as
/// [VersionError::UnbornRepository](crate::error::VersionError::UnbornRepository)
/// and any lower-level failure as
/// [VersionError::Git](crate::error::VersionError::Git).
pub trait Repository {
    /// Get the commit currently checked out
    ///
    /// # Returns
    /// * `Ok(Oid)` - Object ID of the HEAD commit (detached or on a branch)
    /// * `Err(UnbornRepository)` - If HEAD does not point at a commit yet
    fn head_oid(&self) -> Result<Oid>;

    /// List every reference under the tag namespace with its target commit
    ///
    /// Names are returned without the `refs/tags/` prefix. The order is not
    /// significant.
    fn tag_refs(&self) -> Result<Vec<TagRef>>;
}
