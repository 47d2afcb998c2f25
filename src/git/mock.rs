use crate::domain::TagRef;
use crate::error::{Result, VersionError};
use crate::git::Repository;
use git2::Oid;
use std::cell::Cell;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    head: Option<Oid>,
    tags: HashMap<String, Oid>,
    fail_tag_listing: bool,
    tag_listings: Cell<usize>,
}

impl MockRepository {
    /// Create a new mock repository with no commits
    pub fn new() -> Self {
        MockRepository {
            head: None,
            tags: HashMap::new(),
            fail_tag_listing: false,
            tag_listings: Cell::new(0),
        }
    }

    /// Point HEAD at a commit
    pub fn set_head(&mut self, oid: Oid) {
        self.head = Some(oid);
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.insert(name.into(), oid);
    }

    /// Make `tag_refs` fail like a corrupt ref database would
    pub fn fail_tag_listing(&mut self) {
        self.fail_tag_listing = true;
    }

    /// How many times the tag namespace was read
    pub fn tag_listings(&self) -> usize {
        self.tag_listings.get()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn head_oid(&self) -> Result<Oid> {
        self.head.ok_or(VersionError::UnbornRepository)
    }

    fn tag_refs(&self) -> Result<Vec<TagRef>> {
        self.tag_listings.set(self.tag_listings.get() + 1);
        if self.fail_tag_listing {
            return Err(git2::Error::from_str("failed to read packed-refs").into());
        }

        Ok(self
            .tags
            .iter()
            .map(|(name, oid)| TagRef::new(name.clone(), *oid))
            .collect())
    }
}
