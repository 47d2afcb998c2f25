use git2::Oid;

/// Namespace under which git keeps tag references
pub const TAG_NAMESPACE: &str = "refs/tags/";

/// Prefixes that mark a tag as an official release
pub const DEFAULT_RELEASE_PREFIXES: [&str; 3] = ["release/", "releases/", "release-"];

/// A tag reference with the commit it points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRef {
    /// Bare tag name, without the `refs/tags/` namespace
    pub name: String,
    pub target: Oid,
}

impl TagRef {
    pub fn new(name: impl Into<String>, target: Oid) -> Self {
        TagRef {
            name: name.into(),
            target,
        }
    }

    /// Build a tag from a full reference name (e.g. "refs/tags/v1.0.0").
    ///
    /// Returns `None` for references outside the tag namespace.
    pub fn from_ref_name(ref_name: &str, target: Oid) -> Option<Self> {
        ref_name
            .strip_prefix(TAG_NAMESPACE)
            .filter(|name| !name.is_empty())
            .map(|name| TagRef::new(name, target))
    }
}

/// Ordered set of release prefixes.
///
/// Order matters only for tie-breaking: when tags on one commit match
/// several prefixes the earliest prefix wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePrefixSet {
    prefixes: Vec<String>,
}

impl ReleasePrefixSet {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for prefix in prefixes.into_iter().map(Into::into) {
            if !unique.contains(&prefix) {
                unique.push(prefix);
            }
        }
        ReleasePrefixSet { prefixes: unique }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.prefixes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }

    /// Strip the first prefix that leaves a non-empty version.
    ///
    /// A tag consisting of nothing but a prefix is not a release tag.
    pub fn strip<'a>(&self, tag: &'a str) -> Option<&'a str> {
        self.find_match(tag).map(|(_, version)| version)
    }

    /// Index of the prefix [strip](Self::strip) removes from `tag`
    pub fn position(&self, tag: &str) -> Option<usize> {
        self.find_match(tag).map(|(index, _)| index)
    }

    fn find_match<'a>(&self, tag: &'a str) -> Option<(usize, &'a str)> {
        self.iter().enumerate().find_map(|(index, prefix)| {
            tag.strip_prefix(prefix)
                .filter(|version| !version.is_empty())
                .map(|version| (index, version))
        })
    }
}

impl Default for ReleasePrefixSet {
    fn default() -> Self {
        ReleasePrefixSet::new(DEFAULT_RELEASE_PREFIXES)
    }
}
