use std::collections::BTreeSet;

use git2::Oid;

use super::tag::ReleasePrefixSet;

/// Pick the version string for a commit from the tags pointing at it.
///
/// Release tags win over any other tag; with no tags at all the full commit
/// id is used. Ties are broken deterministically: prefixes are tried in
/// their declared order and, for a given prefix, the lexicographically
/// smallest tag is taken. Non-release tags fall back to the smallest name.
///
/// A tag that is exactly a release prefix (e.g. `release-`) would strip to
/// an empty version, so it is not a release tag: it is returned verbatim
/// like any other plain tag rather than as an empty string.
///
/// # Example
/// ```
/// # use std::collections::BTreeSet;
/// # use git2::Oid;
/// # use git_tag_version::domain::{select_version, ReleasePrefixSet};
/// let head = Oid::zero();
/// let tags: BTreeSet<String> = ["v1.0".to_string(), "release/1.0.0".to_string()].into();
/// assert_eq!(select_version(&tags, head, &ReleasePrefixSet::default()), "1.0.0");
/// ```
pub fn select_version(tags: &BTreeSet<String>, head: Oid, prefixes: &ReleasePrefixSet) -> String {
    // Tags iterate in ascending order, so the first minimum is the smallest tag
    let release = tags
        .iter()
        .filter_map(|tag| Some((prefixes.position(tag)?, prefixes.strip(tag)?)))
        .min_by_key(|(position, _)| *position);
    if let Some((_, version)) = release {
        return version.to_string();
    }

    match tags.iter().next() {
        Some(tag) => tag.clone(),
        None => head.to_string(),
    }
}
