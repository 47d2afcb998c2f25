//! Domain logic - pure version selection rules independent of git access

pub mod tag;
pub mod version;

pub use tag::{ReleasePrefixSet, TagRef, DEFAULT_RELEASE_PREFIXES, TAG_NAMESPACE};
pub use version::select_version;
