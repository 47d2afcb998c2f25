pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod processor;
pub mod resolver;
pub mod ui;

pub use error::{Result, VersionError};
pub use processor::{BuildModel, GitVersionProcessor, ModelProcessor};
pub use resolver::{Resolution, VersionResolver};
