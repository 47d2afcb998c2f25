//! Build-model post-processing hook
//!
//! A host build tool parses a descriptor into a [BuildModel] and hands it to
//! a [ModelProcessor] together with the descriptor's location. The git
//! processor only ever touches the version field.

use std::fmt;
use std::path::Path;

use log::debug;

use crate::config::Config;
use crate::resolver::{Resolution, VersionResolver};

/// The parts of a parsed build descriptor the processor cares about
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BuildModel {
    pub group_id: Option<String>,
    pub artifact_id: String,
    pub version: Option<String>,
}

impl BuildModel {
    pub fn new(artifact_id: impl Into<String>) -> Self {
        BuildModel {
            artifact_id: artifact_id.into(),
            ..BuildModel::default()
        }
    }

    pub fn with_group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// `group:artifact` form used in log lines
    pub fn coordinates(&self) -> Coordinates<'_> {
        Coordinates(self)
    }
}

pub struct Coordinates<'a>(&'a BuildModel);

impl fmt::Display for Coordinates<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.group_id {
            Some(group_id) => write!(f, "{}:{}", group_id, self.0.artifact_id),
            None => write!(f, "{}", self.0.artifact_id),
        }
    }
}

/// Hook run by the host after a descriptor has been parsed
pub trait ModelProcessor {
    /// Post-process a parsed model.
    ///
    /// `descriptor` is the file the model was read from, when the host knows it.
    fn process(&self, model: BuildModel, descriptor: Option<&Path>) -> BuildModel;
}

/// Replaces the model version with the one derived from git
#[derive(Debug, Clone, Default)]
pub struct GitVersionProcessor {
    resolver: VersionResolver,
}

impl GitVersionProcessor {
    pub fn new(config: &Config) -> Self {
        GitVersionProcessor {
            resolver: VersionResolver::new(config),
        }
    }

    pub fn from_resolver(resolver: VersionResolver) -> Self {
        GitVersionProcessor { resolver }
    }
}

impl ModelProcessor for GitVersionProcessor {
    fn process(&self, mut model: BuildModel, descriptor: Option<&Path>) -> BuildModel {
        let Some(descriptor) = descriptor else {
            debug!("No descriptor file for {}", model.coordinates());
            return model;
        };

        match self.resolver.resolve_path(descriptor) {
            Resolution::Resolved(version) => {
                debug!("Setting version of {} to {}", model.coordinates(), version);
                model.version = Some(version);
            }
            Resolution::Unchanged => {
                debug!("Git version not available for {}", model.coordinates());
            }
            Resolution::Failed(reason) => {
                debug!("Git version failed for {}: {}", model.coordinates(), reason);
            }
        }
        model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates() {
        let model = BuildModel::new("core").with_group_id("org.example");
        assert_eq!(model.coordinates().to_string(), "org.example:core");
        assert_eq!(BuildModel::new("core").coordinates().to_string(), "core");
    }

    #[test]
    fn test_no_descriptor_leaves_model_untouched() {
        let model = BuildModel::new("core")
            .with_group_id("org.example")
            .with_version("1.0-SNAPSHOT");

        let processed = GitVersionProcessor::default().process(model.clone(), None);
        assert_eq!(processed, model);
    }

    #[test]
    fn test_missing_repository_leaves_model_untouched() {
        let model = BuildModel::new("core").with_version("1.0-SNAPSHOT");

        let processed = GitVersionProcessor::default()
            .process(model.clone(), Some(Path::new("/definitely/not/here/pom.xml")));
        assert_eq!(processed, model);
    }
}
