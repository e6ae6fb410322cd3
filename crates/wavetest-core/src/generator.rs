//! Test file generation from route descriptors
//!
//! The generator walks route descriptors one at a time, derives the target
//! folder and file from the route name, and writes a rendered test body
//! under `tests/Feature` unless one is already on disk. Malformed routes
//! are classified, never fatal; only filesystem failures abort a run.

use crate::error::{WaveError, WaveResult};
use crate::naming::{self, TestFileName};
use crate::routes::RouteDescriptor;
use crate::template;
use std::fs;
use std::path::{Path, PathBuf};

/// Per-route generation outcome.
///
/// The warning-class variants are expected steady-state events the caller
/// reports and moves past, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// Test file written
    Created { folder: String, file: String },
    /// Target already on disk; nothing written
    AlreadyExists { folder: String, file: String },
    /// Route has no name
    MissingName { uri: String },
    /// Action missing or not in `Controller@method` shape
    InvalidAction { name: String },
    /// Route name does not split into folder and file segments
    InvalidName { name: String },
}

/// Writes generated tests under `<base>/tests/Feature`.
pub struct TestGenerator {
    base_dir: PathBuf,
}

impl TestGenerator {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Root of the generated test tree.
    pub fn feature_root(&self) -> PathBuf {
        feature_root(&self.base_dir)
    }

    /// Process a single route descriptor.
    pub fn generate_route(&self, route: &RouteDescriptor) -> WaveResult<GenerateOutcome> {
        let Some(name) = route.route_name() else {
            return Ok(GenerateOutcome::MissingName {
                uri: route.uri.clone(),
            });
        };

        if route.controller_action().is_none() {
            return Ok(GenerateOutcome::InvalidAction {
                name: name.to_string(),
            });
        }

        let target = match naming::derive_test_file(name) {
            Ok(target) => target,
            Err(WaveError::InvalidRouteName { .. }) => {
                return Ok(GenerateOutcome::InvalidName {
                    name: name.to_string(),
                });
            }
            Err(other) => return Err(other),
        };

        self.write_if_absent(name, route, &target)
    }

    fn write_if_absent(
        &self,
        route_name: &str,
        route: &RouteDescriptor,
        target: &TestFileName,
    ) -> WaveResult<GenerateOutcome> {
        let directory = self.feature_root().join(&target.folder);
        let path = directory.join(format!("{}.php", target.file));

        if path.exists() {
            return Ok(GenerateOutcome::AlreadyExists {
                folder: target.folder.clone(),
                file: target.file.clone(),
            });
        }

        fs::create_dir_all(&directory).map_err(|error| WaveError::io(&directory, error))?;

        let parameters = route.path_parameters();
        let body = template::render_feature_test(&target.folder, &target.file, route_name, &parameters);
        fs::write(&path, body).map_err(|error| WaveError::io(&path, error))?;

        Ok(GenerateOutcome::Created {
            folder: target.folder.clone(),
            file: target.file.clone(),
        })
    }
}

/// `<base>/tests/Feature`, the directory convention both pipelines share.
pub fn feature_root(base_dir: &Path) -> PathBuf {
    base_dir.join("tests").join("Feature")
}
