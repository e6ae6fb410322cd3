//! Route manifest loading and inspection
//!
//! Routes arrive as a JSON export of the application's route table (the
//! shape produced by `php artisan route:list --json`). Each entry carries
//! the route name, the URI template, and the framework action string;
//! everything else in the export is ignored.

use crate::error::{WaveError, WaveResult};
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// One route table entry
#[derive(Debug, Clone, Deserialize)]
pub struct RouteDescriptor {
    /// Route name (routes may be unnamed)
    #[serde(default)]
    pub name: Option<String>,
    /// URI template with `{param}` placeholders
    pub uri: String,
    /// Framework action string (`App\...\Controller@method` or `Closure`)
    #[serde(default)]
    pub action: Option<String>,
}

impl RouteDescriptor {
    /// The route name, treating an empty string like a missing one.
    pub fn route_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Split the action into `(controller, method)`.
    ///
    /// Returns `None` when the action is absent or not in
    /// `Controller@method` shape (closure routes report `Closure`).
    pub fn controller_action(&self) -> Option<(&str, &str)> {
        let action = self.action.as_deref()?;
        let (controller, method) = action.split_once('@')?;
        if controller.is_empty() || method.is_empty() {
            return None;
        }
        Some((controller, method))
    }

    /// Path parameters from the URI template, left to right, duplicates kept.
    pub fn path_parameters(&self) -> Vec<String> {
        path_parameters(&self.uri)
    }
}

/// Extract every `{...}` placeholder from a URI template.
pub fn path_parameters(uri: &str) -> Vec<String> {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    let pattern = PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\{(.*?)\}").expect("placeholder pattern is valid")
    });
    pattern
        .captures_iter(uri)
        .map(|capture| capture[1].to_string())
        .collect()
}

/// Read-only source of route descriptors.
pub trait RouteProvider {
    fn routes(&self) -> WaveResult<Vec<RouteDescriptor>>;
}

/// Route manifest stored as a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonRouteManifest {
    path: PathBuf,
}

impl JsonRouteManifest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RouteProvider for JsonRouteManifest {
    fn routes(&self) -> WaveResult<Vec<RouteDescriptor>> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|error| WaveError::manifest_read(&self.path, error))?;
        serde_json::from_str(&raw).map_err(|error| WaveError::InvalidManifest(error.to_string()))
    }
}
