//! Route-driven test scaffolding and folder-batch execution
//!
//! Two pipelines that meet only on disk:
//! - generation: route manifest -> name derivation -> rendered PHPUnit
//!   feature tests under `tests/Feature/<Folder>/<Name>Test.php`
//! - execution: discover `tests/Feature` subfolders and run the external
//!   test runner once per folder that contains test files

pub mod discovery;
pub mod error;
pub mod executor;
pub mod generator;
pub mod naming;
pub mod routes;
pub mod template;

// Re-export main types
pub use error::{WaveError, WaveResult};
pub use executor::{
    FolderRunner, OutputLine, OutputStream, ProcessOutcome, RunnerCommand, TEST_FILE_SUFFIX,
};
pub use generator::{feature_root, GenerateOutcome, TestGenerator};
pub use naming::{derive_test_file, TestFileName};
pub use routes::{JsonRouteManifest, RouteDescriptor, RouteProvider};
