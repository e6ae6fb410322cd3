//! Generate command - synthesize feature tests from the route manifest

use anyhow::{Context, Result};
use colored::*;
use std::path::PathBuf;
use wavetest_core::generator::{GenerateOutcome, TestGenerator};
use wavetest_core::routes::{JsonRouteManifest, RouteProvider};

/// Arguments for the generate command
pub struct GenerateArgs {
    /// Route manifest path
    pub routes: PathBuf,
    /// Project root containing tests/Feature
    pub base_dir: PathBuf,
    /// Disable colored output
    pub no_color: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            routes: PathBuf::from("routes.json"),
            base_dir: PathBuf::from("."),
            no_color: false,
        }
    }
}

/// Run the generate command
pub fn run(args: GenerateArgs) -> Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }

    println!("{}", "Generating tests...".green());

    let manifest = JsonRouteManifest::new(&args.routes);
    let routes = manifest
        .routes()
        .with_context(|| format!("Failed to load route manifest {}", args.routes.display()))?;

    let generator = TestGenerator::new(&args.base_dir);
    for route in &routes {
        let outcome = generator.generate_route(route)?;
        report_outcome(&outcome);
    }

    println!("{}", "Tests generated successfully!".green());

    if args.no_color {
        colored::control::unset_override();
    }

    Ok(())
}

fn report_outcome(outcome: &GenerateOutcome) {
    match outcome {
        GenerateOutcome::Created { folder, file } => {
            println!(
                "{}",
                format!("Test created: {file} in folder {folder}").green()
            );
        }
        GenerateOutcome::AlreadyExists { folder, file } => {
            println!(
                "{}",
                format!("Test already exists: {file} in folder {folder}").dimmed()
            );
        }
        GenerateOutcome::MissingName { uri } => {
            println!("{}", format!("Route without name: {uri}").yellow());
        }
        GenerateOutcome::InvalidAction { name } => {
            println!(
                "{}",
                format!("Invalid controller data for route: {name}").yellow()
            );
        }
        GenerateOutcome::InvalidName { name } => {
            println!("{}", format!("Invalid route name format: {name}").yellow());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_generate_command_writes_tests() {
        let dir = tempdir().unwrap();
        let manifest_path = dir.path().join("routes.json");
        fs::write(
            &manifest_path,
            r#"[
                {"uri": "users/create", "name": "users.create",
                 "action": "App\\Http\\Controllers\\UserController@create"},
                {"uri": "health", "name": null, "action": "Closure"}
            ]"#,
        )
        .unwrap();

        let args = GenerateArgs {
            routes: manifest_path,
            base_dir: dir.path().to_path_buf(),
            no_color: true,
        };

        run(args).unwrap();

        assert!(dir
            .path()
            .join("tests/Feature/Users/CreateTest.php")
            .exists());
    }

    #[test]
    fn test_generate_command_missing_manifest_fails() {
        let dir = tempdir().unwrap();

        let args = GenerateArgs {
            routes: dir.path().join("absent.json"),
            base_dir: dir.path().to_path_buf(),
            no_color: true,
        };

        assert!(run(args).is_err());
    }
}
