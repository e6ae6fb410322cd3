//! Execute command - run generated tests folder by folder

use anyhow::{bail, Result};
use colored::*;
use std::path::PathBuf;
use wavetest_core::discovery;
use wavetest_core::executor::{FolderRunner, OutputStream, RunnerCommand, TEST_FILE_SUFFIX};
use wavetest_core::generator;

/// Arguments for the execute command
pub struct ExecuteArgs {
    /// Project root containing tests/Feature
    pub base_dir: PathBuf,
    /// Test runner binary override
    pub runner: Option<String>,
    /// Disable colored output
    pub no_color: bool,
}

impl Default for ExecuteArgs {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            runner: None,
            no_color: false,
        }
    }
}

/// Run the execute command
pub fn run(args: ExecuteArgs) -> Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }

    println!("{}", "Executing tests in the Feature directory...".green());

    let feature_root = generator::feature_root(&args.base_dir);
    if !feature_root.is_dir() {
        bail!(
            "The Feature directory does not exist: {}",
            feature_root.display()
        );
    }

    let folders = discovery::subfolders_recursive(&feature_root)?;
    if folders.is_empty() {
        println!("{}", "No folders found in the Feature directory.".yellow());
        return Ok(());
    }

    let command = match &args.runner {
        Some(program) => RunnerCommand::phpunit(program),
        None => RunnerCommand::default(),
    };
    let runner = FolderRunner::new(command);

    for folder in &folders {
        println!("{}", format!("Running tests for folder: {folder}").green());

        let folder_path = feature_root.join(folder);

        let all_files = discovery::immediate_files_with_extension(&folder_path, "php");
        if all_files.is_empty() {
            println!("{}", format!("No PHP files found in folder: {folder}").yellow());
            continue;
        }

        let has_tests = all_files.iter().any(|file| file.ends_with(TEST_FILE_SUFFIX));
        if !has_tests {
            println!("{}", format!("No test files found in folder: {folder}").yellow());
            continue;
        }

        let outcome = runner.run(&folder_path, |stream, line| match stream {
            OutputStream::Stdout => println!("{line}"),
            OutputStream::Stderr => eprintln!("{}", line.red()),
        });

        match outcome {
            Ok(result) if result.success => {
                println!("{}", format!("Tests passed for folder: {folder}").green());
            }
            Ok(_) => {
                eprintln!("{}", format!("Tests failed for folder: {folder}").red());
            }
            Err(error) => {
                eprintln!(
                    "{}",
                    format!("Tests failed for folder: {folder} ({error})").red()
                );
            }
        }
    }

    // Completion is reported even when individual folders failed; the
    // run-level exit status does not aggregate folder outcomes.
    println!("{}", "All tests executed successfully!".green());

    if args.no_color {
        colored::control::unset_override();
    }

    Ok(())
}
