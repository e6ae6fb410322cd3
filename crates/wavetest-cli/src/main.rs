use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;

/// Route-driven HTTP test scaffolding and execution.
///
/// wavetest reads an exported route manifest, generates skeleton PHPUnit
/// feature tests for every named route, and runs the generated tests
/// folder by folder through the external test runner.
///
/// EXAMPLES:
///     wavetest generate                     Generate tests from routes.json
///     wavetest generate --routes r.json     Use a specific manifest
///     wavetest execute                      Run tests/Feature folder by folder
///
/// ENVIRONMENT VARIABLES:
///     WAVETEST_ROUTES    Default route manifest path
///     WAVETEST_BASE_DIR  Project root containing tests/Feature
///     WAVETEST_RUNNER    Test runner binary (default vendor/bin/phpunit)
///     NO_COLOR           Set to disable colored output
#[derive(Parser)]
#[command(name = "wavetest")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate skeleton feature tests from the route manifest
    ///
    /// Walks every route in the manifest, derives the target folder and
    /// file name from the dotted route name, and writes a PHPUnit feature
    /// test unless one already exists. Unnamed routes, closure routes,
    /// and malformed route names are skipped with a warning.
    ///
    /// EXAMPLES:
    ///     wavetest generate
    ///     wavetest generate --routes storage/routes.json
    ///     wavetest generate --base-dir /srv/app
    #[command(visible_alias = "g")]
    Generate {
        /// Route manifest (JSON export of the route table)
        #[arg(long, default_value = "routes.json", env = "WAVETEST_ROUTES")]
        routes: PathBuf,
        /// Project root containing tests/Feature
        #[arg(long, default_value = ".", env = "WAVETEST_BASE_DIR")]
        base_dir: PathBuf,
        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Execute generated tests folder by folder
    ///
    /// Discovers every subfolder of tests/Feature and runs the external
    /// test runner once per folder containing *Test.php files. Folders
    /// are processed sequentially; a failing folder never stops the run.
    ///
    /// EXAMPLES:
    ///     wavetest execute
    ///     wavetest execute --runner=phpunit
    #[command(visible_alias = "x")]
    Execute {
        /// Project root containing tests/Feature
        #[arg(long, default_value = ".", env = "WAVETEST_BASE_DIR")]
        base_dir: PathBuf,
        /// Test runner binary
        #[arg(long, env = "WAVETEST_RUNNER")]
        runner: Option<String>,
        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cli_config = config::Config::from_env();

    match cli.command {
        Commands::Generate {
            routes,
            base_dir,
            no_color,
        } => {
            let args = commands::generate::GenerateArgs {
                routes,
                base_dir,
                // Command-line flag overrides environment variable
                no_color: no_color || cli_config.no_color,
            };
            commands::generate::run(args)?;
        }
        Commands::Execute {
            base_dir,
            runner,
            no_color,
        } => {
            let args = commands::execute::ExecuteArgs {
                base_dir,
                runner: runner.or(cli_config.runner),
                no_color: no_color || cli_config.no_color,
            };
            commands::execute::run(args)?;
        }
    }

    Ok(())
}
