//! Command-line interface implementation for create-bison-app.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for create-bison-app.
#[derive(Parser, Debug)]
#[command(author, version, about = "Create a new Bison app from the standard template", long_about = None)]
pub struct Args {
    /// Name of the app; the project folder is named after its slug
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Remote repository URL registered as `origin`
    #[arg(long, value_name = "URL")]
    pub github_repo: Option<String>,

    /// Template directory to render instead of the bundled one
    #[arg(short, long, value_name = "DIR")]
    pub template: Option<PathBuf>,

    /// Extra answer passed to the template, may be repeated
    #[arg(long = "var", value_name = "KEY=VALUE")]
    pub vars: Vec<String>,

    /// JSON file with answers, e.g. a saved dev-app variables file
    #[arg(long, value_name = "PATH")]
    pub answers_file: Option<PathBuf>,

    /// Read answers as a JSON object from stdin
    #[arg(short, long)]
    pub stdin: bool,

    /// Never prompt; unanswered questions take their defaults
    #[arg(long)]
    pub no_input: bool,

    /// Save the answers inside the generated app so the template can be
    /// rendered again with the same variables
    #[arg(long)]
    pub dev: bool,

    /// Write into an existing non-empty project folder
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling on invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
