use anyhow::Result;
use clap::{Parser, Subcommand};
use quilt::commands::{init, plan, run, validate};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quilt")]
#[command(about = "Declarative provisioning compiler", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new project with sample blueprint and task files
    Init {
        /// Directory to initialize as the project root
        #[arg(short = 'p', long, default_value = ".")]
        project_root: PathBuf,
    },

    /// Compile a blueprint and execute its plan
    Run {
        /// Blueprint file, relative to the project root
        blueprint: String,

        /// Project root directory containing the blueprint and tasks/
        #[arg(short = 'p', long, default_value = ".")]
        project_root: PathBuf,

        /// Compile and print the plan without executing anything
        #[arg(short, long)]
        dry_run: bool,

        /// Enable verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Validate a blueprint without executing it
    Validate {
        /// Blueprint file, relative to the project root
        blueprint: String,

        /// Project root directory containing the blueprint and tasks/
        #[arg(short = 'p', long, default_value = ".")]
        project_root: PathBuf,
    },

    /// Print the compiled execution plan
    Plan {
        /// Blueprint file, relative to the project root
        blueprint: String,

        /// Project root directory containing the blueprint and tasks/
        #[arg(short = 'p', long, default_value = ".")]
        project_root: PathBuf,

        /// Emit the plan as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { project_root } => init::execute(&project_root),
        Commands::Run {
            blueprint,
            project_root,
            dry_run,
            verbose,
        } => run::execute(&blueprint, &project_root, dry_run, verbose),
        Commands::Validate {
            blueprint,
            project_root,
        } => validate::execute(&blueprint, &project_root),
        Commands::Plan {
            blueprint,
            project_root,
            json,
        } => plan::execute(&blueprint, &project_root, json),
    }
}
