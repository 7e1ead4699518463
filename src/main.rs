use clap::{Parser, Subcommand};
use debar::core::error_help::format_error_with_help;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "debar")]
#[command(about = "Download Debian packages together with their dependencies")]
#[command(version)]
struct Cli {
    /// Work directory (defaults to the current directory)
    #[arg(short = 'C', long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize an empty directory as a Debar work directory
    Init,
    /// Download repository metadata and rebuild the package index
    Update,
    /// Show a package and its direct dependencies
    Show {
        /// Package name
        package: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Download a package and everything it depends on
    Get {
        /// Package name
        package: String,
        /// Also download suggested packages
        #[arg(short, long)]
        suggests: bool,
    },
    /// Search package names by substring
    Search {
        /// Text the package name must contain
        text: String,
    },
    /// Print the dependency graph as a Mermaid flowchart
    Graph {
        /// Package name
        package: String,
        /// Include suggested packages
        #[arg(short, long)]
        suggests: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli::work_dir(cli.dir) {
        Ok(dir) => match cli.command {
            Commands::Init => cli::init::run(&dir),
            Commands::Update => cli::update::run(&dir).await,
            Commands::Show { package, json } => cli::show::run(&dir, &package, json),
            Commands::Get { package, suggests } => cli::get::run(&dir, &package, suggests).await,
            Commands::Search { text } => cli::search::run(&dir, &text),
            Commands::Graph { package, suggests } => cli::graph::run(&dir, &package, suggests),
        },
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n{}", format_error_with_help(&e));
            ExitCode::FAILURE
        }
    }
}
