//! workbench CLI
//!
//! Command-line shell over the file store and the inference adapter.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use workbench_core::{BackendKind, InferenceConfig, WorkbenchConfig};
use workbench_runtime::InferenceAdapter;
use workbench_store::FileStore;

/// workbench - directory file manager and text model runner
#[derive(Parser, Debug)]
#[command(name = "workbench")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Manage files in a directory
    Dir {
        /// Directory to manage (defaults to storage.root from the config)
        #[arg(long)]
        root: Option<PathBuf>,

        #[command(subcommand)]
        action: DirAction,
    },

    /// Run the model on a piece of text
    Run {
        /// Input text
        text: String,

        /// Backend (echo, classification)
        #[arg(long)]
        backend: Option<BackendKind>,

        /// Classification endpoint URL
        #[arg(long)]
        endpoint: Option<String>,

        /// Adapter name
        #[arg(long)]
        name: Option<String>,
    },

    /// Walk through creating a directory, adding a file and running a model
    Demo {
        /// Directory to create
        root: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum DirAction {
    /// Create the directory if it does not exist
    Create,

    /// Write a text file
    AddText {
        /// File name (e.g. notes.txt)
        name: String,

        /// File content
        content: String,
    },

    /// Copy a file (e.g. an image) into the directory
    AddFile {
        /// File to copy
        source: PathBuf,

        /// Name inside the directory (defaults to the source file name)
        #[arg(long)]
        name: Option<String>,
    },

    /// List files
    Ls {
        /// Show kind, size and modification time
        #[arg(short, long)]
        long: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a file
    Cat {
        /// File name
        name: String,
    },

    /// Delete a file
    Rm {
        /// File name
        name: String,
    },
}

/// Layer `run` flags over the configured inference settings
fn apply_overrides(
    inference: &mut InferenceConfig,
    backend: Option<BackendKind>,
    endpoint: Option<String>,
    name: Option<String>,
) {
    if let Some(backend) = backend {
        inference.backend = backend;
    }
    if endpoint.is_some() {
        inference.endpoint = endpoint;
    }
    if let Some(name) = name {
        inference.name = name;
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => WorkbenchConfig::from_file(path)?,
        None => WorkbenchConfig::default(),
    };

    // Initialize logging
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        config.logging.level.parse().unwrap_or(Level::WARN)
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    match cli.command {
        Commands::Dir { root, action } => {
            let store = FileStore::new(root.unwrap_or_else(|| config.storage.root.clone()));
            match action {
                DirAction::Create => commands::create(&store)?,
                DirAction::AddText { name, content } => {
                    commands::add_text(&store, &name, &content)?
                }
                DirAction::AddFile { source, name } => {
                    commands::add_file(&store, &source, name.as_deref())?
                }
                DirAction::Ls { long, json } => commands::list(&store, long, json)?,
                DirAction::Cat { name } => commands::cat(&store, &name)?,
                DirAction::Rm { name } => commands::remove(&store, &name)?,
            }
        }
        Commands::Run {
            text,
            backend,
            endpoint,
            name,
        } => {
            let mut inference = config.inference.clone();
            apply_overrides(&mut inference, backend, endpoint, name);

            let adapter = InferenceAdapter::from_config(&inference)?;
            commands::run(&adapter, &text)?;
        }
        Commands::Demo { root } => {
            let store = FileStore::new(root);
            let adapter = InferenceAdapter::echo("TestModel")
                .with_version(config.inference.version.clone());
            commands::demo(&store, &adapter)?;
        }
    }

    Ok(())
}
