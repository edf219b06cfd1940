//! shape-relay - CLI for the shape command relay.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use shape_relay::{
    parse_generated, CommandQueue, DirStore, Dispatcher, TracingBackend,
};

/// Relay model-generated shape descriptions to a CAD scripting backend.
#[derive(Parser, Debug)]
#[command(name = "shape-relay")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Command store directory
    #[arg(short, long, default_value = shape_relay::config::DEFAULT_STORE_DIR)]
    store: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse generated shape text and enqueue the resulting command
    Process {
        /// Raw generated text (reads stdin when neither this nor --input is given)
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Parse and print only, don't enqueue
        #[arg(long)]
        dry_run: bool,
    },
    /// List pending command entry ids
    List,
    /// Print one pending entry as JSON
    Show {
        /// Entry id as returned by `list`
        id: String,
    },
    /// Run dispatch poll cycles against the logging backend
    Dispatch {
        /// Keep polling at this interval in seconds instead of one cycle
        #[arg(short, long)]
        watch: Option<u64>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let store = DirStore::new(&args.store);

    match args.command {
        Command::Process {
            text,
            input,
            dry_run,
        } => process(&store, text, input, dry_run),
        Command::List => list(&store),
        Command::Show { id } => show(&store, &id),
        Command::Dispatch { watch } => dispatch(&store, watch),
    }
}

fn process(
    store: &DirStore,
    text: Option<String>,
    input: Option<PathBuf>,
    dry_run: bool,
) -> Result<()> {
    let raw = match (text, input) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let command = parse_generated(&raw);

    if !dry_run {
        let id = store.enqueue(&command)?;
        info!("Enqueued {}", id);
    }

    println!("{}", serde_json::to_string_pretty(&command)?);
    Ok(())
}

fn list(store: &DirStore) -> Result<()> {
    let ids = store.list_pending()?;
    info!("{} pending entr(ies)", ids.len());
    for id in ids {
        println!("{}", id);
    }
    Ok(())
}

fn show(store: &DirStore, id: &str) -> Result<()> {
    let command = store
        .read(id)
        .with_context(|| format!("Failed to read entry {}", id))?;
    println!("{}", serde_json::to_string_pretty(&command)?);
    Ok(())
}

fn dispatch(store: &DirStore, watch: Option<u64>) -> Result<()> {
    let mut backend = TracingBackend::default();

    loop {
        let report = Dispatcher::new(store, &mut backend).run_cycle()?;

        for (id, reason) in &report.failed {
            warn!("{} failed: {}", id, reason);
        }
        info!(
            "cycle done: {} constructed, {} failed, {} skipped",
            report.succeeded.len(),
            report.failed.len(),
            report.skipped.len()
        );

        match watch {
            Some(seconds) => std::thread::sleep(Duration::from_secs(seconds)),
            None => break,
        }
    }

    Ok(())
}
