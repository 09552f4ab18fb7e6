//! Folio CLI - Command-line interface for the Folio page assembler

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{assemble, audit, edit, library, resolve};
use folio_core::Tone;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Deterministic landing-page assembly from a section library", long_about = None)]
#[command(version)]
struct Cli {
    /// Section library directory (expects <dir>/sections/*.toml)
    #[arg(long, global = true)]
    library: Option<String>,

    /// Path to folio.toml
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log more (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a page with beam search
    Assemble {
        /// Content graph JSON file
        #[arg(long)]
        content: String,

        /// Page tone
        #[arg(long, value_parser = parse_tone)]
        tone: Tone,

        /// Required section kinds (comma-separated)
        #[arg(long, value_delimiter = ',', required = true)]
        kinds: Vec<String>,

        /// Brand tokens JSON file
        #[arg(long)]
        brand: Option<String>,

        #[arg(long)]
        beam_width: Option<usize>,

        #[arg(long)]
        max_depth: Option<usize>,

        #[arg(long)]
        alternates: Option<usize>,

        /// Output format (json or text)
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Resolve a design spec into variants, content and brand tokens
    Resolve {
        /// Design spec JSON file
        spec: Option<String>,

        /// Use the canned spec for a tone instead of a file
        #[arg(long, value_parser = parse_tone)]
        preset: Option<Tone>,

        /// Print placed section nodes instead of the resolved page
        #[arg(long)]
        nodes: bool,
    },

    /// Apply edit commands to a page
    Edit {
        /// Page JSON file (section nodes, or an assembly)
        #[arg(long)]
        page: String,

        /// Edit command; repeat for several. `undo` and `redo` step the history
        #[arg(short, long = "command", required = true)]
        commands: Vec<String>,

        /// Print a line diff of the page instead of the page itself
        #[arg(long)]
        diff: bool,

        /// Write the edited page here
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Browse the section library
    Library {
        /// Query string (e.g., "sections where style.emphasis == 'dramatic'")
        #[arg(default_value = "sections")]
        query: String,

        /// Output format (json or toml)
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Re-score an existing page and list violations
    Audit {
        /// Page JSON file (section nodes, or an assembly)
        #[arg(long)]
        page: String,

        /// Content graph JSON file
        #[arg(long)]
        content: String,

        /// Page tone
        #[arg(long, value_parser = parse_tone)]
        tone: Tone,

        /// Brand tokens JSON file
        #[arg(long)]
        brand: Option<String>,

        /// Output format (json or text)
        #[arg(long, default_value = "text")]
        format: String,
    },
}

fn parse_tone(s: &str) -> Result<Tone, String> {
    s.parse()
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = config::FolioConfig::load(cli.config.as_deref())?;
    let library = config.load_library(cli.library.as_deref())?;

    match cli.command {
        Commands::Assemble {
            content,
            tone,
            kinds,
            brand,
            beam_width,
            max_depth,
            alternates,
            format,
        } => assemble::run(
            &library,
            &config,
            assemble::AssembleArgs {
                content,
                tone,
                kinds,
                brand,
                beam_width,
                max_depth,
                alternates,
                format,
            },
        ),
        Commands::Resolve {
            spec,
            preset,
            nodes,
        } => resolve::run(&library, spec.as_deref(), preset, nodes),
        Commands::Edit {
            page,
            commands,
            diff,
            output,
        } => edit::run(
            &library,
            edit::EditArgs {
                page,
                commands,
                diff,
                output,
            },
        ),
        Commands::Library { query, format } => library::run(&library, &query, &format),
        Commands::Audit {
            page,
            content,
            tone,
            brand,
            format,
        } => audit::run(
            &config,
            audit::AuditArgs {
                page,
                content,
                tone,
                brand,
                format,
            },
        ),
    }
}
