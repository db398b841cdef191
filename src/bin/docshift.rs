//! Docshift CLI: convert, validate and analyze content.
//!
//! Usage:
//!   docshift formats
//!   docshift migrations
//!   docshift path --from <type> --to <type>
//!   docshift convert --from <type> --to <type> [FILE]
//!   docshift validate --type <type> [FILE]
//!   docshift analyze --type <type> [FILE]

use clap::{Parser, Subcommand};
use docshift::{catalog, AnalysisManager, Content, ContentType, Error, MigrationManager};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "docshift",
    version,
    about = "Content conversion and analysis engine"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in content types
    Formats,
    /// List the registered migrations
    Migrations,
    /// Show the migration chain between two content types
    Path {
        /// Source content type
        #[arg(long)]
        from: String,
        /// Target content type
        #[arg(long)]
        to: String,
    },
    /// Convert content between two content types
    Convert {
        /// Source content type
        #[arg(long)]
        from: String,
        /// Target content type
        #[arg(long)]
        to: String,
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Validate content against a content type
    Validate {
        /// Content type to validate against
        #[arg(long = "type")]
        content_type: String,
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Extract semantic metadata from content
    Analyze {
        /// Content type of the input
        #[arg(long = "type")]
        content_type: String,
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "docshift=info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read_input(file: Option<&Path>) -> Result<String, String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e)),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .map_err(|e| format!("failed to read stdin: {}", e))?;
            Ok(input)
        }
    }
}

fn load(file: Option<&Path>, content_type: &ContentType) -> Result<Content, String> {
    let raw = read_input(file)?;
    Content::parse_as(&raw, content_type).map_err(|e| Error::from(e).to_string())
}

fn resolve(raw: &str) -> Result<ContentType, String> {
    catalog::resolve(raw).map_err(|e| e.to_string())
}

fn cmd_formats() -> Result<(), String> {
    for ct in catalog::builtin() {
        println!("{:<40} {}", ct.value(), ct.name());
    }
    Ok(())
}

fn cmd_migrations(manager: &MigrationManager) -> Result<(), String> {
    for migration in manager.list_migrations() {
        println!("{} -> {}", migration.from_type(), migration.to_type());
    }
    Ok(())
}

fn cmd_path(manager: &MigrationManager, from: &str, to: &str) -> Result<(), String> {
    let from = resolve(from)?;
    let to = resolve(to)?;
    let path = manager.find_path(&from, &to).map_err(|e| e.to_string())?;
    if path.is_identity() {
        println!("{} (no conversion needed)", from);
    } else {
        println!("{} ({} hops)", path, path.hops());
    }
    Ok(())
}

async fn cmd_convert(
    manager: &MigrationManager,
    from: &str,
    to: &str,
    file: Option<&Path>,
) -> Result<(), String> {
    let from = resolve(from)?;
    let to = resolve(to)?;
    let content = load(file, &from)?;
    let converted = manager
        .convert(content, &from, &to)
        .await
        .map_err(|e| e.to_string())?;
    println!("{}", converted.render().map_err(|e| e.to_string())?);
    Ok(())
}

fn cmd_validate(content_type: &str, file: Option<&Path>) -> Result<(), String> {
    let content_type = resolve(content_type)?;
    let content = load(file, &content_type)?;
    docshift::validate::validate(&content, &content_type).map_err(|e| e.to_string())?;
    println!("valid {}", content_type);
    Ok(())
}

async fn cmd_analyze(
    manager: &AnalysisManager,
    content_type: &str,
    file: Option<&Path>,
) -> Result<(), String> {
    let content_type = resolve(content_type)?;
    let content = load(file, &content_type)?;
    let analysis = manager
        .analyze(&content_type, &content)
        .await
        .map_err(|e| e.to_string())?;
    let output = serde_json::to_string_pretty(&analysis).map_err(|e| e.to_string())?;
    println!("{}", output);
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Formats => cmd_formats(),
        Commands::Migrations => cmd_migrations(&MigrationManager::with_defaults()),
        Commands::Path { from, to } => cmd_path(&MigrationManager::with_defaults(), &from, &to),
        Commands::Convert { from, to, file } => {
            cmd_convert(&MigrationManager::with_defaults(), &from, &to, file.as_deref()).await
        }
        Commands::Validate { content_type, file } => cmd_validate(&content_type, file.as_deref()),
        Commands::Analyze { content_type, file } => {
            cmd_analyze(&AnalysisManager::with_defaults(), &content_type, file.as_deref()).await
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
