use anyhow::Context;
use clap::Parser;
use ddocs_mcp::{McpServer, ServerConfig};
use ddocs_service::{ServiceConfig, PROJECT_PATH_ENV};
use std::path::PathBuf;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

/// Design document template and validation server (JSON-RPC over stdio)
#[derive(Debug, Parser)]
#[command(name = "ddocs-mcp", version, about)]
struct Cli {
    /// Project root; documents are resolved relative to it
    #[arg(long, env = PROJECT_PATH_ENV)]
    project_root: Option<PathBuf>,

    /// Largest document the server will read, in bytes
    #[arg(long, default_value_t = 10 * 1024 * 1024)]
    max_document_bytes: u64,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let root = match cli.project_root {
        Some(root) => root,
        None => std::env::current_dir().context("failed to determine current directory")?,
    };
    let service = ServiceConfig::new(root).with_max_document_bytes(cli.max_document_bytes);
    let server = McpServer::new(ServerConfig::new(service));

    server
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
        .context("stdio transport failed")?;
    Ok(())
}
