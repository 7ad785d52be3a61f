//! MCP server binary for tdo notes.
//!
//! Runs the notes server over stdio transport. The path to the tdo
//! executable comes from `--tdo-path`, falling back to the config file and
//! then to `tdo` on PATH.

use clap::Parser;
use rmcp::ServiceExt;
use tdo_mcp::command::RealCommandRunner;
use tdo_mcp::config::ServerConfig;
use tdo_mcp::mcp::NotesServer;
use tdo_mcp::mcp_logging;
use tdo_mcp::notes::NoteStore;

/// Give a model the ability to work with tdo notes and todos.
#[derive(Debug, Parser)]
#[command(name = "tdo-mcp", version)]
struct Cli {
    /// Path to the tdo executable.
    #[arg(long)]
    tdo_path: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging first (writes to ~/.tdo-mcp/mcp.log)
    if let Err(e) = mcp_logging::init() {
        eprintln!("Warning: MCP logging init failed: {e}");
    }
    mcp_logging::install_panic_hook();

    let config = match ServerConfig::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            mcp_logging::log_warning(&format!("config load failed: {e}"));
            ServerConfig::default()
        }
    };
    let tdo_path = config.resolve_tdo_path(cli.tdo_path.as_deref());
    mcp_logging::log_event(&format!("Using tdo at '{tdo_path}'"));

    let store = NoteStore::new(tdo_path, RealCommandRunner::new());
    let server = NotesServer::new(store);
    mcp_logging::log_event("MCP server created, starting stdio transport");
    let service = server.serve(rmcp::transport::stdio()).await?;
    mcp_logging::log_event("MCP server running");
    service.waiting().await?;

    mcp_logging::log_shutdown();
    Ok(())
}
