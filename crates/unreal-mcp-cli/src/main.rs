//! unreal-mcp: MCP server for the Unreal editor
//!
//! Forwards MCP tool calls over TCP to the editor's UnrealMCP plugin
//! (127.0.0.1:55557 by default) and serves the Model Context Protocol on stdio.

mod cli;
mod logging;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tracing::{info, warn};
use unreal_bridge::UnrealBridge;
use unreal_mcp_core::{Params, UNKNOWN_ERROR};
use unreal_mcp_server::UnrealMcpServer;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    logging::init(cli.log_level.as_deref(), cli.log_file.as_deref())?;

    let config = cli.bridge_config();
    info!(
        "Unreal MCP server starting, editor at {} ({} framing)",
        config.address(),
        config.framing
    );

    let bridge = UnrealBridge::new(config);
    if !cli.no_probe {
        probe(&bridge).await;
    }

    let server = UnrealMcpServer::new(bridge);
    server.run_stdio().await?;

    info!("Unreal MCP server stopped");
    Ok(())
}

/// Ping the editor once so a missing plugin shows up in the log early
async fn probe(bridge: &UnrealBridge) {
    let address = bridge.config().address();
    let response = bridge.send_command("ping", Params::new()).await;
    if response.ok {
        info!("Unreal editor reachable at {}", address);
    } else {
        warn!(
            "Unreal editor not reachable at {} ({}); tools will fail until it is running",
            address,
            response.error_text.as_deref().unwrap_or(UNKNOWN_ERROR)
        );
    }
}
