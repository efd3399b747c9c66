//! Agora live-view client binary.
//!
//! Keeps one push channel to the server, re-fetching the message list on
//! every state-changing event, with a fixed 3 second reconnect backoff
//! and a 5 second fallback poll.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin agora-client
//! cargo run --bin agora-client -- --server-url http://127.0.0.1:3000
//! ```

use agora_client::agent::{AgentConfig, run_agent};
use agora_shared::logger::setup_logger;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "client")]
#[command(about = "Agora live-view chat client", long_about = None)]
struct Args {
    /// HTTP base URL of the Agora server
    #[arg(short = 's', long, default_value = "http://127.0.0.1:8080")]
    server_url: String,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    run_agent(AgentConfig {
        server_url: args.server_url,
    })
    .await;
}
