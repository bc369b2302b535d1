//! The item service binary: a memory-only to-do list. State is lost on
//! restart.

use std::process::exit;

use clap::Parser;
use tracing::{error, info};

use bookstall::items;
use bookstall::Store;

#[derive(Parser, Debug)]
#[command(name = "item-server", version, about = "a minimal to-do item service")]
struct Args {
    /// IP_ADDR:PORT that the server listens on
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let store = Store::new();

    info!(addr = %args.addr, "item service starting");
    if let Err(e) = items::http::serve(store, &args.addr).await {
        error!("server error: {}", e);
        exit(1);
    }
}
