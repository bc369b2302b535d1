//! The book service binary: CRUD over an in-memory book collection,
//! mirrored to a flat JSON file across restarts.

use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use tracing::{error, info};

use bookstall::books;
use bookstall::{FileMirror, Store};

#[derive(Parser, Debug)]
#[command(name = "book-server", version, about = "a minimal book store service")]
struct Args {
    /// IP_ADDR:PORT that the server listens on
    #[arg(long, default_value = "127.0.0.1:8000")]
    addr: String,

    /// path of the JSON file mirroring the book collection
    #[arg(long, default_value = "books.json")]
    books_file: PathBuf,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    // A corrupt mirror file is fatal: refusing to start beats silently
    // discarding persisted books.
    let store = match Store::with_mirror(FileMirror::new(&args.books_file)) {
        Ok(store) => store,
        Err(e) => {
            error!(path = %args.books_file.display(), "cannot start: {}", e);
            exit(1);
        }
    };

    info!(addr = %args.addr, "book service starting");
    if let Err(e) = books::http::serve(store, &args.addr).await {
        error!("server error: {}", e);
        exit(1);
    }
}
