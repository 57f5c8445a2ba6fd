//! Demo: Upload a file
//!
//! Usage:
//!   cargo run --example upload -- <LOCAL_PATH> <REMOTE_PATH>
//!
//! Connection settings are read from the environment; see cli.rs.

mod cli;

use cli::{connector_from_env, usage_and_exit};
use silolib::SiloError;

const USAGE: &str = "Usage: cargo run --example upload -- <LOCAL_PATH> <REMOTE_PATH>";

#[tokio::main]
async fn main() -> silolib::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 2 {
        usage_and_exit(USAGE);
    }
    let local_path = &args[0];
    let remote_path = &args[1];

    let connector = connector_from_env()?;

    let data = std::fs::read(local_path)
        .map_err(|e| SiloError::Custom(format!("Failed to read {}: {}", local_path, e)))?;
    let size = data.len() as u64;

    println!("Uploading {} ({} bytes) to {}", local_path, size, remote_path);
    connector.upload(remote_path, data, size).await?;

    let entity = connector.stat(remote_path).await?;
    println!("Stored {} ({} bytes)", entity.name, entity.size);

    Ok(())
}
