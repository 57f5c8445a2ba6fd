//! Demo: Download a file
//!
//! Usage:
//!   cargo run --example download -- <REMOTE_PATH> <LOCAL_PATH>
//!
//! Connection settings are read from the environment; see cli.rs.

mod cli;

use cli::{connector_from_env, usage_and_exit};
use silolib::SiloError;

const USAGE: &str = "Usage: cargo run --example download -- <REMOTE_PATH> <LOCAL_PATH>";

#[tokio::main]
async fn main() -> silolib::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 2 {
        usage_and_exit(USAGE);
    }
    let remote_path = &args[0];
    let local_path = &args[1];

    let connector = connector_from_env()?;

    let file = connector.download(remote_path, None).await?;
    println!("Downloading {} ({}, {} bytes)", file.name, file.mime, file.size);

    let mut out = std::fs::File::create(local_path)
        .map_err(|e| SiloError::Custom(format!("Failed to create {}: {}", local_path, e)))?;
    let written = file.save_to(&mut out).await?;

    println!("Wrote {} bytes to {}", written, local_path);
    Ok(())
}
