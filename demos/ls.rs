//! Demo: List bucket contents
//!
//! Usage:
//!   cargo run --example ls -- [DIRECTORY_PATH]
//!
//! Without a path, lists the whole bucket (directories first, then files)
//! and prints quota usage. Connection settings come from the environment;
//! see cli.rs.

mod cli;

use cli::connector_from_env;

#[tokio::main]
async fn main() -> silolib::Result<()> {
    tracing_subscriber::fmt::init();

    let path = std::env::args().nth(1);
    let connector = connector_from_env()?;

    match path {
        Some(path) => {
            for entity in connector.list_directory(&path, None).await? {
                print_entity(&entity);
            }
        }
        None => {
            for entity in connector.list_directories(None).await? {
                print_entity(&entity);
            }
            for entity in connector.list_files(None).await? {
                print_entity(&entity);
            }

            let bucket = connector.bucket_info().await?;
            println!(
                "{}: {}/{} bytes used ({:.1}%), {} files",
                bucket.name,
                bucket.space_taken,
                bucket.quota,
                bucket.usage_percent(),
                bucket.file_count
            );
        }
    }

    Ok(())
}

fn print_entity(entity: &silolib::Entity) {
    let marker = if entity.is_dir { "d" } else { "-" };
    println!(
        "{} {:>10}  {}  {}",
        marker,
        entity.size,
        entity.modified.format("%Y-%m-%d %H:%M:%S"),
        entity.name
    );
}
