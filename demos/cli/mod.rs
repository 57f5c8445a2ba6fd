//! Shared helpers for the demo programs.
//!
//! Connection settings come from the environment:
//!   SILO_TOKEN   bearer token
//!   SILO_APP     application id
//!   SILO_BUCKET  bucket id
//!   SILO_ADDR    node address as host:port
//!   SILO_SECURE  set to "1" for https
//!   SILO_PROXY   optional proxy URL

use silolib::{Connector, ConnectorConfig};

pub fn connector_from_env() -> silolib::Result<Connector> {
    let var = |name: &str| {
        std::env::var(name)
            .map_err(|_| silolib::SiloError::Custom(format!("{} is not set", name)))
    };

    Connector::new(ConnectorConfig {
        token: var("SILO_TOKEN")?,
        app_id: var("SILO_APP")?,
        bucket_id: var("SILO_BUCKET")?,
        address: var("SILO_ADDR")?,
        secure: std::env::var("SILO_SECURE").as_deref() == Ok("1"),
        proxy: std::env::var("SILO_PROXY").ok(),
    })
}

pub fn usage_and_exit(usage: &str) -> ! {
    eprintln!("{}", usage);
    std::process::exit(1);
}
