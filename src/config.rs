//! Runtime configuration
//!
//! Values come from command-line flags, falling back to `PANTRY_*`
//! environment variables and then to the defaults below.

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Parser)]
#[command(name = "pantry")]
#[command(version, about = "In-memory shopping list and recipe REST API")]
pub struct Config {
    /// Address to bind the HTTP listener to
    #[arg(long, env = "PANTRY_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short, env = "PANTRY_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Log filter directive, e.g. `info` or `pantry_api=debug`.
    /// `RUST_LOG` takes precedence when set.
    #[arg(long, env = "PANTRY_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Installs the global tracing subscriber.
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .init();
    }
}
