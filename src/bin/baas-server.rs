// ABOUTME: Server binary for the boolean backend-as-a-service
// ABOUTME: Loads configuration, initializes logging, and serves the HTTP API until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # BaaS Server Binary
//!
//! Requires `REDIS_URL`; startup fails without it.

use anyhow::Result;
use baas_server::{config::environment::ServerConfig, logging, server};
use clap::Parser;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "baas-server")]
#[command(about = "Boolean backend-as-a-service - named flags with optional expiry over HTTP")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env().inspect_err(|e| {
        error!("Configuration error: {e:#}");
    })?;

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    info!("{}", config.summary());

    if let Err(e) = server::run(&config).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
