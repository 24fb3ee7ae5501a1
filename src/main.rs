use clap::Parser;
use tracing::{error, info};

use crate::{
    config::{Config, StartArgs},
    state::Gallery,
};

pub mod config;
pub mod error;
pub mod gallery;
pub mod router;
pub mod sidebar;
pub mod state;
pub mod structure;
pub mod tree;

#[tokio::main]
async fn main() {
    let StartArgs {
        config_path,
        address: host,
        port,
        log_level: level,
    } = StartArgs::parse();

    tracing_subscriber::fmt().with_max_level(level).init();

    let config = Config::read(config_path).expect("invalid config file");

    let base = config.base_url();

    let raw = match structure::fetch_structure(&base).await {
        Ok(raw) => raw,
        Err(e) => {
            error!("Unable to load folder structure from {}: {e}", base.as_str());
            std::process::exit(1);
        }
    };

    let state = Gallery::new(tree::load(raw), &config);

    let addr = format!("{host}:{port}");

    info!("Now listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("error while starting TCP listener");

    let router = router::router(state);

    axum::serve(listener, router)
        .await
        .expect("error while starting server");
}
