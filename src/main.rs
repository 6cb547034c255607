use anyhow::{Context, Result};
use macroquad::prelude::Conf;
use tracing::info;

use snake_relay::constants::SERVER_ADDR;
use snake_relay::game;
use snake_relay::net::registry::RegistryHandle;
use snake_relay::net::ws::WsServer;

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake Relay".to_owned(),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

fn run_server() -> Result<()> {
    let rt = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    rt.block_on(async {
        let server = WsServer::bind(SERVER_ADDR).await?;
        server.serve(RegistryHandle::spawn()).await?;
        Ok::<(), anyhow::Error>(())
    })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("starting snake-relay v{}", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("server") => run_server(),
        Some("client") | None => {
            macroquad::Window::from_config(window_conf(), game::r#loop::run());
            Ok(())
        }
        Some(other) => {
            anyhow::bail!("unknown mode `{}` (expected `server` or `client`)", other)
        }
    }
}
