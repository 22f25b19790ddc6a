//! homestead - a small farming sandbox core
//!
//! Runs a scripted playthrough of the farming loop against the simulation
//! crates. Rendering is abstracted behind traits, so the run is headless.

mod config;
mod dialogue;
mod game;
mod input;
mod render;
mod scene;

use anyhow::Result;
use config::GameConfig;
use game::Session;
use render::{FileTextureLoader, HeadlessRenderer};
use tracing::info;

fn main() -> Result<()> {
    // Initialize tracing with INFO level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting homestead v{}", env!("CARGO_PKG_VERSION"));

    let config = GameConfig::load();
    let layout = scene::load_scene();
    let mut session = Session::from_scene(&config, &layout);
    session.run_demo()?;

    let mut renderer = HeadlessRenderer::new(FileTextureLoader::default());
    session.render(&mut renderer);

    info!(
        coins = session.world().player.coins,
        models = renderer.models_drawn(),
        "session finished"
    );
    Ok(())
}
