use engine::{LoopConfig, Scene};
use tracing::info;
use tracing_subscriber::EnvFilter;

use super::gameplay::{self, WorldContentError, SCREEN_HEIGHT, SCREEN_WIDTH};

const WINDOW_TITLE: &str = "2D Text Adventure RPG";

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) scene: Box<dyn Scene>,
}

pub(crate) fn build_app() -> Result<AppWiring, WorldContentError> {
    init_tracing();
    info!(version = env!("CARGO_PKG_VERSION"), "startup");

    let scene = gameplay::build_scene()?;
    let config = LoopConfig {
        window_title: WINDOW_TITLE.to_string(),
        window_width: SCREEN_WIDTH.unsigned_abs(),
        window_height: SCREEN_HEIGHT.unsigned_abs(),
        ..LoopConfig::default()
    };

    Ok(AppWiring { config, scene })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
