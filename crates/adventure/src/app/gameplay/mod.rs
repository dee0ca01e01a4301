use engine::Scene;

mod content;
mod dialogue;
mod entity;
mod hud;
mod interaction;
mod scene_impl;
mod world;

pub(crate) use content::WorldContentError;

use scene_impl::AdventureScene;
use world::WorldState;

/// Pixel length of one grid step and of every entity's side.
pub(crate) const TILE_SIZE: i32 = 40;
pub(crate) const SCREEN_WIDTH: i32 = 800;
pub(crate) const SCREEN_HEIGHT: i32 = 600;

pub(crate) fn build_scene() -> Result<Box<dyn Scene>, WorldContentError> {
    let world = WorldState::initialize()?;
    Ok(Box::new(AdventureScene::new(world)))
}
