use serde::Deserialize;
use thiserror::Error;

use super::entity::{EmptyDialogueError, Position};

const DEFAULT_WORLD_JSON: &str = include_str!("../../../assets/world.json");

#[derive(Debug, Error)]
pub(crate) enum WorldContentError {
    #[error("parse world content at {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("world content {path}: name cannot be empty")]
    EmptyName { path: String },
    #[error(transparent)]
    EmptyDialogue(#[from] EmptyDialogueError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SpawnPoint {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl From<SpawnPoint> for Position {
    fn from(spawn: SpawnPoint) -> Self {
        Position::new(spawn.x, spawn.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct NpcDef {
    pub(crate) name: String,
    pub(crate) x: i32,
    pub(crate) y: i32,
    pub(crate) dialogue: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ItemDef {
    pub(crate) name: String,
    pub(crate) x: i32,
    pub(crate) y: i32,
}

/// Starting layout of a world: where the player spawns and which npcs and
/// items exist, in collection order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct WorldContent {
    pub(crate) player: SpawnPoint,
    #[serde(default)]
    pub(crate) npcs: Vec<NpcDef>,
    #[serde(default)]
    pub(crate) items: Vec<ItemDef>,
}

impl WorldContent {
    /// The layout compiled into the binary.
    pub(crate) fn embedded_default() -> Result<Self, WorldContentError> {
        Self::parse_json(DEFAULT_WORLD_JSON)
    }

    pub(crate) fn parse_json(raw: &str) -> Result<Self, WorldContentError> {
        let mut deserializer = serde_json::Deserializer::from_str(raw);
        serde_path_to_error::deserialize::<_, WorldContent>(&mut deserializer).map_err(|error| {
            let path = error.path().to_string();
            WorldContentError::Parse {
                path,
                source: error.into_inner(),
            }
        })
    }

    /// Name checks. Dialogue emptiness is enforced by `Npc::new`.
    pub(crate) fn validate_names(&self) -> Result<(), WorldContentError> {
        for (index, npc) in self.npcs.iter().enumerate() {
            if npc.name.trim().is_empty() {
                return Err(WorldContentError::EmptyName {
                    path: format!("npcs[{index}].name"),
                });
            }
        }
        for (index, item) in self.items.iter().enumerate() {
            if item.name.trim().is_empty() {
                return Err(WorldContentError::EmptyName {
                    path: format!("items[{index}].name"),
                });
            }
        }
        Ok(())
    }
}
