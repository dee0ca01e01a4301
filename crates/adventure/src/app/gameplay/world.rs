use super::content::{WorldContent, WorldContentError};
use super::entity::{Item, Npc, Player, Position, Positioned};

/// Everything placed in the world. Npcs never change after construction;
/// items only leave through [`WorldState::pick_up_overlapping_items`].
#[derive(Debug, Clone)]
pub(crate) struct WorldState {
    player: Player,
    npcs: Vec<Npc>,
    items: Vec<Item>,
}

impl WorldState {
    /// Starting world from the embedded layout.
    pub(crate) fn initialize() -> Result<Self, WorldContentError> {
        Self::from_content(WorldContent::embedded_default()?)
    }

    pub(crate) fn from_content(content: WorldContent) -> Result<Self, WorldContentError> {
        content.validate_names()?;

        let npcs = content
            .npcs
            .into_iter()
            .map(|def| Npc::new(Position::new(def.x, def.y), def.name, def.dialogue))
            .collect::<Result<Vec<_>, _>>()?;
        let items = content
            .items
            .into_iter()
            .map(|def| Item::new(Position::new(def.x, def.y), def.name))
            .collect();

        Ok(Self {
            player: Player::new(content.player.into()),
            npcs,
            items,
        })
    }

    pub(crate) fn player(&self) -> &Player {
        &self.player
    }

    pub(crate) fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    pub(crate) fn items(&self) -> &[Item] {
        &self.items
    }

    pub(crate) fn move_player(&mut self, dx: i32, dy: i32) {
        self.player.step(dx, dy);
    }

    /// Applies every step in turn. Steps are summed, so their order does
    /// not change the final position.
    pub(crate) fn move_player_by(&mut self, steps: impl IntoIterator<Item = (i32, i32)>) {
        for (dx, dy) in steps {
            self.move_player(dx, dy);
        }
    }

    /// Moves every item under the player into the inventory and returns the
    /// collected names in collection order.
    pub(crate) fn pick_up_overlapping_items(&mut self) -> Vec<String> {
        let player_bounds = self.player.bounds();
        let (picked, remaining): (Vec<Item>, Vec<Item>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| item.bounds().overlaps(&player_bounds));
        self.items = remaining;

        picked
            .into_iter()
            .map(|item| {
                let name = item.name().to_string();
                self.player.collect(item);
                name
            })
            .collect()
    }
}
