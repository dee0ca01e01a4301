use engine::{DrawList, InputSnapshot, Scene, SceneCommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use super::dialogue::CurrentDialogue;
use super::hud;
use super::interaction::{resolve_interactions, InteractionEvent};
use super::world::WorldState;
use super::{SCREEN_HEIGHT, SCREEN_WIDTH};

pub(crate) struct AdventureScene {
    starting_world: WorldState,
    world: WorldState,
    dialogue: CurrentDialogue,
    rng: StdRng,
}

impl AdventureScene {
    pub(crate) fn new(starting_world: WorldState) -> Self {
        Self::with_rng(starting_world, StdRng::from_entropy())
    }

    pub(crate) fn with_rng(starting_world: WorldState, rng: StdRng) -> Self {
        Self {
            world: starting_world.clone(),
            starting_world,
            dialogue: CurrentDialogue::default(),
            rng,
        }
    }

    #[cfg(test)]
    pub(crate) fn world(&self) -> &WorldState {
        &self.world
    }

    #[cfg(test)]
    pub(crate) fn dialogue(&self) -> &CurrentDialogue {
        &self.dialogue
    }

    fn log_event(&self, event: &InteractionEvent) {
        match event {
            InteractionEvent::Talked { npc, line } => {
                debug!(npc = %npc, line = %line, "npc_dialogue");
            }
            InteractionEvent::PickedUp { item } => {
                info!(
                    item = %item,
                    inventory_size = self.world.player().inventory().len(),
                    "item_picked_up"
                );
            }
        }
    }
}

impl Scene for AdventureScene {
    fn load(&mut self) {
        self.world = self.starting_world.clone();
        self.dialogue = CurrentDialogue::default();
        info!(
            npcs = self.world.npcs().len(),
            items = self.world.items().len(),
            "world_ready"
        );
    }

    fn update(&mut self, input: &InputSnapshot) -> SceneCommand {
        self.world.move_player_by(input.movement_steps());

        let events = resolve_interactions(&mut self.world, &mut self.dialogue, &mut self.rng);
        for event in &events {
            self.log_event(event);
        }

        SceneCommand::None
    }

    fn render(&self, draw_list: &mut DrawList) {
        hud::compose_frame(
            draw_list,
            &self.world,
            &self.dialogue,
            SCREEN_WIDTH,
            SCREEN_HEIGHT,
        );
    }

    fn unload(&mut self) {
        info!(
            inventory_size = self.world.player().inventory().len(),
            "world_unloaded"
        );
    }

    fn entity_count(&self) -> usize {
        1 + self.world.npcs().len() + self.world.items().len()
    }
}
