use rand::Rng;

use super::dialogue::{pickup_announcement, select_line, CurrentDialogue};
use super::entity::Positioned;
use super::world::WorldState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum InteractionEvent {
    Talked { npc: String, line: String },
    PickedUp { item: String },
}

/// One tick of overlap checks, run after movement.
///
/// Every overlapping npc picks a fresh line, in collection order, so the last
/// one wins. Items overlapping the player are then collected together and
/// each announces itself; the last announcement stays on screen.
pub(crate) fn resolve_interactions<R: Rng + ?Sized>(
    world: &mut WorldState,
    dialogue: &mut CurrentDialogue,
    rng: &mut R,
) -> Vec<InteractionEvent> {
    let mut events = Vec::new();

    let player = world.player();
    for npc in world.npcs() {
        if !player.overlaps(npc) {
            continue;
        }
        if let Some(line) = select_line(npc, rng) {
            dialogue.set(line);
            events.push(InteractionEvent::Talked {
                npc: npc.name().to_string(),
                line: line.to_string(),
            });
        }
    }

    for item in world.pick_up_overlapping_items() {
        dialogue.set(pickup_announcement(&item));
        events.push(InteractionEvent::PickedUp { item });
    }

    events
}
