use engine::{DrawList, PixelRect, Rgba};

use super::dialogue::CurrentDialogue;
use super::entity::{EntityKind, Positioned};
use super::world::WorldState;
use super::TILE_SIZE;

const BACKGROUND: Rgba = Rgba::WHITE;
const HUD_TEXT_SCALE: i32 = 2;
const INVENTORY_ORIGIN: (i32, i32) = (10, 10);
const DIALOGUE_MARGIN_X: i32 = 50;
const DIALOGUE_OFFSET_FROM_BOTTOM: i32 = 100;
const DIALOGUE_BOX_HEIGHT: i32 = 50;
const DIALOGUE_BORDER: i32 = 2;
const DIALOGUE_TEXT_INSET: i32 = 10;

pub(crate) fn entity_color(kind: EntityKind) -> Rgba {
    match kind {
        EntityKind::Player => Rgba::BLUE,
        EntityKind::Npc => Rgba::YELLOW,
        EntityKind::Item => Rgba::GREEN,
    }
}

pub(crate) fn inventory_line(inventory: &[String]) -> String {
    format!("Inventory: {}", inventory.join(", "))
}

pub(crate) fn dialogue_box(screen_width: i32, screen_height: i32) -> PixelRect {
    PixelRect::new(
        DIALOGUE_MARGIN_X,
        screen_height - DIALOGUE_OFFSET_FROM_BOTTOM,
        screen_width - 2 * DIALOGUE_MARGIN_X,
        DIALOGUE_BOX_HEIGHT,
    )
}

/// Draws one frame: items, then npcs, then the player on top, followed by
/// the inventory line and, when there is something to say, the dialogue box.
pub(crate) fn compose_frame(
    draw_list: &mut DrawList,
    world: &WorldState,
    dialogue: &CurrentDialogue,
    screen_width: i32,
    screen_height: i32,
) {
    draw_list.clear(BACKGROUND);

    for item in world.items() {
        draw_tile(draw_list, item);
    }
    for npc in world.npcs() {
        draw_tile(draw_list, npc);
    }
    draw_tile(draw_list, world.player());

    let (inventory_x, inventory_y) = INVENTORY_ORIGIN;
    draw_list.text(
        inventory_x,
        inventory_y,
        inventory_line(world.player().inventory()),
        Rgba::BLACK,
        HUD_TEXT_SCALE,
    );

    if dialogue.is_visible() {
        let rect = dialogue_box(screen_width, screen_height);
        draw_list.fill_rect(rect, Rgba::BLACK);
        draw_list.outline_rect(rect, DIALOGUE_BORDER, Rgba::WHITE);
        draw_list.text(
            rect.x + DIALOGUE_TEXT_INSET,
            rect.y + DIALOGUE_TEXT_INSET,
            dialogue.as_str(),
            Rgba::WHITE,
            HUD_TEXT_SCALE,
        );
    }
}

fn draw_tile<T: Positioned + ?Sized>(draw_list: &mut DrawList, entity: &T) {
    let position = entity.position();
    draw_list.fill_rect(
        PixelRect::new(position.x, position.y, TILE_SIZE, TILE_SIZE),
        entity_color(entity.kind()),
    );
}

#[cfg(test)]
mod tests {
    use engine::DrawCommand;

    use super::*;
    use crate::app::gameplay::{SCREEN_HEIGHT, SCREEN_WIDTH};

    fn texts(draw_list: &DrawList) -> Vec<&str> {
        draw_list
            .commands()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn filled_with(draw_list: &DrawList, color: Rgba) -> Vec<PixelRect> {
        draw_list
            .commands()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillRect { rect, color: fill } if *fill == color => Some(*rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn inventory_line_joins_names_with_commas() {
        assert_eq!(inventory_line(&[]), "Inventory: ");
        assert_eq!(
            inventory_line(&["Gold Coin".to_string(), "Magic Scroll".to_string()]),
            "Inventory: Gold Coin, Magic Scroll"
        );
    }

    #[test]
    fn dialogue_box_sits_above_bottom_edge() {
        assert_eq!(
            dialogue_box(SCREEN_WIDTH, SCREEN_HEIGHT),
            PixelRect::new(50, 500, 700, 50)
        );
    }

    #[test]
    fn frame_without_dialogue_has_no_dialogue_box() {
        let world = WorldState::initialize().expect("world");
        let mut draw_list = DrawList::default();

        compose_frame(
            &mut draw_list,
            &world,
            &CurrentDialogue::default(),
            SCREEN_WIDTH,
            SCREEN_HEIGHT,
        );

        assert_eq!(draw_list.commands()[0], DrawCommand::Clear(Rgba::WHITE));
        assert_eq!(texts(&draw_list), ["Inventory: "]);
        assert!(filled_with(&draw_list, Rgba::BLACK).is_empty());
        assert_eq!(filled_with(&draw_list, Rgba::GREEN).len(), 3);
        assert_eq!(filled_with(&draw_list, Rgba::YELLOW).len(), 2);
        assert_eq!(
            filled_with(&draw_list, Rgba::BLUE),
            [PixelRect::new(400, 300, TILE_SIZE, TILE_SIZE)]
        );
    }

    #[test]
    fn player_is_drawn_after_other_entities() {
        let world = WorldState::initialize().expect("world");
        let mut draw_list = DrawList::default();
        compose_frame(
            &mut draw_list,
            &world,
            &CurrentDialogue::default(),
            SCREEN_WIDTH,
            SCREEN_HEIGHT,
        );

        let last_tile = draw_list
            .commands()
            .iter()
            .rev()
            .find_map(|command| match command {
                DrawCommand::FillRect { color, .. } => Some(*color),
                _ => None,
            });
        assert_eq!(last_tile, Some(Rgba::BLUE));
    }

    #[test]
    fn visible_dialogue_draws_bordered_box_with_inset_text() {
        let world = WorldState::initialize().expect("world");
        let mut dialogue = CurrentDialogue::default();
        dialogue.set("Hello there!");
        let mut draw_list = DrawList::default();

        compose_frame(&mut draw_list, &world, &dialogue, SCREEN_WIDTH, SCREEN_HEIGHT);

        let rect = dialogue_box(SCREEN_WIDTH, SCREEN_HEIGHT);
        assert_eq!(filled_with(&draw_list, Rgba::BLACK), [rect]);
        assert!(draw_list.commands().contains(&DrawCommand::OutlineRect {
            rect,
            thickness: 2,
            color: Rgba::WHITE,
        }));
        assert!(draw_list.commands().contains(&DrawCommand::Text {
            x: 60,
            y: 510,
            text: "Hello there!".to_string(),
            color: Rgba::WHITE,
            scale: HUD_TEXT_SCALE,
        }));
    }
}
