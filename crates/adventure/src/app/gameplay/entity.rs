use thiserror::Error;

use super::TILE_SIZE;

/// Pixel-space position of an entity's top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub(crate) struct Position {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Position {
    pub(crate) const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position after `(dx, dy)` grid steps.
    pub(crate) const fn stepped(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx * TILE_SIZE,
            y: self.y + dy * TILE_SIZE,
        }
    }
}

/// One-tile axis-aligned box. Overlap is half-open: boxes that only share an
/// edge or a corner do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BoundingBox {
    pub(crate) left: i32,
    pub(crate) top: i32,
    pub(crate) width: i32,
    pub(crate) height: i32,
}

impl BoundingBox {
    pub(crate) const fn for_tile_at(position: Position) -> Self {
        Self {
            left: position.x,
            top: position.y,
            width: TILE_SIZE,
            height: TILE_SIZE,
        }
    }

    pub(crate) const fn right(&self) -> i32 {
        self.left + self.width
    }

    pub(crate) const fn bottom(&self) -> i32 {
        self.top + self.height
    }

    pub(crate) fn overlaps(&self, other: &BoundingBox) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntityKind {
    Player,
    Npc,
    Item,
}

/// Shared capability of everything placed in the world.
pub(crate) trait Positioned {
    fn kind(&self) -> EntityKind;
    fn position(&self) -> Position;
    fn bounds(&self) -> BoundingBox;

    fn overlaps<T: Positioned + ?Sized>(&self, other: &T) -> bool {
        self.bounds().overlaps(&other.bounds())
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Player {
    position: Position,
    bounds: BoundingBox,
    inventory: Vec<String>,
}

impl Player {
    pub(crate) fn new(position: Position) -> Self {
        Self {
            position,
            bounds: BoundingBox::for_tile_at(position),
            inventory: Vec::new(),
        }
    }

    pub(crate) fn step(&mut self, dx: i32, dy: i32) {
        self.position = self.position.stepped(dx, dy);
        self.bounds = BoundingBox::for_tile_at(self.position);
    }

    /// Item names in pickup order.
    pub(crate) fn inventory(&self) -> &[String] {
        &self.inventory
    }

    pub(crate) fn collect(&mut self, item: Item) {
        self.inventory.push(item.name);
    }
}

impl Positioned for Player {
    fn kind(&self) -> EntityKind {
        EntityKind::Player
    }

    fn position(&self) -> Position {
        self.position
    }

    fn bounds(&self) -> BoundingBox {
        self.bounds
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("npc '{name}' has no dialogue lines")]
pub(crate) struct EmptyDialogueError {
    pub(crate) name: String,
}

#[derive(Debug, Clone)]
pub(crate) struct Npc {
    position: Position,
    bounds: BoundingBox,
    name: String,
    dialogue: Vec<String>,
}

impl Npc {
    pub(crate) fn new(
        position: Position,
        name: impl Into<String>,
        dialogue: Vec<String>,
    ) -> Result<Self, EmptyDialogueError> {
        let name = name.into();
        if dialogue.is_empty() {
            return Err(EmptyDialogueError { name });
        }
        Ok(Self {
            position,
            bounds: BoundingBox::for_tile_at(position),
            name,
            dialogue,
        })
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    /// Never empty.
    pub(crate) fn dialogue(&self) -> &[String] {
        &self.dialogue
    }
}

impl Positioned for Npc {
    fn kind(&self) -> EntityKind {
        EntityKind::Npc
    }

    fn position(&self) -> Position {
        self.position
    }

    fn bounds(&self) -> BoundingBox {
        self.bounds
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Item {
    position: Position,
    bounds: BoundingBox,
    name: String,
}

impl Item {
    pub(crate) fn new(position: Position, name: impl Into<String>) -> Self {
        Self {
            position,
            bounds: BoundingBox::for_tile_at(position),
            name: name.into(),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }
}

impl Positioned for Item {
    fn kind(&self) -> EntityKind {
        EntityKind::Item
    }

    fn position(&self) -> Position {
        self.position
    }

    fn bounds(&self) -> BoundingBox {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_follows_player_steps() {
        let mut player = Player::new(Position::new(400, 300));
        player.step(1, -1);

        assert_eq!(player.position(), Position::new(440, 260));
        assert_eq!(
            player.bounds(),
            BoundingBox::for_tile_at(Position::new(440, 260))
        );
        assert_eq!(player.bounds().right(), 480);
        assert_eq!(player.bounds().bottom(), 300);
    }

    #[test]
    fn identical_boxes_overlap() {
        let a = BoundingBox::for_tile_at(Position::new(400, 300));
        assert!(a.overlaps(&a));
    }

    #[test]
    fn partial_overlap_counts() {
        let a = BoundingBox::for_tile_at(Position::new(200, 200));
        let b = BoundingBox::for_tile_at(Position::new(200, 220));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = BoundingBox::for_tile_at(Position::new(0, 0));
        let right = BoundingBox::for_tile_at(Position::new(TILE_SIZE, 0));
        let below = BoundingBox::for_tile_at(Position::new(0, TILE_SIZE));
        let corner = BoundingBox::for_tile_at(Position::new(TILE_SIZE, TILE_SIZE));

        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
        assert!(!a.overlaps(&corner));
    }

    #[test]
    fn npc_without_dialogue_is_rejected() {
        let error = Npc::new(Position::default(), "Mute", Vec::new()).expect_err("empty dialogue");
        assert_eq!(error.name, "Mute");
    }

    #[test]
    fn collect_appends_in_pickup_order_and_allows_duplicates() {
        let mut player = Player::new(Position::default());
        player.collect(Item::new(Position::default(), "Gold Coin"));
        player.collect(Item::new(Position::default(), "Magic Scroll"));
        player.collect(Item::new(Position::default(), "Gold Coin"));

        assert_eq!(player.inventory(), ["Gold Coin", "Magic Scroll", "Gold Coin"]);
    }

    #[test]
    fn positioned_overlap_works_across_entity_kinds() {
        let player = Player::new(Position::new(100, 100));
        let item = Item::new(Position::new(120, 80), "Health Potion");
        let npc = Npc::new(
            Position::new(140, 100),
            "Villager",
            vec!["Hello there!".to_string()],
        )
        .expect("npc");

        assert!(player.overlaps(&item));
        assert!(!player.overlaps(&npc));
        assert_eq!(item.kind(), EntityKind::Item);
    }
}
