use rand::seq::SliceRandom;
use rand::Rng;

use super::entity::Npc;

/// Text shown in the dialogue box. Empty means the box is hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CurrentDialogue {
    text: String,
}

impl CurrentDialogue {
    pub(crate) fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }

    pub(crate) fn is_visible(&self) -> bool {
        !self.text.is_empty()
    }
}

/// Uniform pick from the npc's lines; `None` only if the list were empty,
/// which `Npc::new` rules out.
pub(crate) fn select_line<'a, R: Rng + ?Sized>(npc: &'a Npc, rng: &mut R) -> Option<&'a str> {
    npc.dialogue().choose(rng).map(String::as_str)
}

pub(crate) fn pickup_announcement(item_name: &str) -> String {
    format!("You picked up a {item_name}!")
}
