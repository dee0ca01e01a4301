use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

use super::scene::InputSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Quit,
}

const ACTION_COUNT: usize = 5;

/// Movement actions in the order a tick applies them.
pub const MOVEMENT_ACTIONS: [InputAction; 4] = [
    InputAction::MoveUp,
    InputAction::MoveDown,
    InputAction::MoveLeft,
    InputAction::MoveRight,
];

impl InputAction {
    const fn index(self) -> usize {
        match self {
            InputAction::MoveUp => 0,
            InputAction::MoveDown => 1,
            InputAction::MoveLeft => 2,
            InputAction::MoveRight => 3,
            InputAction::Quit => 4,
        }
    }

    /// Unit grid step for a movement action. Screen y grows downward.
    pub const fn grid_step(self) -> Option<(i32, i32)> {
        match self {
            InputAction::MoveUp => Some((0, -1)),
            InputAction::MoveDown => Some((0, 1)),
            InputAction::MoveLeft => Some((-1, 0)),
            InputAction::MoveRight => Some((1, 0)),
            InputAction::Quit => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct ActionStates {
    down: [bool; ACTION_COUNT],
}

impl ActionStates {
    pub(crate) fn set(&mut self, action: InputAction, is_down: bool) {
        self.down[action.index()] = is_down;
    }

    pub(crate) fn is_down(&self, action: InputAction) -> bool {
        self.down[action.index()]
    }
}

/// Key state carried between ticks. Movement keys stay down in every
/// snapshot until released; a quit request latches.
#[derive(Debug, Default)]
pub(crate) struct KeyboardState {
    quit_latched: bool,
    held: ActionStates,
}

impl KeyboardState {
    pub(crate) fn on_key(&mut self, key: PhysicalKey, state: ElementState) {
        let Some(action) = action_for_key(key) else {
            return;
        };
        let pressed = state == ElementState::Pressed;
        self.held.set(action, pressed);
        if action == InputAction::Quit && pressed {
            self.request_quit();
        }
    }

    pub(crate) fn request_quit(&mut self) {
        self.quit_latched = true;
    }

    pub(crate) fn snapshot(&self) -> InputSnapshot {
        InputSnapshot::new(self.quit_latched, self.held)
    }
}

/// Arrows move, WASD are aliases, Escape quits. Everything else is ignored.
fn action_for_key(key: PhysicalKey) -> Option<InputAction> {
    let PhysicalKey::Code(code) = key else {
        return None;
    };
    let action = match code {
        KeyCode::ArrowUp | KeyCode::KeyW => InputAction::MoveUp,
        KeyCode::ArrowDown | KeyCode::KeyS => InputAction::MoveDown,
        KeyCode::ArrowLeft | KeyCode::KeyA => InputAction::MoveLeft,
        KeyCode::ArrowRight | KeyCode::KeyD => InputAction::MoveRight,
        KeyCode::Escape => InputAction::Quit,
        _ => return None,
    };
    Some(action)
}
