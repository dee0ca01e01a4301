use super::input::{ActionStates, InputAction, MOVEMENT_ACTIONS};
use super::rendering::DrawList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    None,
    Quit,
}

/// Input state sampled once per simulation tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    quit_requested: bool,
    actions: ActionStates,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(quit_requested: bool, actions: ActionStates) -> Self {
        Self {
            quit_requested,
            actions,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn is_down(&self, action: InputAction) -> bool {
        self.actions.is_down(action)
    }

    pub fn with_action_down(mut self, action: InputAction, is_down: bool) -> Self {
        self.actions.set(action, is_down);
        self
    }

    pub fn with_quit_requested(mut self, quit_requested: bool) -> Self {
        self.quit_requested = quit_requested;
        self
    }

    /// Grid steps for every held movement key, in up/down/left/right order.
    pub fn movement_steps(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        MOVEMENT_ACTIONS
            .into_iter()
            .filter(|action| self.is_down(*action))
            .filter_map(InputAction::grid_step)
    }
}

pub trait Scene {
    fn load(&mut self);
    fn update(&mut self, input: &InputSnapshot) -> SceneCommand;
    fn render(&self, draw_list: &mut DrawList);
    fn unload(&mut self);
    fn entity_count(&self) -> usize {
        0
    }
}

pub(crate) struct SceneHost {
    scene: Box<dyn Scene>,
    is_loaded: bool,
}

impl SceneHost {
    pub(crate) fn new(scene: Box<dyn Scene>) -> Self {
        Self {
            scene,
            is_loaded: false,
        }
    }

    pub(crate) fn load(&mut self) {
        if self.is_loaded {
            return;
        }
        self.scene.load();
        self.is_loaded = true;
    }

    pub(crate) fn update(&mut self, input: &InputSnapshot) -> SceneCommand {
        if !self.is_loaded {
            return SceneCommand::None;
        }
        if input.quit_requested() {
            return SceneCommand::Quit;
        }
        self.scene.update(input)
    }

    pub(crate) fn render(&self, draw_list: &mut DrawList) {
        draw_list.clear_commands();
        if self.is_loaded {
            self.scene.render(draw_list);
        }
    }

    pub(crate) fn entity_count(&self) -> usize {
        self.scene.entity_count()
    }

    pub(crate) fn shutdown(&mut self) {
        if self.is_loaded {
            self.scene.unload();
            self.is_loaded = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::app::rendering::{DrawCommand, Rgba};

    #[derive(Default)]
    struct Counters {
        loads: Cell<u32>,
        updates: Cell<u32>,
        unloads: Cell<u32>,
    }

    struct TestScene {
        counters: Rc<Counters>,
    }

    impl Scene for TestScene {
        fn load(&mut self) {
            self.counters.loads.set(self.counters.loads.get() + 1);
        }

        fn update(&mut self, _input: &InputSnapshot) -> SceneCommand {
            self.counters.updates.set(self.counters.updates.get() + 1);
            SceneCommand::None
        }

        fn render(&self, draw_list: &mut DrawList) {
            draw_list.clear(Rgba::WHITE);
        }

        fn unload(&mut self) {
            self.counters.unloads.set(self.counters.unloads.get() + 1);
        }
    }

    fn host_with_counters() -> (SceneHost, Rc<Counters>) {
        let counters = Rc::new(Counters::default());
        let host = SceneHost::new(Box::new(TestScene {
            counters: Rc::clone(&counters),
        }));
        (host, counters)
    }

    #[test]
    fn load_is_idempotent() {
        let (mut host, counters) = host_with_counters();
        host.load();
        host.load();
        assert_eq!(counters.loads.get(), 1);
    }

    #[test]
    fn update_before_load_does_not_reach_scene() {
        let (mut host, counters) = host_with_counters();
        assert_eq!(host.update(&InputSnapshot::empty()), SceneCommand::None);
        assert_eq!(counters.updates.get(), 0);
    }

    #[test]
    fn quit_request_short_circuits_scene_update() {
        let (mut host, counters) = host_with_counters();
        host.load();
        let input = InputSnapshot::empty().with_quit_requested(true);

        assert_eq!(host.update(&input), SceneCommand::Quit);
        assert_eq!(counters.updates.get(), 0);
    }

    #[test]
    fn render_replaces_previous_frame_commands() {
        let (mut host, _counters) = host_with_counters();
        host.load();
        let mut draw_list = DrawList::default();
        host.render(&mut draw_list);
        host.render(&mut draw_list);

        assert_eq!(draw_list.commands(), &[DrawCommand::Clear(Rgba::WHITE)]);
    }

    #[test]
    fn shutdown_unloads_once() {
        let (mut host, counters) = host_with_counters();
        host.load();
        host.shutdown();
        host.shutdown();
        assert_eq!(counters.unloads.get(), 1);
    }

    #[test]
    fn movement_steps_follow_fixed_action_order() {
        let input = InputSnapshot::empty()
            .with_action_down(InputAction::MoveRight, true)
            .with_action_down(InputAction::MoveUp, true);

        let steps: Vec<(i32, i32)> = input.movement_steps().collect();
        assert_eq!(steps, vec![(0, -1), (1, 0)]);
    }

    #[test]
    fn empty_snapshot_has_no_movement() {
        assert_eq!(InputSnapshot::empty().movement_steps().count(), 0);
    }
}
