use std::collections::HashSet;

use winit::{
    event::{ElementState, KeyEvent},
    keyboard::KeyCode,
};

use crate::object::{Command, ObjectState};

/// Tracks keyboard state across frames.
pub struct InputState {
    keys_down: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,
    keys_released: HashSet<KeyCode>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            keys_pressed: HashSet::new(),
            keys_released: HashSet::new(),
        }
    }

    /// Clear per-frame pressed/released flags.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
    }

    /// Handle a keyboard input event from winit.
    pub fn handle_key(&mut self, event: &KeyEvent) {
        if let winit::keyboard::PhysicalKey::Code(keycode) = event.physical_key {
            match event.state {
                ElementState::Pressed => self.press(keycode),
                ElementState::Released => self.release(keycode),
            }
        }
    }

    /// Record a key press. Key repeats do not re-trigger the pressed flag.
    pub fn press(&mut self, key: KeyCode) {
        if !self.keys_down.contains(&key) {
            self.keys_pressed.insert(key);
        }
        self.keys_down.insert(key);
    }

    /// Record a key release.
    pub fn release(&mut self, key: KeyCode) {
        self.keys_down.remove(&key);
        self.keys_released.insert(key);
    }

    /// Returns true if the key is currently held down.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns true if the key was pressed this frame.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Returns true if the key was released this frame.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes an object's command slot once per frame from the current input.
///
/// Controllers are level-triggered: the slot reflects what is held right
/// now, not an edge that happened earlier.
pub trait InputController {
    fn update(&mut self, input: &InputState, target: &mut ObjectState);
}

/// Physical keys feeding the three stock commands.
#[derive(Clone, Copy, Debug)]
pub struct KeyBindings {
    pub left: KeyCode,
    pub right: KeyCode,
    pub fire: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
            fire: KeyCode::Space,
        }
    }
}

/// The stock keyboard controller.
///
/// A newly pressed bound key takes over the command slot. Once that key is
/// no longer held, the slot falls back to any bound key that still is, and
/// to `Command::None` when nothing relevant is held.
pub struct KeyboardController {
    bindings: KeyBindings,
    current: Command,
}

impl KeyboardController {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            current: Command::None,
        }
    }

    fn key_for(&self, command: Command) -> Option<KeyCode> {
        match command {
            Command::Left => Some(self.bindings.left),
            Command::Right => Some(self.bindings.right),
            Command::Fire => Some(self.bindings.fire),
            Command::None => None,
        }
    }

    fn first_held(&self, input: &InputState) -> Command {
        if input.is_key_down(self.bindings.left) {
            Command::Left
        } else if input.is_key_down(self.bindings.right) {
            Command::Right
        } else if input.is_key_down(self.bindings.fire) {
            Command::Fire
        } else {
            Command::None
        }
    }
}

impl Default for KeyboardController {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

impl InputController for KeyboardController {
    fn update(&mut self, input: &InputState, target: &mut ObjectState) {
        if input.is_key_pressed(self.bindings.fire) {
            self.current = Command::Fire;
        } else if input.is_key_pressed(self.bindings.left) {
            self.current = Command::Left;
        } else if input.is_key_pressed(self.bindings.right) {
            self.current = Command::Right;
        }

        let still_held = self
            .key_for(self.current)
            .map(|key| input.is_key_down(key))
            .unwrap_or(false);
        if !still_held {
            self.current = self.first_held(input);
        }

        target.command = self.current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Aabb;

    fn state() -> ObjectState {
        ObjectState::new(Aabb::new(0.0, 0.0, 32.0, 32.0))
    }

    #[test]
    fn test_pressed_key_writes_command() {
        let mut input = InputState::new();
        let mut controller = KeyboardController::default();
        let mut target = state();

        input.press(KeyCode::ArrowLeft);
        controller.update(&input, &mut target);
        assert_eq!(target.command, Command::Left);

        // Held across frames: still Left even though the pressed edge is gone.
        input.begin_frame();
        controller.update(&input, &mut target);
        assert_eq!(target.command, Command::Left);
    }

    #[test]
    fn test_release_falls_back_to_held_key() {
        let mut input = InputState::new();
        let mut controller = KeyboardController::default();
        let mut target = state();

        input.press(KeyCode::ArrowLeft);
        controller.update(&input, &mut target);

        input.begin_frame();
        input.press(KeyCode::ArrowRight);
        controller.update(&input, &mut target);
        assert_eq!(target.command, Command::Right);

        input.begin_frame();
        input.release(KeyCode::ArrowRight);
        controller.update(&input, &mut target);
        assert_eq!(target.command, Command::Left);

        input.begin_frame();
        input.release(KeyCode::ArrowLeft);
        controller.update(&input, &mut target);
        assert_eq!(target.command, Command::None);
    }

    #[test]
    fn test_key_repeat_does_not_retrigger_pressed() {
        let mut input = InputState::new();
        input.press(KeyCode::Space);
        input.begin_frame();
        input.press(KeyCode::Space);
        assert!(!input.is_key_pressed(KeyCode::Space));
        assert!(input.is_key_down(KeyCode::Space));
    }
}
