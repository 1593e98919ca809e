use crate::config::KeyConfig;
use crate::error::ConfigError;
use crate::movement::Directions;
use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Mod};
use sdl2::mouse::MouseButton;
use sdl2::EventPump;
use std::collections::HashSet;

/// Input events a scene can react to
///
/// SDL events are translated into this smaller set once per frame, so
/// scenes never see window-management noise and tests can build input
/// without an SDL context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Keycode),
    KeyUp(Keycode),
    MouseDown { button: MouseButton, x: i32, y: i32 },
    MouseMove { x: i32, y: i32 },
    /// Window close or Alt+F4; handled by the driver, never by a scene
    Quit,
}

impl InputEvent {
    pub fn is_quit(&self) -> bool {
        matches!(self, InputEvent::Quit)
    }
}

/// Keys held down at the moment the frame's events were drained
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    keys: HashSet<Keycode>,
}

impl HeldKeys {
    pub fn new(keys: impl IntoIterator<Item = Keycode>) -> Self {
        HeldKeys {
            keys: keys.into_iter().collect(),
        }
    }

    pub fn is_held(&self, key: Keycode) -> bool {
        self.keys.contains(&key)
    }
}

/// Everything the driver needs from one frame of input
pub struct FrameInput {
    pub events: Vec<InputEvent>,
    pub held: HeldKeys,
}

/// Translates one SDL event; `None` for events the game ignores
///
/// Key auto-repeat is dropped so a held key produces exactly one
/// key-down/key-up pair.
pub fn translate(event: &Event) -> Option<InputEvent> {
    match *event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::KeyDown { repeat: true, .. } | Event::KeyUp { repeat: true, .. } => None,
        Event::KeyDown {
            keycode: Some(key),
            keymod,
            ..
        } => {
            if is_alt_f4(key, keymod) {
                Some(InputEvent::Quit)
            } else {
                Some(InputEvent::KeyDown(key))
            }
        }
        Event::KeyUp {
            keycode: Some(key), ..
        } => Some(InputEvent::KeyUp(key)),
        Event::MouseButtonDown {
            mouse_btn, x, y, ..
        } => Some(InputEvent::MouseDown {
            button: mouse_btn,
            x,
            y,
        }),
        Event::MouseMotion { x, y, .. } => Some(InputEvent::MouseMove { x, y }),
        _ => None,
    }
}

fn is_alt_f4(key: Keycode, keymod: Mod) -> bool {
    key == Keycode::F4 && keymod.intersects(Mod::LALTMOD | Mod::RALTMOD)
}

/// Drains the SDL event queue into a [`FrameInput`]
pub fn poll_frame(event_pump: &mut EventPump) -> FrameInput {
    let events = event_pump
        .poll_iter()
        .filter_map(|event| translate(&event))
        .collect();

    let held = HeldKeys::new(
        event_pump
            .keyboard_state()
            .pressed_scancodes()
            .filter_map(Keycode::from_scancode),
    );

    FrameInput { events, held }
}

/// Maps keys to the movement direction they control
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: Vec<(Keycode, Directions)>,
}

impl KeyBindings {
    pub fn from_config(keys: &KeyConfig) -> Result<Self, ConfigError> {
        Ok(KeyBindings {
            bindings: vec![
                (parse_key(&keys.left)?, Directions::LEFT),
                (parse_key(&keys.right)?, Directions::RIGHT),
                (parse_key(&keys.up)?, Directions::UP),
                (parse_key(&keys.down)?, Directions::DOWN),
            ],
        })
    }

    pub fn direction_for(&self, key: Keycode) -> Option<Directions> {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|&(_, direction)| direction)
    }

    /// Directions whose bound key is currently down
    pub fn held<'a>(&'a self, held: &'a HeldKeys) -> impl Iterator<Item = Directions> + 'a {
        self.bindings
            .iter()
            .filter(|&&(key, _)| held.is_held(key))
            .map(|&(_, direction)| direction)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            bindings: vec![
                (Keycode::Left, Directions::LEFT),
                (Keycode::Right, Directions::RIGHT),
                (Keycode::Up, Directions::UP),
                (Keycode::Down, Directions::DOWN),
            ],
        }
    }
}

/// Resolves a key name from the config file
///
/// Common movement keys are looked up locally because SDL can only resolve
/// multi-character names once its keyboard is initialised. Anything else
/// goes to SDL.
fn parse_key(name: &str) -> Result<Keycode, ConfigError> {
    named_key(name)
        .or_else(|| Keycode::from_name(name))
        .ok_or_else(|| ConfigError::UnknownKey(name.to_string()))
}

fn named_key(name: &str) -> Option<Keycode> {
    let key = match name.to_ascii_lowercase().as_str() {
        "left" => Keycode::Left,
        "right" => Keycode::Right,
        "up" => Keycode::Up,
        "down" => Keycode::Down,
        "space" => Keycode::Space,
        "return" => Keycode::Return,
        "escape" => Keycode::Escape,
        "tab" => Keycode::Tab,
        "keypad 2" => Keycode::Kp2,
        "keypad 4" => Keycode::Kp4,
        "keypad 6" => Keycode::Kp6,
        "keypad 8" => Keycode::Kp8,
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_down(key: Keycode, keymod: Mod, repeat: bool) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(key),
            scancode: None,
            keymod,
            repeat,
        }
    }

    #[test]
    fn test_window_close_is_a_quit_request() {
        assert_eq!(translate(&Event::Quit { timestamp: 0 }), Some(InputEvent::Quit));
    }

    #[test]
    fn test_alt_f4_is_a_quit_request() {
        assert_eq!(
            translate(&key_down(Keycode::F4, Mod::LALTMOD, false)),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            translate(&key_down(Keycode::F4, Mod::RALTMOD, false)),
            Some(InputEvent::Quit)
        );
    }

    #[test]
    fn test_plain_f4_is_an_ordinary_key() {
        assert_eq!(
            translate(&key_down(Keycode::F4, Mod::NOMOD, false)),
            Some(InputEvent::KeyDown(Keycode::F4))
        );
    }

    #[test]
    fn test_key_repeat_is_dropped() {
        assert_eq!(translate(&key_down(Keycode::Down, Mod::NOMOD, true)), None);
    }

    #[test]
    fn test_held_keys_lookup() {
        let held = HeldKeys::new([Keycode::Left, Keycode::Up]);
        assert!(held.is_held(Keycode::Left));
        assert!(!held.is_held(Keycode::Right));
    }

    #[test]
    fn test_default_bindings_use_arrow_keys() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.direction_for(Keycode::Left), Some(Directions::LEFT));
        assert_eq!(bindings.direction_for(Keycode::Down), Some(Directions::DOWN));
        assert_eq!(bindings.direction_for(Keycode::Space), None);
    }

    #[test]
    fn test_held_directions_follow_bindings() {
        let bindings = KeyBindings::default();
        let held = HeldKeys::new([Keycode::Right, Keycode::Up, Keycode::Space]);

        let directions: Vec<Directions> = bindings.held(&held).collect();
        assert_eq!(directions, vec![Directions::RIGHT, Directions::UP]);
        assert_eq!(bindings.held(&HeldKeys::default()).count(), 0);
    }

    #[test]
    fn test_named_keys_ignore_case() {
        assert_eq!(parse_key("Left").unwrap(), Keycode::Left);
        assert_eq!(parse_key("DOWN").unwrap(), Keycode::Down);
        assert_eq!(parse_key("Keypad 8").unwrap(), Keycode::Kp8);
        assert!(matches!(parse_key("NotAKey"), Err(ConfigError::UnknownKey(name)) if name == "NotAKey"));
    }

    #[test]
    fn test_bindings_from_config_names() {
        let keys = KeyConfig {
            left: "A".to_string(),
            right: "D".to_string(),
            up: "W".to_string(),
            down: "S".to_string(),
        };
        let bindings = KeyBindings::from_config(&keys).unwrap();
        assert_eq!(bindings.direction_for(Keycode::A), Some(Directions::LEFT));
        assert_eq!(bindings.direction_for(Keycode::W), Some(Directions::UP));
        assert_eq!(bindings.direction_for(Keycode::Left), None);
    }
}
