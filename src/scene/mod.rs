//! Scene State Machine
//!
//! The game is always in exactly one scene. Each frame the [`SceneDriver`]
//! hands the scene its input, and the scene answers with a [`Transition`]:
//! stay, switch to another scene by [`SceneId`], or quit. Scenes are built
//! fresh from the [`SceneRegistry`] every time they are entered, so nothing
//! carries over between visits.
//!
//! # Scenes
//!
//! - [`TitleScene`] - main menu
//! - [`OptionsScene`] - options menu (placeholder entries)
//! - [`QuitScene`] - quit confirmation dialog
//! - [`GameplayScene`] - the bunny and its obstacles

pub mod driver;
pub mod gameplay;
pub mod options;
pub mod quit;
pub mod registry;
pub mod timer;
pub mod title;

pub use driver::SceneDriver;
pub use gameplay::GameplayScene;
pub use options::OptionsScene;
pub use quit::QuitScene;
pub use registry::{default_registry, SceneContext, SceneRegistry};
pub use timer::FrameTimer;
pub use title::TitleScene;

use crate::error::GameError;
use crate::gui::{MenuAction, MenuLayout, Target};
use crate::input::{HeldKeys, InputEvent};
use crate::surface::Surface;
use log::warn;
use std::fmt;

/// Every scene the game knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneId {
    Title,
    Options,
    QuitConfirm,
    Gameplay,
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            SceneId::Title => "title",
            SceneId::Options => "options",
            SceneId::QuitConfirm => "quit confirmation",
            SceneId::Gameplay => "gameplay",
        };
        f.write_str(name)
    }
}

/// A scene's answer to one frame of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Switch(SceneId),
    Quit,
}

impl From<Target> for Transition {
    fn from(target: Target) -> Self {
        match target {
            Target::Scene(id) => Transition::Switch(id),
            Target::Exit => Transition::Quit,
        }
    }
}

/// What the driver did with one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStep {
    /// The active scene updated and rendered; present the frame
    Rendered,
    /// A new scene was entered; nothing was drawn
    Switched(SceneId),
    Quit,
}

/// A unit of game flow: input, logic, drawing
///
/// The default bodies only complain: a scene that forgets to override one
/// logs a warning every frame and otherwise does nothing.
pub trait Scene {
    fn id(&self) -> SceneId;

    /// Whether the mouse cursor is visible while this scene is active
    fn shows_cursor(&self) -> bool {
        true
    }

    fn handle_input(&mut self, _events: &[InputEvent], _held: &HeldKeys) -> Transition {
        warn!("Scene {} does not override handle_input", self.id());
        Transition::Stay
    }

    fn update(&mut self) {
        warn!("Scene {} does not override update", self.id());
    }

    fn render(&self, _surface: &mut dyn Surface) -> Result<(), GameError> {
        warn!("Scene {} does not override render", self.id());
        Ok(())
    }
}

/// Feeds events to a menu until one of them produces an action
///
/// Escape leads to `back`.
pub(crate) fn menu_transition(
    menu: &mut MenuLayout,
    events: &[InputEvent],
    back: SceneId,
) -> Transition {
    for event in events {
        match menu.handle_event(event) {
            Some(MenuAction::Select(target)) => return target.into(),
            Some(MenuAction::Back) => return Transition::Switch(back),
            None => {}
        }
    }
    Transition::Stay
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::fake::RecordingSurface;

    struct Lazy;

    impl Scene for Lazy {
        fn id(&self) -> SceneId {
            SceneId::Options
        }
    }

    #[test]
    fn test_targets_map_to_transitions() {
        assert_eq!(
            Transition::from(Target::Scene(SceneId::Gameplay)),
            Transition::Switch(SceneId::Gameplay)
        );
        assert_eq!(Transition::from(Target::Exit), Transition::Quit);
    }

    #[test]
    fn test_unoverridden_methods_do_nothing() {
        let mut scene = Lazy;
        let mut surface = RecordingSurface::new();

        assert_eq!(scene.handle_input(&[], &HeldKeys::default()), Transition::Stay);
        scene.update();
        scene.render(&mut surface).unwrap();
        assert!(surface.ops.is_empty());
        assert!(scene.shows_cursor());
    }

    #[test]
    fn test_scene_names() {
        assert_eq!(SceneId::QuitConfirm.to_string(), "quit confirmation");
        assert_eq!(SceneId::Title.to_string(), "title");
    }
}
