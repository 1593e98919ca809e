use super::{FrameStep, Scene, SceneContext, SceneId, SceneRegistry, Transition};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::input::{HeldKeys, InputEvent};
use crate::surface::{Surface, TextMetrics};
use log::info;
use sdl2::rect::Rect;

/// Owns the active scene and runs it one frame at a time
pub struct SceneDriver {
    registry: SceneRegistry,
    active: Box<dyn Scene>,
    window: Rect,
}

impl SceneDriver {
    /// Builds the first scene
    pub fn new(
        registry: SceneRegistry,
        initial: SceneId,
        window: Rect,
        config: &GameConfig,
        metrics: &mut dyn TextMetrics,
    ) -> Result<Self, GameError> {
        let mut context = SceneContext {
            window,
            config,
            metrics,
        };
        let active = registry.build(initial, &mut context)?;
        info!("Starting in {} scene", initial);

        Ok(SceneDriver {
            registry,
            active,
            window,
        })
    }

    pub fn active(&self) -> &dyn Scene {
        self.active.as_ref()
    }

    /// Runs one frame
    ///
    /// Quit requests end the game before the scene sees any input. Otherwise
    /// the scene handles the events; if it stays it is updated and rendered.
    /// Switching builds a fresh instance of the target and draws nothing this
    /// frame. Switching to the active scene counts as staying.
    pub fn frame<S: Surface>(
        &mut self,
        events: &[InputEvent],
        held: &HeldKeys,
        surface: &mut S,
        config: &GameConfig,
    ) -> Result<FrameStep, GameError> {
        if events.iter().any(InputEvent::is_quit) {
            info!("Quit requested");
            return Ok(FrameStep::Quit);
        }

        match self.active.handle_input(events, held) {
            Transition::Quit => {
                info!("Leaving from {} scene", self.active.id());
                Ok(FrameStep::Quit)
            }
            Transition::Switch(next) if next != self.active.id() => {
                info!("Switching scene: {} -> {}", self.active.id(), next);
                let mut context = SceneContext {
                    window: self.window,
                    config,
                    metrics: surface,
                };
                self.active = self.registry.build(next, &mut context)?;
                Ok(FrameStep::Switched(next))
            }
            Transition::Switch(_) | Transition::Stay => {
                self.active.update();
                self.active.render(surface)?;
                Ok(FrameStep::Rendered)
            }
        }
    }
}
