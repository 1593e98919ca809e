use super::{Scene, SceneContext, SceneId, Transition};
use crate::actor::{Actor, Facing};
use crate::collision::{Collidable, StaticObject};
use crate::error::GameError;
use crate::input::{HeldKeys, InputEvent, KeyBindings};
use crate::palette;
use crate::surface::Surface;
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Rect;

const OBSTACLE_COLOR: &str = "forest";

/// The bunny on a blue field
///
/// Direction keys set and clear movement bits on key-down/key-up, so the
/// bunny keeps moving for as long as a key is held. Releasing a key
/// re-applies the directions still held, so a press that was rejected
/// while its opposite was down takes over once that key comes up.
pub struct GameplayScene {
    bounds: Rect,
    actor: Actor,
    actor_image: Option<String>,
    actor_color: Color,
    obstacles: Vec<StaticObject>,
    bindings: KeyBindings,
    background: Color,
    obstacle_color: Color,
}

impl GameplayScene {
    pub fn new(context: &mut SceneContext<'_>) -> Result<Self, GameError> {
        let config = context.config;
        let window = context.window;
        let step = Actor::step_for_width(window.width(), config.actor.step_divisor);

        // Start in the middle of the screen
        let x = window.x() + (window.width() / 2) as i32 - (config.actor.width / 2) as i32;
        let y = window.y() + (window.height() / 2) as i32 - (config.actor.height / 2) as i32;
        let actor = Actor::new(x, y, config.actor.width, config.actor.height, step);

        Ok(GameplayScene {
            bounds: window,
            actor,
            actor_image: config.actor.image.clone(),
            actor_color: palette::color(&config.actor.color)?,
            obstacles: config.obstacles.iter().copied().map(StaticObject::from).collect(),
            bindings: KeyBindings::from_config(&config.keys)?,
            background: palette::color("blue")?,
            obstacle_color: palette::color(OBSTACLE_COLOR)?,
        })
    }

    pub fn boxed(context: &mut SceneContext<'_>) -> Result<Box<dyn Scene>, GameError> {
        Ok(Box::new(Self::new(context)?))
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }
}

impl Scene for GameplayScene {
    fn id(&self) -> SceneId {
        SceneId::Gameplay
    }

    fn shows_cursor(&self) -> bool {
        false
    }

    fn handle_input(&mut self, events: &[InputEvent], held: &HeldKeys) -> Transition {
        for event in events {
            match *event {
                InputEvent::KeyDown(Keycode::Escape) => return Transition::Switch(SceneId::Title),
                InputEvent::KeyDown(key) => {
                    if let Some(direction) = self.bindings.direction_for(key) {
                        self.actor.press(direction);
                    }
                }
                InputEvent::KeyUp(key) => {
                    if let Some(direction) = self.bindings.direction_for(key) {
                        self.actor.release(direction);
                        for still_held in self.bindings.held(held).filter(|&d| d != direction) {
                            self.actor.press(still_held);
                        }
                    }
                }
                _ => {}
            }
        }
        Transition::Stay
    }

    fn update(&mut self) {
        self.actor.update(self.bounds, &self.obstacles);
    }

    fn render(&self, surface: &mut dyn Surface) -> Result<(), GameError> {
        surface.fill_rect(self.background, Some(self.bounds))?;

        for obstacle in &self.obstacles {
            surface.fill_rect(self.obstacle_color, Some(obstacle.get_bounds()))?;
        }

        let dest = self.actor.get_bounds();
        match &self.actor_image {
            Some(image) => surface.draw_image(image, dest, self.actor.facing == Facing::Left)?,
            None => surface.fill_rect(self.actor_color, Some(dest))?,
        }

        Ok(())
    }
}
