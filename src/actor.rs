use crate::collision::{collides_with_any, Collidable, StaticObject};
use crate::movement::{Directions, Movement};
use sdl2::rect::Rect;

/// Which way the sprite looks; images are drawn mirrored when facing left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

/// The player-controlled bunny
///
/// Movement is continuous: direction keys toggle bits in `movement` on
/// key-down/key-up, and every `update` moves one `step` per active bit.
pub struct Actor {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub step: i32,
    pub facing: Facing,
    movement: Movement,
}

impl Actor {
    pub fn new(x: i32, y: i32, width: u32, height: u32, step: i32) -> Self {
        Actor {
            x,
            y,
            width,
            height,
            step,
            facing: Facing::Right,
            movement: Movement::Stand,
        }
    }

    /// Step size proportional to the screen width (never below one pixel)
    pub fn step_for_width(screen_width: u32, divisor: u32) -> i32 {
        (screen_width / divisor.max(1)).max(1) as i32
    }

    #[cfg(test)]
    pub fn movement(&self) -> Movement {
        self.movement
    }

    pub fn press(&mut self, direction: Directions) {
        self.movement = self.movement.press(direction);
    }

    pub fn release(&mut self, direction: Directions) {
        self.movement = self.movement.release(direction);
    }

    /// Advances one frame
    ///
    /// Each axis is handled on its own: the proposed coordinate is clamped so
    /// the whole box stays inside `bounds`, then dropped if the box would
    /// overlap an obstacle. Blocking one axis never blocks the other.
    pub fn update(&mut self, bounds: Rect, obstacles: &[StaticObject]) {
        let (dx, dy) = self.movement.delta(self.step);

        if dx < 0 {
            self.facing = Facing::Left;
        } else if dx > 0 {
            self.facing = Facing::Right;
        }

        if dx != 0 {
            let max_x = bounds.x() + bounds.width() as i32 - self.width as i32;
            let new_x = clamp_axis(self.x + dx, bounds.x(), max_x);
            let proposed = Rect::new(new_x, self.y, self.width, self.height);
            if !collides_with_any(&proposed, obstacles) {
                self.x = new_x;
            }
        }

        if dy != 0 {
            let max_y = bounds.y() + bounds.height() as i32 - self.height as i32;
            let new_y = clamp_axis(self.y + dy, bounds.y(), max_y);
            let proposed = Rect::new(self.x, new_y, self.width, self.height);
            if !collides_with_any(&proposed, obstacles) {
                self.y = new_y;
            }
        }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }
}

impl Collidable for Actor {
    fn get_bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

// Keeps `value` in `min..=max`; a sprite larger than the screen pins to `min`
fn clamp_axis(value: i32, min: i32, max: i32) -> i32 {
    value.min(max).max(min)
}
