//! Rectangle collision for the gameplay scene
//!
//! Axis-aligned bounding boxes only. Moving things implement `Collidable`;
//! obstacles are plain `StaticObject`s that never move.
//!
//! Boxes follow SDL2 `Rect` conventions: the top-left edge is inside the box,
//! the bottom-right edge is not, so two boxes that only touch do not collide.

use crate::config::RectConfig;
use sdl2::rect::Rect;

/// Anything with a bounding box that can bump into obstacles
pub trait Collidable {
    fn get_bounds(&self) -> Rect;
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Two boxes are disjoint if one lies fully to the left, right, above or
/// below the other; otherwise they overlap.
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    let x_overlap = a.x() < b.x() + b.width() as i32 && a.x() + a.width() as i32 > b.x();
    let y_overlap = a.y() < b.y() + b.height() as i32 && a.y() + a.height() as i32 > b.y();

    x_overlap && y_overlap
}

/// True when `bounds` overlaps any of the obstacles
pub fn collides_with_any(bounds: &Rect, obstacles: &[StaticObject]) -> bool {
    obstacles
        .iter()
        .any(|obstacle| aabb_intersect(bounds, &obstacle.get_bounds()))
}

/// An immovable obstacle (hedge, rock, wall)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticObject {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl StaticObject {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        StaticObject {
            x,
            y,
            width,
            height,
        }
    }
}

impl From<RectConfig> for StaticObject {
    fn from(rect: RectConfig) -> Self {
        StaticObject::new(rect.x, rect.y, rect.width, rect.height)
    }
}

impl Collidable for StaticObject {
    fn get_bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}
