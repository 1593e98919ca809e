//! Continuous movement directions
//!
//! Held direction keys are tracked as a bitmask. Only the combinations in
//! [`Movement`] are legal: standing still, the four single directions, and
//! the four diagonals. Opposite pairs (left+right, up+down) and anything with
//! three or more bits set can never be entered; a key press that would create
//! one is ignored.
//!
//! | bits | movement  |
//! |------|-----------|
//! | 0    | Stand     |
//! | 1    | Left      |
//! | 2    | Up        |
//! | 3    | UpLeft    |
//! | 4    | Right     |
//! | 6    | UpRight   |
//! | 8    | Down      |
//! | 9    | DownLeft  |
//! | 12   | DownRight |

use bitflags::bitflags;

bitflags! {
    /// One bit per direction key
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Directions: u8 {
        const LEFT = 1;
        const UP = 2;
        const RIGHT = 4;
        const DOWN = 8;
    }
}

/// A legal set of held directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Movement {
    #[default]
    Stand,
    Left,
    Up,
    Right,
    Down,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Movement {
    pub const ALL: [Movement; 9] = [
        Movement::Stand,
        Movement::Left,
        Movement::Up,
        Movement::Right,
        Movement::Down,
        Movement::UpLeft,
        Movement::UpRight,
        Movement::DownLeft,
        Movement::DownRight,
    ];

    pub fn directions(self) -> Directions {
        match self {
            Movement::Stand => Directions::empty(),
            Movement::Left => Directions::LEFT,
            Movement::Up => Directions::UP,
            Movement::Right => Directions::RIGHT,
            Movement::Down => Directions::DOWN,
            Movement::UpLeft => Directions::UP | Directions::LEFT,
            Movement::UpRight => Directions::UP | Directions::RIGHT,
            Movement::DownLeft => Directions::DOWN | Directions::LEFT,
            Movement::DownRight => Directions::DOWN | Directions::RIGHT,
        }
    }

    /// The movement for a bitmask, or `None` if the combination is illegal
    pub fn from_directions(directions: Directions) -> Option<Movement> {
        Movement::ALL
            .into_iter()
            .find(|movement| movement.directions() == directions)
    }

    /// Adds a direction; illegal combinations leave the movement unchanged
    pub fn press(self, direction: Directions) -> Movement {
        Movement::from_directions(self.directions() | direction).unwrap_or(self)
    }

    /// Removes a direction
    pub fn release(self, direction: Directions) -> Movement {
        // Every subset of a legal combination is itself legal
        Movement::from_directions(self.directions() - direction).unwrap_or(Movement::Stand)
    }

    /// Position change for one frame at the given step size
    pub fn delta(self, step: i32) -> (i32, i32) {
        let directions = self.directions();
        let mut dx = 0;
        let mut dy = 0;
        if directions.contains(Directions::LEFT) {
            dx -= step;
        }
        if directions.contains(Directions::RIGHT) {
            dx += step;
        }
        if directions.contains(Directions::UP) {
            dy -= step;
        }
        if directions.contains(Directions::DOWN) {
            dy += step;
        }
        (dx, dy)
    }
}
