//! Per-tick directional input.

/// One of the four directional controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Order in which the four-way policy resolves simultaneous presses.
    pub const PRIORITY: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}

/// Snapshot of which directions are held during one tick.
///
/// Every combination is valid. A flag the host does not report stays `false`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl InputSnapshot {
    /// Build a snapshot from the set of held directions.
    pub fn from_held(held: impl IntoIterator<Item = Direction>) -> Self {
        held.into_iter().fold(Self::default(), |mut snapshot, dir| {
            snapshot.set(dir, true);
            snapshot
        })
    }

    #[inline]
    pub fn is_held(&self, dir: Direction) -> bool {
        match dir {
            Direction::Left => self.left,
            Direction::Right => self.right,
            Direction::Up => self.up,
            Direction::Down => self.down,
        }
    }

    #[inline]
    pub fn set(&mut self, dir: Direction, held: bool) {
        match dir {
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
        }
    }

    /// First held direction in [`Direction::PRIORITY`] order.
    pub fn first_by_priority(&self) -> Option<Direction> {
        Direction::PRIORITY
            .into_iter()
            .find(|&dir| self.is_held(dir))
    }
}
