/// Direction the snake head is travelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    /// Head stays where it is
    Stop,
}

impl Direction {
    /// The four directions that actually move the head
    pub const MOVING: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the reverse heading, or `None` for `Stop`
    pub fn opposite(&self) -> Option<Direction> {
        match self {
            Direction::Up => Some(Direction::Down),
            Direction::Down => Some(Direction::Up),
            Direction::Left => Some(Direction::Right),
            Direction::Right => Some(Direction::Left),
            Direction::Stop => None,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == Some(other)
    }

    /// Returns the (dx, dy) for one step of `distance` board units.
    ///
    /// The board's y axis points up, so `Up` increases y.
    pub fn delta(&self, distance: f64) -> (f64, f64) {
        match self {
            Direction::Up => (0.0, distance),
            Direction::Down => (0.0, -distance),
            Direction::Left => (-distance, 0.0),
            Direction::Right => (distance, 0.0),
            Direction::Stop => (0.0, 0.0),
        }
    }
}
