use super::action::Direction;

/// A point on the board, origin at the centre, y pointing up
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Euclidean distance to another position
    pub fn distance(&self, other: Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// The snake: a steered head followed by a chain of segments
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    head: Position,
    direction: Direction,
    /// Body segments, nearest the head first
    segments: Vec<Position>,
    step_distance: f64,
}

impl Snake {
    /// Create a stopped snake at the origin with no segments
    pub fn new(step_distance: f64) -> Self {
        Self {
            head: Position::ORIGIN,
            direction: Direction::Stop,
            segments: Vec::new(),
            step_distance,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.head
    }

    /// Current heading
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Body segments, nearest the head first
    pub fn segments(&self) -> &[Position] {
        &self.segments
    }

    /// Number of body segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Change heading. A reversal of the current heading is ignored.
    pub fn set_direction(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.direction = direction;
        }
    }

    /// Advance the head one step and pull the body along behind it
    pub fn move_snake(&mut self) {
        if self.direction == Direction::Stop {
            return;
        }

        let (dx, dy) = self.direction.delta(self.step_distance);
        let previous_head = self.head;
        self.head = previous_head.moved_by(dx, dy);

        // Tail first, so every segment still reads its predecessor's old spot.
        for i in (1..self.segments.len()).rev() {
            self.segments[i] = self.segments[i - 1];
        }
        if let Some(first) = self.segments.first_mut() {
            *first = previous_head;
        }
    }

    /// Grow by one segment, stacked on the current tail until the next move
    pub fn add_segment(&mut self) {
        let position = self.segments.last().copied().unwrap_or(self.head);
        self.segments.push(position);
    }

    /// Back to the origin, stopped, with no body
    pub fn reset(&mut self) {
        self.head = Position::ORIGIN;
        self.direction = Direction::Stop;
        self.segments.clear();
    }

    #[cfg(test)]
    pub(crate) fn place_for_test(&mut self, head: Position, segments: Vec<Position>) {
        self.head = head;
        self.segments = segments;
    }
}

/// Current and best score for the process lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    current: u32,
    best: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Add to the current score, raising best if it is overtaken
    pub fn add(&mut self, value: u32) {
        self.current += value;
        self.best = self.best.max(self.current);
    }

    /// Drop the current score; best is kept
    pub fn reset_current(&mut self) {
        self.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn snake_heading(direction: Direction, step: f64) -> Snake {
        let mut snake = Snake::new(step);
        snake.set_direction(direction);
        snake
    }

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5.0, 5.0);
        assert_eq!(pos.moved_by(1.0, 0.0), Position::new(6.0, 5.0));
        assert_eq!(pos.moved_by(0.0, -1.0), Position::new(5.0, 4.0));
        assert_eq!(Position::new(3.0, 4.0).distance(Position::ORIGIN), 5.0);
    }

    #[test]
    fn test_new_snake_is_stopped_at_origin() {
        let snake = Snake::new(10.0);
        assert_eq!(snake.head(), Position::ORIGIN);
        assert_eq!(snake.direction(), Direction::Stop);
        assert!(snake.is_empty());
    }

    #[test]
    fn test_set_direction_rejects_reversal() {
        for from in Direction::MOVING {
            for to in Direction::MOVING {
                let mut snake = snake_heading(from, 10.0);
                snake.set_direction(to);
                if from.is_opposite(to) {
                    assert_eq!(snake.direction(), from);
                } else {
                    assert_eq!(snake.direction(), to);
                }
            }
        }
    }

    #[test]
    fn test_stop_and_restart() {
        let mut snake = snake_heading(Direction::Right, 10.0);
        snake.set_direction(Direction::Stop);
        assert_eq!(snake.direction(), Direction::Stop);

        // Nothing is opposite to Stop, so any heading is accepted afterwards
        snake.set_direction(Direction::Left);
        assert_eq!(snake.direction(), Direction::Left);
    }

    #[test]
    fn test_latest_direction_wins() {
        let mut snake = snake_heading(Direction::Right, 10.0);
        snake.set_direction(Direction::Up);
        snake.set_direction(Direction::Left);
        assert_eq!(snake.direction(), Direction::Left);
    }

    #[test]
    fn test_stopped_snake_does_not_move() {
        let mut snake = Snake::new(10.0);
        snake.add_segment();
        let before = snake.clone();
        for _ in 0..5 {
            snake.move_snake();
        }
        assert_eq!(snake, before);
    }

    #[test]
    fn test_move_with_one_segment() {
        let mut snake = snake_heading(Direction::Right, 5.0);
        snake.add_segment();
        snake.move_snake();
        assert_eq!(snake.head(), Position::new(5.0, 0.0));
        assert_eq!(snake.segments()[0], Position::new(0.0, 0.0));
    }

    #[test]
    fn test_segment_chain_follows_predecessors() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut snake = snake_heading(Direction::Up, 10.0);

        for round in 0..200 {
            if round % 3 == 0 {
                snake.add_segment();
            }
            let dir = Direction::MOVING[rng.gen_range(0..4)];
            snake.set_direction(dir);

            let head_before = snake.head();
            let segments_before = snake.segments().to_vec();
            snake.move_snake();

            for (i, segment) in snake.segments().iter().enumerate() {
                let expected = if i == 0 {
                    head_before
                } else {
                    segments_before[i - 1]
                };
                assert_eq!(*segment, expected);
            }
        }
    }

    #[test]
    fn test_add_segment_stacks_on_tail() {
        let mut snake = snake_heading(Direction::Right, 10.0);
        snake.add_segment();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.segments()[0], snake.head());

        snake.move_snake();
        snake.move_snake();
        snake.add_segment();
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.segments()[1], snake.segments()[0]);

        snake.move_snake();
        assert_eq!(snake.segments()[1], Position::new(10.0, 0.0));
        assert_eq!(snake.segments()[0], Position::new(20.0, 0.0));
    }

    #[test]
    fn test_reset() {
        let mut snake = snake_heading(Direction::Down, 10.0);
        snake.add_segment();
        snake.add_segment();
        snake.move_snake();
        snake.reset();

        assert_eq!(snake.head(), Position::ORIGIN);
        assert_eq!(snake.direction(), Direction::Stop);
        assert!(snake.is_empty());
    }

    #[test]
    fn test_score_tracks_best() {
        let mut score = Score::new();
        score.add(1);
        score.add(1);
        assert_eq!(score.current(), 2);
        assert_eq!(score.best(), 2);

        score.reset_current();
        assert_eq!(score.current(), 0);
        assert_eq!(score.best(), 2);

        score.add(1);
        assert_eq!(score.best(), 2);
        score.add(1);
        score.add(1);
        assert_eq!(score.best(), 3);
    }
}
