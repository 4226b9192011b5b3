//! Collision rules
//!
//! Everything here is a pure function of positions and configuration.

use super::config::GameConfig;
use super::state::{Position, Snake};

/// Type of collision that ends a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Head left the playable rectangle
    Wall,
    /// Head ran into its own body
    SelfCollision,
}

/// Rectangle the head centre may occupy, inclusive on every side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeBounds {
    pub x_min: i64,
    pub x_max: i64,
    pub y_min: i64,
    pub y_max: i64,
}

impl EdgeBounds {
    /// Board shrunk by half a sprite, with the scoreboard strip cut off the top
    pub fn from_config(config: &GameConfig) -> Self {
        let half_sprite = config.half_sprite();
        let x_limit = config.half_width() - half_sprite;
        let half_height = config.half_height();

        Self {
            x_min: -x_limit,
            x_max: x_limit,
            y_min: -(half_height - half_sprite),
            y_max: half_height - i64::from(config.scoreboard_height) - half_sprite,
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        (self.x_min as f64..=self.x_max as f64).contains(&pos.x)
            && (self.y_min as f64..=self.y_max as f64).contains(&pos.y)
    }
}

/// Finds crashes and food pickups for one board configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionDetector {
    bounds: EdgeBounds,
    sprite_size: f64,
    half_sprite: f64,
}

impl CollisionDetector {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            bounds: EdgeBounds::from_config(config),
            sprite_size: f64::from(config.sprites.sprite_size),
            half_sprite: config.half_sprite() as f64,
        }
    }

    pub fn bounds(&self) -> EdgeBounds {
        self.bounds
    }

    /// True if the head is outside the playable rectangle
    pub fn hits_edge(&self, head: Position) -> bool {
        !self.bounds.contains(head)
    }

    /// True if the head overlaps a body segment it is not attached to.
    ///
    /// `segments[0]` always trails the head by one step and is skipped. A
    /// segment sitting exactly on its predecessor was just grown and has not
    /// unfolded yet, so it is skipped as well; otherwise a snake that eats
    /// twice without moving would crash on its own neck.
    pub fn hits_self(&self, snake: &Snake) -> bool {
        let head = snake.head();
        snake
            .segments()
            .windows(2)
            .filter(|pair| pair[1] != pair[0])
            .any(|pair| head.distance(pair[1]) < self.half_sprite)
    }

    /// Wall first, then body
    pub fn check(&self, snake: &Snake) -> Option<CollisionType> {
        if self.hits_edge(snake.head()) {
            Some(CollisionType::Wall)
        } else if self.hits_self(snake) {
            Some(CollisionType::SelfCollision)
        } else {
            None
        }
    }

    /// True if the head is close enough to eat food at `food`
    pub fn reaches_food(&self, head: Position, food: Position) -> bool {
        head.distance(food) < self.sprite_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge_case_config() -> GameConfig {
        let mut config = GameConfig::new(600, 600);
        config.scoreboard_height = 50;
        config.border = 25;
        config.sprites.sprite_size = 20;
        config
    }

    #[test]
    fn test_edge_bounds() {
        let bounds = EdgeBounds::from_config(&edge_case_config());
        assert_eq!(
            bounds,
            EdgeBounds {
                x_min: -290,
                x_max: 290,
                y_min: -290,
                y_max: 240,
            }
        );
    }

    #[test]
    fn test_top_edge_below_scoreboard() {
        let detector = CollisionDetector::new(&edge_case_config());
        assert!(!detector.hits_edge(Position::new(0.0, 240.0)));
        assert!(detector.hits_edge(Position::new(0.0, 241.0)));
    }

    #[test]
    fn test_other_edges() {
        let detector = CollisionDetector::new(&edge_case_config());
        assert!(!detector.hits_edge(Position::ORIGIN));
        assert!(!detector.hits_edge(Position::new(-290.0, -290.0)));
        assert!(!detector.hits_edge(Position::new(290.0, 0.0)));
        assert!(detector.hits_edge(Position::new(290.5, 0.0)));
        assert!(detector.hits_edge(Position::new(-291.0, 0.0)));
        assert!(detector.hits_edge(Position::new(0.0, -300.0)));
    }

    #[test]
    fn test_uneven_board_uses_both_halves() {
        let mut config = GameConfig::new(400, 800);
        config.scoreboard_height = 40;
        let bounds = EdgeBounds::from_config(&config);
        assert_eq!(bounds.x_max, 190);
        assert_eq!(bounds.y_min, -390);
        assert_eq!(bounds.y_max, 350);
    }

    #[test]
    fn test_first_segment_never_collides() {
        let detector = CollisionDetector::new(&GameConfig::default());
        let mut snake = Snake::new(10.0);
        snake.place_for_test(Position::ORIGIN, vec![Position::new(1.0, 0.0)]);
        assert!(!detector.hits_self(&snake));
    }

    #[test]
    fn test_overlapping_body_collides() {
        let detector = CollisionDetector::new(&GameConfig::default());
        let mut snake = Snake::new(10.0);
        snake.place_for_test(
            Position::ORIGIN,
            vec![
                Position::new(0.0, 10.0),
                Position::new(10.0, 10.0),
                Position::new(10.0, 0.0),
                Position::new(5.0, 0.0),
            ],
        );
        assert!(detector.hits_self(&snake));
        assert_eq!(detector.check(&snake), Some(CollisionType::SelfCollision));
    }

    #[test]
    fn test_distance_threshold_is_strict() {
        let detector = CollisionDetector::new(&GameConfig::default());
        let mut snake = Snake::new(10.0);
        snake.place_for_test(
            Position::ORIGIN,
            vec![Position::new(0.0, 20.0), Position::new(10.0, 0.0)],
        );
        assert!(!detector.hits_self(&snake));

        snake.place_for_test(
            Position::ORIGIN,
            vec![Position::new(0.0, 20.0), Position::new(9.9, 0.0)],
        );
        assert!(detector.hits_self(&snake));
    }

    #[test]
    fn test_stacked_new_segments_ignored() {
        let detector = CollisionDetector::new(&GameConfig::default());
        let mut snake = Snake::new(10.0);
        snake.add_segment();
        snake.add_segment();
        snake.add_segment();
        assert!(!detector.hits_self(&snake));
    }

    #[test]
    fn test_wall_checked_before_body() {
        let detector = CollisionDetector::new(&GameConfig::default());
        let mut snake = Snake::new(10.0);
        snake.place_for_test(
            Position::new(1000.0, 0.0),
            vec![Position::new(990.0, 0.0), Position::new(1000.0, 0.0)],
        );
        assert_eq!(detector.check(&snake), Some(CollisionType::Wall));
    }

    #[test]
    fn test_food_reach() {
        let detector = CollisionDetector::new(&GameConfig::default());
        let head = Position::ORIGIN;
        assert!(detector.reaches_food(head, Position::new(19.9, 0.0)));
        assert!(detector.reaches_food(head, Position::new(12.0, 12.0)));
        assert!(!detector.reaches_food(head, Position::new(20.0, 0.0)));
        assert!(!detector.reaches_food(head, Position::new(15.0, 15.0)));
    }
}
