use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tracing::{debug, info};

use super::{
    action::Direction,
    collision::{CollisionDetector, CollisionType},
    config::{GameConfig, SpriteConfig},
    error::ConfigError,
    food::{Food, RandomSource},
    state::{Score, Snake},
};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Set when the run crashed and the board was reset
    pub collision: Option<CollisionType>,
    /// Whether the snake ate the food this tick
    pub ate_food: bool,
    /// Whether this tick raised the best score
    pub new_best: bool,
}

/// The whole game: snake, food, score and the rules tying them together
pub struct GameState<R: RandomSource = StdRng> {
    snake: Snake,
    food: Food,
    score: Score,
    detector: CollisionDetector,
    delay: Duration,
    looks: SpriteConfig,
    rng: R,
}

impl GameState<StdRng> {
    /// Create a game seeded from system entropy
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a game drawing food positions from `rng`
    pub fn with_rng(config: &GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let food = Food::new(config, &mut rng);
        debug!(x = food.position().x, y = food.position().y, "placed first food");

        Ok(Self {
            snake: Snake::new(config.step_distance),
            food,
            score: Score::new(),
            detector: CollisionDetector::new(config),
            delay: Duration::from_millis(config.update_delay_ms),
            looks: config.sprites.clone(),
            rng,
        })
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn detector(&self) -> &CollisionDetector {
        &self.detector
    }

    /// Head and segment appearance
    pub fn looks(&self) -> &SpriteConfig {
        &self.looks
    }

    /// Time the driver waits between ticks
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Steer the snake; takes effect on the next tick
    pub fn set_direction(&mut self, direction: Direction) {
        self.snake.set_direction(direction);
    }

    /// Advance the game by one step
    pub fn tick(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        self.snake.move_snake();

        if let Some(collision) = self.detector.check(&self.snake) {
            let head = self.snake.head();
            debug!(?collision, x = head.x, y = head.y, score = self.score.current(), "crashed");
            outcome.collision = Some(collision);
            self.reset();
        }

        if self
            .detector
            .reaches_food(self.snake.head(), self.food.position())
        {
            let previous_best = self.score.best();
            self.snake.add_segment();
            self.score.add(1);
            self.food.replace(&mut self.rng);
            outcome.ate_food = true;
            outcome.new_best = self.score.best() > previous_best;

            debug!(
                score = self.score.current(),
                length = self.snake.len(),
                "ate food"
            );
            if outcome.new_best {
                info!(best = self.score.best(), "new high score");
            }
        }

        outcome
    }

    /// Start a fresh run in place. Best score survives.
    fn reset(&mut self) {
        self.score.reset_current();
        self.snake.reset();
        self.food.replace(&mut self.rng);
    }

    #[cfg(test)]
    pub(crate) fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }
}
