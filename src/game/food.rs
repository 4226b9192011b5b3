//! Food placement
//!
//! A single food item lives for the whole game. Eating it moves it somewhere
//! else with a freshly picked look instead of creating a new one.

use rand::rngs::StdRng;
use rand::Rng;

use super::config::{GameConfig, SpriteAttributes};
use super::state::Position;

/// Source of randomness for food placement
pub trait RandomSource {
    /// Uniform integer in `low..=high`
    fn int_inclusive(&mut self, low: i64, high: i64) -> i64;

    /// Uniform index in `0..len`, `len` is never zero
    fn index(&mut self, len: usize) -> usize;
}

impl RandomSource for StdRng {
    fn int_inclusive(&mut self, low: i64, high: i64) -> i64 {
        self.gen_range(low..=high)
    }

    fn index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// Rectangle food may be placed in, inclusive on every side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodArea {
    pub x_min: i64,
    pub x_max: i64,
    pub y_min: i64,
    pub y_max: i64,
}

impl FoodArea {
    /// Board minus one sprite of padding, minus the scoreboard strip at the top
    pub fn from_config(config: &GameConfig) -> Self {
        let padding = i64::from(config.sprites.sprite_size);
        let half_height = config.half_height();
        let x_max = config.half_width() - padding;

        Self {
            x_min: -x_max,
            x_max,
            y_min: padding - half_height,
            y_max: half_height - i64::from(config.scoreboard_height) - padding,
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        (self.x_min as f64..=self.x_max as f64).contains(&pos.x)
            && (self.y_min as f64..=self.y_max as f64).contains(&pos.y)
    }
}

/// The food item on the board
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    position: Position,
    variant: usize,
    visible: bool,
    area: FoodArea,
    palette: Vec<SpriteAttributes>,
}

impl Food {
    /// Create the food item and drop it somewhere on the board.
    ///
    /// `config` must have passed [`GameConfig::validate`]: an empty palette or
    /// an inverted food area panics here.
    pub(crate) fn new<R: RandomSource + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let mut food = Self {
            position: Position::ORIGIN,
            variant: 0,
            visible: true,
            area: FoodArea::from_config(config),
            palette: config.sprites.food.clone(),
        };
        food.variant = rng.index(food.palette.len());
        food.place(rng);
        food
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Index into the food palette
    pub fn variant(&self) -> usize {
        self.variant
    }

    /// Look of the current variant
    pub fn attributes(&self) -> &SpriteAttributes {
        &self.palette[self.variant]
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn area(&self) -> FoodArea {
        self.area
    }

    /// Move to a uniformly random spot in the food area
    pub fn place<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        let x = rng.int_inclusive(self.area.x_min, self.area.x_max);
        let y = rng.int_inclusive(self.area.y_min, self.area.y_max);
        self.position = Position::new(x as f64, y as f64);
    }

    /// Turn the eaten item into a new one: new variant, new spot
    pub fn replace<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        self.visible = false;
        self.variant = rng.index(self.palette.len());
        self.place(rng);
        self.visible = true;
    }
}
