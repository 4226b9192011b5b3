//! Plain drawing data handed to whatever renders the board

use super::engine::GameState;
use super::food::{Food, RandomSource};
use super::state::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    Head,
    Segment,
    Food,
}

/// One thing to draw: where, what colour, what shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite<'a> {
    pub kind: SpriteKind,
    pub position: Position,
    pub color: &'a str,
    pub shape: &'a str,
}

/// Something that can describe itself as sprites, back to front
pub trait Drawable {
    fn sprites(&self) -> Vec<Sprite<'_>>;
}

impl Drawable for Food {
    fn sprites(&self) -> Vec<Sprite<'_>> {
        if !self.is_visible() {
            return Vec::new();
        }
        let attributes = self.attributes();
        vec![Sprite {
            kind: SpriteKind::Food,
            position: self.position(),
            color: &attributes.color,
            shape: &attributes.shape,
        }]
    }
}

impl<R: RandomSource> Drawable for GameState<R> {
    /// Food, then body from the tail up, then the head on top
    fn sprites(&self) -> Vec<Sprite<'_>> {
        let looks = self.looks();
        let segments = self.snake().segments();
        let mut sprites = self.food().sprites();
        sprites.reserve(segments.len() + 1);

        for (i, position) in segments.iter().enumerate().rev() {
            let color = if i % 2 == 0 {
                &looks.segment.color
            } else {
                &looks.segment_alternate_color
            };
            sprites.push(Sprite {
                kind: SpriteKind::Segment,
                position: *position,
                color,
                shape: &looks.segment.shape,
            });
        }

        sprites.push(Sprite {
            kind: SpriteKind::Head,
            position: self.snake().head(),
            color: &looks.head.color,
            shape: &looks.head.shape,
        });

        sprites
    }
}
