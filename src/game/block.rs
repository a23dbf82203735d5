use serde::{Deserialize, Serialize};

use super::geometry::{Color, Point, Size};

/// One fixed-size coloured segment of a snake's body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    position: Point,
    size: Size,
    color: Color,
}

impl Block {
    pub fn new(position: Point, size: Size, color: Color) -> Self {
        Self {
            position,
            size,
            color,
        }
    }

    /// Top-left corner
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn right(&self) -> i32 {
        self.position.x + self.size.width
    }

    pub fn bottom(&self) -> i32 {
        self.position.y + self.size.height
    }

    /// Only the owning snake moves its blocks
    pub(crate) fn relocate(&mut self, position: Point) -> Point {
        std::mem::replace(&mut self.position, position)
    }
}
