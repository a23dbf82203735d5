use std::iter::FusedIterator;
use std::slice;

use serde::Serialize;

use super::action::{Direction, MOVE_STEP};
use super::block::Block;
use super::geometry::{Bounds, Color, Point, Size};

/// The snake: an ordered chain of equal blocks, head at index 0.
///
/// The body is never empty and every block shares the snake's size and
/// colour. The head position is read from the first block, there is no
/// second copy of it to keep in sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snake {
    block_size: Size,
    color: Color,
    body: Vec<Block>,
}

/// Type of collision that ends a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CollisionType {
    /// Head left the arena
    Wall,
    /// Head bit another segment
    SelfCollision,
}

impl Snake {
    /// Create a one-block snake at the given head position
    pub fn new(head_position: Point, block_size: Size, color: Color) -> Self {
        Self {
            block_size,
            color,
            body: vec![Block::new(head_position, block_size, color)],
        }
    }

    pub fn head_position(&self) -> Point {
        self.body[0].position()
    }

    pub fn head(&self) -> &Block {
        &self.body[0]
    }

    /// Last segment
    pub fn tail(&self) -> &Block {
        &self.body[self.body.len() - 1]
    }

    pub fn block_size(&self) -> Size {
        self.block_size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn blocks(&self) -> &[Block] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false, a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterate over the blocks from head to tail
    pub fn iter(&self) -> Blocks<'_> {
        Blocks {
            inner: self.body.iter(),
        }
    }

    /// Move the head by (dx, dy); every other block takes the place its
    /// predecessor held before the move.
    ///
    /// No bounds or collision checks happen here, query them afterwards.
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        let mut vacated = self.head_position().offset(dx, dy);
        for block in &mut self.body {
            vacated = block.relocate(vacated);
        }
    }

    pub fn move_left(&mut self) {
        self.move_by(-MOVE_STEP, 0);
    }

    pub fn move_right(&mut self) {
        self.move_by(MOVE_STEP, 0);
    }

    pub fn move_up(&mut self) {
        self.move_by(0, -MOVE_STEP);
    }

    pub fn move_down(&mut self) {
        self.move_by(0, MOVE_STEP);
    }

    pub fn move_in(&mut self, direction: Direction) {
        let (dx, dy) = direction.delta();
        self.move_by(dx, dy);
    }

    /// Check the head block against the region spanned by two corners.
    ///
    /// Only the head is tested. A region no wider than one block is always
    /// rejected; its height is not compared against the block height.
    pub fn inside_bounds(&self, top_left: Point, bottom_right: Point) -> bool {
        let head = self.head();

        !(bottom_right.x - top_left.x <= self.block_size.width
            || top_left.x >= head.right()
            || top_left.y >= head.bottom()
            || bottom_right.x <= head.position().x
            || bottom_right.y <= head.position().y)
    }

    pub fn inside(&self, bounds: &Bounds) -> bool {
        self.inside_bounds(bounds.top_left, bounds.bottom_right)
    }

    /// True iff the box at `top_left` with `shape_size` lies entirely within
    /// the head block, edges inclusive.
    ///
    /// This is containment, not overlap: a shape larger than a block never
    /// collides, and two equal blocks only collide when they coincide.
    pub fn check_collision(&self, top_left: Point, shape_size: Size) -> bool {
        let head = self.head();
        let (left, top) = (head.position().x, head.position().y);
        let (right, bottom) = (head.right(), head.bottom());

        let x_range = left..=right;
        let y_range = top..=bottom;

        x_range.contains(&top_left.x)
            && x_range.contains(&(top_left.x + shape_size.width))
            && y_range.contains(&top_left.y)
            && y_range.contains(&(top_left.y + shape_size.height))
    }

    pub fn check_collision_with_fruit(&self, top_left: Point, shape_size: Size) -> bool {
        self.check_collision(top_left, shape_size)
    }

    /// True if the head contains any other segment
    pub fn check_collision_with_self(&self) -> bool {
        self.body[1..]
            .iter()
            .any(|block| self.check_collision(block.position(), block.size()))
    }

    /// Append a block at the current head position. It overlaps the head
    /// until the next move pulls it into line.
    pub fn grow(&mut self) {
        let segment = Block::new(self.head_position(), self.block_size, self.color);
        self.body.push(segment);
    }
}

impl<'a> IntoIterator for &'a Snake {
    type Item = &'a Block;
    type IntoIter = Blocks<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a snake's blocks, head first
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    inner: slice::Iter<'a, Block>,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a Block;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Blocks<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for Blocks<'_> {}

impl FusedIterator for Blocks<'_> {}
