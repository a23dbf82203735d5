//! Snake body, movement and collision logic
//!
//! This module holds no I/O or rendering. A game loop drives a [`Snake`]
//! through its move methods once per tick and then queries bounds and
//! collisions; [`GameEngine`] is a minimal such loop.

pub mod action;
pub mod block;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod snake;

// Re-export commonly used types
pub use action::{parse_script, Direction, MOVE_STEP};
pub use block::Block;
pub use config::{GameConfig, SnakeConfig};
pub use engine::{Fruit, GameEngine, RunReport, StepInfo, StepResult};
pub use geometry::{Bounds, Color, Point, Size};
pub use snake::{Blocks, CollisionType, Snake};
