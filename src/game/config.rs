use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::geometry::{Bounds, Color, Point, Size};
use super::snake::Snake;

/// Starting shape of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakeConfig {
    /// Top-left corner of the head block
    pub head: Point,
    /// Size shared by every block
    pub block_size: Size,
    pub color: Color,
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            head: Point::new(100, 100),
            block_size: Size::new(30, 30),
            color: Color::GREEN,
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub snake: SnakeConfig,
    /// Playing field; leaving it ends the game
    pub arena: Bounds,
    /// Size of a fruit, smaller than a block so the head can contain it
    pub fruit_size: Size,
    /// Seed for fruit placement; random when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            snake: SnakeConfig::default(),
            arena: Bounds::default(),
            fruit_size: Size::new(10, 10),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom arena size anchored at the origin
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            arena: Bounds::new(Point::new(0, 0), Point::new(width, height)),
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file; missing fields take defaults
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {:?}", path))
    }

    /// Build the starting snake
    pub fn snake(&self) -> Snake {
        Snake::new(self.snake.head, self.snake.block_size, self.snake.color)
    }
}
