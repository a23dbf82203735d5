use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::{
    action::Direction,
    block::Block,
    config::GameConfig,
    geometry::{Point, Size},
    snake::{CollisionType, Snake},
};

/// A fruit waiting to be eaten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fruit {
    pub position: Point,
    pub size: Size,
}

/// Information about a step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepInfo {
    /// Whether the snake ate a fruit this step
    pub ate_fruit: bool,
    /// Type of collision if one occurred
    pub collision_type: Option<CollisionType>,
}

/// Result of a game step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepResult {
    /// Whether the game has terminated
    pub terminated: bool,
    pub info: StepInfo,
}

/// Summary of a scripted run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub steps: u32,
    pub score: u32,
    pub alive: bool,
    pub collision_type: Option<CollisionType>,
    pub snake: Snake,
    pub fruit: Option<Fruit>,
}

/// Drives a snake one tick at a time: move, then bounds, self and fruit
/// checks, in that order.
pub struct GameEngine {
    config: GameConfig,
    snake: Snake,
    fruit: Option<Fruit>,
    direction: Direction,
    score: u32,
    steps: u32,
    alive: bool,
    last_collision: Option<CollisionType>,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let snake = config.snake();

        let mut engine = Self {
            config,
            snake,
            fruit: None,
            direction: Direction::Right,
            score: 0,
            steps: 0,
            alive: true,
            last_collision: None,
            rng,
        };
        engine.fruit = engine.spawn_fruit();
        engine
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn fruit(&self) -> Option<Fruit> {
        self.fruit
    }

    /// Place the fruit explicitly, replacing the spawned one
    pub fn set_fruit(&mut self, fruit: Option<Fruit>) {
        self.fruit = fruit;
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Execute one tick in the given direction
    pub fn step(&mut self, direction: Direction) -> StepResult {
        if !self.alive {
            return StepResult {
                terminated: true,
                info: StepInfo {
                    ate_fruit: false,
                    collision_type: None,
                },
            };
        }

        // Reversing straight into the neck is ignored
        if !(self.snake.len() > 1 && self.direction.is_opposite(direction)) {
            self.direction = direction;
        }

        self.snake.move_in(self.direction);
        self.steps += 1;
        debug!(
            step = self.steps,
            direction = ?self.direction,
            head = ?self.snake.head_position(),
            "snake moved"
        );

        if let Some(collision_type) = self.check_collision() {
            self.alive = false;
            self.last_collision = Some(collision_type);
            info!(
                step = self.steps,
                score = self.score,
                ?collision_type,
                "snake died"
            );

            return StepResult {
                terminated: true,
                info: StepInfo {
                    ate_fruit: false,
                    collision_type: Some(collision_type),
                },
            };
        }

        let ate_fruit = self
            .fruit
            .is_some_and(|f| self.snake.check_collision_with_fruit(f.position, f.size));

        if ate_fruit {
            self.snake.grow();
            self.score += 1;
            info!(score = self.score, length = self.snake.len(), "fruit eaten");
            self.fruit = self.spawn_fruit();
        }

        StepResult {
            terminated: false,
            info: StepInfo {
                ate_fruit,
                collision_type: None,
            },
        }
    }

    /// Step through `moves` until they run out or the snake dies
    pub fn run(&mut self, moves: &[Direction]) -> RunReport {
        for &direction in moves {
            if self.step(direction).terminated {
                break;
            }
        }
        self.report()
    }

    pub fn report(&self) -> RunReport {
        RunReport {
            steps: self.steps,
            score: self.score,
            alive: self.alive,
            collision_type: self.last_collision,
            snake: self.snake.clone(),
            fruit: self.fruit,
        }
    }

    fn check_collision(&self) -> Option<CollisionType> {
        if !self.snake.inside(&self.config.arena) {
            return Some(CollisionType::Wall);
        }

        if self.snake.check_collision_with_self() {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Centre a fruit in a random free cell of the grid the snake moves on
    fn spawn_fruit(&mut self) -> Option<Fruit> {
        let free = free_cells(&self.config, self.snake.blocks());
        let Some(&cell) = free.choose(&mut self.rng) else {
            warn!(length = self.snake.len(), "no free cell left for a fruit");
            return None;
        };

        let block = self.config.snake.block_size;
        let size = self.config.fruit_size;
        let position = cell.offset(
            (block.width - size.width) / 2,
            (block.height - size.height) / 2,
        );
        debug!(?position, "fruit spawned");

        Some(Fruit { position, size })
    }
}

/// Cells aligned with the starting head that lie in the arena and hold no block
fn free_cells(config: &GameConfig, body: &[Block]) -> Vec<Point> {
    let arena = config.arena;
    let block = config.snake.block_size;
    if block.width <= 0 || block.height <= 0 {
        return Vec::new();
    }

    let origin = Point::new(
        arena.top_left.x + (config.snake.head.x - arena.top_left.x).rem_euclid(block.width),
        arena.top_left.y + (config.snake.head.y - arena.top_left.y).rem_euclid(block.height),
    );

    let mut cells = Vec::new();
    let mut y = origin.y;
    while y + block.height <= arena.bottom_right.y {
        let mut x = origin.x;
        while x + block.width <= arena.bottom_right.x {
            let cell = Point::new(x, y);
            if !body.iter().any(|b| b.position() == cell) {
                cells.push(cell);
            }
            x += block.width;
        }
        y += block.height;
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::config::SnakeConfig;
    use crate::game::geometry::{Bounds, Color};

    fn seeded(config: GameConfig) -> GameEngine {
        GameEngine::new(GameConfig {
            seed: Some(1),
            ..config
        })
    }

    fn fruit_ahead(engine: &GameEngine, direction: Direction) -> Fruit {
        let (dx, dy) = direction.delta();
        let head = engine.snake().head_position().offset(dx, dy);
        Fruit {
            position: head.offset(10, 10),
            size: Size::new(10, 10),
        }
    }

    #[test]
    fn test_new_engine() {
        let engine = seeded(GameConfig::default());
        assert!(engine.is_alive());
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.steps(), 0);
        assert_eq!(engine.snake().len(), 1);

        let fruit = engine.fruit().unwrap();
        assert_eq!(fruit.size, Size::new(10, 10));
        assert_eq!((fruit.position.x - 10).rem_euclid(30), 100 % 30);
        assert_ne!(fruit.position, Point::new(110, 110));
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = seeded(GameConfig::default());
        engine.set_fruit(None);

        let result = engine.step(Direction::Right);
        assert!(!result.terminated);
        assert!(!result.info.ate_fruit);
        assert_eq!(engine.steps(), 1);
        assert_eq!(engine.snake().head_position(), Point::new(130, 100));

        engine.step(Direction::Down);
        assert_eq!(engine.snake().head_position(), Point::new(130, 130));
        assert_eq!(engine.snake().len(), 1);
    }

    #[test]
    fn test_fruit_consumption() {
        let mut engine = seeded(GameConfig::default());
        let fruit = fruit_ahead(&engine, Direction::Right);
        engine.set_fruit(Some(fruit));

        let result = engine.step(Direction::Right);

        assert!(result.info.ate_fruit);
        assert_eq!(engine.score(), 1);
        assert_eq!(engine.snake().len(), 2);
        assert_ne!(engine.fruit(), Some(fruit));

        // the new segment trails the head after the next move
        engine.set_fruit(None);
        engine.step(Direction::Right);
        assert_eq!(
            engine.snake().blocks()[1].position(),
            Point::new(130, 100)
        );
        assert!(engine.is_alive());
    }

    #[test]
    fn test_wall_collision() {
        let mut engine = seeded(GameConfig::new(150, 150));
        engine.set_fruit(None);

        let report = engine.run(&[Direction::Right, Direction::Right, Direction::Right]);

        // (130, 100) still overlaps the arena, (160, 100) does not
        assert!(!report.alive);
        assert_eq!(report.steps, 2);
        assert_eq!(report.collision_type, Some(CollisionType::Wall));
    }

    #[test]
    fn test_self_collision() {
        let mut engine = seeded(GameConfig::default());

        for _ in 0..4 {
            let fruit = fruit_ahead(&engine, Direction::Right);
            engine.set_fruit(Some(fruit));
            assert!(engine.step(Direction::Right).info.ate_fruit);
        }
        engine.set_fruit(None);
        assert_eq!(engine.snake().len(), 5);

        engine.step(Direction::Down);
        engine.step(Direction::Left);
        let result = engine.step(Direction::Up);

        assert!(result.terminated);
        assert_eq!(
            result.info.collision_type,
            Some(CollisionType::SelfCollision)
        );
    }

    #[test]
    fn test_prevent_180_degree_turn() {
        let mut engine = seeded(GameConfig::default());
        let fruit = fruit_ahead(&engine, Direction::Right);
        engine.set_fruit(Some(fruit));
        engine.step(Direction::Right);
        engine.set_fruit(None);

        engine.step(Direction::Left);
        assert_eq!(engine.snake().head_position(), Point::new(160, 100));
    }

    #[test]
    fn test_single_block_may_reverse() {
        let mut engine = seeded(GameConfig::default());
        engine.set_fruit(None);

        engine.step(Direction::Right);
        engine.step(Direction::Left);
        assert_eq!(engine.snake().head_position(), Point::new(100, 100));
    }

    #[test]
    fn test_terminated_game_no_update() {
        let mut engine = seeded(GameConfig::new(150, 150));
        engine.set_fruit(None);
        engine.run(&[Direction::Right, Direction::Right]);
        assert!(!engine.is_alive());
        let steps_before = engine.steps();

        let result = engine.step(Direction::Up);

        assert!(result.terminated);
        assert_eq!(result.info.collision_type, None);
        assert_eq!(engine.steps(), steps_before);
    }

    #[test]
    fn test_free_cells_align_with_head_and_skip_body() {
        let config = GameConfig {
            arena: Bounds::new(Point::new(0, 0), Point::new(90, 60)),
            ..GameConfig::default()
        };

        // head (100, 100) puts the grid at offset 10 on both axes
        let far_away = Snake::new(Point::new(400, 400), Size::new(30, 30), Color::GREEN);
        assert_eq!(
            free_cells(&config, far_away.blocks()),
            vec![Point::new(10, 10), Point::new(40, 10)]
        );

        let occupying = Snake::new(Point::new(40, 10), Size::new(30, 30), Color::GREEN);
        assert_eq!(
            free_cells(&config, occupying.blocks()),
            vec![Point::new(10, 10)]
        );
    }

    #[test]
    fn test_full_arena_has_no_fruit() {
        let config = GameConfig {
            snake: SnakeConfig {
                head: Point::new(0, 0),
                ..Default::default()
            },
            arena: Bounds::new(Point::new(0, 0), Point::new(30, 30)),
            seed: Some(3),
            ..GameConfig::default()
        };
        let engine = GameEngine::new(config);
        assert_eq!(engine.fruit(), None);
    }
}
