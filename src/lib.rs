//! Snake Body - the body and movement core of a grid-based Snake game
//!
//! This library provides:
//! - The snake entity: a chain of fixed-size blocks that follows its head,
//!   grows, and answers bounds and collision queries (game module)
//! - A reference tick driver and JSON configuration (game module)
//! - Tracing setup for the command-line replay tool (logging module)

pub mod game;
pub mod logging;
