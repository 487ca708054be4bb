pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod render;

pub use board::{Board, Goal, HorizontalLine, LineId, Point, RungId, VerticalLine};
pub use config::AmidaConfig;
pub use engine::{resolve, resolve_all, AmidaEngine, WalkerPath};
pub use error::{AmidaError, Result};
