pub mod pipeline;
pub mod resolver;

pub use pipeline::AmidaEngine;
pub use resolver::{outcomes, resolve, resolve_all, Outcome, WalkerPath};
