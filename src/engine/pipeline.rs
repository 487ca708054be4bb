use rand::rngs::StdRng;

use crate::board::{validate_roster, Board, BoardGenerator};
use crate::config::AmidaConfig;
use crate::engine::resolver::{outcomes, resolve, resolve_all, Outcome, WalkerPath};
use crate::error::Result;

/// Game session: Generate → Resolve, holding the latest snapshot.
///
/// Board and paths are replaced wholesale on every call. Each replacement
/// bumps `epoch`, which playbacks compare against to detect they are stale.
pub struct AmidaEngine {
    config: AmidaConfig,
    generator: BoardGenerator<StdRng>,
    board: Board,
    paths: Vec<WalkerPath>,
    epoch: u64,
}

impl AmidaEngine {
    /// Start a session with a board built from `config.names`.
    ///
    /// The initial board is generated even for a roster under two names
    /// (it simply carries no rungs).
    pub fn new(config: AmidaConfig) -> Self {
        let mut generator = match config.seed {
            Some(seed) => BoardGenerator::seeded(seed),
            None => BoardGenerator::from_os_rng(),
        };
        let board = generator.generate(&config.names, config.rung_count);
        Self {
            config,
            generator,
            board,
            paths: Vec::new(),
            epoch: 0,
        }
    }

    /// Build a fresh board. Refuses rosters under two names and keeps the
    /// current board and paths in that case.
    pub fn regenerate<S: AsRef<str>>(&mut self, names: &[S], rung_count: usize) -> Result<&Board> {
        if let Err(e) = validate_roster(names) {
            log::warn!("Regeneration refused: {}", e);
            return Err(e);
        }
        self.config = std::mem::take(&mut self.config)
            .with_names(names)
            .with_rung_count(rung_count);
        self.board = self
            .generator
            .generate(&self.config.names, self.config.rung_count);
        self.paths.clear();
        self.epoch += 1;
        log::info!(
            "Board regenerated: {} participants, {} rungs (epoch {})",
            self.board.line_count(),
            self.board.horizontal_lines.len(),
            self.epoch
        );
        for line in &self.board.vertical_lines {
            log::debug!("  {} {:?} {}", line.id, line.name, line.color.to_hex());
        }
        Ok(&self.board)
    }

    /// Column height of the 3D view, clamped to its input range.
    pub fn set_column_height(&mut self, height: u32) {
        self.config = std::mem::take(&mut self.config).with_column_height(height);
    }

    /// Resolve a single walker; it replaces any paths from earlier calls.
    pub fn start(&mut self, index: usize) -> Result<&[WalkerPath]> {
        let path = resolve(&self.board, index).inspect_err(|e| log::error!("{}", e))?;
        self.paths = vec![path];
        self.epoch += 1;
        Ok(&self.paths)
    }

    /// Resolve every walker at once.
    pub fn start_all(&mut self) -> &[WalkerPath] {
        self.paths = resolve_all(&self.board);
        self.epoch += 1;
        log::debug!("Resolved {} paths (epoch {})", self.paths.len(), self.epoch);
        &self.paths
    }

    /// Drop the current paths without touching the board.
    pub fn clear_paths(&mut self) {
        if !self.paths.is_empty() {
            self.paths.clear();
            self.epoch += 1;
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn paths(&self) -> &[WalkerPath] {
        &self.paths
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn config(&self) -> &AmidaConfig {
        &self.config
    }

    /// Result table for the current board.
    pub fn outcomes(&self) -> Vec<Outcome> {
        outcomes(&self.board)
    }
}
