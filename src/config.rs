//! Session configuration.

/// Names the board starts with before the user edits the roster.
pub const DEFAULT_NAMES: &[&str] = &["A", "B", "C", "D", "E"];
/// Rungs placed per generation unless the user asks otherwise.
pub const DEFAULT_RUNG_COUNT: usize = 20;
/// Upper bound of the rung-count input.
pub const MAX_RUNG_COUNT: usize = 100;
/// 3D column height, in input units.
pub const DEFAULT_COLUMN_HEIGHT: u32 = 15;
pub const MIN_COLUMN_HEIGHT: u32 = 5;
pub const MAX_COLUMN_HEIGHT: u32 = 50;

/// Cursor advance per frame when every walker animates at once (2D).
pub const FLAT_SPEED: f64 = 0.005;
/// Cursor advance per frame for a single walker (3D).
pub const SPATIAL_SPEED: f64 = 0.05;

/// Tunables for one game session.
#[derive(Debug, Clone, PartialEq)]
pub struct AmidaConfig {
    pub names: Vec<String>,
    pub rung_count: usize,
    pub column_height: u32,
    pub flat_speed: f64,
    pub spatial_speed: f64,
    /// Fixed seed for reproducible boards; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for AmidaConfig {
    fn default() -> Self {
        Self {
            names: DEFAULT_NAMES.iter().map(|s| s.to_string()).collect(),
            rung_count: DEFAULT_RUNG_COUNT,
            column_height: DEFAULT_COLUMN_HEIGHT,
            flat_speed: FLAT_SPEED,
            spatial_speed: SPATIAL_SPEED,
            seed: None,
        }
    }
}

impl AmidaConfig {
    pub fn with_names<S: AsRef<str>>(mut self, names: &[S]) -> Self {
        self.names = names.iter().map(|s| s.as_ref().to_string()).collect();
        self
    }

    /// Exact rung count. [`MAX_RUNG_COUNT`] bounds the input widget only.
    pub fn with_rung_count(mut self, rung_count: usize) -> Self {
        self.rung_count = rung_count;
        self
    }

    pub fn with_column_height(mut self, height: u32) -> Self {
        self.column_height = height.clamp(MIN_COLUMN_HEIGHT, MAX_COLUMN_HEIGHT);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Roster text as shown in the input box, one name per line.
    pub fn names_text(&self) -> String {
        self.names.join("\n")
    }
}
