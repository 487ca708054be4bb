pub mod animator;
pub mod color;
pub mod flat;

#[cfg(feature = "spatial")]
pub mod spatial;

/// Presentation of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Flat ladder, all walkers start together
    #[default]
    Flat,
    /// Lines around a rotatable cylinder, one walker at a time
    Spatial3D,
}

impl RenderMode {
    /// Heading shown above the board.
    pub fn title(self) -> &'static str {
        match self {
            RenderMode::Flat => "2D あみだくじ",
            RenderMode::Spatial3D => "3D あみだくじ",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            RenderMode::Flat => RenderMode::Spatial3D,
            RenderMode::Spatial3D => RenderMode::Flat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_round_trips() {
        assert_eq!(RenderMode::default(), RenderMode::Flat);
        assert_eq!(RenderMode::Flat.toggled(), RenderMode::Spatial3D);
        assert_eq!(RenderMode::Flat.toggled().toggled(), RenderMode::Flat);
        assert_ne!(RenderMode::Flat.title(), RenderMode::Spatial3D.title());
    }
}
