//! Fire breath hazard owned by a fire-breathing monster.
//!
//! The fire has no logic of its own. Its owner shows it when it starts
//! breathing, hides it when it stops, and mirrors its facing onto it.

use digdug_common::Rect;
use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::movement::Facing;

/// Breath hazard marker.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Fire {
    visible: bool,
    position: Vec2,
    facing: Facing,
}

impl Fire {
    /// Creates a hidden fire.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the fire at `position`.
    pub fn show(&mut self, position: Vec2) {
        self.visible = true;
        self.position = position;
    }

    /// Hides the fire.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Sets the facing.
    pub fn set_facing(&mut self, facing: Facing) {
        self.facing = facing;
    }

    /// Whether the fire is currently a hazard.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Top-left pixel position.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Current facing.
    #[must_use]
    pub const fn facing(&self) -> Facing {
        self.facing
    }

    /// Bounding rectangle, or `None` while hidden.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.visible.then(|| Rect::tile_at(self.position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_fire_has_no_bounds() {
        let fire = Fire::new();
        assert!(!fire.is_visible());
        assert_eq!(fire.bounds(), None);
    }

    #[test]
    fn test_show_and_hide() {
        let mut fire = Fire::new();
        fire.show(Vec2::new(168.0, 56.0));

        assert!(fire.is_visible());
        assert_eq!(fire.bounds(), Some(Rect::new(168.0, 56.0, 56.0, 56.0)));

        fire.hide();
        assert!(!fire.is_visible());
        assert_eq!(fire.position(), Vec2::new(168.0, 56.0));
    }
}
