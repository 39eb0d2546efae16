//! Drag-the-ring-onto-the-finger engine.
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    pub threshold_px: f32,
    pub celebration_ms: u32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            threshold_px: 50.0,
            celebration_ms: 1_000,
        }
    }
}

impl DragConfig {
    /// # Errors
    ///
    /// Returns an error when the drop threshold is not positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threshold_px > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::NonPositive {
                field: "drag.threshold_px",
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Measured centres of the dragged object and the goal at release time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DropGeometry {
    pub object_center: Point,
    pub goal_center: Point,
}

impl DropGeometry {
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.object_center.distance_to(self.goal_center)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    Placed,
    SnappedBack,
    /// Geometry was unavailable, or the ring is already placed.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct DragGame {
    cfg: DragConfig,
    offset: Point,
    dragging: bool,
    placed: bool,
}

impl DragGame {
    #[must_use]
    pub const fn new(cfg: DragConfig) -> Self {
        Self {
            cfg,
            offset: Point::new(0.0, 0.0),
            dragging: false,
            placed: false,
        }
    }

    /// Offset of the object from its rest position.
    #[must_use]
    pub const fn offset(&self) -> Point {
        self.offset
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.placed
    }

    pub fn drag_to(&mut self, offset: Point) -> bool {
        if self.placed || !offset.x.is_finite() || !offset.y.is_finite() {
            return false;
        }
        self.dragging = true;
        self.offset = offset;
        true
    }

    pub fn release(&mut self, geometry: Option<DropGeometry>) -> ReleaseOutcome {
        if self.placed {
            return ReleaseOutcome::Ignored;
        }
        let Some(geometry) = geometry else {
            return ReleaseOutcome::Ignored;
        };
        self.dragging = false;
        if geometry.distance() < self.cfg.threshold_px {
            self.placed = true;
            ReleaseOutcome::Placed
        } else {
            self.offset = Point::default();
            ReleaseOutcome::SnappedBack
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(dx: f32, dy: f32) -> DropGeometry {
        DropGeometry {
            object_center: Point::new(100.0 + dx, 200.0 + dy),
            goal_center: Point::new(100.0, 200.0),
        }
    }

    #[test]
    fn release_near_goal_places_the_ring() {
        let mut game = DragGame::new(DragConfig::default());
        assert!(game.drag_to(Point::new(10.0, 140.0)));
        assert_eq!(game.release(Some(geometry(30.0, 39.0))), ReleaseOutcome::Placed);
        assert!(game.is_won());
        assert_eq!(game.release(Some(geometry(0.0, 0.0))), ReleaseOutcome::Ignored);
    }

    #[test]
    fn release_far_from_goal_snaps_back() {
        let mut game = DragGame::new(DragConfig::default());
        game.drag_to(Point::new(80.0, -20.0));
        assert_eq!(game.release(Some(geometry(30.0, 40.0))), ReleaseOutcome::SnappedBack);
        assert_eq!(game.offset(), Point::default());
        assert!(!game.is_won());
        assert!(!game.is_dragging());
    }

    #[test]
    fn missing_geometry_is_a_no_op() {
        let mut game = DragGame::new(DragConfig::default());
        game.drag_to(Point::new(5.0, 5.0));
        assert_eq!(game.release(None), ReleaseOutcome::Ignored);
        assert_eq!(game.offset(), Point::new(5.0, 5.0));
        assert!(game.is_dragging());
        assert!(!game.is_won());
    }
}
