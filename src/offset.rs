//! Direction pad: maps a pointer inside a square region to a bounded offset.
//!
//! The pad is a region with a round handle. The handle's center can travel
//! `reach = region / 2 - handle / 2` pixels from the region center on each
//! axis, and that travel is scaled linearly onto `[-max_offset, max_offset]`.

use serde::{Deserialize, Serialize};

/// A shadow displacement in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Clamp both axes to `[-bound, bound]`.
    pub fn clamped(self, bound: i32) -> Self {
        let bound = bound.abs();
        Self {
            x: self.x.clamp(-bound, bound),
            y: self.y.clamp(-bound, bound),
        }
    }
}

/// Geometry of the pad in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadGeometry {
    /// Region width in pixels
    pub width: f64,
    /// Region height in pixels
    pub height: f64,
    /// Handle diameter in pixels
    pub handle: f64,
    /// Largest offset magnitude on either axis
    pub max_offset: i32,
}

impl Default for PadGeometry {
    fn default() -> Self {
        Self {
            width: 140.0,
            height: 140.0,
            handle: 18.0,
            max_offset: 50,
        }
    }
}

impl PadGeometry {
    pub fn square(size: f64, handle: f64, max_offset: i32) -> Self {
        Self {
            width: size,
            height: size,
            handle,
            max_offset,
        }
    }

    fn reach(extent: f64, handle: f64) -> f64 {
        (extent / 2.0 - handle / 2.0).max(0.0)
    }

    /// Horizontal travel of the handle center from the region center.
    pub fn reach_x(&self) -> f64 {
        Self::reach(self.width, self.handle)
    }

    /// Vertical travel of the handle center from the region center.
    pub fn reach_y(&self) -> f64 {
        Self::reach(self.height, self.handle)
    }

    /// Whether a point (relative to the region's top-left) lies in the region.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }

    fn axis_to_offset(&self, position: f64, extent: f64, reach: f64) -> i32 {
        if reach <= 0.0 {
            return 0;
        }
        let max = f64::from(self.max_offset.abs());
        let displacement = (position - extent / 2.0).clamp(-reach, reach);
        (displacement / reach * max).round() as i32
    }

    fn axis_to_origin(&self, offset: i32, extent: f64, reach: f64) -> f64 {
        let max = self.max_offset.abs();
        if max == 0 {
            return extent / 2.0 - self.handle / 2.0;
        }
        let offset = offset.clamp(-max, max);
        f64::from(offset) / f64::from(max) * reach + extent / 2.0 - self.handle / 2.0
    }

    /// Map a pointer position (relative to the region's top-left) to an offset.
    ///
    /// Positions outside the region are clamped, never rejected.
    pub fn offset_at(&self, x: f64, y: f64) -> Offset {
        Offset {
            x: self.axis_to_offset(x, self.width, self.reach_x()),
            y: self.axis_to_offset(y, self.height, self.reach_y()),
        }
    }

    /// Top-left pixel position of the handle for an offset.
    ///
    /// `(0, 0)` centers the handle; `±max_offset` puts it against the edge.
    pub fn handle_origin(&self, offset: Offset) -> (f64, f64) {
        (
            self.axis_to_origin(offset.x, self.width, self.reach_x()),
            self.axis_to_origin(offset.y, self.height, self.reach_y()),
        )
    }

    /// Center pixel position of the handle for an offset.
    pub fn handle_center(&self, offset: Offset) -> (f64, f64) {
        let (x, y) = self.handle_origin(offset);
        (x + self.handle / 2.0, y + self.handle / 2.0)
    }
}

/// Whether a drag is in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Pointer-driven drag over a pad.
///
/// Each accepted pointer event returns the new offset; the caller owns
/// storing it wherever the offset lives.
#[derive(Debug, Clone)]
pub struct DragTracker {
    geometry: PadGeometry,
    state: DragState,
    offset: Offset,
}

impl DragTracker {
    pub fn new(geometry: PadGeometry, offset: Offset) -> Self {
        Self {
            geometry,
            state: DragState::Idle,
            offset: offset.clamped(geometry.max_offset),
        }
    }

    pub fn geometry(&self) -> &PadGeometry {
        &self.geometry
    }

    /// Replace the geometry, e.g. after the pad was laid out at a new size.
    pub fn set_geometry(&mut self, geometry: PadGeometry) {
        self.geometry = geometry;
        self.offset = self.offset.clamped(geometry.max_offset);
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == DragState::Dragging
    }

    /// Last offset produced by this tracker.
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Set the offset programmatically (e.g. from a slider or config).
    pub fn set_offset(&mut self, offset: Offset) {
        self.offset = offset.clamped(self.geometry.max_offset);
    }

    /// Start a drag. Presses outside the region are ignored.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> Option<Offset> {
        if !self.geometry.contains(x, y) {
            return None;
        }
        self.state = DragState::Dragging;
        Some(self.apply(x, y))
    }

    /// Follow the pointer while a drag is in progress.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<Offset> {
        match self.state {
            DragState::Dragging => Some(self.apply(x, y)),
            DragState::Idle => None,
        }
    }

    /// End the drag. Never produces an update.
    pub fn pointer_up(&mut self) -> Option<Offset> {
        if self.state == DragState::Dragging {
            tracing::debug!(offset = ?self.offset, "drag finished");
        }
        self.state = DragState::Idle;
        None
    }

    /// Move the offset by a step, clamped to the bound.
    pub fn nudge(&mut self, dx: i32, dy: i32) -> Offset {
        let moved = Offset::new(
            self.offset.x.saturating_add(dx),
            self.offset.y.saturating_add(dy),
        );
        self.offset = moved.clamped(self.geometry.max_offset);
        self.offset
    }

    fn apply(&mut self, x: f64, y: f64) -> Offset {
        self.offset = self.geometry.offset_at(x, y);
        self.offset
    }
}
