//! Geometric primitives shared by the panel tree and the layout pass

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle for layout calculations
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Construct from two opposite corners
    pub fn from_edges(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x: x1,
            y: y1,
            width: x2 - x1,
            height: y2 - y1,
        }
    }

    /// Right edge
    pub fn x2(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn y2(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Replace the left edge, keeping the right edge fixed
    pub fn with_x1(self, x1: f32) -> Self {
        Self::from_edges(x1, self.y, self.x2(), self.y2())
    }

    /// Replace the right edge, keeping the left edge fixed
    pub fn with_x2(self, x2: f32) -> Self {
        Self::from_edges(self.x, self.y, x2, self.y2())
    }

    /// Replace the top edge, keeping the bottom edge fixed
    pub fn with_y1(self, y1: f32) -> Self {
        Self::from_edges(self.x, y1, self.x2(), self.y2())
    }

    /// Replace the bottom edge, keeping the top edge fixed
    pub fn with_y2(self, y2: f32) -> Self {
        Self::from_edges(self.x, self.y, self.x2(), y2)
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// Width/height pair for preferred panel sizes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}
