//! Geometry value types measured in points.

use serde::{Deserialize, Serialize};

/// Width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// The empty size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Round both axes outward to whole points.
    pub fn integral(self) -> Self {
        Self {
            width: self.width.ceil(),
            height: self.height.ceil(),
        }
    }

    /// True when either axis is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Insets on all four edges.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeInsets {
    /// Top inset.
    pub top: f64,
    /// Left inset.
    pub left: f64,
    /// Bottom inset.
    pub bottom: f64,
    /// Right inset.
    pub right: f64,
}

impl EdgeInsets {
    /// No insets.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create insets in top, left, bottom, right order.
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Insets with only the left edge set.
    pub const fn left(value: f64) -> Self {
        Self::new(0.0, value, 0.0, 0.0)
    }

    /// Insets with only the right edge set.
    pub const fn right(value: f64) -> Self {
        Self::new(0.0, 0.0, 0.0, value)
    }

    /// Sum of left and right.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Insets on the left and right edges only.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HorizontalEdgeInsets {
    /// Left inset.
    pub left: f64,
    /// Right inset.
    pub right: f64,
}

impl HorizontalEdgeInsets {
    /// No insets.
    pub const ZERO: Self = Self {
        left: 0.0,
        right: 0.0,
    };

    /// Create horizontal insets.
    pub const fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Sum of left and right.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }
}
