//! Page-space rectangles for positioned text runs.
//!
//! Fragments delivered by the renderer may carry the rectangle of their text
//! run. The searcher combines those rectangles into a single box covering
//! the matched text so callers can scroll to it or draw an overlay.

use serde::{Deserialize, Serialize};

/// A rectangle in page space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of top-left corner
    pub x: f32,
    /// Y coordinate of top-left corner
    pub y: f32,
    /// Width of rectangle
    pub width: f32,
    /// Height of rectangle
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlight::geometry::Rect;
    ///
    /// let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
    /// assert_eq!(rect.width, 100.0);
    /// assert_eq!(rect.height, 50.0);
    /// ```
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from two corner points.
    pub fn from_points(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge y-coordinate.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Smallest rectangle containing both `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_highlight::geometry::Rect;
    ///
    /// let line_one = Rect::new(72.0, 100.0, 40.0, 12.0);
    /// let line_two = Rect::new(72.0, 114.0, 25.0, 12.0);
    /// let both = line_one.union(&line_two);
    ///
    /// assert_eq!(both.x, 72.0);
    /// assert_eq!(both.right(), 112.0);
    /// assert_eq!(both.bottom(), 126.0);
    /// ```
    pub fn union(&self, other: &Rect) -> Rect {
        let x0 = self.x.min(other.x);
        let y0 = self.y.min(other.y);
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        Rect::from_points(x0, y0, x1, y1)
    }
}
