//! Geometric primitives for overlap and containment analysis.
//!
//! Rectangles live in page coordinate space (points, origin top-left). The
//! overlap-ratio operation here is the basis of the post-extraction
//! containment filter.

use serde::{Deserialize, Serialize};

/// A rectangle in page coordinate space.
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
    /// use pdf_harvest::geometry::Rect;
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
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_harvest::geometry::Rect;
    ///
    /// let rect = Rect::from_points(10.0, 20.0, 110.0, 70.0);
    /// assert_eq!(rect.width, 100.0);
    /// assert_eq!(rect.height, 50.0);
    /// ```
    pub fn from_points(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }

    /// Get the left edge x-coordinate.
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the top edge y-coordinate.
    pub fn top(&self) -> f32 {
        self.y
    }

    /// Get the bottom edge y-coordinate.
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Compute the area of the rectangle.
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Check if this rectangle intersects with another.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_harvest::geometry::Rect;
    ///
    /// let r1 = Rect::new(0.0, 0.0, 100.0, 100.0);
    /// let r2 = Rect::new(50.0, 50.0, 100.0, 100.0);
    /// let r3 = Rect::new(200.0, 200.0, 100.0, 100.0);
    ///
    /// assert!(r1.intersects(&r2));
    /// assert!(!r1.intersects(&r3));
    /// ```
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Compute the intersection of this rectangle with another.
    ///
    /// Returns `None` when the rectangles do not overlap.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.intersects(other) {
            return None;
        }
        let x0 = self.left().max(other.left());
        let y0 = self.top().max(other.top());
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        Some(Rect::from_points(x0, y0, x1, y1))
    }

    /// Check if this rectangle fully contains another.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_harvest::geometry::Rect;
    ///
    /// let page = Rect::new(0.0, 0.0, 612.0, 792.0);
    /// let inner = Rect::new(10.0, 10.0, 100.0, 100.0);
    ///
    /// assert!(page.contains(&inner));
    /// assert!(!inner.contains(&page));
    /// ```
    pub fn contains(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.top() >= self.top()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Intersection area divided by the smaller rectangle's area.
    ///
    /// Returns a value in [0, 1]: 1.0 means the smaller rectangle is fully
    /// contained in the larger one, 0.0 means no overlap. Degenerate
    /// rectangles (zero area) yield 0.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_harvest::geometry::Rect;
    ///
    /// let big = Rect::new(0.0, 0.0, 500.0, 500.0);
    /// let small = Rect::new(10.0, 10.0, 100.0, 100.0);
    ///
    /// assert_eq!(big.overlap_ratio(&small), 1.0);
    /// ```
    pub fn overlap_ratio(&self, other: &Rect) -> f32 {
        let smaller = self.area().min(other.area());
        if smaller <= 0.0 {
            return 0.0;
        }
        match self.intersection(other) {
            Some(overlap) => (overlap.area() / smaller).clamp(0.0, 1.0),
            None => 0.0,
        }
    }
}
