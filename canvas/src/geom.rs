#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in canvas space (CSS pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Move `t` of the way from `self` toward `target`.
    #[must_use]
    pub fn lerp(self, target: Point, t: f64) -> Point {
        Point {
            x: self.x + (target.x - self.x) * t,
            y: self.y + (target.y - self.y) * t,
        }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Strict containment: points exactly on an edge are outside.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x > self.x && pt.x < self.x + self.w && pt.y > self.y && pt.y < self.y + self.h
    }

    /// Grow the rectangle by `d` on every side.
    #[must_use]
    pub fn inflate(&self, d: f64) -> Rect {
        Rect {
            x: self.x - d,
            y: self.y - d,
            w: self.w + 2.0 * d,
            h: self.h + 2.0 * d,
        }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }
}
