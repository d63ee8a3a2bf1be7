use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
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
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// The point `radius` away from `self` in direction `angle`.
    #[must_use]
    pub fn offset(&self, radius: f32, angle: f32) -> Self {
        Self {
            x: self.x + radius * angle.cos(),
            y: self.y + radius * angle.sin(),
        }
    }

    #[must_use]
    pub const fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl From<[f32; 2]> for Point {
    fn from(pos: [f32; 2]) -> Self {
        Self::new(pos[0], pos[1])
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Polar {
    pub radius: f32,
    /// [0, 2π)
    pub angle: f32,
}

/// Polar coordinates of `point` around `origin`. The origin itself is `(0, 0)`.
#[must_use]
pub fn to_polar(point: Point, origin: Point) -> Polar {
    let dx = point.x - origin.x;
    let dy = point.y - origin.y;
    if dx == 0.0 && dy == 0.0 {
        return Polar::default();
    }

    let radius = dx.hypot(dy);
    let angle = dy.atan2(dx).rem_euclid(TAU);
    // rem_euclid can round a tiny negative angle up to exactly TAU
    let angle = if angle >= TAU { 0.0 } else { angle };
    Polar { radius, angle }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn origin_is_zero() {
        let origin = Point::new(100.0, 100.0);
        assert_eq!(to_polar(origin, origin), Polar::default());
    }

    #[test]
    fn cardinal_directions() {
        let origin = Point::new(100.0, 100.0);
        let east = to_polar(Point::new(150.0, 100.0), origin);
        assert_eq!(east.radius, 50.0);
        assert_eq!(east.angle, 0.0);

        let south = to_polar(Point::new(100.0, 130.0), origin);
        assert!((south.angle - FRAC_PI_2).abs() < 1e-6);

        let west = to_polar(Point::new(90.0, 100.0), origin);
        assert!((west.angle - PI).abs() < 1e-6);
    }

    #[test]
    fn negative_angles_are_normalised() {
        let polar = to_polar(Point::new(100.0, 90.0), Point::new(100.0, 100.0));
        assert!((polar.angle - 3.0 * FRAC_PI_2).abs() < 1e-5);
        assert!(polar.angle < TAU);
    }
}
