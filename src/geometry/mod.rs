//! Points of the plane, in either of two representations.
//!
//! A [`Point`] carries its representation in its variant, and conversion to the other one
//! happens only where some piece of math needs it. Cartesian points are plain euclid points in
//! [`WorldSpace`]; polar points are a radius and an [`Angle`] measured counterclockwise from the
//! positive `x` axis.

use {
  std::f64::consts::TAU,
  euclid::{Angle, Point2D, Vector2D}
};


/// Pixel coordinate basis. The origin is the top-left corner of a raster.
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;
/// World coordinate basis. `y` grows upwards.
#[derive(Debug, Copy, Clone)]
pub struct WorldSpace;

pub type Coordinate = f64;
pub type P2 = Point2D<Coordinate, WorldSpace>;
/// Translation offset, always cartesian.
pub type Vector = Vector2D<Coordinate, WorldSpace>;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PolarPoint {
  pub rho: Coordinate,
  pub theta: Angle<Coordinate>
}

impl PolarPoint {
  pub fn new(rho: Coordinate, theta: Angle<Coordinate>) -> Self {
    Self { rho, theta }
  }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Point {
  Cartesian(P2),
  Polar(PolarPoint)
}

impl Point {
  pub fn cartesian(x: Coordinate, y: Coordinate) -> Self {
    Point::Cartesian(P2::new(x, y))
  }

  pub fn polar(rho: Coordinate, theta: Angle<Coordinate>) -> Self {
    Point::Polar(PolarPoint::new(rho, theta))
  }

  pub fn is_polar(&self) -> bool {
    matches!(self, Point::Polar(_))
  }

  /// Polar form of the point, converting only if it is cartesian.
  pub fn to_polar(self) -> PolarPoint {
    match self {
      Point::Cartesian(p) => to_polar(p),
      Point::Polar(p) => p
    }
  }

  /// Cartesian form of the point, converting only if it is polar.
  pub fn to_cartesian(self) -> P2 {
    match self {
      Point::Cartesian(p) => p,
      Point::Polar(p) => from_polar(p)
    }
  }
}

impl From<P2> for Point {
  fn from(p: P2) -> Self { Point::Cartesian(p) }
}

impl From<PolarPoint> for Point {
  fn from(p: PolarPoint) -> Self { Point::Polar(p) }
}

/// Maps any angle into `[0, 2π)`.
pub fn normalize_angle(radians: Coordinate) -> Angle<Coordinate> {
  let angle = Angle::radians(radians).positive();
  // a tiny negative angle plus 2π rounds to exactly 2π
  if angle.radians >= TAU { Angle::zero() } else { angle }
}

/// ρ = √(x² + y²), θ = atan2(y, x) in `[0, 2π)`.
pub fn to_polar(p: P2) -> PolarPoint {
  PolarPoint {
    rho: p.to_vector().length(),
    theta: normalize_angle(p.y.atan2(p.x))
  }
}

/// x = ρ cos θ, y = ρ sin θ.
pub fn from_polar(p: PolarPoint) -> P2 {
  let (sin, cos) = p.theta.radians.sin_cos();
  P2::new(p.rho * cos, p.rho * sin)
}

/// Euclidean distance, independent of the representation of either point.
pub fn distance(p: Point, q: Point) -> Coordinate {
  p.to_cartesian().distance_to(q.to_cartesian())
}
