//! Transforms remap the sample point, then delegate to the source image.
//!
//! Moving an image forward means sampling it at the *inverse* transform of the point: an
//! image rotated by `φ` answers a sample at `p` with the source value at `p` rotated by `-φ`.

use {
  euclid::Angle,
  super::BaseImage,
  crate::{
    compose, lift,
    geometry::{self, Coordinate, Point, PolarPoint, Vector, P2}
  }
};

/// Rotates the image counterclockwise by `phi` radians about the origin.
/// The source is sampled at a polar point with its angle in `[0, 2π)`.
pub fn rotate<T: 'static>(image: BaseImage<T>, phi: Coordinate) -> BaseImage<T> {
  let phi = geometry::normalize_angle(phi).radians;
  let rho = |p: PolarPoint| p.rho;
  let theta = move |p: PolarPoint| geometry::normalize_angle(p.theta.radians - phi);
  let source = image.into_fn();
  let sample = move |radius: Coordinate, angle: Angle<Coordinate>|
    source(PolarPoint::new(radius, angle).into());

  BaseImage::new(compose!(
    Point::to_polar,
    lift!(sample, rho, theta)
  ))
}

pub fn translate<T: 'static>(image: BaseImage<T>, v: Vector) -> BaseImage<T> {
  BaseImage::new(compose!(
    Point::to_cartesian,
    move |p: P2| Point::from(p - v),
    image.into_fn()
  ))
}

/// Scales the image by `s` about the origin. `s == 0` is not guarded: coordinates become
/// infinite or NaN.
pub fn scale<T: 'static>(image: BaseImage<T>, s: Coordinate) -> BaseImage<T> {
  BaseImage::new(compose!(
    Point::to_cartesian,
    move |p: P2| Point::from(p / s),
    image.into_fn()
  ))
}
