//! Pattern generators. Each one is a function of the sample point alone, generic over the
//! value type, so the same pattern serves as an [`Image`](super::Image), a
//! [`Region`](super::Region) or a [`Blend`](super::Blend).
//!
//! Boundaries are decided with exact float comparisons.

use {
  std::f64::consts::TAU,
  super::{BaseImage, transform},
  crate::{
    compose, lift,
    geometry::{self, Coordinate, Point, PolarPoint, P2}
  }
};

fn choose<T: Clone>(this_way: T, that_way: T) -> impl Fn(bool) -> T + Clone {
  move |b| if b { this_way.clone() } else { that_way.clone() }
}

/// Ignores the sample point.
pub fn constant<T>(t: T) -> BaseImage<T>
  where T: Clone + Send + Sync + 'static {
  BaseImage::new(move |_| t.clone())
}

/// `inner` within `radius` of `center`, boundary included; `outer` elsewhere.
pub fn circle<T>(center: impl Into<Point>, radius: Coordinate, inner: T, outer: T) -> BaseImage<T>
  where T: Clone + Send + Sync + 'static {
  let center: Point = center.into();
  BaseImage::new(compose!(
    move |p: Point| geometry::distance(p, center) <= radius,
    choose(inner, outer)
  ))
}

/// Checkerboard with `d`-sized cells; the cell `[0, d) × [0, d)` is `this_way`.
pub fn checker<T>(d: Coordinate, this_way: T, that_way: T) -> BaseImage<T>
  where T: Clone + Send + Sync + 'static {
  let cell = move |c: Coordinate| (c / d).floor();
  let even = |i: Coordinate, j: Coordinate| (i + j).rem_euclid(2.0) == 0.0;

  BaseImage::new(compose!(
    Point::to_cartesian,
    lift!(even, move |p: P2| cell(p.x), move |p: P2| cell(p.y)),
    choose(this_way, that_way)
  ))
}

/// Concentric rings of width `d` around `center`, starting with a `this_way` disc.
pub fn rings<T>(center: impl Into<Point>, d: Coordinate, this_way: T, that_way: T) -> BaseImage<T>
  where T: Clone + Send + Sync + 'static {
  let radial = BaseImage::new(compose!(
    Point::to_polar,
    |p: PolarPoint| Point::cartesian(p.rho, 0.0),
    checker(d, this_way, that_way).into_fn()
  ));
  let center: Point = center.into();
  transform::translate(radial, center.to_cartesian().to_vector())
}

/// Checkerboard in polar space: radial bands of width `d` crossed with `n` equal angular
/// sectors. `n` must be even for the first and last sectors to alternate.
pub fn polar_checker<T>(d: Coordinate, n: u32, this_way: T, that_way: T) -> BaseImage<T>
  where T: Clone + Send + Sync + 'static {
  debug_assert!(n % 2 == 0, "polar_checker needs an even sector count, got {}", n);
  // one sector spans exactly one cell of the underlying checker
  let sector = d * n as Coordinate / TAU;

  BaseImage::new(compose!(
    Point::to_polar,
    move |p: PolarPoint| Point::cartesian(p.rho, p.theta.radians * sector),
    checker(d, this_way, that_way).into_fn()
  ))
}

/// `this_way` where `-d/2 <= x <= d/2`.
pub fn vertical_stripe<T>(d: Coordinate, this_way: T, that_way: T) -> BaseImage<T>
  where T: Clone + Send + Sync + 'static {
  BaseImage::new(compose!(
    Point::to_cartesian,
    move |p: P2| p.x.abs() <= d / 2.0,
    choose(this_way, that_way)
  ))
}
