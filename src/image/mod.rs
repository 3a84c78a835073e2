//! Lazy images: pure functions from the plane to a value.
//!
//! A [`BaseImage`] stores nothing but the closure it was built from. It is defined over the
//! whole plane, evaluated only when sampled, and never caches. Cloning one is a reference-count
//! bump, so the same sub-image can feed any number of combinators.

use {
  std::{fmt, sync::Arc},
  crate::{
    color::Color,
    geometry::{Coordinate, Point, Vector}
  }
};

pub mod transform;
pub mod generator;
pub mod combinator;

pub use {
  crate::color::Fraction,
  transform::{rotate, translate, scale},
  generator::{constant, circle, checker, rings, polar_checker, vertical_stripe},
  combinator::{cond, lerp, darken, lighten}
};

pub struct BaseImage<T>(Arc<dyn Fn(Point) -> T + Send + Sync>);

pub type Region = BaseImage<bool>;
pub type Image = BaseImage<Color>;
pub type Blend = BaseImage<Fraction>;

impl<T> BaseImage<T> {
  pub fn new(f: impl Fn(Point) -> T + Send + Sync + 'static) -> Self {
    Self(Arc::new(f))
  }

  #[inline]
  pub fn sample(&self, p: impl Into<Point>) -> T {
    (self.0)(p.into())
  }

  /// Lazily samples every point of `points`, which may be infinite.
  pub fn sample_iter<'a>(&'a self, points: impl IntoIterator<Item = Point> + 'a) -> impl Iterator<Item = T> + 'a {
    points.into_iter().map(move |p| self.sample(p))
  }

  /// The image as a plain function, for use as a pipeline stage.
  pub fn into_fn(self) -> impl Fn(Point) -> T + Clone + Send + Sync {
    move |p| self.sample(p)
  }
}

impl<T: 'static> BaseImage<T> {
  /// See [`transform::rotate`].
  pub fn rotate(self, phi: Coordinate) -> Self {
    transform::rotate(self, phi)
  }

  /// See [`transform::translate`].
  pub fn translate(self, v: Vector) -> Self {
    transform::translate(self, v)
  }

  /// See [`transform::scale`].
  pub fn scale(self, s: Coordinate) -> Self {
    transform::scale(self, s)
  }
}

impl<T> Clone for BaseImage<T> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}

impl<T> fmt::Debug for BaseImage<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("BaseImage")
      .field(&std::any::type_name::<T>())
      .finish()
  }
}
