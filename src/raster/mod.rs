//! Sampling an image over a finite lattice of points.
//!
//! Every image is a pure function, so the lattice is evaluated in parallel with no
//! coordination between workers.

use {
  std::{mem, time::Instant},
  anyhow::{Result, ensure},
  euclid::{Box2D, Point2D, Size2D},
  humansize::{FileSize, file_size_opts as options},
  rayon::prelude::*,
  crate::{
    geometry::{Coordinate, PixelSpace, Point, WorldSpace, P2},
    image::BaseImage
  }
};

#[cfg(test)] mod tests;

/// A `resolution`-sized pixel lattice laid over the `bounds` rectangle of world space.
///
/// Pixel rows run top to bottom, while world `y` grows upwards: row `0` samples near
/// `bounds.max.y`. Each pixel is sampled at its center.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
  resolution: Size2D<u32, PixelSpace>,
  bounds: Box2D<Coordinate, WorldSpace>
}

/// 512×512 pixels over `[-1, 1]²`.
impl Default for Viewport {
  fn default() -> Self {
    Self {
      resolution: Size2D::new(512, 512),
      bounds: Box2D::new(P2::splat(-1.0), P2::splat(1.0))
    }
  }
}

impl Viewport {
  pub fn new(
    resolution: Size2D<u32, PixelSpace>,
    bounds: Box2D<Coordinate, WorldSpace>
  ) -> Result<Self> {
    Self::default()
      .with_resolution(resolution)?
      .with_bounds(bounds)
  }

  pub fn with_resolution(self, resolution: Size2D<u32, PixelSpace>) -> Result<Self> {
    ensure!(
      resolution.width > 0 && resolution.height > 0,
      "viewport resolution must be non-zero, got {}x{}", resolution.width, resolution.height
    );
    Ok(Self { resolution, ..self })
  }

  pub fn with_bounds(self, bounds: Box2D<Coordinate, WorldSpace>) -> Result<Self> {
    ensure!(
      [bounds.min.x, bounds.min.y, bounds.max.x, bounds.max.y].iter().all(|c| c.is_finite()),
      "viewport bounds must be finite, got {:?}", bounds
    );
    ensure!(
      bounds.max.x > bounds.min.x && bounds.max.y > bounds.min.y,
      "viewport bounds must have a positive area, got {:?}", bounds
    );
    Ok(Self { bounds, ..self })
  }

  pub fn resolution(&self) -> Size2D<u32, PixelSpace> {
    self.resolution
  }

  pub fn bounds(&self) -> Box2D<Coordinate, WorldSpace> {
    self.bounds
  }

  pub fn pixel_count(&self) -> usize {
    self.resolution.width as usize * self.resolution.height as usize
  }

  /// World point at the center of `pixel`.
  pub fn to_world_space(&self, pixel: Point2D<u32, PixelSpace>) -> Point {
    let size = self.bounds.size();
    let resolution = self.resolution.to_f64();
    Point::cartesian(
      self.bounds.min.x + (pixel.x as Coordinate + 0.5) * size.width / resolution.width,
      self.bounds.max.y - (pixel.y as Coordinate + 0.5) * size.height / resolution.height
    )
  }

  /// All pixels in row-major order, paired with their sample points.
  pub fn points(&self) -> impl Iterator<Item = (Point2D<u32, PixelSpace>, Point)> + '_ {
    itertools::iproduct!(0..self.resolution.height, 0..self.resolution.width)
      .map(move |(y, x)| {
        let pixel = Point2D::new(x, y);
        (pixel, self.to_world_space(pixel))
      })
  }

  fn pixel_at(&self, index: usize) -> Point2D<u32, PixelSpace> {
    let width = self.resolution.width as usize;
    Point2D::new((index % width) as u32, (index / width) as u32)
  }

  /// Samples `image` at every pixel center, in parallel. The result is row-major.
  pub fn sample<T: Send>(&self, image: &BaseImage<T>) -> Vec<T> {
    let t0 = Instant::now();
    let samples: Vec<T> = (0..self.pixel_count())
      .into_par_iter()
      .map(|index| image.sample(self.to_world_space(self.pixel_at(index))))
      .collect();
    log::debug!(
      "sampled {}x{} lattice ({}) in {}ms",
      self.resolution.width,
      self.resolution.height,
      (samples.len() * mem::size_of::<T>()).file_size(options::BINARY).unwrap_or_else(|e| e),
      t0.elapsed().as_millis()
    );
    samples
  }
}
