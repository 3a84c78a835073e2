//! Encoding sampled values as `image` crate pixels.
//!
//! ```no_run
//! # use {
//! #   functional_images::{
//! #     drawing::rasterize,
//! #     image::{polar_checker, lighten, rings},
//! #     raster::Viewport,
//! #     color::Color,
//! #     geometry::P2
//! #   },
//! #   anyhow::Result
//! # };
//! # fn main() -> Result<()> {
//! let picture = lighten(
//!   polar_checker(0.25, 12, Color::new(0.9, 0.2, 0.1), Color::BLACK),
//!   rings(P2::origin(), 0.1, 0.0, 0.5)
//! );
//! rasterize(&picture, &Viewport::default())?
//!   .save("out.png")?;
//! # Ok(())
//! # }
//! ```

use {
  std::time::Instant,
  anyhow::{Context, Result},
  image::{ImageBuffer, Luma, Pixel, Rgb},
  crate::{
    color::{Color, Fraction},
    image::BaseImage,
    raster::Viewport
  }
};


/// Values with an 8-bit pixel representation.
pub trait Encode {
  type Pixel: Pixel<Subpixel = u8> + 'static;
  fn encode(&self) -> Self::Pixel;
}

impl Encode for Color {
  type Pixel = Rgb<u8>;
  fn encode(&self) -> Rgb<u8> { Rgb(self.to_rgb8()) }
}

/// Members of a region are white.
impl Encode for bool {
  type Pixel = Luma<u8>;
  fn encode(&self) -> Luma<u8> { Luma([if *self { 255 } else { 0 }]) }
}

/// Fractions are clamped into `[0, 1]` and drawn as gray levels.
impl Encode for Fraction {
  type Pixel = Luma<u8>;
  fn encode(&self) -> Luma<u8> { Luma([(self.clamp(0.0, 1.0) * 255.0).round() as u8]) }
}

impl From<Color> for Rgb<u8> {
  fn from(color: Color) -> Self { color.encode() }
}

/// Samples `image` over `viewport` and packs the encoded samples into a raster.
pub fn rasterize<T>(image: &BaseImage<T>, viewport: &Viewport) -> Result<ImageBuffer<T::Pixel, Vec<u8>>>
  where T: Encode + Send {
  let t0 = Instant::now();
  let resolution = viewport.resolution();
  let raw: Vec<u8> = viewport.sample(image)
    .iter()
    .flat_map(|value| value.encode().channels().to_vec())
    .collect();
  let raster = ImageBuffer::from_raw(resolution.width, resolution.height, raw)
    .context("encoded samples do not fill the viewport")?;
  log::debug!("rasterized {}x{} in {}ms", resolution.width, resolution.height, t0.elapsed().as_millis());
  Ok(raster)
}
