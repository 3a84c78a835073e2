//! RGB colors and the linear blend every [`lerp`](crate::image::combinator::lerp) relies on.

use num_traits::Float;


/// Mixing fraction: `0` keeps the first operand, `1` yields the second. Never clamped.
pub type Fraction = f64;

/// Three channel intensities, nominally in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Color {
  pub r: f64,
  pub g: f64,
  pub b: f64
}

impl Color {
  pub const BLACK: Color = Color::gray(0.0);
  pub const WHITE: Color = Color::gray(1.0);

  pub const fn new(r: f64, g: f64, b: f64) -> Self {
    Self { r, g, b }
  }

  pub const fn gray(intensity: f64) -> Self {
    Self::new(intensity, intensity, intensity)
  }

  pub fn from_rgb8([r, g, b]: [u8; 3]) -> Self {
    Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
  }

  /// Channels are clamped into `[0, 1]` before quantization.
  pub fn to_rgb8(self) -> [u8; 3] {
    let quantize = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    [quantize(self.r), quantize(self.g), quantize(self.b)]
  }

  /// `self * (1 - fraction) + other * fraction`, componentwise.
  pub fn weighted_mean(&self, other: &Color, fraction: Fraction) -> Color {
    Color {
      r: self.r.weighted_mean(&other.r, fraction),
      g: self.g.weighted_mean(&other.g, fraction),
      b: self.b.weighted_mean(&other.b, fraction)
    }
  }
}

/// Values that can be linearly blended.
pub trait Mix {
  fn weighted_mean(&self, other: &Self, fraction: Fraction) -> Self;
}

impl Mix for Color {
  fn weighted_mean(&self, other: &Self, fraction: Fraction) -> Self {
    Color::weighted_mean(self, other, fraction)
  }
}

impl<F: Float> Mix for F {
  fn weighted_mean(&self, other: &Self, fraction: Fraction) -> Self {
    let w = F::from(fraction).unwrap_or_else(F::nan);
    *self * (F::one() - w) + *other * w
  }
}
