//! Per-point combinations of several images.

use {
  super::{BaseImage, Blend, Image, Region, generator::constant},
  crate::{
    lift,
    color::{Color, Fraction, Mix},
    geometry::Point
  }
};

/// Samples `this_way` where `region` holds, `that_way` elsewhere. Only the selected branch is
/// evaluated.
pub fn cond<T: 'static>(region: Region, this_way: BaseImage<T>, that_way: BaseImage<T>) -> BaseImage<T> {
  BaseImage::new(move |p: Point|
    if region.sample(p) { this_way.sample(p) } else { that_way.sample(p) }
  )
}

/// `this_way(p).weighted_mean(that_way(p), blend(p))`.
pub fn lerp<T>(blend: Blend, this_way: BaseImage<T>, that_way: BaseImage<T>) -> BaseImage<T>
  where T: Mix + 'static {
  let mix = |w: Fraction, a: T, b: T| a.weighted_mean(&b, w);
  BaseImage::new(lift!(mix, blend.into_fn(), this_way.into_fn(), that_way.into_fn()))
}

/// Fades toward black by the blend fraction.
pub fn darken(image: Image, blend: Blend) -> Image {
  lerp(blend, image, constant(Color::BLACK))
}

/// Fades toward white by the blend fraction.
pub fn lighten(image: Image, blend: Blend) -> Image {
  lerp(blend, image, constant(Color::WHITE))
}
