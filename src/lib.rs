//! Infinite, continuous 2D images as pure functions of the plane.
//!
//! No pixels are stored anywhere: an [`Image`](image::Image) is a shared closure from a
//! [`Point`](geometry::Point) to a [`Color`](color::Color), evaluated only where it is sampled.
//! The same machinery gives [`Region`](image::Region)s (point to `bool`) and
//! [`Blend`](image::Blend)s (point to mixing fraction).
//!
//! The crate is split into:
//! - [`geometry`]: points in cartesian or polar form, converted only on demand;
//! - [`color`]: RGB values and linear blending;
//! - [`functional`]: the [`compose!`] and [`lift!`] combinators everything is built from;
//! - [`image`]: the lazy image type, with transforms, pattern generators and combinators;
//! - [`raster`]: sampling an image over a finite pixel lattice, in parallel;
//! - [`drawing`]: encoding samples as `image` crate pixels (requires the `drawing` feature).
//!
//! # Basic usage
//! ```
//! # use {
//! #   functional_images::{
//! #     color::Color,
//! #     geometry::{Point, P2},
//! #     image::{self, Image},
//! #   },
//! #   euclid::vec2,
//! #   std::f64::consts::FRAC_PI_4
//! # };
//! let red = Color::new(1.0, 0.0, 0.0);
//!
//! // a checkerboard, turned by 45 degrees and shifted to the right
//! let board: Image = image::checker(1.0, red, Color::WHITE)
//!   .rotate(FRAC_PI_4)
//!   .translate(vec2(2.0, 0.0));
//!
//! // darkened inside a disc, unchanged outside of it
//! let disc = image::circle(P2::new(2.0, 0.0), 0.5, 0.75, 0.0);
//! let picture = image::darken(board, disc);
//!
//! // nothing has been evaluated so far
//! assert_eq!(picture.sample(Point::cartesian(2.0, 0.1)), Color::new(0.25, 0.0, 0.0));
//! ```
//!
//! # Order of composition
//! [`compose!`] applies its arguments left to right. Transforms are pipelines written in that
//! order: the sample point is converted to whichever representation the math needs, remapped
//! by the inverse transform, and only then handed to the source image.
//!
//! # Parallelism
//! Every image is `Send + Sync` and free of shared mutable state, so
//! [`Viewport::sample`](raster::Viewport::sample) spreads the lattice over all available cores
//! with `rayon` without any coordination.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod geometry;
pub mod color;
pub mod functional;
pub mod image;
pub mod raster;
#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
pub mod drawing;
