use {
  super::*,
  crate::{
    color::Color,
    image::{checker, circle}
  },
  anyhow::Result
};

fn square(side: u32, min: f64, max: f64) -> Result<Viewport> {
  Viewport::new(Size2D::new(side, side), Box2D::new(P2::splat(min), P2::splat(max)))
}

#[test_log::test] fn default_viewport() {
  let viewport = Viewport::default();
  assert_eq!(viewport.resolution(), Size2D::new(512, 512));
  assert_eq!(viewport.bounds(), Box2D::new(P2::new(-1.0, -1.0), P2::new(1.0, 1.0)));
  assert_eq!(viewport.pixel_count(), 512 * 512);
}

#[test_log::test] fn rejects_degenerate_viewports() {
  assert!(Viewport::default().with_resolution(Size2D::new(0, 16)).is_err());
  assert!(Viewport::default().with_resolution(Size2D::new(16, 0)).is_err());
  assert!(square(4, 1.0, 1.0).is_err());
  assert!(square(4, 1.0, -1.0).is_err());
  assert!(square(4, f64::NEG_INFINITY, 0.0).is_err());
  assert!(square(4, 0.0, f64::NAN).is_err());
}

#[test_log::test] fn builder_keeps_other_fields() -> Result<()> {
  let bounds = Box2D::new(P2::new(0.0, 0.0), P2::new(4.0, 2.0));
  let viewport = Viewport::default()
    .with_bounds(bounds)?
    .with_resolution(Size2D::new(8, 4))?;
  assert_eq!(viewport.bounds(), bounds);
  assert_eq!(viewport.resolution(), Size2D::new(8, 4));
  Ok(())
}

#[test_log::test] fn pixel_centers() -> Result<()> {
  let viewport = square(2, -1.0, 1.0)?;
  assert_eq!(viewport.to_world_space(Point2D::new(0, 0)), Point::cartesian(-0.5, 0.5));
  assert_eq!(viewport.to_world_space(Point2D::new(1, 0)), Point::cartesian(0.5, 0.5));
  assert_eq!(viewport.to_world_space(Point2D::new(0, 1)), Point::cartesian(-0.5, -0.5));
  assert_eq!(viewport.to_world_space(Point2D::new(1, 1)), Point::cartesian(0.5, -0.5));
  Ok(())
}

#[test_log::test] fn points_are_row_major() -> Result<()> {
  let viewport = Viewport::new(Size2D::new(3, 2), Box2D::new(P2::splat(0.0), P2::new(3.0, 2.0)))?;
  let pixels: Vec<_> = viewport.points().map(|(pixel, _)| (pixel.x, pixel.y)).collect();
  assert_eq!(pixels, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
  let (_, last) = viewport.points().last().unwrap();
  assert_eq!(last, Point::cartesian(2.5, 0.5));
  Ok(())
}

#[test_log::test] fn parallel_sampling_matches_sequential() -> Result<()> {
  let viewport = Viewport::new(Size2D::new(37, 23), Box2D::new(P2::new(-3.0, -2.0), P2::new(4.0, 5.0)))?;
  let image = checker(0.5, Color::WHITE, Color::BLACK).rotate(0.3);
  let sequential: Vec<_> = image.sample_iter(viewport.points().map(|(_, p)| p)).collect();
  assert_eq!(viewport.sample(&image), sequential);
  Ok(())
}

#[test_log::test] fn samples_region() -> Result<()> {
  let viewport = square(4, -2.0, 2.0)?;
  let samples = viewport.sample(&circle(P2::origin(), 1.0, true, false));
  #[rustfmt::skip]
  let expected = vec![
    false, false, false, false,
    false, true,  true,  false,
    false, true,  true,  false,
    false, false, false, false,
  ];
  assert_eq!(samples, expected);
  Ok(())
}
