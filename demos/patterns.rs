use {
  functional_images::{
    color::Color,
    drawing,
    geometry::P2,
    image::{self, Image},
    raster::Viewport
  },
  anyhow::Result,
  euclid::{Box2D, Size2D, vec2},
  std::f64::consts::FRAC_PI_6
};

fn picture() -> Image {
  let ember = Color::new(0.9, 0.35, 0.1);
  let teal = Color::from_rgb8([32, 128, 140]);

  let spokes = image::polar_checker(0.2, 16, ember, teal)
    .rotate(FRAC_PI_6);
  let board = image::checker(0.25, Color::WHITE, Color::gray(0.15))
    .scale(1.5)
    .translate(vec2(0.125, 0.0));
  let halo = image::rings(P2::new(0.4, -0.3), 0.08, 0.6, 0.0);

  let pattern = image::cond(
    image::circle(P2::origin(), 0.8, true, false),
    spokes,
    image::darken(board, halo)
  );
  image::lighten(pattern, image::vertical_stripe(0.05, 0.5, 0.0).rotate(-FRAC_PI_6))
}

fn main() -> Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

  let path = "out.png";
  let viewport = Viewport::new(
    Size2D::new(1024, 768),
    Box2D::new(P2::new(-1.2, -0.9), P2::new(1.2, 0.9))
  )?;
  drawing::rasterize(&picture(), &viewport)?
    .save(path)?;
  log::info!("saved {}", path);
  open::that(path)?;
  Ok(())
}
