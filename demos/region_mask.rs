use {
  functional_images::{
    drawing,
    geometry::P2,
    image::{self, Region},
    raster::Viewport
  },
  anyhow::Result,
  euclid::vec2
};

/// Three overlapping discs, xor-ed together.
fn mask() -> Region {
  let disc = |x: f64, y: f64| image::circle(P2::new(x, y), 0.45, true, false);
  let xor = |a: Region, b: Region| image::cond(a, image::cond(b.clone(), image::constant(false), image::constant(true)), b);
  let pair = xor(disc(-0.25, 0.15), disc(0.25, 0.15));
  xor(pair, disc(0.0, -0.3)).translate(vec2(0.0, 0.05))
}

fn main() -> Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let path = "mask.png";
  drawing::rasterize(&mask(), &Viewport::default())?
    .save(path)?;
  log::info!("saved {}", path);
  open::that(path)?;
  Ok(())
}
