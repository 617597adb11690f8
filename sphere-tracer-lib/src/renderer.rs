//
// renderer.rs: Display-independent rendering of the scene. Casts one
// ray per pixel at a wall behind the scene and shades the nearest
// hit.
//

use rayon::prelude::*;

use crate::canvas::Canvas;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::tuple::{Colour, Tuple};

/// Where the eye sits; rays fan out from here towards the wall.
const RAY_ORIGIN: (f32, f32, f32) = (0.0, 0.0, -5.0);

/// Configuration for the canvas we expect. `render` then returns a
/// filled-in canvas of that size.
#[derive(Clone, Copy, Debug)]
pub struct CanvasConfig {
    /// Width and height in pixels.
    pub width: usize,
    pub height: usize,
    /// z coordinate of the projection wall behind the scene.
    pub wall_z: f32,
    /// World-space extent of the wall (it is square).
    pub wall_size: f32,
}

impl Default for CanvasConfig {
    fn default() -> CanvasConfig {
        CanvasConfig {
            width: 1000,
            height: 1000,
            wall_z: 10.0,
            wall_size: 7.0,
        }
    }
}

/// Counters from a render pass.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderStats {
    pub rays_cast: u64,
    pub rays_hit: u64,
}

/// Render a whole scene by casting a ray through every pixel. Rows
/// are independent, so they run across the rayon pool and each
/// writes its own disjoint slice of the output.
pub fn render(scene: &Scene, conf: &CanvasConfig) -> (Canvas, RenderStats) {
    let origin = Tuple::point(RAY_ORIGIN.0, RAY_ORIGIN.1, RAY_ORIGIN.2);
    let half = conf.wall_size / 2.0;
    let pixel_size = conf.wall_size / conf.width as f32;
    let black = Tuple::colour(0.0, 0.0, 0.0, 1.0);

    let render_row = |y: usize| {
        let world_y = half - pixel_size * y as f32;
        let mut row = Vec::with_capacity(conf.width);
        let mut hits = 0u64;
        for x in 0..conf.width {
            let world_x = -half + pixel_size * x as f32;
            let wall_point = Tuple::point(world_x, world_y, conf.wall_z);
            let ray = Ray::new(origin, wall_point.sub(origin).normalize());

            match scene.colour_at(&ray) {
                Some(colour) => {
                    hits += 1;
                    row.push(colour);
                }
                None => row.push(black),
            }
        }
        (row, hits)
    };

    let rows: Vec<(Vec<Colour>, u64)> = (0..conf.height).into_par_iter().map(render_row).collect();

    let mut pixels = Vec::with_capacity(conf.width * conf.height);
    let mut stats = RenderStats::default();
    for (row, hits) in rows {
        pixels.extend(row);
        stats.rays_hit += hits;
    }
    stats.rays_cast = (conf.width * conf.height) as u64;

    (Canvas::from_pixels(conf.width, conf.height, pixels), stats)
}
