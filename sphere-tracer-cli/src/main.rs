//
// Command-line front end: renders the sphere scene to an image file.
//

use std::path::Path;
use std::time::Instant;

use anyhow::*;
use clap::Parser;
use log::{info, LevelFilter};

use sphere_tracer_lib::{render, CanvasConfig, PointLight, Scene, Sphere, Tuple};

////////////////////////////////////////////////////////////////////////
// Command-line args

/// Program to render a Phong-shaded sphere to an image file
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File to write the output to (.ppm for plain-text PPM,
    /// anything else goes through the image crate)
    #[arg(short, long)]
    output: String,
    /// Output image width
    #[arg(short, long, default_value_t = 1000)]
    width: usize,
    /// Output image height
    #[arg(long, default_value_t = 1000)]
    height: usize,
    /// z coordinate of the projection wall
    #[arg(long, default_value_t = 10.0)]
    wall_z: f32,
    /// World-space size of the projection wall
    #[arg(long, default_value_t = 7.0)]
    wall_size: f32,
    /// Sphere colour as three 0-1 components
    #[arg(long, num_args = 3, value_names = ["R", "G", "B"],
          default_values_t = [1.0, 0.2, 1.0])]
    sphere_colour: Vec<f32>,
    /// Light position as three world coordinates
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"],
          default_values_t = [-10.0, 10.0, -10.0])]
    light: Vec<f32>,
    /// Log more (repeat for debug output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

////////////////////////////////////////////////////////////////////////
// Main code.
//

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    let width = args.width;
    assert!(16 <= width && width <= 16384);
    let height = args.height;
    assert!(16 <= height && height <= 16384);
    let wall_z = args.wall_z;
    assert!(1.0 <= wall_z && wall_z <= 1000.0);
    let wall_size = args.wall_size;
    assert!(0.1 <= wall_size && wall_size <= 1000.0);

    let mut scene = Scene::new();
    scene.add_light(PointLight::new(
        Tuple::colour(1.0, 1.0, 1.0, 1.0),
        Tuple::point(args.light[0], args.light[1], args.light[2]),
    ));

    let mut sphere = Sphere::new();
    sphere.material.colour = Tuple::colour(
        args.sphere_colour[0],
        args.sphere_colour[1],
        args.sphere_colour[2],
        1.0,
    );
    scene.add_sphere(sphere);

    let conf = CanvasConfig {
        width,
        height,
        wall_z,
        wall_size,
    };

    let start = Instant::now();
    let (canvas, stats) = render(&scene, &conf);
    info!(
        "{} of {} rays hit in {:.2?}",
        stats.rays_hit,
        stats.rays_cast,
        start.elapsed()
    );

    let path = Path::new(&args.output);
    if path.extension().and_then(|e| e.to_str()) == Some("ppm") {
        canvas.save_ppm(path)?;
    } else {
        let image =
            image::RgbaImage::from_raw(width as u32, height as u32, canvas.to_rgba8())
                .ok_or(anyhow!("Couldn't create image"))?;
        image.save(path)?;
    }
    info!("Wrote {}", args.output);

    Ok(())
}
