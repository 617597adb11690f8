//
// canvas.rs: The output colour buffer and its conversions to 8-bit
// raster formats.
//

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Result;

use crate::tuple::{Colour, Tuple};

/// A width x height buffer of colours, row-major, top row first.
/// Colours stay unconstrained floats until one of the 8-bit
/// conversions clamps and scales them.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Colour>,
}

impl Canvas {
    /// A canvas of the given size, initialized to black.
    pub fn new(width: usize, height: usize) -> Canvas {
        Canvas {
            width,
            height,
            pixels: vec![Tuple::colour(0.0, 0.0, 0.0, 1.0); width * height],
        }
    }

    /// Wrap an existing row-major pixel buffer. The buffer length
    /// must be width * height.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Colour>) -> Canvas {
        assert_eq!(pixels.len(), width * height);
        Canvas {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_at(&self, x: usize, y: usize) -> Colour {
        self.pixels[y * self.width + x]
    }

    pub fn write_pixel(&mut self, x: usize, y: usize, colour: Colour) {
        self.pixels[y * self.width + x] = colour;
    }

    // Clamp a component to [0, 1] and scale to the 0..=255 range.
    fn to_byte(component: f32) -> u8 {
        (component.clamp(0.0, 1.0) * 255.0) as u8
    }

    /// Clamped-and-scaled RGB triples, row-major.
    pub fn to_rgb8(&self) -> Vec<[u8; 3]> {
        self.pixels
            .iter()
            .map(|p| {
                [
                    Canvas::to_byte(p.r()),
                    Canvas::to_byte(p.g()),
                    Canvas::to_byte(p.b()),
                ]
            })
            .collect()
    }

    /// Flat RGBA bytes (alpha fixed at 255), ready for
    /// `image::RgbaImage::from_raw`.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for p in &self.pixels {
            out.push(Canvas::to_byte(p.r()));
            out.push(Canvas::to_byte(p.g()));
            out.push(Canvas::to_byte(p.b()));
            out.push(255);
        }
        out
    }

    /// Write the canvas as plain-text P3 PPM: integer triples 0-255,
    /// one pixel per line, row-major, top row first.
    pub fn write_ppm<W: Write>(&self, mut w: W) -> Result<()> {
        writeln!(w, "P3")?;
        writeln!(w, "{} {}", self.width, self.height)?;
        writeln!(w, "255")?;
        for [r, g, b] in self.to_rgb8() {
            writeln!(w, "{} {} {}", r, g, b)?;
        }
        Ok(())
    }

    pub fn save_ppm(&self, path: &Path) -> Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_ppm(&mut out)?;
        out.flush()?;
        Ok(())
    }
}
