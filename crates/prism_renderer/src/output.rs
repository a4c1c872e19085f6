//! Tone mapping and image output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use prism_math::Interval;
use thiserror::Error;

use crate::{Color, Framebuffer};

/// Errors that can occur while writing a rendered image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

pub type OutputResult<T> = Result<T, OutputError>;

/// Bring a color into [0, 1] without shifting its hue.
///
/// Colors whose brightest channel exceeds 1 are scaled down by that channel;
/// the result is then clamped, which only affects negative channels.
pub fn tone_map(color: Color) -> Color {
    let max = color.max_element();
    let color = if max > 1.0 { color * (1.0 / max) } else { color };
    Color::new(
        Interval::UNIT.clamp(color.x),
        Interval::UNIT.clamp(color.y),
        Interval::UNIT.clamp(color.z),
    )
}

/// Convert a color to 8-bit RGB (truncating, no gamma).
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let c = tone_map(color);
    [
        (255.0 * c.x) as u8,
        (255.0 * c.y) as u8,
        (255.0 * c.z) as u8,
    ]
}

/// Write a framebuffer as binary PPM (P6).
pub fn write_ppm<W: Write>(writer: &mut W, image: &Framebuffer) -> std::io::Result<()> {
    write!(writer, "P6\n{} {}\n255\n", image.width, image.height)?;
    writer.write_all(&image.to_rgb8())?;
    writer.flush()
}

/// Save a framebuffer to disk.
///
/// `.ppm` files are written directly; other extensions (png, jpg) go through
/// the image crate.
pub fn save(framebuffer: &Framebuffer, path: impl AsRef<Path>) -> OutputResult<()> {
    let path = path.as_ref();
    let is_ppm = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("ppm"));

    if is_ppm {
        let io_err = |source: std::io::Error| OutputError::Io {
            path: path.display().to_string(),
            source,
        };
        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        write_ppm(&mut writer, framebuffer).map_err(io_err)?;
    } else {
        image::save_buffer(
            path,
            &framebuffer.to_rgb8(),
            framebuffer.width,
            framebuffer.height,
            image::ColorType::Rgb8,
        )
        .map_err(|source| OutputError::Encode {
            path: path.display().to_string(),
            source,
        })?;
    }

    log::debug!(
        "Saved {}x{} image to {}",
        framebuffer.width,
        framebuffer.height,
        path.display()
    );
    Ok(())
}
