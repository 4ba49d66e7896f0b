use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tiny_skia::Pixmap;

use crate::error::GenerateError;
use crate::icon::{render, ICON_SIZES};

pub const OUTPUT_DIR: &str = "icons";

const BYTES_PER_PIXEL: usize = 4;

/// Renders every icon size into `out_dir`, creating the directory first.
/// Progress notices go to `notices`.
///
/// Stops at the first failure; files written before it are left in place.
pub fn generate_icons(
    out_dir: &Path,
    notices: &mut impl Write,
) -> Result<Vec<PathBuf>, GenerateError> {
    fs::create_dir_all(out_dir).map_err(|source| GenerateError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(ICON_SIZES.len());
    for &size in ICON_SIZES.iter() {
        let file_name = format!("icon{}.png", size);
        let path = out_dir.join(&file_name);

        let pixmap = render(size);
        create_png(&path, &pixmap)?;

        writeln!(notices, "Generated {}", file_name).map_err(GenerateError::Notice)?;
        written.push(path);
    }

    writeln!(notices, "\nAll icons generated successfully!").map_err(GenerateError::Notice)?;
    Ok(written)
}

fn create_png(png_output_path: &Path, pixmap: &Pixmap) -> Result<(), GenerateError> {
    let bytes = encode_png(pixmap)?;
    fs::write(png_output_path, &bytes).map_err(|source| GenerateError::Write {
        path: png_output_path.to_path_buf(),
        source,
    })?;
    log::info!("wrote {} ({} bytes)", png_output_path.display(), bytes.len());
    Ok(())
}

/// Encodes `pixmap` as an 8-bit RGBA PNG with no ancillary chunks.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, GenerateError> {
    let width = pixmap.width();
    let height = pixmap.height();

    // Pixmap stores premultiplied alpha; PNG expects straight alpha.
    let mut rgba = Vec::with_capacity(pixmap.pixels().len() * BYTES_PER_PIXEL);
    for p in pixmap.pixels() {
        let c = p.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let mut out = Vec::new();
    {
        let mut png_encoder = png::Encoder::new(&mut out, width, height);
        png_encoder.set_depth(png::BitDepth::Eight);
        png_encoder.set_color(png::ColorType::Rgba);
        let mut png_writer = png_encoder.write_header()?;
        png_writer.write_image_data(&rgba)?;
    }

    Ok(out)
}
