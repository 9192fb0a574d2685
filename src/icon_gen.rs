use crate::png::{Rgb, SolidImage};
use anyhow::{Context, Result};
use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

/// Icon sizes written when none are requested.
pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

/// Placeholder color, (102, 126, 234).
pub const DEFAULT_COLOR: &str = "#667eea";

/// Default output directory. It must already exist.
pub const DEFAULT_OUTPUT: &str = "icons";

// Define Args struct for library use; the binary fills it from the command line
#[derive(Debug, Clone)]
pub struct Args {
    pub output: PathBuf,
    pub sizes: Vec<u32>,
    pub color: String,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            sizes: DEFAULT_SIZES.to_vec(),
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

/// Write one solid-color PNG per requested size and return the written paths.
///
/// The output directory is not created. Files written before a failure stay
/// on disk.
pub fn generate_icons(args: &Args) -> Result<Vec<PathBuf>> {
    let color = parse_color(&args.color)?;

    println!("Generating placeholder icons...");
    let mut written = Vec::with_capacity(args.sizes.len());
    for &size in &args.sizes {
        let image = SolidImage::new(size, size, color)
            .with_context(|| format!("Can't build {size}x{size} icon"))?;
        let png_data = image.encode();

        let output_path = icon_path(&args.output, size);
        std::fs::write(&output_path, &png_data)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        println!("  ✓ Created {}", output_path.display());

        written.push(output_path);
    }

    Ok(written)
}

/// File name convention for an icon of the given size.
pub fn icon_path(out_dir: &Path, size: u32) -> PathBuf {
    out_dir.join(format!("icon{size}.png"))
}

/// Parse an opaque CSS color (hex, `rgb()`, or a named color).
pub fn parse_color(color: &str) -> Result<Rgb> {
    let srgb = css_color::Srgb::from_str(color)
        .map_err(|_| anyhow::anyhow!("Invalid color: {color}"))?;

    if srgb.alpha < 1.0 {
        anyhow::bail!("Icon color must be opaque: {color}");
    }

    Ok(Rgb::new(
        to_channel(srgb.red),
        to_channel(srgb.green),
        to_channel(srgb.blue),
    ))
}

fn to_channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.).round() as u8
}
