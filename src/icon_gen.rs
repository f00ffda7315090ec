use crate::manifest::IconManifest;
use crate::render::render;
use anyhow::{Context, Result};
use image::{
    codecs::{
        ico::{IcoEncoder, IcoFrame},
        png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    },
    ColorType, ImageEncoder, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Sizes written when none are requested.
pub const DEFAULT_SIZES: [u32; 5] = [16, 32, 48, 128, 512];

/// Largest frame an ICO directory entry can describe.
const ICO_MAX_SIZE: u32 = 256;

#[derive(Debug, Clone)]
pub struct Options {
    pub output: PathBuf,
    pub sizes: Vec<u32>,
    pub ico: bool,
    pub manifest: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            output: PathBuf::from("public"),
            sizes: DEFAULT_SIZES.to_vec(),
            ico: false,
            manifest: false,
        }
    }
}

/// File name of the PNG written for `size`.
pub fn icon_filename(size: u32) -> String {
    format!("icon{size}.png")
}

pub fn generate_icons(options: &Options) -> Result<()> {
    let sizes = normalize_sizes(&options.sizes)?;

    // Ensure the output directory exists
    create_dir_all(&options.output).with_context(|| {
        format!(
            "Can't create output directory {}",
            options.output.display()
        )
    })?;

    println!("Generating PNG icons...");
    let mut manifest = IconManifest::new();
    let mut ico_frames = Vec::new();
    for &size in &sizes {
        let icon = render(size);
        let filename = icon_filename(size);
        save_png(&icon, &options.output.join(&filename))?;
        println!("  ✓ Generated {}", options.output.join(&filename).display());
        manifest.add_icon(size, filename);

        if options.ico && size <= ICO_MAX_SIZE {
            ico_frames.push(icon);
        }
    }

    if options.ico {
        generate_ico(&ico_frames, &options.output)?;
    }

    if options.manifest {
        let path = options.output.join("icons.json");
        manifest.write_to_file(&path)?;
        println!("  ✓ Generated {}", path.display());
    }

    Ok(())
}

/// Sort and deduplicate the requested sizes, rejecting zero.
fn normalize_sizes(sizes: &[u32]) -> Result<Vec<u32>> {
    if sizes.is_empty() {
        anyhow::bail!("At least one icon size is required");
    }
    if sizes.contains(&0) {
        anyhow::bail!("Icon sizes must be positive");
    }

    let mut sizes = sizes.to_vec();
    sizes.sort_unstable();
    sizes.dedup();
    Ok(sizes)
}

/// Bundle already rendered icons into `favicon.ico`.
fn generate_ico(icons: &[RgbaImage], out_dir: &Path) -> Result<()> {
    let icons: Vec<&RgbaImage> = icons
        .iter()
        .filter(|icon| icon.width() <= ICO_MAX_SIZE)
        .collect();

    if icons.is_empty() {
        log::warn!("No requested size fits in an ICO file (max {ICO_MAX_SIZE}), skipping favicon.ico");
        return Ok(());
    }

    println!("Generating favicon.ico...");
    let mut frames = Vec::new();

    for icon in icons {
        let size = icon.width();

        // Only the 256px layer can be compressed according to the ico specs
        if size == ICO_MAX_SIZE {
            let mut buf = Vec::new();
            write_png(icon.as_raw(), &mut buf, size)?;
            frames.push(IcoFrame::with_encoded(buf, size, size, ColorType::Rgba8)?);
        } else {
            frames.push(IcoFrame::as_png(icon.as_raw(), size, size, ColorType::Rgba8)?);
        }
    }

    let path = out_dir.join("favicon.ico");
    let mut out_file = BufWriter::new(
        File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?,
    );
    let encoder = IcoEncoder::new(&mut out_file);
    encoder.encode_images(&frames)?;
    out_file.flush()?;

    println!("  ✓ Generated {}", path.display());
    Ok(())
}

/// Write `image` as a PNG file.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    write_png(image.as_raw(), &mut out_file, image.width())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    out_file.flush()?;
    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgba8)?;
    Ok(())
}
