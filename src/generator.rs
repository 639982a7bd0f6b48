//! Icon file generation
//!
//! Walks the target table and writes one PNG per entry. Each target is
//! isolated: a failure is printed and recorded, and the next target still runs.
//! Nothing is retried or rolled back.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, RgbaImage};

use crate::error::OutputFailure;
use crate::icon::render_icon;
use crate::targets::{IconTarget, Platform};

/// Outcome of one pass over the target table
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Files written, with their side length
    pub written: Vec<(PathBuf, u32)>,
    pub failed: Vec<(PathBuf, OutputFailure)>,
}

impl GenerationReport {
    pub fn total(&self) -> usize {
        self.written.len() + self.failed.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Encode `img` as an RGBA8 PNG at `path`, replacing any existing file
pub fn write_png(path: &Path, img: &RgbaImage) -> Result<(), OutputFailure> {
    let file = File::create(path).map_err(|source| OutputFailure::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    PngEncoder::new(&mut writer)
        .write_image(img.as_raw(), img.width(), img.height(), ColorType::Rgba8)
        .map_err(|source| OutputFailure::Encode {
            path: path.to_path_buf(),
            source,
        })?;

    writer.flush().map_err(|source| OutputFailure::Flush {
        path: path.to_path_buf(),
        source,
    })
}

/// Produce a single icon file under `root`.
///
/// Missing parent directories are created (existing ones are fine).
/// Returns the full path written.
pub fn generate_target(root: &Path, target: &IconTarget) -> Result<PathBuf, OutputFailure> {
    let path = root.join(target.path);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| OutputFailure::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let img = render_icon(target.size);
    write_png(&path, &img)?;

    tracing::debug!("Wrote {} ({} bytes raw)", path.display(), img.as_raw().len());
    Ok(path)
}

/// Generate every target, printing the console banner and one status line
/// per file to `out`.
///
/// Per-file failures end up in the report; only a failure to write to `out`
/// itself is returned as an error.
pub fn generate_all<W: Write>(
    root: &Path,
    targets: &[IconTarget],
    out: &mut W,
) -> io::Result<GenerationReport> {
    writeln!(out, "🎨 App Icon Generator")?;
    writeln!(out, "{}", "=".repeat(40))?;

    let mut report = GenerationReport::default();

    for target in targets {
        match generate_target(root, target) {
            Ok(path) => {
                writeln!(
                    out,
                    "✅ Icon created: {} ({}x{})",
                    target.path, target.size, target.size
                )?;
                report.written.push((path, target.size));
            }
            Err(e) => {
                tracing::warn!("Icon {} failed: {:?}", target.path, e);
                writeln!(out, "❌ Error: {} - {}", target.path, e)?;
                report.failed.push((root.join(target.path), e));
            }
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "🎉 Icons generated: {}/{}",
        report.written.len(),
        report.total()
    )?;
    writeln!(out, "📱 {} icons ready", platform_list(targets))?;

    Ok(report)
}

/// "Android and Web" style list of the platforms in `targets`, in table order
fn platform_list(targets: &[IconTarget]) -> String {
    let mut platforms: Vec<Platform> = Vec::new();
    for target in targets {
        if !platforms.contains(&target.platform) {
            platforms.push(target.platform);
        }
    }
    platforms
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" and ")
}
