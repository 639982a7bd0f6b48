//! Launcher icon generator
//!
//! Draws the app icon at every Android mipmap and web manifest size and writes
//! the PNGs relative to the current directory (run it from the app project
//! root). Takes no arguments.

use std::io;
use std::path::Path;

use launcher_icons::{generate_all, TARGETS};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the status lines
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    tracing::info!("Generating {} launcher icons...", TARGETS.len());

    let mut stdout = io::stdout().lock();
    let report = generate_all(Path::new("."), &TARGETS, &mut stdout)?;

    // Per-file failures were already reported; they do not change the exit status
    tracing::info!(
        "Done: {} written, {} failed",
        report.written.len(),
        report.failed.len()
    );

    Ok(())
}
