//! Launcher Icons Library
//!
//! Procedurally draws the app icon and writes it out at every size the
//! Android and web bundles expect.
//!
//! Architecture:
//! - `raster` / `icon` draw the artwork into an in-memory RGBA image
//! - `targets` holds the fixed size/path table
//! - `generator` walks the table and writes PNG files (per-file error isolation)

pub mod error;
pub mod generator;
pub mod icon;
pub mod palette;
pub mod raster;
pub mod targets;

pub use error::OutputFailure;
pub use generator::{generate_all, generate_target, GenerationReport};
pub use icon::{render_icon, IconGeometry};
pub use targets::{IconTarget, Platform, TARGETS};
