//! Solid-color placeholder PNG icons
//!
//! [`png`] holds the pure encoder; [`icon_gen`] writes the icon set to disk.

pub mod error;
pub mod icon_gen;
pub mod png;

pub use error::{EncodeError, Result};
pub use png::{build_image, write_chunk, Rgb, SolidImage};
