mod attribute;
mod document;
mod error;
pub mod libgdx;
mod record;

pub use crate::{
    attribute::{project, Attribute, AttributeSpec},
    document::{FontDocument, Kerning},
    error::BmFontError,
    libgdx::convert,
    record::Record,
};
use std::path::{Path, PathBuf};

/// Extension of msdf-bmfont-xml descriptors.
pub const FNT_EXTENSION: &str = "fnt";

/// Reads and parses a `.fnt` descriptor. The extension is checked before the file
/// is opened.
pub fn load(filename: impl Into<PathBuf>) -> Result<FontDocument, BmFontError> {
    let path = filename.into();
    match path.extension() {
        Some(ext) if ext == FNT_EXTENSION => {}
        _ => return Err(BmFontError::UnsupportedFormat { path }),
    }
    log::info!("Loading {}", path.display());
    let text = std::fs::read_to_string(&path)?;
    FontDocument::parse(&text)
}

/// Converts `input` to libGDX text and writes it to `output`, or back over `input`
/// when no output is given. Returns the path written.
///
/// The whole output is built in memory first; on error nothing is written.
pub fn convert_file(input: &Path, output: Option<&Path>) -> Result<PathBuf, BmFontError> {
    let document = load(input)?;
    let text = convert(&document)?;
    let output = output.unwrap_or(input).to_path_buf();
    log::info!("Saving {}", output.display());
    std::fs::write(&output, text)?;
    Ok(output)
}
