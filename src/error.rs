use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BmFontError {
    #[error("Unsupported file type for file {path:?}, expected a .fnt file")]
    UnsupportedFormat { path: PathBuf },

    #[error("Missing required attribute '{attribute}' on {record} record")]
    MissingAttribute {
        record: String,
        attribute: &'static str,
    },

    #[error("Malformed font document: {reason}")]
    MalformedDocument { reason: String },

    #[error("Kerning amount {value:?} is not an integer")]
    InvalidKerningAmount { value: String },

    #[error("Error parsing XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("IO Error: {0}")]
    IO(#[from] io::Error),
}

impl BmFontError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        BmFontError::MalformedDocument {
            reason: reason.into(),
        }
    }
}
