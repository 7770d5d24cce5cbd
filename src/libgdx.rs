//! Writer for the plain text BMFont variant read by libGDX's `BitmapFont`.

use crate::{
    attribute::{project, Attribute, AttributeSpec},
    document::FontDocument,
    error::BmFontError,
};

pub const INFO: &AttributeSpec = &[
    Attribute::quoted("face"),
    Attribute::plain("size"),
    Attribute::plain("bold"),
    Attribute::plain("italic"),
    Attribute::quoted("charset"),
    Attribute::plain("unicode"),
    Attribute::plain("stretchH"),
    Attribute::plain("smooth"),
    Attribute::plain("aa"),
    Attribute::plain("padding"),
    Attribute::plain("spacing"),
    Attribute::plain("outline").with_default("0"),
];

pub const COMMON: &AttributeSpec = &[
    Attribute::plain("lineHeight"),
    Attribute::plain("base"),
    Attribute::plain("scaleW"),
    Attribute::plain("scaleH"),
    Attribute::plain("pages"),
    Attribute::plain("packed"),
    Attribute::plain("alphaChnl"),
    Attribute::plain("redChnl"),
    Attribute::plain("greenChnl"),
    Attribute::plain("blueChnl"),
];

pub const PAGE: &AttributeSpec = &[Attribute::plain("id"), Attribute::quoted("file")];

pub const CHAR: &AttributeSpec = &[
    Attribute::plain("id"),
    Attribute::plain("x"),
    Attribute::plain("y"),
    Attribute::plain("width"),
    Attribute::plain("height"),
    Attribute::plain("xoffset"),
    Attribute::plain("yoffset"),
    Attribute::plain("xadvance"),
    Attribute::plain("page"),
    Attribute::plain("chnl"),
];

pub const KERNING: &AttributeSpec = &[
    Attribute::plain("first"),
    Attribute::plain("second"),
    Attribute::plain("amount"),
];

/// Renders `document` as libGDX text. Lines are joined with `\n` and there is no
/// trailing newline. Kernings with a zero amount are left out, libGDX treats a
/// missing pair as no adjustment.
pub fn convert(document: &FontDocument) -> Result<String, BmFontError> {
    let mut lines = vec![
        project("info", &document.info, INFO)?,
        project("common", &document.common, COMMON)?,
    ];
    for page in &document.pages {
        lines.push(project("page", page, PAGE)?);
    }

    if let Some(declared) = document.declared_char_count {
        if declared != document.chars.len() {
            log::warn!(
                "chars count is {declared} but {} char elements were found, writing {}",
                document.chars.len(),
                document.chars.len()
            );
        }
    }
    lines.push(format!("chars count={}", document.chars.len()));
    for glyph in &document.chars {
        lines.push(project("char", glyph, CHAR)?);
    }

    let kernings: Vec<_> = document.nonzero_kernings().collect();
    log::debug!(
        "Dropping {} zero-amount kernings",
        document.kernings.len() - kernings.len()
    );
    lines.push(format!("kernings count={}", kernings.len()));
    for kerning in kernings {
        lines.push(project("kerning", &kerning.record, KERNING)?);
    }

    Ok(lines.join("\n"))
}
