use crate::{error::BmFontError, record::Record};

/// Describes how one attribute of a record is carried into the output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute {
    pub name: &'static str,
    /// Wrap the value in double quotes. The value is not escaped.
    pub quoted: bool,
    /// Value used when the record lacks the attribute. Attributes without a
    /// default are required.
    pub default: Option<&'static str>,
}

/// An ordered list of attributes; output follows this order, never the source order.
pub type AttributeSpec = [Attribute];

impl Attribute {
    pub const fn plain(name: &'static str) -> Self {
        Attribute {
            name,
            quoted: false,
            default: None,
        }
    }

    pub const fn quoted(name: &'static str) -> Self {
        Attribute {
            name,
            quoted: true,
            default: None,
        }
    }

    pub const fn with_default(self, value: &'static str) -> Self {
        Attribute {
            default: Some(value),
            ..self
        }
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    fn value_in<'a>(&self, record_name: &str, record: &'a Record) -> Result<&'a str, BmFontError> {
        record
            .get(self.name)
            .or(self.default)
            .ok_or_else(|| BmFontError::MissingAttribute {
                record: record_name.to_string(),
                attribute: self.name,
            })
    }
}

/// Renders `record` as a single `name key=value key="value" ...` line following `spec`.
pub fn project(
    record_name: &str,
    record: &Record,
    spec: &AttributeSpec,
) -> Result<String, BmFontError> {
    let mut line = record_name.to_string();
    for attribute in spec {
        let value = attribute.value_in(record_name, record)?;
        line.push(' ');
        line.push_str(attribute.name);
        line.push('=');
        if attribute.quoted {
            line.push('"');
            line.push_str(value);
            line.push('"');
        } else {
            line.push_str(value);
        }
    }
    Ok(line)
}
