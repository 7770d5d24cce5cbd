use crate::{error::BmFontError, record::Record};

/// A kerning pair along with its parsed amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kerning {
    pub record: Record,
    pub amount: i32,
}

impl Kerning {
    pub fn new(record: Record) -> Result<Self, BmFontError> {
        let value = record
            .get("amount")
            .ok_or_else(|| BmFontError::MissingAttribute {
                record: "kerning".to_string(),
                attribute: "amount",
            })?;
        let amount = value
            .trim()
            .parse()
            .map_err(|_| BmFontError::InvalidKerningAmount {
                value: value.to_string(),
            })?;
        Ok(Kerning { record, amount })
    }
}

/// A BMFont descriptor as written by msdf-bmfont-xml.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FontDocument {
    pub info: Record,
    pub common: Record,
    pub pages: Vec<Record>,
    pub chars: Vec<Record>,
    /// The `count` attribute of the `<chars>` element, if there was one.
    pub declared_char_count: Option<usize>,
    pub kernings: Vec<Kerning>,
}

impl FontDocument {
    pub fn parse(text: &str) -> Result<Self, BmFontError> {
        let doc = roxmltree::Document::parse(text)?;
        let root = doc.root_element();
        log::debug!("Root element is <{}>", root.tag_name().name());

        let chars = section(root, "chars")?;
        let declared_char_count = chars
            .attribute("count")
            .map(|count| {
                count.trim().parse::<usize>().map_err(|_| {
                    BmFontError::malformed(format!("chars count {count:?} is not a number"))
                })
            })
            .transpose()?;

        Ok(FontDocument {
            info: Record::from_node(section(root, "info")?),
            common: Record::from_node(section(root, "common")?),
            pages: entries(section(root, "pages")?, "page"),
            chars: entries(chars, "char"),
            declared_char_count,
            kernings: entries(section(root, "kernings")?, "kerning")
                .into_iter()
                .map(Kerning::new)
                .collect::<Result<_, _>>()?,
        })
    }

    /// Kernings with a non-zero amount, in document order.
    pub fn nonzero_kernings(&self) -> impl Iterator<Item = &Kerning> {
        self.kernings.iter().filter(|k| k.amount != 0)
    }
}

fn section<'a, 'input>(
    root: roxmltree::Node<'a, 'input>,
    name: &str,
) -> Result<roxmltree::Node<'a, 'input>, BmFontError> {
    root.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
        .ok_or_else(|| BmFontError::malformed(format!("missing <{name}> element")))
}

fn entries(parent: roxmltree::Node, name: &str) -> Vec<Record> {
    parent
        .children()
        .filter(|n| n.is_element())
        .filter(|n| {
            let keep = n.tag_name().name() == name;
            if !keep {
                log::debug!(
                    "Skipping unexpected <{}> inside <{}>",
                    n.tag_name().name(),
                    parent.tag_name().name()
                );
            }
            keep
        })
        .map(Record::from_node)
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const MINIMAL: &str = r#"<?xml version="1.0"?>
<font>
  <info face="Roboto" size="32"/>
  <common lineHeight="38"/>
  <pages>
    <page id="0" file="roboto.png"/>
    <!-- second atlas page -->
    <page id="1" file="roboto2.png"/>
  </pages>
  <distanceField fieldType="msdf" distanceRange="4"/>
  <chars count="2">
    <char id="65"/>
    <glyph id="0"/>
    <char id="66"/>
  </chars>
  <kernings count="2">
    <kerning first="65" second="66" amount="-2"/>
    <kerning first="66" second="65" amount=" 0 "/>
  </kernings>
</font>"#;

    #[test]
    fn test_parse_minimal() {
        let doc = FontDocument::parse(MINIMAL).unwrap();
        assert_eq!(doc.info.get("face"), Some("Roboto"));
        assert_eq!(doc.common.get("lineHeight"), Some("38"));
        assert_eq!(
            doc.pages
                .iter()
                .map(|p| p.get("file").unwrap())
                .collect::<Vec<_>>(),
            vec!["roboto.png", "roboto2.png"]
        );
        assert_eq!(
            doc.chars
                .iter()
                .map(|c| c.get("id").unwrap())
                .collect::<Vec<_>>(),
            vec!["65", "66"]
        );
        assert_eq!(doc.declared_char_count, Some(2));
        assert_eq!(
            doc.kernings.iter().map(|k| k.amount).collect::<Vec<_>>(),
            vec![-2, 0]
        );
        assert_eq!(doc.nonzero_kernings().count(), 1);
    }

    #[rstest]
    #[case("info")]
    #[case("common")]
    #[case("pages")]
    #[case("chars")]
    #[case("kernings")]
    fn test_missing_section(#[case] name: &str) {
        let open = format!("<{name}");
        let text: String = MINIMAL
            .lines()
            .filter(|line| !line.trim_start().starts_with(&open))
            .collect::<Vec<_>>()
            .join("\n");
        // Drop the closing tag too so the XML stays well formed.
        let text = text.replace(&format!("</{name}>"), "");
        match FontDocument::parse(&text) {
            Err(BmFontError::MalformedDocument { reason }) => {
                assert_eq!(reason, format!("missing <{name}> element"))
            }
            other => panic!("expected a malformed document error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_sections() {
        let doc = FontDocument::parse(
            "<font><info/><common/><pages/><chars/><kernings/></font>",
        )
        .unwrap();
        assert!(doc.pages.is_empty());
        assert!(doc.chars.is_empty());
        assert!(doc.kernings.is_empty());
        assert_eq!(doc.declared_char_count, None);
    }

    #[test]
    fn test_bad_xml() {
        assert!(matches!(
            FontDocument::parse("<font><info></font>"),
            Err(BmFontError::Xml(_))
        ));
    }

    #[rstest]
    #[case("-2.5")]
    #[case("")]
    #[case("abc")]
    fn test_invalid_kerning_amount(#[case] amount: &str) {
        let record: Record = [("first", "65"), ("second", "66"), ("amount", amount)]
            .into_iter()
            .collect();
        match Kerning::new(record) {
            Err(BmFontError::InvalidKerningAmount { value }) => assert_eq!(value, amount),
            other => panic!("expected an invalid amount error, got {other:?}"),
        }
    }

    #[test]
    fn test_kerning_without_amount() {
        let record: Record = [("first", "65"), ("second", "66")].into_iter().collect();
        assert!(matches!(
            Kerning::new(record),
            Err(BmFontError::MissingAttribute {
                attribute: "amount",
                ..
            })
        ));
    }

    #[test]
    fn test_bad_char_count() {
        let text = MINIMAL.replace(r#"<chars count="2">"#, r#"<chars count="two">"#);
        assert!(matches!(
            FontDocument::parse(&text),
            Err(BmFontError::MalformedDocument { .. })
        ));
    }
}
