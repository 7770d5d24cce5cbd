use indexmap::IndexMap;

/// The attributes of a single BMFont element, in the order they appeared in the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record(IndexMap<String, String>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads every attribute of an XML element. Namespaced attributes are keyed by
    /// their local name.
    pub(crate) fn from_node(node: roxmltree::Node) -> Self {
        node.attributes()
            .map(|attr| (attr.name(), attr.value()))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Record(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_node_keeps_source_order() {
        let doc = roxmltree::Document::parse(r#"<page file="a.png" id="0"/>"#).unwrap();
        let record = Record::from_node(doc.root_element());
        assert_eq!(
            record.iter().collect::<Vec<_>>(),
            vec![("file", "a.png"), ("id", "0")]
        );
    }

    #[test]
    fn test_from_node_unescapes_entities() {
        let doc = roxmltree::Document::parse(r#"<char id="34" char="&quot;"/>"#).unwrap();
        let record = Record::from_node(doc.root_element());
        assert_eq!(record.get("char"), Some("\""));
        assert!(!record.contains("x"));
    }
}
