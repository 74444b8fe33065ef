// Shared feed structure: namespaces, element lookup and root metadata
// Author: Gabriel Demetrios Lafis

use roxmltree::{Document, Node};

use super::{integer_literal, DataError, FieldMap, Value};
use crate::query::NAMESPACE_TOKEN;

/// Generic syndication namespace carrying feed-level metadata
pub const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";

/// Service namespace carrying properties, metrics, dimensions and aggregates
pub const SERVICE_NAMESPACE: &str = "http://schemas.google.com/analytics/2009";

/// Result-count namespaces; the service has used both revisions
pub const OPENSEARCH_NAMESPACES: [&str; 2] = [
    "http://a9.com/-/spec/opensearch/1.1/",
    "http://a9.com/-/spec/opensearchrss/1.0/",
];

/// Strip the namespace token from a qualified field name (`ga:browser` -> `browser`)
pub fn strip_namespace(name: &str) -> &str {
    name.strip_prefix(NAMESPACE_TOKEN).unwrap_or(name)
}

/// Parse a body and check that its root element is a feed
pub(crate) fn parse_document(body: &str) -> Result<Document<'_>, DataError> {
    let document = Document::parse(body)?;

    let root = document.root_element();
    if root.tag_name().name() != "feed" {
        return Err(DataError::Structure(format!(
            "expected a <feed> root element, found <{}>",
            root.tag_name().name()
        )));
    }

    Ok(document)
}

/// Element children of `node` with the given namespace and local name
pub(crate) fn children<'a, 'input>(
    node: Node<'a, 'input>,
    namespace: &'static str,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |child| {
        child.is_element()
            && child.tag_name().name() == name
            && child.tag_name().namespace() == Some(namespace)
    })
}

/// First element child with the given namespace and local name
pub(crate) fn child<'a, 'input>(
    node: Node<'a, 'input>,
    namespace: &'static str,
    name: &'static str,
) -> Option<Node<'a, 'input>> {
    children(node, namespace, name).next()
}

/// Trimmed text content of a node, empty when it has none
pub(crate) fn text(node: Node) -> String {
    node.text().map(str::trim).unwrap_or_default().to_string()
}

/// Attribute value, empty when the attribute is missing
pub(crate) fn attribute<'a>(node: Node<'a, '_>, name: &str) -> &'a str {
    node.attribute(name).unwrap_or("")
}

/// Feed-level metadata common to every feed kind
///
/// Holds `updated`, `generator`, `generatorVersion` and every result counter
/// from the OpenSearch namespace, keyed by its local name. Fields the feed
/// does not carry are left out.
pub(crate) fn feed_root_metadata(feed: Node) -> FieldMap<Value> {
    let mut root = FieldMap::new();

    if let Some(updated) = child(feed, ATOM_NAMESPACE, "updated") {
        root.insert("updated", Value::String(text(updated)));
    }

    if let Some(generator) = child(feed, ATOM_NAMESPACE, "generator") {
        root.insert("generator", Value::String(text(generator)));
        if let Some(version) = generator.attribute("version") {
            root.insert("generatorVersion", Value::String(version.to_string()));
        }
    }

    let counters = feed.children().filter(|node| {
        node.is_element()
            && node
                .tag_name()
                .namespace()
                .map_or(false, |ns| OPENSEARCH_NAMESPACES.contains(&ns))
    });
    for counter in counters {
        root.insert(
            counter.tag_name().name(),
            Value::Integer(integer_literal(&text(counter))),
        );
    }

    root
}
