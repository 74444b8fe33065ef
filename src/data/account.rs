// Account feed decoding
// Author: Gabriel Demetrios Lafis

use std::fmt;

use log::debug;
use roxmltree::Node;

use super::feed::{
    attribute, child, children, feed_root_metadata, parse_document, text, ATOM_NAMESPACE,
    SERVICE_NAMESPACE,
};
use super::{strip_namespace, DataError, FeedDecoder, FieldMap, Value};

/// One entry of an account listing
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccountEntry {
    properties: FieldMap<String>,
}

impl AccountEntry {
    /// Create a new account entry
    pub fn new(properties: FieldMap<String>) -> Self {
        AccountEntry { properties }
    }

    /// Get all properties of the entry
    pub fn properties(&self) -> &FieldMap<String> {
        &self.properties
    }

    /// Get the entry title, if the feed carried one
    pub fn title(&self) -> Option<&str> {
        self.properties.get("title").map(String::as_str)
    }

    /// Look up a property by name, ignoring case
    pub fn get(&self, name: &str) -> Result<&str, DataError> {
        self.properties
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| DataError::FieldNotFound(name.to_string()))
    }
}

impl fmt::Display for AccountEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title().unwrap_or(""))
    }
}

/// A decoded account listing
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AccountResult {
    root: FieldMap<Value>,
    entries: Vec<AccountEntry>,
}

impl AccountResult {
    /// Create a new account result
    pub fn new(root: FieldMap<Value>, entries: Vec<AccountEntry>) -> Self {
        AccountResult { root, entries }
    }

    pub fn root_parameters(&self) -> &FieldMap<Value> {
        &self.root
    }

    pub fn entries(&self) -> &[AccountEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a root metadata field by name, ignoring case
    pub fn get(&self, name: &str) -> Result<&Value, DataError> {
        self.root
            .get(name)
            .ok_or_else(|| DataError::FieldNotFound(name.to_string()))
    }
}

/// Decoder for account listing feeds
pub struct AccountDecoder;

impl AccountDecoder {
    fn decode_entry(entry: Node) -> AccountEntry {
        let mut properties: FieldMap<String> = children(entry, SERVICE_NAMESPACE, "property")
            .map(|property| {
                (
                    strip_namespace(attribute(property, "name")).to_string(),
                    attribute(property, "value").to_string(),
                )
            })
            .collect();

        if let Some(title) = child(entry, ATOM_NAMESPACE, "title") {
            properties.insert("title", text(title));
        }
        if let Some(updated) = child(entry, ATOM_NAMESPACE, "updated") {
            properties.insert("updated", text(updated));
        }

        AccountEntry::new(properties)
    }
}

impl FeedDecoder for AccountDecoder {
    type Output = AccountResult;

    fn decode(&self, body: &str) -> Result<AccountResult, DataError> {
        let document = parse_document(body)?;
        let feed = document.root_element();

        let root = feed_root_metadata(feed);
        let entries: Vec<AccountEntry> = children(feed, ATOM_NAMESPACE, "entry")
            .map(Self::decode_entry)
            .collect();

        debug!("Decoded account listing: {} entries", entries.len());

        Ok(AccountResult::new(root, entries))
    }

    fn name(&self) -> &str {
        "accounts"
    }
}

/// Decode an account listing feed
pub fn decode_accounts(body: &str) -> Result<AccountResult, DataError> {
    AccountDecoder.decode(body)
}
