// src/release.rs

//! The parsed os-release record
//!
//! [`OsRelease`] is a fixed projection of six well-known keys. Other keys in
//! the file are read while folding fields but never kept. Every attribute is
//! a plain string; a key missing from the input is the empty string.

use crate::error::{Error, Result};
use crate::parser::{self, Field};
use serde::Serialize;
use std::collections::HashMap;
use std::convert::Infallible;
use std::str::FromStr;

pub const KEY_ID: &str = "ID";
pub const KEY_ID_LIKE: &str = "ID_LIKE";
pub const KEY_NAME: &str = "NAME";
pub const KEY_PRETTY_NAME: &str = "PRETTY_NAME";
pub const KEY_VERSION: &str = "VERSION";
pub const KEY_VERSION_ID: &str = "VERSION_ID";

/// Operating system identification read from an os-release file
///
/// Immutable once built: there are no setters, only the parse constructors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct OsRelease {
    id: String,
    id_like: String,
    name: String,
    pretty_name: String,
    version: String,
    version_id: String,
}

impl OsRelease {
    /// Fold fields in line order into a record
    ///
    /// A later field with the same key replaces an earlier one.
    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = Field<'a>>,
    {
        let mut values: HashMap<&'a str, String> = HashMap::new();
        for field in fields {
            values.insert(field.key, field.value);
        }

        let mut take = |key: &str| values.remove(key).unwrap_or_default();
        Self {
            id: take(KEY_ID),
            id_like: take(KEY_ID_LIKE),
            name: take(KEY_NAME),
            pretty_name: take(KEY_PRETTY_NAME),
            version: take(KEY_VERSION),
            version_id: take(KEY_VERSION_ID),
        }
    }

    /// Canonical distribution identifier (`ID`)
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Space-separated list of related distributions (`ID_LIKE`)
    pub fn id_like(&self) -> &str {
        &self.id_like
    }

    /// `NAME`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `PRETTY_NAME`
    pub fn pretty_name(&self) -> &str {
        &self.pretty_name
    }

    /// `VERSION`
    pub fn version(&self) -> &str {
        &self.version
    }

    /// `VERSION_ID`
    pub fn version_id(&self) -> &str {
        &self.version_id
    }

    /// Look up one of the six attributes by its os-release key
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            KEY_ID => Some(&self.id),
            KEY_ID_LIKE => Some(&self.id_like),
            KEY_NAME => Some(&self.name),
            KEY_PRETTY_NAME => Some(&self.pretty_name),
            KEY_VERSION => Some(&self.version),
            KEY_VERSION_ID => Some(&self.version_id),
            _ => None,
        }
    }

    /// Attributes as (key, value) pairs in a stable order
    pub fn entries(&self) -> [(&'static str, &str); 6] {
        [
            (KEY_ID, &self.id),
            (KEY_ID_LIKE, &self.id_like),
            (KEY_NAME, &self.name),
            (KEY_PRETTY_NAME, &self.pretty_name),
            (KEY_VERSION, &self.version),
            (KEY_VERSION_ID, &self.version_id),
        ]
    }

    /// True if any attribute was set by the input
    ///
    /// An all-empty record is the only sign that the content was not an
    /// os-release file at all.
    pub fn is_identified(&self) -> bool {
        self.entries().iter().any(|(_, value)| !value.is_empty())
    }

    /// Require both `ID` and `VERSION_ID`
    ///
    /// Provisioning steps that pick repositories or artifacts per release
    /// cannot proceed without them.
    pub fn ensure_identified(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(Error::NotIdentified(KEY_ID));
        }
        if self.version_id.is_empty() {
            return Err(Error::NotIdentified(KEY_VERSION_ID));
        }
        Ok(())
    }
}

impl FromStr for OsRelease {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(parser::parse(s))
    }
}
