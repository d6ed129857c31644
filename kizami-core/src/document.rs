//! Document entity
//!
//! A document is content plus a metadata map plus a derived id. Splitting
//! never mutates a document; it produces new ones.

use crate::hasher::{self, IdHashKey};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Default identity fields: content only
pub const DEFAULT_ID_HASH_KEYS: &[IdHashKey] = &[IdHashKey::Content];

/// A unit of text with metadata and a stable identity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
    #[serde(default)]
    pub meta: BTreeMap<String, Value>,
    pub id: String,
}

impl Document {
    /// Create a document with empty metadata and a default-keyed id
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_meta(content, BTreeMap::new())
    }

    /// Create a document with metadata and a default-keyed id
    pub fn with_meta(content: impl Into<String>, meta: BTreeMap<String, Value>) -> Self {
        Self::with_id_hash_keys(content, meta, DEFAULT_ID_HASH_KEYS)
    }

    /// Create a document whose id covers the given fields
    pub fn with_id_hash_keys(
        content: impl Into<String>,
        meta: BTreeMap<String, Value>,
        id_hash_keys: &[IdHashKey],
    ) -> Self {
        let content = content.into();
        let id = hasher::compute_id(&content, &meta, id_hash_keys);
        Self { content, meta, id }
    }
}
