//! Deterministic document identity hashing
//!
//! The id is a SHA-256 over the selected fields, serialized in
//! field-name-sorted order. With the default key set (`content` only),
//! two documents with identical content share an id regardless of
//! metadata; adding `meta` makes distinct metadata produce distinct ids.

use crate::api::Error;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Document fields available for identity hashing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdHashKey {
    Content,
    Meta,
}

impl IdHashKey {
    pub fn name(&self) -> &'static str {
        match self {
            IdHashKey::Content => "content",
            IdHashKey::Meta => "meta",
        }
    }
}

impl FromStr for IdHashKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "content" => Ok(IdHashKey::Content),
            "meta" => Ok(IdHashKey::Meta),
            _ => Err(Error::Configuration(format!(
                "unknown id_hash_keys field: {s}"
            ))),
        }
    }
}

impl std::fmt::Display for IdHashKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Hex SHA-256 id over the named fields of a document
///
/// Keys are sorted and deduplicated before hashing, so the caller's key
/// order never changes the result. `meta` serializes as canonical JSON of
/// the sorted map.
pub fn compute_id(content: &str, meta: &BTreeMap<String, Value>, keys: &[IdHashKey]) -> String {
    let mut sorted: Vec<IdHashKey> = keys.to_vec();
    sorted.sort();
    sorted.dedup();

    let mut hasher = Sha256::new();
    for key in sorted {
        hasher.update(key.name().as_bytes());
        hasher.update(b"=");
        match key {
            IdHashKey::Content => hasher.update(content.as_bytes()),
            IdHashKey::Meta => {
                // BTreeMap serialization is key-ordered and total over JSON values.
                let json = serde_json::to_string(meta)
                    .expect("string-keyed JSON value maps always serialize");
                hasher.update(json.as_bytes());
            }
        }
        hasher.update([0x1e]);
    }

    format!("{:x}", hasher.finalize())
}
