// SPDX-License-Identifier: MIT
//! In-memory decoded form of a GLB container

use std::collections::BTreeMap;

/// Resource key under which the embedded binary buffer is stored
///
/// GLB supports a single BIN chunk, so the resource map normally holds at
/// most this one entry.
pub const GLB_BUFFER_KEY: &str = "@glb.bin";

/// A decoded GLB container: scene metadata plus embedded resources
///
/// The metadata is kept as a generic JSON tree; this codec never interprets
/// its contents.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// The scene/asset metadata from the JSON chunk
    pub json: serde_json::Value,

    /// Raw resource buffers keyed by identifier
    pub resources: BTreeMap<String, Vec<u8>>,
}

impl Document {
    /// Create a document with the given metadata and no resources
    pub fn new(json: serde_json::Value) -> Self {
        Self {
            json,
            resources: BTreeMap::new(),
        }
    }

    /// The embedded binary buffer, if present
    pub fn binary(&self) -> Option<&[u8]> {
        self.resources.get(GLB_BUFFER_KEY).map(Vec::as_slice)
    }

    /// Store the embedded binary buffer, replacing any previous one
    pub fn set_binary(&mut self, bytes: Vec<u8>) {
        self.resources.insert(GLB_BUFFER_KEY.to_string(), bytes);
    }

    /// Remove and return the embedded binary buffer
    pub fn take_binary(&mut self) -> Option<Vec<u8>> {
        self.resources.remove(GLB_BUFFER_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_has_no_resources() {
        let doc = Document::new(json!({"asset": {"version": "2.0"}}));
        assert!(doc.resources.is_empty());
        assert!(doc.binary().is_none());
    }

    #[test]
    fn test_set_and_take_binary() {
        let mut doc = Document::new(json!({}));
        doc.set_binary(vec![1, 2, 3]);
        assert_eq!(doc.binary(), Some([1, 2, 3].as_slice()));

        let taken = doc.take_binary().unwrap();
        assert_eq!(taken, vec![1, 2, 3]);
        assert!(doc.binary().is_none());
    }
}
