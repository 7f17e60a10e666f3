// SPDX-License-Identifier: MIT
//! # GLB Container Codec
//!
//! A codec for the GLB (binary glTF 2.0) container format, built for
//! round-trip editing of the embedded JSON scene description: decode a GLB
//! buffer into its JSON metadata and binary resource, swap in edited
//! metadata, and encode a byte-exact, spec-conformant container with the
//! original resource reattached.
//!
//! The codec only handles the container layer. It never interprets the
//! glTF scene semantically, never renders anything, and supports the
//! binary single-BIN-chunk variant of the format only.
//!
//! ## Format Specification
//!
//! ```text
//! GLB Container Format v2
//! =======================
//!
//! Header (12 bytes, little-endian):
//! - Magic: 0x46546C67 ("glTF")       (4 bytes)
//! - Version: 2                       (4 bytes)
//! - Length: total size of the file   (4 bytes)
//!
//! Chunks (each 8-byte header + padded data):
//! - Length: byte length of the chunk data, padding included (4 bytes)
//! - Type:   0x4E4F534A "JSON" or 0x004E4942 "BIN\0"         (4 bytes)
//! - Data:   padded to a 4-byte boundary
//!           (0x20 for the JSON chunk, 0x00 for the BIN chunk)
//!
//! The JSON chunk comes first; the BIN chunk, when the resource is
//! non-empty, follows it directly. An empty resource omits the BIN chunk
//! entirely.
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use glb_container::{decode, encode, Document};
//! use serde_json::json;
//!
//! let mut doc = Document::new(json!({"asset": {"version": "2.0"}}));
//! doc.set_binary(vec![1, 2, 3, 4]);
//!
//! let bytes = encode(&doc).unwrap();
//! let roundtripped = decode(&bytes).unwrap();
//! assert_eq!(roundtripped.json, doc.json);
//! assert_eq!(roundtripped.binary(), doc.binary());
//! ```
//!
//! For an interactive edit flow, [`EditSession`] owns the loaded document
//! and mediates between raw bytes and the JSON text an editor displays:
//!
//! ```rust
//! use glb_container::{encode, Document, EditSession};
//! use serde_json::json;
//!
//! let bytes = encode(&Document::new(json!({"asset": {"version": "2.0"}}))).unwrap();
//!
//! let mut session = EditSession::new();
//! session.load(&bytes, Some("scene.glb")).unwrap();
//! let text = session.json_text().unwrap();
//! // ... user edits `text` ...
//! let export = session.export(&text).unwrap();
//! assert_eq!(export.file_name, "scene.glb");
//! ```

pub mod container;
pub mod document;
pub mod format;
pub mod reader;
pub mod session;
pub mod writer;

// Re-export main types
pub use container::GlbContainer;
pub use document::{Document, GLB_BUFFER_KEY};
pub use format::{ChunkKind, FormatError, GlbHeader, GLB_MAGIC, GLB_VERSION};
pub use reader::{decode, DecodeError, GlbReader, GlbStats};
pub use session::{EditSession, ExportFile, SessionError};
pub use writer::{encode, EncodeError, GlbWriter};
