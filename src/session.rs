// SPDX-License-Identifier: MIT
//! Explicit editing session owned by the caller
//!
//! Holds the single "current document" that UI collaborators (editor
//! surface, file transfer) operate on, instead of a shared global. The
//! session never talks to the UI itself; it only exchanges byte buffers and
//! JSON text.

use crate::document::Document;
use crate::reader::{decode, DecodeError};
use crate::writer::{encode, EncodeError};

/// Fallback file name when the input source did not provide one
pub const DEFAULT_FILE_NAME: &str = "model.glb";

/// Errors surfaced by session operations
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no document loaded")]
    NoDocument,

    #[error("edited text is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// An encoded container ready to hand to the file-transfer collaborator
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub bytes: Vec<u8>,
    pub file_name: String,
}

/// Editing state for one loaded container
#[derive(Debug, Default)]
pub struct EditSession {
    document: Option<Document>,
    file_name: Option<String>,
}

impl EditSession {
    /// Create an idle session with nothing loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `bytes` and make the result the current document
    ///
    /// On failure the previously loaded document (if any) is untouched and
    /// the session stays usable.
    pub fn load(&mut self, bytes: &[u8], file_name: Option<&str>) -> Result<(), DecodeError> {
        let document = decode(bytes)?;
        self.document = Some(document);
        self.file_name = file_name.map(str::to_owned);
        Ok(())
    }

    /// Whether a document is currently loaded
    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }

    /// The current document, if one is loaded
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Pretty-printed metadata text for the editor surface
    pub fn json_text(&self) -> Result<String, SessionError> {
        let document = self.document.as_ref().ok_or(SessionError::NoDocument)?;
        serde_json::to_string_pretty(&document.json)
            .map_err(|e| SessionError::Encode(EncodeError::Json(e)))
    }

    /// Apply edited metadata text and encode the container
    ///
    /// The text is parsed before anything is mutated: if it is not valid
    /// JSON, the current document keeps its previous metadata. On success
    /// the new metadata replaces the old one and the returned bytes carry
    /// the original binary resource unmodified.
    pub fn export(&mut self, edited_json: &str) -> Result<ExportFile, SessionError> {
        let document = self.document.as_mut().ok_or(SessionError::NoDocument)?;

        let json = serde_json::from_str(edited_json).map_err(SessionError::InvalidJson)?;
        document.json = json;

        let bytes = encode(document)?;
        Ok(ExportFile {
            bytes,
            file_name: self
                .file_name
                .clone()
                .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string()),
        })
    }

    /// Drop the current document and return to the idle state
    pub fn clear(&mut self) {
        self.document = None;
        self.file_name = None;
    }
}
