// SPDX-License-Identifier: MIT
//! GLB container writer: [`Document`] in, bytes out

use crate::document::Document;
use crate::format::{
    padded_len, ChunkHeader, ChunkKind, GlbHeader, CHUNK_HEADER_SIZE, GLB_HEADER_SIZE,
};

/// Errors that can occur during encoding
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("metadata serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("chunk already added: {0}")]
    DuplicateChunk(&'static str),

    #[error("no JSON metadata added")]
    MissingJson,

    #[error("container size {0} exceeds the format's u32 length field")]
    TooLarge(usize),
}

/// Builder for GLB containers
///
/// Chunks are assembled in the only order the format permits: the JSON
/// chunk first, then the binary chunk if one was added and is non-empty.
pub struct GlbWriter {
    json: Option<serde_json::Value>,
    binary: Option<Vec<u8>>,
}

impl GlbWriter {
    /// Create an empty writer
    pub fn new() -> Self {
        Self {
            json: None,
            binary: None,
        }
    }

    /// Add the scene metadata
    pub fn add_json(&mut self, json: serde_json::Value) -> Result<(), EncodeError> {
        if self.json.is_some() {
            return Err(EncodeError::DuplicateChunk("JSON"));
        }
        self.json = Some(json);
        Ok(())
    }

    /// Parse a JSON text and add it as the scene metadata
    pub fn add_json_text(&mut self, text: &str) -> Result<(), EncodeError> {
        let json = serde_json::from_str(text)?;
        self.add_json(json)
    }

    /// Add the embedded binary resource
    ///
    /// An empty buffer is accepted but produces no BIN chunk, matching the
    /// omission rule of the format.
    pub fn add_binary(&mut self, bytes: Vec<u8>) -> Result<(), EncodeError> {
        if self.binary.is_some() {
            return Err(EncodeError::DuplicateChunk("BIN"));
        }
        self.binary = Some(bytes);
        Ok(())
    }

    /// Finalize the container and return the binary data
    ///
    /// The output is bit-reproducible: compact JSON, space-padded JSON
    /// chunk, null-padded BIN chunk, and a total-length field that equals
    /// the byte length of the returned buffer.
    pub fn finalize(self) -> Result<Vec<u8>, EncodeError> {
        let json = self.json.ok_or(EncodeError::MissingJson)?;

        let mut json_data = serde_json::to_vec(&json)?;
        pad_chunk_data(&mut json_data, ChunkKind::Json);

        let mut total = GLB_HEADER_SIZE + CHUNK_HEADER_SIZE + json_data.len();

        let bin_data = match self.binary {
            Some(bytes) if !bytes.is_empty() => {
                let mut bytes = bytes;
                pad_chunk_data(&mut bytes, ChunkKind::Bin);
                total += CHUNK_HEADER_SIZE + bytes.len();
                Some(bytes)
            }
            _ => None,
        };

        let total_u32 =
            u32::try_from(total).map_err(|_| EncodeError::TooLarge(total))?;

        let mut buffer = Vec::with_capacity(total);
        GlbHeader::new(total_u32).write_to_buffer(&mut buffer);

        ChunkHeader::new(ChunkKind::Json, json_data.len() as u32).write_to_buffer(&mut buffer);
        buffer.extend_from_slice(&json_data);

        if let Some(bin_data) = bin_data {
            ChunkHeader::new(ChunkKind::Bin, bin_data.len() as u32).write_to_buffer(&mut buffer);
            buffer.extend_from_slice(&bin_data);
        }

        debug_assert_eq!(buffer.len(), total);
        Ok(buffer)
    }
}

impl Default for GlbWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Pad chunk data in place to a 4-byte boundary with the kind's pad byte
fn pad_chunk_data(data: &mut Vec<u8>, kind: ChunkKind) {
    data.resize(padded_len(data.len()), kind.pad_byte());
}

/// Encode a [`Document`] into a GLB byte buffer
///
/// All-or-nothing: any failure produces no output, and the document is not
/// mutated.
pub fn encode(document: &Document) -> Result<Vec<u8>, EncodeError> {
    let mut writer = GlbWriter::new();
    writer.add_json(document.json.clone())?;
    if let Some(bin) = document.binary() {
        writer.add_binary(bin.to_vec())?;
    }
    writer.finalize()
}
