// SPDX-License-Identifier: MIT
//! GLB container reader: bytes in, [`Document`] out

use crate::container::{Chunk, GlbContainer};
use crate::document::Document;
use crate::format::{ChunkKind, FormatError, GlbHeader, GLB_HEADER_SIZE};
use serde::Serialize;

/// Errors that can occur during decoding
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid container: {0}")]
    Format(#[from] FormatError),

    #[error("invalid JSON chunk: {0}")]
    Json(#[from] serde_json::Error),

    #[error("container has no JSON chunk")]
    MissingJsonChunk,
}

/// Reader for GLB containers
pub struct GlbReader {
    container: GlbContainer,
}

impl GlbReader {
    /// Create a reader from borrowed data
    ///
    /// This is the primary constructor for reading GLB files.
    pub fn from_slice(data: &[u8]) -> Result<Self, DecodeError> {
        let container = GlbContainer::from_slice(data)?;
        Ok(Self { container })
    }

    /// Create a reader from owned data
    pub fn from_vec(data: Vec<u8>) -> Result<Self, DecodeError> {
        let container = GlbContainer::from_vec(data)?;
        Ok(Self { container })
    }

    /// Create a reader from a file path
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, DecodeError> {
        Ok(Self {
            container: GlbContainer::from_file(path)?,
        })
    }

    /// Get the container header
    pub fn header(&self) -> &GlbHeader {
        self.container.header()
    }

    /// The padded JSON chunk data (zero-copy)
    ///
    /// The first chunk must be the JSON chunk; anything else is an error.
    pub fn json_chunk(&self) -> Result<&[u8], DecodeError> {
        let chunk = self
            .container
            .chunks()
            .next()
            .ok_or(DecodeError::MissingJsonChunk)??;

        match chunk.header.kind() {
            Some(ChunkKind::Json) => Ok(chunk.data),
            _ => Err(FormatError::JsonChunkNotFirst(chunk.header.tag).into()),
        }
    }

    /// The padded binary chunk data, if a BIN chunk is present (zero-copy)
    ///
    /// Unrecognized chunk types are skipped, as the format requires of
    /// readers. Only the first BIN chunk is returned.
    pub fn bin_chunk(&self) -> Result<Option<&[u8]>, DecodeError> {
        for chunk in self.container.chunks().skip(1) {
            let Chunk { header, data } = chunk?;
            if header.kind() == Some(ChunkKind::Bin) {
                return Ok(Some(data));
            }
        }
        Ok(None)
    }

    /// Parse the JSON chunk into a metadata tree
    ///
    /// `serde_json` tolerates the trailing 0x20 padding as ordinary JSON
    /// whitespace, so the padded chunk data parses directly.
    pub fn json(&self) -> Result<serde_json::Value, DecodeError> {
        Ok(serde_json::from_slice(self.json_chunk()?)?)
    }

    /// Decode the container into an owned [`Document`]
    ///
    /// The binary resource is returned exactly as declared by its chunk
    /// length, which includes any trailing 0x00 padding; the format records
    /// no unpadded length to trim by.
    pub fn into_document(self) -> Result<Document, DecodeError> {
        let mut document = Document::new(self.json()?);
        if let Some(bin) = self.bin_chunk()? {
            if !bin.is_empty() {
                document.set_binary(bin.to_vec());
            }
        }
        Ok(document)
    }

    /// Get container statistics
    pub fn stats(&self) -> Result<GlbStats, DecodeError> {
        Ok(GlbStats {
            total_size: self.container.size(),
            header_size: GLB_HEADER_SIZE,
            json_chunk_size: self.json_chunk()?.len(),
            bin_chunk_size: self.bin_chunk()?.map(<[u8]>::len),
        })
    }
}

/// Container statistics
#[derive(Debug, Clone, Serialize)]
pub struct GlbStats {
    pub total_size: usize,
    pub header_size: usize,
    pub json_chunk_size: usize,
    pub bin_chunk_size: Option<usize>,
}

/// Decode a GLB byte buffer into a [`Document`]
///
/// Fails on a malformed header, truncated or inconsistent chunk lengths, or
/// an invalid JSON chunk; no partial document is returned.
pub fn decode(bytes: &[u8]) -> Result<Document, DecodeError> {
    GlbReader::from_slice(bytes)?.into_document()
}
