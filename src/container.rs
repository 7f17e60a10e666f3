// SPDX-License-Identifier: MIT
//! Validated GLB byte buffer with sequential chunk access

use crate::format::{
    ChunkHeader, FormatError, GlbHeader, CHUNK_HEADER_SIZE, GLB_HEADER_SIZE,
};

/// An owned GLB container whose fixed header has been validated
#[derive(Debug)]
pub struct GlbContainer {
    /// Container header (parsed once)
    pub header: GlbHeader,

    /// The full container bytes, header included
    pub data: Vec<u8>,
}

impl GlbContainer {
    /// Create from owned data (takes ownership)
    pub fn from_vec(data: Vec<u8>) -> Result<Self, FormatError> {
        let header = GlbHeader::from_bytes(&data)?;
        header.validate()?;

        // The total-length field must match the buffer exactly; a short
        // buffer is truncation, a long one is trailing garbage.
        if header.length as usize != data.len() {
            return Err(FormatError::LengthMismatch {
                declared: header.length as usize,
                actual: data.len(),
            });
        }

        Ok(Self { header, data })
    }

    /// Create from borrowed data (copies)
    #[inline]
    pub fn from_slice(data: &[u8]) -> Result<Self, FormatError> {
        Self::from_vec(data.to_vec())
    }

    /// Create from a file path (reads the entire file)
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, std::io::Error> {
        let data = std::fs::read(&path)?;
        Self::from_vec(data)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Total size of the container in bytes
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Get header reference
    pub fn header(&self) -> &GlbHeader {
        &self.header
    }

    /// Iterate over the chunk sequence following the header
    pub fn chunks(&self) -> Chunks<'_> {
        Chunks {
            data: &self.data,
            offset: GLB_HEADER_SIZE,
        }
    }
}

/// A chunk within a container: its header plus the padded data slice
#[derive(Debug, Clone, Copy)]
pub struct Chunk<'a> {
    pub header: ChunkHeader,
    pub data: &'a [u8],
}

/// Iterator over the chunks of a [`GlbContainer`]
///
/// Yields an error and stops if a chunk header or its declared data extends
/// past the end of the buffer.
pub struct Chunks<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Result<Chunk<'a>, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.data.len() {
            return None;
        }

        let header = match ChunkHeader::from_bytes(self.data, self.offset) {
            Ok(header) => header,
            Err(e) => {
                self.offset = self.data.len();
                return Some(Err(e));
            }
        };

        let data_start = self.offset + CHUNK_HEADER_SIZE;
        let data_end = match data_start.checked_add(header.length as usize) {
            Some(end) if end <= self.data.len() => end,
            _ => {
                let err = FormatError::Truncated {
                    offset: data_start,
                    needed: header.length as usize,
                    available: self.data.len() - data_start,
                };
                self.offset = self.data.len();
                return Some(Err(err));
            }
        };

        self.offset = data_end;
        Some(Ok(Chunk {
            header,
            data: &self.data[data_start..data_end],
        }))
    }
}
