// SPDX-License-Identifier: MIT
//! GLB wire format: header and chunk layout constants and codecs

/// GLB magic number, "glTF" read as a little-endian u32
pub const GLB_MAGIC: u32 = 0x4654_6C67;

/// GLB container version supported by this codec
pub const GLB_VERSION: u32 = 2;

/// Fixed header size in bytes (magic + version + total length)
pub const GLB_HEADER_SIZE: usize = 12;

/// Chunk header size in bytes (length + type tag)
pub const CHUNK_HEADER_SIZE: usize = 8;

/// Type tag of the JSON chunk, "JSON" as a little-endian u32
pub const CHUNK_JSON: u32 = 0x4E4F_534A;

/// Type tag of the binary-resource chunk, "BIN\0" as a little-endian u32
pub const CHUNK_BIN: u32 = 0x004E_4942;

/// Errors raised while parsing the fixed header or a chunk header
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("invalid magic: expected 0x46546c67 \"glTF\", got 0x{0:08x}")]
    BadMagic(u32),

    #[error("unsupported GLB version: expected 2, got {0}")]
    UnsupportedVersion(u32),

    #[error("truncated container: needed {needed} bytes at offset {offset}, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("header declares {declared} bytes but buffer is {actual} bytes")]
    LengthMismatch { declared: usize, actual: usize },

    #[error("first chunk must be the JSON chunk, got tag 0x{0:08x}")]
    JsonChunkNotFirst(u32),
}

/// Recognized chunk types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkKind {
    /// Scene/asset metadata, UTF-8 JSON text
    Json,

    /// Embedded binary resource (geometry, images, ...)
    Bin,
}

impl ChunkKind {
    /// Map a wire tag to a recognized chunk kind
    pub fn from_tag(tag: u32) -> Option<Self> {
        match tag {
            CHUNK_JSON => Some(ChunkKind::Json),
            CHUNK_BIN => Some(ChunkKind::Bin),
            _ => None,
        }
    }

    /// The wire tag for this chunk kind
    #[inline]
    pub fn tag(&self) -> u32 {
        match self {
            ChunkKind::Json => CHUNK_JSON,
            ChunkKind::Bin => CHUNK_BIN,
        }
    }

    /// Byte used to pad this chunk's data to a 4-byte boundary
    #[inline]
    pub fn pad_byte(&self) -> u8 {
        match self {
            ChunkKind::Json => 0x20,
            ChunkKind::Bin => 0x00,
        }
    }

    /// Human-readable name for error messages
    pub fn name(&self) -> &'static str {
        match self {
            ChunkKind::Json => "JSON",
            ChunkKind::Bin => "BIN",
        }
    }
}

/// Smallest multiple of 4 that is >= `len`
#[inline]
pub fn padded_len(len: usize) -> usize {
    (len + 3) & !3
}

/// GLB fixed header (12 bytes, little-endian)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlbHeader {
    /// Magic number, always "glTF"
    pub magic: u32,

    /// Container version (currently 2)
    pub version: u32,

    /// Total byte length of header plus all chunks
    pub length: u32,
}

impl GlbHeader {
    /// Create a header with the final total length
    pub fn new(length: u32) -> Self {
        Self {
            magic: GLB_MAGIC,
            version: GLB_VERSION,
            length,
        }
    }

    /// Parse a header from the first 12 bytes of a buffer
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FormatError> {
        if bytes.len() < GLB_HEADER_SIZE {
            return Err(FormatError::Truncated {
                offset: 0,
                needed: GLB_HEADER_SIZE,
                available: bytes.len(),
            });
        }

        let magic = u32::from_le_bytes(bytes[0..4].try_into().unwrap());
        let version = u32::from_le_bytes(bytes[4..8].try_into().unwrap());
        let length = u32::from_le_bytes(bytes[8..12].try_into().unwrap());

        Ok(Self {
            magic,
            version,
            length,
        })
    }

    /// Validate magic and version
    pub fn validate(&self) -> Result<(), FormatError> {
        if self.magic != GLB_MAGIC {
            return Err(FormatError::BadMagic(self.magic));
        }

        if self.version != GLB_VERSION {
            return Err(FormatError::UnsupportedVersion(self.version));
        }

        Ok(())
    }

    /// Append the header to an output buffer
    #[inline]
    pub fn write_to_buffer(&self, buffer: &mut Vec<u8>) {
        buffer.reserve(GLB_HEADER_SIZE);
        buffer.extend_from_slice(&self.magic.to_le_bytes());
        buffer.extend_from_slice(&self.version.to_le_bytes());
        buffer.extend_from_slice(&self.length.to_le_bytes());
    }

    /// Convert to bytes
    pub fn to_bytes(&self) -> [u8; GLB_HEADER_SIZE] {
        let mut bytes = [0u8; GLB_HEADER_SIZE];
        bytes[0..4].copy_from_slice(&self.magic.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.version.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.length.to_le_bytes());
        bytes
    }
}

/// Chunk header (8 bytes, little-endian)
///
/// The tag is kept raw so that unrecognized chunk types can be skipped
/// during decoding instead of rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    /// Byte length of the chunk data (already padded, excludes this header)
    pub length: u32,

    /// Chunk type tag
    pub tag: u32,
}

impl ChunkHeader {
    /// Build a header for a recognized chunk kind
    pub fn new(kind: ChunkKind, length: u32) -> Self {
        Self {
            length,
            tag: kind.tag(),
        }
    }

    /// Parse a chunk header at `offset` within `bytes`
    pub fn from_bytes(bytes: &[u8], offset: usize) -> Result<Self, FormatError> {
        let end = offset
            .checked_add(CHUNK_HEADER_SIZE)
            .filter(|&end| end <= bytes.len())
            .ok_or(FormatError::Truncated {
                offset,
                needed: CHUNK_HEADER_SIZE,
                available: bytes.len().saturating_sub(offset),
            })?;

        let header = &bytes[offset..end];
        Ok(Self {
            length: u32::from_le_bytes(header[0..4].try_into().unwrap()),
            tag: u32::from_le_bytes(header[4..8].try_into().unwrap()),
        })
    }

    /// The recognized kind of this chunk, if any
    #[inline]
    pub fn kind(&self) -> Option<ChunkKind> {
        ChunkKind::from_tag(self.tag)
    }

    /// Append the chunk header to an output buffer
    #[inline]
    pub fn write_to_buffer(&self, buffer: &mut Vec<u8>) {
        buffer.extend_from_slice(&self.length.to_le_bytes());
        buffer.extend_from_slice(&self.tag.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_new_is_valid() {
        let header = GlbHeader::new(48);
        assert!(header.validate().is_ok());
        assert_eq!(header.length, 48);
    }

    #[test]
    fn test_header_roundtrip() {
        let header = GlbHeader::new(1234);
        let parsed = GlbHeader::from_bytes(&header.to_bytes()).unwrap();
        assert_eq!(parsed, header);
    }

    #[test]
    fn test_header_validate_bad_magic() {
        let header = GlbHeader {
            magic: 0xDEAD_BEEF,
            version: GLB_VERSION,
            length: 12,
        };
        assert!(matches!(header.validate(), Err(FormatError::BadMagic(_))));
    }

    #[test]
    fn test_header_validate_bad_version() {
        let header = GlbHeader {
            magic: GLB_MAGIC,
            version: 1,
            length: 12,
        };
        assert!(matches!(
            header.validate(),
            Err(FormatError::UnsupportedVersion(1))
        ));
    }

    #[test]
    fn test_header_from_short_buffer() {
        assert!(matches!(
            GlbHeader::from_bytes(&[0u8; 8]),
            Err(FormatError::Truncated { .. })
        ));
    }

    #[test]
    fn test_padded_len() {
        assert_eq!(padded_len(0), 0);
        assert_eq!(padded_len(1), 4);
        assert_eq!(padded_len(3), 4);
        assert_eq!(padded_len(4), 4);
        assert_eq!(padded_len(27), 28);
        assert_eq!(padded_len(28), 28);
    }

    #[test]
    fn test_chunk_kind_tags() {
        assert_eq!(ChunkKind::Json.tag(), 0x4E4F_534A);
        assert_eq!(ChunkKind::Bin.tag(), 0x004E_4942);
        assert_eq!(ChunkKind::from_tag(CHUNK_JSON), Some(ChunkKind::Json));
        assert_eq!(ChunkKind::from_tag(CHUNK_BIN), Some(ChunkKind::Bin));
        assert_eq!(ChunkKind::from_tag(0x12345678), None);
    }

    #[test]
    fn test_chunk_kind_pad_bytes() {
        assert_eq!(ChunkKind::Json.pad_byte(), b' ');
        assert_eq!(ChunkKind::Bin.pad_byte(), 0x00);
    }

    #[test]
    fn test_chunk_header_roundtrip() {
        let header = ChunkHeader::new(ChunkKind::Json, 28);
        let mut buffer = Vec::new();
        header.write_to_buffer(&mut buffer);
        assert_eq!(buffer.len(), CHUNK_HEADER_SIZE);

        let parsed = ChunkHeader::from_bytes(&buffer, 0).unwrap();
        assert_eq!(parsed, header);
        assert_eq!(parsed.kind(), Some(ChunkKind::Json));
    }

    #[test]
    fn test_chunk_header_truncated() {
        let bytes = [0u8; 10];
        assert!(matches!(
            ChunkHeader::from_bytes(&bytes, 4),
            Err(FormatError::Truncated { .. })
        ));
    }
}
