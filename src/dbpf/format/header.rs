//! Fixed-size header codec.
//!
//! The header is a 96-byte block: a 4-byte magic followed by little-endian
//! 32-bit words at fixed offsets, with a reserved tail. One field is
//! version sensitive: archives declaring index minor version 3 store the
//! authoritative index offset in a second slot (byte 64) instead of the
//! original slot (byte 40). Reading the wrong slot silently points the
//! index codec at unrelated bytes, so the selection happens here, once.

use byteorder::{ByteOrder, LittleEndian};
use log::{debug, trace};

use super::{HEADER_LEN, MAGIC};
use crate::dbpf::types::error::{DbpfError, Result};
use crate::dbpf::types::models::{Header, Version};

// Byte offsets of the fixed header fields.
const FILE_MAJOR: usize = 4;
const FILE_MINOR: usize = 8;
const USER_MAJOR: usize = 12;
const USER_MINOR: usize = 16;
const FLAGS: usize = 20;
const CREATED: usize = 24;
const MODIFIED: usize = 28;
const INDEX_MAJOR: usize = 32;
const INDEX_ENTRY_COUNT: usize = 36;
const INDEX_OFFSET_V1: usize = 40;
const INDEX_SIZE: usize = 44;
const HOLE_ENTRY_COUNT: usize = 48;
const HOLE_OFFSET: usize = 52;
const HOLE_SIZE: usize = 56;
const INDEX_MINOR: usize = 60;
const INDEX_OFFSET_V2: usize = 64;

/// Index minor version whose archives use the second offset slot.
const V2_OFFSET_MINOR: u32 = 3;

/// Decodes the fixed header block at the start of `buf`.
///
/// # Errors
/// - [`DbpfError::InvalidFormat`] if the magic is not `DBPF`
/// - [`DbpfError::Truncated`] if the buffer is shorter than 96 bytes
pub fn decode(buf: &[u8]) -> Result<Header> {
    if buf.len() < MAGIC.len() || buf[..MAGIC.len()] != MAGIC {
        return Err(DbpfError::InvalidFormat(format!(
            "bad magic: {:?}",
            &buf[..buf.len().min(MAGIC.len())]
        )));
    }
    if buf.len() < HEADER_LEN {
        return Err(DbpfError::Truncated {
            region: "header",
            needed: HEADER_LEN,
            available: buf.len(),
        });
    }

    let word = |offset: usize| LittleEndian::read_u32(&buf[offset..offset + 4]);

    let index_version = Version::new(word(INDEX_MAJOR), word(INDEX_MINOR));

    // The one version-sensitive decision in the header.
    let (index_offset, slot) = if index_version.minor == V2_OFFSET_MINOR {
        (word(INDEX_OFFSET_V2), "v2")
    } else {
        (word(INDEX_OFFSET_V1), "v1")
    };
    debug!(
        "header: index v{}, offset {} resolved from the {} slot",
        index_version, index_offset, slot
    );

    let header = Header {
        file_version: Version::new(word(FILE_MAJOR), word(FILE_MINOR)),
        user_version: Version::new(word(USER_MAJOR), word(USER_MINOR)),
        flags: word(FLAGS),
        created: word(CREATED),
        modified: word(MODIFIED),
        index_version,
        index_entry_count: word(INDEX_ENTRY_COUNT),
        index_offset,
        index_size: word(INDEX_SIZE),
        hole_entry_count: word(HOLE_ENTRY_COUNT),
        hole_offset: word(HOLE_OFFSET),
        hole_size: word(HOLE_SIZE),
    };
    trace!("decoded header: {:?}", header);
    Ok(header)
}

/// Encodes `header` into a fresh 96-byte block.
///
/// The index offset goes into the slot matching the header's index minor
/// version; the unused slot and the reserved tail are written as zero.
/// Decoding the result reproduces `header` field for field.
pub fn encode(header: &Header) -> [u8; HEADER_LEN] {
    let mut buf = [0u8; HEADER_LEN];
    buf[..MAGIC.len()].copy_from_slice(&MAGIC);

    let mut word = |offset: usize, value: u32| {
        LittleEndian::write_u32(&mut buf[offset..offset + 4], value);
    };

    word(FILE_MAJOR, header.file_version.major);
    word(FILE_MINOR, header.file_version.minor);
    word(USER_MAJOR, header.user_version.major);
    word(USER_MINOR, header.user_version.minor);
    word(FLAGS, header.flags);
    word(CREATED, header.created);
    word(MODIFIED, header.modified);
    word(INDEX_MAJOR, header.index_version.major);
    word(INDEX_ENTRY_COUNT, header.index_entry_count);
    word(INDEX_SIZE, header.index_size);
    word(HOLE_ENTRY_COUNT, header.hole_entry_count);
    word(HOLE_OFFSET, header.hole_offset);
    word(HOLE_SIZE, header.hole_size);
    word(INDEX_MINOR, header.index_version.minor);
    if header.index_version.minor == V2_OFFSET_MINOR {
        word(INDEX_OFFSET_V2, header.index_offset);
    } else {
        word(INDEX_OFFSET_V1, header.index_offset);
    }

    buf
}
