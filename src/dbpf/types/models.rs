//! Core data structures for DBPF format components.
//!
//! This module defines the fundamental types used throughout the library:
//! - Header and version values
//! - Index entry layouts and decoded entries
//! - Records exposed to the caller

use std::fmt;

use crate::dbpf::tgi::Tgi;

/// A (major, minor) version pair as stored in the archive header.
///
/// The two integers are kept separate; composing them into a decimal
/// number is lossy (1.10 would collapse into 1.1). Any textual form is
/// presentation only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Complete parsed header from a DBPF archive.
///
/// Constructed once per parse session from an immutable buffer and never
/// mutated afterwards; re-serializing via [`encode`](crate::dbpf::format::header::encode)
/// takes a value snapshot. Every open builds its own header, there is no
/// shared parse state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub file_version: Version,
    pub user_version: Version,
    pub flags: u32,
    /// Creation time, epoch seconds.
    pub created: u32,
    /// Last update time, epoch seconds.
    pub modified: u32,
    /// Declared index table version. Selects both the entry layout and
    /// which on-disk slot holds the authoritative index offset.
    pub index_version: Version,
    pub index_entry_count: u32,
    /// Byte offset of the index table, already resolved from the
    /// version-dependent slot.
    pub index_offset: u32,
    /// Declared byte size of the index table.
    pub index_size: u32,
    pub hole_entry_count: u32,
    pub hole_offset: u32,
    pub hole_size: u32,
}

impl Header {
    /// Location of the index table as declared by this header.
    pub fn index_table(&self) -> TableLocation {
        TableLocation {
            entry_count: self.index_entry_count,
            offset: self.index_offset,
            size_bytes: self.index_size,
        }
    }

    /// Location of the hole (free-space) table as declared by this header.
    ///
    /// Hole entries are bookkeeping for in-place rewrites and are not
    /// decoded; read access never needs them.
    pub fn hole_table(&self) -> TableLocation {
        TableLocation {
            entry_count: self.hole_entry_count,
            offset: self.hole_offset,
            size_bytes: self.hole_size,
        }
    }

    /// The index entry layout this header declares.
    pub fn entry_layout(&self) -> EntryLayout {
        EntryLayout::for_version(self.index_version)
    }
}

/// Location summary for an on-disk table (index or hole table).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLocation {
    pub entry_count: u32,
    pub offset: u32,
    pub size_bytes: u32,
}

/// On-disk layout of one index entry.
///
/// Resolved once from the header's declared index version, then applied
/// uniformly to every entry in the table. All entries in one archive share
/// the same layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryLayout {
    /// type, group, instance, position, size.
    Basic,
    /// `Basic` plus the extended-instance word.
    ExtendedInstance,
    /// All nine fields, including storage metadata (decompressed size,
    /// compression tag, committed flag).
    Full,
}

impl EntryLayout {
    /// Resolves the layout for a declared index version.
    ///
    /// Minor version 3 carries the full nine-field entries, minor version
    /// 2 adds the extended-instance word to the basic set, and everything
    /// else uses the basic five-field entries.
    pub fn for_version(version: Version) -> Self {
        match version.minor {
            3 => Self::Full,
            2 => Self::ExtendedInstance,
            _ => Self::Basic,
        }
    }

    /// Byte width of one packed entry in this layout.
    ///
    /// Entries are consecutive little-endian words with no padding.
    pub fn entry_width(self) -> usize {
        match self {
            Self::Basic => 20,
            Self::ExtendedInstance => 24,
            Self::Full => 36,
        }
    }
}

/// One decoded index table entry describing a single record.
///
/// Fields absent from the archive's declared layout are zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    pub type_id: u32,
    pub group_id: u32,
    /// High 32 bits of the extended instance id; 0 when the layout has
    /// no extended-instance word.
    pub instance_ex: u32,
    pub instance_id: u32,
    /// Byte offset of the stored payload within the archive.
    pub position: u32,
    /// Byte length of the stored payload, possibly compressed.
    pub size: u32,
    /// Logical payload length; meaningful only when a compression tag
    /// is set.
    pub size_decompressed: u32,
    /// Opaque compression tag, 0 = stored uncompressed. Interpreting the
    /// payload bytes is a separate codec's concern.
    pub compression_type: u16,
    /// Non-zero marks the entry live. Stale entries are still decoded;
    /// filtering them is caller policy.
    pub committed: u16,
}

impl IndexEntry {
    /// The composite key addressing this entry's record.
    pub fn key(&self) -> Tgi {
        Tgi::from_parts(self.type_id, self.group_id, self.instance_id, self.instance_ex)
    }

    /// Whether the entry is marked live.
    pub fn is_committed(&self) -> bool {
        self.committed != 0
    }
}

/// One addressable record: its key, its location, and a view of its
/// stored bytes.
///
/// `raw` borrows from the archive buffer; nothing is copied unless the
/// caller asks for an owned payload (`record.raw.to_vec()`). Records are
/// never mutated and do not outlive the buffer they were cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record<'a> {
    pub key: Tgi,
    /// Byte offset of the payload within the archive.
    pub offset: u32,
    /// Stored payload length in bytes.
    pub length: u32,
    /// Read-only view into the archive buffer.
    pub raw: &'a [u8],
}
