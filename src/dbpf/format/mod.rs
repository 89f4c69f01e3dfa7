//! Binary layout layer for DBPF archives.
//!
//! This module provides the codecs that bridge between raw archive bytes
//! and the high-level [`DbpfArchive`](crate::dbpf::DbpfArchive).
//!
//! # Module Organization
//!
//! - [`header`]: Decodes/encodes the fixed 96-byte header block
//! - [`index`]: Decodes/encodes the version-conditional index table
//!
//! # Architecture
//!
//! ```text
//! Archive Structure:
//! ┌─────────────────┐
//! │  Header (96 B)  │ ← header::decode()
//! ├─────────────────┤
//! │  Payload Region │ ← sliced per index entry
//! │  (raw records)  │
//! ├─────────────────┤
//! │  Index Table    │ ← index::decode()
//! │  (layout is     │
//! │   version-      │
//! │   specific)     │
//! └─────────────────┘
//! ```

pub mod header;
pub mod index;

/// Magic identifier at offset 0 of every archive.
pub const MAGIC: [u8; 4] = *b"DBPF";

/// Fixed size of the on-disk header block, in bytes.
pub const HEADER_LEN: usize = 96;
