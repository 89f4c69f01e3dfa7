//! # dbpf-reader
//!
//! A reader for DBPF container archives: a fixed 96-byte header, a
//! version-conditional index table, and independently addressable records
//! identified by (Type, Group, Instance) keys.
//!
//! Parsing operates over one fully loaded, immutable byte buffer; records
//! are borrowed views into it. Payload interpretation (decompression,
//! resource types) is a separate concern — the index only carries an
//! opaque compression tag.
pub mod dbpf;

// Re-export the main types for convenience
pub use dbpf::{
    tgi::Tgi,
    types::{
        error::{DbpfError, Result},
        models::{EntryLayout, Header, IndexEntry, Record, TableLocation, Version},
    },
    DbpfArchive, RecordIter,
};
